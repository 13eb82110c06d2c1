//! Shared delegation bodies for [`crate::Client`] and [`crate::Tx`].
//!
//! Both wrappers forward to the same driver surface; `GenericClient` keeps
//! the forwarding written once.

use std::sync::Arc;

use tokio_postgres::types::ToSql;
use tokio_postgres::{GenericClient, Statement};

use crate::error::PgAdapterError;
use crate::rows::{Row, Rows};
use crate::statement::Prepared;

pub(crate) async fn prepare<C>(client: &C, sql: &str) -> Result<Prepared, PgAdapterError>
where
    C: GenericClient,
{
    let stmt = client.prepare(sql).await?;
    Ok(Prepared::new(stmt, Arc::new(sql.to_owned())))
}

pub(crate) async fn execute<C>(
    client: &C,
    sql: &str,
    params: &[&(dyn ToSql + Sync)],
) -> Result<u64, PgAdapterError>
where
    C: GenericClient,
{
    Ok(client.execute(sql, params).await?)
}

pub(crate) async fn query<C>(
    client: &C,
    sql: &str,
    params: &[&(dyn ToSql + Sync)],
) -> Result<Rows, PgAdapterError>
where
    C: GenericClient,
{
    let stmt = client.prepare(sql).await?;
    query_statement(client, &stmt, params).await
}

pub(crate) async fn query_statement<C>(
    client: &C,
    stmt: &Statement,
    params: &[&(dyn ToSql + Sync)],
) -> Result<Rows, PgAdapterError>
where
    C: GenericClient,
{
    let stream = client.query_raw(stmt, params.iter().copied()).await?;
    Ok(Rows::new(stmt.clone(), stream))
}

pub(crate) async fn query_row<C>(
    client: &C,
    sql: &str,
    params: &[&(dyn ToSql + Sync)],
) -> Result<Row, PgAdapterError>
where
    C: GenericClient,
{
    Ok(Row::new(client.query_one(sql, params).await?))
}

pub(crate) async fn query_opt<C>(
    client: &C,
    sql: &str,
    params: &[&(dyn ToSql + Sync)],
) -> Result<Option<Row>, PgAdapterError>
where
    C: GenericClient,
{
    Ok(client.query_opt(sql, params).await?.map(Row::new))
}

pub(crate) async fn batch_execute<C>(client: &C, sql: &str) -> Result<(), PgAdapterError>
where
    C: GenericClient,
{
    Ok(client.batch_execute(sql).await?)
}
