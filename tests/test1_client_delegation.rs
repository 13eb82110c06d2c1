#![cfg(feature = "test-utils")]

use chrono::{NaiveDate, NaiveDateTime};
use pg_adapter::prelude::*;
use pg_adapter::test_utils::{setup_postgres_embedded, stop_postgres_embedded};
use tokio::runtime::Runtime;

#[test]
fn test1_execute_and_query_delegation() -> Result<(), Box<dyn std::error::Error>> {
    let pg = setup_postgres_embedded("adapter_test1")?;
    let pool = Pool::new(pg.config.clone())?;

    let rt = Runtime::new()?;
    rt.block_on(async {
        let client = pool.get().await?;

        client
            .batch_execute(
                "CREATE TABLE people (
                    id BIGINT PRIMARY KEY,
                    name TEXT NOT NULL,
                    score DOUBLE PRECISION,
                    joined TIMESTAMP,
                    meta JSONB
                );",
            )
            .await?;

        let joined: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let meta = serde_json::json!({"tier": "gold"});

        let inserted = client
            .execute(
                "INSERT INTO people (id, name, score, joined, meta) VALUES ($1, $2, $3, $4, $5)",
                &[&1i64, &"alice", &9.5f64, &joined, &meta],
            )
            .await?;
        assert_eq!(inserted, 1);
        let inserted = client
            .execute(
                "INSERT INTO people (id, name) VALUES ($1, $2)",
                &[&2i64, &"bob"],
            )
            .await?;
        assert_eq!(inserted, 1);

        // Values come back exactly as the driver reports them.
        let mut rows = client
            .query(
                "SELECT id, name, score, joined, meta FROM people ORDER BY id",
                &[],
            )
            .await?;
        assert_eq!(rows.columns(), vec!["id", "name", "score", "joined", "meta"]);

        let row = rows.next().await?.expect("first row");
        assert_eq!(row.len(), 5);
        assert_eq!(row.try_get::<_, i64>(0)?, 1);
        assert_eq!(row.try_get::<_, &str>("name")?, "alice");
        assert_eq!(row.try_get::<_, f64>("score")?, 9.5);
        assert_eq!(row.try_get::<_, NaiveDateTime>("joined")?, joined);
        assert_eq!(row.try_get::<_, serde_json::Value>("meta")?, meta);

        let row = rows.next().await?.expect("second row");
        assert_eq!(row.try_get::<_, &str>("name")?, "bob");
        assert_eq!(row.try_get::<_, Option<f64>>("score")?, None);

        assert!(rows.next().await?.is_none());
        // The cursor stays finished once exhausted.
        assert!(rows.next().await?.is_none());
        assert_eq!(rows.rows_affected(), Some(2));

        // Driver errors pass through with their message intact.
        let err = client
            .execute("SELECT * FROM no_such_table", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, PgAdapterError::PostgresError(_)));
        assert!(err.to_string().contains("no_such_table"));

        // Prepared statement path.
        let prepared = client.prepare("SELECT name FROM people WHERE id = $1").await?;
        assert_eq!(prepared.sql(), "SELECT name FROM people WHERE id = $1");
        assert_eq!(prepared.params().len(), 1);
        assert_eq!(prepared.params()[0], Type::INT8);
        let mut rows = client.query_prepared(&prepared, &[&2i64]).await?;
        let row = rows.next().await?.expect("row");
        assert_eq!(row.try_get::<_, &str>(0)?, "bob");
        assert_eq!(client.execute_prepared(&prepared, &[&1i64]).await?, 1);

        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    stop_postgres_embedded(pg);
    Ok(())
}
