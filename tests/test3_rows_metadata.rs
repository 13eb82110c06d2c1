#![cfg(feature = "test-utils")]

use pg_adapter::prelude::*;
use pg_adapter::test_utils::{setup_postgres_embedded, stop_postgres_embedded};
use tokio::runtime::Runtime;

#[test]
fn test3_column_metadata_and_cursor_release() -> Result<(), Box<dyn std::error::Error>> {
    let pg = setup_postgres_embedded("adapter_test3")?;
    let pool = Pool::new(pg.config.clone())?;

    let rt = Runtime::new()?;
    rt.block_on(async {
        let client = pool.get().await?;
        client
            .batch_execute(
                "CREATE TABLE events (
                    id BIGINT PRIMARY KEY,
                    label TEXT NOT NULL,
                    active BOOLEAN NOT NULL DEFAULT TRUE,
                    at TIMESTAMP
                );
                INSERT INTO events (id, label, at)
                SELECT g, 'event-' || g, now()::timestamp
                FROM generate_series(1, 100) AS g;",
            )
            .await?;

        // Exactly one type entry per column, positionally matching the
        // driver's report.
        let rows = client
            .query("SELECT id, label, active, at FROM events", &[])
            .await?;
        let types = rows.column_types();
        assert_eq!(types.len(), 4);
        assert_eq!(types[0], Type::INT8);
        assert_eq!(types[1], Type::TEXT);
        assert_eq!(types[2], Type::BOOL);
        assert_eq!(types[3], Type::TIMESTAMP);
        assert_eq!(rows.columns(), vec!["id", "label", "active", "at"]);
        drop(rows);

        // Metadata survives an empty result.
        let mut rows = client
            .query("SELECT id, label, active, at FROM events WHERE id < 0", &[])
            .await?;
        assert_eq!(rows.column_types().len(), 4);
        assert_eq!(rows.columns().len(), 4);
        assert!(rows.next().await?.is_none());
        drop(rows);

        // Dropping a part-read cursor releases the connection for further work.
        let mut rows = client.query("SELECT id FROM events ORDER BY id", &[]).await?;
        assert_eq!(rows.next().await?.expect("row").try_get::<_, i64>(0)?, 1);
        assert_eq!(rows.next().await?.expect("row").try_get::<_, i64>(0)?, 2);
        drop(rows);
        let row = client.query_row("SELECT count(*) FROM events", &[]).await?;
        assert_eq!(row.try_get::<_, i64>(0)?, 100);

        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    stop_postgres_embedded(pg);
    Ok(())
}
