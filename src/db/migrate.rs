use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the key-value table holding the campaign snapshot.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT
        );
        "#,
    )?;
    Ok(())
}

type Migration = fn(&Connection) -> Result<()>;

/// Ordered list of (version, description, step).
const MIGRATIONS: &[(&str, &str, Migration)] = &[(
    "20261019_0001_create_kv_store",
    "Created kv table for the campaign snapshot",
    create_kv_table,
)];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Returns the versions applied by this call (empty when already up to date).
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for &(version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            params![version, message],
        )?;

        tracing::info!(version, "migration applied");
        applied.push(version);
    }

    Ok(applied)
}
