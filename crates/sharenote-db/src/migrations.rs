use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            username    TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- One row per user. `name` is the owner's display name captured on
        -- first add; it is not re-synced with later username changes.
        -- `note_ids` is a JSON array of strings, insertion order preserved.
        CREATE TABLE IF NOT EXISTS shared_notes (
            user_id     TEXT PRIMARY KEY REFERENCES users(id),
            name        TEXT NOT NULL,
            note_ids    TEXT NOT NULL DEFAULT '[]',
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
