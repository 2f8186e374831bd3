use crate::Database;
use crate::models::{SharedNotesRow, UserRow};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

impl Database {
    // -- Users --

    pub fn create_user(&self, id: &str, username: &str, email: &str, password_hash: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, username, email, password) VALUES (?1, ?2, ?3, ?4)",
                (id, username, email, password_hash),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "email", email))
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "id", id))
    }

    // -- Shared notes --

    /// Append a note id to the user's shared list, creating the record on
    /// first use. A single upsert statement, so concurrent appends cannot
    /// lose each other's writes. `name` is only stored on creation; the
    /// conflict arm leaves the captured owner name untouched.
    pub fn add_shared_note(&self, user_id: &str, name: &str, note_id: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO shared_notes (user_id, name, note_ids)
                 VALUES (?1, ?2, json_array(?3))
                 ON CONFLICT(user_id) DO UPDATE SET
                     note_ids = json_insert(note_ids, '$[#]', ?3),
                     updated_at = datetime('now')",
                (user_id, name, note_id),
            )?;
            Ok(())
        })
    }

    pub fn get_shared_notes(&self, user_id: &str) -> Result<Option<SharedNotesRow>> {
        self.with_conn(|conn| {
            let row = conn
                .prepare(
                    "SELECT user_id, name, note_ids, created_at, updated_at
                     FROM shared_notes WHERE user_id = ?1",
                )?
                .query_row([user_id], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                })
                .optional()?;

            match row {
                None => Ok(None),
                Some((user_id, name, note_ids, created_at, updated_at)) => Ok(Some(SharedNotesRow {
                    user_id,
                    name,
                    note_ids: serde_json::from_str(&note_ids)?,
                    created_at,
                    updated_at,
                })),
            }
        })
    }

    /// Remove every occurrence of `note_id` from the user's shared list.
    /// Rewrites the array in one UPDATE via json_each, so duplicates go in
    /// the same statement. Returns the number of rows touched — 0 means the
    /// user has no shared-notes record, which callers treat as a no-op.
    pub fn remove_shared_note(&self, user_id: &str, note_id: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE shared_notes
                 SET note_ids = (SELECT json_group_array(value)
                                 FROM json_each(shared_notes.note_ids)
                                 WHERE value <> ?2),
                     updated_at = datetime('now')
                 WHERE user_id = ?1",
                (user_id, note_id),
            )?;
            Ok(changed)
        })
    }
}

fn query_user(conn: &Connection, column: &str, value: &str) -> Result<Option<UserRow>> {
    let sql = format!(
        "SELECT id, username, email, password, created_at FROM users WHERE {} = ?1",
        column
    );
    let mut stmt = conn.prepare(&sql)?;

    let row = stmt
        .query_row([value], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}
