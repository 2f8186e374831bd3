/// Database row types — these map directly to SQLite rows.
/// Distinct from the sharenote-types API models to keep the DB layer
/// independent.

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
}

pub struct SharedNotesRow {
    pub user_id: String,
    pub name: String,
    pub note_ids: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}
