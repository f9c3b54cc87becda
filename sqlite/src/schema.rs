//! DDL for the `todos` table.

/// `AUTOINCREMENT` keeps ids from being reused after a delete. `SQLite` ignores
/// the declared `VARCHAR` width, so the length limit lives in the `CHECK`.
pub(crate) const CREATE_TODOS: &str = r"
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(500) NOT NULL CHECK (length(title) BETWEEN 1 AND 500),
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
";
