#![allow(dead_code)]

use tabula_core::{FromRow, Record, Result, Row};
use tabula_store::SqliteDatabase;

/// In-memory database with a seeded `users` table
pub fn setup_users_db() -> SqliteDatabase {
    let db = SqliteDatabase::open_in_memory().expect("Failed to open in-memory database");
    db.connection()
        .execute_batch(
            "CREATE TABLE users (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER,
                active INTEGER NOT NULL DEFAULT 1,
                score REAL
             );
             INSERT INTO users (id, name, age, active, score) VALUES
                (1, 'ada', 36, 1, 9.5),
                (2, 'bob', 41, 0, 7.0),
                (3, 'cyd', 29, 1, NULL),
                (4, 'dee', 41, 1, 8.25);",
        )
        .expect("Failed to seed users");
    db
}

pub struct Users;

impl Record for Users {
    fn table_name(&self) -> &str {
        "users"
    }

    fn primary_key(&self) -> &str {
        "id"
    }

    fn sort_by(&self) -> Option<&str> {
        Some("name")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub active: bool,
    pub score: Option<f64>,
}

impl FromRow for User {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            age: row.get("age")?,
            active: row.get("active")?,
            score: row.get("score")?,
        })
    }
}
