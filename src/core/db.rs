use std::path::Path;

use rusqlite::Connection as SyncConnection;
use tokio_rusqlite::Connection;

const DB_FILE_NAME: &str = "snuggles.db";

/// Opens the database file inside the `db_path` directory.
pub async fn async_db(db_path: &str) -> Result<Connection, tokio_rusqlite::Error> {
    let db_file = Path::new(db_path).join(DB_FILE_NAME);
    let db = Connection::open(db_file).await?;
    db.call(|conn| {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(())
    })
    .await?;
    Ok(db)
}

/// Creates any missing tables. Safe to run against an existing db.
pub fn initialize_db(conn: &mut SyncConnection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS baby (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            birth_date TEXT NOT NULL,
            gender TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS growth_record (
            id TEXT PRIMARY KEY,
            baby_id TEXT NOT NULL REFERENCES baby(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            weight_kg REAL,
            height_cm REAL,
            head_circumference_cm REAL,
            notes TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS sleep_record (
            id TEXT PRIMARY KEY,
            baby_id TEXT NOT NULL REFERENCES baby(id) ON DELETE CASCADE,
            sleep_start TEXT NOT NULL,
            sleep_end TEXT,
            sleep_quality TEXT,
            notes TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS cry_record (
            id TEXT PRIMARY KEY,
            baby_id TEXT NOT NULL REFERENCES baby(id) ON DELETE CASCADE,
            cry_time TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL,
            cry_type TEXT NOT NULL,
            resolution TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS nutrition_record (
            id TEXT PRIMARY KEY,
            baby_id TEXT NOT NULL REFERENCES baby(id) ON DELETE CASCADE,
            meal_time TEXT NOT NULL,
            meal_type TEXT NOT NULL,
            amount TEXT,
            food_items TEXT,
            notes TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS wellness_record (
            id TEXT PRIMARY KEY,
            date TEXT NOT NULL,
            mood_rating INTEGER,
            stress_level INTEGER,
            notes TEXT,
            affirmation TEXT,
            mindfulness_minutes INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_growth_record_baby ON growth_record(baby_id, date);
        CREATE INDEX IF NOT EXISTS idx_sleep_record_baby ON sleep_record(baby_id, sleep_start);
        CREATE INDEX IF NOT EXISTS idx_cry_record_baby ON cry_record(baby_id, cry_time);
        CREATE INDEX IF NOT EXISTS idx_nutrition_record_baby ON nutrition_record(baby_id, meal_time);
        "#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_db_is_repeatable() {
        let mut conn = SyncConnection::open_in_memory().unwrap();
        initialize_db(&mut conn).unwrap();
        initialize_db(&mut conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 6);
    }
}
