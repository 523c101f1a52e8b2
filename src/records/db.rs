use anyhow::{Error, Result};
use rusqlite::{OptionalExtension, Row};
use tokio_rusqlite::{Connection, params};
use uuid::Uuid;

use super::{
    Baby, CryRecord, FoodItems, GrowthRecord, NewBaby, NewCryRecord, NewGrowthRecord,
    NewNutritionRecord, NewSleepRecord, NewWellnessRecord, NutritionRecord, SleepRecord,
    WellnessRecord,
};

pub const GROWTH_LIMIT: usize = 10;
pub const SLEEP_LIMIT: usize = 10;
pub const CRY_LIMIT: usize = 10;
pub const MEAL_LIMIT: usize = 20;
pub const WELLNESS_LIMIT: usize = 30;

const BABY_COLUMNS: &str = "id, name, birth_date, gender, created_at";
const GROWTH_COLUMNS: &str =
    "id, baby_id, date, weight_kg, height_cm, head_circumference_cm, notes, created_at";
const SLEEP_COLUMNS: &str =
    "id, baby_id, sleep_start, sleep_end, sleep_quality, notes, created_at";
const CRY_COLUMNS: &str =
    "id, baby_id, cry_time, duration_minutes, cry_type, resolution, created_at";
const NUTRITION_COLUMNS: &str =
    "id, baby_id, meal_time, meal_type, amount, food_items, notes, created_at";
const WELLNESS_COLUMNS: &str =
    "id, date, mood_rating, stress_level, notes, affirmation, mindfulness_minutes, created_at";

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn baby_from_row(row: &Row) -> rusqlite::Result<Baby> {
    Ok(Baby {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_date: row.get(2)?,
        gender: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn growth_from_row(row: &Row) -> rusqlite::Result<GrowthRecord> {
    Ok(GrowthRecord {
        id: row.get(0)?,
        baby_id: row.get(1)?,
        date: row.get(2)?,
        weight_kg: row.get(3)?,
        height_cm: row.get(4)?,
        head_circumference_cm: row.get(5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn sleep_from_row(row: &Row) -> rusqlite::Result<SleepRecord> {
    Ok(SleepRecord {
        id: row.get(0)?,
        baby_id: row.get(1)?,
        sleep_start: row.get(2)?,
        sleep_end: row.get(3)?,
        sleep_quality: row.get(4)?,
        notes: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn cry_from_row(row: &Row) -> rusqlite::Result<CryRecord> {
    Ok(CryRecord {
        id: row.get(0)?,
        baby_id: row.get(1)?,
        cry_time: row.get(2)?,
        duration_minutes: row.get(3)?,
        cry_type: row.get(4)?,
        resolution: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn nutrition_from_row(row: &Row) -> rusqlite::Result<NutritionRecord> {
    Ok(NutritionRecord {
        id: row.get(0)?,
        baby_id: row.get(1)?,
        meal_time: row.get(2)?,
        meal_type: row.get(3)?,
        amount: row.get(4)?,
        food_items: row.get::<_, Option<FoodItems>>(5)?.unwrap_or_default(),
        notes: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn wellness_from_row(row: &Row) -> rusqlite::Result<WellnessRecord> {
    Ok(WellnessRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        mood_rating: row.get(2)?,
        stress_level: row.get(3)?,
        notes: row.get(4)?,
        affirmation: row.get(5)?,
        mindfulness_minutes: row.get(6)?,
        created_at: row.get(7)?,
    })
}

// Runs `sql` with the single `id` parameter and maps the first row, if any.
async fn find_one<T, F>(db: &Connection, sql: String, id: String, from_row: F) -> Result<Option<T>>
where
    T: Send + 'static,
    F: FnOnce(&Row) -> rusqlite::Result<T> + Send + 'static,
{
    let found = db
        .call(move |conn| Ok(conn.query_row(&sql, [id], from_row).optional()?))
        .await?;
    Ok(found)
}

// Runs `sql` with the single `id` parameter (if any) and collects every row.
async fn find_all<T>(
    db: &Connection,
    sql: String,
    id: Option<String>,
    from_row: fn(&Row) -> rusqlite::Result<T>,
) -> Result<Vec<T>>
where
    T: Send + 'static,
{
    let rows = db
        .call(move |conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = match id {
                Some(id) => stmt
                    .query_map([id], from_row)?
                    .collect::<rusqlite::Result<Vec<T>>>()?,
                None => stmt
                    .query_map([], from_row)?
                    .collect::<rusqlite::Result<Vec<T>>>()?,
            };
            Ok(rows)
        })
        .await?;
    Ok(rows)
}

pub async fn insert_baby(db: &Connection, baby: NewBaby) -> Result<Baby, Error> {
    let id = new_id();
    let baby_id = id.clone();
    db.call(move |conn| {
        conn.execute(
            "INSERT INTO baby (id, name, birth_date, gender) VALUES (?, ?, ?, ?)",
            params![baby_id, baby.name.trim(), baby.birth_date, baby.gender],
        )?;
        Ok(())
    })
    .await?;

    tracing::debug!("Created baby profile {}", id);
    find_baby(db, &id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Baby {} missing after insert", id))
}

pub async fn find_baby(db: &Connection, id: &str) -> Result<Option<Baby>, Error> {
    let sql = format!("SELECT {} FROM baby WHERE id = ?", BABY_COLUMNS);
    find_one(db, sql, id.to_owned(), baby_from_row).await
}

/// Every baby profile, newest first.
pub async fn list_babies(db: &Connection) -> Result<Vec<Baby>, Error> {
    let sql = format!(
        "SELECT {} FROM baby ORDER BY created_at DESC, rowid DESC",
        BABY_COLUMNS
    );
    find_all(db, sql, None, baby_from_row).await
}

pub async fn insert_growth_record(
    db: &Connection,
    baby_id: &str,
    record: NewGrowthRecord,
) -> Result<GrowthRecord, Error> {
    let id = new_id();
    let params_id = id.clone();
    let baby_id = baby_id.to_owned();
    let date = record.date_or_today();
    db.call(move |conn| {
        conn.execute(
            r#"
            INSERT INTO growth_record
            (id, baby_id, date, weight_kg, height_cm, head_circumference_cm, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                params_id,
                baby_id,
                date,
                record.weight_kg,
                record.height_cm,
                record.head_circumference_cm,
                record.notes
            ],
        )?;
        Ok(())
    })
    .await?;

    let sql = format!("SELECT {} FROM growth_record WHERE id = ?", GROWTH_COLUMNS);
    find_one(db, sql, id.clone(), growth_from_row)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Growth record {} missing after insert", id))
}

/// Most recent measurements first.
pub async fn list_growth_records(db: &Connection, baby_id: &str) -> Result<Vec<GrowthRecord>, Error> {
    let sql = format!(
        "SELECT {} FROM growth_record WHERE baby_id = ? ORDER BY date DESC, created_at DESC, rowid DESC LIMIT {}",
        GROWTH_COLUMNS, GROWTH_LIMIT
    );
    find_all(db, sql, Some(baby_id.to_owned()), growth_from_row).await
}

pub async fn insert_sleep_record(
    db: &Connection,
    baby_id: &str,
    record: NewSleepRecord,
) -> Result<SleepRecord, Error> {
    let id = new_id();
    let params_id = id.clone();
    let baby_id = baby_id.to_owned();
    db.call(move |conn| {
        conn.execute(
            r#"
            INSERT INTO sleep_record (id, baby_id, sleep_start, sleep_end, sleep_quality, notes)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                params_id,
                baby_id,
                record.sleep_start,
                record.sleep_end,
                record.sleep_quality,
                record.notes
            ],
        )?;
        Ok(())
    })
    .await?;

    let sql = format!("SELECT {} FROM sleep_record WHERE id = ?", SLEEP_COLUMNS);
    find_one(db, sql, id.clone(), sleep_from_row)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Sleep record {} missing after insert", id))
}

pub async fn list_sleep_records(db: &Connection, baby_id: &str) -> Result<Vec<SleepRecord>, Error> {
    let sql = format!(
        "SELECT {} FROM sleep_record WHERE baby_id = ? ORDER BY sleep_start DESC, rowid DESC LIMIT {}",
        SLEEP_COLUMNS, SLEEP_LIMIT
    );
    find_all(db, sql, Some(baby_id.to_owned()), sleep_from_row).await
}

pub async fn insert_cry_record(
    db: &Connection,
    baby_id: &str,
    record: NewCryRecord,
) -> Result<CryRecord, Error> {
    let id = new_id();
    let params_id = id.clone();
    let baby_id = baby_id.to_owned();
    let cry_time = record.cry_time_or_now();
    db.call(move |conn| {
        conn.execute(
            r#"
            INSERT INTO cry_record (id, baby_id, cry_time, duration_minutes, cry_type, resolution)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                params_id,
                baby_id,
                cry_time,
                record.duration_minutes,
                record.cry_type,
                record.resolution
            ],
        )?;
        Ok(())
    })
    .await?;

    let sql = format!("SELECT {} FROM cry_record WHERE id = ?", CRY_COLUMNS);
    find_one(db, sql, id.clone(), cry_from_row)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Cry record {} missing after insert", id))
}

pub async fn list_cry_records(db: &Connection, baby_id: &str) -> Result<Vec<CryRecord>, Error> {
    let sql = format!(
        "SELECT {} FROM cry_record WHERE baby_id = ? ORDER BY cry_time DESC, rowid DESC LIMIT {}",
        CRY_COLUMNS, CRY_LIMIT
    );
    find_all(db, sql, Some(baby_id.to_owned()), cry_from_row).await
}

pub async fn insert_nutrition_record(
    db: &Connection,
    baby_id: &str,
    record: NewNutritionRecord,
) -> Result<NutritionRecord, Error> {
    let id = new_id();
    let params_id = id.clone();
    let baby_id = baby_id.to_owned();
    let meal_time = record.meal_time_or_now();
    let food_items = FoodItems::new(&record.food_items);
    // Meals logged without food keep the column empty
    let food_items = (!food_items.is_empty()).then_some(food_items);
    db.call(move |conn| {
        conn.execute(
            r#"
            INSERT INTO nutrition_record (id, baby_id, meal_time, meal_type, amount, food_items, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                params_id,
                baby_id,
                meal_time,
                record.meal_type,
                record.amount,
                food_items,
                record.notes
            ],
        )?;
        Ok(())
    })
    .await?;

    let sql = format!("SELECT {} FROM nutrition_record WHERE id = ?", NUTRITION_COLUMNS);
    find_one(db, sql, id.clone(), nutrition_from_row)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Nutrition record {} missing after insert", id))
}

pub async fn list_nutrition_records(
    db: &Connection,
    baby_id: &str,
) -> Result<Vec<NutritionRecord>, Error> {
    let sql = format!(
        "SELECT {} FROM nutrition_record WHERE baby_id = ? ORDER BY meal_time DESC, rowid DESC LIMIT {}",
        NUTRITION_COLUMNS, MEAL_LIMIT
    );
    find_all(db, sql, Some(baby_id.to_owned()), nutrition_from_row).await
}

pub async fn insert_wellness_record(
    db: &Connection,
    record: NewWellnessRecord,
) -> Result<WellnessRecord, Error> {
    let id = new_id();
    let params_id = id.clone();
    let date = record.date_or_today();
    let affirmation = record.affirmation_or_daily();
    db.call(move |conn| {
        conn.execute(
            r#"
            INSERT INTO wellness_record
            (id, date, mood_rating, stress_level, notes, affirmation, mindfulness_minutes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                params_id,
                date,
                record.mood_rating,
                record.stress_level,
                record.notes,
                affirmation,
                record.mindfulness_minutes
            ],
        )?;
        Ok(())
    })
    .await?;

    let sql = format!("SELECT {} FROM wellness_record WHERE id = ?", WELLNESS_COLUMNS);
    find_one(db, sql, id.clone(), wellness_from_row)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Wellness record {} missing after insert", id))
}

pub async fn list_wellness_records(db: &Connection) -> Result<Vec<WellnessRecord>, Error> {
    let sql = format!(
        "SELECT {} FROM wellness_record ORDER BY date DESC, created_at DESC, rowid DESC LIMIT {}",
        WELLNESS_COLUMNS, WELLNESS_LIMIT
    );
    find_all(db, sql, None, wellness_from_row).await
}
