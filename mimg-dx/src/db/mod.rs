//! Patient and diagnosis storage
//!
//! Handlers only see the repository traits. SQLite backs both when
//! persistence is enabled; with `NO_DB=true` patients live in memory and
//! diagnoses are returned without being stored.

pub mod diagnoses;
pub mod patients;

pub use diagnoses::{DiagnosisRepository, SqliteDiagnosisRepository};
pub use patients::{InMemoryPatientRepository, PatientRepository, SqlitePatientRepository};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use mimg_common::{Error, Result};
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool
///
/// Creates the database file (and parent directory) when missing.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;
    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the patients and diagnoses tables if they don't exist
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS patients (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            history TEXT NOT NULL DEFAULT '',
            visit_date TEXT NOT NULL,
            patient_index TEXT NOT NULL,
            biopsy_confirmed INTEGER NOT NULL DEFAULT 0,
            doctor TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS diagnoses (
            id TEXT PRIMARY KEY,
            patient_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            image_url TEXT NOT NULL,
            results TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_diagnoses_patient ON diagnoses(patient_id)")
        .execute(pool)
        .await?;

    tracing::info!("Database tables initialized (patients, diagnoses)");

    Ok(())
}

/// Current time at the precision the tables store
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width UTC timestamp so that text ordering matches time ordering
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Internal(format!("Failed to parse {}: {}", field, e)))
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // One connection so every query sees the same in-memory database
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    init_tables(&pool).await.expect("Failed to initialize tables");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_round_trip_and_ordering() {
        let early = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();

        let early_text = format_timestamp(&early);
        assert!(early_text.ends_with('Z'));
        assert!(early_text < format_timestamp(&late));
        assert_eq!(parse_timestamp(&early_text, "created_at").unwrap(), early);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday", "created_at"),
            Err(Error::Internal(_))
        ));
    }

    #[tokio::test]
    async fn test_init_database_pool_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("mimg.db");

        let pool = init_database_pool(&db_path).await.unwrap();
        assert!(db_path.exists());

        // Idempotent on an existing database
        init_tables(&pool).await.unwrap();
    }
}
