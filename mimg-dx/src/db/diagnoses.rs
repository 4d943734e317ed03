//! Diagnosis history
//!
//! Findings are stored as a JSON column so the record keeps the exact
//! shape returned to the frontend.

use async_trait::async_trait;
use mimg_common::models::{DiagnosisFindings, DiagnosisResult, DiagnosisType};
use mimg_common::{Error, Result};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::{format_timestamp, now, parse_timestamp};

#[async_trait]
pub trait DiagnosisRepository: Send + Sync {
    /// Store a new diagnosis, assigning its id and timestamps
    async fn save(&self, diagnosis: DiagnosisResult) -> Result<DiagnosisResult>;

    async fn get(&self, id: &str) -> Result<DiagnosisResult>;

    /// Diagnoses of one patient, newest first
    async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<DiagnosisResult>>;

    async fn delete(&self, id: &str) -> Result<()>;
}

pub struct SqliteDiagnosisRepository {
    pool: SqlitePool,
}

impl SqliteDiagnosisRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn parse_kind(kind: &str) -> Result<DiagnosisType> {
    match kind {
        "oral" => Ok(DiagnosisType::Oral),
        "oral-deep" => Ok(DiagnosisType::OralDeep),
        other => Err(Error::Internal(format!("Unknown diagnosis type: {}", other))),
    }
}

fn diagnosis_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<DiagnosisResult> {
    let kind: String = row.get("kind");
    let results: String = row.get("results");
    let results: DiagnosisFindings = serde_json::from_str(&results)?;
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(DiagnosisResult {
        id: Some(row.get("id")),
        patient_id: row.get("patient_id"),
        kind: parse_kind(&kind)?,
        image_url: row.get("image_url"),
        results,
        created_at: Some(parse_timestamp(&created_at, "created_at")?),
        updated_at: Some(parse_timestamp(&updated_at, "updated_at")?),
    })
}

const SELECT_DIAGNOSIS: &str = r#"
    SELECT id, patient_id, kind, image_url, results, created_at, updated_at
    FROM diagnoses
"#;

#[async_trait]
impl DiagnosisRepository for SqliteDiagnosisRepository {
    async fn save(&self, mut diagnosis: DiagnosisResult) -> Result<DiagnosisResult> {
        let timestamp = now();
        let id = Uuid::new_v4().simple().to_string();
        let results = serde_json::to_string(&diagnosis.results)?;

        sqlx::query(
            r#"
            INSERT INTO diagnoses (id, patient_id, kind, image_url, results, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&diagnosis.patient_id)
        .bind(diagnosis.kind.as_str())
        .bind(&diagnosis.image_url)
        .bind(&results)
        .bind(format_timestamp(&timestamp))
        .bind(format_timestamp(&timestamp))
        .execute(&self.pool)
        .await?;

        diagnosis.id = Some(id);
        diagnosis.created_at = Some(timestamp);
        diagnosis.updated_at = Some(timestamp);
        Ok(diagnosis)
    }

    async fn get(&self, id: &str) -> Result<DiagnosisResult> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_DIAGNOSIS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => diagnosis_from_row(&row),
            None => Err(Error::not_found("Diagnosis", id)),
        }
    }

    async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<DiagnosisResult>> {
        let rows = sqlx::query(&format!(
            "{} WHERE patient_id = ? ORDER BY created_at DESC, id DESC",
            SELECT_DIAGNOSIS
        ))
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(diagnosis_from_row).collect()
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM diagnoses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("Diagnosis", id));
        }
        Ok(())
    }
}
