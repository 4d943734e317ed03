//! Patient repository
//!
//! Two implementations behind one trait: an in-memory map for the
//! no-persistence mode and a SQLite table otherwise.

use async_trait::async_trait;
use mimg_common::models::{CreatePatientRequest, Patient, UpdatePatientRequest};
use mimg_common::{Error, Result};
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{format_timestamp, now, parse_timestamp};

#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// All patients, newest first
    async fn list(&self) -> Result<Vec<Patient>>;

    async fn get(&self, id: &str) -> Result<Patient>;

    async fn create(&self, request: CreatePatientRequest) -> Result<Patient>;

    async fn update(&self, id: &str, update: UpdatePatientRequest) -> Result<Patient>;

    async fn delete(&self, id: &str) -> Result<()>;
}

fn validate(request: &CreatePatientRequest) -> Result<()> {
    if request.name.trim().is_empty() {
        return Err(Error::invalid("Patient name is required"));
    }
    Ok(())
}

fn newest_first(patients: &mut [Patient]) {
    patients.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Patient store used when persistence is disabled
#[derive(Default)]
pub struct InMemoryPatientRepository {
    patients: RwLock<HashMap<String, Patient>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn list(&self) -> Result<Vec<Patient>> {
        let mut patients: Vec<Patient> = self.patients.read().await.values().cloned().collect();
        newest_first(&mut patients);
        Ok(patients)
    }

    async fn get(&self, id: &str) -> Result<Patient> {
        self.patients
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found("Patient", id))
    }

    async fn create(&self, request: CreatePatientRequest) -> Result<Patient> {
        validate(&request)?;
        let patient = Patient::from_request(request, now());
        self.patients
            .write()
            .await
            .insert(patient.id.clone(), patient.clone());
        Ok(patient)
    }

    async fn update(&self, id: &str, update: UpdatePatientRequest) -> Result<Patient> {
        let mut patients = self.patients.write().await;
        let patient = patients.get_mut(id).ok_or_else(|| Error::not_found("Patient", id))?;
        patient.apply(update, now());
        Ok(patient.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.patients
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found("Patient", id))
    }
}

/// SQLite-backed patient store
pub struct SqlitePatientRepository {
    pool: SqlitePool,
}

impl SqlitePatientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn save(&self, patient: &Patient) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO patients (
                id, name, history, visit_date, patient_index,
                biopsy_confirmed, doctor, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                history = excluded.history,
                biopsy_confirmed = excluded.biopsy_confirmed,
                doctor = excluded.doctor,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&patient.id)
        .bind(&patient.name)
        .bind(&patient.history)
        .bind(&patient.date)
        .bind(&patient.index)
        .bind(patient.biopsy_confirmed)
        .bind(&patient.doctor)
        .bind(format_timestamp(&patient.created_at))
        .bind(format_timestamp(&patient.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

const SELECT_PATIENT: &str = r#"
    SELECT id, name, history, visit_date, patient_index,
           biopsy_confirmed, doctor, created_at, updated_at
    FROM patients
"#;

fn patient_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Patient> {
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(Patient {
        id: row.get("id"),
        name: row.get("name"),
        history: row.get("history"),
        date: row.get("visit_date"),
        index: row.get("patient_index"),
        biopsy_confirmed: row.get("biopsy_confirmed"),
        doctor: row.get("doctor"),
        created_at: parse_timestamp(&created_at, "created_at")?,
        updated_at: parse_timestamp(&updated_at, "updated_at")?,
    })
}

#[async_trait]
impl PatientRepository for SqlitePatientRepository {
    async fn list(&self) -> Result<Vec<Patient>> {
        let rows = sqlx::query(&format!("{} ORDER BY created_at DESC, id DESC", SELECT_PATIENT))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(patient_from_row).collect()
    }

    async fn get(&self, id: &str) -> Result<Patient> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_PATIENT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => patient_from_row(&row),
            None => Err(Error::not_found("Patient", id)),
        }
    }

    async fn create(&self, request: CreatePatientRequest) -> Result<Patient> {
        validate(&request)?;
        let patient = Patient::from_request(request, now());
        self.save(&patient).await?;
        Ok(patient)
    }

    async fn update(&self, id: &str, update: UpdatePatientRequest) -> Result<Patient> {
        let mut patient = self.get(id).await?;
        patient.apply(update, now());
        self.save(&patient).await?;
        Ok(patient)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM patients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("Patient", id));
        }
        Ok(())
    }
}
