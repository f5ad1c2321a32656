//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresFactureRepository` and `PostgresPatientRepository`
//! backed by a `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag.
//!
//! # Schema
//!
//! One table per entity kind, with a `BIGSERIAL` primary key so ids are
//! assigned by the database. Amounts are `NUMERIC` to keep full decimal
//! precision.

use crate::core::entity::EntityId;
use crate::core::store::{FactureRepository, PatientRepository, Repository};
use crate::entities::{Facture, Patient};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Open a connection pool
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")
}

/// Apply the required tables and indexes (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS factures (
            id BIGSERIAL PRIMARY KEY,
            amount NUMERIC NOT NULL,
            patient_id BIGINT NOT NULL,
            date DATE NOT NULL
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create factures table")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_factures_patient ON factures (patient_id)")
        .execute(pool)
        .await
        .context("Failed to create factures patient index")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS patients (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create patients table")?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

#[derive(sqlx::FromRow)]
struct FactureRow {
    id: i64,
    amount: Decimal,
    patient_id: i64,
    date: NaiveDate,
}

impl From<FactureRow> for Facture {
    fn from(row: FactureRow) -> Self {
        Facture {
            id: Some(row.id),
            amount: row.amount,
            patient_id: row.patient_id,
            date: row.date,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PatientRow {
    id: i64,
    name: String,
    email: String,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Patient {
            id: Some(row.id),
            name: row.name,
            email: row.email,
        }
    }
}

// ---------------------------------------------------------------------------
// PostgresFactureRepository
// ---------------------------------------------------------------------------

/// Invoice store backed by the `factures` table
#[derive(Clone, Debug)]
pub struct PostgresFactureRepository {
    pool: PgPool,
}

impl PostgresFactureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Facture> for PostgresFactureRepository {
    async fn save(&self, facture: Facture) -> Result<Facture> {
        let row = match facture.id {
            None => {
                sqlx::query_as::<_, FactureRow>(
                    "INSERT INTO factures (amount, patient_id, date)
                     VALUES ($1, $2, $3)
                     RETURNING id, amount, patient_id, date",
                )
                .bind(facture.amount)
                .bind(facture.patient_id)
                .bind(facture.date)
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query_as::<_, FactureRow>(
                    "INSERT INTO factures (id, amount, patient_id, date)
                     VALUES ($1, $2, $3, $4)
                     ON CONFLICT (id) DO UPDATE
                     SET amount = EXCLUDED.amount,
                         patient_id = EXCLUDED.patient_id,
                         date = EXCLUDED.date
                     RETURNING id, amount, patient_id, date",
                )
                .bind(id)
                .bind(facture.amount)
                .bind(facture.patient_id)
                .bind(facture.date)
                .fetch_one(&self.pool)
                .await
            }
        }
        .context("Failed to save facture")?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Facture>> {
        let rows = sqlx::query_as::<_, FactureRow>(
            "SELECT id, amount, patient_id, date FROM factures ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list factures")?;

        Ok(rows.into_iter().map(Facture::from).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Facture>> {
        let row = sqlx::query_as::<_, FactureRow>(
            "SELECT id, amount, patient_id, date FROM factures WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch facture")?;

        Ok(row.map(Facture::from))
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<()> {
        sqlx::query("DELETE FROM factures WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete facture")?;

        Ok(())
    }
}

#[async_trait]
impl FactureRepository for PostgresFactureRepository {
    async fn find_by_patient_id(&self, patient_id: EntityId) -> Result<Vec<Facture>> {
        let rows = sqlx::query_as::<_, FactureRow>(
            "SELECT id, amount, patient_id, date FROM factures
             WHERE patient_id = $1 ORDER BY id",
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list factures for patient")?;

        Ok(rows.into_iter().map(Facture::from).collect())
    }
}

// ---------------------------------------------------------------------------
// PostgresPatientRepository
// ---------------------------------------------------------------------------

/// Patient store backed by the `patients` table
#[derive(Clone, Debug)]
pub struct PostgresPatientRepository {
    pool: PgPool,
}

impl PostgresPatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Patient> for PostgresPatientRepository {
    async fn save(&self, patient: Patient) -> Result<Patient> {
        let row = match patient.id {
            None => {
                sqlx::query_as::<_, PatientRow>(
                    "INSERT INTO patients (name, email)
                     VALUES ($1, $2)
                     RETURNING id, name, email",
                )
                .bind(&patient.name)
                .bind(&patient.email)
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query_as::<_, PatientRow>(
                    "INSERT INTO patients (id, name, email)
                     VALUES ($1, $2, $3)
                     ON CONFLICT (id) DO UPDATE
                     SET name = EXCLUDED.name, email = EXCLUDED.email
                     RETURNING id, name, email",
                )
                .bind(id)
                .bind(&patient.name)
                .bind(&patient.email)
                .fetch_one(&self.pool)
                .await
            }
        }
        .context("Failed to save patient")?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Patient>> {
        let rows =
            sqlx::query_as::<_, PatientRow>("SELECT id, name, email FROM patients ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list patients")?;

        Ok(rows.into_iter().map(Patient::from).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Patient>> {
        let row =
            sqlx::query_as::<_, PatientRow>("SELECT id, name, email FROM patients WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch patient")?;

        Ok(row.map(Patient::from))
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<()> {
        sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete patient")?;

        Ok(())
    }
}

impl PatientRepository for PostgresPatientRepository {}
