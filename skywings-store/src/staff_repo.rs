use async_trait::async_trait;
use skywings_core::repository::StaffRepository;
use skywings_core::{CoreError, CoreResult};
use skywings_shared::models::StaffMember;
use sqlx::{FromRow, PgPool};

use crate::error::StoreError;

#[derive(FromRow)]
struct StaffRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    role: String,
    status: String,
}

impl From<StaffRow> for StaffMember {
    fn from(row: StaffRow) -> Self {
        StaffMember {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role: row.role,
            status: row.status,
        }
    }
}

const COLUMNS: &str = "id, first_name, last_name, email, role, status";

pub struct PostgresStaffRepository {
    pub pool: PgPool,
}

impl PostgresStaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaffRepository for PostgresStaffRepository {
    async fn list(&self) -> CoreResult<Vec<StaffMember>> {
        let rows = sqlx::query_as::<_, StaffRow>(&format!("SELECT {} FROM staff_members ORDER BY id", COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(rows.into_iter().map(StaffMember::from).collect())
    }

    async fn get(&self, id: i64) -> CoreResult<Option<StaffMember>> {
        let row = sqlx::query_as::<_, StaffRow>(&format!("SELECT {} FROM staff_members WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(row.map(StaffMember::from))
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<StaffMember>> {
        let row = sqlx::query_as::<_, StaffRow>(&format!("SELECT {} FROM staff_members WHERE email = $1", COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(row.map(StaffMember::from))
    }

    async fn insert(&self, member: StaffMember) -> CoreResult<StaffMember> {
        let row = sqlx::query_as::<_, StaffRow>(&format!(
            "INSERT INTO staff_members (first_name, last_name, email, role, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            COLUMNS
        ))
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(&member.role)
        .bind(&member.status)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)?;
        Ok(row.into())
    }

    async fn update(&self, member: StaffMember) -> CoreResult<StaffMember> {
        let row = sqlx::query_as::<_, StaffRow>(&format!(
            "UPDATE staff_members SET first_name = $2, last_name = $3, email = $4, role = $5, status = $6 \
             WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(member.id)
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(&member.role)
        .bind(&member.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::from)?
        .ok_or_else(|| CoreError::not_found("employee", member.id))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM staff_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(result.rows_affected() > 0)
    }
}
