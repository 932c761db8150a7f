//! Generic Postgres repository. Each table describes its columns once via
//! [`PgRecord`] and gets list/get/insert/update/delete from [`PgRepository`].

use std::marker::PhantomData;
use std::str::FromStr;

use async_trait::async_trait;
use skywings_core::repository::Repository;
use skywings_core::{CoreError, CoreResult};
use skywings_shared::models::Entity;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Encode, FromRow, PgPool, Postgres, Type};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

pub trait PgRecord: Entity + Sized {
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    const TABLE: &'static str;
    /// Id column first, then the remaining columns in bind order.
    const COLUMNS: &'static [&'static str];

    fn from_row(row: Self::Row) -> StoreResult<Self>;

    /// Bind every column after the id, in `COLUMNS` order.
    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q>;
}

pub(crate) fn parse_column<T>(kind: &'static str, value: Option<String>) -> StoreResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.parse::<T>().map_err(|e| StoreError::Corrupt {
                kind,
                message: e.to_string(),
            })
        })
        .transpose()
}

pub struct PgRepository<T> {
    pub pool: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T: PgRecord> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    pub(crate) fn select_sql(filter: &str) -> String {
        format!("SELECT {} FROM {} {}", T::COLUMNS.join(", "), T::TABLE, filter)
    }

    fn insert_sql() -> String {
        let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("${}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders.join(", "),
            T::COLUMNS.join(", ")
        )
    }

    fn update_sql() -> String {
        let assignments: Vec<String> = T::COLUMNS
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, col)| format!("{} = ${}", col, i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = $1 RETURNING {}",
            T::TABLE,
            assignments.join(", "),
            T::COLUMNS[0],
            T::COLUMNS.join(", ")
        )
    }

    pub(crate) async fn fetch_where<V>(&self, filter: &str, value: V) -> CoreResult<Vec<T>>
    where
        V: for<'q> Encode<'q, Postgres> + Type<Postgres> + Send + 'static,
    {
        let sql = Self::select_sql(filter);
        let rows = sqlx::query_as::<_, T::Row>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from)?;
        rows.into_iter()
            .map(|row| T::from_row(row).map_err(CoreError::from))
            .collect()
    }
}

#[async_trait]
impl<T: PgRecord> Repository<T> for PgRepository<T> {
    async fn list(&self) -> CoreResult<Vec<T>> {
        let sql = Self::select_sql("");
        let rows = sqlx::query_as::<_, T::Row>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from)?;
        rows.into_iter()
            .map(|row| T::from_row(row).map_err(CoreError::from))
            .collect()
    }

    async fn get(&self, id: Uuid) -> CoreResult<Option<T>> {
        let sql = Self::select_sql(&format!("WHERE {} = $1", T::COLUMNS[0]));
        let row = sqlx::query_as::<_, T::Row>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(row.map(T::from_row).transpose()?)
    }

    async fn insert(&self, item: T) -> CoreResult<T> {
        let sql = Self::insert_sql();
        let query = item.bind_fields(sqlx::query(&sql).bind(item.id()));
        let row = query.fetch_one(&self.pool).await.map_err(StoreError::from)?;
        let row = <T::Row as FromRow<'_, PgRow>>::from_row(&row).map_err(StoreError::from)?;
        Ok(T::from_row(row)?)
    }

    async fn update(&self, item: T) -> CoreResult<T> {
        let sql = Self::update_sql();
        let query = item.bind_fields(sqlx::query(&sql).bind(item.id()));
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from)?
            .ok_or_else(|| CoreError::not_found(T::KIND, item.id()))?;
        let row = <T::Row as FromRow<'_, PgRow>>::from_row(&row).map_err(StoreError::from)?;
        Ok(T::from_row(row)?)
    }

    async fn delete(&self, id: Uuid) -> CoreResult<bool> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", T::TABLE, T::COLUMNS[0]);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(result.rows_affected() > 0)
    }
}
