use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skywings_core::repository::CustomerRepository;
use skywings_core::CoreResult;
use skywings_shared::models::{Customer, FeedBack, Notification, WaitList};
use skywings_shared::Masked;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::pg_repo::{parse_column, PgQuery, PgRecord, PgRepository};

#[derive(FromRow)]
pub struct CustomerRow {
    customer_id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    password: Option<String>,
    address: Option<String>,
    wallet_balance: Option<f64>,
    loyalty_points: Option<i32>,
    role: Option<String>,
}

impl PgRecord for Customer {
    type Row = CustomerRow;

    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "name",
        "email",
        "phone",
        "password",
        "address",
        "wallet_balance",
        "loyalty_points",
        "role",
    ];

    fn from_row(row: CustomerRow) -> StoreResult<Self> {
        Ok(Customer {
            customer_id: row.customer_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            password: row.password.map(Masked),
            address: row.address,
            wallet_balance: row.wallet_balance,
            loyalty_points: row.loyalty_points,
            role: parse_column("customer", row.role)?,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.email.clone())
            .bind(self.phone.clone())
            .bind(self.password.as_ref().map(|p| p.expose().clone()))
            .bind(self.address.clone())
            .bind(self.wallet_balance)
            .bind(self.loyalty_points)
            .bind(self.role.map(|r| r.as_str()))
    }
}

#[async_trait]
impl CustomerRepository for PgRepository<Customer> {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Customer>> {
        let mut found = self
            .fetch_where("WHERE email = $1 LIMIT 1", email.to_string())
            .await?;
        Ok(found.pop())
    }
}

#[derive(FromRow)]
pub struct NotificationRow {
    notification_id: Uuid,
    notification_type: Option<String>,
    message: Option<String>,
    sent_at: Option<DateTime<Utc>>,
    status: Option<String>,
    customer_id: Option<Uuid>,
}

impl PgRecord for Notification {
    type Row = NotificationRow;

    const TABLE: &'static str = "notifications";
    const COLUMNS: &'static [&'static str] = &[
        "notification_id",
        "notification_type",
        "message",
        "sent_at",
        "status",
        "customer_id",
    ];

    fn from_row(row: NotificationRow) -> StoreResult<Self> {
        Ok(Notification {
            notification_id: row.notification_id,
            notification_type: row.notification_type,
            message: row.message,
            sent_at: row.sent_at,
            status: row.status,
            customer_id: row.customer_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.notification_type.clone())
            .bind(self.message.clone())
            .bind(self.sent_at)
            .bind(self.status.clone())
            .bind(self.customer_id)
    }
}

#[derive(FromRow)]
pub struct FeedBackRow {
    feedback_id: Uuid,
    rating: Option<i32>,
    comments: Option<String>,
    created_at: Option<DateTime<Utc>>,
    customer_id: Option<Uuid>,
    flight_id: Option<Uuid>,
}

impl PgRecord for FeedBack {
    type Row = FeedBackRow;

    const TABLE: &'static str = "feedback";
    const COLUMNS: &'static [&'static str] = &[
        "feedback_id",
        "rating",
        "comments",
        "created_at",
        "customer_id",
        "flight_id",
    ];

    fn from_row(row: FeedBackRow) -> StoreResult<Self> {
        Ok(FeedBack {
            feedback_id: row.feedback_id,
            rating: row.rating,
            comments: row.comments,
            created_at: row.created_at,
            customer_id: row.customer_id,
            flight_id: row.flight_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.rating)
            .bind(self.comments.clone())
            .bind(self.created_at)
            .bind(self.customer_id)
            .bind(self.flight_id)
    }
}

#[derive(FromRow)]
pub struct WaitListRow {
    waitlist_id: Uuid,
    position: Option<i32>,
    status: Option<String>,
    customer_id: Option<Uuid>,
    flight_id: Option<Uuid>,
}

impl PgRecord for WaitList {
    type Row = WaitListRow;

    const TABLE: &'static str = "waitlists";
    const COLUMNS: &'static [&'static str] = &["waitlist_id", "position", "status", "customer_id", "flight_id"];

    fn from_row(row: WaitListRow) -> StoreResult<Self> {
        Ok(WaitList {
            waitlist_id: row.waitlist_id,
            position: row.position,
            status: row.status,
            customer_id: row.customer_id,
            flight_id: row.flight_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.position)
            .bind(self.status.clone())
            .bind(self.customer_id)
            .bind(self.flight_id)
    }
}
