use chrono::{DateTime, Utc};
use skywings_shared::models::{Booking, Payment};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::pg_repo::{parse_column, PgQuery, PgRecord};

#[derive(FromRow)]
pub struct BookingRow {
    booking_id: Uuid,
    booking_time: Option<DateTime<Utc>>,
    pnr_number: Option<String>,
    booking_status: Option<String>,
    customer_id: Option<Uuid>,
    flight_id: Option<Uuid>,
    seat_id: Option<Uuid>,
    payment_id: Option<Uuid>,
}

impl PgRecord for Booking {
    type Row = BookingRow;

    const TABLE: &'static str = "bookings";
    const COLUMNS: &'static [&'static str] = &[
        "booking_id",
        "booking_time",
        "pnr_number",
        "booking_status",
        "customer_id",
        "flight_id",
        "seat_id",
        "payment_id",
    ];

    fn from_row(row: BookingRow) -> StoreResult<Self> {
        Ok(Booking {
            booking_id: row.booking_id,
            booking_time: row.booking_time,
            pnr_number: row.pnr_number,
            booking_status: parse_column("booking", row.booking_status)?,
            customer_id: row.customer_id,
            flight_id: row.flight_id,
            seat_id: row.seat_id,
            payment_id: row.payment_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.booking_time)
            .bind(self.pnr_number.clone())
            .bind(self.booking_status.map(|s| s.as_str()))
            .bind(self.customer_id)
            .bind(self.flight_id)
            .bind(self.seat_id)
            .bind(self.payment_id)
    }
}

#[derive(FromRow)]
pub struct PaymentRow {
    payment_id: Uuid,
    amount: Option<f64>,
    method: Option<String>,
    payment_status: Option<String>,
    txn_reference: Option<String>,
    booking_id: Option<Uuid>,
}

impl PgRecord for Payment {
    type Row = PaymentRow;

    const TABLE: &'static str = "payments";
    const COLUMNS: &'static [&'static str] = &[
        "payment_id",
        "amount",
        "method",
        "payment_status",
        "txn_reference",
        "booking_id",
    ];

    fn from_row(row: PaymentRow) -> StoreResult<Self> {
        Ok(Payment {
            payment_id: row.payment_id,
            amount: row.amount,
            method: row.method,
            payment_status: parse_column("payment", row.payment_status)?,
            txn_reference: row.txn_reference,
            booking_id: row.booking_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.amount)
            .bind(self.method.clone())
            .bind(self.payment_status.map(|s| s.as_str()))
            .bind(self.txn_reference.clone())
            .bind(self.booking_id)
    }
}
