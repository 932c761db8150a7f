use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skywings_core::repository::FlightRepository;
use skywings_core::CoreResult;
use skywings_shared::models::{Fare, Flight, Seat};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::pg_repo::{parse_column, PgQuery, PgRecord, PgRepository};

#[derive(FromRow)]
pub struct FlightRow {
    flight_id: Uuid,
    origin_airport_id: Option<Uuid>,
    destination_airport_id: Option<Uuid>,
    departure: Option<DateTime<Utc>>,
    arrival: Option<DateTime<Utc>>,
    price: Option<f64>,
    status: Option<String>,
    airline_id: Option<Uuid>,
    aircraft_id: Option<Uuid>,
}

impl PgRecord for Flight {
    type Row = FlightRow;

    const TABLE: &'static str = "flights";
    const COLUMNS: &'static [&'static str] = &[
        "flight_id",
        "origin_airport_id",
        "destination_airport_id",
        "departure",
        "arrival",
        "price",
        "status",
        "airline_id",
        "aircraft_id",
    ];

    fn from_row(row: FlightRow) -> StoreResult<Self> {
        Ok(Flight {
            flight_id: row.flight_id,
            origin_airport_id: row.origin_airport_id,
            destination_airport_id: row.destination_airport_id,
            departure: row.departure,
            arrival: row.arrival,
            price: row.price,
            status: row.status,
            airline_id: row.airline_id,
            aircraft_id: row.aircraft_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.origin_airport_id)
            .bind(self.destination_airport_id)
            .bind(self.departure)
            .bind(self.arrival)
            .bind(self.price)
            .bind(self.status.clone())
            .bind(self.airline_id)
            .bind(self.aircraft_id)
    }
}

#[async_trait]
impl FlightRepository for PgRepository<Flight> {
    async fn list_by_aircraft(&self, aircraft_id: Uuid) -> CoreResult<Vec<Flight>> {
        self.fetch_where("WHERE aircraft_id = $1 ORDER BY departure", aircraft_id)
            .await
    }
}

#[derive(FromRow)]
pub struct FareRow {
    fare_id: Uuid,
    seat_class: Option<String>,
    base_price: Option<f64>,
    tax: Option<f64>,
    currency: Option<String>,
}

impl PgRecord for Fare {
    type Row = FareRow;

    const TABLE: &'static str = "fares";
    const COLUMNS: &'static [&'static str] = &["fare_id", "seat_class", "base_price", "tax", "currency"];

    fn from_row(row: FareRow) -> StoreResult<Self> {
        Ok(Fare {
            fare_id: row.fare_id,
            seat_class: parse_column("fare", row.seat_class)?,
            base_price: row.base_price,
            tax: row.tax,
            currency: row.currency,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.seat_class.map(|c| c.as_str()))
            .bind(self.base_price)
            .bind(self.tax)
            .bind(self.currency.clone())
    }
}

#[derive(FromRow)]
pub struct SeatRow {
    seat_id: Uuid,
    seat_number: String,
    seat_class: Option<String>,
    seat_type: Option<String>,
    seat_status: Option<String>,
    fare_id: Option<Uuid>,
    flight_id: Option<Uuid>,
}

impl PgRecord for Seat {
    type Row = SeatRow;

    const TABLE: &'static str = "seats";
    const COLUMNS: &'static [&'static str] = &[
        "seat_id",
        "seat_number",
        "seat_class",
        "seat_type",
        "seat_status",
        "fare_id",
        "flight_id",
    ];

    fn from_row(row: SeatRow) -> StoreResult<Self> {
        Ok(Seat {
            seat_id: row.seat_id,
            seat_number: row.seat_number,
            seat_class: parse_column("seat", row.seat_class)?,
            seat_type: row.seat_type,
            seat_status: parse_column("seat", row.seat_status)?,
            fare_id: row.fare_id,
            flight_id: row.flight_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.seat_number.clone())
            .bind(self.seat_class.map(|c| c.as_str()))
            .bind(self.seat_type.clone())
            .bind(self.seat_status.map(|s| s.as_str()))
            .bind(self.fare_id)
            .bind(self.flight_id)
    }
}
