use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{SeatClass, SeatStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flight {
    pub flight_id: Uuid,
    pub origin_airport_id: Option<Uuid>,
    pub destination_airport_id: Option<Uuid>,
    pub departure: Option<DateTime<Utc>>,
    pub arrival: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub status: Option<String>,
    pub airline_id: Option<Uuid>,
    pub aircraft_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fare {
    pub fare_id: Uuid,
    pub seat_class: Option<SeatClass>,
    pub base_price: Option<f64>,
    pub tax: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seat {
    pub seat_id: Uuid,
    pub seat_number: String,
    pub seat_class: Option<SeatClass>,
    pub seat_type: Option<String>,
    pub seat_status: Option<SeatStatus>,
    pub fare_id: Option<Uuid>,
    pub flight_id: Option<Uuid>,
}
