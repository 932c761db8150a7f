use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{BookingStatus, PaymentStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booking {
    pub booking_id: Uuid,
    pub booking_time: Option<DateTime<Utc>>,
    pub pnr_number: Option<String>,
    pub booking_status: Option<BookingStatus>,
    pub customer_id: Option<Uuid>,
    pub flight_id: Option<Uuid>,
    pub seat_id: Option<Uuid>,
    pub payment_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub payment_id: Uuid,
    pub amount: Option<f64>,
    pub method: Option<String>,
    pub payment_status: Option<PaymentStatus>,
    pub txn_reference: Option<String>,
    pub booking_id: Option<Uuid>,
}
