use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Role;
use crate::pii::Masked;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Stored as given; auth-api compares it verbatim against token payloads.
    pub password: Option<Masked<String>>,
    pub address: Option<String>,
    pub wallet_balance: Option<f64>,
    pub loyalty_points: Option<i32>,
    pub role: Option<Role>,
}

impl Customer {
    /// Role used when none was recorded on the customer.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or(Role::Customer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub notification_id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: Option<String>,
    pub message: Option<String>,
    pub sent_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub customer_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedBack {
    pub feedback_id: Uuid,
    pub rating: Option<i32>,
    pub comments: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub customer_id: Option<Uuid>,
    pub flight_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaitList {
    pub waitlist_id: Uuid,
    pub position: Option<i32>,
    pub status: Option<String>,
    pub customer_id: Option<Uuid>,
    pub flight_id: Option<Uuid>,
}
