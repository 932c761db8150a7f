use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{CompanySize, EmployeeRole};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Airline {
    pub airline_id: Uuid,
    pub name: String,
    pub official_name: Option<String>,
    pub official_email: Option<String>,
    pub official_phone: Option<String>,
    pub address: Option<String>,
    pub company_size: Option<CompanySize>,
    pub logo: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Aircraft {
    pub aircraft_id: Uuid,
    pub aircraft_number: Option<String>,
    #[serde(rename = "type")]
    pub aircraft_type: Option<String>,
    pub capacity: Option<i32>,
    pub configuration: Option<String>,
    pub airline_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Airport {
    pub airport_id: Uuid,
    /// IATA code, e.g. "DEL".
    pub airport_code: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Airline staff member as stored by database-api.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    pub employee_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub employee_role: Option<EmployeeRole>,
    pub status: Option<String>,
    pub airline_id: Option<Uuid>,
}
