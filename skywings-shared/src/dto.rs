//! Request and response payloads that are not entities themselves.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{BookingStatus, Customer, Payment, Role};
use crate::pii::Masked;

/// Registration form accepted by airline-api. Creates an airline together
/// with its administrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirlineDetailsDto {
    pub name: String,
    pub official_name: Option<String>,
    pub official_email: Option<String>,
    pub official_phone: Option<String>,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_phone: Option<String>,
    pub address: Option<String>,
}

/// Registration form accepted by employee-api.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub employee_role: String,
    pub status: Option<String>,
    pub airline_id: String,
}

/// Reduced customer form; everything credential-related is left unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Customer as exposed by customer-api. The password never leaves the
/// internal services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub wallet_balance: Option<f64>,
    pub loyalty_points: Option<i32>,
    pub role: Option<Role>,
}

impl From<Customer> for CustomerView {
    fn from(c: Customer) -> Self {
        Self {
            customer_id: c.customer_id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            address: c.address,
            wallet_balance: c.wallet_balance,
            loyalty_points: c.loyalty_points,
            role: c.role,
        }
    }
}

/// Body of `POST /api/v1/auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsDto {
    pub email: String,
    pub password: Masked<String>,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Customer
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: Masked<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Identity recovered from a validated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub email: String,
    pub role: Role,
}

/// Body of `POST /api/v1/db/booking/create`. The three references are
/// optional on the wire so a missing one can be reported as a bad request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub customer_id: Option<Uuid>,
    pub flight_id: Option<Uuid>,
    pub seat_id: Option<Uuid>,
    pub pnr_number: Option<String>,
    pub booking_status: Option<BookingStatus>,
    pub payment: Option<Payment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingUpdate {
    pub booking_status: Option<BookingStatus>,
    pub pnr_number: Option<String>,
    pub payment: Option<Payment>,
}

/// Create/update payload of the standalone employee-ms service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffMemberDto {
    pub id: Option<i64>,
    #[validate(
        custom(function = "not_blank", message = "firstName cannot be blank"),
        length(max = 50, message = "firstName max 50 characters")
    )]
    pub first_name: String,
    #[validate(
        custom(function = "not_blank", message = "lastName cannot be blank"),
        length(max = 50, message = "lastName max 50 characters")
    )]
    pub last_name: String,
    #[validate(email(message = "email should be valid"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "role cannot be blank"))]
    pub role: String,
    pub status: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
