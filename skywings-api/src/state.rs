//! Per-service router state. Each binary builds exactly one of these.

use skywings_core::airline::AirlineService;
use skywings_core::auth::AuthService;
use skywings_core::customer::CustomerService;
use skywings_core::employee::EmployeeService;
use skywings_core::records::RecordService;
use skywings_core::staff::StaffService;
use skywings_store::RedisClient;

#[derive(Clone)]
pub struct DatabaseState {
    pub records: RecordService,
}

#[derive(Clone)]
pub struct AuthState {
    pub auth: AuthService,
}

#[derive(Clone)]
pub struct CustomerState {
    pub customers: CustomerService,
}

#[derive(Clone)]
pub struct AirlineState {
    pub airlines: AirlineService,
}

#[derive(Clone)]
pub struct EmployeeState {
    pub employees: EmployeeService,
}

#[derive(Clone)]
pub struct StaffState {
    pub staff: StaffService,
}

#[derive(Clone)]
pub struct RateLimitState {
    pub redis: RedisClient,
    pub limit: i64,
    pub window_seconds: i64,
}
