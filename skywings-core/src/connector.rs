//! Outbound seams of the federated services. The HTTP implementations live
//! in `skywings-connector`; services here only see these traits.

use async_trait::async_trait;
use skywings_shared::dto::{LoginRequest, TokenResponse};
use skywings_shared::models::{Airline, Customer, Employee};
use uuid::Uuid;

use crate::auth::CustomerDirectory;
use crate::CoreResult;

/// The subset of database-api the other services call.
#[async_trait]
pub trait DatabaseApi: CustomerDirectory {
    async fn create_airline(&self, airline: &Airline) -> CoreResult<Airline>;

    async fn get_airline(&self, id: Uuid) -> CoreResult<Option<Airline>>;

    async fn create_admin_employee(&self, employee: &Employee) -> CoreResult<Employee>;

    async fn create_employee(&self, airline_id: Uuid, employee: &Employee) -> CoreResult<Employee>;

    async fn create_customer(&self, customer: &Customer) -> CoreResult<Customer>;

    async fn list_customers(&self) -> CoreResult<Vec<Customer>>;

    async fn get_customer(&self, id: Uuid) -> CoreResult<Option<Customer>>;

    async fn update_customer(&self, id: Uuid, customer: &Customer) -> CoreResult<Customer>;

    /// Returns false when database-api had no such customer.
    async fn delete_customer(&self, id: Uuid) -> CoreResult<bool>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> CoreResult<TokenResponse>;

    async fn register(&self, customer: &Customer) -> CoreResult<TokenResponse>;

    async fn validate(&self, token: &str) -> CoreResult<bool>;

    async fn logout(&self, token: &str) -> CoreResult<String>;
}
