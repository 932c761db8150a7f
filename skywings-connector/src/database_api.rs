use async_trait::async_trait;
use reqwest::Method;
use skywings_core::auth::CustomerDirectory;
use skywings_core::connector::DatabaseApi;
use skywings_core::CoreResult;
use skywings_shared::models::{Airline, Customer, Employee};
use uuid::Uuid;

use crate::client::{ClientSettings, ServiceClient};
use crate::error::ConnectorError;

const BASE: [&str; 3] = ["api", "v1", "db"];

fn path<'a>(rest: &[&'a str]) -> Vec<&'a str> {
    BASE.iter().copied().chain(rest.iter().copied()).collect()
}

/// REST client for database-api.
pub struct HttpDatabaseApi {
    client: ServiceClient,
}

impl HttpDatabaseApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ConnectorError> {
        Ok(Self {
            client: ServiceClient::new("database-api", settings)?,
        })
    }
}

#[async_trait]
impl CustomerDirectory for HttpDatabaseApi {
    async fn customer_by_email(&self, email: &str) -> CoreResult<Option<Customer>> {
        Ok(self
            .client
            .get_optional(&path(&["customer", "email", email]))
            .await?)
    }
}

#[async_trait]
impl DatabaseApi for HttpDatabaseApi {
    async fn create_airline(&self, airline: &Airline) -> CoreResult<Airline> {
        Ok(self
            .client
            .send_json(Method::POST, &path(&["airline", "create"]), airline)
            .await?)
    }

    async fn get_airline(&self, id: Uuid) -> CoreResult<Option<Airline>> {
        let id = id.to_string();
        Ok(self.client.get_optional(&path(&["airline", "get", &id])).await?)
    }

    async fn create_admin_employee(&self, employee: &Employee) -> CoreResult<Employee> {
        Ok(self
            .client
            .send_json(Method::POST, &path(&["employee", "create", "admin"]), employee)
            .await?)
    }

    async fn create_employee(&self, airline_id: Uuid, employee: &Employee) -> CoreResult<Employee> {
        let airline_id = airline_id.to_string();
        Ok(self
            .client
            .send_json(Method::POST, &path(&["employee", "create", &airline_id]), employee)
            .await?)
    }

    async fn create_customer(&self, customer: &Customer) -> CoreResult<Customer> {
        Ok(self
            .client
            .send_json(Method::POST, &path(&["customer", "create"]), customer)
            .await?)
    }

    async fn list_customers(&self) -> CoreResult<Vec<Customer>> {
        Ok(self.client.get_json(&path(&["customer"])).await?)
    }

    async fn get_customer(&self, id: Uuid) -> CoreResult<Option<Customer>> {
        let id = id.to_string();
        Ok(self.client.get_optional(&path(&["customer", &id])).await?)
    }

    async fn update_customer(&self, id: Uuid, customer: &Customer) -> CoreResult<Customer> {
        let id = id.to_string();
        Ok(self
            .client
            .send_json(Method::PUT, &path(&["customer", &id]), customer)
            .await?)
    }

    async fn delete_customer(&self, id: Uuid) -> CoreResult<bool> {
        let id = id.to_string();
        Ok(self.client.delete(&path(&["customer", &id])).await?)
    }
}
