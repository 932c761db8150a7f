use std::sync::Arc;

use skywings_shared::dto::AirlineDetailsDto;
use skywings_shared::models::Airline;
use tracing::info;

use crate::connector::DatabaseApi;
use crate::registration::{admin_from_details, airline_from_details};
use crate::{CoreError, CoreResult};

#[derive(Clone)]
pub struct AirlineService {
    db: Arc<dyn DatabaseApi>,
}

impl AirlineService {
    pub fn new(db: Arc<dyn DatabaseApi>) -> Self {
        Self { db }
    }

    /// Creates the airline, then its administrator linked to the new id.
    pub async fn register(&self, details: &AirlineDetailsDto) -> CoreResult<Airline> {
        if details.name.trim().is_empty() {
            return Err(CoreError::ValidationError("name must not be blank".to_string()));
        }
        if details.admin_email.trim().is_empty() {
            return Err(CoreError::ValidationError("adminEmail must not be blank".to_string()));
        }

        let airline = self.db.create_airline(&airline_from_details(details)).await?;
        let admin = admin_from_details(details, airline.airline_id);
        let admin = self.db.create_admin_employee(&admin).await?;

        info!(
            "Registered airline {} ({}) with admin {}",
            airline.name, airline.airline_id, admin.email
        );
        Ok(airline)
    }
}
