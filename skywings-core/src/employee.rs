use std::sync::Arc;

use skywings_shared::dto::EmployeeDto;
use skywings_shared::models::Employee;
use tracing::info;
use uuid::Uuid;

use crate::connector::DatabaseApi;
use crate::registration::employee_from_dto;
use crate::{CoreError, CoreResult};

#[derive(Clone)]
pub struct EmployeeService {
    db: Arc<dyn DatabaseApi>,
}

impl EmployeeService {
    pub fn new(db: Arc<dyn DatabaseApi>) -> Self {
        Self { db }
    }

    pub async fn register(&self, dto: &EmployeeDto) -> CoreResult<Employee> {
        let airline_id = Uuid::parse_str(dto.airline_id.trim()).map_err(|_| {
            CoreError::ValidationError(format!("invalid airlineId: {}", dto.airline_id))
        })?;

        let airline = self
            .db
            .get_airline(airline_id)
            .await?
            .ok_or_else(|| CoreError::not_found("airline", airline_id))?;

        let employee = employee_from_dto(dto, airline.airline_id)?;
        let created = self.db.create_employee(airline.airline_id, &employee).await?;

        info!("Registered employee {} for airline {}", created.email, airline.name);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CustomerDirectory;
    use async_trait::async_trait;
    use skywings_shared::models::{Airline, Customer};
    use std::sync::Mutex;

    struct OneAirline {
        airline: Airline,
        created: Mutex<Vec<(Uuid, Employee)>>,
    }

    #[async_trait]
    impl CustomerDirectory for OneAirline {
        async fn customer_by_email(&self, _email: &str) -> CoreResult<Option<Customer>> {
            Ok(None)
        }
    }

    #[async_trait]
    impl DatabaseApi for OneAirline {
        async fn create_airline(&self, airline: &Airline) -> CoreResult<Airline> {
            Ok(airline.clone())
        }

        async fn get_airline(&self, id: Uuid) -> CoreResult<Option<Airline>> {
            Ok((id == self.airline.airline_id).then(|| self.airline.clone()))
        }

        async fn create_admin_employee(&self, employee: &Employee) -> CoreResult<Employee> {
            Ok(employee.clone())
        }

        async fn create_employee(&self, airline_id: Uuid, employee: &Employee) -> CoreResult<Employee> {
            self.created.lock().unwrap().push((airline_id, employee.clone()));
            Ok(employee.clone())
        }

        async fn create_customer(&self, customer: &Customer) -> CoreResult<Customer> {
            Ok(customer.clone())
        }

        async fn list_customers(&self) -> CoreResult<Vec<Customer>> {
            Ok(vec![])
        }

        async fn get_customer(&self, _id: Uuid) -> CoreResult<Option<Customer>> {
            Ok(None)
        }

        async fn update_customer(&self, _id: Uuid, customer: &Customer) -> CoreResult<Customer> {
            Ok(customer.clone())
        }

        async fn delete_customer(&self, _id: Uuid) -> CoreResult<bool> {
            Ok(false)
        }
    }

    fn fixture() -> Arc<OneAirline> {
        Arc::new(OneAirline {
            airline: Airline {
                airline_id: Uuid::new_v4(),
                name: "Akasa".to_string(),
                ..Default::default()
            },
            created: Mutex::new(vec![]),
        })
    }

    fn dto(airline_id: &str) -> EmployeeDto {
        EmployeeDto {
            name: "Nisha".to_string(),
            email: "nisha@akasa.in".to_string(),
            employee_role: "Staff".to_string(),
            airline_id: airline_id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_register_against_existing_airline() {
        let db = fixture();
        let service = EmployeeService::new(db.clone());

        let airline_id = db.airline.airline_id;
        service.register(&dto(&airline_id.to_string())).await.unwrap();

        let created = db.created.lock().unwrap();
        assert_eq!(created[0].0, airline_id);
        assert_eq!(created[0].1.airline_id, Some(airline_id));
    }

    #[tokio::test]
    async fn test_malformed_and_unknown_airline() {
        let service = EmployeeService::new(fixture());

        let err = service.register(&dto("not-a-uuid")).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));

        let err = service.register(&dto(&Uuid::new_v4().to_string())).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
