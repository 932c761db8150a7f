use std::sync::Arc;

use skywings_shared::dto::{CustomerDetails, CustomerView, LoginRequest, TokenResponse};
use skywings_shared::models::Customer;
use tracing::{debug, info};
use uuid::Uuid;

use crate::connector::{AuthApi, DatabaseApi};
use crate::registration::customer_from_details;
use crate::{CoreError, CoreResult};

/// customer-api: persistence through database-api, credentials through
/// auth-api. Everything returned is a [`CustomerView`].
#[derive(Clone)]
pub struct CustomerService {
    db: Arc<dyn DatabaseApi>,
    auth: Arc<dyn AuthApi>,
}

impl CustomerService {
    pub fn new(db: Arc<dyn DatabaseApi>, auth: Arc<dyn AuthApi>) -> Self {
        Self { db, auth }
    }

    pub async fn register(&self, customer: Customer) -> CoreResult<CustomerView> {
        let created = self.db.create_customer(&customer).await?;

        let has_password = customer
            .password
            .as_ref()
            .is_some_and(|p| !p.expose().is_empty());
        if has_password {
            let mut credentials = created.clone();
            credentials.password = customer.password.clone();
            self.auth.register(&credentials).await?;
            debug!("Credentials registered for {}", created.email);
        }

        info!("Registered customer {}", created.customer_id);
        Ok(created.into())
    }

    pub async fn register_details(&self, details: CustomerDetails) -> CoreResult<CustomerView> {
        self.register(customer_from_details(details)).await
    }

    pub async fn list(&self) -> CoreResult<Vec<CustomerView>> {
        let customers = self.db.list_customers().await?;
        Ok(customers.into_iter().map(CustomerView::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> CoreResult<CustomerView> {
        self.db
            .get_customer(id)
            .await?
            .map(CustomerView::from)
            .ok_or_else(|| CoreError::not_found("customer", id))
    }

    pub async fn by_email(&self, email: &str) -> CoreResult<CustomerView> {
        self.db
            .customer_by_email(email)
            .await?
            .map(CustomerView::from)
            .ok_or_else(|| CoreError::NotFound(format!("Customer not found with email: {}", email)))
    }

    pub async fn update(&self, id: Uuid, customer: Customer) -> CoreResult<CustomerView> {
        let updated = self.db.update_customer(id, &customer).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<String> {
        if !self.db.delete_customer(id).await? {
            return Err(CoreError::not_found("customer", id));
        }
        info!("Deleted customer {}", id);
        Ok(format!("Customer deleted with id: {}", id))
    }

    pub async fn login(&self, request: &LoginRequest) -> CoreResult<TokenResponse> {
        self.auth.login(request).await
    }

    pub async fn validate(&self, token: &str) -> CoreResult<bool> {
        self.auth.validate(token).await
    }

    pub async fn logout(&self, token: &str) -> CoreResult<String> {
        self.auth.logout(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CustomerDirectory;
    use async_trait::async_trait;
    use skywings_shared::models::{Airline, Employee, Role};
    use skywings_shared::Masked;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Customers(Mutex<HashMap<Uuid, Customer>>);

    #[async_trait]
    impl CustomerDirectory for Customers {
        async fn customer_by_email(&self, email: &str) -> CoreResult<Option<Customer>> {
            Ok(self.0.lock().unwrap().values().find(|c| c.email == email).cloned())
        }
    }

    #[async_trait]
    impl DatabaseApi for Customers {
        async fn create_airline(&self, airline: &Airline) -> CoreResult<Airline> {
            Ok(airline.clone())
        }

        async fn get_airline(&self, _id: Uuid) -> CoreResult<Option<Airline>> {
            Ok(None)
        }

        async fn create_admin_employee(&self, employee: &Employee) -> CoreResult<Employee> {
            Ok(employee.clone())
        }

        async fn create_employee(&self, _airline_id: Uuid, employee: &Employee) -> CoreResult<Employee> {
            Ok(employee.clone())
        }

        async fn create_customer(&self, customer: &Customer) -> CoreResult<Customer> {
            let mut created = customer.clone();
            created.customer_id = Uuid::new_v4();
            self.0.lock().unwrap().insert(created.customer_id, created.clone());
            Ok(created)
        }

        async fn list_customers(&self) -> CoreResult<Vec<Customer>> {
            Ok(self.0.lock().unwrap().values().cloned().collect())
        }

        async fn get_customer(&self, id: Uuid) -> CoreResult<Option<Customer>> {
            Ok(self.0.lock().unwrap().get(&id).cloned())
        }

        async fn update_customer(&self, id: Uuid, customer: &Customer) -> CoreResult<Customer> {
            let mut updated = customer.clone();
            updated.customer_id = id;
            self.0.lock().unwrap().insert(id, updated.clone());
            Ok(updated)
        }

        async fn delete_customer(&self, id: Uuid) -> CoreResult<bool> {
            Ok(self.0.lock().unwrap().remove(&id).is_some())
        }
    }

    #[derive(Default)]
    struct Registrations(Mutex<Vec<String>>);

    #[async_trait]
    impl AuthApi for Registrations {
        async fn login(&self, _request: &LoginRequest) -> CoreResult<TokenResponse> {
            Ok(TokenResponse { token: "t".to_string() })
        }

        async fn register(&self, customer: &Customer) -> CoreResult<TokenResponse> {
            self.0.lock().unwrap().push(customer.email.clone());
            Ok(TokenResponse { token: "t".to_string() })
        }

        async fn validate(&self, token: &str) -> CoreResult<bool> {
            Ok(token == "t")
        }

        async fn logout(&self, _token: &str) -> CoreResult<String> {
            Ok("Logged out".to_string())
        }
    }

    fn service() -> (CustomerService, Arc<Registrations>) {
        let auth = Arc::new(Registrations::default());
        (
            CustomerService::new(Arc::new(Customers::default()), auth.clone()),
            auth,
        )
    }

    #[tokio::test]
    async fn test_register_with_password_registers_credentials() {
        let (service, auth) = service();
        let view = service
            .register(Customer {
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                password: Some(Masked::from("pw")),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(view.email, "asha@example.com");
        assert_eq!(*auth.0.lock().unwrap(), vec!["asha@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_register_details_skips_auth() {
        let (service, auth) = service();
        let view = service
            .register_details(CustomerDetails {
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(view.role, Some(Role::Customer));
        assert!(auth.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_message_and_missing() {
        let (service, _) = service();
        let view = service.register_details(CustomerDetails::default()).await.unwrap();

        let message = service.delete(view.customer_id).await.unwrap();
        assert_eq!(message, format!("Customer deleted with id: {}", view.customer_id));

        let err = service.delete(view.customer_id).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
        assert!(matches!(service.get(view.customer_id).await, Err(CoreError::NotFound(_))));
    }
}
