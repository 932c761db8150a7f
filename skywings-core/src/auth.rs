use std::sync::Arc;

use async_trait::async_trait;
use skywings_shared::dto::{LoginRequest, Principal, TokenResponse, UserDetailsDto};
use skywings_shared::models::{Customer, Role};
use tracing::{debug, warn};

use crate::token::{TokenCodec, TokenPayload};
use crate::{CoreError, CoreResult};

/// Where auth-api looks customers up. In production this is database-api.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn customer_by_email(&self, email: &str) -> CoreResult<Option<Customer>>;
}

#[derive(Clone)]
pub struct AuthService {
    codec: TokenCodec,
    directory: Arc<dyn CustomerDirectory>,
}

impl AuthService {
    pub fn new(codec: TokenCodec, directory: Arc<dyn CustomerDirectory>) -> Self {
        Self { codec, directory }
    }

    /// Sign whatever credentials were supplied. No lookup happens here.
    pub fn issue_token(&self, details: &UserDetailsDto) -> CoreResult<String> {
        let payload = TokenPayload::new(
            details.email.clone(),
            details.password.expose().clone(),
            details.role,
        );
        self.codec.issue(&payload)
    }

    /// Decode the token and confirm its password against the stored customer.
    pub async fn authenticate(&self, token: &str) -> CoreResult<Principal> {
        let payload = self.codec.decode(token)?;

        let customer = self
            .directory
            .customer_by_email(&payload.email)
            .await?
            .ok_or_else(|| CoreError::Unauthorized("unknown customer".to_string()))?;

        if !password_matches(&customer, payload.password.expose()) {
            debug!("Password in token for {} no longer matches", payload.email);
            return Err(CoreError::Unauthorized("stale credentials".to_string()));
        }

        Ok(Principal {
            email: payload.email,
            role: payload.role,
        })
    }

    pub async fn validate_token(&self, token: &str) -> bool {
        match self.authenticate(token).await {
            Ok(_) => true,
            Err(e) => {
                debug!("Token rejected: {}", e);
                false
            }
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> CoreResult<TokenResponse> {
        let customer = self.verified_customer(&request.email, request.password.expose()).await?;
        let payload = TokenPayload::new(
            customer.email.clone(),
            request.password.expose().clone(),
            customer.effective_role(),
        );

        Ok(TokenResponse {
            token: self.codec.issue(&payload)?,
        })
    }

    /// Issue a token for a customer that database-api already holds.
    pub async fn register(&self, customer: &Customer) -> CoreResult<TokenResponse> {
        let password = customer
            .password
            .as_ref()
            .map(|p| p.expose().clone())
            .ok_or_else(|| CoreError::ValidationError("password is required".to_string()))?;

        let stored = self.verified_customer(&customer.email, &password).await?;
        let payload = TokenPayload::new(stored.email.clone(), password, stored.effective_role());

        Ok(TokenResponse {
            token: self.codec.issue(&payload)?,
        })
    }

    /// Admin-only lookup of the caller's own record.
    pub async fn admin_access(&self, principal: &Principal, operation: &str) -> CoreResult<Customer> {
        let customer = self
            .directory
            .customer_by_email(&principal.email)
            .await?
            .ok_or_else(|| CoreError::Unauthorized("unknown customer".to_string()))?;

        if principal.role != Role::Admin || customer.effective_role() != Role::Admin {
            warn!("{} denied access to {}", principal.email, operation);
            return Err(CoreError::Forbidden(format!(
                "Access denied for operation: {}",
                operation
            )));
        }

        Ok(customer)
    }

    async fn verified_customer(&self, email: &str, password: &str) -> CoreResult<Customer> {
        let invalid = || CoreError::Unauthorized("Invalid email or password".to_string());

        let customer = self.directory.customer_by_email(email).await?.ok_or_else(invalid)?;
        if !password_matches(&customer, password) {
            return Err(invalid());
        }
        Ok(customer)
    }
}

fn password_matches(customer: &Customer, password: &str) -> bool {
    customer
        .password
        .as_ref()
        .is_some_and(|stored| stored.expose() == password)
}
