use async_trait::async_trait;
use reqwest::Method;
use skywings_core::connector::AuthApi;
use skywings_core::CoreResult;
use skywings_shared::dto::{LoginRequest, TokenResponse};
use skywings_shared::models::Customer;

use crate::client::{ClientSettings, ServiceClient};
use crate::error::ConnectorError;

pub const VALID_TOKEN: &str = "Valid Token";
pub const INVALID_TOKEN: &str = "Invalid Token";

/// REST client for auth-api.
pub struct HttpAuthApi {
    client: ServiceClient,
}

impl HttpAuthApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ConnectorError> {
        Ok(Self {
            client: ServiceClient::new("auth-api", settings)?,
        })
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> CoreResult<TokenResponse> {
        Ok(self
            .client
            .send_json(Method::POST, &["api", "v1", "auth", "login"], request)
            .await?)
    }

    async fn register(&self, customer: &Customer) -> CoreResult<TokenResponse> {
        Ok(self
            .client
            .send_json(Method::POST, &["api", "v1", "auth", "register"], customer)
            .await?)
    }

    async fn validate(&self, token: &str) -> CoreResult<bool> {
        let answer = self
            .client
            .text_with_bearer(Method::GET, &["api", "v1", "auth", "validate"], token)
            .await?;
        Ok(answer.trim() == VALID_TOKEN)
    }

    async fn logout(&self, token: &str) -> CoreResult<String> {
        Ok(self
            .client
            .text_with_bearer(Method::POST, &["api", "v1", "auth", "logout"], token)
            .await?)
    }
}
