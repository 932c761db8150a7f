use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::breaker::CircuitBreaker;
use crate::error::ConnectorError;
use crate::retry::{is_retryable, retry_send, RetryPolicy};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub failure_threshold: u32,
    pub reset_timeout: Duration,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
            retry: RetryPolicy::default(),
            failure_threshold: 5,
            reset_timeout: Duration::from_secs(30),
        }
    }
}

/// JSON over HTTP to one sibling service, with retry and a circuit breaker.
pub struct ServiceClient {
    service: String,
    base_url: Url,
    http: reqwest::Client,
    retry: RetryPolicy,
    breaker: Arc<CircuitBreaker>,
}

impl ServiceClient {
    pub fn new(service: &str, settings: &ClientSettings) -> Result<Self, ConnectorError> {
        let base_url = Url::parse(settings.base_url.trim_end_matches('/')).map_err(|_| {
            ConnectorError::BaseUrl {
                service: service.to_string(),
                url: settings.base_url.clone(),
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConnectorError::BaseUrl {
                service: service.to_string(),
                url: settings.base_url.clone(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|source| ConnectorError::Http {
                service: service.to_string(),
                endpoint: "client".to_string(),
                source,
            })?;

        Ok(Self {
            service: service.to_string(),
            base_url,
            http,
            retry: settings.retry,
            breaker: Arc::new(CircuitBreaker::new(
                service,
                settings.failure_threshold,
                settings.reset_timeout,
            )),
        })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Append percent-encoded path segments to the base url.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send through the breaker. Transport failures and 5xx responses count
    /// against the circuit; any other status is returned to the caller.
    pub async fn execute<F>(&self, method: Method, url: Url, build: F) -> Result<Response, ConnectorError>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let endpoint = url.path().to_string();
        if !self.breaker.check().await {
            warn!("{} circuit open, rejecting {} {}", self.service, method, endpoint);
            return Err(ConnectorError::CircuitOpen(self.service.clone()));
        }

        debug!("{} -> {} {}", self.service, method, url);
        let result = retry_send(
            self.retry,
            |e| is_retryable(&method, e),
            || build(self.http.request(method.clone(), url.clone())).send(),
        )
        .await;

        match result {
            Ok(resp) if resp.status().is_server_error() => {
                self.breaker.record_failure().await;
                Ok(resp)
            }
            Ok(resp) => {
                self.breaker.record_success().await;
                Ok(resp)
            }
            Err(source) => {
                self.breaker.record_failure().await;
                warn!("{} {} {} failed: {}", self.service, method, endpoint, source);
                Err(ConnectorError::Http {
                    service: self.service.clone(),
                    endpoint,
                    source,
                })
            }
        }
    }

    async fn error_for_status(&self, resp: Response) -> Result<Response, ConnectorError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let endpoint = resp.url().path().to_string();
        let body = resp.text().await.unwrap_or_default();
        debug!("{} {} answered {}: {}", self.service, endpoint, status, body);
        Err(ConnectorError::Status {
            service: self.service.clone(),
            endpoint,
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(&self, resp: Response) -> Result<T, ConnectorError> {
        let endpoint = resp.url().path().to_string();
        resp.json::<T>().await.map_err(|source| ConnectorError::Decode {
            service: self.service.clone(),
            endpoint,
            source,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ConnectorError> {
        let resp = self.execute(Method::GET, self.url(segments), |rb| rb).await?;
        let resp = self.error_for_status(resp).await?;
        self.decode(resp).await
    }

    /// Like [`Self::get_json`] but a 404 is `None`.
    pub async fn get_optional<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>, ConnectorError> {
        let resp = self.execute(Method::GET, self.url(segments), |rb| rb).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = self.error_for_status(resp).await?;
        Ok(Some(self.decode(resp).await?))
    }

    pub async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T, ConnectorError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .execute(method, self.url(segments), |rb| rb.json(body))
            .await?;
        let resp = self.error_for_status(resp).await?;
        self.decode(resp).await
    }

    /// `true` on success, `false` on 404.
    pub async fn delete(&self, segments: &[&str]) -> Result<bool, ConnectorError> {
        let resp = self.execute(Method::DELETE, self.url(segments), |rb| rb).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        self.error_for_status(resp).await?;
        Ok(true)
    }

    /// Bearer-authenticated call whose response body is plain text.
    pub async fn text_with_bearer(&self, method: Method, segments: &[&str], token: &str) -> Result<String, ConnectorError> {
        let resp = self
            .execute(method, self.url(segments), |rb| rb.bearer_auth(token))
            .await?;
        let resp = self.error_for_status(resp).await?;
        let endpoint = resp.url().path().to_string();
        resp.text().await.map_err(|source| ConnectorError::Decode {
            service: self.service.clone(),
            endpoint,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_segments() {
        let client = ServiceClient::new("database-api", &ClientSettings::new("http://db:8080/")).unwrap();
        let url = client.url(&["api", "v1", "db", "customer", "email", "a b@x.io"]);
        assert_eq!(url.as_str(), "http://db:8080/api/v1/db/customer/email/a%20b@x.io");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(ServiceClient::new("auth-api", &ClientSettings::new("not a url")).is_err());
    }
}
