//! HTTP implementation of the admin API

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::{debug, warn};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{MembershipApi, OrganizationApi, UserApi};
use super::models::{
    Membership, MembershipFilter, MembershipPayload, Organization, OrganizationPayload,
    OrganizationStats, RecordId, User, UserPayload, UserStats,
};
use crate::error::{ApiError, FieldErrors, Result};

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default client-side request rate
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

/// Connection settings for [`AdminClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL the REST paths are appended to, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Optional API token sent as `Authorization: Token <token>`
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub requests_per_second: u32,
}

impl ClientOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }
}

/// Admin API client
pub struct AdminClient {
    http: HttpClient,
    base_url: String,
    api_token: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl AdminClient {
    /// Create a new admin API client
    pub fn new(options: ClientOptions) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let per_second = NonZeroU32::new(options.requests_per_second)
            .or(NonZeroU32::new(DEFAULT_REQUESTS_PER_SECOND))
            .unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(per_second)));

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            api_token: options.api_token,
            rate_limiter,
        })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and map non-success statuses onto [`ApiError`].
    async fn send<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Token {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        debug!("{} {} returned {}", method, url, status);
        Err(Self::error_for(status, response).await.into())
    }

    /// Translate an error response into an [`ApiError`]
    async fn error_for(status: StatusCode, response: Response) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => {
                let url = response.url().path().to_string();
                ApiError::NotFound(url)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                ApiError::RateLimit(Duration::from_secs(retry_after))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                match FieldErrors::parse(&body) {
                    Some(fields) => ApiError::Validation(fields),
                    None => ApiError::BadRequest(body),
                }
            }
            status if status.is_server_error() => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                ApiError::ServerError(body)
            }
            _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.send::<()>(Method::GET, path, query, None).await?;
        Self::parse(response).await
    }

    async fn write_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.send(method, path, &[], Some(body)).await?;
        Self::parse(response).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(data)
    }
}

#[async_trait]
impl OrganizationApi for AdminClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.get_json("/organizations/", &[]).await
    }

    async fn get_organization(&self, id: &RecordId) -> Result<Organization> {
        self.get_json(&format!("/organizations/{}/", id), &[]).await
    }

    async fn organization_stats(&self) -> Result<OrganizationStats> {
        self.get_json("/organizations/stats/", &[]).await
    }

    async fn create_organization(&self, payload: &OrganizationPayload) -> Result<Organization> {
        self.write_json(Method::POST, "/organizations/", payload)
            .await
    }

    async fn update_organization(
        &self,
        id: &RecordId,
        payload: &OrganizationPayload,
    ) -> Result<Organization> {
        self.write_json(Method::PUT, &format!("/organizations/{}/", id), payload)
            .await
    }

    async fn delete_organization(&self, id: &RecordId) -> Result<()> {
        self.delete(&format!("/organizations/{}/", id)).await
    }
}

#[async_trait]
impl UserApi for AdminClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.get_json("/users/", &[]).await
    }

    async fn list_users_in(&self, organization: &RecordId) -> Result<Vec<User>> {
        self.get_json("/users/", &[("organization", organization.to_string())])
            .await
    }

    async fn get_user(&self, id: &RecordId) -> Result<User> {
        self.get_json(&format!("/users/{}/", id), &[]).await
    }

    async fn user_stats(&self) -> Result<UserStats> {
        self.get_json("/users/stats/", &[]).await
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<User> {
        self.write_json(Method::POST, "/users/", payload).await
    }

    async fn update_user(&self, id: &RecordId, payload: &UserPayload) -> Result<User> {
        self.write_json(Method::PUT, &format!("/users/{}/", id), payload)
            .await
    }

    async fn delete_user(&self, id: &RecordId) -> Result<()> {
        self.delete(&format!("/users/{}/", id)).await
    }
}

#[async_trait]
impl MembershipApi for AdminClient {
    async fn list_memberships(&self, filter: &MembershipFilter) -> Result<Vec<Membership>> {
        self.get_json("/memberships/", &filter.to_query()).await
    }

    async fn create_membership(&self, payload: &MembershipPayload) -> Result<Membership> {
        self.write_json(Method::POST, "/memberships/", payload)
            .await
    }

    async fn delete_membership(&self, id: &RecordId) -> Result<()> {
        self.delete(&format!("/memberships/{}/", id)).await
    }
}
