//! HTTP calls behind the public booking page.
//!
//! Every path is rooted at `/api/public/workspaces/{slug}`. Path segments are
//! percent-encoded, so slugs are passed through as typed.

use booking_engine::{AvailabilityResolver, BookingRequest, SlotPolicy, SlotRecord};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::{BookingRecord, Service, Workspace};
use crate::state::AvailabilityState;

const CREATE_BOOKING_FALLBACK: &str = "Failed to create booking";

#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BookingClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.base_url.clone()));
        }
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/public/workspaces/{slug}`
    pub async fn get_workspace(&self, slug: &str) -> Result<Workspace> {
        let url = self.endpoint(slug, &[])?;
        self.get_json(url).await
    }

    /// `GET /api/public/workspaces/{slug}/services`
    pub async fn get_services(&self, slug: &str) -> Result<Vec<Service>> {
        let url = self.endpoint(slug, &["services"])?;
        self.get_json(url).await
    }

    /// `GET /api/public/workspaces/{slug}/services/{id}/availability`
    pub async fn get_availability(&self, slug: &str, service_id: Uuid) -> Result<Vec<SlotRecord>> {
        let id = service_id.to_string();
        let url = self.endpoint(slug, &["services", &id, "availability"])?;
        self.get_json(url).await
    }

    /// Fetch a service's slots and validate them into a resolver.
    pub async fn load_resolver(
        &self,
        slug: &str,
        service_id: Uuid,
        policy: SlotPolicy,
    ) -> Result<AvailabilityResolver> {
        let records = self.get_availability(slug, service_id).await?;
        let resolver = AvailabilityResolver::from_records(&records, policy)?;
        tracing::debug!(
            slug,
            %service_id,
            records = records.len(),
            slots = resolver.slots().len(),
            "loaded availability"
        );
        Ok(resolver)
    }

    /// Like [`load_resolver`](Self::load_resolver), folding failure into
    /// [`AvailabilityState::Failed`].
    pub async fn load_availability(
        &self,
        slug: &str,
        service_id: Uuid,
        policy: SlotPolicy,
    ) -> AvailabilityState {
        AvailabilityState::from_result(self.load_resolver(slug, service_id, policy).await)
    }

    /// `POST /api/public/workspaces/{slug}/bookings`
    pub async fn create_booking(
        &self,
        slug: &str,
        request: &BookingRequest,
    ) -> Result<BookingRecord> {
        let url = self.endpoint(slug, &["bookings"])?;
        tracing::debug!(%url, service_id = %request.service_type_id, "creating booking");
        let resp = self.http.post(url).json(request).send().await?;
        let resp = check_status(resp, CREATE_BOOKING_FALLBACK).await?;
        Ok(resp.json().await?)
    }

    fn endpoint(&self, slug: &str, rest: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "public", "workspaces", slug])
            .extend(rest);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        let resp = check_status(resp, "Request failed").await?;
        Ok(resp.json().await?)
    }
}

/// Pass through success responses; turn anything else into
/// [`ClientError::Api`], preferring the backend's `detail` message.
async fn check_status(resp: Response, fallback: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let detail = extract_detail(&body).unwrap_or_else(|| fallback.to_string());
    tracing::warn!(status = status.as_u16(), %detail, "booking API error");
    Err(ClientError::Api {
        status: status.as_u16(),
        detail,
    })
}

/// FastAPI-style error bodies carry `detail` as a string or as a list of
/// validation errors.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Null | serde_json::Value::String(_) => None,
        other => Some(other.to_string()),
    }
}
