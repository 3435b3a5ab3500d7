//! War API Client
//!
//! Typed fetches of the six resources polled every cycle. Requests are resolved against the
//! configured API root and carry the client identification headers.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use url::Url;

use crate::common::context::CycleContext;

use super::{
    errors::GatewayError,
    gateway::ApiGateway,
    models::{
        AssignmentPayload, CampaignPayload, DispatchPayload, PlanetPayload, WarIdPayload,
        WarSummaryPayload,
    },
    request::{ApiRequest, Resource},
    transport::HttpTransport,
};

pub const CLIENT_HEADER: &str = "X-Super-Client";
pub const CONTACT_HEADER: &str = "X-Super-Contact";

pub struct WarApiClient<T: HttpTransport> {
    gateway: ApiGateway<T>,
    api_root: Url,
    headers: HashMap<String, String>,
}

impl<T: HttpTransport> WarApiClient<T> {
    pub fn new(gateway: ApiGateway<T>, api_root: Url, client_name: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert(CLIENT_HEADER.to_string(), client_name.to_string());
        Self {
            gateway,
            api_root: normalize_root(api_root),
            headers,
        }
    }

    pub fn with_contact(mut self, contact: Option<&str>) -> Self {
        if let Some(contact) = contact {
            self.headers
                .insert(CONTACT_HEADER.to_string(), contact.to_string());
        }
        self
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    pub fn request(&self, resource: Resource) -> Result<ApiRequest, GatewayError> {
        let url = self
            .api_root
            .join(resource.path())
            .map_err(|e| GatewayError::BuildRequestFailed(e.to_string()))?;
        Ok(ApiRequest::new(resource, url, self.headers.clone()))
    }

    pub async fn fetch<R: DeserializeOwned>(
        &self,
        ctx: &CycleContext,
        resource: Resource,
    ) -> Result<R, GatewayError> {
        let request = self.request(resource)?;
        let resp = self.gateway.send(ctx, &request).await?;
        serde_json::from_str(resp.body()).map_err(|e| GatewayError::JsonParseFailed(e.to_string()))
    }

    pub async fn fetch_war_id(&self, ctx: &CycleContext) -> Result<WarIdPayload, GatewayError> {
        self.fetch(ctx, Resource::WarId).await
    }

    pub async fn fetch_war_summary(
        &self,
        ctx: &CycleContext,
    ) -> Result<WarSummaryPayload, GatewayError> {
        self.fetch(ctx, Resource::WarSummary).await
    }

    pub async fn fetch_assignments(
        &self,
        ctx: &CycleContext,
    ) -> Result<Vec<AssignmentPayload>, GatewayError> {
        self.fetch(ctx, Resource::Assignments).await
    }

    pub async fn fetch_campaigns(
        &self,
        ctx: &CycleContext,
    ) -> Result<Vec<CampaignPayload>, GatewayError> {
        self.fetch(ctx, Resource::Campaigns).await
    }

    pub async fn fetch_dispatches(
        &self,
        ctx: &CycleContext,
    ) -> Result<Vec<DispatchPayload>, GatewayError> {
        self.fetch(ctx, Resource::Dispatches).await
    }

    pub async fn fetch_planets(
        &self,
        ctx: &CycleContext,
    ) -> Result<Vec<PlanetPayload>, GatewayError> {
        self.fetch(ctx, Resource::Planets).await
    }
}

/// `Url::join` replaces the last path segment unless the base ends with a slash.
fn normalize_root(mut root: Url) -> Url {
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root
}
