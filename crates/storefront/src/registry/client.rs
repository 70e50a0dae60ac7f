//! Handle to a domain's active HTTP client.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use super::{Augmentation, Domain, RequestContext};
use crate::error::ApiError;
use crate::magento::ValidationError;

/// Number of response body characters kept in errors and logs.
const BODY_PREVIEW_CHARS: usize = 200;

/// An owned snapshot of a registry's client and augmentations.
///
/// Cheap to clone; safe to move into spawned tasks.
#[derive(Clone)]
pub struct DomainClient {
    domain: Domain,
    http: reqwest::Client,
    base_url: Url,
    augmentations: Arc<[Arc<dyn Augmentation>]>,
}

impl DomainClient {
    pub(super) fn new(
        domain: Domain,
        http: reqwest::Client,
        base_url: Url,
        augmentations: Arc<[Arc<dyn Augmentation>]>,
    ) -> Self {
        Self {
            domain,
            http,
            base_url,
            augmentations,
        }
    }

    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Append `segments` to the base URL path and attach `query`.
    ///
    /// Each segment is percent-encoded, so a `/` inside an ID cannot reach
    /// another resource.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment is empty, `.` or `..`, or the base URL
    /// cannot carry a path.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        if let Some(segment) = segments
            .iter()
            .find(|s| matches!(**s, "" | "." | ".."))
        {
            return Err(ValidationError::new(
                format!("Invalid path segment: {segment:?}"),
                Some("id"),
            )
            .into());
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Build a request context and run every augmentation over it, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is invalid.
    pub fn prepare(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<RequestContext, ApiError> {
        let ctx = RequestContext::new(method, self.endpoint(segments, query)?);

        Ok(self
            .augmentations
            .iter()
            .fold(ctx, |ctx, augmentation| augmentation.apply(ctx)))
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body is not valid JSON for `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let ctx = self.prepare(Method::GET, segments, query)?;
        self.execute(ctx, None).await
    }

    /// `POST` a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body is not valid JSON for `T`.
    pub async fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        let ctx = self.prepare(Method::POST, segments, &[])?;
        self.execute(ctx, Some(body)).await
    }

    /// Send a prepared request.
    async fn execute<T: DeserializeOwned>(
        &self,
        ctx: RequestContext,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        debug!(domain = %self.domain, method = %ctx.method, url = %ctx.url, "sending request");

        let mut request = self.http.request(ctx.method, ctx.url).headers(ctx.headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            error!(
                domain = %self.domain,
                status = %status,
                body = %preview(&response_text),
                "API returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: preview(&response_text),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            error!(
                domain = %self.domain,
                error = %e,
                body = %preview(&response_text),
                "Failed to parse API response"
            );
            ApiError::Parse(e)
        })
    }
}

impl std::fmt::Debug for DomainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainClient")
            .field("domain", &self.domain)
            .field("base_url", &self.base_url.as_str())
            .field(
                "augmentations",
                &self.augmentations.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
