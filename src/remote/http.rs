// ABOUTME: reqwest implementation of the FitBox service contract
// ABOUTME: Serializes request bodies, checks statuses, and decodes fixed response schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use fitbox_core::constants::endpoints;
use fitbox_core::errors::{RemoteError, RemoteResult};
use fitbox_core::models::{
    Catalog, CatalogEntry, DerivedProfile, GeneratedPlan, PlanKind, ProfileInput,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

use super::{ChatRequest, FitnessBackend};
use crate::http_client::shared_client;

// ============================================================================
// API Response Types
// ============================================================================

/// `/calculate` response
#[derive(Debug, Deserialize)]
struct CalculateResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    profile: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// `/chat` response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// `/generate_workout` and `/generate_nutrition` response
#[derive(Debug, Deserialize)]
struct PlanResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    workout_plan: Option<String>,
    #[serde(default)]
    nutrition_plan: Option<String>,
    #[serde(default)]
    generated_at: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// `/activity_levels` response
#[derive(Debug, Deserialize)]
struct ActivityLevelsResponse {
    activity_levels: Vec<CatalogEntry>,
}

/// `/goals` response
#[derive(Debug, Deserialize)]
struct GoalsResponse {
    goals: Vec<CatalogEntry>,
}

/// Error body shared by all endpoints
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

// ============================================================================
// Backend Implementation
// ============================================================================

/// FitBox service backend over HTTP
pub struct HttpFitnessBackend {
    client: Client,
    base_url: String,
}

impl HttpFitnessBackend {
    /// Create a backend using the process-wide shared client
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, shared_client().clone())
    }

    /// Create a backend with a dedicated client
    #[must_use]
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Read the body of `response`, failing on non-success statuses
    async fn read_body(response: Response) -> RemoteResult<String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read FitBox response: {}", e);
            RemoteError::from(e)
        })?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(Self::parse_error_response(status, &body))
        }
    }

    /// Decode a successful body into `T`
    fn decode<T: DeserializeOwned>(body: &str) -> RemoteResult<T> {
        serde_json::from_str(body).map_err(|e| {
            error!("Failed to parse FitBox response: {}", e);
            RemoteError::decode(e.to_string())
        })
    }

    /// Parse error response from the FitBox service
    fn parse_error_response(status: StatusCode, body: &str) -> RemoteError {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                success: Some(false),
                error,
            }) => RemoteError::rejected(error.unwrap_or_else(|| format!("HTTP {status}"))),
            Ok(ErrorBody {
                error: Some(message),
                ..
            }) => RemoteError::Status {
                status: status.as_u16(),
                message,
            },
            _ => RemoteError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            },
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RemoteResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(RemoteError::from)?;
        let body = Self::read_body(response).await?;
        Self::decode(&body)
    }

    async fn post_json<B, T>(&self, path: &str, payload: &B) -> RemoteResult<T>
    where
        B: serde::Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!(path, "Failed to send request to FitBox service: {}", e);
                RemoteError::from(e)
            })?;
        let body = Self::read_body(response).await?;
        Self::decode(&body)
    }
}

/// Accept RFC 3339 or the naive ISO 8601 timestamps the service emits
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

#[async_trait]
impl FitnessBackend for HttpFitnessBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn health(&self) -> RemoteResult<bool> {
        let response = self
            .client
            .get(self.url(endpoints::HEALTH))
            .send()
            .await
            .map_err(RemoteError::from)?;

        let healthy = response.status().is_success();
        if healthy {
            debug!("FitBox health check passed");
        } else {
            warn!(
                "FitBox health check failed with status: {}",
                response.status()
            );
        }
        Ok(healthy)
    }

    #[instrument(skip(self, input), fields(age = input.age, goal = %input.goal))]
    async fn calculate(&self, input: &ProfileInput) -> RemoteResult<DerivedProfile> {
        let response: CalculateResponse =
            self.post_json(endpoints::CALCULATE, input).await?;

        if !response.success {
            return Err(RemoteError::rejected(
                response
                    .error
                    .unwrap_or_else(|| "calculation reported success: false".to_owned()),
            ));
        }

        let profile = response
            .profile
            .ok_or_else(|| RemoteError::decode("response is missing 'profile'"))?;
        serde_json::from_value(profile)
            .map_err(|e| RemoteError::decode(format!("profile: {e}")))
    }

    #[instrument(skip(self, request), fields(history = request.history.len()))]
    async fn chat(&self, request: &ChatRequest) -> RemoteResult<String> {
        let response: ChatResponse = self.post_json(endpoints::CHAT, request).await?;

        if response.success == Some(false) {
            return Err(RemoteError::rejected(
                response
                    .error
                    .unwrap_or_else(|| "chat reported success: false".to_owned()),
            ));
        }

        response
            .response
            .ok_or_else(|| RemoteError::decode("response is missing 'response'"))
    }

    #[instrument(skip(self, input), fields(kind = %kind))]
    async fn generate_plan(
        &self,
        kind: PlanKind,
        input: &ProfileInput,
    ) -> RemoteResult<GeneratedPlan> {
        let path = match kind {
            PlanKind::Workout => endpoints::GENERATE_WORKOUT,
            PlanKind::Nutrition => endpoints::GENERATE_NUTRITION,
        };
        let response: PlanResponse = self.post_json(path, input).await?;

        if !response.success {
            return Err(RemoteError::rejected(
                response
                    .error
                    .unwrap_or_else(|| format!("{kind} plan reported success: false")),
            ));
        }

        let content = match kind {
            PlanKind::Workout => response.workout_plan,
            PlanKind::Nutrition => response.nutrition_plan,
        }
        .ok_or_else(|| RemoteError::decode(format!("response is missing '{kind}_plan'")))?;

        Ok(GeneratedPlan {
            kind,
            content,
            generated_at: response.generated_at.as_deref().and_then(parse_timestamp),
        })
    }

    #[instrument(skip(self))]
    async fn catalog(&self) -> RemoteResult<Catalog> {
        let levels: ActivityLevelsResponse =
            self.get_json(endpoints::ACTIVITY_LEVELS).await?;
        let goals: GoalsResponse = self.get_json(endpoints::GOALS).await?;

        Ok(Catalog {
            activity_levels: levels.activity_levels,
            goals: goals.goals,
        })
    }
}
