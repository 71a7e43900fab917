// ABOUTME: Session-scoped owner of profile, conversation and remote request lifecycle
// ABOUTME: Enforces preconditions, timeouts, in-flight exclusion and the compute staleness guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Orchestrator
//!
//! `RequestOrchestrator` owns everything a session mutates: the profile slot,
//! the conversation store, the connectivity flag and the conversation id.
//! Front ends call its operations and read state through snapshots.
//!
//! Every remote call is bounded by its configured timeout and every failure is
//! translated into a `ClientError` here; nothing is retried.
//!
//! State lives behind a `std::sync::Mutex` that is only held for short,
//! synchronous sections and never across an `.await`.

mod in_flight;

pub use in_flight::InFlight;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use fitbox_core::constants::CHAT_FALLBACK_MESSAGE;
use fitbox_core::errors::{ClientError, ClientResult, RemoteError, RemoteResult};
use fitbox_core::models::{
    Catalog, ChatTurn, DerivedProfile, GeneratedPlan, OperationKind, PlanKind, ProfileInput,
};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::{ClientConfig, ComputePolicy};
use crate::conversation::{ConversationStore, WindowedContext};
use crate::http_client::initialize_shared_client;
use crate::remote::{ChatRequest, FitnessBackend, HttpFitnessBackend};
use crate::session::{Affordances, ProfileSlot, SessionPhase, SessionSnapshot};
use in_flight::{InFlightGuard, InFlightTracker};

/// Result of a compute request that reached the service successfully
#[derive(Debug, Clone, PartialEq)]
pub enum ComputeOutcome {
    /// The profile was stored and is now current
    Committed(Arc<DerivedProfile>),
    /// A later request was issued (or the session reset) before this one
    /// completed; the response was discarded
    Superseded,
}

impl ComputeOutcome {
    /// Committed profile, if this outcome stored one
    #[must_use]
    pub fn profile(&self) -> Option<&Arc<DerivedProfile>> {
        match self {
            Self::Committed(profile) => Some(profile),
            Self::Superseded => None,
        }
    }
}

/// What one chat invocation added to the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReceipt {
    /// Index of the user turn
    pub user_index: usize,
    /// Index of the assistant turn; `None` if the session was reset while the
    /// request was pending and the reply was dropped
    pub assistant_index: Option<usize>,
    /// The assistant turn (reply or fallback notice)
    pub reply: ChatTurn,
    /// `Err(ChatDeliveryFailed)` when `reply` is the fallback notice
    pub delivery: ClientResult<()>,
}

impl ChatReceipt {
    /// Whether the remote assistant answered
    #[must_use]
    pub const fn delivered(&self) -> bool {
        self.delivery.is_ok()
    }
}

/// Mutable session data guarded by one lock
struct SessionState {
    slot: ProfileSlot,
    conversation: ConversationStore,
    conversation_id: String,
    epoch: u64,
}

impl SessionState {
    fn new() -> Self {
        Self {
            slot: ProfileSlot::new(),
            conversation: ConversationStore::new(),
            conversation_id: new_conversation_id(),
            epoch: 0,
        }
    }
}

fn new_conversation_id() -> String {
    format!("session_{}", Uuid::new_v4().simple())
}

/// Bound `call` by `limit`; expiry becomes `RemoteError::Timeout`
async fn bounded<T, F>(limit: Duration, call: F) -> RemoteResult<T>
where
    F: Future<Output = RemoteResult<T>>,
{
    timeout(limit, call)
        .await
        .unwrap_or_else(|_| Err(RemoteError::Timeout(limit)))
}

/// Session-scoped coordinator of all remote operations
pub struct RequestOrchestrator {
    backend: Arc<dyn FitnessBackend>,
    config: ClientConfig,
    state: Mutex<SessionState>,
    connectivity: AtomicBool,
    in_flight: Arc<InFlightTracker>,
}

impl RequestOrchestrator {
    /// Create an orchestrator driving `backend`
    #[must_use]
    pub fn new(backend: Arc<dyn FitnessBackend>, config: ClientConfig) -> Self {
        debug!(
            backend = backend.name(),
            policy = %config.compute_policy,
            "Creating request orchestrator"
        );
        Self {
            backend,
            config,
            state: Mutex::new(SessionState::new()),
            connectivity: AtomicBool::new(false),
            in_flight: Arc::new(InFlightTracker::default()),
        }
    }

    /// Create an orchestrator talking HTTP to `config.api_url`
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        initialize_shared_client(&config.timeouts);
        let backend = Arc::new(HttpFitnessBackend::new(&config.api_url));
        Self::new(backend, config)
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Session state lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Probe reachability and record the result
    ///
    /// Never fails: transport errors, timeouts and non-success statuses all
    /// mean unreachable.
    #[instrument(skip(self), fields(backend = self.backend.name()))]
    pub async fn probe_health(&self) -> bool {
        let _guard = self.in_flight.enter(OperationKind::Health);

        let reachable = match bounded(self.config.timeouts.health, self.backend.health()).await {
            Ok(healthy) => healthy,
            Err(e) => {
                let err = ClientError::connectivity(&e);
                debug!(code = err.code(), "{err}");
                false
            }
        };

        let previous = self.connectivity.swap(reachable, Ordering::AcqRel);
        if previous != reachable {
            info!(reachable, "Connectivity changed");
        }
        reachable
    }

    /// Request a derived profile for `input`
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `input` fails validation (no request is sent)
    /// - `OperationInFlight(Compute)` under `RejectWhileInFlight` when another
    ///   compute is pending
    /// - `ComputationFailed` on any remote failure; the stored profile is unchanged
    #[instrument(skip(self, input), fields(backend = self.backend.name()))]
    pub async fn compute_profile(&self, input: &ProfileInput) -> ClientResult<ComputeOutcome> {
        input.validate()?;
        let _guard = self.enter_compute()?;

        let ticket = self.state().slot.begin();
        debug!(ticket = ticket.sequence(), "Submitting profile computation");

        let profile = bounded(self.config.timeouts.calculate, self.backend.calculate(input))
            .await
            .map_err(|e| {
                warn!(ticket = ticket.sequence(), "Profile computation failed: {e}");
                ClientError::computation_failed(&e)
            })?;

        let profile = Arc::new(profile);
        if self.state().slot.commit(ticket, Arc::clone(&profile)) {
            info!(
                ticket = ticket.sequence(),
                bmi = profile.bmi.value,
                tdee = profile.tdee.value,
                "Profile committed"
            );
            Ok(ComputeOutcome::Committed(profile))
        } else {
            debug!(ticket = ticket.sequence(), "Discarding superseded profile");
            Ok(ComputeOutcome::Superseded)
        }
    }

    fn enter_compute(&self) -> ClientResult<InFlightGuard> {
        match self.config.compute_policy {
            ComputePolicy::RejectWhileInFlight => self
                .in_flight
                .try_enter_exclusive(OperationKind::Compute)
                .ok_or(ClientError::OperationInFlight(OperationKind::Compute)),
            ComputePolicy::LatestWins => Ok(self.in_flight.enter(OperationKind::Compute)),
        }
    }

    /// Send `text` with an explicit context window
    ///
    /// The user turn is appended before the request is sent; the assistant
    /// turn (reply or fallback notice) is appended when it settles.
    ///
    /// # Errors
    ///
    /// - `EmptyMessage` if `text` is blank
    /// - `InvalidInput` if `input` fails validation (the service recomputes
    ///   the profile from `user_data` on every chat request)
    /// - `ProfileRequired` if no profile has been computed
    ///
    /// In each case nothing is appended and no request is sent. Delivery
    /// failures are reported in `ChatReceipt::delivery`.
    #[instrument(skip_all, fields(backend = self.backend.name(), history = history.len()))]
    pub async fn send_chat_turn(
        &self,
        input: &ProfileInput,
        text: &str,
        history: WindowedContext,
    ) -> ClientResult<ChatReceipt> {
        let message = text.trim();
        if message.is_empty() {
            return Err(ClientError::EmptyMessage);
        }
        input.validate()?;

        let (user_index, conversation_id, epoch) = {
            let mut state = self.state();
            if !state.slot.has_profile() {
                return Err(ClientError::ProfileRequired);
            }
            let index = state.conversation.append(ChatTurn::user(message));
            (index, state.conversation_id.clone(), state.epoch)
        };

        let _guard = self.in_flight.enter(OperationKind::Chat);
        let request = ChatRequest {
            user_data: *input,
            message: message.to_owned(),
            conversation_id,
            history: history.to_history(),
        };

        let (reply, delivery) =
            match bounded(self.config.timeouts.chat, self.backend.chat(&request)).await {
                Ok(answer) => (ChatTurn::assistant(answer), Ok(())),
                Err(e) => {
                    warn!("Chat delivery failed: {e}");
                    (
                        ChatTurn::fallback(CHAT_FALLBACK_MESSAGE),
                        Err(ClientError::chat_delivery_failed(&e)),
                    )
                }
            };

        let assistant_index = {
            let mut state = self.state();
            (state.epoch == epoch).then(|| state.conversation.append(reply.clone()))
        };
        if assistant_index.is_none() {
            debug!("Session reset while chat was pending; reply dropped");
        }

        Ok(ChatReceipt {
            user_index,
            assistant_index,
            reply,
            delivery,
        })
    }

    /// Send `text` with the configured window over the current conversation
    ///
    /// The window is taken before the user turn is appended.
    ///
    /// # Errors
    ///
    /// Same as [`Self::send_chat_turn`]
    pub async fn submit_chat(
        &self,
        input: &ProfileInput,
        text: &str,
    ) -> ClientResult<ChatReceipt> {
        let history = self.windowed_context(self.config.history_window);
        self.send_chat_turn(input, text, history).await
    }

    /// Generate a weekly workout plan
    ///
    /// # Errors
    ///
    /// `InvalidInput`, `ProfileRequired`, or `PlanGenerationFailed`
    pub async fn generate_workout_plan(
        &self,
        input: &ProfileInput,
    ) -> ClientResult<GeneratedPlan> {
        self.generate_plan(PlanKind::Workout, input).await
    }

    /// Generate a nutrition plan
    ///
    /// # Errors
    ///
    /// `InvalidInput`, `ProfileRequired`, or `PlanGenerationFailed`
    pub async fn generate_nutrition_plan(
        &self,
        input: &ProfileInput,
    ) -> ClientResult<GeneratedPlan> {
        self.generate_plan(PlanKind::Nutrition, input).await
    }

    #[instrument(skip(self, input), fields(backend = self.backend.name()))]
    async fn generate_plan(
        &self,
        kind: PlanKind,
        input: &ProfileInput,
    ) -> ClientResult<GeneratedPlan> {
        input.validate()?;
        if !self.state().slot.has_profile() {
            return Err(ClientError::ProfileRequired);
        }

        let _guard = self.in_flight.enter(OperationKind::Plan);
        bounded(
            self.config.timeouts.plan,
            self.backend.generate_plan(kind, input),
        )
        .await
        .map_err(|e| {
            warn!("Plan generation failed: {e}");
            ClientError::plan_generation_failed(kind, &e)
        })
    }

    /// Fetch the activity levels and goals the service supports
    ///
    /// # Errors
    ///
    /// `CatalogUnavailable` on any remote failure
    #[instrument(skip(self), fields(backend = self.backend.name()))]
    pub async fn fetch_catalog(&self) -> ClientResult<Catalog> {
        let _guard = self.in_flight.enter(OperationKind::Catalog);
        bounded(self.config.timeouts.catalog, self.backend.catalog())
            .await
            .map_err(|e| {
                warn!("Catalog lookup failed: {e}");
                ClientError::catalog_unavailable(&e)
            })
    }

    /// Drop the profile and conversation and start a fresh conversation id
    ///
    /// Pending computes can no longer commit and pending chat replies are dropped.
    pub fn start_new_session(&self) {
        let mut state = self.state();
        state.slot.reset();
        state.conversation.clear();
        state.conversation_id = new_conversation_id();
        state.epoch += 1;
        info!(conversation_id = %state.conversation_id, "Started new session");
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    /// Current session phase
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        SessionPhase::from_profile_present(self.state().slot.has_profile())
    }

    /// Current profile, if any
    #[must_use]
    pub fn profile(&self) -> Option<Arc<DerivedProfile>> {
        self.state().slot.profile()
    }

    /// Copy of the full conversation
    #[must_use]
    pub fn conversation(&self) -> ConversationStore {
        self.state().conversation.clone()
    }

    /// The most recent `max_turns` turns
    #[must_use]
    pub fn windowed_context(&self, max_turns: usize) -> WindowedContext {
        self.state().conversation.windowed_context(max_turns)
    }

    /// Last known reachability
    #[must_use]
    pub fn connectivity(&self) -> bool {
        self.connectivity.load(Ordering::Acquire)
    }

    /// Operation kinds currently pending
    #[must_use]
    pub fn in_flight(&self) -> InFlight {
        self.in_flight.snapshot()
    }

    /// Actions currently enabled for `draft`
    #[must_use]
    pub fn affordances(&self, draft: &str) -> Affordances {
        Affordances::derive(self.phase(), self.in_flight(), draft)
    }

    /// Session identifier sent with chat requests
    #[must_use]
    pub fn conversation_id(&self) -> String {
        self.state().conversation_id.clone()
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Point-in-time copy of the session for export
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state();
        let profile = state.slot.profile();
        SessionSnapshot {
            conversation_id: state.conversation_id.clone(),
            phase: SessionPhase::from_profile_present(profile.is_some()),
            connectivity: self.connectivity(),
            profile: profile.map(|p| (*p).clone()),
            conversation: state.conversation.turns().to_vec(),
            captured_at: Utc::now(),
        }
    }
}
