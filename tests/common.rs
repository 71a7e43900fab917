// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Scripted FitBox backend, sample profiles, and orchestrator builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fitbox_client`
//!
//! `ScriptedBackend` answers each endpoint from a queue of `Step`s. A step can
//! resolve immediately, wait for a oneshot release, sleep, or never resolve,
//! which lets tests control the interleaving of overlapping requests.

use std::collections::VecDeque;
use std::future::pending;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use fitbox_client::config::{ClientConfig, ComputePolicy};
use fitbox_client::orchestrator::RequestOrchestrator;
use fitbox_client::remote::{ChatRequest, FitnessBackend};
use fitbox_core::errors::{RemoteError, RemoteResult};
use fitbox_core::models::{
    BmiResult, Catalog, CatalogEntry, DerivedProfile, EnergyValue, GeneratedPlan, MacroSplit,
    NutritionTarget, PlanKind, ProfileInput,
};
use tokio::sync::oneshot;
use tokio::task::yield_now;
use tokio::time::sleep;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// A complete profile whose TDEE identifies it in assertions
pub fn sample_profile(tdee: f64) -> DerivedProfile {
    DerivedProfile {
        bmi: BmiResult {
            value: 24.5,
            category: "Normal".to_owned(),
            recommendation: Some("Keep it up".to_owned()),
        },
        bmr: EnergyValue { value: 1724.0 },
        tdee: EnergyValue { value: tdee },
        nutrition: NutritionTarget {
            target_calories: tdee + 300.0,
            macros: MacroSplit {
                protein_g: 165.0,
                carbs_g: 330.0,
                fat_g: 80.0,
            },
        },
    }
}

/// Default session inputs
pub fn sample_input() -> ProfileInput {
    ProfileInput::default()
}

/// Catalog as the service publishes it
pub fn sample_catalog() -> Catalog {
    Catalog {
        activity_levels: vec![CatalogEntry {
            key: "sedentary".to_owned(),
            description: "Little or no exercise".to_owned(),
        }],
        goals: vec![CatalogEntry {
            key: "maintenance".to_owned(),
            description: "Maintain current weight".to_owned(),
        }],
    }
}

// ============================================================================
// Scripted backend
// ============================================================================

/// How one scripted call resolves
pub enum Step<T> {
    /// Resolve immediately
    Ready(RemoteResult<T>),
    /// Resolve once the paired sender fires (or is dropped)
    Gated(oneshot::Receiver<()>, RemoteResult<T>),
    /// Resolve after sleeping on the tokio clock
    Delayed(Duration, RemoteResult<T>),
    /// Never resolve
    Hang,
}

/// Build a gated step and its release handle
pub fn gated<T>(result: RemoteResult<T>) -> (oneshot::Sender<()>, Step<T>) {
    let (tx, rx) = oneshot::channel();
    (tx, Step::Gated(rx, result))
}

async fn resolve<T>(step: Step<T>) -> RemoteResult<T> {
    match step {
        Step::Ready(result) => result,
        Step::Gated(release, result) => {
            let _ = release.await;
            result
        }
        Step::Delayed(delay, result) => {
            sleep(delay).await;
            result
        }
        Step::Hang => pending().await,
    }
}

fn next<T>(
    queue: &Mutex<VecDeque<Step<T>>>,
    fallback: impl FnOnce() -> RemoteResult<T>,
) -> Step<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Step::Ready(fallback()))
}

/// Backend answering from per-endpoint queues; empty queues succeed
#[derive(Default)]
pub struct ScriptedBackend {
    health: Mutex<VecDeque<Step<bool>>>,
    calculate: Mutex<VecDeque<Step<DerivedProfile>>>,
    chat: Mutex<VecDeque<Step<String>>>,
    plans: Mutex<VecDeque<Step<GeneratedPlan>>>,
    catalog: Mutex<VecDeque<Step<Catalog>>>,
    health_calls: AtomicUsize,
    calculate_calls: AtomicUsize,
    plan_calls: AtomicUsize,
    catalog_calls: AtomicUsize,
    chat_requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        init_test_logging();
        Arc::new(Self::default())
    }

    pub fn push_health(&self, step: Step<bool>) {
        self.health.lock().unwrap().push_back(step);
    }

    pub fn push_calculate(&self, step: Step<DerivedProfile>) {
        self.calculate.lock().unwrap().push_back(step);
    }

    pub fn push_chat(&self, step: Step<String>) {
        self.chat.lock().unwrap().push_back(step);
    }

    pub fn push_plan(&self, step: Step<GeneratedPlan>) {
        self.plans.lock().unwrap().push_back(step);
    }

    pub fn push_catalog(&self, step: Step<Catalog>) {
        self.catalog.lock().unwrap().push_back(step);
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn calculate_calls(&self) -> usize {
        self.calculate_calls.load(Ordering::SeqCst)
    }

    pub fn plan_calls(&self) -> usize {
        self.plan_calls.load(Ordering::SeqCst)
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_requests.lock().unwrap().len()
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FitnessBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn health(&self) -> RemoteResult<bool> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        let step = next(&self.health, || Ok(true));
        resolve(step).await
    }

    async fn calculate(&self, _input: &ProfileInput) -> RemoteResult<DerivedProfile> {
        self.calculate_calls.fetch_add(1, Ordering::SeqCst);
        let step = next(&self.calculate, || Ok(sample_profile(2680.0)));
        resolve(step).await
    }

    async fn chat(&self, request: &ChatRequest) -> RemoteResult<String> {
        self.chat_requests.lock().unwrap().push(request.clone());
        let message = request.message.clone();
        let step = next(&self.chat, || Ok(format!("echo: {message}")));
        resolve(step).await
    }

    async fn generate_plan(
        &self,
        kind: PlanKind,
        _input: &ProfileInput,
    ) -> RemoteResult<GeneratedPlan> {
        self.plan_calls.fetch_add(1, Ordering::SeqCst);
        let step = next(&self.plans, || {
            Ok(GeneratedPlan {
                kind,
                content: format!("{kind} plan body"),
                generated_at: None,
            })
        });
        resolve(step).await
    }

    async fn catalog(&self) -> RemoteResult<Catalog> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        let step = next(&self.catalog, || Ok(sample_catalog()));
        resolve(step).await
    }
}

// ============================================================================
// Orchestrator builders
// ============================================================================

/// Orchestrator over `backend` with default configuration
pub fn orchestrator(backend: &Arc<ScriptedBackend>) -> Arc<RequestOrchestrator> {
    orchestrator_with(backend, ClientConfig::default())
}

/// Orchestrator over `backend` with the latest-wins compute policy
pub fn latest_wins_orchestrator(backend: &Arc<ScriptedBackend>) -> Arc<RequestOrchestrator> {
    let config = ClientConfig {
        compute_policy: ComputePolicy::LatestWins,
        ..ClientConfig::default()
    };
    orchestrator_with(backend, config)
}

pub fn orchestrator_with(
    backend: &Arc<ScriptedBackend>,
    config: ClientConfig,
) -> Arc<RequestOrchestrator> {
    let backend: Arc<dyn FitnessBackend> = Arc::clone(backend) as Arc<dyn FitnessBackend>;
    Arc::new(RequestOrchestrator::new(backend, config))
}

/// Orchestrator that already holds a committed profile
pub async fn ready_orchestrator(backend: &Arc<ScriptedBackend>) -> Arc<RequestOrchestrator> {
    let orchestrator = orchestrator(backend);
    orchestrator.compute_profile(&sample_input()).await.unwrap();
    orchestrator
}

/// Yield until `condition` holds, so spawned tasks reach their await points
pub async fn wait_until(condition: impl Fn() -> bool) {
    for _ in 0..1_000 {
        if condition() {
            return;
        }
        yield_now().await;
    }
    assert!(condition(), "condition not reached");
}

/// A transport failure as reqwest would report a refused connection
pub fn connection_refused() -> RemoteError {
    RemoteError::transport("error sending request: connection refused")
}
