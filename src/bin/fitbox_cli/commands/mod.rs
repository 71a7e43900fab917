// ABOUTME: Re-exports command modules for fitbox-cli
// ABOUTME: Session, chat and plan commands built on the request orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod chat;
pub mod plan;
pub mod session;
