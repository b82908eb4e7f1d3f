//! Server-side API backend and profile assembly logic.
//!
//! This module contains the backend that turns a username into a render-ready
//! Discord profile. The backend uses Axum as the web framework and Serenity's HTTP
//! client for Discord REST calls. The bot credential never leaves this module.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO responses
//! - **Service Layer** (`service/`) - The member-profile assembly pipeline
//! - **Data Layer** (`data/`) - The `DiscordDirectory` seam and its Serenity implementation
//! - **Model Layer** (`model/`) - Domain models, badge decoding and role merging
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (Discord HTTP client, guild id)
//! - **Startup** (`startup`) - Initialization of the Discord HTTP client
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives `GET /api/profile/{username}`
//! 2. **Controller** builds the service from shared state
//! 3. **Service** resolves the member, then fetches user details and the role
//!    catalog concurrently through the data layer
//! 4. **Model** decodes badges and merges roles
//! 5. **Controller** converts the assembled profile to a DTO, or maps a missing
//!    member to 404
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
