//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (Discord repository) layer. Services are
//! responsible for orchestrating repository calls and working with domain models
//! rather than DTOs or Serenity structs.

pub mod profile;
