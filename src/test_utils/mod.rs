//! Test utilities shared by unit and route tests.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory repository implementations for mocking persistence
//! - A builder that assembles an `AppState` over those mocks

mod app_state_builder;
mod factories;
mod identity_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use identity_mocks::*;
