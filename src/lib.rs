//! Drishti - a terminal crowd safety assistant for large events.
//!
//! Six panels cover seating guidance, wristband zone checks, lost child
//! reports, water drone dispatch, crowd voice alerts and a Google Cloud key
//! check. Only the cloud check talks to an external service.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing panel services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "drishti";
