//! Application layer with panel services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Pure panel services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{CloudReport, NoticeLevel, OutputBlock, PanelOutput};
pub use use_cases::VerifyCloudKeyUseCase;
