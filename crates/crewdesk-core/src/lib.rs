//! # crewdesk-core
//!
//! Core crate for CrewDesk Notify. Contains configuration schemas,
//! the domain-event model, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CrewDesk crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
