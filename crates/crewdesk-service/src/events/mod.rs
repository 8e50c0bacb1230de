//! Team event publication and deadline sweeps.

pub mod service;

pub use service::TeamEventService;
