//! # crewdesk-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for CrewDesk Notify.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
