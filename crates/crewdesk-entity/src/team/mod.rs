//! Read-side team model.

pub mod model;

pub use model::Team;
