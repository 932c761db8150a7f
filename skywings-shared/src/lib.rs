//! Shared data model for the SkyWings services.
//!
//! Every service speaks the same JSON shapes: entities are serialized with
//! camelCase field names and enumerations as SCREAMING_SNAKE_CASE strings.

pub mod dto;
pub mod models;
pub mod pii;

pub use pii::Masked;
