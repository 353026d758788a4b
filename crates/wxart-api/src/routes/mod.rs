//! HTTP route modules.

pub mod generate;
pub mod geocode;
pub mod scene;
