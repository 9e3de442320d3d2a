//! Room Catalog API — HTTP surface for room amenities and room features.

pub mod app;
pub mod config;
pub mod error;
pub mod message;
pub mod routes;
