//! Route modules, one per endpoint group.

pub mod health;
pub mod room_amenities;
pub mod room_features;
