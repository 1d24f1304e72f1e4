//! Network layer: wire types and the lead proxy client.

pub mod api;
pub mod types;
