//! Network layer: HTTP wrapper, wire types, and the services built on them.

pub mod auth;
pub mod cars;
pub mod http;
pub mod types;
