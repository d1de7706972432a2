//! HTTP API for the reputation hub
//!
//! JSON over Actix-Web. Every body is wrapped in [`ApiResponse`].

mod rest;
mod health;
mod responses;

pub use rest::*;
pub use health::*;
pub use responses::*;
