//! Upstream REST access for the gateway.
//!
//! [`UpstreamClient`] talks to `{base}/{actor}/{path}` with the caller's
//! actor session attached; every failure comes back as a
//! [`TransportFailure`] value which [`classify`] turns into the gateway's
//! [`platform_api::DomainError`] taxonomy.

mod classify;
mod client;
mod endpoint;
mod failure;

pub use classify::classify;
pub use client::{Credentials, LoginReply, UpstreamClient, UpstreamConfig, UpstreamConfigError};
pub use endpoint::Endpoint;
pub use failure::TransportFailure;
