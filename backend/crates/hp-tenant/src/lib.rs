//! Tenant configuration retrieval.
//!
//! [`TenantApiClient`] talks to the tenant API; [`TenantResolver`] sits in
//! front of any [`TenantConfigSource`] and guarantees a single in-flight
//! fetch per organization.

mod client;
mod error;
mod resolution;
mod resolver;
mod source;

pub use client::TenantApiClient;
pub use error::{Result, TenantError};
pub use resolution::TenantResolution;
pub use resolver::TenantResolver;
pub use source::TenantConfigSource;

#[cfg(test)]
mod tests;
