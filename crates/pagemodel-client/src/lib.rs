//! Page-model gateway for content-management backends.
//!
//! This crate provides the orchestration layer on top of `pagemodel-core`:
//! - `PageModelClient` - Owns the current model, mediates fetches and updates
//! - `HttpTransport` trait + `ReqwestTransport` - Outbound HTTP seam
//! - `TransferCache` trait + `InMemoryTransferCache` - Server-to-client hand-off
//! - `ModelSubscription` - Broadcast-with-replay access to model updates

mod client;
mod error;
mod subject;
mod transfer;
mod transport;

pub use client::*;
pub use error::*;
pub use subject::*;
pub use transfer::*;
pub use transport::*;
