//! Core abstractions for the page-model delivery SDK.
//!
//! This crate provides the framework-independent building blocks:
//! - `PageModel` - Typed page-model document
//! - `RequestContext` / `RenderMode` - Per-request state
//! - `ApiUrls` - Endpoint configuration
//! - URL building, form encoding, component merging, metadata handling

mod channel;
mod config;
mod context;
mod forms;
mod merge;
mod meta;
mod model;
mod url;

pub use channel::*;
pub use config::*;
pub use context::*;
pub use forms::*;
pub use merge::*;
pub use meta::*;
pub use model::*;
pub use url::*;
