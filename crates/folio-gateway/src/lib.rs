//! Concrete collaborators for the Folio console.
//!
//! - [`HttpGateway`] — the remote data store over JSON/HTTP.
//! - [`MemoryGateway`] — an in-process store, useful for testing.
//! - [`DataUrlUploader`] — file-to-embeddable-string conversion.
//!
//! The console crate depends only on the `folio-core` traits; which backend
//! gets injected is the composing layer's choice.

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod upload;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpGateway;
pub use memory::MemoryGateway;
pub use upload::DataUrlUploader;
