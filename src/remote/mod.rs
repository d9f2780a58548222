//! Remote Layer
//!
//! Abstraction over the externally owned paginated collection and its HTTP
//! implementation.

mod http;
mod source;

pub use http::HttpRemoteSource;
pub use source::RemoteSource;
