//! quaylogs-http - HTTP request executor for the registry API.

mod client;
mod request;
mod response;

pub use client::{build_client, USER_AGENT};
pub use request::{BasicAuth, HttpRequest, Method};
pub use response::RawResponse;
