//! JSON bodies exchanged over the HTTP API.
mod request;
mod response;

pub use request::*;
pub use response::*;
