//! Utility functions and helpers.

pub mod html;
pub mod http;
pub mod url;

pub use html::{ParserBackend, parse_selector};
pub use http::{HttpTransport, Transport};
