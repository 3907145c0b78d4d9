//! Service implementations for the controller

pub mod decorator;
pub mod http_endpoint;

#[cfg(test)]
mod tests;

pub use decorator::{AnsiDecorator, IdentityDecorator, detect_decorator};
pub use http_endpoint::RealSubmissionEndpoint;
