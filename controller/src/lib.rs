//! Lead form controller library
//!
//! This library implements the client side of the lead capture flow: draft
//! field state, the submission lifecycle, and user-visible status, driven
//! against an injected submission endpoint. The four landing-page variants
//! consume one controller through interchangeable presentation configs.

pub mod controller_impl;
pub mod error;
pub mod presentation;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use controller_impl::{FormController, status_line};
pub use error::{ControllerError, ControllerResult};
pub use presentation::SitePresentation;
pub use traits::*;
pub use types::*;

// Re-export service implementations
pub use services::{AnsiDecorator, IdentityDecorator, RealSubmissionEndpoint, detect_decorator};
