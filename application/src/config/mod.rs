//! Application-level configuration.
//!
//! - [`TransformParams`] — timeout and failure policy for answer transformation

pub mod transform_params;

pub use transform_params::{TransformFailurePolicy, TransformParams};
