//! Request and response processing shared by every controller.
//!
//! - `envelope` wraps successful handler output in the uniform `ApiResponse` body
//! - `validation` extracts JSON request bodies and runs their validation rules
//!   before a handler sees them

pub mod envelope;
pub mod validation;
