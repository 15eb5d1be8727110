//! Response-shaping middleware.
//!
//! - [`timeout`] -- Gives whole-request timeouts the JSON error shape.

pub mod timeout;
