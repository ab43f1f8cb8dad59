//! Test utilities
//!
//! Manual mock implementations of the transport traits.
//!
//! Why manual mocks instead of mockall?
//! - The recorded-call shape we assert on (url + resolved timeout, effective
//!   TLS context + proxies) is clearer as a plain struct than as macro
//!   expectations.
//! - Manual mocks are more explicit and easier to debug.

pub mod mocks;

pub use mocks::*;
