//! Test helpers module
//!
//! Mock servers for the backend and the Viber API, builders for inbound
//! callbacks, and a test context wiring the application against the mocks.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_context;
pub mod test_data;
pub mod viber_mock;

pub use backend_mock::*;
pub use test_context::*;
pub use test_data::*;
pub use viber_mock::*;
