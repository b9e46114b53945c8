//! Test utilities for outbound ports
//!
//! This module provides a recording implementation of `RawApiPort` for
//! testing. The mock belongs in the adapters layer (not ports) because it
//! is a concrete implementation of a port trait; test utilities live close
//! to the implementations they stand in for.

#[cfg(any(test, feature = "testing"))]
mod recording_api_port;

#[cfg(any(test, feature = "testing"))]
pub use recording_api_port::{RecordedRequest, RecordingApiPort};
