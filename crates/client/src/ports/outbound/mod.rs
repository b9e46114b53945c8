//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to interact with the remote
//! phonebook store without depending on concrete implementations.

pub mod api_port;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort};
pub use raw_api_port::RawApiPort;
