//! Port definitions for the client.
//!
//! Ports are the trait seams between the application/UI layers and the
//! infrastructure adapters that talk to the outside world.

pub mod outbound;
