//! # carquery Relay
//!
//! Background relay between UI surfaces and the backend.
//!
//! A surface sends a [`RelayRequest`](carquery_protocols::RelayRequest)
//! through a [`RelayHandle`] and awaits exactly one
//! [`RelayResponse`](carquery_protocols::RelayResponse). The relay task
//! performs the backend call or opens a persistent window on the surface's
//! behalf.
//!
//! ## Usage
//!
//! ```ignore
//! use carquery_relay::{Relay, SessionWindowHost};
//!
//! let relay = Relay::new(backend, Arc::new(SessionWindowHost::new()));
//! let handle = relay.spawn();
//! let response = handle.send(RelayRequest::fetch("Find the variant ...")).await?;
//! ```

mod handle;
mod host;
mod relay;

pub use handle::RelayHandle;
pub use host::{OpenWindow, SessionWindowHost};
pub use relay::Relay;
