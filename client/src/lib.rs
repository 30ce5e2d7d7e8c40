//! Client for the groupald group-management web service.
//!
//! groupald manages "sgroups": group-like entities identified by a string
//! id, their membership/rights relations, and the individual subjects
//! behind them. This crate is a pure consumer of the service's HTTP API:
//! - every request carries an `Authorization: Bearer <token>` header
//! - read operations are GETs with query parameters, mutations are POSTs
//!   with query parameters plus a form-encoded body
//! - every response body is parsed into a generic JSON document before
//!   being projected into a typed result
//!
//! Each call performs exactly one blocking HTTP round trip; the client
//! holds no mutable state and can be shared freely across threads.

pub mod client;
pub mod doc;
pub mod error;
pub mod request;
pub mod types;

pub use client::GroupaldClient;
pub use error::GroupaldError;
pub use request::RequestExecutor;
pub use types::{Attrs, Mod, Mright};
