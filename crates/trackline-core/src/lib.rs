//! `trackline-core` — data model and display logic for a tracking timeline
//! feed (order/shipment status updates plus staff/customer comments).
//!
//! The host application fetches a tracker snapshot (raw JSON), deserializes
//! it into the value types here, and renders the groups produced by
//! [`feed::build_feed`]. Nothing in this crate performs I/O or mutates the
//! snapshot; every derived string (template substitution, content fallback)
//! is computed by free functions over plain immutable data.

pub mod acl;
pub mod boundary;
pub mod error;
pub mod event;
pub mod expand;
pub mod feed;
pub mod grouping;
pub mod notify;
pub mod template;
pub mod timeline;
pub mod tracker;
pub mod types;
pub mod user;

pub use error::{Result, TracklineError};
