//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Entity and view types as the server sends them
//! - `wire.rs`: Request bodies and response envelopes
//! - `state.rs`: State containers with update methods (feeds, threads, votes)
//! - `client.rs`: Sub-client with the slice's API calls

pub mod comment;
pub mod community;
pub mod image;
pub mod inbox;
pub mod moderation;
pub mod person;
pub mod post;
pub mod search;
pub mod site;
