//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `From` conversions
//! - `client.rs` — Sub-client with HTTP methods

pub mod collection;
pub mod floor_price;
