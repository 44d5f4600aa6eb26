//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types used by the render pipeline
//! - `wire.rs`: Raw serde structs matching the collaborator's JSON
//! - `convert.rs`: `TryFrom`/`From` conversions between the two
//! - `state.rs`: State holders owned by the scheduler (prices only)
//! - `client.rs`: Collaborator traits and their HTTP-backed implementations

pub mod display;
pub mod price;
