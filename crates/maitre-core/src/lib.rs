//! Maitre core - canonical elicitation types.
//!
//! This crate is the single source of truth for the elicitation data model
//! shared by the MCP layer and the console frontend. The MCP layer converts
//! rmcp wire types into these and back; no MCP-local duplicates exist.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

mod elicitation;

pub use elicitation::{
    ElicitationAction, ElicitationFault, ElicitationRequest, ElicitationResponse, INTERNAL_ERROR,
};
