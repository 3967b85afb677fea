//! Wire types shared between the scheduling front-end and its REST backend.
//!
//! Field names on the wire follow the backend (`nom`, `creationDate`, ...);
//! Rust field names are English.

pub mod domain;
pub mod shared;
pub mod system;
