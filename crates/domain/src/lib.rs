//! Domain layer for stopfinder
//!
//! Contains the value objects and domain errors shared by every other crate:
//! validated coordinates, the nearest-stop result and its accessibility code.
//! This layer has no I/O and defines the ubiquitous language.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
