//! Shared types and rules of the booking intake form

pub mod domain;
pub mod enums;
pub mod shared;
