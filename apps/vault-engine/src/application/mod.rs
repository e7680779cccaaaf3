//! Application Layer
//!
//! Use cases orchestrate the vault aggregate against the injected ports;
//! services back the value queries; DTOs shape the query surface.

pub mod dto;
pub mod ports;
pub mod services;
pub mod use_cases;
