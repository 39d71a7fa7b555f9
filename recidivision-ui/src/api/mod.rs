//! API Module
//!
//! HTTP calls to the prediction service.

pub mod client;

pub use client::{login, predict};
