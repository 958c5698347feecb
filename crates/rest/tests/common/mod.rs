//! Common test utilities for REST API testing.
//!
//! - [`harness`] - REST API test harness and failing providers
//! - [`fixtures`] - Fixture library catalog

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
