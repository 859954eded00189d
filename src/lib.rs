//! Gig Search Library
//!
//! This library crate defines the modules behind the gig search API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`gigs`**: The search service. Turns query parameters into a store query,
//!   re-filters keyword results in memory, shapes records and serves them over HTTP
//!   with pagination headers.
//! - **`storage`**: The record store. Defines the query and attribute-lookup
//!   interfaces and an in-memory implementation seeded from JSON.
//! - **`config`**: Command-line and environment configuration.

pub mod config;
pub mod gigs;
pub mod storage;
