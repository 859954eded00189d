//! Gig Storage Module
//!
//! The record store behind the search service.
//!
//! ## Core Concepts
//! - **Protocol**: `GigStore` runs structured, full-text and paginated queries;
//!   `AttributeAccessor` reads named attributes and related songs per record.
//! - **Memory store**: `MemoryStore` keeps gigs and songs in concurrent maps and
//!   implements both traits.
//! - **Seeding**: `SeedData` loads gigs and songs from a JSON document.

pub mod memory;
pub mod protocol;
pub mod records;
pub mod seed;
pub mod text;

#[cfg(test)]
mod tests;
