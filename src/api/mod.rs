//! API Module
//!
//! Fetch layer for the PokeAPI.
//!
//! # Resources
//! - `GET /location-area` - Paginated listing of location areas
//! - `GET /location-area/{name}` - One area with its Pokemon encounters
//! - `GET /pokemon/{name}` - One Pokemon

pub mod client;

pub use client::PokeClient;
