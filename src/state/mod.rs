//! State management module
//!
//! This module handles all application state, including:
//! - The fixed outfit catalog (catalog.rs)
//! - Shared data structures (data.rs)
//! - Category/search filtering (filter.rs)
//! - Favorites and their persistence (favorites.rs, storage.rs)

pub mod catalog;
pub mod data;
pub mod favorites;
pub mod filter;
pub mod storage;
