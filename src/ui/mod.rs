//! View building blocks for the catalog window

pub mod card;
pub mod header;
