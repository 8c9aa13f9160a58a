//! Plex episode retitling - shared modules for the CLI binary.

pub mod emit;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod repo;
