//! Facade layer: the session state container and its seed data set.

pub mod seed;
pub mod tracker;

pub use tracker::Tracker;
