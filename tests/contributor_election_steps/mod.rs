//! Step definitions for contributor election scenarios.

pub mod world;
