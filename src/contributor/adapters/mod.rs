//! Adapter implementations for contributor ports.

pub mod memory;
pub mod random;
