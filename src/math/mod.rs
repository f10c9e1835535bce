//! Numeric utilities shared by the painting algorithm

/// Injectable uniform random sources
pub mod random;
