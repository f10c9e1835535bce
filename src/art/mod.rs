//! Recursive partitioning and region fills

/// Fill strategies applied to leaf regions
pub mod fill;
/// Fixed color palette and random fill color selection
pub mod palette;
/// Entry points and the recursive splitter
pub mod partition;
