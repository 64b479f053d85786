//! Data models shared between services and menu screens.
//!
//! Each model is produced by one service query and consumed by exactly one
//! screen render; nothing here outlives a single menu interaction.

pub mod chart;
pub mod ticker;

// Re-export commonly used types for convenience
pub use chart::PricePoint;
pub use ticker::{TickerSnapshot, Trend};
