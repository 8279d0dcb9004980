//! Stateful session around the generator

/// Inventory, grid and matrix kept consistent across mutations
pub mod store;

pub use store::PanelStore;
