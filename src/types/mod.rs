// Types - Shared primitive types
pub mod primitives;

pub use primitives::*;
