// Genesis - Genesis block descriptor and self-check
pub mod block;
pub mod spec;

pub use block::{BlockHeader, Script, Transaction};
pub use spec::{GenesisBlock, GenesisBuilder, GenesisError, GenesisSpec};
