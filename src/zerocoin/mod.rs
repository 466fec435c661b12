// Zerocoin - Accumulator parameters and spend kinds
pub mod params;
pub mod spend_type;

pub use params::{
    zerocoin_params, ModulusEncoding, ZerocoinError, ZerocoinModulusCache, ZerocoinParams,
    ZEROCOIN_DEFAULT_SECURITY_LEVEL, ZEROCOIN_MODULUS,
};
pub use spend_type::{SpendType, UnknownSpendType};
