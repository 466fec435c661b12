// Zerocoin parameters - Lazily derived accumulator modulus, one object per encoding
//
// The modulus numeral is written in decimal digits. Legacy (v1) code paths read
// those digits as hexadecimal, current paths as decimal; the two readings are
// different integers and both are in use.

use num_bigint::BigUint;
use num_traits::{Num, Zero};
use once_cell::sync::{Lazy, OnceCell};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{error, info};

/// Security level used when building parameters from a bare modulus
pub const ZEROCOIN_DEFAULT_SECURITY_LEVEL: u32 = 80;

/// Accumulator modulus numeral shared by every network
pub const ZEROCOIN_MODULUS: &str = concat!(
    "2611768371039217614672375629033469483692174331948614502337926946898835548332392",
    "837181798191622974308004609856844749620122775360155643746970648548828098766663877135817516",
    "474409756794053518687287628708163854649214360017845516672049618626904807790356596988961104",
    "41975623715125151568596064927689077162060115005286915880326049779871215601087283559439315",
    "80000153933916821373093613069375349057295592424339800478178419694968395963297008878208086",
    "62430544050539922578794523633346595560556686810289099589365817615246752280846575862437698",
    "73282232243507759771724089534902554833913733899657718293298067347759181452145073317237484",
    "79791082981433532923953356416304544109974668879762660120464621585097153006330430538698102",
    "273232212824945209515497615032171745978774371453707175733522532648030666996077203002633164",
    "4083925227167608335795493299055694646959577366121774681406339630059012988862078742809165843",
    "0490041745060039313534931792173741",
);

/// How the modulus numeral is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModulusEncoding {
    /// Digits read as base 16 (modulus v1)
    Hex,
    /// Digits read as base 10
    Decimal,
}

impl ModulusEncoding {
    pub fn radix(&self) -> u32 {
        match self {
            ModulusEncoding::Hex => 16,
            ModulusEncoding::Decimal => 10,
        }
    }
}

impl fmt::Display for ModulusEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModulusEncoding::Hex => write!(f, "hex"),
            ModulusEncoding::Decimal => write!(f, "decimal"),
        }
    }
}

/// Parameters handed to the zerocoin proof code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZerocoinParams {
    pub encoding: ModulusEncoding,
    pub accumulator_modulus: BigUint,
    pub security_level: u32,
}

impl ZerocoinParams {
    pub fn new(encoding: ModulusEncoding, accumulator_modulus: BigUint, security_level: u32) -> Self {
        Self {
            encoding,
            accumulator_modulus,
            security_level,
        }
    }

    pub fn modulus_bits(&self) -> u64 {
        self.accumulator_modulus.bits()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZerocoinError {
    #[error("zerocoin modulus numeral is empty")]
    EmptyModulus,

    #[error("zerocoin modulus numeral has a non-decimal character at offset {0}")]
    NonDecimalDigit(usize),

    #[error("zerocoin modulus ({encoding} reading) does not parse: {reason}")]
    Parse {
        encoding: ModulusEncoding,
        reason: String,
    },

    #[error("zerocoin modulus ({0} reading) is zero")]
    ZeroModulus(ModulusEncoding),
}

/// Computes each encoding's parameters at most once, even under concurrent first use
pub struct ZerocoinModulusCache {
    numeral: String,
    hex: OnceCell<ZerocoinParams>,
    decimal: OnceCell<ZerocoinParams>,
    derivations: AtomicUsize,
}

impl ZerocoinModulusCache {
    /// The numeral must be non-empty decimal digits, which are also valid hex digits
    pub fn new(numeral: impl Into<String>) -> Result<Self, ZerocoinError> {
        let numeral = numeral.into();
        if numeral.is_empty() {
            return Err(ZerocoinError::EmptyModulus);
        }
        if let Some(pos) = numeral.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(ZerocoinError::NonDecimalDigit(pos));
        }

        Ok(Self {
            numeral,
            hex: OnceCell::new(),
            decimal: OnceCell::new(),
            derivations: AtomicUsize::new(0),
        })
    }

    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    /// Parameters for the hex reading (`use_modulus_v1`) or the decimal reading
    ///
    /// Panics if the numeral cannot be read in that encoding.
    pub fn params(&self, use_modulus_v1: bool) -> &ZerocoinParams {
        match self.try_params(use_modulus_v1) {
            Ok(params) => params,
            Err(e) => {
                error!("Zerocoin parameter derivation failed: {}", e);
                panic!("zerocoin parameter derivation failed: {}", e);
            }
        }
    }

    /// Like `params`, but reports a bad modulus instead of panicking
    pub fn try_params(&self, use_modulus_v1: bool) -> Result<&ZerocoinParams, ZerocoinError> {
        if use_modulus_v1 {
            self.hex.get_or_try_init(|| self.derive(ModulusEncoding::Hex))
        } else {
            self.decimal.get_or_try_init(|| self.derive(ModulusEncoding::Decimal))
        }
    }

    /// Whether the given encoding has been derived yet
    pub fn is_initialized(&self, use_modulus_v1: bool) -> bool {
        if use_modulus_v1 {
            self.hex.get().is_some()
        } else {
            self.decimal.get().is_some()
        }
    }

    /// Number of derivations performed so far (at most two)
    pub fn derivation_count(&self) -> usize {
        self.derivations.load(Ordering::SeqCst)
    }

    fn derive(&self, encoding: ModulusEncoding) -> Result<ZerocoinParams, ZerocoinError> {
        self.derivations.fetch_add(1, Ordering::SeqCst);

        let modulus = BigUint::from_str_radix(&self.numeral, encoding.radix()).map_err(|e| {
            ZerocoinError::Parse {
                encoding,
                reason: e.to_string(),
            }
        })?;
        if modulus.is_zero() {
            return Err(ZerocoinError::ZeroModulus(encoding));
        }

        let params = ZerocoinParams::new(encoding, modulus, ZEROCOIN_DEFAULT_SECURITY_LEVEL);
        info!(
            "Derived zerocoin parameters ({} modulus, {} bits)",
            encoding,
            params.modulus_bits()
        );
        Ok(params)
    }
}

static ZEROCOIN_CACHE: Lazy<ZerocoinModulusCache> = Lazy::new(|| {
    match ZerocoinModulusCache::new(ZEROCOIN_MODULUS) {
        Ok(cache) => cache,
        Err(e) => {
            error!("Embedded zerocoin modulus is invalid: {}", e);
            panic!("embedded zerocoin modulus is invalid: {}", e);
        }
    }
});

/// Process-wide zerocoin parameters; independent of network selection
pub fn zerocoin_params(use_modulus_v1: bool) -> &'static ZerocoinParams {
    ZEROCOIN_CACHE.params(use_modulus_v1)
}
