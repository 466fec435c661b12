// Spend types - What a zerocoin spend is being used for
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum SpendType {
    /// Ordinary spend to an output
    Spend = 0,
    /// Used as a staking input
    Stake = 1,
    /// Locked as masternode collateral
    MasternodeCollateral = 2,
    /// Proves ownership for a signed message
    SignMessage = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown zerocoin spend type {0}")]
pub struct UnknownSpendType(pub u8);

impl TryFrom<u8> for SpendType {
    type Error = UnknownSpendType;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(SpendType::Spend),
            1 => Ok(SpendType::Stake),
            2 => Ok(SpendType::MasternodeCollateral),
            3 => Ok(SpendType::SignMessage),
            other => Err(UnknownSpendType(other)),
        }
    }
}

impl From<SpendType> for u8 {
    fn from(kind: SpendType) -> u8 {
        kind as u8
    }
}

impl fmt::Display for SpendType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SpendType::Spend => "spend",
            SpendType::Stake => "stake",
            SpendType::MasternodeCollateral => "masternode-collateral",
            SpendType::SignMessage => "sign-message",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_stable() {
        for tag in 0u8..4 {
            let kind = SpendType::try_from(tag).unwrap();
            assert_eq!(u8::from(kind), tag);
        }
        assert_eq!(SpendType::try_from(2), Ok(SpendType::MasternodeCollateral));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(SpendType::try_from(4), Err(UnknownSpendType(4)));
        assert_eq!(UnknownSpendType(9).to_string(), "unknown zerocoin spend type 9");
    }
}
