// CLI Configuration - Resolve which network the command runs against
use crate::cli::NetworkArgs;
use qbic_chainparams::{NetworkId, ParamsError};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamsConfig {
    pub network: NetworkId,
}

impl ParamsConfig {
    /// `--testnet` / `--regtest` follow the node's legacy switches; `--network`
    /// must agree with them when both are given.
    pub fn from_args(args: &NetworkArgs) -> Result<Self, ConfigError> {
        let legacy = match (args.testnet, args.regtest) {
            (true, true) => return Err(ParamsError::ConflictingNetworkFlags.into()),
            (true, false) => Some(NetworkId::Testnet),
            (false, true) => Some(NetworkId::Regtest),
            (false, false) => None,
        };

        let named = args
            .network
            .as_deref()
            .map(str::parse::<NetworkId>)
            .transpose()?;

        let network = match (named, legacy) {
            (Some(named), Some(legacy)) if named != legacy => {
                return Err(ConfigError::NetworkMismatch { named, legacy });
            }
            (Some(network), _) | (None, Some(network)) => network,
            (None, None) => NetworkId::Main,
        };

        debug!("Resolved network {}", network);
        Ok(Self { network })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("--network {named} conflicts with --{legacy}")]
    NetworkMismatch { named: NetworkId, legacy: NetworkId },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(network: Option<&str>, testnet: bool, regtest: bool) -> NetworkArgs {
        NetworkArgs {
            network: network.map(str::to_string),
            testnet,
            regtest,
        }
    }

    #[test]
    fn test_defaults_to_main() {
        let config = ParamsConfig::from_args(&args(None, false, false)).unwrap();
        assert_eq!(config.network, NetworkId::Main);
    }

    #[test]
    fn test_legacy_switches() {
        assert_eq!(
            ParamsConfig::from_args(&args(None, true, false)).unwrap().network,
            NetworkId::Testnet
        );
        assert_eq!(
            ParamsConfig::from_args(&args(None, false, true)).unwrap().network,
            NetworkId::Regtest
        );
    }

    #[test]
    fn test_both_switches_rejected() {
        let result = ParamsConfig::from_args(&args(None, true, true));
        assert!(matches!(
            result,
            Err(ConfigError::Params(ParamsError::ConflictingNetworkFlags))
        ));
    }

    #[test]
    fn test_named_network() {
        let config = ParamsConfig::from_args(&args(Some("unittest"), false, false)).unwrap();
        assert_eq!(config.network, NetworkId::Unittest);

        let agreeing = ParamsConfig::from_args(&args(Some("test"), true, false)).unwrap();
        assert_eq!(agreeing.network, NetworkId::Testnet);
    }

    #[test]
    fn test_named_network_errors() {
        assert!(matches!(
            ParamsConfig::from_args(&args(Some("main"), false, true)),
            Err(ConfigError::NetworkMismatch {
                named: NetworkId::Main,
                legacy: NetworkId::Regtest
            })
        ));
        assert!(matches!(
            ParamsConfig::from_args(&args(Some("moon"), false, false)),
            Err(ConfigError::Params(ParamsError::UnknownNetwork(_)))
        ));
    }
}
