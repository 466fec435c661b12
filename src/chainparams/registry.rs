// Profile registry - Builds and owns the four network profiles
use super::networks::{main_profile, regtest_profile, testnet_profile, unittest_profile};
use super::profile::Profile;
use super::{NetworkId, ParamsError};
use crate::types::Timestamp;
use rand::Rng;
use tracing::{debug, info};

pub struct ProfileRegistry {
    main: Profile,
    testnet: Profile,
    regtest: Profile,
    unittest: Profile,
}

impl ProfileRegistry {
    /// Build against the wall clock and the thread RNG
    pub fn build() -> Result<Self, ParamsError> {
        let now = chrono::Utc::now().timestamp();
        Self::build_with(now, &mut rand::thread_rng())
    }

    /// Build every profile and check each genesis block against its declared constants.
    ///
    /// Any mismatch aborts the whole build; no partial registry is returned.
    pub fn build_with<R: Rng>(now: Timestamp, rng: &mut R) -> Result<Self, ParamsError> {
        let main = main_profile()?;
        verify_genesis(&main)?;

        let testnet = testnet_profile(&main)?;
        verify_genesis(&testnet)?;

        let regtest = regtest_profile(&testnet)?;
        verify_genesis(&regtest)?;

        let unittest = unittest_profile(&main);
        verify_genesis(&unittest)?;

        let mut registry = Self {
            main,
            testnet,
            regtest,
            unittest,
        };

        for network in NetworkId::ALL {
            registry.get_mut(network).expand_fixed_seeds(now, rng);
        }

        info!(
            "Chain parameters ready, genesis {}",
            registry.main.genesis_hash()
        );
        Ok(registry)
    }

    pub fn get(&self, network: NetworkId) -> &Profile {
        match network {
            NetworkId::Main => &self.main,
            NetworkId::Testnet => &self.testnet,
            NetworkId::Regtest => &self.regtest,
            NetworkId::Unittest => &self.unittest,
        }
    }

    fn get_mut(&mut self, network: NetworkId) -> &mut Profile {
        match network {
            NetworkId::Main => &mut self.main,
            NetworkId::Testnet => &mut self.testnet,
            NetworkId::Regtest => &mut self.regtest,
            NetworkId::Unittest => &mut self.unittest,
        }
    }

    /// Profiles in construction order
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        NetworkId::ALL.into_iter().map(move |network| self.get(network))
    }
}

fn verify_genesis(profile: &Profile) -> Result<(), ParamsError> {
    let hash = profile.genesis.verify(profile.name())?;
    debug!("{} genesis {}", profile.name(), hash);
    Ok(())
}
