// Active profile selector - Which network this process runs on
//
// Lifecycle: select once at startup, read from anywhere afterwards. Selecting
// the same network again is a no-op; switching to another one is refused.

use super::modifiable::ModifiableParams;
use super::profile::Profile;
use super::registry::ProfileRegistry;
use super::{NetworkId, ParamsError};
use once_cell::sync::{Lazy, OnceCell};
use tracing::{error, info, warn};

pub struct ActiveProfileSelector<'r> {
    registry: &'r ProfileRegistry,
    active: OnceCell<NetworkId>,
}

impl<'r> ActiveProfileSelector<'r> {
    pub fn new(registry: &'r ProfileRegistry) -> Self {
        Self {
            registry,
            active: OnceCell::new(),
        }
    }

    pub fn select(&self, network: NetworkId) -> Result<&'r Profile, ParamsError> {
        let active = *self.active.get_or_init(|| {
            info!("Selected {} network", network);
            network
        });

        if active != network {
            warn!("Refusing to switch from {} to {}", active, network);
            return Err(ParamsError::AlreadySelected {
                active,
                requested: network,
            });
        }

        Ok(self.registry.get(active))
    }

    pub fn active_network(&self) -> Option<NetworkId> {
        self.active.get().copied()
    }

    pub fn try_current(&self) -> Result<&'r Profile, ParamsError> {
        self.active
            .get()
            .map(|network| self.registry.get(*network))
            .ok_or(ParamsError::NotSelected)
    }

    /// Active profile.
    ///
    /// Panics if no network has been selected.
    pub fn current(&self) -> &'r Profile {
        match self.try_current() {
            Ok(profile) => profile,
            Err(e) => {
                error!("Chain parameters read before a network was selected");
                panic!("{}", e);
            }
        }
    }

    /// Any network's profile, regardless of the active one
    pub fn profile_for(&self, network: NetworkId) -> &'r Profile {
        self.registry.get(network)
    }

    /// Owned, adjustable copy of the Unittest profile; only while Unittest is active
    pub fn as_mutable(&self) -> Result<ModifiableParams, ParamsError> {
        let profile = self.try_current()?;
        if profile.network != NetworkId::Unittest {
            return Err(ParamsError::NotUnittest(profile.network));
        }
        Ok(ModifiableParams::from_profile(profile))
    }
}

static REGISTRY: Lazy<ProfileRegistry> = Lazy::new(|| match ProfileRegistry::build() {
    Ok(registry) => registry,
    Err(e) => {
        error!("Chain parameters are inconsistent: {}", e);
        panic!("chain parameters are inconsistent: {}", e);
    }
});

static SELECTOR: Lazy<ActiveProfileSelector<'static>> =
    Lazy::new(|| ActiveProfileSelector::new(Lazy::force(&REGISTRY)));

/// Process-wide registry, built on first use
pub fn registry() -> &'static ProfileRegistry {
    Lazy::force(&REGISTRY)
}

/// Select the process-wide network
pub fn select_params(network: NetworkId) -> Result<&'static Profile, ParamsError> {
    SELECTOR.select(network)
}

/// Process-wide active profile; panics before `select_params`
pub fn params() -> &'static Profile {
    SELECTOR.current()
}

pub fn try_params() -> Result<&'static Profile, ParamsError> {
    SELECTOR.try_current()
}

pub fn params_for(network: NetworkId) -> &'static Profile {
    SELECTOR.profile_for(network)
}

pub fn modifiable_params() -> Result<ModifiableParams, ParamsError> {
    SELECTOR.as_mutable()
}
