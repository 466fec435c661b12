// Modifiable parameters - Owned Unittest copy with the setters unit tests need
//
// Each instance starts from the registry's Unittest profile and never writes
// back to it, so one test's tweaks cannot leak into another.

use super::profile::Profile;

#[derive(Debug, Clone)]
pub struct ModifiableParams {
    profile: Profile,
}

impl ModifiableParams {
    pub(crate) fn from_profile(base: &Profile) -> Self {
        Self {
            profile: base.clone(),
        }
    }

    pub fn set_subsidy_halving_interval(&mut self, interval: i32) -> &mut Self {
        self.profile.consensus.subsidy_halving_interval = interval;
        self
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: i32) -> &mut Self {
        self.profile.consensus.enforce_block_upgrade_majority = majority;
        self
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: i32) -> &mut Self {
        self.profile.consensus.reject_block_outdated_majority = majority;
        self
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, majority: i32) -> &mut Self {
        self.profile.consensus.to_check_block_upgrade_majority = majority;
        self
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) -> &mut Self {
        self.profile.flags.default_consistency_checks = enabled;
        self
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) -> &mut Self {
        self.profile.flags.allow_min_difficulty_blocks = allowed;
        self
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) -> &mut Self {
        self.profile.flags.skip_proof_of_work_check = skip;
        self
    }

    /// Current state of the copy
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn build(self) -> Profile {
        self.profile
    }
}
