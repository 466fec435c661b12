// Global Selection - The process-wide registry and active network
//
// This is the only test that selects the process-wide network; every other
// test builds its own registry and selector.

#[cfg(test)]
mod global_tests {
    use crate::chainparams::{
        modifiable_params, params, params_for, registry, select_params, try_params, NetworkId,
        ParamsError,
    };

    #[test]
    fn test_select_once_then_read_everywhere() {
        assert_eq!(try_params().err(), Some(ParamsError::NotSelected));
        assert_eq!(modifiable_params().err(), Some(ParamsError::NotSelected));

        let selected = select_params(NetworkId::Unittest).unwrap();
        assert!(std::ptr::eq(selected, params()));
        assert!(std::ptr::eq(selected, params_for(NetworkId::Unittest)));
        assert!(std::ptr::eq(selected, registry().get(NetworkId::Unittest)));

        // cross-network lookups stay available
        assert_eq!(params_for(NetworkId::Main).default_port, 37195);

        let mut tweaks = modifiable_params().unwrap();
        tweaks.set_subsidy_halving_interval(5).set_skip_proof_of_work_check(true);
        let tweaked = tweaks.build();
        assert_eq!(tweaked.consensus.subsidy_halving_interval, 5);
        assert_eq!(params().consensus.subsidy_halving_interval, 210000);
        assert!(!params().flags.skip_proof_of_work_check);

        assert!(select_params(NetworkId::Unittest).is_ok());
        assert_eq!(
            select_params(NetworkId::Main).err(),
            Some(ParamsError::AlreadySelected {
                active: NetworkId::Unittest,
                requested: NetworkId::Main,
            })
        );
        assert_eq!(params().network, NetworkId::Unittest);
    }

    #[test]
    fn test_zerocoin_params_shared_across_profiles() {
        let main = params_for(NetworkId::Main).zerocoin_params(false);
        let test = params_for(NetworkId::Testnet).zerocoin_params(false);
        assert!(std::ptr::eq(main, test));
        assert!(!std::ptr::eq(main, params_for(NetworkId::Main).zerocoin_params(true)));
        assert_eq!(
            params_for(NetworkId::Regtest).zerocoin.modulus,
            crate::zerocoin::ZEROCOIN_MODULUS
        );
    }
}
