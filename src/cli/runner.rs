// Runner - Render each command's report for the selected profile
use crate::cli::{CheckpointsCmd, Commands, ZerocoinCmd};
use qbic_chainparams::{GenesisError, Profile};
use std::fmt::Write;
use tracing::info;

/// Run a command and print its report
pub fn run(command: &Commands, profile: &Profile) -> Result<(), RunnerError> {
    info!("Running {:?} on {}", command, profile.name());
    let report = render(command, profile)?;
    print!("{}", report);
    Ok(())
}

pub fn render(command: &Commands, profile: &Profile) -> Result<String, RunnerError> {
    match command {
        Commands::Show => Ok(serde_json::to_string_pretty(profile)? + "\n"),
        Commands::Genesis => render_genesis(profile),
        Commands::Checkpoints(cmd) => Ok(render_checkpoints(profile, cmd)),
        Commands::Seeds => Ok(render_seeds(profile)),
        Commands::Zerocoin(cmd) => Ok(render_zerocoin(profile, cmd)),
    }
}

fn render_genesis(profile: &Profile) -> Result<String, RunnerError> {
    let hash = profile.genesis.verify(profile.name())?;
    let block = profile.genesis.assemble();

    let mut out = String::new();
    let _ = writeln!(out, "network:     {}", profile.name());
    let _ = writeln!(out, "hash:        {}", hash);
    let _ = writeln!(out, "merkle root: {}", block.merkle_root());
    let _ = writeln!(out, "coinbase:    {}", block.coinbase.txid());
    let _ = writeln!(out, "time:        {}", block.header.time);
    let _ = writeln!(out, "bits:        {:#010x}", block.header.bits);
    let _ = writeln!(out, "nonce:       {}", block.header.nonce);
    let _ = writeln!(out, "header:      {}", hex::encode(block.header.serialize()));
    Ok(out)
}

fn render_checkpoints(profile: &Profile, cmd: &CheckpointsCmd) -> String {
    let table = profile.checkpoints();
    let mut out = String::new();

    match cmd.height {
        Some(height) => match table.lookup(height) {
            Some(hash) => {
                let _ = writeln!(out, "{} {}", height, hash);
            }
            None => {
                let _ = writeln!(out, "{} no checkpoint", height);
            }
        },
        None => {
            for (height, hash) in table.iter() {
                let _ = writeln!(out, "{} {}", height, hash);
            }
            let _ = writeln!(out, "last checkpoint time: {}", table.time_last_checkpoint);
            let _ = writeln!(
                out,
                "transactions at last checkpoint: {}",
                table.transactions_last_checkpoint
            );
            let _ = writeln!(out, "transactions per day: {}", table.transactions_per_day);
        }
    }

    if let (Some(chain_tx), Some(block_time)) = (cmd.chain_tx, cmd.block_time) {
        let now = chrono::Utc::now().timestamp();
        let progress = table.guess_verification_progress(chain_tx, block_time, now, true);
        let _ = writeln!(out, "verification progress: {:.4}", progress);
    }

    out
}

fn render_seeds(profile: &Profile) -> String {
    let mut out = String::new();
    for peer in &profile.seed_addresses {
        let _ = writeln!(out, "seed {} last seen {}", peer.addr, peer.last_seen);
    }
    for seed in &profile.dns_seeds {
        let _ = writeln!(out, "dns {} {}", seed.name, seed.host);
    }
    if out.is_empty() {
        let _ = writeln!(out, "{} has no seeds", profile.name());
    }
    out
}

fn render_zerocoin(profile: &Profile, cmd: &ZerocoinCmd) -> String {
    let params = profile.zerocoin_params(cmd.v1);
    let mut out = String::new();
    let _ = writeln!(out, "encoding:       {}", params.encoding);
    let _ = writeln!(out, "modulus bits:   {}", params.modulus_bits());
    let _ = writeln!(out, "security level: {}", params.security_level);
    out
}

/// Runner errors
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Genesis check failed: {0}")]
    Genesis(#[from] GenesisError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbic_chainparams::{params_for, NetworkId};

    #[test]
    fn test_genesis_report() {
        let report = render(&Commands::Genesis, params_for(NetworkId::Main)).unwrap();
        assert!(report.contains(
            "hash:        00000da439930581626fa1a39e048ccdfd27fd278a8998dac86cc668ff0874ce"
        ));
        assert!(report.contains("bits:        0x1e0ffff0"));
    }

    #[test]
    fn test_checkpoint_lookup_report() {
        let cmd = CheckpointsCmd {
            height: Some(0),
            ..Default::default()
        };
        let report = render(&Commands::Checkpoints(cmd), params_for(NetworkId::Regtest)).unwrap();
        assert_eq!(
            report,
            "0 0000000000000000000000000000000000000000000000000000000000000001\n"
        );

        let miss = CheckpointsCmd {
            height: Some(5),
            ..Default::default()
        };
        let report = render(&Commands::Checkpoints(miss), params_for(NetworkId::Main)).unwrap();
        assert_eq!(report, "5 no checkpoint\n");
    }

    #[test]
    fn test_seeds_report() {
        let main = render(&Commands::Seeds, params_for(NetworkId::Main)).unwrap();
        assert_eq!(main.lines().filter(|l| l.starts_with("seed ")).count(), 3);
        assert!(main.contains("dns Pathos 165.227.145.72"));

        let regtest = render(&Commands::Seeds, params_for(NetworkId::Regtest)).unwrap();
        assert_eq!(regtest, "regtest has no seeds\n");
    }

    #[test]
    fn test_show_is_json() {
        let report = render(&Commands::Show, params_for(NetworkId::Testnet)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["network"], "test");
        assert_eq!(value["default_port"], 38196);
        assert_eq!(value["message_start"], "47576d0a");
    }

    #[test]
    fn test_zerocoin_report() {
        let report = render(&Commands::Zerocoin(ZerocoinCmd { v1: false }), params_for(NetworkId::Main)).unwrap();
        assert!(report.contains("encoding:       decimal"));
        assert!(report.contains("modulus bits:   3051"));
    }
}
