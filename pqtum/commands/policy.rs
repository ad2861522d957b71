use clap::ArgMatches;
use network::{ConsensusParams, Epoch};
use primitives::compact::Compact;
use crate::config::Config;

pub fn policy(cfg: Config, matches: &ArgMatches) -> Result<(), String> {
	let height = matches.value_of("HEIGHT").expect("HEIGHT is required in cli.yml; qed");
	let height: u32 = height.parse().map_err(|e| format!("Invalid block height: {}", e))?;

	for line in describe(&cfg.consensus, height) {
		println!("{}", line);
	}

	Ok(())
}

fn epoch_name(epoch: Epoch) -> &'static str {
	match epoch {
		Epoch::Original => "original",
		Epoch::Qip9 => "qip9",
		Epoch::ReducedBlockTime => "reduced block time",
	}
}

fn describe(consensus: &ConsensusParams, height: u32) -> Vec<String> {
	vec![
		format!("network:                  {}", consensus.network),
		format!("magic:                    {:#010x}", consensus.magic()),
		format!("default port:             {}", consensus.network.port()),
		format!("height:                   {}", height),
		format!("epoch:                    {}", epoch_name(consensus.epoch(height))),
		format!("retargeting:              {}", if consensus.is_qip9(height) { "exponential" } else { "linear" }),
		format!("target spacing:           {}", consensus.target_spacing(height)),
		format!("timespan:                 {}", consensus.timespan(height)),
		format!("interval:                 {}", consensus.interval(height)),
		format!("stake timestamp mask:     {}", consensus.stake_timestamp_mask(height)),
		format!("PoW max target:           {}", Compact::from_u256(consensus.max_target(height, false))),
		format!("PoS max target:           {}", Compact::from_u256(consensus.max_target(height, true))),
		format!("PoW retargeting:          {}", !consensus.no_retargeting(false)),
		format!("PoS retargeting:          {}", !consensus.no_retargeting(true)),
		format!("spendable coinbase depth: {}", consensus.spendable_coinbase_depth(height)),
		format!("subsidy decrease blocks:  {}", consensus.subsidy_decrease_block_count),
		format!("reward halving point:     {}", consensus.is_reward_halving_point(height)),
	]
}
