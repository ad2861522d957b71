use clap::ArgMatches;
use primitives::compact::Compact;
use crate::config::Config;

pub fn compact(_cfg: Config, matches: &ArgMatches) -> Result<(), String> {
	let bits = matches.value_of("BITS").expect("BITS is required in cli.yml; qed");
	let bits = parse_bits(bits)?;

	for line in describe(bits) {
		println!("{}", line);
	}

	Ok(())
}

/// Parses hex compact target, with or without `0x` prefix.
pub fn parse_bits(bits: &str) -> Result<Compact, String> {
	let digits = bits.trim_start_matches("0x");
	u32::from_str_radix(digits, 16)
		.map(Compact::new)
		.map_err(|e| format!("Invalid compact target {}: {}", bits, e))
}

fn describe(bits: Compact) -> Vec<String> {
	let (target, status) = match bits.to_u256() {
		Ok(target) => (target, "valid"),
		Err(target) => (target, "negative or overflow"),
	};

	vec![
		format!("compact:        {}", bits),
		format!("status:         {}", status),
		format!("target:         {:x}", target),
		format!("exponent:       {}", bits.exponent()),
		format!("accuracy bytes: {}", bits.accuracy_bytes()),
		format!("canonical:      {}", Compact::from_u256(target)),
	]
}
