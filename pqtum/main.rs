//! Qtum difficulty tool.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate serde_json;

extern crate chain;
extern crate logs;
extern crate network;
extern crate primitives;
extern crate storage;
extern crate verification;

mod commands;
mod config;

pub const LOG_INFO: &'static str = "info";

fn main() {
	if let Err(err) = run() {
		eprintln!("{}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<(), String> {
	let yaml = load_yaml!("cli.yml");
	let matches = clap::App::from_yaml(yaml).get_matches();
	let cfg = config::parse(&matches)?;

	if cfg!(windows) {
		logs::init(&cfg.log, logs::DateLogFormatter)?;
	} else {
		logs::init(&cfg.log, logs::DateAndColorLogFormatter)?;
	}

	match matches.subcommand() {
		("policy", Some(policy_matches)) => commands::policy(cfg, policy_matches),
		("compact", Some(compact_matches)) => commands::compact(cfg, compact_matches),
		("replay", Some(replay_matches)) => commands::replay(cfg, replay_matches),
		_ => Err(matches.usage().to_owned()),
	}
}
