extern crate ansi_term;
extern crate chrono;
extern crate env_logger;
extern crate log;

use std::io::Write;
use ansi_term::Colour as Color;
use log::{Level, Record};
use env_logger::Builder;

fn strftime() -> String {
	chrono::Local::now().format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

pub trait LogFormatter: Send + Sync + 'static {
	fn format(&self, record: &Record) -> String;
}

pub struct DateLogFormatter;

impl LogFormatter for DateLogFormatter {
	fn format(&self, record: &Record) -> String {
		let timestamp = strftime();
		format!("{} {} {} {}", timestamp, record.level(), record.target(), record.args())
	}
}

pub struct DateAndColorLogFormatter;

impl LogFormatter for DateAndColorLogFormatter {
	fn format(&self, record: &Record) -> String {
		let timestamp = Color::Black.bold().paint(strftime());
		let level = record.level().to_string();
		let level = match record.level() {
			Level::Error => Color::Red.bold().paint(level),
			Level::Warn => Color::Yellow.bold().paint(level),
			Level::Info => Color::Green.paint(level),
			Level::Debug => Color::Cyan.paint(level),
			Level::Trace => Color::Blue.paint(level),
		};

		format!("{} {} {} {}", timestamp, level, record.target(), record.args())
	}
}

/// Installs global logger. `filters` uses `RUST_LOG` syntax, e.g. `verification=debug,info`.
pub fn init<T>(filters: &str, formatter: T) -> Result<(), String> where T: LogFormatter {
	let mut builder = Builder::new();
	builder.parse_filters(filters);
	builder.format(move |buf, record| writeln!(buf, "{}", formatter.format(record)));
	builder.try_init().map_err(|_| "Logger can be initialized only once".to_owned())
}
