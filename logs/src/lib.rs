//! `log` backend used by binaries of the workspace.

extern crate ansi_term;
extern crate env_logger;
extern crate log;
extern crate time;

use ansi_term::Colour;
use env_logger::Builder;
use log::{Level, Record};
use std::env;
use std::io::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

pub trait LogFormatter: Send + Sync + 'static {
	fn format(&self, log_record: &Record) -> String;
}

/// Plain `date level target message` lines.
pub struct DateLogFormatter;

impl LogFormatter for DateLogFormatter {
	fn format(&self, record: &Record) -> String {
		format!("{} {} {} {}", timestamp(), record.level(), record.target(), record.args())
	}
}

/// Same as `DateLogFormatter`, with terminal colours.
pub struct DateAndColorLogFormatter;

impl LogFormatter for DateAndColorLogFormatter {
	fn format(&self, record: &Record) -> String {
		format!(
			"{} {} {} {}",
			Colour::Black.bold().paint(timestamp()),
			color_log_level(record.level()),
			Colour::Fixed(8).paint(record.target()),
			record.args()
		)
	}
}

fn timestamp() -> String {
	time::strftime(TIMESTAMP_FORMAT, &time::now()).unwrap_or_default()
}

fn color_log_level(level: Level) -> String {
	let level_str = format!("{:5}", level);
	match level {
		Level::Error => Colour::Red.bold().paint(level_str),
		Level::Warn => Colour::Yellow.bold().paint(level_str),
		Level::Info => Colour::Green.paint(level_str),
		Level::Debug => Colour::Cyan.paint(level_str),
		Level::Trace => Colour::Blue.paint(level_str),
	}
	.to_string()
}

/// Installs the global logger. `RUST_LOG` directives are applied after `filters`.
///
/// Panics if a logger is already installed.
pub fn init<T>(filters: &str, formatter: T)
where
	T: LogFormatter,
{
	let filters = match env::var("RUST_LOG") {
		Ok(env_filters) => format!("{},{}", filters, env_filters),
		Err(_) => filters.to_owned(),
	};

	let mut builder = Builder::new();
	builder.parse_filters(&filters);
	builder.format(move |buf, record| writeln!(buf, "{}", formatter.format(record)));
	builder.init();
}
