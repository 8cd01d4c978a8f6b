#[macro_use]
extern crate log;
extern crate logs;
extern crate miner;
extern crate network;
extern crate pool;
extern crate test_data;
extern crate time;

mod assembler;

use std::io::Write;
use time::{Duration, Instant};

pub const LOG_FILTERS: &str = "warn";

#[derive(Default)]
pub struct Benchmark {
	start: Option<Instant>,
	end: Option<Instant>,
	samples: Option<usize>,
}

impl Benchmark {
	pub fn start(&mut self) {
		self.start = Some(Instant::now());
	}

	pub fn stop(&mut self) {
		self.end = Some(Instant::now());
	}

	pub fn evaluate(&self) -> Duration {
		match (self.start, self.end) {
			(Some(start), Some(end)) => end - start,
			_ => Duration::zero(),
		}
	}

	pub fn samples(&mut self, samples: usize) {
		self.samples = Some(samples);
	}
}

fn decimal_mark(s: String) -> String {
	let digits: Vec<char> = s.chars().collect();
	let mut result = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, digit) in digits.iter().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			result.push(',');
		}
		result.push(*digit);
	}
	result
}

fn run_benchmark<F>(name: &str, f: F)
where
	F: FnOnce(&mut Benchmark),
{
	print!("{}: ", name);
	let _ = ::std::io::stdout().flush();

	let mut benchmark = Benchmark::default();
	f(&mut benchmark);
	if let Some(samples) = benchmark.samples {
		println!(
			"{} ns/sample",
			decimal_mark(format!("{}", benchmark.evaluate().whole_nanoseconds() / samples.max(1) as i128)),
		);
	} else {
		println!("{} ns", decimal_mark(format!("{}", benchmark.evaluate().whole_nanoseconds())));
	}
}

macro_rules! benchmark {
	($t:expr) => {
		run_benchmark(stringify!($t), $t);
	};
}

fn main() {
	logs::init(LOG_FILTERS, logs::DateAndColorLogFormatter);

	benchmark!(assembler::independent);
	benchmark!(assembler::long_chains);
	benchmark!(assembler::random_dag);
	benchmark!(assembler::full_block);
}
