//! Load a routing-table dump into a [`pctrie::Trie`] and time lookups against it.
//!
//! Not part of the library's public API: a demo/benchmark harness, built only
//! with the `cli` feature.

use std::{
	fs::File,
	io::{
		BufRead,
		BufReader,
	},
	path::PathBuf,
	time::Instant,
};

use clap::Parser;
use pctrie::{
	parse::parse_line,
	Trie,
};
use rand::Rng;

/// Load a routing-table dump and run a randomized lookup benchmark against it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Path to a routing-table dump, one `A.B.C.D/L  E.F.G.H` line per entry.
	table: PathBuf,

	/// Number of random lookups to time.
	#[arg(short = 'n', long, default_value_t = 1_000_000)]
	lookups: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let file = File::open(&args.table)?;
	let reader = BufReader::new(file);

	let mut trie = Trie::new();
	let mut skipped = 0u32;
	for line in reader.lines() {
		let line = line?;
		if line.trim().is_empty() {
			continue;
		}
		match parse_line(&line) {
			Ok(entry) => {
				if trie.insert(entry.key, entry.prefix_length, entry.next_hop).is_err() {
					skipped += 1;
				}
			},
			Err(err) => {
				log::warn!("skipping malformed line {line:?}: {err}");
				skipped += 1;
			},
		}
	}
	println!(
		"loaded {} prefixes ({} lines skipped)",
		trie.len(),
		skipped
	);

	let mut rng = rand::rng();
	let probes: Vec<u32> = (0..args.lookups).map(|_| rng.random()).collect();

	let start = Instant::now();
	let mut hits = 0u64;
	for probe in &probes {
		if trie.lookup(*probe).is_some() {
			hits += 1;
		}
	}
	let elapsed = start.elapsed();

	println!(
		"{} lookups in {:?} ({:.0} lookups/sec, {} hits)",
		probes.len(),
		elapsed,
		probes.len() as f64 / elapsed.as_secs_f64(),
		hits
	);

	Ok(())
}
