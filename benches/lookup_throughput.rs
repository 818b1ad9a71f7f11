use criterion::{
	criterion_group,
	criterion_main,
	BenchmarkId,
	Criterion,
	Throughput,
};
use pctrie::Trie;
use rand::Rng;

const PREFIX_COUNTS: &[usize] = &[1_000, 10_000, 100_000];

fn random_prefix(rng: &mut impl Rng) -> (u32, u8) {
	let key: u32 = rng.random();
	let prefix_length = rng.random_range(8..=32);
	(key, prefix_length)
}

fn build_trie(count: usize) -> Trie<u32> {
	let mut rng = rand::rng();
	let mut trie = Trie::new();
	let mut next_hop = 0u32;
	while trie.len() < count {
		let (key, prefix_length) = random_prefix(&mut rng);
		next_hop += 1;
		let _ = trie.insert(key, prefix_length, next_hop);
	}
	trie
}

fn bench_lookup(c: &mut Criterion) {
	let mut group = c.benchmark_group("lookup");
	for &count in PREFIX_COUNTS {
		let trie = build_trie(count);
		let mut rng = rand::rng();
		let probes: Vec<u32> = (0..10_000).map(|_| rng.random()).collect();

		group.throughput(Throughput::Elements(probes.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(count), &probes, |b, probes| {
			b.iter(|| {
				let mut hits = 0usize;
				for probe in probes {
					if trie.lookup(*probe).is_some() {
						hits += 1;
					}
				}
				hits
			})
		});
	}
	group.finish();
}

fn bench_insert(c: &mut Criterion) {
	let mut group = c.benchmark_group("insert");
	for &count in PREFIX_COUNTS {
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
			b.iter(|| build_trie(count))
		});
	}
	group.finish();
}

criterion_group! {
	name = benches;
	config = Criterion::default().sample_size(20);
	targets = bench_lookup, bench_insert
}
criterion_main!(benches);
