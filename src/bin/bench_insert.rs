use std::collections::BTreeMap;
use std::env;
use std::hint::black_box;
use std::time::Duration;
use std::time::Instant;

use ordered_index::BPlusTreeMap;

fn parse_arg<T: std::str::FromStr>(i: usize, default: T) -> T {
    env::args()
        .nth(i)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() {
    // Usage: bench_insert [n=1000000] [node_size=16]
    let n: usize = parse_arg(1, 1_000_000);
    let node_size: usize = parse_arg(2, 16);

    let dataset = generate_dataset(n);
    let lookup_keys: Vec<u64> = dataset.iter().map(|(k, _)| *k).collect();

    let ours = bench_ours(&dataset, &lookup_keys, node_size);
    let std_map = bench_std(&dataset, &lookup_keys);

    println!("\n=== Complete Performance Benchmark ===");
    println!("items: {}  |  node size: {}", n, node_size);
    println!(
        "{:<18} {:>10} {:>12} {:>10} {:>12} {:>10} {:>12} {:>10} {:>12}",
        "target", "ins(s)", "ins Mops", "get(s)", "get Mops", "del(s)", "del Mops", "iter(s)", "iter Mops"
    );
    for result in [ours, std_map] {
        println!(
            "{:<18} {:>10.3} {:>12.2} {:>10.3} {:>12.2} {:>10.3} {:>12.2} {:>10.3} {:>12.2}",
            result.label,
            result.insert.as_secs_f64(),
            throughput(n, result.insert),
            result.get.as_secs_f64(),
            throughput(n, result.get),
            result.delete.as_secs_f64(),
            throughput(n, result.delete),
            result.iterate.as_secs_f64(),
            throughput(n, result.iterate),
        );
    }
}

struct BenchResult {
    label: &'static str,
    insert: Duration,
    get: Duration,
    delete: Duration,
    iterate: Duration,
}

fn bench_ours(dataset: &[(u64, u64)], lookups: &[u64], node_size: usize) -> BenchResult {
    let mut map = BPlusTreeMap::new(node_size).expect("valid node size");
    let insert = time(|| {
        for &(k, v) in dataset {
            map.put(k, Some(v)).expect("insert does not fail on a well-formed tree");
        }
    });
    let get = time(|| {
        for k in lookups {
            black_box(map.get(k));
        }
    });
    let iterate = time(|| {
        let mut count = 0usize;
        for entry in map.iter() {
            black_box(entry);
            count += 1;
        }
        black_box(count);
    });

    let mut map_for_delete = BPlusTreeMap::new(node_size).expect("valid node size");
    for &(k, v) in dataset {
        map_for_delete.put(k, Some(v)).expect("insert does not fail on a well-formed tree");
    }
    let delete = time(|| {
        for k in lookups {
            black_box(map_for_delete.delete(k).expect("delete does not fail on a well-formed tree"));
        }
    });

    BenchResult {
        label: "ordered-index",
        insert,
        get,
        delete,
        iterate,
    }
}

fn bench_std(dataset: &[(u64, u64)], lookups: &[u64]) -> BenchResult {
    let mut map = BTreeMap::new();
    let insert = time(|| {
        for &(k, v) in dataset {
            map.insert(k, v);
        }
    });
    let get = time(|| {
        for k in lookups {
            black_box(map.get(k));
        }
    });
    let iterate = time(|| {
        let mut count = 0usize;
        for entry in map.iter() {
            black_box(entry);
            count += 1;
        }
        black_box(count);
    });

    let mut map_for_delete = BTreeMap::new();
    for &(k, v) in dataset {
        map_for_delete.insert(k, v);
    }
    let delete = time(|| {
        for k in lookups {
            black_box(map_for_delete.remove(k));
        }
    });

    BenchResult {
        label: "std::BTreeMap",
        insert,
        get,
        delete,
        iterate,
    }
}

fn generate_dataset(n: usize) -> Vec<(u64, u64)> {
    let mut state: u64 = 0x9E3779B97F4A7C15;
    (0..n as u64)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state, i)
        })
        .collect()
}

fn time(mut f: impl FnMut()) -> Duration {
    let start = Instant::now();
    f();
    start.elapsed()
}

fn throughput(count: usize, duration: Duration) -> f64 {
    let secs = duration.as_secs_f64().max(1e-9);
    (count as f64 / 1_000_000.0) / secs
}
