// Promotion probability benchmark - measures how p trades tower height
// against insert and lookup time.

use std::time::Instant;

use skipset::Config;
use skipset::SkipList;

fn main() {
    let num_keys: u64 = 100_000;
    let iterations = 5;

    for p in [0.125, 0.25, 0.5, 0.75] {
        let config = Config::new(p, 32).expect("valid probability");
        println!("\n=== p = {} ===", p);

        // Multiplying by an odd constant scatters the keys without repeats.
        let keys: Vec<u64> = (0..num_keys).map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15)).collect();

        let mut list: SkipList<u64> = SkipList::seeded(config, 1);
        let start = Instant::now();
        for _ in 0..iterations {
            list.clear();
            list.extend(keys.iter().copied());
        }
        let insert_time = start.elapsed();
        println!("  height: {} levels for {} keys", list.height(), list.len());
        println!("  insert {} keys: {:?}", num_keys, insert_time / iterations);

        let start = Instant::now();
        let mut hits = 0usize;
        for _ in 0..iterations {
            hits += keys.iter().filter(|k| list.contains(*k)).count();
        }
        let lookup_time = start.elapsed();
        println!("  lookup {} keys: {:?} ({} hits)", num_keys, lookup_time / iterations, hits);

        let start = Instant::now();
        for key in &keys {
            list.erase(key);
        }
        println!("  erase {} keys: {:?}", num_keys, start.elapsed());
        println!("  height after erase: {}", list.height());
    }
}
