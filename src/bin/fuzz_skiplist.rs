// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! AFL Fuzz harness for the skip list
//!
//! This harness checks the skip list against a `BTreeSet` model:
//! 1. Membership: insert/erase/contains agree with the model
//! 2. Ordering: iteration yields the model's keys in ascending order
//! 3. Structure: every level is a subsequence of the level below
//!
//! Model: a single list with a seed and parameters taken from the input,
//! then a stream of operations.

use std::collections::BTreeSet;

use afl::fuzz;
use skipset::Config;
use skipset::SkipList;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { key: u8 },
    Erase { key: u8 },
    Contains { key: u8 },
    /// Move the contents out and continue with the moved list
    Take,
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 5;
        let rest = &bytes[1..];

        return match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Insert { key: rest[0] }, &rest[1..])),
            1 if !rest.is_empty() => Some((FuzzOp::Erase { key: rest[0] }, &rest[1..])),
            2 if !rest.is_empty() => Some((FuzzOp::Contains { key: rest[0] }, &rest[1..])),
            3 => Some((FuzzOp::Take, rest)),
            4 => Some((FuzzOp::Clear, rest)),
            _ => None,
        };
    }
}

/// First three bytes pick p, the height cap and the seed.
fn header(data: &[u8]) -> Option<(Config, u64, &[u8])> {
    if data.len() < 3 {
        return None;
    }
    let probability = (data[0] as f64 + 1.0) / 258.0;
    let max_height = (data[1] % 16) as usize + 1;
    let config = Config::new(probability, max_height).ok()?;
    return Some((config, data[2] as u64, &data[3..]));
}

fn check(list: &SkipList<u8>, model: &BTreeSet<u8>) {
    let keys: Vec<u8> = list.iter().copied().collect();
    let expected: Vec<u8> = model.iter().copied().collect();
    assert_eq!(keys, expected, "Iteration differs from model");
    assert_eq!(list.len(), model.len(), "Length mismatch");
    assert!(list.height() <= list.max_height(), "Height above cap");

    for level in 1..list.height() {
        let lower: BTreeSet<u8> = list.level(level - 1).copied().collect();
        for key in list.level(level) {
            assert!(lower.contains(key), "Key {} on level {} missing below", key, level);
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((config, seed, mut remaining)) = header(data) else {
            return;
        };
        let mut list: SkipList<u8> = SkipList::seeded(config, seed);
        let mut model = BTreeSet::new();

        // Parse and execute operations
        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key } => {
                    list.insert(key);
                    model.insert(key);
                }
                FuzzOp::Erase { key } => {
                    assert_eq!(list.erase(&key), model.remove(&key), "Erase result mismatch");
                }
                FuzzOp::Contains { key } => {
                    assert_eq!(list.contains(&key), model.contains(&key), "Contains mismatch");
                }
                FuzzOp::Take => {
                    let taken = list.take();
                    assert!(list.is_empty(), "Donor not empty after take");
                    assert_eq!(list.height(), 1, "Donor height not reset");
                    list = taken;
                }
                FuzzOp::Clear => {
                    list.clear();
                    model.clear();
                }
            }
        }

        check(&list, &model);
    });
}
