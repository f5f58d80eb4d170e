// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Skipset - an ordered set backed by a probabilistic skip list.
//!
//! # Quick Start
//!
//! ```
//! use skipset::SkipList;
//!
//! let mut set = SkipList::new();
//! for key in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
//!     set.insert(key);
//! }
//!
//! assert!(set.contains(&5));
//! assert!(!set.contains(&7));
//!
//! assert!(set.erase(&5));
//! assert!(!set.erase(&10));
//!
//! let keys: Vec<_> = set.iter().copied().collect();
//! assert_eq!(keys, [1, 2, 3, 4, 6, 9]);
//! ```
//!
//! Tower heights come from an injected random source, so a seeded list has a
//! reproducible layout:
//!
//! ```
//! use skipset::{Config, SkipList};
//!
//! let config = Config::new(0.25, 16).unwrap();
//! let mut a: SkipList<u32> = SkipList::seeded(config, 7);
//! let mut b: SkipList<u32> = SkipList::seeded(config, 7);
//! a.extend(0..100);
//! b.extend(0..100);
//! assert_eq!(a.height(), b.height());
//! ```

pub mod config;
pub mod iter;
mod level;
pub mod skip_list;

pub use config::Config;
pub use config::ConfigError;
pub use skip_list::SkipList;
