//! Insert/find latency benchmarks for integer-keyed maps.
//!
//! Times five container implementations (a Judy-style trie and four
//! hash maps) under three hash functions and three key distributions,
//! printing wall-clock seconds per phase.
//!
//! Run with: cargo run --release -- dense xxhash 1000000

pub mod backend;
pub mod bench;
pub mod cli;
pub mod hash;
pub mod keys;
