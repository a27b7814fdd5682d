// Phase driver.
//
// Seven timed phases per run: random inserts, random finds (hits),
// random not-finds (misses), sequential inserts and finds, then the
// descending "negative" inserts and finds. The container is cleared
// whenever the key distribution changes, outside the timed region.
// Find results are black-boxed but never verified; only the clock is
// observed.

use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::backend::MapBackend;
use crate::keys;

/// Monotonic stopwatch: `snap` marks a phase boundary, `delta` reads
/// the time since the last mark.
pub struct Timer {
    last: Instant,
}

impl Timer {
    pub fn start() -> Timer {
        Timer {
            last: Instant::now(),
        }
    }

    pub fn snap(&mut self) {
        self.last = Instant::now();
    }

    pub fn delta(&self) -> Duration {
        self.last.elapsed()
    }
}

/// Run every phase against `map`, writing one timing line per phase.
pub fn run<M, W>(map: &mut M, count: u64, out: &mut W) -> io::Result<()>
where
    M: MapBackend,
    W: Write,
{
    let n = count as usize;
    writeln!(out, "Testing {} ({} iterations)", map.name(), count)?;

    let mut timer = Timer::start();
    for key in keys::random(keys::HIT_SEED).take(n) {
        map.insert(key);
    }
    report(out, count, "random inserts", timer.delta())?;

    timer.snap();
    for key in keys::random(keys::HIT_SEED).take(n) {
        black_box(map.contains(key));
    }
    report(out, count, "random finds", timer.delta())?;

    timer.snap();
    for key in keys::random(keys::MISS_SEED).take(n) {
        black_box(map.contains(key));
    }
    report(out, count, "random not-finds", timer.delta())?;

    map.clear();
    timer.snap();
    for key in keys::ascending().take(n) {
        map.insert(key);
    }
    report(out, count, "sequential inserts", timer.delta())?;

    timer.snap();
    for key in keys::ascending().take(n) {
        black_box(map.contains(key));
    }
    report(out, count, "sequential finds", timer.delta())?;

    map.clear();
    timer.snap();
    for key in keys::descending().take(n) {
        map.insert(key);
    }
    report(out, count, "neg sequential inserts", timer.delta())?;

    timer.snap();
    for key in keys::descending().take(n) {
        black_box(map.contains(key));
    }
    report(out, count, "neg sequential finds", timer.delta())?;

    map.clear();
    writeln!(out)?;
    Ok(())
}

fn report<W: Write>(out: &mut W, count: u64, label: &str, elapsed: Duration) -> io::Result<()> {
    writeln!(
        out,
        "{} {:<22} in {:5.2} seconds",
        count,
        label,
        elapsed.as_secs_f64()
    )
}
