use std::fmt;

use crate::game::{Histogram, ReleasePolicy, TILE_NAMES};

#[derive(Clone, Debug, PartialEq)]
/// A snapshot of one simulation's histogram at a checkpoint.
pub struct Report {
    /// The index of the run the snapshot was taken from.
    pub run: usize,
    pub policy: ReleasePolicy,
    /// The number of turns played when the snapshot was taken.
    pub turns: u64,
    pub histogram: Histogram,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Run \x1b[36m{}\x1b[0m, strategy \x1b[36m{}\x1b[0m ({})\nData for turns = \x1b[33m{}\x1b[0m:",
            self.run + 1,
            self.policy.label(),
            self.policy,
            self.turns
        )?;

        for (pos, count) in self.histogram.iter() {
            writeln!(
                f,
                "[{:02}] {:<24}{:>10} \x1b[33m{:>6.2}%\x1b[0m",
                pos,
                TILE_NAMES[pos as usize],
                count,
                self.histogram.frequency(pos) * 100.
            )?;
        }

        Ok(())
    }
}
