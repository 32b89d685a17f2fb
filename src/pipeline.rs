use rayon::prelude::*;

use crate::decoder::line_decoder::LineDecoder;
use crate::decoder::normalize_line;
use crate::lookup::NameLookup;
use crate::models::ValidationOutcome;

/// Counts over a decoded batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines decoded
    pub total: usize,
    /// Lines that passed every check
    pub valid: usize,
}

impl BatchSummary {
    /// Lines that failed
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }

    /// Share of valid lines, 0.0 for an empty batch
    pub fn valid_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.valid as f64 / self.total as f64
        }
    }
}

/// Decode every line, keeping input order.
///
/// Lines are normalized first so masked text decodes too. Batches of at
/// least `min_parallel` lines are spread over the rayon pool.
pub fn decode_batch_with<S>(
    lines: &[S],
    names: &dyn NameLookup,
    min_parallel: usize,
) -> Vec<ValidationOutcome>
where
    S: AsRef<str> + Sync,
{
    let decode_one = |line: &S| LineDecoder::decode(&normalize_line(line.as_ref()), names);

    if lines.len() >= min_parallel.max(1) {
        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!("BATCH: decoding {} lines in parallel", lines.len());
        }
        lines.par_iter().map(decode_one).collect()
    } else {
        lines.iter().map(decode_one).collect()
    }
}

/// [`decode_batch_with`] using the configured parallel threshold
pub fn decode_batch<S>(lines: &[S], names: &dyn NameLookup) -> Vec<ValidationOutcome>
where
    S: AsRef<str> + Sync,
{
    decode_batch_with(lines, names, crate::config::parallel_batch_min())
}

/// Count valid outcomes
pub fn summarize(outcomes: &[ValidationOutcome]) -> BatchSummary {
    BatchSummary {
        total: outcomes.len(),
        valid: outcomes.iter().filter(|o| o.is_valid()).count(),
    }
}
