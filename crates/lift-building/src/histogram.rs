//! Wait-duration histogram.

use std::collections::BTreeMap;
use std::fmt;

/// Upper bounds (seconds) of the reporting buckets: 30 s, 3 min, 6 min,
/// 15 min, 30 min and 1 h.  Longer waits fall in the overflow bucket.
pub const BUCKET_BOUNDS_SECS: [u32; 6] = [30, 180, 360, 900, 1_800, 3_600];

/// One bucket of [`DurationHistogram::bucketed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BucketCount {
    /// Inclusive upper bound, or `None` for the overflow bucket.
    pub upper_secs: Option<u32>,
    pub count:      u64,
}

impl BucketCount {
    /// `"30"`, `"180"`, … or `"3600+"` for the overflow bucket.
    pub fn label(&self) -> String {
        match self.upper_secs {
            Some(s) => s.to_string(),
            None    => format!("{}+", BUCKET_BOUNDS_SECS[BUCKET_BOUNDS_SECS.len() - 1]),
        }
    }
}

impl fmt::Display for BucketCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.upper_secs.unwrap_or(BUCKET_BOUNDS_SECS[BUCKET_BOUNDS_SECS.len() - 1]);
        let (h, m, s) = (secs / 3_600, (secs % 3_600) / 60, secs % 60);
        let cmp = if self.upper_secs.is_some() { "<=" } else { "> " };
        write!(f, "{cmp} {h:2}h {m:2}mn {s:2}s -> {}", self.count)
    }
}

/// Exact per-second counts of completed-trip wait durations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DurationHistogram {
    counts:   BTreeMap<u32, u64>,
    total:    u64,
    sum_secs: u64,
}

impl DurationHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, secs: u32) {
        *self.counts.entry(secs).or_default() += 1;
        self.total += 1;
        self.sum_secs += secs as u64;
    }

    /// Number of recorded trips.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn max(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    /// Mean wait in seconds, or `None` when nothing was recorded.
    pub fn mean_secs(&self) -> Option<f64> {
        (self.total > 0).then(|| self.sum_secs as f64 / self.total as f64)
    }

    /// `(duration_secs, count)` pairs in ascending duration order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }

    /// Counts grouped into [`BUCKET_BOUNDS_SECS`] plus the overflow bucket.
    ///
    /// A duration lands in the smallest bucket whose bound is `>=` it.  All
    /// seven buckets are always returned, empty ones with a zero count.
    pub fn bucketed(&self) -> Vec<BucketCount> {
        let mut buckets: Vec<BucketCount> = BUCKET_BOUNDS_SECS
            .iter()
            .map(|&b| BucketCount { upper_secs: Some(b), count: 0 })
            .chain(std::iter::once(BucketCount { upper_secs: None, count: 0 }))
            .collect();

        for (&secs, &count) in &self.counts {
            let idx = BUCKET_BOUNDS_SECS
                .iter()
                .position(|&b| secs <= b)
                .unwrap_or(BUCKET_BOUNDS_SECS.len());
            buckets[idx].count += count;
        }
        buckets
    }
}
