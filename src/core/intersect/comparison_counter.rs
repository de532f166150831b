/// Receives the number of `row_id` comparisons an intersection performs.
///
/// Algorithms report through this seam so that their cost can be checked without timing them.
pub trait ComparisonCounter {
    fn record(&mut self, comparisons: u64);
}

/// Discards everything, compiles down to nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCounter;

impl ComparisonCounter for NoopCounter {
    #[inline(always)]
    fn record(&mut self, _comparisons: u64) {}
}

/// Accumulates comparisons across one or more intersections.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonCount {
    comparisons: u64,
}

impl ComparisonCount {
    pub fn new() -> Self {
        Self { comparisons: 0 }
    }

    pub fn get(&self) -> u64 {
        self.comparisons
    }

    pub fn reset(&mut self) {
        self.comparisons = 0;
    }
}

impl ComparisonCounter for ComparisonCount {
    #[inline]
    fn record(&mut self, comparisons: u64) {
        self.comparisons += comparisons;
    }
}
