//! Search counters

/// Counters for one searcher call, or summed over an iterative-deepening run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Max and min nodes entered
    pub nodes: u64,
    /// Static evaluations at leaves and terminal positions
    pub leaf_evaluations: u64,
    /// Beta and alpha cutoffs
    pub cutoffs: u64,
    /// Forced passes searched through
    pub passes: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.leaf_evaluations += other.leaf_evaluations;
        self.cutoffs += other.cutoffs;
        self.passes += other.passes;
    }
}
