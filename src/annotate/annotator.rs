use super::interval::GcInterval;
use super::labels::{expand_states, resolve_labels};
use super::scoring::assign_scores;
use super::segment::{segment, smooth};
use crate::utils::{compute_gc_content, kmeans, Result};
use itertools::Itertools;

pub const DEFAULT_KMER_SIZE: usize = 50;
pub const DEFAULT_MIN_FEATURE_SIZE: usize = 10;
pub const DEFAULT_ALPHA: f64 = 0.01;

const NUMBER_OF_STATES: usize = 2;

/// Ordered, contiguous state intervals produced for one input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    intervals: Vec<GcInterval>,
}

impl Annotation {
    pub fn new(intervals: Vec<GcInterval>) -> Self {
        Annotation { intervals }
    }

    pub fn intervals(&self) -> &[GcInterval] {
        &self.intervals
    }

    /// Intervals whose score is present and at most `alpha`. Intervals that
    /// were never scored are excluded for any `alpha`.
    pub fn significant_hits(&self, alpha: f64) -> impl Iterator<Item = &GcInterval> + '_ {
        self.intervals
            .iter()
            .filter(move |interval| matches!(interval.score, Some(score) if score <= alpha))
    }
}

/// A sequence annotator: turns a sequence into scored state intervals.
///
/// Each call owns its working state, so one annotator can serve concurrent
/// callers as long as every sequence gets its own `annotate` call.
pub trait StateAnnotator {
    fn annotate(&self, sequence: &str) -> Result<Annotation>;
}

/// Two-state annotator driven by sliding-window GC content.
#[derive(Debug, Clone)]
pub struct GcAnnotator {
    kmer_size: usize,
    minimum_feature_size: Option<usize>,
}

impl GcAnnotator {
    /// `minimum_feature_size` of `None` disables smoothing entirely.
    pub fn new(kmer_size: usize, minimum_feature_size: Option<usize>) -> Self {
        GcAnnotator {
            kmer_size,
            minimum_feature_size,
        }
    }
}

impl Default for GcAnnotator {
    fn default() -> Self {
        GcAnnotator::new(DEFAULT_KMER_SIZE, Some(DEFAULT_MIN_FEATURE_SIZE))
    }
}

impl StateAnnotator for GcAnnotator {
    fn annotate(&self, sequence: &str) -> Result<Annotation> {
        let features = compute_gc_content(sequence, self.kmer_size)?;
        let states = kmeans(&features, NUMBER_OF_STATES);
        let mapping = resolve_labels(&states, &features, NUMBER_OF_STATES);

        let per_base_states = expand_states(&states, self.kmer_size, sequence.len());
        let mut intervals = segment(&per_base_states);
        if let Some(minimum_feature_size) = self.minimum_feature_size {
            smooth(&mut intervals, minimum_feature_size);
        }

        let mut annotated = intervals
            .into_iter()
            .map(|interval| {
                let state = mapping[&interval.label];
                GcInterval::new(interval.relabel(state))
            })
            .collect_vec();
        assign_scores(&mut annotated, sequence)?;
        Ok(Annotation::new(annotated))
    }
}
