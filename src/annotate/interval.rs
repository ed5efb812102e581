use std::fmt;

/// Half-open `[start, stop)` span of sequence positions sharing one label.
///
/// The label is generic: the segmenter produces intervals labeled with raw
/// cluster identities, which are later swapped for semantic states through
/// the explicit `relabel` operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval<L> {
    pub label: L,
    pub start: usize,
    pub stop: usize,
}

impl<L> Interval<L> {
    pub fn new(label: L, start: usize, stop: usize) -> Self {
        debug_assert!(start < stop);
        Interval { label, start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same span under a new label.
    pub fn relabel<M>(self, label: M) -> Interval<M> {
        Interval {
            label,
            start: self.start,
            stop: self.stop,
        }
    }
}

/// Semantic state of a region once cluster identities are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    High,
    Low,
    Unknown,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            State::High => "High GC Content",
            State::Low => "Low GC Content",
            State::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// A state interval annotated with its base composition and, when enough
/// baseline data exists, a significance score.
///
/// Composition and score start absent and are filled in exactly once by the
/// scoring pass; afterwards the interval is treated as immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct GcInterval {
    pub label: State,
    pub start: usize,
    pub stop: usize,
    pub gc_content: Option<f64>,
    pub gc_count: usize,
    pub at_count: usize,
    pub score: Option<f64>,
}

impl GcInterval {
    pub fn new(interval: Interval<State>) -> Self {
        GcInterval {
            label: interval.label,
            start: interval.start,
            stop: interval.stop,
            gc_content: None,
            gc_count: 0,
            at_count: 0,
            score: None,
        }
    }

    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record this interval's G+C fraction. `gc_count` is the rounded share
    /// of the span and `at_count` the complement, so the two always sum to
    /// the interval length.
    pub fn set_composition(&mut self, gc_content: f64) {
        let gc_count = (self.len() as f64 * gc_content).round() as usize;
        self.gc_content = Some(gc_content);
        self.gc_count = gc_count;
        self.at_count = self.len() - gc_count;
    }
}

impl fmt::Display for GcInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}-{}", self.label, self.start, self.stop)?;
        match self.score {
            Some(score) => write!(f, "\t{}", score)?,
            None => write!(f, "\tNot Enough Data")?,
        }
        match self.gc_content {
            Some(gc_content) => write!(f, "\t{}", gc_content),
            None => write!(f, "\tUNKNOWN_GC_CONTENT"),
        }
    }
}
