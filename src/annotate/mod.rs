mod annotator;
mod interval;
mod labels;
mod scoring;
mod segment;

pub use annotator::{
    Annotation, GcAnnotator, StateAnnotator, DEFAULT_ALPHA, DEFAULT_KMER_SIZE,
    DEFAULT_MIN_FEATURE_SIZE,
};
pub use interval::{GcInterval, Interval, State};
pub use labels::{expand_states, resolve_labels};
pub use scoring::{assign_scores, MIN_REQUIRED_BASELINE_BASES};
pub use segment::{segment, smooth};
