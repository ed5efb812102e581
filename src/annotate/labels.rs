use super::interval::State;
use std::collections::HashMap;

/// Expand the window-indexed cluster sequence to one identity per sequence
/// position.
///
/// The feature at window start `i` describes bases `[i, i + k)`, so the
/// front is padded with `k / 2` copies of the first identity to center each
/// window on its bases, and the tail repeats the last identity until every
/// position is covered.
pub fn expand_states(states: &[usize], kmer_size: usize, sequence_length: usize) -> Vec<usize> {
    assert!(!states.is_empty(), "Cannot expand an empty state sequence");
    let first = states[0];
    let last = *states.last().unwrap();

    let mut expanded = Vec::with_capacity(sequence_length);
    expanded.resize(kmer_size / 2, first);
    expanded.extend_from_slice(states);
    expanded.resize(sequence_length.max(expanded.len()), last);
    expanded
}

/// Map raw cluster identities to semantic states.
///
/// The clustering primitive makes no promise about which numeric identity
/// is which state, so the mapping is rebuilt for every annotation from the
/// first feature value seen for each distinct identity. A single distinct
/// identity has nothing to compare against and maps to `Unknown`; with two,
/// the identity first seen on the larger feature value becomes `High` and
/// the other `Low`.
pub fn resolve_labels(
    states: &[usize],
    features: &[f64],
    number_of_states: usize,
) -> HashMap<usize, State> {
    let mut candidates: Vec<(usize, f64)> = Vec::new();
    for (&state, &feature) in states.iter().zip(features.iter()) {
        if candidates.len() == number_of_states {
            break;
        }
        if !candidates.iter().any(|&(seen, _)| seen == state) {
            candidates.push((state, feature));
        }
    }

    let mut mapping = HashMap::new();
    if candidates.len() == 1 {
        mapping.insert(candidates[0].0, State::Unknown);
    } else if candidates.len() == 2 {
        let (first, first_feature) = candidates[0];
        let (second, second_feature) = candidates[1];
        if first_feature > second_feature {
            mapping.insert(first, State::High);
            mapping.insert(second, State::Low);
        } else {
            mapping.insert(first, State::Low);
            mapping.insert(second, State::High);
        }
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_centers_the_window() {
        let states = [0, 0, 1, 1, 1];
        // Five windows of size 5 cover a sequence of nine positions
        assert_eq!(expand_states(&states, 5, 9), vec![0, 0, 0, 0, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn expansion_backfills_with_the_last_state() {
        let states = [0, 1];
        assert_eq!(expand_states(&states, 4, 5), vec![0, 0, 0, 1, 1]);
    }

    #[test]
    fn window_of_one_needs_no_padding() {
        let states = [1, 0, 1];
        assert_eq!(expand_states(&states, 1, 3), vec![1, 0, 1]);
    }

    #[test]
    fn single_identity_maps_to_unknown() {
        let states = [0, 0, 0];
        let features = [0.5, 0.5, 0.5];
        let mapping = resolve_labels(&states, &features, 2);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping[&0], State::Unknown);
    }

    #[test]
    fn larger_first_seen_feature_becomes_high() {
        let states = [1, 1, 0, 0];
        let features = [0.9, 1.0, 0.1, 0.0];
        let mapping = resolve_labels(&states, &features, 2);
        assert_eq!(mapping[&1], State::High);
        assert_eq!(mapping[&0], State::Low);
    }

    #[test]
    fn mapping_direction_is_symmetric() {
        let states = [0, 1];
        let features = [0.2, 0.8];
        let mapping = resolve_labels(&states, &features, 2);
        assert_eq!(mapping[&0], State::Low);
        assert_eq!(mapping[&1], State::High);
    }

    #[test]
    fn scan_stops_after_the_requested_number_of_identities() {
        // The later, larger feature for identity 0 must not be consulted
        let states = [0, 1, 0, 1];
        let features = [0.1, 0.5, 0.9, 0.5];
        let mapping = resolve_labels(&states, &features, 2);
        assert_eq!(mapping[&0], State::Low);
        assert_eq!(mapping[&1], State::High);
    }
}
