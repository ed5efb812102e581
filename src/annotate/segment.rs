use super::interval::Interval;

/// Run-length encode a per-position label sequence into contiguous,
/// non-overlapping intervals covering the whole range. A constant sequence
/// yields a single interval.
pub fn segment<L: PartialEq + Clone>(labels: &[L]) -> Vec<Interval<L>> {
    let mut intervals = Vec::new();
    let mut start = 0;
    for (position, label) in labels.iter().enumerate() {
        if *label != labels[start] {
            intervals.push(Interval::new(labels[start].clone(), start, position));
            start = position;
        }
    }
    if !labels.is_empty() {
        intervals.push(Interval::new(labels[start].clone(), start, labels.len()));
    }
    intervals
}

/// Merge away intervals that are too short to stand on their own.
///
/// An adjacent pair survives only when both intervals are longer than
/// `minimum_feature_size` and carry different labels. A merged interval
/// spans both members and takes the label of the longer one, ties going to
/// the second. After a merge the cursor steps back one position so the new
/// interval is re-checked against its left neighbor, which the merge may
/// have brought below the survival condition.
pub fn smooth<L: PartialEq + Clone>(intervals: &mut Vec<Interval<L>>, minimum_feature_size: usize) {
    let mut i = 0;
    while i + 1 < intervals.len() {
        let first_length = intervals[i].len();
        let second_length = intervals[i + 1].len();

        if first_length > minimum_feature_size
            && second_length > minimum_feature_size
            && intervals[i].label != intervals[i + 1].label
        {
            i += 1;
            continue;
        }

        let label = if second_length < first_length {
            intervals[i].label.clone()
        } else {
            intervals[i + 1].label.clone()
        };
        intervals[i] = Interval::new(label, intervals[i].start, intervals[i + 1].stop);
        intervals.remove(i + 1);
        i = i.saturating_sub(1);
    }
}
