use super::Result;

#[inline]
fn is_gc(base: u8) -> bool {
    matches!(base, b'G' | b'C' | b'g' | b'c')
}

/// Sliding-window G+C fraction, one value per window start position.
///
/// The count is carried between adjacent windows: the base leaving on the
/// left is subtracted and the base entering on the right is added, so the
/// scan stays O(sequence length) for any window size.
pub fn compute_gc_content(sequence: &str, kmer_size: usize) -> Result<Vec<f64>> {
    if kmer_size == 0 {
        return Err(format!(
            "Please provide a positive kmer size, {} was provided",
            kmer_size
        ));
    }
    if sequence.is_empty() || kmer_size > sequence.len() {
        return Err(format!(
            "Kmer size of {} is larger than the provided sequence of length {}",
            kmer_size,
            sequence.len()
        ));
    }

    let bases = sequence.as_bytes();
    let mut gc_count = bases[..kmer_size].iter().filter(|&&b| is_gc(b)).count();

    let mut fractions = Vec::with_capacity(bases.len() - kmer_size + 1);
    fractions.push(gc_count as f64 / kmer_size as f64);
    for start in 1..=bases.len() - kmer_size {
        if is_gc(bases[start - 1]) {
            gc_count -= 1;
        }
        if is_gc(bases[start + kmer_size - 1]) {
            gc_count += 1;
        }
        fractions.push(gc_count as f64 / kmer_size as f64);
    }
    Ok(fractions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rng, seq::IndexedRandom};

    fn naive_gc_content(sequence: &str, kmer_size: usize) -> Vec<f64> {
        let bases = sequence.as_bytes();
        (0..=bases.len() - kmer_size)
            .map(|start| {
                let count = bases[start..start + kmer_size]
                    .iter()
                    .filter(|&&b| is_gc(b))
                    .count();
                count as f64 / kmer_size as f64
            })
            .collect()
    }

    #[test]
    fn windows_of_two_over_short_sequence() {
        let result = compute_gc_content("AGGCCTA", 2).unwrap();
        assert_eq!(result, vec![0.5, 1.0, 1.0, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn window_covering_the_whole_sequence() {
        let result = compute_gc_content("AGGCCTA", 7).unwrap();
        assert_eq!(result, vec![4.0 / 7.0]);
    }

    #[test]
    fn lowercase_bases_are_counted() {
        let result = compute_gc_content("agGccTa", 7).unwrap();
        assert_eq!(result, vec![4.0 / 7.0]);
    }

    #[test]
    fn window_longer_than_sequence_is_rejected() {
        assert!(compute_gc_content("AGGCCTA", 200).is_err());
    }

    #[test]
    fn zero_window_is_rejected() {
        assert!(compute_gc_content("AGGCCTA", 0).is_err());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(compute_gc_content("", 5).is_err());
    }

    #[test]
    fn rolling_count_matches_per_window_count() {
        let mut rng = rng();
        let sequence: String = (0..500)
            .map(|_| *b"ACGTN".choose(&mut rng).unwrap() as char)
            .collect();
        for kmer_size in [1, 2, 13, 50, 499, 500] {
            assert_eq!(
                compute_gc_content(&sequence, kmer_size).unwrap(),
                naive_gc_content(&sequence, kmer_size),
                "window size {}",
                kmer_size
            );
        }
    }
}
