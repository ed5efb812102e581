use super::interval::{GcInterval, State};
use crate::utils::{compute_gc_content, two_proportion_ztest, Alternative, Result};

/// Smallest pooled leave-one-out baseline that still supports a test.
pub const MIN_REQUIRED_BASELINE_BASES: usize = 30;

fn baseline_counts(intervals: &[GcInterval], label: State) -> (usize, usize) {
    let mut at_counts = 0;
    let mut gc_counts = 0;
    for interval in intervals.iter().filter(|interval| interval.label == label) {
        at_counts += interval.at_count;
        gc_counts += interval.gc_count;
    }
    (at_counts, gc_counts)
}

/// Score each High/Low interval against the pooled composition of the other
/// intervals sharing its state.
///
/// The baseline for an interval is its own state's pool with the interval's
/// contribution removed. High intervals are tested for an AT share below
/// that baseline, Low intervals for one above it. Unknown intervals are
/// never pooled and never scored, and an interval whose remaining baseline
/// holds fewer than MIN_REQUIRED_BASELINE_BASES bases is left unscored.
pub fn assign_scores(intervals: &mut [GcInterval], sequence: &str) -> Result<()> {
    for interval in intervals.iter_mut() {
        let span = &sequence[interval.start..interval.stop];
        let gc_content = compute_gc_content(span, span.len())?[0];
        interval.set_composition(gc_content);
    }

    let (high_at, high_gc) = baseline_counts(intervals, State::High);
    let (low_at, low_gc) = baseline_counts(intervals, State::Low);

    for interval in intervals.iter_mut() {
        let (pool_at, pool_gc, alternative) = match interval.label {
            State::High => (high_at, high_gc, Alternative::Smaller),
            State::Low => (low_at, low_gc, Alternative::Larger),
            State::Unknown => continue,
        };

        // Everything in this state's pool except the interval itself
        let baseline_at = pool_at - interval.at_count;
        let baseline_gc = pool_gc - interval.gc_count;
        let baseline_total = baseline_at + baseline_gc;
        if baseline_total < MIN_REQUIRED_BASELINE_BASES {
            continue;
        }

        let observed_total = interval.at_count + interval.gc_count;
        let p_value = two_proportion_ztest(
            [interval.at_count as u64, baseline_at as u64],
            [observed_total as u64, baseline_total as u64],
            alternative,
        );
        if p_value.is_finite() {
            interval.score = Some(p_value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::interval::Interval;

    fn interval(label: State, start: usize, stop: usize) -> GcInterval {
        GcInterval::new(Interval::new(label, start, stop))
    }

    #[test]
    fn composition_is_filled_for_every_interval() {
        let sequence = "GGGGGAAAAA";
        let mut intervals = vec![interval(State::High, 0, 5), interval(State::Low, 5, 10)];
        assign_scores(&mut intervals, sequence).unwrap();

        assert_eq!(intervals[0].gc_content, Some(1.0));
        assert_eq!(intervals[0].gc_count, 5);
        assert_eq!(intervals[0].at_count, 0);
        assert_eq!(intervals[1].gc_content, Some(0.0));
        assert_eq!(intervals[1].at_count, 5);
    }

    #[test]
    fn lone_group_member_has_no_baseline() {
        let sequence = "GGGGGAAAAA";
        let mut intervals = vec![interval(State::High, 0, 5), interval(State::Low, 5, 10)];
        assign_scores(&mut intervals, sequence).unwrap();
        assert_eq!(intervals[0].score, None);
        assert_eq!(intervals[1].score, None);
    }

    #[test]
    fn baseline_below_minimum_leaves_interval_unscored() {
        // Two High intervals of 20 bases each: the leave-one-out baseline
        // is 20 bases, short of the 30-base minimum
        let sequence = "GCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGC";
        let mut intervals = vec![interval(State::High, 0, 20), interval(State::High, 20, 40)];
        assign_scores(&mut intervals, sequence).unwrap();
        assert!(intervals.iter().all(|interval| interval.score.is_none()));
    }

    #[test]
    fn unknown_intervals_are_never_scored() {
        let sequence = "GCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGCGC";
        let mut intervals = vec![interval(State::Unknown, 0, 40)];
        assign_scores(&mut intervals, sequence).unwrap();
        assert_eq!(intervals[0].score, None);
    }

    #[test]
    fn interval_deviating_from_its_pool_is_scored() {
        // Three Low intervals; the middle one carries far more GC than the
        // other two, so its AT share is below its own pool's
        let sequence = format!("{}{}{}", "AT".repeat(20), "GCGCGCGCATATATATATAT", "TA".repeat(20));
        let mut intervals = vec![
            interval(State::Low, 0, 40),
            interval(State::Low, 40, 60),
            interval(State::Low, 60, 100),
        ];
        assign_scores(&mut intervals, &sequence).unwrap();

        // The pure-AT flanks sit above their leave-one-out baseline and
        // score strongly under alternative "larger"
        assert!(intervals[0].score.unwrap() < 0.05);
        assert!(intervals[2].score.unwrap() < 0.05);
        // The GC-heavy middle sits below its baseline, so the same
        // alternative leaves it far from significance
        assert!(intervals[1].score.unwrap() > 0.5);
    }

    #[test]
    fn uniform_pool_has_zero_variance_and_stays_unscored() {
        // Every Low interval is pure AT: observed and baseline proportions
        // are both 1, the z statistic is undefined, no score is stored
        let sequence = "AT".repeat(40);
        let mut intervals = vec![
            interval(State::Low, 0, 20),
            interval(State::Low, 20, 50),
            interval(State::Low, 50, 80),
        ];
        assign_scores(&mut intervals, &sequence).unwrap();
        assert!(intervals.iter().all(|interval| interval.score.is_none()));
    }
}
