use crate::shared::age_bucket::AgeBucket;
use crate::shared::constants::RED_OFF_DELAY_SECS;

/// The dwell-time pair for one age bucket, in whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Warning period before the red lamp goes out.
    pub red_off_delay_secs: u64,
    /// Green-phase duration granted to a pedestrian of this bucket.
    pub green_on_secs: u64,
}

/// The fixed bucket → dwell-time table, constant for the system's lifetime.
///
/// The exhaustive match makes totality over the eight buckets a
/// compile-time property; there is no runtime failure path for an unknown
/// bucket.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignalSchedule;

impl SignalSchedule {
    pub fn entry(&self, bucket: AgeBucket) -> ScheduleEntry {
        let green_on_secs = match bucket {
            AgeBucket::Infant => 20,
            AgeBucket::Toddler => 15,
            AgeBucket::Child => 15,
            AgeBucket::Teen => 15,
            AgeBucket::YoungAdult => 15,
            AgeBucket::Adult => 15,
            AgeBucket::MiddleAged => 15,
            AgeBucket::Senior => 45,
        };
        ScheduleEntry {
            red_off_delay_secs: RED_OFF_DELAY_SECS,
            green_on_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_total_over_all_buckets() {
        let schedule = SignalSchedule;
        for bucket in AgeBucket::ALL {
            let entry = schedule.entry(bucket);
            assert_eq!(entry.red_off_delay_secs, 10);
            assert!(entry.green_on_secs > 0);
        }
    }

    #[rstest]
    #[case::infant(AgeBucket::Infant, 20)]
    #[case::toddler(AgeBucket::Toddler, 15)]
    #[case::child(AgeBucket::Child, 15)]
    #[case::senior(AgeBucket::Senior, 45)]
    fn test_green_durations(#[case] bucket: AgeBucket, #[case] expected_secs: u64) {
        assert_eq!(SignalSchedule.entry(bucket).green_on_secs, expected_secs);
    }

    #[test]
    fn test_red_off_delay_uniform() {
        let delays: Vec<u64> = AgeBucket::ALL
            .iter()
            .map(|b| SignalSchedule.entry(*b).red_off_delay_secs)
            .collect();
        assert!(delays.iter().all(|d| *d == delays[0]));
    }
}
