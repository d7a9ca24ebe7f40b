use std::fmt;

/// Number of age buckets the classifier distinguishes.
pub const AGE_BUCKET_COUNT: usize = 8;

/// One of the eight age ranges the classifier was trained on.
///
/// The variant order matches the classifier's output vector; `label()`
/// strings are part of the model contract and must not be edited
/// independently of the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgeBucket {
    Infant,
    Toddler,
    Child,
    Teen,
    YoungAdult,
    Adult,
    MiddleAged,
    Senior,
}

impl AgeBucket {
    /// All buckets in classifier output order.
    pub const ALL: [AgeBucket; AGE_BUCKET_COUNT] = [
        AgeBucket::Infant,
        AgeBucket::Toddler,
        AgeBucket::Child,
        AgeBucket::Teen,
        AgeBucket::YoungAdult,
        AgeBucket::Adult,
        AgeBucket::MiddleAged,
        AgeBucket::Senior,
    ];

    /// Maps a classifier output index to its bucket.
    ///
    /// Returns `None` for indices outside `0..8` — the caller treats that
    /// as a broken classifier contract, not a recoverable condition.
    pub fn from_index(index: usize) -> Option<AgeBucket> {
        Self::ALL.get(index).copied()
    }

    /// The age range label as the classifier publishes it.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::Infant => "(0-2)",
            AgeBucket::Toddler => "(3-6)",
            AgeBucket::Child => "(7-12)",
            AgeBucket::Teen => "(13-20)",
            AgeBucket::YoungAdult => "(21-32)",
            AgeBucket::Adult => "(33-43)",
            AgeBucket::MiddleAged => "(44-53)",
            AgeBucket::Senior => "(54-100)",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_index() {
        for i in 0..AGE_BUCKET_COUNT {
            assert!(AgeBucket::from_index(i).is_some());
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(AgeBucket::from_index(AGE_BUCKET_COUNT).is_none());
        assert!(AgeBucket::from_index(usize::MAX).is_none());
    }

    #[test]
    fn test_index_order_matches_model_contract() {
        assert_eq!(AgeBucket::from_index(0), Some(AgeBucket::Infant));
        assert_eq!(AgeBucket::from_index(4), Some(AgeBucket::YoungAdult));
        assert_eq!(AgeBucket::from_index(7), Some(AgeBucket::Senior));
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            AgeBucket::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels.len(), AGE_BUCKET_COUNT);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(AgeBucket::Infant.to_string(), "(0-2)");
        assert_eq!(AgeBucket::Senior.to_string(), "(54-100)");
    }
}
