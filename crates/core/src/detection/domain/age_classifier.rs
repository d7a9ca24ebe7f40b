use crate::shared::age_bucket::{AgeBucket, AGE_BUCKET_COUNT};
use crate::shared::frame::Frame;

/// A probability distribution over the eight age buckets.
///
/// Construction is fallible: a vector of any other length means the
/// classifier violated its output schema, which callers treat as fatal.
#[derive(Clone, Debug, PartialEq)]
pub struct AgeScores {
    probabilities: [f32; AGE_BUCKET_COUNT],
}

impl AgeScores {
    pub fn from_slice(values: &[f32]) -> Result<AgeScores, Box<dyn std::error::Error>> {
        let probabilities: [f32; AGE_BUCKET_COUNT] = values.try_into().map_err(|_| {
            format!(
                "age classifier returned {} scores, expected {AGE_BUCKET_COUNT}",
                values.len()
            )
        })?;
        Ok(AgeScores { probabilities })
    }

    pub fn probabilities(&self) -> &[f32; AGE_BUCKET_COUNT] {
        &self.probabilities
    }

    /// The most probable bucket and its probability.
    pub fn arg_max(&self) -> (AgeBucket, f32) {
        let mut best = 0;
        for (i, p) in self.probabilities.iter().enumerate() {
            if *p > self.probabilities[best] {
                best = i;
            }
        }
        let bucket = AgeBucket::from_index(best)
            .expect("arg_max index is always within the bucket count");
        (bucket, self.probabilities[best])
    }
}

/// Domain interface for age classification of a face crop.
///
/// Implementations wrap an opaque scoring model, hence `&mut self`.
pub trait AgeClassifier: Send {
    fn classify(&mut self, crop: &Frame) -> Result<AgeScores, Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_slice_accepts_eight_scores() {
        let scores = AgeScores::from_slice(&[0.1; 8]).unwrap();
        assert_eq!(scores.probabilities().len(), 8);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(AgeScores::from_slice(&[0.5; 7]).is_err());
        assert!(AgeScores::from_slice(&[0.5; 9]).is_err());
        assert!(AgeScores::from_slice(&[]).is_err());
    }

    #[test]
    fn test_arg_max_picks_highest() {
        let mut values = [0.05f32; 8];
        values[4] = 0.65;
        let (bucket, confidence) = AgeScores::from_slice(&values).unwrap().arg_max();
        assert_eq!(bucket, AgeBucket::YoungAdult);
        assert_relative_eq!(confidence, 0.65);
    }

    #[test]
    fn test_arg_max_tie_prefers_first() {
        let mut values = [0.0f32; 8];
        values[2] = 0.5;
        values[6] = 0.5;
        let (bucket, _) = AgeScores::from_slice(&values).unwrap().arg_max();
        assert_eq!(bucket, AgeBucket::Child);
    }

    #[test]
    fn test_arg_max_last_bucket() {
        let mut values = [0.01f32; 8];
        values[7] = 0.9;
        let (bucket, _) = AgeScores::from_slice(&values).unwrap().arg_max();
        assert_eq!(bucket, AgeBucket::Senior);
    }
}
