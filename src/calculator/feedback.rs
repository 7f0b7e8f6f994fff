use serde::Serialize;

/// GPA at or above which a result makes the Dean's List.
///
/// Equal to the grade-point value of `A-` on the scale.
pub const DEANS_LIST_THRESHOLD: f64 = 3.7;

/// Feedback shown alongside a computed GPA.
///
/// | GPA          | Tier            |
/// |--------------|-----------------|
/// | == 0         | None            |
/// | >= 3.7       | Distinction     |
/// | otherwise    | Encouragement   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    /// Nothing contributed; no message is shown.
    None,
    Distinction,
    Encouragement,
}

impl FeedbackTier {
    pub fn classify(gpa: f64) -> Self {
        match gpa {
            g if g == 0.0 => FeedbackTier::None,
            g if g >= DEANS_LIST_THRESHOLD => FeedbackTier::Distinction,
            _ => FeedbackTier::Encouragement,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            FeedbackTier::None => None,
            FeedbackTier::Distinction => Some("Congratulations! You are on the Dean's List 🎉"),
            FeedbackTier::Encouragement => Some("Keep going — you're improving! 💪"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::GradeScale;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(FeedbackTier::classify(0.0), FeedbackTier::None);
        assert_eq!(FeedbackTier::classify(0.01), FeedbackTier::Encouragement);
        assert_eq!(FeedbackTier::classify(3.69), FeedbackTier::Encouragement);
        assert_eq!(FeedbackTier::classify(3.7), FeedbackTier::Distinction);
        assert_eq!(FeedbackTier::classify(4.0), FeedbackTier::Distinction);
    }

    #[test]
    fn test_threshold_matches_a_minus() {
        assert_eq!(
            GradeScale::standard().grade_point("A-"),
            Some(DEANS_LIST_THRESHOLD)
        );
    }

    #[test]
    fn test_messages() {
        assert!(FeedbackTier::None.message().is_none());
        assert!(
            FeedbackTier::Distinction
                .message()
                .unwrap()
                .contains("Dean's List")
        );
        assert!(
            FeedbackTier::Encouragement
                .message()
                .unwrap()
                .starts_with("Keep going")
        );
    }
}
