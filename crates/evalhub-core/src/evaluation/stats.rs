use serde::{Deserialize, Serialize};

/// Aggregate counts over stored evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationStats {
    pub total_evaluations: u64,
    pub thumbs_up: u64,
    pub thumbs_down: u64,
    /// Percentage of positive votes, two decimal places.
    pub positive_rate: f64,
    pub unique_users: usize,
    pub unique_sessions: usize,
}

/// Percentage of `thumbs_up` over `total`, rounded to two decimals.
///
/// Exact ties round to even (1 of 32 is 3.12, not 3.13). Returns 0 when
/// there are no records.
pub fn positive_rate(thumbs_up: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = thumbs_up as f64 / total as f64 * 100.0;
    (rate * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rate_zero_records() {
        assert_eq!(positive_rate(0, 0), 0.0);
    }

    #[test]
    fn test_positive_rate_rounds_to_two_places() {
        assert_eq!(positive_rate(1, 3), 33.33);
        assert_eq!(positive_rate(2, 3), 66.67);
        assert_eq!(positive_rate(3, 3), 100.0);
        assert_eq!(positive_rate(0, 5), 0.0);
        assert_eq!(positive_rate(1, 32), 3.12);
        assert_eq!(positive_rate(3, 32), 9.38);
    }
}
