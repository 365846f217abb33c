/// Logistic expected score of a side rated `r_a` against a side rated `r_b`.
pub fn expected_score(r_a: f64, r_b: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf(-(r_a - r_b) / 400.0))
}

#[cfg(test)]
mod tests {
    use super::expected_score;

    #[test]
    fn equal_ratings_are_a_coin_flip() {
        assert!((expected_score(1500.0, 1500.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn four_hundred_points_is_ten_to_one() {
        let p = expected_score(1900.0, 1500.0);
        assert!((p - 10.0 / 11.0).abs() < 1e-12);
        assert!((expected_score(1500.0, 1900.0) + p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn strictly_increasing_in_own_rating() {
        let mut last = 0.0;
        for r in (1000..2200).step_by(50) {
            let p = expected_score(r as f64, 1600.0);
            assert!(p > last);
            last = p;
        }
    }
}
