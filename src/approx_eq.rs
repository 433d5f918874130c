/// Tolerance used for geometric equality and as the default ray `t_min`.
pub const EPSILON: f64 = 1.0e-10;
/// Tolerance used by tests that compare against hand-computed values.
pub const LOW_PREC_EPSILON: f64 = 1.0e-5;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq_epsilon(&self, other: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }

    fn approx_eq_low_prec(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, LOW_PREC_EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        // equal infinities would otherwise produce NaN
        self == other || (self - other).abs() < epsilon
    }
}

impl<T: ApproxEq> ApproxEq for &T {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        (**self).approx_eq_epsilon(*other, epsilon)
    }
}

impl<T: ApproxEq> ApproxEq for Option<T> {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs.approx_eq_epsilon(rhs, epsilon),
            (None, None) => true,
            _ => false,
        }
    }
}

#[macro_export]
macro_rules! assert_approx_eq_low_prec {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !$crate::approx_eq::ApproxEq::approx_eq_low_prec(left_val, right_val) {
                    panic!(
                        "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                        left_val, right_val
                    );
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinities_are_equal() {
        assert!(f64::INFINITY.approx_eq(&f64::INFINITY));
        assert!(!f64::INFINITY.approx_eq(&f64::NEG_INFINITY));
    }

    #[test]
    fn low_precision_tolerates_small_drift() {
        assert!(1.0.approx_eq_low_prec(&1.000001));
        assert!(!1.0.approx_eq(&1.000001));
    }
}
