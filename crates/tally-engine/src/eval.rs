//! Pure arithmetic evaluation: one operator applied to one value.

use tally_types::Operator;

use crate::error::EngineError;

/// Apply `op` to a parent value and an operand.
///
/// Results are raw double-precision outcomes — no rounding, clamping,
/// or finiteness checks; overflow to infinity and NaN propagation
/// follow IEEE 754. The one guarded case is division by an exactly
/// zero operand (IEEE equality, so `-0.0` counts), which fails with
/// [`EngineError::DivisionByZero`] rather than producing an infinity.
pub fn apply(left: f64, op: Operator, operand: f64) -> Result<f64, EngineError> {
    match op {
        Operator::Add => Ok(left + operand),
        Operator::Subtract => Ok(left - operand),
        Operator::Multiply => Ok(left * operand),
        Operator::Divide => {
            if operand == 0.0 {
                Err(EngineError::DivisionByZero)
            } else {
                Ok(left / operand)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_operators_compute_raw_results() {
        assert_eq!(apply(10.0, Operator::Add, 5.0).unwrap(), 15.0);
        assert_eq!(apply(10.0, Operator::Subtract, 3.0).unwrap(), 7.0);
        assert_eq!(apply(10.0, Operator::Multiply, 2.0).unwrap(), 20.0);
        assert_eq!(apply(10.0, Operator::Divide, 4.0).unwrap(), 2.5);
    }

    #[test]
    fn divide_by_zero_is_a_distinct_error() {
        assert_eq!(
            apply(10.0, Operator::Divide, 0.0).unwrap_err(),
            EngineError::DivisionByZero,
        );
        // Negative zero compares equal to zero.
        assert_eq!(
            apply(10.0, Operator::Divide, -0.0).unwrap_err(),
            EngineError::DivisionByZero,
        );
    }

    #[test]
    fn near_zero_divisor_is_not_rejected() {
        // The check is exact equality, not epsilon-based.
        let result = apply(1.0, Operator::Divide, f64::MIN_POSITIVE).unwrap();
        assert!(result.is_infinite() || result > 0.0);
    }

    #[test]
    fn no_rounding_is_applied() {
        let result = apply(0.1, Operator::Add, 0.2).unwrap();
        assert_eq!(result, 0.1 + 0.2);
        assert_ne!(result, 0.3);
    }

    #[test]
    fn non_finite_results_pass_through() {
        assert!(apply(f64::MAX, Operator::Multiply, 2.0).unwrap().is_infinite());
        assert!(apply(f64::INFINITY, Operator::Subtract, f64::INFINITY)
            .unwrap()
            .is_nan());
    }
}
