//! Small numeric helpers.

/// Returns the greater of two values.
///
/// When the values compare equal (or are unordered, as with `NaN`), `b` is
/// returned.
///
/// ```
/// use shopkit_core::max;
///
/// assert_eq!(max(1, 2), 2);
/// assert_eq!(max(2.5, 1.0), 2.5);
/// ```
#[must_use]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Classic fizz-buzz for a single number.
#[must_use]
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean of `numbers`.
///
/// Returns `NaN` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return f64::NAN;
    }
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

/// `n!`, or `None` when `n` is negative or the result overflows `u64`.
///
/// ```
/// use shopkit_core::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(6), Some(720));
/// assert_eq!(factorial(-1), None);
/// ```
#[must_use]
pub fn factorial(n: i32) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    (2..=n).try_fold(1_u64, u64::checked_mul)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_max_first_greater() {
        // Arrange
        let (a, b) = (2, 1);
        // Act
        let result = max(a, b);
        // Assert
        assert_eq!(result, 2);
    }

    #[test]
    fn test_max_second_greater() {
        assert_eq!(max(1, 2), 2);
    }

    #[test]
    fn test_max_equal() {
        assert_eq!(max(3, 3), 3);
    }

    #[rstest]
    #[case(15, "FizzBuzz")]
    #[case(30, "FizzBuzz")]
    #[case(0, "FizzBuzz")]
    #[case(9, "Fizz")]
    #[case(10, "Buzz")]
    #[case(7, "7")]
    #[case(-3, "Fizz")]
    fn test_fizz_buzz(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(fizz_buzz(n), expected);
    }

    #[test]
    fn test_average_empty_is_nan() {
        assert!(calculate_average(&[]).is_nan());
    }

    #[rstest]
    #[case(&[1.0], 1.0)]
    #[case(&[1.0, 2.0], 1.5)]
    #[case(&[1.0, 2.0, 3.0], 2.0)]
    #[case(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3.5)]
    fn test_average(#[case] numbers: &[f64], #[case] expected: f64) {
        assert!((calculate_average(numbers) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(3, 6)]
    #[case(6, 720)]
    #[case(20, 2_432_902_008_176_640_000)]
    fn test_factorial(#[case] n: i32, #[case] expected: u64) {
        assert_eq!(factorial(n), Some(expected));
    }

    #[test]
    fn test_factorial_negative_is_none() {
        assert_eq!(factorial(-1), None);
        assert_eq!(factorial(i32::MIN), None);
    }

    #[test]
    fn test_factorial_overflow_is_none() {
        assert_eq!(factorial(21), None);
    }
}
