//! Numeric helpers: single-decision rounding modes and value reducers.
//!
//! The three rounding functions differ only in how an exact `.5`
//! fractional part is resolved: to the even neighbor, toward positive
//! infinity, or toward negative infinity. The fractional part is taken
//! with floored modulo (`rem_euclid`), so it lies in `[0, 1)` for every
//! finite input and negative values follow the same tie rules as
//! positive ones.

/// Rounds to the nearest integer, resolving `.5` ties to the even
/// neighbor ("bankers' rounding").
///
/// Minimizes bias when rounding a large set of values.
///
/// # Examples
/// ```
/// use u_kit::math::round_half_even;
/// assert_eq!(round_half_even(2.5), 2); // 2 is even
/// assert_eq!(round_half_even(3.5), 4); // 4 is even
/// assert_eq!(round_half_even(2.6), 3);
/// ```
pub fn round_half_even(value: f64) -> i64 {
    let fraction = value.rem_euclid(1.0);
    if fraction > 0.5 {
        return value.round() as i64;
    }
    if fraction < 0.5 {
        return value.floor() as i64;
    }
    // Exactly .5: halving shifts the tie to a quarter, so rounding the
    // half and doubling lands on the even neighbor.
    ((value / 2.0).round() * 2.0) as i64
}

/// Rounds to the nearest integer, resolving `.5` ties upward (toward
/// positive infinity).
///
/// The most common rounding convention.
///
/// # Examples
/// ```
/// use u_kit::math::round_half_up;
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(2.4), 2);
/// ```
pub fn round_half_up(value: f64) -> i64 {
    let fraction = value.rem_euclid(1.0);
    if fraction >= 0.5 {
        value.floor() as i64 + 1
    } else {
        value.floor() as i64
    }
}

/// Rounds to the nearest integer, resolving `.5` ties downward (toward
/// negative infinity).
///
/// # Examples
/// ```
/// use u_kit::math::round_half_down;
/// assert_eq!(round_half_down(2.5), 2);
/// assert_eq!(round_half_down(2.6), 3);
/// ```
pub fn round_half_down(value: f64) -> i64 {
    let fraction = value.rem_euclid(1.0);
    if fraction > 0.5 {
        value.floor() as i64 + 1
    } else {
        value.floor() as i64
    }
}

/// Sums a value extracted from each item.
///
/// Returns `0.0` for an empty slice.
///
/// # Examples
/// ```
/// use u_kit::math::sum;
/// let cart = [("a", 1.0), ("b", 2.0)];
/// assert_eq!(sum(&cart, |p| p.1), 3.0);
/// ```
pub fn sum<T, F>(items: &[T], get_value: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().map(get_value).sum()
}

/// Builds a reducer that keeps the item with the smaller extracted
/// value.
///
/// An extraction that comes up empty counts as `+∞`, so any real value
/// wins against it. The comparison is strict: on equal values the
/// reducer yields its second argument. Reducing an empty iterator is
/// the caller's concern (`Iterator::reduce` returns `None`).
///
/// # Examples
/// ```
/// use u_kit::math::by_min;
/// let cheapest = [("a", 2.0), ("b", 1.0)]
///     .into_iter()
///     .reduce(by_min(|p: &(&str, f64)| Some(p.1)));
/// assert_eq!(cheapest, Some(("b", 1.0)));
/// ```
pub fn by_min<T, F>(by_value: F) -> impl Fn(T, T) -> T
where
    F: Fn(&T) -> Option<f64>,
{
    move |a, b| {
        if by_value(&a).unwrap_or(f64::INFINITY) < by_value(&b).unwrap_or(f64::INFINITY) {
            a
        } else {
            b
        }
    }
}

/// Builds a reducer that keeps the item with the larger extracted
/// value.
///
/// The mirror of [`by_min`]: empty extractions count as `−∞`.
///
/// # Examples
/// ```
/// use u_kit::math::by_max;
/// let dearest = [("a", 2.0), ("b", 1.0)]
///     .into_iter()
///     .reduce(by_max(|p: &(&str, f64)| Some(p.1)));
/// assert_eq!(dearest, Some(("a", 2.0)));
/// ```
pub fn by_max<T, F>(by_value: F) -> impl Fn(T, T) -> T
where
    F: Fn(&T) -> Option<f64>,
{
    move |a, b| {
        if by_value(&a).unwrap_or(f64::NEG_INFINITY) > by_value(&b).unwrap_or(f64::NEG_INFINITY) {
            a
        } else {
            b
        }
    }
}

/// Clamps `value` to the interval `[min, max]`.
///
/// Written as `min(max(value, min), max)`, so an inverted interval
/// (`min > max`) yields `max` instead of panicking.
///
/// # Examples
/// ```
/// use u_kit::math::clamp;
/// assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- The three modes only disagree on exact .5 fractions ---
        #[test]
        fn modes_agree_off_ties(value in -1e9f64..1e9) {
            prop_assume!(value.rem_euclid(1.0) != 0.5);
            let even = round_half_even(value);
            let up = round_half_up(value);
            let down = round_half_down(value);
            prop_assert_eq!(even, up);
            prop_assert_eq!(up, down);
        }

        // --- Every mode stays within half a unit of the input ---
        #[test]
        fn result_is_a_neighbor(value in -1e9f64..1e9) {
            for rounded in [
                round_half_even(value),
                round_half_up(value),
                round_half_down(value),
            ] {
                prop_assert!((rounded as f64 - value).abs() <= 0.5);
            }
        }

        // --- Exact ties, constructed from integers, resolve per mode ---
        #[test]
        fn ties_resolve_per_mode(k in -1_000_000i64..1_000_000) {
            let value = k as f64 + 0.5;
            prop_assert_eq!(round_half_up(value), k + 1);
            prop_assert_eq!(round_half_down(value), k);
            let even = round_half_even(value);
            prop_assert!(even == k || even == k + 1);
            prop_assert_eq!(even % 2, 0);
        }

        // --- sum matches a plain fold ---
        #[test]
        fn sum_matches_fold(values in proptest::collection::vec(-1e6f64..1e6, 0..50)) {
            let items: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
            let total = sum(&items, |p| p.1);
            let expected: f64 = values.iter().sum();
            prop_assert!((total - expected).abs() < 1e-6);
        }

        // --- clamp lands inside the interval ---
        #[test]
        fn clamp_within_bounds(
            value in -1e9f64..1e9,
            a in -1e9f64..1e9,
            b in -1e9f64..1e9,
        ) {
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            let clamped = clamp(value, min, max);
            prop_assert!(clamped >= min && clamped <= max);
        }

        // --- by_min / by_max pick the true extreme under reduce ---
        #[test]
        fn reducers_pick_extremes(values in proptest::collection::vec(-1e6f64..1e6, 1..50)) {
            let items: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
            let min_item = items.iter().copied().reduce(by_min(|p: &(usize, f64)| Some(p.1))).unwrap();
            let max_item = items.iter().copied().reduce(by_max(|p: &(usize, f64)| Some(p.1))).unwrap();
            let true_min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let true_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(min_item.1, true_min);
            prop_assert_eq!(max_item.1, true_max);
        }
    }
}
