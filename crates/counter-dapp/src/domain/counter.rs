//! The increment rule.
//!
//! The counter is never stored here. Each request carries the current value
//! and gets back `floor(counter) + 1` as an unsigned 256-bit word.

use serde_json::Number;
use shared_types::U256;

use crate::error::{AdvanceError, AdvanceResult, CounterBound};

/// Compute `floor(counter) + 1`.
///
/// Integer literals are taken exactly across the full 256-bit range.
/// Fractional and exponent forms go through `f64` and are floored. A result
/// below zero or above `U256::MAX` is an error; nothing wraps.
pub fn next_counter(counter: &Number) -> AdvanceResult<U256> {
    let out_of_range = |bound| AdvanceError::CounterOutOfRange {
        counter: counter.to_string(),
        bound,
    };

    if let Some(value) = counter.as_u64() {
        return Ok(U256::from(value) + U256::one());
    }

    if let Some(value) = counter.as_i64() {
        // `-0` fails as_u64 but lands here as 0
        return match value.checked_add(1).and_then(|next| u64::try_from(next).ok()) {
            Some(next) => Ok(U256::from(next)),
            None => Err(out_of_range(CounterBound::Underflow)),
        };
    }

    let text = counter.to_string();
    let negative = text.starts_with('-');
    let magnitude = text.trim_start_matches('-');

    if is_decimal_integer(magnitude) {
        if negative {
            return Err(out_of_range(CounterBound::Underflow));
        }
        return U256::from_dec_str(magnitude)
            .ok()
            .and_then(|value| value.checked_add(U256::one()))
            .ok_or_else(|| out_of_range(CounterBound::Overflow));
    }

    let value = counter.as_f64().ok_or_else(|| {
        out_of_range(if negative {
            CounterBound::Underflow
        } else {
            CounterBound::Overflow
        })
    })?;

    let next = value.floor() + 1.0;
    if next < 0.0 {
        return Err(out_of_range(CounterBound::Underflow));
    }

    U256::from_dec_str(&format!("{next:.0}")).map_err(|_| out_of_range(CounterBound::Overflow))
}

fn is_decimal_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::u256_to_word;
    use std::str::FromStr;

    fn number(text: &str) -> Number {
        Number::from_str(text).unwrap()
    }

    fn bound_of(err: AdvanceError) -> CounterBound {
        match err {
            AdvanceError::CounterOutOfRange { bound, .. } => bound,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_small_integers() {
        assert_eq!(next_counter(&number("0")).unwrap(), U256::from(1u64));
        assert_eq!(next_counter(&number("5")).unwrap(), U256::from(6u64));
        assert_eq!(
            next_counter(&number("18446744073709551615")).unwrap(),
            U256::from(u64::MAX) + U256::one()
        );
    }

    #[test]
    fn test_fractions_are_floored() {
        assert_eq!(next_counter(&number("5.9")).unwrap(), U256::from(6u64));
        assert_eq!(next_counter(&number("5.0")).unwrap(), U256::from(6u64));
        assert_eq!(next_counter(&number("-0.5")).unwrap(), U256::zero());
        assert_eq!(next_counter(&number("1e3")).unwrap(), U256::from(1001u64));
    }

    #[test]
    fn test_minus_one_increments_to_zero() {
        assert_eq!(next_counter(&number("-1")).unwrap(), U256::zero());
    }

    #[test]
    fn test_negative_zero_increments_to_one() {
        assert_eq!(next_counter(&number("-0")).unwrap(), U256::one());
        assert_eq!(next_counter(&number("-0.0")).unwrap(), U256::one());
        assert_eq!(next_counter(&number("-0e5")).unwrap(), U256::one());
    }

    #[test]
    fn test_negative_underflows() {
        assert_eq!(
            bound_of(next_counter(&number("-2")).unwrap_err()),
            CounterBound::Underflow
        );
        assert_eq!(
            bound_of(next_counter(&number("-1.5")).unwrap_err()),
            CounterBound::Underflow
        );
        assert_eq!(
            bound_of(next_counter(&number("-123456789012345678901234567890")).unwrap_err()),
            CounterBound::Underflow
        );
    }

    #[test]
    fn test_wide_integers_are_exact() {
        let below_max = U256::MAX - U256::one();
        let next = next_counter(&number(&below_max.to_string())).unwrap();
        assert_eq!(next, U256::MAX);
    }

    #[test]
    fn test_max_overflows() {
        assert_eq!(
            bound_of(next_counter(&number(&U256::MAX.to_string())).unwrap_err()),
            CounterBound::Overflow
        );
        assert_eq!(
            bound_of(next_counter(&number("1e300")).unwrap_err()),
            CounterBound::Overflow
        );
    }

    proptest! {
        #[test]
        fn prop_increment_matches_word_encoding(bytes in any::<[u8; 32]>()) {
            let counter = U256::from_big_endian(&bytes);
            let result = next_counter(&number(&counter.to_string()));

            if counter == U256::MAX {
                prop_assert!(result.is_err());
            } else {
                let next = result.unwrap();
                prop_assert_eq!(next, counter + U256::one());
                let word = u256_to_word(next);
                prop_assert_eq!(word.len(), 66);
                prop_assert!(word.starts_with("0x"));
            }
        }

        #[test]
        fn prop_u64_counters_increment(counter in any::<u64>()) {
            let next = next_counter(&Number::from(counter)).unwrap();
            prop_assert_eq!(next, U256::from(counter) + U256::one());
        }
    }
}
