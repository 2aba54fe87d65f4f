use crate::error::{Error, Result};
use crate::practice_engine::models::NumberRange;

/// Smallest upper bound a range is widened to.
pub const MIN_UPPER_BOUND: i64 = 10;

/// Ranges narrower than this restart at 1.
pub const MIN_SPAN: i64 = 10;

/// Raw bounds that the prompt must ask for again: a zero bound or `min >= max`.
pub fn is_valid_raw_range(min: i64, max: i64) -> bool {
    min != 0 && max != 0 && min < max
}

/// Validate and widen raw bounds.
///
/// Rules, in order: reject zero bounds and `min >= max`; raise `max` to 10;
/// if `max < 11` or the span is under 10, restart `min` at 1.
pub fn normalize(min: i64, max: i64) -> Result<NumberRange> {
    if !is_valid_raw_range(min, max) {
        return Err(Error::InvalidRange { min, max });
    }

    let max = max.max(MIN_UPPER_BOUND);
    let min = if max < MIN_UPPER_BOUND + 1 || max.saturating_sub(min) < MIN_SPAN {
        1
    } else {
        min
    };

    Ok(NumberRange::new_unchecked(min, max))
}
