//! Page-size resolution for connection fields.

use std::num::IntErrorKind;

/// A runtime variable value that may be used as a connection page size.
///
/// Returns `None` for values that are not numbers; the connection then
/// counts zero items.
pub trait AsItemCount {
    fn as_item_count(&self) -> Option<i64>;
}

impl AsItemCount for serde_json::Value {
    /// Integers are taken exactly (`u64` values above `i64::MAX` clamp) and
    /// floats are truncated toward zero. Anything else is not a count.
    fn as_item_count(&self) -> Option<i64> {
        let serde_json::Value::Number(number) = self else {
            return None;
        };
        if let Some(n) = number.as_i64() {
            return Some(n);
        }
        if number.as_u64().is_some() {
            return Some(i64::MAX);
        }
        number.as_f64().and_then(|f| f.as_item_count())
    }
}

impl AsItemCount for i64 {
    fn as_item_count(&self) -> Option<i64> {
        Some(*self)
    }
}

impl AsItemCount for i32 {
    fn as_item_count(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl AsItemCount for u32 {
    fn as_item_count(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl AsItemCount for f64 {
    /// Truncates toward zero. `as` saturates at the `i64` bounds and maps NaN
    /// to zero.
    fn as_item_count(&self) -> Option<i64> {
        Some(*self as i64)
    }
}

impl AsItemCount for f32 {
    fn as_item_count(&self) -> Option<i64> {
        Some(*self as i64)
    }
}

impl<T: AsItemCount + ?Sized> AsItemCount for &T {
    fn as_item_count(&self) -> Option<i64> {
        (**self).as_item_count()
    }
}

/// Reads a page size written inline, e.g. the `5` in `first: 5`.
///
/// Base-10 only. Text that is not an integer (floats, strings, enum values)
/// counts as zero. Integers outside the `i64` range clamp to its bounds.
pub fn parse_literal_count(raw: &str) -> i64 {
    match raw.parse::<i64>() {
        Ok(n) => n,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}
