//! Range membership, covering, case equality and bounds

use crate::builtins::BuiltinFlags;
use crate::value::{RangeValue, Value};
use crate::vm::{dispatch, ExecutionContext};
use crate::VmResult;
use std::cmp::Ordering;

/// `range.include?(value)`
pub fn include(ctx: &ExecutionContext, range: &Value, value: &Value) -> VmResult<Value> {
    let flags = ctx.builtins();
    if flags.range_include() {
        if let Some(result) = range.as_range().and_then(|r| fast_include(flags, r, value)) {
            return Ok(Value::Bool(result));
        }
    }
    dispatch::call_method(ctx, range, "include?", std::slice::from_ref(value))
}

/// `range.cover?(value)`
pub fn cover(ctx: &ExecutionContext, range: &Value, value: &Value) -> VmResult<Value> {
    let flags = ctx.builtins();
    if flags.range_cover() {
        if let Some(result) = range.as_range().and_then(|r| fast_cover(flags, r, value)) {
            return Ok(Value::Bool(result));
        }
    }
    dispatch::call_method(ctx, range, "cover?", std::slice::from_ref(value))
}

/// `range === value` (case/when)
pub fn case_eq(ctx: &ExecutionContext, range: &Value, value: &Value) -> VmResult<Value> {
    let flags = ctx.builtins();
    if flags.range_eqq() {
        if let Some(result) = range.as_range().and_then(|r| fast_include(flags, r, value)) {
            return Ok(Value::Bool(result));
        }
    }
    dispatch::call_method(ctx, range, "===", std::slice::from_ref(value))
}

/// `range.min`
pub fn min(ctx: &ExecutionContext, range: &Value) -> VmResult<Value> {
    let flags = ctx.builtins();
    if flags.range_min() {
        if let Some(result) = range.as_range().and_then(|r| fast_min(flags, r)) {
            return Ok(result);
        }
    }
    dispatch::call_method(ctx, range, "min", &[])
}

/// `range.max`
pub fn max(ctx: &ExecutionContext, range: &Value) -> VmResult<Value> {
    let flags = ctx.builtins();
    if flags.range_max() {
        if let Some(result) = range.as_range().and_then(|r| fast_max(flags, r)) {
            return Ok(result);
        }
    }
    dispatch::call_method(ctx, range, "max", &[])
}

#[inline]
fn within(lower: Ordering, upper: Ordering, exclusive: bool) -> bool {
    if lower == Ordering::Less {
        return false;
    }
    if exclusive {
        upper == Ordering::Less
    } else {
        upper != Ordering::Greater
    }
}

/// Membership for integer or float bounds and a value of the same type
///
/// Requires builtin `<=>` on the bound type. Does not check the
/// `include?` flag itself; callers gate on the method they implement.
pub fn fast_include(flags: &BuiltinFlags, range: &RangeValue, value: &Value) -> Option<bool> {
    match (&range.begin, &range.end, value) {
        (Value::Integer(b), Value::Integer(e), Value::Integer(x)) if flags.integer_compare() => {
            Some(within(x.cmp(b), x.cmp(e), range.exclusive))
        }
        (Value::Float(b), Value::Float(e), Value::Float(x)) if flags.float_compare() => {
            let lower = x.partial_cmp(b)?;
            let upper = x.partial_cmp(e)?;
            Some(within(lower, upper, range.exclusive))
        }
        _ => None,
    }
}

/// Covering for numeric bounds, plus string bounds with a string value
pub fn fast_cover(flags: &BuiltinFlags, range: &RangeValue, value: &Value) -> Option<bool> {
    match (&range.begin, &range.end, value) {
        (Value::Str(b), Value::Str(e), Value::Str(x)) if flags.string_compare() => {
            let x = x.as_bytes();
            Some(within(
                x.cmp(b.as_bytes()),
                x.cmp(e.as_bytes()),
                range.exclusive,
            ))
        }
        _ => fast_include(flags, range, value),
    }
}

/// Lower bound of a non-empty numeric range, nil when empty
pub fn fast_min(flags: &BuiltinFlags, range: &RangeValue) -> Option<Value> {
    let ordering = bounds_ordering(flags, range)?;
    if is_empty(ordering, range.exclusive) {
        return Some(Value::Nil);
    }
    Some(range.begin.clone())
}

/// Upper bound of a non-empty numeric range, nil when empty
///
/// Exclusive integer ranges answer `end - 1` and additionally need builtin
/// `Integer#-`. Exclusive ranges with a non-Integer end are left to
/// dispatch, even when empty.
pub fn fast_max(flags: &BuiltinFlags, range: &RangeValue) -> Option<Value> {
    if range.exclusive && !matches!(range.end, Value::Integer(_)) {
        return None;
    }
    let ordering = bounds_ordering(flags, range)?;
    if is_empty(ordering, range.exclusive) {
        return Some(Value::Nil);
    }
    if !range.exclusive {
        return Some(range.end.clone());
    }
    match range.end {
        Value::Integer(e) if flags.integer_minus() => e.checked_sub(1).map(Value::Integer),
        _ => None,
    }
}

fn bounds_ordering(flags: &BuiltinFlags, range: &RangeValue) -> Option<Ordering> {
    match (&range.begin, &range.end) {
        (Value::Integer(b), Value::Integer(e)) if flags.integer_compare() => Some(b.cmp(e)),
        (Value::Float(b), Value::Float(e)) if flags.float_compare() => b.partial_cmp(e),
        _ => None,
    }
}

fn is_empty(ordering: Ordering, exclusive: bool) -> bool {
    match ordering {
        Ordering::Less => false,
        Ordering::Equal => exclusive,
        Ordering::Greater => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::BuiltinType;

    fn int_range(begin: i64, end: i64, exclusive: bool) -> RangeValue {
        RangeValue {
            begin: Value::Integer(begin),
            end: Value::Integer(end),
            exclusive,
        }
    }

    #[test]
    fn test_fast_include_inclusive() {
        let flags = BuiltinFlags::new();
        let range = int_range(1, 100, false);

        let results: Vec<_> = [0, 1, 50, 100, 101]
            .into_iter()
            .map(|v| fast_include(&flags, &range, &Value::Integer(v)))
            .collect();
        assert_eq!(
            results,
            vec![Some(false), Some(true), Some(true), Some(true), Some(false)]
        );
    }

    #[test]
    fn test_fast_include_exclusive() {
        let flags = BuiltinFlags::new();
        let range = int_range(1, 100, true);

        assert_eq!(fast_include(&flags, &range, &Value::Integer(99)), Some(true));
        assert_eq!(fast_include(&flags, &range, &Value::Integer(100)), Some(false));
    }

    #[test]
    fn test_fast_include_declines_mixed_types() {
        let flags = BuiltinFlags::new();
        let range = int_range(1, 10, false);

        assert_eq!(fast_include(&flags, &range, &Value::Float(2.5)), None);
        assert_eq!(fast_include(&flags, &range, &Value::string("2")), None);

        let mixed = RangeValue {
            begin: Value::Integer(1),
            end: Value::Float(10.0),
            exclusive: false,
        };
        assert_eq!(fast_include(&flags, &mixed, &Value::Integer(2)), None);
    }

    #[test]
    fn test_fast_include_float_nan_declines() {
        let flags = BuiltinFlags::new();
        let range = RangeValue {
            begin: Value::Float(0.0),
            end: Value::Float(1.0),
            exclusive: false,
        };
        assert_eq!(fast_include(&flags, &range, &Value::Float(0.5)), Some(true));
        assert_eq!(fast_include(&flags, &range, &Value::Float(f64::NAN)), None);
    }

    #[test]
    fn test_fast_include_requires_builtin_compare() {
        let flags = BuiltinFlags::new();
        flags.invalidate("<=>", BuiltinType::Integer);

        let range = int_range(1, 10, false);
        assert_eq!(fast_include(&flags, &range, &Value::Integer(5)), None);
    }

    #[test]
    fn test_fast_cover_strings() {
        let flags = BuiltinFlags::new();
        let range = RangeValue {
            begin: Value::string("a"),
            end: Value::string("m"),
            exclusive: true,
        };

        assert_eq!(fast_cover(&flags, &range, &Value::string("cat")), Some(true));
        assert_eq!(fast_cover(&flags, &range, &Value::string("m")), Some(false));
        assert_eq!(fast_include(&flags, &range, &Value::string("cat")), None);

        flags.invalidate("<=>", BuiltinType::String);
        assert_eq!(fast_cover(&flags, &range, &Value::string("cat")), None);
    }

    #[test]
    fn test_fast_min_max() {
        let flags = BuiltinFlags::new();

        assert_eq!(fast_min(&flags, &int_range(3, 7, false)), Some(Value::Integer(3)));
        assert_eq!(fast_max(&flags, &int_range(3, 7, false)), Some(Value::Integer(7)));
        assert_eq!(fast_max(&flags, &int_range(3, 7, true)), Some(Value::Integer(6)));
        assert_eq!(fast_min(&flags, &int_range(7, 3, false)), Some(Value::Nil));
        assert_eq!(fast_max(&flags, &int_range(7, 7, true)), Some(Value::Nil));
    }

    #[test]
    fn test_fast_max_exclusive_needs_builtin_minus() {
        let flags = BuiltinFlags::new();
        flags.invalidate("-", BuiltinType::Integer);

        assert_eq!(fast_max(&flags, &int_range(3, 7, true)), None);
        assert_eq!(fast_max(&flags, &int_range(3, 7, false)), Some(Value::Integer(7)));
    }

    #[test]
    fn test_fast_max_exclusive_float_declines() {
        let flags = BuiltinFlags::new();
        let range = RangeValue {
            begin: Value::Float(1.0),
            end: Value::Float(2.0),
            exclusive: true,
        };
        assert_eq!(fast_max(&flags, &range), None);
        assert_eq!(fast_min(&flags, &range), Some(Value::Float(1.0)));
    }

    #[test]
    fn test_fast_max_empty_exclusive_float_declines() {
        let flags = BuiltinFlags::new();
        let range = RangeValue {
            begin: Value::Float(2.0),
            end: Value::Float(1.0),
            exclusive: true,
        };
        assert_eq!(fast_max(&flags, &range), None);
        assert_eq!(fast_min(&flags, &range), Some(Value::Nil));
    }
}
