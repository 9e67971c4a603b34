//! Number handling at both ends of a tool call.
//!
//! Inbound, JSON Schema treats `2.0` as an integer, so integer parameters accept
//! any whole number regardless of how the caller spelled it. Outbound, whole
//! `f64` values are written without a fractional part (`200000`, not `200000.0`).

use serde::{Deserialize, Deserializer, Serializer, de::Error};

/// Largest magnitude at which every whole `f64` is exactly representable.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

fn as_whole(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT).then_some(n as i64)
}

fn whole<E: Error>(n: f64) -> Result<i64, E> {
    as_whole(n).ok_or_else(|| E::custom(format!("expected a whole number, got {n}")))
}

/// Non-negative count such as `skip` or `take`.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = whole(f64::deserialize(deserializer)?)?;
    u32::try_from(n).map_err(|_| D::Error::custom(format!("{n} is not a valid count")))
}

/// Optional signed integer such as a relative bedroom bound.
pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(|n| {
            let n = whole(n)?;
            i32::try_from(n).map_err(|_| D::Error::custom(format!("{n} is out of range")))
        })
        .transpose()
}

/// Write `n` as an integer when it has no fractional part.
pub fn compact<S>(n: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match as_whole(*n) {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_f64(*n),
    }
}

/// [`compact`] for optional fields; pair with `skip_serializing_if`.
pub fn compact_option<S>(n: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match n {
        Some(n) => compact(n, serializer),
        None => serializer.serialize_none(),
    }
}
