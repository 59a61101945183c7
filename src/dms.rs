//! Sexagesimal EXIF coordinates to signed decimal degrees.

use exif::{Rational, Value};

/// Convert a degrees/minutes/seconds triple to decimal degrees.
///
/// Only the exact references `"S"` and `"W"` flip the sign. Anything else,
/// lowercase letters included, is passed through unsigned.
pub fn dms_to_decimal(dms: &[Rational; 3], reference: &str) -> f64 {
    let degrees = dms[0].num as f64 / dms[0].denom as f64;
    let minutes = dms[1].num as f64 / dms[1].denom as f64;
    let seconds = dms[2].num as f64 / dms[2].denom as f64;

    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if matches!(reference, "S" | "W") {
        -decimal
    } else {
        decimal
    }
}

/// Pull the first three rationals out of a GPSLatitude/GPSLongitude value.
///
/// A zero denominator makes the whole triple unusable.
pub fn rational_triple(value: &Value) -> Option<[Rational; 3]> {
    match value {
        Value::Rational(rationals) if rationals.len() >= 3 => {
            let triple = [rationals[0], rationals[1], rationals[2]];
            triple.iter().all(|r| r.denom != 0).then_some(triple)
        }
        _ => None,
    }
}

/// Read a GPSLatitudeRef/GPSLongitudeRef ASCII value as a string.
pub fn hemisphere_reference(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(strings) => strings
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string()),
        _ => None,
    }
}
