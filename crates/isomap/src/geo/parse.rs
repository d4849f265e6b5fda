use super::types::GeoPoint;
use crate::error::RenderError;

/// Parse a `"lat,lng"` token into a point.
///
/// Each half is trimmed and read as `f64`. Exactly two fields are required and
/// both must be finite; no bounds check is applied.
pub fn parse_coordinate(token: &str) -> Result<GeoPoint, RenderError> {
    let mut fields = token.split(',');
    let (lat, lng) = match (fields.next(), fields.next(), fields.next()) {
        (Some(lat), Some(lng), None) => (lat, lng),
        _ => {
            let n = token.split(',').count();
            return Err(RenderError::malformed(
                token,
                format!("expected 2 fields, found {n}"),
            ));
        }
    };
    Ok(GeoPoint::new(
        parse_field(token, lat, "latitude")?,
        parse_field(token, lng, "longitude")?,
    ))
}

fn parse_field(token: &str, field: &str, what: &str) -> Result<f64, RenderError> {
    let v: f64 = field
        .trim()
        .parse()
        .map_err(|e| RenderError::malformed(token, format!("{what}: {e}")))?;
    if !v.is_finite() {
        return Err(RenderError::malformed(token, format!("{what} is not finite")));
    }
    Ok(v)
}

/// Parse an ordered shape into a ring; fails on the first malformed token.
pub fn parse_ring<S: AsRef<str>>(shape: &[S]) -> Result<Vec<GeoPoint>, RenderError> {
    shape.iter().map(|t| parse_coordinate(t.as_ref())).collect()
}
