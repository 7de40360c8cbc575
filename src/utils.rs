use super::*;

/// Maps `value` from `domain` to `range` linearly, clamping inputs outside
/// the domain to the nearest range endpoint. Total over all reals.
pub(crate) fn interpolate(
  value: f64,
  domain: (f64, f64),
  range: (f64, f64),
) -> f64 {
  let (domain_start, domain_end) = domain;
  let (range_start, range_end) = range;

  if value <= domain_start {
    return range_start;
  }

  if value >= domain_end {
    return range_end;
  }

  let progress = (value - domain_start) / (domain_end - domain_start);

  range_start + (range_end - range_start) * progress
}

pub(crate) fn rows_for(points: f64) -> u16 {
  let rows = (points / POINTS_PER_ROW).round();

  if rows <= 0.0 {
    0
  } else if rows >= f64::from(u16::MAX) {
    u16::MAX
  } else {
    rows as u16
  }
}
