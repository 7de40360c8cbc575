use super::*;

/// Latest vertical scroll offset, in points. The three derived values are
/// recomputed from it on every read; nothing is cached.
pub(crate) struct ScrollState {
  offset: f64,
}

impl ScrollState {
  pub(crate) fn avatar_size(&self) -> f64 {
    interpolate(
      self.offset,
      (0.0, HEADER_SCROLL_DISTANCE),
      (AVATAR_MAX_SIZE, AVATAR_MIN_SIZE),
    )
  }

  pub(crate) fn header_height(&self) -> f64 {
    interpolate(
      self.offset,
      (0.0, HEADER_SCROLL_DISTANCE),
      (HEADER_MAX_HEIGHT, HEADER_MIN_HEIGHT),
    )
  }

  pub(crate) fn new() -> Self {
    Self { offset: 0.0 }
  }

  pub(crate) fn on_scroll(&mut self, offset: f64) {
    self.offset = offset;
  }

  pub(crate) fn tab_bar_offset(&self) -> f64 {
    // The tab bar's top offset tracks the header height exactly, so the
    // bar sits immediately below the header at every scroll position.
    interpolate(
      self.offset,
      (0.0, HEADER_SCROLL_DISTANCE),
      (HEADER_MAX_HEIGHT, HEADER_MIN_HEIGHT),
    )
  }
}
