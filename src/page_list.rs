use super::*;

/// One tab's list: placeholder items plus the item offset the list has been
/// scrolled to. Item generation is deterministic, so pages need no cache.
pub(crate) struct PageList {
  items: Vec<String>,
  offset: usize,
}

impl PageList {
  pub(crate) fn items(&self) -> &[String] {
    &self.items
  }

  pub(crate) fn max_offset(&self) -> usize {
    self.items.len().saturating_sub(1)
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset
  }

  pub(crate) fn offset_points(&self) -> f64 {
    self.offset as f64 * ITEM_SCROLL_POINTS
  }

  pub(crate) fn placeholder(tab_index: usize) -> Self {
    let items = (1..=ITEMS_PER_TAB)
      .map(|item| format!("Item {item} - Tab {}", tab_index + 1))
      .collect();

    Self { items, offset: 0 }
  }

  pub(crate) fn scroll_by(&mut self, delta: isize) {
    let current = isize::try_from(self.offset).unwrap_or(isize::MAX);

    let target = current.saturating_add(delta).max(0);

    self.scroll_to(usize::try_from(target).unwrap_or(0));
  }

  pub(crate) fn scroll_to(&mut self, offset: usize) {
    self.offset = offset.min(self.max_offset());
  }
}
