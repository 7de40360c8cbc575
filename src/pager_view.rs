use super::*;

/// The paged container: one page per tab, one page displayed at a time.
/// Swipes report the settled page index; a programmatic `set_page` does not,
/// which is what keeps tab selection from feeding back into itself.
pub(crate) struct PagerView {
  current: usize,
  pages: Vec<PageList>,
}

impl PagerView {
  pub(crate) fn active_page(&self) -> Option<&PageList> {
    self.pages.get(self.current)
  }

  pub(crate) fn active_page_mut(&mut self) -> Option<&mut PageList> {
    self.pages.get_mut(self.current)
  }

  pub(crate) fn current(&self) -> usize {
    self.current
  }

  pub(crate) fn new() -> Self {
    Self {
      current: 0,
      pages: (0..TAB_COUNT).map(PageList::placeholder).collect(),
    }
  }

  pub(crate) fn page_count(&self) -> usize {
    self.pages.len()
  }

  pub(crate) fn set_page(&mut self, index: usize) {
    if index < self.pages.len() {
      self.current = index;
    }
  }

  pub(crate) fn swipe_next(&mut self) -> Option<usize> {
    if self.current.saturating_add(1) < self.pages.len() {
      self.current += 1;
      Some(self.current)
    } else {
      None
    }
  }

  pub(crate) fn swipe_previous(&mut self) -> Option<usize> {
    if self.current > 0 {
      self.current -= 1;
      Some(self.current)
    } else {
      None
    }
  }
}
