use super::*;

/// Screen state. `active_tab` is the single source of truth for which tab
/// and page are current; it has exactly two writers, `select_tab` (a tap on
/// a tab) and `on_page_settled` (a completed swipe), and the most recent
/// write wins.
pub(crate) struct State {
  active_tab: usize,
  help: HelpView,
  list_height: usize,
  message: String,
  pager: PagerView,
  pending_effects: Vec<Effect>,
  scroll: ScrollState,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn active_tab(&self) -> usize {
    self.active_tab
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn cycle_tab(&mut self) -> Result {
    let next =
      self.active_tab.saturating_add(1) % self.pager.page_count().max(1);

    self.select_tab(next)
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::CycleTab => self.cycle_tab()?,
      Command::SelectTab(index) => self.select_tab(index)?,
      Command::SwipeNext => self.swipe_next(),
      Command::SwipePrevious => self.swipe_previous(),
      Command::ScrollDown => self.scroll_active(1),
      Command::ScrollUp => self.scroll_active(-1),
      Command::PageDown => self.scroll_active(self.page_jump()),
      Command::PageUp => self.scroll_active(-self.page_jump()),
      Command::ScrollToTop => self.scroll_to_top(),
      Command::ScrollToBottom => self.scroll_to_bottom(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new() -> Self {
    debug_assert_eq!(Tab::all().len(), TAB_COUNT);

    Self {
      active_tab: 0,
      help: HelpView::new(),
      list_height: 0,
      message: LIST_STATUS.into(),
      pager: PagerView::new(),
      pending_effects: Vec::new(),
      scroll: ScrollState::new(),
      transient_message: None,
    }
  }

  fn on_page_settled(&mut self, index: usize) {
    // Passive highlight update only. Issuing a navigate command here would
    // bounce the pager into another settle.
    self.active_tab = index;
  }

  fn page_jump(&self) -> isize {
    // Two rendered rows per list item.
    isize::try_from((self.list_height / 2).max(1)).unwrap_or(1)
  }

  pub(crate) fn pager(&self) -> &PagerView {
    &self.pager
  }

  pub(crate) fn scroll(&self) -> &ScrollState {
    &self.scroll
  }

  fn scroll_active(&mut self, delta: isize) {
    if let Some(page) = self.pager.active_page_mut() {
      page.scroll_by(delta);
    }

    self.sync_scroll();
  }

  fn scroll_to_bottom(&mut self) {
    if let Some(page) = self.pager.active_page_mut() {
      page.scroll_to(page.max_offset());
    }

    self.sync_scroll();
  }

  fn scroll_to_top(&mut self) {
    if let Some(page) = self.pager.active_page_mut() {
      page.scroll_to(0);
    }

    self.sync_scroll();
  }

  fn select_tab(&mut self, index: usize) -> Result {
    ensure!(
      index < self.pager.page_count(),
      "tab index {index} out of range 0..{}",
      self.pager.page_count()
    );

    self.active_tab = index;

    self.pending_effects.push(Effect::SetPage { index });

    Ok(())
  }

  pub(crate) fn set_displayed_page(&mut self, index: usize) {
    self.pager.set_page(index);
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let previous = match self.transient_message.take() {
      Some(existing) if self.message == existing.current() => {
        existing.into_previous()
      }
      _ => self.message.clone(),
    };

    self.transient_message = Some(TransientMessage::new(
      message.clone(),
      previous,
      Instant::now() + TRANSIENT_MESSAGE_DURATION,
    ));

    self.message = message;
  }

  fn swipe_next(&mut self) {
    if let Some(settled) = self.pager.swipe_next() {
      self.on_page_settled(settled);
    }
  }

  fn swipe_previous(&mut self) {
    if let Some(settled) = self.pager.swipe_previous() {
      self.on_page_settled(settled);
    }
  }

  fn sync_scroll(&mut self) {
    if let Some(page) = self.pager.active_page() {
      self.scroll.on_scroll(page.offset_points());
    }
  }

  pub(crate) fn update_transient_message(&mut self, now: Instant) {
    let Some(transient) = self.transient_message.as_ref() else {
      return;
    };

    if self.message != transient.current() {
      // Something else took over the status line while the transient was
      // live; restoring the saved message would clobber it.
      self.transient_message = None;
      return;
    }

    if !transient.is_expired(now) {
      return;
    }

    if let Some(transient) = self.transient_message.take() {
      self.message = transient.into_previous();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn select_tab_issues_exactly_one_navigate_command() {
    let mut state = State::new();

    let dispatch = state
      .dispatch_command(Command::SelectTab(1))
      .expect("dispatch succeeds");

    assert_eq!(state.active_tab(), 1);
    assert!(!dispatch.should_exit);
    assert_eq!(dispatch.effects.len(), 1);

    let Effect::SetPage { index } = &dispatch.effects[0];
    assert_eq!(*index, 1);
  }

  #[test]
  fn page_settle_updates_the_tab_without_a_navigate_command() {
    let mut state = State::new();

    let dispatch = state
      .dispatch_command(Command::SwipeNext)
      .expect("dispatch succeeds");

    assert_eq!(state.active_tab(), 1);
    assert_eq!(state.pager().current(), 1);
    assert!(dispatch.effects.is_empty());
  }

  #[test]
  fn swipes_at_the_last_page_change_nothing() {
    let mut state = State::new();

    for _ in 0..2 {
      state
        .dispatch_command(Command::SwipeNext)
        .expect("dispatch succeeds");
    }

    assert_eq!(state.active_tab(), 2);

    let dispatch = state
      .dispatch_command(Command::SwipeNext)
      .expect("dispatch succeeds");

    assert_eq!(state.active_tab(), 2);
    assert_eq!(state.pager().current(), 2);
    assert!(dispatch.effects.is_empty());
  }

  #[test]
  fn select_tab_out_of_range_is_a_contract_failure() {
    let mut state = State::new();

    let result = state.dispatch_command(Command::SelectTab(3));

    assert!(result.is_err());
    assert_eq!(state.active_tab(), 0);

    // The screen stays usable after the rejected call.
    let dispatch = state
      .dispatch_command(Command::SelectTab(2))
      .expect("dispatch succeeds");

    assert_eq!(state.active_tab(), 2);
    assert_eq!(dispatch.effects.len(), 1);
  }

  #[test]
  fn the_most_recent_writer_wins() {
    let mut state = State::new();

    state
      .dispatch_command(Command::SwipeNext)
      .expect("dispatch succeeds");

    let dispatch = state
      .dispatch_command(Command::SelectTab(0))
      .expect("dispatch succeeds");

    assert_eq!(state.active_tab(), 0);

    for effect in dispatch.effects {
      let Effect::SetPage { index } = effect;
      state.set_displayed_page(index);
    }

    assert_eq!(state.pager().current(), 0);
  }

  #[test]
  fn cycle_tab_wraps_and_navigates() {
    let mut state = State::new();

    for expected in [1, 2, 0] {
      let dispatch = state
        .dispatch_command(Command::CycleTab)
        .expect("dispatch succeeds");

      assert_eq!(state.active_tab(), expected);
      assert_eq!(dispatch.effects.len(), 1);
    }
  }

  #[test]
  fn scrolling_feeds_the_interpolation_controller() {
    let mut state = State::new();

    state
      .dispatch_command(Command::ScrollDown)
      .expect("dispatch succeeds");

    assert!(state.scroll().header_height() < HEADER_MAX_HEIGHT);
    assert!(state.scroll().header_height() > HEADER_MIN_HEIGHT);

    // Five scrolled items cover the full scroll distance.
    for _ in 0..4 {
      state
        .dispatch_command(Command::ScrollDown)
        .expect("dispatch succeeds");
    }

    assert_eq!(state.scroll().header_height(), HEADER_MIN_HEIGHT);
  }

  #[test]
  fn scrolling_to_the_bottom_and_back_restores_the_header() {
    let mut state = State::new();

    state
      .dispatch_command(Command::ScrollToBottom)
      .expect("dispatch succeeds");

    assert_eq!(state.scroll().header_height(), HEADER_MIN_HEIGHT);
    assert_eq!(state.scroll().avatar_size(), AVATAR_MIN_SIZE);

    state
      .dispatch_command(Command::ScrollToTop)
      .expect("dispatch succeeds");

    assert_eq!(state.scroll().header_height(), HEADER_MAX_HEIGHT);
    assert_eq!(state.scroll().avatar_size(), AVATAR_MAX_SIZE);
  }

  #[test]
  fn switching_pages_keeps_the_scroll_value() {
    let mut state = State::new();

    for _ in 0..2 {
      state
        .dispatch_command(Command::ScrollDown)
        .expect("dispatch succeeds");
    }

    let before = state.scroll().header_height();

    state
      .dispatch_command(Command::SwipeNext)
      .expect("dispatch succeeds");

    assert_eq!(state.scroll().header_height(), before);
  }

  #[test]
  fn settling_across_multiple_pages_never_navigates() {
    let mut state = State::new();

    let mut issued_effects = 0;

    for expected in [1, 2] {
      let dispatch = state
        .dispatch_command(Command::SwipeNext)
        .expect("dispatch succeeds");

      issued_effects += dispatch.effects.len();

      assert_eq!(state.active_tab(), expected);
      assert_eq!(state.pager().current(), expected);
    }

    assert_eq!(issued_effects, 0);
  }

  #[test]
  fn expired_transient_restores_the_previous_status() {
    let mut state = State::new();

    state.set_transient_message("error: nope".into());

    assert_eq!(state.message(), "error: nope");

    state.update_transient_message(Instant::now());

    assert_eq!(state.message(), "error: nope");

    state
      .update_transient_message(Instant::now() + TRANSIENT_MESSAGE_DURATION);

    assert_eq!(state.message(), LIST_STATUS);
  }

  #[test]
  fn displaced_transient_is_dropped_without_restoring() {
    let mut state = State::new();

    state.set_transient_message("error: nope".into());

    state
      .dispatch_command(Command::ShowHelp)
      .expect("dispatch succeeds");

    assert_eq!(state.message(), HELP_STATUS);

    state
      .update_transient_message(Instant::now() + TRANSIENT_MESSAGE_DURATION);

    assert_eq!(state.message(), HELP_STATUS);
  }

  #[test]
  fn quit_requests_exit_without_effects() {
    let mut state = State::new();

    let dispatch = state
      .dispatch_command(Command::Quit)
      .expect("dispatch succeeds");

    assert!(dispatch.should_exit);
    assert!(dispatch.effects.is_empty());
  }
}
