use super::*;

pub(crate) struct App {
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Min(0), Constraint::Length(1)])
      .split(frame.area());

    let body = layout[0];

    // Header height and tab-bar top are derived independently from the
    // scroll offset; the two mappings are identical, so the tab bar always
    // lands on the header's bottom edge.
    let header_rows =
      rows_for(self.state.scroll().header_height()).min(body.height);

    let tabs_top = rows_for(self.state.scroll().tab_bar_offset())
      .min(body.height.saturating_sub(1));

    let header_area = Rect::new(body.x, body.y, body.width, header_rows);

    let tabs_height = body.height.saturating_sub(tabs_top).min(1);

    let tabs_area =
      Rect::new(body.x, body.y + tabs_top, body.width, tabs_height);

    let list_top = tabs_top.saturating_add(tabs_height);

    let list_area = Rect::new(
      body.x,
      body.y + list_top,
      body.width,
      body.height.saturating_sub(list_top),
    );

    self.state.set_list_height(list_area.height as usize);

    if let Some(page) = self.state.pager().active_page() {
      let list_items: Vec<ListItem> = page
        .items()
        .iter()
        .map(|item| {
          ListItem::new(vec![
            Line::from(vec![
              Span::raw(BASE_INDENT),
              Span::styled(item.clone(), Style::default().fg(Color::White)),
            ]),
            Line::from(Span::raw(BASE_INDENT)),
          ])
        })
        .collect();

      let mut list_state = ListState::default().with_offset(page.offset());

      frame.render_stateful_widget(
        List::new(list_items),
        list_area,
        &mut list_state,
      );
    }

    let tab_titles: Vec<Line> = Tab::all()
      .iter()
      .map(|tab| Line::from(tab.label.to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(self.state.active_tab())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, tabs_area);

    HeaderView::draw(frame, header_area, self.state.scroll());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[1]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::SetPage { index } => self.state.set_displayed_page(index),
    }
  }

  pub(crate) fn new() -> Self {
    Self {
      state: State::new(),
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.state.update_transient_message(Instant::now());

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        Command::from_key(key)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }
}
