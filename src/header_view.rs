use super::*;

/// The collapsing header band: back chevron, search and profile glyphs, a
/// centered avatar block sized from the derived avatar size, and the
/// profile name.
pub(crate) struct HeaderView;

impl HeaderView {
  fn avatar_rows(scroll: &ScrollState) -> u16 {
    rows_for(scroll.avatar_size()).max(1)
  }

  pub(crate) fn draw(frame: &mut Frame, area: Rect, scroll: &ScrollState) {
    if area.height == 0 || area.width == 0 {
      return;
    }

    let left = format!("{BASE_INDENT}\u{2039}");
    let right = format!("\u{2315} \u{263a}{BASE_INDENT}");

    let padding = (area.width as usize)
      .saturating_sub(left.chars().count())
      .saturating_sub(right.chars().count());

    let mut lines = vec![Line::from(vec![
      Span::raw(left),
      Span::raw(" ".repeat(padding)),
      Span::raw(right),
    ])];

    let avatar_rows = Self::avatar_rows(scroll);

    // Terminal cells are roughly twice as tall as wide.
    let avatar_width = usize::from(avatar_rows) * 2;

    for _ in 0..avatar_rows {
      lines.push(Line::from("\u{2588}".repeat(avatar_width)).centered());
    }

    lines.push(
      Line::from(Span::styled(
        PROFILE_NAME,
        Style::default().add_modifier(Modifier::BOLD),
      ))
      .centered(),
    );

    lines.truncate(area.height as usize);

    let header = Paragraph::new(lines)
      .style(Style::default().bg(Color::Blue).fg(Color::White));

    frame.render_widget(header, area);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn avatar_shrinks_with_the_header() {
    let mut scroll = ScrollState::new();

    assert_eq!(HeaderView::avatar_rows(&scroll), 4);

    scroll.on_scroll(HEADER_SCROLL_DISTANCE);

    assert_eq!(HeaderView::avatar_rows(&scroll), 2);
  }
}
