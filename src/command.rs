use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CycleTab,
  HideHelp,
  None,
  PageDown,
  PageUp,
  Quit,
  ScrollDown,
  ScrollToBottom,
  ScrollToTop,
  ScrollUp,
  SelectTab(usize),
  ShowHelp,
  SwipeNext,
  SwipePrevious,
}

impl Command {
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Left | KeyCode::Char('h') => Command::SwipePrevious,
      KeyCode::Right | KeyCode::Char('l') => Command::SwipeNext,
      KeyCode::Tab => Command::CycleTab,
      KeyCode::Char('1') => Command::SelectTab(0),
      KeyCode::Char('2') => Command::SelectTab(1),
      KeyCode::Char('3') => Command::SelectTab(2),
      KeyCode::Down | KeyCode::Char('j') => Command::ScrollDown,
      KeyCode::Up | KeyCode::Char('k') => Command::ScrollUp,
      KeyCode::PageDown => Command::PageDown,
      KeyCode::PageUp => Command::PageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageUp
      }
      KeyCode::Home => Command::ScrollToTop,
      KeyCode::End => Command::ScrollToBottom,
      _ => Command::None,
    }
  }
}
