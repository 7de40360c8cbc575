use {
  anyhow::ensure,
  app::App,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  header_view::HeaderView,
  help_view::HelpView,
  page_list::PageList,
  pager_view::PagerView,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  scroll_state::ScrollState,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal, Stdout},
    process,
    time::{Duration, Instant},
  },
  tab::Tab,
  transient_message::TransientMessage,
  utils::{interpolate, rows_for},
};

mod app;
mod command;
mod command_dispatch;
mod effect;
mod header_view;
mod help_view;
mod page_list;
mod pager_view;
mod scroll_state;
mod state;
mod tab;
mod transient_message;
mod utils;

const HEADER_MAX_HEIGHT: f64 = 200.0;
const HEADER_MIN_HEIGHT: f64 = 80.0;
const HEADER_SCROLL_DISTANCE: f64 = HEADER_MAX_HEIGHT - HEADER_MIN_HEIGHT;

const AVATAR_MAX_SIZE: f64 = 80.0;
const AVATAR_MIN_SIZE: f64 = 40.0;

const TAB_COUNT: usize = 3;
const ITEMS_PER_TAB: usize = 20;

// One scrolled list item feeds this many points to the scroll controller,
// so five items cover the full header scroll distance.
const ITEM_SCROLL_POINTS: f64 = 24.0;

// Scale between the screen's point values and terminal rows.
const POINTS_PER_ROW: f64 = 20.0;

const PROFILE_NAME: &str = "Cristiano Ronaldo";

const LIST_STATUS: &str = "←/h prev page • →/l next page • 1-3 pick tab • ↑/k ↓/j scroll • q/esc quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const BASE_INDENT: &str = " ";

const TRANSIENT_MESSAGE_DURATION: Duration = Duration::from_secs(3);

const HELP_TEXT: &str = "\
Pages:
  ← / h   swipe to the previous page
  → / l   swipe to the next page
  tab     select the next tab
  1-3     select a tab directly

Scrolling:
  ↑ / k   scroll up one item
  ↓ / j   scroll down one item
  pg↓     scroll down a screenful
  pg↑     scroll up a screenful
  ctrl+d  scroll down a screenful
  ctrl+u  scroll up a screenful
  home    jump to the first item
  end     jump to the last item

Screen:
  scroll  collapses the header and shrinks the avatar
  q       quit
  esc     close help or quit from the list
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

fn run() -> Result {
  let mut terminal = initialize_terminal()?;

  let mut app = App::new();

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

fn main() {
  if let Err(error) = run() {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
