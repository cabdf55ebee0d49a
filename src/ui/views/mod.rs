//! Screen implementations, one per view section.

mod change_password;
mod create_card;
mod delete_card;
mod home;
mod keyboard_panel;
mod options;
mod review;
mod sign_in;
mod sign_up;
mod update_card;

pub use change_password::ChangePasswordScreen;
pub use create_card::CreateCardScreen;
pub use delete_card::DeleteCardScreen;
pub use home::HomeScreen;
pub use keyboard_panel::KeyboardPanel;
pub use options::OptionsScreen;
pub use review::ReviewScreen;
pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;
pub use update_card::UpdateCardScreen;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::session::SessionContext;
use crate::ui::app::{ApiOutcome, Effect};
use crate::ui::theme::{GLOBAL_BORDER, MENU_SELECTED, PROMPT_TEXT, TITLE_TEXT};

/// A view controller. Each implementation registers once with the view
/// registry at startup, owns its own input state, and signals navigation
/// and API calls through the effects it returns.
pub trait Screen {
    /// Restores input fields and cursors to their initial condition.
    /// Invoked by the registry on every transition.
    fn reset(&mut self);

    /// Key hints shown in the footer while this screen is visible.
    fn hints(&self) -> &'static str;

    fn handle_key(&mut self, key: KeyEvent, session: &mut SessionContext) -> Vec<Effect>;

    /// Completion of an API call this screen issued earlier.
    fn on_api(&mut self, outcome: ApiOutcome, session: &mut SessionContext) -> Vec<Effect> {
        let _ = (outcome, session);
        Vec::new()
    }

    /// Event-loop tick; screens drain their keyboard subscriptions here.
    fn on_tick(&mut self) {}

    fn render(&self, frame: &mut Frame, area: Rect, session: &SessionContext);
}

impl crate::registry::ResetView for Box<dyn Screen> {
    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Bordered paragraph used by every screen body.
pub(crate) fn render_panel(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Menu lines with a selection marker on the cursor row.
pub(crate) fn menu_lines(items: &[&'static str], cursor: usize) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if index == cursor {
                Line::from(Span::styled(
                    format!("  ▸ {}", item),
                    Style::default()
                        .fg(MENU_SELECTED)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("    {}", item),
                    Style::default().fg(TITLE_TEXT),
                ))
            }
        })
        .collect()
}

pub(crate) fn prompt_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(PROMPT_TEXT)))
}

/// Moves a menu cursor, wrapping at the ends.
pub(crate) fn step_cursor(cursor: usize, len: usize, up: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if up {
        if cursor == 0 {
            len - 1
        } else {
            cursor - 1
        }
    } else {
        (cursor + 1) % len
    }
}
