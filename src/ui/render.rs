use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{FIELD_LABEL, GLOBAL_BORDER, TITLE_TEXT};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, status, footer) = layout_regions(frame.area());

    let mut title = vec![Span::styled(
        "Russian Flashcards / карточки на русском",
        Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(user) = &app.session().user {
        title.push(Span::raw("  —  "));
        title.push(Span::styled(
            user.email.clone(),
            Style::default().fg(FIELD_LABEL),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(title)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        header,
    );

    if let Some(screen) = app.registry().active_view() {
        screen.render(frame, body, app.session());
    }

    frame.render_widget(app.status().widget(), status);

    frame.render_widget(
        Paragraph::new(app.hints()).style(Style::default().add_modifier(Modifier::DIM)),
        footer,
    );
}
