use std::sync::mpsc;
use std::time::Duration;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the interface until the user quits or the view registry reports
/// a broken transition. Navigation errors are not recoverable: a missing
/// view means the screen wiring is wrong, so the loop surfaces the error
/// instead of limping on.
pub fn run(base_url: String, tick_rate: Duration) -> anyhow::Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let events = EventHandler::new(tick_rate);
    let mut app = App::new(base_url, rt.handle().clone(), events.sender())?;
    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key)?,
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api { origin, outcome }) => app.on_api(origin, outcome)?,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
