use crate::api::PostApi;
use crate::store::PostStore;
use crate::ui::app::App;
use crate::ui::events::{forward_store_changes, AppEvent, EventHandler};
use crate::ui::editor::EditorIntent;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the terminal view until the user quits.
///
/// Must be called with a tokio runtime entered: store commands and the
/// snapshot forwarder are spawned onto it.
pub fn run<A: PostApi>(store: PostStore<A>, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let forwarder = forward_store_changes(store.subscribe(), events.sender());
    let mut app = App::new(store);
    app.start();
    tracing::info!("Post manager view started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.edit(EditorIntent::Paste(text)),
            Ok(AppEvent::StoreChanged(snapshot)) => app.on_store_changed(snapshot),
            // Redraw only; ratatui picks up the new size on draw.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    forwarder.abort();
    drop(guard);
    tracing::info!("Post manager view closed");
    Ok(())
}
