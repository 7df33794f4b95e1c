//! Keyboard Input Handler
//!
//! Dispatches key events to App actions. The add prompt is modal: while
//! it is open it consumes every keystroke before the global bindings are
//! considered.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Prompt editing comes first
    if app.model.ui.has_prompt() {
        match key.code {
            KeyCode::Esc => {
                app.model.ui.add_prompt = None;
            }
            KeyCode::Enter => {
                let input = app
                    .model
                    .ui
                    .add_prompt
                    .take()
                    .map(|p| p.input)
                    .unwrap_or_default();
                app.add_from_input(&input);
            }
            KeyCode::Backspace => {
                if let Some(prompt) = app.model.ui.add_prompt.as_mut() {
                    prompt.input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(prompt) = app.model.ui.add_prompt.as_mut() {
                    prompt.input.push(c);
                }
            }
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Esc => {
            // Esc cancels an active grab; otherwise it is ignored so a
            // stray press never quits the application.
            app.model.ui.grabbed = None;
        }

        KeyCode::Up | KeyCode::Char('k') => {
            app.model.select_prev();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.model.select_next();
        }

        KeyCode::Char('a') => {
            app.model.ui.add_prompt = Some(Default::default());
        }

        KeyCode::Char('d') | KeyCode::Delete => {
            app.remove_selected();
        }

        // Grab / drop reordering: first press picks the entry up, the
        // second swaps it with the entry under the cursor. Dropping an
        // entry onto itself just puts it back down.
        KeyCode::Char(' ') | KeyCode::Enter => {
            let Some(selected) = app.model.selected_entry().map(|e| e.id) else {
                return Ok(());
            };
            match app.model.ui.grabbed {
                None => {
                    app.model.ui.grabbed = Some(selected);
                }
                Some(grabbed) => {
                    if grabbed != selected {
                        app.model.files.swap(grabbed, selected);
                    }
                    app.model.ui.grabbed = None;
                }
            }
        }

        // Direct neighbor swaps
        KeyCode::Char('K') => {
            app.swap_with_neighbor(-1);
        }
        KeyCode::Char('J') => {
            app.swap_with_neighbor(1);
        }

        KeyCode::Char('m') => {
            app.start_merge();
        }

        KeyCode::Char('n') => {
            app.toggle_night_mode();
        }

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.should_quit = true;
        }

        _ => {}
    }

    Ok(())
}
