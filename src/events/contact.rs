//! Key handling for the contact form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::api;
use crate::state::{AppState, ContactField, ContactForm};

/// Mutable access to the text of a given form field.
fn field_mut(form: &mut ContactForm, field: ContactField) -> &mut String {
    match field {
        ContactField::Name => &mut form.name,
        ContactField::Email => &mut form.email,
        ContactField::Phone => &mut form.phone,
        ContactField::Company => &mut form.company,
        ContactField::Subject => &mut form.subject,
        ContactField::Message => &mut form.message,
    }
}

/// What: Handle a key press while the contact view has focus.
///
/// Inputs:
/// - `key`: Pressed key
/// - `app`: Mutable application state
/// - `contact_req_tx`: Channel into the contact worker
///
/// Output:
/// - `true` to exit the application (only `Ctrl+C` here; printable keys are
///   form input).
///
/// Details:
/// - `Tab`/`Down` and `BackTab`/`Up` traverse fields; `Enter` advances too,
///   except in the message body where it inserts a newline.
/// - `Ctrl+S` validates and submits; validation failures set the inline
///   status banner and never touch the network.
pub fn handle_contact_key(
    key: KeyEvent,
    app: &mut AppState,
    contact_req_tx: &mpsc::UnboundedSender<ContactForm>,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => submit(app, contact_req_tx),
        KeyCode::Esc => app.contact_status = None,
        KeyCode::Tab | KeyCode::Down => app.contact_focus = app.contact_focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.contact_focus = app.contact_focus.prev(),
        KeyCode::Enter => {
            if app.contact_focus == ContactField::Message {
                field_mut(&mut app.contact, ContactField::Message).push('\n');
            } else {
                app.contact_focus = app.contact_focus.next();
            }
        }
        KeyCode::Backspace => {
            field_mut(&mut app.contact, app.contact_focus).pop();
            clear_stale_status(app);
        }
        KeyCode::Char(c) if !ctrl => {
            field_mut(&mut app.contact, app.contact_focus).push(c);
            clear_stale_status(app);
        }
        _ => {}
    }
    false
}

/// Editing a field invalidates whatever banner the last attempt produced.
fn clear_stale_status(app: &mut AppState) {
    app.contact_status = None;
}

/// What: Validate and submit the form.
///
/// Inputs:
/// - `app`: Application state owning the form
/// - `contact_req_tx`: Channel into the contact worker
///
/// Details:
/// - Re-entrant submits while a send is in flight are ignored.
/// - The client-side gate runs first; its message lands in the status banner
///   and blocks the network call entirely.
fn submit(app: &mut AppState, contact_req_tx: &mpsc::UnboundedSender<ContactForm>) {
    if app.contact_sending {
        return;
    }
    if let Some(msg) = api::contact::validate(&app.contact) {
        app.contact_status = Some(Err(msg.to_owned()));
        return;
    }
    app.contact_sending = true;
    app.contact_status = None;
    let _ = contact_req_tx.send(app.contact.clone());
}
