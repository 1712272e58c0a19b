//! Message handling for the font comparison window.

use crate::app::FontCompareApp;
use crate::message::Message;

use iced::widget::text_editor;
use iced::Command;

/// Handle an incoming message and return any resulting command.
pub fn handle_message(app: &mut FontCompareApp, message: Message) -> Command<Message> {
    match message {
        Message::SourceEdited(action) => {
            // Pointer actions only move the view; keyboard actions re-render.
            let from_pointer = matches!(
                action,
                text_editor::Action::Click(_)
                    | text_editor::Action::Drag(_)
                    | text_editor::Action::Scroll { .. }
            );
            app.source.perform(action);
            if !from_pointer {
                app.state.set_sample_text(app.source.text());
            }
        }

        Message::FontNameChanged(side, name) => {
            app.state.set_font_name(side, name);
        }
    }

    app.sync_preview_fonts();
    Command::none()
}
