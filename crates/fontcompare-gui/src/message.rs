//! Message types for the font comparison window.

use fontcompare_core::Side;
use iced::widget::text_editor;

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// Any action in the source text editor, keystrokes and cursor moves alike
    SourceEdited(text_editor::Action),

    /// New content of a font name field, sent on every keystroke
    FontNameChanged(Side, String),
}
