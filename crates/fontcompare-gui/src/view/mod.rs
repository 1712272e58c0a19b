//! View rendering for the font comparison window.

mod main_view;

use crate::app::FontCompareApp;
use crate::message::Message;
use iced::Element;

/// Build the widget tree for the single comparison window.
pub fn render(app: &FontCompareApp) -> Element<'_, Message> {
    main_view::render(app)
}
