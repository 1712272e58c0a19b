//! Main window view for the font comparison tool.

use crate::app::FontCompareApp;
use crate::fonts;
use crate::message::Message;
use crate::styles::PreviewFrameStyle;

use fontcompare_core::Side;
use iced::widget::{column, container, row, scrollable, text, text_editor, text_input};
use iced::{Alignment, Element, Length};

const SOURCE_HEIGHT: f32 = 150.0;
const SELECTOR_WIDTH: f32 = 240.0;
const PREVIEW_WIDTH: f32 = 480.0;
const PREVIEW_HEIGHT: f32 = 250.0;

/// Render the main window view.
pub fn render(app: &FontCompareApp) -> Element<'_, Message> {
    let source_field = text_editor(&app.source)
        .on_action(Message::SourceEdited)
        .height(Length::Fixed(SOURCE_HEIGHT))
        .padding(8);

    let [left, right] = Side::ALL.map(|side| comparison_column(app, side));

    let content = column![
        container(source_field).padding([10, 0]).width(Length::Fill),
        row![left, right].spacing(10).width(Length::Fill),
    ]
    .padding(10);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One comparison column: font name field above its preview.
fn comparison_column(app: &FontCompareApp, side: Side) -> Element<'_, Message> {
    // Built preview-first; the selector still sits on top.
    let preview = preview_pane(app, side);
    let selector = font_selector(app, side);

    column![selector, preview]
        .spacing(10)
        .align_items(Alignment::Center)
        .width(Length::FillPortion(1))
        .into()
}

/// Font name field, always drawn in the fixed selector face.
fn font_selector(app: &FontCompareApp, side: Side) -> Element<'_, Message> {
    text_input("Font family", app.state.font_name(side))
        .on_input(move |name| Message::FontNameChanged(side, name))
        .font(fonts::SELECTOR_FONT)
        .size(fonts::points_to_pixels(fonts::SELECTOR_POINT_SIZE))
        .width(Length::Fixed(SELECTOR_WIDTH))
        .into()
}

/// Read-only preview pane; overflow scrolls inside the fixed frame.
fn preview_pane(app: &FontCompareApp, side: Side) -> Element<'_, Message> {
    let preview = app.state.preview(side);

    let body = text(preview.text())
        .font(app.preview_fonts[side.index()])
        .size(fonts::points_to_pixels(preview.font().size));

    container(scrollable(container(body).padding(6).width(Length::Fill)))
        .width(Length::Fixed(PREVIEW_WIDTH))
        .height(Length::Fixed(PREVIEW_HEIGHT))
        .style(iced::theme::Container::Custom(Box::new(PreviewFrameStyle)))
        .into()
}
