//! Custom styles for the font comparison window.

use iced::{widget::container, Theme};

/// Frame around a read-only preview pane.
pub struct PreviewFrameStyle;

impl container::StyleSheet for PreviewFrameStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(iced::Background::Color(iced::Color::from_rgb(
                0.97, 0.97, 0.97,
            ))),
            text_color: Some(iced::Color::from_rgb(0.1, 0.1, 0.1)),
            border: iced::border::Border {
                color: iced::Color::from_rgb(0.7, 0.7, 0.7),
                width: 1.0,
                radius: 2.0.into(),
            },
            shadow: iced::Shadow::default(),
        }
    }
}
