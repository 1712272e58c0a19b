//! Application state and lifecycle for the font comparison window.

use crate::fonts::FontCache;
use crate::message::Message;
use crate::update;
use crate::view;

use fontcompare_core::{ComparisonState, Configuration, Side};
use iced::widget::text_editor;
use iced::{executor, window, Application, Command, Element, Font, Settings, Theme};

/// Fixed window title.
pub const WINDOW_TITLE: &str = "Simple Font Comparison Tool";

/// Main application state.
pub struct FontCompareApp {
    pub state: ComparisonState,
    pub source: text_editor::Content,
    pub fonts: FontCache,
    pub preview_fonts: [Font; 2],
}

impl Application for FontCompareApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = executor::Default;
    type Flags = Configuration;

    fn new(config: Configuration) -> (Self, Command<Message>) {
        (Self::from_config(&config), Command::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        update::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::render(self)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

impl FontCompareApp {
    /// Build the initial state from a validated configuration.
    pub fn from_config(config: &Configuration) -> Self {
        let state = ComparisonState::from_config(config);
        let source = text_editor::Content::with_text(state.sample_text());

        let mut app = Self {
            state,
            source,
            fonts: FontCache::new(),
            preview_fonts: [Font::DEFAULT; 2],
        };
        app.sync_preview_fonts();
        app
    }

    /// Point each pane's font handle at its preview's current family.
    pub fn sync_preview_fonts(&mut self) {
        for side in Side::ALL {
            let family = &self.state.preview(side).font().family;
            self.preview_fonts[side.index()] = self.fonts.font(family);
        }
    }

    /// Fixed-size, non-resizable main window.
    pub fn window_settings() -> window::Settings {
        window::Settings {
            size: iced::Size::new(1000.0, 500.0),
            resizable: false,
            ..Default::default()
        }
    }
}

/// Run the application until the window is closed.
pub fn run(config: Configuration) -> anyhow::Result<()> {
    log::info!(
        "Opening comparison window: '{}' vs '{}'",
        config.default_font1,
        config.default_font2
    );

    let settings = Settings {
        window: FontCompareApp::window_settings(),
        ..Settings::with_flags(config)
    };

    FontCompareApp::run(settings)
        .map_err(|e| anyhow::anyhow!("font comparison window failed: {}", e))
}
