//! Font handles for the preview panes.

use iced::Font;
use std::collections::HashMap;

/// Face the font name fields are drawn in, whatever name they hold.
pub const SELECTOR_FONT: Font = Font::with_name("Segoe UI");

/// Point size of the font name fields.
pub const SELECTOR_POINT_SIZE: f32 = 11.0;

/// Convert typographic points to logical pixels at 96 DPI.
pub fn points_to_pixels(points: f32) -> f32 {
    points * 96.0 / 72.0
}

/// Maps family names typed by the user to toolkit font handles.
///
/// iced only accepts `&'static str` family names, so each distinct name is
/// leaked once and reused on every later lookup. Since the selectors send a
/// name per keystroke, every prefix typed is kept too: memory grows with the
/// number of distinct names seen in a session and is never returned.
#[derive(Debug, Default)]
pub struct FontCache {
    families: HashMap<String, &'static str>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for `family`. Unknown names are not rejected; the renderer
    /// falls back to its default face.
    pub fn font(&mut self, family: &str) -> Font {
        if let Some(&name) = self.families.get(family) {
            return Font::with_name(name);
        }

        let name: &'static str = Box::leak(family.to_owned().into_boxed_str());
        self.families.insert(family.to_owned(), name);
        log::debug!("Registered font family '{}'", family);
        Font::with_name(name)
    }

    /// Number of distinct families seen so far.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.families.len()
    }
}
