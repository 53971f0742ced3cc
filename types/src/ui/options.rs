/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    /// Show the Unicode Braille glyph next to the active token.
    pub show_unicode: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            show_unicode: true,
        }
    }
}
