// Current page theme, read from the `data-theme` attribute on <body>

use web_sys::Document;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub const ATTRIBUTE: &'static str = "data-theme";

    // Only an exact "dark" selects the dark palette, anything else
    // (including a missing attribute) falls back to light
    pub fn from_attribute(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Something that can answer "which theme is active right now".
///
/// Consulted once per spawn call, so a theme switch only affects particles
/// created after it.
pub trait ThemeSource {
    fn current_theme(&self) -> Theme;
}

pub struct FixedTheme(pub Theme);

impl ThemeSource for FixedTheme {
    fn current_theme(&self) -> Theme {
        self.0
    }
}

pub struct BodyTheme {
    document: Document,
}

impl BodyTheme {
    pub fn new(document: Document) -> Self {
        BodyTheme { document }
    }
}

impl ThemeSource for BodyTheme {
    fn current_theme(&self) -> Theme {
        let value = self
            .document
            .body()
            .and_then(|body| body.get_attribute(Theme::ATTRIBUTE));
        Theme::from_attribute(value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attribute() {
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_attribute(None), Theme::Light);
    }

    #[test]
    fn fixed_theme_is_constant() {
        let source = FixedTheme(Theme::Dark);
        assert_eq!(source.current_theme(), Theme::Dark);
        assert_eq!(source.current_theme(), Theme::Dark);
    }
}
