//! Theme system for the terminal views.
//!
//! Two calm palettes with runtime switching: Dusk for dark terminals and
//! Dawn for light ones. Views never pick raw colors; they ask for a style
//! by [`Element`].

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeVariant {
    Dusk,
    Dawn,
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::Dusk
    }
}

#[derive(Debug, Clone)]
struct ColorPalette {
    background: Color,
    foreground: Color,
    /// Warm ember tone for the live breathing cue.
    ember: Color,
    info: Color,
    border: Color,
    selection: Color,
    warning: Color,
}

/// UI element types for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Text,
    Title,
    Border,
    Highlight,
    Accent,
    Info,
    Background,
    Inactive,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Dusk => ColorPalette {
                background: Color::Rgb(26, 26, 26),   // #1a1a1a
                foreground: Color::Rgb(229, 225, 218), // #e5e1da
                ember: Color::Rgb(251, 146, 60),      // #fb923c
                info: Color::Rgb(125, 181, 171),      // #7db5ab
                border: Color::Rgb(94, 100, 108),     // #5e646c
                selection: Color::Rgb(48, 46, 43),    // #302e2b
                warning: Color::Rgb(217, 164, 88),    // #d9a458
            },
            ThemeVariant::Dawn => ColorPalette {
                background: Color::Rgb(250, 246, 238), // #faf6ee
                foreground: Color::Rgb(74, 71, 66),    // #4a4742
                ember: Color::Rgb(201, 100, 32),       // #c96420
                info: Color::Rgb(58, 139, 126),        // #3a8b7e
                border: Color::Rgb(168, 162, 150),     // #a8a296
                selection: Color::Rgb(238, 231, 217),  // #eee7d9
                warning: Color::Rgb(174, 120, 40),     // #ae7828
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn toggle(&mut self) {
        let next = match self.variant {
            ThemeVariant::Dusk => ThemeVariant::Dawn,
            ThemeVariant::Dawn => ThemeVariant::Dusk,
        };
        *self = Self::new(next);
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Text | Element::Background => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Title => Style::default()
                .fg(self.colors.ember)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Highlight => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Accent => Style::default()
                .fg(self.colors.ember)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Info => Style::default()
                .fg(self.colors.info)
                .bg(self.colors.background),

            Element::Inactive => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Warning => Style::default()
                .fg(self.colors.warning)
                .bg(self.colors.background),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    pub fn accent_style(&self) -> Style {
        self.ratatui_style(Element::Accent)
    }

    pub fn warning_style(&self) -> Style {
        self.ratatui_style(Element::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_variants() {
        let mut theme = Theme::default();
        assert_eq!(theme.variant(), ThemeVariant::Dusk);
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::Dawn);
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::Dusk);
    }
}
