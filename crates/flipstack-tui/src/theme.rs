use ratatui::style::Color;

/// Runtime theme with the card palette
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey2: Color,

    // Semantic colors
    pub accent: Color,
    pub warning: Color,

    /// One colour per page, cycled by page index
    pub cards: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
            cards: vec![
                Color::Rgb(0xea, 0x69, 0x62),
                Color::Rgb(0xe7, 0x8a, 0x4e),
                Color::Rgb(0xd8, 0xa6, 0x57),
                Color::Rgb(0xa9, 0xb6, 0x65),
                Color::Rgb(0x89, 0xb4, 0x82),
                Color::Rgb(0x7d, 0xae, 0xa3),
                Color::Rgb(0xd3, 0x86, 0x9b),
            ],
        }
    }
}

impl Theme {
    /// Card colour for page `index`
    pub fn card_color(&self, index: usize) -> Color {
        if self.cards.is_empty() {
            return self.accent;
        }
        self.cards[index % self.cards.len()]
    }

    /// Fade `color` toward the background by `alpha`
    pub fn faded(&self, color: Color, alpha: f64) -> Color {
        blend(color, self.bg0, alpha)
    }
}

/// Mix `fg` over `bg` with opacity `alpha`; non-RGB colours pass through
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * alpha).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        (fg, _) => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_blend_passes_named_colors() {
        assert_eq!(blend(Color::Red, Color::Rgb(0, 0, 0), 0.3), Color::Red);
    }

    #[test]
    fn test_card_colors_cycle() {
        let theme = Theme::default();
        let n = theme.cards.len();
        assert_eq!(theme.card_color(0), theme.card_color(n));
    }
}
