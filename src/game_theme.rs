use clap::ValueEnum;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GameTheme {
    #[default]
    Monokai,
    Solarized,
    Dracula,
    GruvboxDark,
    Nord,
    OneDark,
    HighContrast,
}

pub struct ThemeColors {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub accent: Color,
    pub human_paddle: Color,
    pub cpu_paddle: Color,
    pub ball: Color,
}

const ALL_THEMES: [GameTheme; 7] = [
    GameTheme::Monokai,
    GameTheme::Solarized,
    GameTheme::Dracula,
    GameTheme::GruvboxDark,
    GameTheme::Nord,
    GameTheme::OneDark,
    GameTheme::HighContrast,
];

impl GameTheme {
    pub fn next(self) -> Self {
        let idx = self as usize;
        ALL_THEMES[(idx + 1) % ALL_THEMES.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameTheme::Monokai => "Monokai",
            GameTheme::Solarized => "Solarized",
            GameTheme::Dracula => "Dracula",
            GameTheme::GruvboxDark => "Gruvbox Dark",
            GameTheme::Nord => "Nord",
            GameTheme::OneDark => "One Dark",
            GameTheme::HighContrast => "High Contrast",
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            GameTheme::Monokai => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(249, 38, 114),       // pink
                text: Color::Rgb(248, 248, 242),
                accent: Color::Rgb(166, 226, 46),       // green
                human_paddle: Color::Rgb(102, 217, 239), // cyan
                cpu_paddle: Color::Rgb(230, 219, 116),  // yellow
                ball: Color::Rgb(255, 95, 135),
            },
            GameTheme::Solarized => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(38, 139, 210),
                text: Color::Rgb(101, 123, 131),
                accent: Color::Rgb(42, 161, 152),
                human_paddle: Color::Rgb(133, 153, 0),
                cpu_paddle: Color::Rgb(181, 137, 0),
                ball: Color::Rgb(220, 50, 47),
            },
            GameTheme::Dracula => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(255, 121, 198),
                text: Color::Rgb(248, 248, 242),
                accent: Color::Rgb(189, 147, 249),
                human_paddle: Color::Rgb(80, 250, 123),
                cpu_paddle: Color::Rgb(241, 250, 140),
                ball: Color::Rgb(255, 85, 85),
            },
            GameTheme::GruvboxDark => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(250, 189, 47),
                text: Color::Rgb(235, 219, 178),
                accent: Color::Rgb(184, 187, 38),
                human_paddle: Color::Rgb(131, 165, 152),
                cpu_paddle: Color::Rgb(254, 128, 25),
                ball: Color::Rgb(251, 73, 52),
            },
            GameTheme::Nord => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(136, 192, 208),
                text: Color::Rgb(216, 222, 233),
                accent: Color::Rgb(143, 188, 187),
                human_paddle: Color::Rgb(94, 129, 172),
                cpu_paddle: Color::Rgb(235, 203, 139),
                ball: Color::Rgb(191, 97, 106),
            },
            GameTheme::OneDark => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(198, 120, 221),
                text: Color::Rgb(171, 178, 191),
                accent: Color::Rgb(97, 175, 239),
                human_paddle: Color::Rgb(152, 195, 121),
                cpu_paddle: Color::Rgb(229, 192, 123),
                ball: Color::Rgb(224, 108, 117),
            },
            GameTheme::HighContrast => ThemeColors {
                background: Color::Black,
                border: Color::White,
                text: Color::White,
                accent: Color::Yellow,
                human_paddle: Color::Rgb(0, 255, 255),
                cpu_paddle: Color::Rgb(0, 255, 0),
                ball: Color::Rgb(255, 0, 0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_visits_every_theme_once() {
        let mut theme = GameTheme::default();
        let mut seen = Vec::new();
        for _ in 0..ALL_THEMES.len() {
            seen.push(theme);
            theme = theme.next();
        }
        assert_eq!(theme, GameTheme::Monokai);
        assert_eq!(seen, ALL_THEMES.to_vec());
    }
}
