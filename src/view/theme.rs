use crate::model::markup::{JournalKind, Tag};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable color representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorDef {
    /// RGB color as [r, g, b]
    Rgb(u8, u8, u8),
    /// Named color
    Named(String),
}

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        match def {
            ColorDef::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDef::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "LightRed" => Color::LightRed,
                "LightGreen" => Color::LightGreen,
                "LightYellow" => Color::LightYellow,
                "LightBlue" => Color::LightBlue,
                "LightMagenta" => Color::LightMagenta,
                "LightCyan" => Color::LightCyan,
                "White" => Color::White,
                // Default/Reset uses the terminal's default color (preserves transparency)
                "Default" | "Reset" => Color::Reset,
                _ => Color::White,
            },
        }
    }
}

/// Serializable theme definition (matches JSON structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    bg: ColorDef,
    fg: ColorDef,
    muted: ColorDef,
    accent: ColorDef,
    secondary: ColorDef,
    success: ColorDef,
    error: ColorDef,
    warning: ColorDef,
    link: ColorDef,
    chip_bg: ColorDef,
    status_bar_fg: ColorDef,
    status_bar_bg: ColorDef,
    prompt_os_bg: ColorDef,
    prompt_dir_bg: ColorDef,
    prompt_git_bg: ColorDef,
    prompt_segment_fg: ColorDef,
    art: [ColorDef; 3],
}

/// Colors for every markup tag and UI chrome element
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name (e.g., "dark", "light")
    pub name: String,

    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    /// Headers, command names, the hero name
    pub accent: Color,
    /// Roles, arguments, labels
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub link: Color,
    pub chip_bg: Color,

    pub status_bar_fg: Color,
    pub status_bar_bg: Color,

    // Powerline prompt segments
    pub prompt_os_bg: Color,
    pub prompt_dir_bg: Color,
    pub prompt_git_bg: Color,
    pub prompt_segment_fg: Color,

    /// neofetch gradient bands, top to bottom
    pub art: [Color; 3],
}

impl From<ThemeFile> for Theme {
    fn from(file: ThemeFile) -> Self {
        let [a0, a1, a2] = file.art;
        Self {
            name: file.name,
            bg: file.bg.into(),
            fg: file.fg.into(),
            muted: file.muted.into(),
            accent: file.accent.into(),
            secondary: file.secondary.into(),
            success: file.success.into(),
            error: file.error.into(),
            warning: file.warning.into(),
            link: file.link.into(),
            chip_bg: file.chip_bg.into(),
            status_bar_fg: file.status_bar_fg.into(),
            status_bar_bg: file.status_bar_bg.into(),
            prompt_os_bg: file.prompt_os_bg.into(),
            prompt_dir_bg: file.prompt_dir_bg.into(),
            prompt_git_bg: file.prompt_git_bg.into(),
            prompt_segment_fg: file.prompt_segment_fg.into(),
            art: [a0.into(), a1.into(), a2.into()],
        }
    }
}

impl Theme {
    /// Load theme from a JSON file
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file: {}", e))?;
        let theme_file: ThemeFile = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse theme file: {}", e))?;
        Ok(theme_file.into())
    }

    /// Load a user theme from `{config_dir}/termfolio/themes/{name}.json`
    fn load_user_theme(name: &str) -> Option<Self> {
        let path = dirs::config_dir()?
            .join("termfolio")
            .join("themes")
            .join(format!("{}.json", name));
        if !path.exists() {
            return None;
        }
        match Self::from_file(&path) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("Ignoring theme {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Default dark theme (Tokyo Night inspired)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            bg: Color::Rgb(26, 27, 38),
            fg: Color::Rgb(192, 202, 245),
            muted: Color::Rgb(86, 95, 137),
            accent: Color::Rgb(122, 162, 247),
            secondary: Color::Rgb(187, 154, 247),
            success: Color::Rgb(158, 206, 106),
            error: Color::Rgb(247, 118, 142),
            warning: Color::Rgb(224, 175, 104),
            link: Color::Rgb(125, 207, 255),
            chip_bg: Color::Rgb(41, 46, 66),
            status_bar_fg: Color::Rgb(169, 177, 214),
            status_bar_bg: Color::Rgb(22, 22, 30),
            prompt_os_bg: Color::Rgb(192, 202, 245),
            prompt_dir_bg: Color::Rgb(122, 162, 247),
            prompt_git_bg: Color::Rgb(158, 206, 106),
            prompt_segment_fg: Color::Rgb(26, 27, 38),
            art: [
                Color::Rgb(125, 207, 255),
                Color::Rgb(122, 162, 247),
                Color::Rgb(187, 154, 247),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(56, 58, 66),
            muted: Color::Rgb(160, 161, 167),
            accent: Color::Rgb(64, 120, 242),
            secondary: Color::Rgb(166, 38, 164),
            success: Color::Rgb(80, 161, 79),
            error: Color::Rgb(228, 86, 73),
            warning: Color::Rgb(193, 132, 1),
            link: Color::Rgb(1, 132, 188),
            chip_bg: Color::Rgb(229, 229, 230),
            status_bar_fg: Color::Rgb(56, 58, 66),
            status_bar_bg: Color::Rgb(234, 234, 235),
            prompt_os_bg: Color::Rgb(56, 58, 66),
            prompt_dir_bg: Color::Rgb(64, 120, 242),
            prompt_git_bg: Color::Rgb(80, 161, 79),
            prompt_segment_fg: Color::Rgb(250, 250, 250),
            art: [
                Color::Rgb(1, 132, 188),
                Color::Rgb(64, 120, 242),
                Color::Rgb(166, 38, 164),
            ],
        }
    }

    /// Get a theme by name, defaults to dark if not found.
    /// A user theme file of the same name wins over the built-in one.
    pub fn from_name(name: &str) -> Self {
        let normalized_name = name.to_lowercase().replace('_', "-");

        if let Some(theme) = Self::load_user_theme(&normalized_name) {
            return theme;
        }

        match normalized_name.as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Style for a markup tag, on top of the base style.
    pub fn style(&self, tag: Tag) -> Style {
        let base = self.base();
        match tag {
            Tag::Plain | Tag::CommandDesc | Tag::Value => base,
            Tag::Muted => base.fg(self.muted),
            Tag::Header => base.fg(self.accent).add_modifier(Modifier::BOLD),
            Tag::Section | Tag::Label => base.fg(self.secondary).add_modifier(Modifier::BOLD),
            Tag::CommandName | Tag::Directory => base.fg(self.accent),
            Tag::CommandArg | Tag::Role => base.fg(self.secondary),
            Tag::Error => base.fg(self.error),
            Tag::Success | Tag::BootOk => base.fg(self.success).add_modifier(Modifier::BOLD),
            Tag::Chip => base.fg(self.link).bg(self.chip_bg),
            Tag::Name => base.fg(self.accent).add_modifier(Modifier::BOLD),
            Tag::Link => base.fg(self.link).add_modifier(Modifier::UNDERLINED),
            Tag::Art(band) => base.fg(self.art[usize::from(band.clamp(1, 3) - 1)]),
            Tag::JournalDate => base.fg(self.muted),
            Tag::Journal(kind) => base
                .fg(match kind {
                    JournalKind::Started => self.warning,
                    JournalKind::Built => self.success,
                    JournalKind::Learned => self.secondary,
                })
                .add_modifier(Modifier::BOLD),
            Tag::PromptOs => Style::default().fg(self.prompt_segment_fg).bg(self.prompt_os_bg),
            Tag::PromptDir => Style::default().fg(self.prompt_segment_fg).bg(self.prompt_dir_bg),
            Tag::PromptGit => Style::default().fg(self.prompt_segment_fg).bg(self.prompt_git_bg),
            Tag::PromptInput => base.add_modifier(Modifier::BOLD),
        }
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.status_bar_fg).bg(self.status_bar_bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("unknown").name, "dark");
    }

    #[test]
    fn test_default_reset_color() {
        let color: Color = ColorDef::Named("Default".to_string()).into();
        assert_eq!(color, Color::Reset);
        let color: Color = ColorDef::Named("Reset".to_string()).into();
        assert_eq!(color, Color::Reset);
    }

    #[test]
    fn test_theme_file_parses() {
        let json = r#"{
            "name": "mono",
            "bg": "Black", "fg": "White", "muted": "DarkGray", "accent": [1, 2, 3],
            "secondary": "Gray", "success": "Green", "error": "Red", "warning": "Yellow",
            "link": "Cyan", "chip_bg": "Default", "status_bar_fg": "White",
            "status_bar_bg": "Black", "prompt_os_bg": "White", "prompt_dir_bg": "Blue",
            "prompt_git_bg": "Green", "prompt_segment_fg": "Black",
            "art": ["Cyan", "Blue", "Magenta"]
        }"#;
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), json).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mono");
        assert_eq!(theme.accent, Color::Rgb(1, 2, 3));
        assert_eq!(theme.chip_bg, Color::Reset);
        assert_eq!(theme.art[2], Color::Magenta);
    }

    #[test]
    fn test_error_tag_uses_error_color() {
        let theme = Theme::dark();
        assert_eq!(theme.style(Tag::Error).fg, Some(theme.error));
        assert_eq!(theme.style(Tag::Art(1)).fg, Some(theme.art[0]));
        assert_eq!(theme.style(Tag::Art(7)).fg, Some(theme.art[2]));
    }
}
