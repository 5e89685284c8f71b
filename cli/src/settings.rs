use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use sweeper_core::{MineLayout, RevealMode};

/// Settings read from the optional TOML config file.
///
/// ```toml
/// board = "boards/corridor.txt"
/// reveal_mode = "single"
/// prompt = "? "
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Layout pattern file; relative paths are resolved against the config file. The built-in board is used
    /// when unset.
    pub board: Option<PathBuf>,
    pub reveal_mode: RevealMode,
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: None,
            reveal_mode: RevealMode::FloodFill,
            prompt: "> ".to_owned(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read config {}", path.display()))?;
        let mut settings = Self::from_toml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;

        settings.board = settings.board.map(|board| match path.parent() {
            Some(config_dir) if board.is_relative() => config_dir.join(board),
            _ => board,
        });

        log::debug!("settings loaded from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load_layout(&self) -> anyhow::Result<MineLayout> {
        let Some(path) = &self.board else {
            log::debug!("using the reference board");
            return Ok(MineLayout::reference());
        };

        let pattern = fs::read_to_string(path)
            .with_context(|| format!("could not read board {}", path.display()))?;
        let layout: MineLayout = pattern
            .parse()
            .with_context(|| format!("invalid board {}", path.display()))?;
        log::debug!(
            "board {} loaded: {:?} with {} mines",
            path.display(),
            layout.size(),
            layout.mine_count()
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn reads_all_fields() {
        let settings = Settings::from_toml(
            r#"
            board = "boards/small.txt"
            reveal_mode = "single"
            prompt = "? "
            "#,
        )
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                board: Some(PathBuf::from("boards/small.txt")),
                reveal_mode: RevealMode::Single,
                prompt: "? ".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_unknown_fields_and_modes() {
        assert!(Settings::from_toml("tile_size = 32").is_err());
        assert!(Settings::from_toml(r#"reveal_mode = "chord""#).is_err());
    }

    #[test]
    fn default_layout_is_reference_board() {
        assert_eq!(
            Settings::default().load_layout().unwrap(),
            MineLayout::reference()
        );
    }

    #[test]
    fn loads_board_relative_to_config() {
        let dir = std::env::temp_dir().join(format!("sweeper-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("small.txt"), "xo\noo\n").unwrap();
        fs::write(dir.join("sweeper.toml"), "board = \"small.txt\"\n").unwrap();

        let settings = Settings::load(&dir.join("sweeper.toml")).unwrap();
        let layout = settings.load_layout().unwrap();

        assert_eq!(settings.board, Some(dir.join("small.txt")));
        assert_eq!(layout.size(), (2, 2));
        assert_eq!(layout.mine_count(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_board_file_is_an_error() {
        let settings = Settings {
            board: Some(PathBuf::from("/nonexistent/sweeper/board.txt")),
            ..Settings::default()
        };

        let err = settings.load_layout().unwrap_err();
        assert!(err.to_string().contains("could not read board"));
    }
}
