//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use template::{FormSide, Style};

/// Name of the optional configuration file in the working directory
pub const CONFIG_FILE: &str = "kouketsu.json";

/// Where every input and output of the tool lives, plus the drawing style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Base form image
    pub image: PathBuf,
    /// Rendered form image
    pub output: PathBuf,
    /// TrueType font or collection used for text
    pub font: PathBuf,
    /// Face index inside a font collection
    pub font_index: u32,
    /// Text positions of the left half
    pub positions_left: PathBuf,
    /// Mark positions of the left half
    pub circles_left: PathBuf,
    /// Text positions of the right half
    pub positions_right: PathBuf,
    /// Mark positions of the right half
    pub circles_right: PathBuf,
    /// Subject reference table
    pub subjects: PathBuf,
    /// Student reference table
    pub students: PathBuf,
    /// Font size, colors and mark geometry
    pub style: Style,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::from("学外公欠申請書.jpg"),
            output: PathBuf::from("学外公欠申請書_作成済.jpg"),
            font: default_font_path(),
            font_index: 0,
            positions_left: PathBuf::from("positions_left.json"),
            circles_left: PathBuf::from("circles_left.json"),
            positions_right: PathBuf::from("positions_right.json"),
            circles_right: PathBuf::from("circles_right.json"),
            subjects: PathBuf::from("subject.json"),
            students: PathBuf::from("student_data.json"),
            style: Style::default(),
            base_dir: PathBuf::new(),
        }
    }
}

/// A font with Japanese glyphs that ships with the platform
fn default_font_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Windows\Fonts\meiryo.ttc")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc")
    } else {
        PathBuf::from("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc")
    }
}

impl AppConfig {
    /// Load configuration from `kouketsu.json` in the working directory
    ///
    /// A missing file means defaults. A broken file is logged and also
    /// falls back to defaults so the form stays usable.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring configuration file: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    ///
    /// Relative paths inside the file resolve against the file's directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Resolve a configured path against the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn image_path(&self) -> PathBuf {
        self.resolve(&self.image)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }

    pub fn font_path(&self) -> PathBuf {
        self.resolve(&self.font)
    }

    pub fn students_path(&self) -> PathBuf {
        self.resolve(&self.students)
    }

    pub fn subjects_path(&self) -> PathBuf {
        self.resolve(&self.subjects)
    }

    /// Text-position and mark-position files for one half of the form
    pub fn layout_paths(&self, side: FormSide) -> (PathBuf, PathBuf) {
        match side {
            FormSide::Left => (
                self.resolve(&self.positions_left),
                self.resolve(&self.circles_left),
            ),
            FormSide::Right => (
                self.resolve(&self.positions_right),
                self.resolve(&self.circles_right),
            ),
        }
    }

    /// Configuration with every relative path resolved against `dir`
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }
}
