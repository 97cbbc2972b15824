// IconSmith - core/config.rs
//
// Pipeline configuration. The fixed asset tables from util::constants are
// the defaults; an optional iconsmith.toml in the working directory (or a
// --config path) may override them. All values are validated before the
// pipeline touches the filesystem.

use crate::util::constants;
use crate::util::error::ConfigError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One flat raster output: render the source at `size` x `size` pixels and
/// write it as `file_name` inside the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RasterTarget {
    /// Output width and height in pixels (outputs are always square).
    pub size: u32,

    /// Output file name, joined onto the output directory.
    pub file_name: String,
}

/// Full configuration for one pipeline run.
///
/// `Default` yields exactly the documented fixed layout, so a plain
/// invocation reproduces the canonical asset set.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the vector icon source.
    pub source: PathBuf,

    /// Directory every generated asset is written into (created if absent).
    pub out_dir: PathBuf,

    /// Flat raster outputs, in emission order.
    pub raster_targets: Vec<RasterTarget>,

    /// ICO container file name inside `out_dir`.
    pub ico_file_name: String,

    /// ICO frame sizes, in embed order. The first frame is the default image
    /// for size-naive consumers.
    pub ico_frame_sizes: Vec<u32>,

    /// Also emit the Linux icon-theme PNG set.
    pub linux_icons: bool,

    /// Linux icon-theme sizes, emitted as `<N>x<N>.png`.
    pub linux_sizes: Vec<u32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(constants::DEFAULT_SOURCE_PATH),
            out_dir: PathBuf::from(constants::DEFAULT_ICONS_DIR),
            raster_targets: constants::RASTER_TARGETS
                .iter()
                .map(|&(size, file_name)| RasterTarget {
                    size,
                    file_name: file_name.to_string(),
                })
                .collect(),
            ico_file_name: constants::ICO_FILE_NAME.to_string(),
            ico_frame_sizes: constants::ICO_FRAME_SIZES.to_vec(),
            linux_icons: false,
            linux_sizes: constants::LINUX_ICON_SIZES.to_vec(),
        }
    }
}

/// On-disk override file (`iconsmith.toml`). Every field is optional;
/// absent fields keep their built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    #[serde(rename = "target")]
    targets: Option<Vec<RasterTarget>>,
    ico_file_name: Option<String>,
    ico_frame_sizes: Option<Vec<u32>>,
    linux_icons: Option<bool>,
    linux_sizes: Option<Vec<u32>>,
}

impl PipelineConfig {
    /// Load the configuration: built-in defaults, overlaid with the file at
    /// `path` when given, or with `iconsmith.toml` from the working directory
    /// when that exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let default = PathBuf::from(constants::CONFIG_FILE_NAME);
                default.is_file().then_some(default)
            }
        };

        if let Some(path) = file {
            let raw = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let overrides: ConfigFile =
                toml::from_str(&raw).map_err(|e| ConfigError::TomlParse {
                    path: path.clone(),
                    source: e,
                })?;
            config.apply(overrides);
            tracing::debug!(path = %path.display(), "Applied config overrides");
        }

        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(source) = file.source {
            self.source = source;
        }
        if let Some(out_dir) = file.out_dir {
            self.out_dir = out_dir;
        }
        if let Some(targets) = file.targets {
            self.raster_targets = targets;
        }
        if let Some(name) = file.ico_file_name {
            self.ico_file_name = name;
        }
        if let Some(sizes) = file.ico_frame_sizes {
            self.ico_frame_sizes = sizes;
        }
        if let Some(linux) = file.linux_icons {
            self.linux_icons = linux;
        }
        if let Some(sizes) = file.linux_sizes {
            self.linux_sizes = sizes;
        }
    }

    /// Validate every size and file name.
    ///
    /// Public so the binary can re-validate after applying CLI overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size_range = format!(
            "{}..={}",
            constants::MIN_RASTER_SIZE,
            constants::MAX_RASTER_SIZE
        );

        let mut names: HashSet<&str> = HashSet::new();
        for target in &self.raster_targets {
            check_size("target.size", target.size, &size_range)?;
            if target.file_name.is_empty() {
                return Err(ConfigError::ValueOutOfRange {
                    field: "target.file_name".to_string(),
                    value: String::new(),
                    expected: "a non-empty file name".to_string(),
                });
            }
            if !names.insert(&target.file_name) {
                return Err(ConfigError::DuplicateFileName {
                    name: target.file_name.clone(),
                });
            }
        }

        if self.ico_file_name.is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                field: "ico_file_name".to_string(),
                value: String::new(),
                expected: "a non-empty file name".to_string(),
            });
        }
        if names.contains(self.ico_file_name.as_str()) {
            return Err(ConfigError::DuplicateFileName {
                name: self.ico_file_name.clone(),
            });
        }

        if self.ico_frame_sizes.is_empty() {
            return Err(ConfigError::EmptyFrameList);
        }
        for &size in &self.ico_frame_sizes {
            check_size("ico_frame_sizes", size, &size_range)?;
        }
        for &size in &self.linux_sizes {
            check_size("linux_sizes", size, &size_range)?;
        }

        Ok(())
    }
}

fn check_size(field: &str, size: u32, expected: &str) -> Result<(), ConfigError> {
    if size < constants::MIN_RASTER_SIZE || size > constants::MAX_RASTER_SIZE {
        return Err(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: size.to_string(),
            expected: expected.to_string(),
        });
    }
    Ok(())
}
