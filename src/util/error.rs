// IconSmith - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant carries the path or size
// context needed to diagnose a failed run from the terminal output alone.

use resvg::usvg;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all IconSmith operations.
/// Errors are categorised by the pipeline stage that produced them.
#[derive(Debug)]
pub enum IconSmithError {
    /// Vector source loading or parsing failed.
    Source(SourceError),

    /// Rasterization or PNG encoding failed.
    Render(RenderError),

    /// ICO container encoding failed.
    Container(ContainerError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Manifest serialisation failed.
    Json { source: serde_json::Error },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for IconSmithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Source error: {e}"),
            Self::Render(e) => write!(f, "Render error: {e}"),
            Self::Container(e) => write!(f, "Container error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Json { source } => write!(f, "Manifest serialisation error: {source}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IconSmithError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Container(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Json { source } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors related to loading and parsing the vector source.
#[derive(Debug)]
pub enum SourceError {
    /// The configured source path does not reference an existing file.
    /// Hard precondition: detected before any output is written.
    NotFound { path: PathBuf },

    /// Source file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// I/O error reading the source file.
    Read { path: PathBuf, source: io::Error },

    /// The SVG document could not be parsed.
    Parse { path: PathBuf, source: usvg::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Source icon '{}' does not exist", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Source icon '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Read { path, source } => {
                write!(f, "Cannot read source icon '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "Cannot parse SVG '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SourceError> for IconSmithError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors related to rasterization and PNG encoding.
#[derive(Debug)]
pub enum RenderError {
    /// The pixmap for the requested size could not be allocated
    /// (zero or overflowing dimensions).
    PixmapAlloc { size: u32 },

    /// PNG encoding of a rendered pixmap failed.
    PngEncode { size: u32, reason: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixmapAlloc { size } => {
                write!(f, "Cannot allocate a {size}x{size} pixmap")
            }
            Self::PngEncode { size, reason } => {
                write!(f, "PNG encoding failed at {size}x{size}: {reason}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for IconSmithError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ---------------------------------------------------------------------------
// Container errors
// ---------------------------------------------------------------------------

/// Errors related to the multi-size ICO container.
#[derive(Debug)]
pub enum ContainerError {
    /// A frame could not be encoded into the container directory.
    EncodeFrame { size: u32, source: io::Error },

    /// I/O error creating or writing the container file.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EncodeFrame { size, source } => {
                write!(f, "Cannot encode {size}x{size} ICO frame: {source}")
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write ICO '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EncodeFrame { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<ContainerError> for IconSmithError {
    fn from(e: ContainerError) -> Self {
        Self::Container(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// Two raster targets resolve to the same output file name.
    DuplicateFileName { name: String },

    /// The ICO frame size list is empty.
    EmptyFrameList,

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::DuplicateFileName { name } => {
                write!(f, "Duplicate output file name '{name}'")
            }
            Self::EmptyFrameList => {
                write!(f, "ICO frame size list is empty; at least one frame is required")
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for IconSmithError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for IconSmith results.
pub type Result<T> = std::result::Result<T, IconSmithError>;
