// IconSmith - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "IconSmith";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Fixed asset layout
// =============================================================================

/// Default vector icon source, relative to the repository root.
pub const DEFAULT_SOURCE_PATH: &str = "src-tauri/icons/icon.svg";

/// Default output directory for every generated asset.
pub const DEFAULT_ICONS_DIR: &str = "src-tauri/icons";

/// Flat raster outputs as (pixel size, file name) pairs, in emission order.
///
/// The @2x entries follow the Tauri icon naming convention: the file name
/// states the logical size, the pixel size is doubled.
pub const RASTER_TARGETS: &[(u32, &str)] = &[
    (32, "32x32.png"),
    (128, "128x128.png"),
    (256, "128x128@2x.png"),
    (512, "icon.png"),
    (1024, "icon@2x.png"),
];

/// Frame sizes embedded in the Windows ICO container, in embed order.
/// The first frame is what size-naive consumers see as the default image.
pub const ICO_FRAME_SIZES: &[u32] = &[16, 32, 48, 256];

/// File name of the ICO container inside the output directory.
pub const ICO_FILE_NAME: &str = "icon.ico";

/// Linux icon-theme sizes (hicolor theme, .desktop launchers), opt-in.
///
/// Emitted as `<N>x<N>.png`. Sizes whose file name was already produced by a
/// flat raster target in the same run are skipped rather than re-rendered.
pub const LINUX_ICON_SIZES: &[u32] = &[16, 24, 48, 64, 96, 128, 256, 512];

/// Configuration override file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "iconsmith.toml";

// =============================================================================
// Raster limits
// =============================================================================

/// Maximum size of the source SVG file in bytes.
pub const MAX_SOURCE_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

/// Maximum accepted raster dimension (pixels per side).
///
/// A 16384x16384 RGBA pixmap is already 1 GiB of pixel data; anything larger
/// is a configuration mistake, not an icon.
pub const MAX_RASTER_SIZE: u32 = 16_384;

/// Minimum accepted raster dimension (pixels per side).
pub const MIN_RASTER_SIZE: u32 = 1;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// User-facing notes
// =============================================================================

/// Printed after a successful run. The macOS container format is produced by
/// an external tool, never by this pipeline.
pub const ICNS_NOTE: &str = "Note: icon.icns (macOS) is not generated by this tool. \
     Use iconutil on macOS, or png2icons against the 512px icon.png.";
