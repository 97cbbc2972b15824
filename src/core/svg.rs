// IconSmith - core/svg.rs
//
// Vector source loading. The raw SVG bytes are held for the whole run and
// parsed once per rasterization (see raster.rs), so every output size is
// rendered from the vector data directly rather than from a cached decode.

use crate::util::constants;
use crate::util::error::SourceError;
use resvg::usvg;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The vector icon document, loaded once per run and read-only thereafter.
pub struct VectorSource {
    path: PathBuf,
    data: Vec<u8>,

    /// System font database shared across parses so SVG text elements render.
    /// Loading system fonts takes long enough that doing it per parse would
    /// dominate the runtime without changing any output.
    fontdb: Arc<usvg::fontdb::Database>,
}

impl VectorSource {
    /// Load the source file, enforcing existence and the size limit up front.
    ///
    /// Existence is the pipeline's hard precondition: a `NotFound` here means
    /// zero outputs have been written.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        if !path.is_file() {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let size = fs::metadata(path)
            .map_err(|e| SourceError::Read {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();
        if size > constants::MAX_SOURCE_FILE_SIZE {
            return Err(SourceError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: constants::MAX_SOURCE_FILE_SIZE,
            });
        }

        let data = fs::read(path).map_err(|e| SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();

        tracing::debug!(
            path = %path.display(),
            bytes = data.len(),
            fonts = fontdb.len(),
            "Vector source loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            data,
            fontdb: Arc::new(fontdb),
        })
    }

    /// Parse the SVG into a fresh render tree.
    ///
    /// Deliberately not cached: each rasterization decodes the vector data
    /// anew, so no render state leaks between output sizes.
    pub fn parse(&self) -> Result<usvg::Tree, SourceError> {
        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.fontdb);

        usvg::Tree::from_data(&self.data, &opt).map_err(|e| SourceError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// The path the source was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
