use std::{ops::RangeInclusive, path::PathBuf};

/// Radius of the depth-0 sphere, in scene units.
pub const BASE_RADIUS: u32 = 6;
pub const MIN_DEPTH: usize = 1;
pub const MAX_DEPTH: usize = 10;
pub const FILE_STEM: &str = "recursiveSpheres";
pub const TEXTURE_FILE: &str = "/course/cs123/data/image/marsTexture.png";

/// Fixed parameters of a generation batch.
///
/// The binary only ever runs with [`GeneratorConfig::default`]; the fields are
/// public so tests can redirect output into a scratch directory.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_radius: u32,
    /// Every max depth in this range produces one scene file.
    pub depths: RangeInclusive<usize>,
    pub output_dir: PathBuf,
    pub file_stem: String,
    /// Referenced by path inside each `texture` element; never opened.
    pub texture_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_radius: BASE_RADIUS,
            depths: MIN_DEPTH..=MAX_DEPTH,
            output_dir: PathBuf::from("."),
            file_stem: FILE_STEM.to_owned(),
            texture_file: TEXTURE_FILE.to_owned(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// `<output_dir>/<file_stem><depth>.xml`
    pub fn output_path(&self, max_depth: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.xml", self.file_stem, max_depth))
    }
}
