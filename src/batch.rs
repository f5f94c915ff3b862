use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{builder::build_scene, config::GeneratorConfig, error::GenerateError};

/// What one generation pass wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthOutput {
    pub max_depth: usize,
    pub path: PathBuf,
    pub bytes: usize,
    pub definitions: usize,
    pub instances: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outputs: Vec<DepthOutput>,
}

impl BatchReport {
    pub fn total_bytes(&self) -> usize {
        self.outputs.iter().map(|o| o.bytes).sum()
    }
}

/// Builds, serializes and writes the scene for a single max depth, replacing
/// any existing file of the same name.
pub fn generate_depth(config: &GeneratorConfig, max_depth: usize) -> Result<DepthOutput, GenerateError> {
    let document = build_scene(config, max_depth);
    let xml = document.to_string();
    let path = config.output_path(max_depth);

    write_document(&path, &xml)?;

    let output = DepthOutput {
        max_depth,
        bytes: xml.len(),
        definitions: document.tree.len(),
        instances: document.tree.instance_count(),
        path,
    };
    tracing::info!(
        depth = output.max_depth,
        path = %output.path.display(),
        bytes = output.bytes,
        "wrote scene"
    );
    Ok(output)
}

/// Runs every depth in `config.depths` in order. The first failure ends the
/// batch; files already written are left in place.
pub fn run_batch(config: &GeneratorConfig) -> Result<BatchReport, GenerateError> {
    let mut report = BatchReport::default();
    for max_depth in config.depths.clone() {
        report.outputs.push(generate_depth(config, max_depth)?);
    }
    Ok(report)
}

fn write_document(path: &Path, xml: &str) -> Result<(), GenerateError> {
    let write_error = |source: io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(xml.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)
}
