use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Creating, writing or flushing a scene file failed. The batch stops here.
    #[error("failed to write scene file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
