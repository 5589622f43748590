//! Persisting elaborated modules.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use atomicwrites::{AtomicFile, OverwriteBehavior};
use weft_netlist::Chip;

use crate::emit::elaborate;
use crate::error::ElaborateError;

/// Where and how emitted modules are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Directory that receives `<chip>.<extension>`; created if missing.
    pub dir: PathBuf,
    /// File extension, without the leading dot.
    pub extension: String,
}

impl OutputOptions {
    /// Writes `.v` files into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: "v".to_string(),
        }
    }

    /// Replaces the file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The path the module of a chip called `chip_name` is written to.
    pub fn path_for(&self, chip_name: &str) -> PathBuf {
        self.dir.join(format!("{chip_name}.{}", self.extension))
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new("build")
    }
}

/// Elaborates `chip` and writes the module to `<dir>/<chip>.<extension>`.
///
/// The text is fully rendered before the file is touched and then written
/// through a temporary file renamed into place, so the target is either the
/// complete new module or whatever was there before.
pub fn write_module(chip: &Chip, options: &OutputOptions) -> Result<PathBuf, ElaborateError> {
    let text = elaborate(chip)?;
    let path = options.path_for(chip.name());

    fs::create_dir_all(&options.dir).map_err(|source| ElaborateError::Io {
        path: options.dir.clone(),
        source,
    })?;
    write_atomic(&path, &text)?;

    tracing::info!(chip = %chip.name(), path = %path.display(), "wrote module");
    Ok(path)
}

fn write_atomic(path: &Path, text: &str) -> Result<(), ElaborateError> {
    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| {
            f.write_all(text.as_bytes())?;
            f.flush()
        })
        .map_err(|err| ElaborateError::Io {
            path: path.to_path_buf(),
            source: match err {
                atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => e,
            },
        })
}
