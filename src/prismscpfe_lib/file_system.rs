use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use log::trace;
use serde::de::DeserializeOwned;

use crate::error::ctx;

/// Interactor with the actual physical file system.
///
/// `prismscpfe` never writes locally, it only reads inputs and results.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSystemInteractor;

/// This defines all interactions of `prismscpfe` with the filesystem.
pub trait FileOperations {
    /// Read a file into raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read a file into a utf8 string.
    fn read_utf8(&self, path: &Path) -> Result<String>;

    /// Try to deserialize a toml file into a struture `T`.
    fn try_read_toml<T: DeserializeOwned>(&self, path: &Path) -> Result<T>;

    /// Check whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// All files in `dir` whose name matches the glob `pattern`, sorted.
    fn glob_files(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>>;
}

impl FileOperations for FileSystemInteractor {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        trace!("Reading {path:?}");

        fs::read(path).with_context(ctx!(
          "Could not read the file {path:?}", ;
          "Ensure that the file exists and you have permissions to access it",
        ))
    }

    fn read_utf8(&self, path: &Path) -> Result<String> {
        String::from_utf8(self.read_bytes(path)?).with_context(ctx!(
          "{path:?} is not valid UTF-8", ;
          "The file doesn't seem to be human readable?",
        ))
    }

    fn try_read_toml<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        toml::from_str::<T>(&self.read_utf8(path)?).with_context(ctx!(
          "Could not deserialize toml file {path:?}", ;
          "Ensure that the file is valid toml",
        ))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn glob_files(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let full = dir.join(pattern);
        let full = full.to_str().with_context(ctx!(
          "The path {full:?} is not valid UTF-8", ;
          "Rename the directory so that it can be matched",
        ))?;

        let mut found = Vec::new();

        for entry in glob::glob(full).with_context(ctx!(
          "Invalid glob pattern {pattern:?}", ;
          "Check the `results` entry of your configuration",
        ))? {
            let path = entry.with_context(ctx!(
              "Could not access a file matching {pattern:?}", ;
              "Ensure that you have permissions to read the directory",
            ))?;

            if path.is_file() {
                found.push(path);
            }
        }

        found.sort();
        Ok(found)
    }
}

#[cfg(test)]
#[path = "tests/file_system.rs"]
mod tests;
