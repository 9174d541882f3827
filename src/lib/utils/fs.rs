use std::{
    fs::{self, DirBuilder, File},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Removes a file if it exists. Missing files are not an error
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Could not remove file {path:?}"))?;
    }
    Ok(())
}

/// Gets the absolute route for an element in the system given a path P,
/// resolving every symbolic link and relative component
pub fn get_absolute_path<P: AsRef<Path>>(p: P) -> Result<PathBuf> {
    let canonical = p
        .as_ref()
        .canonicalize()
        .with_context(|| format!("Could not canonicalize {:?}", p.as_ref()))?;
    Ok(canonical)
}
