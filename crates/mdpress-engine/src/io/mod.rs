use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Invalid static directory: {0}")]
    InvalidStaticDir(String),
}

/// Read a markdown source file relative to the content root
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write a generated page relative to the output root, creating parent
/// directories as needed
pub fn write_file(
    relative_path: &RelativePath,
    output_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(output_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the content root, sorted for stable output
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Copy a directory tree of static assets into `dest`.
///
/// An existing destination is cleared first so the output always mirrors
/// the source exactly. Entries are copied in sorted order and each copied
/// file is reported on stdout.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<(), IoError> {
    if !src.is_dir() {
        return Err(IoError::InvalidStaticDir(format!(
            "{} doesn't exist or is not a directory",
            src.display()
        )));
    }

    if dest.exists() {
        fs::remove_dir_all(dest).map_err(IoError::Io)?;
    }
    fs::create_dir_all(dest).map_err(IoError::Io)?;

    copy_dir_entries(src, dest)
}

fn copy_dir_entries(src: &Path, dest: &Path) -> Result<(), IoError> {
    let mut paths = fs::read_dir(src)
        .map_err(IoError::Io)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(IoError::Io)?;
    paths.sort();

    for path in paths {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            fs::create_dir_all(&target).map_err(IoError::Io)?;
            copy_dir_entries(&path, &target)?;
        } else {
            println!("Copying {} to {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(IoError::Io)?;
        }
    }

    Ok(())
}
