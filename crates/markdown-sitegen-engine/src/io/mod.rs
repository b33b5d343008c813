use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory {path}: {reason}")]
    InvalidDir { path: PathBuf, reason: String },
}

/// Read a file relative to `root`
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file relative to `root`, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under `root`, returned relative to it and sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;

    let mut relative = files
        .iter()
        .filter_map(|path| path.strip_prefix(root).ok())
        .filter_map(|path| RelativePathBuf::from_path(path).ok())
        .collect::<Vec<_>>();
    relative.sort();
    Ok(relative)
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

/// Delete everything under `dir` and leave it as an empty directory.
pub fn clean_dir(dir: &Path) -> Result<(), IoError> {
    if dir.exists() {
        log::debug!("removing {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Replace `dst` with a copy of `src`, returning the number of files copied.
///
/// Anything already at `dst` is deleted first so the copy is clean. `dst`
/// may not be `src` or lie inside it.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, IoError> {
    validate_dir(src)?;

    if dst.starts_with(src) {
        return Err(IoError::InvalidDir {
            path: dst.to_path_buf(),
            reason: format!("destination is inside source {}", src.display()),
        });
    }

    clean_dir(dst)?;
    copy_contents(src, dst)
}

fn copy_contents(src: &Path, dst: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(dst)?;

    let mut entries = fs::read_dir(src)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut copied = 0;
    for entry in entries {
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copied += copy_contents(&from, &to)?;
        } else {
            log::info!("copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }

    Ok(copied)
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir {
            path: path.to_path_buf(),
            reason: "directory does not exist".to_string(),
        });
    }

    Ok(())
}
