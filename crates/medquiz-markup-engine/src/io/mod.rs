use crate::bank::{BankError, QuestionBank};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse question bank {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid question bank {path}: {source}")]
    Invalid { path: PathBuf, source: BankError },
    #[error("Invalid banks directory: {0}")]
    InvalidBanksDir(String),
}

/// Read, parse and validate a question bank file
pub fn load_bank(path: &Path) -> Result<QuestionBank, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    let bank: QuestionBank =
        serde_json::from_str(&content).map_err(|source| IoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    bank.validate().map_err(|source| IoError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Loaded bank '{}' with {} questions from {}",
        bank.title,
        bank.questions.len(),
        path.display()
    );
    Ok(bank)
}

/// Scan for question bank files (`*.json`) under the banks directory
pub fn scan_bank_files(banks_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !banks_root.is_dir() {
        return Err(IoError::InvalidBanksDir(format!(
            "'{}' is not a directory",
            banks_root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(banks_root, &mut files)?;
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
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}
