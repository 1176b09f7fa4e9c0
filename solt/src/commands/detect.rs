//! Detect command implementation.
//!
//! Reports whether each input is Solidity, first by file name and then by
//! sniffing its content.

use std::fmt;
use std::path::{Path, PathBuf};

use solhl_lex::{analyze_text, SOLIDITY};
use tracing::debug;

use crate::commands::common::{for_each_file, read_source};
use crate::error::{Result, SoltError};

/// Arguments for the detect command.
#[derive(Debug, Clone)]
pub struct DetectArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Number of files checked at once.
    pub jobs: u32,
}

/// How a file was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// The file name matched a Solidity glob.
    Filename,
    /// The content looked like Solidity.
    Content,
    /// Neither.
    Unknown,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detection::Filename => write!(f, "{} (by file name)", SOLIDITY.tag),
            Detection::Content => write!(f, "{} (by content)", SOLIDITY.tag),
            Detection::Unknown => f.write_str("unknown"),
        }
    }
}

/// Checks one file.
pub fn detect_file(path: &Path) -> Result<Detection> {
    if SOLIDITY.matches_filename(path) {
        return Ok(Detection::Filename);
    }
    let file = read_source(path)?;
    let detection = match analyze_text(file.content()) {
        Some(_) => Detection::Content,
        None => Detection::Unknown,
    };
    debug!(file = file.name(), ?detection, "sniffed");
    Ok(detection)
}

/// Run the detect command.
pub fn run_detect(args: DetectArgs) -> Result<()> {
    let results = for_each_file(&args.files, args.jobs, detect_file)?;

    for (path, detection) in args.files.iter().zip(&results) {
        println!("{}: {}", path.display(), detection);
    }

    let unknown = results.iter().filter(|d| **d == Detection::Unknown).count();
    if unknown > 0 {
        return Err(SoltError::Detection(format!(
            "{} of {} file(s) not recognized as {}",
            unknown,
            results.len(),
            SOLIDITY.title
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_by_name_does_not_read() {
        assert_eq!(detect_file(Path::new("/nonexistent/Token.sol")).unwrap(), Detection::Filename);
    }

    #[test]
    fn test_detect_by_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contract.txt");
        std::fs::write(&path, "\n  pragma solidity ^0.8.0;\n").unwrap();
        assert_eq!(detect_file(&path).unwrap(), Detection::Content);
    }

    #[test]
    fn test_detect_unknown() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "hello\n").unwrap();
        assert_eq!(detect_file(&path).unwrap(), Detection::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Detection::Filename.to_string(), "solidity (by file name)");
        assert_eq!(Detection::Unknown.to_string(), "unknown");
    }
}
