//! Common utilities for solt commands.
//!
//! Reading inputs and fanning work out over a thread pool are shared by
//! every command.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use solhl_util::SourceFile;

use crate::error::{Result, SoltError};

/// Reads `path` into a [`SourceFile`].
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SoltError::FileOperation(format!("{}: {}", path.display(), e)))?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Builds a pool of `jobs` worker threads.
pub fn thread_pool(jobs: u32) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.max(1) as usize)
        .build()
        .map_err(|e| SoltError::Config(format!("Failed to start {} worker threads: {}", jobs, e)))
}

/// Runs `f` on every path in parallel and returns the results in input
/// order, or the first error.
pub fn for_each_file<T, F>(paths: &[PathBuf], jobs: u32, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&Path) -> Result<T> + Sync,
{
    let pool = thread_pool(jobs)?;
    pool.install(|| paths.par_iter().map(|path| f(path)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("A.sol");
        std::fs::write(&path, "contract A {}\n").unwrap();

        let file = read_source(&path).unwrap();
        assert_eq!(file.content(), "contract A {}\n");
        assert!(file.name().ends_with("A.sol"));
    }

    #[test]
    fn test_read_missing_source() {
        let err = read_source(Path::new("/nonexistent/A.sol")).unwrap_err();
        assert!(matches!(err, SoltError::FileOperation(_)));
        assert!(err.to_string().contains("/nonexistent/A.sol"));
    }

    #[test]
    fn test_for_each_file_keeps_order() {
        let paths: Vec<PathBuf> = (0..16).map(|i| PathBuf::from(format!("{i}.sol"))).collect();
        let names = for_each_file(&paths, 4, |p| Ok(p.display().to_string())).unwrap();
        let expected: Vec<String> = (0..16).map(|i| format!("{i}.sol")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_for_each_file_propagates_error() {
        let paths = vec![PathBuf::from("a"), PathBuf::from("b")];
        let result: Result<Vec<()>> = for_each_file(&paths, 2, |p| {
            if p == Path::new("b") {
                Err(SoltError::Detection("b".to_string()))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
    }
}
