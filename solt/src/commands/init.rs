//! Init command implementation.
//!
//! Writes a `solt.toml` holding the default configuration, so the theme can
//! be edited in place.

use std::path::PathBuf;

use tracing::info;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, SoltError};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let target = dir.join(CONFIG_FILE_NAME);

    if target.exists() && !args.force {
        return Err(SoltError::FileOperation(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }

    Config::default().save_to_path(&target)?;
    info!(path = %target.display(), "wrote default configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        run_init(InitArgs {
            path: Some(temp_dir.path().to_path_buf()),
            force: false,
        })
        .unwrap();

        let loaded = Config::load_from_path(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(loaded.theme, Config::default().theme);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&target, "# mine\n").unwrap();

        let args = InitArgs {
            path: Some(temp_dir.path().to_path_buf()),
            force: false,
        };
        assert!(matches!(run_init(args.clone()), Err(SoltError::FileOperation(_))));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "# mine\n");

        run_init(InitArgs { force: true, ..args }).unwrap();
        assert!(std::fs::read_to_string(&target).unwrap().contains("[theme]"));
    }
}
