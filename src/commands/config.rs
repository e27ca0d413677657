//! Config command: print the effective configuration

use super::GlobalOptions;
use crate::error::Result;

/// Run config command
pub fn run(global: &GlobalOptions) -> Result<()> {
    let workspace = global.open_workspace()?;
    print!("{}", workspace.config.to_yaml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocmatterError;
    use tempfile::TempDir;

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();
        let global = GlobalOptions {
            workspace: Some(temp.path().to_path_buf()),
            config: Some(temp.path().join("nope.yaml")),
            quiet: false,
        };
        assert!(matches!(
            run(&global).unwrap_err(),
            DocmatterError::ConfigNotFound { .. }
        ));
    }
}
