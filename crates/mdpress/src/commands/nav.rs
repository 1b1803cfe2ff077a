//! `nav` command: print the bound navigation view for a document path.

use std::path::PathBuf;

use clap::Args;
use mdpress_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `nav` command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Root-relative document path (e.g. `/guide/setup`, `/` for home).
    pub(crate) path: String,

    /// Path to the configuration file (defaults to discovering mdpress.toml).
    #[arg(long, env = "MDPRESS_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl NavArgs {
    /// Load the configuration, bind the navigation, and print it as JSON.
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let config = SiteConfig::load(self.config.as_deref(), None)?;

        let doc_path = normalize_path(&self.path);
        let page = mdpress_nav::bind(&config, &doc_path);

        if page.sidebar.is_empty() {
            output.warning(&format!("No sidebar prefix matches {doc_path}"));
        }

        output.data(&serde_json::to_string_pretty(&page)?);
        Ok(())
    }
}

/// Ensure the document path is root-relative.
fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/guide/setup"), "/guide/setup");
        assert_eq!(normalize_path("guide/setup"), "/guide/setup");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_execute_prints_navigation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mdpress.toml");
        fs::write(
            &path,
            r#"
title = "Handbook"

[[nav]]
text = "Home"
link = "/"

[[sidebar]]
prefix = "/guide/"

[[sidebar.sections]]
title = "Guide"
children = ["", "setup"]
"#,
        )
        .unwrap();

        let args = NavArgs {
            path: "guide/setup".to_owned(),
            config: Some(path),
            verbose: false,
        };

        assert!(args.execute(&Output::new()).is_ok());
    }

    #[test]
    fn test_execute_missing_config_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        let args = NavArgs {
            path: "/".to_owned(),
            config: Some(temp_dir.path().join("absent.toml")),
            verbose: false,
        };

        assert!(args.execute(&Output::new()).is_err());
    }
}
