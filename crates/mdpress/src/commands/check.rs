//! `check` command: validate and resolve the site configuration.

use std::path::PathBuf;

use clap::Args;
use mdpress_config::{CliSettings, NavEntry, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `check` command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to the configuration file (defaults to discovering mdpress.toml).
    #[arg(long, env = "MDPRESS_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Override the preview server port.
    #[arg(long)]
    pub(crate) port: Option<u16>,

    /// Override the site base path.
    #[arg(long)]
    pub(crate) base: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Load, resolve, and summarize the configuration.
    ///
    /// A resolution failure aborts with the offending field path; there is
    /// no partial success.
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            port: self.port,
            base: self.base.clone(),
        };
        let config = SiteConfig::load(self.config.as_deref(), Some(&settings))?;

        output.info(&format!("Title:    {}", config.title));
        output.info(&format!("Base:     {}", config.base));
        output.info(&format!("Port:     {}", config.port));
        output.info(&format!(
            "Nav:      {} entries ({} links)",
            config.nav.len(),
            count_links(&config.nav)
        ));
        output.info(&format!(
            "Sidebar:  {} prefixes, {} sections",
            config.sidebar.len(),
            config
                .sidebar
                .groups()
                .iter()
                .map(|group| group.sections.len())
                .sum::<usize>()
        ));
        output.success("Configuration is valid");

        Ok(())
    }
}

/// Count leaf links across the nav tree.
fn count_links(entries: &[NavEntry]) -> usize {
    entries
        .iter()
        .map(|entry| match entry {
            NavEntry::Leaf { .. } => 1,
            NavEntry::Group { items, .. } => count_links(items),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mdpress_config::ConfigError;

    use super::*;

    fn args_for(config: PathBuf) -> CheckArgs {
        CheckArgs {
            config: Some(config),
            port: None,
            base: None,
            verbose: false,
        }
    }

    #[test]
    fn test_execute_valid_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mdpress.toml");
        fs::write(
            &path,
            r#"
title = "Handbook"

[[nav]]
text = "Home"
link = "/"
"#,
        )
        .unwrap();

        let result = args_for(path).execute(&Output::new());

        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_invalid_config_surfaces_field_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mdpress.toml");
        fs::write(
            &path,
            r#"
title = "Handbook"

[[nav]]
text = "x"
link = "/a"

[[nav.items]]
text = "y"
link = "/b"
"#,
        )
        .unwrap();

        let err = args_for(path).execute(&Output::new()).unwrap_err();

        let CliError::Config(ConfigError::AmbiguousNavEntry { field }) = err else {
            panic!("expected AmbiguousNavEntry, got {err:?}");
        };
        assert_eq!(field, "nav[0]");
    }

    #[test]
    fn test_execute_missing_config_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = args_for(temp_dir.path().join("absent.toml")).execute(&Output::new());

        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::NotFound(_)))
        ));
    }

    #[test]
    fn test_count_links_recurses_groups() {
        let nav = vec![
            NavEntry::Leaf {
                text: "Home".to_owned(),
                link: "/".to_owned(),
            },
            NavEntry::Group {
                text: "Guides".to_owned(),
                items: vec![
                    NavEntry::Leaf {
                        text: "A".to_owned(),
                        link: "/a/".to_owned(),
                    },
                    NavEntry::Leaf {
                        text: "B".to_owned(),
                        link: "/b/".to_owned(),
                    },
                ],
            },
        ];

        assert_eq!(count_links(&nav), 3);
    }
}
