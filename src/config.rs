use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

use crate::commands::Command;
use crate::posts::DEFAULT_IMAGE;

#[derive(Parser, Debug)]
#[command(name = "bloggy", about = "A local blog: accounts, posts and a filterable feed")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to the database file (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub authoring: AuthoringConfig,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AuthoringConfig {
    pub max_tags: usize,
    pub default_image: String,
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            max_tags: 5,
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }
}

impl Config {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let data_dir = Self::data_dir(cli)?;
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| data_dir.join("config.toml"));

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // CLI overrides
        if let Some(ref db) = cli.db {
            config.database.path = Some(db.clone());
        }

        if config.database.path.is_none() {
            config.database.path = Some(data_dir.join("bloggy.db"));
        }

        Ok(config)
    }

    pub fn data_dir(cli: &Cli) -> anyhow::Result<PathBuf> {
        match cli.data_dir.clone() {
            Some(dir) => Ok(dir),
            None => dirs::home_dir()
                .map(|home| home.join(".bloggy"))
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory")),
        }
    }

    pub fn db_path(&self) -> Option<&PathBuf> {
        self.database.path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(data_dir: Option<PathBuf>) -> Cli {
        Cli {
            config: None,
            data_dir,
            db: None,
            command: Command::Whoami,
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.authoring.max_tags, 5);
        assert_eq!(config.authoring.default_image, DEFAULT_IMAGE);
        assert!(config.database.path.is_none());
    }

    #[test]
    fn data_dir_uses_cli_override() {
        let cli = cli(Some(PathBuf::from("/tmp/test-bloggy")));
        assert_eq!(
            Config::data_dir(&cli).unwrap(),
            PathBuf::from("/tmp/test-bloggy")
        );
    }

    #[test]
    fn data_dir_defaults_to_home_dot_bloggy() {
        let dir = Config::data_dir(&cli(None)).unwrap();
        assert!(dir.ends_with(".bloggy"));
    }

    #[test]
    fn load_with_no_config_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load(&cli(Some(tmp.path().to_path_buf()))).unwrap();
        assert_eq!(config.db_path(), Some(&tmp.path().join("bloggy.db")));
        assert_eq!(config.authoring.max_tags, 5);
    }

    #[test]
    fn load_reads_toml_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[database]
path = "/var/lib/bloggy/blog.db"

[authoring]
max_tags = 3
"#,
        )
        .unwrap();

        let mut cli = cli(Some(tmp.path().to_path_buf()));
        cli.config = Some(config_path);
        let config = Config::load(&cli).unwrap();
        assert_eq!(
            config.db_path(),
            Some(&PathBuf::from("/var/lib/bloggy/blog.db"))
        );
        assert_eq!(config.authoring.max_tags, 3);
        assert_eq!(config.authoring.default_image, DEFAULT_IMAGE);
    }

    #[test]
    fn cli_db_beats_toml_value() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            "[database]\npath = \"/elsewhere.db\"\n",
        )
        .unwrap();

        let mut cli = cli(Some(tmp.path().to_path_buf()));
        cli.db = Some(tmp.path().join("override.db"));
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.db_path(), Some(&tmp.path().join("override.db")));
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bloggy", "feed", "--data-dir", "/tmp/x", "--filter", "dev"])
            .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Command::Feed { filter: Some(ref f) } if f == "dev"));
    }
}
