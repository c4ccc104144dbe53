pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_finite, validate_path, Validate};
    use clap::{Parser, Subcommand};

    pub const DEFAULT_JSON_PATH: &str = "data.json";

    #[derive(Debug, Clone, Parser)]
    #[command(name = "adult-names")]
    #[command(about = "Summarize user records loaded from a JSON file")]
    pub struct CliConfig {
        /// Optional TOML settings file
        #[arg(long, global = true)]
        pub config: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Print the names of users older than 18, comma separated
        Adults {
            /// Path to the input JSON file (default: data.json)
            #[arg(long)]
            json_path: Option<String>,

            /// Text printed when no user qualifies
            #[arg(long)]
            default_message: Option<String>,
        },
        /// Print the records whose grade is at least the threshold, as JSON
        Grades {
            /// Path to the input JSON file (default: data.json)
            #[arg(long)]
            json_path: Option<String>,

            /// Minimum grade threshold to include a record
            #[arg(long, allow_negative_numbers = true)]
            min_grade: f64,
        },
    }

    impl Command {
        pub fn json_path(&self) -> Option<&str> {
            match self {
                Command::Adults { json_path, .. } | Command::Grades { json_path, .. } => {
                    json_path.as_deref()
                }
            }
        }
    }

    impl CliConfig {
        /// Flag, then config file, then `data.json`.
        pub fn resolve_json_path<'a>(&'a self, from_file: Option<&'a str>) -> &'a str {
            self.command
                .json_path()
                .or(from_file)
                .unwrap_or(DEFAULT_JSON_PATH)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = self.command.json_path() {
                validate_path("json_path", path)?;
            }
            if let Some(path) = self.config.as_deref() {
                validate_path("config", path)?;
            }
            if let Command::Grades { min_grade, .. } = &self.command {
                validate_finite("min_grade", *min_grade)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_adults_command() {
            let config = CliConfig::try_parse_from([
                "adult-names",
                "adults",
                "--json-path",
                "users.json",
                "--default-message",
                "none",
            ])
            .unwrap();

            assert!(!config.verbose);
            match &config.command {
                Command::Adults { default_message, .. } => {
                    assert_eq!(default_message.as_deref(), Some("none"))
                }
                other => panic!("unexpected command: {:?}", other),
            }
            assert_eq!(config.resolve_json_path(Some("ignored.json")), "users.json");
        }

        #[test]
        fn test_parse_grades_command() {
            let config =
                CliConfig::try_parse_from(["adult-names", "-v", "grades", "--min-grade", "80"])
                    .unwrap();

            assert!(config.verbose);
            assert!(matches!(config.command, Command::Grades { min_grade, .. } if min_grade == 80.0));
            assert_eq!(config.resolve_json_path(None), "data.json");
            assert_eq!(config.resolve_json_path(Some("cfg.json")), "cfg.json");
        }

        #[test]
        fn test_min_grade_is_required() {
            assert!(CliConfig::try_parse_from(["adult-names", "grades"]).is_err());
        }

        #[test]
        fn test_validate_rejects_nan_grade() {
            let config =
                CliConfig::try_parse_from(["adult-names", "grades", "--min-grade", "NaN"]).unwrap();
            assert!(config.validate().is_err());
        }
    }
}
