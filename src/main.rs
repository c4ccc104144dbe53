use adult_names::utils::error::ReportError;
use adult_names::utils::{logger, validation::Validate};
use adult_names::{
    filter_by_min_grade, format_adult_names, load_records, load_users, CliConfig, Command,
    LocalStorage, TomlConfig,
};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    let file_config = match config.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => file_config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    logger::init_cli_logger(
        config.verbose,
        file_config.log_level(),
        file_config.log_format(),
    );

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate().and_then(|_| file_config.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let json_path = config.resolve_json_path(file_config.json_path());
    let storage = LocalStorage::default();

    let output = match &config.command {
        Command::Adults {
            default_message, ..
        } => load_users(&storage, json_path).map(|users| {
            let default_message = default_message
                .as_deref()
                .or(file_config.default_message());
            format_adult_names(&users, default_message)
        }),
        Command::Grades { min_grade, .. } => load_records(&storage, json_path)
            .and_then(|records| {
                let filtered = filter_by_min_grade(&records, *min_grade);
                serde_json::to_string_pretty(&filtered).map_err(ReportError::from)
            }),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            tracing::error!("Loading {} failed: {}", json_path, e);
            eprintln!("Error loading data from {}: {}", json_path, e);
            std::process::exit(1);
        }
    }
}
