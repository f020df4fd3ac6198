//! CLI command implementations
//!
//! Both commands load-and-validate configuration before acting. `init` is
//! idempotent: it never overwrites an existing config or data file.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::http_server::HttpServer;
use crate::observability::{Logger, Severity};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default config if the file is absent, then seed the data file
/// with an empty collection if it does not exist yet.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        // Fresh config: anchor the data file next to the config file so
        // the layout does not depend on the process working directory.
        let data_dir = config_path.parent().unwrap_or(Path::new("."));
        let config = Config {
            data_path: data_dir.join("data").join("books.json").display().to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::Io(e.to_string()))?;
        fs::write(config_path, json)?;
        Logger::log(
            Severity::Info,
            "config_created",
            &[("path", &config_path.display().to_string())],
        );
        config
    };

    let data_path = Path::new(&config.data_path);
    if data_path.exists() {
        Logger::log(
            Severity::Info,
            "data_file_exists",
            &[("path", &config.data_path)],
        );
        return Ok(());
    }

    if let Some(parent) = data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(data_path, "[]")?;
    Logger::log(
        Severity::Info,
        "data_file_created",
        &[("path", &config.data_path)],
    );

    Ok(())
}

/// Load config, build the runtime, and serve until shutdown.
///
/// A missing data file is not an error; the store loads it as empty.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Server(e.to_string()))?;

    let server = HttpServer::new(&config.data_path, config.http);
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::Server(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config_and_data_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bookshelf.json");
        let data_path = dir.path().join("books.json");

        let config = Config {
            data_path: data_path.display().to_string(),
            ..Default::default()
        };
        fs::write(
            &config_path,
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .unwrap();

        init(&config_path).unwrap();

        assert_eq!(fs::read_to_string(&data_path).unwrap(), "[]");
    }

    #[test]
    fn test_init_does_not_overwrite_existing_data() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bookshelf.json");
        let data_path = dir.path().join("books.json");

        let config = Config {
            data_path: data_path.display().to_string(),
            ..Default::default()
        };
        fs::write(
            &config_path,
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .unwrap();
        fs::write(&data_path, r#"[{"id":1,"title":"A","genre":"","description":"","rating":""}]"#)
            .unwrap();

        init(&config_path).unwrap();

        let content = fs::read_to_string(&data_path).unwrap();
        assert!(content.contains("\"id\":1"));
    }

    #[test]
    fn test_init_writes_default_config_when_absent() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bookshelf.json");

        init(&config_path).unwrap();

        assert!(config_path.exists());
        let reloaded = Config::load(&config_path).unwrap();
        assert_eq!(reloaded.http.port, 3000);
        // The seeded data file sits next to the config.
        let data_path = dir.path().join("data").join("books.json");
        assert_eq!(fs::read_to_string(data_path).unwrap(), "[]");
    }
}
