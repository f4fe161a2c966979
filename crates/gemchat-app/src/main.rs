mod cli;
mod commands;
mod repl;
mod secret;

use std::process::ExitCode;

use gemchat_config::GemchatConfig;
use tracing_subscriber::EnvFilter;

use cli::Command;

const DEFAULT_LOG_DIRECTIVE: &str = "gemchat=warn";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = gemchat_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- gemchat crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-----------------------\n");

        default_hook(info);
    }));
}

/// Filter directive: `--log-level` first, then `[logging] level`.
fn log_directive(flag: Option<&str>, config: Option<&GemchatConfig>) -> String {
    match (flag, config) {
        (Some(directive), _) => directive.to_string(),
        (None, Some(config)) => config.logging.level.directive().to_string(),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

/// Logs go to stderr; stdout carries the conversation.
fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(directive))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();

    // Logging depends on the config, so load first and report afterwards
    let loaded = gemchat_config::load_config(args.config.as_deref());
    init_logging(&log_directive(args.log_level.as_deref(), loaded.as_ref().ok()));

    tracing::info!("gemchat v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        GemchatConfig::default()
    });

    if let Err(e) = gemchat_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let command = args.command.unwrap_or(Command::Chat);
    match commands::run(command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gemchat: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gemchat_config::schema::LogLevel;

    #[test]
    fn flag_wins_over_config() {
        let mut config = GemchatConfig::default();
        config.logging.level = LogLevel::Debug;
        assert_eq!(
            log_directive(Some("gemchat_ai=trace"), Some(&config)),
            "gemchat_ai=trace"
        );
    }

    #[test]
    fn config_level_used_without_flag() {
        let mut config = GemchatConfig::default();
        config.logging.level = LogLevel::Info;
        assert_eq!(log_directive(None, Some(&config)), "gemchat=info");
    }

    #[test]
    fn default_when_config_failed() {
        assert_eq!(log_directive(None, None), DEFAULT_LOG_DIRECTIVE);
    }
}
