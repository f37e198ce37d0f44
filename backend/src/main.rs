//! BuyerMap CLI - beta gate and Slack relay server
//!
//! # Main Commands
//!
//! ```bash
//! buyermap serve                       # Start HTTP server (port 3000)
//! buyermap config                      # Show which settings are configured
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! buyermap verify-password <password>  # Check a password against the secret
//! buyermap test-webhook                # Send the Slack test notification
//! ```

use buyermap::{AppConfig, BetaGate, SlackNotifier};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "buyermap")]
#[command(about = "BuyerMap beta gate and Slack webhook relay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (default: $PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check a password against BETA_ACCESS_PASSWORD
    VerifyPassword {
        /// Password to check
        password: String,
    },

    /// Send the Slack test notification to SLACK_WEBHOOK_URL
    TestWebhook,

    /// Show which settings are configured (values are never printed)
    Config,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match AppConfig::from_env() {
        Ok(config) => match cli.command {
            Commands::Serve { port } => cmd_serve(config, port).await,
            Commands::VerifyPassword { password } => cmd_verify_password(&config, &password),
            Commands::TestWebhook => cmd_test_webhook(&config).await,
            Commands::Config => cmd_config(&config),
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(false)
        .init();
}

/// `RUST_LOG` wins over the `info` default, including bare levels.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or(""))
}

async fn cmd_serve(config: AppConfig, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match port {
        Some(p) => config.with_port(p),
        None => config,
    };
    buyermap::server::start_server(config).await?;
    Ok(())
}

fn cmd_verify_password(config: &AppConfig, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let gate = BetaGate::new(config.beta_access_password.as_deref());

    if gate.verify(password)? {
        eprintln!("✅ Password accepted");
        Ok(())
    } else {
        eprintln!("🔒 Password rejected");
        std::process::exit(1);
    }
}

async fn cmd_test_webhook(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let notifier = SlackNotifier::from_config(reqwest::Client::new(), config)?;

    eprintln!("📤 Sending Slack test notification...");
    notifier.send_test().await?;
    eprintln!("✅ Test notification sent to Slack!");

    Ok(())
}

fn cmd_config(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let status = config.status();
    let mark = |set: bool| if set { "✅ set" } else { "❌ missing" };

    println!("📋 BuyerMap configuration\n");
    println!("   BETA_ACCESS_PASSWORD:      {}", mark(status.beta_gate));
    println!("   SLACK_WEBHOOK_URL:         {}", mark(status.slack_webhook));
    println!("   Supabase (URL + anon key): {}", mark(status.supabase));
    println!("   Port:                      {}", config.port);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_bare_level_can_raise_verbosity() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("trace")).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_log_filter_bare_level_can_lower_verbosity() {
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }
}
