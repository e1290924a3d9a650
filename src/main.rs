use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use postbox::{Config, Database, RequestFacade, UserAdminService, WebServer};

/// `postbox` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "postbox",
    about = "Credential-gated store-and-forward mailbox",
    version
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, short, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Allow a registered user to send, scan and manage friends.
    Activate {
        username: String,
    },
    /// Revoke a user's activation.
    Deactivate {
        username: String,
    },
    /// List users waiting for activation.
    Pending,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", cli.config.display());
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    if let Err(e) = postbox::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        postbox::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli.command.unwrap_or(Command::Serve), config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: Config) -> postbox::Result<()> {
    let db = Database::open(&config.database).await?;

    match command {
        Command::Serve => {
            info!(
                "Postbox starting on {}:{} (database: {})",
                config.server.host, config.server.port, config.database.path
            );
            let facade = Arc::new(RequestFacade::new(&config, db)?);
            WebServer::new(&config.server, facade)?.run().await
        }
        Command::Activate { username } => {
            let result = UserAdminService::new(&db).activate(&username).await;
            db.close().await;
            let user = result?;
            println!("User '{}' activated.", user.username);
            Ok(())
        }
        Command::Deactivate { username } => {
            let result = UserAdminService::new(&db).deactivate(&username).await;
            db.close().await;
            let user = result?;
            println!("User '{}' deactivated.", user.username);
            Ok(())
        }
        Command::Pending => {
            let result = UserAdminService::new(&db).pending().await;
            db.close().await;
            for user in result? {
                println!("{}\t{}\t{}", user.username, user.email, user.created_at);
            }
            Ok(())
        }
    }
}
