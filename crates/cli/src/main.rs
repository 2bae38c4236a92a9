//! `staff-tracker` CLI entry-point.
//!
//! Available sub-commands:
//! - `run`     — open the connection and present the interactive menu
//!               (default when no sub-command is given).
//! - `migrate` — apply pending database migrations.

use clap::{Args, Parser, Subcommand};
use tracing::info;

use tracker::{ConsolePrompt, Session};

#[derive(Parser)]
#[command(
    name = "staff-tracker",
    about = "Interactive department, role, and employee administration",
    version
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Where and how to reach the database server.
#[derive(Args)]
struct ConnectionArgs {
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    host: String,

    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    port: u16,

    #[arg(long, env = "DB_USER", default_value = "postgres")]
    user: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,

    #[arg(long, env = "DB_NAME", default_value = "staff")]
    database: String,
}

impl ConnectionArgs {
    fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

#[derive(Subcommand)]
enum Command {
    /// Open the connection and present the interactive menu.
    Run,
    /// Apply pending database migrations.
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let database_url = cli.connection.url();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let pool = db::pool::connect(&database_url).await?;

            let mut session = Session::new(pool.clone(), ConsolePrompt::new());
            let outcome = session.run().await;

            // Released exactly once, whether the user quit or the session
            // died on an unrecoverable error.
            pool.close().await;
            outcome?;
        }
        Command::Migrate => {
            let pool = db::pool::connect(&database_url).await?;

            let outcome = db::pool::run_migrations(&pool).await;
            pool.close().await;
            outcome?;

            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
