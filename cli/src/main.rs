mod session;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use chatbot::WidgetConfig;

use session::ChatSession;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("identification required; pass --name and --email")]
    MissingIdentity,
    #[error("identification rejected: {0}")]
    Identification(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portfolio-chat", about = "Terminal client for the portfolio chatbot")]
struct Cli {
    /// Chatbot API base URL.
    #[arg(long, env = "CHATBOT_API_BASE", default_value = "http://localhost:3000")]
    api_base: String,

    /// Identify before the first prompt even if the backend does not require it.
    #[arg(long, env = "CHATBOT_REQUIRE_IDENTIFICATION", default_value_t = false)]
    require_identification: bool,

    #[arg(long, env = "CHATBOT_NAME")]
    name: Option<String>,

    #[arg(long, env = "CHATBOT_EMAIL")]
    email: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `/healthz` of the site server.
    Ping {
        #[arg(long, env = "PORTFOLIO_URL", default_value = "http://127.0.0.1:3000")]
        site_url: String,
    },
}

impl Cli {
    fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            api_base: self.api_base.trim_end_matches('/').to_owned(),
            require_identification: self.require_identification || (self.name.is_some() && self.email.is_some()),
            ..WidgetConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match &cli.command {
        Some(Command::Ping { site_url }) => run_ping(site_url).await,
        None => run_chat(&cli).await,
    }
}

async fn run_ping(site_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", site_url.trim_end_matches('/'));
    let status = client.get(url).send().await?.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_chat(cli: &Cli) -> Result<(), CliError> {
    let mut session = ChatSession::new(cli.widget_config());

    if session.needs_identification() {
        let (Some(name), Some(email)) = (cli.name.as_deref(), cli.email.as_deref()) else {
            return Err(CliError::MissingIdentity);
        };
        session.identify(name, email).await?;
    } else {
        session.open();
    }

    eprintln!("Type a question and press Enter. Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(reply) = session.ask(&line).await {
            println!("{reply}\n");
        }
    }
    Ok(())
}
