use clap::Parser;
use code_exec::{JobClient, LanguageTable, PollPolicy};
use code_exec_server::{create_app, run_server};
use judge0_client::{BackendConfig, API_URL_ENV, DEFAULT_API_URL};
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to listen on
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Base URL of the Judge0 API
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Number of status polls per run, including the first
    #[arg(long, default_value = "2")]
    poll_attempts: u32,

    /// Delay between status polls in milliseconds
    #[arg(long, default_value = "2000")]
    poll_interval_ms: u64,

    /// Timeout for each request to the Judge0 API in seconds
    #[arg(long, default_value = "30")]
    request_timeout_secs: u64,

    /// Exchange code and output with Judge0 base64-encoded
    #[arg(long)]
    base64: bool,

    /// TOML file replacing the built-in language table
    #[arg(long)]
    languages: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let backend = BackendConfig::new(args.api_url)
        .with_request_timeout(Duration::from_secs(args.request_timeout_secs))
        .with_base64_encoded(args.base64);

    let languages = match &args.languages {
        Some(path) => LanguageTable::from_file(path)?,
        None => LanguageTable::default(),
    };

    let policy = PollPolicy::fixed(
        args.poll_attempts,
        Duration::from_millis(args.poll_interval_ms),
    );

    let client = JobClient::judge0(backend)?
        .with_languages(languages)
        .with_policy(policy);

    info!(
        api_url = %client.backend().config().api_url,
        base64 = client.backend().config().base64_encoded,
        languages = client.languages().entries().len(),
        poll_attempts = client.policy().max_attempts(),
        poll_interval_ms = client.policy().interval().as_millis() as u64,
        "Configured judge0 backend"
    );

    let app = create_app(client);
    run_server(app, args.addr).await?;

    Ok(())
}
