use clap::Parser;

use mag_narrative::app;
use mag_narrative::catalog::RequestType;
use mag_narrative::config::Config;
use mag_narrative::logging;
use mag_narrative::output::OutputHandler;

#[derive(Parser)]
#[command(name = "mag-narrative")]
#[command(about = "Single-shot flavor-text generator for M.A.G.", long_about = None)]
struct Cli {
    /// Kind of line to generate
    #[arg(value_enum)]
    request_type: RequestType,

    /// Generation service endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Model to request
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Prefix the line with its request tag, in the phrase-cache shape
    #[arg(long)]
    cache_line: bool,

    /// Print debug diagnostics on stderr
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _ = logging::init();

    let mut config = Config::load_or_default().unwrap_or_default();
    if let Some(endpoint) = cli.endpoint {
        config.ai.api_url = endpoint;
    }
    if let Some(model) = cli.model {
        config.ai.model = model;
    }
    if let Some(timeout) = cli.timeout {
        config.ai.timeout_secs = timeout;
    }

    let mut output = OutputHandler::new().with_debug(cli.debug);

    let outcome = app::execute(&config, cli.request_type, &mut output).await;

    let line = app::render_line(cli.request_type, &outcome.text, cli.cache_line);
    let _ = output.print_line(&line);

    std::process::exit(outcome.exit_code());
}
