//! Command line entry point: run one example query and print the response.
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use prayer_query::{
    EndpointUrl, ExampleQuery, QueryError, QueryRunner, RunnerConfig, DEFAULT_ENDPOINT,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Example query to send
    #[arg(default_value = "getting-started")]
    example: ExampleQuery,

    /// GraphQL endpoint to post to
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    url: EndpointUrl,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(
                transport = error.is_transport(),
                decode = error.is_decode(),
                "query failed"
            );
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String, QueryError> {
    let mut builder = RunnerConfig::builder().endpoint(args.url);
    if let Some(seconds) = args.timeout {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    let config = builder.build()?;

    let runner = QueryRunner::new(&config)?;
    let body = runner.run_example(args.example).await?;

    Ok(serde_json::to_string_pretty(&body)?)
}
