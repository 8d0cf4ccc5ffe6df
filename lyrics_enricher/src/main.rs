mod batch;
mod cli;
mod fetch;
mod models;
mod output;
mod retry;

use anyhow::Result;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let config = batch::BatchConfig {
        input: args.input,
        output: args.output,
        token: args.token,
        retry: retry::RetryPolicy {
            max_attempts: args.retries,
            delay: std::time::Duration::from_secs(args.delay),
        },
    };

    batch::run(&config).await
}
