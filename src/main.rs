// ==============================================
//  ██▀███  ▓█████ ██▒   █▓ ██▓    ▄▄▄     ▓██   ██▓
// ▓██ ▒ ██▒▓█   ▀▓██░   █▒▓██▒   ▒████▄    ▒██  ██▒
// ▓██ ░▄█ ▒▒███   ▓██  █▒░▒██░   ▒██  ▀█▄   ▒██ ██░
// ▒██▀▀█▄  ▒▓█  ▄  ▒██ █░░▒██░   ░██▄▄▄▄██  ░ ▐██▓░
// ░██▓ ▒██▒░▒████▒  ▒▀█░  ░██████▒▓█   ▓██▒ ░ ██▒▓░
// ░ ▒▓ ░▒▓░░░ ▒░ ░  ░ ▐░  ░ ▒░▓  ░▒▒   ▓▒█░  ██▒▒▒
//   ░▒ ░ ▒░ ░ ░  ░  ░ ░░  ░ ░ ▒  ░ ▒   ▒▒ ░▓██ ░▒░
//   ░░   ░    ░       ░░    ░ ░    ░   ▒   ▒ ▒ ░░
//    ░        ░  ░     ░      ░  ░     ░  ░░ ░
// ==============================================

use anyhow::Result;
use clap::Parser;
use revlay::{cli, www};
use std::env;

fn preprocess() {
    dotenv::dotenv().ok();
    env_logger::init();
}

fn client() -> Result<reqwest::Client> {
    let user_agent =
        env::var("USER_AGENT").unwrap_or_else(|_| www::DEFAULT_USER_AGENT.to_string());
    let client = reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();

    let cli = cli::Cli::parse();
    log::info!("Command line input recorded: {cli:#?}");

    tokio::fs::create_dir_all(&cli.out_dir).await?;
    let client = client()?;

    // one sequential pipeline per company; a failure in one company's run
    // must not stop the other's
    let results = revlay::run_all(&www::COMPANIES, |company| {
        let client = &client;
        let out_dir = cli.out_dir.clone();
        async move { revlay::run(client, &company, &out_dir).await }
    })
    .await;

    for (ticker, outcome) in &results {
        if let Ok(path) = outcome {
            log::info!("[{ticker}] chart written to {}", path.display());
        }
    }
    if results.iter().all(|(_, outcome)| outcome.is_err()) {
        anyhow::bail!("all company pipelines failed");
    }
    Ok(())
}
