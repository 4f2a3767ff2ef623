//! Terminal front end: prompts for the search form, prints each panel as soon
//! as its lookup lands.
//!
//! Reads `MORALIS_API_KEY` from the environment (or `.env`). Diagnostics go to
//! stderr; set `RUST_LOG=debug` for request traces.

use std::io::Write;

use futures_util::{FutureExt, StreamExt};
use nft_floor_tracker::prelude::*;
use nft_floor_tracker::view::render::{render_chart, render_metadata};
use nft_floor_tracker::view::APP_TITLE;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = FloorTrackerClient::from_config(TrackerConfig::from_env()?)?;
    let shell = Shell::new(client);
    let mut updates = shell.subscribe().await;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", APP_TITLE);
    loop {
        let input = shell.input().await;

        let Some(address) = prompt(&mut lines, "Contract Address", input.address.as_str()).await? else {
            break;
        };
        if !address.is_empty() {
            shell.set_address(address).await;
        }

        let chains = options(Chain::ALL.iter().map(|c| (c.as_str(), c.label())));
        let Some(chain) = prompt(&mut lines, &format!("Chain ({})", chains), input.chain.as_str()).await? else {
            break;
        };
        if !chain.is_empty() {
            match chain.parse::<Chain>() {
                Ok(c) => shell.set_chain(c).await,
                Err(e) => eprintln!("{}; keeping {}", e, input.chain),
            }
        }

        let intervals = options(Interval::ALL.iter().map(|i| (i.as_str(), i.label())));
        let Some(interval) =
            prompt(&mut lines, &format!("Chart Duration ({})", intervals), input.interval.as_str()).await?
        else {
            break;
        };
        if !interval.is_empty() {
            match interval.parse::<Interval>() {
                Ok(i) => shell.set_interval(i).await,
                Err(e) => eprintln!("{}; keeping {}", e, input.interval),
            }
        }

        let mut search = shell.trigger_search();
        loop {
            tokio::select! {
                Some(change) = updates.next() => draw(&shell, change).await,
                joined = &mut search => {
                    joined?;
                    break;
                }
            }
        }
        while let Some(Some(change)) = updates.next().now_or_never() {
            draw(&shell, change).await;
        }
        println!();
    }
    Ok(())
}

/// Print the panel that `change` updated.
async fn draw(shell: &Shell<FloorTrackerClient>, change: StateChange) {
    let view = shell.view().await;
    let panel = match change {
        StateChange::Metadata { .. } => view.metadata.as_ref().map(render_metadata),
        StateChange::History { .. } => view.chart.as_ref().map(render_chart),
    };
    if let Some(text) = panel {
        println!();
        print!("{}", text);
    }
}

fn options<'a>(items: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    items
        .map(|(value, label)| format!("{} = {}", value, label))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print `label [current]: ` and read one trimmed line; `None` on EOF.
async fn prompt(lines: &mut Input, label: &str, current: &str) -> std::io::Result<Option<String>> {
    print!("{} [{}]: ", label, current);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?.map(|l| l.trim().to_string()))
}
