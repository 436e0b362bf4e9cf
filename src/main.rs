mod engine;
mod history;
mod ledger;
mod models;
mod storage;
mod types;

use std::io::{BufWriter, Write, stderr, stdout};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::engine::OpsEngine;
use crate::history::{AccountHistory, generate_history};
use crate::ledger::Ledger;
use crate::models::Account;
use crate::storage::MemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage_and_exit();
    }

    if args[1] == "history" {
        let Some(identity) = args.get(2) else {
            print_usage_and_exit();
        };
        let log_level = args
            .get(3)
            .map(|s| parse_log_level(s))
            .unwrap_or(LevelFilter::ERROR);

        setup_logging(log_level);

        let history = generate_history(identity);
        info!(
            "Account [{}] derived balance: {} {}",
            history.account_mask, history.balance, history.currency
        );

        write_history_to_stdout(&history)?;
    } else {
        let path = &args[1];
        let log_level = args
            .get(2)
            .map(|s| parse_log_level(s))
            .unwrap_or(LevelFilter::ERROR);

        setup_logging(log_level);

        let store = Arc::new(MemoryStore::new());
        let ledger = Arc::new(Ledger::new(store.clone()));
        let engine = OpsEngine::new(ledger);

        let timer = Instant::now();
        engine.run(path).await?;
        let duration = timer.elapsed();

        info!("Replayed operations in: {duration:?}");

        write_balances_to_stdout(store)?;
    }

    Ok(())
}

fn print_usage_and_exit() -> ! {
    eprintln!("Usage: vault-ledger [ops].csv [log_level:optional] > [balances].csv");
    eprintln!("       vault-ledger history [identity] [log_level:optional] > [history].csv");
    eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
    exit(1);
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // Results go to stdout, so logging has to stay on stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn write_balances_to_stdout(store: Arc<MemoryStore>) -> Result<()> {
    let mut accounts: Vec<Account> = store.iter().map(|entry| entry.value().clone()).collect();
    accounts.sort_by(|a, b| {
        (&a.key.account_no, &a.key.routing_no).cmp(&(&b.key.account_no, &b.key.routing_no))
    });

    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "account,routing,balance")?;

    for account in accounts {
        writeln!(
            output,
            "{},{},{}",
            account.key.account_no, account.key.routing_no, account.balance
        )?;
    }

    output.flush()?;

    Ok(())
}

fn write_history_to_stdout(history: &AccountHistory) -> Result<()> {
    let mut writer = csv::Writer::from_writer(BufWriter::new(stdout().lock()));

    for transaction in &history.transactions {
        writer.serialize(transaction)?;
    }

    writer.flush()?;

    Ok(())
}
