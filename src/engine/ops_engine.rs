use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, spawn_blocking};
use tracing::{debug, error, warn};

use crate::engine::{Operation, OperationKind};
use crate::ledger::Ledger;
use crate::storage::LedgerStore;

/// Replays a CSV of ledger operations against the core.
///
/// A blocking reader task streams rows into a bounded channel; the consumer
/// applies them in file order, so per-account ordering matches the input.
/// Malformed rows and rejected operations are logged and skipped rather
/// than aborting the replay.
pub struct OpsEngine<S: LedgerStore> {
    ledger: Arc<Ledger<S>>,
    backpressure: usize,
}

impl<S: LedgerStore> OpsEngine<S> {
    pub fn new(ledger: Arc<Ledger<S>>) -> Self {
        Self {
            ledger,
            backpressure: 256,
        }
    }

    /// Orchestrates the end-to-end replay of one operations CSV.
    pub async fn run(&self, path: &str) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel::<Operation>(self.backpressure);
        let csv_handle = Self::spawn_csv_reader(path.to_string(), sender);
        let result = self.apply_operations(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        result
    }

    fn spawn_csv_reader(path: String, sender: mpsc::Sender<Operation>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening operations CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<Operation>() {
                match result {
                    Ok(operation) => {
                        if sender.blocking_send(operation).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }

    async fn apply_operations(&self, mut receiver: mpsc::Receiver<Operation>) -> anyhow::Result<()> {
        while let Some(operation) = receiver.recv().await {
            self.apply(&operation);
        }

        Ok(())
    }

    fn apply(&self, operation: &Operation) {
        let key = operation.account_key();

        match operation.kind {
            OperationKind::Open => {
                let initial = operation.amount.unwrap_or(Decimal::ZERO);
                match self.ledger.open_account(&key, initial) {
                    Ok(()) => debug!("Opened [{key}] with balance [{initial}]"),
                    Err(error) => warn!("{error}"),
                }
            }
            OperationKind::Credit => match operation.amount {
                Some(amount) => match self.ledger.credit(&key, amount) {
                    Ok(balance) => debug!("Credited [{key}], balance now [{balance}]"),
                    Err(error) => warn!("{error}"),
                },
                None => warn!("Credit for [{key}] is missing an amount"),
            },
            OperationKind::Debit => match operation.amount {
                Some(amount) => match self.ledger.debit(&key, amount) {
                    Ok(balance) => debug!("Debited [{key}], balance now [{balance}]"),
                    Err(error) => warn!("{error}"),
                },
                None => warn!("Debit for [{key}] is missing an amount"),
            },
        }
    }
}
