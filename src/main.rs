mod models;
mod report;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let mut ledger = store::Ledger::new();
    run::as_tui(&mut ledger)
}
