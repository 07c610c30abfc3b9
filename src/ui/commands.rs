use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::store::Ledger;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinTrack", cmd_quit, r);
    register_command!("quit", "Quit FinTrack", cmd_quit, r);
    register_command!("o", "Go to Overview", cmd_overview, r);
    register_command!("overview", "Go to Overview", cmd_overview, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("goals", "Go to Goals", cmd_goals, r);
    register_command!("add", "Open the transaction form", cmd_add_transaction, r);
    register_command!(
        "add-goal",
        "Open the savings goal form",
        cmd_add_goal,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let cmd_name = input.trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(app, ledger)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_overview(app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    app.refresh_report(ledger);
    Ok(())
}

fn cmd_transactions(app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh_report(ledger);
    Ok(())
}

fn cmd_goals(app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Goals;
    app.refresh_report(ledger);
    Ok(())
}

fn cmd_add_transaction(app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::AddTransaction;
    app.txn_field = 0;
    Ok(())
}

fn cmd_add_goal(app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::AddGoal;
    app.goal_field = 0;
    Ok(())
}

fn cmd_help(app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
