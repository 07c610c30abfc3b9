use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::store::Ledger;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

/// The raw transaction table, field text shown verbatim.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let transactions = ledger.transactions();

    if transactions.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one on the Add Transaction screen (4)",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                " Transactions (0) ",
                theme::title_style(),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Amount", "Type"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let kind_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };

            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&txn.date, 14)),
                Cell::from(txn.category.as_str()),
                Cell::from(truncate(&txn.amount, 16)),
                Cell::from(Span::styled(txn.kind.as_str(), kind_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Min(16),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Transactions ({}) ", transactions.len()),
                theme::title_style(),
            )),
    );

    f.render_widget(table, area);
}
