use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::{Category, TransactionKind};
use crate::ui::app::App;
use crate::ui::theme;

/// The transaction entry form: date, category, amount, type.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    let category = Category::all()
        .get(app.txn_category)
        .copied()
        .unwrap_or(Category::Food);
    let kind = TransactionKind::all()
        .get(app.txn_kind)
        .copied()
        .unwrap_or(TransactionKind::Expense);

    let fields = [
        ("Date", text_value(&app.txn_date, app.txn_field == 0)),
        ("Category", format!("◀ {category} ▶")),
        ("Amount", text_value(&app.txn_amount, app.txn_field == 2)),
        ("Type", format!("◀ {kind} ▶")),
    ];

    let field_items: Vec<ListItem> = fields
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i == app.txn_field {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{label:<12}"), theme::dim_style()),
                Span::styled(value.as_str(), style),
            ]))
        })
        .collect();

    let field_list = List::new(field_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                " Add New Transaction ",
                theme::title_style(),
            )),
    );
    f.render_widget(field_list, chunks[0]);

    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            "Up/Down/Tab move between fields; type into Date and Amount.",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "Left/Right or +/- cycle Category and Type. Enter adds the transaction.",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "Empty amount counts as 0; negative amounts are floored to 0.",
            theme::dim_style(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style()),
    );
    f.render_widget(hints, chunks[1]);
}

fn text_value(buffer: &str, focused: bool) -> String {
    if focused {
        format!("{buffer}▏")
    } else {
        buffer.to_string()
    }
}
