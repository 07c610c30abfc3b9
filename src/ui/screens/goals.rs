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

/// The raw savings-goal table. Target amounts show up here and nowhere
/// else; the chart only plots progress.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let goals = ledger.savings_goals();

    if goals.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No savings goals yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one on the Add Goal screen (5)",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                " Savings Goals (0) ",
                theme::title_style(),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Goal", "Target", "Progress"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = goals
        .iter()
        .enumerate()
        .skip(app.goal_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, goal)| {
            let style = if i == app.goal_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&goal.name, 30)),
                Cell::from(truncate(&goal.target_amount, 16)),
                Cell::from(truncate(&goal.progress, 16)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Savings Goals ({}) ", goals.len()),
                theme::title_style(),
            )),
    );

    f.render_widget(table, area);
}
