use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

/// The savings goal entry form: name, target amount, current progress.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let fields = [
        ("Goal Name", text_value(&app.goal_name, app.goal_field == 0)),
        (
            "Target Amount",
            text_value(&app.goal_target, app.goal_field == 1),
        ),
        (
            "Current Progress",
            text_value(&app.goal_progress, app.goal_field == 2),
        ),
    ];

    let field_items: Vec<ListItem> = fields
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i == app.goal_field {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{label:<18}"), theme::dim_style()),
                Span::styled(value.as_str(), style),
            ]))
        })
        .collect();

    let field_list = List::new(field_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                " Add New Savings Goal ",
                theme::title_style(),
            )),
    );
    f.render_widget(field_list, chunks[0]);

    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            "Up/Down/Tab move between fields; type into each one.",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "Enter adds the goal. A goal needs at least a name.",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "Empty amounts count as 0; negative amounts are floored to 0.",
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
