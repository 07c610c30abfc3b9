use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, percent_of, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Time series
            Constraint::Percentage(50), // Category shares + goal bars
        ])
        .split(area);

    render_time_series(f, chunks[0], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_category_shares(f, bottom[0], app);
    render_goal_progress(f, bottom[1], app);
}

fn titled_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(title, theme::title_style()))
}

fn render_placeholder(f: &mut Frame, area: Rect, title: &'static str, msg: &'static str) {
    let para = Paragraph::new(Line::from(Span::styled(msg, theme::dim_style())))
        .centered()
        .block(titled_block(title));
    f.render_widget(para, area);
}

/// Two line series on one shared pair of axes; a series with nothing to
/// plot is dropped and announced with a placeholder line instead.
fn render_time_series(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = " Expenses vs Income Over Time ";

    let expense = &app.report.expense_by_date;
    let income = &app.report.income_by_date;

    let Some(origin) = expense
        .iter()
        .chain(income.iter())
        .map(|(date, _)| *date)
        .min()
    else {
        render_placeholder(
            f,
            area,
            TITLE,
            "No expense data to plot. No income data to plot.",
        );
        return;
    };
    let last = expense
        .iter()
        .chain(income.iter())
        .map(|(date, _)| *date)
        .max()
        .unwrap_or(origin);

    let to_points = |series: &[(NaiveDate, Decimal)]| -> Vec<(f64, f64)> {
        series
            .iter()
            .map(|(date, sum)| {
                (
                    (*date - origin).num_days() as f64,
                    sum.to_f64().unwrap_or(0.0),
                )
            })
            .collect()
    };
    let expense_points = to_points(expense);
    let income_points = to_points(income);

    let x_max = ((last - origin).num_days() as f64).max(1.0);
    let y_max = expense_points
        .iter()
        .chain(income_points.iter())
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let mut datasets = Vec::new();
    let mut notes: Vec<Line> = Vec::new();

    if expense_points.is_empty() {
        notes.push(Line::from(Span::styled(
            "No expense data to plot.",
            theme::dim_style(),
        )));
    } else {
        datasets.push(
            Dataset::default()
                .name("Expenses")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme::expense_style())
                .data(&expense_points),
        );
    }

    if income_points.is_empty() {
        notes.push(Line::from(Span::styled(
            "No income data to plot.",
            theme::dim_style(),
        )));
    } else {
        datasets.push(
            Dataset::default()
                .name("Income")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme::income_style())
                .data(&income_points),
        );
    }

    let block = titled_block(TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (chart_area, note_area) = if notes.is_empty() {
        (inner, None)
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(notes.len() as u16)])
            .split(inner);
        (rows[0], Some(rows[1]))
    };

    let x_labels = vec![
        Span::styled(origin.format("%Y-%m-%d").to_string(), theme::dim_style()),
        Span::styled(last.format("%Y-%m-%d").to_string(), theme::dim_style()),
    ];
    let y_labels = vec![
        Span::styled("0", theme::dim_style()),
        Span::styled(format!("{y_max:.0}"), theme::dim_style()),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::border_style())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::border_style())
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    f.render_widget(chart, chart_area);

    if let Some(note_area) = note_area {
        f.render_widget(Paragraph::new(notes), note_area);
    }
}

/// The proportion chart: one percentage-labeled row per category present
/// in the expense subset. Percentages are shares of the expense total.
fn render_category_shares(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = " Expenses by Category ";

    if app.report.expense_by_category.is_empty() {
        render_placeholder(f, area, TITLE, "No expense data to plot.");
        return;
    }

    let total = app.report.expense_total();
    let block = titled_block(TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_width = 16usize;
    let rows: Vec<Line> = app
        .report
        .expense_by_category
        .iter()
        .take(inner.height as usize)
        .map(|(category, amount)| {
            let pct = percent_of(*amount, total);
            let filled = (((pct / 100.0) * bar_width as f64).round() as usize).min(bar_width);
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                "░".repeat(bar_width.saturating_sub(filled))
            );

            Line::from(vec![
                Span::styled(
                    format!("{:<15}", truncate(category.as_str(), 14)),
                    theme::normal_style(),
                ),
                Span::styled(format!("{:>12}", format_amount(*amount)), theme::expense_style()),
                Span::raw("  "),
                Span::styled(bar, theme::expense_style()),
                Span::styled(format!(" {pct:>5.1}%"), theme::dim_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(rows), inner);
}

/// One bar per goal in insertion order; the bar height is the parsed
/// progress. Target amounts are never plotted.
fn render_goal_progress(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = " Savings Goals Progress ";

    if app.report.goal_progress.is_empty() {
        render_placeholder(f, area, TITLE, "No savings goals data to plot.");
        return;
    }

    let bars: Vec<Bar> = app
        .report
        .goal_progress
        .iter()
        .take(12)
        .map(|(name, progress)| {
            Bar::default()
                .value(progress.to_u64().unwrap_or(0))
                .label(Line::from(truncate(name, 10)))
                .style(theme::goal_style())
                .value_style(theme::goal_value_style())
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block(TITLE))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(theme::goal_style())
        .value_style(theme::goal_value_style());

    f.render_widget(chart, area);
}
