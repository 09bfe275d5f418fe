use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::form::Field;
use super::theme;
use super::util::{format_currency, truncate};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // entry form
            Constraint::Min(5),    // expense table
            Constraint::Length(1), // status line
            Constraint::Length(1), // prompt line
        ])
        .split(f.area());

    render_form(f, bands[0], app);
    render_table(f, bands[1], app);
    render_status_bar(f, bands[2], app);
    render_command_bar(f, bands[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.mode == InputMode::Entry;

    let lines: Vec<Line> = Field::all()
        .iter()
        .map(|&field| {
            let focused = editing && app.form.focus == field;
            let value_style = if focused {
                theme::focused_field_style()
            } else {
                theme::normal_style()
            };
            Line::from(vec![
                Span::styled(
                    format!(" {:<12}", field.label()),
                    theme::field_label_style(),
                ),
                Span::styled(app.form.value(field).to_string(), value_style),
            ])
        })
        .collect();

    let title = if editing {
        " Tab next field, +/- category, Enter save, Esc cancel "
    } else {
        " New Expense (press a) "
    };

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if editing {
                theme::ACCENT
            } else {
                theme::OVERLAY
            }))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(form, area);

    // Terminal cursor sits at the end of the focused text field
    if editing && app.form.focus != Field::Category {
        let row = Field::all()
            .iter()
            .position(|&fld| fld == app.form.focus)
            .unwrap_or(0) as u16;
        let len = app.form.value(app.form.focus).chars().count() as u16;
        f.set_cursor_position((area.x + 14 + len, area.y + 1 + row));
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    if app.expenses.is_empty() {
        let msg = if !app.search_query.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No expenses matching '{}'", app.search_query),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to clear the search",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("No expenses recorded", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press a to add one, or :add from the command line",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Expenses (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Id", "Date", "Category", "Amount", "Description"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let is_cursor = i == app.expense_index;

            let style = if is_cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(expense.id_text()),
                Cell::from(expense.date.as_str()),
                Cell::from(expense.category.as_str()),
                Cell::from(Span::styled(
                    format_currency(expense.amount),
                    theme::amount_style(),
                )),
                Cell::from(truncate(&expense.description, 40)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(12),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(
                    " Expenses ({}) {}",
                    app.expenses.len(),
                    if !app.search_query.is_empty() {
                        format!("search: '{}' ", app.search_query)
                    } else {
                        String::new()
                    }
                ),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let badge_bg = match app.mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Entry | InputMode::Command => theme::GREEN,
        InputMode::Search => theme::YELLOW,
        InputMode::Confirm => theme::RED,
    };
    let badge = format!(" {} ", app.mode);
    let counts = format!(" {} expenses ", app.expense_count);
    let total = format!(" Total Expenses: {} ", format_currency(app.total));

    let hints = match app.mode {
        InputMode::Normal => " a add | D delete | /search | :cmds | ? help ",
        InputMode::Entry => " Tab next | +/- category | Enter save | Esc cancel ",
        InputMode::Search => " Enter keep | Esc clear ",
        InputMode::Command => " Enter run | Esc cancel ",
        InputMode::Confirm => " y confirm | any other key cancels ",
    };

    let taken = badge.len() + counts.len() + total.len() + hints.len();
    let filler = (area.width as usize).saturating_sub(taken);

    let line = Line::from(vec![
        Span::styled(
            badge,
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(badge_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(counts, theme::status_bar_style()),
        Span::styled(total, theme::total_style().bg(theme::SURFACE)),
        Span::styled(" ".repeat(filler), theme::status_bar_style()),
        Span::styled(hints, theme::status_bar_style()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut cursor_col = None;

    let line = match app.mode {
        InputMode::Command => {
            cursor_col = Some(1 + app.command_line.len() as u16);
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_line, theme::command_bar_style()),
            ])
        }
        InputMode::Search => {
            cursor_col = Some(1 + app.search_query.len() as u16);
            let mut spans = vec![
                Span::styled("/", Style::default().fg(theme::YELLOW)),
                Span::styled(&app.search_query, theme::command_bar_style()),
            ];
            if !app.search_query.is_empty() {
                spans.push(Span::styled(
                    format!("  ({} matches)", app.expenses.len()),
                    theme::dim_style(),
                ));
            }
            Line::from(spans)
        }
        InputMode::Confirm => Line::from(vec![
            Span::styled(app.confirm_message.as_str(), Style::default().fg(theme::YELLOW)),
            Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
        ]),
        InputMode::Normal | InputMode::Entry if app.status_message.is_empty() => {
            Line::from(Span::styled(
                " a add, D delete, / search, : commands, ? help",
                theme::dim_style(),
            ))
        }
        InputMode::Normal | InputMode::Entry => Line::from(Span::styled(
            app.status_message.as_str(),
            theme::command_bar_style(),
        )),
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::COMMAND_BG)),
        area,
    );
    if let Some(col) = cursor_col {
        f.set_cursor_position((area.x + col, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let mut body = vec![
        Line::from(Span::styled(
            " Outlay Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading(" Navigation"),
        entry("  j/k or Up/Down    Move cursor          g/G       Top/Bottom"),
        entry("  Ctrl-d / Ctrl-u   Half page            Ctrl-q    Quit"),
        Line::from(""),
        heading(" Actions"),
        entry("  a        Add expense                   D         Delete selected"),
        entry("  :        Command line                  /         Live search"),
        entry("  Enter    Save entry                    Esc       Cancel/back"),
        entry("  + / -    Cycle category (entry form)"),
        Line::from(""),
        heading(" Commands"),
    ];

    // Skip the short aliases; each description shows once
    let mut listed: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 2)
        .map(|(&name, cmd)| (name, cmd.description))
        .collect();
    listed.sort_by_key(|&(name, _)| name);
    let mut described = std::collections::HashSet::new();
    listed.retain(|&(_, desc)| described.insert(desc));
    for (name, desc) in listed {
        body.push(Line::from(Span::styled(
            format!("  :{name:<22} {desc}"),
            theme::normal_style(),
        )));
    }

    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        " Any key closes this window ",
        theme::dim_style(),
    )));

    let width = 72.min(area.width.saturating_sub(4));
    let height = (body.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(body).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .style(Style::default().bg(theme::HEADER_BG)),
        ),
        popup,
    );
}
