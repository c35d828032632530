use crate::export::{cost_breakdown, format_total, group_amount, work_details};
use crate::ui::app::{App, Mode, Status};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table},
    Frame,
};

// Palette borrowed from the printed quotation
const BRAND_DARK: Color = Color::Rgb(0x3C, 0x3C, 0x3C);
const BRAND_BROWN: Color = Color::Rgb(0x8B, 0x73, 0x55);
const BRAND_GREEN: Color = Color::Rgb(0x80, 0x9C, 0x80);
const BRAND_SELECT_BG: Color = Color::Rgb(0xF5, 0xF0, 0xE6);
const BRAND_MUTED: Color = Color::Rgb(0x8A, 0x8A, 0x8A);
const BRAND_ERROR: Color = Color::Rgb(0xB0, 0x3A, 0x2E);

const HEADER_STYLE: Style = Style::new().fg(BRAND_BROWN).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const SECTION_STYLE: Style = Style::new().fg(BRAND_GREEN).add_modifier(Modifier::ITALIC);

pub fn draw_form(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Form + preview
        Constraint::Length(3), // Total
        Constraint::Length(3), // Footer / status
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);

    let main = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_fields(frame, main[0], app);
    draw_preview(frame, main[1], app);

    draw_total(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let client = &app.form.quotation.client.client_name;
    let client = if client.trim().is_empty() {
        "new client"
    } else {
        client.as_str()
    };
    let title = format!(
        " {} | Quotation for {} | {} ",
        app.config.company.name,
        client,
        app.form.quotation.bhk_type().label()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let visible_rows = (area.height as usize).saturating_sub(2);

    // Section headings take a line each; only field lines carry a row index
    let mut lines: Vec<(Option<usize>, Row)> = Vec::new();
    let mut last_section = None;
    for (i, row) in app.rows.iter().enumerate() {
        if last_section != Some(row.section()) {
            lines.push((
                None,
                Row::new(vec![format!("── {} ──", row.section()), String::new()])
                    .style(SECTION_STYLE),
            ));
            last_section = Some(row.section());
        }

        let is_selected = i == app.selected;
        let value = if is_selected && app.mode == Mode::Editing {
            app.input.clone()
        } else {
            app.row_value(*row)
        };
        let style = if is_selected {
            SELECTED_STYLE
        } else {
            Style::default()
        };
        lines.push((
            Some(i),
            Row::new(vec![format!("  {}", row.label()), value]).style(style),
        ));
    }

    let selected_line = lines
        .iter()
        .position(|(i, _)| *i == Some(app.selected))
        .unwrap_or(0);
    let scroll_offset = if selected_line >= visible_rows {
        selected_line - visible_rows + 1
    } else {
        0
    };

    let rows: Vec<Row> = lines
        .into_iter()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(_, row)| row)
        .collect();

    let widths = [Constraint::Percentage(55), Constraint::Percentage(45)];
    let title = if app.mode == Mode::Editing {
        " Editing (Enter save, Esc cancel) "
    } else {
        " Quotation "
    };
    let border_style = if app.mode == Mode::Editing {
        Style::default().fg(BRAND_BROWN)
    } else {
        Style::default()
    };
    let table = Table::new(rows, widths).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(table, area);

    if app.mode == Mode::Editing {
        // Value column starts after the label column (55%) inside the border
        let value_x = area.x + 1 + (area.width.saturating_sub(2)) * 55 / 100 + 1;
        let line_y = area.y + 1 + (selected_line - scroll_offset) as u16;
        let cursor_x = value_x + app.cursor_position as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(area.x + area.width.saturating_sub(2)),
            line_y,
        ));
    }
}

fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut items: Vec<ListItem> = Vec::new();
    for section in work_details(&app.form.quotation) {
        items.push(ListItem::new(Line::from(Span::styled(
            section.name,
            HEADER_STYLE,
        ))));
        for item in section.items {
            items.push(ListItem::new(format!("  • {item}")));
        }
    }
    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            "No items selected",
            Style::default().fg(BRAND_MUTED),
        )));
    }
    let details = List::new(items).block(
        Block::default()
            .title(" Work Details ")
            .borders(Borders::ALL),
    );
    frame.render_widget(details, chunks[0]);

    let grouping = app.config.document.grouping;
    let rows: Vec<Row> = cost_breakdown(&app.form.quotation)
        .into_iter()
        .map(|line| {
            Row::new(vec![
                line.line,
                format!("{} × {}", line.quantity, line.rate),
                group_amount(line.amount, grouping),
            ])
        })
        .collect();
    let header = Row::new(vec!["Line", "Qty × Rate", "Amount"]).style(HEADER_STYLE);
    let widths = [
        Constraint::Percentage(35),
        Constraint::Percentage(35),
        Constraint::Percentage(30),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Cost Breakdown ")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, chunks[1]);
}

fn draw_total(frame: &mut Frame, area: Rect, app: &App) {
    let document = &app.config.document;
    let total = format_total(
        app.form.total_cost(),
        &document.currency_prefix,
        document.grouping,
    );

    let line = Line::from(vec![
        Span::styled(" TOTAL PROJECT COST  ", HEADER_STYLE),
        Span::styled(
            total,
            Style::default()
                .fg(BRAND_DARK)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_BROWN)),
    );
    frame.render_widget(widget, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match &app.status {
        Some(Status::Info(message)) => (format!(" {message} "), Style::default().fg(BRAND_GREEN)),
        Some(Status::Error(message)) => (format!(" {message} "), Style::default().fg(BRAND_ERROR)),
        None => {
            let help = match app.mode {
                Mode::Navigate => {
                    " ↑↓ Field | Enter Edit/Toggle | ←→ BHK/Bedroom | Ctrl+E PDF | F6 JSON | F7 CSV | q Quit "
                }
                Mode::Editing => " Type value | Enter Save | Esc Cancel ",
            };
            (help.to_string(), Style::default().fg(BRAND_MUTED))
        }
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
