//! Pure drawing: everything here reads `App` and writes widgets.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus};

const SPINNER: &str = "Loading todos...";
const EMPTY: &str = "No todos found.";

pub fn render(frame: &mut Frame, app: &App) {
    let [header, form, error, table, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new("Todo Manager".bold()), header);
    render_form(frame, app, form);
    if let Some(message) = app.controller.error() {
        frame.render_widget(Paragraph::new(message).fg(Color::Red), error);
    }
    render_table(frame, app, table);
    render_footer(frame, app, footer);

    if app.controller.confirm_delete().is_some() {
        render_delete_dialog(frame, app);
    }
    if let Some(alert) = &app.alert {
        render_alert(frame, alert);
    }
}

fn focus_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn field_line<'a>(
    app: &App,
    focus: Focus,
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
) -> Line<'a> {
    let value = if value.is_empty() && app.focus != focus {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else if app.focus == focus {
        Span::raw(format!("{value}_"))
    } else {
        Span::raw(value)
    };
    Line::from(vec![Span::styled(label, focus_style(app, focus)), value])
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let controller = &app.controller;
    let form = controller.form();
    let title = match controller.editing_id() {
        Some(id) => format!(" Edit todo #{id} "),
        None => " New todo ".to_string(),
    };

    let radio = |on: bool| if on { "(•)" } else { "( )" };
    let status = Line::from(vec![
        Span::styled("Status:      ", focus_style(app, Focus::Completed)),
        Span::raw(format!("{} Done  {} Not done", radio(form.completed), radio(!form.completed))),
    ]);

    let action = match (controller.is_editing(), controller.is_saving()) {
        (true, true) => "Updating...",
        (true, false) => "Update Todo",
        (false, true) => "Saving...",
        (false, false) => "Add Todo",
    };
    let mut buttons = vec![Span::styled(
        format!("[ {action} ]"),
        Style::default().fg(Color::Cyan),
    )];
    if controller.is_editing() {
        buttons.push(Span::raw("  "));
        buttons.push(Span::raw("[ Cancel ]"));
    }

    let lines = vec![
        field_line(app, Focus::Title, "Title:       ", &form.title, "Buy milk"),
        field_line(app, Focus::Description, "Description: ", &form.description, "2L"),
        status,
        Line::default(),
        Line::from(buttons),
    ];
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(app, Focus::Table))
        .title(" Todos ");
    let todos = app.controller.todos();

    if app.controller.is_loading() {
        let spinner = Paragraph::new(SPINNER).centered().block(block);
        frame.render_widget(spinner, area);
        return;
    }

    let header = Row::new(["Title", "Description", "Status"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Percentage(35),
        Constraint::Percentage(45),
        Constraint::Percentage(20),
    ];

    if todos.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(Table::new(Vec::<Row>::new(), widths).header(header).block(block), area);
        let [_, message] = Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(inner);
        frame.render_widget(Paragraph::new(EMPTY).centered(), message);
        return;
    }

    let rows = todos.iter().map(|todo| {
        Row::new([
            Cell::from(todo.title.as_str()),
            Cell::from(todo.description.as_str()),
            Cell::from(if todo.completed { "Done" } else { "Not done" }),
        ])
    });
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if app.focus == Focus::Table {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Table => "↑/↓ select  e edit  d delete  a add  q quit",
        Focus::Completed => "space toggle  enter save  tab next  esc cancel edit",
        _ => "type to edit  enter save  tab next  esc cancel edit  ctrl-c quit",
    };
    frame.render_widget(Paragraph::new(hints).fg(Color::DarkGray), area);
}

fn render_delete_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.area(), 48, 6);
    let delete = if app.controller.is_deleting() {
        "Deleting..."
    } else {
        "[y] Delete"
    };
    let lines = vec![
        Line::from("Are you sure you want to delete this item?"),
        Line::default(),
        Line::from(vec![
            Span::raw("[n] Cancel   "),
            Span::styled(delete, Style::default().fg(Color::Red)),
        ]),
    ];
    let block = Block::default().borders(Borders::ALL).title(" Delete Todo ");
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(frame.area(), 40, 5);
    let lines = vec![
        Line::from(message),
        Line::from("press any key".fg(Color::DarkGray)),
    ];
    let block = Block::default().borders(Borders::ALL).title(" Notice ");
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).centered().block(block), area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
