use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::App;
use super::form::{FieldState, Form, FormField};
use super::html::html_to_lines;
use super::tab::Tab;
use super::theme::Theme;
use super::widgets::{centered_rect, LoadingOverlay, ToastStack};

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2), // Header
                Constraint::Length(1), // Tab bar
                Constraint::Min(10),   // Main content
                Constraint::Length(1), // Stats bar
                Constraint::Length(1), // Key hints
            ]
            .as_ref(),
        )
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(chunks[2]);

    render_form_panel(frame, content[0], app);
    render_output_panel(frame, content[1], app);

    render_stats_bar(frame, chunks[3], app);
    render_key_hints(frame, chunks[4], app);

    if app.show_settings {
        render_settings_dialog(frame, app);
    }

    if let Some(message) = &app.loading {
        frame.render_widget(
            LoadingOverlay {
                message,
                theme: &app.theme,
            },
            frame.area(),
        );
    }

    frame.render_widget(
        ToastStack {
            toasts: &app.toasts,
            theme: &app.theme,
        },
        frame.area(),
    );
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let saved = app
        .last_saved
        .as_deref()
        .unwrap_or("never");

    let header_text = vec![Line::from(vec![
        Span::styled("🖋 ", Style::default().fg(app.theme.header)),
        Span::styled(
            "Quill",
            Style::default()
                .fg(app.theme.header)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Model: "),
        Span::styled(&app.settings.model, Style::default().fg(app.theme.success)),
        Span::raw(" | Saved: "),
        Span::styled(saved, Style::default().fg(app.theme.text_secondary)),
    ])];

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Render the tool tab bar
fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let all_tabs = Tab::all();
    let titles: Vec<Line> = all_tabs
        .iter()
        .map(|tab| Line::from(tab.display_name()))
        .collect();
    let selected = Tab::all()
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(app.theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(app.active_tab.color())
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the active tool's input form
fn render_form_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", app.active_tab.display_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_form(frame, inner, app.active_form(), &app.theme);
}

/// Render a form's fields into an area; usable for panels and dialogs
fn render_form(frame: &mut Frame, area: Rect, form: &Form, theme: &Theme) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|field| {
            if field.is_multiline() {
                Constraint::Min(4)
            } else {
                Constraint::Length(1)
            }
        })
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focused;
        render_field(frame, rows[index], field, focused, theme);
    }
}

fn render_field(frame: &mut Frame, area: Rect, field: &FormField, focused: bool, theme: &Theme) {
    let label_style = if focused {
        Style::default()
            .fg(theme.text_highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_secondary)
    };

    match &field.state {
        FieldState::Text(text) => {
            let mut spans = vec![
                Span::styled(format!("{}: ", field.label), label_style),
                Span::styled(text.clone(), Style::default().fg(theme.text_primary)),
            ];
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(theme.text_highlight)));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), area);
        }
        FieldState::Select { options, selected } => {
            let value = options[*selected].label;
            let shown = if focused {
                format!("◂ {} ▸", value)
            } else {
                value.to_string()
            };
            let spans = vec![
                Span::styled(format!("{}: ", field.label), label_style),
                Span::styled(shown, Style::default().fg(theme.text_primary)),
            ];
            frame.render_widget(Paragraph::new(Line::from(spans)), area);
        }
        FieldState::Multiline(textarea) => {
            let block = Block::default()
                .title(format!(" {} ", field.label))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused {
                    theme.border_focused
                } else {
                    theme.border
                }));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(textarea, inner);
        }
        FieldState::Toggle(on) => {
            let mark = if *on { "[x]" } else { "[ ]" };
            let spans = vec![
                Span::styled(format!("{} ", mark), Style::default().fg(theme.info)),
                Span::styled(field.label, label_style),
            ];
            frame.render_widget(Paragraph::new(Line::from(spans)), area);
        }
    }
}

/// Render the active tool's output region
fn render_output_panel(frame: &mut Frame, area: Rect, app: &App) {
    let region = app.regions.for_tab(app.active_tab);
    let lines = html_to_lines(region.html(), &app.theme);

    let output = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.output_scroll, 0))
        .block(
            Block::default()
                .title(" Output ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );

    frame.render_widget(output, area);
}

/// Render draft stats (word, character, paragraph counts)
fn render_stats_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("Words: ", Style::default().fg(app.theme.text_secondary)),
        Span::styled(
            app.stats.words.to_string(),
            Style::default().fg(app.theme.text_primary),
        ),
        Span::styled(" | Characters: ", Style::default().fg(app.theme.text_secondary)),
        Span::styled(
            app.stats.chars.to_string(),
            Style::default().fg(app.theme.text_primary),
        ),
        Span::styled(" | Paragraphs: ", Style::default().fg(app.theme.text_secondary)),
        Span::styled(
            app.stats.paragraphs.to_string(),
            Style::default().fg(app.theme.text_primary),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the key hint line
fn render_key_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.show_settings {
        "Ctrl+S save settings | Esc cancel"
    } else {
        "S-Tab tool | Tab field | C-g generate | C-s save | C-e export | C-y copy | C-l clear | C-o settings | C-c quit"
    };

    let line = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(app.theme.text_disabled),
    )));
    frame.render_widget(line, area);
}

/// Render the settings dialog over the main UI
fn render_settings_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 8, frame.area());

    // Blank the dialog area
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].reset();
        }
    }

    let block = Block::default()
        .title(" Settings ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.warning));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    for (index, field) in app.settings_form.fields.iter().enumerate().take(2) {
        render_field(
            frame,
            rows[index],
            field,
            index == app.settings_form.focused,
            &app.theme,
        );
    }

    let shortcuts = "[Ctrl+S] Save  [Esc] Cancel";
    let hint = Paragraph::new(Line::from(Span::styled(
        shortcuts,
        Style::default()
            .fg(app.theme.info)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, rows[3]);
}
