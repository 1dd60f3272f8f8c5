use crate::api::PostApi;
use crate::store::PostsSnapshot;
use crate::ui::app::{App, Focus};
use crate::ui::editor::{EditorState, Field};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_INFO,
    WARNING,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const CURSOR: &str = "▏";

pub fn draw<A: PostApi>(frame: &mut Frame<'_>, app: &App<A>) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(), regions.header);
    render_form(frame, regions.form, app.editor(), app.focus() == Focus::Form);

    if let Some(line) = status_line(app.snapshot()) {
        frame.render_widget(Paragraph::new(line), regions.status);
    }

    render_table(frame, regions.table, app);

    let footer = Footer::new();
    frame.render_widget(footer.widget(regions.footer, app.focus()), regions.footer);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, editor: &EditorState, focused: bool) {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(format!(" {} ", editor.heading()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let draft = editor.draft();
    let active = focused.then(|| editor.field());
    let submit_color = if editor.is_editing() { WARNING } else { ACCENT };

    let lines = vec![
        field_line("Title", &draft.title, "Enter post title", active == Some(Field::Title)),
        field_line(
            "Description",
            &draft.description,
            "Enter post description",
            active == Some(Field::Description),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [Enter] ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                editor.submit_label(),
                Style::default()
                    .fg(submit_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One labelled input row. Empty inputs show their placeholder.
fn field_line(label: &str, value: &str, placeholder: &str, active: bool) -> Line<'static> {
    let label_style = if active {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };

    let mut spans = vec![Span::styled(format!("  {:<12} ", label), label_style)];
    if value.is_empty() && !active {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    } else {
        // Multi-line descriptions are flattened for the single-row input.
        spans.push(Span::styled(
            value.replace('\n', " "),
            Style::default().fg(HEADER_TEXT),
        ));
    }
    if active {
        spans.push(Span::styled(CURSOR, Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

/// "Loading..." while a request is pending, the error after a failure.
fn status_line(snapshot: &PostsSnapshot) -> Option<Line<'static>> {
    if snapshot.is_loading() {
        return Some(Line::from(Span::styled(
            "  Loading...",
            Style::default().fg(STATUS_INFO),
        )));
    }
    snapshot.error().map(|message| {
        Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(STATUS_ERROR),
        ))
    })
}

fn render_table<A: PostApi>(frame: &mut Frame<'_>, area: Rect, app: &App<A>) {
    let focused = app.focus() == Focus::Table;
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let posts = &app.snapshot().posts;

    let header = Row::new(vec![Cell::from("Title"), Cell::from("Description")]).style(
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = posts.iter().map(|post| {
        Row::new(vec![
            Cell::from(post.title.clone()),
            Cell::from(post.description.replace('\n', " ")),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });

    let table = Table::new(rows, [Constraint::Percentage(35), Constraint::Percentage(65)])
        .header(header)
        .block(
            Block::default()
                .title(format!(" Posts ({}) ", posts.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut state = TableState::default();
    if focused && !posts.is_empty() {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
