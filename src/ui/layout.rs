use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Form card height: borders, two inputs, a spacer and the submit hint.
const FORM_HEIGHT: u16 = 6;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub form: Rect,
    pub status: Rect,
    pub table: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        form: chunks[1],
        status: chunks[2],
        table: chunks[3],
        footer: chunks[4],
    }
}
