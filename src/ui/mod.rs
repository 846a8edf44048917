//! Terminal rendering for the news feed.
//!
//! Layout, top to bottom:
//! - search box and region selector
//! - article list (or a loading / empty placeholder)
//! - status line: page position, error, key hints

mod feed;
mod helpers;
mod theme;

pub use helpers::truncate_to_width;
pub use theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view_state::FeedView;
use feed::render_feed;

const KEY_HINTS: &str = "type to search · enter search now · tab region · ←/→ page · ↑/↓ select · ctrl+o open · esc quit";

/// Render the whole screen from a view snapshot.
pub fn render(frame: &mut Frame, view: &FeedView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);
    render_feed(frame, chunks[1], view);
    render_footer(frame, chunks[2], view);
}

fn render_header(frame: &mut Frame, area: Rect, view: &FeedView<'_>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let mut search = vec![Span::styled(
        view.input.to_string(),
        Style::default().fg(COLOR_ACCENT),
    )];
    if view.input.is_empty() {
        search.push(Span::styled(
            "Search news...",
            Style::default().fg(COLOR_DIM),
        ));
    }
    if view.debounce_pending {
        search.push(Span::styled(" …", Style::default().fg(COLOR_DIM)));
    }
    let search = Paragraph::new(Line::from(search)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" Search "),
    );
    frame.render_widget(search, columns[0]);

    let region = Paragraph::new(Line::from(vec![
        Span::styled(
            view.region.label(),
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", view.region.code()),
            Style::default().fg(COLOR_DIM),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" Region "),
    );
    frame.render_widget(region, columns[1]);
}

/// Status line content: navigation, page label, optional error.
pub(crate) fn status_line(view: &FeedView<'_>) -> Line<'static> {
    let enabled = Style::default().fg(COLOR_ACCENT);
    let disabled = Style::default().fg(COLOR_DIM);

    let mut spans = vec![
        Span::styled(
            "< Previous",
            if view.has_previous_page() { enabled } else { disabled },
        ),
        Span::raw("  "),
        Span::raw(view.page_label()),
        Span::raw("  "),
        Span::styled(
            "Next >",
            if view.has_next_page() { enabled } else { disabled },
        ),
    ];

    if let Some(error) = view.error {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("✗ {}", error.message),
            Style::default().fg(COLOR_ERROR),
        ));
    }

    Line::from(spans)
}

fn render_footer(frame: &mut Frame, area: Rect, view: &FeedView<'_>) {
    let hints = Line::from(Span::styled(
        truncate_to_width(KEY_HINTS, area.width.saturating_sub(2) as usize),
        Style::default().fg(COLOR_DIM),
    ));
    let footer = Paragraph::new(vec![status_line(view), hints]).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(footer, area);
}
