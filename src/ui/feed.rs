//! Article list rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::helpers::{image_marker, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_LOADING, COLOR_SELECTED_BG,
};
use crate::models::Article;
use crate::view_state::FeedView;

/// Three display lines for one article: title, description, URL.
pub(super) fn article_item(article: &Article, width: usize) -> ListItem<'static> {
    let marker = image_marker(article.has_image());
    let source = format!(" {} ", article.source_name);
    let title_width = width.saturating_sub(marker.len() + source.len() + 2);

    let title = Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(COLOR_DIM)),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(&article.title, title_width),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(source, Style::default().fg(COLOR_ACTIVE)),
    ]);
    let description = Line::from(Span::raw(truncate_to_width(
        &article.description,
        width.saturating_sub(2),
    )))
    .style(Style::default());
    let url = Line::from(Span::styled(
        truncate_to_width(&article.url, width.saturating_sub(2)),
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::UNDERLINED),
    ));

    ListItem::new(vec![title, description, url])
}

pub(super) fn render_feed(frame: &mut Frame, area: Rect, view: &FeedView<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" News Feed ");

    if view.loading {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(COLOR_LOADING),
        )))
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if view.articles.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No articles found.",
            Style::default().fg(COLOR_DIM),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = view
        .articles
        .iter()
        .map(|article| article_item(article, width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG));

    let mut state = ListState::default();
    state.select(view.selected);
    frame.render_stateful_widget(list, area, &mut state);
}
