use crate::ui::app::AppMode;
use breathe_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, mode: AppMode) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));

    let inner_area = footer_block.inner(area);

    let content = match mode {
        AppMode::Breathing => Line::from(vec![
            Span::raw("[SPACE]"),
            Span::styled(" end session", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[Q]"),
            Span::styled("uit", theme.ratatui_style(Element::Inactive)),
        ])
        .alignment(Alignment::Center),
        AppMode::Home => Line::from(vec![
            Span::raw("[ENTER]"),
            Span::styled(" begin", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[S]"),
            Span::styled("ettings", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[M]"),
            Span::styled("usic", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[B]"),
            Span::styled("ackdrop", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[T]"),
            Span::styled("heme", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[Q]"),
            Span::styled("uit", theme.ratatui_style(Element::Inactive)),
        ])
        .alignment(Alignment::Center),
        // Modals carry their own instructions.
        _ => Line::from(Span::styled(
            "breathe in for four, hold for four, out for four, hold for four",
            theme.ratatui_style(Element::Inactive),
        ))
        .alignment(Alignment::Center),
    };

    let footer_paragraph = Paragraph::new(content).style(theme.text_style());

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}
