use breathe_core::{
    settings::Settings,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::Span,
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    settings: &Settings,
    session_active: bool,
) {
    let title = Title::from(" Breathe v0.1.0 ").alignment(Alignment::Left);

    let (status_text, status_element) = if session_active {
        (
            format!("{} :: breathing with {}", settings.companion_name, settings.user_name),
            Element::Accent,
        )
    } else {
        (
            format!("{} :: here with {}", settings.companion_name, settings.user_name),
            Element::Info,
        )
    };

    let status_span = Span::styled(status_text, theme.ratatui_style(status_element));

    let header_paragraph = Paragraph::new(status_span)
        .style(theme.text_style())
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.text_style()),
        );

    frame.render_widget(header_paragraph, area);
}
