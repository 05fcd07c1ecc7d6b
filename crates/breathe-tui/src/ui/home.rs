use breathe_core::{
    music::Track,
    settings::Settings,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const CONTENT_HEIGHT: u16 = 10;

pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    settings: &Settings,
    current_track: &Track,
) {
    let top_padding = (area.height.saturating_sub(CONTENT_HEIGHT)) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_padding),
            Constraint::Length(2), // greeting
            Constraint::Length(1),
            Constraint::Length(2), // invitation
            Constraint::Length(1),
            Constraint::Length(1), // divider
            Constraint::Length(1),
            Constraint::Length(1), // begin hint
            Constraint::Length(1), // ambience line
            Constraint::Min(0),
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(format!("good to see you again, my {}!", settings.user_name)),
        Line::from(vec![
            Span::raw("your "),
            Span::styled(settings.companion_name.clone(), theme.accent_style()),
            Span::raw(" is right here..."),
        ]),
    ])
    .alignment(Alignment::Center)
    .style(theme.text_style());
    frame.render_widget(greeting, chunks[1]);

    let invitation = Paragraph::new(vec![
        Line::from("let's take a deep breath together"),
        Line::from("I'm here. I always will be."),
    ])
    .alignment(Alignment::Center)
    .style(theme.ratatui_style(Element::Title));
    frame.render_widget(invitation, chunks[3]);

    let divider = Paragraph::new("────────")
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Border));
    frame.render_widget(divider, chunks[5]);

    let begin = Paragraph::new("press [ENTER] to begin breathing together")
        .alignment(Alignment::Center)
        .style(theme.accent_style());
    frame.render_widget(begin, chunks[7]);

    let ambience = Paragraph::new(format!(
        "music: {}   backdrop: {}",
        current_track.name,
        describe_background(&settings.background)
    ))
    .alignment(Alignment::Center)
    .style(theme.ratatui_style(Element::Inactive));
    frame.render_widget(ambience, chunks[8]);
}

/// Short human label for the background source; data URIs are far too long
/// to show raw.
fn describe_background(background: &str) -> String {
    if background.starts_with("data:") {
        return "local image".to_string();
    }
    let trimmed = background.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(name) if !name.is_empty() && name.len() <= 40 => name.to_string(),
        _ => {
            let mut short: String = trimmed.chars().take(37).collect();
            if trimmed.chars().count() > 37 {
                short.push_str("...");
            }
            short
        }
    }
}
