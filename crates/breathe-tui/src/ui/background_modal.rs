use breathe_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_background_modal(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    input: &str,
    error: Option<&str>,
) {
    let block = Block::new()
        .title("Backdrop image")
        .borders(Borders::ALL)
        .style(theme.text_style());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Input
            Constraint::Length(1),
            Constraint::Length(1), // Error, if any
            Constraint::Min(0),
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let prompt = Paragraph::new("Path to an image file:").style(theme.text_style());
    frame.render_widget(prompt, chunks[0]);

    let input_line = Line::from(vec![
        Span::styled("> ", theme.accent_style()),
        Span::styled(format!("{}_", input), theme.highlight_style()),
    ]);
    frame.render_widget(Paragraph::new(input_line), chunks[1]);

    if let Some(error) = error {
        let error_line = Paragraph::new(error).style(theme.warning_style());
        frame.render_widget(error_line, chunks[3]);
    }

    let instructions = Paragraph::new("[ENTER] Use image | [ESC] Keep current")
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Inactive));
    frame.render_widget(instructions, chunks[5]);
}
