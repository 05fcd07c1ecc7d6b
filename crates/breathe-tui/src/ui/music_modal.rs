use breathe_core::{
    music::Track,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn render_music_modal(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    tracks: &[Track],
    cursor: usize,
    current: usize,
) {
    let block = Block::new()
        .title("Background sound")
        .borders(Borders::ALL)
        .style(theme.text_style());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),    // Track list
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let style = if i == cursor {
                theme.highlight_style()
            } else {
                theme.text_style()
            };
            // The playing track keeps its marker while the cursor moves.
            let marker = if i == current { "●" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{:<24}", track.name), style.add_modifier(Modifier::BOLD)),
                Span::styled(marker, theme.accent_style()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).style(theme.text_style());
    frame.render_widget(list, chunks[0]);

    let instructions = Paragraph::new("[↑↓] Navigate | [ENTER] Select | [ESC] Close")
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Inactive));
    frame.render_widget(instructions, chunks[1]);
}
