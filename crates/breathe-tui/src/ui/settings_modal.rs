use crate::ui::app::{AppMode, SettingsSelection};
use breathe_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[allow(clippy::too_many_arguments)]
pub fn render_settings_modal(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    mode: AppMode,
    selection: SettingsSelection,
    draft_user: &str,
    draft_companion: &str,
    edit_buffer: &str,
) {
    let block = Block::new()
        .title("Create a connection")
        .borders(Borders::ALL)
        .style(theme.warning_style());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if mode == AppMode::Connecting {
        render_connecting(frame, inner_area, theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Your name
            Constraint::Length(1),
            Constraint::Length(1), // Companion name
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Action text
        ])
        .split(inner_area);

    // Helper to create a setting line
    let create_setting_line = |label: &str, value: &str, is_selected: bool, is_editing: bool| {
        let value_style = if is_selected {
            theme.highlight_style()
        } else {
            theme.text_style()
        };

        let display_value = if is_editing {
            format!("{}_", value) // Add cursor indicator when editing
        } else {
            value.to_owned()
        };

        Line::from(vec![
            Span::styled(
                format!("{:<18}", label),
                theme.warning_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_value, value_style),
        ])
    };

    let editing_name = mode == AppMode::EditingName;
    let user_value = if editing_name { edit_buffer } else { draft_user };
    let user_line = create_setting_line(
        "Your name:",
        user_value,
        selection == SettingsSelection::UserName,
        editing_name,
    );
    frame.render_widget(Paragraph::new(user_line), chunks[0]);

    let editing_companion = mode == AppMode::EditingCompanion;
    let companion_value = if editing_companion {
        edit_buffer
    } else {
        draft_companion
    };
    let companion_label = if draft_companion.is_empty() {
        "Their name:".to_string()
    } else {
        format!("{}'s name:", draft_companion)
    };
    let companion_line = create_setting_line(
        &companion_label,
        companion_value,
        selection == SettingsSelection::CompanionName,
        editing_companion,
    );
    frame.render_widget(Paragraph::new(companion_line), chunks[2]);

    let action_text = match mode {
        AppMode::EditingName | AppMode::EditingCompanion => "[ENTER] Keep | [ESC] Cancel",
        _ => "[↑↓] Navigate | [ENTER] Edit/Confirm | [ESC] Discard",
    };
    let action_style = if selection == SettingsSelection::Confirm {
        theme.highlight_style()
    } else {
        theme.ratatui_style(Element::Inactive)
    };
    let action_paragraph = Paragraph::new(action_text)
        .alignment(Alignment::Center)
        .style(action_style);
    frame.render_widget(action_paragraph, chunks[4]);
}

/// The pacing transition after confirming: a small glowing orb and a quiet
/// message, nothing to interact with.
fn render_connecting(frame: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // orb
            Constraint::Length(1),
            Constraint::Length(1), // message
            Constraint::Min(0),
        ])
        .split(area);

    let orb = Paragraph::new("( ◉ )")
        .alignment(Alignment::Center)
        .style(theme.accent_style());
    frame.render_widget(orb, chunks[1]);

    let message = Paragraph::new("c o n n e c t i n g . . .")
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Info));
    frame.render_widget(message, chunks[3]);
}
