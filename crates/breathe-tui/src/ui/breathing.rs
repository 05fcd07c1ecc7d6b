use breathe_core::{
    clock::{format_elapsed, BreathClock, BreathPhase},
    settings::Settings,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

const DOT: &str = "●";

/// Cell on the square's border for a cycle position, `0.0..1.0`.
///
/// One quarter per side, clockwise from the top-left corner: top while
/// inhaling, right while holding, bottom while exhaling, left while holding
/// again. The label and the dot both derive from the same progress value.
fn dot_cell(progress: f64, width: u16, height: u16) -> (u16, u16) {
    let w = (width - 1) as f64;
    let h = (height - 1) as f64;
    let quarter = (progress * 4.0).floor().min(3.0);
    let f = progress * 4.0 - quarter;
    let (x, y) = match quarter as u32 {
        0 => (f * w, 0.0),
        1 => (w, f * h),
        2 => ((1.0 - f) * w, h),
        _ => (0.0, (1.0 - f) * h),
    };
    (x.round() as u16, y.round() as u16)
}

pub fn render_breathing(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    clock: &BreathClock,
    now: u64,
    settings: &Settings,
) {
    let phase = clock.phase(now);
    let progress = clock.cycle_progress(now);
    let elapsed = format_elapsed(clock.elapsed_secs(now));

    // Square track, sized to the terminal. Cells are about twice as tall
    // as they are wide, hence the 2:1 ratio.
    let box_height = area.height.saturating_sub(8).min(17).max(5);
    let box_width = area.width.saturating_sub(14).min(box_height * 2 + 7) | 1;

    if box_width < 9 || area.height < 9 {
        // Too cramped for the track; fall back to the text cue alone.
        let fallback = Paragraph::new(format!("{}  {}", phase.label(), elapsed))
            .alignment(Alignment::Center)
            .style(theme.accent_style());
        frame.render_widget(fallback, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // greeting
            Constraint::Length(1), // reassurance
            Constraint::Min(0),    // track + side labels
            Constraint::Length(1), // bottom breathing-room
        ])
        .split(area);

    let greeting = Paragraph::new(format!("my {}", settings.user_name))
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Inactive));
    frame.render_widget(greeting, chunks[0]);

    let reassurance = Paragraph::new("I'm here. I always am.")
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Info));
    frame.render_widget(reassurance, chunks[1]);

    let canvas = chunks[2];
    let box_area = Rect::new(
        canvas.x + (canvas.width.saturating_sub(box_width)) / 2,
        canvas.y + (canvas.height.saturating_sub(box_height)) / 2,
        box_width.min(canvas.width),
        box_height.min(canvas.height),
    );

    let track = Block::new()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));
    frame.render_widget(track, box_area);

    render_side_labels(frame, box_area, theme, phase);

    // Center status: the textual cue plus the elapsed counter.
    let inner_mid = box_area.y + box_area.height / 2;
    if box_area.width > 4 {
        let label_area = Rect::new(box_area.x + 1, inner_mid - 1, box_area.width - 2, 1);
        let label = Paragraph::new(phase.label())
            .alignment(Alignment::Center)
            .style(theme.accent_style());
        frame.render_widget(label, label_area);

        let counter_area = Rect::new(box_area.x + 1, inner_mid + 1, box_area.width - 2, 1);
        let counter = Paragraph::new(elapsed)
            .alignment(Alignment::Center)
            .style(theme.ratatui_style(Element::Inactive));
        frame.render_widget(counter, counter_area);
    }

    // The moving dot, one quarter per side.
    let (dx, dy) = dot_cell(progress, box_area.width, box_area.height);
    let dot_area = Rect::new(box_area.x + dx, box_area.y + dy, 1, 1);
    frame.render_widget(
        Paragraph::new(DOT).style(theme.accent_style()),
        dot_area,
    );
}

/// Phase labels around the track; the side the dot is on lights up.
fn render_side_labels(frame: &mut Frame, box_area: Rect, theme: &Theme, phase: BreathPhase) {
    let lit = |active: bool| {
        if active {
            theme.accent_style()
        } else {
            theme.ratatui_style(Element::Inactive)
        }
    };

    if box_area.y > 0 {
        let above = Rect::new(box_area.x, box_area.y - 1, box_area.width, 1);
        let label = Paragraph::new("breathe in")
            .alignment(Alignment::Center)
            .style(lit(phase == BreathPhase::Inhale));
        frame.render_widget(label, above);
    }

    let below = Rect::new(box_area.x, box_area.y + box_area.height, box_area.width, 1);
    let label = Paragraph::new("breathe out")
        .alignment(Alignment::Center)
        .style(lit(phase == BreathPhase::Exhale));
    frame.render_widget(label, below);

    let mid_y = box_area.y + box_area.height / 2;
    if box_area.x >= 5 {
        let left = Rect::new(box_area.x - 5, mid_y, 4, 1);
        let label = Paragraph::new("hold").style(lit(phase == BreathPhase::HoldOut));
        frame.render_widget(label, left);
    }
    let right = Rect::new(box_area.x + box_area.width + 1, mid_y, 4, 1);
    let label = Paragraph::new("hold").style(lit(phase == BreathPhase::HoldIn));
    frame.render_widget(label, right);
}
