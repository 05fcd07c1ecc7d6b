use super::{
    background_modal::render_background_modal, breathing::render_breathing,
    footer::render_footer, header::render_header, home::render_home,
    music_modal::render_music_modal, settings_modal::render_settings_modal,
};
use anyhow::Result;
use breathe_core::{
    background,
    clock::{self, BreathClock},
    music::{self, AudioSink, Track},
    settings::{AppConfig, Settings},
    theme::Theme,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Layout, Rect, Terminal},
    widgets::{Block, Borders, Clear},
};
use std::io::Stdout;

/// Draw/input cadence. Short enough that the phase label stays in step
/// with the moving dot between redraws.
const POLL_MS: u64 = 50;

/// Length of the "connecting" transition after confirming settings.
/// A pacing beat, not a real wait.
const CONNECT_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Home,
    Breathing,
    Settings,
    EditingName,
    EditingCompanion,
    Connecting,
    Music,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSelection {
    #[default]
    UserName,
    CompanionName,
    Confirm,
}

impl SettingsSelection {
    pub fn next(&self) -> Self {
        match self {
            Self::UserName => Self::CompanionName,
            Self::CompanionName => Self::Confirm,
            Self::Confirm => Self::UserName, // Loop back to the top
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::UserName => Self::Confirm, // Loop back to the bottom
            Self::CompanionName => Self::UserName,
            Self::Confirm => Self::CompanionName,
        }
    }
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    mode: AppMode,
    settings: Settings,
    /// Active breathing session; `None` means no session, and dropping it
    /// is the cancellation.
    session: Option<BreathClock>,
    settings_selection: SettingsSelection,
    draft_user: String,
    draft_companion: String,
    edit_buffer: String,
    connecting_until: Option<u64>,
    playlist: Vec<Track>,
    music_index: usize,
    music_cursor: usize,
    sink: Box<dyn AudioSink>,
    background_input: String,
    background_error: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, sink: Box<dyn AudioSink>) -> Self {
        let theme = Theme::new(config.theme);
        let settings = Settings::from_config(&config);
        Self {
            should_quit: false,
            theme,
            mode: AppMode::Home,
            settings,
            session: None,
            settings_selection: SettingsSelection::default(),
            draft_user: String::new(),
            draft_companion: String::new(),
            edit_buffer: String::new(),
            connecting_until: None,
            playlist: music::playlist(),
            music_index: 0,
            music_cursor: 0,
            sink,
            background_input: String::new(),
            background_error: None,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            self.tick(clock::now_ms());
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Advance time-driven transitions. Called once per loop iteration.
    fn tick(&mut self, now: u64) {
        if self.mode == AppMode::Connecting {
            if let Some(deadline) = self.connecting_until {
                if now >= deadline {
                    self.settings.user_name = self.draft_user.clone();
                    self.settings.companion_name = self.draft_companion.clone();
                    self.connecting_until = None;
                    self.mode = AppMode::Home;
                    tracing::info!(
                        "settings saved: {} & {}",
                        self.settings.user_name,
                        self.settings.companion_name
                    );
                }
            }
        }
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let now = clock::now_ms();
        terminal.draw(|frame| {
            let main_layout = Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(breathe_core::theme::Element::Background));

            let area = frame.size();
            frame.render_widget(main_layout, area);

            let app_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            render_header(
                frame,
                app_chunks[0],
                &self.theme,
                &self.settings,
                self.session.is_some(),
            );
            render_footer(frame, app_chunks[2], &self.theme, self.mode);

            match (self.mode, self.session) {
                (AppMode::Breathing, Some(session)) => {
                    render_breathing(
                        frame,
                        app_chunks[1],
                        &self.theme,
                        &session,
                        now,
                        &self.settings,
                    );
                }
                _ => {
                    let track = &self.playlist[self.music_index];
                    render_home(frame, app_chunks[1], &self.theme, &self.settings, track);
                }
            }

            if let Some(modal_area) = self.modal_area(area) {
                frame.render_widget(Clear, modal_area); // clears the background
                match self.mode {
                    AppMode::Settings
                    | AppMode::EditingName
                    | AppMode::EditingCompanion
                    | AppMode::Connecting => {
                        render_settings_modal(
                            frame,
                            modal_area,
                            &self.theme,
                            self.mode,
                            self.settings_selection,
                            &self.draft_user,
                            &self.draft_companion,
                            &self.edit_buffer,
                        );
                    }
                    AppMode::Music => {
                        render_music_modal(
                            frame,
                            modal_area,
                            &self.theme,
                            &self.playlist,
                            self.music_cursor,
                            self.music_index,
                        );
                    }
                    AppMode::Background => {
                        render_background_modal(
                            frame,
                            modal_area,
                            &self.theme,
                            &self.background_input,
                            self.background_error.as_deref(),
                        );
                    }
                    _ => {}
                }
            }
        })?;
        Ok(())
    }

    /// Modal size: centered, most of the terminal but clamped to sane bounds.
    fn modal_area(&self, size: Rect) -> Option<Rect> {
        if matches!(self.mode, AppMode::Home | AppMode::Breathing) {
            return None;
        }
        let modal_width = (((size.width as f32) * 0.7).round() as u16)
            .clamp(34, 64)
            .min(size.width);
        let modal_height = (((size.height as f32) * 0.5).round() as u16)
            .clamp(10, 18)
            .min(size.height);
        Some(Rect::new(
            (size.width.saturating_sub(modal_width)) / 2,
            (size.height.saturating_sub(modal_height)) / 2,
            modal_width,
            modal_height,
        ))
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code, clock::now_ms());
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, now: u64) {
        match self.mode {
            AppMode::Home => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ') => self.start_session(now),
                KeyCode::Char('s') => self.open_settings(),
                KeyCode::Char('m') => {
                    self.music_cursor = self.music_index;
                    self.mode = AppMode::Music;
                }
                KeyCode::Char('b') => {
                    self.background_input.clear();
                    self.background_error = None;
                    self.mode = AppMode::Background;
                }
                KeyCode::Char('t') => self.theme.toggle(),
                _ => {}
            },
            AppMode::Breathing => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => self.stop_session(now),
                _ => {}
            },
            AppMode::Settings => match code {
                KeyCode::Esc => {
                    // Cancel discards the drafts wholesale.
                    self.mode = AppMode::Home;
                }
                KeyCode::Up => {
                    self.settings_selection = self.settings_selection.previous();
                }
                KeyCode::Down => {
                    self.settings_selection = self.settings_selection.next();
                }
                KeyCode::Enter => match self.settings_selection {
                    SettingsSelection::UserName => {
                        self.edit_buffer = self.draft_user.clone();
                        self.mode = AppMode::EditingName;
                    }
                    SettingsSelection::CompanionName => {
                        self.edit_buffer = self.draft_companion.clone();
                        self.mode = AppMode::EditingCompanion;
                    }
                    SettingsSelection::Confirm => {
                        self.connecting_until = Some(now + CONNECT_MS);
                        self.mode = AppMode::Connecting;
                    }
                },
                _ => {}
            },
            AppMode::EditingName | AppMode::EditingCompanion => match code {
                KeyCode::Char(c) => self.edit_buffer.push(c),
                KeyCode::Backspace => {
                    self.edit_buffer.pop();
                }
                KeyCode::Enter => {
                    let value = std::mem::take(&mut self.edit_buffer);
                    if self.mode == AppMode::EditingName {
                        self.draft_user = value;
                    } else {
                        self.draft_companion = value;
                    }
                    self.mode = AppMode::Settings;
                }
                KeyCode::Esc => {
                    self.edit_buffer.clear();
                    self.mode = AppMode::Settings;
                }
                _ => {}
            },
            // The pacing transition cannot be cancelled.
            AppMode::Connecting => {}
            AppMode::Music => match code {
                KeyCode::Esc => self.mode = AppMode::Home,
                KeyCode::Up => {
                    self.music_cursor = if self.music_cursor == 0 {
                        self.playlist.len() - 1
                    } else {
                        self.music_cursor - 1
                    };
                }
                KeyCode::Down => {
                    self.music_cursor = (self.music_cursor + 1) % self.playlist.len();
                }
                KeyCode::Enter => {
                    self.music_index = self.music_cursor;
                    music::apply_selection(self.sink.as_mut(), &self.playlist[self.music_index]);
                    self.mode = AppMode::Home;
                }
                _ => {}
            },
            AppMode::Background => match code {
                KeyCode::Esc => self.mode = AppMode::Home,
                KeyCode::Char(c) => self.background_input.push(c),
                KeyCode::Backspace => {
                    self.background_input.pop();
                }
                KeyCode::Enter => match background::load_data_uri(&self.background_input) {
                    Ok(uri) => {
                        self.settings.background = uri;
                        self.mode = AppMode::Home;
                    }
                    Err(e) => {
                        // Keep the previous background, tell the user why.
                        self.background_error = Some(e.to_string());
                        tracing::warn!("background not updated: {e}");
                    }
                },
                _ => {}
            },
        }
    }

    fn start_session(&mut self, now: u64) {
        self.session = Some(BreathClock::start_at(now));
        self.mode = AppMode::Breathing;
        tracing::info!("breathing session started");
    }

    fn stop_session(&mut self, now: u64) {
        if let Some(session) = self.session.take() {
            tracing::info!(
                "breathing session ended after {}",
                clock::format_elapsed(session.elapsed_secs(now))
            );
        }
        self.mode = AppMode::Home;
    }

    fn open_settings(&mut self) {
        self.draft_user = self.settings.user_name.clone();
        self.draft_companion = self.settings.companion_name.clone();
        self.settings_selection = SettingsSelection::default();
        self.mode = AppMode::Settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breathe_core::music::PlaybackError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct SinkState {
        playing: Option<String>,
        stops: usize,
    }

    struct SharedSink(Rc<RefCell<SinkState>>);

    impl AudioSink for SharedSink {
        fn play_looping(&mut self, track: &Track) -> Result<(), PlaybackError> {
            self.0.borrow_mut().playing = Some(track.url.to_string());
            Ok(())
        }

        fn stop(&mut self) {
            let mut state = self.0.borrow_mut();
            state.playing = None;
            state.stops += 1;
        }
    }

    fn test_app() -> (App, Rc<RefCell<SinkState>>) {
        let state = Rc::new(RefCell::new(SinkState::default()));
        let app = App::new(AppConfig::default(), Box::new(SharedSink(Rc::clone(&state))));
        (app, state)
    }

    fn type_text(app: &mut App, text: &str, now: u64) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), now);
        }
    }

    fn clear_field(app: &mut App, now: u64) {
        while !app.edit_buffer.is_empty() {
            app.handle_key(KeyCode::Backspace, now);
        }
    }

    #[test]
    fn session_starts_and_stops_cleanly() {
        let (mut app, _) = test_app();
        app.handle_key(KeyCode::Enter, 1_000);
        assert_eq!(app.mode, AppMode::Breathing);
        let session = app.session.expect("session should be running");
        assert_eq!(session.elapsed_secs(3_000), 2);

        app.handle_key(KeyCode::Esc, 9_000);
        assert_eq!(app.mode, AppMode::Home);
        // The clock is gone with the session; nothing can tick after stop.
        assert!(app.session.is_none());
    }

    #[test]
    fn settings_confirm_commits_after_the_connecting_pause() {
        let (mut app, _) = test_app();
        let t = 10_000;

        app.handle_key(KeyCode::Char('s'), t);
        assert_eq!(app.mode, AppMode::Settings);
        // Drafts are pre-filled from the stored record.
        assert_eq!(app.draft_user, "friend");
        assert_eq!(app.draft_companion, "Aria");

        // Replace the user name with "A".
        app.handle_key(KeyCode::Enter, t);
        clear_field(&mut app, t);
        type_text(&mut app, "A", t);
        app.handle_key(KeyCode::Enter, t);

        // Replace the companion name with "B".
        app.handle_key(KeyCode::Down, t);
        app.handle_key(KeyCode::Enter, t);
        clear_field(&mut app, t);
        type_text(&mut app, "B", t);
        app.handle_key(KeyCode::Enter, t);

        // Confirm: nothing lands until the pacing delay has passed.
        app.handle_key(KeyCode::Down, t);
        app.handle_key(KeyCode::Enter, t);
        assert_eq!(app.mode, AppMode::Connecting);
        assert_eq!(app.settings.user_name, "friend");

        app.tick(t + CONNECT_MS - 1);
        assert_eq!(app.mode, AppMode::Connecting);

        app.tick(t + CONNECT_MS);
        assert_eq!(app.mode, AppMode::Home);
        assert_eq!(app.settings.user_name, "A");
        assert_eq!(app.settings.companion_name, "B");

        // Reopening shows exactly the saved values.
        app.handle_key(KeyCode::Char('s'), t + CONNECT_MS);
        assert_eq!(app.draft_user, "A");
        assert_eq!(app.draft_companion, "B");
    }

    #[test]
    fn cancelling_the_settings_view_discards_edits() {
        let (mut app, _) = test_app();
        app.handle_key(KeyCode::Char('s'), 0);
        app.handle_key(KeyCode::Enter, 0);
        type_text(&mut app, "xyz", 0);
        app.handle_key(KeyCode::Enter, 0);
        assert_eq!(app.draft_user, "friendxyz");

        app.handle_key(KeyCode::Esc, 0);
        assert_eq!(app.settings.user_name, "friend");

        app.handle_key(KeyCode::Char('s'), 0);
        assert_eq!(app.draft_user, "friend");
    }

    #[test]
    fn connecting_cannot_be_interrupted() {
        let (mut app, _) = test_app();
        app.handle_key(KeyCode::Char('s'), 0);
        app.handle_key(KeyCode::Up, 0); // wraps to Confirm
        app.handle_key(KeyCode::Enter, 0);
        assert_eq!(app.mode, AppMode::Connecting);

        app.handle_key(KeyCode::Esc, 500);
        app.handle_key(KeyCode::Char('q'), 500);
        assert_eq!(app.mode, AppMode::Connecting);
        assert!(!app.should_quit);
    }

    #[test]
    fn music_selection_drives_the_sink() {
        let (mut app, sink) = test_app();

        app.handle_key(KeyCode::Char('m'), 0);
        app.handle_key(KeyCode::Down, 0);
        app.handle_key(KeyCode::Enter, 0);
        assert_eq!(app.mode, AppMode::Home);
        assert_eq!(
            sink.borrow().playing.as_deref(),
            Some(music::playlist()[1].url)
        );

        // Back to the silence sentinel stops playback.
        app.handle_key(KeyCode::Char('m'), 0);
        app.handle_key(KeyCode::Up, 0);
        app.handle_key(KeyCode::Enter, 0);
        assert_eq!(sink.borrow().playing, None);
        assert_eq!(sink.borrow().stops, 1);
    }

    #[test]
    fn closing_the_music_view_keeps_the_current_track() {
        let (mut app, sink) = test_app();
        app.handle_key(KeyCode::Char('m'), 0);
        app.handle_key(KeyCode::Down, 0);
        app.handle_key(KeyCode::Esc, 0);
        assert_eq!(app.music_index, 0);
        assert_eq!(sink.borrow().playing, None);
    }

    #[test]
    fn failed_background_read_keeps_the_previous_artwork() {
        let (mut app, _) = test_app();
        let before = app.settings.background.clone();

        app.handle_key(KeyCode::Char('b'), 0);
        type_text(&mut app, "notes.txt", 0);
        app.handle_key(KeyCode::Enter, 0);

        assert_eq!(app.mode, AppMode::Background);
        assert!(app.background_error.is_some());
        assert_eq!(app.settings.background, before);
    }

    #[test]
    fn picking_an_image_replaces_the_background() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dusk.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[1, 2, 3])
            .unwrap();

        let (mut app, _) = test_app();
        app.handle_key(KeyCode::Char('b'), 0);
        type_text(&mut app, path.to_str().unwrap(), 0);
        app.handle_key(KeyCode::Enter, 0);

        assert_eq!(app.mode, AppMode::Home);
        assert!(app.settings.background.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn theme_toggles_from_home() {
        use breathe_core::theme::ThemeVariant;
        let (mut app, _) = test_app();
        assert_eq!(app.theme.variant(), ThemeVariant::Dusk);
        app.handle_key(KeyCode::Char('t'), 0);
        assert_eq!(app.theme.variant(), ThemeVariant::Dawn);
    }
}
