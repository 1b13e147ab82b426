//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, [`AppState`], event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod background;
pub mod nav;
pub mod page;
pub mod sections;
pub mod status_bar;
pub mod surface;
pub mod theme;
pub mod transition;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::motion::PointerTracker;

// Re-export TUI components
pub use nav::NavBar;
pub use status_bar::StatusBar;
pub use surface::Surface;
pub use theme::{Theme, ThemeId};
pub use transition::ThemeTransition;

/// Event poll timeout; also the animation frame budget (~30 fps).
const TICK_RATE: Duration = Duration::from_millis(33);

/// Rows reserved outside the scrolling page (nav bar + status bar).
const CHROME_ROWS: u16 = 2;

/// Single source of truth for the interface.
///
/// Widgets render from this state and never mutate it; all mutation goes
/// through the event handlers and the per-frame tick.
#[derive(Debug)]
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// The selected theme (the target while a crossfade is running)
    pub active_theme: ThemeId,
    /// In-flight theme crossfade, if any
    pub transition: Option<ThemeTransition>,
    /// Pointer tracker driving the reactive background
    pub pointer: PointerTracker,
    /// Whether the theme dropdown is open
    pub menu_open: bool,
    /// Cursor row inside the theme dropdown
    pub menu_cursor: usize,
    /// Scroll offset into the virtual page, in rows
    pub scroll: u16,
    /// Set when the user asks to exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates application state from loaded configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let active_theme = config.startup_theme();
        Self {
            config,
            active_theme,
            transition: None,
            pointer: PointerTracker::new(),
            menu_open: false,
            menu_cursor: 0,
            scroll: 0,
            should_quit: false,
        }
    }

    /// Configured crossfade duration.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.config.ui.transition_ms)
    }

    /// The palette to paint with at `now`: the in-flight crossfade sample,
    /// or the selected theme's registered palette.
    #[must_use]
    pub fn current_theme(&self, now: Instant) -> Theme {
        self.transition
            .as_ref()
            .map_or_else(|| *Theme::get(self.active_theme), |fade| fade.sample(now))
    }

    /// Drops the crossfade once it has run to completion.
    pub fn finish_transition(&mut self, now: Instant) {
        if self.transition.is_some_and(|fade| fade.is_complete(now)) {
            self.transition = None;
        }
    }

    /// Selects a theme, starting a crossfade from whatever palette is on
    /// screen at `now`. Re-selecting the settled active theme is a no-op.
    pub fn set_theme(&mut self, id: ThemeId, now: Instant) {
        if id == self.active_theme && self.transition.is_none() {
            return;
        }
        let from = self.current_theme(now);
        self.active_theme = id;
        self.transition = Some(ThemeTransition::new(
            from,
            *Theme::get(id),
            now,
            self.transition_duration(),
        ));
        self.config.ui.theme = Some(id);
    }

    /// Opens or closes the theme dropdown. Opening moves the cursor to
    /// the active theme.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_cursor = ThemeId::ALL
                .iter()
                .position(|id| *id == self.active_theme)
                .unwrap_or(0);
        }
    }

    /// Moves the dropdown cursor, wrapping at the ends.
    pub fn move_menu_cursor(&mut self, delta: i32) {
        let len = ThemeId::ALL.len() as i32;
        let cursor = (self.menu_cursor as i32 + delta).rem_euclid(len);
        self.menu_cursor = cursor as usize;
    }

    /// Applies the dropdown selection and closes the menu.
    pub fn apply_menu_selection(&mut self, now: Instant) {
        if let Some(id) = ThemeId::ALL.get(self.menu_cursor) {
            self.set_theme(*id, now);
        }
        self.menu_open = false;
    }

    /// Scrolls the page by `delta` rows, clamped at the top.
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll = self.scroll.saturating_add_signed(delta as i16);
    }
}

/// Renders one frame from the current state.
pub fn render(f: &mut Frame, state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let now = Instant::now();
    let palette = state.current_theme(now);
    let buf = f.buffer_mut();

    background::render(buf, area, &palette, &state.pointer);

    let nav_area = Rect { height: 1, ..area };
    let content = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(CHROME_ROWS),
        ..area
    };
    let status_area = Rect {
        y: area.bottom().saturating_sub(1),
        height: 1,
        ..area
    };

    let (px, py) = state.pointer.raw();
    let hover = state
        .pointer
        .is_mounted()
        .then(|| (px.round() as u16, py.round() as u16));
    page::render(buf, content, &palette, state.scroll, hover);

    NavBar::render(buf, nav_area, &palette, state.active_theme, state.menu_open);
    if state.menu_open {
        NavBar::render_menu(buf, nav_area, &palette, state.active_theme, state.menu_cursor);
    }
    StatusBar::render(buf, status_area, &palette, state.active_theme, state.menu_open);
}

/// Handles a key event. Returns true when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }
    let now = Instant::now();

    if state.menu_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('t' | 'q') => state.menu_open = false,
            KeyCode::Up | KeyCode::Char('k') => state.move_menu_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => state.move_menu_cursor(1),
            KeyCode::Enter => state.apply_menu_selection(now),
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('t') => state.toggle_menu(),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_by(1),
        KeyCode::PageUp => state.scroll_by(-10),
        KeyCode::PageDown => state.scroll_by(10),
        KeyCode::Home => state.scroll = 0,
        KeyCode::End => state.scroll = u16::MAX,
        KeyCode::Char(c @ '1'..='6') => {
            let index = usize::from(c as u8 - b'1');
            if let Some(id) = ThemeId::ALL.get(index) {
                state.set_theme(*id, now);
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Handles a mouse event within the given screen area.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, area: Rect) -> Result<()> {
    let now = Instant::now();
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            state.pointer.record(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollUp => {
            if state.menu_open {
                state.move_menu_cursor(-1);
            } else {
                state.scroll_by(-2);
            }
        }
        MouseEventKind::ScrollDown => {
            if state.menu_open {
                state.move_menu_cursor(1);
            } else {
                state.scroll_by(2);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let nav_area = Rect { height: 1, ..area };
            if state.menu_open {
                if let Some(index) = NavBar::menu_hit(nav_area, mouse.column, mouse.row) {
                    state.menu_cursor = index;
                    state.apply_menu_selection(now);
                } else {
                    state.menu_open = false;
                }
            } else if NavBar::button_hit(nav_area, state.active_theme, mouse.column, mouse.row) {
                state.toggle_menu();
            }
        }
        _ => {}
    }
    Ok(())
}

/// Set up the terminal for TUI rendering.
pub fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;

        state.pointer.tick(dt);
        state.finish_transition(now);

        let size = terminal.size()?;
        let content_height = size.height.saturating_sub(CHROME_ROWS);
        state.scroll = state.scroll.min(page::max_scroll(size.width, content_height));

        terminal.draw(|f| render(f, state))?;

        // The first frame establishes the viewport; only then do pointer
        // samples start feeding the springs.
        if !state.pointer.is_mounted() {
            state.pointer.mount(size.width, size.height);
        }

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(state, mouse, Rect::new(0, 0, size.width, size.height))?;
                }
                Event::Resize(width, height) => {
                    state.pointer.set_viewport(width, height);
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    // Persist the theme chosen during the session.
    state.config.save()?;
    Ok(())
}
