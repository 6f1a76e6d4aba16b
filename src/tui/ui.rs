//! Main UI rendering and TUI loop.

use std::io::{stdout, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor, event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Frame, Terminal};

use super::app::{App, Outcome};
use super::input::handle_event;
use super::layout::MainLayout;
use super::theme::Theme;
use super::widgets::{Details, EmptyList, Footer, Header, PickList, Prompt};

/// Blink interval for cursor (in milliseconds).
const CURSOR_BLINK_MS: u64 = 530;

/// Tracks whether the terminal is in raw mode, for the panic hook.
static TERMINAL_RAW_MODE: AtomicBool = AtomicBool::new(false);

/// RAII guard for terminal state.
/// Restores the terminal on drop, including during a panic.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Put the terminal into raw mode on the alternate screen.
    pub fn new() -> Result<Self> {
        setup_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        TERMINAL_RAW_MODE.store(true, Ordering::SeqCst);

        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        TERMINAL_RAW_MODE.store(false, Ordering::SeqCst);
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}

/// Install a panic hook that restores the terminal before reporting.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if TERMINAL_RAW_MODE.load(Ordering::SeqCst) {
            let _ = disable_raw_mode();
            let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
        }

        original_hook(panic_info);
    }));
}

/// Run the quick-pick until the user accepts or cancels.
///
/// The terminal is restored before this returns, so the caller can launch
/// the chosen script straight away.
pub fn run_tui(mut app: App, theme: &Theme) -> Result<Outcome> {
    let mut guard = TerminalGuard::new()?;
    let result = run_loop(guard.terminal(), &mut app, theme);
    drop(guard);

    result?;
    Ok(app.into_outcome())
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, theme: &Theme) -> Result<()> {
    let mut last_blink = Instant::now();
    let mut blink_state = true;

    while !app.is_done() {
        if last_blink.elapsed() >= Duration::from_millis(CURSOR_BLINK_MS) {
            blink_state = !blink_state;
            last_blink = Instant::now();
        }

        let size = terminal.size()?;
        let layout = MainLayout::new(ratatui::layout::Rect::new(0, 0, size.width, size.height));
        app.ensure_visible(layout.list_rows());

        terminal.draw(|frame| render(frame, app, theme, blink_state))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            handle_event(app, event, layout.list_rows());
            blink_state = true;
            last_blink = Instant::now();
        }
    }

    Ok(())
}

/// Render the complete quick-pick.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, blink_state: bool) {
    let layout = MainLayout::new(frame.area());

    frame.render_widget(Header::new(app.title(), app.info(), theme), layout.header);
    frame.render_widget(
        Prompt::new(app.query(), app.matched_count(), app.total_count(), theme).blink(blink_state),
        layout.prompt,
    );

    let visible: Vec<_> = app.visible_items().collect();
    if visible.is_empty() {
        frame.render_widget(EmptyList::new(theme), layout.list);
    } else {
        let list = PickList::new(&visible, app.selected_position(), theme)
            .scroll_offset(app.scroll_offset())
            .query(app.query());
        frame.render_widget(list, layout.list);
    }

    frame.render_widget(Details::new(app.selected_script(), theme), layout.details);
    frame.render_widget(Footer::new(theme), layout.footer);
}
