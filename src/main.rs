//! njwaptree 入口：初始化日志和终端，驱动面板主循环。

use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use njwaptree::app::Workbench;
use njwaptree::config;
use njwaptree::core::event::InputEvent;
use njwaptree::core::view::View;
use njwaptree::runtime::PanelRuntime;
use njwaptree::tui::{TerminalGuard, TerminalRestorer};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let _logging = njwaptree::logging::init();

    let settings_path = match config::ensure_settings_file() {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!(error = %e, "settings file unavailable");
            config::get_settings_path()
        }
    };
    let settings = settings_path
        .as_deref()
        .and_then(config::load_settings_from)
        .unwrap_or_default();

    let (tx, rx) = mpsc::channel();
    let runtime = PanelRuntime::new(tx)?;
    let mut workbench = Workbench::new(settings, settings_path, runtime, rx);

    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut workbench, &guard);

    // Leave the alternate screen before any error reaches stderr.
    drop(guard);
    result
}

/// A panic while the alternate screen is active would leave the shell in
/// raw mode; restore the terminal before the logging hook reports it.
fn install_panic_restore(restorer: TerminalRestorer) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restorer.restore();
        previous(panic_info);
    }));
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    guard: &TerminalGuard,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
        })?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            let input = InputEvent::from(event::read()?);
            if workbench.handle_input(&input).is_quit() {
                return Ok(());
            }
        }

        let _ = workbench.tick();

        if let Some(path) = workbench.take_pending_open() {
            let editor_command = workbench.editor_command().to_string();
            open_in_editor(terminal, guard, &editor_command, &path)?;
        }
    }
}

/// Suspends the TUI, hands the file to the external editor, and redraws
/// from scratch once it exits.
fn open_in_editor(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    guard: &TerminalGuard,
    editor_command: &str,
    path: &Path,
) -> io::Result<()> {
    guard.suspend()?;

    let mut parts = editor_command.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    let status = std::process::Command::new(program)
        .args(parts)
        .arg(path)
        .status();

    let resumed = guard.resume();

    match status {
        Ok(code) if !code.success() => {
            tracing::warn!(
                editor = editor_command,
                code = ?code.code(),
                path = %path.display(),
                "editor exited with failure"
            );
        }
        Err(e) => {
            tracing::error!(editor = editor_command, error = %e, "failed to launch editor");
        }
        Ok(_) => {}
    }

    resumed?;
    terminal.clear()?;
    Ok(())
}
