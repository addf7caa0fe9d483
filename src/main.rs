use std::io;
use std::sync::mpsc;
use std::time::Duration;

use habitchain::app::HabitChainApp;
use habitchain::core::view::View;
use habitchain::kernel::services::adapters::{ensure_settings_file, load_settings};
use habitchain::models::HabitList;
use habitchain::tui::crossterm::poll_input;
use habitchain::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use habitchain::ui::backend::terminal::RatatuiTerminal;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

const USAGE: &str = "\
Usage: habitchain [OPTIONS] [HABIT...]

Build a daily routine as a chain of habits.

Arguments:
  [HABIT...]       Seed the list with these habits, in order

Options:
  --init-settings  Write the default settings file and print its path
  -h, --help       Print help
  -V, --version    Print version
";

enum Cli {
    Run(Vec<String>),
    InitSettings,
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Cli {
    let mut habits = Vec::new();
    let mut positional_only = false;
    for arg in args {
        if positional_only {
            habits.push(arg);
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return Cli::Help,
            "-V" | "--version" => return Cli::Version,
            "--init-settings" => return Cli::InitSettings,
            "--" => positional_only = true,
            _ => habits.push(arg),
        }
    }
    Cli::Run(habits)
}

fn main() -> io::Result<()> {
    let habits = match parse_args(std::env::args().skip(1)) {
        Cli::Run(habits) => habits,
        Cli::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Cli::Version => {
            println!("habitchain {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Cli::InitSettings => {
            let path = ensure_settings_file()?;
            println!("{}", path.display());
            return Ok(());
        }
    };

    let logging_guard = logging::init();
    let settings = load_settings();
    let mut app = HabitChainApp::with_settings(HabitList::from_names(habits), settings.as_ref());
    tracing::info!(habits = app.state().habits.len(), "starting");

    let exit_code = {
        let guard = TerminalGuard::new()?;
        let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
        #[cfg(unix)]
        let _signals =
            habitchain::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
        #[cfg(not(unix))]
        drop(signal_tx);

        let mut terminal = RatatuiTerminal::new(io::stdout())?;
        let code = run(&mut app, &mut terminal, &signal_rx)?;
        drop(guard);
        code
    };

    tracing::info!(exit_code, "exiting");
    // `process::exit` skips destructors; flush the log writer first.
    drop(logging_guard);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn run(
    app: &mut HabitChainApp,
    terminal: &mut RatatuiTerminal,
    signal_rx: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<i32> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(signal.exit_code());
        }

        if dirty {
            terminal.draw(|backend, area| app.render(backend, area))?;
            dirty = false;
        }

        let Some(event) = poll_input(POLL_INTERVAL)? else {
            continue;
        };
        let result = app.handle_input(&event);
        if result.is_quit() || app.should_quit() {
            return Ok(0);
        }
        dirty |= result.is_consumed();
    }
}
