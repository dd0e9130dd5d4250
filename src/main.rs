// dbg6502: step a simulated 6502 with a live view of its memory

use std::io;
use std::process;

use dbg6502::cli::{self, CliAction, CliOptions};
use dbg6502::config::SessionConfig;
use dbg6502::errors::DebuggerError;
use dbg6502::machine::bare::BareMachine;
use dbg6502::machine::listing::{ListingAssembler, ListingDisassembler};
use dbg6502::ui::terminal::{CrosstermEvents, TerminalGuard};
use dbg6502::ui::{CompositeWindowManager, DebuggerSession};
use ratatui::{backend::CrosstermBackend, Terminal};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("dbg6502");

    let options = match cli::parse_args(args.iter().skip(1).cloned()) {
        Ok(CliAction::Run(options)) => options,
        Ok(CliAction::Help) => {
            println!("{}", cli::usage(program_name));
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", cli::usage(program_name));
            process::exit(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(if options.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(options: &CliOptions) -> Result<(), DebuggerError> {
    log::debug!("verbose: {}", options.verbose);
    let program = cli::load_program(&options.file, &ListingAssembler::new())?;

    let disassembler = ListingDisassembler::new(&program.symbols);
    let simulator = BareMachine::new(program.memory);

    // restores the terminal when dropped, after the Terminal below
    let _guard = TerminalGuard::acquire()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let windows = CompositeWindowManager::new(terminal);

    let mut session = DebuggerSession::new(simulator, disassembler, windows, SessionConfig::default())?;
    session.run(&mut CrosstermEvents)
}
