//! Command-line parsing and program loading

use crate::errors::DebuggerError;
use crate::machine::{Assembler, Program};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub file: PathBuf,
    pub verbose: bool,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(CliOptions),
    Help,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} [-v|--verbose] FILE\n\n  FILE           object listing to load\n  -v, --verbose  print status messages to stderr\n  -h, --help     show this help",
        program
    )
}

/// Parse arguments, not including the program name
pub fn parse_args<I, T>(args: I) -> Result<CliAction, DebuggerError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut verbose = false;
    let mut file = None;

    for arg in args.into_iter().map(Into::into) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok(CliAction::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(DebuggerError::Usage(format!("unknown option '{}'", flag)));
            }
            _ if file.is_some() => {
                return Err(DebuggerError::Usage(format!(
                    "unexpected argument '{}'",
                    arg
                )));
            }
            _ => file = Some(PathBuf::from(&arg)),
        }
    }

    match file {
        Some(file) => Ok(CliAction::Run(CliOptions { file, verbose })),
        None => Err(DebuggerError::Usage(
            "a filename of an assembly file is required".to_string(),
        )),
    }
}

/// Read `path` and assemble it. An unreadable file fails before the assembler runs.
pub fn load_program<A: Assembler>(path: &Path, assembler: &A) -> Result<Program, DebuggerError> {
    log::debug!("filename: {}", path.display());
    let source = fs::read_to_string(path).map_err(|source| DebuggerError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let program = assembler.assemble(&source)?;
    log::info!(
        "loaded {} bytes and {} symbols",
        program.memory.defined_count(),
        program.symbols.len()
    );
    Ok(program)
}
