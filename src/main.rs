// acdc: compile an AcDc source file to dc

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use crossterm::style::{StyledContent, Stylize};
use tracing_subscriber::EnvFilter;

use acdc::{compile, CompilerConfig};

/// Bad usage, lexical or syntax error
const EXIT_FAILURE: u8 = 1;
/// Source or target could not be opened
const EXIT_IO: u8 = 2;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("acdc");
        eprintln!("Usage: {} <source_file> <target_file>", program_name);
        return ExitCode::from(EXIT_FAILURE);
    }

    let source_path = PathBuf::from(&args[1]);
    let target_path = PathBuf::from(&args[2]);
    let config = CompilerConfig::from_env();
    tracing::debug!(?config, "configuration");

    let source = match read_source(&source_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{} {:#}", error_prefix(), e);
            return ExitCode::from(EXIT_IO);
        }
    };

    let compilation = match compile(&source, &config) {
        Ok(compilation) => compilation,
        Err(e) => {
            eprintln!("{} {}: {}", error_prefix(), source_path.display(), e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    for diagnostic in &compilation.diagnostics {
        eprintln!("{} {}: {}", error_prefix(), source_path.display(), diagnostic);
    }
    if compilation.has_errors() {
        tracing::warn!(
            counts = ?compilation.diagnostics.counts_by_kind(),
            "semantic errors found, output written anyway"
        );
    }

    if let Err(e) = write_target(&target_path, &compilation.output) {
        eprintln!("{} {:#}", error_prefix(), e);
        return ExitCode::from(EXIT_IO);
    }

    ExitCode::SUCCESS
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("can't open source file {}", path.display()))
}

fn write_target(path: &Path, output: &str) -> anyhow::Result<()> {
    fs::write(path, output).with_context(|| format!("can't open target file {}", path.display()))
}

fn error_prefix() -> StyledContent<&'static str> {
    if std::io::stderr().is_terminal() {
        "error:".red().bold()
    } else {
        "error:".stylize()
    }
}
