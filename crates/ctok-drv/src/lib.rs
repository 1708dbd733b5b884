//! ctok-drv - Tokenizer Driver
//!
//! Thin wrapper around [`ctok_lex`]: opens the input file, runs the
//! scanner over it, and writes the recognized tokens as fixed-width
//! columns to a file or to stdout.

use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use ctok_lex::{Scanner, Token};

/// Number of tokens rendered per output row.
const TOKENS_PER_ROW: usize = 4;

/// Driver configuration parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source file to tokenize.
    pub input: Option<PathBuf>,
    /// Where to write the token listing; stdout when absent.
    pub output: Option<PathBuf>,
    /// Whether to log phases to stderr.
    pub verbose: bool,
    /// Whether `--help` was requested.
    pub help: bool,
    /// Whether `--version` was requested.
    pub version: bool,
}

/// Parses command line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg == "--output" || arg == "-o" {
            if i + 1 >= args.len() {
                return Err("Missing argument for -o".to_string());
            }
            i += 1;
            config.output = Some(PathBuf::from(&args[i]));
        } else if arg.starts_with('-') {
            return Err(format!("Unknown option: {}", arg));
        } else if config.input.is_some() {
            return Err(format!("Unexpected extra input file: {}", arg));
        } else {
            config.input = Some(PathBuf::from(arg));
        }
        i += 1;
    }

    Ok(config)
}

/// Print help message
pub fn print_help() {
    println!("ctok v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: ctok [OPTIONS] <input file>");
    println!();
    println!("Options:");
    println!("  -h, --help           Print this help message");
    println!("  -V, --version        Print version information");
    println!("  -v, --verbose        Enable verbose output");
    println!("  -o, --output <FILE>  Write the token listing to FILE instead of stdout");
    println!();
    println!("Examples:");
    println!("  ctok prog.c                Tokenize prog.c and print the listing");
    println!("  ctok -o tokens.txt prog.c  Tokenize prog.c into tokens.txt");
}

/// Print version
pub fn print_version() {
    println!("ctok {}", env!("CARGO_PKG_VERSION"));
}

/// Writes tokens as fixed-width columns.
///
/// Every token is rendered as `(lexeme , code)`, padded to the longest
/// rendering plus two spaces, four per row.
pub fn write_columns<W: Write>(tokens: &[Token], out: &mut W) -> io::Result<()> {
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    let width = rendered.iter().map(|r| r.len()).max().unwrap_or(0) + 2;

    for (i, entry) in rendered.iter().enumerate() {
        write!(out, "{:<width$}", entry, width = width)?;
        if (i + 1) % TOKENS_PER_ROW == 0 {
            writeln!(out)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Runs the driver end to end.
pub fn run(config: Config) -> Result<()> {
    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    let Some(input) = config.input else {
        bail!("no input file provided");
    };

    if config.verbose {
        eprintln!("[verbose] Tokenizing: {}", input.display());
    }

    let file = File::open(&input)
        .with_context(|| format!("failed to open input file {}", input.display()))?;
    let scanner = Scanner::new(BufReader::new(file));
    let tokens = scanner
        .collect::<Result<Vec<Token>, _>>()
        .with_context(|| format!("failed to tokenize {}", input.display()))?;

    if config.verbose {
        eprintln!("[verbose] {} tokens recognized", tokens.len());
    }

    match config.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_columns(&tokens, &mut out).context("failed to write token listing")?;
            out.flush().context("failed to write token listing")?;
            if config.verbose {
                eprintln!("[verbose] Listing written to {}", path.display());
            }
        },
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_columns(&tokens, &mut out).context("failed to write token listing")?;
        },
    }

    Ok(())
}

/// Parses `std::env::args` and runs the driver.
pub fn run_from_env() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = parse_args(&args).map_err(|e| anyhow::anyhow!(e))?;
    run(config)
}
