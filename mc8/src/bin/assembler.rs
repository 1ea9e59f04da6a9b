use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};

use mc8::asm::{self, AsmConfig, SymbolTable};
use mc8::rom;

const EXIT_ASSEMBLY_FAILED: u8 = 1;
const EXIT_BAD_ARGUMENTS: u8 = 2;

/// RISC-MC8 assembler
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Assembly source to read
    source: PathBuf,

    /// Where to write the assembled binary
    output: PathBuf,

    /// Characters kept per source line, the rest of a longer line is dropped
    #[clap(long, default_value_t = asm::config::DEFAULT_MAX_LINE_LEN)]
    max_line_length: usize,

    /// Don't limit the source line length
    #[clap(long, conflicts_with = "max_line_length")]
    unbounded_lines: bool,

    /// Pad the output to a full ROM image
    #[clap(long)]
    rom: bool,
}

impl Args {
    fn config(&self) -> AsmConfig {
        if self.unbounded_lines {
            AsmConfig::unbounded()
        } else {
            AsmConfig::with_max_line_len(self.max_line_length)
        }
    }
}

enum Failure {
    // Paths we can't open or create
    Arguments(anyhow::Error),
    // The source didn't assemble, any output was removed
    Assembly(anyhow::Error),
}

fn main() -> ExitCode {
    let env = env_logger::Env::default()
        .filter_or("MC8_LOG", "info")
        .write_style_or("MC8_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args = Args::parse();

    match run(&args) {
        Ok(size) => {
            info!("Finished successfully, {} bytes written to {:?}", size, args.output);
            ExitCode::SUCCESS
        },
        Err(Failure::Arguments(err)) => {
            error!("{:#}", err);
            ExitCode::from(EXIT_BAD_ARGUMENTS)
        },
        Err(Failure::Assembly(err)) => {
            error!("{:#}", err);
            ExitCode::from(EXIT_ASSEMBLY_FAILED)
        },
    }
}

fn run(args: &Args) -> std::result::Result<usize, Failure> {
    let config = args.config();

    let source = File::open(&args.source)
        .with_context(|| format!("Input file {:?} could not be opened", args.source))
        .map_err(Failure::Arguments)?;
    let mut reader = BufReader::new(source);

    info!("Extracting symbols...");
    let symbols = asm::extract_symbols(&mut reader, &config).map_err(|err| {
        discard(&args.output);
        Failure::Assembly(err.into())
    })?;
    reader.rewind()
        .context("failed to rewind the source")
        .map_err(Failure::Assembly)?;

    let file = File::create(&args.output)
        .with_context(|| format!("Output file {:?} could not be created", args.output))
        .map_err(Failure::Arguments)?;

    info!("Assembling instructions...");
    write_output(&mut reader, &symbols, file, args, &config).map_err(|err| {
        discard(&args.output);
        Failure::Assembly(err)
    })
}

fn write_output<R: BufRead>(reader: R, symbols: &SymbolTable, file: File, args: &Args, config: &AsmConfig) -> Result<usize> {
    let mut out = BufWriter::new(file);
    let written = asm::encode_instructions(reader, symbols, &mut out, config)?;

    let size = if args.rom {
        rom::pad_image(&mut out, written, rom::ROM_SIZE)?;
        rom::ROM_SIZE
    } else {
        written
    };

    out.flush().with_context(|| format!("failed to write {:?}", args.output))?;
    Ok(size)
}

// A partial binary is worse than none
fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => (),
        Err(e) if e.kind() == io::ErrorKind::NotFound => (),
        Err(e) => warn!("failed to remove {:?}: {}", path, e),
    }
}
