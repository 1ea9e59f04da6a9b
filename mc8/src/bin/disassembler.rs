use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mc8::{dis, rom};

/// RISC-MC8 disassembler, prints one listing line per instruction byte
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Binary to list
    input: PathBuf,

    /// Treat zero bytes at the end as ROM padding and skip them. A program
    /// that really ends in `andi ireg` (0x00) loses those trailing instructions
    /// from the listing, leave this off to list every byte.
    #[clap(long)]
    rom: bool,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("MC8_LOG", "warn")
        .write_style_or("MC8_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let image = fs::read(&args.input).with_context(|| format!("failed to read {:?}", args.input))?;

    let code = if args.rom { rom::trim_padding(&image) } else { &image[..] };
    info!("{} of {} bytes to list", code.len(), image.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (offset, byte, inst) in dis::disassemble(code) {
        writeln!(out, "0x{:04X}  0b{:08b}  {}", offset, byte, inst)?;
    }
    out.flush().context("failed to write listing")?;

    Ok(())
}
