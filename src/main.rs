//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]
mod bitstream;
mod compression;
mod error;
mod huffman_coding;
mod tools;

use std::fs;
use std::io::{Read, Write};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};
use tikv_jemallocator::Jemalloc;

use compression::HuffmanCodec;
use error::CodecError;
use tools::bitstring::to_bit_string;
use tools::cli::hzopts_init;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> Result<(), CodecError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let opts = hzopts_init();

    // Pull the whole input into memory; the codec is whole-buffer.
    let data = match &opts.file {
        Some(name) => {
            info!("Reading input from {}.", name);
            fs::read(name)?
        }
        None => {
            info!("Reading input from stdin.");
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let mut codec = HuffmanCodec::new();
    let packed = codec.compress(&data)?;
    info!(
        "Packed {} bytes into {} ({:.1}% of the input).",
        data.len(),
        packed.len(),
        if data.is_empty() {
            100.0
        } else {
            packed.len() as f64 * 100.0 / data.len() as f64
        }
    );

    // The packed stream has no embedded code table, so verification has to
    // happen here, against the same codec instance.
    if opts.test {
        let unpacked = codec.decompress(&packed)?;
        if unpacked == data {
            info!("Round trip verified: output matches the input.");
        } else {
            error!(
                "Round trip FAILED: got {} bytes back, expected {}.",
                unpacked.len(),
                data.len()
            );
            return Err(CodecError::MalformedPacking(
                "round trip mismatch".to_string(),
            ));
        }
    }

    if opts.bits {
        let rendered = to_bit_string(&packed);
        match &opts.output {
            Some(name) => fs::write(name, rendered)?,
            None => println!("{}", rendered),
        }
    } else {
        match &opts.output {
            Some(name) => fs::write(name, &packed)?,
            None => std::io::stdout().write_all(&packed)?,
        }
    }

    info!("Done.\n");
    Ok(())
}
