use clap::Parser;

/// Command line interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "huffzip",
    version,
    about = "A Huffman entropy codec",
    long_about = "
    Huffzip packs a byte stream into a minimal-redundancy Huffman coding
    behind a one-byte padding header. The code table is built per input and
    is not embedded in the output, so decoding is only possible against the
    instance that produced a stream; use --test to verify a round trip
    in-process."
)]
pub struct HzOpts {
    /// Filename of the file to compress; standard input when omitted
    #[clap()]
    pub file: Option<String>,

    /// Write the packed output to this file instead of standard output
    #[clap(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Emit the packed stream as 0/1 digits rather than raw bytes
    #[clap(short = 'b', long = "bits")]
    pub bits: bool,

    /// Compress, then decompress in-process and verify the round trip
    #[clap(short = 't', long = "test")]
    pub test: bool,

    /// Sets verbosity. -v 0 is silent, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    pub v: u8,
}

/// Parse the command line and wire the verbosity flag into the logger.
pub fn hzopts_init() -> HzOpts {
    let opts = HzOpts::parse();

    match opts.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };
    opts
}
