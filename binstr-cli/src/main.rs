//! binstr CLI - binary-to-text encoding from the command line
//!
//! Encodes and decodes Base32, Ascii85, UUEncode, Quoted-Printable, URL,
//! backslash escapes, Base64 and hex.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_decode, cmd_encode, cmd_list};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "binstr")]
#[command(author, version, about = "Binary-to-text encoder and decoder")]
#[command(long_about = "
binstr converts arbitrary bytes to text and back.
Supported codecs: base32, ascii85, uuencode, quoted-printable, url,
backslash, base64, hex

Examples:
  binstr encode base32 photo.jpg
  binstr encode ascii85 -o out.a85 data.bin
  echo -n 'Hello' | binstr encode url
  binstr decode uuencode message.uu -o message.bin
  binstr encode base32 --options crockford.json data.bin
  binstr list --json
")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary input as text
    #[command(alias = "e")]
    Encode {
        /// Codec name (see `binstr list`)
        codec: String,

        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with codec options
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Decode text back to binary
    #[command(alias = "d")]
    Decode {
        /// Codec name (see `binstr list`)
        codec: String,

        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with codec options
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// List available codecs
    #[command(alias = "l")]
    List {
        /// Output as JSON (machine-readable), including default options
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            codec,
            input,
            output,
            options,
        } => cmd_encode(&codec, input.as_deref(), output.as_deref(), options.as_deref()),
        Commands::Decode {
            codec,
            input,
            output,
            options,
        } => cmd_decode(&codec, input.as_deref(), output.as_deref(), options.as_deref()),
        Commands::List { json } => cmd_list(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
