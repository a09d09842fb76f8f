//! Utility functions for the CLI.

use binstr_codec::{CodecKind, Result};
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects `debug` and the default
/// is `warn`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Read all input from a file, or from stdin when no path is given.
pub fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            debug!(path = %path.display(), "reading input");
            Ok(fs::read(path)?)
        }
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Write output to a file, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, data: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            debug!(path = %path.display(), bytes = data.len(), "writing output");
            fs::write(path, data)?;
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Resolve a codec by name, applying options from a JSON file if given.
pub fn load_codec(name: &str, options: Option<&Path>) -> std::result::Result<CodecKind, Box<dyn Error>> {
    let codec = CodecKind::from_name(name).ok_or_else(|| {
        format!(
            "unknown codec '{}' (expected one of: {})",
            name,
            CodecKind::all_names().join(", ")
        )
    })?;

    match options {
        Some(path) => {
            debug!(path = %path.display(), codec = %codec, "loading codec options");
            let json = fs::read_to_string(path)?;
            apply_options(codec, &json)
        }
        None => Ok(codec),
    }
}

/// Replace the codec's options with those parsed from `json`.
///
/// Fields missing from the JSON keep their defaults.
fn apply_options(codec: CodecKind, json: &str) -> std::result::Result<CodecKind, Box<dyn Error>> {
    let codec = match codec {
        CodecKind::Base32(_) => CodecKind::Base32(serde_json::from_str(json)?),
        CodecKind::Ascii85(_) => CodecKind::Ascii85(serde_json::from_str(json)?),
        CodecKind::Uuencode(_) => CodecKind::Uuencode(serde_json::from_str(json)?),
        CodecKind::QuotedPrintable(_) => CodecKind::QuotedPrintable(serde_json::from_str(json)?),
        CodecKind::Url(_) => CodecKind::Url(serde_json::from_str(json)?),
        CodecKind::BackslashEscape(_) => CodecKind::BackslashEscape(serde_json::from_str(json)?),
        CodecKind::Hex(_) => CodecKind::Hex(serde_json::from_str(json)?),
        CodecKind::Base64(_) => return Err("base64 has no options".into()),
    };
    Ok(codec)
}

/// The codec's current options as JSON, or `None` if it has none.
pub fn options_json(codec: &CodecKind) -> serde_json::Result<Option<serde_json::Value>> {
    let value = match codec {
        CodecKind::Base32(c) => serde_json::to_value(c)?,
        CodecKind::Ascii85(c) => serde_json::to_value(c)?,
        CodecKind::Uuencode(c) => serde_json::to_value(c)?,
        CodecKind::QuotedPrintable(c) => serde_json::to_value(c)?,
        CodecKind::Url(c) => serde_json::to_value(c)?,
        CodecKind::BackslashEscape(c) => serde_json::to_value(c)?,
        CodecKind::Hex(c) => serde_json::to_value(c)?,
        CodecKind::Base64(_) => return Ok(None),
    };
    Ok(Some(value))
}
