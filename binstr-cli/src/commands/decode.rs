//! Decode command implementation.

use crate::utils::{load_codec, read_input, write_output};
use binstr_codec::Codec;
use std::path::Path;
use tracing::info;

pub fn cmd_decode(
    codec_name: &str,
    input: Option<&Path>,
    output: Option<&Path>,
    options: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = load_codec(codec_name, options)?;
    if !codec.can_decode() {
        return Err(format!("{} does not support decoding", codec).into());
    }

    let raw = read_input(input)?;
    let text = String::from_utf8(raw).map_err(|_| "encoded input is not valid UTF-8")?;
    // `binstr encode` ends its output with a line break.
    let text = strip_final_newline(&text);

    let decoded = codec.decode(text)?;
    info!(codec = %codec, chars = text.len(), bytes = decoded.len(), "decoded");

    write_output(output, &decoded)?;
    Ok(())
}

fn strip_final_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
