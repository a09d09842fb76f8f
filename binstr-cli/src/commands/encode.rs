//! Encode command implementation.

use crate::utils::{load_codec, read_input, write_output};
use binstr_codec::Codec;
use std::path::Path;
use tracing::info;

pub fn cmd_encode(
    codec_name: &str,
    input: Option<&Path>,
    output: Option<&Path>,
    options: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = load_codec(codec_name, options)?;
    let data = read_input(input)?;

    let mut encoded = codec.encode(&data);
    encoded.push('\n');
    info!(codec = %codec, bytes = data.len(), chars = encoded.len(), "encoded");

    write_output(output, encoded.as_bytes())?;
    Ok(())
}
