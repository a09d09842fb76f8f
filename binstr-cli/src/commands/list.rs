//! List command implementation.

use crate::utils::options_json;
use binstr_codec::{Codec, CodecKind};
use serde::Serialize;

/// JSON serializable description of one codec.
#[derive(Debug, Serialize)]
struct CodecJson {
    name: &'static str,
    decode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<serde_json::Value>,
}

pub fn cmd_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let codecs = CodecKind::all_names()
        .iter()
        .filter_map(|name| CodecKind::from_name(name));

    if json {
        let entries = codecs
            .map(|codec| {
                Ok(CodecJson {
                    name: codec.name(),
                    decode: codec.can_decode(),
                    options: options_json(&codec)?,
                })
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:<18} Decode", "Codec");
    println!("{}", "-".repeat(25));
    for codec in codecs {
        let decode = if codec.can_decode() { "yes" } else { "no" };
        println!("{:<18} {}", codec.name(), decode);
    }
    Ok(())
}
