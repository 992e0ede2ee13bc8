use anyhow::{Context, Result};
use regex::Regex;

/// The environment key that gets rewritten on every run.
pub const MAPS_API_KEY: &str = "NEXT_PUBLIC_GOOGLE_MAPS_API_KEY";

/// The fixed value appended for [`MAPS_API_KEY`].
pub const MAPS_API_KEY_VALUE: &str = "replace-with-your-maps-api-key";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Normalizes raw `.env.local` bytes into clean UTF-8 text.
///
/// The pipeline:
///
/// 1. Delete every null byte, wherever it occurs
/// 2. Strip a leading UTF-8 byte-order mark
/// 3. Decode as UTF-8, discarding undecodable byte sequences
/// 4. Remove every `NEXT_PUBLIC_GOOGLE_MAPS_API_KEY=<value>` occurrence
///    (matched anywhere in the text, not only at line start)
/// 5. Trim each line and drop lines that become empty
/// 6. Append exactly one key line with the fixed value
///
/// The result is the joined lines with a single trailing newline. Running the
/// pipeline on its own output reproduces it byte-for-byte.
pub fn sanitize_content(raw: &[u8]) -> Result<String> {
    let without_nulls: Vec<u8> = raw.iter().copied().filter(|&b| b != 0).collect();
    let without_bom = without_nulls.strip_prefix(UTF8_BOM).unwrap_or(&without_nulls);

    let text = decode_utf8_dropping_invalid(without_bom);

    let key_pattern = Regex::new(&format!(r"{MAPS_API_KEY}=\S*"))
        .context("Failed to compile key-removal pattern")?;
    let without_key = key_pattern.replace_all(&text, "");

    let mut lines: Vec<&str> =
        without_key.lines().map(str::trim).filter(|line| !line.is_empty()).collect();

    let key_line = format!("{MAPS_API_KEY}={MAPS_API_KEY_VALUE}");
    lines.push(&key_line);

    let mut output = lines.join("\n");
    output.push('\n');
    Ok(output)
}

/// Decodes bytes as UTF-8, skipping over invalid sequences entirely.
///
/// Unlike `String::from_utf8_lossy`, invalid input contributes nothing to the
/// output (no U+FFFD replacement characters).
fn decode_utf8_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());

    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                decoded.push_str(valid);
                return decoded;
            }
            Err(err) => {
                let valid_up_to = err.valid_up_to();
                // The prefix up to valid_up_to is guaranteed valid UTF-8
                decoded
                    .push_str(std::str::from_utf8(&bytes[..valid_up_to]).unwrap_or_default());
                let skip = err.error_len().unwrap_or(bytes.len() - valid_up_to);
                bytes = &bytes[valid_up_to + skip..];
            }
        }
    }
}
