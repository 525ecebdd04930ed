use std::fs::OpenOptions;
use std::io::Write;

use base64::Engine;

use super::errors::QuillError;

/// Copy text to the system clipboard via an OSC 52 escape sequence.
/// Works in Ghostty, iTerm2, kitty, WezTerm, and most modern terminals.
///
/// The sequence is written to the controlling terminal so it bypasses the
/// ratatui back buffer; when /dev/tty cannot be opened (pipes, some CI
/// environments) it falls back to stdout before giving up.
pub fn copy_to_clipboard(text: &str) -> Result<(), QuillError> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    let sequence = format!("\x1b]52;c;{}\x07", encoded);

    if let Ok(mut tty) = OpenOptions::new().write(true).open("/dev/tty") {
        if write_all(&mut tty, &sequence).is_ok() {
            return Ok(());
        }
    }

    // Fallback: write straight to stdout
    let mut stdout = std::io::stdout();
    write_all(&mut stdout, &sequence)
        .map_err(|e| QuillError::ClipboardError(format!("failed to reach terminal: {}", e)))
}

fn write_all(writer: &mut impl Write, sequence: &str) -> std::io::Result<()> {
    writer.write_all(sequence.as_bytes())?;
    writer.flush()
}
