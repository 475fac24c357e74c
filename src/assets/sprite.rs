//! Bird sprite, loaded from a plain-text art file with a built-in fallback.

use std::fs;
use std::path::Path;

/// Used whenever `assets/bird.txt` is missing or unusable.
const FALLBACK_ART: &str = " __\n(o>";

/// Load the bird art. Never fails; a broken or missing file just means the
/// built-in sprite, with a warning on stderr.
pub fn load_bird_art(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let art = parse_art(&text);
            if art.is_empty() {
                eprintln!("warning: {} is empty, using built-in bird", path.display());
                parse_art(FALLBACK_ART)
            } else {
                art
            }
        }
        Err(err) => {
            eprintln!(
                "warning: could not read {}: {}, using built-in bird",
                path.display(),
                err
            );
            parse_art(FALLBACK_ART)
        }
    }
}

/// Split art text into display rows, stripping carriage returns and
/// trailing blank lines. Interior blank lines are kept so multi-part
/// sprites line up.
fn parse_art(text: &str) -> Vec<String> {
    let mut rows: Vec<String> = text
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }
    rows
}
