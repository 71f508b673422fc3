//! Built-in 5-row block font for the clock and phase label.

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

#[rustfmt::skip]
fn glyph(ch: char) -> [&'static str; GLYPH_HEIGHT] {
    match ch.to_ascii_uppercase() {
        'A' => ["  █   ", " █ █  ", "█████ ", "█   █ ", "█   █ "],
        'B' => ["████  ", "█   █ ", "████  ", "█   █ ", "████  "],
        'C' => [" ████ ", "█     ", "█     ", "█     ", " ████ "],
        'D' => ["████  ", "█   █ ", "█   █ ", "█   █ ", "████  "],
        'E' => ["█████ ", "█     ", "███   ", "█     ", "█████ "],
        'F' => ["█████ ", "█     ", "███   ", "█     ", "█     "],
        'G' => [" ████ ", "█     ", "█  ██ ", "█   █ ", " ████ "],
        'H' => ["█   █ ", "█   █ ", "█████ ", "█   █ ", "█   █ "],
        'I' => ["█████ ", "  █   ", "  █   ", "  █   ", "█████ "],
        'J' => ["█████ ", "   █  ", "   █  ", "█  █  ", " ██   "],
        'K' => ["█   █ ", "█  █  ", "███   ", "█  █  ", "█   █ "],
        'L' => ["█     ", "█     ", "█     ", "█     ", "█████ "],
        'M' => ["█   █ ", "██ ██ ", "█ █ █ ", "█   █ ", "█   █ "],
        'N' => ["█   █ ", "██  █ ", "█ █ █ ", "█  ██ ", "█   █ "],
        'O' => [" ███  ", "█   █ ", "█   █ ", "█   █ ", " ███  "],
        'P' => ["████  ", "█   █ ", "████  ", "█     ", "█     "],
        'Q' => [" ███  ", "█   █ ", "█   █ ", "█  █  ", " ██ █ "],
        'R' => ["████  ", "█   █ ", "████  ", "█  █  ", "█   █ "],
        'S' => [" ████ ", "█     ", " ███  ", "    █ ", "████  "],
        'T' => ["█████ ", "  █   ", "  █   ", "  █   ", "  █   "],
        'U' => ["█   █ ", "█   █ ", "█   █ ", "█   █ ", " ███  "],
        'V' => ["█   █ ", "█   █ ", "█   █ ", " █ █  ", "  █   "],
        'W' => ["█   █ ", "█   █ ", "█ █ █ ", "██ ██ ", "█   █ "],
        'X' => ["█   █ ", " █ █  ", "  █   ", " █ █  ", "█   █ "],
        'Y' => ["█   █ ", " █ █  ", "  █   ", "  █   ", "  █   "],
        'Z' => ["█████ ", "   █  ", "  █   ", " █    ", "█████ "],
        '0' => [" ███  ", "█  ██ ", "█ █ █ ", "██  █ ", " ███  "],
        '1' => ["  █   ", " ██   ", "  █   ", "  █   ", " ███  "],
        '2' => [" ███  ", "█   █ ", "  ██  ", " █    ", "█████ "],
        '3' => ["████  ", "    █ ", " ███  ", "    █ ", "████  "],
        '4' => ["█   █ ", "█   █ ", "█████ ", "    █ ", "    █ "],
        '5' => ["█████ ", "█     ", "████  ", "    █ ", "████  "],
        '6' => [" ███  ", "█     ", "████  ", "█   █ ", " ███  "],
        '7' => ["█████ ", "    █ ", "   █  ", "  █   ", "  █   "],
        '8' => [" ███  ", "█   █ ", " ███  ", "█   █ ", " ███  "],
        '9' => [" ███  ", "█   █ ", " ████ ", "    █ ", " ███  "],
        ' ' => ["      ", "      ", "      ", "      ", "      "],
        ':' => ["      ", "  █   ", "      ", "  █   ", "      "],
        '/' => ["    █ ", "   █  ", "  █   ", " █    ", "█     "],
        '[' => [" ███  ", " █    ", " █    ", " █    ", " ███  "],
        ']' => [" ███  ", "   █  ", "   █  ", "   █  ", " ███  "],
        '-' => ["      ", "      ", "█████ ", "      ", "      "],
        '.' => ["      ", "      ", "      ", "      ", "  █   "],
        '!' => ["  █   ", "  █   ", "  █   ", "      ", "  █   "],
        _ => ["█████ ", "█   █ ", "█   █ ", "█   █ ", "█████ "],
    }
}

/// Render `text` as [`GLYPH_HEIGHT`] rows of block characters.
#[must_use]
pub fn render(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT];
    for ch in text.chars() {
        for (row, part) in rows.iter_mut().zip(glyph(ch)) {
            row.push_str(part);
        }
    }
    rows
}

/// Width in columns of the widest row.
#[must_use]
pub fn block_width(rows: &[String]) -> usize {
    rows.iter()
        .map(|row| super::terminal::text_width(row))
        .max()
        .unwrap_or(0)
}
