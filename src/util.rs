/// How dumped payloads are rendered for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpStyle {
    Hex,
    Raw,
}

pub fn render(bytes: &[u8], indent: usize, style: DumpStyle) -> String {
    match style {
        DumpStyle::Hex => hex_dump(bytes, indent),
        DumpStyle::Raw => raw_dump(bytes),
    }
}

/// Canonical hex+ASCII block: 32 bytes per row with a gap after 16, each row
/// labeled with its offset relative to the start of the region. The ASCII
/// column lands in the same column for full and partial rows.
pub fn hex_dump(bytes: &[u8], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(32).enumerate() {
        out.push_str(&pad);
        out.push_str(&format!("{:08x}  ", row * 32));
        for (i, b) in chunk.iter().enumerate() {
            if i == 16 {
                out.push(' ');
            }
            out.push_str(&format!("{:02x} ", b));
        }
        for _ in chunk.len()..32 {
            out.push_str("   ");
        }
        out.push(' ');
        if chunk.len() <= 16 {
            // short rows never printed the mid-row gap
            out.push(' ');
        }
        let ascii: String = chunk.iter()
            .map(|&b| if (32..=126).contains(&b) { b as char } else { '.' })
            .collect();
        out.push_str(&ascii);
        out.push('\n');
    }
    out
}

/// Raw stream: printable and whitespace bytes pass through, everything else
/// becomes a backslash-escaped hex pair. One trailing newline for the region.
pub fn raw_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for &b in bytes {
        if b.is_ascii_graphic() || b.is_ascii_whitespace() {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\x{:02x}", b));
        }
    }
    out.push('\n');
    out
}
