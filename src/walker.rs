use crate::boxes::{BoxEvent, FourCC};
use crate::parser::decode_header;
use crate::registry::{BoxClass, classify};

/// Receives traversal output.
///
/// `on_box` fires once per visited box in pre-order; `on_payload` follows it
/// when the box matched a dump filter, with the payload bytes (header
/// excluded); `on_end` reports the offset where traversal stopped.
pub trait Sink {
    fn on_box(&mut self, ev: &BoxEvent);
    fn on_payload(&mut self, ev: &BoxEvent, payload: &[u8]);
    fn on_end(&mut self, offset: u64);
}

/// Header decode failed; the whole traversal stops here.
struct Halted(u64);

/// Walk the box tree of `data`, emitting events into `sink`.
///
/// Malformed input is recovered in place: a truncated trailing box ends the
/// walk cleanly, a child overrunning its parent is dropped and scanning
/// resumes at the parent's end. Nothing here panics or returns an error.
pub fn walk<S: Sink>(data: &[u8], filters: &[FourCC], sink: &mut S) {
    let end = data.len() as u64;
    let stopped = match walk_range(data, filters, sink, 0, end, 0) {
        Ok(off) | Err(Halted(off)) => off,
    };
    sink.on_end(stopped);
}

fn walk_range<S: Sink>(
    data: &[u8],
    filters: &[FourCC],
    sink: &mut S,
    mut offset: u64,
    end: u64,
    depth: usize,
) -> Result<u64, Halted> {
    let total = data.len() as u64;
    while offset < end {
        // A gap too small to hold another header is container padding,
        // not a missed sibling.
        if depth > 0 && end - offset < 8 {
            return Ok(end);
        }
        let hdr = match decode_header(data, offset, total) {
            Ok(h) => h,
            Err(_) => return Err(Halted(offset)),
        };
        // A child claiming to extend past its parent carries a corrupt
        // size: drop it and resume at the parent's end.
        if depth > 0 && offset.saturating_add(hdr.size) > end {
            return Ok(end);
        }
        let size = hdr.size.min(total - offset);

        let ev = BoxEvent { offset, depth, typ: hdr.typ, size };
        sink.on_box(&ev);

        if filters.iter().any(|f| *f == hdr.typ) {
            let lo = (offset + hdr.header_size) as usize;
            let hi = (offset + size) as usize;
            sink.on_payload(&ev, &data[lo..hi]);
        }

        offset = match classify(hdr.typ) {
            BoxClass::Container { extra } => {
                let first_child = offset + hdr.header_size + extra;
                walk_range(data, filters, sink, first_child, offset + size, depth + 1)?
            }
            BoxClass::Leaf => offset + size,
        };
    }
    Ok(offset)
}
