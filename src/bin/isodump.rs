use anyhow::Context;
use clap::{ArgAction, Parser};
use isodump::{
    boxes::{BoxEvent, FourCC},
    util::{DumpStyle, render},
    walker::{Sink, walk},
};
use serde::Serialize;
use std::fs;

#[derive(Parser, Debug)]
#[command(version, about = "ISOBMFF/MP4 box tree inspector")]
struct Args {
    /// ISOBMFF/MP4 file path
    path: String,

    /// Dump the payload of every box with this type (4 characters,
    /// or hex:XXXXXXXX for unprintable codes); repeatable
    #[arg(short = 'd', long = "dump", action = ArgAction::Append)]
    dump: Vec<String>,

    /// Render dumped payloads as a raw escaped stream instead of hex rows
    /// (suppresses the structural tree)
    #[arg(short = 'r', long = "dump-raw", action = ArgAction::SetTrue)]
    raw: bool,

    /// Emit the box events as JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data = fs::read(&args.path).with_context(|| format!("cannot open {}", args.path))?;

    let mut filters = Vec::new();
    for sel in &args.dump {
        let cc = parse_selector(sel).with_context(|| format!("bad box type {sel:?}"))?;
        filters.push(cc);
    }

    if args.json {
        let mut sink = JsonSink::default();
        walk(&data, &filters, &mut sink);
        let report = JsonReport { boxes: sink.boxes, end: sink.end };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let style = if args.raw { DumpStyle::Raw } else { DumpStyle::Hex };
    let mut sink = TextSink { style, quiet: args.raw };
    walk(&data, &filters, &mut sink);
    Ok(())
}

fn parse_selector(sel: &str) -> Option<FourCC> {
    if let Some(h) = sel.strip_prefix("hex:") {
        FourCC::from_hex(h)
    } else {
        FourCC::from_str(sel)
    }
}

// ---------- Human-readable tree ----------

struct TextSink {
    style: DumpStyle,
    quiet: bool, // raw mode prints dumped payloads only
}

impl Sink for TextSink {
    fn on_box(&mut self, ev: &BoxEvent) {
        if self.quiet {
            return;
        }
        let indent = "  ".repeat(ev.depth);
        println!("@{:<10}| {}{} [{}]", ev.offset, indent, ev.typ, ev.size);
    }

    fn on_payload(&mut self, ev: &BoxEvent, payload: &[u8]) {
        // 13 columns of line prefix, then two per nesting level
        print!("{}", render(payload, 13 + ev.depth * 2, self.style));
    }

    fn on_end(&mut self, offset: u64) {
        if self.quiet {
            return;
        }
        println!("@{:<10}| end", offset);
    }
}

// ---------- JSON representation ----------

#[derive(Serialize)]
struct JsonReport {
    boxes: Vec<JsonBox>,
    end: u64,
}

#[derive(Serialize)]
struct JsonBox {
    offset: u64,
    depth: usize,
    typ: String,
    size: u64,
    payload: Option<String>,
}

#[derive(Default)]
struct JsonSink {
    boxes: Vec<JsonBox>,
    end: u64,
}

impl Sink for JsonSink {
    fn on_box(&mut self, ev: &BoxEvent) {
        self.boxes.push(JsonBox {
            offset: ev.offset,
            depth: ev.depth,
            typ: ev.typ.to_string(),
            size: ev.size,
            payload: None,
        });
    }

    fn on_payload(&mut self, _ev: &BoxEvent, payload: &[u8]) {
        if let Some(b) = self.boxes.last_mut() {
            b.payload = Some(hex::encode(payload));
        }
    }

    fn on_end(&mut self, offset: u64) {
        self.end = offset;
    }
}
