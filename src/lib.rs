pub mod boxes;
pub mod parser;
pub mod registry;
pub mod util;
pub mod walker;

pub use boxes::{BoxEvent, BoxHeader, FourCC};
pub use parser::{ParseError, decode_header};
pub use registry::{BoxClass, classify};
pub use util::{DumpStyle, hex_dump, raw_dump, render};
pub use walker::{Sink, walk};
