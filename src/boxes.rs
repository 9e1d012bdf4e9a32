use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub fn from_str(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() == 4 {
            Some(FourCC([b[0], b[1], b[2], b[3]]))
        } else { None }
    }
    /// Parse the 8-hex-digit form (e.g. "61766331"), for type codes that
    /// cannot be typed as literal characters.
    pub fn from_hex(s: &str) -> Option<Self> {
        let b = hex::decode(s).ok()?;
        if b.len() == 4 {
            Some(FourCC([b[0], b[1], b[2], b[3]]))
        } else { None }
    }
    pub fn as_str_lossy(&self) -> String {
        self.0.iter().map(|&c| if (32..=126).contains(&c) { c as char } else { '.' })
            .collect()
    }
}
impl fmt::Debug for FourCC { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str_lossy()) } }
impl fmt::Display for FourCC { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str_lossy()) } }

#[derive(Debug, Clone)]
pub struct BoxHeader {
    pub size: u64,          // total size including header, already resolved (0 sentinel applied)
    pub typ: FourCC,        // 4CC
    pub header_size: u64,   // 8, or 16 for the extended-size form
    pub start: u64,         // buffer offset of header start
}

/// One structural event per visited box, in pre-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxEvent {
    pub offset: u64,
    pub depth: usize,
    pub typ: FourCC,
    pub size: u64,          // clamped to the buffer end
}
