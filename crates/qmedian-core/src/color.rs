//! Color values and channel selectors
//!
//! Colors are 24-bit RGB. Input records may carry a fourth byte, which is
//! read past and never stored.

/// Red channel index
pub const RED: usize = 0;
/// Green channel index
pub const GREEN: usize = 1;
/// Blue channel index
pub const BLUE: usize = 2;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read a color from the first three bytes of a record.
    ///
    /// Returns `None` if the record is shorter than three bytes.
    #[inline]
    pub fn from_record(record: &[u8]) -> Option<Self> {
        match record {
            [r, g, b, ..] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Get the value of one channel
    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Channels as an `[r, g, b]` array
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

/// Color channel selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in tie-break order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index of the channel in an `[r, g, b]` array
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => RED,
            Channel::Green => GREEN,
            Channel::Blue => BLUE,
        }
    }
}

/// One registered color in the quantizer's working set.
///
/// `original_index` is the slot of this color in the flattened index map.
/// `representative` is set only once the color has been collapsed into an
/// identical color, and then holds that color's `original_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    /// Channel values, fixed at registration
    pub color: Rgb,
    /// Packing byte, unused by quantization
    pub reserved: u8,
    /// Position in the flattened index map
    pub original_index: usize,
    /// Surviving identical color, if this entry is a duplicate
    pub representative: Option<usize>,
}

impl ColorEntry {
    /// Create an entry for a freshly registered color
    pub fn new(color: Rgb, original_index: usize) -> Self {
        Self {
            color,
            reserved: 0,
            original_index,
            representative: None,
        }
    }

    /// Get the value of one channel
    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        self.color.channel(channel)
    }

    /// Check if this entry has been collapsed into another color
    #[inline]
    pub fn is_duplicate(&self) -> bool {
        self.representative.is_some()
    }
}
