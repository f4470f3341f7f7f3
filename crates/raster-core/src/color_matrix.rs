//! Per-channel lookup tables for color transforms.
//!
//! Operations only need four 256-entry tables (input channel value to output
//! channel value). [`ColorTables`] is that contract; [`LookupTables`] holds
//! explicit tables and [`ColorMatrix`] derives them from a 4x5 matrix.

use crate::clamp::clamp;

/// 256-entry byte-to-byte lookup table.
pub type Table = [u8; 256];

/// Identity table: `t[i] == i`.
pub const IDENTITY_TABLE: Table = {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        t[i] = i as u8;
        i += 1;
    }
    t
};

/// Source of the four per-channel lookup tables.
pub trait ColorTables {
    /// Table applied to red.
    fn red_table(&self) -> Table;
    /// Table applied to green.
    fn green_table(&self) -> Table;
    /// Table applied to blue.
    fn blue_table(&self) -> Table;
    /// Table applied to alpha.
    fn alpha_table(&self) -> Table;

    /// All four tables, indexed by channel (R=0, G=1, B=2, A=3).
    fn tables(&self) -> [Table; 4] {
        [
            self.red_table(),
            self.green_table(),
            self.blue_table(),
            self.alpha_table(),
        ]
    }
}

/// Four explicit lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTables {
    /// Red table
    pub red: Table,
    /// Green table
    pub green: Table,
    /// Blue table
    pub blue: Table,
    /// Alpha table
    pub alpha: Table,
}

impl LookupTables {
    /// Tables that map every value to itself.
    pub const fn identity() -> Self {
        Self {
            red: IDENTITY_TABLE,
            green: IDENTITY_TABLE,
            blue: IDENTITY_TABLE,
            alpha: IDENTITY_TABLE,
        }
    }

    /// Builds each table from a function of the input value.
    pub fn from_fn(mut f: impl FnMut(usize, u8) -> u8) -> Self {
        let mut tables = [[0u8; 256]; 4];
        for (channel, table) in tables.iter_mut().enumerate() {
            for (i, slot) in table.iter_mut().enumerate() {
                *slot = f(channel, i as u8);
            }
        }
        let [red, green, blue, alpha] = tables;
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns `true` if all four tables are the identity.
    pub fn is_identity(&self) -> bool {
        self.red == IDENTITY_TABLE
            && self.green == IDENTITY_TABLE
            && self.blue == IDENTITY_TABLE
            && self.alpha == IDENTITY_TABLE
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorTables for LookupTables {
    fn red_table(&self) -> Table {
        self.red
    }
    fn green_table(&self) -> Table {
        self.green
    }
    fn blue_table(&self) -> Table {
        self.blue
    }
    fn alpha_table(&self) -> Table {
        self.alpha
    }
}

/// Row-major 4x5 color matrix.
///
/// Only the diagonal multipliers and the offset column feed the lookup
/// tables; cross-channel terms cannot be expressed per channel and are
/// ignored by [`ColorTables`].
///
/// ```text
/// | R' |   | m0  m1  m2  m3  | m4  |
/// | G' | = | m5  m6  m7  m8  | m9  |
/// | B' |   | m10 m11 m12 m13 | m14 |
/// | A' |   | m15 m16 m17 m18 | m19 |
/// ```
///
/// The offset column is normalized: an offset of `1.0` adds 255.
///
/// # Example
///
/// ```rust
/// use raster_core::{ColorMatrix, ColorTables};
///
/// let half_red = ColorMatrix::from_multipliers([0.5, 1.0, 1.0, 1.0], [0.0; 4]);
/// assert_eq!(half_red.red_table()[200], 100);
/// assert_eq!(half_red.green_table()[200], 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMatrix {
    /// Matrix entries, row-major
    pub data: [f32; 20],
}

const MULTIPLIER_INDEX: [usize; 4] = [0, 6, 12, 18];
const OFFSET_INDEX: [usize; 4] = [4, 9, 14, 19];

impl ColorMatrix {
    /// The identity matrix.
    pub const fn identity() -> Self {
        let mut data = [0.0f32; 20];
        data[0] = 1.0;
        data[6] = 1.0;
        data[12] = 1.0;
        data[18] = 1.0;
        Self { data }
    }

    /// Wraps raw matrix entries.
    pub const fn new(data: [f32; 20]) -> Self {
        Self { data }
    }

    /// Diagonal matrix from per-channel multipliers and normalized offsets
    /// (both in `r, g, b, a` order).
    pub fn from_multipliers(multipliers: [f32; 4], offsets: [f32; 4]) -> Self {
        let mut m = Self::new([0.0; 20]);
        for c in 0..4 {
            m.data[MULTIPLIER_INDEX[c]] = multipliers[c];
            m.data[OFFSET_INDEX[c]] = offsets[c];
        }
        m
    }

    /// Multiplier applied to `channel`.
    #[inline]
    pub fn multiplier(&self, channel: usize) -> f32 {
        self.data[MULTIPLIER_INDEX[channel]]
    }

    /// Offset added to `channel`, in byte units.
    #[inline]
    pub fn offset(&self, channel: usize) -> f32 {
        self.data[OFFSET_INDEX[channel]] * 255.0
    }

    fn table(&self, channel: usize) -> Table {
        let multiplier = self.multiplier(channel);
        let offset = self.offset(channel);
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = clamp((i as f32 * multiplier + offset) as i32);
        }
        table
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorTables for ColorMatrix {
    fn red_table(&self) -> Table {
        self.table(0)
    }
    fn green_table(&self) -> Table {
        self.table(1)
    }
    fn blue_table(&self) -> Table {
        self.table(2)
    }
    fn alpha_table(&self) -> Table {
        self.table(3)
    }
}
