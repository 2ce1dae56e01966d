//! Canvas, palette, and cursor state. Plain data, no rendering concerns —
//! front ends read pixels through `Canvas::get`.

// ─── Palette ─────────────────────────────────────────────────────────────────

/// The fixed color vocabulary. Any quoted literal outside this set is
/// rejected at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Black,
    White,
    Transparent,
}

impl Color {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Red"         => Some(Self::Red),
            "Blue"        => Some(Self::Blue),
            "Green"       => Some(Self::Green),
            "Yellow"      => Some(Self::Yellow),
            "Orange"      => Some(Self::Orange),
            "Purple"      => Some(Self::Purple),
            "Black"       => Some(Self::Black),
            "White"       => Some(Self::White),
            "Transparent" => Some(Self::Transparent),
            _             => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red         => "Red",
            Self::Blue        => "Blue",
            Self::Green       => "Green",
            Self::Yellow      => "Yellow",
            Self::Orange      => "Orange",
            Self::Purple      => "Purple",
            Self::Black       => "Black",
            Self::White       => "White",
            Self::Transparent => "Transparent",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Canvas ──────────────────────────────────────────────────────────────────

/// Square grid of color labels, White at the start of every session.
/// All access is bounds-checked; out-of-range writes are ignored.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(size: usize) -> Self {
        Self { size, pixels: vec![Color::White; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Read surface for front ends: `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(self.pixels[y as usize * self.size + x as usize])
        } else {
            None
        }
    }

    /// Returns whether the write landed on the grid.
    pub fn set(&mut self, x: i64, y: i64, color: Color) -> bool {
        if self.in_bounds(x, y) {
            self.pixels[y as usize * self.size + x as usize] = color;
            true
        } else {
            false
        }
    }

    /// Count of pixels matching `color` inside the axis-aligned box with
    /// corners `(x1, y1)` and `(x2, y2)`, normalized and clipped to the grid.
    pub fn count_in_box(&self, color: Color, x1: i64, y1: i64, x2: i64, y2: i64) -> i64 {
        let (lo_x, hi_x) = (x1.min(x2).max(0), x1.max(x2).min(self.size as i64 - 1));
        let (lo_y, hi_y) = (y1.min(y2).max(0), y1.max(y2).min(self.size as i64 - 1));
        let mut count = 0;
        for y in lo_y..=hi_y {
            for x in lo_x..=hi_x {
                if self.get(x, y) == Some(color) {
                    count += 1;
                }
            }
        }
        count
    }
}

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Drawing position plus active brush. Exactly one per run, replaced whole
/// by `Spawn`. The brush starts Transparent (paints nothing) with size 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub x: i64,
    pub y: i64,
    pub color: Color,
    pub size: i64,
}

impl Cursor {
    pub fn origin() -> Self {
        Self { x: 0, y: 0, color: Color::Transparent, size: 1 }
    }

    pub fn spawned(x: i64, y: i64) -> Self {
        Self { x, y, ..Self::origin() }
    }

    /// Even sizes round down to the next odd value; the caller rejects
    /// non-positive sizes before this runs.
    pub fn set_size(&mut self, size: i64) {
        self.size = if size % 2 == 0 { size - 1 } else { size };
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
