use ratatui::layout::{Rect, Size};

/// Height of the name and tagline bands.
pub const TEXT_BAND_HEIGHT: i32 = 3;
/// Height of the bitterness gauge band.
pub const GAUGE_HEIGHT: i32 = 3;
/// Columns/rows taken by a bordered block.
pub const BORDER: i32 = 2;

/// Live terminal dimensions, sampled on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalFrame {
    pub width: u16,
    pub height: u16,
}

impl TerminalFrame {
    pub fn new(width: u16, height: u16) -> Self {
        TerminalFrame { width, height }
    }
}

impl From<Size> for TerminalFrame {
    fn from(s: Size) -> Self {
        TerminalFrame::new(s.width, s.height)
    }
}

impl From<Rect> for TerminalFrame {
    fn from(r: Rect) -> Self {
        TerminalFrame::new(r.width, r.height)
    }
}

/// A screen rectangle. Signed so that degenerate terminals (fewer than
/// nine rows) produce visibly negative bands instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Region { x, y, width, height }
    }

    /// Build from left/top/right/bottom edges.
    pub const fn from_edges(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Region::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True when both regions share at least one cell.
    pub fn overlaps(&self, other: &Region) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Convert to a ratatui `Rect`, clamping negative extents to zero.
    pub fn to_rect(&self) -> Rect {
        let clamp = |v: i32| v.clamp(0, u16::MAX as i32) as u16;
        Rect::new(
            clamp(self.x),
            clamp(self.y),
            clamp(self.width),
            clamp(self.height),
        )
    }
}

/// The seven regions of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSet {
    pub list: Region,
    pub name: Region,
    pub tagline: Region,
    pub description: Region,
    pub gauge: Region,
    pub ingredients: Region,
    pub image: Region,
}

impl RegionSet {
    /// All regions with a short name, in paint order.
    pub fn named(&self) -> [(&'static str, Region); 7] {
        [
            ("list", self.list),
            ("name", self.name),
            ("tagline", self.tagline),
            ("description", self.description),
            ("gauge", self.gauge),
            ("ingredients", self.ingredients),
            ("image", self.image),
        ]
    }
}

/// Width of the list column: the widest label plus one padding column and
/// two border columns.
pub fn compute_list_column_width(max_label_len: usize) -> u16 {
    let w = max_label_len.saturating_add(1).saturating_add(BORDER as usize);
    w.min(u16::MAX as usize) as u16
}

/// Largest box the image may occupy: half of what the list leaves over,
/// full terminal height.
pub fn image_box(frame: TerminalFrame, list_column_width: u16) -> (i32, i32) {
    let remaining = frame.width as i32 - list_column_width as i32;
    (remaining / 2, frame.height as i32)
}

/// Regions with the image occupying its whole maximum box.
pub fn compute_regions(frame: TerminalFrame, list_column_width: u16) -> RegionSet {
    let (image_width, _) = image_box(frame, list_column_width);
    compute_regions_with_image(frame, list_column_width, image_width)
}

/// Regions for an image region `image_width` columns wide hugging the
/// right edge. The middle band between list and image is split
/// top-to-bottom into name, tagline, description, gauge and ingredients.
pub fn compute_regions_with_image(
    frame: TerminalFrame,
    list_column_width: u16,
    image_width: i32,
) -> RegionSet {
    let width = frame.width as i32;
    let height = frame.height as i32;
    let left = list_column_width as i32;
    let right = width - image_width;

    let top_bands = 2 * TEXT_BAND_HEIGHT;
    // Left unguarded below nine rows; bands may come out negative.
    let remaining = height - top_bands - GAUGE_HEIGHT;
    let gauge_top = top_bands + remaining / 2;
    let ingredients_top = gauge_top + GAUGE_HEIGHT;

    RegionSet {
        list: Region::new(0, 0, left, height),
        name: Region::from_edges(left, 0, right, TEXT_BAND_HEIGHT),
        tagline: Region::from_edges(left, TEXT_BAND_HEIGHT, right, top_bands),
        description: Region::from_edges(left, top_bands, right, gauge_top),
        gauge: Region::from_edges(left, gauge_top, right, ingredients_top),
        ingredients: Region::from_edges(left, ingredients_top, right, height),
        image: Region::new(right, 0, image_width, height),
    }
}
