//! Grid layout calculations.
//!
//! Every function here is pure: no I/O, no drawing, no shared state. The
//! catalog renderer asks a [`LayoutCursor`] where the next photo goes and
//! whether it has to open a new grid page first.
//!
//! ## The grid
//!
//! ```text
//!  index mod 9      cell (row, col)
//!  ┌───┬───┬───┐    ┌─────┬─────┬─────┐
//!  │ 0 │ 1 │ 2 │    │ 0,0 │ 0,1 │ 0,2 │
//!  ├───┼───┼───┤    ├─────┼─────┼─────┤
//!  │ 3 │ 4 │ 5 │ →  │ 1,0 │ 1,1 │ 1,2 │
//!  ├───┼───┼───┤    ├─────┼─────┼─────┤
//!  │ 6 │ 7 │ 8 │    │ 2,0 │ 2,1 │ 2,2 │
//!  └───┴───┴───┘    └─────┴─────┴─────┘
//! ```
//!
//! A grid page holds [`CELLS_PER_PAGE`] photos. The first photo always opens
//! grid page 1 (the cover is a separate page), and every 9th photo after that
//! opens the next one. No trailing empty page is ever produced.

/// Rows and columns per grid page.
pub const GRID_SIZE: usize = 3;

/// Photos per grid page.
pub const CELLS_PER_PAGE: usize = GRID_SIZE * GRID_SIZE;

/// A position inside the 3×3 grid of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

/// Cell for the photo at 0-based sequence index `index`.
///
/// `(⌊(i mod 9) / 3⌋, (i mod 9) mod 3)`
pub fn cell_for_index(index: usize) -> GridCell {
    let slot = index % CELLS_PER_PAGE;
    GridCell {
        row: slot / GRID_SIZE,
        col: slot % GRID_SIZE,
    }
}

/// 1-based grid page number (cover excluded) for the photo at `index`.
pub fn grid_page_for_index(index: usize) -> usize {
    index / CELLS_PER_PAGE + 1
}

/// Number of grid pages needed for `items` photos: `ceil(items / 9)`.
pub fn grid_page_count(items: usize) -> usize {
    items.div_ceil(CELLS_PER_PAGE)
}

/// Where the cursor stands between placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    /// No grid page open yet.
    AwaitingPage,
    /// The current row has room left.
    InRow,
    /// The last placement completed a row; the next one starts the row below.
    RowFull,
    /// The last placement filled the page; the next one opens a new page.
    PageFull,
}

/// Result of asking the cursor for the next slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub cell: GridCell,
    /// 1-based grid page number.
    pub page: usize,
    /// True when this placement must start a fresh grid page.
    pub opens_page: bool,
}

/// Per-call layout state: current row, column and grid page.
///
/// Owned by a single render call and never shared, so concurrent renders
/// cannot disturb each other's pagination.
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    row: usize,
    col: usize,
    page: usize,
    state: LayoutState,
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            page: 0,
            state: LayoutState::AwaitingPage,
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Grid pages opened so far.
    pub fn pages_opened(&self) -> usize {
        self.page
    }

    /// Claim the next cell, opening a page when none is open or the current
    /// one is full.
    pub fn place(&mut self) -> Placement {
        let opens_page = matches!(
            self.state,
            LayoutState::AwaitingPage | LayoutState::PageFull
        );
        if opens_page {
            self.page += 1;
            self.row = 0;
            self.col = 0;
        }

        let cell = GridCell {
            row: self.row,
            col: self.col,
        };

        self.col += 1;
        self.state = if self.col < GRID_SIZE {
            LayoutState::InRow
        } else {
            self.col = 0;
            self.row += 1;
            if self.row < GRID_SIZE {
                LayoutState::RowFull
            } else {
                self.row = 0;
                LayoutState::PageFull
            }
        };

        Placement {
            cell,
            page: self.page,
            opens_page,
        }
    }
}

/// Plan placements for `items` photos in sequence order.
pub fn plan_placements(items: usize) -> Vec<Placement> {
    let mut cursor = LayoutCursor::new();
    (0..items).map(|_| cursor.place()).collect()
}

/// Fit an image of `source` pixel dimensions into a box, width first.
///
/// The image takes the full box width and its height follows the aspect
/// ratio. When that height would overflow the box, the image is scaled down
/// to the box height instead.
///
/// # Returns
/// * `(width, height)` in the box's unit
pub fn fit_to_box(source: (u32, u32), box_width: f32, box_height: f32) -> (f32, f32) {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        return (box_width, box_height);
    }
    let aspect = src_h as f32 / src_w as f32;
    let height = box_width * aspect;
    if height <= box_height {
        (box_width, height)
    } else {
        (box_height / aspect, box_height)
    }
}

/// Largest pixel width worth embedding for an image printed `width_mm` wide
/// at no more than `max_dpi`.
pub fn max_pixel_width(width_mm: f32, max_dpi: f32) -> u32 {
    (width_mm / 25.4 * max_dpi).ceil().max(1.0) as u32
}
