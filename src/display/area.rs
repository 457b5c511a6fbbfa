//! Rectangular display sub-regions used to scope partial screen updates.

use core::ops::RangeInclusive;

use crate::command::consts::*;

/// A rectangle on the panel in column and page coordinates, all bounds inclusive.
///
/// Construction repairs its input instead of failing: bounds swap into order and clamp onto the
/// panel, in line with the drawing layer's silent clipping. The wire length of the region is
/// computed from the current bounds on every call, so mutating the rectangle can never leave a
/// stale length behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderArea {
    start_col: u8,
    end_col: u8,
    start_page: u8,
    end_page: u8,
}

fn ordered_within(start: u8, end: u8, max: u8) -> (u8, u8) {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    (lo.min(max), hi.min(max))
}

impl RenderArea {
    /// Create a region spanning columns `start_col..=end_col` of pages `start_page..=end_page`.
    pub fn new(start_col: u8, end_col: u8, start_page: u8, end_page: u8) -> Self {
        let (start_col, end_col) = ordered_within(start_col, end_col, PIXEL_COL_MAX);
        let (start_page, end_page) = ordered_within(start_page, end_page, PAGE_MAX);
        RenderArea {
            start_col,
            end_col,
            start_page,
            end_page,
        }
    }

    /// The region covering the whole panel.
    pub const fn full() -> Self {
        RenderArea {
            start_col: 0,
            end_col: PIXEL_COL_MAX,
            start_page: 0,
            end_page: PAGE_MAX,
        }
    }

    pub fn start_col(&self) -> u8 {
        self.start_col
    }

    pub fn end_col(&self) -> u8 {
        self.end_col
    }

    pub fn start_page(&self) -> u8 {
        self.start_page
    }

    pub fn end_page(&self) -> u8 {
        self.end_page
    }

    /// Replace the column span, repairing it the way `new` does.
    pub fn set_cols(&mut self, start_col: u8, end_col: u8) {
        let (start_col, end_col) = ordered_within(start_col, end_col, PIXEL_COL_MAX);
        self.start_col = start_col;
        self.end_col = end_col;
    }

    /// Replace the page span, repairing it the way `new` does.
    pub fn set_pages(&mut self, start_page: u8, end_page: u8) {
        let (start_page, end_page) = ordered_within(start_page, end_page, PAGE_MAX);
        self.start_page = start_page;
        self.end_page = end_page;
    }

    /// Bytes of display RAM the region covers, one per column per page.
    pub fn buffer_len(&self) -> usize {
        let cols = (self.end_col - self.start_col + 1) as usize;
        let pages = (self.end_page - self.start_page + 1) as usize;
        cols * pages
    }

    /// The column span as buffer indices.
    pub(crate) fn cols(&self) -> RangeInclusive<usize> {
        self.start_col as usize..=self.end_col as usize
    }

    /// The page span as buffer indices.
    pub(crate) fn pages(&self) -> RangeInclusive<usize> {
        self.start_page as usize..=self.end_page as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_len_counts_columns_times_pages() {
        assert_eq!(RenderArea::new(0, 127, 0, 7).buffer_len(), BUF_LEN);
        assert_eq!(RenderArea::new(10, 19, 2, 3).buffer_len(), 20);
        assert_eq!(RenderArea::new(5, 5, 1, 1).buffer_len(), 1);
    }

    #[test]
    fn full_covers_the_panel() {
        assert_eq!(RenderArea::full(), RenderArea::new(0, 127, 0, 7));
        assert_eq!(RenderArea::full().buffer_len(), BUF_LEN);
    }

    #[test]
    fn construction_repairs_reversed_and_oversized_bounds() {
        let area = RenderArea::new(20, 10, 9, 200);
        assert_eq!(area.start_col(), 10);
        assert_eq!(area.end_col(), 20);
        assert_eq!(area.start_page(), 7);
        assert_eq!(area.end_page(), 7);
        assert_eq!(area.buffer_len(), 11);
    }

    #[test]
    fn buffer_len_follows_mutation() {
        let mut area = RenderArea::full();
        assert_eq!(area.buffer_len(), BUF_LEN);
        area.set_cols(0, 63);
        assert_eq!(area.buffer_len(), 512);
        area.set_pages(6, 1);
        assert_eq!(area.start_page(), 1);
        assert_eq!(area.buffer_len(), 384);
    }
}
