//! Paging container model
//!
//! Owns the continuous scroll offset over a list of pages and feeds every
//! materialized page's position through the [`StackTransformer`]. Page `i`
//! sits at position `i - scroll`, so earlier pages stack behind the current
//! one and paging forward moves toward index 0.

use std::ops::Range;

use crate::axis::PageSize;
use crate::target::PageTarget;
use crate::transform::{PageTransform, StackTransformer};

#[derive(Debug)]
pub struct StackPager {
    transformer: StackTransformer,
    page_count: usize,
    scroll: f64,
}

impl StackPager {
    /// Create a pager focused on the last page
    pub fn new(transformer: StackTransformer, page_count: usize) -> Self {
        let mut pager = Self {
            transformer,
            page_count: 0,
            scroll: 0.0,
        };
        pager.set_page_count(page_count);
        tracing::info!(
            page_count,
            stacked = pager.transformer.config().stacked_count(),
            offscreen_limit = pager.offscreen_page_limit(),
            "Created stack pager"
        );
        pager
    }

    pub fn transformer(&self) -> &StackTransformer {
        &self.transformer
    }

    /// Replace the engine, e.g. after a geometry change; keeps the scroll offset
    pub fn set_transformer(&mut self, transformer: StackTransformer) {
        self.transformer = transformer;
    }

    /// Pages kept alive on each side of the current one
    pub fn offscreen_page_limit(&self) -> usize {
        self.transformer.config().stacked_count() as usize + 1
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Change the data set size and focus its last page
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.scroll = self.max_scroll();
    }

    fn max_scroll(&self) -> f64 {
        self.page_count.saturating_sub(1) as f64
    }

    #[inline]
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Set the continuous scroll offset, clamped to the page range
    pub fn set_scroll(&mut self, scroll: f64) {
        if scroll.is_nan() {
            return;
        }
        self.scroll = scroll.clamp(0.0, self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll(self.scroll + delta);
    }

    /// Page nearest to the scroll offset
    pub fn current_item(&self) -> usize {
        self.scroll.round() as usize
    }

    pub fn set_current_item(&mut self, index: usize) {
        self.set_scroll(index as f64);
    }

    /// Flip the current page away, revealing the one behind it
    ///
    /// Returns false when already on the first page.
    pub fn flip_forward(&mut self) -> bool {
        let current = self.current_item();
        if current == 0 {
            return false;
        }
        self.set_current_item(current - 1);
        true
    }

    /// Bring the last flipped page back to the front
    pub fn flip_back(&mut self) -> bool {
        let current = self.current_item();
        if current + 1 >= self.page_count {
            return false;
        }
        self.set_current_item(current + 1);
        true
    }

    /// Whether the scroll offset rests on a page
    pub fn settled(&self) -> bool {
        self.scroll.fract() == 0.0
    }

    /// Position of page `index` relative to the foreground
    #[inline]
    pub fn position_of(&self, index: usize) -> f64 {
        index as f64 - self.scroll
    }

    /// Indices of pages kept alive around the scroll offset
    pub fn materialized_pages(&self) -> Range<usize> {
        let limit = self.offscreen_page_limit();
        let start = (self.scroll.floor() as usize).saturating_sub(limit);
        let end = (self.scroll.ceil() as usize + limit + 1).min(self.page_count);
        start.min(end)..end
    }

    /// Transforms of all materialized pages, in draw order
    pub fn transforms(&self, size: PageSize) -> Vec<(usize, PageTransform)> {
        self.materialized_pages()
            .map(|index| {
                let transform = self
                    .transformer
                    .compute_transform(self.position_of(index), size);
                (index, transform)
            })
            .collect()
    }

    /// Apply transforms to `pages`, indexed by page index
    ///
    /// Pages outside the materialized range are left untouched.
    pub fn layout<T: PageTarget>(&self, pages: &mut [T]) {
        let range = self.materialized_pages();
        let end = range.end.min(pages.len());
        for index in range.start.min(end)..end {
            let position = self.position_of(index);
            self.transformer.transform_page(&mut pages[index], position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryConfig;
    use crate::transform::Regime;

    fn pager(page_count: usize) -> StackPager {
        StackPager::new(StackTransformer::new(GeometryConfig::with_stacked(3)), page_count)
    }

    #[test]
    fn test_starts_on_last_page() {
        let pager = pager(10);
        assert_eq!(pager.current_item(), 9);
        assert_eq!(pager.scroll(), 9.0);
        assert_eq!(pager.offscreen_page_limit(), 4);
        assert!(pager.settled());
    }

    #[test]
    fn test_positions() {
        let pager = pager(10);
        assert_eq!(pager.position_of(9), 0.0);
        assert_eq!(pager.position_of(8), -1.0);
        assert_eq!(pager.position_of(5), -4.0);
    }

    #[test]
    fn test_materialized_pages() {
        let mut pager = pager(10);
        assert_eq!(pager.materialized_pages(), 5..10);

        pager.set_scroll(4.5);
        assert_eq!(pager.materialized_pages(), 0..10);

        pager.set_current_item(1);
        assert_eq!(pager.materialized_pages(), 0..6);

        assert_eq!(self::pager(0).materialized_pages(), 0..0);
    }

    #[test]
    fn test_flip_navigation() {
        let mut pager = pager(3);
        assert!(!pager.flip_back());
        assert!(pager.flip_forward());
        assert_eq!(pager.current_item(), 1);
        assert!(pager.flip_forward());
        assert!(!pager.flip_forward());
        assert_eq!(pager.current_item(), 0);
        assert!(pager.flip_back());
        assert_eq!(pager.current_item(), 1);
    }

    #[test]
    fn test_scroll_clamped() {
        let mut pager = pager(5);
        pager.scroll_by(10.0);
        assert_eq!(pager.scroll(), 4.0);
        pager.set_scroll(-3.0);
        assert_eq!(pager.scroll(), 0.0);
        pager.set_scroll(f64::NAN);
        assert_eq!(pager.scroll(), 0.0);
    }

    #[test]
    fn test_mid_flip_transforms() {
        let mut pager = pager(10);
        pager.set_scroll(8.75);
        assert!(!pager.settled());

        let transforms = pager.transforms(PageSize::new(40.0, 100.0));
        let (index, leaving) = transforms.last().unwrap();
        assert_eq!(*index, 9);
        assert_eq!(leaving.regime, Regime::Flipping);
        assert!((leaving.position - 0.25).abs() < 1e-12);

        let (_, arriving) = transforms.iter().find(|(i, _)| *i == 8).unwrap();
        assert_eq!(arriving.regime, Regime::Stacked);
        assert!((arriving.position + 0.75).abs() < 1e-12);

        // draw order is ascending index
        assert!(transforms.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_set_page_count_refocuses_last() {
        let mut pager = pager(10);
        pager.set_current_item(2);
        pager.set_page_count(4);
        assert_eq!(pager.current_item(), 3);
    }
}
