//! Canvas/grid allocation.
//!
//! Regions are axis-aligned rectangles in EMUs. All allocation operations
//! are pure functions of their inputs and fail fast with
//! [`Error::InvalidLayout`] instead of producing a degenerate region.

use crate::common::unit::inches_to_emu;
use crate::common::{Error, Result};
use log::debug;

/// Length in English Metric Units (914,400 per inch).
pub type Emu = i64;

/// An axis-aligned rectangular region within the slide canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge in EMUs
    pub x: Emu,
    /// Top edge in EMUs
    pub y: Emu,
    /// Width in EMUs
    pub w: Emu,
    /// Height in EMUs
    pub h: Emu,
}

impl Rect {
    /// Create a region from raw EMU coordinates.
    #[inline]
    pub const fn new(x: Emu, y: Emu, w: Emu, h: Emu) -> Self {
        Self { x, y, w, h }
    }

    /// Create a region from inch coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckforge::layout::Rect;
    ///
    /// let r = Rect::from_inches(0.5, 0.3, 1.0, 0.5);
    /// assert_eq!(r.x, 457_200);
    /// assert_eq!(r.w, 914_400);
    /// ```
    #[inline]
    pub fn from_inches(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x: inches_to_emu(x),
            y: inches_to_emu(y),
            w: inches_to_emu(w),
            h: inches_to_emu(h),
        }
    }

    /// Right edge in EMUs.
    #[inline]
    pub fn right(&self) -> Emu {
        self.x + self.w
    }

    /// Bottom edge in EMUs.
    #[inline]
    pub fn bottom(&self) -> Emu {
        self.y + self.h
    }

    /// Shrink the region by the given amounts on each side.
    ///
    /// Fails with [`Error::InvalidLayout`] if the remaining width or height
    /// would be non-positive.
    pub fn inset(&self, left: Emu, top: Emu, right: Emu, bottom: Emu) -> Result<Self> {
        let r = Self {
            x: self.x + left,
            y: self.y + top,
            w: self.w - left - right,
            h: self.h - top - bottom,
        };
        r.validated()
    }

    /// Carve a strip of the given height off the top of the region.
    ///
    /// Returns `(strip, remainder)`. Fails if the strip does not fit with
    /// room to spare below it.
    pub fn shrink_top(&self, strip: Emu) -> Result<(Self, Self)> {
        let top = Self {
            h: strip,
            ..*self
        };
        let rest = Self {
            y: self.y + strip,
            h: self.h - strip,
            ..*self
        };
        Ok((top.validated()?, rest.validated()?))
    }

    /// Divide the region's width into `count` equal columns separated by
    /// `gap`, preserving y and height.
    ///
    /// The widths are computed in integer EMUs; the last column absorbs the
    /// division remainder so that the columns plus gaps cover the parent
    /// width exactly. `count == 1` returns the region unchanged with no gap
    /// applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckforge::layout::Rect;
    ///
    /// let parent = Rect::new(0, 0, 1_000, 100);
    /// let cols = parent.split_columns(3, 50).unwrap();
    /// assert_eq!(cols.len(), 3);
    /// assert_eq!(cols[0].w + cols[1].w + cols[2].w + 2 * 50, parent.w);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLayout`] when `count` is zero, `gap` is negative, or
    /// the gaps leave no positive width for the columns.
    pub fn split_columns(&self, count: usize, gap: Emu) -> Result<Vec<Self>> {
        if count == 0 {
            return Err(Error::InvalidLayout(
                "column count must be at least 1".to_string(),
            ));
        }
        if gap < 0 {
            return Err(Error::InvalidLayout(format!(
                "column gap must be non-negative, got {gap} EMU"
            )));
        }
        if count == 1 {
            return Ok(vec![self.validated()?]);
        }

        let total_gap = gap * (count as Emu - 1);
        let available = self.w - total_gap;
        let col_w = available / count as Emu;
        if col_w <= 0 {
            return Err(Error::InvalidLayout(format!(
                "{count} columns with {gap} EMU gaps leave no width in a {} EMU region",
                self.w
            )));
        }
        let remainder = available - col_w * count as Emu;
        debug!(
            "split {} EMU into {count} columns of {col_w} EMU (gap {gap}, remainder {remainder})",
            self.w
        );

        let mut columns = Vec::with_capacity(count);
        let mut x = self.x;
        for i in 0..count {
            let w = if i == count - 1 { col_w + remainder } else { col_w };
            columns.push(Self {
                x,
                y: self.y,
                w,
                h: self.h,
            });
            x += w + gap;
        }
        Ok(columns)
    }

    /// Return the region unchanged if both extents are positive.
    pub fn validated(self) -> Result<Self> {
        if self.w <= 0 || self.h <= 0 {
            return Err(Error::InvalidLayout(format!(
                "region {} x {} EMU has a non-positive extent",
                self.w, self.h
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_single_column_is_identity() {
        let parent = Rect::new(100, 200, 3_000, 400);
        let cols = parent.split_columns(1, 250).unwrap();
        assert_eq!(cols, vec![parent]);
    }

    #[test]
    fn test_split_columns_exact_cover() {
        let parent = Rect::from_inches(0.5, 5.5, 12.333, 1.2);
        let cols = parent.split_columns(3, inches_to_emu(0.25)).unwrap();

        assert_eq!(cols.len(), 3);
        let total: Emu = cols.iter().map(|c| c.w).sum();
        assert_eq!(total + 2 * inches_to_emu(0.25), parent.w);

        // Equal widths up to the remainder in the last column
        assert_eq!(cols[0].w, cols[1].w);
        assert!(cols[2].w - cols[0].w < 3);

        // Siblings keep the parent's vertical extent and do not overlap
        for pair in cols.windows(2) {
            assert_eq!(pair[0].y, pair[1].y);
            assert_eq!(pair[0].h, pair[1].h);
            assert!(pair[0].right() <= pair[1].x);
        }
        assert_eq!(cols[2].right(), parent.right());
    }

    #[test]
    fn test_split_columns_rejects_oversized_gap() {
        let parent = Rect::new(0, 0, 1_000, 100);
        let err = parent.split_columns(3, 500).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout(_)));

        // Gap exactly consuming the width is degenerate too
        assert!(parent.split_columns(2, 1_000).is_err());
    }

    #[test]
    fn test_split_columns_rejects_zero_count() {
        let parent = Rect::new(0, 0, 1_000, 100);
        assert!(parent.split_columns(0, 0).is_err());
    }

    #[test]
    fn test_inset() {
        let page = Rect::from_inches(0.0, 0.0, 13.333, 7.5);
        let margin = inches_to_emu(0.5);
        let frame = page.inset(margin, 0, margin, 0).unwrap();
        assert_eq!(frame.x, margin);
        assert_eq!(frame.w, page.w - 2 * margin);
        assert_eq!(frame.h, page.h);

        assert!(page.inset(page.w, 0, 0, 0).is_err());
    }

    #[test]
    fn test_shrink_top() {
        let region = Rect::new(0, 1_000, 500, 600);
        let (strip, rest) = region.shrink_top(100).unwrap();
        assert_eq!(strip, Rect::new(0, 1_000, 500, 100));
        assert_eq!(rest, Rect::new(0, 1_100, 500, 500));
        assert!(region.shrink_top(600).is_err());
    }

    proptest! {
        #[test]
        fn split_columns_covers_parent(
            w in 1i64..20_000_000,
            count in 1usize..12,
            gap in 0i64..2_000_000,
        ) {
            let parent = Rect::new(0, 0, w, 1_000);
            if let Ok(cols) = parent.split_columns(count, gap) {
                prop_assert_eq!(cols.len(), count);
                let total: Emu = cols.iter().map(|c| c.w).sum();
                prop_assert_eq!(total + gap * (count as i64 - 1), w);
                for c in &cols {
                    prop_assert!(c.w > 0);
                }
                for pair in cols.windows(2) {
                    prop_assert_eq!(pair[0].right() + gap, pair[1].x);
                }
                prop_assert_eq!(cols[cols.len() - 1].right(), parent.right());
            }
        }
    }
}
