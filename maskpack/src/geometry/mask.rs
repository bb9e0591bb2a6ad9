use std::fmt::{Display, Formatter};

use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use ndarray::{Array2, Axis, Zip, s};

use crate::geometry::MaskBBox;

/// Binary occupancy grid. `true` marks a foreground (occupied) pixel.
/// Pixels are indexed as `(row, col)`, rows grow downwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryMask {
    pixels: Array2<bool>,
}

impl BinaryMask {
    pub fn new(pixels: Array2<bool>) -> Self {
        Self { pixels }
    }

    /// A mask of the given dimensions without any foreground
    pub fn empty(height: usize, width: usize) -> Self {
        Self::new(Array2::from_elem((height, width), false))
    }

    /// A mask of the given dimensions where every pixel is foreground
    pub fn filled(height: usize, width: usize) -> Self {
        Self::new(Array2::from_elem((height, width), true))
    }

    /// Parses a mask from textual rows: `#` or `1` is foreground, `.` or `0` is background.
    /// All rows need to be of equal length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut pixels = Array2::from_elem((height, width), false);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            ensure!(
                line.chars().count() == width,
                "row {row} has length {}, expected {width}",
                line.chars().count()
            );
            for (col, c) in line.chars().enumerate() {
                pixels[[row, col]] = match c {
                    '#' | '1' => true,
                    '.' | '0' => false,
                    _ => bail!("unexpected character {c:?} at ({row}, {col})"),
                };
            }
        }
        Ok(Self::new(pixels))
    }

    /// Inverse of [`BinaryMask::from_rows`]
    pub fn to_rows(&self) -> Vec<String> {
        self.pixels
            .rows()
            .into_iter()
            .map(|r| r.iter().map(|&p| if p { '#' } else { '.' }).collect())
            .collect_vec()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// `(height, width)`
    pub fn dim(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    pub fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.pixels[[row, col]]
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.pixels[[row, col]] = value;
    }

    /// Number of foreground pixels
    pub fn area(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// True if the mask contains no foreground pixel
    pub fn is_blank(&self) -> bool {
        !self.pixels.iter().any(|&p| p)
    }

    /// Tight bounding box of the foreground, `None` for a blank mask
    pub fn bbox(&self) -> Option<MaskBBox> {
        let occupied_rows = self
            .pixels
            .axis_iter(Axis(0))
            .positions(|r| r.iter().any(|&p| p))
            .collect_vec();
        let occupied_cols = self
            .pixels
            .axis_iter(Axis(1))
            .positions(|c| c.iter().any(|&p| p))
            .collect_vec();
        match (occupied_rows.first(), occupied_rows.last()) {
            (Some(&r_min), Some(&r_max)) => Some(MaskBBox::new(
                r_min,
                occupied_cols[0],
                r_max + 1,
                occupied_cols[occupied_cols.len() - 1] + 1,
            )),
            _ => None,
        }
    }

    /// Returns the pixels within `bbox` as a new mask
    pub fn crop(&self, bbox: &MaskBBox) -> BinaryMask {
        assert!(
            bbox.row_max <= self.height() && bbox.col_max <= self.width(),
            "crop {bbox} outside of mask with dim {:?}",
            self.dim()
        );
        let view = self
            .pixels
            .slice(s![bbox.row_min..bbox.row_max, bbox.col_min..bbox.col_max]);
        BinaryMask::new(view.to_owned())
    }

    /// Removes all border rows and columns without foreground.
    /// Returns `None` if the mask is blank.
    pub fn trimmed(&self) -> Option<BinaryMask> {
        self.bbox().map(|bbox| self.crop(&bbox))
    }

    /// Logical NOT of every pixel
    pub fn complement(&self) -> BinaryMask {
        BinaryMask::new(self.pixels.mapv(|p| !p))
    }

    /// Indices `(row, col)` of all foreground pixels, in row-major order
    pub fn foreground(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pixels
            .indexed_iter()
            .filter(|(_, p)| **p)
            .map(|(idx, _)| idx)
    }

    /// Checks whether any foreground pixel is shared with `other`.
    /// Both masks must have identical dimensions.
    pub fn intersects(&self, other: &BinaryMask) -> bool {
        assert_eq!(self.dim(), other.dim(), "mask dimensions do not match");
        !Zip::from(&self.pixels)
            .and(&other.pixels)
            .all(|&a, &b| !(a && b))
    }

    /// Pixelwise logical OR in place, both masks must have identical dimensions.
    pub fn or_assign(&mut self, other: &BinaryMask) {
        assert_eq!(self.dim(), other.dim(), "mask dimensions do not match");
        Zip::from(&mut self.pixels)
            .and(&other.pixels)
            .for_each(|a, &b| *a |= b);
    }

    /// Checks whether `footprint`, with its top-left corner at `(row, col)`, shares a foreground pixel with `self`.
    /// The footprint must lie entirely within the mask.
    pub fn overlaps_at(&self, footprint: &BinaryMask, row: usize, col: usize) -> bool {
        let (h, w) = footprint.dim();
        assert!(
            row + h <= self.height() && col + w <= self.width(),
            "footprint {:?} at ({row}, {col}) exceeds mask with dim {:?}",
            footprint.dim(),
            self.dim()
        );
        let window = self.pixels.slice(s![row..row + h, col..col + w]);
        !Zip::from(&window)
            .and(&footprint.pixels)
            .all(|&a, &b| !(a && b))
    }

    /// ORs `footprint` into `self` with its top-left corner at `(row, col)`.
    /// The footprint must lie entirely within the mask.
    pub fn or_at(&mut self, footprint: &BinaryMask, row: usize, col: usize) {
        let (h, w) = footprint.dim();
        assert!(
            row + h <= self.height() && col + w <= self.width(),
            "footprint {:?} at ({row}, {col}) exceeds mask with dim {:?}",
            footprint.dim(),
            self.dim()
        );
        let mut window = self.pixels.slice_mut(s![row..row + h, col..col + w]);
        Zip::from(&mut window)
            .and(&footprint.pixels)
            .for_each(|a, &b| *a |= b);
    }

    /// Returns a container-sized mask with `footprint` at `(row, col)` and background elsewhere
    pub fn embed(footprint: &BinaryMask, row: usize, col: usize, height: usize, width: usize) -> BinaryMask {
        let mut full = BinaryMask::empty(height, width);
        full.or_at(footprint, row, col);
        full
    }
}

impl Display for BinaryMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_is_tight() {
        let mask = BinaryMask::from_rows(&["......", "..##..", "...#..", "......"]).unwrap();
        assert_eq!(mask.bbox(), Some(MaskBBox::new(1, 2, 3, 4)));
        assert_eq!(mask.area(), 3);
        assert_eq!(mask.trimmed().unwrap().to_rows(), vec!["##", ".#"]);
    }

    #[test]
    fn blank_mask_has_no_bbox() {
        let mask = BinaryMask::empty(4, 3);
        assert!(mask.bbox().is_none());
        assert!(mask.trimmed().is_none());
        assert!(mask.is_blank());
    }

    #[test]
    fn overlap_and_commit() {
        let mut occupied = BinaryMask::from_rows(&["#...", "....", "...."]).unwrap();
        let footprint = BinaryMask::from_rows(&["##", "#."]).unwrap();
        assert!(occupied.overlaps_at(&footprint, 0, 0));
        assert!(!occupied.overlaps_at(&footprint, 0, 1));
        occupied.or_at(&footprint, 1, 2);
        assert_eq!(occupied.to_rows(), vec!["#...", "..##", "..#."]);
    }

    #[test]
    fn complement_flips_every_pixel() {
        let mask = BinaryMask::from_rows(&["#.", ".#"]).unwrap();
        assert_eq!(mask.complement().to_rows(), vec![".#", "#."]);
        assert!(!mask.intersects(&mask.complement()));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(BinaryMask::from_rows(&["##", "#"]).is_err());
        assert!(BinaryMask::from_rows(&["#x"]).is_err());
    }

    #[test]
    #[should_panic]
    fn mismatched_dimensions_panic() {
        let a = BinaryMask::empty(2, 2);
        let b = BinaryMask::empty(2, 3);
        a.intersects(&b);
    }
}
