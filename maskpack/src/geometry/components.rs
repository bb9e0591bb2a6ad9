use std::collections::VecDeque;

use ndarray::Array2;

use crate::geometry::{BinaryMask, MaskBBox};

/// A connected region of foreground pixels
#[derive(Clone, Debug)]
pub struct Component {
    /// Bounding box of the component within the labelled mask
    pub bbox: MaskBBox,
    /// Number of pixels in the component
    pub area: usize,
    /// The component's pixels, cropped to `bbox`
    pub mask: BinaryMask,
}

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const NEIGHBORS_4: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

fn neighbors(
    (r, c): (usize, usize),
    (h, w): (usize, usize),
    offsets: &[(isize, isize)],
) -> impl Iterator<Item = (usize, usize)> + '_ {
    offsets.iter().filter_map(move |&(dr, dc)| {
        let nr = r.checked_add_signed(dr)?;
        let nc = c.checked_add_signed(dc)?;
        (nr < h && nc < w).then_some((nr, nc))
    })
}

/// Splits the foreground of `mask` into 8-connected components.
/// Components are ordered by their first pixel in row-major order.
pub fn label_components(mask: &BinaryMask) -> Vec<Component> {
    let dim = mask.dim();
    let mut labels: Array2<Option<usize>> = Array2::from_elem(dim, None);
    let mut regions: Vec<Vec<(usize, usize)>> = vec![];

    for (seed, &p) in mask.pixels().indexed_iter() {
        if !p || labels[seed].is_some() {
            continue;
        }
        let label = regions.len();
        let mut region = vec![];
        let mut queue = VecDeque::from([seed]);
        labels[seed] = Some(label);
        while let Some(px) = queue.pop_front() {
            region.push(px);
            for n in neighbors(px, dim, &NEIGHBORS_8) {
                if mask.get(n.0, n.1) && labels[n].is_none() {
                    labels[n] = Some(label);
                    queue.push_back(n);
                }
            }
        }
        regions.push(region);
    }

    regions
        .into_iter()
        .map(|region| {
            let bbox = region.iter().skip(1).fold(
                MaskBBox::new(region[0].0, region[0].1, region[0].0 + 1, region[0].1 + 1),
                |bb, &(r, c)| bb.union(&MaskBBox::new(r, c, r + 1, c + 1)),
            );
            let mut cropped = BinaryMask::empty(bbox.height(), bbox.width());
            for &(r, c) in &region {
                cropped.set(r - bbox.row_min, c - bbox.col_min, true);
            }
            Component {
                bbox,
                area: region.len(),
                mask: cropped,
            }
        })
        .collect()
}

/// Fills all background regions that are not 4-connected to the border of the mask.
pub fn fill_holes(mask: &BinaryMask) -> BinaryMask {
    let (h, w) = mask.dim();
    let mut reachable = Array2::from_elem((h, w), false);
    let mut queue = VecDeque::new();

    //seed with all background pixels on the border
    for r in 0..h {
        for c in 0..w {
            let on_border = r == 0 || c == 0 || r == h - 1 || c == w - 1;
            if on_border && !mask.get(r, c) {
                reachable[[r, c]] = true;
                queue.push_back((r, c));
            }
        }
    }

    while let Some(px) = queue.pop_front() {
        for n in neighbors(px, (h, w), &NEIGHBORS_4) {
            if !mask.get(n.0, n.1) && !reachable[n] {
                reachable[n] = true;
                queue.push_back(n);
            }
        }
    }

    BinaryMask::new(reachable.mapv(|r| !r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_pixels_are_connected() {
        let mask = BinaryMask::from_rows(&["#....", ".#..#", "....#"]).unwrap();
        let components = label_components(&mask);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].area, 2);
        assert_eq!(components[0].bbox, MaskBBox::new(0, 0, 2, 2));
        assert_eq!(components[0].mask.to_rows(), vec!["#.", ".#"]);
        assert_eq!(components[1].bbox, MaskBBox::new(1, 4, 3, 5));
    }

    #[test]
    fn ring_is_filled() {
        let ring = BinaryMask::from_rows(&[".....", ".###.", ".#.#.", ".###.", "....."]).unwrap();
        let filled = fill_holes(&ring);
        assert_eq!(filled.area(), 9);
        assert!(filled.get(2, 2));
        assert!(!filled.get(0, 0));
    }

    #[test]
    fn open_cavity_is_not_filled() {
        let cup = BinaryMask::from_rows(&["#.#", "#.#", "###"]).unwrap();
        assert_eq!(fill_holes(&cup), cup);
    }
}
