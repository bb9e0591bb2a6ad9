use ndarray::Array2;

use crate::geometry::BinaryMask;

/// Rotates `mask` counter-clockwise by `angle_deg` about its centre.
/// The output grid is enlarged to fully contain the rotated input (nothing is clipped).
/// Multiples of 90° are exact index permutations, other angles use nearest-neighbour sampling.
pub fn rotate_mask(mask: &BinaryMask, angle_deg: f32) -> BinaryMask {
    let angle = angle_deg.rem_euclid(360.0);
    let (h, w) = mask.dim();
    let px = mask.pixels();

    if angle == 0.0 {
        return mask.clone();
    } else if angle == 90.0 {
        return BinaryMask::new(Array2::from_shape_fn((w, h), |(r, c)| {
            px[[c, w - 1 - r]]
        }));
    } else if angle == 180.0 {
        return BinaryMask::new(Array2::from_shape_fn((h, w), |(r, c)| {
            px[[h - 1 - r, w - 1 - c]]
        }));
    } else if angle == 270.0 {
        return BinaryMask::new(Array2::from_shape_fn((w, h), |(r, c)| {
            px[[h - 1 - c, r]]
        }));
    }

    let (sin, cos) = (angle as f64).to_radians().sin_cos();
    let (hf, wf) = (h as f64, w as f64);

    //dimensions of the grid enclosing the rotated extent
    let out_w = (wf * cos.abs() + hf * sin.abs() - 1e-6).ceil().max(0.0) as usize;
    let out_h = (wf * sin.abs() + hf * cos.abs() - 1e-6).ceil().max(0.0) as usize;
    let (out_wf, out_hf) = (out_w as f64, out_h as f64);

    let rotated = Array2::from_shape_fn((out_h, out_w), |(r, c)| {
        //centre of the output pixel, relative to the centre of the output grid
        let dx = c as f64 + 0.5 - out_wf / 2.0;
        let dy = r as f64 + 0.5 - out_hf / 2.0;
        //inverse rotation back into the input grid (rows grow downwards)
        let src_x = dx * cos - dy * sin + wf / 2.0;
        let src_y = dx * sin + dy * cos + hf / 2.0;
        if src_x < 0.0 || src_y < 0.0 {
            return false;
        }
        let (src_c, src_r) = (src_x.floor() as usize, src_y.floor() as usize);
        src_r < h && src_c < w && px[[src_r, src_c]]
    });

    BinaryMask::new(rotated)
}

/// Rotates `mask` and trims it to its tight bounding box.
/// Returns `None` if nothing of the foreground survives the rotation.
pub fn rotate_and_trim(mask: &BinaryMask, angle_deg: f32) -> Option<BinaryMask> {
    rotate_mask(mask, angle_deg).trimmed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn l_shape() -> BinaryMask {
        BinaryMask::from_rows(&["#..", "#..", "###"]).unwrap()
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(rotate_mask(&l_shape(), 0.0), l_shape());
        assert_eq!(rotate_mask(&l_shape(), 360.0), l_shape());
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let rotated = rotate_mask(&BinaryMask::from_rows(&["##.", "..."]).unwrap(), 90.0);
        assert_eq!(rotated.to_rows(), vec!["..", "#.", "#."]);
        assert_eq!(rotate_mask(&l_shape(), 90.0).to_rows(), vec!["..#", "..#", "###"]);
    }

    #[test]
    fn half_turn_and_three_quarter_turn() {
        assert_eq!(rotate_mask(&l_shape(), 180.0).to_rows(), vec!["###", "..#", "..#"]);
        assert_eq!(rotate_mask(&l_shape(), 270.0).to_rows(), vec!["###", "#..", "#.."]);
        assert_eq!(rotate_mask(&rotate_mask(&l_shape(), 90.0), 270.0), l_shape());
    }

    #[test]
    fn diagonal_rotation_grows_the_grid() {
        let square = BinaryMask::filled(20, 20);
        let rotated = rotate_and_trim(&square, 45.0).unwrap();
        assert!(rotated.height() > 20 && rotated.height() <= 29);
        assert!(rotated.width() > 20 && rotated.width() <= 29);
    }

    #[test_case(10.0; "10 degrees")]
    #[test_case(30.0; "30 degrees")]
    #[test_case(135.0; "135 degrees")]
    #[test_case(250.0; "250 degrees")]
    fn rotation_roughly_preserves_area(angle: f32) {
        let rect = BinaryMask::filled(30, 20);
        let rotated = rotate_and_trim(&rect, angle).unwrap();
        let ratio = rotated.area() as f32 / rect.area() as f32;
        assert!((0.9..1.1).contains(&ratio), "area ratio {ratio} at {angle}°");
    }
}
