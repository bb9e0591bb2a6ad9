use serde::{Deserialize, Serialize};

use crate::geometry::{BinaryMask, MaskBBox};

/// Scalar shape descriptors of a mask's foreground, computed once per mask.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskDescriptors {
    /// Number of foreground pixels
    pub area: usize,
    /// Length of the major axis of the ellipse with the same normalized second central moments as the foreground
    pub major_axis_length: f32,
    /// Tight bounding box of the foreground, `None` for a blank mask
    pub bbox: Option<MaskBBox>,
}

impl MaskDescriptors {
    pub fn from_mask(mask: &BinaryMask) -> Self {
        let bbox = mask.bbox();
        let (area, sum_r, sum_c) = mask
            .foreground()
            .fold((0usize, 0.0f64, 0.0f64), |(n, sr, sc), (r, c)| {
                (n + 1, sr + r as f64, sc + c as f64)
            });

        if area == 0 {
            return Self {
                area,
                major_axis_length: 0.0,
                bbox,
            };
        }

        let (mean_r, mean_c) = (sum_r / area as f64, sum_c / area as f64);
        let (mu_rr, mu_cc, mu_rc) =
            mask.foreground()
                .fold((0.0f64, 0.0f64, 0.0f64), |(rr, cc, rc), (r, c)| {
                    let (dr, dc) = (r as f64 - mean_r, c as f64 - mean_c);
                    (rr + dr * dr, cc + dc * dc, rc + dr * dc)
                });

        //eigenvalues of the inertia tensor, normalized by area
        let (a, b, c) = (
            mu_rr / area as f64,
            mu_rc / area as f64,
            mu_cc / area as f64,
        );
        let half_trace = (a + c) / 2.0;
        let discriminant = (((a - c) / 2.0).powi(2) + b * b).sqrt();
        let lambda_max = (half_trace + discriminant).max(0.0);

        Self {
            area,
            major_axis_length: (4.0 * lambda_max.sqrt()) as f32,
            bbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn square_descriptors() {
        let mask = BinaryMask::filled(50, 50);
        let d = MaskDescriptors::from_mask(&mask);
        assert_eq!(d.area, 2500);
        assert_eq!(d.bbox, Some(MaskBBox::new(0, 0, 50, 50)));
        //variance of a discrete uniform distribution over n values: (n^2 - 1) / 12
        let expected = 4.0 * ((50.0f32 * 50.0 - 1.0) / 12.0).sqrt();
        assert!(approx_eq!(f32, d.major_axis_length, expected, epsilon = 1e-3));
    }

    #[test]
    fn elongated_shape_has_longer_major_axis() {
        let bar = MaskDescriptors::from_mask(&BinaryMask::filled(4, 40));
        let square = MaskDescriptors::from_mask(&BinaryMask::filled(13, 13));
        assert!(bar.area < square.area);
        assert!(bar.major_axis_length > square.major_axis_length);
    }

    #[test]
    fn major_axis_is_orientation_invariant() {
        let horizontal = BinaryMask::from_rows(&["#####"]).unwrap();
        let vertical = BinaryMask::from_rows(&["#", "#", "#", "#", "#"]).unwrap();
        let h = MaskDescriptors::from_mask(&horizontal);
        let v = MaskDescriptors::from_mask(&vertical);
        assert!(approx_eq!(f32, h.major_axis_length, v.major_axis_length, ulps = 4));
    }

    #[test]
    fn blank_mask_is_degenerate() {
        let d = MaskDescriptors::from_mask(&BinaryMask::empty(3, 3));
        assert_eq!(d.area, 0);
        assert_eq!(d.major_axis_length, 0.0);
        assert_eq!(d.bbox, None);
    }
}
