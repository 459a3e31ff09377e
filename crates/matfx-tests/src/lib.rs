//! Integration tests for matfx crates.
//!
//! End-to-end checks that decode GD files, run filter passes over them and
//! encode the result again.

#[cfg(test)]
mod tests {
    use matfx_core::{filter_fn, Argb, Filter, Image, Matrix, Point, Rect, Size};
    use tempfile::tempdir;

    /// Per-channel box blur over the whole window, out-of-image cells count as zero.
    struct BoxBlur;

    impl Filter for BoxBlur {
        fn apply(&mut self, _: &(), m: &Matrix<'_>) -> Argb {
            let n = m.size() * m.size();
            let mut sums = [0u32; 4];
            for (_, c) in m.window() {
                for (s, v) in sums.iter_mut().zip(c.channels()) {
                    *s += v as u32;
                }
            }
            let [a, r, g, b] = sums.map(|s| (s / n) as u8);
            Argb::from_channels(a, r, g, b)
        }
    }

    /// 3x3 integer kernel applied to the red channel; weights come from the pass payload.
    struct RedKernel;

    impl Filter<[i32; 9]> for RedKernel {
        fn apply(&mut self, weights: &[i32; 9], m: &Matrix<'_>) -> Argb {
            let acc: i32 = m
                .window()
                .zip(weights.iter())
                .map(|((_, c), w)| c.r() as i32 * w)
                .sum();
            Argb::from_channels(0xFF, acc.clamp(0, 255) as u8, 0, 0)
        }
    }

    fn gradient(width: u32, height: u32) -> Image {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| Argb::from_channels(0xFF, (x * 16) as u8, (y * 16) as u8, 0x80)))
            .collect();
        Image::from_pixels(Size::new(width, height), pixels).unwrap()
    }

    /// Test full pipeline: encode -> decode -> filter -> encode -> decode
    #[test]
    fn test_gd_filter_pipeline() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.gd");
        let output = dir.path().join("output.gd");

        let source = Image::filled(Size::new(5, 5), Argb::OPAQUE_WHITE);
        matfx_io::write(&input, &source).unwrap();

        let loaded = matfx_io::read_image(&input).unwrap();
        assert_eq!(loaded, source);

        let mut blurred = Image::new(loaded.size());
        let visited = loaded.apply_buffered_filter(BoxBlur, 3, &mut blurred).unwrap();
        assert_eq!(visited, 25);

        // Interior windows see nine white cells, corners only four.
        assert_eq!(blurred.color_xy(2, 2), Argb::OPAQUE_WHITE);
        assert_eq!(blurred.color_xy(0, 0), Argb::from_channels(113, 113, 113, 113));

        matfx_io::write(&output, &blurred).unwrap();
        let reloaded = matfx_io::read(&output).unwrap();
        assert_eq!(reloaded.width, 5);
        assert_eq!(reloaded.height, 5);
        assert_eq!(reloaded.pixels[12], Argb::OPAQUE_WHITE);
    }

    #[test]
    fn test_identity_in_place_vs_buffered_after_decode() {
        let bytes = matfx_io::write_to_memory(&gradient(7, 6)).unwrap();
        let source = Image::from_decoded(matfx_io::read_from_memory(&bytes).unwrap()).unwrap();

        let identity = filter_fn(|_: &(), m: &Matrix<'_>| {
            let h = m.half_size() as i64;
            m.color_xy(h, h)
        });

        let mut in_place = source.clone();
        in_place.apply_filter(identity, 5).unwrap();

        let mut buffered = Image::new(source.size());
        source.apply_buffered_filter(identity, 5, &mut buffered).unwrap();

        assert_eq!(in_place, buffered);
        assert_eq!(buffered, source);
    }

    #[test]
    fn test_kernel_payload_on_region() {
        let source = gradient(6, 6);
        let mut out = source.clone();
        // Horizontal derivative: right minus left.
        let weights: [i32; 9] = [0, 0, 0, -1, 0, 1, 0, 0, 0];
        let area = Rect::new(1, 1, 4, 4);

        let visited = source
            .apply_buffered_filter_with_args_to(&weights, RedKernel, area, 3, &mut out)
            .unwrap();
        assert_eq!(visited, 16);

        for p in source.bounds().iter_points() {
            if area.contains(p) {
                // Red grows by 16 per column, so the derivative is 32 everywhere inside.
                assert_eq!(out.color(p), Argb::from_channels(0xFF, 32, 0, 0), "at {p}");
            } else {
                assert_eq!(out.color(p), source.color(p), "at {p}");
            }
        }
    }

    #[test]
    fn test_kernel_edges_use_transparent_neighbours() {
        let source = gradient(4, 1);
        let mut out = Image::new(source.size());
        let weights: [i32; 9] = [0, 0, 0, -1, 0, 1, 0, 0, 0];
        source
            .apply_buffered_filter_with_args_to(&weights, RedKernel, source.bounds(), 3, &mut out)
            .unwrap();

        // Column 0 has no left neighbour (reads 0): 16 - 0.
        assert_eq!(out.color_xy(0, 0).r(), 16);
        // Column 3 has no right neighbour: 0 - 32 clamps to 0.
        assert_eq!(out.color_xy(3, 0).r(), 0);
    }

    #[test]
    fn test_offset_pass_then_matrix_inspection() {
        let mut image = gradient(4, 4);
        let visited = image
            .apply_filter_at(filter_fn(|_: &(), _: &Matrix<'_>| Argb::OPAQUE_BLACK), Point::new(2, 2), 1)
            .unwrap();
        assert_eq!(visited, 4);

        let m = image.matrix_at(Point::new(3, 3), 3).unwrap();
        assert_eq!(m.color_xy(1, 1), Argb::OPAQUE_BLACK);
        assert_eq!(m.color_xy(0, 0), Argb::OPAQUE_BLACK);
        assert_eq!(m.color_xy(2, 2), Argb::TRANSPARENT);
        assert_eq!(m.color_xy(0, 1), Argb::OPAQUE_BLACK);
        assert_ne!(image.color_xy(1, 1), Argb::OPAQUE_BLACK);
    }
}
