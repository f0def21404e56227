use approx::assert_abs_diff_eq;

pub fn assert_point_eq(a: (f64, f64), b: (f64, f64)) {
    assert_abs_diff_eq!(a.0, b.0, epsilon = 1.0e-6);
    assert_abs_diff_eq!(a.1, b.1, epsilon = 1.0e-6);
}

/// compare two `0xRRGGBBAA` colors, allowing `tolerance` per channel
pub fn assert_rgba_near(a: u32, b: u32, tolerance: u8) {
    for shift in [24, 16, 8, 0] {
        let ca = ((a >> shift) & 0xff) as i32;
        let cb = ((b >> shift) & 0xff) as i32;
        assert!(
            (ca - cb).abs() <= i32::from(tolerance),
            "colors differ: {:08x} != {:08x}",
            a,
            b
        );
    }
}
