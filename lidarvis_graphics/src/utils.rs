/// split `0xRRGGBBAA` into cairo's 0..1 channels
pub fn rgba_u32_to_f64(rgba: u32) -> (f64, f64, f64, f64) {
    let r = f64::from((rgba >> 24) & 0xff);
    let g = f64::from((rgba >> 16) & 0xff);
    let b = f64::from((rgba >> 8) & 0xff);
    let a = f64::from(rgba & 0xff);

    (r / 255.0, g / 255.0, b / 255.0, a / 255.0)
}

pub trait CairoEx {
    fn set_source_rgba_u32(&self, rgba: u32);

    /// replace the whole clip area with the current source, alpha included
    fn clear(&self) -> Result<(), cairo::Error>;
}

impl CairoEx for cairo::Context {
    fn set_source_rgba_u32(&self, rgba: u32) {
        let (r, g, b, a) = rgba_u32_to_f64(rgba);
        self.set_source_rgba(r, g, b, a);
    }

    fn clear(&self) -> Result<(), cairo::Error> {
        self.save()?;
        self.set_operator(cairo::Operator::Source);
        let ret = self.paint();
        self.restore()?;
        ret
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    #[test]
    fn rgba_channels() {
        let (r, g, b, a) = super::rgba_u32_to_f64(0x00ff_80ff);
        assert_abs_diff_eq!(r, 0.0);
        assert_abs_diff_eq!(g, 1.0);
        assert_abs_diff_eq!(b, 128.0 / 255.0);
        assert_abs_diff_eq!(a, 1.0);

        let (r, g, b, a) = super::rgba_u32_to_f64(0x140a_1e00);
        assert_abs_diff_eq!(r, 20.0 / 255.0);
        assert_abs_diff_eq!(g, 10.0 / 255.0);
        assert_abs_diff_eq!(b, 30.0 / 255.0);
        assert_abs_diff_eq!(a, 0.0);
    }
}
