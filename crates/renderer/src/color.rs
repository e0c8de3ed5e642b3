//! HSB color model (hue 0-360, saturation/brightness/alpha 0-100).

/// A color in HSB space, matching the canvas color mode the game was tuned
/// in: hue in degrees, saturation/brightness/alpha in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsb {
    /// Fully opaque color.
    pub const fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b, a: 100.0 }
    }

    /// Color with explicit alpha.
    pub const fn with_alpha(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    /// Convert to linear RGBA in [0,1] for frontends that want RGB.
    pub fn to_rgba(self) -> [f32; 4] {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.b / 100.0).clamp(0.0, 1.0);
        let a = (self.a / 100.0).clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        [r + m, g + m, b + m, a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_converts_to_unit_rgb() {
        let [r, g, b, a] = Hsb::new(0.0, 0.0, 100.0).to_rgba();
        assert!((r - 1.0).abs() < 1e-6);
        assert!((g - 1.0).abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
        assert!((a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pure_red_hue_zero() {
        let [r, g, b, _] = Hsb::new(0.0, 100.0, 100.0).to_rgba();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!(b.abs() < 1e-6);
    }

    #[test]
    fn alpha_scales_to_unit_range() {
        let [.., a] = Hsb::with_alpha(120.0, 50.0, 50.0, 30.0).to_rgba();
        assert!((a - 0.3).abs() < 1e-6);
    }
}
