/// RGBA color with components in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex_rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// CSS hex form (`#rrggbb`), the shape style payloads expect.
    pub fn hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    fn lerp(self, other: Rgba, t: f32) -> Rgba {
        Rgba::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

/// Fixed 3-stop linear color ramp over a normalized attribute.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorRamp {
    pub stops: [(f64, Rgba); 3],
}

/// Score ramp: 0 light, 0.5 mid, 1 dark.
pub const SCORE_RAMP: ColorRamp = ColorRamp {
    stops: [
        (0.0, Rgba::from_hex_rgb(0xfee5d9)),
        (0.5, Rgba::from_hex_rgb(0xfcae91)),
        (1.0, Rgba::from_hex_rgb(0xfb6a4a)),
    ],
};

impl ColorRamp {
    /// Samples the ramp at `value`, clamping outside the stop range.
    pub fn sample(&self, value: f64) -> Rgba {
        let (first_pos, first_color) = self.stops[0];
        if value <= first_pos {
            return first_color;
        }
        for window in self.stops.windows(2) {
            let (lo_pos, lo_color) = window[0];
            let (hi_pos, hi_color) = window[1];
            if value <= hi_pos {
                let t = ((value - lo_pos) / (hi_pos - lo_pos)) as f32;
                return lo_color.lerp(hi_color, t);
            }
        }
        self.stops[self.stops.len() - 1].1
    }
}

/// Fill layer style: ramp-colored, with a hover opacity boost.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillStyle {
    pub ramp: ColorRamp,
    pub base_opacity: f64,
    pub hover_opacity: f64,
}

impl FillStyle {
    pub fn opacity(&self, hovered: bool) -> f64 {
        if hovered {
            self.hover_opacity
        } else {
            self.base_opacity
        }
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            ramp: SCORE_RAMP,
            base_opacity: 0.5,
            hover_opacity: 0.9,
        }
    }
}

/// Outline layer style.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Rgba::from_hex_rgb(0xb22222),
            width: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FillStyle, LineStyle, SCORE_RAMP};

    #[test]
    fn ramp_hits_its_stops_exactly() {
        assert_eq!(SCORE_RAMP.sample(0.0).hex(), "#fee5d9");
        assert_eq!(SCORE_RAMP.sample(0.5).hex(), "#fcae91");
        assert_eq!(SCORE_RAMP.sample(1.0).hex(), "#fb6a4a");
    }

    #[test]
    fn ramp_clamps_outside_range() {
        assert_eq!(SCORE_RAMP.sample(-1.0), SCORE_RAMP.stops[0].1);
        assert_eq!(SCORE_RAMP.sample(2.0), SCORE_RAMP.stops[2].1);
    }

    #[test]
    fn ramp_interpolates_between_stops() {
        let quarter = SCORE_RAMP.sample(0.25);
        let lo = SCORE_RAMP.stops[0].1;
        let hi = SCORE_RAMP.stops[1].1;
        assert!(quarter.r <= lo.r && quarter.r >= hi.r);
        assert!((quarter.g - (lo.g + hi.g) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn hover_boosts_fill_opacity() {
        let fill = FillStyle::default();
        assert_eq!(fill.opacity(false), 0.5);
        assert_eq!(fill.opacity(true), 0.9);
    }

    #[test]
    fn outline_defaults_match_the_overlay() {
        let line = LineStyle::default();
        assert_eq!(line.color.hex(), "#b22222");
        assert_eq!(line.width, 2.0);
    }
}
