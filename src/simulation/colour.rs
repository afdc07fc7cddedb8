//! Charge to colour mapping
//!
//! Bright green = big positive charge, bright yellow = big negative charge,
//! white = neutral. The sign glyph on a body is grey, darker as the magnitude
//! of its charge grows.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0xRRGGBB`
    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Colour of a charged body
///
/// Negative charges run from yellow at `-max_magnitude` to white at zero,
/// positive ones from white to green at `+max_magnitude`
pub fn particle_colour(charge: f64, max_magnitude: f64) -> Rgb {
    let (from, to, offset) = if charge < 0.0 {
        (Rgb::YELLOW, Rgb::WHITE, max_magnitude)
    } else {
        (Rgb::WHITE, Rgb::GREEN, 0.0)
    };

    let t = charge + offset;
    let channel = |a: u8, b: u8| {
        let delta = (b as f64 - a as f64) / max_magnitude;
        (a as f64 + t * delta) as u8
    };

    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

/// Grey level (percent, 1..=99) of the sign glyph for `charge`
pub fn sign_shade(charge: f64, max_charge: f64) -> u8 {
    let precise = -100.0 / max_charge * charge.abs() + 100.0;
    (precise as i64).clamp(1, 99) as u8
}

/// RGB grey for a level in percent
pub fn grey(level: u8) -> Rgb {
    let v = ((level.min(100) as u32 * 255 + 50) / 100) as u8;
    Rgb::new(v, v, v)
}
