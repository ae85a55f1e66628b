use palette::{Mix, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Spectral gradient
// ---------------------------------------------------------------------------

/// Control points of the spectral map, evenly spaced over [0, 1]
/// (black → purple → blue → green → yellow → red → light grey).
const SPECTRAL_STOPS: [(f32, f32, f32); 21] = [
    (0.0, 0.0, 0.0),
    (0.4667, 0.0, 0.5333),
    (0.5333, 0.0, 0.6),
    (0.0, 0.0, 0.6667),
    (0.0, 0.0, 0.8667),
    (0.0, 0.4667, 0.8667),
    (0.0, 0.6, 0.8667),
    (0.0, 0.6667, 0.6667),
    (0.0, 0.6667, 0.5333),
    (0.0, 0.6, 0.0),
    (0.0, 0.7333, 0.0),
    (0.0, 0.8667, 0.0),
    (0.0, 1.0, 0.0),
    (0.7333, 1.0, 0.0),
    (0.9333, 0.9333, 0.0),
    (1.0, 0.8, 0.0),
    (1.0, 0.6, 0.0),
    (1.0, 0.0, 0.0),
    (0.8667, 0.0, 0.0),
    (0.8, 0.0, 0.0),
    (0.8, 0.8, 0.8),
];

/// Evaluate the spectral gradient at `t` (clamped to [0, 1]).
///
/// Channels are interpolated linearly between neighbouring stops in sRGB
/// space.
pub fn spectral(t: f64) -> Srgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let segments = (SPECTRAL_STOPS.len() - 1) as f64;
    let pos = t * segments;
    let lo = (pos.floor() as usize).min(SPECTRAL_STOPS.len() - 2);
    let frac = (pos - lo as f64) as f32;

    let stop = |i: usize| {
        let (r, g, b) = SPECTRAL_STOPS[i];
        Srgb::new(r, g, b)
    };
    stop(lo).mix(stop(lo + 1), frac)
}

/// Position of series `index` out of `count` on the gradient: evenly spaced
/// from 0 to 1 inclusive. A single series sits at 0.
pub fn gradient_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

/// Convert a palette colour for the plotting backend.
pub fn to_rgb(color: Srgb) -> RGBColor {
    let c: Srgb<u8> = color.into_format();
    RGBColor(c.red, c.green, c.blue)
}

/// One colour per series, spread over the whole spectral map.
pub fn spectral_palette(n: usize) -> Vec<RGBColor> {
    (0..n)
        .map(|i| to_rgb(spectral(gradient_position(i, n))))
        .collect()
}
