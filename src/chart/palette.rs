//! Colors used by the chart renderer.

/// Single-series line
pub const SERIES_BLUE: &str = "#3498db";
/// Moving-average overlay
pub const AVERAGE_RED: &str = "#e74c3c";
pub const TESTING_ORANGE: &str = "#f39c12";
pub const VACCINATION_GREEN: &str = "#2ecc71";

pub const GRID_GRAY: &str = "#cccccc";
pub const AXIS_GRAY: &str = "#555555";
pub const PLACEHOLDER_GRAY: &str = "#7f7f7f";

// Anchor points of matplotlib's viridis colormap at t = 0, 0.125, ..., 1
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Sample `n` evenly spaced viridis colors, skipping both extremes
///
/// Matches how seaborn builds `color_palette("viridis", n)`.
pub fn viridis(n: usize) -> Vec<String> {
    (1..=n)
        .map(|i| viridis_at(i as f64 / (n + 1) as f64))
        .collect()
}

/// Interpolate the colormap at `t` in `[0, 1]`
pub fn viridis_at(t: f64) -> String {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - lower as f64;

    let (r0, g0, b0) = VIRIDIS[lower];
    let (r1, g1, b1) = VIRIDIS[lower + 1];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    format!("rgb({}, {}, {})", mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(viridis_at(0.0), "rgb(68, 1, 84)");
        assert_eq!(viridis_at(1.0), "rgb(253, 231, 37)");
    }

    #[test]
    fn palette_has_requested_size() {
        assert_eq!(viridis(15).len(), 15);
        assert!(viridis(0).is_empty());
    }
}
