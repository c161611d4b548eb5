//! Base map layers
//!
//! A fixed set of base imagery styles the user can switch between without
//! touching the markers. Coastline data is a coarse embedded set of
//! polylines, enough to orient country markers at world zoom.

use crate::map::canvas::BrailleCanvas;
use crate::map::geometry::draw_line;
use crate::map::projection::Viewport;

/// Selectable base imagery for the map.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, strum::Display)]
pub enum BaseLayer {
    /// Continent outlines.
    #[default]
    Coastline,
    /// Latitude/longitude grid.
    Graticule,
    /// No base imagery, markers only.
    Plain,
}

impl BaseLayer {
    pub const ALL: [BaseLayer; 3] = [BaseLayer::Coastline, BaseLayer::Graticule, BaseLayer::Plain];

    /// The next layer in the fixed set, wrapping around.
    pub fn next(self) -> Self {
        match self {
            BaseLayer::Coastline => BaseLayer::Graticule,
            BaseLayer::Graticule => BaseLayer::Plain,
            BaseLayer::Plain => BaseLayer::Coastline,
        }
    }

    /// Render the base imagery for the given viewport.
    pub fn render(self, viewport: &Viewport) -> BrailleCanvas {
        let mut canvas = BrailleCanvas::new(
            viewport.width.div_ceil(2),
            viewport.height.div_ceil(4),
        );
        match self {
            BaseLayer::Coastline => draw_coastlines(&mut canvas, viewport),
            BaseLayer::Graticule => draw_graticule(&mut canvas, viewport),
            BaseLayer::Plain => {}
        }
        canvas
    }
}

/// Draw a lon/lat polyline, skipping segments that leave the viewport or
/// wrap across the antimeridian.
fn draw_polyline(canvas: &mut BrailleCanvas, viewport: &Viewport, points: &[(f64, f64)]) {
    for pair in points.windows(2) {
        let (lon0, lat0) = pair[0];
        let (lon1, lat1) = pair[1];
        let p0 = viewport.project(lat0, lon0);
        let p1 = viewport.project(lat1, lon1);
        if !viewport.segment_might_be_visible(p0, p1) {
            continue;
        }
        if (p0.0 - p1.0).unsigned_abs() as usize > viewport.width / 2 {
            continue; // antimeridian wrap
        }
        draw_line(canvas, p0.0, p0.1, p1.0, p1.1);
    }
}

fn draw_coastlines(canvas: &mut BrailleCanvas, viewport: &Viewport) {
    for line in COASTLINES {
        draw_polyline(canvas, viewport, line);
    }
}

fn draw_graticule(canvas: &mut BrailleCanvas, viewport: &Viewport) {
    // Meridians every 30 degrees
    for lon_step in -6..=6 {
        let lon = lon_step as f64 * 30.0;
        let points: Vec<(f64, f64)> = (-80..=80)
            .step_by(10)
            .map(|lat| (lon, lat as f64))
            .collect();
        draw_polyline(canvas, viewport, &points);
    }
    // Parallels every 30 degrees
    for lat_step in -2..=2 {
        let lat = lat_step as f64 * 30.0;
        let points: Vec<(f64, f64)> = (-18..=18)
            .map(|lon_step| (lon_step as f64 * 10.0, lat))
            .collect();
        draw_polyline(canvas, viewport, &points);
    }
}

/// Coarse continent outlines as (lon, lat) polylines.
const COASTLINES: &[&[(f64, f64)]] = &[
    // North America
    &[
        (-165.0, 65.0),
        (-168.0, 60.0),
        (-140.0, 60.0),
        (-130.0, 55.0),
        (-125.0, 49.0),
        (-124.0, 40.0),
        (-117.0, 33.0),
        (-110.0, 23.0),
        (-105.0, 20.0),
        (-97.0, 16.0),
        (-85.0, 11.0),
        (-80.0, 9.0),
        (-83.0, 15.0),
        (-90.0, 21.0),
        (-97.0, 28.0),
        (-82.0, 27.0),
        (-80.0, 25.0),
        (-75.0, 35.0),
        (-70.0, 42.0),
        (-65.0, 45.0),
        (-60.0, 47.0),
        (-55.0, 52.0),
        (-65.0, 60.0),
        (-80.0, 65.0),
        (-95.0, 70.0),
        (-125.0, 70.0),
        (-155.0, 71.0),
        (-165.0, 65.0),
    ],
    // Greenland
    &[
        (-45.0, 60.0),
        (-53.0, 65.0),
        (-55.0, 70.0),
        (-60.0, 76.0),
        (-40.0, 83.0),
        (-22.0, 80.0),
        (-20.0, 70.0),
        (-40.0, 65.0),
        (-45.0, 60.0),
    ],
    // South America
    &[
        (-80.0, 9.0),
        (-78.0, -2.0),
        (-81.0, -6.0),
        (-77.0, -14.0),
        (-70.0, -18.0),
        (-71.0, -30.0),
        (-73.0, -40.0),
        (-74.0, -50.0),
        (-68.0, -55.0),
        (-65.0, -50.0),
        (-62.0, -40.0),
        (-58.0, -34.0),
        (-48.0, -28.0),
        (-40.0, -22.0),
        (-35.0, -9.0),
        (-50.0, 0.0),
        (-60.0, 5.0),
        (-62.0, 10.0),
        (-72.0, 12.0),
        (-77.0, 8.0),
        (-80.0, 9.0),
    ],
    // Africa
    &[
        (-6.0, 36.0),
        (10.0, 37.0),
        (20.0, 33.0),
        (32.0, 31.0),
        (43.0, 12.0),
        (51.0, 12.0),
        (40.0, -2.0),
        (35.0, -20.0),
        (32.0, -29.0),
        (20.0, -35.0),
        (12.0, -18.0),
        (9.0, -5.0),
        (9.0, 4.0),
        (-5.0, 5.0),
        (-17.0, 15.0),
        (-10.0, 30.0),
        (-6.0, 36.0),
    ],
    // Europe (Atlantic and North Sea coasts)
    &[
        (-9.0, 37.0),
        (-9.0, 43.0),
        (-2.0, 48.0),
        (5.0, 51.0),
        (8.0, 54.0),
        (10.0, 57.0),
        (5.0, 58.0),
        (15.0, 68.0),
        (25.0, 71.0),
        (30.0, 65.0),
    ],
    // Mediterranean north shore
    &[
        (0.0, 40.0),
        (7.0, 44.0),
        (12.0, 45.0),
        (18.0, 40.0),
        (23.0, 38.0),
        (26.0, 40.0),
        (30.0, 41.0),
    ],
    // Asia
    &[
        (30.0, 65.0),
        (60.0, 68.0),
        (90.0, 73.0),
        (110.0, 73.0),
        (140.0, 72.0),
        (160.0, 70.0),
        (170.0, 66.0),
        (162.0, 58.0),
        (155.0, 50.0),
        (140.0, 45.0),
        (127.0, 40.0),
        (120.0, 35.0),
        (122.0, 30.0),
        (115.0, 22.0),
        (108.0, 12.0),
        (104.0, 1.0),
        (100.0, 8.0),
        (98.0, 15.0),
        (90.0, 22.0),
        (80.0, 8.0),
        (72.0, 20.0),
        (67.0, 24.0),
        (57.0, 25.0),
        (60.0, 22.0),
        (55.0, 17.0),
        (43.0, 12.0),
        (33.0, 28.0),
        (35.0, 36.0),
        (27.0, 41.0),
    ],
    // Japan
    &[
        (130.0, 33.0),
        (135.0, 35.0),
        (140.0, 36.0),
        (141.0, 40.0),
        (143.0, 43.0),
    ],
    // Australia
    &[
        (114.0, -22.0),
        (114.0, -34.0),
        (118.0, -35.0),
        (130.0, -32.0),
        (138.0, -35.0),
        (147.0, -38.0),
        (153.0, -28.0),
        (153.0, -16.0),
        (142.0, -11.0),
        (131.0, -12.0),
        (122.0, -17.0),
        (114.0, -22.0),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_cycle_through_the_fixed_set() {
        let mut layer = BaseLayer::Coastline;
        for _ in 0..BaseLayer::ALL.len() {
            layer = layer.next();
        }
        assert_eq!(layer, BaseLayer::Coastline);
    }

    #[test]
    fn coastline_layer_draws_something_at_world_zoom() {
        let viewport = Viewport::world(160, 80);
        let canvas = BaseLayer::Coastline.render(&viewport);
        assert!(!canvas.is_empty());
    }

    #[test]
    fn graticule_layer_draws_something_at_world_zoom() {
        let viewport = Viewport::world(160, 80);
        let canvas = BaseLayer::Graticule.render(&viewport);
        assert!(!canvas.is_empty());
    }

    #[test]
    fn plain_layer_is_empty() {
        let viewport = Viewport::world(160, 80);
        let canvas = BaseLayer::Plain.render(&viewport);
        assert!(canvas.is_empty());
    }

    #[test]
    fn coastline_points_are_valid_coordinates() {
        for line in COASTLINES {
            for &(lon, lat) in *line {
                assert!((-180.0..=180.0).contains(&lon));
                assert!((-85.0..=85.0).contains(&lat));
            }
        }
    }
}
