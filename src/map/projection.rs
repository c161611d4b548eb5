//! Web Mercator viewport

use std::f64::consts::PI;

fn mercator_y(lat_deg: f64) -> f64 {
    let lat_rad = lat_deg * PI / 180.0;
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0
}

/// Visible map area in dot-space, with pan and zoom.
#[derive(Clone, Debug)]
pub struct Viewport {
    /// Center longitude (-180 to 180)
    pub center_lon: f64,
    /// Center latitude, clamped to the Mercator-safe range
    pub center_lat: f64,
    /// Zoom level (higher = more zoomed in)
    pub zoom: f64,
    /// Dot-space width
    pub width: usize,
    /// Dot-space height
    pub height: usize,
}

impl Viewport {
    pub fn new(center_lon: f64, center_lat: f64, zoom: f64, width: usize, height: usize) -> Self {
        Self {
            center_lon,
            center_lat,
            zoom,
            width,
            height,
        }
    }

    /// Whole-world view centered a bit north of the equator.
    pub fn world(width: usize, height: usize) -> Self {
        Self::new(0.0, 30.0, 1.0, width, height)
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Pan by dot-space delta.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        let scale = 360.0 / (self.zoom * self.width.max(1) as f64);
        self.center_lon += dx as f64 * scale;
        self.center_lat -= dy as f64 * scale * 0.5;

        if self.center_lon > 180.0 {
            self.center_lon -= 360.0;
        } else if self.center_lon < -180.0 {
            self.center_lon += 360.0;
        }
        self.center_lat = self.center_lat.clamp(-85.0, 85.0);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * 1.5).min(64.0);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / 1.5).max(0.5);
    }

    /// Project `(lat, lon)` to dot-space coordinates.
    pub fn project(&self, lat: f64, lon: f64) -> (i32, i32) {
        let x = (lon + 180.0) / 360.0;
        let y = mercator_y(lat);

        let center_x = (self.center_lon + 180.0) / 360.0;
        let center_y = mercator_y(self.center_lat);

        let scale = self.zoom * self.width as f64;
        let px = ((x - center_x) * scale + self.width as f64 / 2.0) as i32;
        let py = ((y - center_y) * scale + self.height as f64 / 2.0) as i32;
        (px, py)
    }

    /// True when a projected point lies in (or just outside) the viewport.
    pub fn is_visible(&self, px: i32, py: i32) -> bool {
        px >= -10 && px < self.width as i32 + 10 && py >= -10 && py < self.height as i32 + 10
    }

    /// Rough bounding-box visibility test for a line segment.
    pub fn segment_might_be_visible(&self, p1: (i32, i32), p2: (i32, i32)) -> bool {
        p1.0.max(p2.0) >= 0
            && p1.0.min(p2.0) < self.width as i32
            && p1.1.max(p2.1) >= 0
            && p1.1.min(p2.1) < self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_projects_to_middle() {
        let vp = Viewport::new(0.0, 0.0, 1.0, 100, 100);
        assert_eq!(vp.project(0.0, 0.0), (50, 50));
    }

    #[test]
    fn east_is_right_north_is_up() {
        let vp = Viewport::new(0.0, 0.0, 1.0, 200, 100);
        let (east_x, _) = vp.project(0.0, 90.0);
        assert!(east_x > 100);
        let (_, north_y) = vp.project(45.0, 0.0);
        assert!(north_y < 50);
    }

    #[test]
    fn pan_moves_center() {
        let mut vp = Viewport::new(0.0, 0.0, 1.0, 100, 100);
        vp.pan(10, 0);
        assert!(vp.center_lon > 0.0);
    }

    #[test]
    fn longitude_wraps_latitude_clamps() {
        let mut vp = Viewport::new(179.0, 84.0, 1.0, 100, 100);
        vp.pan(1000, -10000);
        assert!(vp.center_lon >= -180.0 && vp.center_lon <= 180.0);
        assert!(vp.center_lat <= 85.0);
    }

    #[test]
    fn zoom_bounds() {
        let mut vp = Viewport::world(100, 100);
        for _ in 0..50 {
            vp.zoom_in();
        }
        assert!(vp.zoom <= 64.0);
        for _ in 0..50 {
            vp.zoom_out();
        }
        assert!(vp.zoom >= 0.5);
    }

    #[test]
    fn world_view_shows_top10_countries() {
        // Coordinates of a few countries that show up in top-10 rankings.
        let spots = [(37.0, -95.0), (20.0, 77.0), (-14.0, -51.0), (61.0, 105.0)];
        let vp = Viewport::world(200, 100);
        for (lat, lon) in spots {
            let (px, py) = vp.project(lat, lon);
            assert!(vp.is_visible(px, py), "({lat}, {lon}) projected off-screen");
        }
    }
}
