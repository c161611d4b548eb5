//! Dot-space drawing primitives

use crate::map::canvas::BrailleCanvas;

/// Draw a line using Bresenham's algorithm.
pub fn draw_line(canvas: &mut BrailleCanvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let (mut x, mut y) = (x0, y0);
    loop {
        canvas.set_signed(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a filled disc.
pub fn draw_disc(canvas: &mut BrailleCanvas, cx: i32, cy: i32, radius: i32) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                canvas.set_signed(cx + dx, cy + dy);
            }
        }
    }
}

/// Draw a filled pie wedge covering the angle range `[start, end)` radians,
/// measured clockwise from twelve o'clock. `end` may exceed 2*PI for wedges
/// crossing the top of the circle.
pub fn draw_wedge(canvas: &mut BrailleCanvas, cx: i32, cy: i32, radius: i32, start: f64, end: f64) {
    use std::f64::consts::TAU;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            // Screen y grows downward, so negate dy for the usual orientation.
            let mut angle = (dx as f64).atan2(-(dy as f64));
            if angle < 0.0 {
                angle += TAU;
            }
            let inside = (angle >= start && angle < end)
                || (end > TAU && angle < end - TAU);
            if inside {
                canvas.set_signed(cx + dx, cy + dy);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn dot_count(canvas: &BrailleCanvas) -> usize {
        canvas
            .row_strings()
            .flat_map(|row| row.chars().collect::<Vec<_>>())
            .map(|c| (c as u32 - 0x2800).count_ones() as usize)
            .sum()
    }

    #[test]
    fn horizontal_line_spans_width() {
        let mut canvas = BrailleCanvas::new(5, 1);
        draw_line(&mut canvas, 0, 0, 9, 0);
        assert_eq!(dot_count(&canvas), 10);
    }

    #[test]
    fn full_wedge_equals_disc() {
        let mut disc = BrailleCanvas::new(10, 5);
        draw_disc(&mut disc, 10, 10, 8);

        let mut wedge = BrailleCanvas::new(10, 5);
        draw_wedge(&mut wedge, 10, 10, 8, 0.0, TAU);

        assert_eq!(dot_count(&disc), dot_count(&wedge));
    }

    #[test]
    fn half_wedge_covers_about_half_the_disc() {
        let mut disc = BrailleCanvas::new(12, 6);
        draw_disc(&mut disc, 12, 12, 10);

        let mut half = BrailleCanvas::new(12, 6);
        draw_wedge(&mut half, 12, 12, 10, 0.0, PI);

        let disc_dots = dot_count(&disc) as f64;
        let half_dots = dot_count(&half) as f64;
        let ratio = half_dots / disc_dots;
        assert!((0.4..=0.6).contains(&ratio), "ratio was {}", ratio);
    }

    #[test]
    fn wrapping_wedge_sets_dots_on_both_sides_of_twelve() {
        let mut canvas = BrailleCanvas::new(12, 6);
        // A quarter wedge straddling twelve o'clock.
        draw_wedge(&mut canvas, 12, 12, 10, TAU - 0.4, TAU + 0.4);
        assert!(dot_count(&canvas) > 0);
    }
}
