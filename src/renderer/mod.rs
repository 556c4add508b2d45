//! Pixel renderer for diagram primitives
//!
//! The diagram core only describes what to draw. A [`Renderer`] paints the
//! primitives; [`CanvasRenderer`] does so into an owned RGB pixel buffer
//! (`Canvas`) that output backends (the terminal preview) sample from.

pub mod styles;
pub mod text;

use crate::config::RgbColor;
use crate::diagram::geometry::{Point, Square, CANVAS_SIZE, OUTER_RADIUS};
use crate::diagram::primitives::{Arc, MeanMarker, Primitive, Stroke};
use crate::diagram::RoseDiagram;
use styles::DiagramStyle;

/// Consumer of drawing primitives.
pub trait Renderer {
    fn draw(&mut self, primitive: &Primitive);

    fn render_all(&mut self, primitives: &[Primitive]) {
        for primitive in primitives {
            self.draw(primitive);
        }
    }
}

/// Owned RGB pixel buffer, 3 bytes per pixel.
pub struct Canvas {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: RgbColor) -> Self {
        let mut canvas = Self {
            data: vec![0u8; width * height * 3],
            width,
            height,
        };
        canvas.clear(background);
        canvas
    }

    pub fn clear(&mut self, color: RgbColor) {
        for px in self.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Write a pixel; coordinates off the canvas are ignored.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, color: RgbColor) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
    }

    /// Read the pixel at (x, y). Off-canvas reads return black.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> RgbColor {
        if x >= self.width || y >= self.height {
            return RgbColor { r: 0, g: 0, b: 0 };
        }
        let idx = (y * self.width + x) * 3;
        RgbColor {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
        }
    }

    pub fn fill_rect(&mut self, x: isize, y: isize, width: usize, height: usize, color: RgbColor) {
        for py in y..y + height as isize {
            for px in x..x + width as isize {
                self.set(px, py, color);
            }
        }
    }

    /// Filled disc used as the pen tip for strokes wider than a pixel.
    fn stamp(&mut self, p: Point, width: f64, color: RgbColor) {
        if width <= 1.0 {
            self.set(p.x.round() as isize, p.y.round() as isize, color);
            return;
        }
        let r = width / 2.0;
        let reach = r.ceil() as isize;
        let (cx, cy) = (p.x.round() as isize, p.y.round() as isize);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if ((dx * dx + dy * dy) as f64) <= r * r {
                    self.set(cx + dx, cy + dy, color);
                }
            }
        }
    }

    pub fn draw_line(&mut self, from: Point, to: Point, width: f64, color: RgbColor) {
        let steps = (from.distance(&to) * 2.0).ceil().max(1.0) as usize;
        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            let p = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.stamp(p, width, color);
        }
    }

    /// Stroke an arc, optionally dashed along its length.
    pub fn draw_arc(&mut self, arc: &Arc, width: f64, dash: Option<[f64; 2]>, color: RgbColor) {
        let length = arc.radius * arc.sweep_deg.abs().to_radians();
        let steps = (length * 2.0).ceil().max(1.0) as usize;
        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            if let Some([on, off]) = dash {
                if (t * length) % (on + off) >= on {
                    continue;
                }
            }
            let p = Point::polar(arc.center, arc.start_deg + arc.sweep_deg * t, arc.radius);
            self.stamp(p, width, color);
        }
    }

    /// Fill the pie slice of the circle inscribed in `bounds`, then outline it.
    pub fn draw_wedge(
        &mut self,
        bounds: &Square,
        start_deg: f64,
        sweep_deg: f64,
        fill: RgbColor,
        outline: RgbColor,
    ) {
        let center = bounds.center();
        let radius = bounds.radius();

        for py in bounds.y..=bounds.y + bounds.side {
            for px in bounds.x..=bounds.x + bounds.side {
                let dx = px as f64 - center.x;
                let dy = center.y - py as f64;
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                if angle_in_sweep(dy.atan2(dx).to_degrees(), start_deg, sweep_deg) {
                    self.set(px as isize, py as isize, fill);
                }
            }
        }

        let arc = Arc { center, radius, start_deg, sweep_deg };
        self.draw_line(center, arc.start_point(), 1.0, outline);
        self.draw_line(center, arc.end_point(), 1.0, outline);
        self.draw_arc(&arc, 1.0, None, outline);
    }

    pub fn draw_mean_marker(&mut self, marker: &MeanMarker, color: RgbColor) {
        self.draw_arc(&marker.arc, marker.width, None, color);
        self.draw_line(marker.spoke.0, marker.spoke.1, marker.width, color);
        for (outer, inner) in marker.ticks {
            self.draw_line(outer, inner, marker.width, color);
        }
    }
}

/// Whether a canvas angle lies within the sweep starting at `start_deg`.
fn angle_in_sweep(angle_deg: f64, start_deg: f64, sweep_deg: f64) -> bool {
    if sweep_deg >= 0.0 {
        (angle_deg - start_deg).rem_euclid(360.0) <= sweep_deg
    } else {
        (start_deg - angle_deg).rem_euclid(360.0) <= -sweep_deg
    }
}

/// Renderer painting onto a [`Canvas`] with a [`DiagramStyle`].
pub struct CanvasRenderer {
    pub canvas: Canvas,
    pub style: DiagramStyle,
}

impl CanvasRenderer {
    pub fn new(style: DiagramStyle) -> Self {
        Self {
            canvas: Canvas::new(CANVAS_SIZE, CANVAS_SIZE, style.background),
            style,
        }
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, primitive: &Primitive) {
        let ink = self.style.ink;
        match primitive {
            Primitive::Ring { center, radius, stroke } => {
                let arc = Arc {
                    center: *center,
                    radius: *radius,
                    start_deg: 0.0,
                    sweep_deg: 360.0,
                };
                let dash = match stroke {
                    Stroke::Solid => None,
                    Stroke::Dashed => Some(self.style.dash),
                };
                self.canvas.draw_arc(&arc, 1.0, dash, ink);
            }
            Primitive::Line { from, to, width } => {
                self.canvas.draw_line(*from, *to, *width, ink);
            }
            Primitive::Label { position, text: label, font, anchor } => {
                text::render_label(
                    &mut self.canvas,
                    position.x,
                    position.y,
                    label,
                    self.style.font_scale(*font),
                    *anchor,
                    ink,
                    self.style.label_background,
                );
            }
            Primitive::Wedge { bounds, start_deg, sweep_deg, sector, sector_count, .. } => {
                let position = *sector as f32 / (*sector_count).max(1) as f32;
                let intensity = (bounds.radius() / OUTER_RADIUS) as f32;
                let (r, g, b) = self.style.bar_color(position, intensity.min(1.0));
                self.canvas
                    .draw_wedge(bounds, *start_deg, *sweep_deg, RgbColor { r, g, b }, ink);
            }
            Primitive::MeanMarker(marker) => self.canvas.draw_mean_marker(marker, ink),
        }
    }
}

/// Rasterize a whole diagram.
pub fn render_diagram(diagram: &RoseDiagram, style: DiagramStyle) -> Canvas {
    let mut renderer = CanvasRenderer::new(style);
    renderer.render_all(&diagram.primitives());
    renderer.into_canvas()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::geometry::CENTER;
    use crate::diagram::{DiagramOptions, RoseDiagram};
    use styles::{BLACK, DEFAULT_STYLE, WHITE};

    #[test]
    fn test_angle_in_sweep() {
        assert!(angle_in_sweep(100.0, 90.0, 15.0));
        assert!(!angle_in_sweep(80.0, 90.0, 15.0));
        assert!(angle_in_sweep(80.0, 90.0, -15.0));
        assert!(angle_in_sweep(-85.0, 270.0, 15.0));
        assert!(angle_in_sweep(5.0, 450.0, -90.0));
    }

    #[test]
    fn test_wedge_fills_only_its_sector() {
        let mut canvas = Canvas::new(100, 100, WHITE);
        let bounds = Square { x: 0, y: 0, side: 100 };
        let fill = RgbColor { r: 10, g: 20, b: 30 };
        canvas.draw_wedge(&bounds, 0.0, 90.0, fill, BLACK);
        // Upper-right quadrant is filled, lower-left is not.
        assert_eq!(canvas.get(70, 30), fill);
        assert_eq!(canvas.get(30, 70), WHITE);
    }

    #[test]
    fn test_set_ignores_off_canvas() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        canvas.set(-1, 2, BLACK);
        canvas.set(2, 9, BLACK);
        assert!(canvas.data.iter().all(|&b| b == 255));
    }

    #[test]
    fn test_render_diagram_draws_bars_and_marker() {
        let angles = [16.0, 31.0, 46.0, 66.0, 66.0];
        let diagram = RoseDiagram::build(&angles, &DiagramOptions::default()).unwrap();
        let canvas = render_diagram(&diagram, DEFAULT_STYLE);
        assert_eq!(canvas.width, CANVAS_SIZE);

        // Middle of the largest bar (sector 4, 60..75 => canvas 150..165).
        let inside = Point::polar(CENTER, 157.5, 175.0);
        let (r, g, b) = crate::color::SKY_BLUE;
        assert_eq!(
            canvas.get(inside.x.round() as usize, inside.y.round() as usize),
            RgbColor { r, g, b }
        );

        // The marker spoke passes close to the centre pixel.
        assert_eq!(canvas.get(300, 300), BLACK);
    }
}
