//! Stroke paths for the procedural shapes
//!
//! Everything here produces plain path commands in whatever space the caller
//! passes coordinates in; tessellation happens in the client.

use crate::{msin, Params, Rect};
use glam::{Affine2, Vec2};
use std::f32::consts::{FRAC_PI_2, PI};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const WHITE: Color = Color([255, 255, 255, 255]);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Components as 0..=1 floats
    pub fn normalize(&self) -> [f32; 4] {
        self.0.map(|c| c as f32 / 255.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

impl PathCmd {
    fn map(self, f: impl Fn(Vec2) -> Vec2) -> Self {
        match self {
            PathCmd::MoveTo(p) => PathCmd::MoveTo(f(p)),
            PathCmd::LineTo(p) => PathCmd::LineTo(f(p)),
            PathCmd::CubicTo { ctrl1, ctrl2, to } => PathCmd::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            PathCmd::Close => PathCmd::Close,
        }
    }
}

/// A path to be stroked with a single color and line width
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    pub cmds: Vec<PathCmd>,
    pub color: Color,
    pub width: f32,
}

impl StrokePath {
    pub fn new(cmds: Vec<PathCmd>, color: Color, width: f32) -> Self {
        Self { cmds, color, width }
    }

    pub fn transformed(mut self, transform: &Affine2) -> Self {
        for cmd in &mut self.cmds {
            *cmd = cmd.map(|p| transform.transform_point2(p));
        }
        self
    }

    /// Every point the path references, control points included
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.cmds.iter().flat_map(|cmd| match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => vec![p],
            PathCmd::CubicTo { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
            PathCmd::Close => Vec::new(),
        })
    }
}

/// The wavy horizontal "void": two cubic Beziers across the full width whose
/// control points swing up and down in opposite phase.
pub fn void_curve(width: f32, height: f32, t: f32, skew: f32) -> Vec<PathCmd> {
    let mid = Vec2::new(width / 2.0, height / 2.0);
    let quarter = width / 4.0;
    let swing_a = height * msin(t);
    let swing_b = height * msin(t + PI);

    vec![
        PathCmd::MoveTo(Vec2::new(0.0, mid.y)),
        PathCmd::CubicTo {
            ctrl1: Vec2::new(quarter - skew, swing_a),
            ctrl2: Vec2::new(quarter + skew, swing_a),
            to: mid,
        },
        PathCmd::CubicTo {
            ctrl1: Vec2::new(mid.x + quarter + skew, swing_b),
            ctrl2: Vec2::new(mid.x + quarter - skew, swing_b),
            to: Vec2::new(width, mid.y),
        },
    ]
}

/// Three colored voids drifting apart plus a thin white one on top
pub fn void_layers(width: f32, height: f32, t: f32) -> Vec<StrokePath> {
    let layers = [
        (4.0 + (t * 0.2).sin(), Color::rgba(255, 0, 0, 150), Params::VOID_WIDTH),
        (-4.0 + (t * 0.3).sin(), Color::rgba(0, 255, 0, 150), Params::VOID_WIDTH),
        ((t * 0.5).sin(), Color::rgba(0, 0, 255, 150), Params::VOID_WIDTH),
        (0.0, Color::rgba(255, 255, 255, 170), Params::OUTLINE_WIDTH),
    ];

    layers
        .into_iter()
        .map(|(skew, color, stroke)| {
            StrokePath::new(void_curve(width, height, t, skew), color, stroke)
        })
        .collect()
}

/// Closed triangle pointing up (negative y), tip `3 * size` from the origin
pub fn triangle(size: f32) -> Vec<PathCmd> {
    let base = size / 1.5;
    vec![
        PathCmd::MoveTo(Vec2::new(-base, -size)),
        PathCmd::LineTo(Vec2::new(base, -size)),
        PathCmd::LineTo(Vec2::new(0.0, -size * 3.0)),
        PathCmd::LineTo(Vec2::new(-base, -size)),
        PathCmd::Close,
    ]
}

/// A bird: the white triangle at `pos` facing `heading`, with red, green and
/// blue ghosts offset and twisted by `skew`.
pub fn bird_glyph(pos: Vec2, heading: f32, skew: f32, size: f32) -> Vec<StrokePath> {
    let ghosts = [
        (Vec2::new(skew, -skew), 0.02, Color::rgba(255, 0, 0, 150), Params::GHOST_WIDTH),
        (Vec2::new(-skew, skew), -0.02, Color::rgba(0, 255, 0, 150), Params::GHOST_WIDTH),
        (Vec2::new(skew, skew), 0.05, Color::rgba(0, 0, 255, 150), Params::GHOST_WIDTH),
        (Vec2::ZERO, 0.0, Color::rgba(255, 255, 255, 170), Params::OUTLINE_WIDTH),
    ];

    ghosts
        .into_iter()
        .map(|(offset, twist, color, stroke)| {
            let transform =
                Affine2::from_angle_translation(FRAC_PI_2 + skew * twist + heading, pos + offset);
            StrokePath::new(triangle(size), color, stroke).transformed(&transform)
        })
        .collect()
}

/// Outline of a rectangle
pub fn rect_outline(rect: &Rect, color: Color, width: f32) -> StrokePath {
    StrokePath::new(
        vec![
            PathCmd::MoveTo(rect.min),
            PathCmd::LineTo(Vec2::new(rect.max.x, rect.min.y)),
            PathCmd::LineTo(rect.max),
            PathCmd::LineTo(Vec2::new(rect.min.x, rect.max.y)),
            PathCmd::Close,
        ],
        color,
        width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_color_normalize() {
        assert_eq!(Color::rgba(255, 0, 51, 0).normalize(), [1.0, 0.0, 0.2, 0.0]);
    }

    #[test]
    fn test_void_layers_repeat_each_clock_period() {
        let t = 1.3;
        let a = void_layers(1000.0, 600.0, t);
        let b = void_layers(1000.0, 600.0, t + Params::CLOCK_PERIOD);
        for (pa, pb) in a.iter().zip(&b) {
            for (p, q) in pa.points().zip(pb.points()) {
                assert!((p - q).length() < 1e-2, "{p:?} vs {q:?}");
            }
        }
    }

    #[test]
    fn test_void_curve_endpoints() {
        let cmds = void_curve(1000.0, 600.0, 0.0, 4.0);
        assert_eq!(cmds[0], PathCmd::MoveTo(Vec2::new(0.0, 300.0)));

        let PathCmd::CubicTo { ctrl1, ctrl2, to } = cmds[1] else {
            panic!("expected cubic, got {:?}", cmds[1]);
        };
        // msin(0) = 0.5, so the first swing sits on the midline
        assert!(approx(ctrl1, Vec2::new(246.0, 300.0)));
        assert!(approx(ctrl2, Vec2::new(254.0, 300.0)));
        assert_eq!(to, Vec2::new(500.0, 300.0));

        let PathCmd::CubicTo { to, .. } = cmds[2] else {
            panic!("expected cubic, got {:?}", cmds[2]);
        };
        assert_eq!(to, Vec2::new(1000.0, 300.0));
    }

    #[test]
    fn test_void_curve_halves_swing_in_opposite_phase() {
        let t = std::f32::consts::FRAC_PI_2;
        let cmds = void_curve(1000.0, 600.0, t, 0.0);
        let PathCmd::CubicTo { ctrl1: a, .. } = cmds[1] else {
            panic!("expected cubic");
        };
        let PathCmd::CubicTo { ctrl1: b, .. } = cmds[2] else {
            panic!("expected cubic");
        };
        assert!((a.y - 600.0).abs() < 1e-3);
        assert!(b.y.abs() < 1e-3);
        assert!((b.x - 750.0).abs() < 1e-3);
    }

    #[test]
    fn test_void_layers_styles() {
        let layers = void_layers(800.0, 600.0, 1.0);
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[0].color, Color::rgba(255, 0, 0, 150));
        assert_eq!(layers[0].width, 4.0);
        assert_eq!(layers[3].color, Color::rgba(255, 255, 255, 170));
        assert_eq!(layers[3].width, 1.0);
    }

    #[test]
    fn test_triangle_shape() {
        let cmds = triangle(15.0);
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[2], PathCmd::LineTo(Vec2::new(0.0, -45.0)));
        assert_eq!(cmds[4], PathCmd::Close);
    }

    #[test]
    fn test_bird_glyph_tip_points_along_heading() {
        let pos = Vec2::new(100.0, 100.0);
        let glyph = bird_glyph(pos, 0.0, 0.0, 10.0);
        assert_eq!(glyph.len(), 4);

        let white = &glyph[3];
        assert_eq!(white.color, Color::rgba(255, 255, 255, 170));
        let PathCmd::LineTo(tip) = white.cmds[2] else {
            panic!("expected line");
        };
        assert!(approx(tip, Vec2::new(130.0, 100.0)));

        let heading_down = bird_glyph(pos, FRAC_PI_2, 0.0, 10.0);
        let PathCmd::LineTo(tip) = heading_down[3].cmds[2] else {
            panic!("expected line");
        };
        assert!(approx(tip, Vec2::new(100.0, 130.0)));
    }

    #[test]
    fn test_bird_glyph_ghost_offsets() {
        let pos = Vec2::new(50.0, 50.0);
        let glyph = bird_glyph(pos, 0.0, 2.0, 10.0);
        // The tip of each ghost sits 3 * size from its own translated origin
        let tip_distance = |path: &StrokePath, origin: Vec2| {
            let PathCmd::LineTo(tip) = path.cmds[2] else {
                panic!("expected line");
            };
            (tip - origin).length()
        };
        assert!((tip_distance(&glyph[0], Vec2::new(52.0, 48.0)) - 30.0).abs() < 1e-3);
        assert!((tip_distance(&glyph[1], Vec2::new(48.0, 52.0)) - 30.0).abs() < 1e-3);
        assert!((tip_distance(&glyph[2], Vec2::new(52.0, 52.0)) - 30.0).abs() < 1e-3);
        assert_eq!(glyph[0].width, 2.0);
    }

    #[test]
    fn test_rect_outline_closes() {
        let rect = Rect::from_origin_size(Vec2::ZERO, Vec2::new(4.0, 2.0));
        let outline = rect_outline(&rect, Color::WHITE, 1.0);
        assert_eq!(outline.cmds.len(), 5);
        assert_eq!(outline.points().count(), 4);
        assert_eq!(outline.cmds.last(), Some(&PathCmd::Close));
    }
}
