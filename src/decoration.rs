//! Procedural ornaments stamped onto the design.
//!
//! Generators are pure: they turn a stamp position, size multiplier, color and
//! seed into a list of [`Primitive`]s. The renderer only has to know how to
//! fill a disc and a closed path.

use std::f32::consts::{PI, TAU};

use egui::{Color32, Pos2, pos2};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::geometry::OutlinePath;
use crate::settings::clamp_decoration_size;

/// Radius in logical pixels of an ornament stamped at size multiplier 1.0.
pub const BASE_DECORATION_RADIUS: f32 = 10.0;

pub const FLOWER_CENTER_COLOR: Color32 = Color32::from_rgb(255, 215, 0);

const FLOWER_PETALS: usize = 5;
const STAR_POINTS: usize = 5;
const GLITTER_SPARKLES: usize = 10;
const GLITTER_MIN_RADIUS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecorationKind {
    Flower,
    Bow,
    Star,
    Heart,
    Glitter,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 5] = [
        DecorationKind::Flower,
        DecorationKind::Bow,
        DecorationKind::Star,
        DecorationKind::Heart,
        DecorationKind::Glitter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DecorationKind::Flower => "Flower",
            DecorationKind::Bow => "Bow",
            DecorationKind::Star => "Star",
            DecorationKind::Heart => "Heart",
            DecorationKind::Glitter => "Glitter",
        }
    }
}

/// A filled shape the renderer knows how to paint.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Disc {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Path {
        path: OutlinePath,
        color: Color32,
    },
}

/// Primitives for one ornament of `kind` centered on `at`.
///
/// `size` is the slider multiplier; `seed` only influences glitter. Sizes
/// outside the slider range, which only a hand-built action can carry, are
/// clamped into it.
pub fn generate(
    kind: DecorationKind,
    at: Pos2,
    size: f32,
    color: Color32,
    seed: u64,
) -> Vec<Primitive> {
    let r = BASE_DECORATION_RADIUS * clamp_decoration_size(size);
    match kind {
        DecorationKind::Flower => flower(at, r, color),
        DecorationKind::Bow => bow(at, r, color),
        DecorationKind::Star => vec![star(at, r, color)],
        DecorationKind::Heart => vec![heart(at, r, color)],
        DecorationKind::Glitter => glitter(at, r, color, seed),
    }
}

fn flower(at: Pos2, r: f32, color: Color32) -> Vec<Primitive> {
    let mut out: Vec<Primitive> = (0..FLOWER_PETALS)
        .map(|i| {
            let angle = i as f32 * TAU / FLOWER_PETALS as f32;
            Primitive::Disc {
                center: pos2(at.x + angle.cos() * r, at.y + angle.sin() * r),
                radius: r / 2.0,
                color,
            }
        })
        .collect();
    out.push(Primitive::Disc {
        center: at,
        radius: r / 2.5,
        color: FLOWER_CENTER_COLOR,
    });
    out
}

fn bow(at: Pos2, r: f32, color: Color32) -> Vec<Primitive> {
    let Pos2 { x, y } = at;
    let lobe = |dir: f32| Primitive::Path {
        path: OutlinePath::new()
            .move_to(at)
            .quad_to(pos2(x + dir * 1.5 * r, y - 1.2 * r), pos2(x + dir * 1.4 * r, y))
            .quad_to(pos2(x + dir * 1.5 * r, y + 1.2 * r), at)
            .close(),
        color,
    };
    let ribbon = |dir: f32| Primitive::Path {
        path: OutlinePath::polygon(&[
            pos2(x + dir * 0.2 * r, y),
            pos2(x + dir * 0.8 * r, y + 1.6 * r),
            pos2(x + dir * 0.3 * r, y + 1.4 * r),
        ]),
        color,
    };
    vec![
        lobe(-1.0),
        lobe(1.0),
        ribbon(-1.0),
        ribbon(1.0),
        Primitive::Disc {
            center: at,
            radius: 0.35 * r,
            color,
        },
    ]
}

fn star(at: Pos2, r: f32, color: Color32) -> Primitive {
    let step = PI / STAR_POINTS as f32;
    let offset = 18.0_f32.to_radians();
    let vertices: Vec<Pos2> = (0..STAR_POINTS * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { r } else { r / 2.0 };
            let angle = offset + i as f32 * step;
            // Canvas y grows downwards, so the 90 degree vertex points up.
            pos2(at.x + angle.cos() * radius, at.y - angle.sin() * radius)
        })
        .collect();
    Primitive::Path {
        path: OutlinePath::polygon(&vertices),
        color,
    }
}

fn heart(at: Pos2, r: f32, color: Color32) -> Primitive {
    let Pos2 { x, y } = at;
    let bottom = pos2(x, y + r);
    let dip = pos2(x, y - 0.3 * r);
    Primitive::Path {
        path: OutlinePath::new()
            .move_to(bottom)
            .quad_to(pos2(x - 2.0 * r, y - r), dip)
            .quad_to(pos2(x + 2.0 * r, y - r), bottom)
            .close(),
        color,
    }
}

fn glitter(at: Pos2, r: f32, color: Color32, seed: u64) -> Vec<Primitive> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_radius = (r / 3.0).max(GLITTER_MIN_RADIUS);
    (0..GLITTER_SPARKLES)
        .map(|_| {
            let dx = rng.gen_range(-r..=r);
            let dy = rng.gen_range(-r..=r);
            Primitive::Disc {
                center: pos2(at.x + dx, at.y + dy),
                radius: rng.gen_range(GLITTER_MIN_RADIUS..=max_radius),
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: Pos2 = pos2(200.0, 150.0);

    fn discs(prims: &[Primitive]) -> Vec<(Pos2, f32, Color32)> {
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Disc {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                Primitive::Path { .. } => None,
            })
            .collect()
    }

    #[test]
    fn flower_has_five_petals_and_a_yellow_center() {
        let prims = generate(DecorationKind::Flower, AT, 1.0, Color32::RED, 0);
        let discs = discs(&prims);
        assert_eq!(discs.len(), 6);
        for (center, radius, color) in &discs[..5] {
            assert!((center.distance(AT) - 10.0).abs() < 0.001);
            assert_eq!(*radius, 5.0);
            assert_eq!(*color, Color32::RED);
        }
        let (center, radius, color) = discs[5];
        assert_eq!(center, AT);
        assert_eq!(radius, 4.0);
        assert_eq!(color, FLOWER_CENTER_COLOR);
    }

    #[test]
    fn star_alternates_outer_and_inner_radius() {
        let prims = generate(DecorationKind::Star, AT, 2.0, Color32::GOLD, 0);
        assert_eq!(prims.len(), 1);
        let Primitive::Path { path, .. } = &prims[0] else {
            panic!("star should be a single path");
        };
        assert!(path.is_closed());
        let vertices: Vec<Pos2> = path.points().collect();
        assert_eq!(vertices.len(), 10);
        for (i, v) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 20.0 } else { 10.0 };
            assert!((v.distance(AT) - expected).abs() < 0.001);
        }
        // Outer vertex at 90 degrees is straight above the center.
        assert!((vertices[2].x - AT.x).abs() < 0.001);
        assert!(vertices[2].y < AT.y);
    }

    #[test]
    fn heart_meets_below_and_dips_above() {
        let prims = generate(DecorationKind::Heart, AT, 1.0, Color32::RED, 0);
        let Primitive::Path { path, .. } = &prims[0] else {
            panic!("heart should be a single path");
        };
        let points: Vec<Pos2> = path.points().collect();
        assert!(points[0].distance(pos2(200.0, 160.0)) < 0.001);
        assert!(points.iter().any(|p| p.distance(pos2(200.0, 147.0)) < 0.001));
        assert!(path.is_closed());
    }

    #[test]
    fn bow_is_mirrored_around_the_knot() {
        let prims = generate(DecorationKind::Bow, AT, 1.0, Color32::RED, 0);
        assert_eq!(prims.len(), 5);
        let (Primitive::Path { path: left, .. }, Primitive::Path { path: right, .. }) =
            (&prims[0], &prims[1])
        else {
            panic!("bow lobes should be paths");
        };
        for (l, r) in left.points().zip(right.points()) {
            assert!((l.y - r.y).abs() < 0.001);
            assert!(((AT.x - l.x) - (r.x - AT.x)).abs() < 0.001);
        }
        let knot = discs(&prims);
        assert_eq!(knot.len(), 1);
        assert_eq!(knot[0].0, AT);
        assert!((knot[0].1 - 3.5).abs() < 0.001);
    }

    #[test]
    fn glitter_stays_in_its_square_and_is_pinned_by_seed() {
        let a = generate(DecorationKind::Glitter, AT, 1.5, Color32::WHITE, 42);
        let b = generate(DecorationKind::Glitter, AT, 1.5, Color32::WHITE, 42);
        let c = generate(DecorationKind::Glitter, AT, 1.5, Color32::WHITE, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let r = BASE_DECORATION_RADIUS * 1.5;
        let sparkles = discs(&a);
        assert_eq!(sparkles.len(), 10);
        for (center, radius, _) in sparkles {
            assert!((center.x - AT.x).abs() <= r);
            assert!((center.y - AT.y).abs() <= r);
            assert!(radius <= r / 3.0);
        }
    }

    #[test]
    fn size_multiplier_scales_ornaments() {
        let small = discs(&generate(DecorationKind::Flower, AT, 0.5, Color32::RED, 0));
        let large = discs(&generate(DecorationKind::Flower, AT, 2.0, Color32::RED, 0));
        assert_eq!(small[0].1 * 4.0, large[0].1);
    }

    #[test]
    fn out_of_range_sizes_are_clamped() {
        for kind in DecorationKind::ALL {
            assert_eq!(
                generate(kind, AT, -3.0, Color32::RED, 5),
                generate(kind, AT, 0.5, Color32::RED, 5)
            );
            assert_eq!(
                generate(kind, AT, f32::NAN, Color32::RED, 5),
                generate(kind, AT, 1.0, Color32::RED, 5)
            );
            assert_eq!(
                generate(kind, AT, f32::INFINITY, Color32::RED, 5),
                generate(kind, AT, 1.0, Color32::RED, 5)
            );
        }
    }
}
