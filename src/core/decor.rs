//! Randomized decorative elements
//!
//! Generators take any [`Rng`] so pages use the thread RNG while tests use a
//! seeded one. Positions are percentages of the containing layer.

use rand::Rng;
use rand::seq::SliceRandom;

/// Colors used by the floating flowers
pub const FLOWER_PALETTE: [&str; 5] = ["#e86b6b", "#f19a9a", "#a2b1a2", "#e2d4c1", "#b83a3a"];

/// Warmer subset used by the call-to-action petal burst
pub const PETAL_PALETTE: [&str; 4] = ["#e86b6b", "#f19a9a", "#b83a3a", "#d94a4a"];

pub const FLOWER_COUNT: usize = 25;
pub const PETAL_BURST_COUNT: usize = 25;
pub const WAITLIST_PARTICLE_COUNT: usize = 15;
pub const AMBIENT_SPARKLE_COUNT: usize = 20;

/// Flower size multiplier range; the rendered box is `size * 40px`
pub const FLOWER_SIZE_RANGE: (f32, f32) = (0.4, 1.2);
pub const FLOWER_SPEED_RANGE: (f32, f32) = (1.0, 3.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowerKind {
    Flower,
    Petal,
    Leaf,
}

impl FlowerKind {
    pub const ALL: [FlowerKind; 3] = [FlowerKind::Flower, FlowerKind::Petal, FlowerKind::Leaf];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowerKind::Flower => "flower",
            FlowerKind::Petal => "petal",
            FlowerKind::Leaf => "leaf",
        }
    }

    pub fn view_box(&self) -> &'static str {
        match self {
            FlowerKind::Flower => "0 0 60 60",
            FlowerKind::Petal => "0 0 24 24",
            FlowerKind::Leaf => "0 0 32 32",
        }
    }

    /// SVG path data for the shape
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            FlowerKind::Flower => &[
                "M30 10C35 15 40 20 30 30C20 20 25 15 30 10Z",
                "M30 50C25 45 20 40 30 30C40 40 35 45 30 50Z",
                "M10 30C15 25 20 20 30 30C20 40 15 35 10 30Z",
                "M50 30C45 35 40 40 30 30C40 20 45 25 50 30Z",
            ],
            FlowerKind::Petal => &["M12 2C13.5 4 15 6 12 12C9 6 10.5 4 12 2Z"],
            FlowerKind::Leaf => &[
                "M16 4C20 8 24 12 16 16C8 12 12 8 16 4Z",
                "M16 28C12 24 8 20 16 16C24 20 20 24 16 28Z",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation: f32,
    pub color: &'static str,
    pub kind: FlowerKind,
    /// Entrance delay in seconds
    pub delay: f32,
    pub speed: f32,
}

impl Flower {
    pub fn box_px(&self) -> f32 {
        self.size * 40.0
    }

    /// Length of one float cycle in seconds
    pub fn float_seconds(&self) -> f32 {
        6.0 + self.speed * 1.5
    }
}

/// A small dot drifting in the background
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    /// Horizontal drift in px
    pub drift: f32,
    pub duration: f32,
    pub delay: f32,
}

/// One petal of the call-to-action burst
#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale: f32,
    pub color: &'static str,
    pub delay: f32,
    /// Travel offset in px
    pub dx: f32,
    pub dy: f32,
}

pub fn generate_flowers<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Flower> {
    (0..count)
        .map(|id| Flower {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(FLOWER_SIZE_RANGE.0..FLOWER_SIZE_RANGE.1),
            rotation: rng.gen_range(0.0..360.0),
            color: pick(rng, &FLOWER_PALETTE),
            kind: *FlowerKind::ALL.choose(rng).unwrap_or(&FlowerKind::Petal),
            delay: id as f32 * 0.1,
            speed: rng.gen_range(FLOWER_SPEED_RANGE.0..FLOWER_SPEED_RANGE.1),
        })
        .collect()
}

/// Slow drifting dots behind the waitlist form
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            drift: rng.gen_range(-25.0..25.0),
            duration: rng.gen_range(8.0..12.0),
            delay: id as f32 * 0.5,
        })
        .collect()
}

/// Twinkling sparkles across the page
pub fn generate_sparkles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            drift: rng.gen_range(-20.0..20.0),
            duration: rng.gen_range(3.0..5.0),
            delay: id as f32 * 0.2,
        })
        .collect()
}

pub fn generate_petal_burst<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Petal> {
    (0..count)
        .map(|id| Petal {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            rotation: rng.gen_range(0.0..360.0),
            scale: rng.gen_range(0.5..1.0),
            color: pick(rng, &PETAL_PALETTE),
            delay: id as f32 * 0.05,
            dx: rng.gen_range(-100.0..100.0),
            dy: rng.gen_range(-100.0..100.0),
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[&'static str]) -> &'static str {
    palette.choose(rng).copied().unwrap_or("#e86b6b")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_flowers_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let flowers = generate_flowers(&mut rng, FLOWER_COUNT);

        assert_eq!(flowers.len(), 25);
        for (i, flower) in flowers.iter().enumerate() {
            assert_eq!(flower.id, i);
            assert!((0.0..100.0).contains(&flower.x));
            assert!((0.0..100.0).contains(&flower.y));
            assert!((0.4..1.2).contains(&flower.size));
            assert!((0.0..360.0).contains(&flower.rotation));
            assert!((1.0..3.0).contains(&flower.speed));
            assert!(FLOWER_PALETTE.contains(&flower.color));
            assert!((flower.delay - i as f32 * 0.1).abs() < 1e-6);
        }
    }

    #[test]
    fn test_same_seed_same_flowers() {
        let a = generate_flowers(&mut StdRng::seed_from_u64(42), 10);
        let b = generate_flowers(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_flowers(&mut rng, 0).is_empty());
        assert!(generate_particles(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_petal_burst_palette() {
        let petals = generate_petal_burst(&mut StdRng::seed_from_u64(3), PETAL_BURST_COUNT);
        assert!(petals.iter().all(|p| PETAL_PALETTE.contains(&p.color)));
        assert!(petals.iter().all(|p| (0.5..1.0).contains(&p.scale)));
    }

    #[test]
    fn test_flower_geometry() {
        let flower = Flower {
            id: 0,
            x: 0.0,
            y: 0.0,
            size: 0.5,
            rotation: 0.0,
            color: FLOWER_PALETTE[0],
            kind: FlowerKind::Leaf,
            delay: 0.0,
            speed: 2.0,
        };
        assert_eq!(flower.box_px(), 20.0);
        assert_eq!(flower.float_seconds(), 9.0);
        assert_eq!(flower.kind.paths().len(), 2);
    }
}
