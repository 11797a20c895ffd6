//! Variation operators, generic over the random source.
//!
//! All randomness comes from the `rng` argument, so a seeded generator makes
//! every operator reproducible.

use rand::Rng;

use super::error::OptimizeError;
use crate::color::Color;
use crate::palette::Palette;

/// Largest per-channel perturbation applied by [`mutate`], in either
/// direction.
pub const MUTATION_OFFSET: i32 = 25;

/// A palette of `length` uniformly random colors.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R, name: &str, length: usize) -> Palette {
    let colors = (0..length)
        .map(|_| Color::new(rng.gen(), rng.gen(), rng.gen()))
        .collect();
    Palette::new(name, colors)
}

/// Single-point crossover.
///
/// A cut point `p` is drawn uniformly from `0..len`; the child takes
/// `parent_a[..p]` followed by `parent_b[p..]`. The child has the same
/// length as its parents and every color sits at the index it came from.
///
/// # Errors
///
/// Returns [`OptimizeError::ParentLengthMismatch`] if the parents differ in
/// length.
///
/// # Example
///
/// ```
/// use cvd_palette::{crossover, Color, Palette};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let a = Palette::new("a", vec![Color::BLACK; 4]);
/// let b = Palette::new("b", vec![Color::WHITE; 4]);
/// let child = crossover(&mut StdRng::seed_from_u64(1), &a, &b).unwrap();
/// assert_eq!(child.len(), 4);
/// ```
pub fn crossover<R: Rng + ?Sized>(
    rng: &mut R,
    parent_a: &Palette,
    parent_b: &Palette,
) -> Result<Palette, OptimizeError> {
    if parent_a.len() != parent_b.len() {
        return Err(OptimizeError::ParentLengthMismatch {
            left: parent_a.len(),
            right: parent_b.len(),
        });
    }
    if parent_a.is_empty() {
        return Ok(Palette::new(parent_a.name(), Vec::new()));
    }

    let point = rng.gen_range(0..parent_a.len());
    let colors = parent_a.colors()[..point]
        .iter()
        .chain(&parent_b.colors()[point..])
        .copied()
        .collect();
    Ok(Palette::new(parent_a.name(), colors))
}

/// Perturb a copy of `palette`.
///
/// Each color is independently selected with probability `rate`; a selected
/// color has each channel moved by a uniform offset in
/// `-MUTATION_OFFSET..=MUTATION_OFFSET` and clamped into 0..=255.
pub fn mutate<R: Rng + ?Sized>(rng: &mut R, palette: &Palette, rate: f64) -> Palette {
    let colors = palette
        .colors()
        .iter()
        .map(|&color| {
            if rng.gen::<f64>() < rate {
                let mut shift = |channel: u8| {
                    channel as i32 + rng.gen_range(-MUTATION_OFFSET..=MUTATION_OFFSET)
                };
                let r = shift(color.r);
                let g = shift(color.g);
                let b = shift(color.b);
                Color::from_clamped(r, g, b)
            } else {
                color
            }
        })
        .collect();
    Palette::new(palette.name(), colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gradient(name: &str, base: u8, len: usize) -> Palette {
        let colors = (0..len)
            .map(|i| Color::new(base, (i * 10) as u8, 255 - base))
            .collect();
        Palette::new(name, colors)
    }

    #[test]
    fn test_random_palette_is_seed_reproducible() {
        let a = random_palette(&mut StdRng::seed_from_u64(9), "x", 32);
        let b = random_palette(&mut StdRng::seed_from_u64(9), "x", 32);
        let c = random_palette(&mut StdRng::seed_from_u64(10), "x", 32);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_crossover_length_and_provenance() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = gradient("a", 0, 12);
        let b = gradient("b", 200, 12);

        for _ in 0..200 {
            let child = crossover(&mut rng, &a, &b).unwrap();
            assert_eq!(child.len(), 12);

            // A prefix from `a`, then the remainder from `b`
            let switch = child
                .colors()
                .iter()
                .position(|c| c.r == 200)
                .unwrap_or(child.len());
            for (i, color) in child.colors().iter().enumerate() {
                let expected = if i < switch { a.colors()[i] } else { b.colors()[i] };
                assert_eq!(*color, expected, "index {i}");
            }
            assert!(switch < 12, "the cut point is below len, so b contributes");
        }
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = crossover(&mut rng, &gradient("a", 0, 3), &gradient("b", 0, 4));
        assert_eq!(
            err,
            Err(OptimizeError::ParentLengthMismatch { left: 3, right: 4 })
        );
    }

    #[test]
    fn test_crossover_empty_parents() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty = Palette::new("e", Vec::new());
        assert!(crossover(&mut rng, &empty, &empty).unwrap().is_empty());
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        let palette = gradient("p", 100, 20);
        assert_eq!(mutate(&mut rng, &palette, 0.0).colors(), palette.colors());
    }

    #[test]
    fn test_mutate_offsets_are_bounded() {
        let mut rng = StdRng::seed_from_u64(4);
        let palette = gradient("p", 128, 20);
        for _ in 0..100 {
            let mutated = mutate(&mut rng, &palette, 1.0);
            for (before, after) in palette.colors().iter().zip(mutated.colors()) {
                assert!((after.r as i32 - before.r as i32).abs() <= MUTATION_OFFSET);
                assert!((after.g as i32 - before.g as i32).abs() <= MUTATION_OFFSET);
                assert!((after.b as i32 - before.b as i32).abs() <= MUTATION_OFFSET);
            }
        }
    }

    #[test]
    fn test_mutate_clamps_at_extremes() {
        let mut rng = StdRng::seed_from_u64(5);
        let palette = Palette::new(
            "edges",
            vec![Color::BLACK, Color::WHITE, Color::new(3, 252, 0)],
        );
        let mut saw_change = false;
        for _ in 0..200 {
            // u8 channels cannot leave 0..=255; a wrap would show as a huge jump
            let mutated = mutate(&mut rng, &palette, 1.0);
            assert!(mutated.colors()[0].r <= MUTATION_OFFSET as u8);
            assert!(mutated.colors()[1].r >= 255 - MUTATION_OFFSET as u8);
            saw_change |= mutated.colors() != palette.colors();
        }
        assert!(saw_change);
    }

    #[test]
    fn test_mutate_returns_a_copy() {
        let mut rng = StdRng::seed_from_u64(6);
        let palette = gradient("p", 50, 5);
        let snapshot = palette.clone();
        let _ = mutate(&mut rng, &palette, 1.0);
        assert_eq!(palette, snapshot);
    }
}
