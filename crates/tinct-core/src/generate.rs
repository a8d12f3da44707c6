//! Top-level palette generation — strategy selection plus dispatch.

use crate::palette::{Palette, Theme};
use crate::rng::RandomSource;
use crate::strategy::Strategy;

/// Generate a palette with a randomly selected strategy.
///
/// The strategy draw comes first, from the same source the strategy then
/// consumes, so a seeded source fixes the entire outcome.
pub fn generate<R: RandomSource>(rng: &mut R, theme: Theme) -> Palette {
    let strategy = *rng.pick(Strategy::all());
    generate_with(rng, strategy, theme)
}

/// Generate a palette with an explicit strategy.
pub fn generate_with<R: RandomSource>(rng: &mut R, strategy: Strategy, theme: Theme) -> Palette {
    let palette = strategy.generate(rng, theme);
    tracing::debug!(
        strategy = strategy.name(),
        theme = theme.name(),
        "generated palette"
    );
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedSequence, SeededSource};
    use pretty_assertions::assert_eq;

    #[test]
    fn first_draw_selects_the_strategy() {
        // index(3) over [material, chakra, modern]: 0.0 → material,
        // 0.4 → chakra, 0.9 → modern.
        let mut rng = FixedSequence::new([0.9, 0.5]);
        let picked = generate(&mut rng, Theme::Light);

        let mut rng = FixedSequence::new([0.5]);
        let modern = generate_with(&mut rng, Strategy::Modern, Theme::Light);
        assert_eq!(picked, modern);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut a = SeededSource::new(42);
        let mut b = SeededSource::new(42);
        assert_eq!(generate(&mut a, Theme::Dark), generate(&mut b, Theme::Dark));
    }

    #[test]
    fn different_seeds_disagree_eventually() {
        // Not guaranteed per pair, but 32 seeds collapsing to one palette
        // would mean the source ignores its seed.
        let first = generate(&mut SeededSource::new(0), Theme::Light);
        let all_same = (1..32)
            .all(|seed| generate(&mut SeededSource::new(seed), Theme::Light) == first);
        assert!(!all_same);
    }
}
