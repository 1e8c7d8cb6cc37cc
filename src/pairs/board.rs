use super::catalog::Symbol;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card
{
    pub id: usize,
    pub symbol: Symbol,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card
{
    pub const fn new(id: usize, symbol: Symbol) -> Self
    {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    pub fn is_face_up(&self) -> bool
    {
        self.is_flipped || self.is_matched
    }
}

pub fn deal(catalog: &[Symbol], rng: &mut impl Rng) -> Vec<Card>
{
    let mut symbols: Vec<Symbol> = catalog
        .iter()
        .flat_map(|symbol| [*symbol, *symbol])
        .collect();
    symbols.shuffle(rng);
    lay_out(symbols)
}

pub fn lay_out(symbols: Vec<Symbol>) -> Vec<Card>
{
    symbols
        .into_iter()
        .enumerate()
        .map(|(id, symbol)| Card::new(id, symbol))
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::pairs::catalog::ANIMALS;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn symbol_counts(cards: &[Card]) -> HashMap<&'static str, usize>
    {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.symbol.name).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn deal_places_every_symbol_twice()
    {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cards = deal(&ANIMALS, &mut rng);

        assert_eq!(cards.len(), 16);
        let counts = symbol_counts(&cards);
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&count| count == 2));
        for (index, card) in cards.iter().enumerate() {
            assert_eq!(card.id, index);
            assert!(!card.is_flipped);
            assert!(!card.is_matched);
        }
    }

    #[test]
    fn deal_is_deterministic_for_a_seed()
    {
        let first = deal(&ANIMALS, &mut ChaCha8Rng::seed_from_u64(42));
        let second = deal(&ANIMALS, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn deal_handles_empty_and_single_catalogs()
    {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(deal(&[], &mut rng).is_empty());

        let cards = deal(&ANIMALS[..1], &mut rng);
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|card| card.symbol == ANIMALS[0]));
        assert_eq!(cards[1].id, 1);
    }

    #[test]
    fn face_up_covers_flipped_and_matched()
    {
        let mut card = Card::new(0, ANIMALS[0]);
        assert!(!card.is_face_up());
        card.is_flipped = true;
        assert!(card.is_face_up());
        card.is_flipped = false;
        card.is_matched = true;
        assert!(card.is_face_up());
    }

    proptest! {
        #[test]
        fn deal_ids_follow_positions(seed in any::<u64>(), pairs in 1usize..=8)
        {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let cards = deal(&ANIMALS[..pairs], &mut rng);

            let ids: Vec<usize> = cards.iter().map(|card| card.id).collect();
            prop_assert_eq!(ids, (0..pairs * 2).collect::<Vec<_>>());
            prop_assert!(cards.iter().all(|card| !card.is_face_up()));
        }

        #[test]
        fn deal_preserves_symbol_multiset(seed in any::<u64>(), pairs in 2usize..=8)
        {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let cards = deal(&ANIMALS[..pairs], &mut rng);

            prop_assert_eq!(cards.len(), pairs * 2);
            let counts = symbol_counts(&cards);
            prop_assert_eq!(counts.len(), pairs);
            prop_assert!(counts.values().all(|&count| count == 2));
        }
    }
}
