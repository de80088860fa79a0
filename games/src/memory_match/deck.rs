use crate::session_rng::SessionRng;

use super::settings::{CARD_SYMBOLS, DECK_SIZE};
use super::types::Card;

#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn shuffled(rng: &mut SessionRng) -> Self {
        let mut values = Vec::with_capacity(DECK_SIZE);
        for &symbol in CARD_SYMBOLS.iter() {
            values.push(symbol);
            values.push(symbol);
        }
        rng.shuffle(&mut values);

        Self {
            cards: values.into_iter().map(Card::new).collect(),
        }
    }

    #[cfg(test)]
    pub fn from_values(values: &[char]) -> Self {
        Self {
            cards: values.iter().copied().map(Card::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
