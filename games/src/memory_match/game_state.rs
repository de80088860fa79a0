use crate::session_rng::SessionRng;

use super::deck::Deck;
use super::settings::PAIR_COUNT;
use super::types::{Card, CardFace, FlipOutcome};

#[derive(Debug)]
pub struct MemoryMatchGameState {
    deck: Deck,
    flipped: Vec<usize>,
    matched_pairs: u32,
    move_count: u32,
    mismatch_count: u32,
}

impl MemoryMatchGameState {
    pub fn new(rng: &mut SessionRng) -> Self {
        Self::with_deck_internal(Deck::shuffled(rng))
    }

    #[cfg(test)]
    pub fn with_deck(deck: Deck) -> Self {
        Self::with_deck_internal(deck)
    }

    fn with_deck_internal(deck: Deck) -> Self {
        Self {
            deck,
            flipped: Vec::with_capacity(2),
            matched_pairs: 0,
            move_count: 0,
            mismatch_count: 0,
        }
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        *self = Self::new(rng);
    }

    pub fn flip_card(&mut self, index: usize) -> FlipOutcome {
        if self.pending_comparison() {
            return FlipOutcome::Ignored;
        }

        match self.deck.get(index) {
            Some(card) if card.is_face_down() => {}
            _ => return FlipOutcome::Ignored,
        }

        if let Some(card) = self.deck.get_mut(index) {
            card.face = CardFace::Up;
        }
        self.flipped.push(index);

        if self.flipped.len() < 2 {
            return FlipOutcome::Flipped;
        }

        self.move_count += 1;
        let (first, second) = (self.flipped[0], self.flipped[1]);

        if self.card_value(first) == self.card_value(second) {
            for flipped_index in [first, second] {
                if let Some(card) = self.deck.get_mut(flipped_index) {
                    card.face = CardFace::Matched;
                }
            }
            self.matched_pairs += 1;
            self.flipped.clear();
            FlipOutcome::Matched { first, second }
        } else {
            FlipOutcome::Mismatched { first, second }
        }
    }

    pub fn resolve_mismatch(&mut self, first: usize, second: usize) {
        let pending = self.flipped == [first, second] || self.flipped == [second, first];
        if !pending {
            return;
        }

        for flipped_index in [first, second] {
            if let Some(card) = self.deck.get_mut(flipped_index) {
                card.face = CardFace::Down;
            }
        }
        self.flipped.clear();
        self.mismatch_count += 1;
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    pub fn pending_comparison(&self) -> bool {
        self.flipped.len() == 2
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn mismatch_count(&self) -> u32 {
        self.mismatch_count
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs as usize == PAIR_COUNT
    }

    fn card_value(&self, index: usize) -> Option<char> {
        self.deck.get(index).map(|card| card.value)
    }
}
