use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::session_rng::SessionRng;

use super::game_state::MemoryMatchGameState;
use super::settings::MISMATCH_DELAY_MS;
use super::types::FlipOutcome;

#[derive(Clone)]
pub struct MemoryMatchSessionState {
    pub game_state: Arc<Mutex<MemoryMatchGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
}

impl MemoryMatchSessionState {
    pub fn create(seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let game_state = MemoryMatchGameState::new(&mut rng);

        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

pub struct MemoryMatchSession;

impl MemoryMatchSession {
    pub async fn flip_card(state: &MemoryMatchSessionState, index: usize) -> FlipOutcome {
        let outcome = state.game_state.lock().await.flip_card(index);
        if let FlipOutcome::Mismatched { first, second } = outcome {
            Self::schedule_unflip(state, first, second);
        }
        outcome
    }

    pub async fn reset(state: &MemoryMatchSessionState) {
        let mut rng = state.rng.lock().await;
        state.game_state.lock().await.reset(&mut rng);
    }

    fn schedule_unflip(state: &MemoryMatchSessionState, first: usize, second: usize) {
        let game_state = state.game_state.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(MISMATCH_DELAY_MS)).await;
            game_state.lock().await.resolve_mismatch(first, second);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_match::settings::DECK_SIZE;
    use crate::memory_match::types::CardFace;

    async fn mismatched_pair(state: &MemoryMatchSessionState) -> (usize, usize) {
        let game_state = state.game_state.lock().await;
        let cards = game_state.cards();
        let second = cards
            .iter()
            .position(|card| card.value != cards[0].value)
            .unwrap();
        (0, second)
    }

    async fn matching_pair(state: &MemoryMatchSessionState) -> (usize, usize) {
        let game_state = state.game_state.lock().await;
        let cards = game_state.cards();
        let second = (1..cards.len())
            .find(|&index| cards[index].value == cards[0].value)
            .unwrap();
        (0, second)
    }

    #[tokio::test(start_paused = true)]
    async fn test_mismatched_pair_unflips_after_delay() {
        let state = MemoryMatchSessionState::create(12345);
        let (first, second) = mismatched_pair(&state).await;

        assert_eq!(
            MemoryMatchSession::flip_card(&state, first).await,
            FlipOutcome::Flipped
        );
        assert_eq!(
            MemoryMatchSession::flip_card(&state, second).await,
            FlipOutcome::Mismatched { first, second }
        );

        tokio::time::sleep(Duration::from_millis(MISMATCH_DELAY_MS + 50)).await;

        let game_state = state.game_state.lock().await;
        assert_eq!(game_state.cards()[first].face, CardFace::Down);
        assert_eq!(game_state.cards()[second].face, CardFace::Down);
        assert!(!game_state.pending_comparison());
        assert_eq!(game_state.mismatch_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_third_flip_blocked_until_delay_elapses() {
        let state = MemoryMatchSessionState::create(12345);
        let (first, second) = mismatched_pair(&state).await;
        let third = (0..DECK_SIZE)
            .find(|&index| index != first && index != second)
            .unwrap();

        MemoryMatchSession::flip_card(&state, first).await;
        MemoryMatchSession::flip_card(&state, second).await;

        assert_eq!(
            MemoryMatchSession::flip_card(&state, third).await,
            FlipOutcome::Ignored
        );

        tokio::time::sleep(Duration::from_millis(MISMATCH_DELAY_MS + 50)).await;

        assert_eq!(
            MemoryMatchSession::flip_card(&state, third).await,
            FlipOutcome::Flipped
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_matching_pair_settles_without_delay() {
        let state = MemoryMatchSessionState::create(12345);
        let (first, second) = matching_pair(&state).await;

        MemoryMatchSession::flip_card(&state, first).await;
        let outcome = MemoryMatchSession::flip_card(&state, second).await;

        assert_eq!(outcome, FlipOutcome::Matched { first, second });
        let game_state = state.game_state.lock().await;
        assert!(game_state.cards()[first].is_matched());
        assert!(game_state.cards()[second].is_matched());
        assert!(!game_state.pending_comparison());
    }

    #[tokio::test]
    async fn test_reset_clears_progress() {
        let state = MemoryMatchSessionState::create(12345);
        let (first, second) = matching_pair(&state).await;
        MemoryMatchSession::flip_card(&state, first).await;
        MemoryMatchSession::flip_card(&state, second).await;

        MemoryMatchSession::reset(&state).await;

        let game_state = state.game_state.lock().await;
        assert_eq!(game_state.move_count(), 0);
        assert_eq!(game_state.matched_pairs(), 0);
        assert!(game_state.cards().iter().all(|card| card.is_face_down()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_unflip_after_reset_is_harmless() {
        let state = MemoryMatchSessionState::create(12345);
        let (first, second) = mismatched_pair(&state).await;
        MemoryMatchSession::flip_card(&state, first).await;
        MemoryMatchSession::flip_card(&state, second).await;

        MemoryMatchSession::reset(&state).await;

        tokio::time::sleep(Duration::from_millis(MISMATCH_DELAY_MS + 50)).await;

        let game_state = state.game_state.lock().await;
        assert_eq!(game_state.mismatch_count(), 0);
        assert!(game_state.cards().iter().all(|card| card.is_face_down()));
    }
}
