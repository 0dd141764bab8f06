//! Flashcard deck session.
//!
//! Tracks a private deck copy, a cursor, and the flip state of the
//! current card. Navigation wraps around the deck in both directions and
//! always lands face-down; shuffling uniformly permutes the private copy
//! without touching the view it was derived from.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::Record;

/// Flashcard session state.
///
/// Created empty and re-synced from the view via [`reset`](Self::reset)
/// whenever filter criteria change.
#[derive(Debug, Clone, Default)]
pub struct FlashcardSession {
    /// Private copy of the view's records.
    cards: Vec<Record>,
    /// Cursor into `cards`. Always 0 when the deck is empty.
    index: usize,
    /// Whether the current card shows its answer side.
    flipped: bool,
}

impl FlashcardSession {
    /// Creates a session over a copy of `view`, at the first card,
    /// face-down.
    #[must_use]
    pub fn new(view: &[Record]) -> Self {
        Self {
            cards: view.to_vec(),
            index: 0,
            flipped: false,
        }
    }

    /// Re-copies the deck from the current view and rewinds to the first
    /// card, face-down.
    pub fn reset(&mut self, view: &[Record]) {
        self.cards = view.to_vec();
        self.index = 0;
        self.flipped = false;
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards match the current filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Zero-based cursor position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether the answer side is showing.
    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// The card under the cursor, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Record> {
        self.cards.get(self.index)
    }

    /// The full deck, in current order.
    #[must_use]
    pub fn cards(&self) -> &[Record] {
        &self.cards
    }

    /// Toggles between question and answer side. No-op on an empty deck.
    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    /// Moves the cursor by `delta` cards, wrapping modulo the deck length,
    /// and turns the new card face-down. No-op on an empty deck.
    pub fn nav(&mut self, delta: isize) {
        if self.cards.is_empty() {
            return;
        }
        let len = self.cards.len() as isize;
        let next = (self.index as isize + delta).rem_euclid(len);
        self.index = next as usize;
        self.flipped = false;
    }

    /// Uniformly permutes the deck (Fisher–Yates) and rewinds to the first
    /// card, face-down. The source view is untouched.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.index = 0;
        self.flipped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn deck(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record {
                qkey: i.to_string(),
                question: format!("Q{i}"),
                answer: format!("A{i}"),
                ..Record::default()
            })
            .collect()
    }

    #[test]
    fn nav_wraps_in_both_directions() {
        let mut session = FlashcardSession::new(&deck(3));
        session.nav(-1);
        assert_eq!(session.index(), 2);
        session.nav(1);
        assert_eq!(session.index(), 0);
        session.nav(1);
        session.nav(1);
        session.nav(1);
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn nav_forces_face_down() {
        let mut session = FlashcardSession::new(&deck(3));
        session.flip();
        assert!(session.is_flipped());
        session.nav(1);
        assert!(!session.is_flipped());
    }

    #[test]
    fn flip_toggles() {
        let mut session = FlashcardSession::new(&deck(1));
        session.flip();
        assert!(session.is_flipped());
        session.flip();
        assert!(!session.is_flipped());
    }

    #[test]
    fn empty_deck_ignores_flip_and_nav() {
        let mut session = FlashcardSession::new(&[]);
        session.flip();
        session.nav(1);
        assert!(session.is_empty());
        assert!(!session.is_flipped());
        assert_eq!(session.index(), 0);
        assert!(session.current().is_none());
    }

    #[test]
    fn shuffle_preserves_the_multiset_of_cards() {
        let original = deck(20);
        let mut session = FlashcardSession::new(&original);
        let mut rng = StdRng::seed_from_u64(7);
        session.shuffle(&mut rng);

        assert_eq!(session.len(), original.len());
        let mut shuffled_keys: Vec<&str> =
            session.cards().iter().map(|r| r.qkey.as_str()).collect();
        let mut original_keys: Vec<&str> = original.iter().map(|r| r.qkey.as_str()).collect();
        shuffled_keys.sort_unstable();
        original_keys.sort_unstable();
        assert_eq!(shuffled_keys, original_keys);
    }

    #[test]
    fn shuffle_rewinds_and_unflips() {
        let mut session = FlashcardSession::new(&deck(5));
        session.nav(3);
        session.flip();
        let mut rng = StdRng::seed_from_u64(1);
        session.shuffle(&mut rng);
        assert_eq!(session.index(), 0);
        assert!(!session.is_flipped());
    }

    #[test]
    fn reset_recopies_from_view() {
        let original = deck(4);
        let mut session = FlashcardSession::new(&original);
        let mut rng = StdRng::seed_from_u64(3);
        session.shuffle(&mut rng);
        session.nav(2);

        session.reset(&original);
        assert_eq!(session.cards(), &original[..]);
        assert_eq!(session.index(), 0);
        assert!(!session.is_flipped());
    }
}
