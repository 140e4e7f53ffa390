use std::num::NonZeroUsize;

use rand::Rng;

//
// ─── ANSWER VISIBILITY ─────────────────────────────────────────────────────────
//

/// Per-question reveal state.
///
/// `Hidden` is the initial state. The only way back to `Hidden` is a
/// navigation event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerVisibility {
    #[default]
    Hidden,
    Revealed,
}

//
// ─── NAVIGATOR ─────────────────────────────────────────────────────────────────
//

/// Cursor over an ordered, non-empty list of `len` questions.
///
/// Every movement wraps around and hides the answer.
///
/// # Examples
///
/// ```
/// # use std::num::NonZeroUsize;
/// # use quiz_core::{AnswerVisibility, Navigator};
/// let mut nav = Navigator::new(NonZeroUsize::new(3).unwrap());
/// nav.previous();
/// assert_eq!(nav.index(), 2);
/// nav.reveal();
/// nav.next();
/// assert_eq!(nav.index(), 0);
/// assert_eq!(nav.visibility(), AnswerVisibility::Hidden);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    len: NonZeroUsize,
    index: usize,
    visibility: AnswerVisibility,
}

impl Navigator {
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            index: 0,
            visibility: AnswerVisibility::Hidden,
        }
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn visibility(&self) -> AnswerVisibility {
        self.visibility
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.visibility == AnswerVisibility::Revealed
    }

    pub fn next(&mut self) {
        self.move_to((self.index + 1) % self.len.get());
    }

    pub fn previous(&mut self) {
        let len = self.len.get();
        self.move_to((self.index + len - 1) % len);
    }

    /// Moves to a uniformly drawn index. The current index may be drawn again.
    pub fn jump_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let target = rng.random_range(0..self.len.get());
        self.move_to(target);
    }

    /// Returns `true` if the answer was hidden before the call.
    pub fn reveal(&mut self) -> bool {
        let was_hidden = self.visibility == AnswerVisibility::Hidden;
        self.visibility = AnswerVisibility::Revealed;
        was_hidden
    }

    fn move_to(&mut self, index: usize) {
        self.index = index;
        self.visibility = AnswerVisibility::Hidden;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
