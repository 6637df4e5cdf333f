//! Picks which completion of a fragment the computer should aim for.
//!
//! Players alternately append one letter and whoever completes a word loses, so the
//! parity of the letters still missing decides who is forced to finish it. Candidates
//! are ranked in three tiers:
//!
//! 1. [`Tier::Trap`]: exactly one letter is missing.
//! 2. [`Tier::OddRemainder`]: an odd number of letters is missing.
//! 3. [`Tier::Forced`]: only even remainders exist, any of them is returned.
//!
//! Within a tier the first candidate seen wins.

use derive_new::new;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Trap,
    OddRemainder,
    Forced,
}

#[derive(new, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoodWord<'a> {
    pub word: &'a str,
    pub tier: Tier,
}

pub fn remainder(prefix: &str, word: &str) -> usize {
    word.len().saturating_sub(prefix.len())
}

/// Chooses among `candidates`, which must all start with `prefix`.
/// Returns `None` only when `candidates` is empty.
pub fn select_good_word<'a, I>(prefix: &str, candidates: I) -> Option<GoodWord<'a>>
    where I: IntoIterator<Item=&'a str> {
    let mut odd = None;
    let mut first = None;

    for word in candidates {
        let left = remainder(prefix, word);
        if left == 1 {
            trace!("trap {:?} for {:?}", word, prefix);
            return Some(GoodWord::new(word, Tier::Trap));
        }
        if odd.is_none() && left % 2 == 1 {
            odd = Some(word);
        }
        if first.is_none() {
            first = Some(word);
        }
    }

    let chosen = odd.map(|w| GoodWord::new(w, Tier::OddRemainder))
        .or_else(|| first.map(|w| GoodWord::new(w, Tier::Forced)));
    trace!("selected {:?} for {:?}", chosen, prefix);
    chosen
}
