//! Response selector: picks a canned chat reply.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::Matcher;
use crate::models::{ChatMessage, Language};

impl Matcher {
    /// Reply to `input`: a uniformly random line from the classified
    /// category's pool for `language`. Never fails; unmatched (including
    /// empty) input draws from the general pool.
    pub fn select_response(&self, input: &str, language: Language) -> &str {
        self.select_response_with(input, language, &mut rand::rng())
    }

    /// [`Matcher::select_response`] with a caller-supplied RNG.
    pub fn select_response_with<R: Rng + ?Sized>(
        &self,
        input: &str,
        language: Language,
        rng: &mut R,
    ) -> &str {
        let category = self.classify(input);
        pick(self.catalog().entry(category).replies.get(language), rng)
    }

    /// Opening assistant message for a conversation that has not started.
    pub fn greeting(&self, language: Language) -> &str {
        pick(self.catalog().greeting.get(language), &mut rand::rng())
    }

    /// Reply for a chat turn, taking the conversation so far into account:
    /// blank input on an empty history is the opening turn and gets a
    /// greeting; every other turn goes through [`Matcher::select_response`].
    pub fn turn_reply(&self, history: &[ChatMessage], input: &str, language: Language) -> &str {
        if history.is_empty() && input.trim().is_empty() {
            self.greeting(language)
        } else {
            self.select_response(input, language)
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> &'a str {
    // Catalog validation guarantees non-empty pools.
    pool.choose(rng).map(String::as_str).unwrap_or_default()
}
