//! Caller-side policy for the brainstorm feature: blank prompts never reach
//! the generator, and a loading flag brackets each call.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::provider::TextGenerator;
use crate::{GenerationResult, Prompt};

/// Drives a [`TextGenerator`] on behalf of a prompt box.
///
/// Submissions are not serialized against each other. When two overlap, the
/// one that finishes last owns the stored result, and the loading flag stays
/// set until every submission has finished.
pub struct Brainstorm<G> {
    generator: G,
    in_flight: AtomicUsize,
    result: Mutex<Option<GenerationResult>>,
}

/// Counts one submission as in flight until dropped, including on cancellation.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<G: TextGenerator> Brainstorm<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            in_flight: AtomicUsize::new(0),
            result: Mutex::new(None),
        }
    }

    /// Generate text for `input`. Returns `None` without calling the
    /// generator when the input is blank.
    pub async fn submit(&self, input: &str) -> Option<GenerationResult> {
        let prompt = match Prompt::parse(input) {
            Ok(prompt) => prompt,
            Err(_) => {
                tracing::debug!("Ignoring blank brainstorm prompt");
                return None;
            }
        };

        let _in_flight = InFlight::enter(&self.in_flight);
        self.store(None);

        let result = self.generator.generate(prompt.as_str()).await;

        self.store(Some(result.clone()));
        Some(result)
    }

    /// Whether any submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// The most recently completed result, cleared when a new submission starts.
    pub fn last_result(&self) -> Option<GenerationResult> {
        self.result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    fn store(&self, value: Option<GenerationResult>) {
        *self
            .result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
    }
}
