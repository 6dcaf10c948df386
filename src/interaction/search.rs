use serde::{Deserialize, Serialize};

use crate::core::Debouncer;
use crate::dom::ElementId;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";
pub const SUGGESTION_LIST_CLASS: &str = "search-suggestions";
pub const SUGGESTION_PRICE_CLASS: &str = "suggestion-price";

/// A suggestion fetch the host must perform on behalf of an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub input: ElementId,
    pub generation: u64,
    pub query: String,
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionOutcome {
    Rendered { count: usize },
    /// A newer query was issued (or the input was cleared) after this one.
    Stale,
    /// The fetch failed; previously rendered suggestions were kept.
    Failed,
}

/// Per-input live-search state.
///
/// `generation` advances whenever a request is issued or outstanding
/// responses are invalidated; only a response carrying the current
/// generation may render.
#[derive(Debug, Clone)]
pub struct SearchInputState {
    debouncer: Debouncer<String>,
    generation: u64,
    suggestion_list: Option<ElementId>,
    last_issued_query: Option<String>,
}

impl SearchInputState {
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_ms),
            generation: 0,
            suggestion_list: None,
            last_issued_query: None,
        }
    }

    #[must_use]
    pub fn debouncer(&self) -> &Debouncer<String> {
        &self.debouncer
    }

    pub fn debouncer_mut(&mut self) -> &mut Debouncer<String> {
        &mut self.debouncer
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn last_issued_query(&self) -> Option<&str> {
        self.last_issued_query.as_deref()
    }

    #[must_use]
    pub fn suggestion_list(&self) -> Option<ElementId> {
        self.suggestion_list
    }

    pub fn set_suggestion_list(&mut self, list: Option<ElementId>) {
        self.suggestion_list = list;
    }

    /// Issues the next request generation for `query`.
    pub fn issue(&mut self, input: ElementId, query: String, limit: u32) -> SuggestionRequest {
        self.generation += 1;
        self.last_issued_query = Some(query.clone());
        SuggestionRequest {
            input,
            generation: self.generation,
            query,
            limit,
        }
    }

    /// Makes every outstanding response stale without issuing a request.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    #[must_use]
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

/// Counts query length the way users perceive it.
#[must_use]
pub fn query_len(query: &str) -> usize {
    query.chars().count()
}
