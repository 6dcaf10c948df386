use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::client::{AsyncResult, DataClient, HttpTransport, ProductSummary, SearchResults};
use crate::core::{TimerId, format_price_usd};
use crate::dom::{Document, ElementId, escape_html};
use crate::extensions::PageEvent;
use crate::interaction::search::{
    EMPTY_QUERY_MESSAGE, SUGGESTION_LIST_CLASS, SUGGESTION_PRICE_CLASS, query_len,
};
use crate::interaction::{SearchInputState, Severity, SuggestionOutcome, SuggestionRequest};

use super::{CatalogPage, PageTimer};

/// Decision for a search form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub prevented: bool,
}

impl<D: Document> CatalogPage<D> {
    /// Handles an input event on a search field carrying `value`.
    ///
    /// Any pending debounce for the field is cancelled. Queries shorter than
    /// the configured minimum clear the suggestions and make outstanding
    /// responses stale; longer ones re-arm the debounce.
    pub fn search_input(&mut self, input: ElementId, value: &str) {
        let debounce_ms = self.config.search_debounce_ms;
        let state = self
            .search_inputs
            .entry(input)
            .or_insert_with(|| SearchInputState::new(debounce_ms));
        state.debouncer_mut().cancel(&mut self.timers);

        let query = value.trim();
        if query_len(query) < self.config.search_min_chars {
            state.invalidate();
            let stale_list = state.suggestion_list();
            state.set_suggestion_list(None);
            if let Some(list) = stale_list {
                self.document.remove_element(list);
            }
            return;
        }

        state.debouncer_mut().call(
            &mut self.timers,
            query.to_owned(),
            PageTimer::SearchDebounce(input),
        );
    }

    /// Handles a search form submission whose query field holds `value`.
    pub fn search_submit(&mut self, input: ElementId, value: &str) -> SubmitOutcome {
        if !value.trim().is_empty() {
            return SubmitOutcome { prevented: false };
        }
        self.document.focus(input);
        self.notify(EMPTY_QUERY_MESSAGE, Severity::Warning);
        self.emit_page_event(PageEvent::SearchSubmitBlocked { input });
        SubmitOutcome { prevented: true }
    }

    /// Drains the suggestion fetches issued since the last call.
    pub fn take_suggestion_requests(&mut self) -> Vec<SuggestionRequest> {
        std::mem::take(&mut self.suggestion_outbox)
    }

    /// Applies the response for `request`.
    ///
    /// Only the latest generation of an input may render; failures keep the
    /// suggestions already on screen.
    pub fn resolve_suggestions(
        &mut self,
        request: &SuggestionRequest,
        result: AsyncResult<SearchResults>,
    ) -> SuggestionOutcome {
        let accepted = self
            .search_inputs
            .get(&request.input)
            .is_some_and(|state| state.accepts(request.generation));
        if !accepted {
            debug!(
                input = request.input.raw(),
                generation = request.generation,
                "stale suggestion response dropped"
            );
            self.emit_page_event(PageEvent::SuggestionsDropped {
                input: request.input,
                generation: request.generation,
            });
            return SuggestionOutcome::Stale;
        }

        match result {
            AsyncResult::Success(results) => {
                let count = self.render_suggestions(request.input, &results.results);
                self.emit_page_event(PageEvent::SuggestionsRendered {
                    input: request.input,
                    generation: request.generation,
                    count,
                });
                SuggestionOutcome::Rendered { count }
            }
            AsyncResult::Failure { error_message } => {
                warn!(
                    input = request.input.raw(),
                    query = %request.query,
                    error = %error_message,
                    "suggestion fetch failed; keeping previous suggestions"
                );
                SuggestionOutcome::Failed
            }
        }
    }

    /// Performs every queued suggestion fetch through `client` and applies
    /// the responses in issue order.
    pub fn run_suggestion_requests<T: HttpTransport>(
        &mut self,
        client: &DataClient<T>,
    ) -> Vec<SuggestionOutcome> {
        self.take_suggestion_requests()
            .into_iter()
            .map(|request| {
                let result = client.search_products(&request.query, request.limit);
                self.resolve_suggestions(&request, result)
            })
            .collect()
    }

    #[must_use]
    pub fn search_generation(&self, input: ElementId) -> Option<u64> {
        self.search_inputs.get(&input).map(SearchInputState::generation)
    }

    #[must_use]
    pub fn suggestion_list(&self, input: ElementId) -> Option<ElementId> {
        self.search_inputs
            .get(&input)
            .and_then(SearchInputState::suggestion_list)
    }

    #[must_use]
    pub fn search_debounce_pending(&self, input: ElementId) -> bool {
        self.search_inputs
            .get(&input)
            .is_some_and(|state| state.debouncer().is_pending())
    }

    pub(super) fn fire_search_debounce(&mut self, input: ElementId, timer: TimerId) {
        let limit = self.config.search_suggestion_limit;
        let Some(state) = self.search_inputs.get_mut(&input) else {
            return;
        };
        let Some(query) = state.debouncer_mut().fire(timer) else {
            return;
        };
        info!(input = input.raw(), query = %query, "search suggestions for query");
        let request = state.issue(input, query, limit);
        let generation = request.generation;
        self.suggestion_outbox.push(request);
        self.emit_page_event(PageEvent::SuggestionsRequested { input, generation });
    }

    fn render_suggestions(&mut self, input: ElementId, products: &[ProductSummary]) -> usize {
        let existing = self
            .search_inputs
            .get(&input)
            .and_then(SearchInputState::suggestion_list)
            .filter(|list| self.document.contains(*list));

        if products.is_empty() {
            if let Some(list) = existing {
                self.document.remove_element(list);
            }
            self.set_input_suggestion_list(input, None);
            return 0;
        }

        let list = match existing {
            Some(list) => {
                self.document.set_inner_html(list, "");
                list
            }
            None => {
                let parent = self.document.parent(input);
                let list = self.document.create_element("ul", parent);
                self.document.add_class(list, SUGGESTION_LIST_CLASS);
                list
            }
        };
        for product in products {
            let item = self.document.create_element("li", Some(list));
            let mut markup = format!(
                r#"<a href="/product/{}">{}</a>"#,
                escape_html(&product.id),
                escape_html(&product.name)
            );
            if let Some(price) = product.price.and_then(|p| Decimal::try_from(p).ok()) {
                markup.push_str(&format!(
                    r#" <span class="{SUGGESTION_PRICE_CLASS}">{}</span>"#,
                    format_price_usd(price)
                ));
            }
            self.document.set_inner_html(item, &markup);
        }
        self.set_input_suggestion_list(input, Some(list));
        products.len()
    }

    fn set_input_suggestion_list(&mut self, input: ElementId, list: Option<ElementId>) {
        if let Some(state) = self.search_inputs.get_mut(&input) {
            state.set_suggestion_list(list);
        }
    }
}
