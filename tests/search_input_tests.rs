use std::cell::RefCell;

use catalog_rs::api::{CatalogPage, PageConfig};
use catalog_rs::client::{
    AsyncResult, DataClient, HttpResponse, HttpTransport, ProductSummary, SearchResults,
};
use catalog_rs::dom::{Document, ElementId, MemoryDocument};
use catalog_rs::interaction::search::{
    EMPTY_QUERY_MESSAGE, SUGGESTION_LIST_CLASS, SUGGESTION_PRICE_CLASS,
};
use catalog_rs::interaction::{Severity, SuggestionOutcome};
use catalog_rs::CatalogResult;
use reqwest::Url;

struct SearchFixture {
    page: CatalogPage<MemoryDocument>,
    form: ElementId,
    input: ElementId,
}

fn fixture() -> SearchFixture {
    let mut document = MemoryDocument::new();
    let body = document.body();
    let form = document.append(body, "form", &["d-flex"]);
    document.set_attribute(form, "action", "/search");
    let input = document.append(form, "input", &["form-control"]);
    document.set_attribute(input, "name", "q");
    let page = CatalogPage::new(document, PageConfig::default()).expect("page init");
    SearchFixture { page, form, input }
}

fn product(id: &str, name: &str) -> ProductSummary {
    ProductSummary {
        id: id.to_owned(),
        name: name.to_owned(),
        brand: String::new(),
        main_category: String::new(),
        subcategory: String::new(),
        price: None,
        rating: None,
        image_url: None,
        description: String::new(),
    }
}

fn results(query: &str, products: Vec<ProductSummary>) -> AsyncResult<SearchResults> {
    let total = products.len();
    AsyncResult::success(SearchResults {
        query: query.to_owned(),
        results: products,
        total,
    })
}

fn suggestion_texts(page: &CatalogPage<MemoryDocument>, input: ElementId) -> Vec<String> {
    let list = page.suggestion_list(input).expect("suggestion list");
    page.document()
        .children(list)
        .into_iter()
        .map(|item| page.document().text_content(item))
        .collect()
}

#[test]
fn queries_below_minimum_never_issue_requests() {
    let mut fx = fixture();

    fx.page.search_input(fx.input, "ab");
    fx.page.search_input(fx.input, "  ab   ");
    fx.page.advance_by(5_000);

    assert!(fx.page.take_suggestion_requests().is_empty());
}

#[test]
fn burst_collapses_into_one_request_for_latest_query() {
    let mut fx = fixture();

    fx.page.search_input(fx.input, "abc");
    fx.page.advance_by(100);
    fx.page.search_input(fx.input, "abcd");
    fx.page.advance_by(299);
    assert!(fx.page.take_suggestion_requests().is_empty());
    assert!(fx.page.search_debounce_pending(fx.input));

    fx.page.advance_by(1);
    let requests = fx.page.take_suggestion_requests();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, "abcd");
    assert_eq!(requests[0].limit, 12);
    assert_eq!(requests[0].input, fx.input);
    assert!(!fx.page.search_debounce_pending(fx.input));
}

#[test]
fn shortening_query_cancels_pending_request() {
    let mut fx = fixture();

    fx.page.search_input(fx.input, "shoe");
    fx.page.advance_by(200);
    fx.page.search_input(fx.input, "sh");
    fx.page.advance_by(1_000);

    assert!(fx.page.take_suggestion_requests().is_empty());
}

#[test]
fn only_latest_generation_renders() {
    let mut fx = fixture();

    fx.page.search_input(fx.input, "boot");
    fx.page.advance_by(300);
    fx.page.search_input(fx.input, "boots");
    fx.page.advance_by(300);
    let requests = fx.page.take_suggestion_requests();
    assert_eq!(requests.len(), 2);

    let newer = fx.page.resolve_suggestions(
        &requests[1],
        results("boots", vec![product("1", "Rain Boots"), product("2", "Snow Boots")]),
    );
    let older =
        fx.page
            .resolve_suggestions(&requests[0], results("boot", vec![product("9", "Boot Polish")]));

    assert_eq!(newer, SuggestionOutcome::Rendered { count: 2 });
    assert_eq!(older, SuggestionOutcome::Stale);
    assert_eq!(
        suggestion_texts(&fx.page, fx.input),
        vec!["Rain Boots".to_owned(), "Snow Boots".to_owned()]
    );
}

#[test]
fn suggestion_list_is_placed_next_to_input() {
    let mut fx = fixture();
    fx.page.search_input(fx.input, "hat");
    fx.page.advance_by(300);
    let request = fx.page.take_suggestion_requests().remove(0);

    fx.page
        .resolve_suggestions(&request, results("hat", vec![product("B01", "<Sun> Hat")]));

    let list = fx.page.suggestion_list(fx.input).expect("list");
    let document = fx.page.document();
    assert_eq!(document.parent(list), Some(fx.form));
    assert!(document.has_class(list, SUGGESTION_LIST_CLASS));
    let item = document.children(list)[0];
    assert_eq!(
        document.inner_html(item),
        r#"<a href="/product/B01">&lt;Sun&gt; Hat</a>"#
    );
}

#[test]
fn priced_suggestions_show_formatted_dollar_amount() {
    let mut fx = fixture();
    fx.page.search_input(fx.input, "sofa");
    fx.page.advance_by(300);
    let request = fx.page.take_suggestion_requests().remove(0);

    let mut sofa = product("S9", "Corner Sofa");
    sofa.price = Some(1249.9);
    fx.page
        .resolve_suggestions(&request, results("sofa", vec![sofa, product("S10", "Cushion")]));

    let list = fx.page.suggestion_list(fx.input).expect("list");
    let document = fx.page.document();
    let items = document.children(list);
    assert_eq!(
        document.inner_html(items[0]),
        format!(
            r#"<a href="/product/S9">Corner Sofa</a> <span class="{SUGGESTION_PRICE_CLASS}">$1,249.90</span>"#
        )
    );
    assert_eq!(
        document.inner_html(items[1]),
        r#"<a href="/product/S10">Cushion</a>"#
    );
}

#[test]
fn failed_fetch_keeps_previous_suggestions() {
    let mut fx = fixture();
    fx.page.search_input(fx.input, "scarf");
    fx.page.advance_by(300);
    let first = fx.page.take_suggestion_requests().remove(0);
    fx.page
        .resolve_suggestions(&first, results("scarf", vec![product("5", "Wool Scarf")]));

    fx.page.search_input(fx.input, "scarfs");
    fx.page.advance_by(300);
    let second = fx.page.take_suggestion_requests().remove(0);
    let outcome = fx
        .page
        .resolve_suggestions(&second, AsyncResult::failure("search failed: timeout"));

    assert_eq!(outcome, SuggestionOutcome::Failed);
    assert_eq!(suggestion_texts(&fx.page, fx.input), vec!["Wool Scarf".to_owned()]);
}

#[test]
fn clearing_input_removes_suggestions_and_drops_in_flight_responses() {
    let mut fx = fixture();
    fx.page.search_input(fx.input, "belt");
    fx.page.advance_by(300);
    let first = fx.page.take_suggestion_requests().remove(0);
    fx.page
        .resolve_suggestions(&first, results("belt", vec![product("3", "Leather Belt")]));
    let list = fx.page.suggestion_list(fx.input).expect("list");

    fx.page.search_input(fx.input, "belts");
    fx.page.advance_by(300);
    let in_flight = fx.page.take_suggestion_requests().remove(0);
    fx.page.search_input(fx.input, "");

    assert!(!fx.page.document().contains(list));
    assert_eq!(fx.page.suggestion_list(fx.input), None);
    assert_eq!(
        fx.page
            .resolve_suggestions(&in_flight, results("belts", vec![product("4", "Belts")])),
        SuggestionOutcome::Stale
    );
}

struct CannedSearch {
    body: String,
    requests: RefCell<Vec<Url>>,
}

impl HttpTransport for CannedSearch {
    fn get(&self, url: &Url) -> CatalogResult<HttpResponse> {
        self.requests.borrow_mut().push(url.clone());
        Ok(HttpResponse::new(200, self.body.clone()))
    }
}

#[test]
fn queued_requests_run_through_data_client() {
    let transport = CannedSearch {
        body: r#"{"success": true, "query": "denim",
            "results": [{"id": 11, "name": "Denim Jacket"}], "total": 1}"#
            .to_owned(),
        requests: RefCell::new(Vec::new()),
    };
    let client = DataClient::new(&transport, "http://shop.test").expect("client");
    let mut fx = fixture();

    fx.page.search_input(fx.input, " denim ");
    fx.page.advance_by(300);
    let outcomes = fx.page.run_suggestion_requests(&client);

    assert_eq!(outcomes, vec![SuggestionOutcome::Rendered { count: 1 }]);
    assert_eq!(
        transport.requests.borrow()[0].query(),
        Some("q=denim&limit=12")
    );
    assert_eq!(suggestion_texts(&fx.page, fx.input), vec!["Denim Jacket".to_owned()]);
}

#[test]
fn empty_submit_is_prevented_with_warning() {
    let mut fx = fixture();

    let blocked = fx.page.search_submit(fx.input, "   ");
    let allowed = fx.page.search_submit(fx.input, "jeans");

    assert!(blocked.prevented);
    assert!(!allowed.prevented);
    assert_eq!(fx.page.document().focused(), Some(fx.input));
    let shown: Vec<_> = fx
        .page
        .notifications()
        .map(|n| (n.message.clone(), n.severity))
        .collect();
    assert_eq!(shown, vec![(EMPTY_QUERY_MESSAGE.to_owned(), Severity::Warning)]);
}
