mod common;

use std::fmt;
use std::rc::Rc;

use common::{ContextTitlePage, CountingUrl, ctx_with_title};
use linkgate::model::WebUrl;
use linkgate::view::{
    Context, LinkModel, LinkSource, PageLink, PageSlot, StaticPage, StringLink, StringUrl, Url,
    View, resolve,
};
use pretty_assertions::assert_eq;

struct Slug(&'static str);

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/posts/{}", self.0)
    }
}

fn title_page(path: &str) -> PageSlot {
    PageSlot::new(ContextTitlePage {
        path: path.to_string(),
        fallback: "Untitled".to_string(),
    })
}

#[test]
fn test_page_slot_resolves_to_page_link() {
    let ctx = ctx_with_title("Pricing");
    let link = resolve(title_page("/pricing"), vec![]);

    assert_eq!(link.url(&ctx, &[]), "/pricing");
    assert_eq!(link.url(&ctx, &["eu"]), "/pricing/eu");
    assert_eq!(link.link_title(&ctx), "Pricing");
    assert_eq!(link.link_content(&ctx), View::text("Pricing"));
    assert_eq!(link.link_rel(&ctx), "");
}

#[test]
fn test_page_link_sees_rebound_page() {
    let ctx = Context::default();
    let slot = PageSlot::new(StaticPage::new("/v1", "Version 1"));
    let first = resolve(slot.clone(), vec![]);
    let second = resolve(slot.clone(), vec![View::text("Docs")]);

    slot.rebind(StaticPage::new("/v2", "Version 2"));

    assert_eq!(first.url(&ctx, &[]), "/v2");
    assert_eq!(first.link_title(&ctx), "Version 2");
    assert_eq!(second.url(&ctx, &[]), "/v2");
    assert_eq!(second.link_content(&ctx), View::Views(vec![View::text("Docs")]));
}

#[test]
fn test_existing_model_passes_through_unchanged() {
    let model: Rc<dyn LinkModel> = Rc::new(StringLink::new("/a").with_title("A"));
    let resolved = resolve(Rc::clone(&model), vec![]);

    assert!(Rc::ptr_eq(&model, &resolved));
}

#[test]
fn test_existing_model_with_content_is_wrapped() {
    let ctx = Context::default();
    let model: Rc<dyn LinkModel> = Rc::new(
        StringLink::new("/a")
            .with_title("A")
            .with_rel("nofollow"),
    );

    let wrapped = resolve(Rc::clone(&model), vec![View::html("<b>A</b>")]);

    assert!(!Rc::ptr_eq(&model, &wrapped));
    assert_eq!(wrapped.url(&ctx, &[]), "/a");
    assert_eq!(wrapped.link_content(&ctx), View::Views(vec![View::html("<b>A</b>")]));
    // The wrapped model's own title and rel are not consulted.
    assert_eq!(wrapped.link_title(&ctx), "/a");
    assert_eq!(wrapped.link_rel(&ctx), "");
}

#[test]
fn test_url_capable_resolves_to_url_link() {
    let ctx = Context::default();
    let link = resolve(StringUrl::new("/users/%s"), vec![]);

    assert_eq!(link.url(&ctx, &["7"]), "/users/7");
    assert_eq!(link.link_title(&ctx), "/users/%s");
}

#[test]
fn test_url_capability_wins_over_display() {
    let ctx = Context::default();
    let web: WebUrl = "https://Example.COM:443/x#frag".parse().unwrap();

    // WebUrl is both a Url and Display; the Url variant is chosen.
    let source = LinkSource::from(web);
    assert!(matches!(source, LinkSource::Url(_)));

    let link = resolve(source, vec![]);
    assert_eq!(link.url(&ctx, &[]), "https://example.com/x");
}

#[test]
fn test_display_resolves_to_string_link() {
    let ctx = Context::default();
    let link = resolve(LinkSource::display(Slug("hello")), vec![]);

    assert_eq!(link.url(&ctx, &[]), "/posts/hello");
    assert_eq!(link.link_title(&ctx), "/posts/hello");
}

#[test]
fn test_string_sources() {
    let ctx = Context::default();

    let from_str = resolve("/x", vec![]);
    let from_string = resolve(String::from("/x"), vec![]);
    let from_json = resolve(serde_json::json!("/x"), vec![]);

    for link in [from_str, from_string, from_json] {
        assert_eq!(link.url(&ctx, &[]), "/x");
        assert_eq!(link.link_content(&ctx), View::text("/x"));
    }
}

#[test]
#[should_panic(expected = "Invalid type for url")]
fn test_non_string_value_is_contract_violation() {
    resolve(serde_json::json!({ "href": "/x" }), vec![]);
}

#[test]
fn test_content_fallback_is_evaluated_lazily() {
    let link = resolve(title_page("/news"), vec![]);

    assert_eq!(link.link_content(&ctx_with_title("Monday")), View::text("Monday"));
    assert_eq!(link.link_content(&ctx_with_title("Tuesday")), View::text("Tuesday"));
    assert_eq!(link.link_content(&Context::default()), View::text("Untitled"));
}

#[test]
fn test_url_link_title_is_computed_per_call() {
    let ctx = Context::default();
    let (url, calls) = CountingUrl::new("/count");
    let link = resolve(LinkSource::url(url), vec![]);

    assert_eq!(calls.get(), 0);
    assert_eq!(link.link_content(&ctx), View::text("/count"));
    assert_eq!(link.link_content(&ctx), View::text("/count"));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_explicit_content_skips_title() {
    let ctx = Context::default();
    let (url, calls) = CountingUrl::new("/count");
    let link = resolve(LinkSource::url(url), vec![View::text("Click")]);

    assert_eq!(link.link_content(&ctx), View::Views(vec![View::text("Click")]));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_page_link_builder() {
    let ctx = ctx_with_title("ignored");
    let link = PageLink::new(title_page("/team"), "Our team")
        .with_rel("author")
        .with_content(View::html("<em>Team</em>"));

    assert_eq!(link.link_title(&ctx), "Our team");
    assert_eq!(link.link_rel(&ctx), "author");
    assert_eq!(link.link_content(&ctx), View::html("<em>Team</em>"));
}
