//! Pages and the shared slot links read them through.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::view::{Context, StringUrl, Url};

/// A page entity a link can point at.
pub trait Page: Url {
    /// Title used when a link to this page has none of its own. May read
    /// request-scoped data from `ctx`.
    fn link_title(&self, ctx: &Context) -> String;
}

/// A rebindable reference to a page.
///
/// Clones share one slot: after [`PageSlot::rebind`] every clone, and every
/// [`crate::view::PageLink`] built from one, sees the new page. The slot is
/// single-threaded and does no locking; do not rebind while a link is being
/// rendered through it.
#[derive(Clone)]
pub struct PageSlot(Rc<RefCell<Rc<dyn Page>>>);

impl PageSlot {
    pub fn new(page: impl Page + 'static) -> Self {
        Self::from_rc(Rc::new(page))
    }

    pub fn from_rc(page: Rc<dyn Page>) -> Self {
        Self(Rc::new(RefCell::new(page)))
    }

    /// Swaps the page seen by every holder of this slot.
    pub fn rebind(&self, page: impl Page + 'static) {
        *self.0.borrow_mut() = Rc::new(page);
    }

    pub fn page(&self) -> Rc<dyn Page> {
        Rc::clone(&self.0.borrow())
    }

    /// True when both handles refer to the same slot.
    pub fn same_slot(&self, other: &PageSlot) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Url for PageSlot {
    fn url(&self, ctx: &Context, args: &[&str]) -> String {
        self.page().url(ctx, args)
    }
}

impl Page for PageSlot {
    fn link_title(&self, ctx: &Context) -> String {
        self.page().link_title(ctx)
    }
}

impl fmt::Debug for PageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PageSlot").finish_non_exhaustive()
    }
}

/// A page with a fixed path and title.
#[derive(Debug, Clone)]
pub struct StaticPage {
    pub path: StringUrl,
    pub title: String,
}

impl StaticPage {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: StringUrl::new(path),
            title: title.into(),
        }
    }
}

impl Url for StaticPage {
    fn url(&self, ctx: &Context, args: &[&str]) -> String {
        self.path.url(ctx, args)
    }
}

impl Page for StaticPage {
    fn link_title(&self, _ctx: &Context) -> String {
        self.title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebind_is_visible_to_clones() {
        let ctx = Context::default();
        let slot = PageSlot::new(StaticPage::new("/old", "Old"));
        let other = slot.clone();

        slot.rebind(StaticPage::new("/new", "New"));

        assert!(slot.same_slot(&other));
        assert_eq!(other.url(&ctx, &[]), "/new");
        assert_eq!(other.link_title(&ctx), "New");
    }

    #[test]
    fn test_distinct_slots() {
        let a = PageSlot::new(StaticPage::new("/", "Home"));
        let b = PageSlot::new(StaticPage::new("/", "Home"));
        assert!(!a.same_slot(&b));
    }
}
