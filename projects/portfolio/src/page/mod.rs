pub mod document;

pub use document::{Document, PageElement, PageFileError};

use crate::selector::Selector;

/// A node on the page that can receive a repository description.
pub trait Element {
    fn tag(&self) -> &str;
    fn id(&self) -> Option<&str>;
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);

    /// The repository name this element targets. Empty ids count as absent.
    fn identifier(&self) -> Option<&str> {
        self.id().filter(|id| !id.is_empty())
    }
}

pub trait Page {
    type Element: Element;

    /// Elements matching `selector`, in document order.
    fn select_mut(&mut self, selector: &Selector) -> Vec<&mut Self::Element>;
}
