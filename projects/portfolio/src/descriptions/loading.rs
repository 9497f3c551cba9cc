use crate::page::{Element, Page};
use crate::selector::Selector;

pub const LOADING_PLACEHOLDER: &str = "Getting descriptions...";

/// Marks every selected element that has an identifier with the placeholder.
/// Returns how many elements were marked.
pub fn set_loading_states<P: Page>(page: &mut P, selector: &Selector) -> usize {
    let mut marked = 0;

    for element in page.select_mut(selector) {
        if element.identifier().is_some() {
            element.set_text(LOADING_PLACEHOLDER);
            marked += 1;
        }
    }

    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Document, PageElement};
    use proptest::prelude::*;

    #[test]
    fn marks_only_elements_with_an_id() {
        let mut doc = Document::new(vec![
            PageElement::new("section", Some("foo"), "old"),
            PageElement::new("section", None, "intro"),
            PageElement::new("section", Some(""), "blank id"),
            PageElement::new("p", Some("bar"), "not selected"),
        ]);

        let marked = set_loading_states(&mut doc, &Selector::Tag("section".into()));

        assert_eq!(marked, 1);
        let texts: Vec<&str> = doc.elements.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec![LOADING_PLACEHOLDER, "intro", "blank id", "not selected"]);
    }

    proptest! {
        #[test]
        fn elements_without_id_are_never_touched(
            texts in proptest::collection::vec(".*", 0..8),
        ) {
            let mut doc = Document::new(
                texts.iter().map(|t| PageElement::new("li", None, t)).collect(),
            );
            let before = doc.clone();

            prop_assert_eq!(set_loading_states(&mut doc, &Selector::Any), 0);
            prop_assert_eq!(doc, before);
        }
    }
}
