//! Entry points.
//!
//! Each function starts a fresh [`SelectorBuilder`], so none of them can
//! fail. Further fragments are added with the builder's own methods.

use crate::builder::SelectorBuilder;
use crate::category::Category;

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Element, name.into())
}

/// Start a selector with an ID selector, e.g. `#main`.
#[must_use]
pub fn id(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Id, name.into())
}

/// Start a selector with a class selector, e.g. `.container`.
#[must_use]
pub fn class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Class, name.into())
}

/// Start a selector with an attribute selector, e.g. `[href$=".png"]`.
#[must_use]
pub fn attr(spec: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Attribute, spec.into())
}

/// Start a selector with a pseudo-class, e.g. `:focus`.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoClass, name.into())
}

/// Start a selector with a pseudo-element, e.g. `::before`.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoElement, name.into())
}

/// Join two selectors with a combinator into a fresh builder.
///
/// ```
/// use selkit_builder::{Combinator, combine, element};
///
/// let list = combine(&element("ul"), Combinator::Child, &element("li"));
/// assert_eq!(list.render(), "ul > li");
/// ```
#[must_use]
pub fn combine(
    left: &SelectorBuilder,
    combinator: impl AsRef<str>,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    let mut builder = SelectorBuilder::new();
    builder.push_combined(left, combinator.as_ref(), right);
    builder
}
