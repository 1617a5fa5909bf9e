//! Selector fragments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// The fragments of one category, as stored in a builder.
///
/// Values are kept without their CSS prefix; [`fmt::Display`] adds it.
/// List-valued categories render each entry with its own prefix and no
/// separator, so `Class(["a", "b"])` renders as `.a.b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "value", rename_all = "kebab-case")]
pub enum SelectorFragment {
    /// Type selector, rendered as `name`.
    Element(String),
    /// ID selector, rendered as `#name`.
    Id(String),
    /// Class selectors, each rendered as `.name`.
    Class(Vec<String>),
    /// Attribute selectors, each rendered as `[spec]`. The spec is not validated.
    Attribute(Vec<String>),
    /// Pseudo-classes, each rendered as `:name`.
    PseudoClass(Vec<String>),
    /// Pseudo-element, rendered as `::name`.
    PseudoElement(String),
}

impl SelectorFragment {
    /// Create a fragment holding a single value.
    #[must_use]
    pub fn new(category: Category, value: String) -> Self {
        match category {
            Category::Element => Self::Element(value),
            Category::Id => Self::Id(value),
            Category::Class => Self::Class(vec![value]),
            Category::Attribute => Self::Attribute(vec![value]),
            Category::PseudoClass => Self::PseudoClass(vec![value]),
            Category::PseudoElement => Self::PseudoElement(value),
        }
    }

    /// The category this fragment belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Element(_) => Category::Element,
            Self::Id(_) => Category::Id,
            Self::Class(_) => Category::Class,
            Self::Attribute(_) => Category::Attribute,
            Self::PseudoClass(_) => Category::PseudoClass,
            Self::PseudoElement(_) => Category::PseudoElement,
        }
    }

    /// The stored values, without prefixes, in insertion order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Element(value) | Self::Id(value) | Self::PseudoElement(value) => {
                std::slice::from_ref(value)
            }
            Self::Class(values) | Self::Attribute(values) | Self::PseudoClass(values) => values,
        }
    }

    /// Add a value. List categories append; single-valued ones are replaced.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            Self::Element(current) | Self::Id(current) | Self::PseudoElement(current) => {
                *current = value;
            }
            Self::Class(values) | Self::Attribute(values) | Self::PseudoClass(values) => {
                values.push(value);
            }
        }
    }
}

impl fmt::Display for SelectorFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(name) => f.write_str(name),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Class(names) => names.iter().try_for_each(|name| write!(f, ".{name}")),
            Self::Attribute(specs) => specs.iter().try_for_each(|spec| write!(f, "[{spec}]")),
            Self::PseudoClass(names) => names.iter().try_for_each(|name| write!(f, ":{name}")),
            Self::PseudoElement(name) => write!(f, "::{name}"),
        }
    }
}
