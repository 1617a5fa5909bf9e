//! The selector builder.
//!
//! A [`SelectorBuilder`] is in one of two modes for its whole life:
//!
//! - **Compound**: a fixed record of six optional fragment slots, one per
//!   [`Category`], filled through the category methods.
//! - **Combined**: a list of already-rendered `"<left> <combinator> <right>"`
//!   strings, filled through [`SelectorBuilder::combine`].
//!
//! A fresh builder is an empty compound builder and may enter either mode.

use std::fmt;

use selkit_common::warning::warn_once;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};

use crate::category::Category;
use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::fragment::SelectorFragment;

/// Fragment slots indexed by [`Category::index`].
type Slots = [Option<SelectorFragment>; Category::COUNT];

#[derive(Debug, Clone, PartialEq, Eq)]
enum BuilderState {
    Compound(Slots),
    Combined(Vec<String>),
}

/// Accumulates one CSS selector expression and renders it on demand.
///
/// Builders are started through the free functions in [`crate::facade`]
/// and extended with chained calls. Each mutating call returns the builder
/// so calls can be chained with `?`:
///
/// ```
/// use selkit_builder::id;
///
/// # fn main() -> Result<(), selkit_builder::SelectorError> {
/// let selector = id("main").class("container")?.class("editable")?.render();
/// assert_eq!(selector, "#main.container.editable");
/// # Ok(())
/// # }
/// ```
///
/// A call that fails leaves the builder exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorBuilder {
    state: BuilderState,
}

impl SelectorBuilder {
    /// An empty builder. Callers go through the facade functions instead.
    pub(crate) fn new() -> Self {
        Self {
            state: BuilderState::Compound(Default::default()),
        }
    }

    /// A builder holding a single fragment.
    pub(crate) fn starting_with(category: Category, value: String) -> Self {
        let mut builder = Self::new();
        let result = builder.insert(category, value).map(|_| ());
        debug_assert!(result.is_ok(), "first fragment cannot conflict: {result:?}");
        builder
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Set the element name. Must come first.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an element is already set,
    /// [`SelectorError::Order`] if any other fragment is already present.
    pub fn element(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.insert(Category::Element, name.into())
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Set the ID, rendered as `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an ID is already set,
    /// [`SelectorError::Order`] if a class, attribute, pseudo-class or
    /// pseudo-element is already present.
    pub fn id(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.insert(Category::Id, name.into())
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class, rendered as `.name`. Any number of classes may be added.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute, pseudo-class or
    /// pseudo-element is already present.
    pub fn class(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.insert(Category::Class, name.into())
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append an attribute condition, rendered as `[spec]`. The spec is
    /// written verbatim, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is
    /// already present.
    pub fn attr(&mut self, spec: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.insert(Category::Attribute, spec.into())
    }

    /// Append a pseudo-class, rendered as `:name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-element is already present.
    pub fn pseudo_class(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.insert(Category::PseudoClass, name.into())
    }

    /// Set the pseudo-element, rendered as `::name`. Always renders last.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already set.
    pub fn pseudo_element(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.insert(Category::PseudoElement, name.into())
    }

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    ///
    /// Render `left` and `right` now and append `"<left> <combinator> <right>"`
    /// to this builder. Repeated calls concatenate with no separator.
    ///
    /// The combinator is written verbatim. Anything other than the four
    /// [`Combinator`] symbols is accepted with a warning.
    ///
    /// # Errors
    ///
    /// [`SelectorError::CombineAfterFragment`] if this builder already holds
    /// fragments.
    pub fn combine(
        &mut self,
        left: &Self,
        combinator: impl AsRef<str>,
        right: &Self,
    ) -> Result<&mut Self, SelectorError> {
        if let Some(fragment) = self.fragments().next() {
            return Err(SelectorError::CombineAfterFragment {
                category: fragment.category(),
            });
        }
        self.push_combined(left, combinator.as_ref(), right);
        Ok(self)
    }

    /// Render the selector.
    ///
    /// Combined entries, if any, are concatenated in insertion order.
    /// Otherwise the present fragments are written in category order.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The fragment stored for `category`, if any.
    #[must_use]
    pub fn fragment(&self, category: Category) -> Option<&SelectorFragment> {
        match &self.state {
            BuilderState::Compound(slots) => slots[category.index()].as_ref(),
            BuilderState::Combined(_) => None,
        }
    }

    /// Present fragments in rendering order. Empty once combined.
    pub fn fragments(&self) -> impl Iterator<Item = &SelectorFragment> {
        let slots: &[Option<SelectorFragment>] = match &self.state {
            BuilderState::Compound(slots) => slots,
            BuilderState::Combined(_) => &[],
        };
        slots.iter().flatten()
    }

    /// The combined entries, in insertion order. Empty in compound mode.
    #[must_use]
    pub fn combined(&self) -> &[String] {
        match &self.state {
            BuilderState::Compound(_) => &[],
            BuilderState::Combined(entries) => entries,
        }
    }

    /// Whether [`combine`](Self::combine) has been used on this builder.
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        matches!(self.state, BuilderState::Combined(_))
    }

    /// Whether nothing has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.state {
            BuilderState::Compound(slots) => slots.iter().all(Option::is_none),
            BuilderState::Combined(entries) => entries.is_empty(),
        }
    }

    /// Join two rendered builders into this one without checking its mode.
    ///
    /// Only called on builders known to hold no fragments.
    pub(crate) fn push_combined(&mut self, left: &Self, combinator: &str, right: &Self) {
        if Combinator::from_symbol(combinator).is_none() {
            warn_once(
                "Builder",
                &format!("combinator {combinator:?} is not one of \" \", \">\", \"~\", \"+\""),
            );
        }

        let joined = format!("{left} {combinator} {right}");

        #[cfg(feature = "build-trace")]
        eprintln!("[selkit trace] combine -> {joined:?}");

        match &mut self.state {
            BuilderState::Combined(entries) => entries.push(joined),
            state @ BuilderState::Compound(_) => *state = BuilderState::Combined(vec![joined]),
        }
    }

    /// Check `category` against the current state and store `value`.
    ///
    /// Duplicates are checked before ordering, so setting the element twice
    /// reports [`SelectorError::Duplicate`] even when later fragments exist.
    fn insert(&mut self, category: Category, value: String) -> Result<&mut Self, SelectorError> {
        let BuilderState::Compound(slots) = &mut self.state else {
            return Err(SelectorError::FragmentAfterCombine { category });
        };

        if category.is_unique() && slots[category.index()].is_some() {
            return Err(SelectorError::Duplicate { category });
        }

        // Any occupied slot after this one means the call is out of order.
        if let Some(conflicting) = Category::iter()
            .skip(category.index() + 1)
            .find(|later| slots[later.index()].is_some())
        {
            return Err(SelectorError::Order {
                category,
                conflicting,
            });
        }

        if value.is_empty() {
            warn_once("Builder", &format!("empty {category} value"));
        }

        #[cfg(feature = "build-trace")]
        eprintln!("[selkit trace] {category} <- {value:?}");

        match &mut slots[category.index()] {
            Some(fragment) => fragment.push(value),
            slot @ None => *slot = Some(SelectorFragment::new(category, value)),
        }
        Ok(self)
    }

    /// Rebuild a builder from its serialized form, replaying each fragment
    /// through the same checks as the category methods.
    fn from_repr(repr: BuilderRepr) -> Result<Self, SelectorError> {
        let mut builder = Self::new();
        match repr {
            BuilderRepr::Compound(fragments) => {
                for fragment in fragments {
                    let category = fragment.category();
                    for value in fragment.values() {
                        let _ = builder.insert(category, value.clone())?;
                    }
                }
            }
            // No entries means nothing was combined; stay an empty builder.
            BuilderRepr::Combined(entries) if entries.is_empty() => {}
            BuilderRepr::Combined(entries) => {
                builder.state = BuilderState::Combined(entries);
            }
        }
        Ok(builder)
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            BuilderState::Combined(entries) => entries.iter().try_for_each(|entry| f.write_str(entry)),
            BuilderState::Compound(slots) => slots
                .iter()
                .flatten()
                .try_for_each(|fragment| write!(f, "{fragment}")),
        }
    }
}

/// Serialized form: present fragments as a list, or the combined entries.
#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum BuilderReprRef<'a> {
    Compound(Vec<&'a SelectorFragment>),
    Combined(&'a [String]),
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum BuilderRepr {
    Compound(Vec<SelectorFragment>),
    Combined(Vec<String>),
}

impl Serialize for SelectorBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match &self.state {
            BuilderState::Compound(_) => BuilderReprRef::Compound(self.fragments().collect()),
            BuilderState::Combined(entries) => BuilderReprRef::Combined(entries),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SelectorBuilder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = BuilderRepr::deserialize(deserializer)?;
        Self::from_repr(repr).map_err(D::Error::custom)
    }
}
