//! Order-checked builder for CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Fragment ordering enforced as each fragment is added
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining two rendered selectors with a combinator
//!   - Chained and nested joins
//!
//! - **Facade** - free functions that start a fresh builder for each expression
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity
//!
//! # Example
//!
//! ```
//! use selkit_builder::{combine, element};
//!
//! # fn main() -> Result<(), selkit_builder::SelectorError> {
//! let link = element("a").attr("href$=\".png\"")?.pseudo_class("focus")?.render();
//! assert_eq!(link, "a[href$=\".png\"]:focus");
//!
//! let pair = combine(element("div").id("main")?, "+", &element("span")).render();
//! assert_eq!(pair, "div#main + span");
//! # Ok(())
//! # }
//! ```

/// The [`SelectorBuilder`] and its two accumulation modes.
pub mod builder;
/// Fragment categories and their fixed rendering order.
pub mod category;
/// Combinators per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Errors raised by malformed call sequences.
pub mod error;
/// Free functions that start a fresh builder.
pub mod facade;
/// Rendered selector fragments.
pub mod fragment;

// Re-exports for convenience
pub use builder::SelectorBuilder;
pub use category::Category;
pub use combinator::Combinator;
pub use error::SelectorError;
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use fragment::SelectorFragment;
