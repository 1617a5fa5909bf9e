//! Command-line build steps.
//!
//! Each argument is either a fragment (`KIND=VALUE`) or a combinator token.
//! Runs of fragments between combinators form one selector; those selectors
//! are then joined left to right.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use selkit_builder::{
    Category, Combinator, SelectorBuilder, SelectorError, attr, class, combine, element, id,
    pseudo_class, pseudo_element,
};

/// One command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `KIND=VALUE`, e.g. `class=nav` or `attr=href$=".png"`.
    Fragment(Category, String),
    /// `>`, `+`, `~`, a space, or one of the names `descendant`, `child`,
    /// `sibling`, `adjacent`.
    Combinator(Combinator),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self> {
        if let Some((kind, value)) = arg.split_once('=') {
            let category = kind
                .parse::<Category>()
                .map_err(|_| anyhow!("unknown fragment kind '{kind}'"))?;
            return Ok(Self::Fragment(category, value.to_string()));
        }
        arg.parse::<Combinator>()
            .map(Self::Combinator)
            .map_err(|_| anyhow!("expected KIND=VALUE or a combinator, got '{arg}'"))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fragment(category, value) => write!(f, "{category}={value}"),
            Self::Combinator(combinator) => write!(f, "combinator '{combinator}'"),
        }
    }
}

/// The result of running a list of steps.
#[derive(Debug)]
pub struct Plan {
    /// Each run of fragments, built on its own.
    pub segments: Vec<SelectorBuilder>,
    /// The segments joined by their combinators.
    pub selector: SelectorBuilder,
}

/// Run `steps` through the builder.
///
/// # Errors
///
/// Fails if a combinator has no selector on one side, or if the builder
/// rejects a fragment.
pub fn build(steps: &[Step]) -> Result<Plan> {
    let mut segments: Vec<SelectorBuilder> = Vec::new();
    let mut combinators: Vec<Combinator> = Vec::new();
    let mut current: Option<SelectorBuilder> = None;

    for (index, step) in steps.iter().enumerate() {
        match step {
            Step::Fragment(category, value) => match current.as_mut() {
                None => current = Some(start(*category, value)),
                Some(builder) => {
                    let _ = extend(builder, *category, value)
                        .with_context(|| format!("step {} ({step})", index + 1))?;
                }
            },
            Step::Combinator(combinator) => {
                let Some(builder) = current.take() else {
                    bail!("step {} ({step}) has no selector on its left", index + 1);
                };
                segments.push(builder);
                combinators.push(*combinator);
            }
        }
    }

    let Some(last) = current else {
        bail!("expected a selector after the last combinator");
    };
    segments.push(last);

    let mut selector = segments[0].clone();
    for (combinator, right) in combinators.iter().zip(&segments[1..]) {
        selector = combine(&selector, combinator, right);
    }

    Ok(Plan { segments, selector })
}

/// Start a segment through the matching facade function.
fn start(category: Category, value: &str) -> SelectorBuilder {
    match category {
        Category::Element => element(value),
        Category::Id => id(value),
        Category::Class => class(value),
        Category::Attribute => attr(value),
        Category::PseudoClass => pseudo_class(value),
        Category::PseudoElement => pseudo_element(value),
    }
}

fn extend<'b>(
    builder: &'b mut SelectorBuilder,
    category: Category,
    value: &str,
) -> Result<&'b mut SelectorBuilder, SelectorError> {
    match category {
        Category::Element => builder.element(value),
        Category::Id => builder.id(value),
        Category::Class => builder.class(value),
        Category::Attribute => builder.attr(value),
        Category::PseudoClass => builder.pseudo_class(value),
        Category::PseudoElement => builder.pseudo_element(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Vec<Step> {
        args.iter().map(|arg| arg.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_fragment_keeps_equals_in_value() {
        let step: Step = "attr=href$=\".png\"".parse().unwrap();
        assert_eq!(
            step,
            Step::Fragment(Category::Attribute, "href$=\".png\"".to_string())
        );
    }

    #[test]
    fn test_parse_combinators() {
        assert_eq!(">".parse::<Step>().unwrap(), Step::Combinator(Combinator::Child));
        assert_eq!(
            "descendant".parse::<Step>().unwrap(),
            Step::Combinator(Combinator::Descendant)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("colour=red".parse::<Step>().is_err());
        assert!(">>".parse::<Step>().is_err());
    }

    #[test]
    fn test_build_single_segment() {
        let plan = build(&parse(&["element=a", "attr=href", "pseudo-class=focus"])).unwrap();
        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.selector.render(), "a[href]:focus");
    }

    #[test]
    fn test_build_folds_left() {
        let plan = build(&parse(&["element=ul", ">", "element=li", "+", "class=x"])).unwrap();
        assert_eq!(plan.segments.len(), 3);
        assert_eq!(plan.selector.render(), "ul > li + .x");
    }

    #[test]
    fn test_build_reports_builder_errors() {
        let err = build(&parse(&["class=a", "id=b"])).unwrap_err();
        assert!(err.to_string().contains("step 2"));
        assert!(err.root_cause().to_string().contains("id cannot be added after class"));
    }

    #[test]
    fn test_build_rejects_dangling_combinators() {
        assert!(build(&parse(&[">", "element=a"])).is_err());
        assert!(build(&parse(&["element=a", "~"])).is_err());
    }
}
