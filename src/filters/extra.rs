//! Tag-based filtering over the `extra` field.

use super::Filter;
use crate::catalog::Product;

/// Selector for the tag filter: everything, untagged only, or a tag substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtraSelector {
    #[default]
    All,
    None,
    Tag(String),
}

impl std::str::FromStr for ExtraSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ExtraSelector::All),
            "none" => Ok(ExtraSelector::None),
            _ => Ok(ExtraSelector::Tag(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExtraSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtraSelector::All => write!(f, "all"),
            ExtraSelector::None => write!(f, "none"),
            ExtraSelector::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// Filters products by their tag string.
pub struct ExtraFilter {
    selector: ExtraSelector,
}

impl ExtraFilter {
    /// Creates a new tag filter; tag selectors match case-insensitively.
    pub fn new(selector: ExtraSelector) -> Self {
        let selector = match selector {
            ExtraSelector::Tag(tag) => ExtraSelector::Tag(tag.to_lowercase()),
            other => other,
        };
        Self { selector }
    }
}

impl Filter for ExtraFilter {
    fn matches(&self, product: &Product) -> bool {
        match &self.selector {
            ExtraSelector::All => true,
            ExtraSelector::None => !product.has_extra(),
            ExtraSelector::Tag(tag) => {
                product.extra.as_deref().is_some_and(|e| e.to_lowercase().contains(tag))
            }
        }
    }

    fn description(&self) -> String {
        match &self.selector {
            ExtraSelector::All => "Tags: any".to_string(),
            ExtraSelector::None => "Tags: none".to_string(),
            ExtraSelector::Tag(tag) => format!("Tags: contains \"{}\"", tag),
        }
    }
}
