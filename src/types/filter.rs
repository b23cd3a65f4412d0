use std::{convert::Infallible, fmt, str::FromStr};

use super::Quote;

/// Category selector for the read-only projection of the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    pub fn from_optional(value: Option<&str>) -> Self {
        match value {
            Some(v) => v.parse().unwrap_or_default(),
            None => CategoryFilter::All,
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(category) => quote.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "all" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Exact(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Exact(category) => write!(f, "{category}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuoteId;

    fn quote(category: &str) -> Quote {
        Quote {
            id: QuoteId::from("1"),
            text: "text".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn all_and_empty_select_everything() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_optional(None), CategoryFilter::All);
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let filter = CategoryFilter::from_optional(Some("Work"));
        assert!(filter.matches(&quote("Work")));
        assert!(!filter.matches(&quote("work")));
        assert!(!filter.matches(&quote("")));
    }
}
