//! Parsing of the search field into a structured signature query.
//!
//! The query language is small:
//!
//! - `main` matches on the function name
//! - `->number[]` matches on the return type
//! - `int, char->string` matches positionally on the parameter types and on the return type
//!
//! Parsing is total. Whatever the user typed so far yields some query.

use std::fmt;

use itertools::Itertools;

const ARROW: &str = "->";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Fragment matched against the function name. Only set for queries without an arrow.
    pub name_part: Option<String>,

    /// Fragments matched positionally against the parameter types.
    /// Empty means the parameters are not constrained.
    pub param_parts: Vec<String>,

    /// Fragment matched against the return type.
    pub return_part: Option<String>,
}

impl ParsedQuery {
    /// True if the query puts no constraint on any field and matches everything.
    pub fn is_empty(&self) -> bool {
        self.name_part.is_none() && self.param_parts.is_empty() && self.return_part.is_none()
    }
}

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name_part {
            return f.write_str(name);
        }

        if self.param_parts.is_empty() && self.return_part.is_none() {
            return Ok(());
        }

        write!(f, "{}{}{}", self.param_parts.iter().join(", "), ARROW, self.return_part.as_deref().unwrap_or_default())
    }
}

pub fn parse(raw: &str) -> ParsedQuery {
    let raw = raw.trim();
    if raw.is_empty() {
        return ParsedQuery::default();
    }

    // everything after the first arrow belongs to the return type, further arrows included
    let Some((left, right)) = raw.split_once(ARROW) else {
        return ParsedQuery {
            name_part: Some(raw.to_string()),
            ..Default::default()
        };
    };

    let param_parts = left
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect_vec();

    let return_part = Some(right.trim())
        .filter(|part| !part.is_empty())
        .map(String::from);

    ParsedQuery {
        name_part: None,
        param_parts,
        return_part,
    }
}
