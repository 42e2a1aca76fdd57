use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use matchers::*;
pub use providers::*;
pub use query::{parse, ParsedQuery};
pub use table::{apply, FunctionTable, DEFAULT_PAGE_SIZE};

mod matchers;
mod providers;
mod query;
mod table;

/// A type token as it appears in a signature, e.g. `int` or `number[]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_array(&self) -> bool {
        self.0.trim_end().ends_with("[]")
    }

    /// The element type of an array type, or the type itself otherwise.
    /// Only one level of `[]` is stripped.
    pub fn element(&self) -> &str {
        let token = self.0.trim_end();
        token.strip_suffix("[]").unwrap_or(token)
    }
}

impl From<&str> for TypeName {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSignature {
    pub name: String,

    /// Parameter types in declaration order.
    #[serde(default)]
    pub parameters: Vec<TypeName>,

    #[serde(alias = "return")]
    pub return_type: TypeName,
}

impl FunctionSignature {
    pub fn new<P>(name: impl Into<String>, parameters: P, return_type: impl Into<TypeName>) -> Self
        where P: IntoIterator,
              P::Item: Into<TypeName>,
    {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            return_type: return_type.into(),
        }
    }

    /// Comma separated parameter list as shown in the table.
    pub fn parameter_list(&self) -> String {
        self.parameters.iter().join(", ")
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) -> {}", self.name, self.parameter_list(), self.return_type)
    }
}

pub trait Matcher: Send {
    /// Applies the query against the list of signatures and returns the matching ones.
    /// Implementations decide the order of the result, see the individual matchers.
    fn matches<'a>(&self, query: &str, items: &'a [FunctionSignature]) -> Vec<&'a FunctionSignature>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("number[]", true, "number")]
    #[case("int", false, "int")]
    #[case("int[][]", true, "int[]")]
    #[case("string[] ", true, "string")]
    #[case("[]int", false, "[]int")]
    fn test_type_name_array_suffix(#[case] token: &str, #[case] is_array: bool, #[case] element: &str) {
        let ty = TypeName::from(token);
        check!(ty.is_array() == is_array);
        check!(ty.element() == element);
    }

    #[test]
    fn test_signature_display() {
        let add = FunctionSignature::new("add", ["int", "int"], "int");
        check!(add.to_string() == "add(int, int) -> int");

        let main = FunctionSignature::new("main", Vec::<&str>::new(), "void");
        check!(main.to_string() == "main() -> void");
    }

    #[test]
    fn test_signature_deserialize() {
        let json = r#"[
            {"name": "sum", "parameters": ["number[]"], "returnType": "number"},
            {"name": "main", "return": "void"}
        ]"#;

        let signatures: Vec<FunctionSignature> = serde_json::from_str(json).unwrap();
        check!(signatures[0] == FunctionSignature::new("sum", ["number[]"], "number"));
        check!(signatures[1].parameters.is_empty());
        check!(signatures[1].return_type.as_str() == "void");
    }
}
