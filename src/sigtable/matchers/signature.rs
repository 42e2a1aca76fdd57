use crate::sigtable::{apply, FunctionSignature, Matcher, ParsedQuery};

/// Matches signatures against the `params->return` query language.
/// Keeps the original order of the items.
pub struct SignatureMatcher;

impl Matcher for SignatureMatcher {
    fn matches<'a>(&self, query: &str, items: &'a [FunctionSignature]) -> Vec<&'a FunctionSignature> {
        apply(items, query)
    }
}

/// Checks a single signature against a parsed query.
/// Every constrained field must match, fragments are compared case-insensitive.
pub fn matches(query: &ParsedQuery, sig: &FunctionSignature) -> bool {
    if query.is_empty() {
        return true;
    }

    matches_lowercase(&query.lowercase(), sig)
}

fn matches_lowercase(query: &ParsedQuery, sig: &FunctionSignature) -> bool {
    if let Some(name) = &query.name_part {
        if !contains(&sig.name, name) {
            return false;
        }
    }

    if !query.param_parts.is_empty() {
        if query.param_parts.len() != sig.parameters.len() {
            return false;
        }

        let params_match = query.param_parts.iter()
            .zip(&sig.parameters)
            .all(|(part, param)| contains(param.as_str(), part));

        if !params_match {
            return false;
        }
    }

    match &query.return_part {
        Some(ret) => contains(sig.return_type.as_str(), ret),
        None => true,
    }
}

/// `needle` must already be folded with [`fold_case`].
fn contains(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(needle)
}

/// Lowercases one char at a time. Unlike `str::to_lowercase` this ignores the
/// context of a char, so a substring folds to a substring of the folded whole
/// (`Σ` always becomes `σ`, never the final `ς`).
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

impl ParsedQuery {
    fn lowercase(&self) -> ParsedQuery {
        ParsedQuery {
            name_part: self.name_part.as_deref().map(fold_case),
            param_parts: self.param_parts.iter().map(|part| fold_case(part)).collect(),
            return_part: self.return_part.as_deref().map(fold_case),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sigtable::parse;
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn records() -> Vec<FunctionSignature> {
        vec![
            FunctionSignature::new("add", ["int", "int"], "int"),
            FunctionSignature::new("main", Vec::<&str>::new(), "void"),
            FunctionSignature::new("concat", ["int", "char"], "string"),
            FunctionSignature::new("range", ["number", "number"], "number[]"),
            FunctionSignature::new("swapped", ["char", "int"], "String"),
            FunctionSignature::new("mainLoop", ["Event[]"], "void"),
        ]
    }

    fn names<'a>(matched: &[&'a FunctionSignature]) -> Vec<&'a str> {
        matched.iter().map(|sig| sig.name.as_str()).collect()
    }

    #[rstest]
    #[case("", &["add", "main", "concat", "range", "swapped", "mainLoop"])]
    #[case("main", &["main", "mainLoop"])]
    #[case("MAIN", &["main", "mainLoop"])]
    #[case("->int", &["add"])]
    #[case("->number[]", &["range"])]
    #[case("->number", &["range"])]
    #[case("->void", &["main", "mainLoop"])]
    #[case("int, char->string", &["concat"])]
    #[case("INT,CHAR->STRING", &["concat"])]
    #[case("char, int->", &["swapped"])]
    #[case("int->", &[])]
    #[case("event[]->", &["mainLoop"])]
    #[case("number->", &[])]
    #[case("in, in->in", &["add"])]
    #[case("string", &[])] // no arrow, so only the name is searched
    #[case("nothing", &[])]
    fn test_matcher(records: Vec<FunctionSignature>, #[case] query: &str, #[case] expected: &[&str]) {
        let matched = SignatureMatcher.matches(query, &records);
        check!(names(&matched) == expected);
    }

    #[rstest]
    fn test_every_name_substring_matches(records: Vec<FunctionSignature>) {
        let greek = vec![
            FunctionSignature::new("ΟΣΑ", Vec::<&str>::new(), "void"),
            FunctionSignature::new("ΟΣ", Vec::<&str>::new(), "void"),
        ];

        for sig in records.iter().chain(&greek) {
            let chars: Vec<char> = sig.name.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let fragment: String = chars[start..end].iter().collect();
                    check!(matches(&parse(&fragment), sig));
                    check!(matches(&parse(&fragment.to_uppercase()), sig));
                }
            }
        }
    }

    #[rstest]
    fn test_array_suffix_required(records: Vec<FunctionSignature>) {
        let add = &records[0];
        let range = &records[3];

        check!(!matches(&parse("->int[]"), add));
        check!(matches(&parse("->number[]"), range));
        check!(matches(&parse("->]"), range));
    }

    #[rstest]
    #[case("Σ", "ΟΣ")]
    #[case("ΟΣ", "ΟΣΑ")]
    #[case("οσ", "ΟΣΑ")]
    #[case("->ΟΣ", "ΟΣ")]
    fn test_sigma_folds_the_same_everywhere(#[case] query: &str, #[case] token: &str) {
        let sig = FunctionSignature::new(token, [token], token);
        check!(matches(&parse(query), &sig));
    }

    #[test]
    fn test_parameter_count_must_match() {
        let sig = FunctionSignature::new("f", ["int", "int", "int"], "int");
        check!(!matches(&parse("int->"), &sig));
        check!(!matches(&parse("int, int->"), &sig));
        check!(matches(&parse("int, int, int->"), &sig));

        // an empty left side leaves the parameters unconstrained
        check!(matches(&parse("->int"), &sig));
    }

    #[test]
    fn test_all_fields_unset_matches_everything() {
        let sig = FunctionSignature::new("", Vec::<&str>::new(), "");
        check!(matches(&ParsedQuery::default(), &sig));
    }
}
