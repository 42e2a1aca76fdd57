use crate::sigtable::{FunctionSignature, LoadError, Provider};

/// A handful of built-in signatures, shown when no files are given.
pub struct Sample;

impl Provider for Sample {
    fn title(&self) -> String {
        "sample".into()
    }

    fn load(&self) -> Result<Vec<FunctionSignature>, LoadError> {
        Ok(vec![
            FunctionSignature::new("main", Vec::<&str>::new(), "int"),
            FunctionSignature::new("add", ["int", "int"], "int"),
            FunctionSignature::new("concat", ["int", "char"], "string"),
            FunctionSignature::new("range", ["number", "number"], "number[]"),
            FunctionSignature::new("sum", ["number[]"], "number"),
            FunctionSignature::new("split", ["string", "char"], "string[]"),
            FunctionSignature::new("strlen", ["string"], "int"),
            FunctionSignature::new("isEmpty", ["string"], "bool"),
            FunctionSignature::new("toUpper", ["char"], "char"),
            FunctionSignature::new("sort", ["number[]"], "number[]"),
            FunctionSignature::new("printLine", ["string"], "void"),
            FunctionSignature::new("exit", ["int"], "void"),
        ])
    }
}
