use puddleglum_codegen::builder::{CodeFragment, Renderable};

/// The notice at the top of every generated file.
#[derive(Debug, Clone, Copy)]
pub struct Banner;

impl Renderable for Banner {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        [
            "/**",
            " * This file is auto generated by Puddleglum.",
            " *",
            " * Changes to this file will be lost when it is generated again.",
            " */",
        ]
        .into_iter()
        .map(CodeFragment::line)
        .collect()
    }
}
