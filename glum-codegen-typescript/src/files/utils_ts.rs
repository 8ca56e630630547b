//! utils.ts: helpers every client file imports.

use std::path::{Path, PathBuf};

use puddleglum_core::GeneratedFile;

use crate::{
    ast::{Interface, InterfaceField},
    code_file::{CodeFile, RawCode},
};

pub const UTILS_FILE: &str = "utils.ts";

const TRANSFORM_TO_QUERY_STRING: &str = r#"export function transformToQueryString(params: Record<string, any>): string {
  return Object.keys(params)
    .map((key) => `${encodeURIComponent(key)}=${encodeURIComponent(params[key])}`)
    .join('&');
}"#;

/// The shared helpers file, written on every run.
pub struct UtilsTs;

impl UtilsTs {
    /// Envelope of a paginated list response.
    fn paginated_response() -> Interface {
        Interface::new("PaginatedResponse<T>")
            .field("current_page", "number")
            .field("data", "Array<T>")
            .field("first_page_url", "string")
            .field_with(InterfaceField::new("from", "number").nullable(true))
            .field("last_page", "number")
            .field("last_page_url", "string")
            .field(
                "links",
                "Array<{url: string | null, label: string, active: boolean}>",
            )
            .field_with(InterfaceField::new("next_page_url", "string").nullable(true))
            .field("path", "string")
            .field("per_page", "number")
            .field_with(InterfaceField::new("prev_page_url", "string").nullable(true))
            .field_with(InterfaceField::new("to", "number").nullable(true))
            .field("total", "number")
    }
}

impl GeneratedFile for UtilsTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(UTILS_FILE)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(RawCode::new(TRANSFORM_TO_QUERY_STRING))
            .add(Self::paginated_response())
            .render()
    }
}
