//! TypeScript API client generator for Puddleglum.
//!
//! Turns a finished [`CompilationContext`](puddleglum_codegen::pipeline::CompilationContext)
//! into TypeScript sources:
//!
//! - `utils.ts` - `transformToQueryString` and the `PaginatedResponse<T>` envelope
//! - `index.ts` - one `export namespace` block per output namespace, holding
//!   model and request interfaces
//! - `api/<path>/<Controller>.ts` - a client class per controller with routes
//!
//! ```ignore
//! use puddleglum_codegen::language::LanguageCodegen;
//! use puddleglum_codegen_typescript::Generator;
//!
//! let generator = Generator::from_context(&context);
//! let files = generator.preview();
//! generator.generate(&context.config.output)?;
//! ```

mod assembler;
mod code_file;
mod fragment;
mod generator;
mod type_mapper;

pub mod ast;
pub mod files;
pub mod generators;

pub use assembler::{ApiFile, Assembly};
pub use code_file::{CodeFile, RawCode};
pub use fragment::{API_DIR, FragmentBody, GeneratedFragment, INDEX_FILE};
pub use generator::Generator;
pub use puddleglum_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::{RuleType, ShapeTranslator, accessor_type, column_type};
