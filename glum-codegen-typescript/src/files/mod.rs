//! TypeScript file generators.

mod api_class_ts;
mod index_ts;
mod utils_ts;

pub use api_class_ts::ApiClassTs;
pub use index_ts::IndexTs;
pub use utils_ts::{UTILS_FILE, UtilsTs};
