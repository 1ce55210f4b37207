
mod error;
mod lookup;
mod table;

pub use error::LookupError as LookupError;
pub use lookup::{lookup_by_code, lookup_by_name, resolve, Query};
pub use table::{entries, ErrorEntry, ERROR_TABLE, MAX_CODE};
