//! Transport-agnostic domain logic: homework records, the status catalog,
//! notification formatting and the incremental-fetch watermark.

mod homework;
mod message;
mod status;
mod watermark;

pub use homework::{FetchResult, HomeworkRecord, StatusCode};
pub use message::MessageFormatter;
pub use status::StatusCatalog;
pub use watermark::Watermark;
