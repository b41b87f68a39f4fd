//! quaylogs-file - Filesystem persistence for downloaded registry pages.

mod layout;
mod stamp;
mod writer;

pub use layout::OutputLayout;
pub use stamp::{PageStamp, TimestampStyle};
pub use writer::{PageWriter, list_json_files};
