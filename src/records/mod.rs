//! Builders for the six ACH record types.
//!
//! Each builder owns one [`RecordLayout`](crate::record::RecordLayout) and
//! supplies the derived values for its variable fields.

mod addenda;
mod batch_control;
mod batch_header;
mod entry_detail;
mod file_control;
mod file_header;

pub use addenda::{Addenda, ADDENDA_LAYOUT};
pub use batch_control::{BatchControl, BATCH_CONTROL_LAYOUT};
pub use batch_header::{BatchHeader, BATCH_HEADER_LAYOUT};
pub use entry_detail::{EntryDetail, ENTRY_DETAIL_LAYOUT};
pub use file_control::{FileControl, FILE_CONTROL_LAYOUT};
pub use file_header::{FileHeader, FILE_HEADER_LAYOUT};
