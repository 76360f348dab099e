//! File- and batch-level settings shared by every record of one file.

use chrono::NaiveDate;

/// Identifies the sending and receiving institutions of the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileContext {
    /// Name of the originating institution
    pub immediate_origin: String,
    pub immediate_origin_routing: String,
    /// Name of the destination bank
    pub immediate_destination: String,
    pub immediate_destination_routing: String,
    pub file_reference: String,
}

/// Settlement metadata for the single batch of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchContext {
    pub company_name: String,
    pub company_id: String,
    pub originating_routing_number: String,
    /// Defaults to the generation date when unset
    pub effective_date: Option<NaiveDate>,
    pub batch_number: u32,
}

impl Default for BatchContext {
    fn default() -> Self {
        BatchContext {
            company_name: String::new(),
            company_id: String::new(),
            originating_routing_number: String::new(),
            effective_date: None,
            batch_number: 1,
        }
    }
}
