use crate::context::BatchContext;
use crate::error::Result;
use crate::field::{FieldSpec, Padding::*};
use crate::record::{FieldValues, RecordLayout};
use crate::transaction::{StandardEntryClass, TransactionType};
use chrono::{NaiveDate, NaiveDateTime};

/// Service class used when no representative transaction type exists.
pub const MIXED_SERVICE_CLASS: &str = "200";

/// Layout of the Batch Header record (type 5).
pub const BATCH_HEADER_LAYOUT: RecordLayout = RecordLayout::new(
    "Batch Header",
    &[
        FieldSpec::constant("Record Type Code", 1, Right, ' ', "5"),
        FieldSpec::required("Service Class Code", 3, Left, ' '),
        FieldSpec::required("Company Name", 16, Right, ' '),
        FieldSpec::optional("Company Discretionary Data", 20, Right, ' '),
        FieldSpec::required("Company Id", 10, Right, '0'),
        FieldSpec::required("Standard Entry Class Code", 3, Left, ' '),
        FieldSpec::required("Company Entry Description", 10, Right, ' '),
        FieldSpec::required("Company Descriptive Date", 6, Left, ' '),
        FieldSpec::required("Effective Entry Date", 6, Right, ' '),
        FieldSpec::constant("Settlement Date", 3, Left, ' ', ""),
        FieldSpec::constant("Originator Status Code", 1, Right, ' ', "1"),
        FieldSpec::required("Originating DFI", 8, Right, ' '),
        FieldSpec::required("Batch Number", 7, Left, '0'),
    ],
);

/// Batch Header record.
///
/// Service class, entry class and description come from one representative
/// transaction; the batch is assumed to be homogeneous.
pub struct BatchHeader<'a> {
    pub batch: &'a BatchContext,
    pub transaction_type: Option<TransactionType>,
    pub standard_entry_class: StandardEntryClass,
    pub entry_description: &'a str,
    pub created_at: NaiveDateTime,
}

impl BatchHeader<'_> {
    pub fn service_class_code(&self) -> &'static str {
        self.transaction_type
            .map(|t| t.service_class_code())
            .unwrap_or(MIXED_SERVICE_CLASS)
    }

    fn effective_date(&self) -> NaiveDate {
        self.batch
            .effective_date
            .unwrap_or_else(|| self.created_at.date())
    }

    pub fn build(&self) -> Result<String> {
        let values = FieldValues::new()
            .with("Service Class Code", self.service_class_code())
            .with("Company Name", &self.batch.company_name)
            .with("Company Id", &self.batch.company_id)
            .with("Standard Entry Class Code", self.standard_entry_class.code())
            .with("Company Entry Description", self.entry_description)
            .with("Company Descriptive Date", self.created_at.format("%y"))
            .with("Effective Entry Date", self.effective_date().format("%y%m%d"))
            .with("Originating DFI", &self.batch.originating_routing_number)
            .with("Batch Number", self.batch.batch_number);
        BATCH_HEADER_LAYOUT.assemble(&values)
    }
}
