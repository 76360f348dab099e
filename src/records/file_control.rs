use crate::checksum::AggregateTotals;
use crate::error::Result;
use crate::field::{FieldSpec, Padding::*};
use crate::record::{FieldValues, RecordLayout};

/// Layout of the File Control record (type 9).
///
/// Batch and block counts are fixed at one: a file carries a single batch.
pub const FILE_CONTROL_LAYOUT: RecordLayout = RecordLayout::new(
    "File Control",
    &[
        FieldSpec::constant("Record Type Code", 1, Right, ' ', "9"),
        FieldSpec::constant("Batch Count", 6, Left, '0', "1"),
        FieldSpec::constant("Block Count", 6, Left, '0', "1"),
        FieldSpec::required("Entry/Addenda Count", 8, Left, '0'),
        FieldSpec::required("Entry Hash", 10, Left, '0'),
        FieldSpec::required("Total Debit Entry Dollar Amount", 12, Left, '0'),
        FieldSpec::required("Total Credit Entry Dollar Amount", 12, Left, '0'),
        FieldSpec::constant("Reserved", 39, Right, ' ', ""),
    ],
);

/// File Control record closing the file.
pub struct FileControl<'a> {
    pub totals: &'a AggregateTotals,
}

impl FileControl<'_> {
    pub fn build(&self) -> Result<String> {
        let values = FieldValues::new()
            .with("Entry/Addenda Count", self.totals.entry_count)
            .with("Entry Hash", &self.totals.entry_hash)
            .with("Total Debit Entry Dollar Amount", self.totals.total_debit_cents)
            .with("Total Credit Entry Dollar Amount", self.totals.total_credit_cents);
        FILE_CONTROL_LAYOUT.assemble(&values)
    }
}
