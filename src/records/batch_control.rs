use crate::checksum::{dfi_prefix, AggregateTotals};
use crate::context::BatchContext;
use crate::error::Result;
use crate::field::{FieldSpec, Padding::*};
use crate::record::{FieldValues, RecordLayout};

/// Layout of the Batch Control record (type 8).
pub const BATCH_CONTROL_LAYOUT: RecordLayout = RecordLayout::new(
    "Batch Control",
    &[
        FieldSpec::constant("Record Type Code", 1, Right, ' ', "8"),
        FieldSpec::constant("Service Class Code", 3, Left, ' ', "200"),
        FieldSpec::required("Entry/Addenda Count", 6, Left, '0'),
        FieldSpec::required("Entry Hash", 10, Left, '0'),
        FieldSpec::required("Total Debit Entry Dollar Amount", 12, Left, '0'),
        FieldSpec::required("Total Credit Entry Dollar Amount", 12, Left, '0'),
        FieldSpec::required("Company ID", 10, Left, ' '),
        FieldSpec::constant("Message Authentication Code", 19, Right, ' ', ""),
        FieldSpec::constant("Reserved", 6, Left, ' ', ""),
        FieldSpec::required("Originating DFI Identification", 8, Left, '0'),
        FieldSpec::required("Batch Number", 7, Left, '0'),
    ],
);

/// Batch Control record closing the batch.
pub struct BatchControl<'a> {
    pub batch: &'a BatchContext,
    pub totals: &'a AggregateTotals,
}

impl BatchControl<'_> {
    pub fn build(&self) -> Result<String> {
        let values = FieldValues::new()
            .with("Entry/Addenda Count", self.totals.entry_count)
            .with("Entry Hash", &self.totals.entry_hash)
            .with("Total Debit Entry Dollar Amount", self.totals.total_debit_cents)
            .with("Total Credit Entry Dollar Amount", self.totals.total_credit_cents)
            .with("Company ID", &self.batch.company_id)
            .with(
                "Originating DFI Identification",
                dfi_prefix(&self.batch.originating_routing_number),
            )
            .with("Batch Number", self.batch.batch_number);
        BATCH_CONTROL_LAYOUT.assemble(&values)
    }
}
