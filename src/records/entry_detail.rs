use crate::checksum::{check_digit, dfi_prefix};
use crate::error::Result;
use crate::field::{FieldSpec, Padding::*};
use crate::record::{FieldValues, RecordLayout};
use crate::transaction::CanonicalTransaction;

/// Layout of the Entry Detail record (type 6).
pub const ENTRY_DETAIL_LAYOUT: RecordLayout = RecordLayout::new(
    "Entry Detail",
    &[
        FieldSpec::constant("Record Type Code", 1, Right, ' ', "6"),
        FieldSpec::required("Transaction Code", 2, Left, ' '),
        FieldSpec::required("Receiving DFI", 8, Left, '0'),
        FieldSpec::required("Check Digit", 1, Left, '0'),
        FieldSpec::required("Receiver Account Number", 17, Right, ' '),
        FieldSpec::required("Amount", 10, Left, '0'),
        FieldSpec::optional("Transaction Identifier", 15, Right, ' '),
        FieldSpec::required("Receiver Name", 22, Right, ' '),
        FieldSpec::constant("Discretionary Data", 2, Left, ' ', ""),
        FieldSpec::constant("Addenda Record Indicator", 1, Left, '0', "0"),
        FieldSpec::required("Originating DFI", 8, Left, '0'),
        FieldSpec::required("Entry Number", 7, Left, '0'),
    ],
);

/// Entry Detail record for one transaction.
pub struct EntryDetail<'a> {
    pub transaction: &'a CanonicalTransaction,
    pub originating_routing_number: &'a str,
    /// 1-based position of the entry within the batch
    pub sequence_number: usize,
}

impl EntryDetail<'_> {
    pub fn build(&self) -> Result<String> {
        let tx = self.transaction;
        let routing = tx.receiver_routing_number.trim();
        let check = check_digit(routing)?;

        let values = FieldValues::new()
            .with("Transaction Code", tx.transaction_type.transaction_code())
            .with("Receiving DFI", dfi_prefix(routing))
            .with("Check Digit", check)
            .with("Receiver Account Number", &tx.receiver_account_number)
            .with("Amount", tx.amount.cents()?.unsigned_abs())
            .with("Transaction Identifier", &tx.transaction_identifier)
            .with("Receiver Name", &tx.receiver_name)
            .with("Originating DFI", dfi_prefix(self.originating_routing_number))
            .with("Entry Number", self.sequence_number);
        ENTRY_DETAIL_LAYOUT.assemble(&values)
    }
}
