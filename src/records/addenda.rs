use crate::error::Result;
use crate::field::{FieldSpec, Padding::*};
use crate::record::{FieldValues, RecordLayout};

/// Layout of the Addenda record (type 7).
pub const ADDENDA_LAYOUT: RecordLayout = RecordLayout::new(
    "Addenda",
    &[
        FieldSpec::constant("Record Type Code", 1, Right, ' ', "7"),
        FieldSpec::constant("Addenda Type Code", 2, Right, ' ', "05"),
        FieldSpec::optional("Payment Related Information", 80, Right, ' '),
        FieldSpec::required("Addenda Sequence Number", 4, Left, '0'),
        FieldSpec::required("Entry Detail Sequence Number", 7, Left, '0'),
    ],
);

/// Addenda record carrying free-form payment information for one entry.
///
/// Not emitted by the default file generator; entries are written with an
/// addenda indicator of `0`.
pub struct Addenda<'a> {
    pub payment_info: &'a str,
    pub addenda_sequence: u32,
    /// Sequence number of the entry this addenda belongs to
    pub entry_sequence: usize,
}

impl Addenda<'_> {
    pub fn build(&self) -> Result<String> {
        let values = FieldValues::new()
            .with("Payment Related Information", self.payment_info)
            .with("Addenda Sequence Number", self.addenda_sequence)
            .with("Entry Detail Sequence Number", self.entry_sequence);
        ADDENDA_LAYOUT.assemble(&values)
    }
}
