use crate::context::FileContext;
use crate::error::Result;
use crate::field::{FieldSpec, Padding::*};
use crate::record::{FieldValues, RecordLayout};
use chrono::NaiveDateTime;

/// Layout of the File Header record (type 1).
pub const FILE_HEADER_LAYOUT: RecordLayout = RecordLayout::new(
    "File Header",
    &[
        FieldSpec::constant("Record Type Code", 1, Right, ' ', "1"),
        FieldSpec::constant("Priority Code", 2, Left, ' ', "01"),
        FieldSpec::constant("Destination Separator", 1, Left, ' ', ""),
        FieldSpec::required("Immediate Destination", 9, Left, ' '),
        FieldSpec::constant("Origin Separator", 1, Left, ' ', ""),
        FieldSpec::required("Immediate Origin", 9, Left, ' '),
        FieldSpec::required("File Creation Date", 6, Right, ' '),
        FieldSpec::required("File Creation Time", 4, Right, ' '),
        FieldSpec::constant("File ID Modifier", 1, Right, 'A', "A"),
        FieldSpec::constant("Record Size", 3, Right, ' ', "094"),
        FieldSpec::constant("Blocking Factor", 2, Right, ' ', "10"),
        FieldSpec::constant("Format Code", 1, Right, ' ', "1"),
        FieldSpec::required("Immediate Destination Name", 23, Right, ' '),
        FieldSpec::required("Immediate Origin Name", 23, Right, ' '),
        FieldSpec::optional("Reference Code", 8, Right, ' '),
    ],
);

/// File Header record, stamped with the generation time.
pub struct FileHeader<'a> {
    pub file: &'a FileContext,
    pub created_at: NaiveDateTime,
}

impl FileHeader<'_> {
    pub fn build(&self) -> Result<String> {
        let values = FieldValues::new()
            .with("Immediate Destination", &self.file.immediate_destination_routing)
            .with("Immediate Origin", &self.file.immediate_origin_routing)
            .with("File Creation Date", self.created_at.format("%y%m%d"))
            .with("File Creation Time", self.created_at.format("%H%M"))
            .with("Immediate Destination Name", &self.file.immediate_destination)
            .with("Immediate Origin Name", &self.file.immediate_origin)
            .with("Reference Code", &self.file.file_reference);
        FILE_HEADER_LAYOUT.assemble(&values)
    }
}
