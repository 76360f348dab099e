//! ACH file assembly.
//!
//! Orchestrates the record builders for a single-batch file: header records,
//! one entry per transaction in input order, control records computed from
//! the aggregate totals, then block padding to a multiple of ten lines.

use crate::checksum::{AggregateTotals, BucketStrategy};
use crate::context::{BatchContext, FileContext};
use crate::error::Result;
use crate::record::RECORD_SIZE;
use crate::records::{BatchControl, BatchHeader, EntryDetail, FileControl, FileHeader};
use crate::transaction::{CanonicalTransaction, DEFAULT_ENTRY_DESCRIPTION};
use chrono::{Local, NaiveDateTime};
use log::debug;

/// Line terminator required by the network.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Records per block.
pub const BLOCKING_FACTOR: usize = 10;

/// The ACH file generator.
///
/// Holds the caller's file and batch settings; every call to
/// [`generate`](Self::generate) recomputes timestamps and totals from scratch,
/// so one generator can be reused or shared across threads.
#[derive(Debug, Clone)]
pub struct AchFileGenerator {
    file: FileContext,
    batch: BatchContext,
    bucketing: BucketStrategy,
}

impl AchFileGenerator {
    /// Creates a generator that buckets totals by transaction type.
    pub fn new(file: FileContext, batch: BatchContext) -> Self {
        AchFileGenerator {
            file,
            batch,
            bucketing: BucketStrategy::default(),
        }
    }

    /// Selects how entries are split into debit and credit totals.
    pub fn with_bucketing(mut self, bucketing: BucketStrategy) -> Self {
        self.bucketing = bucketing;
        self
    }

    /// Generates the file text stamped with the current local time.
    pub fn generate(&self, transactions: &[CanonicalTransaction]) -> Result<String> {
        self.generate_at(transactions, Local::now().naive_local())
    }

    /// Generates the file text stamped with `now`.
    ///
    /// Any builder error aborts the whole call; no partial file is returned.
    pub fn generate_at(
        &self,
        transactions: &[CanonicalTransaction],
        now: NaiveDateTime,
    ) -> Result<String> {
        let mut lines = Vec::with_capacity(transactions.len() + 4 + BLOCKING_FACTOR);

        lines.push(
            FileHeader {
                file: &self.file,
                created_at: now,
            }
            .build()?,
        );

        // Batch metadata comes from the first row; batches are homogeneous.
        let first = transactions.first();
        lines.push(
            BatchHeader {
                batch: &self.batch,
                transaction_type: first.map(|tx| tx.transaction_type),
                standard_entry_class: first
                    .map(|tx| tx.standard_entry_class)
                    .unwrap_or_default(),
                entry_description: first
                    .map(|tx| tx.entry_description.as_str())
                    .unwrap_or(DEFAULT_ENTRY_DESCRIPTION),
                created_at: now,
            }
            .build()?,
        );

        for (idx, tx) in transactions.iter().enumerate() {
            lines.push(
                EntryDetail {
                    transaction: tx,
                    originating_routing_number: &self.batch.originating_routing_number,
                    sequence_number: idx + 1,
                }
                .build()?,
            );
        }

        let totals = AggregateTotals::compute(transactions, self.bucketing)?;
        debug!(
            "Batch {}: {} entries, hash {}, debit {} cents, credit {} cents",
            self.batch.batch_number,
            totals.entry_count,
            totals.entry_hash,
            totals.total_debit_cents,
            totals.total_credit_cents
        );

        lines.push(
            BatchControl {
                batch: &self.batch,
                totals: &totals,
            }
            .build()?,
        );
        lines.push(FileControl { totals: &totals }.build()?);

        pad_to_block(&mut lines);
        Ok(lines.join(LINE_TERMINATOR))
    }
}

/// Appends lines of 94 nines until the line count is a multiple of ten.
pub fn pad_to_block(lines: &mut Vec<String>) {
    let missing = (BLOCKING_FACTOR - lines.len() % BLOCKING_FACTOR) % BLOCKING_FACTOR;
    if missing > 0 {
        debug!("Padding file with {} filler lines", missing);
        let filler = "9".repeat(RECORD_SIZE);
        lines.extend(std::iter::repeat(filler).take(missing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use crate::error::AchError;
    use crate::transaction::{StandardEntryClass, TransactionType};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn generator() -> AchFileGenerator {
        AchFileGenerator::new(
            FileContext {
                immediate_origin: "Dummy Financial Services".to_string(),
                immediate_origin_routing: "000000000".to_string(),
                immediate_destination: "Dummy Bank".to_string(),
                immediate_destination_routing: "240909240".to_string(),
                file_reference: "REF".to_string(),
            },
            BatchContext {
                company_name: "Dummy Company".to_string(),
                company_id: "0000000000".to_string(),
                originating_routing_number: "240909240".to_string(),
                effective_date: None,
                batch_number: 1,
            },
        )
    }

    fn tx(routing: &str, amount: &str, kind: TransactionType) -> CanonicalTransaction {
        CanonicalTransaction {
            receiver_name: "Receiver".to_string(),
            receiver_account_number: "12345".to_string(),
            receiver_routing_number: routing.to_string(),
            transaction_type: kind,
            amount: Amount::from_str(amount).unwrap(),
            standard_entry_class: StandardEntryClass::Ccd,
            entry_description: "PAYROLL".to_string(),
            ..CanonicalTransaction::default()
        }
    }

    #[test]
    fn test_record_order_and_padding() {
        let txs = vec![
            tx("123456789", "35.21", TransactionType::Credit),
            tx("24090924", "100", TransactionType::Debit),
        ];
        let file = generator().generate_at(&txs, now()).unwrap();
        let lines: Vec<&str> = file.split(LINE_TERMINATOR).collect();

        assert_eq!(lines.len(), 10);
        let types: String = lines.iter().map(|l| &l[0..1]).collect();
        assert_eq!(types, "1566899999");
        assert!(lines.iter().all(|l| l.len() == RECORD_SIZE));
        assert_eq!(lines[6], "9".repeat(94));
        assert!(!file.ends_with(LINE_TERMINATOR));
    }

    #[test]
    fn test_batch_header_uses_first_transaction() {
        let txs = vec![
            tx("123456789", "1", TransactionType::Credit),
            tx("123456789", "1", TransactionType::Debit),
        ];
        let file = generator().generate_at(&txs, now()).unwrap();
        let batch_header = file.split(LINE_TERMINATOR).nth(1).unwrap();
        assert_eq!(&batch_header[1..4], "220");
        assert_eq!(&batch_header[50..53], "CCD");
        assert_eq!(&batch_header[53..63], "PAYROLL   ");
    }

    #[test]
    fn test_sequence_numbers_follow_input_order() {
        let txs: Vec<_> = (0..3)
            .map(|_| tx("123456789", "1", TransactionType::Credit))
            .collect();
        let file = generator().generate_at(&txs, now()).unwrap();
        let seqs: Vec<&str> = file
            .split(LINE_TERMINATOR)
            .filter(|l| l.starts_with('6'))
            .map(|l| &l[87..94])
            .collect();
        assert_eq!(seqs, ["0000001", "0000002", "0000003"]);
    }

    #[test]
    fn test_control_totals() {
        let txs = vec![
            tx("123456789", "35.21", TransactionType::Credit),
            tx("24090924", "100", TransactionType::Debit),
        ];
        let file = generator().generate_at(&txs, now()).unwrap();
        let lines: Vec<&str> = file.split(LINE_TERMINATOR).collect();

        let batch_control = lines[4];
        assert_eq!(&batch_control[4..10], "000002");
        assert_eq!(&batch_control[10..20], "0036436602");
        assert_eq!(&batch_control[20..32], "000000010000");
        assert_eq!(&batch_control[32..44], "000000003521");

        let file_control = lines[5];
        assert_eq!(&file_control[13..21], "00000002");
        assert_eq!(&file_control[21..31], "0036436602");
    }

    #[test]
    fn test_amount_sign_bucketing() {
        let txs = vec![tx("123456789", "-5", TransactionType::Credit)];
        let file = generator()
            .with_bucketing(BucketStrategy::AmountSign)
            .generate_at(&txs, now())
            .unwrap();
        let batch_control = file.split(LINE_TERMINATOR).nth(3).unwrap();
        assert_eq!(&batch_control[20..32], "000000000500");
        assert_eq!(&batch_control[32..44], "000000000000");
    }

    #[test]
    fn test_empty_transaction_list() {
        let file = generator().generate_at(&[], now()).unwrap();
        let lines: Vec<&str> = file.split(LINE_TERMINATOR).collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(&lines[1][1..4], "200");
        assert_eq!(&lines[2][4..20], "0000000000000000");
        assert_eq!(&lines[3][13..31], "000000000000000000");
    }

    #[test]
    fn test_error_aborts_generation() {
        let mut bad = tx("123456789", "1", TransactionType::Credit);
        bad.receiver_name.clear();
        let txs = vec![tx("123456789", "1", TransactionType::Credit), bad];
        match generator().generate_at(&txs, now()) {
            Err(AchError::MissingMandatoryField(name)) => assert_eq!(name, "Receiver Name"),
            other => panic!("Expected MissingMandatoryField, got {:?}", other),
        }
    }

    #[test]
    fn test_pad_to_block() {
        let mut lines = vec!["x".to_string(); 10];
        pad_to_block(&mut lines);
        assert_eq!(lines.len(), 10);

        let mut lines = vec!["x".to_string(); 11];
        pad_to_block(&mut lines);
        assert_eq!(lines.len(), 20);
    }
}
