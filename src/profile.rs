//! Company profile: the originator settings for every file.
//!
//! Loaded once per invocation from a JSON document and passed explicitly to
//! the pipeline. Keys may use snake_case or the labels of the original
//! company-details form (`"Company Name"`, `"Bank Routing Number"`, ...).

use crate::context::{BatchContext, FileContext};
use crate::csv_input::Dialect;
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    #[serde(alias = "Company Name")]
    pub company_name: String,
    #[serde(alias = "Company Id")]
    pub company_id: String,
    /// Name sent as the immediate origin
    #[serde(alias = "Company Financial Services")]
    pub financial_services: String,
    #[serde(alias = "Company Routing Number")]
    pub company_routing_number: String,
    /// Destination bank, also the originating DFI of the batch
    #[serde(alias = "Bank Name")]
    pub bank_name: String,
    #[serde(alias = "Bank Routing Number")]
    pub bank_routing_number: String,
    #[serde(alias = "Accounting System")]
    pub accounting_system: Dialect,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        CompanyProfile {
            company_name: "Dummy Company".to_string(),
            company_id: "0000000000".to_string(),
            financial_services: "Dummy Financial Services".to_string(),
            company_routing_number: "000000000".to_string(),
            bank_name: "Dummy Bank".to_string(),
            bank_routing_number: "000000000".to_string(),
            accounting_system: Dialect::Xero,
        }
    }
}

impl CompanyProfile {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading company profile from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// File-level context; `reference` becomes the header reference code.
    pub fn file_context(&self, reference: &str) -> FileContext {
        FileContext {
            immediate_origin: self.financial_services.clone(),
            immediate_origin_routing: self.company_routing_number.clone(),
            immediate_destination: self.bank_name.clone(),
            immediate_destination_routing: self.bank_routing_number.clone(),
            file_reference: reference.to_string(),
        }
    }

    /// Context for the single batch of a file.
    pub fn batch_context(&self) -> BatchContext {
        BatchContext {
            company_name: self.company_name.clone(),
            company_id: self.company_id.clone(),
            originating_routing_number: self.bank_routing_number.clone(),
            ..BatchContext::default()
        }
    }
}
