use crate::models::{ExecutiveEntry, ManualAlias, ReferenceDataPreprocessor, TrackedSecurity};
use crate::Error;

#[cfg(feature = "embed-bytes")]
const COMPRESSED_TRACKED_SECURITIES_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/tracked_securities.csv.gz"));

#[cfg(feature = "embed-bytes")]
const COMPRESSED_MANUAL_ALIASES_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/manual_aliases.csv.gz"));

#[cfg(feature = "embed-bytes")]
const COMPRESSED_EXECUTIVES_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/executives.csv.gz"));

/// The static configuration the extractor is built from: the tracked
/// universe, the curated alias list and the executive table.
///
/// No cross-validation happens here; that is done when the registry, alias
/// index and executive table are built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub securities: Vec<TrackedSecurity>,
    pub manual_aliases: Vec<ManualAlias>,
    pub executives: Vec<ExecutiveEntry>,
}

impl ReferenceData {
    pub fn new(
        securities: Vec<TrackedSecurity>,
        manual_aliases: Vec<ManualAlias>,
        executives: Vec<ExecutiveEntry>,
    ) -> Self {
        ReferenceData {
            securities,
            manual_aliases,
            executives,
        }
    }

    pub fn from_csv_strings(
        securities_csv: &str,
        manual_aliases_csv: &str,
        executives_csv: &str,
    ) -> Result<Self, Error> {
        Ok(ReferenceData {
            securities: ReferenceDataPreprocessor::read_tracked_securities_from_string(
                securities_csv,
            )?,
            manual_aliases: ReferenceDataPreprocessor::read_manual_aliases_from_string(
                manual_aliases_csv,
            )?,
            executives: ReferenceDataPreprocessor::read_executives_from_string(executives_csv)?,
        })
    }

    /// Decompress and parse the reference data from Gzip-encoded CSV documents.
    pub fn from_gzip_bytes(
        securities_bytes: &[u8],
        manual_aliases_bytes: &[u8],
        executives_bytes: &[u8],
    ) -> Result<Self, Error> {
        Self::from_csv_strings(
            &ReferenceDataPreprocessor::decompress_to_string(securities_bytes)?,
            &ReferenceDataPreprocessor::decompress_to_string(manual_aliases_bytes)?,
            &ReferenceDataPreprocessor::decompress_to_string(executives_bytes)?,
        )
    }

    /// The reference data compiled into the library from `data/`.
    #[cfg(feature = "embed-bytes")]
    pub fn embedded() -> Result<Self, Error> {
        Self::from_gzip_bytes(
            COMPRESSED_TRACKED_SECURITIES_BYTES,
            COMPRESSED_MANUAL_ALIASES_BYTES,
            COMPRESSED_EXECUTIVES_BYTES,
        )
    }
}
