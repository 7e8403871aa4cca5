use crate::models::{AliasKind, ExecutiveEntry, ManualAlias, TrackedSecurity};
use crate::Error;
use csv::{ReaderBuilder, StringRecord, Trim};
use flate2::read::GzDecoder;
use std::io::Cursor;
use std::io::Read;

pub struct ReferenceDataPreprocessor {}

impl ReferenceDataPreprocessor {
    /// Parses `Symbol,Company Name,Indices` rows. `Indices` is `;`-separated.
    pub fn read_tracked_securities_from_string(csv: &str) -> Result<Vec<TrackedSecurity>, Error> {
        let mut reader = Self::reader(csv);
        let headers = reader.headers()?.clone();

        let symbol_idx = Self::column_index(&headers, "Symbol")?;
        let company_name_idx = Self::column_index(&headers, "Company Name")?;
        let indices_idx = Self::column_index(&headers, "Indices")?;

        let mut securities = Vec::new();

        for record in reader.records() {
            let record = record?;

            let symbol = Self::field(&record, symbol_idx, "Symbol")?;
            let company_name = Self::field(&record, company_name_idx, "Company Name")?;
            let indices = record
                .get(indices_idx)
                .unwrap_or_default()
                .split(';')
                .map(str::trim)
                .filter(|index_name| !index_name.is_empty());

            securities.push(TrackedSecurity::new(symbol, company_name, indices));
        }

        Ok(securities)
    }

    /// Parses `Symbol,Alias,Kind` rows.
    pub fn read_manual_aliases_from_string(csv: &str) -> Result<Vec<ManualAlias>, Error> {
        let mut reader = Self::reader(csv);
        let headers = reader.headers()?.clone();

        let symbol_idx = Self::column_index(&headers, "Symbol")?;
        let alias_idx = Self::column_index(&headers, "Alias")?;
        let kind_idx = Self::column_index(&headers, "Kind")?;

        let mut aliases = Vec::new();

        for record in reader.records() {
            let record = record?;

            let symbol = Self::field(&record, symbol_idx, "Symbol")?;
            let alias = Self::field(&record, alias_idx, "Alias")?;
            let kind: AliasKind = Self::field(&record, kind_idx, "Kind")?.parse()?;

            aliases.push(ManualAlias::new(symbol, alias, kind));
        }

        Ok(aliases)
    }

    /// Parses `Name,Symbol` rows.
    pub fn read_executives_from_string(csv: &str) -> Result<Vec<ExecutiveEntry>, Error> {
        let mut reader = Self::reader(csv);
        let headers = reader.headers()?.clone();

        let name_idx = Self::column_index(&headers, "Name")?;
        let symbol_idx = Self::column_index(&headers, "Symbol")?;

        let mut executives = Vec::new();

        for record in reader.records() {
            let record = record?;

            let name = Self::field(&record, name_idx, "Name")?;
            let symbol = Self::field(&record, symbol_idx, "Symbol")?;

            executives.push(ExecutiveEntry::new(name, symbol));
        }

        Ok(executives)
    }

    /// Decompresses a Gzip-encoded UTF-8 document.
    pub fn decompress_to_string(read_bytes: &[u8]) -> Result<String, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Ok(decompressed_data)
    }

    fn reader(csv: &str) -> csv::Reader<Cursor<&str>> {
        // Use a cursor to simulate a file reader from the string
        ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(Cursor::new(csv))
    }

    fn column_index(headers: &StringRecord, column_name: &str) -> Result<usize, Error> {
        headers
            .iter()
            .position(|header| header == column_name)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", column_name)))
    }

    fn field<'r>(
        record: &'r StringRecord,
        column_idx: usize,
        column_name: &str,
    ) -> Result<&'r str, Error> {
        match record.get(column_idx) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::ParserError(format!(
                "Missing '{}' field on line {}",
                column_name,
                record.position().map_or(0, |position| position.line())
            ))),
        }
    }
}
