use crate::{
    Result, Settings,
    error::error::{IoSnafu, MissingHeaderSnafu},
};
use golden_core::{Value, VesselOutboundPort, VesselQuery, VesselRecord};
use snafu::ResultExt;
use std::{collections::HashSet, fs::File, io::Read, path::Path, sync::Arc};
use tracing::{info, warn};

/// The golden records table, loaded once and shared read-only between workers.
#[derive(Debug, Clone, Default)]
pub struct CsvAdapter {
    records: Arc<Vec<VesselRecord>>,
}

impl CsvAdapter {
    pub fn new(settings: &Settings) -> Result<CsvAdapter> {
        let file = File::open(&settings.path).context(IoSnafu {
            path: settings.path.clone(),
        })?;

        let records = read_records(file, &settings.path)?;
        info!(
            path = %settings.path.display(),
            records = records.len(),
            "loaded golden records"
        );

        Ok(CsvAdapter::from_records(records))
    }

    pub fn from_records(records: Vec<VesselRecord>) -> CsvAdapter {
        CsvAdapter {
            records: Arc::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl VesselOutboundPort for CsvAdapter {
    fn vessels(&self, query: &VesselQuery) -> Vec<VesselRecord> {
        if query.is_unfiltered() {
            return self.records.as_ref().clone();
        }

        self.records
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect()
    }
}

fn read_records<R: Read>(reader: R, path: &Path) -> Result<Vec<VesselRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = column_names(reader.headers()?);
    if headers.is_empty() {
        return MissingHeaderSnafu { path }.fail();
    }

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() > headers.len() {
            warn!(
                row = i + 1,
                cells = row.len(),
                columns = headers.len(),
                "dropping cells beyond the header"
            );
        }

        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let value = row.get(idx).map(Value::infer).unwrap_or_default();
                (name.clone(), value)
            })
            .collect();

        records.push(VesselRecord::new(fields));
    }

    Ok(records)
}

/// Header names with repeated columns renamed `name.1`, `name.2`, ...
fn column_names(headers: &csv::StringRecord) -> Vec<String> {
    let mut seen = HashSet::with_capacity(headers.len());

    headers
        .iter()
        .map(|header| {
            let mut name = header.to_string();
            let mut suffix = 1;
            while seen.contains(&name) {
                name = format!("{header}.{suffix}");
                suffix += 1;
            }
            seen.insert(name.clone());
            name
        })
        .collect()
}
