use csv_store::{CsvAdapter, Settings};
use std::{io::Write, sync::Once};
use tempfile::NamedTempFile;
use tracing_subscriber::FmtSubscriber;

static TRACING: Once = Once::new();

pub const GOLDEN_RECORDS: &str = "\
imo,mmsi,name,callsign,flag,length,last_position_latitude,last_position_longitude
1234567,[111111111],\"['OCEAN QUEEN']\",\"['LK28']\",NOR,55.5,10.5,20.5
7654321,\"[987654321, 257000000]\",\"['SEA STAR', 'STAR OF THE SEA']\",,NOR,,,
9000001,,\"['NORTHERN LIGHT']\",\"['LM12']\",,120,nan,NaN
4123000,[4123],\"['NORDSTAR']\",\"['XY99']\",DNK,30,58.1,
";

pub struct TestFile {
    pub file: NamedTempFile,
}

impl TestFile {
    pub fn new(contents: &str) -> TestFile {
        TRACING.call_once(|| {
            tracing::subscriber::set_global_default(
                FmtSubscriber::builder()
                    .with_max_level(tracing::Level::DEBUG)
                    .finish(),
            )
            .unwrap();
        });

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();

        TestFile { file }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            path: self.file.path().to_path_buf(),
        }
    }

    pub fn adapter(&self) -> CsvAdapter {
        CsvAdapter::new(&self.settings()).unwrap()
    }
}

pub fn golden_records() -> CsvAdapter {
    TestFile::new(GOLDEN_RECORDS).adapter()
}
