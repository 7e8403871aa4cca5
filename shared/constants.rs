#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TRACKED_SECURITIES_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "tracked_securities.csv"));

pub static MANUAL_ALIASES_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "manual_aliases.csv"));

pub static EXECUTIVES_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "executives.csv"));

pub static COMPRESSED_TRACKED_SECURITIES_FILE_NAME: &str = "tracked_securities.csv.gz";
pub static COMPRESSED_MANUAL_ALIASES_FILE_NAME: &str = "manual_aliases.csv.gz";
pub static COMPRESSED_EXECUTIVES_FILE_NAME: &str = "executives.csv.gz";
