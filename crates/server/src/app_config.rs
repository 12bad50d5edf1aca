//! Configuration loading and dataset bootstrap.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};

use awards_core::config::DatasetConfig;
use awards_ingest::{AwardTable, DelimitedImporter};

/// Load configuration from `.env` and environment variables.
pub fn load_config() -> awards_core::Config {
    awards_core::config::load_dotenv();
    awards_core::Config::from_env()
}

/// Apply a `--dataset` override on top of the environment config.
pub fn with_dataset_override(mut config: awards_core::Config, dataset: Option<PathBuf>) -> awards_core::Config {
    if let Some(path) = dataset {
        config.dataset.path = path;
    }
    config
}

/// Read the dataset file into the in-memory table. Row-level problems are
/// skipped by the importer; only an unreadable file or header fails here.
pub fn load_table(dataset: &DatasetConfig) -> anyhow::Result<AwardTable> {
    let delimiter = dataset.delimiter_byte()?;
    let outcome = DelimitedImporter::new(delimiter)
        .import(&dataset.path)
        .with_context(|| format!("failed to load dataset {}", dataset.path.display()))?;

    if !outcome.skipped.is_empty() {
        warn!(
            "{} dataset rows skipped (missing or invalid year/producers)",
            outcome.skipped.len()
        );
    }

    let table = AwardTable::from_records(outcome.records);
    info!(
        "Award table ready: {} records, {} winners",
        table.len(),
        table.winners()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn dataset_config(path: PathBuf) -> DatasetConfig {
        DatasetConfig {
            path,
            delimiter: ";".to_string(),
        }
    }

    #[test]
    fn loads_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "year;title;studios;producers;winner").unwrap();
        writeln!(file, "1980;A;S;P;yes").unwrap();
        writeln!(file, "1981;B;S;Q;").unwrap();
        writeln!(file, ";C;S;R;yes").unwrap();
        file.flush().unwrap();

        let table = load_table(&dataset_config(file.path().to_path_buf())).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.winners(), 1);
    }

    #[test]
    fn missing_dataset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dataset_config(dir.path().join("nope.csv"))).unwrap_err();
        assert!(err.to_string().contains("failed to load dataset"));
    }

    #[test]
    fn dataset_override_replaces_path() {
        let config = awards_core::Config::for_profile("");
        let config = with_dataset_override(config, Some(PathBuf::from("custom.csv")));
        assert_eq!(config.dataset.path, PathBuf::from("custom.csv"));
    }
}
