use std::io::Read;
use std::path::Path;

use awards_core::{parse_winner, AwardRecord, AwardsError};
use csv::StringRecord;
use tracing::{info, warn};

const COL_YEAR: &str = "year";
const COL_TITLE: &str = "title";
const COL_STUDIOS: &str = "studios";
const COL_PRODUCERS: &str = "producers";
const COL_WINNER: &str = "winner";

/// A data row the importer refused, with the reason and its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Everything a single import pass produced.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub records: Vec<AwardRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Column positions resolved from the header row.
struct Columns {
    year: usize,
    title: Option<usize>,
    studios: Option<usize>,
    producers: usize,
    winner: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, AwardsError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AwardsError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            year: require(COL_YEAR)?,
            title: find(COL_TITLE),
            studios: find(COL_STUDIOS),
            producers: require(COL_PRODUCERS)?,
            winner: find(COL_WINNER),
        })
    }
}

/// Reads the awards dataset from a delimited text file with a header row.
///
/// `winner` is normalized here, once: only `yes` is a win. Rows with a missing
/// or non-numeric `year`, or an empty `producers` cell, are skipped and logged
/// instead of failing the whole load.
pub struct DelimitedImporter {
    delimiter: u8,
}

impl DelimitedImporter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn import(&self, path: &Path) -> Result<ImportOutcome, AwardsError> {
        let file = std::fs::File::open(path).map_err(AwardsError::Io)?;
        let outcome = self.import_reader(file)?;
        info!(
            "Imported {} records from {} ({} skipped)",
            outcome.records.len(),
            path.display(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    pub fn import_reader<R: Read>(&self, reader: R) -> Result<ImportOutcome, AwardsError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers().map_err(|e| AwardsError::Csv(e.to_string()))?;
        let columns = Columns::resolve(headers)?;

        let mut outcome = ImportOutcome::default();
        for row in rdr.records() {
            let row = row.map_err(|e| AwardsError::Csv(e.to_string()))?;
            let line = row.position().map_or(0, |p| p.line());

            match parse_row(&row, &columns) {
                Ok(record) => outcome.records.push(record),
                Err(reason) => {
                    warn!(line, %reason, "Skipping dataset row");
                    outcome.skipped.push(SkippedRow { line, reason });
                }
            }
        }

        Ok(outcome)
    }
}

fn parse_row(row: &StringRecord, columns: &Columns) -> Result<AwardRecord, String> {
    let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));

    let year = match cell(Some(columns.year)).map(str::trim) {
        None | Some("") => return Err("missing year".to_string()),
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|_| format!("invalid year {:?}", raw))?,
    };

    let producers = match cell(Some(columns.producers)) {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Err("missing producers".to_string()),
    };

    Ok(AwardRecord::new(
        year,
        cell(columns.title).unwrap_or_default(),
        cell(columns.studios).unwrap_or_default(),
        producers,
        parse_winner(cell(columns.winner)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn import(text: &str) -> ImportOutcome {
        DelimitedImporter::new(b';')
            .import_reader(text.as_bytes())
            .expect("import should succeed")
    }

    #[test]
    fn reads_semicolon_dataset() {
        let out = import(
            "year;title;studios;producers;winner\n\
             1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes\n\
             1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;\n",
        );

        assert_eq!(out.records.len(), 2);
        assert!(out.skipped.is_empty());

        let first = &out.records[0];
        assert_eq!(first.year, 1980);
        assert_eq!(first.title, "Can't Stop the Music");
        assert_eq!(first.producers, "Allan Carr");
        assert!(first.winner);

        let second = &out.records[1];
        assert_eq!(second.studios, "Lorimar Productions, United Artists");
        assert!(!second.winner);
    }

    #[test]
    fn winner_normalization() {
        let out = import(
            "year;title;studios;producers;winner\n\
             1990;A;S;P1;yes\n\
             1991;B;S;P2;no\n\
             1992;C;S;P3;maybe\n\
             1993;D;S;P4\n",
        );
        let winners: Vec<bool> = out.records.iter().map(|r| r.winner).collect();
        assert_eq!(winners, vec![true, false, false, false]);
    }

    #[test]
    fn header_order_does_not_matter() {
        let out = import("winner;producers;year;title;studios;extra\nyes;Joel Silver;1999;T;S;x\n");
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].producers, "Joel Silver");
        assert_eq!(out.records[0].year, 1999);
        assert!(out.records[0].winner);
    }

    #[test]
    fn producers_kept_verbatim() {
        let out = import("year;title;studios;producers;winner\n2001;T;S;Jane Doe and John Roe;yes\n");
        assert_eq!(out.records[0].producers, "Jane Doe and John Roe");
    }

    #[test]
    fn rows_without_year_or_producers_are_skipped() {
        let out = import(
            "year;title;studios;producers;winner\n\
             ;No Year;S;P;yes\n\
             19x0;Bad Year;S;P;yes\n\
             2000;No Producer;S;;yes\n\
             2001;Fine;S;P;yes\n",
        );

        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].title, "Fine");
        let lines: Vec<u64> = out.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
        assert_eq!(out.skipped[0].reason, "missing year");
        assert_eq!(out.skipped[2].reason, "missing producers");
    }

    #[test]
    fn missing_required_column_fails() {
        let err = DelimitedImporter::new(b';')
            .import_reader("year;title;studios;winner\n2000;T;S;yes\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, AwardsError::MissingColumn(ref c) if c == "producers"));
    }

    #[test]
    fn comma_delimiter_with_quoted_fields() {
        let out = DelimitedImporter::new(b',')
            .import_reader("year,title,studios,producers,winner\n1985,\"Rambo\",\"Tri-Star, Inc\",Buzz Feitshans,yes\n".as_bytes())
            .unwrap();
        assert_eq!(out.records[0].studios, "Tri-Star, Inc");
        assert!(out.records[0].winner);
    }

    #[test]
    fn empty_file_yields_no_records() {
        let out = import("year;title;studios;producers;winner\n");
        assert!(out.records.is_empty());
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn import_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "year;title;studios;producers;winner").unwrap();
        writeln!(file, "2002;Swept Away;Screen Gems;Matthew Vaughn;yes").unwrap();
        file.flush().unwrap();

        let out = DelimitedImporter::new(b';').import(file.path()).unwrap();
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].producers, "Matthew Vaughn");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DelimitedImporter::new(b';')
            .import(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert!(matches!(err, AwardsError::Io(_)));
    }
}
