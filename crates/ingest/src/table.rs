use awards_core::AwardRecord;

/// The loaded dataset. Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct AwardTable {
    records: Vec<AwardRecord>,
}

impl AwardTable {
    /// Take ownership of the rows, assigning ids in row order starting at 1.
    pub fn from_records(records: impl IntoIterator<Item = AwardRecord>) -> Self {
        let records = records
            .into_iter()
            .zip(1u32..)
            .map(|(mut record, id)| {
                record.id = id;
                record
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[AwardRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows flagged as winners.
    pub fn winners(&self) -> usize {
        self.records.iter().filter(|r| r.winner).count()
    }
}
