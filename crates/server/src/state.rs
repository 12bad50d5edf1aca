use awards_ingest::AwardTable;

/// Request-handler context. The table is fully loaded before the listener binds
/// and is never written afterwards, so handlers read it without locking.
pub struct AppState {
    pub table: AwardTable,
}

impl AppState {
    pub fn new(table: AwardTable) -> Self {
        Self { table }
    }
}
