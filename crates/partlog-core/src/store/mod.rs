//! JSON-file-backed part record store.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::part::PartDetails;
use crate::models::record::PartRecord;

type Result<T> = std::result::Result<T, StoreError>;

/// Ordered log of part records persisted as a JSON array, newest first.
///
/// Every mutation writes the file back immediately; the store holds no
/// other state between calls. Of the record fields only `store_code` and
/// `notes` can be changed after creation.
pub struct RecordStore {
    path: PathBuf,
    records: Vec<PartRecord>,
}

impl RecordStore {
    /// Open a store at `path`, loading existing records. A missing file is
    /// an empty store; it is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let records = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| StoreError::Load(e.to_string()))?;
            serde_json::from_str(&content).map_err(|e| StoreError::Load(e.to_string()))?
        } else {
            Vec::new()
        };

        debug!("opened store {} with {} records", path.display(), records.len());

        Ok(Self { path, records })
    }

    /// All records, newest first.
    pub fn records(&self) -> &[PartRecord] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record assembled from an extraction result. Returns the new
    /// record's id.
    pub fn add_details(&mut self, details: &PartDetails, raw_text: &str) -> Result<u64> {
        let id = self.next_id();
        let record = PartRecord::from_details(id, today(), details, raw_text);
        self.insert(record)?;
        Ok(id)
    }

    /// Add a record for a scanner-decoded part number. Returns the new
    /// record's id.
    pub fn add_scanned(&mut self, code: &str) -> Result<u64> {
        let id = self.next_id();
        let record = PartRecord::from_scanned_code(id, today(), code);
        self.insert(record)?;
        Ok(id)
    }

    /// Records matching a case-insensitive substring query, across every
    /// field. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&PartRecord> {
        self.records.iter().filter(|r| r.matches(query)).collect()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&PartRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Set the user-assigned store code on a record.
    pub fn set_store_code(&mut self, id: u64, value: &str) -> Result<()> {
        let record = self.get_mut(id)?;
        record.store_code = value.to_string();
        self.save()
    }

    /// Set the freeform notes on a record.
    pub fn set_notes(&mut self, id: u64, value: &str) -> Result<()> {
        let record = self.get_mut(id)?;
        record.notes = value.to_string();
        self.save()
    }

    /// Delete all records.
    pub fn clear(&mut self) -> Result<()> {
        let count = self.records.len();
        self.records.clear();
        self.save()?;
        info!("cleared {} records from {}", count, self.path.display());
        Ok(())
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut PartRecord> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn insert(&mut self, record: PartRecord) -> Result<()> {
        debug!("adding record {} ({})", record.id, record.part_no);
        self.records.insert(0, record);
        self.save()
    }

    /// Creation ids are wall-clock milliseconds, bumped past the newest
    /// existing id so same-millisecond inserts stay distinct.
    fn next_id(&self) -> u64 {
        let now_ms = Local::now().timestamp_millis().max(0) as u64;
        let last = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        now_ms.max(last + 1)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Save(e.to_string()))?;
            }
        }
        let content = serde_json::to_string_pretty(&self.records)
            .map_err(|e| StoreError::Save(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::Save(e.to_string()))
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use pretty_assertions::assert_eq;

    fn temp_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path().join("records.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_and_reload() {
        let (dir, mut store) = temp_store();

        let details = extract("SKF Bearing 6205-2RS Ser.Nr.: A12345");
        let id = store.add_details(&details, "SKF Bearing 6205-2RS Ser.Nr.: A12345").unwrap();

        let reloaded = RecordStore::open(dir.path().join("records.json")).unwrap();
        assert_eq!(reloaded.len(), 1);
        let record = reloaded.get(id).unwrap();
        assert_eq!(record.part_no, "6205-2RS");
        assert_eq!(record.manufacturer, "SKF");
        assert_eq!(record.category, "Bearing");
    }

    #[test]
    fn test_ids_are_monotonically_distinct() {
        let (_dir, mut store) = temp_store();

        let a = store.add_scanned("P-1").unwrap();
        let b = store.add_scanned("P-2").unwrap();
        let c = store.add_scanned("P-3").unwrap();

        assert!(a < b && b < c);
    }

    #[test]
    fn test_newest_first_order() {
        let (_dir, mut store) = temp_store();

        store.add_scanned("FIRST").unwrap();
        store.add_scanned("SECOND").unwrap();

        assert_eq!(store.records()[0].part_no, "SECOND");
        assert_eq!(store.records()[1].part_no, "FIRST");
    }

    #[test]
    fn test_edit_mutable_fields_only() {
        let (dir, mut store) = temp_store();
        let id = store.add_scanned("P-1").unwrap();
        let created = store.get(id).unwrap().clone();

        store.set_store_code(id, "A-04-02").unwrap();
        store.set_notes(id, "spare for line 3").unwrap();

        let reloaded = RecordStore::open(dir.path().join("records.json")).unwrap();
        let record = reloaded.get(id).unwrap();
        assert_eq!(record.store_code, "A-04-02");
        assert_eq!(record.notes, "spare for line 3");
        // Identity fields are untouched by edits.
        assert_eq!(record.id, created.id);
        assert_eq!(record.date, created.date);
        assert_eq!(record.raw_data, created.raw_data);
    }

    #[test]
    fn test_edit_unknown_id() {
        let (_dir, mut store) = temp_store();
        assert!(matches!(
            store.set_notes(42, "x"),
            Err(StoreError::NotFound(42))
        ));
    }

    #[test]
    fn test_search() {
        let (_dir, mut store) = temp_store();
        store.add_details(&extract("SKF Bearing 6205"), "SKF Bearing 6205").unwrap();
        store.add_scanned("HOSE-KIT-12").unwrap();

        assert_eq!(store.search("bearing").len(), 1);
        assert_eq!(store.search("hose-kit").len(), 1);
        assert_eq!(store.search("").len(), 2);
        assert!(store.search("nonexistent").is_empty());
    }

    #[test]
    fn test_clear() {
        let (dir, mut store) = temp_store();
        store.add_scanned("P-1").unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        let reloaded = RecordStore::open(dir.path().join("records.json")).unwrap();
        assert!(reloaded.is_empty());
    }
}
