use super::activity::Activity;

/// The historical set of activities, in ledger order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    records: Vec<Activity>,
    /// false when the file it came from had no identifier column
    keyed: bool,
}

impl Ledger {
    pub fn new(records: Vec<Activity>) -> Self {
        Self {
            records,
            keyed: true,
        }
    }

    /// Ledger loaded from a file without the identifier column.
    pub fn legacy(records: Vec<Activity>) -> Self {
        Self {
            records,
            keyed: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_keyed(&self) -> bool {
        self.keyed
    }

    pub fn records(&self) -> &[Activity] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Activity> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.records.iter()
    }
}
