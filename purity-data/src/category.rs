use serde::{Deserialize, Serialize};

/// A registry category and how many channels were created under it.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryRecord {
    pub name: String,

    /// Zero marks the end of the registry's category list.
    pub channel_count: u64,

    /// Also the cursor used to request the following categories.
    pub id: u64,
}

impl CategoryRecord {
    pub fn is_end_marker(&self) -> bool {
        self.channel_count == 0
    }
}
