//! Active-Table Highlighter

use serde::Serialize;

use crate::model::PositionedTable;

/// Outcome of marking the guest's table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Highlight {
    /// No table assigned to the guest (or no guest looked up)
    Unassigned,
    /// The assigned table is marked active
    Active {
        #[serde(rename = "tableId")]
        table_id: i64,
    },
    /// A table is assigned but the layout does not contain it
    NotInLayout {
        #[serde(rename = "tableId")]
        table_id: i64,
    },
}

impl Highlight {
    /// Only an actual active table warrants drawing the chart
    pub fn shows_layout(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn table_id(&self) -> Option<i64> {
        match self {
            Self::Unassigned => None,
            Self::Active { table_id } | Self::NotInLayout { table_id } => Some(*table_id),
        }
    }
}

/// Mark the table matching `assigned` active and every other table neutral.
///
/// At most one table ends up active. Ids are expected to be unique per event;
/// if they are not, the first match in list order wins.
pub fn highlight(tables: &mut [PositionedTable], assigned: Option<i64>) -> Highlight {
    tables.iter_mut().for_each(|t| t.active = false);

    let Some(id) = assigned else {
        return Highlight::Unassigned;
    };

    let matches = tables.iter().filter(|t| t.id == id).count();
    if matches > 1 {
        tracing::warn!(table_id = id, matches, "Duplicate table id in layout");
    }

    match tables.iter_mut().find(|t| t.id == id) {
        Some(table) => {
            table.active = true;
            Highlight::Active { table_id: id }
        }
        None => {
            tracing::debug!(table_id = id, "Assigned table not present in layout");
            Highlight::NotInLayout { table_id: id }
        }
    }
}
