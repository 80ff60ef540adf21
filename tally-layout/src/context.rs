use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(pub u32);

/// Grouping information for the column series sharing category slots in a pass
pub trait SeriesContext {
    /// Position of `series` among the column series, `None` if it is not one of them
    fn column_position(&self, series: SeriesId) -> Option<usize>;

    fn column_series_count(&self) -> usize;
}

/// [`SeriesContext`] built from the ordered ids of the column series in a chart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGroupContext {
    columns: Vec<SeriesId>,
}

impl ColumnGroupContext {
    pub fn new(columns: impl IntoIterator<Item = SeriesId>) -> Self {
        let mut ids: Vec<SeriesId> = Vec::new();
        for id in columns {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { columns: ids }
    }
}

impl SeriesContext for ColumnGroupContext {
    fn column_position(&self, series: SeriesId) -> Option<usize> {
        self.columns.iter().position(|id| *id == series)
    }

    fn column_series_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_insertion_order() {
        let context = ColumnGroupContext::new([SeriesId(7), SeriesId(3), SeriesId(7), SeriesId(1)]);
        assert_eq!(context.column_series_count(), 3);
        assert_eq!(context.column_position(SeriesId(7)), Some(0));
        assert_eq!(context.column_position(SeriesId(3)), Some(1));
        assert_eq!(context.column_position(SeriesId(1)), Some(2));
        assert_eq!(context.column_position(SeriesId(42)), None);
    }
}
