use crate::config::TableConfig;
use crate::domain::ports::Surface;

/// Rectangular table. Bounds are inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    start_x: i64,
    start_y: i64,
    rows: i64,
    columns: i64,
}

impl Table {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            start_x: config.start_x,
            start_y: config.start_y,
            rows: config.rows,
            columns: config.columns,
        }
    }

    pub fn is_out_of_table(&self, x: i64, y: i64) -> bool {
        !within(x, self.start_x, self.rows) || !within(y, self.start_y, self.columns)
    }
}

// start <= value < start + len, without computing start + len
fn within(value: i64, start: i64, len: i64) -> bool {
    value >= start && value.checked_sub(start).is_some_and(|offset| offset < len)
}

impl Surface for Table {
    fn is_out_of_table(&self, x: i64, y: i64) -> bool {
        Table::is_out_of_table(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_by_five() -> Table {
        Table::new(&TableConfig {
            start_x: 0,
            start_y: 0,
            rows: 5,
            columns: 5,
        })
    }

    #[test]
    fn test_corners_are_inside() {
        let table = five_by_five();
        assert!(!table.is_out_of_table(0, 0));
        assert!(!table.is_out_of_table(4, 0));
        assert!(!table.is_out_of_table(0, 4));
        assert!(!table.is_out_of_table(4, 4));
    }

    #[test]
    fn test_one_past_each_edge_is_outside() {
        let table = five_by_five();
        assert!(table.is_out_of_table(-1, 2));
        assert!(table.is_out_of_table(5, 2));
        assert!(table.is_out_of_table(2, -1));
        assert!(table.is_out_of_table(2, 5));
    }

    #[test]
    fn test_offset_origin() {
        let table = Table::new(&TableConfig {
            start_x: 2,
            start_y: 3,
            rows: 2,
            columns: 1,
        });
        assert!(!table.is_out_of_table(2, 3));
        assert!(!table.is_out_of_table(3, 3));
        assert!(table.is_out_of_table(1, 3));
        assert!(table.is_out_of_table(4, 3));
        assert!(table.is_out_of_table(2, 4));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let table = Table::new(&TableConfig {
            start_x: i64::MAX - 1,
            start_y: 0,
            rows: i64::MAX,
            columns: i64::MAX,
        });
        assert!(!table.is_out_of_table(i64::MAX, 0));
        assert!(!table.is_out_of_table(i64::MAX - 1, i64::MAX - 1));
        assert!(table.is_out_of_table(i64::MAX - 2, 0));
        assert!(table.is_out_of_table(i64::MAX, i64::MIN));
        assert!(five_by_five().is_out_of_table(i64::MIN, i64::MAX));
    }
}
