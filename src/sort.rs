//! Sort rows by a single column

use crate::err;
use crate::table::{Row, Table};
use crate::util::Result;
use std::cmp::Ordering;

/// How to sort
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// zero based column to compare
    pub column: usize,
    /// descending rather than ascending
    pub reverse: bool,
}

impl SortConfig {
    /// new
    pub const fn new(column: usize, reverse: bool) -> Self {
        Self { column, reverse }
    }
    /// Compare two rows on the key column, byte-wise.
    /// A missing column compares as empty; call `check` first.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let left = a.get(self.column).unwrap_or_default();
        let right = b.get(self.column).unwrap_or_default();
        let o = left.cmp(right);
        if self.reverse {
            o.reverse()
        } else {
            o
        }
    }
    /// fail if any row is too narrow for the key column
    pub fn check(&self, rows: &[Row]) -> Result<()> {
        if let Some(row) = rows.iter().find(|r| r.len() <= self.column) {
            return err!(
                "Sort column {} is out of range for a row with {} columns : '{}'",
                self.column,
                row.len(),
                row
            );
        }
        Ok(())
    }
    /// Sort the rows of a table in place. The header is not touched.
    pub fn sort(&self, table: &mut Table) -> Result<()> {
        self.check(&table.rows)?;
        table.rows.sort_by(|a, b| self.compare(a, b));
        tracing::debug!(
            rows = table.rows.len(),
            column = self.column,
            reverse = self.reverse,
            "sorted"
        );
        Ok(())
    }
    /// Split rendered text back into rows, sort them, and render again.
    /// Every line is a row here, so header lines embedded in `text` are sorted too.
    pub fn sort_text(&self, text: &[u8]) -> Result<Vec<u8>> {
        let mut table = Table::from_text(text);
        self.sort(&mut table)?;
        Ok(table.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(data: &str, cfg: SortConfig, has_header: bool) -> Result<String> {
        let mut t = Table::read(data.as_bytes(), has_header)?;
        cfg.sort(&mut t)?;
        Ok(String::from_utf8_lossy(&t.render()).to_string())
    }

    #[test]
    fn basic() -> Result<()> {
        assert_eq!(sorted("b,2\na,1\n", SortConfig::new(0, false), false)?, "a,1\nb,2\n");
        assert_eq!(sorted("b,2\na,1\n", SortConfig::new(0, true), false)?, "b,2\na,1\n");
        assert_eq!(
            sorted("name,val\nb,2\na,1\n", SortConfig::new(0, false), true)?,
            "name,val\na,1\nb,2\n"
        );
        Ok(())
    }

    #[test]
    fn by_second_column() -> Result<()> {
        let data = "x,3\ny,1\nz,2\n";
        assert_eq!(sorted(data, SortConfig::new(1, false), false)?, "y,1\nz,2\nx,3\n");
        assert_eq!(sorted(data, SortConfig::new(1, true), false)?, "x,3\nz,2\ny,1\n");
        Ok(())
    }

    #[test]
    fn lexicographic() -> Result<()> {
        let data = "10\n9\n100\nB\na\n";
        assert_eq!(sorted(data, SortConfig::default(), false)?, "10\n100\n9\nB\na\n");
        Ok(())
    }

    #[test]
    fn idempotent() -> Result<()> {
        let data = "d,4\nb,2\nc,3\na,1\ne,5\n";
        for reverse in [false, true] {
            let cfg = SortConfig::new(0, reverse);
            let once = sorted(data, cfg, false)?;
            assert_eq!(sorted(&once, cfg, false)?, once);
        }
        Ok(())
    }

    #[test]
    fn reverse_is_reverse_permutation() -> Result<()> {
        let data = "d,4\nb,2\nc,3\na,1\ne,5\n";
        let up = sorted(data, SortConfig::new(0, false), false)?;
        let down = sorted(data, SortConfig::new(0, true), false)?;
        let mut up: Vec<&str> = up.lines().collect();
        up.reverse();
        assert_eq!(up, down.lines().collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn equal_keys() {
        let cfg = SortConfig::new(0, true);
        assert_eq!(cfg.compare(&Row::new(b"a,1"), &Row::new(b"a,2")), Ordering::Equal);
        assert_eq!(cfg.compare(&Row::new(b"a,1"), &Row::new(b"b,2")), Ordering::Greater);
    }

    #[test]
    fn column_out_of_range() {
        assert!(sorted("a,1\nb,2\n", SortConfig::new(2, false), false).is_err());
        assert!(sorted("a,1\nb,2\n", SortConfig::new(1, false), false).is_ok());
        // nothing to compare, nothing to check
        assert!(sorted("", SortConfig::new(7, false), false).is_ok());
    }

    #[test]
    fn text_pass_sorts_headers_too() -> Result<()> {
        let cfg = SortConfig::default();
        assert_eq!(cfg.sort_text(b"name,val\nb,2\na,1\n")?, b"a,1\nb,2\nname,val\n");
        assert!(cfg.sort_text(b"")?.is_empty());
        Ok(())
    }

    #[test]
    fn bytes_not_chars() -> Result<()> {
        let cfg = SortConfig::default();
        // Latin-1 e-acute is 0xE9, above every ASCII letter
        assert_eq!(cfg.sort_text(b"caf\xe9,2\ncafe,3\nabc,1\n")?, b"abc,1\ncafe,3\ncaf\xe9,2\n");
        Ok(())
    }
}
