//! Byte-offset positions and line/column conversion for diagnostics.

/// A byte offset into the source text. `u32` is plenty for a didactic
/// compiler and keeps AST nodes small.
pub type Pos = u32;

/// A 1-indexed line/column pair, the shape terminals want to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

/// Maps byte offsets to 1-indexed line/column pairs.
///
/// Built once per source file; `offset_to_line_col` binary-searches the
/// table of line-start offsets.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    #[must_use]
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        Self { line_starts }
    }

    #[must_use]
    pub fn offset_to_line_col(&self, offset: Pos) -> LineCol {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        LineCol {
            line: line as u32 + 1,
            column: offset.saturating_sub(line_start) + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_starts_at_one_one() {
        let map = LineMap::build("var x = 1;\nvar y = 2;\n");
        assert_eq!(
            map.offset_to_line_col(0),
            LineCol { line: 1, column: 1 }
        );
    }

    #[test]
    fn offset_on_second_line_reports_correct_column() {
        let map = LineMap::build("ab\ncd");
        assert_eq!(
            map.offset_to_line_col(4),
            LineCol { line: 2, column: 2 }
        );
    }
}
