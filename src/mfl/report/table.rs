use crate::{Money, Result};

pub const GRAND_TOTAL_LABEL: &str = "GRAND TOTAL";

/// A rendered cell that still remembers the number it was rendered from.
/// Money cells carry their `Money` value so exports can synthesize totals
/// without reparsing formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    amount: Option<Money>,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        return Self {
            text: value.into(),
            amount: None,
        };
    }

    pub fn money(amount: Money) -> Self {
        return Self {
            text: amount.to_string(),
            amount: Some(amount),
        };
    }

    pub fn count(value: u32) -> Self {
        Self::text(value.to_string())
    }

    pub fn empty() -> Self {
        Self::text("")
    }

    pub fn display(&self) -> &str {
        &self.text
    }

    pub fn amount(&self) -> Option<Money> {
        self.amount
    }
}

/// Tabular projection of one engine result. The formatter renders exactly
/// these rows, in exactly this order, to every output format, so on-screen
/// and exported figures cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    title: String,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    pub fn new(title: impl Into<String>, columns: Vec<String>) -> Self {
        return Self {
            title: title.into(),
            columns,
            rows: vec![],
        };
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Synthesized trailer: per-column sums of the numeric values carried
    /// by money cells. `None` when no column carries money, which keeps
    /// count-only tables free of a meaningless trailer.
    pub fn grand_total_row(&self) -> Result<Option<Vec<Cell>>> {
        let mut sums: Vec<Option<Money>> = vec![None; self.columns.len()];

        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                if let Some(amount) = cell.amount() {
                    let sum = sums[index].get_or_insert(Money::ZERO);
                    sum.add(&amount)?;
                }
            }
        }

        if sums.iter().all(Option::is_none) {
            return Ok(None);
        }

        let mut trailer: Vec<Cell> = sums
            .into_iter()
            .map(|sum| match sum {
                Some(amount) => Cell::money(amount),
                None => Cell::empty(),
            })
            .collect();

        if trailer[0].amount().is_none() {
            trailer[0] = Cell::text(GRAND_TOTAL_LABEL);
        }

        return Ok(Some(trailer));
    }
}
