mod month_status;
mod monthwise;
mod paid_summary;
mod scope;
mod unpaid_summary;

pub use month_status::{
    month_status, paid_months, student_totals, unpaid_months, MonthStatus, MonthStatusError,
    StudentTotals,
};
pub use monthwise::{monthwise_matrix, MatrixRow, MonthwiseMatrix};
pub use paid_summary::{paid_summary, PaidRow, PaidSummary};
pub use scope::ReportScope;
pub use unpaid_summary::{unpaid_summary, UnpaidRow, UnpaidSummary};

use crate::models::ClassName;

/// Rows for one class, emitted in the fixed enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSection<Row> {
    pub class_name: ClassName,
    pub rows: Vec<Row>,
}
