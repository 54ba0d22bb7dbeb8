mod receipt_id;
mod student_id;

pub use receipt_id::ReceiptId;
pub use student_id::StudentId;
