mod class_name;
mod fee_schedule;
mod month;
mod payment;
mod student;

pub use class_name::{ClassName, ClassNameError};
pub use fee_schedule::FeeSchedule;
pub use month::{Month, MonthError};
pub use payment::{Payment, PaymentRequest};
pub use student::Student;
