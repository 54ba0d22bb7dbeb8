use crate::ids::StudentId;
use crate::models::ClassName;

/// Student profile as registered by the office.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub father_name: String,
    pub address: String,
    pub class_name: ClassName,
    pub mobile: String,
}
