use crate::ids::StudentId;
use crate::models::{ClassName, Student};
use crate::Result;

use std::collections::HashMap;

use thiserror::Error;

pub type StudentCatalog = HashMap<StudentId, Student>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Student already registered: {0}")]
    AlreadyRegistered(StudentId),
}

/// Catalog of registered students; the source of identity and class
/// grouping for every report.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    catalog: StudentCatalog,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, student: Student) -> Result {
        if self.catalog.contains_key(&student.id) {
            Err(DirectoryError::AlreadyRegistered(student.id))?
        }

        self.catalog.insert(student.id, student);

        return Ok(());
    }

    pub fn update(&mut self, student: Student) -> Result {
        if !self.catalog.contains_key(&student.id) {
            Err(DirectoryError::StudentNotFound(student.id))?
        }

        self.catalog.insert(student.id, student);

        return Ok(());
    }

    pub fn remove(&mut self, id: StudentId) -> Result<Student> {
        return self
            .catalog
            .remove(&id)
            .ok_or_else(|| DirectoryError::StudentNotFound(id).into());
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.catalog.get(&id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.catalog.contains_key(&id)
    }

    /// Students in report order: class enumeration order, then id ascending.
    pub fn list(&self, class_name: Option<ClassName>) -> Vec<Student> {
        let mut students: Vec<Student> = self
            .catalog
            .values()
            .filter(|student| class_name.map_or(true, |c| student.class_name == c))
            .cloned()
            .collect();

        students.sort_by_key(|student| (student.class_name, student.id));

        return students;
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
