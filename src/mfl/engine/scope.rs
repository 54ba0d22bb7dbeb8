use crate::models::{ClassName, Month};
use crate::Result;

/// Optional class/month narrowing for a roster request. An absent filter
/// means the full enumeration; an unknown value is rejected at parse time,
/// never silently widened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportScope {
    pub class_name: Option<ClassName>,
    pub month: Option<Month>,
}

impl ReportScope {
    pub fn full_year() -> Self {
        Self::default()
    }

    pub fn parse(class_name: Option<&str>, month: Option<&str>) -> Result<Self> {
        let class_name = match class_name {
            Some(raw) => Some(ClassName::parse(raw)?),
            None => None,
        };

        let month = match month {
            Some(raw) => Some(Month::parse(raw)?),
            None => None,
        };

        return Ok(Self { class_name, month });
    }

    /// Classes the report covers, in enumeration order.
    pub fn classes(&self) -> Vec<ClassName> {
        match self.class_name {
            Some(class_name) => vec![class_name],
            None => ClassName::ALL.to_vec(),
        }
    }

    /// Month columns the report covers, in calendar order.
    pub fn months(&self) -> Vec<Month> {
        match self.month {
            Some(month) => vec![month],
            None => Month::ALL.to_vec(),
        }
    }

    pub fn includes_month(&self, month: Month) -> bool {
        self.month.map_or(true, |selected| selected == month)
    }
}
