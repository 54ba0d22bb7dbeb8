use crate::models::ClassName;
use crate::{Money, Result};

/// Active default fee amounts. A single row, overwritten wholesale on
/// update; already recorded payments keep their own stored amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    pub monthly_fee: Money,
    pub food_fee: Money,
    pub other_fee: Money,
}

impl FeeSchedule {
    /// Full obligation for one month of the given class under the current
    /// defaults.
    pub fn monthly_total_for(&self, class_name: ClassName) -> Result<Money> {
        let mut total = self.monthly_fee;
        total.add(&self.other_fee)?;

        if class_name.has_food_fee() {
            total.add(&self.food_fee)?;
        }

        return Ok(total);
    }
}
