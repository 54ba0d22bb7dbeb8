pub mod engine;
pub mod ids;
pub mod input;
pub mod models;
pub mod report;
pub mod services;

mod directory;
mod ledger;
mod money;
mod result;
mod snapshot;

pub use directory::{DirectoryError, StudentDirectory};
pub use ledger::PaymentLedger;
pub use money::{Money, MoneyError};
pub use result::Result;
pub use snapshot::Snapshot;

pub fn build_ledger_service(schedule: models::FeeSchedule) -> services::LedgerService {
    let directory = StudentDirectory::new();
    let ledger = PaymentLedger::new();
    let service = services::LedgerService::new(directory, ledger, schedule);

    return service;
}
