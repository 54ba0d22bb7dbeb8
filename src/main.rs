mod args;
mod config;
mod reader;

use args::{Args, OutputFormat, ReportKind};

use mfl::engine::{self, ReportScope};
use mfl::ids::StudentId;
use mfl::input::{FeeRecord, PaymentRecord, StudentRecord};
use mfl::report;
use mfl::services::LedgerService;
use mfl::{DirectoryError, Result, Snapshot};

use anyhow::anyhow;

fn main() -> Result {
    config::init_logging()?;

    log::debug!("Application configured. Loading snapshot files...");

    let args = args::parse_args()?;
    let service = load_service(&args)?;

    log::debug!("Snapshot loaded. Computing report...");

    let snapshot = service.snapshot();
    let output = run_report(&args, &snapshot)?;

    println!("{}", output);

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Reads the three snapshot files into a fresh ledger service. Rows that
/// fail domain parsing are logged and skipped here at the shell boundary;
/// inside the engine nothing is ever dropped.
fn load_service(args: &Args) -> Result<LedgerService> {
    let schedule = reader::read_rows::<FeeRecord>(&args.fees_path)?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Fee schedule file has no rows: {:?}", args.fees_path))?
        .parse_schedule()?;

    let mut service = mfl::build_ledger_service(schedule);

    for record in reader::read_rows::<StudentRecord>(&args.students_path)? {
        log::debug!("Parsing student record: {record:?}");

        let student = match record.parse_student() {
            Ok(student) => student,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = service.register_student(student) {
            log::warn!("{e}");
        }
    }

    for record in reader::read_rows::<PaymentRecord>(&args.payments_path)? {
        log::debug!("Parsing payment record: {record:?}");

        let request = match record.parse_request() {
            Ok(request) => request,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = service.record_payment(request) {
            log::warn!("{e}");
        }
    }

    log::debug!("Loaded {} students", service.list_students(None).len());

    return Ok(service);
}

fn run_report(args: &Args, snapshot: &Snapshot) -> Result<String> {
    let scope = ReportScope::parse(args.class_filter.as_deref(), args.month_filter.as_deref())?;

    match args.report {
        ReportKind::Detail => {
            let id = args
                .student
                .map(StudentId)
                .ok_or_else(|| anyhow!("The detail report requires --student <id>."))?;

            let student = snapshot
                .find_student(id)
                .ok_or(DirectoryError::StudentNotFound(id))?;

            let entries = engine::month_status(student, snapshot.payments_for(id))?;

            return match args.format {
                OutputFormat::Text => {
                    let totals = engine::student_totals(&entries)?;
                    Ok(report::student_narrative(student, &entries, &totals))
                }
                OutputFormat::Csv => report::to_csv(&report::detail_table(student, &entries)),
            };
        }
        ReportKind::Paid => {
            let summary = engine::paid_summary(snapshot, &scope)?;
            return render(&report::paid_summary_table(&summary), args.format);
        }
        ReportKind::Unpaid => {
            let summary = engine::unpaid_summary(snapshot, &scope)?;
            return render(&report::unpaid_summary_table(&summary), args.format);
        }
        ReportKind::Monthwise => {
            let matrix = engine::monthwise_matrix(snapshot, &scope)?;
            return render(&report::monthwise_table(&matrix), args.format);
        }
    }
}

fn render(table: &report::ReportTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => report::to_csv(table),
        OutputFormat::Text => report::to_text(table),
    }
}
