//! Subcommand handlers

use postie_application::ConversionReport;
use postie_application::use_cases::{ConvertDocument, MergeDocuments};
use postie_domain::WarningSeverity;
use postie_infrastructure::{FileCollectionWriter, FileSourceLoader};

use crate::cli::{ConvertArgs, MergeArgs};

pub fn execute_convert(args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let use_case = ConvertDocument::new(
        FileSourceLoader::new(),
        FileCollectionWriter::new(),
        args.options(),
    );
    let outcome = use_case.execute(&args.input, &args.output)?;
    let report = &outcome.report;
    log_warnings(report);

    if report.has_mismatch() {
        println!("Conversion completed! Some requests were not converted correctly");
    } else {
        println!("Conversion completed!");
    }
    println!("* Total APIs: {}", report.requests_seen);
    println!("* Total problematic APIs: {}", report.problematic_requests());
    println!("* Total variables: {}", report.variables_emitted);
    print_warning_summary(report);
    println!("--> Output file: {}", outcome.output_path.display());

    Ok(())
}

pub fn execute_merge(args: &MergeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let use_case = MergeDocuments::new(
        FileSourceLoader::new(),
        FileCollectionWriter::new(),
        args.options(),
    );
    let outcome = use_case.execute(&args.output, &args.inputs)?;
    let report = &outcome.report;
    log_warnings(report);

    println!("Merge completed!");
    println!("* Total APIs: {}", report.requests_seen);
    println!("* Total variables: {}", report.variables_emitted);
    if !report.skipped_sources.is_empty() {
        println!("* Skipped inputs: {}", report.skipped_sources.len());
    }
    print_warning_summary(report);
    println!("--> Output file: {}", outcome.output_path.display());

    Ok(())
}

fn log_warnings(report: &ConversionReport) {
    for warning in &report.warnings {
        match warning.severity() {
            WarningSeverity::Info => tracing::debug!("{warning}"),
            WarningSeverity::Warning => tracing::warn!("{warning}"),
        }
    }
}

fn print_warning_summary(report: &ConversionReport) {
    let stats = report.warning_stats();
    if stats.total() > 0 {
        println!("* Warnings: {} ({stats})", stats.total());
    }
}
