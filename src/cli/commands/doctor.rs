//! CLI command for `esp-bmgr doctor`
//!
//! Prints where the board manager resolves to, followed by the project and
//! tooling checks that decide whether it can be found or downloaded.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{is_json, is_quiet, print_detail, print_info, print_success, print_warning, status};
use crate::config::settings::Settings;
use crate::core::doctor::{run_doctor, CheckResult, DoctorReport};
use crate::core::resolver::Resolution;
use crate::infra::component_manager::PythonComponentManager;

/// Execute the doctor command
///
/// Fails only when a required check fails; a missing component or missing
/// download tooling is reported but tolerated.
pub fn execute(project: &Path, settings: &Settings) -> Result<()> {
    let manager = PythonComponentManager::from_settings(settings);
    let report = run_doctor(project, &manager);
    let resolution = report.resolution.clone().unwrap_or(Resolution::NotFound);

    if is_json() {
        print_json(project, &report, &resolution)?;
    } else if !is_quiet() {
        print_report(project, &report, &resolution);
    }

    if report.all_required_passed() {
        return Ok(());
    }
    if is_quiet() {
        for check in report.failed_required() {
            eprintln!("{} {}", status::ERROR, check.name);
        }
    }
    Err(anyhow::anyhow!(
        "{} is not an ESP-IDF project. Run 'esp-bmgr doctor' from the project root.",
        project.display()
    ))
}

fn print_json(project: &Path, report: &DoctorReport, resolution: &Resolution) -> Result<()> {
    let checks: Vec<_> = report
        .checks
        .iter()
        .map(|c| {
            serde_json::json!({
                "name": c.name,
                "passed": c.passed,
                "required": c.required,
                "detail": c.detail,
                "error": c.error,
                "suggestion": c.suggestion,
            })
        })
        .collect();
    let json = serde_json::json!({
        "project": project,
        "ready": report.all_required_passed(),
        "provenance": resolution.provenance(),
        "path": resolution.path(),
        "checks": checks,
        "passed_count": report.passed_count(),
        "failed_count": report.failed_count(),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_report(project: &Path, report: &DoctorReport, resolution: &Resolution) {
    print_info(&format!("esp_board_manager in {}", project.display()));
    match resolution.path() {
        Some(path) => {
            print_detail(&format!("Source: {}", resolution.provenance()));
            print_detail(&format!("Path:   {}", path.display()));
        }
        None => print_detail("Source: not found (downloaded on 'idf.py gen-bmgr-config')"),
    }

    println!();
    print_info("Checks");
    for check in &report.checks {
        print_check(check);
    }

    println!();
    let total = report.checks.len();
    if report.all_passed() {
        print_success(&format!("All {total} checks passed"));
    } else if report.all_required_passed() {
        print_warning(&format!(
            "{} of {total} optional checks failed",
            report.failed_count()
        ));
    }
}

fn print_check(check: &CheckResult) {
    let marker = if check.passed { status::SUCCESS } else { status::ERROR };
    let optional = if check.required { "" } else { " [optional]" };
    match (&check.detail, check.passed) {
        (Some(detail), true) => println!("  {marker} {}: {detail}{optional}", check.name),
        _ => println!("  {marker} {}{optional}", check.name),
    }
    if let Some(error) = &check.error {
        print_detail(&format!("  {error}"));
    }
    if let Some(suggestion) = &check.suggestion {
        print_detail(&format!("  Hint: {suggestion}"));
    }
}
