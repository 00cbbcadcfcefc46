//! Implementation of the `modgen check` command.
//!
//! Runs the naming rules on the given names and reports whether the module
//! already exists. Fails with a user error when any rule is violated.

use serde::Serialize;
use tracing::instrument;

use modgen_core::domain::DomainValidator;

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    wiring,
};

/// One rule applied to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub rule: &'static str,
    pub input: String,
    pub passed: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    checks: Vec<CheckResult>,
    title: String,
    module_exists: bool,
}

#[instrument(skip_all, fields(vendor = %args.module.vendor, name = %args.module.name))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let checks = run_checks(&args);
    let module_exists = wiring::validator(&config, &args.module.vendor)?.module_exists(&args.module.name);

    let report = CheckReport {
        title: DomainValidator::camel_case_to_human_readable(&args.module.name),
        module_exists,
        checks,
    };

    if output.is_json() {
        let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to serialise report: {e}"),
            source: Some(Box::new(e)),
        })?;
        output.data(&json)?;
    } else {
        for check in &report.checks {
            let line = format!("{}: '{}'", check.rule, check.input);
            if check.passed {
                output.success(&line)?;
            } else {
                output.failure(&line)?;
            }
        }
        output.print(&format!("  Title: {}", report.title))?;
        if report.module_exists {
            output.warning("Module already exists (generate needs --force)")?;
        } else {
            output.info("Module does not exist yet")?;
        }
    }

    match report.checks.iter().filter(|c| !c.passed).count() {
        0 => Ok(()),
        failed => Err(CliError::ChecksFailed { failed }),
    }
}

fn run_checks(args: &CheckArgs) -> Vec<CheckResult> {
    let mut checks = vec![
        CheckResult {
            rule: "vendor prefix",
            input: args.module.vendor.clone(),
            passed: DomainValidator::validate_vendor_prefix(&args.module.vendor),
        },
        CheckResult {
            rule: "module name",
            input: args.module.name.clone(),
            passed: DomainValidator::validate_camel_case_name(&args.module.name),
        },
    ];

    if let Some(kind) = &args.setting_type {
        checks.push(CheckResult {
            rule: "settings type",
            input: kind.clone(),
            passed: DomainValidator::validate_settings_type(kind),
        });
    }

    checks
}
