//! Demo driver for the employee registry.
//!
//! Loads a roster (or the built-in sample records), walks through the
//! registry operations and prints each result as a JSON line.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use employee_registry::config::ConfigLoader;
use employee_registry::error::RegistryResult;
use employee_registry::models::{Employee, EmployeeUpdate};
use employee_registry::registry::Registry;

#[derive(Parser, Debug)]
#[command(name = "employee-registry", about = "Walk through the employee registry operations")]
struct Args {
    /// YAML roster to start from instead of the built-in sample records
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "employee_registry=debug,info"
    } else {
        "employee_registry=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn sample_registry() -> Registry {
    vec![
        Employee::new(1, "John Smith", 30, "Manager", Decimal::new(5000, 0)),
        Employee::new(2, "Emily Johnson", 25, "Engineer", Decimal::new(4000, 0)),
        Employee::new(3, "Robert Davis", 35, "Accountant", Decimal::new(4500, 0)),
        Employee::new(4, "Jessica Brown", 28, "Designer", Decimal::new(3500, 0)),
    ]
    .into_iter()
    .collect()
}

fn emit<W: Write, T: Serialize>(out: &mut W, step: &str, value: T) -> RegistryResult<()> {
    let line = serde_json::json!({ "step": step, "result": value });
    writeln!(out, "{}", line)?;
    Ok(())
}

fn run<W: Write>(mut registry: Registry, out: &mut W) -> RegistryResult<()> {
    emit(out, "count", registry.count())?;

    let mut edited = registry.require(2)?.clone();
    edited.age = 26;
    edited.position = "Senior Engineer".to_string();
    emit(out, "edit", registry.edit(2, edited))?;

    let raise = EmployeeUpdate::default().with_salary(Decimal::new(4100, 0));
    emit(out, "update", registry.update(2, &raise))?;

    emit(out, "delete", registry.delete(1))?;
    emit(out, "average_salary", registry.average_salary())?;
    emit(out, "salary_summary", registry.salary_summary())?;
    emit(out, "get_by_name", registry.get_by_name("John"))?;
    emit(out, "search", registry.search("E"))?;

    registry.sort_by_name();
    emit(out, "sorted_by_name", registry.employees())?;

    registry.sort_by_salary();
    emit(out, "sorted_by_salary", registry.employees())?;

    Ok(())
}

fn load(roster: Option<PathBuf>) -> RegistryResult<Registry> {
    match roster {
        Some(path) => Ok(ConfigLoader::load(path)?.into_registry()),
        None => Ok(sample_registry()),
    }
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let result = load(args.roster).and_then(|registry| run(registry, &mut io::stdout().lock()));
    if let Err(err) = result {
        tracing::error!(error = %err, "Demo failed");
        std::process::exit(1);
    }
}
