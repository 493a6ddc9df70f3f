//! Sum, product and run commands.

use anyhow::Result;

use super::{emit, fail};
use crate::aggregate::{calculate_product, calculate_sum};
use crate::config::Settings;
use crate::io::{EntityType, Envelope, ExitStatus, ResultCode};
use crate::script::{Script, Step, Variant};
use crate::{debug_event, log_event};

#[derive(serde::Serialize)]
struct AggregateResult<'a> {
    numbers: &'a [i64],
    initial: i64,
    value: i64,
}

/// Run sum command - fold `add` over the numbers.
pub fn run_sum(numbers: &[i64], initial: Option<i64>, settings: &Settings, json: bool) -> Result<ExitStatus> {
    let initial = initial.unwrap_or(settings.defaults.sum_seed);
    let value = calculate_sum(numbers, Some(initial));
    log_event!("sum", "computed", "{} numbers from {initial} -> {value}", numbers.len());

    let envelope = Envelope::success(AggregateResult {
        numbers,
        initial,
        value,
    })
    .with_entity_type(EntityType::Aggregate)
    .with_count(numbers.len());
    emit(envelope, json, || println!("{value}"))
}

/// Run product command - fold `multiply` over the numbers.
pub fn run_product(numbers: &[i64], initial: Option<i64>, settings: &Settings, json: bool) -> Result<ExitStatus> {
    let initial = initial.unwrap_or(settings.defaults.product_seed);
    let value = calculate_product(numbers, Some(initial));
    log_event!("product", "computed", "{} numbers from {initial} -> {value}", numbers.len());

    let envelope = Envelope::success(AggregateResult {
        numbers,
        initial,
        value,
    })
    .with_entity_type(EntityType::Aggregate)
    .with_count(numbers.len());
    emit(envelope, json, || println!("{value}"))
}

/// Run a validated operation script and print each step.
pub fn run_script(
    variant: Variant,
    initial: Option<i64>,
    ops: &[String],
    settings: &Settings,
    json: bool,
) -> Result<ExitStatus> {
    let script = match Script::parse(variant, ops) {
        Ok(script) => script,
        Err(e) => return fail(ResultCode::InvalidInput, &e.to_string(), json),
    };

    let initial = initial.unwrap_or(settings.defaults.initial_value);
    log_event!("run", "start", "{} ops on {variant} calculator from {initial}", ops.len());
    debug_event!("run", "sqrt policy", "{:?}", settings.scientific.negative_sqrt);

    match script.execute(initial, settings.scientific.negative_sqrt) {
        Ok(report) => {
            let count = report.steps.len();
            let envelope = Envelope::success(&report)
                .with_entity_type(EntityType::Script)
                .with_count(count);
            emit(envelope, json, || {
                print_steps(&report.steps);
                println!("Final: {}", report.final_value);
            })
        }
        Err(failure) => {
            let message = failure.to_string();
            let envelope = Envelope::from_calc_error(&failure.source)
                .with_data(&failure.partial)
                .with_message(&message);
            let status = ExitStatus::for_result(envelope.code);
            if json {
                let envelope = envelope
                    .with_entity_type(EntityType::Script)
                    .with_count(failure.partial.steps.len());
                println!("{}", envelope.to_json()?);
            } else {
                print_steps(&failure.partial.steps);
                eprintln!("Error: {message}");
            }
            Ok(status)
        }
    }
}

fn print_steps(steps: &[Step]) {
    for step in steps {
        match &step.output {
            Some(output) => println!("{:<12} {:>8}  => {output}", step.operation, step.value),
            None => println!("{:<12} {:>8}", step.operation, step.value),
        }
    }
}
