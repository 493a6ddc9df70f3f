//! Demo and self-check commands.

use anyhow::Result;

use super::{emit, fail};
use crate::demo;
use crate::io::{EntityType, Envelope, ExitStatus, ResultCode};
use crate::log_event;

pub fn run_demo(json: bool) -> Result<ExitStatus> {
    let report = demo::run_demo();
    log_event!("demo", "finished", "result {}", report.result);

    let lines = report.lines();
    let envelope = Envelope::success(&report).with_entity_type(EntityType::Demo);
    emit(envelope, json, || {
        for line in &lines {
            println!("{line}");
        }
    })
}

pub fn run_self_check(json: bool) -> Result<ExitStatus> {
    let check = demo::self_check();
    if !check.passed() {
        let message = format!(
            "Self-check failed: expected {}, got {}",
            check.expected, check.actual
        );
        return fail(ResultCode::CheckFailed, &message, json);
    }

    let envelope = Envelope::success(check)
        .with_entity_type(EntityType::SelfCheck)
        .with_message("Self-check passed");
    emit(envelope, json, || println!("Self-check passed"))
}
