//! Processor trait for MVI architecture.

use super::action::Action;
use super::result::TaskResult;

/// Executes an action and produces exactly one result.
///
/// Processors are synchronous. Anything that can go wrong is returned as a
/// result variant instead of an error, so nothing escapes the pipeline.
pub trait Processor {
    type Action: Action;
    type Result: TaskResult;

    fn process(action: Self::Action) -> Self::Result;
}
