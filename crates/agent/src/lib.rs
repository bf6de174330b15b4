//! The ragnar pipeline core.
//!
//! One invocation follows a fixed, linear flow:
//!
//! 1. **Normalize** the raw input into a query string
//! 2. **Plan** — decompose the query into ordered sub-questions
//! 3. **Retrieve** — one index search per sub-question, deduplicated
//! 4. **Synthesize** — answer grounded in the assembled context
//!
//! Every step is recorded in an append-only trace; any component failure
//! aborts the run and surfaces a typed error. There are no retries, no
//! loops back, and no state kept across invocations beyond the two port
//! references.

pub mod evidence;
pub mod orchestrator;
pub mod planner;
pub mod synthesizer;

pub use evidence::{Evidence, EvidenceAggregator, NO_EVIDENCE};
pub use orchestrator::Agent;
pub use planner::Planner;
pub use synthesizer::Synthesizer;

#[cfg(test)]
pub(crate) mod test_helpers;
