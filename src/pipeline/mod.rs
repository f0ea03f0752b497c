//! Pipeline components: discovery, admission budget, outcome slots, dispatch, ordered collection.

pub mod budget;
pub mod collector;
pub mod dispatcher;
pub mod error_handler;
pub mod orchestrator;
pub mod slots;
pub mod walk;

pub use budget::{ConcurrencyBudget, Permit};
pub use collector::{Collected, collect};
pub use dispatcher::{DispatchSummary, Dispatcher};
pub use error_handler::report_skipped;
pub use orchestrator::{resolve_task_slots, run_search, search_candidates};
pub use slots::{OutcomeSlot, SlotWriter, slot_arena};
pub use walk::{Discovery, WalkOutcome, discover};
