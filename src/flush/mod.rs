pub mod jsonl;

pub use jsonl::{flush_history_to_jsonl, write_snapshots_jsonl};
