#![forbid(unsafe_code)]

//! Core domain model and business logic for the Eremos daily prayer system.
//!
//! This crate provides:
//! - Domain types (sessions, responses, checklist items, mood entries)
//! - Scripture reference resolution
//! - Prompt rotation (meditation and examination)
//! - Benediction rotation
//! - Reading plan and examination question loading
//! - Persistence (journal, CSV archive)
//! - Markdown export

pub mod types;
pub mod error;
pub mod bible;
pub mod prompts;
pub mod benedictions;
pub mod steps;
pub mod questions;
pub mod plan;
pub mod config;
pub mod logging;
pub mod journal;
pub mod archive;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bible::{parse_all_references, parse_reference, resolve_book_id};
pub use prompts::{compute_prompts, compute_prompts_for, CATEGORY_NAMES};
pub use benedictions::benediction_for_day;
pub use config::Config;
pub use questions::{default_examination_questions, load_examination_questions};
pub use plan::ReadingPlan;
pub use journal::Journal;
pub use export::session_to_markdown;
