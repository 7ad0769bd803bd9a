//! Conference Core - conference standings from team win/loss listings.
//!
//! Parses lines like `Duke (ACC) 21 11`, groups teams by conference and
//! reports the conference(s) with the highest average win ratio. Optional
//! Python bindings are available through the `python` feature.

pub mod conference;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod selector;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use conference::{ConferenceBucket, ConferenceRegistry, ConferenceSummary};
pub use config::{Config, InputConfig, ReportConfig, SelectionConfig};
pub use constants::{format_ratio, COMMENT_MARKER};
pub use error::{ConferenceError, Result};
pub use pipeline::{
    failure_output, format_report, format_summaries, load_registry, load_registry_from_path,
    preprocess_line, run, FailureOutput, Report,
};
pub use selector::{select_top_conferences, select_top_conferences_with, ConferenceAverage};
pub use team::TeamRecord;
