//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_definition, print_process_report, print_stats, print_word_list, print_word_report,
};
