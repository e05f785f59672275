//! Utility functions shared by the index and the CLI.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file and index directory resolution
//! - [`encoding`] - Double-byte lead detection and fixed-width integers
//! - [`progress`] - Progress bars that vanish without the `progress` feature
//! - [`tokenizer`] - Indexable position filter
//!
//! ## Key Functions
//!
//! ```no_run
//! use sacount::utils::{indexable_positions, Encoding};
//!
//! let positions: Vec<usize> = indexable_positions(b"a b", Encoding::ShiftJis).collect();
//! // Returns: [0, 2]
//! ```

pub mod app_data;
pub mod encoding;
pub mod progress;
pub mod tokenizer;

pub use app_data::*;
pub use encoding::*;
pub use tokenizer::*;
