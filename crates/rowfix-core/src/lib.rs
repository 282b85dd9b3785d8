//! # rowfix-core
//!
//! Row-transformation engine for delimited (CSV-like) text.
//!
//! Input is a header line followed by data rows. Each column's heading
//! selects a transform (timestamp timezone shift, zip-code padding, name
//! uppercasing, duration accumulation) applied to that column's fields.
//! Quoted fields are masked before splitting so embedded separators
//! survive, and a row whose transform fails is skipped and reported on
//! the error sink without aborting the run.
//!
//! ## Example
//!
//! ```
//! use rowfix_core::engine::run;
//!
//! let input = "ID,LastName,HomeZIP\n7,\"de la Cruz, Ana\",42\n";
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! run(input.as_bytes(), &mut out, &mut err).unwrap();
//! assert_eq!(out, b"ID,LastName,HomeZIP\n7,\"DE LA CRUZ, ANA\",00042\n");
//! assert!(err.is_empty());
//! ```

pub mod duration;
pub mod engine;
pub mod error;
pub mod quote;
pub mod transform;

pub use duration::{DurationAccumulator, parse_duration};
pub use engine::{RunSummary, SEPARATOR, run};
pub use error::{EngineError, TransformError};
pub use quote::{QuotedFieldStore, mask, unmask};
pub use transform::{ColumnRule, RowState, apply};
