// model = "claude-opus-4-5"
// created = "2026-07-29"
// modified = "2026-08-01"
// driver = "Isaac Clayton"

//! Gapskip - a bi-modal skip-list text buffer.
//!
//! The buffer is an indexed skip list whose leaves each hold a contiguous run
//! of bytes in one of two modes: a gap buffer while the run is being edited,
//! or a tightly packed buffer for scan-heavy phases. Calling `optimize` packs
//! every leaf; the first edit to a packed leaf transparently unpacks it again.
//!
//! # Quick Start
//!
//! ```
//! use gapskip::text::TextBuf;
//!
//! let mut buf = TextBuf::new();
//! buf.insert(0, b"Hello World!").unwrap();
//! buf.insert(5, b",").unwrap();
//! assert_eq!(buf.to_string_lossy(), "Hello, World!");
//!
//! buf.optimize();
//! assert_eq!(buf.at(7).unwrap(), b'W');
//! ```

pub mod error;
pub mod leaf;
pub mod text;
