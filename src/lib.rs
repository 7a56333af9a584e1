//! # dsvclip
//!
//! Paste-once DSV engine: paste CSV or spreadsheet TSV a single time, then
//! step through the records and copy field values one at a time, optionally
//! cycling through a chosen subset and order of columns with one action.
//! State can survive a same-tab page navigation via a versioned session
//! payload carried on a host-provided string channel.
//!
//! This crate is the data-handling core only. Rendering, drag-and-drop,
//! hotkey wiring, the real OS clipboard, and the real navigation channel
//! are the hosting UI's job, reached through the narrow [`ClipboardWrite`]
//! and [`SessionChannel`] traits.
//!
//! # Example
//!
//! ```
//! use dsvclip::{DelimiterChoice, Engine, MemoryChannel};
//!
//! let mut channel = MemoryChannel::default();
//! let (mut engine, restored) = Engine::restore(&channel);
//! assert!(!restored);
//!
//! engine
//!     .load("first,last\nAda,Lovelace", DelimiterChoice::Auto)
//!     .unwrap();
//!
//! let mut copied = Vec::new();
//! let mut clipboard = |text: &str| {
//!     copied.push(text.to_string());
//!     true
//! };
//! engine.copy_next(&mut clipboard);
//! engine.copy_next(&mut clipboard);
//! assert_eq!(copied, vec!["Ada", "Lovelace"]);
//!
//! engine.save(&mut channel);
//! let (engine, restored) = Engine::restore(&channel);
//! assert!(restored);
//! assert_eq!(engine.dataset().len(), 1);
//! ```

pub mod clipboard;
pub mod cycle;
pub mod delimiter;
pub mod dsv;
pub mod engine;
pub mod error;
pub mod session;
pub mod types;

pub use clipboard::{ClipboardWrite, TieredClipboard};
pub use cycle::CopyCycle;
pub use delimiter::{detect, Delimiter};
pub use dsv::DsvParser;
pub use engine::{DelimiterChoice, Engine};
pub use error::{ClipError, Result};
pub use session::{MemoryChannel, SessionChannel, SessionCodec, SessionSnapshot};
pub use types::{Dataset, ParsedTable, Record};
