//! The engine instance owning dataset, copy-cycle, and preferences
//!
//! One `Engine` per page, constructed by the hosting UI. All mutation
//! goes through methods on this object; there is no ambient state, so
//! multiple independent instances and deterministic tests both work.

use std::str::FromStr;

use crate::clipboard::ClipboardWrite;
use crate::cycle::CopyCycle;
use crate::delimiter::{detect, Delimiter};
use crate::dsv::DsvParser;
use crate::error::{ClipError, Result};
use crate::session::{SessionChannel, SessionCodec, SessionSnapshot};
use crate::types::Dataset;

/// How the delimiter is picked at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterChoice {
    /// Infer from the pasted text via [`detect`]
    Auto,
    /// Use this delimiter regardless of content
    Fixed(Delimiter),
}

impl FromStr for DelimiterChoice {
    type Err = ClipError;

    /// Accepts `auto` or one of the candidate characters (`,` tab `;` `|`)
    fn from_str(s: &str) -> Result<Self> {
        if s == "auto" {
            return Ok(DelimiterChoice::Auto);
        }
        let mut chars = s.chars();
        match (chars.next().and_then(Delimiter::from_char), chars.next()) {
            (Some(delim), None) => Ok(DelimiterChoice::Fixed(delim)),
            _ => Err(ClipError::UnknownDelimiter(s.to_string())),
        }
    }
}

/// Paste-once, copy-field-by-field engine
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    dataset: Dataset,
    cycle: CopyCycle,
    return_url: String,
    hotkeys_in_inputs: bool,
    keep_on_reload: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Fresh engine with nothing loaded; hotkeys-in-inputs and
    /// keep-on-reload both default on
    pub fn new() -> Self {
        Engine {
            dataset: Dataset::default(),
            cycle: CopyCycle::default(),
            return_url: String::new(),
            hotkeys_in_inputs: true,
            keep_on_reload: true,
        }
    }

    /// Construct an engine at page load, restoring a prior session if the
    /// channel carries one
    ///
    /// The second value reports whether anything was restored, for a
    /// "restored session" indicator. Runs once, before the UI is shown.
    pub fn restore(channel: &dyn SessionChannel) -> (Self, bool) {
        match SessionCodec::restore(channel) {
            Some(snapshot) => {
                log::debug!(
                    "restored session: {} records, cursor {}",
                    snapshot.dataset.len(),
                    snapshot.dataset.cursor()
                );
                let mut engine = Engine::new();
                engine.cycle = CopyCycle::new(snapshot.selection);
                engine.dataset = snapshot.dataset;
                engine.return_url = snapshot.return_url;
                engine.hotkeys_in_inputs = snapshot.hotkeys_in_inputs;
                (engine, true)
            }
            None => (Engine::new(), false),
        }
    }

    /// Load pasted text, replacing the current dataset
    ///
    /// Returns [`ClipError::NoRows`] and leaves live state untouched when
    /// the text yields no data rows. On success the cursor is at the first
    /// record and the selection is reinitialized to the full header, which
    /// keeps stale-column references rare.
    pub fn load(&mut self, raw: &str, choice: DelimiterChoice) -> Result<()> {
        let delimiter = match choice {
            DelimiterChoice::Auto => detect(raw),
            DelimiterChoice::Fixed(delim) => delim,
        };
        let table = DsvParser::new(delimiter).parse(raw);
        if table.is_empty() {
            return Err(ClipError::NoRows);
        }
        self.dataset = Dataset::new(delimiter, table);
        self.cycle = CopyCycle::new(self.dataset.header().to_vec());
        Ok(())
    }

    /// The loaded dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The copy-cycle state
    pub fn cycle(&self) -> &CopyCycle {
        &self.cycle
    }

    /// Move to the next record; any actual move restarts the cycle
    pub fn next_record(&mut self) -> bool {
        let moved = self.dataset.advance();
        if moved {
            self.cycle.reset();
        }
        moved
    }

    /// Move to the previous record; any actual move restarts the cycle
    pub fn prev_record(&mut self) -> bool {
        let moved = self.dataset.retreat();
        if moved {
            self.cycle.reset();
        }
        moved
    }

    /// Add `name` to the cycle selection, or remove it if present
    pub fn toggle_column(&mut self, name: &str) {
        self.cycle.toggle(name);
    }

    /// Move a selection entry from one position to another
    pub fn reorder_selection(&mut self, from: usize, to: usize) -> bool {
        self.cycle.reorder(from, to)
    }

    /// Replace the cycle selection wholesale
    pub fn set_selection(&mut self, names: Vec<String>) {
        self.cycle.set_selection(names);
    }

    /// Copy the next field in the cycle from the current record
    ///
    /// `None` when there is no current record or the selection is empty;
    /// otherwise the clipboard outcome for the field that was copied.
    pub fn copy_next(&mut self, clipboard: &mut dyn ClipboardWrite) -> Option<bool> {
        let record = self.dataset.current()?;
        let value = self.cycle.advance(record)?;
        Some(clipboard.write(&value))
    }

    /// Copy one named field of the current record (outside the cycle)
    ///
    /// A missing record or column copies the empty string.
    pub fn copy_field(&self, name: &str, clipboard: &mut dyn ClipboardWrite) -> bool {
        clipboard.write(self.dataset.field(name))
    }

    /// Wipe the dataset and selection; preferences survive
    pub fn clear(&mut self) {
        self.dataset = Dataset::default();
        self.cycle = CopyCycle::default();
    }

    /// The stored quick-return URL
    pub fn return_url(&self) -> &str {
        &self.return_url
    }

    /// Store a quick-return URL (trimmed; navigation is the host's job)
    pub fn set_return_url(&mut self, url: &str) {
        self.return_url = url.trim().to_string();
    }

    /// Whether hotkeys stay active while focus is in a text field
    pub fn hotkeys_in_inputs(&self) -> bool {
        self.hotkeys_in_inputs
    }

    /// Set the hotkeys-in-inputs preference
    pub fn set_hotkeys_in_inputs(&mut self, enabled: bool) {
        self.hotkeys_in_inputs = enabled;
    }

    /// Whether state is persisted to the channel on save
    pub fn keep_on_reload(&self) -> bool {
        self.keep_on_reload
    }

    /// Toggle session keeping; turning it off scrubs the channel now,
    /// turning it on saves immediately
    pub fn set_keep_on_reload(&mut self, keep: bool, channel: &mut dyn SessionChannel) {
        self.keep_on_reload = keep;
        if keep {
            self.save(channel);
        } else {
            SessionCodec::clear(channel);
        }
    }

    /// Current state as a session snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            dataset: self.dataset.clone(),
            selection: self.cycle.selection().to_vec(),
            return_url: self.return_url.clone(),
            hotkeys_in_inputs: self.hotkeys_in_inputs,
        }
    }

    /// Persist the current state to the channel
    ///
    /// Call after every mutating action and once more on page unload.
    /// No-op while keep-on-reload is off.
    pub fn save(&self, channel: &mut dyn SessionChannel) {
        if !self.keep_on_reload {
            return;
        }
        SessionCodec::save(channel, &self.snapshot());
    }
}
