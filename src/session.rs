//! Versioned session snapshots carried across a navigation boundary
//!
//! The host exposes a single per-tab string that survives same-tab
//! navigation. The codec owns only a clearly delimited suffix of that
//! string, marked by a private sentinel; anything already stored before
//! the sentinel is preserved untouched. The payload itself is
//! percent-encoded JSON tagged with a schema version.

use serde_json::{json, Value};

use crate::delimiter::Delimiter;
use crate::types::{Dataset, Record};

/// Marker splitting this crate's payload from unrelated channel content
pub const SENTINEL: &str = "||DC=";

/// Schema version written by [`SessionCodec::encode`]
pub const SCHEMA_VERSION: u64 = 2;

/// Abstract per-tab string the payload rides on
///
/// Implement this over whatever per-session storage primitive the host
/// platform offers. Content is opaque to the host; the codec splits on
/// [`SENTINEL`] and coexists with anything stored before it.
pub trait SessionChannel {
    /// Current channel content
    fn read(&self) -> String;
    /// Replace the channel content wholesale
    fn write(&mut self, value: String);
}

/// In-memory channel for tests and embedders without a host primitive
#[derive(Debug, Clone, Default)]
pub struct MemoryChannel {
    value: String,
}

impl MemoryChannel {
    /// Channel starting with existing (possibly unrelated) content
    pub fn with_content(value: impl Into<String>) -> Self {
        MemoryChannel {
            value: value.into(),
        }
    }
}

impl SessionChannel for MemoryChannel {
    fn read(&self) -> String {
        self.value.clone()
    }

    fn write(&mut self, value: String) {
        self.value = value;
    }
}

/// Everything the engine persists across a navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Parsed data plus cursor position
    pub dataset: Dataset,
    /// Copy-cycle selection (the pointer is not persisted; a restored
    /// session restarts its cycle at the first selected field)
    pub selection: Vec<String>,
    /// Freeform quick-return URL, empty when unset
    pub return_url: String,
    /// Whether hotkeys stay active while focus is in a text field
    pub hotkeys_in_inputs: bool,
}

/// Encoder/decoder for the versioned session payload
///
/// Decoding is deliberately duck-typed: the serialized payload is a
/// transient external artifact the engine does not own between page
/// loads, so every field is re-validated independently and a partially
/// corrupt payload still yields a best-effort state. Nothing here
/// panics; every failure degrades to "no prior state".
pub struct SessionCodec;

impl SessionCodec {
    /// Serialize a snapshot to the transport-safe payload string
    pub fn encode(snapshot: &SessionSnapshot) -> String {
        let payload = json!({
            "version": SCHEMA_VERSION,
            "delimiter": snapshot.dataset.delimiter().as_char().to_string(),
            "header": snapshot.dataset.header(),
            "records": snapshot.dataset.records(),
            "cursor": snapshot.dataset.cursor(),
            "selection": snapshot.selection,
            "returnURL": snapshot.return_url,
            "hotkeysInInputs": snapshot.hotkeys_in_inputs,
        });
        urlencoding::encode(&payload.to_string()).into_owned()
    }

    /// Parse a payload string back into a snapshot
    ///
    /// Returns `None` for undecodable text, non-JSON, an unsupported
    /// schema version, or a payload that is empty in substance (no
    /// records and no return URL). Individual bad fields fall back to
    /// their defaults instead of rejecting the whole payload.
    pub fn decode(encoded: &str) -> Option<SessionSnapshot> {
        let text = urlencoding::decode(encoded).ok()?;
        let value: Value = serde_json::from_str(&text).ok()?;
        let obj = value.as_object()?;

        let version = obj.get("version").and_then(Value::as_u64)?;
        if version != 1 && version != 2 {
            log::debug!("discarding session payload with unsupported version {version}");
            return None;
        }

        let delimiter = obj
            .get("delimiter")
            .and_then(Value::as_str)
            .and_then(|s| s.chars().next())
            .and_then(Delimiter::from_char)
            .unwrap_or_default();

        let header: Vec<String> = obj
            .get("header")
            .and_then(Value::as_array)
            .map(|cells| {
                cells
                    .iter()
                    .filter_map(|cell| cell.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let records: Vec<Record> = obj
            .get("records")
            .and_then(Value::as_array)
            .map(|rows| {
                rows.iter()
                    .filter_map(Value::as_object)
                    .map(|row| {
                        row.iter()
                            .map(|(name, cell)| {
                                (name.clone(), cell.as_str().unwrap_or_default().to_string())
                            })
                            .collect()
                    })
                    .collect()
            })
            .unwrap_or_default();

        let cursor = obj
            .get("cursor")
            .and_then(Value::as_u64)
            .map(|c| c as usize)
            .unwrap_or(0);

        let mut selection: Vec<String> = obj
            .get("selection")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| name.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();
        if selection.is_empty() {
            selection = header.clone();
        }

        // v1 payloads lack both of these; defaults preserve v1 behavior
        let return_url = obj
            .get("returnURL")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let hotkeys_in_inputs = obj
            .get("hotkeysInInputs")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        if records.is_empty() && return_url.is_empty() {
            // Technically parsed, but nothing worth restoring
            return None;
        }

        Some(SessionSnapshot {
            dataset: Dataset::from_parts(delimiter, header, records, cursor),
            selection,
            return_url,
            hotkeys_in_inputs,
        })
    }

    /// Write a snapshot into the channel, preserving any prefix content
    pub fn save(channel: &mut dyn SessionChannel, snapshot: &SessionSnapshot) {
        let current = channel.read();
        let base = current.split(SENTINEL).next().unwrap_or_default().to_string();
        channel.write(format!("{}{}{}", base, SENTINEL, Self::encode(snapshot)));
    }

    /// Read and decode the channel's payload suffix, if present
    pub fn restore(channel: &dyn SessionChannel) -> Option<SessionSnapshot> {
        let current = channel.read();
        let start = current.find(SENTINEL)?;
        let encoded = &current[start + SENTINEL.len()..];
        if encoded.is_empty() {
            return None;
        }
        Self::decode(encoded)
    }

    /// Strip this crate's suffix from the channel, keeping the prefix
    pub fn clear(channel: &mut dyn SessionChannel) {
        let current = channel.read();
        let base = current.split(SENTINEL).next().unwrap_or_default().to_string();
        channel.write(base);
    }
}
