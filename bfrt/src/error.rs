/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Error taxonomy.
//!
//! Construction-time failures (`SchemaError`, `FieldValueError`,
//! `NameResolutionError`, `RequestError`) are raised before anything goes
//! on the wire.  `ProtocolError` carries what the peer reported.  Waiting
//! on the notification stream never fails with a timeout: an expired wait
//! is `Ok(None)`.

use proto::bfruntime;

use protobuf::Message;

use std::fmt::{self, Display};

use thiserror::Error;

use crate::schema::MatchKind;
use crate::session::SessionState;

/// gRPC status code for `UNKNOWN`, used by the server for partially failed
/// batches.
pub const GRPC_UNKNOWN: i32 = 2;

/// A malformed or internally inconsistent schema document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document is not JSON of the expected overall shape.
    #[error("{context}: invalid document ({source})")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// A required key is absent.
    #[error("{context}: missing required key \"{key}\"")]
    MissingKey { context: String, key: String },

    /// A key is present but holds the wrong kind of JSON value.
    #[error("{context}: \"{key}\" must be {expected}")]
    WrongType {
        context: String,
        key: String,
        expected: &'static str,
    },

    /// The field type is not one this codec understands.
    #[error("{context}: unknown field type \"{type_name}\"")]
    UnknownFieldType { context: String, type_name: String },

    /// The key match type is not one this codec understands.
    #[error("{context}: unknown match type \"{match_type}\"")]
    UnknownMatchType { context: String, match_type: String },

    /// A data entry is neither plain, `oneof`, nor `singleton`.
    #[error("{context}: malformed data entry ({reason})")]
    MalformedData { context: String, reason: String },

    /// A mandatory field declared with zero width could never be supplied.
    #[error("{context}: mandatory field has zero width")]
    ZeroWidthMandatory { context: String },

    /// The same name is declared twice in one namespace.
    #[error("{context}: \"{name}\" declared more than once")]
    DuplicateName { context: String, name: String },

    /// Two different objects share an id.
    #[error("id {id} is used by both {first} and {second}")]
    DuplicateId {
        id: u32,
        first: String,
        second: String,
    },
}

/// A presentation value that does not fit its field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldValueError {
    /// An integer or byte string has bits set beyond the declared width.
    #[error("field {field}: value does not fit in {bits} bits")]
    Overflow { field: String, bits: u32 },

    /// A negative integer outside of a two's complement mask.
    #[error("field {field}: negative value {value} is not allowed here")]
    Negative { field: String, value: i128 },

    /// A byte string longer than the field.
    #[error("field {field}: {len}-byte value exceeds field size of {size} bytes")]
    Oversize {
        field: String,
        len: usize,
        size: usize,
    },

    /// A string that does not parse as the annotated address format.
    #[error("field {field}: cannot parse \"{value}\" as {format}")]
    BadAddress {
        field: String,
        value: String,
        format: &'static str,
    },

    /// A string supplied for an integer field with no address annotation.
    #[error("field {field}: string values need an ipv4, ipv6 or mac annotation")]
    StringNeedsAnnotation { field: String },

    /// The key shape does not match the declared match kind.
    #[error("field {field}: expected {expected} match, got {actual}")]
    MatchKindMismatch {
        field: String,
        expected: MatchKind,
        actual: MatchKind,
    },

    /// An LPM prefix longer than the field.
    #[error("field {field}: prefix length {prefix_len} exceeds width {bits}")]
    PrefixTooLong {
        field: String,
        prefix_len: u32,
        bits: u32,
    },

    /// The value kind does not match the field type.
    #[error("field {field}: expected {expected}")]
    TypeMismatch { field: String, expected: String },

    /// A string outside the declared choices.
    #[error("field {field}: \"{value}\" is not one of {choices:?}")]
    BadChoice {
        field: String,
        value: String,
        choices: Vec<String>,
    },

    /// A mandatory field is absent or has no value.
    #[error("{field} is mandatory for {scope}")]
    MissingMandatory { field: String, scope: String },

    /// A non-register field supplied more than once.
    #[error("field {field} supplied more than once")]
    Duplicate { field: String },

    /// `set` on a record that does not already hold the field.
    #[error("field {field} is not part of this record")]
    NotInRecord { field: String },

    /// Bytes of a string-typed field that are not UTF-8.
    #[error("field {field}: value is not valid UTF-8")]
    NotText { field: String },
}

/// A name that does not resolve to exactly one object.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NameResolutionError {
    #[error("{kind} \"{name}\" not found in {scope}")]
    NotFound {
        kind: &'static str,
        name: String,
        scope: String,
    },

    #[error("{kind} \"{name}\" is ambiguous in {scope} (could be {candidates})")]
    Ambiguous {
        kind: &'static str,
        name: String,
        scope: String,
        candidates: String,
    },
}

/// A request that cannot be composed from the given records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// `ModIncType` and an explicit `mod_del` flag disagree.
    #[error("contradicting mod_del flags ({explicit} vs {mod_inc})")]
    ContradictingModDel { explicit: bool, mod_inc: bool },

    /// Keys and data records must pair up positionally.
    #[error("{keys} keys but {datas} data records")]
    LengthMismatch { keys: usize, datas: usize },

    /// A keyed entry named an action that is only legal as the default.
    #[error("action {action} of table {table} may only be used as the default action")]
    DefaultOnlyAction { table: String, action: String },

    /// A record built for a different table.
    #[error("record built for {record} cannot be used with table {table}")]
    WrongTable { record: String, table: String },

    /// Binding requires a program name.
    #[error("cannot bind with an empty p4_name")]
    EmptyP4Name,

    #[error("table {table} does not support attribute {attribute} (supported: {supported:?})")]
    UnsupportedAttribute {
        table: String,
        attribute: String,
        supported: Vec<String>,
    },

    #[error("table {table} does not support operation {operation} (supported: {supported:?})")]
    UnsupportedOperation {
        table: String,
        operation: String,
        supported: Vec<String>,
    },

    /// Handle lookups go by key.
    #[error("cannot get handles of {table} with an empty key list")]
    EmptyKeyList { table: String },
}

/// One failed entry of a batched request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryError {
    /// Position of the entry within the batch.
    pub index: usize,
    pub canonical_code: i32,
    pub message: String,
    pub space: String,
    pub code: i32,
}

impl Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at index {}: code {} {}", self.index, self.canonical_code, self.message)
    }
}

/// The peer failed a request or sent something this side cannot use.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// The peer answered with an error status.  For a batch, `entries`
    /// lists the entries that failed.
    #[error("peer returned status {code}: {message}")]
    Status {
        code: i32,
        message: String,
        entries: Vec<EntryError>,
    },

    /// An entity for a table other than the one queried.
    #[error("table ids do not match (received {received}, expected {expected})")]
    TableMismatch { expected: u32, received: u32 },

    /// A wire id with no counterpart in the schema.
    #[error("{kind} id {id} not found in {scope}")]
    UnknownId {
        kind: &'static str,
        id: u32,
        scope: String,
    },

    /// The peer has no pipeline configuration by that name.
    #[error("no bf-rt info received for {0}")]
    NoConfig(String),

    /// A message that is structurally unusable.
    #[error("malformed message ({0})")]
    Malformed(String),

    /// The stream channel closed underneath the session.
    #[error("stream channel closed")]
    StreamClosed,

    /// Connection-level failure below the RPC layer.
    #[error("transport failure ({0})")]
    Transport(String),
}

impl ProtocolError {
    /// Builds a `Status` error from a gRPC status.  `details` is the binary
    /// `grpc-status-details-bin` payload: a serialized `Status` whose details
    /// each hold one serialized `Error`.  Only `UNKNOWN` failures carry a
    /// per-entry breakdown, and entries whose canonical code is OK are
    /// dropped.
    pub fn from_status(code: i32, message: &str, details: &[u8]) -> Self {
        let entries = if code == GRPC_UNKNOWN {
            parse_entry_errors(details).unwrap_or_default()
        } else {
            Vec::new()
        };
        ProtocolError::Status {
            code,
            message: message.to_string(),
            entries,
        }
    }

    /// Per-entry failures, empty for anything but a batch status.
    pub fn entries(&self) -> &[EntryError] {
        match self {
            ProtocolError::Status { entries, .. } => entries,
            _ => &[],
        }
    }
}

fn parse_entry_errors(details: &[u8]) -> Option<Vec<EntryError>> {
    if details.is_empty() {
        return None;
    }
    let status = bfruntime::Status::parse_from_bytes(details).ok()?;
    let mut entries = Vec::new();
    for (index, detail) in status.get_details().iter().enumerate() {
        let error = bfruntime::Error::parse_from_bytes(detail.get_value()).ok()?;
        if error.canonical_code == 0 {
            continue;
        }
        entries.push(EntryError {
            index,
            canonical_code: error.canonical_code,
            message: error.message.clone(),
            space: error.space.clone(),
            code: error.code,
        });
    }
    Some(entries)
}

/// Any failure of this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    FieldValue(#[from] FieldValueError),

    #[error(transparent)]
    NameResolution(#[from] NameResolutionError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Write and read calls need a session in the `Ready` state.
    #[error("session is {0}, not ready")]
    NotReady(SessionState),

    /// No acknowledgement with an OK status within the retry budget.
    #[error("failed to subscribe after {0} attempts")]
    SubscribeFailed(u32),

    /// Table access before `bfrt_info_get`.
    #[error("no bf-rt info loaded")]
    NoSchema,

    /// Invalid session configuration.
    #[error("invalid configuration ({0})")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use protobuf::RepeatedField;

    fn status_details(codes: &[i32]) -> Vec<u8> {
        let details = codes
            .iter()
            .map(|&canonical_code| {
                let mut error = bfruntime::Error::new();
                error.set_canonical_code(canonical_code);
                error.set_message(format!("code {}", canonical_code));
                let mut detail = bfruntime::StatusDetail::new();
                detail.set_type_url("type.googleapis.com/bfrt_proto.Error".to_string());
                detail.set_value(error.write_to_bytes().unwrap());
                detail
            })
            .collect();
        let mut status = bfruntime::Status::new();
        status.set_code(GRPC_UNKNOWN);
        status.set_details(RepeatedField::from_vec(details));
        status.write_to_bytes().unwrap()
    }

    #[test]
    fn batch_status_keeps_failed_entries() {
        let error = ProtocolError::from_status(GRPC_UNKNOWN, "batch failed", &status_details(&[0, 6, 0, 5]));
        let entries = error.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].index, entries[0].canonical_code), (1, 6));
        assert_eq!((entries[1].index, entries[1].canonical_code), (3, 5));
        assert_eq!(entries[1].message, "code 5");
    }

    #[test]
    fn other_codes_have_no_breakdown() {
        let error = ProtocolError::from_status(5, "not found", &status_details(&[6]));
        assert!(error.entries().is_empty());
        assert_eq!(error.to_string(), "peer returned status 5: not found");
    }

    #[test]
    fn garbage_details_are_ignored() {
        let error = ProtocolError::from_status(GRPC_UNKNOWN, "batch failed", &[0xff, 0xff, 0xff]);
        assert!(error.entries().is_empty());
    }
}
