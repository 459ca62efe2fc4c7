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

//! Validated key and data records.
//!
//! Records are built against the schema with `make_key` and `make_data`,
//! which resolve names, check shapes, and encode every value up front, so
//! an invalid record never reaches the wire.  After construction a record
//! can only have existing fields replaced through `set`.

use proto::bfruntime;

use protobuf::RepeatedField;

use std::cmp::Ordering;
use std::collections::btree_map::{BTreeMap, Entry};
use std::convert::{Infallible, TryFrom};

use crate::codec::{self, FieldSize, Presentation, Value};
use crate::error::{FieldValueError, NameResolutionError, ProtocolError, Result};
use crate::schema::{ActionInfo, DataFields, DataInfo, DataScope, FieldType, KeyInfo, MatchKind, TableInfo};

/// A key field value in the shape of its match kind.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Match<T> {
    Exact { value: T },
    Ternary { value: T, mask: T },
    Lpm { value: T, prefix_len: u32 },
    Range { low: T, high: T },
    Optional { value: T, is_valid: bool },
}

impl<T> Match<T> {
    pub fn kind(&self) -> MatchKind {
        match self {
            Match::Exact { .. } => MatchKind::Exact,
            Match::Ternary { .. } => MatchKind::Ternary,
            Match::Lpm { .. } => MatchKind::Lpm,
            Match::Range { .. } => MatchKind::Range,
            Match::Optional { .. } => MatchKind::Optional,
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Match<U> {
        match self.try_map(|v| Ok::<U, Infallible>(f(v))) {
            Ok(m) => m,
            Err(never) => match never {},
        }
    }

    pub fn try_map<U, E, F>(&self, mut f: F) -> std::result::Result<Match<U>, E>
    where
        F: FnMut(&T) -> std::result::Result<U, E>,
    {
        Ok(match self {
            Match::Exact { value } => Match::Exact { value: f(value)? },
            Match::Ternary { value, mask } => Match::Ternary {
                value: f(value)?,
                mask: f(mask)?,
            },
            Match::Lpm { value, prefix_len } => Match::Lpm {
                value: f(value)?,
                prefix_len: *prefix_len,
            },
            Match::Range { low, high } => Match::Range {
                low: f(low)?,
                high: f(high)?,
            },
            Match::Optional { value, is_valid } => Match::Optional {
                value: f(value)?,
                is_valid: *is_valid,
            },
        })
    }
}

/// One caller-supplied key component.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyField {
    pub name: String,
    pub value: Match<Value>,
}

impl KeyField {
    pub fn exact(name: &str, value: impl Into<Value>) -> Self {
        KeyField {
            name: name.to_string(),
            value: Match::Exact { value: value.into() },
        }
    }

    /// `mask` may be a negative integer, taken as two's complement.
    pub fn ternary(name: &str, value: impl Into<Value>, mask: impl Into<Value>) -> Self {
        KeyField {
            name: name.to_string(),
            value: Match::Ternary {
                value: value.into(),
                mask: mask.into(),
            },
        }
    }

    pub fn lpm(name: &str, value: impl Into<Value>, prefix_len: u32) -> Self {
        KeyField {
            name: name.to_string(),
            value: Match::Lpm {
                value: value.into(),
                prefix_len,
            },
        }
    }

    pub fn range(name: &str, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        KeyField {
            name: name.to_string(),
            value: Match::Range {
                low: low.into(),
                high: high.into(),
            },
        }
    }

    pub fn optional(name: &str, value: impl Into<Value>, is_valid: bool) -> Self {
        KeyField {
            name: name.to_string(),
            value: Match::Optional {
                value: value.into(),
                is_valid,
            },
        }
    }
}

/// An encoded key component.  String-typed components hold UTF-8.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyEntry {
    pub value: Match<Vec<u8>>,
    pub field_id: u32,
    pub field_type: FieldType,
    pub size: Option<FieldSize>,
    pub presentation: Presentation,
}

impl KeyEntry {
    fn new(info: &KeyInfo, value: Match<Vec<u8>>) -> Self {
        KeyEntry {
            value,
            field_id: info.id,
            field_type: info.field_type.clone(),
            size: info.size(),
            presentation: info.presentation(),
        }
    }

    pub fn present(&self) -> Match<Value> {
        match self.field_type {
            FieldType::Str { .. } => self
                .value
                .map(|bytes| Value::Str(String::from_utf8_lossy(bytes).into_owned())),
            _ => self.value.map(|bytes| codec::decode(bytes, self.presentation)),
        }
    }
}

/// A validated match key.  Fields are keyed by canonical name, so records
/// order by field name, then value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyRecord {
    fields: BTreeMap<String, KeyEntry>,
    table: String,
    table_id: u32,
}

fn encode_key(info: &KeyInfo, value: &Match<Value>) -> std::result::Result<Match<Vec<u8>>, FieldValueError> {
    if value.kind() != info.match_kind {
        return Err(FieldValueError::MatchKindMismatch {
            field: info.name.clone(),
            expected: info.match_kind,
            actual: value.kind(),
        });
    }
    if let FieldType::Str { choices } = &info.field_type {
        value.try_map(|v| match v {
            Value::Str(s) => check_choice(&info.name, choices, s),
            _ => Err(FieldValueError::TypeMismatch {
                field: info.name.clone(),
                expected: info.field_type.to_string(),
            }),
        })?;
    }
    let size = info.size();
    let presentation = info.presentation();
    if let (Match::Lpm { prefix_len, .. }, Some(size)) = (value, size) {
        if *prefix_len > size.bits {
            return Err(FieldValueError::PrefixTooLong {
                field: info.name.clone(),
                prefix_len: *prefix_len,
                bits: size.bits,
            });
        }
    }
    match value {
        Match::Ternary { value, mask } => Ok(Match::Ternary {
            value: codec::encode(&info.name, value, size, presentation)?,
            mask: codec::encode_masked(&info.name, mask, size, presentation)?,
        }),
        other => other.try_map(|v| codec::encode(&info.name, v, size, presentation)),
    }
}

/// Builds a key for `table`.  Every mandatory key field must be present
/// except the member and group ids of indirect tables.
pub fn make_key(table: &TableInfo, fields: Vec<KeyField>) -> Result<KeyRecord> {
    let mut record = KeyRecord {
        fields: BTreeMap::new(),
        table: table.name.clone(),
        table_id: table.id,
    };
    for field in fields {
        let info = table.key(&field.name)?;
        let entry = KeyEntry::new(info, encode_key(info, &field.value)?);
        match record.fields.entry(info.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(_) => {
                return Err(FieldValueError::Duplicate {
                    field: info.name.clone(),
                }
                .into())
            }
        }
    }
    if let Some(missing) = table.required_keys().find(|k| !record.fields.contains_key(&k.name)) {
        return Err(FieldValueError::MissingMandatory {
            field: missing.name.clone(),
            scope: table.name.clone(),
        }
        .into());
    }
    Ok(record)
}

impl KeyRecord {
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn table_id(&self) -> u32 {
        self.table_id
    }

    pub fn get(&self, name: &str) -> Option<&KeyEntry> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &KeyEntry)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Replaces the value of a field the record already holds.
    pub fn set(&mut self, table: &TableInfo, field: KeyField) -> Result<()> {
        let info = table.key(&field.name)?;
        let value = encode_key(info, &field.value)?;
        match self.fields.get_mut(&info.name) {
            Some(entry) => {
                entry.value = value;
                Ok(())
            }
            None => Err(FieldValueError::NotInRecord { field: info.name.clone() }.into()),
        }
    }

    /// ANDs ternary values with their masks and LPM values with their
    /// prefix masks, matching what the device reports back.
    pub fn apply_mask(&mut self) {
        for entry in self.fields.values_mut() {
            match &mut entry.value {
                Match::Ternary { value, mask } => *value = codec::mask_bytes(value, mask),
                Match::Lpm { value, prefix_len } => {
                    if let Some(size) = entry.size {
                        *value = codec::mask_bytes(value, &codec::prefix_mask(*prefix_len, size));
                    }
                }
                _ => (),
            }
        }
    }

    pub fn to_presentation(&self) -> BTreeMap<String, Match<Value>> {
        self.fields
            .iter()
            .map(|(name, entry)| (name.clone(), entry.present()))
            .collect()
    }

    pub fn to_proto(&self) -> bfruntime::TableKey {
        let fields = self
            .fields
            .values()
            .map(|entry| {
                let mut field = bfruntime::KeyField::new();
                field.set_field_id(entry.field_id);
                match &entry.value {
                    Match::Exact { value } => {
                        let mut m = bfruntime::KeyField_Exact::new();
                        m.set_value(value.clone());
                        field.set_exact(m);
                    }
                    Match::Ternary { value, mask } => {
                        let mut m = bfruntime::KeyField_Ternary::new();
                        m.set_value(value.clone());
                        m.set_mask(mask.clone());
                        field.set_ternary(m);
                    }
                    Match::Lpm { value, prefix_len } => {
                        let mut m = bfruntime::KeyField_LPM::new();
                        m.set_value(value.clone());
                        m.set_prefix_len(*prefix_len as i32);
                        field.set_lpm(m);
                    }
                    Match::Range { low, high } => {
                        let mut m = bfruntime::KeyField_Range::new();
                        m.set_low(low.clone());
                        m.set_high(high.clone());
                        field.set_range(m);
                    }
                    Match::Optional { value, is_valid } => {
                        let mut m = bfruntime::KeyField_Optional::new();
                        m.set_value(value.clone());
                        m.set_is_valid(*is_valid);
                        field.set_optional(m);
                    }
                }
                field
            })
            .collect();
        let mut key = bfruntime::TableKey::new();
        key.set_fields(RepeatedField::from_vec(fields));
        key
    }

    /// Decodes a key received from the device.  Mandatory fields are not
    /// checked: the device may report any subset.
    pub fn from_proto(table: &TableInfo, key: &bfruntime::TableKey) -> std::result::Result<Self, ProtocolError> {
        use bfruntime::KeyField_oneof_match_type as M;

        let mut fields = BTreeMap::new();
        for field in key.get_fields() {
            let info = table.key_by_id(field.get_field_id()).ok_or_else(|| ProtocolError::UnknownId {
                kind: "key field",
                id: field.get_field_id(),
                scope: table.name.clone(),
            })?;
            let size = info.size();
            let fit = |bytes: &[u8]| codec::normalize(bytes, size);
            let value = match &field.match_type {
                Some(M::exact(m)) => Match::Exact {
                    value: fit(m.get_value()),
                },
                Some(M::ternary(m)) => Match::Ternary {
                    value: fit(m.get_value()),
                    mask: fit(m.get_mask()),
                },
                Some(M::lpm(m)) => Match::Lpm {
                    value: fit(m.get_value()),
                    prefix_len: u32::try_from(m.get_prefix_len()).map_err(|_| {
                        ProtocolError::Malformed(format!("negative prefix length for {}", info.name))
                    })?,
                },
                Some(M::range(m)) => Match::Range {
                    low: fit(m.get_low()),
                    high: fit(m.get_high()),
                },
                Some(M::optional(m)) => Match::Optional {
                    value: fit(m.get_value()),
                    is_valid: m.get_is_valid(),
                },
                None => {
                    return Err(ProtocolError::Malformed(format!("key field {} carries no value", info.name)));
                }
            };
            if let FieldType::Str { .. } = info.field_type {
                value
                    .try_map(|bytes| codec::decode_text(&info.name, bytes))
                    .map_err(|e| ProtocolError::Malformed(e.to_string()))?;
            }
            fields.insert(info.name.clone(), KeyEntry::new(info, value));
        }
        Ok(KeyRecord {
            fields,
            table: table.name.clone(),
            table_id: table.id,
        })
    }
}

/// A caller-supplied data value.
#[derive(Clone, Debug, PartialEq)]
pub enum DataValue {
    /// Integer, byte string or address for a sized field.
    Value(Value),
    Float(f32),
    Bool(bool),
    Str(String),
    IntArray(Vec<u32>),
    BoolArray(Vec<bool>),
    StrArray(Vec<String>),
    /// One field list per container instance.
    Containers(Vec<Vec<DataField>>),
}

/// One caller-supplied data field.  A field without a value is only
/// accepted in read filters.
#[derive(Clone, Debug, PartialEq)]
pub struct DataField {
    pub name: String,
    pub value: Option<DataValue>,
}

impl DataField {
    fn with(name: &str, value: DataValue) -> Self {
        DataField {
            name: name.to_string(),
            value: Some(value),
        }
    }

    pub fn value(name: &str, value: impl Into<Value>) -> Self {
        DataField::with(name, DataValue::Value(value.into()))
    }

    pub fn float(name: &str, value: f32) -> Self {
        DataField::with(name, DataValue::Float(value))
    }

    pub fn boolean(name: &str, value: bool) -> Self {
        DataField::with(name, DataValue::Bool(value))
    }

    pub fn string(name: &str, value: &str) -> Self {
        DataField::with(name, DataValue::Str(value.to_string()))
    }

    pub fn int_array(name: &str, values: Vec<u32>) -> Self {
        DataField::with(name, DataValue::IntArray(values))
    }

    pub fn bool_array(name: &str, values: Vec<bool>) -> Self {
        DataField::with(name, DataValue::BoolArray(values))
    }

    pub fn str_array(name: &str, values: Vec<String>) -> Self {
        DataField::with(name, DataValue::StrArray(values))
    }

    pub fn containers(name: &str, items: Vec<Vec<DataField>>) -> Self {
        DataField::with(name, DataValue::Containers(items))
    }

    pub fn name_only(name: &str) -> Self {
        DataField {
            name: name.to_string(),
            value: None,
        }
    }
}

/// An encoded data value.
#[derive(Clone, Debug)]
pub enum DataFieldValue {
    /// Name-only read filter.
    Empty,
    Stream(Vec<u8>),
    /// Register data, one element per pipe.
    Registers(Vec<Vec<u8>>),
    Float(f32),
    Bool(bool),
    Str(String),
    IntArray(Vec<u32>),
    BoolArray(Vec<bool>),
    StrArray(Vec<String>),
    Containers(Vec<BTreeMap<String, DataEntry>>),
}

impl DataFieldValue {
    fn rank(&self) -> u8 {
        use DataFieldValue::*;
        match self {
            Empty => 0,
            Stream(_) => 1,
            Registers(_) => 2,
            Float(_) => 3,
            Bool(_) => 4,
            Str(_) => 5,
            IntArray(_) => 6,
            BoolArray(_) => 7,
            StrArray(_) => 8,
            Containers(_) => 9,
        }
    }
}

impl Ord for DataFieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use DataFieldValue::*;
        match (self, other) {
            (Stream(a), Stream(b)) => a.cmp(b),
            (Registers(a), Registers(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (IntArray(a), IntArray(b)) => a.cmp(b),
            (BoolArray(a), BoolArray(b)) => a.cmp(b),
            (StrArray(a), StrArray(b)) => a.cmp(b),
            (Containers(a), Containers(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for DataFieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DataFieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DataFieldValue {}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DataEntry {
    pub value: DataFieldValue,
    pub field_id: u32,
    pub presentation: Presentation,
}

/// A data field rendered for callers.
#[derive(Clone, Debug, PartialEq)]
pub enum Presented {
    Empty,
    Value(Value),
    Registers(Vec<Value>),
    Float(f32),
    Bool(bool),
    Str(String),
    IntArray(Vec<u32>),
    BoolArray(Vec<bool>),
    StrArray(Vec<String>),
    Containers(Vec<BTreeMap<String, Presented>>),
}

/// A validated action or learn payload.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DataRecord {
    fields: BTreeMap<String, DataEntry>,
    action: Option<(String, u32)>,
    is_default_entry: bool,
    scope: String,
    scope_id: u32,
}

/// The namespace a list of data fields is resolved in.
trait FieldSource {
    fn by_name(&self, name: &str) -> std::result::Result<&DataInfo, NameResolutionError>;
    fn by_id(&self, id: u32) -> Option<&DataInfo>;
}

struct ScopeFields<'a, S> {
    scope: &'a S,
    action: Option<&'a ActionInfo>,
}

impl<'a, S: DataScope> FieldSource for ScopeFields<'a, S> {
    fn by_name(&self, name: &str) -> std::result::Result<&DataInfo, NameResolutionError> {
        self.scope.data_field(name, self.action)
    }

    fn by_id(&self, id: u32) -> Option<&DataInfo> {
        self.scope.data_field_by_id(id, self.action)
    }
}

struct ContainerFields<'a> {
    fields: &'a DataFields,
    name: &'a str,
}

impl<'a> FieldSource for ContainerFields<'a> {
    fn by_name(&self, name: &str) -> std::result::Result<&DataInfo, NameResolutionError> {
        self.fields
            .resolve(name)
            .into_result("data field", name, self.name)
            .map(|(_, d)| d)
    }

    fn by_id(&self, id: u32) -> Option<&DataInfo> {
        self.fields.by_id(id)
    }
}

fn check_choice(field: &str, choices: &[String], value: &str) -> std::result::Result<(), FieldValueError> {
    if choices.is_empty() || choices.iter().any(|c| c == value) {
        Ok(())
    } else {
        Err(FieldValueError::BadChoice {
            field: field.to_string(),
            value: value.to_string(),
            choices: choices.to_vec(),
        })
    }
}

fn encode_value(info: &DataInfo, value: DataValue, is_get: bool) -> Result<DataFieldValue> {
    let mismatch = || FieldValueError::TypeMismatch {
        field: info.name.clone(),
        expected: if info.repeated {
            format!("repeated {}", info.field_type)
        } else {
            info.field_type.to_string()
        },
    };
    let value = match (&info.field_type, value) {
        (FieldType::Container, DataValue::Containers(items)) => {
            let inner = info.container.as_ref().ok_or_else(mismatch)?;
            let source = ContainerFields {
                fields: inner,
                name: &info.name,
            };
            let items = items
                .into_iter()
                .map(|item| encode_fields(&source, item, is_get))
                .collect::<Result<Vec<_>>>()?;
            DataFieldValue::Containers(items)
        }
        (FieldType::Float, DataValue::Float(x)) => DataFieldValue::Float(x),
        (FieldType::Bool, DataValue::Bool(b)) => DataFieldValue::Bool(b),
        (FieldType::Bool, DataValue::BoolArray(list)) if info.repeated => DataFieldValue::BoolArray(list),
        (FieldType::Str { choices }, DataValue::Str(s))
        | (FieldType::Str { choices }, DataValue::Value(Value::Str(s))) => {
            check_choice(&info.name, choices, &s)?;
            DataFieldValue::Str(s)
        }
        (FieldType::Str { choices }, DataValue::StrArray(list)) if info.repeated => {
            for s in &list {
                check_choice(&info.name, choices, s)?;
            }
            DataFieldValue::StrArray(list)
        }
        (t, DataValue::IntArray(list)) if t.is_integer() && info.is_register() => {
            let registers = list
                .into_iter()
                .map(|n| codec::encode(&info.name, &n.into(), info.size(), info.presentation()))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            DataFieldValue::Registers(registers)
        }
        (t, DataValue::IntArray(list)) if t.is_integer() && info.repeated => DataFieldValue::IntArray(list),
        (t, DataValue::Value(value)) if t.is_integer() => {
            let bytes = codec::encode(&info.name, &value, info.size(), info.presentation())?;
            if info.is_register() {
                DataFieldValue::Registers(vec![bytes])
            } else {
                DataFieldValue::Stream(bytes)
            }
        }
        _ => return Err(mismatch().into()),
    };
    Ok(value)
}

fn encode_fields(source: &dyn FieldSource, fields: Vec<DataField>, is_get: bool) -> Result<BTreeMap<String, DataEntry>> {
    let mut out = BTreeMap::new();
    for field in fields {
        let info = source.by_name(&field.name)?;
        let value = match field.value {
            Some(value) => encode_value(info, value, is_get)?,
            None if is_get => DataFieldValue::Empty,
            None => {
                return Err(FieldValueError::TypeMismatch {
                    field: info.name.clone(),
                    expected: "a value".to_string(),
                }
                .into())
            }
        };
        let entry = DataEntry {
            value,
            field_id: info.id,
            presentation: info.presentation(),
        };
        match out.entry(info.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(mut slot) => match (&mut slot.get_mut().value, entry.value) {
                (DataFieldValue::Registers(values), DataFieldValue::Registers(more)) => values.extend(more),
                _ => return Err(FieldValueError::Duplicate { field: info.name.clone() }.into()),
            },
        }
    }
    Ok(out)
}

/// Builds a data record for a table (optionally scoped to `action`) or a
/// learn object.  With `is_get`, fields may be name-only and mandatory
/// fields may be left out, since the record only filters a read.
pub fn make_data<S: DataScope>(scope: &S, fields: Vec<DataField>, action: Option<&str>, is_get: bool) -> Result<DataRecord> {
    let action = match action {
        Some(name) => Some(scope.action(name)?),
        None => None,
    };
    let source = ScopeFields { scope, action };
    let fields = encode_fields(&source, fields, is_get)?;
    if !is_get {
        for info in scope.data_fields(action) {
            let supplied = fields.contains_key(&info.name) || info.oneof_siblings.iter().any(|s| fields.contains_key(s));
            if info.mandatory && !supplied {
                let scope = match action {
                    Some(action) => action.name.clone(),
                    None => scope.scope_name().to_string(),
                };
                return Err(FieldValueError::MissingMandatory {
                    field: info.name.clone(),
                    scope,
                }
                .into());
            }
        }
    }
    Ok(DataRecord {
        fields,
        action: action.map(|a| (a.name.clone(), a.id)),
        is_default_entry: false,
        scope: scope.scope_name().to_string(),
        scope_id: scope.scope_id(),
    })
}

fn present(entry: &DataEntry) -> Presented {
    match &entry.value {
        DataFieldValue::Empty => Presented::Empty,
        DataFieldValue::Stream(b) => Presented::Value(codec::decode(b, entry.presentation)),
        DataFieldValue::Registers(values) => {
            Presented::Registers(values.iter().map(|b| codec::decode(b, entry.presentation)).collect())
        }
        DataFieldValue::Float(x) => Presented::Float(*x),
        DataFieldValue::Bool(b) => Presented::Bool(*b),
        DataFieldValue::Str(s) => Presented::Str(s.clone()),
        DataFieldValue::IntArray(v) => Presented::IntArray(v.clone()),
        DataFieldValue::BoolArray(v) => Presented::BoolArray(v.clone()),
        DataFieldValue::StrArray(v) => Presented::StrArray(v.clone()),
        DataFieldValue::Containers(items) => Presented::Containers(
            items
                .iter()
                .map(|item| item.iter().map(|(k, v)| (k.clone(), present(v))).collect())
                .collect(),
        ),
    }
}

fn push_proto(entry: &DataEntry, out: &mut Vec<bfruntime::DataField>) {
    let mut field = bfruntime::DataField::new();
    field.set_field_id(entry.field_id);
    match &entry.value {
        DataFieldValue::Empty => (),
        DataFieldValue::Stream(b) => field.set_stream(b.clone()),
        DataFieldValue::Registers(values) => {
            for v in values {
                let mut field = bfruntime::DataField::new();
                field.set_field_id(entry.field_id);
                field.set_stream(v.clone());
                out.push(field);
            }
            return;
        }
        DataFieldValue::Float(x) => field.set_float_val(*x),
        DataFieldValue::Bool(b) => field.set_bool_val(*b),
        DataFieldValue::Str(s) => field.set_str_val(s.clone()),
        DataFieldValue::IntArray(v) => {
            let mut a = bfruntime::DataField_IntArray::new();
            a.set_val(v.clone());
            field.set_int_arr_val(a);
        }
        DataFieldValue::BoolArray(v) => {
            let mut a = bfruntime::DataField_BoolArray::new();
            a.set_val(v.clone());
            field.set_bool_arr_val(a);
        }
        DataFieldValue::StrArray(v) => {
            let mut a = bfruntime::DataField_StrArray::new();
            a.set_val(RepeatedField::from_vec(v.clone()));
            field.set_str_arr_val(a);
        }
        DataFieldValue::Containers(items) => {
            let mut array = bfruntime::DataField_ContainerArray::new();
            for item in items {
                let mut inner = Vec::new();
                for e in item.values() {
                    push_proto(e, &mut inner);
                }
                let mut container = bfruntime::DataField_ContainerArray_Container::new();
                container.set_val(RepeatedField::from_vec(inner));
                array.mut_container().push(container);
            }
            field.set_container_arr_val(array);
        }
    }
    out.push(field);
}

fn decode_value(info: &DataInfo, field: &bfruntime::DataField) -> std::result::Result<DataFieldValue, ProtocolError> {
    use bfruntime::DataField_oneof_value as V;

    Ok(match &field.value {
        None => DataFieldValue::Empty,
        Some(V::stream(bytes)) => {
            let bytes = codec::normalize(bytes, info.size());
            if info.is_register() {
                DataFieldValue::Registers(vec![bytes])
            } else {
                DataFieldValue::Stream(bytes)
            }
        }
        Some(V::float_val(x)) => DataFieldValue::Float(*x),
        Some(V::bool_val(b)) => DataFieldValue::Bool(*b),
        Some(V::str_val(s)) => DataFieldValue::Str(s.clone()),
        Some(V::int_arr_val(a)) if info.is_register() => DataFieldValue::Registers(
            a.get_val()
                .iter()
                .map(|&n| codec::encode(&info.name, &n.into(), info.size(), Presentation::Int))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| ProtocolError::Malformed(e.to_string()))?,
        ),
        Some(V::int_arr_val(a)) => DataFieldValue::IntArray(a.get_val().to_vec()),
        Some(V::bool_arr_val(a)) => DataFieldValue::BoolArray(a.get_val().to_vec()),
        Some(V::str_arr_val(a)) => DataFieldValue::StrArray(a.get_val().to_vec()),
        Some(V::container_arr_val(array)) => {
            let inner = info
                .container
                .as_ref()
                .ok_or_else(|| ProtocolError::Malformed(format!("{} is not a container", info.name)))?;
            let source = ContainerFields {
                fields: inner,
                name: &info.name,
            };
            let items = array
                .get_container()
                .iter()
                .map(|c| decode_fields(&source, c.get_val(), &info.name))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            DataFieldValue::Containers(items)
        }
    })
}

/// Any failure inside a container aborts the whole field.
fn decode_fields(
    source: &dyn FieldSource,
    fields: &[bfruntime::DataField],
    scope: &str,
) -> std::result::Result<BTreeMap<String, DataEntry>, ProtocolError> {
    let mut out: BTreeMap<String, DataEntry> = BTreeMap::new();
    for field in fields {
        let info = source.by_id(field.get_field_id()).ok_or_else(|| ProtocolError::UnknownId {
            kind: "data field",
            id: field.get_field_id(),
            scope: scope.to_string(),
        })?;
        let value = decode_value(info, field)?;
        if let (Some(existing), DataFieldValue::Registers(more)) = (out.get_mut(&info.name), &value) {
            if let DataFieldValue::Registers(values) = &mut existing.value {
                values.extend(more.iter().cloned());
                continue;
            }
        }
        out.insert(
            info.name.clone(),
            DataEntry {
                value,
                field_id: info.id,
                presentation: info.presentation(),
            },
        );
    }
    Ok(out)
}

impl DataRecord {
    pub fn action_name(&self) -> Option<&str> {
        self.action.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn action_id(&self) -> Option<u32> {
        self.action.as_ref().map(|(_, id)| *id)
    }

    pub fn is_default_entry(&self) -> bool {
        self.is_default_entry
    }

    pub fn set_default_entry(&mut self, is_default_entry: bool) {
        self.is_default_entry = is_default_entry;
    }

    /// Name of the table or learn object the record was built for.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn scope_id(&self) -> u32 {
        self.scope_id
    }

    pub fn get(&self, name: &str) -> Option<&DataEntry> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &DataEntry)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Replaces the value of a field the record already holds.
    pub fn set<S: DataScope>(&mut self, scope: &S, field: DataField) -> Result<()> {
        let action = self.action_id().and_then(|id| scope.action_by_id(id));
        let info = scope.data_field(&field.name, action)?;
        let value = match field.value {
            Some(value) => encode_value(info, value, false)?,
            None => DataFieldValue::Empty,
        };
        match self.fields.get_mut(&info.name) {
            Some(entry) => {
                entry.value = value;
                Ok(())
            }
            None => Err(FieldValueError::NotInRecord { field: info.name.clone() }.into()),
        }
    }

    pub fn to_presentation(&self) -> BTreeMap<String, Presented> {
        self.fields.iter().map(|(k, v)| (k.clone(), present(v))).collect()
    }

    pub fn to_proto(&self) -> bfruntime::TableData {
        let mut fields = Vec::new();
        for entry in self.fields.values() {
            push_proto(entry, &mut fields);
        }
        let mut data = bfruntime::TableData::new();
        if let Some(id) = self.action_id() {
            data.set_action_id(id);
        }
        data.set_fields(RepeatedField::from_vec(fields));
        data
    }

    /// Decodes a payload received from the device.  Repeated register
    /// fields fold into one sequence.
    pub fn from_proto<S: DataScope>(
        scope: &S,
        data: &bfruntime::TableData,
        is_default_entry: bool,
    ) -> std::result::Result<Self, ProtocolError> {
        let action = match data.get_action_id() {
            0 => None,
            id => Some(scope.action_by_id(id).ok_or_else(|| ProtocolError::UnknownId {
                kind: "action",
                id,
                scope: scope.scope_name().to_string(),
            })?),
        };
        let source = ScopeFields { scope, action };
        let fields = decode_fields(&source, data.get_fields(), scope.scope_name())?;
        Ok(DataRecord {
            fields,
            action: action.map(|a| (a.name.clone(), a.id)),
            is_default_entry,
            scope: scope.scope_name().to_string(),
            scope_id: scope.scope_id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::schema::BfRtInfo;
    use serde_json::json;

    fn schema() -> BfRtInfo {
        let doc = json!({"tables": [
            {
                "name": "pipe.Ingress.acl", "id": 1, "table_type": "MatchAction_Direct", "size": 512,
                "attributes": [], "supported_operations": [],
                "key": [
                    {"id": 1, "name": "hdr.ipv4.dst_addr", "match_type": "Ternary", "mandatory": false,
                     "annotations": [{"name": "$client_annotation", "value": "ipv4"}],
                     "type": {"type": "bytes", "width": 32}},
                    {"id": 2, "name": "meta.vrf", "match_type": "LPM", "mandatory": false,
                     "type": {"type": "bytes", "width": 16}},
                    {"id": 65537, "name": "$MATCH_PRIORITY", "match_type": "Exact", "mandatory": true,
                     "type": {"type": "uint32"}},
                ],
                "action_specs": [
                    {"id": 10, "name": "Ingress.drop", "data": []},
                    {"id": 11, "name": "Ingress.fwd", "data": [
                        {"id": 1, "name": "port", "repeated": false, "mandatory": true, "read_only": false,
                         "type": {"type": "bytes", "width": 9}},
                    ]},
                ],
                "data": [],
            },
            {
                "name": "pipe.Ingress.reg", "id": 2, "table_type": "Register", "size": 16,
                "attributes": [], "supported_operations": [],
                "key": [{"id": 1, "name": "$REGISTER_INDEX", "match_type": "Exact", "mandatory": true,
                         "type": {"type": "uint32"}}],
                "data": [
                    {"mandatory": false, "read_only": false, "singleton": {
                        "id": 1, "name": "Ingress.reg.f1", "repeated": true,
                        "annotations": [{"name": "$bfrt_field_class", "value": "register_data"}],
                        "type": {"type": "bytes", "width": 32}}},
                ],
            },
        ]});
        BfRtInfo::parse("prog", &serde_json::to_vec(&doc).unwrap(), None).unwrap()
    }

    #[test]
    fn ternary_masks_and_apply_mask() {
        let info = schema();
        let acl = info.table("acl").unwrap();
        let mut key = make_key(
            acl,
            vec![
                KeyField::ternary("dst_addr", "10.1.2.3", -256i32),
                KeyField::exact("$MATCH_PRIORITY", 1u32),
            ],
        )
        .unwrap();
        key.apply_mask();
        let once = key.clone();
        key.apply_mask();
        assert_eq!(key, once);
        assert_eq!(
            key.to_presentation()["hdr.ipv4.dst_addr"],
            Match::Ternary {
                value: Value::Str("10.1.2.0".into()),
                mask: Value::Str("255.255.255.0".into())
            }
        );
    }

    #[test]
    fn key_shape_errors() {
        let info = schema();
        let acl = info.table("acl").unwrap();
        let err = make_key(acl, vec![KeyField::exact("dst_addr", 1u32), KeyField::exact("$MATCH_PRIORITY", 1u32)]);
        assert!(matches!(
            err,
            Err(Error::FieldValue(FieldValueError::MatchKindMismatch {
                expected: MatchKind::Ternary,
                actual: MatchKind::Exact,
                ..
            }))
        ));
        let err = make_key(acl, vec![KeyField::lpm("vrf", 1u32, 17), KeyField::exact("$MATCH_PRIORITY", 1u32)]);
        assert!(matches!(err, Err(Error::FieldValue(FieldValueError::PrefixTooLong { .. }))));
        let err = make_key(acl, vec![KeyField::lpm("vrf", 1u32, 8)]);
        assert!(matches!(
            err,
            Err(Error::FieldValue(FieldValueError::MissingMandatory { ref field, .. })) if field == "$MATCH_PRIORITY"
        ));
    }

    #[test]
    fn set_replaces_but_never_adds() {
        let info = schema();
        let acl = info.table("acl").unwrap();
        let mut key = make_key(acl, vec![KeyField::exact("$MATCH_PRIORITY", 1u32)]).unwrap();
        key.set(acl, KeyField::exact("$MATCH_PRIORITY", 7u32)).unwrap();
        assert_eq!(key.to_presentation()["$MATCH_PRIORITY"], Match::Exact { value: Value::Uint(7) });
        assert!(matches!(
            key.set(acl, KeyField::lpm("vrf", 1u32, 8)),
            Err(Error::FieldValue(FieldValueError::NotInRecord { .. }))
        ));

        let mut data = make_data(acl, vec![DataField::value("port", 3u8)], Some("fwd"), false).unwrap();
        data.set(acl, DataField::value("port", 4u8)).unwrap();
        assert_eq!(data.to_presentation()["port"], Presented::Value(Value::Uint(4)));
    }

    #[test]
    fn mandatory_data_and_filters() {
        let info = schema();
        let acl = info.table("acl").unwrap();
        assert!(matches!(
            make_data(acl, vec![], Some("fwd"), false),
            Err(Error::FieldValue(FieldValueError::MissingMandatory { .. }))
        ));
        let filter = make_data(acl, vec![DataField::name_only("port")], Some("fwd"), true).unwrap();
        assert_eq!(filter.get("port").unwrap().value, DataFieldValue::Empty);
        assert!(make_data(acl, vec![DataField::name_only("port")], Some("fwd"), false).is_err());
        assert!(make_data(acl, vec![DataField::value("port", 512u32)], Some("fwd"), false).is_err());
    }

    #[test]
    fn register_values_fold_and_unfold() {
        let info = schema();
        let reg = info.table("reg").unwrap();
        let data = make_data(
            reg,
            vec![DataField::value("f1", 1u32), DataField::value("f1", 2u32)],
            None,
            false,
        )
        .unwrap();
        assert_eq!(
            data.to_presentation()["Ingress.reg.f1"],
            Presented::Registers(vec![Value::Uint(1), Value::Uint(2)])
        );
        let wire = data.to_proto();
        assert_eq!(wire.get_fields().len(), 2);
        assert!(wire.get_fields().iter().all(|f| f.get_field_id() == 1));

        let decoded = DataRecord::from_proto(reg, &wire, false).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn register_int_arrays_normalize() {
        let info = schema();
        let reg = info.table("reg").unwrap();
        let folded = make_data(reg, vec![DataField::int_array("f1", vec![1, 2])], None, false).unwrap();
        let separate = make_data(
            reg,
            vec![DataField::value("f1", 1u32), DataField::value("f1", 2u32)],
            None,
            false,
        )
        .unwrap();
        assert_eq!(folded, separate);
        assert!(folded.to_proto().get_fields().iter().all(|f| f.get_stream().len() == 4));

        let mut field = bfruntime::DataField::new();
        field.set_field_id(1);
        let mut values = bfruntime::DataField_IntArray::new();
        values.set_val(vec![5, 6]);
        field.set_int_arr_val(values);
        let mut wire = bfruntime::TableData::new();
        wire.set_fields(RepeatedField::from_vec(vec![field]));
        let decoded = DataRecord::from_proto(reg, &wire, false).unwrap();
        assert_eq!(
            decoded.to_presentation()["Ingress.reg.f1"],
            Presented::Registers(vec![Value::Uint(5), Value::Uint(6)])
        );
    }

    #[test]
    fn records_order_by_field_then_value() {
        let info = schema();
        let acl = info.table("acl").unwrap();
        let mut keys: Vec<KeyRecord> = [3u32, 1, 2]
            .iter()
            .map(|&p| make_key(acl, vec![KeyField::exact("$MATCH_PRIORITY", p)]).unwrap())
            .collect();
        keys.sort();
        let priorities: Vec<_> = keys.iter().map(|k| k.to_presentation()["$MATCH_PRIORITY"].clone()).collect();
        assert_eq!(
            priorities,
            vec![
                Match::Exact { value: Value::Uint(1) },
                Match::Exact { value: Value::Uint(2) },
                Match::Exact { value: Value::Uint(3) }
            ]
        );
    }

    fn typed_schema() -> BfRtInfo {
        let key = |id: u32, name: &str, match_type: &str, ty: serde_json::Value| {
            json!({"id": id, "name": name, "match_type": match_type, "mandatory": false, "type": ty})
        };
        let data = |id: u32, name: &str, repeated: bool, ty: serde_json::Value| {
            json!({"id": id, "name": name, "repeated": repeated, "mandatory": false, "read_only": false, "type": ty})
        };
        let doc = json!({"tables": [{
            "name": "pipe.Ingress.ports", "id": 3, "table_type": "MatchAction_Direct", "size": 64,
            "attributes": [], "supported_operations": [],
            "key": [
                key(1, "ifname", "Exact", json!({"type": "string", "choices": ["eth0", "eth1"]})),
                key(2, "meta.proto", "Exact", json!({"type": "uint8"})),
                key(3, "meta.dscp", "Ternary", json!({"type": "bytes", "width": 6})),
                key(4, "meta.vrf", "LPM", json!({"type": "bytes", "width": 16})),
                key(5, "meta.l4_port", "Range", json!({"type": "bytes", "width": 16})),
                key(6, "meta.vlan", "Optional", json!({"type": "bytes", "width": 12})),
            ],
            "data": [
                data(1, "rate", false, json!({"type": "float"})),
                data(2, "enabled", false, json!({"type": "bool"})),
                data(3, "descr", false, json!({"type": "string"})),
                data(4, "mode", false, json!({"type": "enum", "choices": ["fast", "slow"]})),
                data(5, "queues", true, json!({"type": "uint32"})),
                data(6, "flags", true, json!({"type": "bool"})),
                data(7, "tags", true, json!({"type": "string"})),
                data(8, "speed", false, json!({"type": "uint32"})),
            ],
        }]});
        BfRtInfo::parse("prog", &serde_json::to_vec(&doc).unwrap(), None).unwrap()
    }

    #[test]
    fn string_keys_keep_their_text() {
        let info = typed_schema();
        let t = info.table("ports").unwrap();
        let key = make_key(t, vec![KeyField::exact("ifname", "eth0")]).unwrap();
        assert_eq!(key.get("ifname").unwrap().value, Match::Exact { value: b"eth0".to_vec() });
        assert_eq!(key.to_presentation()["ifname"], Match::Exact { value: Value::Str("eth0".into()) });
        assert_eq!(KeyRecord::from_proto(t, &key.to_proto()).unwrap(), key);

        let err = make_key(t, vec![KeyField::exact("ifname", "bogus")]);
        assert!(matches!(
            err,
            Err(Error::FieldValue(FieldValueError::BadChoice { ref value, ref choices, .. }))
                if value == "bogus" && choices.len() == 2
        ));
        let err = make_key(t, vec![KeyField::exact("ifname", 7u32)]);
        assert!(matches!(err, Err(Error::FieldValue(FieldValueError::TypeMismatch { .. }))));

        let mut wire = key.to_proto();
        let mut exact = bfruntime::KeyField_Exact::new();
        exact.set_value(vec![0xff, 0xfe]);
        wire.mut_fields()[0].set_exact(exact);
        assert!(matches!(KeyRecord::from_proto(t, &wire), Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn every_match_kind_round_trips() {
        let info = typed_schema();
        let t = info.table("ports").unwrap();
        let cases = vec![
            ("ifname", KeyField::exact("ifname", "eth1"), Match::Exact { value: Value::Str("eth1".into()) }),
            ("meta.proto", KeyField::exact("proto", 6u8), Match::Exact { value: Value::Uint(6) }),
            (
                "meta.dscp",
                KeyField::ternary("dscp", 0x2eu8, 0x3fu8),
                Match::Ternary {
                    value: Value::Uint(0x2e),
                    mask: Value::Uint(0x3f),
                },
            ),
            (
                "meta.vrf",
                KeyField::lpm("vrf", 0x0a00u16, 8),
                Match::Lpm {
                    value: Value::Uint(0x0a00),
                    prefix_len: 8,
                },
            ),
            (
                "meta.l4_port",
                KeyField::range("l4_port", 80u16, 443u16),
                Match::Range {
                    low: Value::Uint(80),
                    high: Value::Uint(443),
                },
            ),
            (
                "meta.vlan",
                KeyField::optional("vlan", 100u16, true),
                Match::Optional {
                    value: Value::Uint(100),
                    is_valid: true,
                },
            ),
        ];
        for (name, field, expected) in cases {
            let key = make_key(t, vec![field]).unwrap();
            assert_eq!(key.to_presentation()[name], expected, "{}", name);
            assert_eq!(KeyRecord::from_proto(t, &key.to_proto()).unwrap(), key, "{}", name);
        }
    }

    #[test]
    fn every_data_type_round_trips() {
        let info = typed_schema();
        let t = info.table("ports").unwrap();
        let cases = vec![
            (DataField::value("speed", 100_000u32), Presented::Value(Value::Uint(100_000))),
            (DataField::float("rate", 1.5), Presented::Float(1.5)),
            (DataField::boolean("enabled", true), Presented::Bool(true)),
            (DataField::string("descr", "uplink"), Presented::Str("uplink".into())),
            (DataField::string("mode", "slow"), Presented::Str("slow".into())),
            (DataField::int_array("queues", vec![1, 2, 3]), Presented::IntArray(vec![1, 2, 3])),
            (DataField::bool_array("flags", vec![true, false]), Presented::BoolArray(vec![true, false])),
            (
                DataField::str_array("tags", vec!["a".into(), "b".into()]),
                Presented::StrArray(vec!["a".into(), "b".into()]),
            ),
        ];
        for (field, expected) in cases {
            let name = field.name.clone();
            let data = make_data(t, vec![field], None, false).unwrap();
            assert_eq!(data.to_presentation()[&name], expected, "{}", name);
            assert_eq!(DataRecord::from_proto(t, &data.to_proto(), false).unwrap(), data, "{}", name);
        }
    }

    #[test]
    fn data_type_errors() {
        let info = typed_schema();
        let t = info.table("ports").unwrap();
        assert!(matches!(
            make_data(t, vec![DataField::string("mode", "medium")], None, false),
            Err(Error::FieldValue(FieldValueError::BadChoice { ref value, .. })) if value == "medium"
        ));
        assert!(matches!(
            make_data(t, vec![DataField::boolean("rate", true)], None, false),
            Err(Error::FieldValue(FieldValueError::TypeMismatch { .. }))
        ));
        assert!(matches!(
            make_data(t, vec![DataField::int_array("speed", vec![1])], None, false),
            Err(Error::FieldValue(FieldValueError::TypeMismatch { .. }))
        ));
    }
}
