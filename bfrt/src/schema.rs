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

//! The BF-Runtime metadata graph.
//!
//! `BfRtInfo::parse` turns a `bf-rt.json` document (plus the optional
//! non-P4 overlay describing fixed-function tables) into `TableInfo` and
//! `LearnInfo` objects.  Parsing is all-or-nothing: any problem anywhere in
//! either document fails the whole call.  The graph is never modified once
//! it is shared, so lookups need no locking.

use itertools::Itertools;

use serde::Deserialize;

use serde_json::{Map, Value as Json};

use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt::{self, Display};

use tracing::debug;

use crate::codec::{FieldSize, Presentation};
use crate::error::{NameResolutionError, SchemaError};
use crate::names::{NameAliasTable, Resolved};

/// Annotation name used for client presentation hints.
pub const CLIENT_ANNOTATION: &str = "$client_annotation";

/// Marks per-pipe register data, whose repeated values form a sequence.
pub const REGISTER_DATA: &str = "$bfrt_field_class.register_data";

/// Marks an action that is only legal as a table's default action.
pub const DEFAULT_ONLY: &str = "@defaultonly";

/// Key fields that may be left out even when declared mandatory.
pub const OMITTABLE_KEYS: &[&str] = &["$ACTION_MEMBER_ID", "$SELECTOR_GROUP_ID"];

/// A name/value annotation.  Annotations compare against strings as
/// `"name.value"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub name: String,
    pub value: String,
}

impl Annotation {
    pub fn new(name: &str, value: &str) -> Self {
        Annotation {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn matches(&self, dotted: &str) -> bool {
        dotted
            .strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            == Some(self.value.as_str())
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.value)
    }
}

pub fn has_annotation(annotations: &[Annotation], dotted: &str) -> bool {
    annotations.iter().any(|a| a.matches(dotted))
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    MatchDirect,
    MatchIndirect,
    MatchIndirectSelector,
    ActionProfile,
    Selector,
    SelectorGetMember,
    Counter,
    Meter,
    Register,
    Lpf,
    Wred,
    PortConfigure,
    PortStat,
    SnapshotCfg,
    SnapshotLiveness,
    Other(String),
}

impl From<&str> for TableKind {
    fn from(s: &str) -> Self {
        use TableKind::*;
        match s {
            "MatchAction_Direct" => MatchDirect,
            "MatchAction_Indirect" => MatchIndirect,
            "MatchAction_Indirect_Selector" => MatchIndirectSelector,
            "Action" => ActionProfile,
            "Selector" => Selector,
            "SelectorGetMember" => SelectorGetMember,
            "Counter" => Counter,
            "Meter" => Meter,
            "Register" => Register,
            "Lpf" => Lpf,
            "Wred" => Wred,
            "PortConfigure" => PortConfigure,
            "PortStat" => PortStat,
            "SnapshotCfg" => SnapshotCfg,
            "SnapshotLiveness" => SnapshotLiveness,
            other => Other(other.to_string()),
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TableKind::*;
        let s = match self {
            MatchDirect => "MatchAction_Direct",
            MatchIndirect => "MatchAction_Indirect",
            MatchIndirectSelector => "MatchAction_Indirect_Selector",
            ActionProfile => "Action",
            Selector => "Selector",
            SelectorGetMember => "SelectorGetMember",
            Counter => "Counter",
            Meter => "Meter",
            Register => "Register",
            Lpf => "Lpf",
            Wred => "Wred",
            PortConfigure => "PortConfigure",
            PortStat => "PortStat",
            SnapshotCfg => "SnapshotCfg",
            SnapshotLiveness => "SnapshotLiveness",
            Other(s) => s,
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    Exact,
    Ternary,
    Lpm,
    Range,
    Optional,
}

impl MatchKind {
    /// `ATCAM` keys behave exactly like `Exact` ones.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Exact" | "ATCAM" => Some(MatchKind::Exact),
            "Ternary" => Some(MatchKind::Ternary),
            "LPM" => Some(MatchKind::Lpm),
            "Range" => Some(MatchKind::Range),
            "Optional" => Some(MatchKind::Optional),
            _ => None,
        }
    }
}

impl Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchKind::Exact => "Exact",
            MatchKind::Ternary => "Ternary",
            MatchKind::Lpm => "LPM",
            MatchKind::Range => "Range",
            MatchKind::Optional => "Optional",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldType {
    Uint { bits: u32 },
    Bytes { bits: u32 },
    Bool,
    Float,
    /// A string; `enum` fields list their allowed `choices`.
    Str { choices: Vec<String> },
    Container,
}

impl FieldType {
    pub fn size(&self) -> Option<FieldSize> {
        match self {
            FieldType::Uint { bits } | FieldType::Bytes { bits } => Some(FieldSize::from_bits(*bits)),
            _ => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, FieldType::Uint { .. } | FieldType::Bytes { .. })
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Uint { bits } => write!(f, "uint{}", bits),
            FieldType::Bytes { bits } => write!(f, "bytes({})", bits),
            FieldType::Bool => write!(f, "bool"),
            FieldType::Float => write!(f, "float"),
            FieldType::Str { choices } if choices.is_empty() => write!(f, "string"),
            FieldType::Str { choices } => write!(f, "enum{{{}}}", choices.iter().join(", ")),
            FieldType::Container => write!(f, "container"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct KeyInfo {
    pub id: u32,
    pub name: String,
    pub field_type: FieldType,
    pub match_kind: MatchKind,
    pub repeated: bool,
    pub mandatory: bool,
    pub annotations: Vec<Annotation>,
}

impl KeyInfo {
    pub fn size(&self) -> Option<FieldSize> {
        self.field_type.size()
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::from_annotations(&self.annotations)
    }
}

#[derive(Clone, Debug)]
pub struct DataInfo {
    pub id: u32,
    pub name: String,
    pub field_type: FieldType,
    pub repeated: bool,
    pub mandatory: bool,
    pub read_only: bool,
    pub annotations: Vec<Annotation>,
    /// The other alternatives of a `oneof`.  Supplying any one of the group
    /// satisfies `mandatory`.
    pub oneof_siblings: Vec<String>,
    /// Inner schema of a container field.
    pub container: Option<DataFields>,
}

impl DataInfo {
    pub fn size(&self) -> Option<FieldSize> {
        self.field_type.size()
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::from_annotations(&self.annotations)
    }

    pub fn is_register(&self) -> bool {
        has_annotation(&self.annotations, REGISTER_DATA)
    }
}

/// One namespace of data fields with its short names.
#[derive(Clone, Debug, Default)]
pub struct DataFields {
    pub fields: BTreeMap<String, DataInfo>,
    pub aliases: NameAliasTable,
}

impl DataFields {
    fn new(list: Vec<DataInfo>, context: &str) -> Result<Self, SchemaError> {
        let mut fields = BTreeMap::new();
        for info in list {
            if fields.contains_key(&info.name) {
                return Err(SchemaError::DuplicateName {
                    context: context.to_string(),
                    name: info.name,
                });
            }
            fields.insert(info.name.clone(), info);
        }
        let aliases = NameAliasTable::build(fields.keys());
        Ok(DataFields { fields, aliases })
    }

    pub fn resolve(&self, name: &str) -> Resolved<'_, DataInfo> {
        self.aliases.resolve(&self.fields, name)
    }

    pub fn by_id(&self, id: u32) -> Option<&DataInfo> {
        self.fields.values().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataInfo> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Appends `annotation` to the field `name` names.  `Ok(false)` means
    /// there is no such field here.
    fn annotate(&mut self, name: &str, annotation: &Annotation, scope: &str) -> Result<bool, NameResolutionError> {
        let canonical = match self.resolve(name) {
            Resolved::NotFound => return Ok(false),
            resolved => resolved.into_result("data field", name, scope)?.0.to_string(),
        };
        if let Some(info) = self.fields.get_mut(&canonical) {
            info.annotations.push(annotation.clone());
        }
        Ok(true)
    }
}

#[derive(Clone, Debug)]
pub struct ActionInfo {
    pub id: u32,
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub data: DataFields,
}

impl ActionInfo {
    pub fn is_default_only(&self) -> bool {
        self.annotations.iter().any(|a| a.name == DEFAULT_ONLY)
    }
}

#[derive(Clone, Debug)]
pub struct TableInfo {
    pub id: u32,
    pub name: String,
    pub kind: TableKind,
    pub size: u64,
    pub attributes: Vec<String>,
    pub operations: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub has_const_default_action: bool,
    pub keys: BTreeMap<String, KeyInfo>,
    pub key_aliases: NameAliasTable,
    pub actions: BTreeMap<String, ActionInfo>,
    pub action_aliases: NameAliasTable,
    /// Data fields common to all actions, or all data when there are none.
    pub data: DataFields,
}

/// Digest payload description.
#[derive(Clone, Debug)]
pub struct LearnInfo {
    pub id: u32,
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub data: DataFields,
}

/// Anything that owns data fields: tables, optionally scoped by one of
/// their actions, and learn objects.
pub trait DataScope {
    fn scope_id(&self) -> u32;
    fn scope_name(&self) -> &str;
    fn common_data(&self) -> &DataFields;
    fn action(&self, name: &str) -> Result<&ActionInfo, NameResolutionError>;
    fn action_by_id(&self, id: u32) -> Option<&ActionInfo>;

    /// Looks `name` up among `action`'s fields first, then among the
    /// common fields.
    fn data_field<'a>(&'a self, name: &str, action: Option<&'a ActionInfo>) -> Result<&'a DataInfo, NameResolutionError> {
        if let Some(action) = action {
            match action.data.resolve(name) {
                Resolved::NotFound => (),
                resolved => {
                    let scope = format!("{} action {}", self.scope_name(), action.name);
                    return resolved.into_result("data field", name, &scope).map(|(_, d)| d);
                }
            }
        }
        self.common_data()
            .resolve(name)
            .into_result("data field", name, self.scope_name())
            .map(|(_, d)| d)
    }

    fn data_field_by_id<'a>(&'a self, id: u32, action: Option<&'a ActionInfo>) -> Option<&'a DataInfo> {
        action
            .and_then(|a| a.data.by_id(id))
            .or_else(|| self.common_data().by_id(id))
    }

    /// All fields visible with `action`, action fields first.
    fn data_fields<'a>(&'a self, action: Option<&'a ActionInfo>) -> Vec<&'a DataInfo> {
        action
            .into_iter()
            .flat_map(|a| a.data.iter())
            .chain(self.common_data().iter())
            .collect()
    }
}

impl DataScope for TableInfo {
    fn scope_id(&self) -> u32 {
        self.id
    }

    fn scope_name(&self) -> &str {
        &self.name
    }

    fn common_data(&self) -> &DataFields {
        &self.data
    }

    fn action(&self, name: &str) -> Result<&ActionInfo, NameResolutionError> {
        self.action_aliases
            .resolve(&self.actions, name)
            .into_result("action", name, &self.name)
            .map(|(_, a)| a)
    }

    fn action_by_id(&self, id: u32) -> Option<&ActionInfo> {
        self.actions.values().find(|a| a.id == id)
    }
}

impl DataScope for LearnInfo {
    fn scope_id(&self) -> u32 {
        self.id
    }

    fn scope_name(&self) -> &str {
        &self.name
    }

    fn common_data(&self) -> &DataFields {
        &self.data
    }

    fn action(&self, name: &str) -> Result<&ActionInfo, NameResolutionError> {
        Err(NameResolutionError::NotFound {
            kind: "action",
            name: name.to_string(),
            scope: self.name.clone(),
        })
    }

    fn action_by_id(&self, _id: u32) -> Option<&ActionInfo> {
        None
    }
}

impl TableInfo {
    pub fn key(&self, name: &str) -> Result<&KeyInfo, NameResolutionError> {
        self.key_aliases
            .resolve(&self.keys, name)
            .into_result("key field", name, &self.name)
            .map(|(_, k)| k)
    }

    pub fn key_by_id(&self, id: u32) -> Option<&KeyInfo> {
        self.keys.values().find(|k| k.id == id)
    }

    /// Mandatory key fields a `make_key` caller has to supply.
    pub fn required_keys(&self) -> impl Iterator<Item = &KeyInfo> {
        self.keys
            .values()
            .filter(|k| k.mandatory && !OMITTABLE_KEYS.contains(&k.name.as_str()))
    }

    pub fn supports(&self, operation: &str) -> bool {
        self.operations.iter().any(|o| o == operation)
    }

    pub fn supports_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }

    /// Adds a client presentation annotation (`ipv4`, `ipv6`, `mac` or
    /// `bytes`) to a key field.
    pub fn add_key_annotation(&mut self, field: &str, value: &str) -> Result<(), NameResolutionError> {
        let canonical = self.key(field)?.name.clone();
        if let Some(key) = self.keys.get_mut(&canonical) {
            key.annotations.push(Annotation::new(CLIENT_ANNOTATION, value));
        }
        Ok(())
    }

    /// Adds a client presentation annotation to a data field, searching
    /// `action` first when one is given.
    pub fn add_data_annotation(&mut self, field: &str, action: Option<&str>, value: &str) -> Result<(), NameResolutionError> {
        let annotation = Annotation::new(CLIENT_ANNOTATION, value);
        let scope = self.name.clone();
        if let Some(action) = action {
            let action = self.action(action)?.name.clone();
            if let Some(action) = self.actions.get_mut(&action) {
                if action.data.annotate(field, &annotation, &scope)? {
                    return Ok(());
                }
            }
        }
        if self.data.annotate(field, &annotation, &scope)? {
            Ok(())
        } else {
            Err(NameResolutionError::NotFound {
                kind: "data field",
                name: field.to_string(),
                scope,
            })
        }
    }
}

impl LearnInfo {
    pub fn add_data_annotation(&mut self, field: &str, value: &str) -> Result<(), NameResolutionError> {
        let annotation = Annotation::new(CLIENT_ANNOTATION, value);
        if self.data.annotate(field, &annotation, &self.name)? {
            Ok(())
        } else {
            Err(NameResolutionError::NotFound {
                kind: "data field",
                name: field.to_string(),
                scope: self.name.clone(),
            })
        }
    }
}

fn write_data(f: &mut fmt::Formatter<'_>, data: &DataFields, depth: usize) -> fmt::Result {
    let indent = "    ".repeat(depth);
    for d in data.iter() {
        write!(f, "{}data {} (id {}): ", indent, d.name, d.id)?;
        if d.repeated {
            write!(f, "repeated ")?;
        }
        write!(f, "{}", d.field_type)?;
        if d.mandatory {
            write!(f, ", mandatory")?;
        }
        if d.read_only {
            write!(f, ", read-only")?;
        }
        writeln!(f)?;
        if let Some(container) = &d.container {
            write_data(f, container, depth + 1)?;
        }
    }
    Ok(())
}

impl Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "table {} (id {}, {}, size {})", self.name, self.id, self.kind, self.size)?;
        for k in self.keys.values() {
            write!(f, "    key {} (id {}): {} {}", k.name, k.id, k.match_kind, k.field_type)?;
            if k.mandatory {
                write!(f, ", mandatory")?;
            }
            writeln!(f)?;
        }
        for a in self.actions.values() {
            write!(f, "    action {} (id {})", a.name, a.id)?;
            if a.is_default_only() {
                write!(f, ", default only")?;
            }
            writeln!(f)?;
            write_data(f, &a.data, 2)?;
        }
        write_data(f, &self.data, 1)
    }
}

impl Display for LearnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "learn {} (id {})", self.name, self.id)?;
        write_data(f, &self.data, 1)
    }
}

/// A JSON object being parsed, with a human-readable position for errors.
struct Entry<'a> {
    obj: &'a Map<String, Json>,
    context: String,
}

impl<'a> Entry<'a> {
    fn new(value: &'a Json, context: String) -> Result<Self, SchemaError> {
        match value.as_object() {
            Some(obj) => Ok(Entry { obj, context }),
            None => Err(SchemaError::MalformedData {
                context,
                reason: "entry is not an object".to_string(),
            }),
        }
    }

    fn renamed(self, context: String) -> Self {
        Entry { obj: self.obj, context }
    }

    fn has(&self, key: &str) -> bool {
        self.obj.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<&'a Json, SchemaError> {
        self.obj.get(key).ok_or_else(|| SchemaError::MissingKey {
            context: self.context.clone(),
            key: key.to_string(),
        })
    }

    fn wrong_type(&self, key: &str, expected: &'static str) -> SchemaError {
        SchemaError::WrongType {
            context: self.context.clone(),
            key: key.to_string(),
            expected,
        }
    }

    fn str(&self, key: &str) -> Result<&'a str, SchemaError> {
        self.get(key)?.as_str().ok_or_else(|| self.wrong_type(key, "a string"))
    }

    fn u64(&self, key: &str) -> Result<u64, SchemaError> {
        self.get(key)?.as_u64().ok_or_else(|| self.wrong_type(key, "an unsigned integer"))
    }

    fn u32(&self, key: &str) -> Result<u32, SchemaError> {
        u32::try_from(self.u64(key)?).map_err(|_| self.wrong_type(key, "a 32-bit unsigned integer"))
    }

    fn bool(&self, key: &str) -> Result<bool, SchemaError> {
        self.get(key)?.as_bool().ok_or_else(|| self.wrong_type(key, "a boolean"))
    }

    fn bool_or(&self, key: &str, default: bool) -> Result<bool, SchemaError> {
        if self.has(key) {
            self.bool(key)
        } else {
            Ok(default)
        }
    }

    fn array(&self, key: &str) -> Result<&'a Vec<Json>, SchemaError> {
        self.get(key)?.as_array().ok_or_else(|| self.wrong_type(key, "an array"))
    }

    fn opt_array(&self, key: &str) -> Result<Option<&'a Vec<Json>>, SchemaError> {
        if self.has(key) {
            self.array(key).map(Some)
        } else {
            Ok(None)
        }
    }

    fn object(&self, key: &str) -> Result<Entry<'a>, SchemaError> {
        let value = self.get(key)?;
        match value.as_object() {
            Some(obj) => Ok(Entry {
                obj,
                context: self.context.clone(),
            }),
            None => Err(self.wrong_type(key, "an object")),
        }
    }

    fn strings(&self, key: &str) -> Result<Vec<String>, SchemaError> {
        self.array(key)?
            .iter()
            .map(|s| s.as_str().map(String::from).ok_or_else(|| self.wrong_type(key, "an array of strings")))
            .collect()
    }

    fn annotations(&self) -> Result<Vec<Annotation>, SchemaError> {
        let list = match self.opt_array("annotations")? {
            Some(list) => list,
            None => return Ok(Vec::new()),
        };
        list.iter()
            .map(|a| {
                let a = Entry::new(a, format!("{} annotation", self.context))?;
                let value = if a.has("value") { a.str("value")? } else { "" };
                Ok(Annotation::new(a.str("name")?, value))
            })
            .collect()
    }

    fn field_type(&self) -> Result<FieldType, SchemaError> {
        let ty = self.object("type")?;
        let name = ty.str("type")?;
        Ok(match name {
            "bytes" => FieldType::Bytes { bits: ty.u32("width")? },
            "uint8" => FieldType::Uint { bits: 8 },
            "uint16" => FieldType::Uint { bits: 16 },
            "uint32" => FieldType::Uint { bits: 32 },
            "uint64" => FieldType::Uint { bits: 64 },
            "bool" => FieldType::Bool,
            "float" => FieldType::Float,
            "string" | "enum" => FieldType::Str {
                choices: if ty.has("choices") { ty.strings("choices")? } else { Vec::new() },
            },
            other => {
                return Err(SchemaError::UnknownFieldType {
                    context: self.context.clone(),
                    type_name: other.to_string(),
                })
            }
        })
    }

    fn check_width(&self, field_type: &FieldType, mandatory: bool) -> Result<(), SchemaError> {
        match field_type.size() {
            Some(size) if mandatory && size.bits == 0 => Err(SchemaError::ZeroWidthMandatory {
                context: self.context.clone(),
            }),
            _ => Ok(()),
        }
    }
}

fn parse_key(value: &Json, table: &str) -> Result<KeyInfo, SchemaError> {
    let entry = Entry::new(value, format!("table {} key", table))?;
    let name = entry.str("name")?;
    let entry = entry.renamed(format!("table {} key {}", table, name));
    let field_type = entry.field_type()?;
    let match_type = entry.str("match_type")?;
    let match_kind = MatchKind::parse(match_type).ok_or_else(|| SchemaError::UnknownMatchType {
        context: entry.context.clone(),
        match_type: match_type.to_string(),
    })?;
    let mandatory = entry.bool_or("mandatory", false)?;
    entry.check_width(&field_type, mandatory)?;
    Ok(KeyInfo {
        id: entry.u32("id")?,
        name: name.to_string(),
        field_type,
        match_kind,
        repeated: entry.bool_or("repeated", false)?,
        mandatory,
        annotations: entry.annotations()?,
    })
}

/// Parses the fields of one data entry.  `inherited` carries the
/// `mandatory`/`read_only` of an enclosing `oneof` or `singleton` wrapper.
fn parse_data_field(
    entry: Entry<'_>,
    scope: &str,
    inherited: Option<(bool, bool)>,
    container: Option<DataFields>,
) -> Result<DataInfo, SchemaError> {
    let name = entry.str("name")?;
    let entry = entry.renamed(format!("{} field {}", scope, name));
    let (mandatory, read_only) = match inherited {
        Some(flags) => flags,
        None => (entry.bool_or("mandatory", false)?, entry.bool_or("read_only", false)?),
    };
    let field_type = match container {
        Some(_) => FieldType::Container,
        None => entry.field_type()?,
    };
    entry.check_width(&field_type, mandatory)?;
    Ok(DataInfo {
        id: entry.u32("id")?,
        name: name.to_string(),
        field_type,
        repeated: entry.bool("repeated")?,
        mandatory,
        read_only,
        annotations: entry.annotations()?,
        oneof_siblings: Vec::new(),
        container,
    })
}

fn parse_data_entry(value: &Json, scope: &str, out: &mut Vec<DataInfo>) -> Result<(), SchemaError> {
    let entry = Entry::new(value, format!("{} data", scope))?;
    if let Some(alternatives) = entry.opt_array("oneof")? {
        let flags = (entry.bool("mandatory")?, entry.bool("read_only")?);
        if alternatives.is_empty() {
            return Err(SchemaError::MalformedData {
                context: entry.context,
                reason: "oneof without alternatives".to_string(),
            });
        }
        let mut group = alternatives
            .iter()
            .map(|a| parse_data_field(Entry::new(a, format!("{} oneof", scope))?, scope, Some(flags), None))
            .collect::<Result<Vec<_>, _>>()?;
        let names: Vec<String> = group.iter().map(|d| d.name.clone()).collect();
        for d in group.iter_mut() {
            d.oneof_siblings = names.iter().filter(|n| **n != d.name).cloned().collect();
        }
        out.extend(group);
    } else if entry.has("singleton") {
        let flags = (entry.bool("mandatory")?, entry.bool("read_only")?);
        let singleton = entry.object("singleton")?;
        let container = match singleton.opt_array("container")? {
            Some(values) => {
                let name = singleton.str("name")?;
                let inner_scope = format!("{} container {}", scope, name);
                Some(DataFields::new(parse_data_entries(values, &inner_scope)?, &inner_scope)?)
            }
            None => None,
        };
        out.push(parse_data_field(singleton, scope, Some(flags), container)?);
    } else {
        out.push(parse_data_field(entry, scope, None, None)?);
    }
    Ok(())
}

fn parse_data_entries(values: &[Json], scope: &str) -> Result<Vec<DataInfo>, SchemaError> {
    let mut out = Vec::new();
    for value in values {
        parse_data_entry(value, scope, &mut out)?;
    }
    Ok(out)
}

fn parse_action(value: &Json, table: &str) -> Result<ActionInfo, SchemaError> {
    let entry = Entry::new(value, format!("table {} action", table))?;
    let name = entry.str("name")?;
    let scope = format!("table {} action {}", table, name);
    let entry = entry.renamed(scope.clone());
    Ok(ActionInfo {
        id: entry.u32("id")?,
        name: name.to_string(),
        annotations: entry.annotations()?,
        data: DataFields::new(parse_data_entries(entry.array("data")?, &scope)?, &scope)?,
    })
}

fn parse_table(value: &Json, index: usize, document: &str) -> Result<TableInfo, SchemaError> {
    let entry = Entry::new(value, format!("{} tables[{}]", document, index))?;
    let name = entry.str("name")?;
    let scope = format!("table {}", name);
    let entry = entry.renamed(scope.clone());

    let mut keys = BTreeMap::new();
    for k in entry.array("key")? {
        let key = parse_key(k, name)?;
        if keys.contains_key(&key.name) {
            return Err(SchemaError::DuplicateName {
                context: scope,
                name: key.name,
            });
        }
        keys.insert(key.name.clone(), key);
    }

    let mut actions = BTreeMap::new();
    if let Some(specs) = entry.opt_array("action_specs")? {
        for a in specs {
            let action = parse_action(a, name)?;
            if actions.contains_key(&action.name) {
                return Err(SchemaError::DuplicateName {
                    context: scope,
                    name: action.name,
                });
            }
            actions.insert(action.name.clone(), action);
        }
    }

    Ok(TableInfo {
        id: entry.u32("id")?,
        name: name.to_string(),
        kind: TableKind::from(entry.str("table_type")?),
        size: entry.u64("size")?,
        attributes: entry.strings("attributes")?,
        operations: entry.strings("supported_operations")?,
        annotations: entry.annotations()?,
        // Absent in older schemas; such tables have no const default.
        has_const_default_action: entry.bool_or("has_const_default_action", false)?,
        key_aliases: NameAliasTable::build(keys.keys()),
        keys,
        action_aliases: NameAliasTable::build(actions.keys()),
        actions,
        data: DataFields::new(parse_data_entries(entry.array("data")?, &scope)?, &scope)?,
    })
}

fn parse_learn(value: &Json, index: usize, document: &str) -> Result<LearnInfo, SchemaError> {
    let entry = Entry::new(value, format!("{} learn_filters[{}]", document, index))?;
    let name = entry.str("name")?;
    let scope = format!("learn {}", name);
    let entry = entry.renamed(scope.clone());
    Ok(LearnInfo {
        id: entry.u32("id")?,
        name: name.to_string(),
        annotations: entry.annotations()?,
        data: DataFields::new(parse_data_entries(entry.array("fields")?, &scope)?, &scope)?,
    })
}

#[derive(Deserialize)]
struct RawDocument {
    tables: Vec<Json>,
    #[serde(default)]
    learn_filters: Vec<Json>,
}

/// The parsed schema of one P4 program plus the fixed-function tables.
#[derive(Clone, Debug)]
pub struct BfRtInfo {
    p4_name: String,
    tables: BTreeMap<String, TableInfo>,
    table_aliases: NameAliasTable,
    table_ids: BTreeMap<u32, String>,
    learns: BTreeMap<String, LearnInfo>,
    learn_aliases: NameAliasTable,
    learn_ids: BTreeMap<u32, String>,
}

fn insert_id(ids: &mut BTreeMap<u32, String>, id: u32, name: &str) -> Result<(), SchemaError> {
    match ids.get(&id) {
        Some(existing) if existing != name => Err(SchemaError::DuplicateId {
            id,
            first: existing.clone(),
            second: name.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            ids.insert(id, name.to_string());
            Ok(())
        }
    }
}

impl BfRtInfo {
    /// Parses `core` and, if present, the `non_p4` overlay.  Overlay names
    /// must not collide with core names.
    pub fn parse(p4_name: &str, core: &[u8], non_p4: Option<&[u8]>) -> Result<Self, SchemaError> {
        let mut documents = vec![("core", core)];
        if let Some(non_p4) = non_p4 {
            documents.push(("non-P4", non_p4));
        }

        let mut tables = BTreeMap::new();
        let mut learns = BTreeMap::new();
        for (document, bytes) in documents {
            let raw: RawDocument = serde_json::from_slice(bytes).map_err(|source| SchemaError::Json {
                context: format!("{} bf-rt.json", document),
                source,
            })?;
            for (index, t) in raw.tables.iter().enumerate() {
                let table = parse_table(t, index, document)?;
                if tables.contains_key(&table.name) {
                    return Err(SchemaError::DuplicateName {
                        context: format!("{} bf-rt.json", document),
                        name: table.name,
                    });
                }
                tables.insert(table.name.clone(), table);
            }
            for (index, l) in raw.learn_filters.iter().enumerate() {
                let learn = parse_learn(l, index, document)?;
                if learns.contains_key(&learn.name) {
                    return Err(SchemaError::DuplicateName {
                        context: format!("{} bf-rt.json", document),
                        name: learn.name,
                    });
                }
                learns.insert(learn.name.clone(), learn);
            }
        }

        let mut table_ids = BTreeMap::new();
        for t in tables.values() {
            insert_id(&mut table_ids, t.id, &t.name)?;
        }
        let mut learn_ids = BTreeMap::new();
        for l in learns.values() {
            insert_id(&mut learn_ids, l.id, &l.name)?;
        }

        debug!("{}: parsed {} tables and {} learn objects", p4_name, tables.len(), learns.len());
        Ok(BfRtInfo {
            p4_name: p4_name.to_string(),
            table_aliases: NameAliasTable::build(tables.keys()),
            tables,
            table_ids,
            learn_aliases: NameAliasTable::build(learns.keys()),
            learns,
            learn_ids,
        })
    }

    pub fn p4_name(&self) -> &str {
        &self.p4_name
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableInfo> {
        self.tables.values()
    }

    pub fn learns(&self) -> impl Iterator<Item = &LearnInfo> {
        self.learns.values()
    }

    pub fn table_aliases(&self) -> &NameAliasTable {
        &self.table_aliases
    }

    pub fn table(&self, name: &str) -> Result<&TableInfo, NameResolutionError> {
        self.table_aliases
            .resolve(&self.tables, name)
            .into_result("table", name, &self.p4_name)
            .map(|(_, t)| t)
    }

    /// For attaching presentation annotations before the graph is shared.
    pub fn table_mut(&mut self, name: &str) -> Result<&mut TableInfo, NameResolutionError> {
        let canonical = self.table(name)?.name.clone();
        let scope = self.p4_name.clone();
        self.tables
            .get_mut(&canonical)
            .ok_or_else(move || NameResolutionError::NotFound {
                kind: "table",
                name: name.to_string(),
                scope,
            })
    }

    pub fn learn(&self, name: &str) -> Result<&LearnInfo, NameResolutionError> {
        self.learn_aliases
            .resolve(&self.learns, name)
            .into_result("learn object", name, &self.p4_name)
            .map(|(_, l)| l)
    }

    pub fn learn_mut(&mut self, name: &str) -> Result<&mut LearnInfo, NameResolutionError> {
        let canonical = self.learn(name)?.name.clone();
        let scope = self.p4_name.clone();
        self.learns
            .get_mut(&canonical)
            .ok_or_else(move || NameResolutionError::NotFound {
                kind: "learn object",
                name: name.to_string(),
                scope,
            })
    }

    pub fn table_by_id(&self, id: u32) -> Option<&TableInfo> {
        self.table_ids.get(&id).and_then(|name| self.tables.get(name))
    }

    pub fn learn_by_id(&self, id: u32) -> Option<&LearnInfo> {
        self.learn_ids.get(&id).and_then(|name| self.learns.get(name))
    }
}

impl Display for BfRtInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.tables.values() {
            write!(f, "{}", t)?;
        }
        for l in self.learns.values() {
            write!(f, "{}", l)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(name: &str, id: u32, key: Json, data: Json) -> Json {
        json!({
            "name": name,
            "id": id,
            "table_type": "MatchAction_Direct",
            "size": 1024,
            "attributes": [],
            "supported_operations": [],
            "key": key,
            "data": data,
        })
    }

    fn document(tables: Vec<Json>) -> Vec<u8> {
        serde_json::to_vec(&json!({ "tables": tables })).unwrap()
    }

    fn exact_key(name: &str, id: u32, ty: Json) -> Json {
        json!({"id": id, "name": name, "repeated": false, "mandatory": true, "match_type": "Exact", "type": ty})
    }

    #[test]
    fn missing_key_names_table_and_field() {
        let doc = document(vec![table(
            "pipe.t",
            1,
            json!([{"id": 1, "name": "k", "match_type": "Exact"}]),
            json!([]),
        )]);
        let err = BfRtInfo::parse("prog", &doc, None).unwrap_err();
        assert_eq!(err.to_string(), "table pipe.t key k: missing required key \"type\"");
    }

    #[test]
    fn unknown_type_fails_whole_parse() {
        let good = table("pipe.a", 1, json!([exact_key("k", 1, json!({"type": "uint8"}))]), json!([]));
        let bad = table("pipe.b", 2, json!([exact_key("k", 1, json!({"type": "uint24"}))]), json!([]));
        let err = BfRtInfo::parse("prog", &document(vec![good, bad]), None).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownFieldType { ref type_name, .. } if type_name == "uint24"));
    }

    #[test]
    fn atcam_is_exact() {
        let key = json!([{"id": 1, "name": "k", "match_type": "ATCAM", "type": {"type": "bytes", "width": 12}}]);
        let info = BfRtInfo::parse("prog", &document(vec![table("pipe.t", 1, key, json!([]))]), None).unwrap();
        let k = info.table("t").unwrap().key("k").unwrap();
        assert_eq!(k.match_kind, MatchKind::Exact);
        assert_eq!(k.size(), Some(FieldSize { bytes: 2, bits: 12 }));
    }

    #[test]
    fn bad_match_type() {
        let key = json!([{"id": 1, "name": "k", "match_type": "Hash", "type": {"type": "uint8"}}]);
        let err = BfRtInfo::parse("prog", &document(vec![table("pipe.t", 1, key, json!([]))]), None).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownMatchType { .. }));
    }

    #[test]
    fn zero_width_mandatory_is_rejected() {
        let key = json!([exact_key("k", 1, json!({"type": "bytes", "width": 0}))]);
        let err = BfRtInfo::parse("prog", &document(vec![table("pipe.t", 1, key, json!([]))]), None).unwrap_err();
        assert!(matches!(err, SchemaError::ZeroWidthMandatory { .. }));
    }

    #[test]
    fn overlay_collision_and_duplicate_ids() {
        let core = document(vec![table("pipe.t", 1, json!([]), json!([]))]);
        let overlay = document(vec![table("pipe.t", 9, json!([]), json!([]))]);
        let err = BfRtInfo::parse("prog", &core, Some(&overlay)).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateName { ref name, .. } if name == "pipe.t"));

        let overlay = document(vec![table("$PORT", 1, json!([]), json!([]))]);
        let err = BfRtInfo::parse("prog", &core, Some(&overlay)).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateId { id: 1, .. }));

        let overlay = document(vec![table("$PORT", 2, json!([]), json!([]))]);
        let info = BfRtInfo::parse("prog", &core, Some(&overlay)).unwrap();
        assert_eq!(info.table_by_id(2).unwrap().name, "$PORT");
    }

    #[test]
    fn oneof_and_enum_fields() {
        let data = json!([
            {"mandatory": true, "read_only": false, "oneof": [
                {"id": 1, "name": "$METER_SPEC_CIR_KBPS", "repeated": false, "type": {"type": "uint64"}},
                {"id": 2, "name": "$METER_SPEC_CIR_PPS", "repeated": false, "type": {"type": "uint64"}},
            ]},
            {"mandatory": false, "read_only": false, "singleton":
                {"id": 3, "name": "$COLOR", "repeated": false,
                 "type": {"type": "enum", "choices": ["GREEN", "RED"]}}},
        ]);
        let info = BfRtInfo::parse("prog", &document(vec![table("pipe.m", 5, json!([]), data)]), None).unwrap();
        let t = info.table("m").unwrap();
        let kbps = t.data_field("$METER_SPEC_CIR_KBPS", None).unwrap();
        assert!(kbps.mandatory);
        assert_eq!(kbps.oneof_siblings, vec!["$METER_SPEC_CIR_PPS".to_string()]);
        let color = t.data_field("$COLOR", None).unwrap();
        assert_eq!(color.field_type, FieldType::Str { choices: vec!["GREEN".into(), "RED".into()] });
        assert_eq!(t.data_field_by_id(2, None).unwrap().name, "$METER_SPEC_CIR_PPS");
    }

    #[test]
    fn action_scope_is_searched_first() {
        let mut t = table("pipe.t", 1, json!([]), json!([
            {"id": 65553, "name": "$COUNTER_SPEC_PKTS", "repeated": false, "type": {"type": "uint64"}},
        ]));
        t["action_specs"] = json!([
            {"id": 10, "name": "Ingress.set_port", "annotations": [{"name": "@defaultonly"}], "data": [
                {"id": 1, "name": "port", "repeated": false, "mandatory": true, "read_only": false,
                 "type": {"type": "bytes", "width": 9}},
            ]},
        ]);
        let mut info = BfRtInfo::parse("prog", &document(vec![t]), None).unwrap();
        let t = info.table("pipe.t").unwrap();
        let action = t.action("set_port").unwrap();
        assert!(action.is_default_only());
        assert_eq!(t.data_field("port", Some(action)).unwrap().id, 1);
        assert_eq!(t.data_field("$COUNTER_SPEC_PKTS", Some(action)).unwrap().id, 65553);
        assert!(t.data_field("port", None).is_err());
        assert_eq!(t.data_fields(Some(action)).len(), 2);

        let t = info.table_mut("t").unwrap();
        t.add_data_annotation("port", Some("set_port"), "bytes").unwrap();
        let t = info.table("t").unwrap();
        let action = t.action("Ingress.set_port").unwrap();
        assert_eq!(t.data_field("port", Some(action)).unwrap().presentation(), Presentation::Bytes);
    }

    #[test]
    fn annotations_compare_dotted() {
        let a = Annotation::new("$bfrt_field_class", "register_data");
        assert!(a.matches(REGISTER_DATA));
        assert!(!a.matches("$bfrt_field_class"));
        assert_eq!(a.to_string(), REGISTER_DATA);
    }

    #[test]
    fn learn_filters() {
        let doc = serde_json::to_vec(&json!({
            "tables": [],
            "learn_filters": [{"id": 7, "name": "pipe.SwitchIngressDeparser.digest_a", "annotations": [],
                "fields": [{"id": 1, "name": "src_addr", "repeated": false, "annotations": [],
                            "type": {"type": "bytes", "width": 48}}]}],
        }))
        .unwrap();
        let info = BfRtInfo::parse("prog", &doc, None).unwrap();
        let learn = info.learn("digest_a").unwrap();
        assert_eq!(learn.id, 7);
        assert_eq!(info.learn_by_id(7).unwrap().name, learn.name);
        assert!(learn.action("x").is_err());
    }

    #[test]
    fn mutable_lookups_resolve_short_names() {
        let doc = serde_json::to_vec(&json!({
            "tables": [table("pipe.Ingress.t", 1, json!([exact_key("k", 1, json!({"type": "uint8"}))]), json!([]))],
            "learn_filters": [{"id": 7, "name": "pipe.SwitchIngressDeparser.digest_a", "annotations": [],
                "fields": [{"id": 1, "name": "src_addr", "repeated": false, "annotations": [],
                            "type": {"type": "bytes", "width": 32}}]}],
        }))
        .unwrap();
        let mut info = BfRtInfo::parse("prog", &doc, None).unwrap();
        // The fixture omits has_const_default_action.
        assert!(!info.table("t").unwrap().has_const_default_action);

        let learn = info.learn_mut("digest_a").unwrap();
        learn.annotations.push(Annotation::new("$client_annotation", "ipv4"));
        assert_eq!(info.learn("digest_a").unwrap().annotations.len(), 1);

        match info.table_mut("nope") {
            Err(NameResolutionError::NotFound { kind, scope, .. }) => {
                assert_eq!(kind, "table");
                assert_eq!(scope, "prog");
            }
            other => panic!("unexpected lookup result: {:?}", other.map(|t| t.id)),
        }
        assert!(info.learn_mut("digest_b").is_err());
    }
}
