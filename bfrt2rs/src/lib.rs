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

//! Generates typed record constructors from a bf-rt.json schema.
//!
//! Every table becomes a module holding its canonical name and id, a
//! `make_key` with one argument per key component and one
//! `make_<action>_data` per action.  Keys that may be left out of a
//! request take an `Option`.  The generated code only calls the
//! generic `bfrt::record` builders, so it is a convenience layer and
//! never needed at runtime.

use anyhow::{anyhow, Context, Result};

use bfrt::schema::{BfRtInfo, DataInfo, FieldType, MatchKind, TableInfo};

use multimap::MultiMap;

use std::collections::HashSet;
use std::fmt::Write;
use std::fs::{self, File};
use std::io::{self, Write as IoWrite};
use std::path::Path;

use tracing::{debug, info};

/// Group for tables whose name has no pipeline component, such as the
/// fixed-function tables of the non-P4 document.
const FIXED_GROUP: &str = "fixed";

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self",
    "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where", "while",
];

/// Turns a schema name such as `SwitchIngress.$MATCH_PRIORITY` into a
/// snake-case identifier.
pub fn rust_ident(name: &str) -> String {
    let mut out = String::new();
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if c.is_ascii_uppercase() && prev.map_or(false, |p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
        prev = Some(c);
    }
    let mut out = out.trim_end_matches('_').to_string();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// `rust_ident`, made unique among `used`.
fn unique_ident(name: &str, used: &mut HashSet<String>) -> String {
    let base = rust_ident(name);
    let mut ident = base.clone();
    let mut n = 2;
    while !used.insert(ident.clone()) {
        ident = format!("{}_{}", base, n);
        n += 1;
    }
    ident
}

fn read_file(filename: &str) -> Result<Vec<u8>> {
    fs::read(filename).with_context(|| format!("{}: read failed", filename))
}

/// Splits a canonical table name into its pipeline and the rest.
fn split_pipeline(name: &str) -> (&str, &str) {
    match name.split_once('.') {
        Some((pipeline, rest)) => (pipeline, rest),
        None => (FIXED_GROUP, name),
    }
}

fn get_pipelines<'a>(info: &'a BfRtInfo, pipeline_arg: Option<&str>) -> Result<MultiMap<String, &'a TableInfo>> {
    let mut pipelines: MultiMap<String, &TableInfo> = info
        .tables()
        .map(|table| (split_pipeline(&table.name).0.to_string(), table))
        .collect();

    if pipelines.is_empty() {
        return Err(anyhow!("{} has no tables", info.p4_name()));
    }

    if let Some(pipeline_name) = pipeline_arg {
        if !pipelines.contains_key(pipeline_name) {
            return Err(anyhow!("{} has no pipeline {}", info.p4_name(), pipeline_name));
        }
        pipelines.retain(|k, _| k == pipeline_name);
    }

    Ok(pipelines)
}

/// Parameters and the statement pushing one key field onto `fields`.
/// Keys a caller may leave out take a single `Option` parameter.
fn key_params(key: &bfrt::schema::KeyInfo, required: bool, used: &mut HashSet<String>) -> (Vec<String>, String) {
    let ident = unique_ident(&key.name, used);
    let name = &key.name;
    if !required {
        let (ty, pattern, ctor) = match key.match_kind {
            MatchKind::Exact => ("Value", "value", "exact({:?}, value)"),
            MatchKind::Ternary => ("(Value, Value)", "(value, mask)", "ternary({:?}, value, mask)"),
            MatchKind::Lpm => ("(Value, u32)", "(value, prefix_len)", "lpm({:?}, value, prefix_len)"),
            MatchKind::Range => ("(Value, Value)", "(low, high)", "range({:?}, low, high)"),
            MatchKind::Optional => ("(Value, bool)", "(value, is_valid)", "optional({:?}, value, is_valid)"),
        };
        let ctor = ctor.replacen("{:?}", &format!("{:?}", name), 1);
        return (
            vec![format!("{}: Option<{}>", ident, ty)],
            format!("if let Some({}) = {} {{ fields.push(KeyField::{}); }}", pattern, ident, ctor),
        );
    }
    let value = format!("{}: impl Into<Value>", ident);
    let (params, ctor) = match key.match_kind {
        MatchKind::Exact => (vec![value], format!("KeyField::exact({:?}, {})", name, ident)),
        MatchKind::Ternary => (
            vec![value, format!("{}_mask: impl Into<Value>", ident)],
            format!("KeyField::ternary({:?}, {}, {}_mask)", name, ident, ident),
        ),
        MatchKind::Lpm => (
            vec![value, format!("{}_prefix_len: u32", ident)],
            format!("KeyField::lpm({:?}, {}, {}_prefix_len)", name, ident, ident),
        ),
        MatchKind::Range => (
            vec![
                format!("{}_low: impl Into<Value>", ident),
                format!("{}_high: impl Into<Value>", ident),
            ],
            format!("KeyField::range({:?}, {}_low, {}_high)", name, ident, ident),
        ),
        MatchKind::Optional => (
            vec![value, format!("{}_is_valid: bool", ident)],
            format!("KeyField::optional({:?}, {}, {}_is_valid)", name, ident, ident),
        ),
    };
    (params, format!("fields.push({});", ctor))
}

/// The Rust type taken for a data field and the `DataField` constructor
/// applied to the argument.
fn data_type(data: &DataInfo) -> (&'static str, &'static str) {
    match (&data.field_type, data.repeated && !data.is_register()) {
        (FieldType::Uint { .. }, false) | (FieldType::Bytes { .. }, false) => ("Value", "DataField::value"),
        (FieldType::Uint { .. }, true) | (FieldType::Bytes { .. }, true) => ("Vec<u32>", "DataField::int_array"),
        (FieldType::Bool, false) => ("bool", "DataField::boolean"),
        (FieldType::Bool, true) => ("Vec<bool>", "DataField::bool_array"),
        (FieldType::Float, _) => ("f32", "DataField::float"),
        (FieldType::Str { .. }, false) => ("&str", "DataField::string"),
        (FieldType::Str { .. }, true) => ("Vec<String>", "DataField::str_array"),
        (FieldType::Container, _) => ("Vec<Vec<DataField>>", "DataField::containers"),
    }
}

/// Writes one data constructor.  Read-only fields are left out.  A field
/// is optional unless it is mandatory and has no `oneof` alternative.
fn write_data_fn<'a>(
    out: &mut String,
    fn_name: &str,
    action: Option<&str>,
    fields: impl Iterator<Item = &'a DataInfo>,
) -> Result<()> {
    let mut used = HashSet::new();
    used.insert("table".to_string());
    let mut params = vec!["table: &TableInfo".to_string()];
    let mut body = Vec::new();
    for data in fields.filter(|d| !d.read_only) {
        let ident = unique_ident(&data.name, &mut used);
        let (ty, ctor) = data_type(data);
        if data.mandatory && data.oneof_siblings.is_empty() {
            params.push(format!("{}: {}", ident, ty));
            body.push(format!("fields.push({}({:?}, {}));", ctor, data.name, ident));
        } else {
            params.push(format!("{}: Option<{}>", ident, ty));
            body.push(format!(
                "if let Some({}) = {} {{ fields.push({}({:?}, {})); }}",
                ident, ident, ctor, data.name, ident
            ));
        }
    }

    writeln!(out, "        pub fn {}({}) -> Result<DataRecord> {{", fn_name, params.join(", "))?;
    if body.is_empty() {
        writeln!(out, "            let fields = Vec::new();")?;
    } else {
        writeln!(out, "            let mut fields = Vec::new();")?;
        for line in &body {
            writeln!(out, "            {}", line)?;
        }
    }
    writeln!(out, "            bfrt::record::make_data(table, fields, {:?}, false)", action)?;
    writeln!(out, "        }}")?;
    Ok(())
}

fn write_table(out: &mut String, module: &str, table: &TableInfo) -> Result<()> {
    writeln!(out, "    /// {}", table.name)?;
    writeln!(out, "    pub mod {} {{", module)?;
    writeln!(out, "        use super::super::*;")?;
    writeln!(out)?;
    writeln!(out, "        pub const TABLE: &str = {:?};", table.name)?;
    writeln!(out, "        pub const ID: u32 = {};", table.id)?;

    let mut used = HashSet::new();
    used.insert("table".to_string());
    let mut params = vec!["table: &TableInfo".to_string()];
    let required: HashSet<&str> = table.required_keys().map(|k| k.name.as_str()).collect();
    let mut pushes = Vec::new();
    for key in table.keys.values() {
        let (p, push) = key_params(key, required.contains(key.name.as_str()), &mut used);
        params.extend(p);
        pushes.push(push);
    }
    writeln!(out)?;
    writeln!(out, "        pub fn make_key({}) -> Result<KeyRecord> {{", params.join(", "))?;
    if pushes.is_empty() {
        writeln!(out, "            bfrt::record::make_key(table, Vec::new())")?;
    } else {
        writeln!(out, "            let mut fields = Vec::new();")?;
        for push in &pushes {
            writeln!(out, "            {}", push)?;
        }
        writeln!(out, "            bfrt::record::make_key(table, fields)")?;
    }
    writeln!(out, "        }}")?;

    if table.actions.is_empty() {
        if !table.data.is_empty() {
            writeln!(out)?;
            write_data_fn(out, "make_data", None, table.data.iter())?;
        }
    } else {
        let mut used = HashSet::new();
        for action in table.actions.values() {
            let short = action.name.rsplit('.').next().unwrap_or(&action.name);
            let fn_name = unique_ident(&format!("make_{}_data", rust_ident(short)), &mut used);
            writeln!(out)?;
            write_data_fn(out, &fn_name, Some(&action.name), action.data.iter())?;
        }
    }
    writeln!(out, "    }}")?;
    Ok(())
}

/// Renders the generated module for `pipelines`.
pub fn generate(source: &str, pipelines: &MultiMap<String, &TableInfo>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "// Generated by bfrt2rs from {}.  Do not edit.", source)?;
    writeln!(out)?;
    writeln!(out, "#![allow(clippy::too_many_arguments)]")?;
    writeln!(out)?;
    writeln!(out, "use bfrt::codec::Value;")?;
    writeln!(out, "use bfrt::error::Result;")?;
    writeln!(out, "use bfrt::record::{{DataField, DataRecord, KeyField, KeyRecord}};")?;
    writeln!(out, "use bfrt::schema::TableInfo;")?;

    let mut names: Vec<&String> = pipelines.keys().collect();
    names.sort();
    for pipeline in names {
        let mut tables = pipelines.get_vec(pipeline).cloned().unwrap_or_default();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        debug!("pipeline {}: {} tables", pipeline, tables.len());

        writeln!(out)?;
        writeln!(out, "pub mod {} {{", rust_ident(pipeline))?;
        let mut used = HashSet::new();
        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            let module = unique_ident(split_pipeline(&table.name).1, &mut used);
            write_table(&mut out, &module, table)?;
        }
        writeln!(out, "}}")?;
    }
    Ok(out)
}

fn write_output(output_arg: Option<&str>, text: &str) -> Result<()> {
    match output_arg {
        Some(filename) => File::create(filename)
            .with_context(|| format!("{}: create failed", filename))?
            .write_all(text.as_bytes())
            .with_context(|| format!("{}: write failed", filename)),
        None => io::stdout().write_all(text.as_bytes()).context("stdout: write failed"),
    }
}

/// Reads a schema (and optional non-P4 overlay) and writes either the
/// generated code or, with `list`, a description of every table.
pub fn bfrt_to_rust(
    input_arg: &str,
    non_p4_arg: Option<&str>,
    output_arg: Option<&str>,
    pipeline_arg: Option<&str>,
    list: bool,
) -> Result<()> {
    let core = read_file(input_arg)?;
    let non_p4 = non_p4_arg.map(read_file).transpose()?;
    let p4_name = Path::new(input_arg)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let info = BfRtInfo::parse(&p4_name, &core, non_p4.as_deref())
        .with_context(|| format!("{}: parse failed", input_arg))?;
    let pipelines = get_pipelines(&info, pipeline_arg)?;

    if list {
        let mut text = String::new();
        let mut names: Vec<&String> = pipelines.keys().collect();
        names.sort();
        for pipeline in names {
            for table in pipelines.get_vec(pipeline).into_iter().flatten() {
                write!(text, "{}", table)?;
            }
        }
        if pipeline_arg.is_none() {
            for learn in info.learns() {
                write!(text, "{}", learn)?;
            }
        }
        return write_output(output_arg, &text);
    }

    let text = generate(input_arg, &pipelines)?;
    write_output(output_arg, &text)?;
    info!(
        "generated {} tables in {} pipelines",
        pipelines.iter_all().map(|(_, t)| t.len()).sum::<usize>(),
        pipelines.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{"tables": [
        {"name": "pipe.SwitchIngress.acl", "id": 2, "table_type": "MatchAction_Direct", "size": 16,
         "attributes": [], "supported_operations": [],
         "key": [
            {"id": 65537, "name": "$MATCH_PRIORITY", "match_type": "Exact", "mandatory": true, "type": {"type": "uint32"}},
            {"id": 1, "name": "hdr.ipv4.dst_addr", "match_type": "Ternary", "type": {"type": "bytes", "width": 32}}
         ],
         "action_specs": [
            {"id": 10, "name": "SwitchIngress.set_port", "data": [
                {"id": 1, "name": "port", "repeated": false, "mandatory": true, "read_only": false,
                 "type": {"type": "bytes", "width": 9}},
                {"id": 2, "name": "type", "repeated": false, "mandatory": false, "read_only": false,
                 "type": {"type": "enum", "choices": ["A", "B"]}}
            ]},
            {"id": 11, "name": "SwitchIngress.drop", "data": []}
         ],
         "data": []},
        {"name": "$PORT", "id": 5, "table_type": "PortConfigure", "size": 512,
         "attributes": [], "supported_operations": [], "key": [], "data": []}
    ]}"#;

    fn info() -> BfRtInfo {
        BfRtInfo::parse("prog", SCHEMA.as_bytes(), None).unwrap()
    }

    #[test]
    fn identifiers() {
        assert_eq!(rust_ident("$MATCH_PRIORITY"), "match_priority");
        assert_eq!(rust_ident("hdr.ipv4.dst_addr"), "hdr_ipv4_dst_addr");
        assert_eq!(rust_ident("SwitchIngress.fwd"), "switch_ingress_fwd");
        assert_eq!(rust_ident("type"), "type_");
        assert_eq!(rust_ident("1st"), "_1st");

        let mut used = HashSet::new();
        assert_eq!(unique_ident("a.b", &mut used), "a_b");
        assert_eq!(unique_ident("a_b", &mut used), "a_b_2");
    }

    #[test]
    fn pipelines_group_and_filter() {
        let info = info();
        let pipelines = get_pipelines(&info, None).unwrap();
        assert_eq!(pipelines.len(), 2);
        assert_eq!(pipelines.get_vec(FIXED_GROUP).map(Vec::len), Some(1));
        assert!(get_pipelines(&info, Some("pipe")).unwrap().contains_key("pipe"));
        assert!(get_pipelines(&info, Some("pipe1")).is_err());
    }

    #[test]
    fn generated_constructors() {
        let info = info();
        let text = generate("prog.json", &get_pipelines(&info, None).unwrap()).unwrap();
        assert!(text.contains("pub mod switch_ingress_acl {"));
        assert!(text.contains("pub const ID: u32 = 2;"));
        assert!(text.contains(
            "pub fn make_key(table: &TableInfo, match_priority: impl Into<Value>, \
             hdr_ipv4_dst_addr: Option<(Value, Value)>) -> Result<KeyRecord> {"
        ));
        assert!(text.contains("fields.push(KeyField::exact(\"$MATCH_PRIORITY\", match_priority));"));
        assert!(text.contains(
            "if let Some((value, mask)) = hdr_ipv4_dst_addr \
             { fields.push(KeyField::ternary(\"hdr.ipv4.dst_addr\", value, mask)); }"
        ));
        assert!(text.contains("bfrt::record::make_key(table, fields)"));
        assert!(text.contains("bfrt::record::make_key(table, Vec::new())"));
        assert!(text.contains(
            "pub fn make_set_port_data(table: &TableInfo, port: Value, type_: Option<&str>) -> Result<DataRecord> {"
        ));
        assert!(text.contains("bfrt::record::make_data(table, fields, Some(\"SwitchIngress.drop\"), false)"));
        assert!(text.contains("pub mod fixed {"));
        assert!(text.contains("pub const TABLE: &str = \"$PORT\";"));
    }
}
