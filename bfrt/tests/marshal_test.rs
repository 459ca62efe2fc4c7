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

mod common;

use anyhow::Result;

use bfrt::codec::Value;
use bfrt::error::{Error, NameResolutionError, ProtocolError};
use bfrt::record::{make_data, make_key, Presented};
use bfrt::response::parse_table_entry;
use bfrt::{Atomicity, BfRtInfo, DataField, DataRecord, KeyField, RequestBuilder, Target};

use serde_json::json;

fn singleton(id: u32, name: &str, container: serde_json::Value) -> serde_json::Value {
    json!({"mandatory": false, "read_only": false, "singleton":
        {"id": id, "name": name, "repeated": true, "container": container}})
}

/// A table whose only data field nests containers three deep.
fn nested_schema() -> BfRtInfo {
    let level3 = singleton(20, "level3", json!([
        {"id": 30, "name": "leaf", "repeated": false, "type": {"type": "uint32"}},
    ]));
    let level2 = singleton(10, "level2", json!([
        level3,
        {"id": 11, "name": "count", "repeated": false, "type": {"type": "uint16"}},
    ]));
    let level1 = singleton(1, "level1", json!([level2]));
    let doc = json!({"tables": [{
        "name": "pipe.$pre.node", "id": 40, "table_type": "PreNode", "size": 8,
        "attributes": [], "supported_operations": [],
        "key": [{"id": 1, "name": "$MULTICAST_NODE_ID", "repeated": false, "mandatory": true,
                 "match_type": "Exact", "type": {"type": "uint32"}}],
        "data": [level1],
    }]});
    BfRtInfo::parse("prog", &serde_json::to_vec(&doc).unwrap(), None).unwrap()
}

fn nested_data(info: &BfRtInfo, leaf: u32) -> Result<DataRecord> {
    let table = info.table("node")?;
    let level3 = DataField::containers("level3", vec![vec![DataField::value("leaf", leaf)]]);
    let level2 = DataField::containers("level2", vec![vec![level3, DataField::value("count", 2u32)]]);
    Ok(make_data(table, vec![DataField::containers("level1", vec![vec![level2]])], None, false)?)
}

#[test]
fn containers_round_trip_three_deep() -> Result<()> {
    let info = nested_schema();
    let table = info.table("node")?;
    let data = nested_data(&info, 7)?;

    let decoded = DataRecord::from_proto(table, &data.to_proto(), false)?;
    assert_eq!(decoded, data);

    let presented = decoded.to_presentation();
    let level1 = match &presented["level1"] {
        Presented::Containers(items) => items,
        other => panic!("unexpected {:?}", other),
    };
    let level2 = match &level1[0]["level2"] {
        Presented::Containers(items) => items,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(level2[0]["count"], Presented::Value(Value::Uint(2)));
    let level3 = match &level2[0]["level3"] {
        Presented::Containers(items) => items,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(level3[0]["leaf"], Presented::Value(Value::Uint(7)));
    assert!(!level3[0].contains_key("count"));

    // Inner names do not leak into the table scope.
    assert!(matches!(
        make_data(table, vec![DataField::value("leaf", 1u32)], None, false),
        Err(Error::NameResolution(NameResolutionError::NotFound { .. }))
    ));
    Ok(())
}

#[test]
fn bad_inner_field_aborts_the_whole_container() -> Result<()> {
    let info = nested_schema();
    let table = info.table("node")?;
    let mut wire = nested_data(&info, 7)?.to_proto();
    wire.mut_fields()[0].mut_container_arr_val().mut_container()[0].mut_val()[0].set_field_id(99);
    let err = DataRecord::from_proto(table, &wire, false).unwrap_err();
    assert!(matches!(err, ProtocolError::UnknownId { id: 99, .. }));
    Ok(())
}

#[test]
fn insert_request_decodes_to_the_same_records() -> Result<()> {
    let doc = json!({"tables": [{
        "name": "pipe.t", "id": 7, "table_type": "MatchAction_Direct", "size": 16,
        "attributes": [], "supported_operations": [],
        "key": [{"id": 1, "name": "k", "repeated": false, "mandatory": true,
                 "match_type": "Exact", "type": {"type": "bytes", "width": 8}}],
        "action_specs": [{"id": 3, "name": "a", "data": [
            {"id": 1, "name": "d", "repeated": false, "mandatory": true, "read_only": false,
             "type": {"type": "uint32"}},
        ]}],
        "data": [],
    }]});
    let info = BfRtInfo::parse("prog", &serde_json::to_vec(&doc)?, None)?;
    let t = info.table("t")?;
    let key = make_key(t, vec![KeyField::exact("k", 5u32)])?;
    let data = make_data(t, vec![DataField::value("d", 1000u32)], Some("a"), false)?;

    let request = RequestBuilder::new(t, Target::default()).entry_add(&[key.clone()], &[data.clone()], Atomicity::default())?;
    let entry = request.get_updates()[0].get_entity().get_table_entry();
    let (decoded_key, decoded_data) = parse_table_entry(t, entry)?;
    assert_eq!(decoded_key, Some(key));
    assert_eq!(decoded_data.as_ref().and_then(|d| d.action_name()), Some("a"));
    assert_eq!(decoded_data, Some(data));

    // Out-of-range values never reach the wire.
    assert!(matches!(
        make_key(t, vec![KeyField::exact("k", 256u32)]),
        Err(Error::FieldValue(_))
    ));
    Ok(())
}

#[test]
fn pipeline_collisions_need_longer_names() -> Result<()> {
    let info = BfRtInfo::parse(common::P4_NAME, &common::bfrt_json(), None)?;
    for short in &["mirror", "ingress.mirror"] {
        assert!(matches!(info.table(short), Err(NameResolutionError::Ambiguous { .. })));
    }
    assert_eq!(info.table("p1.ingress.mirror")?.id, 10);
    assert_eq!(info.table("pipe.p2.ingress.mirror")?.id, 11);
    assert_eq!(info.table("fwd")?.name, "pipe.SwitchIngress.fwd");
    Ok(())
}
