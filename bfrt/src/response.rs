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

//! Decoding of read responses and stream notifications.

use proto::bfruntime;

use crate::attribute::Attribute;
use crate::error::ProtocolError;
use crate::record::{DataRecord, KeyRecord};
use crate::request::Target;
use crate::schema::{BfRtInfo, TableInfo};

/// One entry of a read response.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryResult {
    pub data: Option<DataRecord>,
    pub key: Option<KeyRecord>,
    pub target: Option<Target>,
}

fn check_table_id(table: &TableInfo, received: u32) -> Result<(), ProtocolError> {
    if received != table.id {
        return Err(ProtocolError::TableMismatch {
            expected: table.id,
            received,
        });
    }
    Ok(())
}

fn check_table(table: &TableInfo, entry: &bfruntime::TableEntry) -> Result<(), ProtocolError> {
    check_table_id(table, entry.get_table_id())
}

fn parse_key(table: &TableInfo, entry: &bfruntime::TableEntry) -> Result<Option<KeyRecord>, ProtocolError> {
    if entry.has_key() {
        KeyRecord::from_proto(table, entry.get_key()).map(Some)
    } else {
        Ok(None)
    }
}

/// Decodes the key and data of one table entry.  Works both on read
/// responses and on the entries of a serialized write request.
pub fn parse_table_entry(
    table: &TableInfo,
    entry: &bfruntime::TableEntry,
) -> Result<(Option<KeyRecord>, Option<DataRecord>), ProtocolError> {
    check_table(table, entry)?;
    let key = parse_key(table, entry)?;
    let data = if entry.has_data() {
        Some(DataRecord::from_proto(table, entry.get_data(), entry.get_is_default_entry())?)
    } else {
        None
    };
    Ok((key, data))
}

/// Decodes the entities of a read.  Data is only kept when the entity's
/// default-entry flag equals `get_default_entry`, and entities left with
/// neither key nor data are skipped.
pub fn parse_entry_get_response(
    table: &TableInfo,
    responses: &[bfruntime::ReadResponse],
    get_default_entry: bool,
) -> Result<Vec<EntryResult>, ProtocolError> {
    let mut results = Vec::new();
    for response in responses {
        for entity in response.get_entities() {
            if !entity.has_table_entry() {
                continue;
            }
            let entry = entity.get_table_entry();
            check_table(table, entry)?;
            let target = if entry.has_entry_tgt() {
                Some(Target::from_proto(entry.get_entry_tgt()))
            } else {
                None
            };
            let key = parse_key(table, entry)?;
            let data = if entry.has_data() && entry.get_is_default_entry() == get_default_entry {
                Some(DataRecord::from_proto(table, entry.get_data(), entry.get_is_default_entry())?)
            } else {
                None
            };
            if key.is_none() && data.is_none() {
                continue;
            }
            results.push(EntryResult { data, key, target });
        }
    }
    Ok(results)
}

fn entities(responses: &[bfruntime::ReadResponse]) -> impl Iterator<Item = &bfruntime::Entity> {
    responses.iter().flat_map(|r| r.get_entities())
}

/// The usage count of every usage entity in a read.
pub fn parse_usage_response(table: &TableInfo, responses: &[bfruntime::ReadResponse]) -> Result<Vec<u32>, ProtocolError> {
    entities(responses)
        .filter(|e| e.has_table_usage())
        .map(|e| {
            let usage = e.get_table_usage();
            check_table_id(table, usage.get_table_id())?;
            Ok(usage.get_usage())
        })
        .collect()
}

pub fn parse_attribute_response(
    table: &TableInfo,
    responses: &[bfruntime::ReadResponse],
) -> Result<Vec<Attribute>, ProtocolError> {
    entities(responses)
        .filter(|e| e.has_table_attribute())
        .map(|e| {
            let attr = e.get_table_attribute();
            check_table_id(table, attr.get_table_id())?;
            Attribute::from_proto(attr)
        })
        .collect()
}

/// Entry handles, one per key asked about.  A reply that echoes a key
/// instead of a handle is malformed.
pub fn parse_handle_response(table: &TableInfo, responses: &[bfruntime::ReadResponse]) -> Result<Vec<u32>, ProtocolError> {
    entities(responses)
        .filter(|e| e.has_handle())
        .map(|e| {
            let handle = e.get_handle();
            check_table_id(table, handle.get_table_id())?;
            if handle.has_key() {
                return Err(ProtocolError::Malformed(format!(
                    "handle reply for {} carries a key",
                    table.name
                )));
            }
            Ok(handle.get_handle_id())
        })
        .collect()
}

/// Resolves the learn object of a digest and decodes each of its entries.
pub fn parse_digest(info: &BfRtInfo, digest: &bfruntime::DigestList) -> Result<(String, Vec<DataRecord>), ProtocolError> {
    let learn = info
        .learn_by_id(digest.get_digest_id())
        .ok_or_else(|| ProtocolError::UnknownId {
            kind: "learn object",
            id: digest.get_digest_id(),
            scope: info.p4_name().to_string(),
        })?;
    let records = digest
        .get_data()
        .iter()
        .map(|data| DataRecord::from_proto(learn, data, false))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((learn.name.clone(), records))
}

/// Finds the table an idle-timeout notification refers to and decodes the
/// expired key.
pub fn key_from_idletime_notification(
    info: &BfRtInfo,
    notification: &bfruntime::IdleTimeoutNotification,
) -> Result<KeyRecord, ProtocolError> {
    let entry = notification.get_table_entry();
    let table = info
        .table_by_id(entry.get_table_id())
        .ok_or_else(|| ProtocolError::UnknownId {
            kind: "table",
            id: entry.get_table_id(),
            scope: info.p4_name().to_string(),
        })?;
    KeyRecord::from_proto(table, entry.get_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Value;
    use crate::record::{make_data, make_key, DataField, KeyField, Match, Presented};
    use crate::request::{Atomicity, RequestBuilder};
    use protobuf::RepeatedField;
    use serde_json::json;

    fn schema() -> BfRtInfo {
        let doc = json!({
            "tables": [{
                "name": "pipe.Ingress.t", "id": 7, "table_type": "MatchAction_Direct", "size": 64,
                "attributes": [], "supported_operations": [],
                "key": [{"id": 1, "name": "addr", "match_type": "Exact", "mandatory": true,
                         "annotations": [{"name": "$client_annotation", "value": "mac"}],
                         "type": {"type": "bytes", "width": 48}}],
                "action_specs": [{"id": 100, "name": "Ingress.fwd", "data": [
                    {"id": 1, "name": "port", "repeated": false, "mandatory": true, "read_only": false,
                     "type": {"type": "bytes", "width": 9}}]}],
                "data": [],
            }],
            "learn_filters": [{"id": 55, "name": "pipe.IngressDeparser.learn", "fields": [
                {"id": 1, "name": "src", "repeated": false, "type": {"type": "bytes", "width": 48}},
            ]}],
        });
        BfRtInfo::parse("prog", &serde_json::to_vec(&doc).unwrap(), None).unwrap()
    }

    fn entity(entry: bfruntime::TableEntry) -> bfruntime::Entity {
        let mut entity = bfruntime::Entity::new();
        entity.set_table_entry(entry);
        entity
    }

    fn response(entities: Vec<bfruntime::Entity>) -> bfruntime::ReadResponse {
        let mut response = bfruntime::ReadResponse::new();
        response.set_entities(RepeatedField::from_vec(entities));
        response
    }

    #[test]
    fn write_request_entries_decode_back() {
        let info = schema();
        let t = info.table("t").unwrap();
        let key = make_key(t, vec![KeyField::exact("addr", "00:11:22:33:44:55")]).unwrap();
        let data = make_data(t, vec![DataField::value("port", 5u8)], Some("fwd"), false).unwrap();
        let request = RequestBuilder::new(t, Target::default())
            .entry_add(&[key.clone()], &[data.clone()], Atomicity::default())
            .unwrap();
        let (k, d) = parse_table_entry(t, request.get_updates()[0].get_entity().get_table_entry()).unwrap();
        assert_eq!(k, Some(key));
        assert_eq!(d, Some(data));
    }

    #[test]
    fn default_entry_filter() {
        let info = schema();
        let t = info.table("t").unwrap();
        let data = make_data(t, vec![DataField::value("port", 5u8)], Some("fwd"), false).unwrap();

        let mut default_entry = bfruntime::TableEntry::new();
        default_entry.set_table_id(7);
        default_entry.set_is_default_entry(true);
        default_entry.set_data(data.to_proto());

        let mut keyed = default_entry.clone();
        keyed.set_is_default_entry(false);
        let key = make_key(t, vec![KeyField::exact("addr", "00:00:00:00:00:01")]).unwrap();
        keyed.set_key(key.to_proto());
        keyed.set_entry_tgt(Target::device(3).to_proto());

        let responses = vec![response(vec![entity(default_entry), entity(keyed)])];

        let normal = parse_entry_get_response(t, &responses, false).unwrap();
        assert_eq!(normal.len(), 1);
        assert_eq!(normal[0].key.as_ref(), Some(&key));
        assert_eq!(normal[0].target.map(|t| t.device_id), Some(3));
        assert!(!normal[0].data.as_ref().unwrap().is_default_entry());

        let default = parse_entry_get_response(t, &responses, true).unwrap();
        assert_eq!(default.len(), 2);
        assert!(default[0].data.as_ref().unwrap().is_default_entry());
        assert!(default[0].key.is_none());
        assert!(default[1].data.is_none() && default[1].key.is_some());
    }

    #[test]
    fn foreign_table_ids_are_errors() {
        let info = schema();
        let t = info.table("t").unwrap();
        let mut entry = bfruntime::TableEntry::new();
        entry.set_table_id(8);
        let err = parse_entry_get_response(t, &[response(vec![entity(entry)])], false).unwrap_err();
        assert_eq!(err, ProtocolError::TableMismatch { expected: 7, received: 8 });
    }

    #[test]
    fn digests_and_idle_timeouts() {
        let info = schema();
        let learn = info.learn("learn").unwrap();
        let record = make_data(learn, vec![DataField::value("src", 0x0a0b0cu32)], None, false).unwrap();
        let mut digest = bfruntime::DigestList::new();
        digest.set_digest_id(55);
        digest.set_data(RepeatedField::from_vec(vec![record.to_proto(), record.to_proto()]));
        let (name, records) = parse_digest(&info, &digest).unwrap();
        assert_eq!(name, "pipe.IngressDeparser.learn");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].to_presentation()["src"], Presented::Value(Value::Uint(0x0a0b0c)));

        digest.set_digest_id(56);
        assert!(matches!(parse_digest(&info, &digest), Err(ProtocolError::UnknownId { id: 56, .. })));

        let t = info.table("t").unwrap();
        let key = make_key(t, vec![KeyField::exact("addr", "00:00:00:00:00:01")]).unwrap();
        let mut entry = bfruntime::TableEntry::new();
        entry.set_table_id(7);
        entry.set_key(key.to_proto());
        let mut notification = bfruntime::IdleTimeoutNotification::new();
        notification.set_table_entry(entry);
        let decoded = key_from_idletime_notification(&info, &notification).unwrap();
        assert_eq!(
            decoded.to_presentation()["addr"],
            Match::Exact {
                value: Value::Str("00:00:00:00:00:01".into())
            }
        );
    }

    #[test]
    fn usage_attribute_and_handle_replies() {
        use crate::attribute::{AttributeKind, IdleTimeout};

        let info = schema();
        let t = info.table("t").unwrap();

        let mut usage = bfruntime::TableUsage::new();
        usage.set_table_id(7);
        usage.set_usage(42);
        let mut usage_entity = bfruntime::Entity::new();
        usage_entity.set_table_usage(usage);

        let idle = Attribute::IdleTimeout(IdleTimeout {
            enable: true,
            ..Default::default()
        });
        let mut attr_entity = bfruntime::Entity::new();
        attr_entity.set_table_attribute(idle.to_proto(7));

        let mut handle = bfruntime::TableHandle::new();
        handle.set_table_id(7);
        handle.set_handle_id(0x1001);
        let mut handle_entity = bfruntime::Entity::new();
        handle_entity.set_handle(handle);

        let responses = vec![response(vec![usage_entity, attr_entity]), response(vec![handle_entity])];
        assert_eq!(parse_usage_response(t, &responses).unwrap(), vec![42]);
        let attrs = parse_attribute_response(t, &responses).unwrap();
        assert_eq!(attrs, vec![idle]);
        assert_eq!(attrs[0].kind(), AttributeKind::IdleTimeout);
        assert_eq!(parse_handle_response(t, &responses).unwrap(), vec![0x1001]);

        let mut echoed = bfruntime::TableHandle::new();
        echoed.set_table_id(7);
        echoed.set_key(bfruntime::TableKey::new());
        let mut entity = bfruntime::Entity::new();
        entity.set_handle(echoed);
        assert!(matches!(
            parse_handle_response(t, &[response(vec![entity])]),
            Err(ProtocolError::Malformed(_))
        ));

        let mut foreign = bfruntime::TableUsage::new();
        foreign.set_table_id(8);
        let mut entity = bfruntime::Entity::new();
        entity.set_table_usage(foreign);
        assert!(matches!(
            parse_usage_response(t, &[response(vec![entity])]),
            Err(ProtocolError::TableMismatch { received: 8, .. })
        ));
    }
}
