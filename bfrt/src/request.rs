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

//! Composition of write and read requests for one table.

use proto::bfruntime::{self, Update_Type};

use protobuf::RepeatedField;

use serde::Deserialize;

use std::fmt::{self, Display};

use tracing::debug;

use crate::attribute::{Attribute, AttributeKind, EntryScope, IdleTimeout};
use crate::error::RequestError;
use crate::record::{DataRecord, KeyRecord};
use crate::schema::{DataScope, TableInfo};

/// Which part of a device a request addresses.  The default covers all
/// pipes, both directions and all parsers of device 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct Target {
    pub device_id: u32,
    pub pipe_id: u32,
    pub direction: u32,
    pub prsr_id: u32,
}

impl Default for Target {
    fn default() -> Self {
        Target {
            device_id: 0,
            pipe_id: 0xffff,
            direction: 0xff,
            prsr_id: 0xff,
        }
    }
}

impl Target {
    pub fn device(device_id: u32) -> Self {
        Target {
            device_id,
            ..Default::default()
        }
    }

    pub fn to_proto(&self) -> bfruntime::TargetDevice {
        let mut target = bfruntime::TargetDevice::new();
        target.set_device_id(self.device_id);
        target.set_pipe_id(self.pipe_id);
        target.set_direction(self.direction);
        target.set_prsr_id(self.prsr_id);
        target
    }

    pub fn from_proto(target: &bfruntime::TargetDevice) -> Self {
        Target {
            device_id: target.get_device_id(),
            pipe_id: target.get_pipe_id(),
            direction: target.get_direction(),
            prsr_id: target.get_prsr_id(),
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "device {} pipe {:#x} direction {:#x} parser {:#x}",
            self.device_id, self.pipe_id, self.direction, self.prsr_id
        )
    }
}

/// Per-entry flags.  `None` leaves a flag at its wire default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryFlags {
    pub from_hw: Option<bool>,
    pub key_only: Option<bool>,
    pub reset_ttl: Option<bool>,
    pub mod_del: Option<bool>,
}

impl EntryFlags {
    pub fn from_hw(from_hw: bool) -> Self {
        EntryFlags {
            from_hw: Some(from_hw),
            ..Default::default()
        }
    }

    pub fn reset_ttl(reset_ttl: bool) -> Self {
        EntryFlags {
            reset_ttl: Some(reset_ttl),
            ..Default::default()
        }
    }

    pub fn to_proto(&self) -> bfruntime::TableFlags {
        let mut flags = bfruntime::TableFlags::new();
        if let Some(v) = self.from_hw {
            flags.set_from_hw(v);
        }
        if let Some(v) = self.key_only {
            flags.set_key_only(v);
        }
        if let Some(v) = self.reset_ttl {
            flags.set_reset_ttl(v);
        }
        if let Some(v) = self.mod_del {
            flags.set_mod_del(v);
        }
        flags
    }

    /// Folds an incremental-modify direction into the flags.  An explicit
    /// `mod_del` that disagrees with it is an error; an absent one is not.
    pub fn with_mod_inc(self, mod_inc: ModIncType) -> Result<Self, RequestError> {
        let mod_del = mod_inc == ModIncType::Delete;
        match self.mod_del {
            Some(explicit) if explicit != mod_del => Err(RequestError::ContradictingModDel {
                explicit,
                mod_inc: mod_del,
            }),
            _ => Ok(EntryFlags {
                mod_del: Some(mod_del),
                ..self
            }),
        }
    }
}

/// Direction of an incremental modify on array-valued data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModIncType {
    Add,
    Delete,
}

/// Passed through to the device, which implements it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Atomicity {
    ContinueOnError,
    RollbackOnError,
    DataplaneAtomic,
}

impl Default for Atomicity {
    fn default() -> Self {
        Atomicity::ContinueOnError
    }
}

impl Atomicity {
    pub fn to_proto(self) -> bfruntime::WriteRequest_Atomicity {
        match self {
            Atomicity::ContinueOnError => bfruntime::WriteRequest_Atomicity::CONTINUE_ON_ERROR,
            Atomicity::RollbackOnError => bfruntime::WriteRequest_Atomicity::ROLLBACK_ON_ERROR,
            Atomicity::DataplaneAtomic => bfruntime::WriteRequest_Atomicity::DATAPLANE_ATOMIC,
        }
    }
}

/// Builds requests for one table.  `client_id` is left for the session to
/// fill in.
#[derive(Clone, Debug)]
pub struct RequestBuilder<'a> {
    table: &'a TableInfo,
    target: Target,
    p4_name: Option<String>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(table: &'a TableInfo, target: Target) -> Self {
        RequestBuilder {
            table,
            target,
            p4_name: None,
        }
    }

    /// Names the program explicitly, for clients that never subscribed.
    pub fn with_p4_name(mut self, p4_name: &str) -> Self {
        self.p4_name = Some(p4_name.to_string());
        self
    }

    pub fn table(&self) -> &'a TableInfo {
        self.table
    }

    fn table_entry(&self) -> bfruntime::TableEntry {
        let mut entry = bfruntime::TableEntry::new();
        entry.set_table_id(self.table.id);
        entry
    }

    fn check_key(&self, key: &KeyRecord) -> Result<(), RequestError> {
        if key.table_id() != self.table.id {
            return Err(RequestError::WrongTable {
                record: key.table().to_string(),
                table: self.table.name.clone(),
            });
        }
        Ok(())
    }

    fn check_data(&self, data: &DataRecord) -> Result<(), RequestError> {
        if data.scope_id() != self.table.id {
            return Err(RequestError::WrongTable {
                record: data.scope().to_string(),
                table: self.table.name.clone(),
            });
        }
        Ok(())
    }

    fn check_not_default_only(&self, data: &DataRecord) -> Result<(), RequestError> {
        let action = data.action_id().and_then(|id| self.table.action_by_id(id));
        match action {
            Some(action) if action.is_default_only() => Err(RequestError::DefaultOnlyAction {
                table: self.table.name.clone(),
                action: action.name.clone(),
            }),
            _ => Ok(()),
        }
    }

    fn write_request(&self, updates: Vec<bfruntime::Update>, atomicity: Atomicity) -> bfruntime::WriteRequest {
        let mut request = bfruntime::WriteRequest::new();
        request.set_target(self.target.to_proto());
        if let Some(p4_name) = &self.p4_name {
            request.set_p4_name(p4_name.clone());
        }
        request.set_atomicity(atomicity.to_proto());
        request.set_updates(RepeatedField::from_vec(updates));
        request
    }

    fn update(kind: Update_Type, entry: bfruntime::TableEntry) -> bfruntime::Update {
        let mut entity = bfruntime::Entity::new();
        entity.set_table_entry(entry);
        Self::update_entity(kind, entity)
    }

    fn update_entity(kind: Update_Type, entity: bfruntime::Entity) -> bfruntime::Update {
        let mut update = bfruntime::Update::new();
        update.set_field_type(kind);
        update.set_entity(entity);
        update
    }

    fn read(&self, entities: Vec<bfruntime::Entity>) -> bfruntime::ReadRequest {
        let mut request = bfruntime::ReadRequest::new();
        request.set_target(self.target.to_proto());
        if let Some(p4_name) = &self.p4_name {
            request.set_p4_name(p4_name.clone());
        }
        request.set_entities(RepeatedField::from_vec(entities));
        request
    }

    /// One update per positional (key, data) pair.  Either list may be
    /// empty; if both are given their lengths must agree.
    fn updates(
        &self,
        kind: Update_Type,
        keys: &[KeyRecord],
        datas: &[DataRecord],
        flags: Option<EntryFlags>,
    ) -> Result<Vec<bfruntime::Update>, RequestError> {
        if !keys.is_empty() && !datas.is_empty() && keys.len() != datas.len() {
            return Err(RequestError::LengthMismatch {
                keys: keys.len(),
                datas: datas.len(),
            });
        }
        let count = keys.len().max(datas.len());
        let mut updates = Vec::with_capacity(count);
        for i in 0..count {
            let mut entry = self.table_entry();
            if let Some(flags) = flags {
                entry.set_table_flags(flags.to_proto());
            }
            if let Some(key) = keys.get(i) {
                self.check_key(key)?;
                entry.set_key(key.to_proto());
            }
            if let Some(data) = datas.get(i) {
                self.check_data(data)?;
                if keys.get(i).is_some() && (kind == Update_Type::INSERT || kind == Update_Type::MODIFY) {
                    self.check_not_default_only(data)?;
                }
                entry.set_data(data.to_proto());
            }
            updates.push(Self::update(kind, entry));
        }
        debug!("{}: {} {:?} update(s)", self.table.name, updates.len(), kind);
        Ok(updates)
    }

    pub fn entry_add(
        &self,
        keys: &[KeyRecord],
        datas: &[DataRecord],
        atomicity: Atomicity,
    ) -> Result<bfruntime::WriteRequest, RequestError> {
        let updates = self.updates(Update_Type::INSERT, keys, datas, None)?;
        Ok(self.write_request(updates, atomicity))
    }

    /// `flags` defaults to resetting the entry TTL.
    pub fn entry_mod(
        &self,
        keys: &[KeyRecord],
        datas: &[DataRecord],
        flags: Option<EntryFlags>,
    ) -> Result<bfruntime::WriteRequest, RequestError> {
        let flags = flags.unwrap_or_else(|| EntryFlags::reset_ttl(true));
        let updates = self.updates(Update_Type::MODIFY, keys, datas, Some(flags))?;
        Ok(self.write_request(updates, Atomicity::default()))
    }

    pub fn entry_mod_inc(
        &self,
        keys: &[KeyRecord],
        datas: &[DataRecord],
        mod_inc: ModIncType,
        flags: Option<EntryFlags>,
    ) -> Result<bfruntime::WriteRequest, RequestError> {
        let flags = flags.unwrap_or_default().with_mod_inc(mod_inc)?;
        let updates = self.updates(Update_Type::MODIFY_INC, keys, datas, Some(flags))?;
        Ok(self.write_request(updates, Atomicity::default()))
    }

    /// With no keys this is a single keyless delete, which clears the
    /// table.
    pub fn entry_del(&self, keys: &[KeyRecord]) -> Result<bfruntime::WriteRequest, RequestError> {
        let updates = if keys.is_empty() {
            vec![Self::update(Update_Type::DELETE, self.table_entry())]
        } else {
            self.updates(Update_Type::DELETE, keys, &[], None)?
        };
        Ok(self.write_request(updates, Atomicity::default()))
    }

    pub fn default_entry_set(&self, data: &DataRecord) -> Result<bfruntime::WriteRequest, RequestError> {
        self.check_data(data)?;
        let mut entry = self.table_entry();
        entry.set_is_default_entry(true);
        entry.set_data(data.to_proto());
        Ok(self.write_request(vec![Self::update(Update_Type::MODIFY, entry)], Atomicity::default()))
    }

    pub fn default_entry_reset(&self) -> bfruntime::WriteRequest {
        let mut entry = self.table_entry();
        entry.set_is_default_entry(true);
        self.write_request(vec![Self::update(Update_Type::DELETE, entry)], Atomicity::default())
    }

    /// Reads by handle, by key, or (with neither) the whole table.
    /// `flags` defaults to reading from hardware.  `required_data` limits
    /// the fields returned and pins the read to its action.
    pub fn entry_get(
        &self,
        keys: &[KeyRecord],
        flags: Option<EntryFlags>,
        required_data: Option<&DataRecord>,
        handle: Option<u32>,
    ) -> Result<bfruntime::ReadRequest, RequestError> {
        self.read_request(keys, flags, required_data, handle, false)
    }

    pub fn default_entry_get(
        &self,
        flags: Option<EntryFlags>,
        required_data: Option<&DataRecord>,
    ) -> Result<bfruntime::ReadRequest, RequestError> {
        self.read_request(&[], flags, required_data, None, true)
    }

    fn read_request(
        &self,
        keys: &[KeyRecord],
        flags: Option<EntryFlags>,
        required_data: Option<&DataRecord>,
        handle: Option<u32>,
        default_entry: bool,
    ) -> Result<bfruntime::ReadRequest, RequestError> {
        let flags = flags.unwrap_or_else(|| EntryFlags::from_hw(true));
        if let Some(data) = required_data {
            self.check_data(data)?;
        }
        let entry = |key: Option<&KeyRecord>, is_default_entry: bool| -> Result<bfruntime::Entity, RequestError> {
            let mut entry = self.table_entry();
            entry.set_is_default_entry(is_default_entry);
            entry.set_table_flags(flags.to_proto());
            if let Some(key) = key {
                self.check_key(key)?;
                entry.set_key(key.to_proto());
            }
            if let Some(data) = required_data {
                entry.set_data(data.to_proto());
            }
            let mut entity = bfruntime::Entity::new();
            entity.set_table_entry(entry);
            Ok(entity)
        };

        let entities = match handle {
            Some(handle) => {
                let mut entity = entry(None, default_entry)?;
                entity.mut_table_entry().set_handle_id(handle);
                vec![entity]
            }
            None if !keys.is_empty() => keys
                .iter()
                .map(|k| entry(Some(k), false))
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![entry(None, default_entry)?],
        };

        debug!("{}: reading {} entit(ies)", self.table.name, entities.len());
        Ok(self.read(entities))
    }

    /// Asks for the number of entries in use.
    pub fn usage_get(&self) -> bfruntime::ReadRequest {
        let mut usage = bfruntime::TableUsage::new();
        usage.set_table_id(self.table.id);
        let mut entity = bfruntime::Entity::new();
        entity.set_table_usage(usage);
        self.read(vec![entity])
    }

    /// Reads one attribute, which the table must list as supported.
    pub fn attribute_get(&self, kind: AttributeKind) -> Result<bfruntime::ReadRequest, RequestError> {
        if !self.table.supports_attribute(kind.schema_name()) {
            return Err(RequestError::UnsupportedAttribute {
                table: self.table.name.clone(),
                attribute: kind.schema_name().to_string(),
                supported: self.table.attributes.clone(),
            });
        }
        let mut entity = bfruntime::Entity::new();
        entity.set_table_attribute(kind.selector(self.table.id));
        Ok(self.read(vec![entity]))
    }

    /// Attributes are written as inserts.
    pub fn attribute_set(&self, attribute: &Attribute) -> bfruntime::WriteRequest {
        let mut entity = bfruntime::Entity::new();
        entity.set_table_attribute(attribute.to_proto(self.table.id));
        debug!("{}: setting {}", self.table.name, attribute.kind());
        self.write_request(vec![Self::update_entity(Update_Type::INSERT, entity)], Atomicity::default())
    }

    pub fn attribute_entry_scope_set(&self, scope: EntryScope) -> bfruntime::WriteRequest {
        self.attribute_set(&Attribute::EntryScope(scope))
    }

    pub fn attribute_idle_time_set(&self, idle: IdleTimeout) -> bfruntime::WriteRequest {
        self.attribute_set(&Attribute::IdleTimeout(idle))
    }

    pub fn attribute_port_status_change_set(&self, enable: bool) -> bfruntime::WriteRequest {
        self.attribute_set(&Attribute::PortStatusChangeNotify(enable))
    }

    pub fn attribute_port_stat_poll_intvl_set(&self, interval_ms: u32) -> bfruntime::WriteRequest {
        self.attribute_set(&Attribute::PollInterval(interval_ms))
    }

    pub fn attribute_meter_bytecount_adjust_set(&self, bytes: i32) -> bfruntime::WriteRequest {
        self.attribute_set(&Attribute::MeterByteCountAdjust(bytes))
    }

    /// Runs one of the table's `supported_operations`, such as
    /// `SyncCounters`.
    pub fn operations_execute(&self, operation: &str) -> Result<bfruntime::WriteRequest, RequestError> {
        if !self.table.supports(operation) {
            return Err(RequestError::UnsupportedOperation {
                table: self.table.name.clone(),
                operation: operation.to_string(),
                supported: self.table.operations.clone(),
            });
        }
        let mut op = bfruntime::TableOperation::new();
        op.set_table_id(self.table.id);
        op.set_table_operations_type(operation.to_string());
        let mut entity = bfruntime::Entity::new();
        entity.set_table_operation(op);
        Ok(self.write_request(vec![Self::update_entity(Update_Type::INSERT, entity)], Atomicity::default()))
    }

    /// Looks up the entry handle of each key.
    pub fn handle_get(&self, keys: &[KeyRecord]) -> Result<bfruntime::ReadRequest, RequestError> {
        if keys.is_empty() {
            return Err(RequestError::EmptyKeyList {
                table: self.table.name.clone(),
            });
        }
        let entities = keys
            .iter()
            .map(|key| {
                self.check_key(key)?;
                let mut handle = bfruntime::TableHandle::new();
                handle.set_table_id(self.table.id);
                handle.set_key(key.to_proto());
                let mut entity = bfruntime::Entity::new();
                entity.set_handle(handle);
                Ok(entity)
            })
            .collect::<Result<Vec<_>, RequestError>>()?;
        Ok(self.read(entities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{IdleTableMode, Scope, ScopeMode};
    use crate::record::{make_data, make_key, DataField, KeyField};
    use crate::schema::BfRtInfo;
    use serde_json::json;

    fn schema() -> BfRtInfo {
        let table = |name: &str, id: u32| {
            json!({
                "name": name, "id": id, "table_type": "MatchAction_Direct", "size": 64,
                "attributes": ["EntryScope", "IdleTimeout"], "supported_operations": ["SyncCounters"],
                "key": [{"id": 1, "name": "port", "match_type": "Exact", "mandatory": true,
                         "type": {"type": "bytes", "width": 9}}],
                "action_specs": [
                    {"id": 100, "name": "Ingress.fwd", "data": [
                        {"id": 1, "name": "dst", "repeated": false, "mandatory": true, "read_only": false,
                         "type": {"type": "bytes", "width": 9}}]},
                    {"id": 101, "name": "Ingress.miss", "annotations": [{"name": "@defaultonly"}], "data": []},
                ],
                "data": [],
            })
        };
        let doc = json!({"tables": [table("pipe.Ingress.t", 1), table("pipe.Ingress.u", 2)]});
        BfRtInfo::parse("prog", &serde_json::to_vec(&doc).unwrap(), None).unwrap()
    }

    fn key(table: &TableInfo, port: u32) -> KeyRecord {
        make_key(table, vec![KeyField::exact("port", port)]).unwrap()
    }

    fn fwd(table: &TableInfo, dst: u32) -> DataRecord {
        make_data(table, vec![DataField::value("dst", dst)], Some("fwd"), false).unwrap()
    }

    #[test]
    fn positional_updates() {
        let info = schema();
        let t = info.table("t").unwrap();
        let builder = RequestBuilder::new(t, Target::default()).with_p4_name("prog");
        let request = builder
            .entry_add(&[key(t, 1), key(t, 2)], &[fwd(t, 3), fwd(t, 4)], Atomicity::RollbackOnError)
            .unwrap();
        assert_eq!(request.get_updates().len(), 2);
        assert_eq!(request.get_p4_name(), "prog");
        assert_eq!(request.get_atomicity(), bfruntime::WriteRequest_Atomicity::ROLLBACK_ON_ERROR);
        assert_eq!(request.get_target().get_pipe_id(), 0xffff);
        let entry = request.get_updates()[1].get_entity().get_table_entry();
        assert_eq!(entry.get_table_id(), 1);
        assert_eq!(entry.get_data().get_action_id(), 100);
        assert!(!entry.get_is_default_entry());

        assert_eq!(
            builder.entry_add(&[key(t, 1)], &[fwd(t, 3), fwd(t, 4)], Atomicity::default()),
            Err(RequestError::LengthMismatch { keys: 1, datas: 2 })
        );
    }

    #[test]
    fn modify_defaults_and_mod_inc_flags() {
        let info = schema();
        let t = info.table("t").unwrap();
        let builder = RequestBuilder::new(t, Target::default());

        let request = builder.entry_mod(&[key(t, 1)], &[fwd(t, 2)], None).unwrap();
        let flags = request.get_updates()[0].get_entity().get_table_entry().get_table_flags();
        assert!(flags.get_reset_ttl());

        let request = builder.entry_mod_inc(&[key(t, 1)], &[fwd(t, 2)], ModIncType::Delete, None).unwrap();
        let update = &request.get_updates()[0];
        assert_eq!(update.get_field_type(), Update_Type::MODIFY_INC);
        assert!(update.get_entity().get_table_entry().get_table_flags().get_mod_del());

        let explicit = EntryFlags {
            mod_del: Some(false),
            ..Default::default()
        };
        assert_eq!(
            builder.entry_mod_inc(&[key(t, 1)], &[fwd(t, 2)], ModIncType::Delete, Some(explicit)),
            Err(RequestError::ContradictingModDel {
                explicit: false,
                mod_inc: true
            })
        );
        assert!(builder
            .entry_mod_inc(&[key(t, 1)], &[fwd(t, 2)], ModIncType::Add, Some(EntryFlags::from_hw(true)))
            .is_ok());
    }

    #[test]
    fn deletes_and_default_entries() {
        let info = schema();
        let t = info.table("t").unwrap();
        let builder = RequestBuilder::new(t, Target::device(1));

        let request = builder.entry_del(&[]).unwrap();
        assert_eq!(request.get_updates().len(), 1);
        let entry = request.get_updates()[0].get_entity().get_table_entry();
        assert!(!entry.has_key());
        assert_eq!(request.get_target().get_device_id(), 1);

        let miss = make_data(t, vec![], Some("miss"), false).unwrap();
        let request = builder.default_entry_set(&miss).unwrap();
        let update = &request.get_updates()[0];
        assert_eq!(update.get_field_type(), Update_Type::MODIFY);
        assert!(update.get_entity().get_table_entry().get_is_default_entry());

        let request = builder.default_entry_reset();
        let update = &request.get_updates()[0];
        assert_eq!(update.get_field_type(), Update_Type::DELETE);
        assert!(update.get_entity().get_table_entry().get_is_default_entry());

        assert!(matches!(
            builder.entry_add(&[key(t, 1)], &[miss], Atomicity::default()),
            Err(RequestError::DefaultOnlyAction { .. })
        ));
    }

    #[test]
    fn records_from_other_tables_are_rejected() {
        let info = schema();
        let t = info.table("t").unwrap();
        let u = info.table("u").unwrap();
        let builder = RequestBuilder::new(t, Target::default());
        assert!(matches!(
            builder.entry_del(&[key(u, 1)]),
            Err(RequestError::WrongTable { .. })
        ));
    }

    #[test]
    fn read_shapes() {
        let info = schema();
        let t = info.table("t").unwrap();
        let builder = RequestBuilder::new(t, Target::default());

        let all = builder.entry_get(&[], None, None, None).unwrap();
        assert_eq!(all.get_entities().len(), 1);
        let entry = all.get_entities()[0].get_table_entry();
        assert!(!entry.get_is_default_entry() && !entry.has_key());
        assert!(entry.get_table_flags().get_from_hw());

        let keyed = builder.entry_get(&[key(t, 1), key(t, 2)], None, None, None).unwrap();
        assert_eq!(keyed.get_entities().len(), 2);
        assert!(keyed.get_entities().iter().all(|e| e.get_table_entry().has_key()));

        let by_handle = builder.entry_get(&[key(t, 1)], None, None, Some(9)).unwrap();
        assert_eq!(by_handle.get_entities().len(), 1);
        assert_eq!(by_handle.get_entities()[0].get_table_entry().get_handle_id(), 9);

        let filter = make_data(t, vec![DataField::name_only("dst")], Some("fwd"), true).unwrap();
        let default = builder
            .default_entry_get(Some(EntryFlags::from_hw(false)), Some(&filter))
            .unwrap();
        let entry = default.get_entities()[0].get_table_entry();
        assert!(entry.get_is_default_entry());
        assert!(!entry.get_table_flags().get_from_hw());
        assert_eq!(entry.get_data().get_action_id(), 100);
        assert!(!entry.get_data().get_fields()[0].has_stream());
    }

    #[test]
    fn usage_and_attribute_reads() {
        let info = schema();
        let t = info.table("t").unwrap();
        let builder = RequestBuilder::new(t, Target::device(2)).with_p4_name("prog");

        let usage = builder.usage_get();
        assert_eq!(usage.get_p4_name(), "prog");
        assert_eq!(usage.get_target().get_device_id(), 2);
        assert_eq!(usage.get_entities()[0].get_table_usage().get_table_id(), 1);

        let idle = builder.attribute_get(AttributeKind::IdleTimeout).unwrap();
        let attr = idle.get_entities()[0].get_table_attribute();
        assert_eq!(attr.get_table_id(), 1);
        assert!(attr.has_idle_table());

        match builder.attribute_get(AttributeKind::PollInterval) {
            Err(RequestError::UnsupportedAttribute { attribute, supported, .. }) => {
                assert_eq!(attribute, "poll_intvl_ms");
                assert_eq!(supported, vec!["EntryScope", "IdleTimeout"]);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn attribute_writes_are_inserts() {
        let info = schema();
        let t = info.table("t").unwrap();
        let builder = RequestBuilder::new(t, Target::default());

        let request = builder.attribute_idle_time_set(IdleTimeout {
            enable: true,
            mode: IdleTableMode::Poll,
            ..Default::default()
        });
        let update = &request.get_updates()[0];
        assert_eq!(update.get_field_type(), Update_Type::INSERT);
        let idle = update.get_entity().get_table_attribute().get_idle_table();
        assert!(idle.get_enable());
        assert_eq!(idle.get_ttl_query_interval(), 5000);
        assert_eq!(idle.get_min_ttl(), 1000);

        let request = builder.attribute_entry_scope_set(EntryScope {
            prsr: Some(Scope {
                mode: ScopeMode::All,
                args: 0xff,
            }),
            ..Default::default()
        });
        let scope = request.get_updates()[0].get_entity().get_table_attribute().get_entry_scope();
        assert!(scope.has_pipe_scope() && scope.has_prsr_scope() && !scope.has_gress_scope());

        let attr = |r: &bfruntime::WriteRequest| r.get_updates()[0].get_entity().get_table_attribute().clone();
        assert!(attr(&builder.attribute_port_status_change_set(true)).get_port_status_notify().get_enable());
        assert_eq!(attr(&builder.attribute_port_stat_poll_intvl_set(200)).get_intvl_ms().get_intvl_val(), 200);
        assert_eq!(
            attr(&builder.attribute_meter_bytecount_adjust_set(-12)).get_byte_count_adj().get_byte_count_adjust(),
            -12
        );
    }

    #[test]
    fn operations_and_handles() {
        let info = schema();
        let t = info.table("t").unwrap();
        let u = info.table("u").unwrap();
        let builder = RequestBuilder::new(t, Target::default());

        let request = builder.operations_execute("SyncCounters").unwrap();
        let update = &request.get_updates()[0];
        assert_eq!(update.get_field_type(), Update_Type::INSERT);
        let op = update.get_entity().get_table_operation();
        assert_eq!((op.get_table_id(), op.get_table_operations_type()), (1, "SyncCounters"));
        assert!(matches!(
            builder.operations_execute("SyncRegisters"),
            Err(RequestError::UnsupportedOperation { .. })
        ));

        let request = builder.handle_get(&[key(t, 1), key(t, 2)]).unwrap();
        assert_eq!(request.get_entities().len(), 2);
        let handle = request.get_entities()[1].get_handle();
        assert_eq!(handle.get_table_id(), 1);
        assert_eq!(handle.get_key(), &key(t, 2).to_proto());
        assert!(matches!(builder.handle_get(&[]), Err(RequestError::EmptyKeyList { .. })));
        assert!(matches!(builder.handle_get(&[key(u, 1)]), Err(RequestError::WrongTable { .. })));
    }
}
