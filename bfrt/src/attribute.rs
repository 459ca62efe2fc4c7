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

//! Table attributes: the per-table settings that live beside the entries,
//! such as idle timeouts and entry scope.

use proto::bfruntime::{self, IdleTable_IdleTableMode, Mode_PredefinedMode, Mode_oneof_scope, TableAttribute_oneof_attribute};

use std::fmt::{self, Display};

use crate::error::ProtocolError;

/// An attribute a table may list in its schema `attributes`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    EntryScope,
    IdleTimeout,
    DynamicHashing,
    MeterByteCountAdjust,
    PortStatusChangeNotify,
    PollInterval,
}

impl AttributeKind {
    /// The name used in `bf-rt.json`.
    pub fn schema_name(self) -> &'static str {
        match self {
            AttributeKind::EntryScope => "EntryScope",
            AttributeKind::IdleTimeout => "IdleTimeout",
            AttributeKind::DynamicHashing => "DynamicHashing",
            AttributeKind::MeterByteCountAdjust => "MeterByteCountAdjust",
            AttributeKind::PortStatusChangeNotify => "port_status_notif_cb",
            AttributeKind::PollInterval => "poll_intvl_ms",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        [
            AttributeKind::EntryScope,
            AttributeKind::IdleTimeout,
            AttributeKind::DynamicHashing,
            AttributeKind::MeterByteCountAdjust,
            AttributeKind::PortStatusChangeNotify,
            AttributeKind::PollInterval,
        ]
        .iter()
        .copied()
        .find(|k| k.schema_name() == name)
    }

    /// An attribute message that only selects this attribute, for reads.
    pub fn selector(self, table_id: u32) -> bfruntime::TableAttribute {
        let mut attr = bfruntime::TableAttribute::new();
        attr.set_table_id(table_id);
        match self {
            AttributeKind::EntryScope => attr.set_entry_scope(bfruntime::EntryScope::new()),
            AttributeKind::IdleTimeout => attr.set_idle_table(bfruntime::IdleTable::new()),
            AttributeKind::DynamicHashing => attr.set_dyn_hashing(bfruntime::DynHashing::new()),
            AttributeKind::MeterByteCountAdjust => attr.set_byte_count_adj(bfruntime::ByteCountAdj::new()),
            AttributeKind::PortStatusChangeNotify => attr.set_port_status_notify(bfruntime::PortStatusChg::new()),
            AttributeKind::PollInterval => attr.set_intvl_ms(bfruntime::StatePullIntvl::new()),
        }
        attr
    }
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.schema_name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeMode {
    All,
    Single,
    UserDefined(u32),
}

/// One dimension of an entry scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scope {
    pub mode: ScopeMode,
    pub args: u32,
}

impl Scope {
    fn to_proto(self) -> bfruntime::Mode {
        let mut mode = bfruntime::Mode::new();
        match self.mode {
            ScopeMode::All => mode.set_predef(Mode_PredefinedMode::ALL),
            ScopeMode::Single => mode.set_predef(Mode_PredefinedMode::SINGLE),
            ScopeMode::UserDefined(pipes) => mode.set_user_defined(pipes),
        }
        mode.set_args(self.args);
        mode
    }

    fn from_proto(mode: &bfruntime::Mode) -> Self {
        let mode_kind = match mode.scope {
            Some(Mode_oneof_scope::predef(Mode_PredefinedMode::SINGLE)) => ScopeMode::Single,
            Some(Mode_oneof_scope::user_defined(pipes)) => ScopeMode::UserDefined(pipes),
            _ => ScopeMode::All,
        };
        Scope {
            mode: mode_kind,
            args: mode.get_args(),
        }
    }
}

/// Entry scope of a table.  A `None` scope is left unconfigured.  The
/// default scopes the pipes symmetrically and leaves gress and parser
/// alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EntryScope {
    pub gress: Option<Scope>,
    pub pipe: Option<Scope>,
    pub prsr: Option<Scope>,
}

impl Default for EntryScope {
    fn default() -> Self {
        EntryScope {
            gress: None,
            pipe: Some(Scope {
                mode: ScopeMode::All,
                args: 0xff,
            }),
            prsr: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IdleTableMode {
    Poll,
    Notify,
}

/// Idle-timeout settings.  Times are in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IdleTimeout {
    pub enable: bool,
    pub mode: IdleTableMode,
    pub ttl_query_interval: u32,
    pub max_ttl: u32,
    pub min_ttl: u32,
}

impl Default for IdleTimeout {
    fn default() -> Self {
        IdleTimeout {
            enable: false,
            mode: IdleTableMode::Notify,
            ttl_query_interval: 5000,
            max_ttl: 3_600_000,
            min_ttl: 1000,
        }
    }
}

/// An attribute value, as written to or reported by the device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Attribute {
    EntryScope(EntryScope),
    IdleTimeout(IdleTimeout),
    DynamicHashing { alg: u32, seed: u64 },
    MeterByteCountAdjust(i32),
    PortStatusChangeNotify(bool),
    PollInterval(u32),
}

impl Attribute {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::EntryScope(_) => AttributeKind::EntryScope,
            Attribute::IdleTimeout(_) => AttributeKind::IdleTimeout,
            Attribute::DynamicHashing { .. } => AttributeKind::DynamicHashing,
            Attribute::MeterByteCountAdjust(_) => AttributeKind::MeterByteCountAdjust,
            Attribute::PortStatusChangeNotify(_) => AttributeKind::PortStatusChangeNotify,
            Attribute::PollInterval(_) => AttributeKind::PollInterval,
        }
    }

    pub fn to_proto(&self, table_id: u32) -> bfruntime::TableAttribute {
        let mut attr = bfruntime::TableAttribute::new();
        attr.set_table_id(table_id);
        match self {
            Attribute::EntryScope(scope) => {
                let mut m = bfruntime::EntryScope::new();
                if let Some(gress) = scope.gress {
                    m.set_gress_scope(gress.to_proto());
                }
                if let Some(pipe) = scope.pipe {
                    m.set_pipe_scope(pipe.to_proto());
                }
                if let Some(prsr) = scope.prsr {
                    m.set_prsr_scope(prsr.to_proto());
                }
                attr.set_entry_scope(m);
            }
            Attribute::IdleTimeout(idle) => {
                let mut m = bfruntime::IdleTable::new();
                m.set_enable(idle.enable);
                m.set_idle_table_mode(match idle.mode {
                    IdleTableMode::Poll => IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE,
                    IdleTableMode::Notify => IdleTable_IdleTableMode::IDLE_TABLE_NOTIFY_MODE,
                });
                m.set_ttl_query_interval(idle.ttl_query_interval);
                m.set_max_ttl(idle.max_ttl);
                m.set_min_ttl(idle.min_ttl);
                attr.set_idle_table(m);
            }
            Attribute::DynamicHashing { alg, seed } => {
                let mut m = bfruntime::DynHashing::new();
                m.set_alg(*alg);
                m.set_seed(*seed);
                attr.set_dyn_hashing(m);
            }
            Attribute::MeterByteCountAdjust(bytes) => {
                let mut m = bfruntime::ByteCountAdj::new();
                m.set_byte_count_adjust(*bytes);
                attr.set_byte_count_adj(m);
            }
            Attribute::PortStatusChangeNotify(enable) => {
                let mut m = bfruntime::PortStatusChg::new();
                m.set_enable(*enable);
                attr.set_port_status_notify(m);
            }
            Attribute::PollInterval(ms) => {
                let mut m = bfruntime::StatePullIntvl::new();
                m.set_intvl_val(*ms);
                attr.set_intvl_ms(m);
            }
        }
        attr
    }

    pub fn from_proto(attr: &bfruntime::TableAttribute) -> Result<Self, ProtocolError> {
        use TableAttribute_oneof_attribute as A;

        let scope = |present: bool, mode: &bfruntime::Mode| if present { Some(Scope::from_proto(mode)) } else { None };
        Ok(match &attr.attribute {
            Some(A::entry_scope(m)) => Attribute::EntryScope(EntryScope {
                gress: scope(m.has_gress_scope(), m.get_gress_scope()),
                pipe: scope(m.has_pipe_scope(), m.get_pipe_scope()),
                prsr: scope(m.has_prsr_scope(), m.get_prsr_scope()),
            }),
            Some(A::idle_table(m)) => Attribute::IdleTimeout(IdleTimeout {
                enable: m.get_enable(),
                mode: match m.get_idle_table_mode() {
                    IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE => IdleTableMode::Poll,
                    IdleTable_IdleTableMode::IDLE_TABLE_NOTIFY_MODE => IdleTableMode::Notify,
                },
                ttl_query_interval: m.get_ttl_query_interval(),
                max_ttl: m.get_max_ttl(),
                min_ttl: m.get_min_ttl(),
            }),
            Some(A::dyn_hashing(m)) => Attribute::DynamicHashing {
                alg: m.get_alg(),
                seed: m.get_seed(),
            },
            Some(A::byte_count_adj(m)) => Attribute::MeterByteCountAdjust(m.get_byte_count_adjust()),
            Some(A::port_status_notify(m)) => Attribute::PortStatusChangeNotify(m.get_enable()),
            Some(A::intvl_ms(m)) => Attribute::PollInterval(m.get_intvl_val()),
            None => {
                return Err(ProtocolError::Malformed(format!(
                    "attribute of table {} carries no value",
                    attr.get_table_id()
                )))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names() {
        assert_eq!(AttributeKind::parse("IdleTimeout"), Some(AttributeKind::IdleTimeout));
        assert_eq!(AttributeKind::parse("poll_intvl_ms"), Some(AttributeKind::PollInterval));
        assert_eq!(AttributeKind::parse("idle_timeout"), None);
        assert_eq!(AttributeKind::PortStatusChangeNotify.to_string(), "port_status_notif_cb");
    }

    #[test]
    fn entry_scope_leaves_unset_scopes_out() {
        let attr = Attribute::EntryScope(EntryScope::default()).to_proto(9);
        let scope = attr.get_entry_scope();
        assert!(!scope.has_gress_scope());
        assert!(!scope.has_prsr_scope());
        assert_eq!(scope.get_pipe_scope().get_predef(), Mode_PredefinedMode::ALL);
        assert_eq!(scope.get_pipe_scope().get_args(), 0xff);

        let custom = Attribute::EntryScope(EntryScope {
            gress: Some(Scope {
                mode: ScopeMode::Single,
                args: 0,
            }),
            pipe: Some(Scope {
                mode: ScopeMode::UserDefined(0x3),
                args: 0xff,
            }),
            prsr: None,
        });
        assert_eq!(Attribute::from_proto(&custom.to_proto(9)).unwrap(), custom);
    }

    #[test]
    fn idle_timeout_defaults_to_notify_mode() {
        let attr = Attribute::IdleTimeout(IdleTimeout {
            enable: true,
            ..Default::default()
        });
        let m = attr.to_proto(1);
        assert_eq!(m.get_idle_table().get_idle_table_mode(), IdleTable_IdleTableMode::IDLE_TABLE_NOTIFY_MODE);
        assert_eq!(m.get_idle_table().get_max_ttl(), 3_600_000);
        assert_eq!(Attribute::from_proto(&m).unwrap(), attr);
        assert!(Attribute::from_proto(&bfruntime::TableAttribute::new()).is_err());
    }
}
