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

//! Client library for the BF-Runtime API.
//!
//! A `bf-rt.json` schema is parsed into a [`schema::BfRtInfo`] graph.  Key
//! and data records are built and validated against it, turned into write
//! and read requests, and decoded from responses.  A [`session::Session`]
//! carries them to a server over any [`transport::Transport`].

pub mod attribute;
pub mod codec;
pub mod error;
#[cfg(feature = "grpc")]
pub mod grpc;
pub mod names;
pub mod record;
pub mod request;
pub mod response;
pub mod schema;
pub mod session;
pub mod transport;

pub use attribute::{Attribute, AttributeKind};
pub use error::{Error, Result};
pub use record::{DataField, DataRecord, KeyField, KeyRecord, Match};
pub use request::{Atomicity, EntryFlags, ModIncType, RequestBuilder, Target};
pub use response::EntryResult;
pub use schema::{BfRtInfo, LearnInfo, TableInfo};
pub use session::{Session, SessionConfig, StreamKind, TableClient};
