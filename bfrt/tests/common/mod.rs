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

//! Shared fixtures: a small bf-rt.json document and an in-memory transport.

#![allow(dead_code)]

use bfrt::error::ProtocolError;
use bfrt::transport::{StreamChannel, Transport};

use futures::future::{self, BoxFuture, FutureExt};

use proto::bfruntime;

use protobuf::RepeatedField;

use serde_json::json;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const P4_NAME: &str = "prog";

pub fn bfrt_json() -> Vec<u8> {
    let doc = json!({
        "schema_version": "1.0.0",
        "tables": [
            {
                "name": "pipe.SwitchIngress.fwd", "id": 1, "table_type": "MatchAction_Direct", "size": 1024,
                "has_const_default_action": false,
                "attributes": ["EntryScope", "IdleTimeout"],
                "supported_operations": ["UpdateHitState"],
                "key": [
                    {"id": 1, "name": "hdr.ipv4.dst_addr", "repeated": false, "mandatory": false,
                     "match_type": "LPM", "type": {"type": "bytes", "width": 32}},
                    {"id": 2, "name": "meta.vrf", "repeated": false, "mandatory": true,
                     "match_type": "Exact", "type": {"type": "bytes", "width": 12}},
                ],
                "action_specs": [
                    {"id": 100, "name": "SwitchIngress.hit", "data": [
                        {"id": 1, "name": "port", "repeated": false, "mandatory": true, "read_only": false,
                         "type": {"type": "bytes", "width": 9}},
                    ]},
                    {"id": 101, "name": "SwitchIngress.miss", "annotations": [{"name": "@defaultonly"}], "data": []},
                ],
                "data": [],
            },
            {
                "name": "pipe.SwitchIngress.acl", "id": 2, "table_type": "MatchAction_Direct", "size": 256,
                "attributes": [], "supported_operations": [],
                "key": [
                    {"id": 65537, "name": "$MATCH_PRIORITY", "repeated": false, "mandatory": true,
                     "match_type": "Exact", "type": {"type": "uint32"}},
                    {"id": 1, "name": "hdr.ethernet.ether_type", "repeated": false, "mandatory": false,
                     "match_type": "Ternary", "type": {"type": "bytes", "width": 16}},
                ],
                "action_specs": [{"id": 200, "name": "SwitchIngress.drop", "data": []}],
                "data": [],
            },
            {
                "name": "pipe.SwitchIngress.counter", "id": 3, "table_type": "Register", "size": 4,
                "attributes": [], "supported_operations": ["Sync"],
                "key": [
                    {"id": 65556, "name": "$REGISTER_INDEX", "repeated": false, "mandatory": true,
                     "match_type": "Exact", "type": {"type": "uint32"}},
                ],
                "data": [
                    {"mandatory": false, "read_only": false, "singleton":
                        {"id": 1, "name": "SwitchIngress.counter.f1", "repeated": true,
                         "annotations": [{"name": "$bfrt_field_class", "value": "register_data"}],
                         "type": {"type": "bytes", "width": 32}}},
                ],
            },
            {
                "name": "pipe.p1.ingress.mirror", "id": 10, "table_type": "MatchAction_Direct", "size": 16,
                "attributes": [], "supported_operations": [], "key": [], "data": [],
            },
            {
                "name": "pipe.p2.ingress.mirror", "id": 11, "table_type": "MatchAction_Direct", "size": 16,
                "attributes": [], "supported_operations": [], "key": [], "data": [],
            },
        ],
        "learn_filters": [
            {"id": 500, "name": "pipe.SwitchIngressDeparser.digest_a", "annotations": [], "fields": [
                {"id": 1, "name": "src_addr", "repeated": false, "annotations": [],
                 "type": {"type": "bytes", "width": 48}},
                {"id": 2, "name": "port", "repeated": false, "annotations": [],
                 "type": {"type": "bytes", "width": 9}},
            ]},
        ],
    });
    serde_json::to_vec(&doc).unwrap()
}

pub fn pipeline_config() -> bfruntime::GetForwardingPipelineConfigResponse {
    let mut config = bfruntime::ForwardingPipelineConfig::new();
    config.set_p4_name(P4_NAME.to_string());
    config.set_bfruntime_info(bfrt_json());
    let mut response = bfruntime::GetForwardingPipelineConfigResponse::new();
    response.set_config(RepeatedField::from_vec(vec![config]));
    response
}

/// Everything the mock server was asked to do.
#[derive(Default, Debug)]
pub struct Recorded {
    pub writes: Vec<bfruntime::WriteRequest>,
    pub reads: Vec<bfruntime::ReadRequest>,
    pub pipeline_sets: Vec<bfruntime::SetForwardingPipelineConfigRequest>,
    pub streams_opened: usize,
}

pub struct MockTransport {
    recorded: Arc<Mutex<Recorded>>,
    read_responses: Arc<Mutex<Vec<bfruntime::ReadResponse>>>,
    read_latency: Arc<Mutex<Duration>>,
    config: bfruntime::GetForwardingPipelineConfigResponse,
    stream: Mutex<Option<StreamChannel>>,
}

/// The server side of a mock transport.
pub struct MockPeer {
    pub requests: mpsc::Receiver<bfruntime::StreamMessageRequest>,
    pub responses: mpsc::Sender<Result<bfruntime::StreamMessageResponse, ProtocolError>>,
    pub recorded: Arc<Mutex<Recorded>>,
    pub read_responses: Arc<Mutex<Vec<bfruntime::ReadResponse>>>,
    /// How long each read takes to answer.
    pub read_latency: Arc<Mutex<Duration>>,
}

pub fn mock() -> (MockTransport, MockPeer) {
    let (requests_tx, requests_rx) = mpsc::channel(16);
    let (responses_tx, responses_rx) = mpsc::channel(16);
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let read_responses = Arc::new(Mutex::new(Vec::new()));
    let read_latency = Arc::new(Mutex::new(Duration::from_millis(0)));
    let transport = MockTransport {
        recorded: recorded.clone(),
        read_responses: read_responses.clone(),
        read_latency: read_latency.clone(),
        config: pipeline_config(),
        stream: Mutex::new(Some(StreamChannel {
            requests: requests_tx,
            responses: responses_rx,
        })),
    };
    let peer = MockPeer {
        requests: requests_rx,
        responses: responses_tx,
        recorded,
        read_responses,
        read_latency,
    };
    (transport, peer)
}

impl Transport for MockTransport {
    fn write(&self, request: bfruntime::WriteRequest) -> BoxFuture<'_, Result<bfruntime::WriteResponse, ProtocolError>> {
        self.recorded.lock().unwrap().writes.push(request);
        future::ready(Ok(bfruntime::WriteResponse::new())).boxed()
    }

    fn read(&self, request: bfruntime::ReadRequest) -> BoxFuture<'_, Result<Vec<bfruntime::ReadResponse>, ProtocolError>> {
        self.recorded.lock().unwrap().reads.push(request);
        let responses = self.read_responses.lock().unwrap().clone();
        let latency = *self.read_latency.lock().unwrap();
        async move {
            tokio::time::sleep(latency).await;
            Ok(responses)
        }
        .boxed()
    }

    fn set_forwarding_pipeline_config(
        &self,
        request: bfruntime::SetForwardingPipelineConfigRequest,
    ) -> BoxFuture<'_, Result<bfruntime::SetForwardingPipelineConfigResponse, ProtocolError>> {
        self.recorded.lock().unwrap().pipeline_sets.push(request);
        future::ready(Ok(bfruntime::SetForwardingPipelineConfigResponse::new())).boxed()
    }

    fn get_forwarding_pipeline_config(
        &self,
        _request: bfruntime::GetForwardingPipelineConfigRequest,
    ) -> BoxFuture<'_, Result<bfruntime::GetForwardingPipelineConfigResponse, ProtocolError>> {
        future::ready(Ok(self.config.clone())).boxed()
    }

    fn stream_channel(&self) -> Result<StreamChannel, ProtocolError> {
        self.recorded.lock().unwrap().streams_opened += 1;
        self.stream
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| ProtocolError::Transport("stream channel already open".to_string()))
    }
}

pub fn subscribe_response(code: i32) -> bfruntime::StreamMessageResponse {
    let mut status = bfruntime::Status::new();
    status.set_code(code);
    let mut subscribe = bfruntime::Subscribe::new();
    subscribe.set_status(status);
    let mut response = bfruntime::StreamMessageResponse::new();
    response.set_subscribe(subscribe);
    response
}

pub fn pipeline_response(
    kind: bfruntime::SetForwardingPipelineConfigResponseType,
) -> bfruntime::StreamMessageResponse {
    let mut inner = bfruntime::SetForwardingPipelineConfigResponse::new();
    inner.set_set_forwarding_pipeline_config_response_type(kind);
    let mut response = bfruntime::StreamMessageResponse::new();
    response.set_set_forwarding_pipeline_config_response(inner);
    response
}

pub fn digest(digest_id: u32, src_addrs: &[u64]) -> bfruntime::StreamMessageResponse {
    let data = src_addrs
        .iter()
        .map(|addr| {
            let mut src = bfruntime::DataField::new();
            src.set_field_id(1);
            src.set_stream(addr.to_be_bytes()[2..].to_vec());
            let mut port = bfruntime::DataField::new();
            port.set_field_id(2);
            port.set_stream(vec![0, 7]);
            let mut data = bfruntime::TableData::new();
            data.set_fields(RepeatedField::from_vec(vec![src, port]));
            data
        })
        .collect();
    let mut list = bfruntime::DigestList::new();
    list.set_digest_id(digest_id);
    list.set_data(RepeatedField::from_vec(data));
    let mut response = bfruntime::StreamMessageResponse::new();
    response.set_digest(list);
    response
}

pub fn port_status(up: bool) -> bfruntime::StreamMessageResponse {
    let mut notification = bfruntime::PortStatusChgNotification::new();
    notification.set_port_up(up);
    let mut response = bfruntime::StreamMessageResponse::new();
    response.set_port_status_change_notification(notification);
    response
}

/// Answers each stream request with the next subscribe status in `codes`
/// (`None` means no answer) and returns every request once the session
/// closes the stream.
pub fn answer_subscribes(
    mut requests: mpsc::Receiver<bfruntime::StreamMessageRequest>,
    responses: mpsc::Sender<Result<bfruntime::StreamMessageResponse, ProtocolError>>,
    codes: Vec<Option<i32>>,
) -> JoinHandle<Vec<bfruntime::StreamMessageRequest>> {
    tokio::spawn(async move {
        let mut codes = codes.into_iter();
        let mut seen = Vec::new();
        while let Some(request) = requests.recv().await {
            seen.push(request);
            if let Some(Some(code)) = codes.next() {
                if responses.send(Ok(subscribe_response(code))).await.is_err() {
                    break;
                }
            }
        }
        seen
    })
}

/// A table entity as a server would return it from a read.
pub fn read_response_from(writes: &[bfruntime::WriteRequest]) -> bfruntime::ReadResponse {
    let entities = writes
        .iter()
        .flat_map(|w| w.get_updates().iter().map(|u| u.get_entity().clone()))
        .collect();
    let mut response = bfruntime::ReadResponse::new();
    response.set_entities(RepeatedField::from_vec(entities));
    response
}
