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

//! A client session with a BF-Runtime server.
//!
//! A subscribed session owns the stream channel.  One tokio task drains it
//! into a bounded inbox, and callers pick messages of the kind they want
//! out of the inbox with a timeout.  Writes and reads are independent
//! unary calls.

use proto::bfruntime::{self, SetForwardingPipelineConfigRequest_Action as PipelineAction};
use proto::bfruntime::{SetForwardingPipelineConfigResponseType as PipelineResponse, StreamMessageResponse};

use protobuf::RepeatedField;

use serde::Deserialize;

use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use tracing::{debug, error, info};

use crate::attribute::{Attribute, AttributeKind};
use crate::error::{Error, ProtocolError, RequestError, Result};
use crate::record::{make_data, make_key, DataField, DataRecord, KeyField, KeyRecord};
use crate::request::{Atomicity, EntryFlags, ModIncType, RequestBuilder, Target};
use crate::response::{self, EntryResult};
use crate::schema::{BfRtInfo, TableInfo};
use crate::transport::Transport;

/// Notification kinds requested when subscribing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Notifications {
    pub enable_learn: bool,
    pub enable_idletimeout: bool,
    pub enable_port_status_change: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Notifications {
            enable_learn: true,
            enable_idletimeout: true,
            enable_port_status_change: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub grpc_addr: String,
    pub client_id: u32,
    pub device_id: u32,
    /// Only meaningful for subscribing sessions.  `None` subscribes to
    /// everything.
    pub notifications: Option<Notifications>,
    /// Per-attempt wait for the subscribe acknowledgement.
    pub timeout_ms: u64,
    pub num_tries: u32,
    /// Without a subscription the session is independent: it has no
    /// stream channel and must name the program in every request.
    pub perform_subscribe: bool,
    /// Stream messages held before the receiver task stops reading.
    pub queue_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            grpc_addr: "localhost:50052".to_string(),
            client_id: 0,
            device_id: 0,
            notifications: None,
            timeout_ms: 1000,
            num_tries: 5,
            perform_subscribe: true,
            queue_depth: 1000,
        }
    }
}

impl SessionConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.notifications.is_some() && !self.perform_subscribe {
            return Err(Error::Config(
                "notifications need a subscription (perform_subscribe is false)".to_string(),
            ));
        }
        if self.queue_depth == 0 {
            return Err(Error::Config("queue_depth must be positive".to_string()));
        }
        if self.perform_subscribe && self.num_tries == 0 {
            return Err(Error::Config("num_tries must be positive".to_string()));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Subscribing,
    Ready,
    TornDown,
}

impl Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Disconnected => "disconnected",
            SessionState::Subscribing => "subscribing",
            SessionState::Ready => "ready",
            SessionState::TornDown => "torn down",
        };
        write!(f, "{}", s)
    }
}

/// The kinds of message the stream channel delivers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StreamKind {
    Subscribe,
    Digest,
    IdleTimeout,
    PortStatus,
    PipelineConfig,
}

impl StreamKind {
    pub fn of(message: &StreamMessageResponse) -> Option<Self> {
        use bfruntime::StreamMessageResponse_oneof_update as U;
        match &message.update {
            Some(U::subscribe(_)) => Some(StreamKind::Subscribe),
            Some(U::digest(_)) => Some(StreamKind::Digest),
            Some(U::idle_timeout_notification(_)) => Some(StreamKind::IdleTimeout),
            Some(U::port_status_change_notification(_)) => Some(StreamKind::PortStatus),
            Some(U::set_forwarding_pipeline_config_response(_)) => Some(StreamKind::PipelineConfig),
            None => None,
        }
    }
}

/// Stream messages not yet claimed by a caller, plus the first stream
/// failure.  The receiver task blocks while the queue is full.
struct Inbox {
    queue: Mutex<VecDeque<StreamMessageResponse>>,
    failure: Mutex<Option<ProtocolError>>,
    arrived: Notify,
    space: Notify,
    depth: usize,
}

impl Inbox {
    fn new(depth: usize) -> Self {
        Inbox {
            queue: Mutex::new(VecDeque::new()),
            failure: Mutex::new(None),
            arrived: Notify::new(),
            space: Notify::new(),
            depth,
        }
    }

    fn queue(&self) -> MutexGuard<'_, VecDeque<StreamMessageResponse>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn push(&self, message: StreamMessageResponse) {
        loop {
            let space = self.space.notified();
            tokio::pin!(space);
            space.as_mut().enable();
            {
                let mut queue = self.queue();
                if queue.len() < self.depth {
                    queue.push_back(message);
                    drop(queue);
                    self.arrived.notify_waiters();
                    return;
                }
            }
            space.await;
        }
    }

    /// Removes the oldest message of `kind`, leaving the others queued.
    fn take(&self, kind: StreamKind) -> Option<StreamMessageResponse> {
        let mut queue = self.queue();
        let position = queue.iter().position(|m| StreamKind::of(m) == Some(kind))?;
        let message = queue.remove(position);
        drop(queue);
        self.space.notify_waiters();
        message
    }

    fn fail(&self, error: ProtocolError) {
        let mut failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        if failure.is_none() {
            *failure = Some(error);
        }
        drop(failure);
        self.arrived.notify_waiters();
    }

    fn failure(&self) -> Option<ProtocolError> {
        self.failure.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

async fn receive(
    mut responses: mpsc::Receiver<std::result::Result<StreamMessageResponse, ProtocolError>>,
    inbox: Arc<Inbox>,
) {
    while let Some(result) = responses.recv().await {
        match result {
            Ok(message) => match StreamKind::of(&message) {
                Some(kind) => {
                    debug!("stream message: {:?}", kind);
                    inbox.push(message).await;
                }
                None => debug!("dropping empty stream message"),
            },
            Err(e) => {
                error!("stream channel failed: {}", e);
                inbox.fail(e);
                return;
            }
        }
    }
    debug!("stream channel closed by peer");
    inbox.fail(ProtocolError::StreamClosed);
}

/// The response a pipeline action is acknowledged with on the stream, if
/// any.
fn expected_response(action: PipelineAction) -> Option<PipelineResponse> {
    match action {
        PipelineAction::VERIFY_AND_WARM_INIT_BEGIN => Some(PipelineResponse::WARM_INIT_STARTED),
        PipelineAction::VERIFY_AND_WARM_INIT_BEGIN_AND_END | PipelineAction::WARM_INIT_END => {
            Some(PipelineResponse::WARM_INIT_FINISHED)
        }
        _ => None,
    }
}

pub struct Session<T: Transport> {
    transport: Arc<T>,
    config: SessionConfig,
    state: SessionState,
    inbox: Arc<Inbox>,
    requests: Option<mpsc::Sender<bfruntime::StreamMessageRequest>>,
    receiver: Option<JoinHandle<()>>,
    info: Option<Arc<BfRtInfo>>,
}

impl<T: Transport> Session<T> {
    /// Connects and, unless the configuration asks for an independent
    /// client, subscribes.  Failing every subscribe attempt tears the
    /// session down.
    pub async fn connect(transport: T, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Session {
            transport: Arc::new(transport),
            inbox: Arc::new(Inbox::new(config.queue_depth)),
            config,
            state: SessionState::Disconnected,
            requests: None,
            receiver: None,
            info: None,
        };
        if !session.config.perform_subscribe {
            info!("client {}: independent session ready", session.config.client_id);
            session.state = SessionState::Ready;
            return Ok(session);
        }

        let channel = session.transport.stream_channel()?;
        session.receiver = Some(tokio::spawn(receive(channel.responses, session.inbox.clone())));
        session.requests = Some(channel.requests);
        session.state = SessionState::Subscribing;
        session.subscribe().await?;
        Ok(session)
    }

    async fn send_subscribe(&self) -> Result<()> {
        let wanted = self.config.notifications.clone().unwrap_or_default();
        let mut notifications = bfruntime::Subscribe_Notifications::new();
        notifications.set_enable_learn_notifications(wanted.enable_learn);
        notifications.set_enable_idletimeout_notifications(wanted.enable_idletimeout);
        notifications.set_enable_port_status_change_notifications(wanted.enable_port_status_change);

        let mut subscribe = bfruntime::Subscribe::new();
        subscribe.set_device_id(self.config.device_id);
        subscribe.set_notifications(notifications);

        let mut request = bfruntime::StreamMessageRequest::new();
        request.set_client_id(self.config.client_id);
        request.set_subscribe(subscribe);

        let requests = self.requests.as_ref().ok_or(ProtocolError::StreamClosed)?;
        requests.send(request).await.map_err(|_| ProtocolError::StreamClosed)?;
        Ok(())
    }

    async fn try_subscribe(&self, attempt: u32) -> Result<bool> {
        self.send_subscribe().await?;
        let timeout = Duration::from_millis(self.config.timeout_ms);
        match self.get_stream_message(StreamKind::Subscribe, timeout).await? {
            None => {
                info!("subscribe attempt {}: no response within {}ms", attempt, self.config.timeout_ms);
                Ok(false)
            }
            Some(message) => {
                let code = message.get_subscribe().get_status().get_code();
                info!("subscribe attempt {}: response status {}", attempt, code);
                Ok(code == 0)
            }
        }
    }

    async fn subscribe(&mut self) -> Result<()> {
        for attempt in 1..=self.config.num_tries {
            match self.try_subscribe(attempt).await {
                Ok(true) => {
                    info!("client {}: subscribed to device {}", self.config.client_id, self.config.device_id);
                    self.state = SessionState::Ready;
                    return Ok(());
                }
                Ok(false) => (),
                Err(e) => {
                    self.tear_down().await;
                    return Err(e);
                }
            }
        }
        self.tear_down().await;
        Err(Error::SubscribeFailed(self.config.num_tries))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_independent(&self) -> bool {
        self.requests.is_none()
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state {
            SessionState::Ready => Ok(()),
            state => Err(Error::NotReady(state)),
        }
    }

    /// Waits up to `timeout` for the oldest queued message of `kind`.
    /// Returns `Ok(None)` on expiry.  Once the stream has failed and the
    /// queue holds nothing of `kind`, the failure is returned.
    pub async fn get_stream_message(&self, kind: StreamKind, timeout: Duration) -> Result<Option<StreamMessageResponse>> {
        let deadline = Instant::now() + timeout;
        loop {
            let arrived = self.inbox.arrived.notified();
            tokio::pin!(arrived);
            arrived.as_mut().enable();
            if let Some(message) = self.inbox.take(kind) {
                return Ok(Some(message));
            }
            if let Some(failure) = self.inbox.failure() {
                return Err(failure.into());
            }
            if tokio::time::timeout_at(deadline, arrived).await.is_err() {
                return Ok(None);
            }
        }
    }

    pub async fn digest_get(&self, timeout: Duration) -> Result<Option<bfruntime::DigestList>> {
        let message = self.get_stream_message(StreamKind::Digest, timeout).await?;
        Ok(message.map(|mut m| m.take_digest()))
    }

    /// Waits for a digest and decodes it against the loaded schema.
    pub async fn digest_records(&self, timeout: Duration) -> Result<Option<(String, Vec<DataRecord>)>> {
        let info = self.info.clone().ok_or(Error::NoSchema)?;
        match self.digest_get(timeout).await? {
            Some(digest) => Ok(Some(response::parse_digest(&info, &digest)?)),
            None => Ok(None),
        }
    }

    pub async fn idletime_notification_get(&self, timeout: Duration) -> Result<Option<bfruntime::IdleTimeoutNotification>> {
        let message = self.get_stream_message(StreamKind::IdleTimeout, timeout).await?;
        Ok(message.map(|mut m| m.take_idle_timeout_notification()))
    }

    pub async fn portstatus_notification_get(
        &self,
        timeout: Duration,
    ) -> Result<Option<bfruntime::PortStatusChgNotification>> {
        let message = self.get_stream_message(StreamKind::PortStatus, timeout).await?;
        Ok(message.map(|mut m| m.take_port_status_change_notification()))
    }

    /// Waits for a pipeline configuration response of type `expected`,
    /// making up to `num_tries` waits of `timeout` each.  Responses of the
    /// other type are consumed.
    pub async fn wait_for_pipeline_response(
        &self,
        expected: PipelineResponse,
        timeout: Duration,
        num_tries: u32,
    ) -> Result<bool> {
        for _ in 0..num_tries {
            match self.get_stream_message(StreamKind::PipelineConfig, timeout).await? {
                Some(message) => {
                    let received = message
                        .get_set_forwarding_pipeline_config_response()
                        .get_set_forwarding_pipeline_config_response_type();
                    if received == expected {
                        info!("{:?} received", received);
                        return Ok(true);
                    }
                }
                None => info!("no pipeline config response within {:?}", timeout),
            }
        }
        Ok(false)
    }

    /// Sends a pipeline configuration request and, for warm-init actions on
    /// a subscribed session, waits for the matching stream response.
    pub async fn set_forwarding_pipeline_config(
        &self,
        action: PipelineAction,
        base_path: &str,
        configs: Vec<bfruntime::ForwardingPipelineConfig>,
        timeout: Duration,
        num_tries: u32,
    ) -> Result<bool> {
        let mut request = bfruntime::SetForwardingPipelineConfigRequest::new();
        request.set_client_id(self.config.client_id);
        request.set_device_id(self.config.device_id);
        request.set_base_path(base_path.to_string());
        request.set_action(action);
        request.set_config(RepeatedField::from_vec(configs));
        self.transport.set_forwarding_pipeline_config(request).await?;

        match expected_response(action) {
            Some(expected) if !self.is_independent() => {
                self.wait_for_pipeline_response(expected, timeout, num_tries).await
            }
            _ => Ok(true),
        }
    }

    /// Re-applies the device's current configuration, which resets every
    /// table including the fixed-function ones.
    pub async fn clear_all_tables(&self) -> Result<bool> {
        let response = self.get_forwarding_pipeline_config().await?;
        self.set_forwarding_pipeline_config(
            PipelineAction::VERIFY_AND_WARM_INIT_BEGIN_AND_END,
            "",
            response.get_config().to_vec(),
            Duration::from_secs(5),
            5,
        )
        .await
    }

    pub async fn bind_pipeline_config(&self, p4_name: &str) -> Result<()> {
        if p4_name.is_empty() {
            error!("cannot bind with an empty p4_name");
            return Err(RequestError::EmptyP4Name.into());
        }
        let mut config = bfruntime::ForwardingPipelineConfig::new();
        config.set_p4_name(p4_name.to_string());
        let mut request = bfruntime::SetForwardingPipelineConfigRequest::new();
        request.set_client_id(self.config.client_id);
        request.set_action(PipelineAction::BIND);
        request.set_config(RepeatedField::from_vec(vec![config]));
        info!("binding with p4_name {}", p4_name);
        self.transport.set_forwarding_pipeline_config(request).await?;
        info!("bound to {}", p4_name);
        Ok(())
    }

    async fn get_forwarding_pipeline_config(&self) -> Result<bfruntime::GetForwardingPipelineConfigResponse> {
        let mut request = bfruntime::GetForwardingPipelineConfigRequest::new();
        request.set_device_id(self.config.device_id);
        request.set_client_id(self.config.client_id);
        Ok(self.transport.get_forwarding_pipeline_config(request).await?)
    }

    /// Fetches and parses the schema of `p4_name`, or of the device's first
    /// program, without loading it into the session.  The result can be
    /// annotated before it is handed to `set_bfrt_info`.
    pub async fn fetch_bfrt_info(&self, p4_name: Option<&str>) -> Result<BfRtInfo> {
        let response = self.get_forwarding_pipeline_config().await?;
        for config in response.get_config() {
            info!(
                "received {} on client {}, device {}",
                config.get_p4_name(),
                self.config.client_id,
                self.config.device_id
            );
        }
        let config = match p4_name {
            None => response.get_config().first(),
            Some(name) => response.get_config().iter().find(|c| c.get_p4_name() == name),
        };
        let config = config.ok_or_else(|| ProtocolError::NoConfig(p4_name.unwrap_or("the first program").to_string()))?;
        let non_p4 = response.get_non_p4_config().get_bfruntime_info();
        let non_p4 = if non_p4.is_empty() { None } else { Some(non_p4) };
        Ok(BfRtInfo::parse(config.get_p4_name(), config.get_bfruntime_info(), non_p4)?)
    }

    pub fn set_bfrt_info(&mut self, info: BfRtInfo) -> Arc<BfRtInfo> {
        let info = Arc::new(info);
        self.info = Some(info.clone());
        info
    }

    pub async fn bfrt_info_get(&mut self, p4_name: Option<&str>) -> Result<Arc<BfRtInfo>> {
        let info = self.fetch_bfrt_info(p4_name).await?;
        Ok(self.set_bfrt_info(info))
    }

    pub fn bfrt_info(&self) -> Option<&Arc<BfRtInfo>> {
        self.info.as_ref()
    }

    pub async fn write(&self, mut request: bfruntime::WriteRequest) -> Result<()> {
        self.ensure_ready()?;
        request.set_client_id(self.config.client_id);
        self.transport.write(request).await?;
        Ok(())
    }

    pub async fn read(&self, mut request: bfruntime::ReadRequest) -> Result<Vec<bfruntime::ReadResponse>> {
        self.ensure_ready()?;
        request.set_client_id(self.config.client_id);
        Ok(self.transport.read(request).await?)
    }

    /// A handle on one table of the loaded schema, addressing every pipe of
    /// the session's device.
    pub fn table(&self, name: &str) -> Result<TableClient<'_, T>> {
        let info = self.info.as_ref().ok_or(Error::NoSchema)?;
        let table = info.table(name)?;
        let mut builder = RequestBuilder::new(table, Target::device(self.config.device_id));
        if self.is_independent() {
            builder = builder.with_p4_name(info.p4_name());
        }
        Ok(TableClient { session: self, builder })
    }

    /// Closes the stream and stops the receiver task.  Safe to call more
    /// than once.
    pub async fn tear_down(&mut self) {
        if self.state == SessionState::TornDown {
            return;
        }
        self.requests = None;
        if let Some(receiver) = self.receiver.take() {
            receiver.abort();
            let _ = receiver.await;
        }
        self.state = SessionState::TornDown;
        info!("client {}: session torn down", self.config.client_id);
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        if let Some(receiver) = self.receiver.take() {
            receiver.abort();
        }
    }
}

/// Table operations through a session.
pub struct TableClient<'a, T: Transport> {
    session: &'a Session<T>,
    builder: RequestBuilder<'a>,
}

impl<'a, T: Transport> TableClient<'a, T> {
    pub fn with_target(mut self, target: Target) -> Self {
        let table = self.builder.table();
        let p4_name = if self.session.is_independent() {
            self.session.info.as_ref().map(|i| i.p4_name().to_string())
        } else {
            None
        };
        self.builder = RequestBuilder::new(table, target);
        if let Some(p4_name) = p4_name {
            self.builder = self.builder.with_p4_name(&p4_name);
        }
        self
    }

    pub fn info(&self) -> &'a TableInfo {
        self.builder.table()
    }

    pub fn make_key(&self, fields: Vec<KeyField>) -> Result<KeyRecord> {
        make_key(self.info(), fields)
    }

    pub fn make_data(&self, fields: Vec<DataField>, action: Option<&str>) -> Result<DataRecord> {
        make_data(self.info(), fields, action, false)
    }

    /// A data record for narrowing a read.
    pub fn make_data_filter(&self, fields: Vec<DataField>, action: Option<&str>) -> Result<DataRecord> {
        make_data(self.info(), fields, action, true)
    }

    pub async fn entry_add(&self, keys: &[KeyRecord], datas: &[DataRecord], atomicity: Atomicity) -> Result<()> {
        self.session.write(self.builder.entry_add(keys, datas, atomicity)?).await
    }

    pub async fn entry_mod(&self, keys: &[KeyRecord], datas: &[DataRecord], flags: Option<EntryFlags>) -> Result<()> {
        self.session.write(self.builder.entry_mod(keys, datas, flags)?).await
    }

    pub async fn entry_mod_inc(
        &self,
        keys: &[KeyRecord],
        datas: &[DataRecord],
        mod_inc: ModIncType,
        flags: Option<EntryFlags>,
    ) -> Result<()> {
        self.session.write(self.builder.entry_mod_inc(keys, datas, mod_inc, flags)?).await
    }

    pub async fn entry_del(&self, keys: &[KeyRecord]) -> Result<()> {
        self.session.write(self.builder.entry_del(keys)?).await
    }

    pub async fn default_entry_set(&self, data: &DataRecord) -> Result<()> {
        self.session.write(self.builder.default_entry_set(data)?).await
    }

    pub async fn default_entry_reset(&self) -> Result<()> {
        self.session.write(self.builder.default_entry_reset()).await
    }

    pub async fn entry_get(
        &self,
        keys: &[KeyRecord],
        flags: Option<EntryFlags>,
        required_data: Option<&DataRecord>,
        handle: Option<u32>,
    ) -> Result<Vec<EntryResult>> {
        let responses = self.session.read(self.builder.entry_get(keys, flags, required_data, handle)?).await?;
        Ok(response::parse_entry_get_response(self.info(), &responses, false)?)
    }

    pub async fn default_entry_get(&self, flags: Option<EntryFlags>, required_data: Option<&DataRecord>) -> Result<Vec<EntryResult>> {
        let responses = self.session.read(self.builder.default_entry_get(flags, required_data)?).await?;
        Ok(response::parse_entry_get_response(self.info(), &responses, true)?)
    }

    pub async fn usage_get(&self) -> Result<Vec<u32>> {
        let responses = self.session.read(self.builder.usage_get()).await?;
        Ok(response::parse_usage_response(self.info(), &responses)?)
    }

    pub async fn attribute_get(&self, kind: AttributeKind) -> Result<Vec<Attribute>> {
        let responses = self.session.read(self.builder.attribute_get(kind)?).await?;
        Ok(response::parse_attribute_response(self.info(), &responses)?)
    }

    pub async fn attribute_set(&self, attribute: &Attribute) -> Result<()> {
        self.session.write(self.builder.attribute_set(attribute)).await
    }

    pub async fn operations_execute(&self, operation: &str) -> Result<()> {
        self.session.write(self.builder.operations_execute(operation)?).await
    }

    pub async fn handle_get(&self, keys: &[KeyRecord]) -> Result<Vec<u32>> {
        let responses = self.session.read(self.builder.handle_get(keys)?).await?;
        Ok(response::parse_handle_response(self.info(), &responses)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_and_validation() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.grpc_addr, "localhost:50052");

        let config = SessionConfig::from_json(r#"{"client_id": 2, "notifications": {"enable_learn": false}}"#).unwrap();
        let notifications = config.notifications.unwrap();
        assert!(!notifications.enable_learn);
        assert!(notifications.enable_idletimeout);

        let err = SessionConfig::from_json(r#"{"perform_subscribe": false, "notifications": {}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(matches!(SessionConfig::from_json("{\"timeout_ms\": -1}"), Err(Error::Config(_))));
    }

    #[test]
    fn warm_init_actions_expect_responses() {
        assert_eq!(
            expected_response(PipelineAction::VERIFY_AND_WARM_INIT_BEGIN),
            Some(PipelineResponse::WARM_INIT_STARTED)
        );
        assert_eq!(
            expected_response(PipelineAction::WARM_INIT_END),
            Some(PipelineResponse::WARM_INIT_FINISHED)
        );
        assert_eq!(expected_response(PipelineAction::VERIFY), None);
        assert_eq!(expected_response(PipelineAction::BIND), None);
    }

    #[tokio::test]
    async fn inbox_keeps_other_kinds_queued() {
        let inbox = Inbox::new(4);
        let mut digest = StreamMessageResponse::new();
        digest.set_digest(bfruntime::DigestList::new());
        let mut subscribe = StreamMessageResponse::new();
        subscribe.set_subscribe(bfruntime::Subscribe::new());
        inbox.push(digest).await;
        inbox.push(subscribe).await;
        assert!(inbox.take(StreamKind::PortStatus).is_none());
        assert!(inbox.take(StreamKind::Subscribe).is_some());
        assert!(inbox.take(StreamKind::Digest).is_some());
        assert!(inbox.take(StreamKind::Digest).is_none());
    }
}
