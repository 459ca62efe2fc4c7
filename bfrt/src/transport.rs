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

//! The RPC surface a session runs over.

use futures::future::BoxFuture;

use proto::bfruntime;

use tokio::sync::mpsc;

use crate::error::ProtocolError;

/// Both directions of an open stream channel.  Dropping `requests` closes
/// the outbound half.
#[derive(Debug)]
pub struct StreamChannel {
    pub requests: mpsc::Sender<bfruntime::StreamMessageRequest>,
    pub responses: mpsc::Receiver<Result<bfruntime::StreamMessageResponse, ProtocolError>>,
}

/// Unary and server-streaming calls return futures so a session never
/// blocks a runtime thread on the switch.  The stream channel is bridged
/// onto tokio channels so the session can drain it from a task.
pub trait Transport: Send + Sync + 'static {
    fn write(&self, request: bfruntime::WriteRequest) -> BoxFuture<'_, Result<bfruntime::WriteResponse, ProtocolError>>;

    /// Collects every message of the server stream.
    fn read(&self, request: bfruntime::ReadRequest) -> BoxFuture<'_, Result<Vec<bfruntime::ReadResponse>, ProtocolError>>;

    fn set_forwarding_pipeline_config(
        &self,
        request: bfruntime::SetForwardingPipelineConfigRequest,
    ) -> BoxFuture<'_, Result<bfruntime::SetForwardingPipelineConfigResponse, ProtocolError>>;

    fn get_forwarding_pipeline_config(
        &self,
        request: bfruntime::GetForwardingPipelineConfigRequest,
    ) -> BoxFuture<'_, Result<bfruntime::GetForwardingPipelineConfigResponse, ProtocolError>>;

    fn stream_channel(&self) -> Result<StreamChannel, ProtocolError>;
}
