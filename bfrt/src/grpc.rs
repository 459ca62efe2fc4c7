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

//! The gRPC transport, built on grpcio.

use futures::future::{BoxFuture, FutureExt};
use futures::{SinkExt, StreamExt, TryStreamExt};

use grpcio::{ChannelBuilder, EnvBuilder, WriteFlags};

use proto::bfruntime;
use proto::bfruntime_grpc::BfRuntimeClient;

use std::sync::Arc;

use tokio::sync::mpsc;

use tracing::{debug, warn};

use crate::error::ProtocolError;
use crate::transport::{StreamChannel, Transport};

/// Schemas of large programs exceed the default message limits.
const MAX_MESSAGE_LEN: i32 = 1 << 30;

/// Buffered stream messages in each direction of the channel bridge.
const STREAM_BUFFER: usize = 64;

impl From<grpcio::Error> for ProtocolError {
    fn from(e: grpcio::Error) -> Self {
        match e {
            grpcio::Error::RpcFailure(status) => {
                ProtocolError::from_status(i32::from(status.code()), status.message(), status.details())
            }
            e => ProtocolError::Transport(e.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct GrpcTransport {
    client: BfRuntimeClient,
}

impl GrpcTransport {
    pub fn connect(addr: &str) -> Self {
        let env = Arc::new(EnvBuilder::new().build());
        let ch = ChannelBuilder::new(env)
            .max_send_message_len(MAX_MESSAGE_LEN)
            .max_receive_message_len(MAX_MESSAGE_LEN)
            .connect(addr);
        debug!("channel to {} created", addr);
        GrpcTransport { client: BfRuntimeClient::new(ch) }
    }
}

impl Transport for GrpcTransport {
    fn write(&self, request: bfruntime::WriteRequest) -> BoxFuture<'_, Result<bfruntime::WriteResponse, ProtocolError>> {
        async move { Ok(self.client.write_async(&request)?.await?) }.boxed()
    }

    fn read(&self, request: bfruntime::ReadRequest) -> BoxFuture<'_, Result<Vec<bfruntime::ReadResponse>, ProtocolError>> {
        async move {
            let stream = self.client.read(&request)?;
            Ok(stream.try_collect::<Vec<_>>().await?)
        }
        .boxed()
    }

    fn set_forwarding_pipeline_config(
        &self,
        request: bfruntime::SetForwardingPipelineConfigRequest,
    ) -> BoxFuture<'_, Result<bfruntime::SetForwardingPipelineConfigResponse, ProtocolError>> {
        async move { Ok(self.client.set_forwarding_pipeline_config_async(&request)?.await?) }.boxed()
    }

    fn get_forwarding_pipeline_config(
        &self,
        request: bfruntime::GetForwardingPipelineConfigRequest,
    ) -> BoxFuture<'_, Result<bfruntime::GetForwardingPipelineConfigResponse, ProtocolError>> {
        async move { Ok(self.client.get_forwarding_pipeline_config_async(&request)?.await?) }.boxed()
    }

    /// Bridges the duplex call onto tokio channels.  The forwarding futures
    /// run on the grpcio completion queue, not on the tokio runtime.
    fn stream_channel(&self) -> Result<StreamChannel, ProtocolError> {
        let (mut sink, mut receiver) = self.client.stream_channel()?;
        let (requests, mut outbound) = mpsc::channel::<bfruntime::StreamMessageRequest>(STREAM_BUFFER);
        let (inbound, responses) = mpsc::channel(STREAM_BUFFER);

        self.client.spawn(async move {
            while let Some(request) = outbound.recv().await {
                if let Err(e) = sink.send((request, WriteFlags::default())).await {
                    warn!("stream send failed: {}", e);
                    return;
                }
            }
            if let Err(e) = sink.close().await {
                debug!("closing stream: {}", e);
            }
        });

        self.client.spawn(async move {
            while let Some(message) = receiver.next().await {
                let failed = message.is_err();
                if inbound.send(message.map_err(ProtocolError::from)).await.is_err() || failed {
                    return;
                }
            }
        });

        Ok(StreamChannel { requests, responses })
    }
}
