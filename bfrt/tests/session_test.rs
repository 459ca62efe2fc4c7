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

use bfrt::attribute::IdleTimeout;
use bfrt::codec::Value;
use bfrt::error::{Error, NameResolutionError, ProtocolError, RequestError};
use bfrt::record::Presented;
use bfrt::session::{Notifications, SessionState};
use bfrt::{Atomicity, Attribute, AttributeKind, DataField, KeyField, Session, SessionConfig, StreamKind};

use common::*;

use proto::bfruntime::{
    self, SetForwardingPipelineConfigRequest_Action as PipelineAction,
    SetForwardingPipelineConfigResponseType as PipelineResponse,
};

use protobuf::RepeatedField;

use std::time::Duration;

use tracing_test::traced_test;

fn config(num_tries: u32) -> SessionConfig {
    SessionConfig {
        client_id: 3,
        device_id: 1,
        num_tries,
        ..Default::default()
    }
}

#[tokio::test(start_paused = true)]
#[traced_test]
async fn subscribe_and_program_a_table() -> Result<()> {
    let (transport, peer) = mock();
    let answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let mut session = Session::connect(transport, config(5)).await?;
    assert_eq!(session.state(), SessionState::Ready);
    assert!(!session.is_independent());

    let info = session.bfrt_info_get(None).await?;
    assert_eq!(info.p4_name(), P4_NAME);

    let fwd = session.table("fwd")?;
    let key = fwd.make_key(vec![
        KeyField::lpm("dst_addr", 0x0a00_0000u32, 8),
        KeyField::exact("vrf", 1u32),
    ])?;
    let data = fwd.make_data(vec![DataField::value("port", 5u32)], Some("hit"))?;
    fwd.entry_add(&[key.clone()], &[data.clone()], Atomicity::default()).await?;

    let writes = peer.recorded.lock().unwrap().writes.clone();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].get_client_id(), 3);
    assert_eq!(writes[0].get_target().get_device_id(), 1);
    assert_eq!(writes[0].get_p4_name(), "");
    let entry = writes[0].get_updates()[0].get_entity().get_table_entry();
    assert_eq!(entry.get_table_id(), 1);
    assert_eq!(entry.get_data().get_action_id(), 100);

    *peer.read_responses.lock().unwrap() = vec![read_response_from(&writes)];
    let results = fwd.entry_get(&[key.clone()], None, None, None).await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key.as_ref(), Some(&key));
    assert_eq!(results[0].data.as_ref(), Some(&data));
    assert_eq!(results[0].data.as_ref().and_then(|d| d.action_name()), Some("SwitchIngress.hit"));

    let reads = peer.recorded.lock().unwrap().reads.clone();
    assert_eq!(reads[0].get_client_id(), 3);
    let flags = reads[0].get_entities()[0].get_table_entry().get_table_flags();
    assert!(flags.get_from_hw());

    // Only default entries are decoded when asked for them.
    let results = fwd.default_entry_get(None, None).await?;
    assert!(results.iter().all(|r| r.data.is_none()));

    session.tear_down().await;
    let requests = answers.await?;
    assert_eq!(requests.len(), 1);
    let subscribe = requests[0].get_subscribe();
    assert_eq!(requests[0].get_client_id(), 3);
    assert_eq!(subscribe.get_device_id(), 1);
    assert!(subscribe.get_notifications().get_enable_learn_notifications());
    assert!(subscribe.get_notifications().get_enable_port_status_change_notifications());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn subscribe_retries_until_ok() -> Result<()> {
    let (transport, peer) = mock();
    let mut cfg = config(3);
    cfg.notifications = Some(Notifications {
        enable_learn: false,
        ..Default::default()
    });
    let answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![None, Some(14), Some(0)]);
    let mut session = Session::connect(transport, cfg).await?;
    assert_eq!(session.state(), SessionState::Ready);
    session.tear_down().await;

    let requests = answers.await?;
    assert_eq!(requests.len(), 3);
    assert!(!requests[2].get_subscribe().get_notifications().get_enable_learn_notifications());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn subscribe_gives_up_after_num_tries() -> Result<()> {
    let (transport, peer) = mock();
    let answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(2), None, Some(5)]);
    let err = Session::connect(transport, config(3)).await.err().unwrap();
    assert!(matches!(err, Error::SubscribeFailed(3)));

    // The failed session closed its stream, which ends the peer task.
    assert_eq!(answers.await?.len(), 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn independent_session_names_its_program() -> Result<()> {
    let (transport, peer) = mock();
    let cfg = SessionConfig {
        perform_subscribe: false,
        ..Default::default()
    };
    let mut session = Session::connect(transport, cfg).await?;
    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.is_independent());
    assert_eq!(peer.recorded.lock().unwrap().streams_opened, 0);

    session.bfrt_info_get(Some(P4_NAME)).await?;
    let acl = session.table("acl")?;
    let key = acl.make_key(vec![
        KeyField::exact("$MATCH_PRIORITY", 10u32),
        KeyField::ternary("ether_type", 0x0800u32, 0xffffu32),
    ])?;
    let deny = acl.make_data(vec![], Some("drop"))?;
    acl.entry_add(&[key.clone()], &[deny], Atomicity::RollbackOnError).await?;
    acl.entry_del(&[key]).await?;

    let writes = peer.recorded.lock().unwrap().writes.clone();
    assert_eq!(writes.len(), 2);
    assert!(writes.iter().all(|w| w.get_p4_name() == P4_NAME));

    // No stream, so there is nothing to wait for.
    let done = session
        .set_forwarding_pipeline_config(
            PipelineAction::VERIFY_AND_WARM_INIT_BEGIN,
            "",
            vec![],
            Duration::from_secs(1),
            1,
        )
        .await?;
    assert!(done);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn schema_lookups_through_the_session() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let mut session = Session::connect(transport, config(1)).await?;

    assert!(matches!(session.table("fwd"), Err(Error::NoSchema)));
    assert!(matches!(
        session.bfrt_info_get(Some("other")).await,
        Err(Error::Protocol(ProtocolError::NoConfig(_)))
    ));
    session.bfrt_info_get(Some(P4_NAME)).await?;

    assert!(matches!(
        session.table("mirror"),
        Err(Error::NameResolution(NameResolutionError::Ambiguous { .. }))
    ));
    assert_eq!(session.table("p2.ingress.mirror")?.info().id, 11);
    assert!(matches!(
        session.table("nonexistent"),
        Err(Error::NameResolution(NameResolutionError::NotFound { .. }))
    ));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn bind_pipeline_config() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let session = Session::connect(transport, config(1)).await?;

    assert!(matches!(
        session.bind_pipeline_config("").await,
        Err(Error::Request(RequestError::EmptyP4Name))
    ));
    session.bind_pipeline_config(P4_NAME).await?;

    let sets = peer.recorded.lock().unwrap().pipeline_sets.clone();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].get_action(), PipelineAction::BIND);
    assert_eq!(sets[0].get_client_id(), 3);
    assert_eq!(sets[0].get_config()[0].get_p4_name(), P4_NAME);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn stream_messages_are_taken_by_kind() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let mut session = Session::connect(transport, config(1)).await?;
    session.bfrt_info_get(None).await?;

    peer.responses.send(Ok(digest(500, &[0x0000_1122_3344_5566]))).await?;
    peer.responses.send(Ok(port_status(true))).await?;

    let timeout = Duration::from_millis(100);
    let status = session.portstatus_notification_get(timeout).await?.unwrap();
    assert!(status.get_port_up());

    let (learn, records) = session.digest_records(timeout).await?.unwrap();
    assert_eq!(learn, "pipe.SwitchIngressDeparser.digest_a");
    assert_eq!(records.len(), 1);
    let fields = records[0].to_presentation();
    assert_eq!(fields["src_addr"], Presented::Value(Value::Uint(0x1122_3344_5566)));
    assert_eq!(fields["port"], Presented::Value(Value::Uint(7)));

    assert!(session.digest_get(timeout).await?.is_none());
    assert!(session.get_stream_message(StreamKind::IdleTimeout, timeout).await?.is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn slow_read_leaves_the_stream_running() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let mut session = Session::connect(transport, config(1)).await?;
    session.bfrt_info_get(None).await?;
    *peer.read_latency.lock().unwrap() = Duration::from_secs(10);

    let fwd = session.table("fwd")?;
    let responses = peer.responses.clone();
    let notification = async {
        responses.send(Ok(port_status(true))).await?;
        let status = session.portstatus_notification_get(Duration::from_millis(100)).await?;
        Ok::<_, anyhow::Error>((status, tokio::time::Instant::now()))
    };
    let started = tokio::time::Instant::now();
    let (results, notification) = tokio::join!(fwd.default_entry_get(None, None), notification);
    assert!(results?.is_empty());
    let (status, arrived) = notification?;
    assert!(status.unwrap().get_port_up());
    // The notification was served while the read was still outstanding.
    assert!(arrived - started < Duration::from_secs(1));
    assert!(started.elapsed() >= Duration::from_secs(10));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn table_attributes_and_operations() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let mut session = Session::connect(transport, config(1)).await?;
    session.bfrt_info_get(None).await?;
    let fwd = session.table("fwd")?;

    let idle = Attribute::IdleTimeout(IdleTimeout {
        enable: true,
        ttl_query_interval: 1000,
        ..Default::default()
    });
    fwd.attribute_set(&idle).await?;
    fwd.operations_execute("UpdateHitState").await?;
    assert!(matches!(
        fwd.operations_execute("SyncCounters").await,
        Err(Error::Request(RequestError::UnsupportedOperation { .. }))
    ));
    {
        let recorded = peer.recorded.lock().unwrap();
        assert_eq!(recorded.writes.len(), 2);
        let attr = recorded.writes[0].get_updates()[0].get_entity().get_table_attribute();
        assert_eq!(attr.get_table_id(), 1);
        assert_eq!(attr.get_idle_table().get_ttl_query_interval(), 1000);
        let op = recorded.writes[1].get_updates()[0].get_entity().get_table_operation();
        assert_eq!(op.get_table_operations_type(), "UpdateHitState");
    }

    let mut usage = bfruntime::TableUsage::new();
    usage.set_table_id(1);
    usage.set_usage(3);
    let mut usage_entity = bfruntime::Entity::new();
    usage_entity.set_table_usage(usage);
    let mut attr_entity = bfruntime::Entity::new();
    attr_entity.set_table_attribute(idle.to_proto(1));
    let mut reply = bfruntime::ReadResponse::new();
    reply.set_entities(RepeatedField::from_vec(vec![usage_entity, attr_entity]));
    *peer.read_responses.lock().unwrap() = vec![reply];

    assert_eq!(fwd.usage_get().await?, vec![3]);
    assert_eq!(fwd.attribute_get(AttributeKind::IdleTimeout).await?, vec![idle]);
    assert!(matches!(
        fwd.attribute_get(AttributeKind::DynamicHashing).await,
        Err(Error::Request(RequestError::UnsupportedAttribute { .. }))
    ));
    let reads = peer.recorded.lock().unwrap().reads.clone();
    assert_eq!(reads.len(), 2);
    assert!(reads[1].get_entities()[0].get_table_attribute().has_idle_table());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn full_inbox_applies_backpressure() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let cfg = SessionConfig {
        queue_depth: 2,
        ..config(1)
    };
    let session = Session::connect(transport, cfg).await?;

    for i in 0..4 {
        peer.responses.send(Ok(digest(500, &[i]))).await?;
    }
    let timeout = Duration::from_millis(100);
    for i in 0..4u8 {
        let list = session.digest_get(timeout).await?.unwrap();
        assert_eq!(list.get_data()[0].get_fields()[0].get_stream(), &[0, 0, 0, 0, 0, i]);
    }
    assert!(session.digest_get(timeout).await?.is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn warm_init_waits_for_the_matching_response() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let session = Session::connect(transport, config(1)).await?;

    peer.responses.send(Ok(pipeline_response(PipelineResponse::WARM_INIT_STARTED))).await?;
    peer.responses.send(Ok(pipeline_response(PipelineResponse::WARM_INIT_FINISHED))).await?;
    let done = session
        .set_forwarding_pipeline_config(
            PipelineAction::VERIFY_AND_WARM_INIT_BEGIN_AND_END,
            "/tmp",
            pipeline_config().get_config().to_vec(),
            Duration::from_secs(1),
            2,
        )
        .await?;
    assert!(done);

    // Nothing arrives this time, so every wait expires.
    assert!(!session.clear_all_tables().await?);
    let sets = peer.recorded.lock().unwrap().pipeline_sets.clone();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[1].get_action(), PipelineAction::VERIFY_AND_WARM_INIT_BEGIN_AND_END);
    assert_eq!(sets[1].get_config()[0].get_p4_name(), P4_NAME);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn stream_failure_surfaces_once_queue_is_drained() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let session = Session::connect(transport, config(1)).await?;

    peer.responses.send(Ok(port_status(false))).await?;
    peer.responses
        .send(Err(ProtocolError::Transport("connection reset".to_string())))
        .await?;

    let timeout = Duration::from_secs(1);
    let err = session.digest_get(timeout).await.err().unwrap();
    assert!(matches!(err, Error::Protocol(ProtocolError::Transport(_))));
    assert!(session.portstatus_notification_get(timeout).await?.is_some());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn torn_down_session_refuses_requests() -> Result<()> {
    let (transport, peer) = mock();
    let _answers = answer_subscribes(peer.requests, peer.responses.clone(), vec![Some(0)]);
    let mut session = Session::connect(transport, config(1)).await?;
    session.bfrt_info_get(None).await?;

    session.tear_down().await;
    session.tear_down().await;
    assert_eq!(session.state(), SessionState::TornDown);

    let counter = session.table("counter")?;
    let key = counter.make_key(vec![KeyField::exact("$REGISTER_INDEX", 1u32)])?;
    let err = counter.entry_del(&[key]).await.err().unwrap();
    assert!(matches!(err, Error::NotReady(SessionState::TornDown)));
    assert!(peer.recorded.lock().unwrap().writes.is_empty());
    Ok(())
}
