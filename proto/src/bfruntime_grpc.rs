// Client stub for the bfrt_proto.BfRuntime service, in the layout produced
// by grpcio-compiler. Keep in sync with proto/bfruntime.proto.

// https://github.com/Manishearth/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(box_pointers)]
#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unsafe_code)]
#![allow(unused_imports)]
#![allow(unused_results)]

const METHOD_BF_RUNTIME_WRITE: ::grpcio::Method<super::bfruntime::WriteRequest, super::bfruntime::WriteResponse> = ::grpcio::Method {
    ty: ::grpcio::MethodType::Unary,
    name: "/bfrt_proto.BfRuntime/Write",
    req_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
    resp_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
};

const METHOD_BF_RUNTIME_READ: ::grpcio::Method<super::bfruntime::ReadRequest, super::bfruntime::ReadResponse> = ::grpcio::Method {
    ty: ::grpcio::MethodType::ServerStreaming,
    name: "/bfrt_proto.BfRuntime/Read",
    req_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
    resp_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
};

const METHOD_BF_RUNTIME_SET_FORWARDING_PIPELINE_CONFIG: ::grpcio::Method<super::bfruntime::SetForwardingPipelineConfigRequest, super::bfruntime::SetForwardingPipelineConfigResponse> = ::grpcio::Method {
    ty: ::grpcio::MethodType::Unary,
    name: "/bfrt_proto.BfRuntime/SetForwardingPipelineConfig",
    req_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
    resp_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
};

const METHOD_BF_RUNTIME_GET_FORWARDING_PIPELINE_CONFIG: ::grpcio::Method<super::bfruntime::GetForwardingPipelineConfigRequest, super::bfruntime::GetForwardingPipelineConfigResponse> = ::grpcio::Method {
    ty: ::grpcio::MethodType::Unary,
    name: "/bfrt_proto.BfRuntime/GetForwardingPipelineConfig",
    req_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
    resp_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
};

const METHOD_BF_RUNTIME_STREAM_CHANNEL: ::grpcio::Method<super::bfruntime::StreamMessageRequest, super::bfruntime::StreamMessageResponse> = ::grpcio::Method {
    ty: ::grpcio::MethodType::Duplex,
    name: "/bfrt_proto.BfRuntime/StreamChannel",
    req_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
    resp_mar: ::grpcio::Marshaller { ser: ::grpcio::pb_ser, de: ::grpcio::pb_de },
};

#[derive(Clone)]
pub struct BfRuntimeClient {
    client: ::grpcio::Client,
}

impl BfRuntimeClient {
    pub fn new(channel: ::grpcio::Channel) -> Self {
        BfRuntimeClient {
            client: ::grpcio::Client::new(channel),
        }
    }

    pub fn write_opt(&self, req: &super::bfruntime::WriteRequest, opt: ::grpcio::CallOption) -> ::grpcio::Result<super::bfruntime::WriteResponse> {
        self.client.unary_call(&METHOD_BF_RUNTIME_WRITE, req, opt)
    }

    pub fn write(&self, req: &super::bfruntime::WriteRequest) -> ::grpcio::Result<super::bfruntime::WriteResponse> {
        self.write_opt(req, ::grpcio::CallOption::default())
    }

    pub fn write_async_opt(&self, req: &super::bfruntime::WriteRequest, opt: ::grpcio::CallOption) -> ::grpcio::Result<::grpcio::ClientUnaryReceiver<super::bfruntime::WriteResponse>> {
        self.client.unary_call_async(&METHOD_BF_RUNTIME_WRITE, req, opt)
    }

    pub fn write_async(&self, req: &super::bfruntime::WriteRequest) -> ::grpcio::Result<::grpcio::ClientUnaryReceiver<super::bfruntime::WriteResponse>> {
        self.write_async_opt(req, ::grpcio::CallOption::default())
    }

    pub fn read_opt(&self, req: &super::bfruntime::ReadRequest, opt: ::grpcio::CallOption) -> ::grpcio::Result<::grpcio::ClientSStreamReceiver<super::bfruntime::ReadResponse>> {
        self.client.server_streaming(&METHOD_BF_RUNTIME_READ, req, opt)
    }

    pub fn read(&self, req: &super::bfruntime::ReadRequest) -> ::grpcio::Result<::grpcio::ClientSStreamReceiver<super::bfruntime::ReadResponse>> {
        self.read_opt(req, ::grpcio::CallOption::default())
    }

    pub fn set_forwarding_pipeline_config_opt(&self, req: &super::bfruntime::SetForwardingPipelineConfigRequest, opt: ::grpcio::CallOption) -> ::grpcio::Result<super::bfruntime::SetForwardingPipelineConfigResponse> {
        self.client.unary_call(&METHOD_BF_RUNTIME_SET_FORWARDING_PIPELINE_CONFIG, req, opt)
    }

    pub fn set_forwarding_pipeline_config(&self, req: &super::bfruntime::SetForwardingPipelineConfigRequest) -> ::grpcio::Result<super::bfruntime::SetForwardingPipelineConfigResponse> {
        self.set_forwarding_pipeline_config_opt(req, ::grpcio::CallOption::default())
    }

    pub fn set_forwarding_pipeline_config_async_opt(&self, req: &super::bfruntime::SetForwardingPipelineConfigRequest, opt: ::grpcio::CallOption) -> ::grpcio::Result<::grpcio::ClientUnaryReceiver<super::bfruntime::SetForwardingPipelineConfigResponse>> {
        self.client.unary_call_async(&METHOD_BF_RUNTIME_SET_FORWARDING_PIPELINE_CONFIG, req, opt)
    }

    pub fn set_forwarding_pipeline_config_async(&self, req: &super::bfruntime::SetForwardingPipelineConfigRequest) -> ::grpcio::Result<::grpcio::ClientUnaryReceiver<super::bfruntime::SetForwardingPipelineConfigResponse>> {
        self.set_forwarding_pipeline_config_async_opt(req, ::grpcio::CallOption::default())
    }

    pub fn get_forwarding_pipeline_config_opt(&self, req: &super::bfruntime::GetForwardingPipelineConfigRequest, opt: ::grpcio::CallOption) -> ::grpcio::Result<super::bfruntime::GetForwardingPipelineConfigResponse> {
        self.client.unary_call(&METHOD_BF_RUNTIME_GET_FORWARDING_PIPELINE_CONFIG, req, opt)
    }

    pub fn get_forwarding_pipeline_config(&self, req: &super::bfruntime::GetForwardingPipelineConfigRequest) -> ::grpcio::Result<super::bfruntime::GetForwardingPipelineConfigResponse> {
        self.get_forwarding_pipeline_config_opt(req, ::grpcio::CallOption::default())
    }

    pub fn get_forwarding_pipeline_config_async_opt(&self, req: &super::bfruntime::GetForwardingPipelineConfigRequest, opt: ::grpcio::CallOption) -> ::grpcio::Result<::grpcio::ClientUnaryReceiver<super::bfruntime::GetForwardingPipelineConfigResponse>> {
        self.client.unary_call_async(&METHOD_BF_RUNTIME_GET_FORWARDING_PIPELINE_CONFIG, req, opt)
    }

    pub fn get_forwarding_pipeline_config_async(&self, req: &super::bfruntime::GetForwardingPipelineConfigRequest) -> ::grpcio::Result<::grpcio::ClientUnaryReceiver<super::bfruntime::GetForwardingPipelineConfigResponse>> {
        self.get_forwarding_pipeline_config_async_opt(req, ::grpcio::CallOption::default())
    }

    pub fn stream_channel_opt(&self, opt: ::grpcio::CallOption) -> ::grpcio::Result<(::grpcio::ClientDuplexSender<super::bfruntime::StreamMessageRequest>, ::grpcio::ClientDuplexReceiver<super::bfruntime::StreamMessageResponse>)> {
        self.client.duplex_streaming(&METHOD_BF_RUNTIME_STREAM_CHANNEL, opt)
    }

    pub fn stream_channel(&self) -> ::grpcio::Result<(::grpcio::ClientDuplexSender<super::bfruntime::StreamMessageRequest>, ::grpcio::ClientDuplexReceiver<super::bfruntime::StreamMessageResponse>)> {
        self.stream_channel_opt(::grpcio::CallOption::default())
    }

    pub fn spawn<F>(&self, f: F) where F: ::futures::Future<Output = ()> + Send + 'static {
        self.client.spawn(f)
    }
}
