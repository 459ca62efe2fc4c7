// This file is generated by rust-protobuf 2.28.0. Do not edit
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(box_pointers)]
#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_imports)]
#![allow(unused_results)]
//! Generated file from `bfruntime.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
// const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_2_28_0;

#[derive(PartialEq,Clone,Default)]
pub struct WriteRequest {
    // message fields
    pub target: ::protobuf::SingularPtrField<TargetDevice>,
    pub client_id: u32,
    pub updates: ::protobuf::RepeatedField<Update>,
    pub atomicity: WriteRequest_Atomicity,
    pub p4_name: ::std::string::String,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a WriteRequest {
    fn default() -> &'a WriteRequest {
        <WriteRequest as ::protobuf::Message>::default_instance()
    }
}

impl WriteRequest {
    pub fn new() -> WriteRequest {
        ::std::default::Default::default()
    }

    // .bfrt_proto.TargetDevice target = 1;


    pub fn get_target(&self) -> &TargetDevice {
        self.target.as_ref().unwrap_or_else(|| <TargetDevice as ::protobuf::Message>::default_instance())
    }
    pub fn clear_target(&mut self) {
        self.target.clear();
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    // Param is passed by value, moved
    pub fn set_target(&mut self, v: TargetDevice) {
        self.target = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_target(&mut self) -> &mut TargetDevice {
        if self.target.is_none() {
            self.target.set_default();
        }
        self.target.as_mut().unwrap()
    }

    // Take field
    pub fn take_target(&mut self) -> TargetDevice {
        self.target.take().unwrap_or_else(|| TargetDevice::new())
    }

    // uint32 client_id = 2;


    pub fn get_client_id(&self) -> u32 {
        self.client_id
    }
    pub fn clear_client_id(&mut self) {
        self.client_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_client_id(&mut self, v: u32) {
        self.client_id = v;
    }

    // repeated .bfrt_proto.Update updates = 3;


    pub fn get_updates(&self) -> &[Update] {
        &self.updates
    }
    pub fn clear_updates(&mut self) {
        self.updates.clear();
    }

    // Param is passed by value, moved
    pub fn set_updates(&mut self, v: ::protobuf::RepeatedField<Update>) {
        self.updates = v;
    }

    // Mutable pointer to the field.
    pub fn mut_updates(&mut self) -> &mut ::protobuf::RepeatedField<Update> {
        &mut self.updates
    }

    // Take field
    pub fn take_updates(&mut self) -> ::protobuf::RepeatedField<Update> {
        ::std::mem::replace(&mut self.updates, ::protobuf::RepeatedField::new())
    }

    // .bfrt_proto.WriteRequest.Atomicity atomicity = 4;


    pub fn get_atomicity(&self) -> WriteRequest_Atomicity {
        self.atomicity
    }
    pub fn clear_atomicity(&mut self) {
        self.atomicity = WriteRequest_Atomicity::CONTINUE_ON_ERROR;
    }

    // Param is passed by value, moved
    pub fn set_atomicity(&mut self, v: WriteRequest_Atomicity) {
        self.atomicity = v;
    }

    // string p4_name = 5;


    pub fn get_p4_name(&self) -> &str {
        &self.p4_name
    }
    pub fn clear_p4_name(&mut self) {
        self.p4_name.clear();
    }

    // Param is passed by value, moved
    pub fn set_p4_name(&mut self, v: ::std::string::String) {
        self.p4_name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_p4_name(&mut self) -> &mut ::std::string::String {
        &mut self.p4_name
    }

    // Take field
    pub fn take_p4_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.p4_name, ::std::string::String::new())
    }
}

impl ::protobuf::Message for WriteRequest {
    fn is_initialized(&self) -> bool {
        for v in &self.target {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.updates {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.target)?;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.client_id = tmp;
                },
                3 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.updates)?;
                },
                4 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.atomicity, 4, &mut self.unknown_fields)?
                },
                5 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.p4_name)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.target.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.client_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.client_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.updates {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        if self.atomicity != WriteRequest_Atomicity::CONTINUE_ON_ERROR {
            my_size += ::protobuf::rt::enum_size(4, self.atomicity);
        }
        if !self.p4_name.is_empty() {
            my_size += ::protobuf::rt::string_size(5, &self.p4_name);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.target.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.client_id != 0 {
            os.write_uint32(2, self.client_id)?;
        }
        for v in &self.updates {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        if self.atomicity != WriteRequest_Atomicity::CONTINUE_ON_ERROR {
            os.write_enum(4, ::protobuf::ProtobufEnum::value(&self.atomicity))?;
        }
        if !self.p4_name.is_empty() {
            os.write_string(5, &self.p4_name)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> WriteRequest {
        WriteRequest::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TargetDevice>>(
                "target",
                |m: &WriteRequest| { &m.target },
                |m: &mut WriteRequest| { &mut m.target },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "client_id",
                |m: &WriteRequest| { &m.client_id },
                |m: &mut WriteRequest| { &mut m.client_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Update>>(
                "updates",
                |m: &WriteRequest| { &m.updates },
                |m: &mut WriteRequest| { &mut m.updates },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<WriteRequest_Atomicity>>(
                "atomicity",
                |m: &WriteRequest| { &m.atomicity },
                |m: &mut WriteRequest| { &mut m.atomicity },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "p4_name",
                |m: &WriteRequest| { &m.p4_name },
                |m: &mut WriteRequest| { &mut m.p4_name },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<WriteRequest>(
                "WriteRequest",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static WriteRequest {
        static instance: ::protobuf::rt::LazyV2<WriteRequest> = ::protobuf::rt::LazyV2::INIT;
        instance.get(WriteRequest::new)
    }
}

impl ::protobuf::Clear for WriteRequest {
    fn clear(&mut self) {
        self.target.clear();
        self.client_id = 0;
        self.updates.clear();
        self.atomicity = WriteRequest_Atomicity::CONTINUE_ON_ERROR;
        self.p4_name.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for WriteRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for WriteRequest {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum WriteRequest_Atomicity {
    CONTINUE_ON_ERROR = 0,
    ROLLBACK_ON_ERROR = 1,
    DATAPLANE_ATOMIC = 2,
}

impl ::protobuf::ProtobufEnum for WriteRequest_Atomicity {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<WriteRequest_Atomicity> {
        match value {
            0 => ::std::option::Option::Some(WriteRequest_Atomicity::CONTINUE_ON_ERROR),
            1 => ::std::option::Option::Some(WriteRequest_Atomicity::ROLLBACK_ON_ERROR),
            2 => ::std::option::Option::Some(WriteRequest_Atomicity::DATAPLANE_ATOMIC),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [WriteRequest_Atomicity] = &[
            WriteRequest_Atomicity::CONTINUE_ON_ERROR,
            WriteRequest_Atomicity::ROLLBACK_ON_ERROR,
            WriteRequest_Atomicity::DATAPLANE_ATOMIC,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<WriteRequest_Atomicity>("WriteRequest.Atomicity", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for WriteRequest_Atomicity {
}

impl ::std::default::Default for WriteRequest_Atomicity {
    fn default() -> Self {
        WriteRequest_Atomicity::CONTINUE_ON_ERROR
    }
}

impl ::protobuf::reflect::ProtobufValue for WriteRequest_Atomicity {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct WriteResponse {
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a WriteResponse {
    fn default() -> &'a WriteResponse {
        <WriteResponse as ::protobuf::Message>::default_instance()
    }
}

impl WriteResponse {
    pub fn new() -> WriteResponse {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for WriteResponse {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> WriteResponse {
        WriteResponse::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let fields = ::std::vec::Vec::new();
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<WriteResponse>(
                "WriteResponse",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static WriteResponse {
        static instance: ::protobuf::rt::LazyV2<WriteResponse> = ::protobuf::rt::LazyV2::INIT;
        instance.get(WriteResponse::new)
    }
}

impl ::protobuf::Clear for WriteResponse {
    fn clear(&mut self) {
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for WriteResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for WriteResponse {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ReadRequest {
    // message fields
    pub target: ::protobuf::SingularPtrField<TargetDevice>,
    pub client_id: u32,
    pub entities: ::protobuf::RepeatedField<Entity>,
    pub p4_name: ::std::string::String,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ReadRequest {
    fn default() -> &'a ReadRequest {
        <ReadRequest as ::protobuf::Message>::default_instance()
    }
}

impl ReadRequest {
    pub fn new() -> ReadRequest {
        ::std::default::Default::default()
    }

    // .bfrt_proto.TargetDevice target = 1;


    pub fn get_target(&self) -> &TargetDevice {
        self.target.as_ref().unwrap_or_else(|| <TargetDevice as ::protobuf::Message>::default_instance())
    }
    pub fn clear_target(&mut self) {
        self.target.clear();
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    // Param is passed by value, moved
    pub fn set_target(&mut self, v: TargetDevice) {
        self.target = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_target(&mut self) -> &mut TargetDevice {
        if self.target.is_none() {
            self.target.set_default();
        }
        self.target.as_mut().unwrap()
    }

    // Take field
    pub fn take_target(&mut self) -> TargetDevice {
        self.target.take().unwrap_or_else(|| TargetDevice::new())
    }

    // uint32 client_id = 2;


    pub fn get_client_id(&self) -> u32 {
        self.client_id
    }
    pub fn clear_client_id(&mut self) {
        self.client_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_client_id(&mut self, v: u32) {
        self.client_id = v;
    }

    // repeated .bfrt_proto.Entity entities = 3;


    pub fn get_entities(&self) -> &[Entity] {
        &self.entities
    }
    pub fn clear_entities(&mut self) {
        self.entities.clear();
    }

    // Param is passed by value, moved
    pub fn set_entities(&mut self, v: ::protobuf::RepeatedField<Entity>) {
        self.entities = v;
    }

    // Mutable pointer to the field.
    pub fn mut_entities(&mut self) -> &mut ::protobuf::RepeatedField<Entity> {
        &mut self.entities
    }

    // Take field
    pub fn take_entities(&mut self) -> ::protobuf::RepeatedField<Entity> {
        ::std::mem::replace(&mut self.entities, ::protobuf::RepeatedField::new())
    }

    // string p4_name = 4;


    pub fn get_p4_name(&self) -> &str {
        &self.p4_name
    }
    pub fn clear_p4_name(&mut self) {
        self.p4_name.clear();
    }

    // Param is passed by value, moved
    pub fn set_p4_name(&mut self, v: ::std::string::String) {
        self.p4_name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_p4_name(&mut self) -> &mut ::std::string::String {
        &mut self.p4_name
    }

    // Take field
    pub fn take_p4_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.p4_name, ::std::string::String::new())
    }
}

impl ::protobuf::Message for ReadRequest {
    fn is_initialized(&self) -> bool {
        for v in &self.target {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.entities {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.target)?;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.client_id = tmp;
                },
                3 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.entities)?;
                },
                4 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.p4_name)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.target.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.client_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.client_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.entities {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        if !self.p4_name.is_empty() {
            my_size += ::protobuf::rt::string_size(4, &self.p4_name);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.target.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.client_id != 0 {
            os.write_uint32(2, self.client_id)?;
        }
        for v in &self.entities {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        if !self.p4_name.is_empty() {
            os.write_string(4, &self.p4_name)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ReadRequest {
        ReadRequest::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TargetDevice>>(
                "target",
                |m: &ReadRequest| { &m.target },
                |m: &mut ReadRequest| { &mut m.target },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "client_id",
                |m: &ReadRequest| { &m.client_id },
                |m: &mut ReadRequest| { &mut m.client_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Entity>>(
                "entities",
                |m: &ReadRequest| { &m.entities },
                |m: &mut ReadRequest| { &mut m.entities },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "p4_name",
                |m: &ReadRequest| { &m.p4_name },
                |m: &mut ReadRequest| { &mut m.p4_name },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ReadRequest>(
                "ReadRequest",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ReadRequest {
        static instance: ::protobuf::rt::LazyV2<ReadRequest> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ReadRequest::new)
    }
}

impl ::protobuf::Clear for ReadRequest {
    fn clear(&mut self) {
        self.target.clear();
        self.client_id = 0;
        self.entities.clear();
        self.p4_name.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ReadRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ReadRequest {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ReadResponse {
    // message fields
    pub entities: ::protobuf::RepeatedField<Entity>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ReadResponse {
    fn default() -> &'a ReadResponse {
        <ReadResponse as ::protobuf::Message>::default_instance()
    }
}

impl ReadResponse {
    pub fn new() -> ReadResponse {
        ::std::default::Default::default()
    }

    // repeated .bfrt_proto.Entity entities = 1;


    pub fn get_entities(&self) -> &[Entity] {
        &self.entities
    }
    pub fn clear_entities(&mut self) {
        self.entities.clear();
    }

    // Param is passed by value, moved
    pub fn set_entities(&mut self, v: ::protobuf::RepeatedField<Entity>) {
        self.entities = v;
    }

    // Mutable pointer to the field.
    pub fn mut_entities(&mut self) -> &mut ::protobuf::RepeatedField<Entity> {
        &mut self.entities
    }

    // Take field
    pub fn take_entities(&mut self) -> ::protobuf::RepeatedField<Entity> {
        ::std::mem::replace(&mut self.entities, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for ReadResponse {
    fn is_initialized(&self) -> bool {
        for v in &self.entities {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.entities)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.entities {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.entities {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ReadResponse {
        ReadResponse::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Entity>>(
                "entities",
                |m: &ReadResponse| { &m.entities },
                |m: &mut ReadResponse| { &mut m.entities },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ReadResponse>(
                "ReadResponse",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ReadResponse {
        static instance: ::protobuf::rt::LazyV2<ReadResponse> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ReadResponse::new)
    }
}

impl ::protobuf::Clear for ReadResponse {
    fn clear(&mut self) {
        self.entities.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ReadResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ReadResponse {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TargetDevice {
    // message fields
    pub device_id: u32,
    pub pipe_id: u32,
    pub direction: u32,
    pub prsr_id: u32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TargetDevice {
    fn default() -> &'a TargetDevice {
        <TargetDevice as ::protobuf::Message>::default_instance()
    }
}

impl TargetDevice {
    pub fn new() -> TargetDevice {
        ::std::default::Default::default()
    }

    // uint32 device_id = 1;


    pub fn get_device_id(&self) -> u32 {
        self.device_id
    }
    pub fn clear_device_id(&mut self) {
        self.device_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_device_id(&mut self, v: u32) {
        self.device_id = v;
    }

    // uint32 pipe_id = 2;


    pub fn get_pipe_id(&self) -> u32 {
        self.pipe_id
    }
    pub fn clear_pipe_id(&mut self) {
        self.pipe_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_pipe_id(&mut self, v: u32) {
        self.pipe_id = v;
    }

    // uint32 direction = 3;


    pub fn get_direction(&self) -> u32 {
        self.direction
    }
    pub fn clear_direction(&mut self) {
        self.direction = 0;
    }

    // Param is passed by value, moved
    pub fn set_direction(&mut self, v: u32) {
        self.direction = v;
    }

    // uint32 prsr_id = 4;


    pub fn get_prsr_id(&self) -> u32 {
        self.prsr_id
    }
    pub fn clear_prsr_id(&mut self) {
        self.prsr_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_prsr_id(&mut self, v: u32) {
        self.prsr_id = v;
    }
}

impl ::protobuf::Message for TargetDevice {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.device_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.pipe_id = tmp;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.direction = tmp;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.prsr_id = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.device_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.device_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.pipe_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.pipe_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.direction != 0 {
            my_size += ::protobuf::rt::value_size(3, self.direction, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.prsr_id != 0 {
            my_size += ::protobuf::rt::value_size(4, self.prsr_id, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.device_id != 0 {
            os.write_uint32(1, self.device_id)?;
        }
        if self.pipe_id != 0 {
            os.write_uint32(2, self.pipe_id)?;
        }
        if self.direction != 0 {
            os.write_uint32(3, self.direction)?;
        }
        if self.prsr_id != 0 {
            os.write_uint32(4, self.prsr_id)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TargetDevice {
        TargetDevice::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "device_id",
                |m: &TargetDevice| { &m.device_id },
                |m: &mut TargetDevice| { &mut m.device_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "pipe_id",
                |m: &TargetDevice| { &m.pipe_id },
                |m: &mut TargetDevice| { &mut m.pipe_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "direction",
                |m: &TargetDevice| { &m.direction },
                |m: &mut TargetDevice| { &mut m.direction },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "prsr_id",
                |m: &TargetDevice| { &m.prsr_id },
                |m: &mut TargetDevice| { &mut m.prsr_id },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TargetDevice>(
                "TargetDevice",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TargetDevice {
        static instance: ::protobuf::rt::LazyV2<TargetDevice> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TargetDevice::new)
    }
}

impl ::protobuf::Clear for TargetDevice {
    fn clear(&mut self) {
        self.device_id = 0;
        self.pipe_id = 0;
        self.direction = 0;
        self.prsr_id = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TargetDevice {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TargetDevice {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Update {
    // message fields
    pub field_type: Update_Type,
    pub entity: ::protobuf::SingularPtrField<Entity>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Update {
    fn default() -> &'a Update {
        <Update as ::protobuf::Message>::default_instance()
    }
}

impl Update {
    pub fn new() -> Update {
        ::std::default::Default::default()
    }

    // .bfrt_proto.Update.Type type = 1;


    pub fn get_field_type(&self) -> Update_Type {
        self.field_type
    }
    pub fn clear_field_type(&mut self) {
        self.field_type = Update_Type::UNSPECIFIED;
    }

    // Param is passed by value, moved
    pub fn set_field_type(&mut self, v: Update_Type) {
        self.field_type = v;
    }

    // .bfrt_proto.Entity entity = 2;


    pub fn get_entity(&self) -> &Entity {
        self.entity.as_ref().unwrap_or_else(|| <Entity as ::protobuf::Message>::default_instance())
    }
    pub fn clear_entity(&mut self) {
        self.entity.clear();
    }

    pub fn has_entity(&self) -> bool {
        self.entity.is_some()
    }

    // Param is passed by value, moved
    pub fn set_entity(&mut self, v: Entity) {
        self.entity = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_entity(&mut self) -> &mut Entity {
        if self.entity.is_none() {
            self.entity.set_default();
        }
        self.entity.as_mut().unwrap()
    }

    // Take field
    pub fn take_entity(&mut self) -> Entity {
        self.entity.take().unwrap_or_else(|| Entity::new())
    }
}

impl ::protobuf::Message for Update {
    fn is_initialized(&self) -> bool {
        for v in &self.entity {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.field_type, 1, &mut self.unknown_fields)?
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.entity)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.field_type != Update_Type::UNSPECIFIED {
            my_size += ::protobuf::rt::enum_size(1, self.field_type);
        }
        if let Some(ref v) = self.entity.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.field_type != Update_Type::UNSPECIFIED {
            os.write_enum(1, ::protobuf::ProtobufEnum::value(&self.field_type))?;
        }
        if let Some(ref v) = self.entity.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Update {
        Update::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<Update_Type>>(
                "type",
                |m: &Update| { &m.field_type },
                |m: &mut Update| { &mut m.field_type },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Entity>>(
                "entity",
                |m: &Update| { &m.entity },
                |m: &mut Update| { &mut m.entity },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Update>(
                "Update",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Update {
        static instance: ::protobuf::rt::LazyV2<Update> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Update::new)
    }
}

impl ::protobuf::Clear for Update {
    fn clear(&mut self) {
        self.field_type = Update_Type::UNSPECIFIED;
        self.entity.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Update {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Update {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum Update_Type {
    UNSPECIFIED = 0,
    INSERT = 1,
    MODIFY = 2,
    MODIFY_INC = 3,
    DELETE = 4,
}

impl ::protobuf::ProtobufEnum for Update_Type {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<Update_Type> {
        match value {
            0 => ::std::option::Option::Some(Update_Type::UNSPECIFIED),
            1 => ::std::option::Option::Some(Update_Type::INSERT),
            2 => ::std::option::Option::Some(Update_Type::MODIFY),
            3 => ::std::option::Option::Some(Update_Type::MODIFY_INC),
            4 => ::std::option::Option::Some(Update_Type::DELETE),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [Update_Type] = &[
            Update_Type::UNSPECIFIED,
            Update_Type::INSERT,
            Update_Type::MODIFY,
            Update_Type::MODIFY_INC,
            Update_Type::DELETE,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<Update_Type>("Update.Type", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for Update_Type {
}

impl ::std::default::Default for Update_Type {
    fn default() -> Self {
        Update_Type::UNSPECIFIED
    }
}

impl ::protobuf::reflect::ProtobufValue for Update_Type {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Entity {
    // message oneof groups
    pub entity: ::std::option::Option<Entity_oneof_entity>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Entity {
    fn default() -> &'a Entity {
        <Entity as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum Entity_oneof_entity {
    table_entry(TableEntry),
    table_usage(TableUsage),
    table_attribute(TableAttribute),
    table_operation(TableOperation),
    handle(TableHandle),
}

impl Entity {
    pub fn new() -> Entity {
        ::std::default::Default::default()
    }

    // .bfrt_proto.TableEntry table_entry = 1;


    pub fn get_table_entry(&self) -> &TableEntry {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_entry(ref v)) => v,
            _ => <TableEntry as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_table_entry(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_table_entry(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_entry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_table_entry(&mut self, v: TableEntry) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_entry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_table_entry(&mut self) -> &mut TableEntry {
        if let ::std::option::Option::Some(Entity_oneof_entity::table_entry(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_entry(TableEntry::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_entry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_table_entry(&mut self) -> TableEntry {
        if self.has_table_entry() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::table_entry(v)) => v,
                _ => panic!(),
            }
        } else {
            TableEntry::new()
        }
    }

    // .bfrt_proto.TableUsage table_usage = 2;


    pub fn get_table_usage(&self) -> &TableUsage {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_usage(ref v)) => v,
            _ => <TableUsage as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_table_usage(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_table_usage(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_usage(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_table_usage(&mut self, v: TableUsage) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_usage(v))
    }

    // Mutable pointer to the field.
    pub fn mut_table_usage(&mut self) -> &mut TableUsage {
        if let ::std::option::Option::Some(Entity_oneof_entity::table_usage(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_usage(TableUsage::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_usage(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_table_usage(&mut self) -> TableUsage {
        if self.has_table_usage() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::table_usage(v)) => v,
                _ => panic!(),
            }
        } else {
            TableUsage::new()
        }
    }

    // .bfrt_proto.TableAttribute table_attribute = 3;


    pub fn get_table_attribute(&self) -> &TableAttribute {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_attribute(ref v)) => v,
            _ => <TableAttribute as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_table_attribute(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_table_attribute(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_attribute(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_table_attribute(&mut self, v: TableAttribute) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_attribute(v))
    }

    // Mutable pointer to the field.
    pub fn mut_table_attribute(&mut self) -> &mut TableAttribute {
        if let ::std::option::Option::Some(Entity_oneof_entity::table_attribute(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_attribute(TableAttribute::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_attribute(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_table_attribute(&mut self) -> TableAttribute {
        if self.has_table_attribute() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::table_attribute(v)) => v,
                _ => panic!(),
            }
        } else {
            TableAttribute::new()
        }
    }

    // .bfrt_proto.TableOperation table_operation = 4;


    pub fn get_table_operation(&self) -> &TableOperation {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_operation(ref v)) => v,
            _ => <TableOperation as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_table_operation(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_table_operation(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_operation(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_table_operation(&mut self, v: TableOperation) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_operation(v))
    }

    // Mutable pointer to the field.
    pub fn mut_table_operation(&mut self) -> &mut TableOperation {
        if let ::std::option::Option::Some(Entity_oneof_entity::table_operation(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_operation(TableOperation::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_operation(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_table_operation(&mut self) -> TableOperation {
        if self.has_table_operation() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::table_operation(v)) => v,
                _ => panic!(),
            }
        } else {
            TableOperation::new()
        }
    }

    // .bfrt_proto.TableHandle handle = 6;


    pub fn get_handle(&self) -> &TableHandle {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::handle(ref v)) => v,
            _ => <TableHandle as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_handle(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_handle(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::handle(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_handle(&mut self, v: TableHandle) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::handle(v))
    }

    // Mutable pointer to the field.
    pub fn mut_handle(&mut self) -> &mut TableHandle {
        if let ::std::option::Option::Some(Entity_oneof_entity::handle(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::handle(TableHandle::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::handle(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_handle(&mut self) -> TableHandle {
        if self.has_handle() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::handle(v)) => v,
                _ => panic!(),
            }
        } else {
            TableHandle::new()
        }
    }
}

impl ::protobuf::Message for Entity {
    fn is_initialized(&self) -> bool {
        if let Some(Entity_oneof_entity::table_entry(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(Entity_oneof_entity::table_usage(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(Entity_oneof_entity::table_attribute(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(Entity_oneof_entity::table_operation(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(Entity_oneof_entity::handle(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_entry(is.read_message()?));
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_usage(is.read_message()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_attribute(is.read_message()?));
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_operation(is.read_message()?));
                },
                6 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::handle(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let ::std::option::Option::Some(ref v) = self.entity {
            match v {
                &Entity_oneof_entity::table_entry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &Entity_oneof_entity::table_usage(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &Entity_oneof_entity::table_attribute(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &Entity_oneof_entity::table_operation(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &Entity_oneof_entity::handle(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let ::std::option::Option::Some(ref v) = self.entity {
            match v {
                &Entity_oneof_entity::table_entry(ref v) => {
                    os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &Entity_oneof_entity::table_usage(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &Entity_oneof_entity::table_attribute(ref v) => {
                    os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &Entity_oneof_entity::table_operation(ref v) => {
                    os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &Entity_oneof_entity::handle(ref v) => {
                    os.write_tag(6, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Entity {
        Entity::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, TableEntry>(
                "table_entry",
                Entity::has_table_entry,
                Entity::get_table_entry,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, TableUsage>(
                "table_usage",
                Entity::has_table_usage,
                Entity::get_table_usage,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, TableAttribute>(
                "table_attribute",
                Entity::has_table_attribute,
                Entity::get_table_attribute,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, TableOperation>(
                "table_operation",
                Entity::has_table_operation,
                Entity::get_table_operation,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, TableHandle>(
                "handle",
                Entity::has_handle,
                Entity::get_handle,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Entity>(
                "Entity",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Entity {
        static instance: ::protobuf::rt::LazyV2<Entity> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Entity::new)
    }
}

impl ::protobuf::Clear for Entity {
    fn clear(&mut self) {
        self.entity = ::std::option::Option::None;
        self.entity = ::std::option::Option::None;
        self.entity = ::std::option::Option::None;
        self.entity = ::std::option::Option::None;
        self.entity = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Entity {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableFlags {
    // message fields
    pub from_hw: bool,
    pub key_only: bool,
    pub mod_del: bool,
    pub reset_ttl: bool,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableFlags {
    fn default() -> &'a TableFlags {
        <TableFlags as ::protobuf::Message>::default_instance()
    }
}

impl TableFlags {
    pub fn new() -> TableFlags {
        ::std::default::Default::default()
    }

    // bool from_hw = 1;


    pub fn get_from_hw(&self) -> bool {
        self.from_hw
    }
    pub fn clear_from_hw(&mut self) {
        self.from_hw = false;
    }

    // Param is passed by value, moved
    pub fn set_from_hw(&mut self, v: bool) {
        self.from_hw = v;
    }

    // bool key_only = 2;


    pub fn get_key_only(&self) -> bool {
        self.key_only
    }
    pub fn clear_key_only(&mut self) {
        self.key_only = false;
    }

    // Param is passed by value, moved
    pub fn set_key_only(&mut self, v: bool) {
        self.key_only = v;
    }

    // bool mod_del = 3;


    pub fn get_mod_del(&self) -> bool {
        self.mod_del
    }
    pub fn clear_mod_del(&mut self) {
        self.mod_del = false;
    }

    // Param is passed by value, moved
    pub fn set_mod_del(&mut self, v: bool) {
        self.mod_del = v;
    }

    // bool reset_ttl = 4;


    pub fn get_reset_ttl(&self) -> bool {
        self.reset_ttl
    }
    pub fn clear_reset_ttl(&mut self) {
        self.reset_ttl = false;
    }

    // Param is passed by value, moved
    pub fn set_reset_ttl(&mut self, v: bool) {
        self.reset_ttl = v;
    }
}

impl ::protobuf::Message for TableFlags {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.from_hw = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.key_only = tmp;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.mod_del = tmp;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.reset_ttl = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.from_hw != false {
            my_size += 2;
        }
        if self.key_only != false {
            my_size += 2;
        }
        if self.mod_del != false {
            my_size += 2;
        }
        if self.reset_ttl != false {
            my_size += 2;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.from_hw != false {
            os.write_bool(1, self.from_hw)?;
        }
        if self.key_only != false {
            os.write_bool(2, self.key_only)?;
        }
        if self.mod_del != false {
            os.write_bool(3, self.mod_del)?;
        }
        if self.reset_ttl != false {
            os.write_bool(4, self.reset_ttl)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableFlags {
        TableFlags::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "from_hw",
                |m: &TableFlags| { &m.from_hw },
                |m: &mut TableFlags| { &mut m.from_hw },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "key_only",
                |m: &TableFlags| { &m.key_only },
                |m: &mut TableFlags| { &mut m.key_only },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "mod_del",
                |m: &TableFlags| { &m.mod_del },
                |m: &mut TableFlags| { &mut m.mod_del },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "reset_ttl",
                |m: &TableFlags| { &m.reset_ttl },
                |m: &mut TableFlags| { &mut m.reset_ttl },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableFlags>(
                "TableFlags",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableFlags {
        static instance: ::protobuf::rt::LazyV2<TableFlags> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableFlags::new)
    }
}

impl ::protobuf::Clear for TableFlags {
    fn clear(&mut self) {
        self.from_hw = false;
        self.key_only = false;
        self.mod_del = false;
        self.reset_ttl = false;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableFlags {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableFlags {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableEntry {
    // message fields
    pub table_id: u32,
    pub data: ::protobuf::SingularPtrField<TableData>,
    pub is_default_entry: bool,
    pub entry_tgt: ::protobuf::SingularPtrField<TargetDevice>,
    pub table_flags: ::protobuf::SingularPtrField<TableFlags>,
    // message oneof groups
    pub value: ::std::option::Option<TableEntry_oneof_value>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableEntry {
    fn default() -> &'a TableEntry {
        <TableEntry as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum TableEntry_oneof_value {
    key(TableKey),
    handle_id(u32),
}

impl TableEntry {
    pub fn new() -> TableEntry {
        ::std::default::Default::default()
    }

    // uint32 table_id = 1;


    pub fn get_table_id(&self) -> u32 {
        self.table_id
    }
    pub fn clear_table_id(&mut self) {
        self.table_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_table_id(&mut self, v: u32) {
        self.table_id = v;
    }

    // .bfrt_proto.TableKey key = 2;


    pub fn get_key(&self) -> &TableKey {
        match self.value {
            ::std::option::Option::Some(TableEntry_oneof_value::key(ref v)) => v,
            _ => <TableKey as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_key(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_key(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(TableEntry_oneof_value::key(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_key(&mut self, v: TableKey) {
        self.value = ::std::option::Option::Some(TableEntry_oneof_value::key(v))
    }

    // Mutable pointer to the field.
    pub fn mut_key(&mut self) -> &mut TableKey {
        if let ::std::option::Option::Some(TableEntry_oneof_value::key(_)) = self.value {
        } else {
            self.value = ::std::option::Option::Some(TableEntry_oneof_value::key(TableKey::new()));
        }
        match self.value {
            ::std::option::Option::Some(TableEntry_oneof_value::key(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_key(&mut self) -> TableKey {
        if self.has_key() {
            match self.value.take() {
                ::std::option::Option::Some(TableEntry_oneof_value::key(v)) => v,
                _ => panic!(),
            }
        } else {
            TableKey::new()
        }
    }

    // uint32 handle_id = 7;


    pub fn get_handle_id(&self) -> u32 {
        match self.value {
            ::std::option::Option::Some(TableEntry_oneof_value::handle_id(v)) => v,
            _ => 0,
        }
    }
    pub fn clear_handle_id(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_handle_id(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(TableEntry_oneof_value::handle_id(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_handle_id(&mut self, v: u32) {
        self.value = ::std::option::Option::Some(TableEntry_oneof_value::handle_id(v))
    }

    // .bfrt_proto.TableData data = 3;


    pub fn get_data(&self) -> &TableData {
        self.data.as_ref().unwrap_or_else(|| <TableData as ::protobuf::Message>::default_instance())
    }
    pub fn clear_data(&mut self) {
        self.data.clear();
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    // Param is passed by value, moved
    pub fn set_data(&mut self, v: TableData) {
        self.data = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_data(&mut self) -> &mut TableData {
        if self.data.is_none() {
            self.data.set_default();
        }
        self.data.as_mut().unwrap()
    }

    // Take field
    pub fn take_data(&mut self) -> TableData {
        self.data.take().unwrap_or_else(|| TableData::new())
    }

    // bool is_default_entry = 4;


    pub fn get_is_default_entry(&self) -> bool {
        self.is_default_entry
    }
    pub fn clear_is_default_entry(&mut self) {
        self.is_default_entry = false;
    }

    // Param is passed by value, moved
    pub fn set_is_default_entry(&mut self, v: bool) {
        self.is_default_entry = v;
    }

    // .bfrt_proto.TargetDevice entry_tgt = 8;


    pub fn get_entry_tgt(&self) -> &TargetDevice {
        self.entry_tgt.as_ref().unwrap_or_else(|| <TargetDevice as ::protobuf::Message>::default_instance())
    }
    pub fn clear_entry_tgt(&mut self) {
        self.entry_tgt.clear();
    }

    pub fn has_entry_tgt(&self) -> bool {
        self.entry_tgt.is_some()
    }

    // Param is passed by value, moved
    pub fn set_entry_tgt(&mut self, v: TargetDevice) {
        self.entry_tgt = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_entry_tgt(&mut self) -> &mut TargetDevice {
        if self.entry_tgt.is_none() {
            self.entry_tgt.set_default();
        }
        self.entry_tgt.as_mut().unwrap()
    }

    // Take field
    pub fn take_entry_tgt(&mut self) -> TargetDevice {
        self.entry_tgt.take().unwrap_or_else(|| TargetDevice::new())
    }

    // .bfrt_proto.TableFlags table_flags = 9;


    pub fn get_table_flags(&self) -> &TableFlags {
        self.table_flags.as_ref().unwrap_or_else(|| <TableFlags as ::protobuf::Message>::default_instance())
    }
    pub fn clear_table_flags(&mut self) {
        self.table_flags.clear();
    }

    pub fn has_table_flags(&self) -> bool {
        self.table_flags.is_some()
    }

    // Param is passed by value, moved
    pub fn set_table_flags(&mut self, v: TableFlags) {
        self.table_flags = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_table_flags(&mut self) -> &mut TableFlags {
        if self.table_flags.is_none() {
            self.table_flags.set_default();
        }
        self.table_flags.as_mut().unwrap()
    }

    // Take field
    pub fn take_table_flags(&mut self) -> TableFlags {
        self.table_flags.take().unwrap_or_else(|| TableFlags::new())
    }
}

impl ::protobuf::Message for TableEntry {
    fn is_initialized(&self) -> bool {
        if let Some(TableEntry_oneof_value::key(ref v)) = self.value {
            if !v.is_initialized() {
                return false;
            }
        }
        for v in &self.data {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.entry_tgt {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.table_flags {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.table_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(TableEntry_oneof_value::key(is.read_message()?));
                },
                7 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(TableEntry_oneof_value::handle_id(is.read_uint32()?));
                },
                3 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.data)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.is_default_entry = tmp;
                },
                8 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.entry_tgt)?;
                },
                9 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.table_flags)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.table_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.table_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.data.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.is_default_entry != false {
            my_size += 2;
        }
        if let Some(ref v) = self.entry_tgt.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.table_flags.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let ::std::option::Option::Some(ref v) = self.value {
            match v {
                &TableEntry_oneof_value::key(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &TableEntry_oneof_value::handle_id(v) => {
                    my_size += ::protobuf::rt::value_size(7, v, ::protobuf::wire_format::WireTypeVarint);
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.table_id != 0 {
            os.write_uint32(1, self.table_id)?;
        }
        if let Some(ref v) = self.data.as_ref() {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.is_default_entry != false {
            os.write_bool(4, self.is_default_entry)?;
        }
        if let Some(ref v) = self.entry_tgt.as_ref() {
            os.write_tag(8, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.table_flags.as_ref() {
            os.write_tag(9, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let ::std::option::Option::Some(ref v) = self.value {
            match v {
                &TableEntry_oneof_value::key(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &TableEntry_oneof_value::handle_id(v) => {
                    os.write_uint32(7, v)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableEntry {
        TableEntry::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "table_id",
                |m: &TableEntry| { &m.table_id },
                |m: &mut TableEntry| { &mut m.table_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, TableKey>(
                "key",
                TableEntry::has_key,
                TableEntry::get_key,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_u32_accessor::<_>(
                "handle_id",
                TableEntry::has_handle_id,
                TableEntry::get_handle_id,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TableData>>(
                "data",
                |m: &TableEntry| { &m.data },
                |m: &mut TableEntry| { &mut m.data },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "is_default_entry",
                |m: &TableEntry| { &m.is_default_entry },
                |m: &mut TableEntry| { &mut m.is_default_entry },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TargetDevice>>(
                "entry_tgt",
                |m: &TableEntry| { &m.entry_tgt },
                |m: &mut TableEntry| { &mut m.entry_tgt },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TableFlags>>(
                "table_flags",
                |m: &TableEntry| { &m.table_flags },
                |m: &mut TableEntry| { &mut m.table_flags },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableEntry>(
                "TableEntry",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableEntry {
        static instance: ::protobuf::rt::LazyV2<TableEntry> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableEntry::new)
    }
}

impl ::protobuf::Clear for TableEntry {
    fn clear(&mut self) {
        self.table_id = 0;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.data.clear();
        self.is_default_entry = false;
        self.entry_tgt.clear();
        self.table_flags.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableEntry {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableUsage {
    // message fields
    pub table_id: u32,
    pub usage: u32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableUsage {
    fn default() -> &'a TableUsage {
        <TableUsage as ::protobuf::Message>::default_instance()
    }
}

impl TableUsage {
    pub fn new() -> TableUsage {
        ::std::default::Default::default()
    }

    // uint32 table_id = 1;


    pub fn get_table_id(&self) -> u32 {
        self.table_id
    }
    pub fn clear_table_id(&mut self) {
        self.table_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_table_id(&mut self, v: u32) {
        self.table_id = v;
    }

    // uint32 usage = 2;


    pub fn get_usage(&self) -> u32 {
        self.usage
    }
    pub fn clear_usage(&mut self) {
        self.usage = 0;
    }

    // Param is passed by value, moved
    pub fn set_usage(&mut self, v: u32) {
        self.usage = v;
    }
}

impl ::protobuf::Message for TableUsage {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.table_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.usage = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.table_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.table_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.usage != 0 {
            my_size += ::protobuf::rt::value_size(2, self.usage, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.table_id != 0 {
            os.write_uint32(1, self.table_id)?;
        }
        if self.usage != 0 {
            os.write_uint32(2, self.usage)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableUsage {
        TableUsage::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "table_id",
                |m: &TableUsage| { &m.table_id },
                |m: &mut TableUsage| { &mut m.table_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "usage",
                |m: &TableUsage| { &m.usage },
                |m: &mut TableUsage| { &mut m.usage },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableUsage>(
                "TableUsage",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableUsage {
        static instance: ::protobuf::rt::LazyV2<TableUsage> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableUsage::new)
    }
}

impl ::protobuf::Clear for TableUsage {
    fn clear(&mut self) {
        self.table_id = 0;
        self.usage = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableUsage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableUsage {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableAttribute {
    // message fields
    pub table_id: u32,
    // message oneof groups
    pub attribute: ::std::option::Option<TableAttribute_oneof_attribute>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableAttribute {
    fn default() -> &'a TableAttribute {
        <TableAttribute as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum TableAttribute_oneof_attribute {
    idle_table(IdleTable),
    entry_scope(EntryScope),
    dyn_hashing(DynHashing),
    byte_count_adj(ByteCountAdj),
    port_status_notify(PortStatusChg),
    intvl_ms(StatePullIntvl),
}

impl TableAttribute {
    pub fn new() -> TableAttribute {
        ::std::default::Default::default()
    }

    // uint32 table_id = 1;


    pub fn get_table_id(&self) -> u32 {
        self.table_id
    }
    pub fn clear_table_id(&mut self) {
        self.table_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_table_id(&mut self, v: u32) {
        self.table_id = v;
    }

    // .bfrt_proto.IdleTable idle_table = 2;


    pub fn get_idle_table(&self) -> &IdleTable {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::idle_table(ref v)) => v,
            _ => <IdleTable as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_idle_table(&mut self) {
        self.attribute = ::std::option::Option::None;
    }

    pub fn has_idle_table(&self) -> bool {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::idle_table(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_idle_table(&mut self, v: IdleTable) {
        self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::idle_table(v))
    }

    // Mutable pointer to the field.
    pub fn mut_idle_table(&mut self) -> &mut IdleTable {
        if let ::std::option::Option::Some(TableAttribute_oneof_attribute::idle_table(_)) = self.attribute {
        } else {
            self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::idle_table(IdleTable::new()));
        }
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::idle_table(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_idle_table(&mut self) -> IdleTable {
        if self.has_idle_table() {
            match self.attribute.take() {
                ::std::option::Option::Some(TableAttribute_oneof_attribute::idle_table(v)) => v,
                _ => panic!(),
            }
        } else {
            IdleTable::new()
        }
    }

    // .bfrt_proto.EntryScope entry_scope = 3;


    pub fn get_entry_scope(&self) -> &EntryScope {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::entry_scope(ref v)) => v,
            _ => <EntryScope as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_entry_scope(&mut self) {
        self.attribute = ::std::option::Option::None;
    }

    pub fn has_entry_scope(&self) -> bool {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::entry_scope(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_entry_scope(&mut self, v: EntryScope) {
        self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::entry_scope(v))
    }

    // Mutable pointer to the field.
    pub fn mut_entry_scope(&mut self) -> &mut EntryScope {
        if let ::std::option::Option::Some(TableAttribute_oneof_attribute::entry_scope(_)) = self.attribute {
        } else {
            self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::entry_scope(EntryScope::new()));
        }
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::entry_scope(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_entry_scope(&mut self) -> EntryScope {
        if self.has_entry_scope() {
            match self.attribute.take() {
                ::std::option::Option::Some(TableAttribute_oneof_attribute::entry_scope(v)) => v,
                _ => panic!(),
            }
        } else {
            EntryScope::new()
        }
    }

    // .bfrt_proto.DynHashing dyn_hashing = 5;


    pub fn get_dyn_hashing(&self) -> &DynHashing {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::dyn_hashing(ref v)) => v,
            _ => <DynHashing as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_dyn_hashing(&mut self) {
        self.attribute = ::std::option::Option::None;
    }

    pub fn has_dyn_hashing(&self) -> bool {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::dyn_hashing(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_dyn_hashing(&mut self, v: DynHashing) {
        self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::dyn_hashing(v))
    }

    // Mutable pointer to the field.
    pub fn mut_dyn_hashing(&mut self) -> &mut DynHashing {
        if let ::std::option::Option::Some(TableAttribute_oneof_attribute::dyn_hashing(_)) = self.attribute {
        } else {
            self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::dyn_hashing(DynHashing::new()));
        }
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::dyn_hashing(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_dyn_hashing(&mut self) -> DynHashing {
        if self.has_dyn_hashing() {
            match self.attribute.take() {
                ::std::option::Option::Some(TableAttribute_oneof_attribute::dyn_hashing(v)) => v,
                _ => panic!(),
            }
        } else {
            DynHashing::new()
        }
    }

    // .bfrt_proto.ByteCountAdj byte_count_adj = 6;


    pub fn get_byte_count_adj(&self) -> &ByteCountAdj {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::byte_count_adj(ref v)) => v,
            _ => <ByteCountAdj as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_byte_count_adj(&mut self) {
        self.attribute = ::std::option::Option::None;
    }

    pub fn has_byte_count_adj(&self) -> bool {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::byte_count_adj(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_byte_count_adj(&mut self, v: ByteCountAdj) {
        self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::byte_count_adj(v))
    }

    // Mutable pointer to the field.
    pub fn mut_byte_count_adj(&mut self) -> &mut ByteCountAdj {
        if let ::std::option::Option::Some(TableAttribute_oneof_attribute::byte_count_adj(_)) = self.attribute {
        } else {
            self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::byte_count_adj(ByteCountAdj::new()));
        }
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::byte_count_adj(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_byte_count_adj(&mut self) -> ByteCountAdj {
        if self.has_byte_count_adj() {
            match self.attribute.take() {
                ::std::option::Option::Some(TableAttribute_oneof_attribute::byte_count_adj(v)) => v,
                _ => panic!(),
            }
        } else {
            ByteCountAdj::new()
        }
    }

    // .bfrt_proto.PortStatusChg port_status_notify = 7;


    pub fn get_port_status_notify(&self) -> &PortStatusChg {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::port_status_notify(ref v)) => v,
            _ => <PortStatusChg as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_port_status_notify(&mut self) {
        self.attribute = ::std::option::Option::None;
    }

    pub fn has_port_status_notify(&self) -> bool {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::port_status_notify(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_port_status_notify(&mut self, v: PortStatusChg) {
        self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::port_status_notify(v))
    }

    // Mutable pointer to the field.
    pub fn mut_port_status_notify(&mut self) -> &mut PortStatusChg {
        if let ::std::option::Option::Some(TableAttribute_oneof_attribute::port_status_notify(_)) = self.attribute {
        } else {
            self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::port_status_notify(PortStatusChg::new()));
        }
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::port_status_notify(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_port_status_notify(&mut self) -> PortStatusChg {
        if self.has_port_status_notify() {
            match self.attribute.take() {
                ::std::option::Option::Some(TableAttribute_oneof_attribute::port_status_notify(v)) => v,
                _ => panic!(),
            }
        } else {
            PortStatusChg::new()
        }
    }

    // .bfrt_proto.StatePullIntvl intvl_ms = 8;


    pub fn get_intvl_ms(&self) -> &StatePullIntvl {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::intvl_ms(ref v)) => v,
            _ => <StatePullIntvl as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_intvl_ms(&mut self) {
        self.attribute = ::std::option::Option::None;
    }

    pub fn has_intvl_ms(&self) -> bool {
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::intvl_ms(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_intvl_ms(&mut self, v: StatePullIntvl) {
        self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::intvl_ms(v))
    }

    // Mutable pointer to the field.
    pub fn mut_intvl_ms(&mut self) -> &mut StatePullIntvl {
        if let ::std::option::Option::Some(TableAttribute_oneof_attribute::intvl_ms(_)) = self.attribute {
        } else {
            self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::intvl_ms(StatePullIntvl::new()));
        }
        match self.attribute {
            ::std::option::Option::Some(TableAttribute_oneof_attribute::intvl_ms(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_intvl_ms(&mut self) -> StatePullIntvl {
        if self.has_intvl_ms() {
            match self.attribute.take() {
                ::std::option::Option::Some(TableAttribute_oneof_attribute::intvl_ms(v)) => v,
                _ => panic!(),
            }
        } else {
            StatePullIntvl::new()
        }
    }
}

impl ::protobuf::Message for TableAttribute {
    fn is_initialized(&self) -> bool {
        if let Some(TableAttribute_oneof_attribute::idle_table(ref v)) = self.attribute {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(TableAttribute_oneof_attribute::entry_scope(ref v)) = self.attribute {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(TableAttribute_oneof_attribute::dyn_hashing(ref v)) = self.attribute {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(TableAttribute_oneof_attribute::byte_count_adj(ref v)) = self.attribute {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(TableAttribute_oneof_attribute::port_status_notify(ref v)) = self.attribute {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(TableAttribute_oneof_attribute::intvl_ms(ref v)) = self.attribute {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.table_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::idle_table(is.read_message()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::entry_scope(is.read_message()?));
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::dyn_hashing(is.read_message()?));
                },
                6 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::byte_count_adj(is.read_message()?));
                },
                7 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::port_status_notify(is.read_message()?));
                },
                8 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.attribute = ::std::option::Option::Some(TableAttribute_oneof_attribute::intvl_ms(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.table_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.table_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.attribute {
            match v {
                &TableAttribute_oneof_attribute::idle_table(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &TableAttribute_oneof_attribute::entry_scope(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &TableAttribute_oneof_attribute::dyn_hashing(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &TableAttribute_oneof_attribute::byte_count_adj(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &TableAttribute_oneof_attribute::port_status_notify(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &TableAttribute_oneof_attribute::intvl_ms(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.table_id != 0 {
            os.write_uint32(1, self.table_id)?;
        }
        if let ::std::option::Option::Some(ref v) = self.attribute {
            match v {
                &TableAttribute_oneof_attribute::idle_table(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &TableAttribute_oneof_attribute::entry_scope(ref v) => {
                    os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &TableAttribute_oneof_attribute::dyn_hashing(ref v) => {
                    os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &TableAttribute_oneof_attribute::byte_count_adj(ref v) => {
                    os.write_tag(6, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &TableAttribute_oneof_attribute::port_status_notify(ref v) => {
                    os.write_tag(7, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &TableAttribute_oneof_attribute::intvl_ms(ref v) => {
                    os.write_tag(8, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableAttribute {
        TableAttribute::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "table_id",
                |m: &TableAttribute| { &m.table_id },
                |m: &mut TableAttribute| { &mut m.table_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, IdleTable>(
                "idle_table",
                TableAttribute::has_idle_table,
                TableAttribute::get_idle_table,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, EntryScope>(
                "entry_scope",
                TableAttribute::has_entry_scope,
                TableAttribute::get_entry_scope,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, DynHashing>(
                "dyn_hashing",
                TableAttribute::has_dyn_hashing,
                TableAttribute::get_dyn_hashing,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, ByteCountAdj>(
                "byte_count_adj",
                TableAttribute::has_byte_count_adj,
                TableAttribute::get_byte_count_adj,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, PortStatusChg>(
                "port_status_notify",
                TableAttribute::has_port_status_notify,
                TableAttribute::get_port_status_notify,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, StatePullIntvl>(
                "intvl_ms",
                TableAttribute::has_intvl_ms,
                TableAttribute::get_intvl_ms,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableAttribute>(
                "TableAttribute",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableAttribute {
        static instance: ::protobuf::rt::LazyV2<TableAttribute> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableAttribute::new)
    }
}

impl ::protobuf::Clear for TableAttribute {
    fn clear(&mut self) {
        self.table_id = 0;
        self.attribute = ::std::option::Option::None;
        self.attribute = ::std::option::Option::None;
        self.attribute = ::std::option::Option::None;
        self.attribute = ::std::option::Option::None;
        self.attribute = ::std::option::Option::None;
        self.attribute = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableAttribute {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableAttribute {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableOperation {
    // message fields
    pub table_id: u32,
    pub table_operations_type: ::std::string::String,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableOperation {
    fn default() -> &'a TableOperation {
        <TableOperation as ::protobuf::Message>::default_instance()
    }
}

impl TableOperation {
    pub fn new() -> TableOperation {
        ::std::default::Default::default()
    }

    // uint32 table_id = 1;


    pub fn get_table_id(&self) -> u32 {
        self.table_id
    }
    pub fn clear_table_id(&mut self) {
        self.table_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_table_id(&mut self, v: u32) {
        self.table_id = v;
    }

    // string table_operations_type = 2;


    pub fn get_table_operations_type(&self) -> &str {
        &self.table_operations_type
    }
    pub fn clear_table_operations_type(&mut self) {
        self.table_operations_type.clear();
    }

    // Param is passed by value, moved
    pub fn set_table_operations_type(&mut self, v: ::std::string::String) {
        self.table_operations_type = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_table_operations_type(&mut self) -> &mut ::std::string::String {
        &mut self.table_operations_type
    }

    // Take field
    pub fn take_table_operations_type(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.table_operations_type, ::std::string::String::new())
    }
}

impl ::protobuf::Message for TableOperation {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.table_id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.table_operations_type)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.table_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.table_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.table_operations_type.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.table_operations_type);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.table_id != 0 {
            os.write_uint32(1, self.table_id)?;
        }
        if !self.table_operations_type.is_empty() {
            os.write_string(2, &self.table_operations_type)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableOperation {
        TableOperation::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "table_id",
                |m: &TableOperation| { &m.table_id },
                |m: &mut TableOperation| { &mut m.table_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "table_operations_type",
                |m: &TableOperation| { &m.table_operations_type },
                |m: &mut TableOperation| { &mut m.table_operations_type },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableOperation>(
                "TableOperation",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableOperation {
        static instance: ::protobuf::rt::LazyV2<TableOperation> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableOperation::new)
    }
}

impl ::protobuf::Clear for TableOperation {
    fn clear(&mut self) {
        self.table_id = 0;
        self.table_operations_type.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableOperation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableOperation {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableHandle {
    // message fields
    pub table_id: u32,
    // message oneof groups
    pub value: ::std::option::Option<TableHandle_oneof_value>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableHandle {
    fn default() -> &'a TableHandle {
        <TableHandle as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum TableHandle_oneof_value {
    key(TableKey),
    handle_id(u32),
}

impl TableHandle {
    pub fn new() -> TableHandle {
        ::std::default::Default::default()
    }

    // uint32 table_id = 1;


    pub fn get_table_id(&self) -> u32 {
        self.table_id
    }
    pub fn clear_table_id(&mut self) {
        self.table_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_table_id(&mut self, v: u32) {
        self.table_id = v;
    }

    // .bfrt_proto.TableKey key = 2;


    pub fn get_key(&self) -> &TableKey {
        match self.value {
            ::std::option::Option::Some(TableHandle_oneof_value::key(ref v)) => v,
            _ => <TableKey as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_key(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_key(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(TableHandle_oneof_value::key(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_key(&mut self, v: TableKey) {
        self.value = ::std::option::Option::Some(TableHandle_oneof_value::key(v))
    }

    // Mutable pointer to the field.
    pub fn mut_key(&mut self) -> &mut TableKey {
        if let ::std::option::Option::Some(TableHandle_oneof_value::key(_)) = self.value {
        } else {
            self.value = ::std::option::Option::Some(TableHandle_oneof_value::key(TableKey::new()));
        }
        match self.value {
            ::std::option::Option::Some(TableHandle_oneof_value::key(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_key(&mut self) -> TableKey {
        if self.has_key() {
            match self.value.take() {
                ::std::option::Option::Some(TableHandle_oneof_value::key(v)) => v,
                _ => panic!(),
            }
        } else {
            TableKey::new()
        }
    }

    // uint32 handle_id = 3;


    pub fn get_handle_id(&self) -> u32 {
        match self.value {
            ::std::option::Option::Some(TableHandle_oneof_value::handle_id(v)) => v,
            _ => 0,
        }
    }
    pub fn clear_handle_id(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_handle_id(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(TableHandle_oneof_value::handle_id(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_handle_id(&mut self, v: u32) {
        self.value = ::std::option::Option::Some(TableHandle_oneof_value::handle_id(v))
    }
}

impl ::protobuf::Message for TableHandle {
    fn is_initialized(&self) -> bool {
        if let Some(TableHandle_oneof_value::key(ref v)) = self.value {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.table_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(TableHandle_oneof_value::key(is.read_message()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(TableHandle_oneof_value::handle_id(is.read_uint32()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.table_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.table_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.value {
            match v {
                &TableHandle_oneof_value::key(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &TableHandle_oneof_value::handle_id(v) => {
                    my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint);
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.table_id != 0 {
            os.write_uint32(1, self.table_id)?;
        }
        if let ::std::option::Option::Some(ref v) = self.value {
            match v {
                &TableHandle_oneof_value::key(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &TableHandle_oneof_value::handle_id(v) => {
                    os.write_uint32(3, v)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableHandle {
        TableHandle::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "table_id",
                |m: &TableHandle| { &m.table_id },
                |m: &mut TableHandle| { &mut m.table_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, TableKey>(
                "key",
                TableHandle::has_key,
                TableHandle::get_key,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_u32_accessor::<_>(
                "handle_id",
                TableHandle::has_handle_id,
                TableHandle::get_handle_id,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableHandle>(
                "TableHandle",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableHandle {
        static instance: ::protobuf::rt::LazyV2<TableHandle> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableHandle::new)
    }
}

impl ::protobuf::Clear for TableHandle {
    fn clear(&mut self) {
        self.table_id = 0;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableHandle {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableHandle {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct IdleTable {
    // message fields
    pub ttl_query_interval: u32,
    pub max_ttl: u32,
    pub min_ttl: u32,
    pub idle_table_mode: IdleTable_IdleTableMode,
    pub enable: bool,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a IdleTable {
    fn default() -> &'a IdleTable {
        <IdleTable as ::protobuf::Message>::default_instance()
    }
}

impl IdleTable {
    pub fn new() -> IdleTable {
        ::std::default::Default::default()
    }

    // uint32 ttl_query_interval = 1;


    pub fn get_ttl_query_interval(&self) -> u32 {
        self.ttl_query_interval
    }
    pub fn clear_ttl_query_interval(&mut self) {
        self.ttl_query_interval = 0;
    }

    // Param is passed by value, moved
    pub fn set_ttl_query_interval(&mut self, v: u32) {
        self.ttl_query_interval = v;
    }

    // uint32 max_ttl = 2;


    pub fn get_max_ttl(&self) -> u32 {
        self.max_ttl
    }
    pub fn clear_max_ttl(&mut self) {
        self.max_ttl = 0;
    }

    // Param is passed by value, moved
    pub fn set_max_ttl(&mut self, v: u32) {
        self.max_ttl = v;
    }

    // uint32 min_ttl = 3;


    pub fn get_min_ttl(&self) -> u32 {
        self.min_ttl
    }
    pub fn clear_min_ttl(&mut self) {
        self.min_ttl = 0;
    }

    // Param is passed by value, moved
    pub fn set_min_ttl(&mut self, v: u32) {
        self.min_ttl = v;
    }

    // .bfrt_proto.IdleTable.IdleTableMode idle_table_mode = 4;


    pub fn get_idle_table_mode(&self) -> IdleTable_IdleTableMode {
        self.idle_table_mode
    }
    pub fn clear_idle_table_mode(&mut self) {
        self.idle_table_mode = IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE;
    }

    // Param is passed by value, moved
    pub fn set_idle_table_mode(&mut self, v: IdleTable_IdleTableMode) {
        self.idle_table_mode = v;
    }

    // bool enable = 5;


    pub fn get_enable(&self) -> bool {
        self.enable
    }
    pub fn clear_enable(&mut self) {
        self.enable = false;
    }

    // Param is passed by value, moved
    pub fn set_enable(&mut self, v: bool) {
        self.enable = v;
    }
}

impl ::protobuf::Message for IdleTable {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.ttl_query_interval = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.max_ttl = tmp;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.min_ttl = tmp;
                },
                4 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.idle_table_mode, 4, &mut self.unknown_fields)?
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.enable = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.ttl_query_interval != 0 {
            my_size += ::protobuf::rt::value_size(1, self.ttl_query_interval, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.max_ttl != 0 {
            my_size += ::protobuf::rt::value_size(2, self.max_ttl, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.min_ttl != 0 {
            my_size += ::protobuf::rt::value_size(3, self.min_ttl, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.idle_table_mode != IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE {
            my_size += ::protobuf::rt::enum_size(4, self.idle_table_mode);
        }
        if self.enable != false {
            my_size += 2;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.ttl_query_interval != 0 {
            os.write_uint32(1, self.ttl_query_interval)?;
        }
        if self.max_ttl != 0 {
            os.write_uint32(2, self.max_ttl)?;
        }
        if self.min_ttl != 0 {
            os.write_uint32(3, self.min_ttl)?;
        }
        if self.idle_table_mode != IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE {
            os.write_enum(4, ::protobuf::ProtobufEnum::value(&self.idle_table_mode))?;
        }
        if self.enable != false {
            os.write_bool(5, self.enable)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> IdleTable {
        IdleTable::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "ttl_query_interval",
                |m: &IdleTable| { &m.ttl_query_interval },
                |m: &mut IdleTable| { &mut m.ttl_query_interval },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "max_ttl",
                |m: &IdleTable| { &m.max_ttl },
                |m: &mut IdleTable| { &mut m.max_ttl },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "min_ttl",
                |m: &IdleTable| { &m.min_ttl },
                |m: &mut IdleTable| { &mut m.min_ttl },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<IdleTable_IdleTableMode>>(
                "idle_table_mode",
                |m: &IdleTable| { &m.idle_table_mode },
                |m: &mut IdleTable| { &mut m.idle_table_mode },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "enable",
                |m: &IdleTable| { &m.enable },
                |m: &mut IdleTable| { &mut m.enable },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<IdleTable>(
                "IdleTable",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static IdleTable {
        static instance: ::protobuf::rt::LazyV2<IdleTable> = ::protobuf::rt::LazyV2::INIT;
        instance.get(IdleTable::new)
    }
}

impl ::protobuf::Clear for IdleTable {
    fn clear(&mut self) {
        self.ttl_query_interval = 0;
        self.max_ttl = 0;
        self.min_ttl = 0;
        self.idle_table_mode = IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE;
        self.enable = false;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for IdleTable {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for IdleTable {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum IdleTable_IdleTableMode {
    IDLE_TABLE_POLL_MODE = 0,
    IDLE_TABLE_NOTIFY_MODE = 1,
}

impl ::protobuf::ProtobufEnum for IdleTable_IdleTableMode {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<IdleTable_IdleTableMode> {
        match value {
            0 => ::std::option::Option::Some(IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE),
            1 => ::std::option::Option::Some(IdleTable_IdleTableMode::IDLE_TABLE_NOTIFY_MODE),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [IdleTable_IdleTableMode] = &[
            IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE,
            IdleTable_IdleTableMode::IDLE_TABLE_NOTIFY_MODE,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<IdleTable_IdleTableMode>("IdleTable.IdleTableMode", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for IdleTable_IdleTableMode {
}

impl ::std::default::Default for IdleTable_IdleTableMode {
    fn default() -> Self {
        IdleTable_IdleTableMode::IDLE_TABLE_POLL_MODE
    }
}

impl ::protobuf::reflect::ProtobufValue for IdleTable_IdleTableMode {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Mode {
    // message fields
    pub args: u32,
    // message oneof groups
    pub scope: ::std::option::Option<Mode_oneof_scope>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Mode {
    fn default() -> &'a Mode {
        <Mode as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum Mode_oneof_scope {
    predef(Mode_PredefinedMode),
    user_defined(u32),
}

impl Mode {
    pub fn new() -> Mode {
        ::std::default::Default::default()
    }

    // .bfrt_proto.Mode.PredefinedMode predef = 1;


    pub fn get_predef(&self) -> Mode_PredefinedMode {
        match self.scope {
            ::std::option::Option::Some(Mode_oneof_scope::predef(v)) => v,
            _ => Mode_PredefinedMode::ALL,
        }
    }
    pub fn clear_predef(&mut self) {
        self.scope = ::std::option::Option::None;
    }

    pub fn has_predef(&self) -> bool {
        match self.scope {
            ::std::option::Option::Some(Mode_oneof_scope::predef(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_predef(&mut self, v: Mode_PredefinedMode) {
        self.scope = ::std::option::Option::Some(Mode_oneof_scope::predef(v))
    }

    // uint32 user_defined = 2;


    pub fn get_user_defined(&self) -> u32 {
        match self.scope {
            ::std::option::Option::Some(Mode_oneof_scope::user_defined(v)) => v,
            _ => 0,
        }
    }
    pub fn clear_user_defined(&mut self) {
        self.scope = ::std::option::Option::None;
    }

    pub fn has_user_defined(&self) -> bool {
        match self.scope {
            ::std::option::Option::Some(Mode_oneof_scope::user_defined(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_user_defined(&mut self, v: u32) {
        self.scope = ::std::option::Option::Some(Mode_oneof_scope::user_defined(v))
    }

    // uint32 args = 3;


    pub fn get_args(&self) -> u32 {
        self.args
    }
    pub fn clear_args(&mut self) {
        self.args = 0;
    }

    // Param is passed by value, moved
    pub fn set_args(&mut self, v: u32) {
        self.args = v;
    }
}

impl ::protobuf::Message for Mode {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.scope = ::std::option::Option::Some(Mode_oneof_scope::predef(is.read_enum()?));
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.scope = ::std::option::Option::Some(Mode_oneof_scope::user_defined(is.read_uint32()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.args = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.args != 0 {
            my_size += ::protobuf::rt::value_size(3, self.args, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.scope {
            match v {
                &Mode_oneof_scope::predef(v) => {
                    my_size += ::protobuf::rt::enum_size(1, v);
                },
                &Mode_oneof_scope::user_defined(v) => {
                    my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint);
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.args != 0 {
            os.write_uint32(3, self.args)?;
        }
        if let ::std::option::Option::Some(ref v) = self.scope {
            match v {
                &Mode_oneof_scope::predef(v) => {
                    os.write_enum(1, ::protobuf::ProtobufEnum::value(&v))?;
                },
                &Mode_oneof_scope::user_defined(v) => {
                    os.write_uint32(2, v)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Mode {
        Mode::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_enum_accessor::<_, Mode_PredefinedMode>(
                "predef",
                Mode::has_predef,
                Mode::get_predef,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_u32_accessor::<_>(
                "user_defined",
                Mode::has_user_defined,
                Mode::get_user_defined,
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "args",
                |m: &Mode| { &m.args },
                |m: &mut Mode| { &mut m.args },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Mode>(
                "Mode",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Mode {
        static instance: ::protobuf::rt::LazyV2<Mode> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Mode::new)
    }
}

impl ::protobuf::Clear for Mode {
    fn clear(&mut self) {
        self.scope = ::std::option::Option::None;
        self.scope = ::std::option::Option::None;
        self.args = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Mode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Mode {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum Mode_PredefinedMode {
    ALL = 0,
    SINGLE = 1,
}

impl ::protobuf::ProtobufEnum for Mode_PredefinedMode {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<Mode_PredefinedMode> {
        match value {
            0 => ::std::option::Option::Some(Mode_PredefinedMode::ALL),
            1 => ::std::option::Option::Some(Mode_PredefinedMode::SINGLE),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [Mode_PredefinedMode] = &[
            Mode_PredefinedMode::ALL,
            Mode_PredefinedMode::SINGLE,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<Mode_PredefinedMode>("Mode.PredefinedMode", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for Mode_PredefinedMode {
}

impl ::std::default::Default for Mode_PredefinedMode {
    fn default() -> Self {
        Mode_PredefinedMode::ALL
    }
}

impl ::protobuf::reflect::ProtobufValue for Mode_PredefinedMode {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct EntryScope {
    // message fields
    pub gress_scope: ::protobuf::SingularPtrField<Mode>,
    pub pipe_scope: ::protobuf::SingularPtrField<Mode>,
    pub prsr_scope: ::protobuf::SingularPtrField<Mode>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a EntryScope {
    fn default() -> &'a EntryScope {
        <EntryScope as ::protobuf::Message>::default_instance()
    }
}

impl EntryScope {
    pub fn new() -> EntryScope {
        ::std::default::Default::default()
    }

    // .bfrt_proto.Mode gress_scope = 1;


    pub fn get_gress_scope(&self) -> &Mode {
        self.gress_scope.as_ref().unwrap_or_else(|| <Mode as ::protobuf::Message>::default_instance())
    }
    pub fn clear_gress_scope(&mut self) {
        self.gress_scope.clear();
    }

    pub fn has_gress_scope(&self) -> bool {
        self.gress_scope.is_some()
    }

    // Param is passed by value, moved
    pub fn set_gress_scope(&mut self, v: Mode) {
        self.gress_scope = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_gress_scope(&mut self) -> &mut Mode {
        if self.gress_scope.is_none() {
            self.gress_scope.set_default();
        }
        self.gress_scope.as_mut().unwrap()
    }

    // Take field
    pub fn take_gress_scope(&mut self) -> Mode {
        self.gress_scope.take().unwrap_or_else(|| Mode::new())
    }

    // .bfrt_proto.Mode pipe_scope = 2;


    pub fn get_pipe_scope(&self) -> &Mode {
        self.pipe_scope.as_ref().unwrap_or_else(|| <Mode as ::protobuf::Message>::default_instance())
    }
    pub fn clear_pipe_scope(&mut self) {
        self.pipe_scope.clear();
    }

    pub fn has_pipe_scope(&self) -> bool {
        self.pipe_scope.is_some()
    }

    // Param is passed by value, moved
    pub fn set_pipe_scope(&mut self, v: Mode) {
        self.pipe_scope = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_pipe_scope(&mut self) -> &mut Mode {
        if self.pipe_scope.is_none() {
            self.pipe_scope.set_default();
        }
        self.pipe_scope.as_mut().unwrap()
    }

    // Take field
    pub fn take_pipe_scope(&mut self) -> Mode {
        self.pipe_scope.take().unwrap_or_else(|| Mode::new())
    }

    // .bfrt_proto.Mode prsr_scope = 3;


    pub fn get_prsr_scope(&self) -> &Mode {
        self.prsr_scope.as_ref().unwrap_or_else(|| <Mode as ::protobuf::Message>::default_instance())
    }
    pub fn clear_prsr_scope(&mut self) {
        self.prsr_scope.clear();
    }

    pub fn has_prsr_scope(&self) -> bool {
        self.prsr_scope.is_some()
    }

    // Param is passed by value, moved
    pub fn set_prsr_scope(&mut self, v: Mode) {
        self.prsr_scope = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_prsr_scope(&mut self) -> &mut Mode {
        if self.prsr_scope.is_none() {
            self.prsr_scope.set_default();
        }
        self.prsr_scope.as_mut().unwrap()
    }

    // Take field
    pub fn take_prsr_scope(&mut self) -> Mode {
        self.prsr_scope.take().unwrap_or_else(|| Mode::new())
    }
}

impl ::protobuf::Message for EntryScope {
    fn is_initialized(&self) -> bool {
        for v in &self.gress_scope {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.pipe_scope {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.prsr_scope {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.gress_scope)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.pipe_scope)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.prsr_scope)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.gress_scope.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.pipe_scope.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.prsr_scope.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.gress_scope.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.pipe_scope.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.prsr_scope.as_ref() {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> EntryScope {
        EntryScope::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Mode>>(
                "gress_scope",
                |m: &EntryScope| { &m.gress_scope },
                |m: &mut EntryScope| { &mut m.gress_scope },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Mode>>(
                "pipe_scope",
                |m: &EntryScope| { &m.pipe_scope },
                |m: &mut EntryScope| { &mut m.pipe_scope },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Mode>>(
                "prsr_scope",
                |m: &EntryScope| { &m.prsr_scope },
                |m: &mut EntryScope| { &mut m.prsr_scope },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<EntryScope>(
                "EntryScope",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static EntryScope {
        static instance: ::protobuf::rt::LazyV2<EntryScope> = ::protobuf::rt::LazyV2::INIT;
        instance.get(EntryScope::new)
    }
}

impl ::protobuf::Clear for EntryScope {
    fn clear(&mut self) {
        self.gress_scope.clear();
        self.pipe_scope.clear();
        self.prsr_scope.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for EntryScope {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for EntryScope {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DynHashing {
    // message fields
    pub alg: u32,
    pub seed: u64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DynHashing {
    fn default() -> &'a DynHashing {
        <DynHashing as ::protobuf::Message>::default_instance()
    }
}

impl DynHashing {
    pub fn new() -> DynHashing {
        ::std::default::Default::default()
    }

    // uint32 alg = 1;


    pub fn get_alg(&self) -> u32 {
        self.alg
    }
    pub fn clear_alg(&mut self) {
        self.alg = 0;
    }

    // Param is passed by value, moved
    pub fn set_alg(&mut self, v: u32) {
        self.alg = v;
    }

    // uint64 seed = 2;


    pub fn get_seed(&self) -> u64 {
        self.seed
    }
    pub fn clear_seed(&mut self) {
        self.seed = 0;
    }

    // Param is passed by value, moved
    pub fn set_seed(&mut self, v: u64) {
        self.seed = v;
    }
}

impl ::protobuf::Message for DynHashing {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.alg = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint64()?;
                    self.seed = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.alg != 0 {
            my_size += ::protobuf::rt::value_size(1, self.alg, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.seed != 0 {
            my_size += ::protobuf::rt::value_size(2, self.seed, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.alg != 0 {
            os.write_uint32(1, self.alg)?;
        }
        if self.seed != 0 {
            os.write_uint64(2, self.seed)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DynHashing {
        DynHashing::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "alg",
                |m: &DynHashing| { &m.alg },
                |m: &mut DynHashing| { &mut m.alg },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint64>(
                "seed",
                |m: &DynHashing| { &m.seed },
                |m: &mut DynHashing| { &mut m.seed },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DynHashing>(
                "DynHashing",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DynHashing {
        static instance: ::protobuf::rt::LazyV2<DynHashing> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DynHashing::new)
    }
}

impl ::protobuf::Clear for DynHashing {
    fn clear(&mut self) {
        self.alg = 0;
        self.seed = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DynHashing {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DynHashing {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ByteCountAdj {
    // message fields
    pub byte_count_adjust: i32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ByteCountAdj {
    fn default() -> &'a ByteCountAdj {
        <ByteCountAdj as ::protobuf::Message>::default_instance()
    }
}

impl ByteCountAdj {
    pub fn new() -> ByteCountAdj {
        ::std::default::Default::default()
    }

    // int32 byte_count_adjust = 1;


    pub fn get_byte_count_adjust(&self) -> i32 {
        self.byte_count_adjust
    }
    pub fn clear_byte_count_adjust(&mut self) {
        self.byte_count_adjust = 0;
    }

    // Param is passed by value, moved
    pub fn set_byte_count_adjust(&mut self, v: i32) {
        self.byte_count_adjust = v;
    }
}

impl ::protobuf::Message for ByteCountAdj {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.byte_count_adjust = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.byte_count_adjust != 0 {
            my_size += ::protobuf::rt::value_size(1, self.byte_count_adjust, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.byte_count_adjust != 0 {
            os.write_int32(1, self.byte_count_adjust)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ByteCountAdj {
        ByteCountAdj::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "byte_count_adjust",
                |m: &ByteCountAdj| { &m.byte_count_adjust },
                |m: &mut ByteCountAdj| { &mut m.byte_count_adjust },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ByteCountAdj>(
                "ByteCountAdj",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ByteCountAdj {
        static instance: ::protobuf::rt::LazyV2<ByteCountAdj> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ByteCountAdj::new)
    }
}

impl ::protobuf::Clear for ByteCountAdj {
    fn clear(&mut self) {
        self.byte_count_adjust = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ByteCountAdj {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ByteCountAdj {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct PortStatusChg {
    // message fields
    pub enable: bool,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a PortStatusChg {
    fn default() -> &'a PortStatusChg {
        <PortStatusChg as ::protobuf::Message>::default_instance()
    }
}

impl PortStatusChg {
    pub fn new() -> PortStatusChg {
        ::std::default::Default::default()
    }

    // bool enable = 1;


    pub fn get_enable(&self) -> bool {
        self.enable
    }
    pub fn clear_enable(&mut self) {
        self.enable = false;
    }

    // Param is passed by value, moved
    pub fn set_enable(&mut self, v: bool) {
        self.enable = v;
    }
}

impl ::protobuf::Message for PortStatusChg {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.enable = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.enable != false {
            my_size += 2;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.enable != false {
            os.write_bool(1, self.enable)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> PortStatusChg {
        PortStatusChg::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "enable",
                |m: &PortStatusChg| { &m.enable },
                |m: &mut PortStatusChg| { &mut m.enable },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<PortStatusChg>(
                "PortStatusChg",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static PortStatusChg {
        static instance: ::protobuf::rt::LazyV2<PortStatusChg> = ::protobuf::rt::LazyV2::INIT;
        instance.get(PortStatusChg::new)
    }
}

impl ::protobuf::Clear for PortStatusChg {
    fn clear(&mut self) {
        self.enable = false;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for PortStatusChg {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for PortStatusChg {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct StatePullIntvl {
    // message fields
    pub intvl_val: u32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a StatePullIntvl {
    fn default() -> &'a StatePullIntvl {
        <StatePullIntvl as ::protobuf::Message>::default_instance()
    }
}

impl StatePullIntvl {
    pub fn new() -> StatePullIntvl {
        ::std::default::Default::default()
    }

    // uint32 intvl_val = 1;


    pub fn get_intvl_val(&self) -> u32 {
        self.intvl_val
    }
    pub fn clear_intvl_val(&mut self) {
        self.intvl_val = 0;
    }

    // Param is passed by value, moved
    pub fn set_intvl_val(&mut self, v: u32) {
        self.intvl_val = v;
    }
}

impl ::protobuf::Message for StatePullIntvl {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.intvl_val = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.intvl_val != 0 {
            my_size += ::protobuf::rt::value_size(1, self.intvl_val, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.intvl_val != 0 {
            os.write_uint32(1, self.intvl_val)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> StatePullIntvl {
        StatePullIntvl::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "intvl_val",
                |m: &StatePullIntvl| { &m.intvl_val },
                |m: &mut StatePullIntvl| { &mut m.intvl_val },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<StatePullIntvl>(
                "StatePullIntvl",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static StatePullIntvl {
        static instance: ::protobuf::rt::LazyV2<StatePullIntvl> = ::protobuf::rt::LazyV2::INIT;
        instance.get(StatePullIntvl::new)
    }
}

impl ::protobuf::Clear for StatePullIntvl {
    fn clear(&mut self) {
        self.intvl_val = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for StatePullIntvl {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for StatePullIntvl {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableKey {
    // message fields
    pub fields: ::protobuf::RepeatedField<KeyField>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableKey {
    fn default() -> &'a TableKey {
        <TableKey as ::protobuf::Message>::default_instance()
    }
}

impl TableKey {
    pub fn new() -> TableKey {
        ::std::default::Default::default()
    }

    // repeated .bfrt_proto.KeyField fields = 1;


    pub fn get_fields(&self) -> &[KeyField] {
        &self.fields
    }
    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    // Param is passed by value, moved
    pub fn set_fields(&mut self, v: ::protobuf::RepeatedField<KeyField>) {
        self.fields = v;
    }

    // Mutable pointer to the field.
    pub fn mut_fields(&mut self) -> &mut ::protobuf::RepeatedField<KeyField> {
        &mut self.fields
    }

    // Take field
    pub fn take_fields(&mut self) -> ::protobuf::RepeatedField<KeyField> {
        ::std::mem::replace(&mut self.fields, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for TableKey {
    fn is_initialized(&self) -> bool {
        for v in &self.fields {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.fields)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.fields {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.fields {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableKey {
        TableKey::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<KeyField>>(
                "fields",
                |m: &TableKey| { &m.fields },
                |m: &mut TableKey| { &mut m.fields },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableKey>(
                "TableKey",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableKey {
        static instance: ::protobuf::rt::LazyV2<TableKey> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableKey::new)
    }
}

impl ::protobuf::Clear for TableKey {
    fn clear(&mut self) {
        self.fields.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableKey {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableKey {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct KeyField {
    // message fields
    pub field_id: u32,
    // message oneof groups
    pub match_type: ::std::option::Option<KeyField_oneof_match_type>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a KeyField {
    fn default() -> &'a KeyField {
        <KeyField as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum KeyField_oneof_match_type {
    exact(KeyField_Exact),
    ternary(KeyField_Ternary),
    lpm(KeyField_LPM),
    range(KeyField_Range),
    optional(KeyField_Optional),
}

impl KeyField {
    pub fn new() -> KeyField {
        ::std::default::Default::default()
    }

    // uint32 field_id = 1;


    pub fn get_field_id(&self) -> u32 {
        self.field_id
    }
    pub fn clear_field_id(&mut self) {
        self.field_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_field_id(&mut self, v: u32) {
        self.field_id = v;
    }

    // .bfrt_proto.KeyField.Exact exact = 2;


    pub fn get_exact(&self) -> &KeyField_Exact {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::exact(ref v)) => v,
            _ => <KeyField_Exact as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_exact(&mut self) {
        self.match_type = ::std::option::Option::None;
    }

    pub fn has_exact(&self) -> bool {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::exact(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_exact(&mut self, v: KeyField_Exact) {
        self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::exact(v))
    }

    // Mutable pointer to the field.
    pub fn mut_exact(&mut self) -> &mut KeyField_Exact {
        if let ::std::option::Option::Some(KeyField_oneof_match_type::exact(_)) = self.match_type {
        } else {
            self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::exact(KeyField_Exact::new()));
        }
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::exact(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_exact(&mut self) -> KeyField_Exact {
        if self.has_exact() {
            match self.match_type.take() {
                ::std::option::Option::Some(KeyField_oneof_match_type::exact(v)) => v,
                _ => panic!(),
            }
        } else {
            KeyField_Exact::new()
        }
    }

    // .bfrt_proto.KeyField.Ternary ternary = 3;


    pub fn get_ternary(&self) -> &KeyField_Ternary {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::ternary(ref v)) => v,
            _ => <KeyField_Ternary as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_ternary(&mut self) {
        self.match_type = ::std::option::Option::None;
    }

    pub fn has_ternary(&self) -> bool {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::ternary(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_ternary(&mut self, v: KeyField_Ternary) {
        self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::ternary(v))
    }

    // Mutable pointer to the field.
    pub fn mut_ternary(&mut self) -> &mut KeyField_Ternary {
        if let ::std::option::Option::Some(KeyField_oneof_match_type::ternary(_)) = self.match_type {
        } else {
            self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::ternary(KeyField_Ternary::new()));
        }
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::ternary(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_ternary(&mut self) -> KeyField_Ternary {
        if self.has_ternary() {
            match self.match_type.take() {
                ::std::option::Option::Some(KeyField_oneof_match_type::ternary(v)) => v,
                _ => panic!(),
            }
        } else {
            KeyField_Ternary::new()
        }
    }

    // .bfrt_proto.KeyField.LPM lpm = 4;


    pub fn get_lpm(&self) -> &KeyField_LPM {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::lpm(ref v)) => v,
            _ => <KeyField_LPM as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_lpm(&mut self) {
        self.match_type = ::std::option::Option::None;
    }

    pub fn has_lpm(&self) -> bool {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::lpm(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_lpm(&mut self, v: KeyField_LPM) {
        self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::lpm(v))
    }

    // Mutable pointer to the field.
    pub fn mut_lpm(&mut self) -> &mut KeyField_LPM {
        if let ::std::option::Option::Some(KeyField_oneof_match_type::lpm(_)) = self.match_type {
        } else {
            self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::lpm(KeyField_LPM::new()));
        }
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::lpm(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_lpm(&mut self) -> KeyField_LPM {
        if self.has_lpm() {
            match self.match_type.take() {
                ::std::option::Option::Some(KeyField_oneof_match_type::lpm(v)) => v,
                _ => panic!(),
            }
        } else {
            KeyField_LPM::new()
        }
    }

    // .bfrt_proto.KeyField.Range range = 5;


    pub fn get_range(&self) -> &KeyField_Range {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::range(ref v)) => v,
            _ => <KeyField_Range as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_range(&mut self) {
        self.match_type = ::std::option::Option::None;
    }

    pub fn has_range(&self) -> bool {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::range(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_range(&mut self, v: KeyField_Range) {
        self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::range(v))
    }

    // Mutable pointer to the field.
    pub fn mut_range(&mut self) -> &mut KeyField_Range {
        if let ::std::option::Option::Some(KeyField_oneof_match_type::range(_)) = self.match_type {
        } else {
            self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::range(KeyField_Range::new()));
        }
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::range(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_range(&mut self) -> KeyField_Range {
        if self.has_range() {
            match self.match_type.take() {
                ::std::option::Option::Some(KeyField_oneof_match_type::range(v)) => v,
                _ => panic!(),
            }
        } else {
            KeyField_Range::new()
        }
    }

    // .bfrt_proto.KeyField.Optional optional = 6;


    pub fn get_optional(&self) -> &KeyField_Optional {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::optional(ref v)) => v,
            _ => <KeyField_Optional as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_optional(&mut self) {
        self.match_type = ::std::option::Option::None;
    }

    pub fn has_optional(&self) -> bool {
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::optional(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_optional(&mut self, v: KeyField_Optional) {
        self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::optional(v))
    }

    // Mutable pointer to the field.
    pub fn mut_optional(&mut self) -> &mut KeyField_Optional {
        if let ::std::option::Option::Some(KeyField_oneof_match_type::optional(_)) = self.match_type {
        } else {
            self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::optional(KeyField_Optional::new()));
        }
        match self.match_type {
            ::std::option::Option::Some(KeyField_oneof_match_type::optional(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_optional(&mut self) -> KeyField_Optional {
        if self.has_optional() {
            match self.match_type.take() {
                ::std::option::Option::Some(KeyField_oneof_match_type::optional(v)) => v,
                _ => panic!(),
            }
        } else {
            KeyField_Optional::new()
        }
    }
}

impl ::protobuf::Message for KeyField {
    fn is_initialized(&self) -> bool {
        if let Some(KeyField_oneof_match_type::exact(ref v)) = self.match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(KeyField_oneof_match_type::ternary(ref v)) = self.match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(KeyField_oneof_match_type::lpm(ref v)) = self.match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(KeyField_oneof_match_type::range(ref v)) = self.match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(KeyField_oneof_match_type::optional(ref v)) = self.match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.field_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::exact(is.read_message()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::ternary(is.read_message()?));
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::lpm(is.read_message()?));
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::range(is.read_message()?));
                },
                6 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.match_type = ::std::option::Option::Some(KeyField_oneof_match_type::optional(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.field_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.field_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.match_type {
            match v {
                &KeyField_oneof_match_type::exact(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &KeyField_oneof_match_type::ternary(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &KeyField_oneof_match_type::lpm(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &KeyField_oneof_match_type::range(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &KeyField_oneof_match_type::optional(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.field_id != 0 {
            os.write_uint32(1, self.field_id)?;
        }
        if let ::std::option::Option::Some(ref v) = self.match_type {
            match v {
                &KeyField_oneof_match_type::exact(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &KeyField_oneof_match_type::ternary(ref v) => {
                    os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &KeyField_oneof_match_type::lpm(ref v) => {
                    os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &KeyField_oneof_match_type::range(ref v) => {
                    os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &KeyField_oneof_match_type::optional(ref v) => {
                    os.write_tag(6, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> KeyField {
        KeyField::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "field_id",
                |m: &KeyField| { &m.field_id },
                |m: &mut KeyField| { &mut m.field_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, KeyField_Exact>(
                "exact",
                KeyField::has_exact,
                KeyField::get_exact,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, KeyField_Ternary>(
                "ternary",
                KeyField::has_ternary,
                KeyField::get_ternary,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, KeyField_LPM>(
                "lpm",
                KeyField::has_lpm,
                KeyField::get_lpm,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, KeyField_Range>(
                "range",
                KeyField::has_range,
                KeyField::get_range,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, KeyField_Optional>(
                "optional",
                KeyField::has_optional,
                KeyField::get_optional,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<KeyField>(
                "KeyField",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static KeyField {
        static instance: ::protobuf::rt::LazyV2<KeyField> = ::protobuf::rt::LazyV2::INIT;
        instance.get(KeyField::new)
    }
}

impl ::protobuf::Clear for KeyField {
    fn clear(&mut self) {
        self.field_id = 0;
        self.match_type = ::std::option::Option::None;
        self.match_type = ::std::option::Option::None;
        self.match_type = ::std::option::Option::None;
        self.match_type = ::std::option::Option::None;
        self.match_type = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for KeyField {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for KeyField {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct KeyField_Exact {
    // message fields
    pub value: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a KeyField_Exact {
    fn default() -> &'a KeyField_Exact {
        <KeyField_Exact as ::protobuf::Message>::default_instance()
    }
}

impl KeyField_Exact {
    pub fn new() -> KeyField_Exact {
        ::std::default::Default::default()
    }

    // bytes value = 1;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for KeyField_Exact {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.value);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.value.is_empty() {
            os.write_bytes(1, &self.value)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> KeyField_Exact {
        KeyField_Exact::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &KeyField_Exact| { &m.value },
                |m: &mut KeyField_Exact| { &mut m.value },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<KeyField_Exact>(
                "KeyField.Exact",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static KeyField_Exact {
        static instance: ::protobuf::rt::LazyV2<KeyField_Exact> = ::protobuf::rt::LazyV2::INIT;
        instance.get(KeyField_Exact::new)
    }
}

impl ::protobuf::Clear for KeyField_Exact {
    fn clear(&mut self) {
        self.value.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for KeyField_Exact {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for KeyField_Exact {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct KeyField_Ternary {
    // message fields
    pub value: ::std::vec::Vec<u8>,
    pub mask: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a KeyField_Ternary {
    fn default() -> &'a KeyField_Ternary {
        <KeyField_Ternary as ::protobuf::Message>::default_instance()
    }
}

impl KeyField_Ternary {
    pub fn new() -> KeyField_Ternary {
        ::std::default::Default::default()
    }

    // bytes value = 1;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }

    // bytes mask = 2;


    pub fn get_mask(&self) -> &[u8] {
        &self.mask
    }
    pub fn clear_mask(&mut self) {
        self.mask.clear();
    }

    // Param is passed by value, moved
    pub fn set_mask(&mut self, v: ::std::vec::Vec<u8>) {
        self.mask = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_mask(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.mask
    }

    // Take field
    pub fn take_mask(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.mask, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for KeyField_Ternary {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.mask)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.value);
        }
        if !self.mask.is_empty() {
            my_size += ::protobuf::rt::bytes_size(2, &self.mask);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.value.is_empty() {
            os.write_bytes(1, &self.value)?;
        }
        if !self.mask.is_empty() {
            os.write_bytes(2, &self.mask)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> KeyField_Ternary {
        KeyField_Ternary::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &KeyField_Ternary| { &m.value },
                |m: &mut KeyField_Ternary| { &mut m.value },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "mask",
                |m: &KeyField_Ternary| { &m.mask },
                |m: &mut KeyField_Ternary| { &mut m.mask },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<KeyField_Ternary>(
                "KeyField.Ternary",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static KeyField_Ternary {
        static instance: ::protobuf::rt::LazyV2<KeyField_Ternary> = ::protobuf::rt::LazyV2::INIT;
        instance.get(KeyField_Ternary::new)
    }
}

impl ::protobuf::Clear for KeyField_Ternary {
    fn clear(&mut self) {
        self.value.clear();
        self.mask.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for KeyField_Ternary {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for KeyField_Ternary {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct KeyField_LPM {
    // message fields
    pub value: ::std::vec::Vec<u8>,
    pub prefix_len: i32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a KeyField_LPM {
    fn default() -> &'a KeyField_LPM {
        <KeyField_LPM as ::protobuf::Message>::default_instance()
    }
}

impl KeyField_LPM {
    pub fn new() -> KeyField_LPM {
        ::std::default::Default::default()
    }

    // bytes value = 1;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }

    // int32 prefix_len = 2;


    pub fn get_prefix_len(&self) -> i32 {
        self.prefix_len
    }
    pub fn clear_prefix_len(&mut self) {
        self.prefix_len = 0;
    }

    // Param is passed by value, moved
    pub fn set_prefix_len(&mut self, v: i32) {
        self.prefix_len = v;
    }
}

impl ::protobuf::Message for KeyField_LPM {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.prefix_len = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.value);
        }
        if self.prefix_len != 0 {
            my_size += ::protobuf::rt::value_size(2, self.prefix_len, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.value.is_empty() {
            os.write_bytes(1, &self.value)?;
        }
        if self.prefix_len != 0 {
            os.write_int32(2, self.prefix_len)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> KeyField_LPM {
        KeyField_LPM::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &KeyField_LPM| { &m.value },
                |m: &mut KeyField_LPM| { &mut m.value },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "prefix_len",
                |m: &KeyField_LPM| { &m.prefix_len },
                |m: &mut KeyField_LPM| { &mut m.prefix_len },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<KeyField_LPM>(
                "KeyField.LPM",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static KeyField_LPM {
        static instance: ::protobuf::rt::LazyV2<KeyField_LPM> = ::protobuf::rt::LazyV2::INIT;
        instance.get(KeyField_LPM::new)
    }
}

impl ::protobuf::Clear for KeyField_LPM {
    fn clear(&mut self) {
        self.value.clear();
        self.prefix_len = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for KeyField_LPM {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for KeyField_LPM {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct KeyField_Range {
    // message fields
    pub low: ::std::vec::Vec<u8>,
    pub high: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a KeyField_Range {
    fn default() -> &'a KeyField_Range {
        <KeyField_Range as ::protobuf::Message>::default_instance()
    }
}

impl KeyField_Range {
    pub fn new() -> KeyField_Range {
        ::std::default::Default::default()
    }

    // bytes low = 1;


    pub fn get_low(&self) -> &[u8] {
        &self.low
    }
    pub fn clear_low(&mut self) {
        self.low.clear();
    }

    // Param is passed by value, moved
    pub fn set_low(&mut self, v: ::std::vec::Vec<u8>) {
        self.low = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_low(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.low
    }

    // Take field
    pub fn take_low(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.low, ::std::vec::Vec::new())
    }

    // bytes high = 2;


    pub fn get_high(&self) -> &[u8] {
        &self.high
    }
    pub fn clear_high(&mut self) {
        self.high.clear();
    }

    // Param is passed by value, moved
    pub fn set_high(&mut self, v: ::std::vec::Vec<u8>) {
        self.high = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_high(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.high
    }

    // Take field
    pub fn take_high(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.high, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for KeyField_Range {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.low)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.high)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.low.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.low);
        }
        if !self.high.is_empty() {
            my_size += ::protobuf::rt::bytes_size(2, &self.high);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.low.is_empty() {
            os.write_bytes(1, &self.low)?;
        }
        if !self.high.is_empty() {
            os.write_bytes(2, &self.high)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> KeyField_Range {
        KeyField_Range::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "low",
                |m: &KeyField_Range| { &m.low },
                |m: &mut KeyField_Range| { &mut m.low },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "high",
                |m: &KeyField_Range| { &m.high },
                |m: &mut KeyField_Range| { &mut m.high },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<KeyField_Range>(
                "KeyField.Range",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static KeyField_Range {
        static instance: ::protobuf::rt::LazyV2<KeyField_Range> = ::protobuf::rt::LazyV2::INIT;
        instance.get(KeyField_Range::new)
    }
}

impl ::protobuf::Clear for KeyField_Range {
    fn clear(&mut self) {
        self.low.clear();
        self.high.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for KeyField_Range {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for KeyField_Range {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct KeyField_Optional {
    // message fields
    pub value: ::std::vec::Vec<u8>,
    pub is_valid: bool,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a KeyField_Optional {
    fn default() -> &'a KeyField_Optional {
        <KeyField_Optional as ::protobuf::Message>::default_instance()
    }
}

impl KeyField_Optional {
    pub fn new() -> KeyField_Optional {
        ::std::default::Default::default()
    }

    // bytes value = 1;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }

    // bool is_valid = 2;


    pub fn get_is_valid(&self) -> bool {
        self.is_valid
    }
    pub fn clear_is_valid(&mut self) {
        self.is_valid = false;
    }

    // Param is passed by value, moved
    pub fn set_is_valid(&mut self, v: bool) {
        self.is_valid = v;
    }
}

impl ::protobuf::Message for KeyField_Optional {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.is_valid = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.value);
        }
        if self.is_valid != false {
            my_size += 2;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.value.is_empty() {
            os.write_bytes(1, &self.value)?;
        }
        if self.is_valid != false {
            os.write_bool(2, self.is_valid)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> KeyField_Optional {
        KeyField_Optional::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &KeyField_Optional| { &m.value },
                |m: &mut KeyField_Optional| { &mut m.value },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "is_valid",
                |m: &KeyField_Optional| { &m.is_valid },
                |m: &mut KeyField_Optional| { &mut m.is_valid },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<KeyField_Optional>(
                "KeyField.Optional",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static KeyField_Optional {
        static instance: ::protobuf::rt::LazyV2<KeyField_Optional> = ::protobuf::rt::LazyV2::INIT;
        instance.get(KeyField_Optional::new)
    }
}

impl ::protobuf::Clear for KeyField_Optional {
    fn clear(&mut self) {
        self.value.clear();
        self.is_valid = false;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for KeyField_Optional {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for KeyField_Optional {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableData {
    // message fields
    pub action_id: u32,
    pub fields: ::protobuf::RepeatedField<DataField>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableData {
    fn default() -> &'a TableData {
        <TableData as ::protobuf::Message>::default_instance()
    }
}

impl TableData {
    pub fn new() -> TableData {
        ::std::default::Default::default()
    }

    // uint32 action_id = 1;


    pub fn get_action_id(&self) -> u32 {
        self.action_id
    }
    pub fn clear_action_id(&mut self) {
        self.action_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_action_id(&mut self, v: u32) {
        self.action_id = v;
    }

    // repeated .bfrt_proto.DataField fields = 2;


    pub fn get_fields(&self) -> &[DataField] {
        &self.fields
    }
    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    // Param is passed by value, moved
    pub fn set_fields(&mut self, v: ::protobuf::RepeatedField<DataField>) {
        self.fields = v;
    }

    // Mutable pointer to the field.
    pub fn mut_fields(&mut self) -> &mut ::protobuf::RepeatedField<DataField> {
        &mut self.fields
    }

    // Take field
    pub fn take_fields(&mut self) -> ::protobuf::RepeatedField<DataField> {
        ::std::mem::replace(&mut self.fields, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for TableData {
    fn is_initialized(&self) -> bool {
        for v in &self.fields {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.action_id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.fields)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.action_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.action_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.fields {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.action_id != 0 {
            os.write_uint32(1, self.action_id)?;
        }
        for v in &self.fields {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableData {
        TableData::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "action_id",
                |m: &TableData| { &m.action_id },
                |m: &mut TableData| { &mut m.action_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<DataField>>(
                "fields",
                |m: &TableData| { &m.fields },
                |m: &mut TableData| { &mut m.fields },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableData>(
                "TableData",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableData {
        static instance: ::protobuf::rt::LazyV2<TableData> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableData::new)
    }
}

impl ::protobuf::Clear for TableData {
    fn clear(&mut self) {
        self.action_id = 0;
        self.fields.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableData {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableData {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DataField {
    // message fields
    pub field_id: u32,
    // message oneof groups
    pub value: ::std::option::Option<DataField_oneof_value>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DataField {
    fn default() -> &'a DataField {
        <DataField as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum DataField_oneof_value {
    stream(::std::vec::Vec<u8>),
    float_val(f32),
    str_val(::std::string::String),
    int_arr_val(DataField_IntArray),
    bool_arr_val(DataField_BoolArray),
    container_arr_val(DataField_ContainerArray),
    bool_val(bool),
    str_arr_val(DataField_StrArray),
}

impl DataField {
    pub fn new() -> DataField {
        ::std::default::Default::default()
    }

    // uint32 field_id = 1;


    pub fn get_field_id(&self) -> u32 {
        self.field_id
    }
    pub fn clear_field_id(&mut self) {
        self.field_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_field_id(&mut self, v: u32) {
        self.field_id = v;
    }

    // bytes stream = 2;


    pub fn get_stream(&self) -> &[u8] {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::stream(ref v)) => v,
            _ => &[],
        }
    }
    pub fn clear_stream(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_stream(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::stream(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_stream(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = ::std::option::Option::Some(DataField_oneof_value::stream(v))
    }

    // Mutable pointer to the field.
    pub fn mut_stream(&mut self) -> &mut ::std::vec::Vec<u8> {
        if let ::std::option::Option::Some(DataField_oneof_value::stream(_)) = self.value {
        } else {
            self.value = ::std::option::Option::Some(DataField_oneof_value::stream(::std::vec::Vec::new()));
        }
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::stream(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_stream(&mut self) -> ::std::vec::Vec<u8> {
        if self.has_stream() {
            match self.value.take() {
                ::std::option::Option::Some(DataField_oneof_value::stream(v)) => v,
                _ => panic!(),
            }
        } else {
            ::std::vec::Vec::new()
        }
    }

    // float float_val = 3;


    pub fn get_float_val(&self) -> f32 {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::float_val(v)) => v,
            _ => 0.,
        }
    }
    pub fn clear_float_val(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_float_val(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::float_val(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_float_val(&mut self, v: f32) {
        self.value = ::std::option::Option::Some(DataField_oneof_value::float_val(v))
    }

    // string str_val = 4;


    pub fn get_str_val(&self) -> &str {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::str_val(ref v)) => v,
            _ => "",
        }
    }
    pub fn clear_str_val(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_str_val(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::str_val(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_str_val(&mut self, v: ::std::string::String) {
        self.value = ::std::option::Option::Some(DataField_oneof_value::str_val(v))
    }

    // Mutable pointer to the field.
    pub fn mut_str_val(&mut self) -> &mut ::std::string::String {
        if let ::std::option::Option::Some(DataField_oneof_value::str_val(_)) = self.value {
        } else {
            self.value = ::std::option::Option::Some(DataField_oneof_value::str_val(::std::string::String::new()));
        }
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::str_val(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_str_val(&mut self) -> ::std::string::String {
        if self.has_str_val() {
            match self.value.take() {
                ::std::option::Option::Some(DataField_oneof_value::str_val(v)) => v,
                _ => panic!(),
            }
        } else {
            ::std::string::String::new()
        }
    }

    // .bfrt_proto.DataField.IntArray int_arr_val = 5;


    pub fn get_int_arr_val(&self) -> &DataField_IntArray {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::int_arr_val(ref v)) => v,
            _ => <DataField_IntArray as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_int_arr_val(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_int_arr_val(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::int_arr_val(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_int_arr_val(&mut self, v: DataField_IntArray) {
        self.value = ::std::option::Option::Some(DataField_oneof_value::int_arr_val(v))
    }

    // Mutable pointer to the field.
    pub fn mut_int_arr_val(&mut self) -> &mut DataField_IntArray {
        if let ::std::option::Option::Some(DataField_oneof_value::int_arr_val(_)) = self.value {
        } else {
            self.value = ::std::option::Option::Some(DataField_oneof_value::int_arr_val(DataField_IntArray::new()));
        }
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::int_arr_val(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_int_arr_val(&mut self) -> DataField_IntArray {
        if self.has_int_arr_val() {
            match self.value.take() {
                ::std::option::Option::Some(DataField_oneof_value::int_arr_val(v)) => v,
                _ => panic!(),
            }
        } else {
            DataField_IntArray::new()
        }
    }

    // .bfrt_proto.DataField.BoolArray bool_arr_val = 6;


    pub fn get_bool_arr_val(&self) -> &DataField_BoolArray {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::bool_arr_val(ref v)) => v,
            _ => <DataField_BoolArray as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_bool_arr_val(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_bool_arr_val(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::bool_arr_val(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_bool_arr_val(&mut self, v: DataField_BoolArray) {
        self.value = ::std::option::Option::Some(DataField_oneof_value::bool_arr_val(v))
    }

    // Mutable pointer to the field.
    pub fn mut_bool_arr_val(&mut self) -> &mut DataField_BoolArray {
        if let ::std::option::Option::Some(DataField_oneof_value::bool_arr_val(_)) = self.value {
        } else {
            self.value = ::std::option::Option::Some(DataField_oneof_value::bool_arr_val(DataField_BoolArray::new()));
        }
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::bool_arr_val(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_bool_arr_val(&mut self) -> DataField_BoolArray {
        if self.has_bool_arr_val() {
            match self.value.take() {
                ::std::option::Option::Some(DataField_oneof_value::bool_arr_val(v)) => v,
                _ => panic!(),
            }
        } else {
            DataField_BoolArray::new()
        }
    }

    // .bfrt_proto.DataField.ContainerArray container_arr_val = 7;


    pub fn get_container_arr_val(&self) -> &DataField_ContainerArray {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::container_arr_val(ref v)) => v,
            _ => <DataField_ContainerArray as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_container_arr_val(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_container_arr_val(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::container_arr_val(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_container_arr_val(&mut self, v: DataField_ContainerArray) {
        self.value = ::std::option::Option::Some(DataField_oneof_value::container_arr_val(v))
    }

    // Mutable pointer to the field.
    pub fn mut_container_arr_val(&mut self) -> &mut DataField_ContainerArray {
        if let ::std::option::Option::Some(DataField_oneof_value::container_arr_val(_)) = self.value {
        } else {
            self.value = ::std::option::Option::Some(DataField_oneof_value::container_arr_val(DataField_ContainerArray::new()));
        }
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::container_arr_val(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_container_arr_val(&mut self) -> DataField_ContainerArray {
        if self.has_container_arr_val() {
            match self.value.take() {
                ::std::option::Option::Some(DataField_oneof_value::container_arr_val(v)) => v,
                _ => panic!(),
            }
        } else {
            DataField_ContainerArray::new()
        }
    }

    // bool bool_val = 8;


    pub fn get_bool_val(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::bool_val(v)) => v,
            _ => false,
        }
    }
    pub fn clear_bool_val(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_bool_val(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::bool_val(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_bool_val(&mut self, v: bool) {
        self.value = ::std::option::Option::Some(DataField_oneof_value::bool_val(v))
    }

    // .bfrt_proto.DataField.StrArray str_arr_val = 9;


    pub fn get_str_arr_val(&self) -> &DataField_StrArray {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::str_arr_val(ref v)) => v,
            _ => <DataField_StrArray as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_str_arr_val(&mut self) {
        self.value = ::std::option::Option::None;
    }

    pub fn has_str_arr_val(&self) -> bool {
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::str_arr_val(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_str_arr_val(&mut self, v: DataField_StrArray) {
        self.value = ::std::option::Option::Some(DataField_oneof_value::str_arr_val(v))
    }

    // Mutable pointer to the field.
    pub fn mut_str_arr_val(&mut self) -> &mut DataField_StrArray {
        if let ::std::option::Option::Some(DataField_oneof_value::str_arr_val(_)) = self.value {
        } else {
            self.value = ::std::option::Option::Some(DataField_oneof_value::str_arr_val(DataField_StrArray::new()));
        }
        match self.value {
            ::std::option::Option::Some(DataField_oneof_value::str_arr_val(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_str_arr_val(&mut self) -> DataField_StrArray {
        if self.has_str_arr_val() {
            match self.value.take() {
                ::std::option::Option::Some(DataField_oneof_value::str_arr_val(v)) => v,
                _ => panic!(),
            }
        } else {
            DataField_StrArray::new()
        }
    }
}

impl ::protobuf::Message for DataField {
    fn is_initialized(&self) -> bool {
        if let Some(DataField_oneof_value::int_arr_val(ref v)) = self.value {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(DataField_oneof_value::bool_arr_val(ref v)) = self.value {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(DataField_oneof_value::container_arr_val(ref v)) = self.value {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(DataField_oneof_value::str_arr_val(ref v)) = self.value {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.field_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(DataField_oneof_value::stream(is.read_bytes()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeFixed32 {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(DataField_oneof_value::float_val(is.read_float()?));
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(DataField_oneof_value::str_val(is.read_string()?));
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(DataField_oneof_value::int_arr_val(is.read_message()?));
                },
                6 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(DataField_oneof_value::bool_arr_val(is.read_message()?));
                },
                7 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(DataField_oneof_value::container_arr_val(is.read_message()?));
                },
                8 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(DataField_oneof_value::bool_val(is.read_bool()?));
                },
                9 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.value = ::std::option::Option::Some(DataField_oneof_value::str_arr_val(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.field_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.field_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.value {
            match v {
                &DataField_oneof_value::stream(ref v) => {
                    my_size += ::protobuf::rt::bytes_size(2, &v);
                },
                &DataField_oneof_value::float_val(v) => {
                    my_size += 5;
                },
                &DataField_oneof_value::str_val(ref v) => {
                    my_size += ::protobuf::rt::string_size(4, &v);
                },
                &DataField_oneof_value::int_arr_val(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &DataField_oneof_value::bool_arr_val(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &DataField_oneof_value::container_arr_val(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &DataField_oneof_value::bool_val(v) => {
                    my_size += 2;
                },
                &DataField_oneof_value::str_arr_val(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.field_id != 0 {
            os.write_uint32(1, self.field_id)?;
        }
        if let ::std::option::Option::Some(ref v) = self.value {
            match v {
                &DataField_oneof_value::stream(ref v) => {
                    os.write_bytes(2, v)?;
                },
                &DataField_oneof_value::float_val(v) => {
                    os.write_float(3, v)?;
                },
                &DataField_oneof_value::str_val(ref v) => {
                    os.write_string(4, v)?;
                },
                &DataField_oneof_value::int_arr_val(ref v) => {
                    os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &DataField_oneof_value::bool_arr_val(ref v) => {
                    os.write_tag(6, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &DataField_oneof_value::container_arr_val(ref v) => {
                    os.write_tag(7, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &DataField_oneof_value::bool_val(v) => {
                    os.write_bool(8, v)?;
                },
                &DataField_oneof_value::str_arr_val(ref v) => {
                    os.write_tag(9, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DataField {
        DataField::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "field_id",
                |m: &DataField| { &m.field_id },
                |m: &mut DataField| { &mut m.field_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_bytes_accessor::<_>(
                "stream",
                DataField::has_stream,
                DataField::get_stream,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_f32_accessor::<_>(
                "float_val",
                DataField::has_float_val,
                DataField::get_float_val,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_string_accessor::<_>(
                "str_val",
                DataField::has_str_val,
                DataField::get_str_val,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, DataField_IntArray>(
                "int_arr_val",
                DataField::has_int_arr_val,
                DataField::get_int_arr_val,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, DataField_BoolArray>(
                "bool_arr_val",
                DataField::has_bool_arr_val,
                DataField::get_bool_arr_val,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, DataField_ContainerArray>(
                "container_arr_val",
                DataField::has_container_arr_val,
                DataField::get_container_arr_val,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_bool_accessor::<_>(
                "bool_val",
                DataField::has_bool_val,
                DataField::get_bool_val,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, DataField_StrArray>(
                "str_arr_val",
                DataField::has_str_arr_val,
                DataField::get_str_arr_val,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DataField>(
                "DataField",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DataField {
        static instance: ::protobuf::rt::LazyV2<DataField> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DataField::new)
    }
}

impl ::protobuf::Clear for DataField {
    fn clear(&mut self) {
        self.field_id = 0;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.value = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DataField {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DataField {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DataField_IntArray {
    // message fields
    pub val: ::std::vec::Vec<u32>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DataField_IntArray {
    fn default() -> &'a DataField_IntArray {
        <DataField_IntArray as ::protobuf::Message>::default_instance()
    }
}

impl DataField_IntArray {
    pub fn new() -> DataField_IntArray {
        ::std::default::Default::default()
    }

    // repeated uint32 val = 1;


    pub fn get_val(&self) -> &[u32] {
        &self.val
    }
    pub fn clear_val(&mut self) {
        self.val.clear();
    }

    // Param is passed by value, moved
    pub fn set_val(&mut self, v: ::std::vec::Vec<u32>) {
        self.val = v;
    }

    // Mutable pointer to the field.
    pub fn mut_val(&mut self) -> &mut ::std::vec::Vec<u32> {
        &mut self.val
    }

    // Take field
    pub fn take_val(&mut self) -> ::std::vec::Vec<u32> {
        ::std::mem::replace(&mut self.val, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for DataField_IntArray {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_uint32_into(wire_type, is, &mut self.val)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.val {
            my_size += ::protobuf::rt::value_size(1, *value, ::protobuf::wire_format::WireTypeVarint);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.val {
            os.write_uint32(1, *v)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DataField_IntArray {
        DataField_IntArray::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_vec_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "val",
                |m: &DataField_IntArray| { &m.val },
                |m: &mut DataField_IntArray| { &mut m.val },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DataField_IntArray>(
                "DataField.IntArray",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DataField_IntArray {
        static instance: ::protobuf::rt::LazyV2<DataField_IntArray> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DataField_IntArray::new)
    }
}

impl ::protobuf::Clear for DataField_IntArray {
    fn clear(&mut self) {
        self.val.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DataField_IntArray {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DataField_IntArray {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DataField_BoolArray {
    // message fields
    pub val: ::std::vec::Vec<bool>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DataField_BoolArray {
    fn default() -> &'a DataField_BoolArray {
        <DataField_BoolArray as ::protobuf::Message>::default_instance()
    }
}

impl DataField_BoolArray {
    pub fn new() -> DataField_BoolArray {
        ::std::default::Default::default()
    }

    // repeated bool val = 1;


    pub fn get_val(&self) -> &[bool] {
        &self.val
    }
    pub fn clear_val(&mut self) {
        self.val.clear();
    }

    // Param is passed by value, moved
    pub fn set_val(&mut self, v: ::std::vec::Vec<bool>) {
        self.val = v;
    }

    // Mutable pointer to the field.
    pub fn mut_val(&mut self) -> &mut ::std::vec::Vec<bool> {
        &mut self.val
    }

    // Take field
    pub fn take_val(&mut self) -> ::std::vec::Vec<bool> {
        ::std::mem::replace(&mut self.val, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for DataField_BoolArray {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_bool_into(wire_type, is, &mut self.val)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        my_size += 2 * self.val.len() as u32;
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.val {
            os.write_bool(1, *v)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DataField_BoolArray {
        DataField_BoolArray::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_vec_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "val",
                |m: &DataField_BoolArray| { &m.val },
                |m: &mut DataField_BoolArray| { &mut m.val },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DataField_BoolArray>(
                "DataField.BoolArray",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DataField_BoolArray {
        static instance: ::protobuf::rt::LazyV2<DataField_BoolArray> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DataField_BoolArray::new)
    }
}

impl ::protobuf::Clear for DataField_BoolArray {
    fn clear(&mut self) {
        self.val.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DataField_BoolArray {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DataField_BoolArray {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DataField_StrArray {
    // message fields
    pub val: ::protobuf::RepeatedField<::std::string::String>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DataField_StrArray {
    fn default() -> &'a DataField_StrArray {
        <DataField_StrArray as ::protobuf::Message>::default_instance()
    }
}

impl DataField_StrArray {
    pub fn new() -> DataField_StrArray {
        ::std::default::Default::default()
    }

    // repeated string val = 1;


    pub fn get_val(&self) -> &[::std::string::String] {
        &self.val
    }
    pub fn clear_val(&mut self) {
        self.val.clear();
    }

    // Param is passed by value, moved
    pub fn set_val(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.val = v;
    }

    // Mutable pointer to the field.
    pub fn mut_val(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.val
    }

    // Take field
    pub fn take_val(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.val, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for DataField_StrArray {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.val)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.val {
            my_size += ::protobuf::rt::string_size(1, &value);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.val {
            os.write_string(1, &v)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DataField_StrArray {
        DataField_StrArray::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "val",
                |m: &DataField_StrArray| { &m.val },
                |m: &mut DataField_StrArray| { &mut m.val },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DataField_StrArray>(
                "DataField.StrArray",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DataField_StrArray {
        static instance: ::protobuf::rt::LazyV2<DataField_StrArray> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DataField_StrArray::new)
    }
}

impl ::protobuf::Clear for DataField_StrArray {
    fn clear(&mut self) {
        self.val.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DataField_StrArray {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DataField_StrArray {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DataField_ContainerArray {
    // message fields
    pub container: ::protobuf::RepeatedField<DataField_ContainerArray_Container>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DataField_ContainerArray {
    fn default() -> &'a DataField_ContainerArray {
        <DataField_ContainerArray as ::protobuf::Message>::default_instance()
    }
}

impl DataField_ContainerArray {
    pub fn new() -> DataField_ContainerArray {
        ::std::default::Default::default()
    }

    // repeated .bfrt_proto.DataField.ContainerArray.Container container = 1;


    pub fn get_container(&self) -> &[DataField_ContainerArray_Container] {
        &self.container
    }
    pub fn clear_container(&mut self) {
        self.container.clear();
    }

    // Param is passed by value, moved
    pub fn set_container(&mut self, v: ::protobuf::RepeatedField<DataField_ContainerArray_Container>) {
        self.container = v;
    }

    // Mutable pointer to the field.
    pub fn mut_container(&mut self) -> &mut ::protobuf::RepeatedField<DataField_ContainerArray_Container> {
        &mut self.container
    }

    // Take field
    pub fn take_container(&mut self) -> ::protobuf::RepeatedField<DataField_ContainerArray_Container> {
        ::std::mem::replace(&mut self.container, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for DataField_ContainerArray {
    fn is_initialized(&self) -> bool {
        for v in &self.container {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.container)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.container {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.container {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DataField_ContainerArray {
        DataField_ContainerArray::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<DataField_ContainerArray_Container>>(
                "container",
                |m: &DataField_ContainerArray| { &m.container },
                |m: &mut DataField_ContainerArray| { &mut m.container },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DataField_ContainerArray>(
                "DataField.ContainerArray",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DataField_ContainerArray {
        static instance: ::protobuf::rt::LazyV2<DataField_ContainerArray> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DataField_ContainerArray::new)
    }
}

impl ::protobuf::Clear for DataField_ContainerArray {
    fn clear(&mut self) {
        self.container.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DataField_ContainerArray {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DataField_ContainerArray {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DataField_ContainerArray_Container {
    // message fields
    pub val: ::protobuf::RepeatedField<DataField>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DataField_ContainerArray_Container {
    fn default() -> &'a DataField_ContainerArray_Container {
        <DataField_ContainerArray_Container as ::protobuf::Message>::default_instance()
    }
}

impl DataField_ContainerArray_Container {
    pub fn new() -> DataField_ContainerArray_Container {
        ::std::default::Default::default()
    }

    // repeated .bfrt_proto.DataField val = 1;


    pub fn get_val(&self) -> &[DataField] {
        &self.val
    }
    pub fn clear_val(&mut self) {
        self.val.clear();
    }

    // Param is passed by value, moved
    pub fn set_val(&mut self, v: ::protobuf::RepeatedField<DataField>) {
        self.val = v;
    }

    // Mutable pointer to the field.
    pub fn mut_val(&mut self) -> &mut ::protobuf::RepeatedField<DataField> {
        &mut self.val
    }

    // Take field
    pub fn take_val(&mut self) -> ::protobuf::RepeatedField<DataField> {
        ::std::mem::replace(&mut self.val, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for DataField_ContainerArray_Container {
    fn is_initialized(&self) -> bool {
        for v in &self.val {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.val)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.val {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.val {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DataField_ContainerArray_Container {
        DataField_ContainerArray_Container::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<DataField>>(
                "val",
                |m: &DataField_ContainerArray_Container| { &m.val },
                |m: &mut DataField_ContainerArray_Container| { &mut m.val },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DataField_ContainerArray_Container>(
                "DataField.ContainerArray.Container",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DataField_ContainerArray_Container {
        static instance: ::protobuf::rt::LazyV2<DataField_ContainerArray_Container> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DataField_ContainerArray_Container::new)
    }
}

impl ::protobuf::Clear for DataField_ContainerArray_Container {
    fn clear(&mut self) {
        self.val.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DataField_ContainerArray_Container {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DataField_ContainerArray_Container {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct StreamMessageRequest {
    // message fields
    pub client_id: u32,
    // message oneof groups
    pub update: ::std::option::Option<StreamMessageRequest_oneof_update>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a StreamMessageRequest {
    fn default() -> &'a StreamMessageRequest {
        <StreamMessageRequest as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum StreamMessageRequest_oneof_update {
    subscribe(Subscribe),
    digest_ack(DigestListAck),
}

impl StreamMessageRequest {
    pub fn new() -> StreamMessageRequest {
        ::std::default::Default::default()
    }

    // uint32 client_id = 1;


    pub fn get_client_id(&self) -> u32 {
        self.client_id
    }
    pub fn clear_client_id(&mut self) {
        self.client_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_client_id(&mut self, v: u32) {
        self.client_id = v;
    }

    // .bfrt_proto.Subscribe subscribe = 2;


    pub fn get_subscribe(&self) -> &Subscribe {
        match self.update {
            ::std::option::Option::Some(StreamMessageRequest_oneof_update::subscribe(ref v)) => v,
            _ => <Subscribe as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_subscribe(&mut self) {
        self.update = ::std::option::Option::None;
    }

    pub fn has_subscribe(&self) -> bool {
        match self.update {
            ::std::option::Option::Some(StreamMessageRequest_oneof_update::subscribe(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_subscribe(&mut self, v: Subscribe) {
        self.update = ::std::option::Option::Some(StreamMessageRequest_oneof_update::subscribe(v))
    }

    // Mutable pointer to the field.
    pub fn mut_subscribe(&mut self) -> &mut Subscribe {
        if let ::std::option::Option::Some(StreamMessageRequest_oneof_update::subscribe(_)) = self.update {
        } else {
            self.update = ::std::option::Option::Some(StreamMessageRequest_oneof_update::subscribe(Subscribe::new()));
        }
        match self.update {
            ::std::option::Option::Some(StreamMessageRequest_oneof_update::subscribe(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_subscribe(&mut self) -> Subscribe {
        if self.has_subscribe() {
            match self.update.take() {
                ::std::option::Option::Some(StreamMessageRequest_oneof_update::subscribe(v)) => v,
                _ => panic!(),
            }
        } else {
            Subscribe::new()
        }
    }

    // .bfrt_proto.DigestListAck digest_ack = 3;


    pub fn get_digest_ack(&self) -> &DigestListAck {
        match self.update {
            ::std::option::Option::Some(StreamMessageRequest_oneof_update::digest_ack(ref v)) => v,
            _ => <DigestListAck as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_digest_ack(&mut self) {
        self.update = ::std::option::Option::None;
    }

    pub fn has_digest_ack(&self) -> bool {
        match self.update {
            ::std::option::Option::Some(StreamMessageRequest_oneof_update::digest_ack(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_digest_ack(&mut self, v: DigestListAck) {
        self.update = ::std::option::Option::Some(StreamMessageRequest_oneof_update::digest_ack(v))
    }

    // Mutable pointer to the field.
    pub fn mut_digest_ack(&mut self) -> &mut DigestListAck {
        if let ::std::option::Option::Some(StreamMessageRequest_oneof_update::digest_ack(_)) = self.update {
        } else {
            self.update = ::std::option::Option::Some(StreamMessageRequest_oneof_update::digest_ack(DigestListAck::new()));
        }
        match self.update {
            ::std::option::Option::Some(StreamMessageRequest_oneof_update::digest_ack(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_digest_ack(&mut self) -> DigestListAck {
        if self.has_digest_ack() {
            match self.update.take() {
                ::std::option::Option::Some(StreamMessageRequest_oneof_update::digest_ack(v)) => v,
                _ => panic!(),
            }
        } else {
            DigestListAck::new()
        }
    }
}

impl ::protobuf::Message for StreamMessageRequest {
    fn is_initialized(&self) -> bool {
        if let Some(StreamMessageRequest_oneof_update::subscribe(ref v)) = self.update {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(StreamMessageRequest_oneof_update::digest_ack(ref v)) = self.update {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.client_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.update = ::std::option::Option::Some(StreamMessageRequest_oneof_update::subscribe(is.read_message()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.update = ::std::option::Option::Some(StreamMessageRequest_oneof_update::digest_ack(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.client_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.client_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.update {
            match v {
                &StreamMessageRequest_oneof_update::subscribe(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &StreamMessageRequest_oneof_update::digest_ack(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.client_id != 0 {
            os.write_uint32(1, self.client_id)?;
        }
        if let ::std::option::Option::Some(ref v) = self.update {
            match v {
                &StreamMessageRequest_oneof_update::subscribe(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &StreamMessageRequest_oneof_update::digest_ack(ref v) => {
                    os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> StreamMessageRequest {
        StreamMessageRequest::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "client_id",
                |m: &StreamMessageRequest| { &m.client_id },
                |m: &mut StreamMessageRequest| { &mut m.client_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, Subscribe>(
                "subscribe",
                StreamMessageRequest::has_subscribe,
                StreamMessageRequest::get_subscribe,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, DigestListAck>(
                "digest_ack",
                StreamMessageRequest::has_digest_ack,
                StreamMessageRequest::get_digest_ack,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<StreamMessageRequest>(
                "StreamMessageRequest",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static StreamMessageRequest {
        static instance: ::protobuf::rt::LazyV2<StreamMessageRequest> = ::protobuf::rt::LazyV2::INIT;
        instance.get(StreamMessageRequest::new)
    }
}

impl ::protobuf::Clear for StreamMessageRequest {
    fn clear(&mut self) {
        self.client_id = 0;
        self.update = ::std::option::Option::None;
        self.update = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for StreamMessageRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for StreamMessageRequest {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Subscribe {
    // message fields
    pub is_master: bool,
    pub device_id: u32,
    pub notifications: ::protobuf::SingularPtrField<Subscribe_Notifications>,
    pub status: ::protobuf::SingularPtrField<Status>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Subscribe {
    fn default() -> &'a Subscribe {
        <Subscribe as ::protobuf::Message>::default_instance()
    }
}

impl Subscribe {
    pub fn new() -> Subscribe {
        ::std::default::Default::default()
    }

    // bool is_master = 1;


    pub fn get_is_master(&self) -> bool {
        self.is_master
    }
    pub fn clear_is_master(&mut self) {
        self.is_master = false;
    }

    // Param is passed by value, moved
    pub fn set_is_master(&mut self, v: bool) {
        self.is_master = v;
    }

    // uint32 device_id = 2;


    pub fn get_device_id(&self) -> u32 {
        self.device_id
    }
    pub fn clear_device_id(&mut self) {
        self.device_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_device_id(&mut self, v: u32) {
        self.device_id = v;
    }

    // .bfrt_proto.Subscribe.Notifications notifications = 3;


    pub fn get_notifications(&self) -> &Subscribe_Notifications {
        self.notifications.as_ref().unwrap_or_else(|| <Subscribe_Notifications as ::protobuf::Message>::default_instance())
    }
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn has_notifications(&self) -> bool {
        self.notifications.is_some()
    }

    // Param is passed by value, moved
    pub fn set_notifications(&mut self, v: Subscribe_Notifications) {
        self.notifications = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_notifications(&mut self) -> &mut Subscribe_Notifications {
        if self.notifications.is_none() {
            self.notifications.set_default();
        }
        self.notifications.as_mut().unwrap()
    }

    // Take field
    pub fn take_notifications(&mut self) -> Subscribe_Notifications {
        self.notifications.take().unwrap_or_else(|| Subscribe_Notifications::new())
    }

    // .bfrt_proto.Status status = 4;


    pub fn get_status(&self) -> &Status {
        self.status.as_ref().unwrap_or_else(|| <Status as ::protobuf::Message>::default_instance())
    }
    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    // Param is passed by value, moved
    pub fn set_status(&mut self, v: Status) {
        self.status = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_status(&mut self) -> &mut Status {
        if self.status.is_none() {
            self.status.set_default();
        }
        self.status.as_mut().unwrap()
    }

    // Take field
    pub fn take_status(&mut self) -> Status {
        self.status.take().unwrap_or_else(|| Status::new())
    }
}

impl ::protobuf::Message for Subscribe {
    fn is_initialized(&self) -> bool {
        for v in &self.notifications {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.status {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.is_master = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.device_id = tmp;
                },
                3 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.notifications)?;
                },
                4 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.status)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.is_master != false {
            my_size += 2;
        }
        if self.device_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.device_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.notifications.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.status.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.is_master != false {
            os.write_bool(1, self.is_master)?;
        }
        if self.device_id != 0 {
            os.write_uint32(2, self.device_id)?;
        }
        if let Some(ref v) = self.notifications.as_ref() {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.status.as_ref() {
            os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Subscribe {
        Subscribe::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "is_master",
                |m: &Subscribe| { &m.is_master },
                |m: &mut Subscribe| { &mut m.is_master },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "device_id",
                |m: &Subscribe| { &m.device_id },
                |m: &mut Subscribe| { &mut m.device_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Subscribe_Notifications>>(
                "notifications",
                |m: &Subscribe| { &m.notifications },
                |m: &mut Subscribe| { &mut m.notifications },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Status>>(
                "status",
                |m: &Subscribe| { &m.status },
                |m: &mut Subscribe| { &mut m.status },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Subscribe>(
                "Subscribe",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Subscribe {
        static instance: ::protobuf::rt::LazyV2<Subscribe> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Subscribe::new)
    }
}

impl ::protobuf::Clear for Subscribe {
    fn clear(&mut self) {
        self.is_master = false;
        self.device_id = 0;
        self.notifications.clear();
        self.status.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Subscribe {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Subscribe {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Subscribe_Notifications {
    // message fields
    pub enable_learn_notifications: bool,
    pub enable_idletimeout_notifications: bool,
    pub enable_port_status_change_notifications: bool,
    pub enable_entry_active_notifications: bool,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Subscribe_Notifications {
    fn default() -> &'a Subscribe_Notifications {
        <Subscribe_Notifications as ::protobuf::Message>::default_instance()
    }
}

impl Subscribe_Notifications {
    pub fn new() -> Subscribe_Notifications {
        ::std::default::Default::default()
    }

    // bool enable_learn_notifications = 1;


    pub fn get_enable_learn_notifications(&self) -> bool {
        self.enable_learn_notifications
    }
    pub fn clear_enable_learn_notifications(&mut self) {
        self.enable_learn_notifications = false;
    }

    // Param is passed by value, moved
    pub fn set_enable_learn_notifications(&mut self, v: bool) {
        self.enable_learn_notifications = v;
    }

    // bool enable_idletimeout_notifications = 2;


    pub fn get_enable_idletimeout_notifications(&self) -> bool {
        self.enable_idletimeout_notifications
    }
    pub fn clear_enable_idletimeout_notifications(&mut self) {
        self.enable_idletimeout_notifications = false;
    }

    // Param is passed by value, moved
    pub fn set_enable_idletimeout_notifications(&mut self, v: bool) {
        self.enable_idletimeout_notifications = v;
    }

    // bool enable_port_status_change_notifications = 3;


    pub fn get_enable_port_status_change_notifications(&self) -> bool {
        self.enable_port_status_change_notifications
    }
    pub fn clear_enable_port_status_change_notifications(&mut self) {
        self.enable_port_status_change_notifications = false;
    }

    // Param is passed by value, moved
    pub fn set_enable_port_status_change_notifications(&mut self, v: bool) {
        self.enable_port_status_change_notifications = v;
    }

    // bool enable_entry_active_notifications = 4;


    pub fn get_enable_entry_active_notifications(&self) -> bool {
        self.enable_entry_active_notifications
    }
    pub fn clear_enable_entry_active_notifications(&mut self) {
        self.enable_entry_active_notifications = false;
    }

    // Param is passed by value, moved
    pub fn set_enable_entry_active_notifications(&mut self, v: bool) {
        self.enable_entry_active_notifications = v;
    }
}

impl ::protobuf::Message for Subscribe_Notifications {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.enable_learn_notifications = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.enable_idletimeout_notifications = tmp;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.enable_port_status_change_notifications = tmp;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.enable_entry_active_notifications = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.enable_learn_notifications != false {
            my_size += 2;
        }
        if self.enable_idletimeout_notifications != false {
            my_size += 2;
        }
        if self.enable_port_status_change_notifications != false {
            my_size += 2;
        }
        if self.enable_entry_active_notifications != false {
            my_size += 2;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.enable_learn_notifications != false {
            os.write_bool(1, self.enable_learn_notifications)?;
        }
        if self.enable_idletimeout_notifications != false {
            os.write_bool(2, self.enable_idletimeout_notifications)?;
        }
        if self.enable_port_status_change_notifications != false {
            os.write_bool(3, self.enable_port_status_change_notifications)?;
        }
        if self.enable_entry_active_notifications != false {
            os.write_bool(4, self.enable_entry_active_notifications)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Subscribe_Notifications {
        Subscribe_Notifications::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "enable_learn_notifications",
                |m: &Subscribe_Notifications| { &m.enable_learn_notifications },
                |m: &mut Subscribe_Notifications| { &mut m.enable_learn_notifications },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "enable_idletimeout_notifications",
                |m: &Subscribe_Notifications| { &m.enable_idletimeout_notifications },
                |m: &mut Subscribe_Notifications| { &mut m.enable_idletimeout_notifications },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "enable_port_status_change_notifications",
                |m: &Subscribe_Notifications| { &m.enable_port_status_change_notifications },
                |m: &mut Subscribe_Notifications| { &mut m.enable_port_status_change_notifications },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "enable_entry_active_notifications",
                |m: &Subscribe_Notifications| { &m.enable_entry_active_notifications },
                |m: &mut Subscribe_Notifications| { &mut m.enable_entry_active_notifications },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Subscribe_Notifications>(
                "Subscribe.Notifications",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Subscribe_Notifications {
        static instance: ::protobuf::rt::LazyV2<Subscribe_Notifications> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Subscribe_Notifications::new)
    }
}

impl ::protobuf::Clear for Subscribe_Notifications {
    fn clear(&mut self) {
        self.enable_learn_notifications = false;
        self.enable_idletimeout_notifications = false;
        self.enable_port_status_change_notifications = false;
        self.enable_entry_active_notifications = false;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Subscribe_Notifications {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Subscribe_Notifications {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DigestListAck {
    // message fields
    pub digest_id: u32,
    pub list_id: u32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DigestListAck {
    fn default() -> &'a DigestListAck {
        <DigestListAck as ::protobuf::Message>::default_instance()
    }
}

impl DigestListAck {
    pub fn new() -> DigestListAck {
        ::std::default::Default::default()
    }

    // uint32 digest_id = 1;


    pub fn get_digest_id(&self) -> u32 {
        self.digest_id
    }
    pub fn clear_digest_id(&mut self) {
        self.digest_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_digest_id(&mut self, v: u32) {
        self.digest_id = v;
    }

    // uint32 list_id = 2;


    pub fn get_list_id(&self) -> u32 {
        self.list_id
    }
    pub fn clear_list_id(&mut self) {
        self.list_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_list_id(&mut self, v: u32) {
        self.list_id = v;
    }
}

impl ::protobuf::Message for DigestListAck {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.digest_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.list_id = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.digest_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.digest_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.list_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.list_id, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.digest_id != 0 {
            os.write_uint32(1, self.digest_id)?;
        }
        if self.list_id != 0 {
            os.write_uint32(2, self.list_id)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DigestListAck {
        DigestListAck::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "digest_id",
                |m: &DigestListAck| { &m.digest_id },
                |m: &mut DigestListAck| { &mut m.digest_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "list_id",
                |m: &DigestListAck| { &m.list_id },
                |m: &mut DigestListAck| { &mut m.list_id },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DigestListAck>(
                "DigestListAck",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DigestListAck {
        static instance: ::protobuf::rt::LazyV2<DigestListAck> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DigestListAck::new)
    }
}

impl ::protobuf::Clear for DigestListAck {
    fn clear(&mut self) {
        self.digest_id = 0;
        self.list_id = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DigestListAck {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DigestListAck {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct StreamMessageResponse {
    // message oneof groups
    pub update: ::std::option::Option<StreamMessageResponse_oneof_update>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a StreamMessageResponse {
    fn default() -> &'a StreamMessageResponse {
        <StreamMessageResponse as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum StreamMessageResponse_oneof_update {
    subscribe(Subscribe),
    digest(DigestList),
    idle_timeout_notification(IdleTimeoutNotification),
    port_status_change_notification(PortStatusChgNotification),
    set_forwarding_pipeline_config_response(SetForwardingPipelineConfigResponse),
}

impl StreamMessageResponse {
    pub fn new() -> StreamMessageResponse {
        ::std::default::Default::default()
    }

    // .bfrt_proto.Subscribe subscribe = 1;


    pub fn get_subscribe(&self) -> &Subscribe {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::subscribe(ref v)) => v,
            _ => <Subscribe as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_subscribe(&mut self) {
        self.update = ::std::option::Option::None;
    }

    pub fn has_subscribe(&self) -> bool {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::subscribe(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_subscribe(&mut self, v: Subscribe) {
        self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::subscribe(v))
    }

    // Mutable pointer to the field.
    pub fn mut_subscribe(&mut self) -> &mut Subscribe {
        if let ::std::option::Option::Some(StreamMessageResponse_oneof_update::subscribe(_)) = self.update {
        } else {
            self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::subscribe(Subscribe::new()));
        }
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::subscribe(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_subscribe(&mut self) -> Subscribe {
        if self.has_subscribe() {
            match self.update.take() {
                ::std::option::Option::Some(StreamMessageResponse_oneof_update::subscribe(v)) => v,
                _ => panic!(),
            }
        } else {
            Subscribe::new()
        }
    }

    // .bfrt_proto.DigestList digest = 2;


    pub fn get_digest(&self) -> &DigestList {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::digest(ref v)) => v,
            _ => <DigestList as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_digest(&mut self) {
        self.update = ::std::option::Option::None;
    }

    pub fn has_digest(&self) -> bool {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::digest(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_digest(&mut self, v: DigestList) {
        self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::digest(v))
    }

    // Mutable pointer to the field.
    pub fn mut_digest(&mut self) -> &mut DigestList {
        if let ::std::option::Option::Some(StreamMessageResponse_oneof_update::digest(_)) = self.update {
        } else {
            self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::digest(DigestList::new()));
        }
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::digest(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_digest(&mut self) -> DigestList {
        if self.has_digest() {
            match self.update.take() {
                ::std::option::Option::Some(StreamMessageResponse_oneof_update::digest(v)) => v,
                _ => panic!(),
            }
        } else {
            DigestList::new()
        }
    }

    // .bfrt_proto.IdleTimeoutNotification idle_timeout_notification = 3;


    pub fn get_idle_timeout_notification(&self) -> &IdleTimeoutNotification {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::idle_timeout_notification(ref v)) => v,
            _ => <IdleTimeoutNotification as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_idle_timeout_notification(&mut self) {
        self.update = ::std::option::Option::None;
    }

    pub fn has_idle_timeout_notification(&self) -> bool {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::idle_timeout_notification(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_idle_timeout_notification(&mut self, v: IdleTimeoutNotification) {
        self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::idle_timeout_notification(v))
    }

    // Mutable pointer to the field.
    pub fn mut_idle_timeout_notification(&mut self) -> &mut IdleTimeoutNotification {
        if let ::std::option::Option::Some(StreamMessageResponse_oneof_update::idle_timeout_notification(_)) = self.update {
        } else {
            self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::idle_timeout_notification(IdleTimeoutNotification::new()));
        }
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::idle_timeout_notification(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_idle_timeout_notification(&mut self) -> IdleTimeoutNotification {
        if self.has_idle_timeout_notification() {
            match self.update.take() {
                ::std::option::Option::Some(StreamMessageResponse_oneof_update::idle_timeout_notification(v)) => v,
                _ => panic!(),
            }
        } else {
            IdleTimeoutNotification::new()
        }
    }

    // .bfrt_proto.PortStatusChgNotification port_status_change_notification = 4;


    pub fn get_port_status_change_notification(&self) -> &PortStatusChgNotification {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::port_status_change_notification(ref v)) => v,
            _ => <PortStatusChgNotification as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_port_status_change_notification(&mut self) {
        self.update = ::std::option::Option::None;
    }

    pub fn has_port_status_change_notification(&self) -> bool {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::port_status_change_notification(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_port_status_change_notification(&mut self, v: PortStatusChgNotification) {
        self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::port_status_change_notification(v))
    }

    // Mutable pointer to the field.
    pub fn mut_port_status_change_notification(&mut self) -> &mut PortStatusChgNotification {
        if let ::std::option::Option::Some(StreamMessageResponse_oneof_update::port_status_change_notification(_)) = self.update {
        } else {
            self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::port_status_change_notification(PortStatusChgNotification::new()));
        }
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::port_status_change_notification(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_port_status_change_notification(&mut self) -> PortStatusChgNotification {
        if self.has_port_status_change_notification() {
            match self.update.take() {
                ::std::option::Option::Some(StreamMessageResponse_oneof_update::port_status_change_notification(v)) => v,
                _ => panic!(),
            }
        } else {
            PortStatusChgNotification::new()
        }
    }

    // .bfrt_proto.SetForwardingPipelineConfigResponse set_forwarding_pipeline_config_response = 5;


    pub fn get_set_forwarding_pipeline_config_response(&self) -> &SetForwardingPipelineConfigResponse {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(ref v)) => v,
            _ => <SetForwardingPipelineConfigResponse as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_set_forwarding_pipeline_config_response(&mut self) {
        self.update = ::std::option::Option::None;
    }

    pub fn has_set_forwarding_pipeline_config_response(&self) -> bool {
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_set_forwarding_pipeline_config_response(&mut self, v: SetForwardingPipelineConfigResponse) {
        self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(v))
    }

    // Mutable pointer to the field.
    pub fn mut_set_forwarding_pipeline_config_response(&mut self) -> &mut SetForwardingPipelineConfigResponse {
        if let ::std::option::Option::Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(_)) = self.update {
        } else {
            self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(SetForwardingPipelineConfigResponse::new()));
        }
        match self.update {
            ::std::option::Option::Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_set_forwarding_pipeline_config_response(&mut self) -> SetForwardingPipelineConfigResponse {
        if self.has_set_forwarding_pipeline_config_response() {
            match self.update.take() {
                ::std::option::Option::Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(v)) => v,
                _ => panic!(),
            }
        } else {
            SetForwardingPipelineConfigResponse::new()
        }
    }
}

impl ::protobuf::Message for StreamMessageResponse {
    fn is_initialized(&self) -> bool {
        if let Some(StreamMessageResponse_oneof_update::subscribe(ref v)) = self.update {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(StreamMessageResponse_oneof_update::digest(ref v)) = self.update {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(StreamMessageResponse_oneof_update::idle_timeout_notification(ref v)) = self.update {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(StreamMessageResponse_oneof_update::port_status_change_notification(ref v)) = self.update {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(ref v)) = self.update {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::subscribe(is.read_message()?));
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::digest(is.read_message()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::idle_timeout_notification(is.read_message()?));
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::port_status_change_notification(is.read_message()?));
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.update = ::std::option::Option::Some(StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let ::std::option::Option::Some(ref v) = self.update {
            match v {
                &StreamMessageResponse_oneof_update::subscribe(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &StreamMessageResponse_oneof_update::digest(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &StreamMessageResponse_oneof_update::idle_timeout_notification(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &StreamMessageResponse_oneof_update::port_status_change_notification(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let ::std::option::Option::Some(ref v) = self.update {
            match v {
                &StreamMessageResponse_oneof_update::subscribe(ref v) => {
                    os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &StreamMessageResponse_oneof_update::digest(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &StreamMessageResponse_oneof_update::idle_timeout_notification(ref v) => {
                    os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &StreamMessageResponse_oneof_update::port_status_change_notification(ref v) => {
                    os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &StreamMessageResponse_oneof_update::set_forwarding_pipeline_config_response(ref v) => {
                    os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> StreamMessageResponse {
        StreamMessageResponse::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, Subscribe>(
                "subscribe",
                StreamMessageResponse::has_subscribe,
                StreamMessageResponse::get_subscribe,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, DigestList>(
                "digest",
                StreamMessageResponse::has_digest,
                StreamMessageResponse::get_digest,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, IdleTimeoutNotification>(
                "idle_timeout_notification",
                StreamMessageResponse::has_idle_timeout_notification,
                StreamMessageResponse::get_idle_timeout_notification,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, PortStatusChgNotification>(
                "port_status_change_notification",
                StreamMessageResponse::has_port_status_change_notification,
                StreamMessageResponse::get_port_status_change_notification,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, SetForwardingPipelineConfigResponse>(
                "set_forwarding_pipeline_config_response",
                StreamMessageResponse::has_set_forwarding_pipeline_config_response,
                StreamMessageResponse::get_set_forwarding_pipeline_config_response,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<StreamMessageResponse>(
                "StreamMessageResponse",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static StreamMessageResponse {
        static instance: ::protobuf::rt::LazyV2<StreamMessageResponse> = ::protobuf::rt::LazyV2::INIT;
        instance.get(StreamMessageResponse::new)
    }
}

impl ::protobuf::Clear for StreamMessageResponse {
    fn clear(&mut self) {
        self.update = ::std::option::Option::None;
        self.update = ::std::option::Option::None;
        self.update = ::std::option::Option::None;
        self.update = ::std::option::Option::None;
        self.update = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for StreamMessageResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for StreamMessageResponse {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DigestList {
    // message fields
    pub target: ::protobuf::SingularPtrField<TargetDevice>,
    pub digest_id: u32,
    pub list_id: u32,
    pub data: ::protobuf::RepeatedField<TableData>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DigestList {
    fn default() -> &'a DigestList {
        <DigestList as ::protobuf::Message>::default_instance()
    }
}

impl DigestList {
    pub fn new() -> DigestList {
        ::std::default::Default::default()
    }

    // .bfrt_proto.TargetDevice target = 1;


    pub fn get_target(&self) -> &TargetDevice {
        self.target.as_ref().unwrap_or_else(|| <TargetDevice as ::protobuf::Message>::default_instance())
    }
    pub fn clear_target(&mut self) {
        self.target.clear();
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    // Param is passed by value, moved
    pub fn set_target(&mut self, v: TargetDevice) {
        self.target = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_target(&mut self) -> &mut TargetDevice {
        if self.target.is_none() {
            self.target.set_default();
        }
        self.target.as_mut().unwrap()
    }

    // Take field
    pub fn take_target(&mut self) -> TargetDevice {
        self.target.take().unwrap_or_else(|| TargetDevice::new())
    }

    // uint32 digest_id = 2;


    pub fn get_digest_id(&self) -> u32 {
        self.digest_id
    }
    pub fn clear_digest_id(&mut self) {
        self.digest_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_digest_id(&mut self, v: u32) {
        self.digest_id = v;
    }

    // uint32 list_id = 3;


    pub fn get_list_id(&self) -> u32 {
        self.list_id
    }
    pub fn clear_list_id(&mut self) {
        self.list_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_list_id(&mut self, v: u32) {
        self.list_id = v;
    }

    // repeated .bfrt_proto.TableData data = 4;


    pub fn get_data(&self) -> &[TableData] {
        &self.data
    }
    pub fn clear_data(&mut self) {
        self.data.clear();
    }

    // Param is passed by value, moved
    pub fn set_data(&mut self, v: ::protobuf::RepeatedField<TableData>) {
        self.data = v;
    }

    // Mutable pointer to the field.
    pub fn mut_data(&mut self) -> &mut ::protobuf::RepeatedField<TableData> {
        &mut self.data
    }

    // Take field
    pub fn take_data(&mut self) -> ::protobuf::RepeatedField<TableData> {
        ::std::mem::replace(&mut self.data, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for DigestList {
    fn is_initialized(&self) -> bool {
        for v in &self.target {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.data {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.target)?;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.digest_id = tmp;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.list_id = tmp;
                },
                4 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.data)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.target.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.digest_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.digest_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.list_id != 0 {
            my_size += ::protobuf::rt::value_size(3, self.list_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.data {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.target.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.digest_id != 0 {
            os.write_uint32(2, self.digest_id)?;
        }
        if self.list_id != 0 {
            os.write_uint32(3, self.list_id)?;
        }
        for v in &self.data {
            os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DigestList {
        DigestList::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TargetDevice>>(
                "target",
                |m: &DigestList| { &m.target },
                |m: &mut DigestList| { &mut m.target },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "digest_id",
                |m: &DigestList| { &m.digest_id },
                |m: &mut DigestList| { &mut m.digest_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "list_id",
                |m: &DigestList| { &m.list_id },
                |m: &mut DigestList| { &mut m.list_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TableData>>(
                "data",
                |m: &DigestList| { &m.data },
                |m: &mut DigestList| { &mut m.data },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DigestList>(
                "DigestList",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DigestList {
        static instance: ::protobuf::rt::LazyV2<DigestList> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DigestList::new)
    }
}

impl ::protobuf::Clear for DigestList {
    fn clear(&mut self) {
        self.target.clear();
        self.digest_id = 0;
        self.list_id = 0;
        self.data.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DigestList {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DigestList {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct IdleTimeoutNotification {
    // message fields
    pub target: ::protobuf::SingularPtrField<TargetDevice>,
    pub table_entry: ::protobuf::SingularPtrField<TableEntry>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a IdleTimeoutNotification {
    fn default() -> &'a IdleTimeoutNotification {
        <IdleTimeoutNotification as ::protobuf::Message>::default_instance()
    }
}

impl IdleTimeoutNotification {
    pub fn new() -> IdleTimeoutNotification {
        ::std::default::Default::default()
    }

    // .bfrt_proto.TargetDevice target = 1;


    pub fn get_target(&self) -> &TargetDevice {
        self.target.as_ref().unwrap_or_else(|| <TargetDevice as ::protobuf::Message>::default_instance())
    }
    pub fn clear_target(&mut self) {
        self.target.clear();
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    // Param is passed by value, moved
    pub fn set_target(&mut self, v: TargetDevice) {
        self.target = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_target(&mut self) -> &mut TargetDevice {
        if self.target.is_none() {
            self.target.set_default();
        }
        self.target.as_mut().unwrap()
    }

    // Take field
    pub fn take_target(&mut self) -> TargetDevice {
        self.target.take().unwrap_or_else(|| TargetDevice::new())
    }

    // .bfrt_proto.TableEntry table_entry = 2;


    pub fn get_table_entry(&self) -> &TableEntry {
        self.table_entry.as_ref().unwrap_or_else(|| <TableEntry as ::protobuf::Message>::default_instance())
    }
    pub fn clear_table_entry(&mut self) {
        self.table_entry.clear();
    }

    pub fn has_table_entry(&self) -> bool {
        self.table_entry.is_some()
    }

    // Param is passed by value, moved
    pub fn set_table_entry(&mut self, v: TableEntry) {
        self.table_entry = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_table_entry(&mut self) -> &mut TableEntry {
        if self.table_entry.is_none() {
            self.table_entry.set_default();
        }
        self.table_entry.as_mut().unwrap()
    }

    // Take field
    pub fn take_table_entry(&mut self) -> TableEntry {
        self.table_entry.take().unwrap_or_else(|| TableEntry::new())
    }
}

impl ::protobuf::Message for IdleTimeoutNotification {
    fn is_initialized(&self) -> bool {
        for v in &self.target {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.table_entry {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.target)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.table_entry)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.target.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.table_entry.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.target.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.table_entry.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> IdleTimeoutNotification {
        IdleTimeoutNotification::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TargetDevice>>(
                "target",
                |m: &IdleTimeoutNotification| { &m.target },
                |m: &mut IdleTimeoutNotification| { &mut m.target },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TableEntry>>(
                "table_entry",
                |m: &IdleTimeoutNotification| { &m.table_entry },
                |m: &mut IdleTimeoutNotification| { &mut m.table_entry },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<IdleTimeoutNotification>(
                "IdleTimeoutNotification",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static IdleTimeoutNotification {
        static instance: ::protobuf::rt::LazyV2<IdleTimeoutNotification> = ::protobuf::rt::LazyV2::INIT;
        instance.get(IdleTimeoutNotification::new)
    }
}

impl ::protobuf::Clear for IdleTimeoutNotification {
    fn clear(&mut self) {
        self.target.clear();
        self.table_entry.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for IdleTimeoutNotification {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for IdleTimeoutNotification {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct PortStatusChgNotification {
    // message fields
    pub port_key: ::protobuf::SingularPtrField<TableKey>,
    pub port_up: bool,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a PortStatusChgNotification {
    fn default() -> &'a PortStatusChgNotification {
        <PortStatusChgNotification as ::protobuf::Message>::default_instance()
    }
}

impl PortStatusChgNotification {
    pub fn new() -> PortStatusChgNotification {
        ::std::default::Default::default()
    }

    // .bfrt_proto.TableKey port_key = 1;


    pub fn get_port_key(&self) -> &TableKey {
        self.port_key.as_ref().unwrap_or_else(|| <TableKey as ::protobuf::Message>::default_instance())
    }
    pub fn clear_port_key(&mut self) {
        self.port_key.clear();
    }

    pub fn has_port_key(&self) -> bool {
        self.port_key.is_some()
    }

    // Param is passed by value, moved
    pub fn set_port_key(&mut self, v: TableKey) {
        self.port_key = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_port_key(&mut self) -> &mut TableKey {
        if self.port_key.is_none() {
            self.port_key.set_default();
        }
        self.port_key.as_mut().unwrap()
    }

    // Take field
    pub fn take_port_key(&mut self) -> TableKey {
        self.port_key.take().unwrap_or_else(|| TableKey::new())
    }

    // bool port_up = 2;


    pub fn get_port_up(&self) -> bool {
        self.port_up
    }
    pub fn clear_port_up(&mut self) {
        self.port_up = false;
    }

    // Param is passed by value, moved
    pub fn set_port_up(&mut self, v: bool) {
        self.port_up = v;
    }
}

impl ::protobuf::Message for PortStatusChgNotification {
    fn is_initialized(&self) -> bool {
        for v in &self.port_key {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.port_key)?;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.port_up = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.port_key.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.port_up != false {
            my_size += 2;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.port_key.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.port_up != false {
            os.write_bool(2, self.port_up)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> PortStatusChgNotification {
        PortStatusChgNotification::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TableKey>>(
                "port_key",
                |m: &PortStatusChgNotification| { &m.port_key },
                |m: &mut PortStatusChgNotification| { &mut m.port_key },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "port_up",
                |m: &PortStatusChgNotification| { &m.port_up },
                |m: &mut PortStatusChgNotification| { &mut m.port_up },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<PortStatusChgNotification>(
                "PortStatusChgNotification",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static PortStatusChgNotification {
        static instance: ::protobuf::rt::LazyV2<PortStatusChgNotification> = ::protobuf::rt::LazyV2::INIT;
        instance.get(PortStatusChgNotification::new)
    }
}

impl ::protobuf::Clear for PortStatusChgNotification {
    fn clear(&mut self) {
        self.port_key.clear();
        self.port_up = false;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for PortStatusChgNotification {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for PortStatusChgNotification {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ForwardingPipelineConfig {
    // message fields
    pub p4_name: ::std::string::String,
    pub bfruntime_info: ::std::vec::Vec<u8>,
    pub profiles: ::protobuf::RepeatedField<ForwardingPipelineConfig_Profile>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ForwardingPipelineConfig {
    fn default() -> &'a ForwardingPipelineConfig {
        <ForwardingPipelineConfig as ::protobuf::Message>::default_instance()
    }
}

impl ForwardingPipelineConfig {
    pub fn new() -> ForwardingPipelineConfig {
        ::std::default::Default::default()
    }

    // string p4_name = 1;


    pub fn get_p4_name(&self) -> &str {
        &self.p4_name
    }
    pub fn clear_p4_name(&mut self) {
        self.p4_name.clear();
    }

    // Param is passed by value, moved
    pub fn set_p4_name(&mut self, v: ::std::string::String) {
        self.p4_name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_p4_name(&mut self) -> &mut ::std::string::String {
        &mut self.p4_name
    }

    // Take field
    pub fn take_p4_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.p4_name, ::std::string::String::new())
    }

    // bytes bfruntime_info = 2;


    pub fn get_bfruntime_info(&self) -> &[u8] {
        &self.bfruntime_info
    }
    pub fn clear_bfruntime_info(&mut self) {
        self.bfruntime_info.clear();
    }

    // Param is passed by value, moved
    pub fn set_bfruntime_info(&mut self, v: ::std::vec::Vec<u8>) {
        self.bfruntime_info = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_bfruntime_info(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.bfruntime_info
    }

    // Take field
    pub fn take_bfruntime_info(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.bfruntime_info, ::std::vec::Vec::new())
    }

    // repeated .bfrt_proto.ForwardingPipelineConfig.Profile profiles = 3;


    pub fn get_profiles(&self) -> &[ForwardingPipelineConfig_Profile] {
        &self.profiles
    }
    pub fn clear_profiles(&mut self) {
        self.profiles.clear();
    }

    // Param is passed by value, moved
    pub fn set_profiles(&mut self, v: ::protobuf::RepeatedField<ForwardingPipelineConfig_Profile>) {
        self.profiles = v;
    }

    // Mutable pointer to the field.
    pub fn mut_profiles(&mut self) -> &mut ::protobuf::RepeatedField<ForwardingPipelineConfig_Profile> {
        &mut self.profiles
    }

    // Take field
    pub fn take_profiles(&mut self) -> ::protobuf::RepeatedField<ForwardingPipelineConfig_Profile> {
        ::std::mem::replace(&mut self.profiles, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for ForwardingPipelineConfig {
    fn is_initialized(&self) -> bool {
        for v in &self.profiles {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.p4_name)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.bfruntime_info)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.profiles)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.p4_name.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.p4_name);
        }
        if !self.bfruntime_info.is_empty() {
            my_size += ::protobuf::rt::bytes_size(2, &self.bfruntime_info);
        }
        for value in &self.profiles {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.p4_name.is_empty() {
            os.write_string(1, &self.p4_name)?;
        }
        if !self.bfruntime_info.is_empty() {
            os.write_bytes(2, &self.bfruntime_info)?;
        }
        for v in &self.profiles {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ForwardingPipelineConfig {
        ForwardingPipelineConfig::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "p4_name",
                |m: &ForwardingPipelineConfig| { &m.p4_name },
                |m: &mut ForwardingPipelineConfig| { &mut m.p4_name },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "bfruntime_info",
                |m: &ForwardingPipelineConfig| { &m.bfruntime_info },
                |m: &mut ForwardingPipelineConfig| { &mut m.bfruntime_info },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ForwardingPipelineConfig_Profile>>(
                "profiles",
                |m: &ForwardingPipelineConfig| { &m.profiles },
                |m: &mut ForwardingPipelineConfig| { &mut m.profiles },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ForwardingPipelineConfig>(
                "ForwardingPipelineConfig",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ForwardingPipelineConfig {
        static instance: ::protobuf::rt::LazyV2<ForwardingPipelineConfig> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ForwardingPipelineConfig::new)
    }
}

impl ::protobuf::Clear for ForwardingPipelineConfig {
    fn clear(&mut self) {
        self.p4_name.clear();
        self.bfruntime_info.clear();
        self.profiles.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ForwardingPipelineConfig {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ForwardingPipelineConfig {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ForwardingPipelineConfig_Profile {
    // message fields
    pub profile_name: ::std::string::String,
    pub context: ::std::vec::Vec<u8>,
    pub binary: ::std::vec::Vec<u8>,
    pub pipe_scope: ::std::vec::Vec<u32>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ForwardingPipelineConfig_Profile {
    fn default() -> &'a ForwardingPipelineConfig_Profile {
        <ForwardingPipelineConfig_Profile as ::protobuf::Message>::default_instance()
    }
}

impl ForwardingPipelineConfig_Profile {
    pub fn new() -> ForwardingPipelineConfig_Profile {
        ::std::default::Default::default()
    }

    // string profile_name = 1;


    pub fn get_profile_name(&self) -> &str {
        &self.profile_name
    }
    pub fn clear_profile_name(&mut self) {
        self.profile_name.clear();
    }

    // Param is passed by value, moved
    pub fn set_profile_name(&mut self, v: ::std::string::String) {
        self.profile_name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_profile_name(&mut self) -> &mut ::std::string::String {
        &mut self.profile_name
    }

    // Take field
    pub fn take_profile_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.profile_name, ::std::string::String::new())
    }

    // bytes context = 2;


    pub fn get_context(&self) -> &[u8] {
        &self.context
    }
    pub fn clear_context(&mut self) {
        self.context.clear();
    }

    // Param is passed by value, moved
    pub fn set_context(&mut self, v: ::std::vec::Vec<u8>) {
        self.context = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_context(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.context
    }

    // Take field
    pub fn take_context(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.context, ::std::vec::Vec::new())
    }

    // bytes binary = 3;


    pub fn get_binary(&self) -> &[u8] {
        &self.binary
    }
    pub fn clear_binary(&mut self) {
        self.binary.clear();
    }

    // Param is passed by value, moved
    pub fn set_binary(&mut self, v: ::std::vec::Vec<u8>) {
        self.binary = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_binary(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.binary
    }

    // Take field
    pub fn take_binary(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.binary, ::std::vec::Vec::new())
    }

    // repeated uint32 pipe_scope = 4;


    pub fn get_pipe_scope(&self) -> &[u32] {
        &self.pipe_scope
    }
    pub fn clear_pipe_scope(&mut self) {
        self.pipe_scope.clear();
    }

    // Param is passed by value, moved
    pub fn set_pipe_scope(&mut self, v: ::std::vec::Vec<u32>) {
        self.pipe_scope = v;
    }

    // Mutable pointer to the field.
    pub fn mut_pipe_scope(&mut self) -> &mut ::std::vec::Vec<u32> {
        &mut self.pipe_scope
    }

    // Take field
    pub fn take_pipe_scope(&mut self) -> ::std::vec::Vec<u32> {
        ::std::mem::replace(&mut self.pipe_scope, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for ForwardingPipelineConfig_Profile {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.profile_name)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.context)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.binary)?;
                },
                4 => {
                    ::protobuf::rt::read_repeated_uint32_into(wire_type, is, &mut self.pipe_scope)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.profile_name.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.profile_name);
        }
        if !self.context.is_empty() {
            my_size += ::protobuf::rt::bytes_size(2, &self.context);
        }
        if !self.binary.is_empty() {
            my_size += ::protobuf::rt::bytes_size(3, &self.binary);
        }
        for value in &self.pipe_scope {
            my_size += ::protobuf::rt::value_size(4, *value, ::protobuf::wire_format::WireTypeVarint);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.profile_name.is_empty() {
            os.write_string(1, &self.profile_name)?;
        }
        if !self.context.is_empty() {
            os.write_bytes(2, &self.context)?;
        }
        if !self.binary.is_empty() {
            os.write_bytes(3, &self.binary)?;
        }
        for v in &self.pipe_scope {
            os.write_uint32(4, *v)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ForwardingPipelineConfig_Profile {
        ForwardingPipelineConfig_Profile::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "profile_name",
                |m: &ForwardingPipelineConfig_Profile| { &m.profile_name },
                |m: &mut ForwardingPipelineConfig_Profile| { &mut m.profile_name },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "context",
                |m: &ForwardingPipelineConfig_Profile| { &m.context },
                |m: &mut ForwardingPipelineConfig_Profile| { &mut m.context },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "binary",
                |m: &ForwardingPipelineConfig_Profile| { &m.binary },
                |m: &mut ForwardingPipelineConfig_Profile| { &mut m.binary },
            ));
            fields.push(::protobuf::reflect::accessor::make_vec_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "pipe_scope",
                |m: &ForwardingPipelineConfig_Profile| { &m.pipe_scope },
                |m: &mut ForwardingPipelineConfig_Profile| { &mut m.pipe_scope },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ForwardingPipelineConfig_Profile>(
                "ForwardingPipelineConfig.Profile",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ForwardingPipelineConfig_Profile {
        static instance: ::protobuf::rt::LazyV2<ForwardingPipelineConfig_Profile> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ForwardingPipelineConfig_Profile::new)
    }
}

impl ::protobuf::Clear for ForwardingPipelineConfig_Profile {
    fn clear(&mut self) {
        self.profile_name.clear();
        self.context.clear();
        self.binary.clear();
        self.pipe_scope.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ForwardingPipelineConfig_Profile {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ForwardingPipelineConfig_Profile {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct NonP4Config {
    // message fields
    pub bfruntime_info: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a NonP4Config {
    fn default() -> &'a NonP4Config {
        <NonP4Config as ::protobuf::Message>::default_instance()
    }
}

impl NonP4Config {
    pub fn new() -> NonP4Config {
        ::std::default::Default::default()
    }

    // bytes bfruntime_info = 1;


    pub fn get_bfruntime_info(&self) -> &[u8] {
        &self.bfruntime_info
    }
    pub fn clear_bfruntime_info(&mut self) {
        self.bfruntime_info.clear();
    }

    // Param is passed by value, moved
    pub fn set_bfruntime_info(&mut self, v: ::std::vec::Vec<u8>) {
        self.bfruntime_info = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_bfruntime_info(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.bfruntime_info
    }

    // Take field
    pub fn take_bfruntime_info(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.bfruntime_info, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for NonP4Config {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.bfruntime_info)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.bfruntime_info.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.bfruntime_info);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.bfruntime_info.is_empty() {
            os.write_bytes(1, &self.bfruntime_info)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> NonP4Config {
        NonP4Config::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "bfruntime_info",
                |m: &NonP4Config| { &m.bfruntime_info },
                |m: &mut NonP4Config| { &mut m.bfruntime_info },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<NonP4Config>(
                "NonP4Config",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static NonP4Config {
        static instance: ::protobuf::rt::LazyV2<NonP4Config> = ::protobuf::rt::LazyV2::INIT;
        instance.get(NonP4Config::new)
    }
}

impl ::protobuf::Clear for NonP4Config {
    fn clear(&mut self) {
        self.bfruntime_info.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for NonP4Config {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for NonP4Config {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct SetForwardingPipelineConfigRequest {
    // message fields
    pub device_id: u32,
    pub client_id: u32,
    pub action: SetForwardingPipelineConfigRequest_Action,
    pub dev_init_mode: SetForwardingPipelineConfigRequest_DevInitMode,
    pub base_path: ::std::string::String,
    pub config: ::protobuf::RepeatedField<ForwardingPipelineConfig>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a SetForwardingPipelineConfigRequest {
    fn default() -> &'a SetForwardingPipelineConfigRequest {
        <SetForwardingPipelineConfigRequest as ::protobuf::Message>::default_instance()
    }
}

impl SetForwardingPipelineConfigRequest {
    pub fn new() -> SetForwardingPipelineConfigRequest {
        ::std::default::Default::default()
    }

    // uint32 device_id = 1;


    pub fn get_device_id(&self) -> u32 {
        self.device_id
    }
    pub fn clear_device_id(&mut self) {
        self.device_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_device_id(&mut self, v: u32) {
        self.device_id = v;
    }

    // uint32 client_id = 2;


    pub fn get_client_id(&self) -> u32 {
        self.client_id
    }
    pub fn clear_client_id(&mut self) {
        self.client_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_client_id(&mut self, v: u32) {
        self.client_id = v;
    }

    // .bfrt_proto.SetForwardingPipelineConfigRequest.Action action = 3;


    pub fn get_action(&self) -> SetForwardingPipelineConfigRequest_Action {
        self.action
    }
    pub fn clear_action(&mut self) {
        self.action = SetForwardingPipelineConfigRequest_Action::BIND;
    }

    // Param is passed by value, moved
    pub fn set_action(&mut self, v: SetForwardingPipelineConfigRequest_Action) {
        self.action = v;
    }

    // .bfrt_proto.SetForwardingPipelineConfigRequest.DevInitMode dev_init_mode = 4;


    pub fn get_dev_init_mode(&self) -> SetForwardingPipelineConfigRequest_DevInitMode {
        self.dev_init_mode
    }
    pub fn clear_dev_init_mode(&mut self) {
        self.dev_init_mode = SetForwardingPipelineConfigRequest_DevInitMode::FAST_RECONFIG;
    }

    // Param is passed by value, moved
    pub fn set_dev_init_mode(&mut self, v: SetForwardingPipelineConfigRequest_DevInitMode) {
        self.dev_init_mode = v;
    }

    // string base_path = 5;


    pub fn get_base_path(&self) -> &str {
        &self.base_path
    }
    pub fn clear_base_path(&mut self) {
        self.base_path.clear();
    }

    // Param is passed by value, moved
    pub fn set_base_path(&mut self, v: ::std::string::String) {
        self.base_path = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_base_path(&mut self) -> &mut ::std::string::String {
        &mut self.base_path
    }

    // Take field
    pub fn take_base_path(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.base_path, ::std::string::String::new())
    }

    // repeated .bfrt_proto.ForwardingPipelineConfig config = 6;


    pub fn get_config(&self) -> &[ForwardingPipelineConfig] {
        &self.config
    }
    pub fn clear_config(&mut self) {
        self.config.clear();
    }

    // Param is passed by value, moved
    pub fn set_config(&mut self, v: ::protobuf::RepeatedField<ForwardingPipelineConfig>) {
        self.config = v;
    }

    // Mutable pointer to the field.
    pub fn mut_config(&mut self) -> &mut ::protobuf::RepeatedField<ForwardingPipelineConfig> {
        &mut self.config
    }

    // Take field
    pub fn take_config(&mut self) -> ::protobuf::RepeatedField<ForwardingPipelineConfig> {
        ::std::mem::replace(&mut self.config, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for SetForwardingPipelineConfigRequest {
    fn is_initialized(&self) -> bool {
        for v in &self.config {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.device_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.client_id = tmp;
                },
                3 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.action, 3, &mut self.unknown_fields)?
                },
                4 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.dev_init_mode, 4, &mut self.unknown_fields)?
                },
                5 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.base_path)?;
                },
                6 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.config)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.device_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.device_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.client_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.client_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.action != SetForwardingPipelineConfigRequest_Action::BIND {
            my_size += ::protobuf::rt::enum_size(3, self.action);
        }
        if self.dev_init_mode != SetForwardingPipelineConfigRequest_DevInitMode::FAST_RECONFIG {
            my_size += ::protobuf::rt::enum_size(4, self.dev_init_mode);
        }
        if !self.base_path.is_empty() {
            my_size += ::protobuf::rt::string_size(5, &self.base_path);
        }
        for value in &self.config {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.device_id != 0 {
            os.write_uint32(1, self.device_id)?;
        }
        if self.client_id != 0 {
            os.write_uint32(2, self.client_id)?;
        }
        if self.action != SetForwardingPipelineConfigRequest_Action::BIND {
            os.write_enum(3, ::protobuf::ProtobufEnum::value(&self.action))?;
        }
        if self.dev_init_mode != SetForwardingPipelineConfigRequest_DevInitMode::FAST_RECONFIG {
            os.write_enum(4, ::protobuf::ProtobufEnum::value(&self.dev_init_mode))?;
        }
        if !self.base_path.is_empty() {
            os.write_string(5, &self.base_path)?;
        }
        for v in &self.config {
            os.write_tag(6, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> SetForwardingPipelineConfigRequest {
        SetForwardingPipelineConfigRequest::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "device_id",
                |m: &SetForwardingPipelineConfigRequest| { &m.device_id },
                |m: &mut SetForwardingPipelineConfigRequest| { &mut m.device_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "client_id",
                |m: &SetForwardingPipelineConfigRequest| { &m.client_id },
                |m: &mut SetForwardingPipelineConfigRequest| { &mut m.client_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<SetForwardingPipelineConfigRequest_Action>>(
                "action",
                |m: &SetForwardingPipelineConfigRequest| { &m.action },
                |m: &mut SetForwardingPipelineConfigRequest| { &mut m.action },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<SetForwardingPipelineConfigRequest_DevInitMode>>(
                "dev_init_mode",
                |m: &SetForwardingPipelineConfigRequest| { &m.dev_init_mode },
                |m: &mut SetForwardingPipelineConfigRequest| { &mut m.dev_init_mode },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "base_path",
                |m: &SetForwardingPipelineConfigRequest| { &m.base_path },
                |m: &mut SetForwardingPipelineConfigRequest| { &mut m.base_path },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ForwardingPipelineConfig>>(
                "config",
                |m: &SetForwardingPipelineConfigRequest| { &m.config },
                |m: &mut SetForwardingPipelineConfigRequest| { &mut m.config },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<SetForwardingPipelineConfigRequest>(
                "SetForwardingPipelineConfigRequest",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static SetForwardingPipelineConfigRequest {
        static instance: ::protobuf::rt::LazyV2<SetForwardingPipelineConfigRequest> = ::protobuf::rt::LazyV2::INIT;
        instance.get(SetForwardingPipelineConfigRequest::new)
    }
}

impl ::protobuf::Clear for SetForwardingPipelineConfigRequest {
    fn clear(&mut self) {
        self.device_id = 0;
        self.client_id = 0;
        self.action = SetForwardingPipelineConfigRequest_Action::BIND;
        self.dev_init_mode = SetForwardingPipelineConfigRequest_DevInitMode::FAST_RECONFIG;
        self.base_path.clear();
        self.config.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for SetForwardingPipelineConfigRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for SetForwardingPipelineConfigRequest {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum SetForwardingPipelineConfigRequest_Action {
    BIND = 0,
    VERIFY = 1,
    VERIFY_AND_WARM_INIT_BEGIN = 2,
    VERIFY_AND_WARM_INIT_BEGIN_AND_END = 3,
    WARM_INIT_END = 4,
    RECONCILE_AND_WARM_INIT_END = 5,
}

impl ::protobuf::ProtobufEnum for SetForwardingPipelineConfigRequest_Action {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<SetForwardingPipelineConfigRequest_Action> {
        match value {
            0 => ::std::option::Option::Some(SetForwardingPipelineConfigRequest_Action::BIND),
            1 => ::std::option::Option::Some(SetForwardingPipelineConfigRequest_Action::VERIFY),
            2 => ::std::option::Option::Some(SetForwardingPipelineConfigRequest_Action::VERIFY_AND_WARM_INIT_BEGIN),
            3 => ::std::option::Option::Some(SetForwardingPipelineConfigRequest_Action::VERIFY_AND_WARM_INIT_BEGIN_AND_END),
            4 => ::std::option::Option::Some(SetForwardingPipelineConfigRequest_Action::WARM_INIT_END),
            5 => ::std::option::Option::Some(SetForwardingPipelineConfigRequest_Action::RECONCILE_AND_WARM_INIT_END),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [SetForwardingPipelineConfigRequest_Action] = &[
            SetForwardingPipelineConfigRequest_Action::BIND,
            SetForwardingPipelineConfigRequest_Action::VERIFY,
            SetForwardingPipelineConfigRequest_Action::VERIFY_AND_WARM_INIT_BEGIN,
            SetForwardingPipelineConfigRequest_Action::VERIFY_AND_WARM_INIT_BEGIN_AND_END,
            SetForwardingPipelineConfigRequest_Action::WARM_INIT_END,
            SetForwardingPipelineConfigRequest_Action::RECONCILE_AND_WARM_INIT_END,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<SetForwardingPipelineConfigRequest_Action>("SetForwardingPipelineConfigRequest.Action", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for SetForwardingPipelineConfigRequest_Action {
}

impl ::std::default::Default for SetForwardingPipelineConfigRequest_Action {
    fn default() -> Self {
        SetForwardingPipelineConfigRequest_Action::BIND
    }
}

impl ::protobuf::reflect::ProtobufValue for SetForwardingPipelineConfigRequest_Action {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum SetForwardingPipelineConfigRequest_DevInitMode {
    FAST_RECONFIG = 0,
    HITLESS = 1,
}

impl ::protobuf::ProtobufEnum for SetForwardingPipelineConfigRequest_DevInitMode {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<SetForwardingPipelineConfigRequest_DevInitMode> {
        match value {
            0 => ::std::option::Option::Some(SetForwardingPipelineConfigRequest_DevInitMode::FAST_RECONFIG),
            1 => ::std::option::Option::Some(SetForwardingPipelineConfigRequest_DevInitMode::HITLESS),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [SetForwardingPipelineConfigRequest_DevInitMode] = &[
            SetForwardingPipelineConfigRequest_DevInitMode::FAST_RECONFIG,
            SetForwardingPipelineConfigRequest_DevInitMode::HITLESS,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<SetForwardingPipelineConfigRequest_DevInitMode>("SetForwardingPipelineConfigRequest.DevInitMode", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for SetForwardingPipelineConfigRequest_DevInitMode {
}

impl ::std::default::Default for SetForwardingPipelineConfigRequest_DevInitMode {
    fn default() -> Self {
        SetForwardingPipelineConfigRequest_DevInitMode::FAST_RECONFIG
    }
}

impl ::protobuf::reflect::ProtobufValue for SetForwardingPipelineConfigRequest_DevInitMode {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct SetForwardingPipelineConfigResponse {
    // message fields
    pub set_forwarding_pipeline_config_response_type: SetForwardingPipelineConfigResponseType,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a SetForwardingPipelineConfigResponse {
    fn default() -> &'a SetForwardingPipelineConfigResponse {
        <SetForwardingPipelineConfigResponse as ::protobuf::Message>::default_instance()
    }
}

impl SetForwardingPipelineConfigResponse {
    pub fn new() -> SetForwardingPipelineConfigResponse {
        ::std::default::Default::default()
    }

    // .bfrt_proto.SetForwardingPipelineConfigResponseType set_forwarding_pipeline_config_response_type = 1;


    pub fn get_set_forwarding_pipeline_config_response_type(&self) -> SetForwardingPipelineConfigResponseType {
        self.set_forwarding_pipeline_config_response_type
    }
    pub fn clear_set_forwarding_pipeline_config_response_type(&mut self) {
        self.set_forwarding_pipeline_config_response_type = SetForwardingPipelineConfigResponseType::WARM_INIT_STARTED;
    }

    // Param is passed by value, moved
    pub fn set_set_forwarding_pipeline_config_response_type(&mut self, v: SetForwardingPipelineConfigResponseType) {
        self.set_forwarding_pipeline_config_response_type = v;
    }
}

impl ::protobuf::Message for SetForwardingPipelineConfigResponse {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.set_forwarding_pipeline_config_response_type, 1, &mut self.unknown_fields)?
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.set_forwarding_pipeline_config_response_type != SetForwardingPipelineConfigResponseType::WARM_INIT_STARTED {
            my_size += ::protobuf::rt::enum_size(1, self.set_forwarding_pipeline_config_response_type);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.set_forwarding_pipeline_config_response_type != SetForwardingPipelineConfigResponseType::WARM_INIT_STARTED {
            os.write_enum(1, ::protobuf::ProtobufEnum::value(&self.set_forwarding_pipeline_config_response_type))?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> SetForwardingPipelineConfigResponse {
        SetForwardingPipelineConfigResponse::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<SetForwardingPipelineConfigResponseType>>(
                "set_forwarding_pipeline_config_response_type",
                |m: &SetForwardingPipelineConfigResponse| { &m.set_forwarding_pipeline_config_response_type },
                |m: &mut SetForwardingPipelineConfigResponse| { &mut m.set_forwarding_pipeline_config_response_type },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<SetForwardingPipelineConfigResponse>(
                "SetForwardingPipelineConfigResponse",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static SetForwardingPipelineConfigResponse {
        static instance: ::protobuf::rt::LazyV2<SetForwardingPipelineConfigResponse> = ::protobuf::rt::LazyV2::INIT;
        instance.get(SetForwardingPipelineConfigResponse::new)
    }
}

impl ::protobuf::Clear for SetForwardingPipelineConfigResponse {
    fn clear(&mut self) {
        self.set_forwarding_pipeline_config_response_type = SetForwardingPipelineConfigResponseType::WARM_INIT_STARTED;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for SetForwardingPipelineConfigResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for SetForwardingPipelineConfigResponse {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct GetForwardingPipelineConfigRequest {
    // message fields
    pub device_id: u32,
    pub client_id: u32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a GetForwardingPipelineConfigRequest {
    fn default() -> &'a GetForwardingPipelineConfigRequest {
        <GetForwardingPipelineConfigRequest as ::protobuf::Message>::default_instance()
    }
}

impl GetForwardingPipelineConfigRequest {
    pub fn new() -> GetForwardingPipelineConfigRequest {
        ::std::default::Default::default()
    }

    // uint32 device_id = 1;


    pub fn get_device_id(&self) -> u32 {
        self.device_id
    }
    pub fn clear_device_id(&mut self) {
        self.device_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_device_id(&mut self, v: u32) {
        self.device_id = v;
    }

    // uint32 client_id = 2;


    pub fn get_client_id(&self) -> u32 {
        self.client_id
    }
    pub fn clear_client_id(&mut self) {
        self.client_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_client_id(&mut self, v: u32) {
        self.client_id = v;
    }
}

impl ::protobuf::Message for GetForwardingPipelineConfigRequest {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.device_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.client_id = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.device_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.device_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.client_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.client_id, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.device_id != 0 {
            os.write_uint32(1, self.device_id)?;
        }
        if self.client_id != 0 {
            os.write_uint32(2, self.client_id)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> GetForwardingPipelineConfigRequest {
        GetForwardingPipelineConfigRequest::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "device_id",
                |m: &GetForwardingPipelineConfigRequest| { &m.device_id },
                |m: &mut GetForwardingPipelineConfigRequest| { &mut m.device_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "client_id",
                |m: &GetForwardingPipelineConfigRequest| { &m.client_id },
                |m: &mut GetForwardingPipelineConfigRequest| { &mut m.client_id },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<GetForwardingPipelineConfigRequest>(
                "GetForwardingPipelineConfigRequest",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static GetForwardingPipelineConfigRequest {
        static instance: ::protobuf::rt::LazyV2<GetForwardingPipelineConfigRequest> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetForwardingPipelineConfigRequest::new)
    }
}

impl ::protobuf::Clear for GetForwardingPipelineConfigRequest {
    fn clear(&mut self) {
        self.device_id = 0;
        self.client_id = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for GetForwardingPipelineConfigRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for GetForwardingPipelineConfigRequest {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct GetForwardingPipelineConfigResponse {
    // message fields
    pub config: ::protobuf::RepeatedField<ForwardingPipelineConfig>,
    pub non_p4_config: ::protobuf::SingularPtrField<NonP4Config>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a GetForwardingPipelineConfigResponse {
    fn default() -> &'a GetForwardingPipelineConfigResponse {
        <GetForwardingPipelineConfigResponse as ::protobuf::Message>::default_instance()
    }
}

impl GetForwardingPipelineConfigResponse {
    pub fn new() -> GetForwardingPipelineConfigResponse {
        ::std::default::Default::default()
    }

    // repeated .bfrt_proto.ForwardingPipelineConfig config = 1;


    pub fn get_config(&self) -> &[ForwardingPipelineConfig] {
        &self.config
    }
    pub fn clear_config(&mut self) {
        self.config.clear();
    }

    // Param is passed by value, moved
    pub fn set_config(&mut self, v: ::protobuf::RepeatedField<ForwardingPipelineConfig>) {
        self.config = v;
    }

    // Mutable pointer to the field.
    pub fn mut_config(&mut self) -> &mut ::protobuf::RepeatedField<ForwardingPipelineConfig> {
        &mut self.config
    }

    // Take field
    pub fn take_config(&mut self) -> ::protobuf::RepeatedField<ForwardingPipelineConfig> {
        ::std::mem::replace(&mut self.config, ::protobuf::RepeatedField::new())
    }

    // .bfrt_proto.NonP4Config non_p4_config = 2;


    pub fn get_non_p4_config(&self) -> &NonP4Config {
        self.non_p4_config.as_ref().unwrap_or_else(|| <NonP4Config as ::protobuf::Message>::default_instance())
    }
    pub fn clear_non_p4_config(&mut self) {
        self.non_p4_config.clear();
    }

    pub fn has_non_p4_config(&self) -> bool {
        self.non_p4_config.is_some()
    }

    // Param is passed by value, moved
    pub fn set_non_p4_config(&mut self, v: NonP4Config) {
        self.non_p4_config = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_non_p4_config(&mut self) -> &mut NonP4Config {
        if self.non_p4_config.is_none() {
            self.non_p4_config.set_default();
        }
        self.non_p4_config.as_mut().unwrap()
    }

    // Take field
    pub fn take_non_p4_config(&mut self) -> NonP4Config {
        self.non_p4_config.take().unwrap_or_else(|| NonP4Config::new())
    }
}

impl ::protobuf::Message for GetForwardingPipelineConfigResponse {
    fn is_initialized(&self) -> bool {
        for v in &self.config {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.non_p4_config {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.config)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.non_p4_config)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.config {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        if let Some(ref v) = self.non_p4_config.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.config {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        if let Some(ref v) = self.non_p4_config.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> GetForwardingPipelineConfigResponse {
        GetForwardingPipelineConfigResponse::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ForwardingPipelineConfig>>(
                "config",
                |m: &GetForwardingPipelineConfigResponse| { &m.config },
                |m: &mut GetForwardingPipelineConfigResponse| { &mut m.config },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<NonP4Config>>(
                "non_p4_config",
                |m: &GetForwardingPipelineConfigResponse| { &m.non_p4_config },
                |m: &mut GetForwardingPipelineConfigResponse| { &mut m.non_p4_config },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<GetForwardingPipelineConfigResponse>(
                "GetForwardingPipelineConfigResponse",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static GetForwardingPipelineConfigResponse {
        static instance: ::protobuf::rt::LazyV2<GetForwardingPipelineConfigResponse> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetForwardingPipelineConfigResponse::new)
    }
}

impl ::protobuf::Clear for GetForwardingPipelineConfigResponse {
    fn clear(&mut self) {
        self.config.clear();
        self.non_p4_config.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for GetForwardingPipelineConfigResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for GetForwardingPipelineConfigResponse {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Error {
    // message fields
    pub canonical_code: i32,
    pub message: ::std::string::String,
    pub space: ::std::string::String,
    pub code: i32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Error {
    fn default() -> &'a Error {
        <Error as ::protobuf::Message>::default_instance()
    }
}

impl Error {
    pub fn new() -> Error {
        ::std::default::Default::default()
    }

    // int32 canonical_code = 1;


    pub fn get_canonical_code(&self) -> i32 {
        self.canonical_code
    }
    pub fn clear_canonical_code(&mut self) {
        self.canonical_code = 0;
    }

    // Param is passed by value, moved
    pub fn set_canonical_code(&mut self, v: i32) {
        self.canonical_code = v;
    }

    // string message = 2;


    pub fn get_message(&self) -> &str {
        &self.message
    }
    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    // Param is passed by value, moved
    pub fn set_message(&mut self, v: ::std::string::String) {
        self.message = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_message(&mut self) -> &mut ::std::string::String {
        &mut self.message
    }

    // Take field
    pub fn take_message(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.message, ::std::string::String::new())
    }

    // string space = 3;


    pub fn get_space(&self) -> &str {
        &self.space
    }
    pub fn clear_space(&mut self) {
        self.space.clear();
    }

    // Param is passed by value, moved
    pub fn set_space(&mut self, v: ::std::string::String) {
        self.space = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_space(&mut self) -> &mut ::std::string::String {
        &mut self.space
    }

    // Take field
    pub fn take_space(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.space, ::std::string::String::new())
    }

    // int32 code = 4;


    pub fn get_code(&self) -> i32 {
        self.code
    }
    pub fn clear_code(&mut self) {
        self.code = 0;
    }

    // Param is passed by value, moved
    pub fn set_code(&mut self, v: i32) {
        self.code = v;
    }
}

impl ::protobuf::Message for Error {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.canonical_code = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.message)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.space)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.code = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.canonical_code != 0 {
            my_size += ::protobuf::rt::value_size(1, self.canonical_code, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.message.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.message);
        }
        if !self.space.is_empty() {
            my_size += ::protobuf::rt::string_size(3, &self.space);
        }
        if self.code != 0 {
            my_size += ::protobuf::rt::value_size(4, self.code, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.canonical_code != 0 {
            os.write_int32(1, self.canonical_code)?;
        }
        if !self.message.is_empty() {
            os.write_string(2, &self.message)?;
        }
        if !self.space.is_empty() {
            os.write_string(3, &self.space)?;
        }
        if self.code != 0 {
            os.write_int32(4, self.code)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Error {
        Error::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "canonical_code",
                |m: &Error| { &m.canonical_code },
                |m: &mut Error| { &mut m.canonical_code },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "message",
                |m: &Error| { &m.message },
                |m: &mut Error| { &mut m.message },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "space",
                |m: &Error| { &m.space },
                |m: &mut Error| { &mut m.space },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "code",
                |m: &Error| { &m.code },
                |m: &mut Error| { &mut m.code },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Error>(
                "Error",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Error {
        static instance: ::protobuf::rt::LazyV2<Error> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Error::new)
    }
}

impl ::protobuf::Clear for Error {
    fn clear(&mut self) {
        self.canonical_code = 0;
        self.message.clear();
        self.space.clear();
        self.code = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Error {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Error {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Status {
    // message fields
    pub code: i32,
    pub message: ::std::string::String,
    pub details: ::protobuf::RepeatedField<StatusDetail>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Status {
    fn default() -> &'a Status {
        <Status as ::protobuf::Message>::default_instance()
    }
}

impl Status {
    pub fn new() -> Status {
        ::std::default::Default::default()
    }

    // int32 code = 1;


    pub fn get_code(&self) -> i32 {
        self.code
    }
    pub fn clear_code(&mut self) {
        self.code = 0;
    }

    // Param is passed by value, moved
    pub fn set_code(&mut self, v: i32) {
        self.code = v;
    }

    // string message = 2;


    pub fn get_message(&self) -> &str {
        &self.message
    }
    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    // Param is passed by value, moved
    pub fn set_message(&mut self, v: ::std::string::String) {
        self.message = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_message(&mut self) -> &mut ::std::string::String {
        &mut self.message
    }

    // Take field
    pub fn take_message(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.message, ::std::string::String::new())
    }

    // repeated .bfrt_proto.StatusDetail details = 3;


    pub fn get_details(&self) -> &[StatusDetail] {
        &self.details
    }
    pub fn clear_details(&mut self) {
        self.details.clear();
    }

    // Param is passed by value, moved
    pub fn set_details(&mut self, v: ::protobuf::RepeatedField<StatusDetail>) {
        self.details = v;
    }

    // Mutable pointer to the field.
    pub fn mut_details(&mut self) -> &mut ::protobuf::RepeatedField<StatusDetail> {
        &mut self.details
    }

    // Take field
    pub fn take_details(&mut self) -> ::protobuf::RepeatedField<StatusDetail> {
        ::std::mem::replace(&mut self.details, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for Status {
    fn is_initialized(&self) -> bool {
        for v in &self.details {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.code = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.message)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.details)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.code != 0 {
            my_size += ::protobuf::rt::value_size(1, self.code, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.message.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.message);
        }
        for value in &self.details {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.code != 0 {
            os.write_int32(1, self.code)?;
        }
        if !self.message.is_empty() {
            os.write_string(2, &self.message)?;
        }
        for v in &self.details {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Status {
        Status::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "code",
                |m: &Status| { &m.code },
                |m: &mut Status| { &mut m.code },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "message",
                |m: &Status| { &m.message },
                |m: &mut Status| { &mut m.message },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<StatusDetail>>(
                "details",
                |m: &Status| { &m.details },
                |m: &mut Status| { &mut m.details },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Status>(
                "Status",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Status {
        static instance: ::protobuf::rt::LazyV2<Status> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Status::new)
    }
}

impl ::protobuf::Clear for Status {
    fn clear(&mut self) {
        self.code = 0;
        self.message.clear();
        self.details.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Status {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Status {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct StatusDetail {
    // message fields
    pub type_url: ::std::string::String,
    pub value: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a StatusDetail {
    fn default() -> &'a StatusDetail {
        <StatusDetail as ::protobuf::Message>::default_instance()
    }
}

impl StatusDetail {
    pub fn new() -> StatusDetail {
        ::std::default::Default::default()
    }

    // string type_url = 1;


    pub fn get_type_url(&self) -> &str {
        &self.type_url
    }
    pub fn clear_type_url(&mut self) {
        self.type_url.clear();
    }

    // Param is passed by value, moved
    pub fn set_type_url(&mut self, v: ::std::string::String) {
        self.type_url = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_type_url(&mut self) -> &mut ::std::string::String {
        &mut self.type_url
    }

    // Take field
    pub fn take_type_url(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.type_url, ::std::string::String::new())
    }

    // bytes value = 2;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for StatusDetail {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.type_url)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.type_url.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.type_url);
        }
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(2, &self.value);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.type_url.is_empty() {
            os.write_string(1, &self.type_url)?;
        }
        if !self.value.is_empty() {
            os.write_bytes(2, &self.value)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> StatusDetail {
        StatusDetail::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "type_url",
                |m: &StatusDetail| { &m.type_url },
                |m: &mut StatusDetail| { &mut m.type_url },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &StatusDetail| { &m.value },
                |m: &mut StatusDetail| { &mut m.value },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<StatusDetail>(
                "StatusDetail",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static StatusDetail {
        static instance: ::protobuf::rt::LazyV2<StatusDetail> = ::protobuf::rt::LazyV2::INIT;
        instance.get(StatusDetail::new)
    }
}

impl ::protobuf::Clear for StatusDetail {
    fn clear(&mut self) {
        self.type_url.clear();
        self.value.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for StatusDetail {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for StatusDetail {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum SetForwardingPipelineConfigResponseType {
    WARM_INIT_STARTED = 0,
    WARM_INIT_FINISHED = 1,
}

impl ::protobuf::ProtobufEnum for SetForwardingPipelineConfigResponseType {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<SetForwardingPipelineConfigResponseType> {
        match value {
            0 => ::std::option::Option::Some(SetForwardingPipelineConfigResponseType::WARM_INIT_STARTED),
            1 => ::std::option::Option::Some(SetForwardingPipelineConfigResponseType::WARM_INIT_FINISHED),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [SetForwardingPipelineConfigResponseType] = &[
            SetForwardingPipelineConfigResponseType::WARM_INIT_STARTED,
            SetForwardingPipelineConfigResponseType::WARM_INIT_FINISHED,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<SetForwardingPipelineConfigResponseType>("SetForwardingPipelineConfigResponseType", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for SetForwardingPipelineConfigResponseType {
}

impl ::std::default::Default for SetForwardingPipelineConfigResponseType {
    fn default() -> Self {
        SetForwardingPipelineConfigResponseType::WARM_INIT_STARTED
    }
}

impl ::protobuf::reflect::ProtobufValue for SetForwardingPipelineConfigResponseType {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x0fbfruntime.proto\x12\nbfrt_proto\"\xc5\x02\n\x0cWriteRequest\x122\n\
    \x06target\x18\x01\x20\x01(\x0b2\x18.bfrt_proto.TargetDeviceR\x06targetB\
    \0\x12\x1d\n\tclient_id\x18\x02\x20\x01(\rR\x08clientIdB\0\x12.\n\x07upd\
    ates\x18\x03\x20\x03(\x0b2\x12.bfrt_proto.UpdateR\x07updatesB\0\x12B\n\t\
    atomicity\x18\x04\x20\x01(\x0e2\".bfrt_proto.WriteRequest.AtomicityR\tat\
    omicityB\0\x12\x19\n\x07p4_name\x18\x05\x20\x01(\tR\x06p4NameB\0\"Q\n\tA\
    tomicity\x12\x15\n\x11CONTINUE_ON_ERROR\x10\0\x12\x15\n\x11ROLLBACK_ON_E\
    RROR\x10\x01\x12\x14\n\x10DATAPLANE_ATOMIC\x10\x02\x1a\0:\0\"\x11\n\rWri\
    teResponse:\0\"\xaf\x01\n\x0bReadRequest\x122\n\x06target\x18\x01\x20\
    \x01(\x0b2\x18.bfrt_proto.TargetDeviceR\x06targetB\0\x12\x1d\n\tclient_i\
    d\x18\x02\x20\x01(\rR\x08clientIdB\0\x120\n\x08entities\x18\x03\x20\x03(\
    \x0b2\x12.bfrt_proto.EntityR\x08entitiesB\0\x12\x19\n\x07p4_name\x18\x04\
    \x20\x01(\tR\x06p4NameB\0:\0\"B\n\x0cReadResponse\x120\n\x08entities\x18\
    \x01\x20\x03(\x0b2\x12.bfrt_proto.EntityR\x08entitiesB\0:\0\"\x85\x01\n\
    \x0cTargetDevice\x12\x1d\n\tdevice_id\x18\x01\x20\x01(\rR\x08deviceIdB\0\
    \x12\x19\n\x07pipe_id\x18\x02\x20\x01(\rR\x06pipeIdB\0\x12\x1e\n\tdirect\
    ion\x18\x03\x20\x01(\rR\tdirectionB\0\x12\x19\n\x07prsr_id\x18\x04\x20\
    \x01(\rR\x06prsrIdB\0:\0\"\xb6\x01\n\x06Update\x12-\n\x04type\x18\x01\
    \x20\x01(\x0e2\x17.bfrt_proto.Update.TypeR\x04typeB\0\x12,\n\x06entity\
    \x18\x02\x20\x01(\x0b2\x12.bfrt_proto.EntityR\x06entityB\0\"M\n\x04Type\
    \x12\x0f\n\x0bUNSPECIFIED\x10\0\x12\n\n\x06INSERT\x10\x01\x12\n\n\x06MOD\
    IFY\x10\x02\x12\x0e\n\nMODIFY_INC\x10\x03\x12\n\n\x06DELETE\x10\x04\x1a\
    \0:\0\"\xd5\x02\n\x06Entity\x12;\n\x0btable_entry\x18\x01\x20\x01(\x0b2\
    \x16.bfrt_proto.TableEntryH\0R\ntableEntryB\0\x12;\n\x0btable_usage\x18\
    \x02\x20\x01(\x0b2\x16.bfrt_proto.TableUsageH\0R\ntableUsageB\0\x12G\n\
    \x0ftable_attribute\x18\x03\x20\x01(\x0b2\x1a.bfrt_proto.TableAttributeH\
    \0R\x0etableAttributeB\0\x12G\n\x0ftable_operation\x18\x04\x20\x01(\x0b2\
    \x1a.bfrt_proto.TableOperationH\0R\x0etableOperationB\0\x123\n\x06handle\
    \x18\x06\x20\x01(\x0b2\x17.bfrt_proto.TableHandleH\0R\x06handleB\0B\x08\
    \n\x06entity:\0\"\x80\x01\n\nTableFlags\x12\x19\n\x07from_hw\x18\x01\x20\
    \x01(\x08R\x06fromHwB\0\x12\x1b\n\x08key_only\x18\x02\x20\x01(\x08R\x07k\
    eyOnlyB\0\x12\x19\n\x07mod_del\x18\x03\x20\x01(\x08R\x06modDelB\0\x12\
    \x1d\n\treset_ttl\x18\x04\x20\x01(\x08R\x08resetTtlB\0:\0\"\xce\x02\n\nT\
    ableEntry\x12\x1b\n\x08table_id\x18\x01\x20\x01(\rR\x07tableIdB\0\x12*\n\
    \x03key\x18\x02\x20\x01(\x0b2\x14.bfrt_proto.TableKeyH\0R\x03keyB\0\x12\
    \x1f\n\thandle_id\x18\x07\x20\x01(\rH\0R\x08handleIdB\0\x12+\n\x04data\
    \x18\x03\x20\x01(\x0b2\x15.bfrt_proto.TableDataR\x04dataB\0\x12*\n\x10is\
    _default_entry\x18\x04\x20\x01(\x08R\x0eisDefaultEntryB\0\x127\n\tentry_\
    tgt\x18\x08\x20\x01(\x0b2\x18.bfrt_proto.TargetDeviceR\x08entryTgtB\0\
    \x129\n\x0btable_flags\x18\t\x20\x01(\x0b2\x16.bfrt_proto.TableFlagsR\nt\
    ableFlagsB\0B\x07\n\x05value:\0\"C\n\nTableUsage\x12\x1b\n\x08table_id\
    \x18\x01\x20\x01(\rR\x07tableIdB\0\x12\x16\n\x05usage\x18\x02\x20\x01(\r\
    R\x05usageB\0:\0\"\xbc\x03\n\x0eTableAttribute\x12\x1b\n\x08table_id\x18\
    \x01\x20\x01(\rR\x07tableIdB\0\x128\n\nidle_table\x18\x02\x20\x01(\x0b2\
    \x15.bfrt_proto.IdleTableH\0R\tidleTableB\0\x12;\n\x0bentry_scope\x18\
    \x03\x20\x01(\x0b2\x16.bfrt_proto.EntryScopeH\0R\nentryScopeB\0\x12;\n\
    \x0bdyn_hashing\x18\x05\x20\x01(\x0b2\x16.bfrt_proto.DynHashingH\0R\ndyn\
    HashingB\0\x12B\n\x0ebyte_count_adj\x18\x06\x20\x01(\x0b2\x18.bfrt_proto\
    .ByteCountAdjH\0R\x0cbyteCountAdjB\0\x12K\n\x12port_status_notify\x18\
    \x07\x20\x01(\x0b2\x19.bfrt_proto.PortStatusChgH\0R\x10portStatusNotifyB\
    \0\x129\n\x08intvl_ms\x18\x08\x20\x01(\x0b2\x1a.bfrt_proto.StatePullIntv\
    lH\0R\x07intvlMsB\0B\x0b\n\tattribute:\0\"e\n\x0eTableOperation\x12\x1b\
    \n\x08table_id\x18\x01\x20\x01(\rR\x07tableIdB\0\x124\n\x15table_operati\
    ons_type\x18\x02\x20\x01(\tR\x13tableOperationsTypeB\0:\0\"\x82\x01\n\
    \x0bTableHandle\x12\x1b\n\x08table_id\x18\x01\x20\x01(\rR\x07tableIdB\0\
    \x12*\n\x03key\x18\x02\x20\x01(\x0b2\x14.bfrt_proto.TableKeyH\0R\x03keyB\
    \0\x12\x1f\n\thandle_id\x18\x03\x20\x01(\rH\0R\x08handleIdB\0B\x07\n\x05\
    value:\0\"\xa5\x02\n\tIdleTable\x12.\n\x12ttl_query_interval\x18\x01\x20\
    \x01(\rR\x10ttlQueryIntervalB\0\x12\x19\n\x07max_ttl\x18\x02\x20\x01(\rR\
    \x06maxTtlB\0\x12\x19\n\x07min_ttl\x18\x03\x20\x01(\rR\x06minTtlB\0\x12M\
    \n\x0fidle_table_mode\x18\x04\x20\x01(\x0e2#.bfrt_proto.IdleTable.IdleTa\
    bleModeR\ridleTableModeB\0\x12\x18\n\x06enable\x18\x05\x20\x01(\x08R\x06\
    enableB\0\"G\n\rIdleTableMode\x12\x18\n\x14IDLE_TABLE_POLL_MODE\x10\0\
    \x12\x1a\n\x16IDLE_TABLE_NOTIFY_MODE\x10\x01\x1a\0:\0\"\xb4\x01\n\x04Mod\
    e\x12;\n\x06predef\x18\x01\x20\x01(\x0e2\x1f.bfrt_proto.Mode.PredefinedM\
    odeH\0R\x06predefB\0\x12%\n\x0cuser_defined\x18\x02\x20\x01(\rH\0R\x0bus\
    erDefinedB\0\x12\x14\n\x04args\x18\x03\x20\x01(\rR\x04argsB\0\"'\n\x0ePr\
    edefinedMode\x12\x07\n\x03ALL\x10\0\x12\n\n\x06SINGLE\x10\x01\x1a\0B\x07\
    \n\x05scope:\0\"\xa9\x01\n\nEntryScope\x123\n\x0bgress_scope\x18\x01\x20\
    \x01(\x0b2\x10.bfrt_proto.ModeR\ngressScopeB\0\x121\n\npipe_scope\x18\
    \x02\x20\x01(\x0b2\x10.bfrt_proto.ModeR\tpipeScopeB\0\x121\n\nprsr_scope\
    \x18\x03\x20\x01(\x0b2\x10.bfrt_proto.ModeR\tprsrScopeB\0:\0\"8\n\nDynHa\
    shing\x12\x12\n\x03alg\x18\x01\x20\x01(\rR\x03algB\0\x12\x14\n\x04seed\
    \x18\x02\x20\x01(\x04R\x04seedB\0:\0\">\n\x0cByteCountAdj\x12,\n\x11byte\
    _count_adjust\x18\x01\x20\x01(\x05R\x0fbyteCountAdjustB\0:\0\"+\n\rPortS\
    tatusChg\x12\x18\n\x06enable\x18\x01\x20\x01(\x08R\x06enableB\0:\0\"1\n\
    \x0eStatePullIntvl\x12\x1d\n\tintvl_val\x18\x01\x20\x01(\rR\x08intvlValB\
    \0:\0\"<\n\x08TableKey\x12.\n\x06fields\x18\x01\x20\x03(\x0b2\x14.bfrt_p\
    roto.KeyFieldR\x06fieldsB\0:\0\"\xe6\x04\n\x08KeyField\x12\x1b\n\x08fiel\
    d_id\x18\x01\x20\x01(\rR\x07fieldIdB\0\x124\n\x05exact\x18\x02\x20\x01(\
    \x0b2\x1a.bfrt_proto.KeyField.ExactH\0R\x05exactB\0\x12:\n\x07ternary\
    \x18\x03\x20\x01(\x0b2\x1c.bfrt_proto.KeyField.TernaryH\0R\x07ternaryB\0\
    \x12.\n\x03lpm\x18\x04\x20\x01(\x0b2\x18.bfrt_proto.KeyField.LPMH\0R\x03\
    lpmB\0\x124\n\x05range\x18\x05\x20\x01(\x0b2\x1a.bfrt_proto.KeyField.Ran\
    geH\0R\x05rangeB\0\x12=\n\x08optional\x18\x06\x20\x01(\x0b2\x1d.bfrt_pro\
    to.KeyField.OptionalH\0R\x08optionalB\0\x1a!\n\x05Exact\x12\x16\n\x05val\
    ue\x18\x01\x20\x01(\x0cR\x05valueB\0:\0\x1a9\n\x07Ternary\x12\x16\n\x05v\
    alue\x18\x01\x20\x01(\x0cR\x05valueB\0\x12\x14\n\x04mask\x18\x02\x20\x01\
    (\x0cR\x04maskB\0:\0\x1a@\n\x03LPM\x12\x16\n\x05value\x18\x01\x20\x01(\
    \x0cR\x05valueB\0\x12\x1f\n\nprefix_len\x18\x02\x20\x01(\x05R\tprefixLen\
    B\0:\0\x1a3\n\x05Range\x12\x12\n\x03low\x18\x01\x20\x01(\x0cR\x03lowB\0\
    \x12\x14\n\x04high\x18\x02\x20\x01(\x0cR\x04highB\0:\0\x1aA\n\x08Optiona\
    l\x12\x16\n\x05value\x18\x01\x20\x01(\x0cR\x05valueB\0\x12\x1b\n\x08is_v\
    alid\x18\x02\x20\x01(\x08R\x07isValidB\0:\0B\x0c\n\nmatch_type:\0\"]\n\t\
    TableData\x12\x1d\n\taction_id\x18\x01\x20\x01(\rR\x08actionIdB\0\x12/\n\
    \x06fields\x18\x02\x20\x03(\x0b2\x15.bfrt_proto.DataFieldR\x06fieldsB\0:\
    \0\"\xd7\x05\n\tDataField\x12\x1b\n\x08field_id\x18\x01\x20\x01(\rR\x07f\
    ieldIdB\0\x12\x1a\n\x06stream\x18\x02\x20\x01(\x0cH\0R\x06streamB\0\x12\
    \x1f\n\tfloat_val\x18\x03\x20\x01(\x02H\0R\x08floatValB\0\x12\x1b\n\x07s\
    tr_val\x18\x04\x20\x01(\tH\0R\x06strValB\0\x12B\n\x0bint_arr_val\x18\x05\
    \x20\x01(\x0b2\x1e.bfrt_proto.DataField.IntArrayH\0R\tintArrValB\0\x12E\
    \n\x0cbool_arr_val\x18\x06\x20\x01(\x0b2\x1f.bfrt_proto.DataField.BoolAr\
    rayH\0R\nboolArrValB\0\x12T\n\x11container_arr_val\x18\x07\x20\x01(\x0b2\
    $.bfrt_proto.DataField.ContainerArrayH\0R\x0fcontainerArrValB\0\x12\x1d\
    \n\x08bool_val\x18\x08\x20\x01(\x08H\0R\x07boolValB\0\x12B\n\x0bstr_arr_\
    val\x18\t\x20\x01(\x0b2\x1e.bfrt_proto.DataField.StrArrayH\0R\tstrArrVal\
    B\0\x1a\x20\n\x08IntArray\x12\x12\n\x03val\x18\x01\x20\x03(\rR\x03valB\0\
    :\0\x1a!\n\tBoolArray\x12\x12\n\x03val\x18\x01\x20\x03(\x08R\x03valB\0:\
    \0\x1a\x20\n\x08StrArray\x12\x12\n\x03val\x18\x01\x20\x03(\tR\x03valB\0:\
    \0\x1a\x9c\x01\n\x0eContainerArray\x12N\n\tcontainer\x18\x01\x20\x03(\
    \x0b2..bfrt_proto.DataField.ContainerArray.ContainerR\tcontainerB\0\x1a8\
    \n\tContainer\x12)\n\x03val\x18\x01\x20\x03(\x0b2\x15.bfrt_proto.DataFie\
    ldR\x03valB\0:\0:\0B\x07\n\x05value:\0\"\xb8\x01\n\x14StreamMessageReque\
    st\x12\x1d\n\tclient_id\x18\x01\x20\x01(\rR\x08clientIdB\0\x127\n\tsubsc\
    ribe\x18\x02\x20\x01(\x0b2\x15.bfrt_proto.SubscribeH\0R\tsubscribeB\0\
    \x12<\n\ndigest_ack\x18\x03\x20\x01(\x0b2\x19.bfrt_proto.DigestListAckH\
    \0R\tdigestAckB\0B\x08\n\x06update:\0\"\x8b\x04\n\tSubscribe\x12\x1d\n\t\
    is_master\x18\x01\x20\x01(\x08R\x08isMasterB\0\x12\x1d\n\tdevice_id\x18\
    \x02\x20\x01(\rR\x08deviceIdB\0\x12K\n\rnotifications\x18\x03\x20\x01(\
    \x0b2#.bfrt_proto.Subscribe.NotificationsR\rnotificationsB\0\x12,\n\x06s\
    tatus\x18\x04\x20\x01(\x0b2\x12.bfrt_proto.StatusR\x06statusB\0\x1a\xc2\
    \x02\n\rNotifications\x12>\n\x1aenable_learn_notifications\x18\x01\x20\
    \x01(\x08R\x18enableLearnNotificationsB\0\x12J\n\x20enable_idletimeout_n\
    otifications\x18\x02\x20\x01(\x08R\x1eenableIdletimeoutNotificationsB\0\
    \x12V\n'enable_port_status_change_notifications\x18\x03\x20\x01(\x08R#en\
    ablePortStatusChangeNotificationsB\0\x12K\n!enable_entry_active_notifica\
    tions\x18\x04\x20\x01(\x08R\x1eenableEntryActiveNotificationsB\0:\0:\0\"\
    K\n\rDigestListAck\x12\x1d\n\tdigest_id\x18\x01\x20\x01(\rR\x08digestIdB\
    \0\x12\x19\n\x07list_id\x18\x02\x20\x01(\rR\x06listIdB\0:\0\"\xf3\x03\n\
    \x15StreamMessageResponse\x127\n\tsubscribe\x18\x01\x20\x01(\x0b2\x15.bf\
    rt_proto.SubscribeH\0R\tsubscribeB\0\x122\n\x06digest\x18\x02\x20\x01(\
    \x0b2\x16.bfrt_proto.DigestListH\0R\x06digestB\0\x12c\n\x19idle_timeout_\
    notification\x18\x03\x20\x01(\x0b2#.bfrt_proto.IdleTimeoutNotificationH\
    \0R\x17idleTimeoutNotificationB\0\x12p\n\x1fport_status_change_notificat\
    ion\x18\x04\x20\x01(\x0b2%.bfrt_proto.PortStatusChgNotificationH\0R\x1cp\
    ortStatusChangeNotificationB\0\x12\x89\x01\n'set_forwarding_pipeline_con\
    fig_response\x18\x05\x20\x01(\x0b2/.bfrt_proto.SetForwardingPipelineConf\
    igResponseH\0R#setForwardingPipelineConfigResponseB\0B\x08\n\x06update:\
    \0\"\xa9\x01\n\nDigestList\x122\n\x06target\x18\x01\x20\x01(\x0b2\x18.bf\
    rt_proto.TargetDeviceR\x06targetB\0\x12\x1d\n\tdigest_id\x18\x02\x20\x01\
    (\rR\x08digestIdB\0\x12\x19\n\x07list_id\x18\x03\x20\x01(\rR\x06listIdB\
    \0\x12+\n\x04data\x18\x04\x20\x03(\x0b2\x15.bfrt_proto.TableDataR\x04dat\
    aB\0:\0\"\x8a\x01\n\x17IdleTimeoutNotification\x122\n\x06target\x18\x01\
    \x20\x01(\x0b2\x18.bfrt_proto.TargetDeviceR\x06targetB\0\x129\n\x0btable\
    _entry\x18\x02\x20\x01(\x0b2\x16.bfrt_proto.TableEntryR\ntableEntryB\0:\
    \0\"k\n\x19PortStatusChgNotification\x121\n\x08port_key\x18\x01\x20\x01(\
    \x0b2\x14.bfrt_proto.TableKeyR\x07portKeyB\0\x12\x19\n\x07port_up\x18\
    \x02\x20\x01(\x08R\x06portUpB\0:\0\"\xb6\x02\n\x18ForwardingPipelineConf\
    ig\x12\x19\n\x07p4_name\x18\x01\x20\x01(\tR\x06p4NameB\0\x12'\n\x0ebfrun\
    time_info\x18\x02\x20\x01(\x0cR\rbfruntimeInfoB\0\x12J\n\x08profiles\x18\
    \x03\x20\x03(\x0b2,.bfrt_proto.ForwardingPipelineConfig.ProfileR\x08prof\
    ilesB\0\x1a\x87\x01\n\x07Profile\x12#\n\x0cprofile_name\x18\x01\x20\x01(\
    \tR\x0bprofileNameB\0\x12\x1a\n\x07context\x18\x02\x20\x01(\x0cR\x07cont\
    extB\0\x12\x18\n\x06binary\x18\x03\x20\x01(\x0cR\x06binaryB\0\x12\x1f\n\
    \npipe_scope\x18\x04\x20\x03(\rR\tpipeScopeB\0:\0:\0\"8\n\x0bNonP4Config\
    \x12'\n\x0ebfruntime_info\x18\x01\x20\x01(\x0cR\rbfruntimeInfoB\0:\0\"\
    \xc6\x04\n\"SetForwardingPipelineConfigRequest\x12\x1d\n\tdevice_id\x18\
    \x01\x20\x01(\rR\x08deviceIdB\0\x12\x1d\n\tclient_id\x18\x02\x20\x01(\rR\
    \x08clientIdB\0\x12O\n\x06action\x18\x03\x20\x01(\x0e25.bfrt_proto.SetFo\
    rwardingPipelineConfigRequest.ActionR\x06actionB\0\x12`\n\rdev_init_mode\
    \x18\x04\x20\x01(\x0e2:.bfrt_proto.SetForwardingPipelineConfigRequest.De\
    vInitModeR\x0bdevInitModeB\0\x12\x1d\n\tbase_path\x18\x05\x20\x01(\tR\
    \x08basePathB\0\x12>\n\x06config\x18\x06\x20\x03(\x0b2$.bfrt_proto.Forwa\
    rdingPipelineConfigR\x06configB\0\"\x9c\x01\n\x06Action\x12\x08\n\x04BIN\
    D\x10\0\x12\n\n\x06VERIFY\x10\x01\x12\x1e\n\x1aVERIFY_AND_WARM_INIT_BEGI\
    N\x10\x02\x12&\n\"VERIFY_AND_WARM_INIT_BEGIN_AND_END\x10\x03\x12\x11\n\r\
    WARM_INIT_END\x10\x04\x12\x1f\n\x1bRECONCILE_AND_WARM_INIT_END\x10\x05\
    \x1a\0\"/\n\x0bDevInitMode\x12\x11\n\rFAST_RECONFIG\x10\0\x12\x0b\n\x07H\
    ITLESS\x10\x01\x1a\0:\0\"\xbe\x01\n#SetForwardingPipelineConfigResponse\
    \x12\x94\x01\n,set_forwarding_pipeline_config_response_type\x18\x01\x20\
    \x01(\x0e23.bfrt_proto.SetForwardingPipelineConfigResponseTypeR'setForwa\
    rdingPipelineConfigResponseTypeB\0:\0\"d\n\"GetForwardingPipelineConfigR\
    equest\x12\x1d\n\tdevice_id\x18\x01\x20\x01(\rR\x08deviceIdB\0\x12\x1d\n\
    \tclient_id\x18\x02\x20\x01(\rR\x08clientIdB\0:\0\"\xa6\x01\n#GetForward\
    ingPipelineConfigResponse\x12>\n\x06config\x18\x01\x20\x03(\x0b2$.bfrt_p\
    roto.ForwardingPipelineConfigR\x06configB\0\x12=\n\rnon_p4_config\x18\
    \x02\x20\x01(\x0b2\x17.bfrt_proto.NonP4ConfigR\x0bnonP4ConfigB\0:\0\"|\n\
    \x05Error\x12'\n\x0ecanonical_code\x18\x01\x20\x01(\x05R\rcanonicalCodeB\
    \0\x12\x1a\n\x07message\x18\x02\x20\x01(\tR\x07messageB\0\x12\x16\n\x05s\
    pace\x18\x03\x20\x01(\tR\x05spaceB\0\x12\x14\n\x04code\x18\x04\x20\x01(\
    \x05R\x04codeB\0:\0\"r\n\x06Status\x12\x14\n\x04code\x18\x01\x20\x01(\
    \x05R\x04codeB\0\x12\x1a\n\x07message\x18\x02\x20\x01(\tR\x07messageB\0\
    \x124\n\x07details\x18\x03\x20\x03(\x0b2\x18.bfrt_proto.StatusDetailR\
    \x07detailsB\0:\0\"E\n\x0cStatusDetail\x12\x1b\n\x08type_url\x18\x01\x20\
    \x01(\tR\x07typeUrlB\0\x12\x16\n\x05value\x18\x02\x20\x01(\x0cR\x05value\
    B\0:\0*Z\n'SetForwardingPipelineConfigResponseType\x12\x15\n\x11WARM_INI\
    T_STARTED\x10\0\x12\x16\n\x12WARM_INIT_FINISHED\x10\x01\x1a\0B\0b\x06pro\
    to3\
";

static file_descriptor_proto_lazy: ::protobuf::rt::LazyV2<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::LazyV2::INIT;

fn parse_descriptor_proto() -> ::protobuf::descriptor::FileDescriptorProto {
    ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
}

pub fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    file_descriptor_proto_lazy.get(|| {
        parse_descriptor_proto()
    })
}
