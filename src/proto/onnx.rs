//! Vendored ONNX protobuf bindings.
//!
//! Hand-maintained `prost` bindings for the subset of `onnx.proto` the
//! extractor reads. Field tags match the upstream schema, so models decode
//! with the stock `prost::Message` machinery; fields that are never read
//! (node attributes, sparse initializers, metadata props, external data)
//! are simply skipped by prost's unknown-field handling. Vendoring the
//! bindings keeps the build free of a `protoc` dependency.

/// Top-level ONNX model container.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModelProto {
    /// Version of the ONNX IR this model was serialized with.
    #[prost(int64, tag = "1")]
    pub ir_version: i64,
    /// Name of the tool that produced the model.
    #[prost(string, tag = "2")]
    pub producer_name: ::prost::alloc::string::String,
    /// Version of the producing tool.
    #[prost(string, tag = "3")]
    pub producer_version: ::prost::alloc::string::String,
    /// Reverse-DNS model namespace.
    #[prost(string, tag = "4")]
    pub domain: ::prost::alloc::string::String,
    /// Version of the model itself.
    #[prost(int64, tag = "5")]
    pub model_version: i64,
    /// Human-readable documentation.
    #[prost(string, tag = "6")]
    pub doc_string: ::prost::alloc::string::String,
    /// The computation graph.
    #[prost(message, optional, tag = "7")]
    pub graph: ::core::option::Option<GraphProto>,
    /// Operator sets the model depends on.
    #[prost(message, repeated, tag = "8")]
    pub opset_import: ::prost::alloc::vec::Vec<OperatorSetIdProto>,
}

/// Identifies an operator set by domain and version.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperatorSetIdProto {
    /// Operator set domain ("" means the default ai.onnx domain).
    #[prost(string, tag = "1")]
    pub domain: ::prost::alloc::string::String,
    /// Opset version within the domain.
    #[prost(int64, tag = "2")]
    pub version: i64,
}

/// A computation graph: nodes, constant tensors, and declared I/O.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GraphProto {
    /// The nodes, in topological order.
    #[prost(message, repeated, tag = "1")]
    pub node: ::prost::alloc::vec::Vec<NodeProto>,
    /// Graph name.
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    /// Named constant tensors (weights, biases).
    #[prost(message, repeated, tag = "5")]
    pub initializer: ::prost::alloc::vec::Vec<TensorProto>,
    /// Human-readable documentation.
    #[prost(string, tag = "10")]
    pub doc_string: ::prost::alloc::string::String,
    /// Declared graph inputs.
    #[prost(message, repeated, tag = "11")]
    pub input: ::prost::alloc::vec::Vec<ValueInfoProto>,
    /// Declared graph outputs.
    #[prost(message, repeated, tag = "12")]
    pub output: ::prost::alloc::vec::Vec<ValueInfoProto>,
    /// Shape/type info for intermediate tensors.
    #[prost(message, repeated, tag = "13")]
    pub value_info: ::prost::alloc::vec::Vec<ValueInfoProto>,
}

/// A single operation in the graph.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeProto {
    /// Names of the input tensors, in operator-defined order.
    #[prost(string, repeated, tag = "1")]
    pub input: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Names of the output tensors.
    #[prost(string, repeated, tag = "2")]
    pub output: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Optional node name (diagnostic only).
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    /// Operator name, e.g. "MatMul".
    #[prost(string, tag = "4")]
    pub op_type: ::prost::alloc::string::String,
    /// Human-readable documentation.
    #[prost(string, tag = "6")]
    pub doc_string: ::prost::alloc::string::String,
    /// Operator domain ("" means the default ai.onnx domain).
    #[prost(string, tag = "7")]
    pub domain: ::prost::alloc::string::String,
}

/// A serialized tensor value.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TensorProto {
    /// Shape of the tensor.
    #[prost(int64, repeated, tag = "1")]
    pub dims: ::prost::alloc::vec::Vec<i64>,
    /// Element type, as a [`tensor_proto::DataType`] value.
    #[prost(int32, tag = "2")]
    pub data_type: i32,
    /// Float32 payload.
    #[prost(float, repeated, tag = "4")]
    pub float_data: ::prost::alloc::vec::Vec<f32>,
    /// Int32 payload; also the backing field for f16/bf16 bit patterns.
    #[prost(int32, repeated, tag = "5")]
    pub int32_data: ::prost::alloc::vec::Vec<i32>,
    /// Int64 payload.
    #[prost(int64, repeated, tag = "7")]
    pub int64_data: ::prost::alloc::vec::Vec<i64>,
    /// Tensor name; initializers are looked up by this.
    #[prost(string, tag = "8")]
    pub name: ::prost::alloc::string::String,
    /// Little-endian raw bytes; takes precedence over the typed fields.
    #[prost(bytes = "vec", tag = "9")]
    pub raw_data: ::prost::alloc::vec::Vec<u8>,
    /// Float64 payload.
    #[prost(double, repeated, tag = "10")]
    pub double_data: ::prost::alloc::vec::Vec<f64>,
    /// Uint64 payload.
    #[prost(uint64, repeated, tag = "11")]
    pub uint64_data: ::prost::alloc::vec::Vec<u64>,
    /// Human-readable documentation.
    #[prost(string, tag = "12")]
    pub doc_string: ::prost::alloc::string::String,
}

/// Nested enums for [`TensorProto`].
pub mod tensor_proto {
    /// Element types a [`super::TensorProto`] can carry.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    #[allow(missing_docs)]
    pub enum DataType {
        Undefined = 0,
        Float = 1,
        Uint8 = 2,
        Int8 = 3,
        Uint16 = 4,
        Int16 = 5,
        Int32 = 6,
        Int64 = 7,
        String = 8,
        Bool = 9,
        Float16 = 10,
        Double = 11,
        Uint32 = 12,
        Uint64 = 13,
        Complex64 = 14,
        Complex128 = 15,
        Bfloat16 = 16,
    }
}

/// Name plus type/shape information for a tensor.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueInfoProto {
    /// Tensor name.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Type and shape, when known.
    #[prost(message, optional, tag = "2")]
    pub r#type: ::core::option::Option<TypeProto>,
    /// Human-readable documentation.
    #[prost(string, tag = "3")]
    pub doc_string: ::prost::alloc::string::String,
}

/// A type declaration; only tensor types are materialized here.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeProto {
    /// Semantic denotation, unused by the extractor.
    #[prost(string, tag = "6")]
    pub denotation: ::prost::alloc::string::String,
    /// The concrete type variant.
    #[prost(oneof = "type_proto::Value", tags = "1")]
    pub value: ::core::option::Option<type_proto::Value>,
}

/// Nested messages for [`TypeProto`].
pub mod type_proto {
    /// A tensor type: element type plus shape.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Tensor {
        /// Element type, as a [`super::tensor_proto::DataType`] value.
        #[prost(int32, tag = "1")]
        pub elem_type: i32,
        /// Shape, when known.
        #[prost(message, optional, tag = "2")]
        pub shape: ::core::option::Option<super::TensorShapeProto>,
    }

    /// The kind of type a [`super::TypeProto`] declares.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        /// A tensor type.
        #[prost(message, tag = "1")]
        TensorType(Tensor),
    }
}

/// Shape of a tensor as a list of dimensions.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TensorShapeProto {
    /// The dimensions, outermost first.
    #[prost(message, repeated, tag = "1")]
    pub dim: ::prost::alloc::vec::Vec<tensor_shape_proto::Dimension>,
}

/// Nested messages for [`TensorShapeProto`].
pub mod tensor_shape_proto {
    /// One dimension: a concrete value or a symbolic parameter.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Dimension {
        /// Semantic denotation, unused by the extractor.
        #[prost(string, tag = "3")]
        pub denotation: ::prost::alloc::string::String,
        /// Concrete or symbolic dimension.
        #[prost(oneof = "dimension::Value", tags = "1, 2")]
        pub value: ::core::option::Option<dimension::Value>,
    }

    /// Nested enums for [`Dimension`].
    pub mod dimension {
        /// Concrete or symbolic dimension value.
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Value {
            /// A known, fixed size.
            #[prost(int64, tag = "1")]
            DimValue(i64),
            /// A named symbolic size (e.g. a batch dimension).
            #[prost(string, tag = "2")]
            DimParam(::prost::alloc::string::String),
        }
    }
}
