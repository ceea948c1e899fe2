//! Descriptor grammar

pub mod descriptor;

pub use descriptor::{parse, DescriptorError, MethodDescriptorFields, DESCRIPTOR_DELIMITER};
