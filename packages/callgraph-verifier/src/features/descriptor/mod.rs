//! Method Descriptors
//!
//! Textual method descriptors `loader#type#name#signature` and their
//! resolution into canonical method handles.
//!
//! ```text
//! "Source#pkg/Foo#bar#()V"
//!     │ parse                      (domain/)
//!     ▼
//! MethodDescriptorFields
//!     │ resolve against universe   (application/)
//!     ▼
//! MethodHandle
//! ```

pub mod application;
pub mod domain;

pub use application::{resolve, resolve_text, ResolveError};
pub use domain::{parse, DescriptorError, MethodDescriptorFields, DESCRIPTOR_DELIMITER};
