mod error;
mod factory;
mod hooks;
mod model;
mod primitive;
mod writer;

pub use serwrite_derive::EnumValue;
pub use error::SerializationError;
pub use factory::*;
pub use hooks::*;
pub use model::{EnumValue, Parsable};
pub use primitive::*;
pub use writer::{AdditionalData, SerializationWriter};
