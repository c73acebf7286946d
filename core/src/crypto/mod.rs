pub mod types;
pub mod bits;
pub mod crc8;
pub mod digest;
pub mod uuid;
pub mod block;

pub use types::*;
pub use bits::*;
pub use crc8::*;
pub use digest::*;
pub use uuid::*;
pub use block::*;
