//! # Domain Layer
//!
//! Identifier value types and their codecs. No I/O; account lookups go
//! through the outbound port.

pub mod errors;
pub mod identifier;
pub mod nick_id;
pub mod null_id;
pub mod reg_id;
pub mod user_id;
pub mod value_objects;

pub use errors::*;
pub use identifier::{Identifier, UserIdKind};
pub use nick_id::{NickId, MAX_NICKNAME_LEN, NICKNAME_CHARSET, NICKNAME_FORMAT_VERSION};
pub use null_id::{NullId, NULL_ID_STR};
pub use reg_id::{RegId, RegIdKey, MAX_REG_ID_PAYLOAD, MIN_REG_ID_PAYLOAD, REG_ID_RAW_SIZE};
pub use user_id::{
    UserId, UserIdJson, TAG_KEY_ID, TAG_NICK_ID, TAG_NULL, TAG_PUB_KEY, TAG_REG_ID_MAX,
    TAG_REG_ID_MIN,
};
pub use value_objects::*;
