//! Wrapper name derivation
//!
//! Every accepted function belongs to one of two namespaces, told apart by
//! prefix:
//!
//! | Namespace   | Prefix  | Example          | Wrapper name  |
//! |-------------|---------|------------------|---------------|
//! | `Core`      | `lua_`  | `lua_pushnil`    | `pushnil`     |
//! | `Auxiliary` | `luaL_` | `luaL_checkint`  | `L_checkint`  |

use crate::constants::{AUX_PREFIX, AUX_TAG, CORE_PREFIX};
use crate::transcoder::errors::TranscodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Core,
    Auxiliary,
}

impl Namespace {
    /// Classify a full function name. `lua_` is checked before `luaL_`.
    pub fn of(name: &str) -> Result<Self, TranscodeError> {
        if name.starts_with(CORE_PREFIX) {
            Ok(Namespace::Core)
        } else if name.starts_with(AUX_PREFIX) {
            Ok(Namespace::Auxiliary)
        } else {
            Err(TranscodeError::UnrecognizedName {
                name: name.to_string(),
            })
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Core => CORE_PREFIX,
            Namespace::Auxiliary => AUX_PREFIX,
        }
    }

    /// Text placed in front of the stripped name
    pub fn tag(self) -> &'static str {
        match self {
            Namespace::Core => "",
            Namespace::Auxiliary => AUX_TAG,
        }
    }
}

/// Map a full function name to its wrapper name
pub fn map_name(name: &str) -> Result<String, TranscodeError> {
    let namespace = Namespace::of(name)?;
    let rest = &name[namespace.prefix().len()..];
    Ok(format!("{}{}", namespace.tag(), rest))
}
