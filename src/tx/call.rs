// Move call targets, arguments and commands

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{encode_string, BcsWrite, CodecError, ObjectId};

/// Fully qualified Move function: `package::module::function`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveTarget {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
}

impl MoveTarget {
    pub fn new(package: ObjectId, module: &str, function: &str) -> Self {
        Self {
            package,
            module: module.to_string(),
            function: function.to_string(),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.function)
    }
}

impl FromStr for MoveTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split("::").collect();
        if parts.len() != 3 {
            return Err(format!("Invalid move target '{}': expected package::module::function", s));
        }

        let package = ObjectId::from_hex(parts[0])?;
        for name in &parts[1..] {
            if !is_identifier(name) {
                return Err(format!("Invalid identifier '{}' in move target", name));
            }
        }

        Ok(Self::new(package, parts[1], parts[2]))
    }
}

impl Serialize for MoveTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MoveTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Argument to a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CallArg {
    /// BCS-encoded value, shown as hex
    Pure(#[serde(with = "hex::serde")] Vec<u8>),
    /// Object passed by id; the signer resolves version and ownership
    Object(ObjectId),
    /// Output `index` of an earlier command
    NestedResult(u16, u16),
}

impl CallArg {
    /// Pure Move `String`
    pub fn pure_string(text: &str) -> Result<Self, CodecError> {
        Ok(CallArg::Pure(encode_string(text)?))
    }

    pub fn pure_u64(value: u64) -> Self {
        CallArg::Pure(value.to_le_bytes().to_vec())
    }

    /// Any value with a BCS form
    pub fn pure<T: BcsWrite + ?Sized>(value: &T) -> Result<Self, CodecError> {
        Ok(CallArg::Pure(value.bcs_bytes()?))
    }

    /// Bytes that are already BCS-encoded
    pub fn pure_bytes(bytes: Vec<u8>) -> Self {
        CallArg::Pure(bytes)
    }

    pub fn object(id: ObjectId) -> Self {
        CallArg::Object(id)
    }
}

/// One step of a programmable transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Split coins of the given amounts (MIST) off the gas coin
    SplitCoins { amounts: Vec<u64> },
    MoveCall {
        target: MoveTarget,
        arguments: Vec<CallArg>,
    },
}

impl Command {
    /// Number of results this command is known to produce, if fixed
    pub fn result_count(&self) -> Option<usize> {
        match self {
            Command::SplitCoins { amounts } => Some(amounts.len()),
            Command::MoveCall { .. } => None,
        }
    }

    pub fn arguments(&self) -> &[CallArg] {
        match self {
            Command::SplitCoins { .. } => &[],
            Command::MoveCall { arguments, .. } => arguments,
        }
    }
}
