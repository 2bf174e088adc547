// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// All SQL data types a resolved view column can carry.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
    /// A boolean: true or false.
    Boolean,
    /// A 4-byte signed integer
    Integer,
    /// An 8-byte signed integer
    BigInt,
    /// A 4-byte floating point
    Float,
    /// An 8-byte floating point
    Double,
    /// A variable-length character string
    Varchar,
    /// A date value (year, month, day)
    Date,
    /// A time value (hour, minute, second)
    Time,
    /// A date and time value in UTC
    Timestamp,
    /// An interval representing a duration
    Interval,
    /// A variable-length byte string
    Binary,
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Boolean => "BOOLEAN",
            Type::Integer => "INTEGER",
            Type::BigInt => "BIGINT",
            Type::Float => "FLOAT",
            Type::Double => "DOUBLE",
            Type::Varchar => "VARCHAR",
            Type::Date => "DATE",
            Type::Time => "TIME",
            Type::Timestamp => "TIMESTAMP",
            Type::Interval => "INTERVAL",
            Type::Binary => "BINARY",
        };
        f.write_str(name)
    }
}

impl FromStr for Type {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BOOLEAN" => Ok(Type::Boolean),
            "INTEGER" | "INT" => Ok(Type::Integer),
            "BIGINT" => Ok(Type::BigInt),
            "FLOAT" => Ok(Type::Float),
            "DOUBLE" => Ok(Type::Double),
            "VARCHAR" => Ok(Type::Varchar),
            "DATE" => Ok(Type::Date),
            "TIME" => Ok(Type::Time),
            "TIMESTAMP" => Ok(Type::Timestamp),
            "INTERVAL" => Ok(Type::Interval),
            "BINARY" => Ok(Type::Binary),
            _ => Err(format!("unknown data type: {}", s)),
        }
    }
}
