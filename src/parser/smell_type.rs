//! Smell type codes and file name classification.
//!
//! Inputs are named by the analysis tool as e.g. `2017_7_18_11_25_HMU.csv`:
//! the last underscore-separated token, without extension, is the smell code.

use crate::utils::config::{FILE_NAME_SEPARATOR, NO_SMELL_TAG};
use crate::utils::error::FileNameError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Smell categories reported by the analysis tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmellCode {
    /// Internal Getter/Setter
    Igs,
    /// Member Ignoring Method
    Mim,
    /// No Low Memory Resolver
    Nlmr,
    /// Leaking Inner Class
    Lic,
    /// Heavy Service Start
    Hss,
    /// Heavy Broadcast Receiver
    Hbr,
    /// Heavy AsyncTask
    Has,
    /// Init OnDraw
    Iod,
    /// Invalidate Without Rect
    Iwr,
    /// Unsuited LRU Cache Size
    Ucs,
    /// Hidden Hardware Acceleration
    Uha,
    /// UI Overdraw
    Uio,
    /// HashMap Usage
    Hmu,
    /// Blob class
    Blob,
    /// Complex Class
    Cc,
    /// Long Method
    Lm,
    /// Swiss Army Knife
    Sak,
}

impl SmellCode {
    pub const ALL: [SmellCode; 17] = [
        Self::Igs,
        Self::Mim,
        Self::Nlmr,
        Self::Lic,
        Self::Hss,
        Self::Hbr,
        Self::Has,
        Self::Iod,
        Self::Iwr,
        Self::Ucs,
        Self::Uha,
        Self::Uio,
        Self::Hmu,
        Self::Blob,
        Self::Cc,
        Self::Lm,
        Self::Sak,
    ];

    /// Code as written in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Igs => "IGS",
            Self::Mim => "MIM",
            Self::Nlmr => "NLMR",
            Self::Lic => "LIC",
            Self::Hss => "HSS",
            Self::Hbr => "HBR",
            Self::Has => "HAS",
            Self::Iod => "IOD",
            Self::Iwr => "IWR",
            Self::Ucs => "UCS",
            Self::Uha => "UHA",
            Self::Uio => "UIO",
            Self::Hmu => "HMU",
            Self::Blob => "BLOB",
            Self::Cc => "CC",
            Self::Lm => "LM",
            Self::Sak => "SAK",
        }
    }
}

impl FromStr for SmellCode {
    type Err = FileNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| FileNameError::UnknownSmell(s.to_string()))
    }
}

impl fmt::Display for SmellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag attached to every commit record: a smell code, or the
/// supplementary "no smell" marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmellType {
    Smell(SmellCode),
    NoSmell,
}

impl FromStr for SmellType {
    type Err = FileNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NO_SMELL_TAG {
            return Ok(Self::NoSmell);
        }
        s.parse().map(Self::Smell)
    }
}

impl fmt::Display for SmellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smell(code) => code.fmt(f),
            Self::NoSmell => f.write_str(NO_SMELL_TAG),
        }
    }
}

impl Serialize for SmellType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SmellType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Decode the smell type from an input file name
///
/// **Public** - used by the aggregator to accept or skip inputs
///
/// # Errors
/// * `FileNameError::Unparsable` - no tag segment could be extracted
/// * `FileNameError::UnknownSmell` - the tag is neither a known code nor `NOSMELL`
pub fn smell_type_from_file_name(file_name: &str) -> Result<SmellType, FileNameError> {
    let tag = file_name
        .rsplit(FILE_NAME_SEPARATOR)
        .next()
        .and_then(|last| last.split('.').next())
        .filter(|tag| !tag.is_empty())
        .ok_or_else(|| FileNameError::Unparsable(file_name.to_string()))?;

    tag.parse()
}
