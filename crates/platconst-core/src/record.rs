//! The constants record and its field catalogue.

use serde::{Deserialize, Serialize};

use crate::probe::{ConstantsProbe, HostProbe};

/// Every constant the reporter emits, captured in a single struct.
///
/// Field declaration order is the wire order; serde follows it when
/// serializing, so do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConstants {
    /// Byte offset of `st_size` within `struct stat`.
    #[serde(rename = "statOffset")]
    pub stat_offset: usize,
    /// Total size of `struct stat` in bytes.
    #[serde(rename = "statSize")]
    pub stat_size: usize,
    #[serde(rename = "O_RDONLY")]
    pub o_rdonly: i32,
    #[serde(rename = "O_WRONLY")]
    pub o_wronly: i32,
    #[serde(rename = "O_RDWR")]
    pub o_rdwr: i32,
    #[serde(rename = "PROT_READ")]
    pub prot_read: i32,
    #[serde(rename = "PROT_WRITE")]
    pub prot_write: i32,
    #[serde(rename = "MADV_NORMAL")]
    pub madv_normal: i32,
    #[serde(rename = "MADV_RANDOM")]
    pub madv_random: i32,
    #[serde(rename = "MADV_SEQUENTIAL")]
    pub madv_sequential: i32,
    #[serde(rename = "MADV_WILLNEED")]
    pub madv_willneed: i32,
    #[serde(rename = "MADV_DONTNEED")]
    pub madv_dontneed: i32,
    /// `MAP_FAILED` pointer bits, sign-extended to 64 bits.
    #[serde(rename = "MAP_FAILED")]
    pub map_failed: i64,
    #[serde(rename = "MAP_SHARED")]
    pub map_shared: i32,
}

impl PlatformConstants {
    /// Probe the platform this binary was compiled for.
    pub fn host() -> Self {
        HostProbe::new().probe()
    }

    /// Read any field as a widened signed integer.
    ///
    /// Layout fields that do not fit in `i64` saturate, which no real
    /// `struct stat` comes near.
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::StatOffset => i64::try_from(self.stat_offset).unwrap_or(i64::MAX),
            Field::StatSize => i64::try_from(self.stat_size).unwrap_or(i64::MAX),
            Field::ORdonly => self.o_rdonly.into(),
            Field::OWronly => self.o_wronly.into(),
            Field::ORdwr => self.o_rdwr.into(),
            Field::ProtRead => self.prot_read.into(),
            Field::ProtWrite => self.prot_write.into(),
            Field::MadvNormal => self.madv_normal.into(),
            Field::MadvRandom => self.madv_random.into(),
            Field::MadvSequential => self.madv_sequential.into(),
            Field::MadvWillneed => self.madv_willneed.into(),
            Field::MadvDontneed => self.madv_dontneed.into(),
            Field::MapFailed => self.map_failed,
            Field::MapShared => self.map_shared.into(),
        }
    }
}

/// Names of the record's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    StatOffset,
    StatSize,
    ORdonly,
    OWronly,
    ORdwr,
    ProtRead,
    ProtWrite,
    MadvNormal,
    MadvRandom,
    MadvSequential,
    MadvWillneed,
    MadvDontneed,
    MapFailed,
    MapShared,
}

impl Field {
    /// All fields, in wire order.
    pub const ALL: [Self; 14] = [
        Self::StatOffset,
        Self::StatSize,
        Self::ORdonly,
        Self::OWronly,
        Self::ORdwr,
        Self::ProtRead,
        Self::ProtWrite,
        Self::MadvNormal,
        Self::MadvRandom,
        Self::MadvSequential,
        Self::MadvWillneed,
        Self::MadvDontneed,
        Self::MapFailed,
        Self::MapShared,
    ];

    /// The key this field is emitted under.
    pub const fn key(self) -> &'static str {
        match self {
            Self::StatOffset => "statOffset",
            Self::StatSize => "statSize",
            Self::ORdonly => "O_RDONLY",
            Self::OWronly => "O_WRONLY",
            Self::ORdwr => "O_RDWR",
            Self::ProtRead => "PROT_READ",
            Self::ProtWrite => "PROT_WRITE",
            Self::MadvNormal => "MADV_NORMAL",
            Self::MadvRandom => "MADV_RANDOM",
            Self::MadvSequential => "MADV_SEQUENTIAL",
            Self::MadvWillneed => "MADV_WILLNEED",
            Self::MadvDontneed => "MADV_DONTNEED",
            Self::MapFailed => "MAP_FAILED",
            Self::MapShared => "MAP_SHARED",
        }
    }

    /// Look a field up by its emitted key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
