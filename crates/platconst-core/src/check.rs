//! Structural invariants of a constants record.
//!
//! The reporter never runs these; they exist for consumers that receive a
//! record from elsewhere and for the test suite.

use thiserror::Error;

use crate::probe::st_size_width;
use crate::record::{Field, PlatformConstants};

/// A broken invariant in a [`PlatformConstants`] record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// `st_size` would extend past the end of `struct stat`.
    #[error("st_size at offset {offset} ({width} bytes) exceeds stat size {size}")]
    StatSizeOutOfBounds {
        offset: usize,
        width: usize,
        size: usize,
    },

    /// `MAP_FAILED` is not the all-ones sentinel.
    #[error("MAP_FAILED is {0}, expected -1")]
    MapFailedNotAllOnes(i64),

    /// Two fields that must differ share a value.
    #[error("{first} and {second} share value {value}")]
    Collision {
        first: Field,
        second: Field,
        value: i64,
    },

    /// A protection flag has no bit set.
    #[error("{0} is zero")]
    EmptyProtFlag(Field),
}

const ACCESS_MODES: [Field; 3] = [Field::ORdonly, Field::OWronly, Field::ORdwr];
const PROT_FLAGS: [Field; 2] = [Field::ProtRead, Field::ProtWrite];
const ADVICE: [Field; 5] = [
    Field::MadvNormal,
    Field::MadvRandom,
    Field::MadvSequential,
    Field::MadvWillneed,
    Field::MadvDontneed,
];

impl PlatformConstants {
    /// Check the record using this target's `st_size` width.
    pub fn check(&self) -> Result<(), Vec<Violation>> {
        self.check_with_width(st_size_width())
    }

    /// Check the record, treating `st_size` as `width` bytes wide.
    ///
    /// Use this for records produced on another platform.
    pub fn check_with_width(&self, width: usize) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();

        if self
            .stat_offset
            .checked_add(width)
            .is_none_or(|end| end > self.stat_size)
        {
            violations.push(Violation::StatSizeOutOfBounds {
                offset: self.stat_offset,
                width,
                size: self.stat_size,
            });
        }

        if self.map_failed != -1 {
            violations.push(Violation::MapFailedNotAllOnes(self.map_failed));
        }

        for field in PROT_FLAGS {
            if self.get(field) == 0 {
                violations.push(Violation::EmptyProtFlag(field));
            }
        }

        self.collect_collisions(&ACCESS_MODES, &mut violations);
        self.collect_collisions(&PROT_FLAGS, &mut violations);
        self.collect_collisions(&ADVICE, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn collect_collisions(&self, group: &[Field], out: &mut Vec<Violation>) {
        for (i, &first) in group.iter().enumerate() {
            for &second in &group[i + 1..] {
                let value = self.get(first);
                if value == self.get(second) {
                    out.push(Violation::Collision {
                        first,
                        second,
                        value,
                    });
                }
            }
        }
    }
}
