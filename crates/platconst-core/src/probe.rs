//! Constants probe port and the host implementation.
//!
//! # Design Notes
//!
//! - Core owns the trait and the record
//! - [`HostProbe`] reads the compiling platform's definitions through the
//!   `libc` bindings that `nix` re-exports, plus `nix`'s typed flag sets
//! - Every value is a compile-time constant, so probing cannot fail

use std::mem::{offset_of, size_of};

use nix::fcntl::OFlag;
use nix::libc;
use nix::sys::mman::{MapFlags, ProtFlags};

use crate::record::PlatformConstants;

/// Port for gathering a [`PlatformConstants`] record.
///
/// The CLI takes a `&dyn ConstantsProbe` so handlers can be exercised with a
/// fixed record independent of the machine running the tests.
pub trait ConstantsProbe {
    /// Collect every constant the record carries.
    fn probe(&self) -> PlatformConstants;
}

/// Probe backed by the target platform's own headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl HostProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl ConstantsProbe for HostProbe {
    fn probe(&self) -> PlatformConstants {
        let constants = PlatformConstants {
            stat_offset: offset_of!(libc::stat, st_size),
            stat_size: size_of::<libc::stat>(),
            o_rdonly: OFlag::O_RDONLY.bits(),
            o_wronly: OFlag::O_WRONLY.bits(),
            o_rdwr: OFlag::O_RDWR.bits(),
            prot_read: ProtFlags::PROT_READ.bits(),
            prot_write: ProtFlags::PROT_WRITE.bits(),
            madv_normal: libc::MADV_NORMAL,
            madv_random: libc::MADV_RANDOM,
            madv_sequential: libc::MADV_SEQUENTIAL,
            madv_willneed: libc::MADV_WILLNEED,
            madv_dontneed: libc::MADV_DONTNEED,
            map_failed: map_failed_bits(),
            map_shared: MapFlags::MAP_SHARED.bits(),
        };
        tracing::trace!(?constants, "probed host constants");
        constants
    }
}

/// `MAP_FAILED` reinterpreted as a signed integer, then widened.
///
/// Going through `isize` keeps the pointer's bit pattern and sign-extends it,
/// so the all-ones sentinel stays `-1` on both 32- and 64-bit targets.
#[allow(clippy::cast_possible_wrap)]
fn map_failed_bits() -> i64 {
    libc::MAP_FAILED as isize as i64
}

/// Width in bytes of `struct stat`'s `st_size` member on this target.
pub fn st_size_width() -> usize {
    fn width_of<T>(_: fn(&libc::stat) -> &T) -> usize {
        size_of::<T>()
    }
    width_of(|stat| &stat.st_size)
}
