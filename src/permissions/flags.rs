//! Permission flags
//!
//! Read/Write authorization bitmask reported for a URI.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Combination of access rights a caller holds for a URI.
    ///
    /// Bit positions match the host interface (`Read = 1 << 1`,
    /// `Write = 1 << 2`) so `bits()` can be handed across unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PermissionFlags: u32 {
        const READ = 1 << 1;
        const WRITE = 1 << 2;
    }
}

impl PermissionFlags {
    pub const NONE: Self = Self::empty();
    pub const READ_WRITE: Self = Self::READ.union(Self::WRITE);

    pub fn can_read(&self) -> bool {
        self.contains(Self::READ)
    }

    pub fn can_write(&self) -> bool {
        self.contains(Self::WRITE)
    }
}

impl fmt::Display for PermissionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{}", names.join(" | "))
    }
}
