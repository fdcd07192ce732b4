/// Policy bits steering how a stream consumer treats mismatching entries and
/// trailing data.
///
/// The two bits are independent of each other; the remaining 30 bits are
/// retained but carry no meaning here. Typically built once from
/// configuration and copied around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseControlFlags(u32);

impl ParseControlFlags {
    /// Bit 0: a mismatching entry aborts the whole run instead of being
    /// skipped.
    pub const ABORT_ON_MISMATCH: u32 = 1;
    /// Bit 1: data appended past the expected end is ignored instead of
    /// kept.
    pub const IGNORE_APPENDED: u32 = 1 << 1;

    /// Wraps a raw flag word. All 32 bits are retained.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw flag word.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether a mismatching entry aborts the whole run.
    #[must_use]
    pub const fn abort_on_mismatch(self) -> bool {
        self.0 & Self::ABORT_ON_MISMATCH != 0
    }

    /// Whether data appended past the expected end is ignored.
    #[must_use]
    pub const fn ignore_appended(self) -> bool {
        self.0 & Self::IGNORE_APPENDED != 0
    }
}
