//! Status icons
//!
//! Nerd Font glyphs when icons are enabled, plain text markers otherwise.

/// Icon constants
pub struct Icons;

impl Icons {
    // Nerd Font symbols
    pub const NF_SUCCESS: &'static str = "\u{f00c}";
    pub const NF_WARNING: &'static str = "\u{f071}";
    pub const NF_ERROR: &'static str = "\u{f00d}";
    pub const NF_INFO: &'static str = "\u{f05a}";
    pub const NF_HOOK: &'static str = "\u{f0e7}";
    pub const NF_PENDING: &'static str = "\u{f017}";

    // Status icons (simple text)
    pub const STATUS_SUCCESS: &'static str = "[OK]";
    pub const STATUS_WARNING: &'static str = "[!]";
    pub const STATUS_ERROR: &'static str = "[X]";
    pub const STATUS_INFO: &'static str = "[i]";
    pub const STATUS_HOOK: &'static str = "[*]";
    pub const STATUS_PENDING: &'static str = "[ ]";
}

/// Status indicator shown next to hook names and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Success,
    Warning,
    Error,
    Info,
    Hook,
    Pending,
}

impl StatusIcon {
    /// Get icon based on the `use_nerd_fonts` setting
    pub fn get(self, use_nerd_fonts: bool) -> &'static str {
        match (self, use_nerd_fonts) {
            (Self::Success, true) => Icons::NF_SUCCESS,
            (Self::Warning, true) => Icons::NF_WARNING,
            (Self::Error, true) => Icons::NF_ERROR,
            (Self::Info, true) => Icons::NF_INFO,
            (Self::Hook, true) => Icons::NF_HOOK,
            (Self::Pending, true) => Icons::NF_PENDING,
            (Self::Success, false) => Icons::STATUS_SUCCESS,
            (Self::Warning, false) => Icons::STATUS_WARNING,
            (Self::Error, false) => Icons::STATUS_ERROR,
            (Self::Info, false) => Icons::STATUS_INFO,
            (Self::Hook, false) => Icons::STATUS_HOOK,
            (Self::Pending, false) => Icons::STATUS_PENDING,
        }
    }
}
