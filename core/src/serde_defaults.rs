//! Common serde default value functions

/// Default for enabled/active fields
pub fn default_true() -> bool {
    true
}
