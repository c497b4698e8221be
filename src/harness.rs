//! Test-harness setup-method resolution.
//!
//! Older harness base classes expose an underscore-prefixed setup hook;
//! newer ones use the plain name. A harness declares which one it carries
//! through [`SetupCapability`], and the variant resolves at binding time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupMethod {
    Legacy,
    Standard,
}

impl SetupMethod {
    pub fn method_name(&self) -> &'static str {
        match self {
            SetupMethod::Legacy => "_setUp",
            SetupMethod::Standard => "setUp",
        }
    }
}

/// Declares which setup hook a harness base class exposes.
pub trait SetupCapability {
    /// True when the harness declares the underscore-prefixed hook.
    const LEGACY_SETUP: bool = false;

    fn setup_method() -> SetupMethod {
        if Self::LEGACY_SETUP {
            SetupMethod::Legacy
        } else {
            SetupMethod::Standard
        }
    }
}

/// Resolve the setup method name for a harness type.
pub fn setup_method_name<H: SetupCapability>() -> &'static str {
    H::setup_method().method_name()
}
