use std::fmt;

/// Build details embedded by `build.rs`; `unknown` when a value was unavailable.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    /// Label/value rows for the `version` command.
    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Build hash", format!("{} ({})", self.git_hash, self.git_status)),
            ("Built at", self.timestamp.to_string()),
            ("Target", self.target.to_string()),
            ("Profile", self.profile.to_string()),
            ("Rustc", self.rustc.to_string()),
        ]
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finaware {} ({} {}, {})",
            self.version, self.git_hash, self.git_status, self.profile
        )
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("FINAWARE_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("FINAWARE_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("FINAWARE_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("FINAWARE_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("FINAWARE_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("FINAWARE_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_package_version() {
        let meta = current();
        assert!(meta.to_string().contains(env!("CARGO_PKG_VERSION")));
        assert_eq!(meta.rows().len(), 5);
    }
}
