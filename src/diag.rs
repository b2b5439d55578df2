//! Environment report for the `check-env` binary.
//!
//! Versions are captured by the build script: rustc from `$RUSTC --version`,
//! `image` and `minifb` from `Cargo.lock`.

pub const SEPARATOR_WIDTH: usize = 60;
pub const SUCCESS_LINE: &str = "✅ red-tracker environment OK!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentReport {
    pub crate_version: String,
    pub rustc_version: String,
    pub image_version: String,
    pub minifb_version: String,
    pub target: String,
}

impl EnvironmentReport {
    /// Report for the binary that is running right now.
    pub fn current() -> Self {
        Self {
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            rustc_version: env!("RED_TRACKER_RUSTC_VERSION").to_string(),
            image_version: env!("RED_TRACKER_IMAGE_VERSION").to_string(),
            minifb_version: env!("RED_TRACKER_MINIFB_VERSION").to_string(),
            target: format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
        }
    }

    /// The lines `check-env` prints, in order.
    pub fn lines(&self) -> Vec<String> {
        let sep = "=".repeat(SEPARATOR_WIDTH);
        vec![
            sep.clone(),
            format!("red-tracker version: {}", self.crate_version),
            format!("Rust version: {} ({})", self.rustc_version, self.target),
            format!("image version: {}", self.image_version),
            format!("minifb version: {}", self.minifb_version),
            sep,
            SUCCESS_LINE.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_framed_and_ends_with_success() {
        let lines = EnvironmentReport::current().lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[5], lines[0]);
        assert_eq!(lines.last().map(String::as_str), Some(SUCCESS_LINE));
        assert!(lines[1].ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn versions_are_never_blank() {
        let report = EnvironmentReport::current();
        for v in [&report.rustc_version, &report.image_version, &report.minifb_version] {
            assert!(!v.is_empty());
        }
    }
}
