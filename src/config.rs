//! Session configuration

/// Settings applied to every session created from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionConfig {
    /// Fixed seed for reply selection; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Whether a new session opens with the welcome message
    pub welcome: bool,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            welcome: true,
        }
    }
}

impl CompanionConfig {
    /// Read `DSCPL_SEED` and `DSCPL_WELCOME` from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("DSCPL_SEED").ok().as_deref(),
            std::env::var("DSCPL_WELCOME").ok().as_deref(),
        )
    }

    fn from_vars(seed: Option<&str>, welcome: Option<&str>) -> Self {
        let seed = seed.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "Ignoring malformed DSCPL_SEED");
                None
            }
        });

        let welcome = !welcome.is_some_and(|raw| {
            matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            )
        });

        Self { seed, welcome }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn without_welcome(mut self) -> Self {
        self.welcome = false;
        self
    }
}
