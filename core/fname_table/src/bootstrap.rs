//! Bootstrap: reserved-name registration, consistency checks and the
//! process-wide registry.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::config::NameTableConfig;
use crate::error::BootError;
use crate::fatal;
use crate::hash::folded;
use crate::registry::NameRegistry;
use crate::reserved::EName;

static GLOBAL: OnceLock<NameRegistry> = OnceLock::new();

impl NameRegistry {
    /// Create a registry and register every [`EName`] at its fixed index.
    pub fn bootstrap(config: NameTableConfig) -> Result<Self, BootError> {
        Self::bootstrap_with(config, &[])
    }

    /// Like [`NameRegistry::bootstrap`], with additional hardcoded names.
    ///
    /// `extra` indices must fall inside the reserved range and must not
    /// collide with the built-in table (by index or by case).
    pub fn bootstrap_with(
        config: NameTableConfig,
        extra: &[(u32, &str)],
    ) -> Result<Self, BootError> {
        let registry = Self::new(config)?;
        for &(index, text) in EName::RESERVED.iter().chain(extra) {
            registry.register_hardcoded(index, text)?;
        }
        registry.verify()?;
        registry.seal();

        let (narrow, wide) = registry.name_counts();
        tracing::debug!(
            hardcoded = narrow + wide,
            reserved_slots = registry.config().reserved_slots,
            case_preserving = registry.config().case_preserving,
            "name table bootstrapped"
        );
        Ok(registry)
    }

    /// [`NameRegistry::bootstrap`], reporting any failure and aborting.
    pub fn bootstrap_or_abort(config: NameTableConfig) -> Self {
        match Self::bootstrap(config) {
            Ok(registry) => registry,
            Err(err) => fatal::abort_boot(&err),
        }
    }

    /// Post-registration checks: no case collisions, slot 0 populated, and
    /// a reserved range larger than the network watermark.
    fn verify(&self) -> Result<(), BootError> {
        let mut seen: FxHashMap<String, (u32, &str)> = FxHashMap::default();
        for entry in self.entries() {
            let text = entry.original();
            if let Some(&(first, first_text)) = seen.get(&folded(text)) {
                return Err(BootError::CaseCollision {
                    first,
                    first_text: first_text.to_string(),
                    second: entry.index(),
                    second_text: text.to_string(),
                });
            }
            seen.insert(folded(text), (entry.index(), text));
        }

        if self.entry(EName::None.index()).is_none() {
            return Err(BootError::MissingNone);
        }

        let config = self.config();
        if config.network_watermark >= config.reserved_slots {
            return Err(BootError::NetworkWatermark {
                watermark: config.network_watermark,
                capacity: config.reserved_slots,
            });
        }
        Ok(())
    }

    /// Bootstrap the process-wide registry with `config`.
    ///
    /// Fails with [`BootError::AlreadyInitialized`] if the global registry
    /// exists already, including one created implicitly by
    /// [`NameRegistry::global`].
    pub fn init_global(config: NameTableConfig) -> Result<&'static NameRegistry, BootError> {
        if GLOBAL.get().is_some() {
            return Err(BootError::AlreadyInitialized);
        }
        let registry = Self::bootstrap(config)?;
        GLOBAL
            .set(registry)
            .map_err(|_| BootError::AlreadyInitialized)?;
        Ok(Self::global())
    }

    /// The process-wide registry.
    ///
    /// Bootstraps from [`NameTableConfig::from_env`] on first use unless
    /// [`NameRegistry::init_global`] ran first. Misconfiguration aborts.
    pub fn global() -> &'static NameRegistry {
        GLOBAL.get_or_init(|| {
            let config = match NameTableConfig::from_env() {
                Ok(config) => config,
                Err(err) => fatal::abort_boot(&BootError::Config(err)),
            };
            Self::bootstrap_or_abort(config)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
