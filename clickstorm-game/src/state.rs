//! Player progression state and its controlled mutation entry points.
//!
//! A single `Progress` value is owned by the running session. Every mutation
//! runs to completion synchronously, so timer-driven accrual and user-driven
//! purchases can interleave without coordination.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::skins::DEFAULT_SKIN_ID;

/// Starting price of the first auto-income generator.
pub const BASE_AUTO_UNIT_COST: f64 = 1_000_000.0;
/// Starting price of the first multiplier upgrade.
pub const BASE_MULTIPLIER_COST: f64 = 10.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProgressError {
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: f64, available: f64 },
    #[error("skin '{0}' is not unlocked")]
    SkinLocked(String),
    #[error("player name is already set")]
    NameAlreadySet,
    #[error("player name must not be empty")]
    EmptyName,
}

/// The persisted progression record.
///
/// Loading is lenient field by field: a missing or wrong-typed field falls
/// back to its default while its neighbors load normally, so one corrupted
/// field never discards the rest of a snapshot. The persisted costs are
/// authoritative: they are never recomputed from the purchase counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default, deserialize_with = "lenient_zero")]
    pub currency: f64,
    #[serde(default, deserialize_with = "lenient_units")]
    pub auto_units: u32,
    #[serde(default = "default_multiplier", deserialize_with = "lenient_multiplier")]
    pub multiplier: f64,
    #[serde(
        default = "default_auto_unit_cost",
        deserialize_with = "lenient_auto_unit_cost"
    )]
    pub auto_unit_cost: f64,
    #[serde(
        default = "default_multiplier_cost",
        deserialize_with = "lenient_multiplier_cost"
    )]
    pub multiplier_cost: f64,
    #[serde(default, deserialize_with = "lenient_name")]
    pub player_name: Option<String>,
    #[serde(default = "default_active_skin", deserialize_with = "lenient_active_skin")]
    pub active_skin: String,
    #[serde(
        default = "default_unlocked_skins",
        deserialize_with = "lenient_unlocked_skins"
    )]
    pub unlocked_skins: Vec<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub cheat_unlocked: bool,
}

/// Decode one field, substituting `fallback` when the stored value has the
/// wrong type. The raw value is buffered first so a bad field cannot poison
/// the surrounding record.
fn lenient<'de, D, T>(deserializer: D, fallback: impl FnOnce() -> T) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_else(|_| fallback()))
}

fn lenient_zero<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    lenient(d, || 0.0)
}

fn lenient_units<'de, D: serde::Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    lenient(d, || 0)
}

fn lenient_multiplier<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    lenient(d, default_multiplier)
}

fn lenient_auto_unit_cost<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    lenient(d, default_auto_unit_cost)
}

fn lenient_multiplier_cost<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    lenient(d, default_multiplier_cost)
}

fn lenient_name<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    lenient(d, || None)
}

fn lenient_active_skin<'de, D: serde::Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient(d, default_active_skin)
}

fn lenient_unlocked_skins<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    lenient(d, default_unlocked_skins)
}

fn lenient_flag<'de, D: serde::Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    lenient(d, || false)
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_auto_unit_cost() -> f64 {
    BASE_AUTO_UNIT_COST
}

fn default_multiplier_cost() -> f64 {
    BASE_MULTIPLIER_COST
}

fn default_active_skin() -> String {
    DEFAULT_SKIN_ID.to_string()
}

fn default_unlocked_skins() -> Vec<String> {
    vec![DEFAULT_SKIN_ID.to_string()]
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            currency: 0.0,
            auto_units: 0,
            multiplier: default_multiplier(),
            auto_unit_cost: default_auto_unit_cost(),
            multiplier_cost: default_multiplier_cost(),
            player_name: None,
            active_skin: default_active_skin(),
            unlocked_skins: default_unlocked_skins(),
            cheat_unlocked: false,
        }
    }
}

impl Progress {
    /// Add earned currency. Negative or non-finite amounts are ignored.
    pub fn add_currency(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.currency += amount;
        }
    }

    /// Spend currency atomically. No partial spend happens on failure.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` when the balance does not cover `amount`.
    pub fn spend(&mut self, amount: f64) -> Result<(), ProgressError> {
        if self.currency < amount {
            return Err(ProgressError::InsufficientFunds {
                needed: amount,
                available: self.currency,
            });
        }
        self.currency -= amount;
        Ok(())
    }

    /// Whether the skin is in the unlocked set.
    #[must_use]
    pub fn is_unlocked(&self, skin_id: &str) -> bool {
        self.unlocked_skins.iter().any(|id| id == skin_id)
    }

    /// Add a skin to the unlocked set. Unlocking twice is a no-op.
    pub fn unlock_skin(&mut self, skin_id: &str) {
        if !self.is_unlocked(skin_id) {
            self.unlocked_skins.push(skin_id.to_string());
        }
    }

    /// Switch the displayed skin.
    ///
    /// # Errors
    ///
    /// Returns `SkinLocked` when the skin has not been unlocked yet.
    pub fn set_active_skin(&mut self, skin_id: &str) -> Result<(), ProgressError> {
        if !self.is_unlocked(skin_id) {
            return Err(ProgressError::SkinLocked(skin_id.to_string()));
        }
        self.active_skin = skin_id.to_string();
        Ok(())
    }

    /// Record the player name. Set once, immutable thereafter.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` for a blank name and `NameAlreadySet` when a name
    /// was already recorded.
    pub fn set_player_name(&mut self, name: &str) -> Result<(), ProgressError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProgressError::EmptyName);
        }
        if self.player_name.is_some() {
            return Err(ProgressError::NameAlreadySet);
        }
        self.player_name = Some(trimmed.to_string());
        Ok(())
    }

    /// Latch the cheat unlock. Returns `true` only on the first call.
    pub fn unlock_cheat(&mut self) -> bool {
        let newly = !self.cheat_unlocked;
        self.cheat_unlocked = true;
        newly
    }

    /// Discard all progress and return to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Repair a loaded snapshot so the documented invariants hold.
    ///
    /// Non-finite or out-of-range numeric fields fall back to their defaults,
    /// the default skin is re-inserted if missing, and an active skin outside
    /// the unlocked set falls back to the default skin.
    pub fn sanitize(&mut self) {
        if !self.currency.is_finite() || self.currency < 0.0 {
            log::warn!("resetting invalid saved currency {}", self.currency);
            self.currency = 0.0;
        }
        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            log::warn!("resetting invalid saved multiplier {}", self.multiplier);
            self.multiplier = default_multiplier();
        }
        if !self.auto_unit_cost.is_finite() || self.auto_unit_cost <= 0.0 {
            self.auto_unit_cost = default_auto_unit_cost();
        }
        if !self.multiplier_cost.is_finite() || self.multiplier_cost <= 0.0 {
            self.multiplier_cost = default_multiplier_cost();
        }
        if let Some(name) = &self.player_name
            && name.trim().is_empty()
        {
            self.player_name = None;
        }
        if !self.is_unlocked(DEFAULT_SKIN_ID) {
            self.unlocked_skins.insert(0, DEFAULT_SKIN_ID.to_string());
        }
        if !self.is_unlocked(&self.active_skin) {
            log::warn!(
                "saved active skin '{}' is not unlocked, falling back",
                self.active_skin
            );
            self.active_skin = default_active_skin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_is_atomic() {
        let mut progress = Progress {
            currency: 50.0,
            ..Progress::default()
        };
        let err = progress.spend(60.0).unwrap_err();
        assert_eq!(
            err,
            ProgressError::InsufficientFunds {
                needed: 60.0,
                available: 50.0
            }
        );
        assert!((progress.currency - 50.0).abs() < f64::EPSILON);

        progress.spend(50.0).unwrap();
        assert!((progress.currency - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unlock_skin_is_idempotent() {
        let mut progress = Progress::default();
        progress.unlock_skin("messi");
        progress.unlock_skin("messi");
        assert_eq!(
            progress.unlocked_skins,
            vec![DEFAULT_SKIN_ID.to_string(), "messi".to_string()]
        );
    }

    #[test]
    fn active_skin_must_be_unlocked() {
        let mut progress = Progress::default();
        assert_eq!(
            progress.set_active_skin("messi"),
            Err(ProgressError::SkinLocked("messi".to_string()))
        );
        progress.unlock_skin("messi");
        progress.set_active_skin("messi").unwrap();
        assert_eq!(progress.active_skin, "messi");
    }

    #[test]
    fn player_name_is_set_once() {
        let mut progress = Progress::default();
        assert_eq!(progress.set_player_name("  "), Err(ProgressError::EmptyName));
        progress.set_player_name("  Benny ").unwrap();
        assert_eq!(progress.player_name.as_deref(), Some("Benny"));
        assert_eq!(
            progress.set_player_name("Other"),
            Err(ProgressError::NameAlreadySet)
        );
    }

    #[test]
    fn cheat_latch_fires_once() {
        let mut progress = Progress::default();
        assert!(progress.unlock_cheat());
        assert!(!progress.unlock_cheat());
        assert!(progress.cheat_unlocked);
    }

    #[test]
    fn add_currency_rejects_junk_amounts() {
        let mut progress = Progress::default();
        progress.add_currency(f64::NAN);
        progress.add_currency(-5.0);
        assert!((progress.currency - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sanitize_repairs_broken_snapshot() {
        let mut progress = Progress {
            currency: f64::NAN,
            multiplier: 0.0,
            active_skin: "stolen".to_string(),
            unlocked_skins: vec!["messi".to_string()],
            player_name: Some(String::new()),
            ..Progress::default()
        };
        progress.sanitize();
        assert!((progress.currency - 0.0).abs() < f64::EPSILON);
        assert!((progress.multiplier - 1.0).abs() < f64::EPSILON);
        assert_eq!(progress.active_skin, DEFAULT_SKIN_ID);
        assert!(progress.is_unlocked(DEFAULT_SKIN_ID));
        assert!(progress.is_unlocked("messi"));
        assert_eq!(progress.player_name, None);
    }

    #[test]
    fn wrong_typed_field_falls_back_without_discarding_neighbors() {
        let loaded: Progress = serde_json::from_str(
            r#"{"currency":"oops","auto_units":5,"player_name":"Benny","cheat_unlocked":"yes"}"#,
        )
        .expect("parses");
        assert!((loaded.currency - 0.0).abs() < f64::EPSILON);
        assert_eq!(loaded.auto_units, 5);
        assert_eq!(loaded.player_name.as_deref(), Some("Benny"));
        assert!(!loaded.cheat_unlocked);
        assert!((loaded.multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut progress = Progress {
            currency: 1e9,
            auto_units: 12,
            cheat_unlocked: true,
            ..Progress::default()
        };
        progress.reset();
        assert_eq!(progress, Progress::default());
    }
}
