//! Combat units

use crate::theme::Style;

/// Health ceiling for every unit
pub const MAX_HEALTH: i32 = 100;

/// A combatant: a name, a health pool, and an optional name accent
#[derive(Debug, Clone)]
pub struct Unit {
    name: String,
    health: i32,
    accent: Option<Style>,
}

impl Unit {
    /// Create a unit. Health is clamped to `0..=MAX_HEALTH`.
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health: health.clamp(0, MAX_HEALTH),
            accent: None,
        }
    }

    /// The player's unit: full health, name rendered in the hero style.
    pub fn hero() -> Self {
        Self {
            accent: Some(Style::Hero),
            ..Self::new("Hero", MAX_HEALTH)
        }
    }

    /// A fresh enemy with 3 health.
    pub fn enemy() -> Self {
        Self::new("Enemy", 3)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Style the unit's name is rendered with, if any.
    pub fn accent(&self) -> Option<Style> {
        self.accent
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Set health, clamped to `0..=MAX_HEALTH`.
    pub fn set_health(&mut self, value: i32) {
        self.health = value.clamp(0, MAX_HEALTH);
    }

    /// Swing at `target` for one point of damage.
    pub fn attack(&self, target: &mut Unit) {
        target.set_health(target.health - 1);
    }
}
