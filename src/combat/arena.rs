//! Arena combat loop
//!
//! Reads the continue prompt from an injected reader and renders every
//! event to an injected writer, so the whole loop runs against in-memory
//! buffers in tests. Event lines are assembled with [`BoundedString`].

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::string::{BoundedString, StringError};
use crate::theme::{Style, Theme};

use super::unit::Unit;

/// Room for one rendered event line, escape codes included.
const LINE_CAPACITY: usize = 128;

/// Pacing and rendering knobs for a combat session
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    pub theme: Theme,
    /// Pause before the hero's swing.
    pub pre_turn_delay: Duration,
    /// Pause after each turn resolves.
    pub post_turn_delay: Duration,
    /// Run this many rounds without prompting; `None` prompts after each round.
    pub max_rounds: Option<u32>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            theme: Theme::colored(),
            pre_turn_delay: Duration::from_millis(400),
            post_turn_delay: Duration::from_millis(800),
            max_rounds: None,
        }
    }
}

/// A combat session: one hero against an endless supply of enemies
pub struct Arena {
    config: ArenaConfig,
    hero: Unit,
    enemy: Unit,
    kills: u32,
}

impl Arena {
    /// Create a session with a fresh hero and enemy.
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            hero: Unit::hero(),
            enemy: Unit::enemy(),
            kills: 0,
        }
    }

    /// Enemies slain so far.
    pub fn kills(&self) -> u32 {
        self.kills
    }

    /// Run the loop until the player declines to continue, input ends, or
    /// the configured round limit is reached.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        self.spawn_line(&self.hero)?.write_to(output)?;
        self.spawn_line(&self.enemy)?.write_to(output)?;

        let mut round = 0u32;
        loop {
            round += 1;
            debug!(round, "round start");

            // hero's turn
            thread::sleep(self.config.pre_turn_delay);
            self.attack_line(&self.hero, &self.enemy)?.write_to(output)?;
            self.hero.attack(&mut self.enemy);
            self.health_line(&self.enemy)?.write_to(output)?;
            thread::sleep(self.config.post_turn_delay);

            if self.enemy.is_dead() {
                self.death_line(&self.enemy)?.write_to(output)?;
                self.kills += 1;
                info!(kills = self.kills, "enemy slain");
                self.tally_line()?.write_to(output)?;
                output.write_all(b"\n")?;
                self.enemy = Unit::enemy();
                self.spawn_line(&self.enemy)?.write_to(output)?;
            } else {
                // enemy's turn
                output.write_all(b"\n")?;
                self.attack_line(&self.enemy, &self.hero)?.write_to(output)?;
                self.enemy.attack(&mut self.hero);
                self.health_line(&self.hero)?.write_to(output)?;
            }

            thread::sleep(self.config.post_turn_delay);
            match self.config.max_rounds {
                Some(limit) if round >= limit => break,
                Some(_) => {}
                None => {
                    output.write_all(b"\n")?;
                    output.write_all(b"Do you want to continue? y/n\n")?;
                    output.flush()?;
                    let mut answer = String::new();
                    if input.read_line(&mut answer)? == 0 {
                        break;
                    }
                    // the original read a single char, so "yes" counts as yes
                    if !answer.trim().starts_with('y') {
                        break;
                    }
                }
            }
        }

        output.write_all(b"Thanks for playing!\n")?;
        output.flush()?;
        Ok(())
    }

    fn render_name(&self, unit: &Unit) -> String {
        match unit.accent() {
            Some(style) => self.config.theme.paint(style, unit.name()),
            None => unit.name().to_string(),
        }
    }

    fn spawn_line(&self, unit: &Unit) -> Result<BoundedString, StringError> {
        let mut line = BoundedString::with_capacity(LINE_CAPACITY);
        line.push_str(&self.render_name(unit))?;
        line.push_str(" ")?;
        line.push_str(&self.config.theme.paint(Style::Spawn, "spawned"))?;
        line.push_str(" with ")?;
        let health = format!("{} Health", unit.health());
        line.push_str(&self.config.theme.paint(Style::Health, &health))?;
        line.push_line(".")?;
        Ok(line)
    }

    fn attack_line(&self, attacker: &Unit, target: &Unit) -> Result<BoundedString, StringError> {
        let mut line = BoundedString::with_capacity(LINE_CAPACITY);
        line.push_str(&self.render_name(attacker))?;
        line.push_str(" ")?;
        line.push_str(&self.config.theme.paint(Style::Danger, "attacks"))?;
        line.push_str(" ")?;
        line.push_str(&self.render_name(target))?;
        line.push_line(".")?;
        Ok(line)
    }

    fn health_line(&self, unit: &Unit) -> Result<BoundedString, StringError> {
        let mut line = BoundedString::with_capacity(LINE_CAPACITY);
        line.push_str(&self.render_name(unit))?;
        line.push_str(" now has ")?;
        let health = format!("{} Health", unit.health());
        line.push_str(&self.config.theme.paint(Style::Health, &health))?;
        line.push_line(".")?;
        Ok(line)
    }

    fn death_line(&self, unit: &Unit) -> Result<BoundedString, StringError> {
        let mut line = BoundedString::with_capacity(LINE_CAPACITY);
        line.push_str(&self.render_name(unit))?;
        line.push_str(" ")?;
        line.push_str(&self.config.theme.paint(Style::Danger, "died"))?;
        line.push_line(".")?;
        Ok(line)
    }

    fn tally_line(&self) -> Result<BoundedString, StringError> {
        let mut line = BoundedString::with_capacity(LINE_CAPACITY);
        let tally = format!("You killed a total of {} Monsters!", self.kills);
        line.push_line(&self.config.theme.paint(Style::Tally, &tally))?;
        Ok(line)
    }
}
