//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::abilities::{ability_for, EffectCategory};
use crate::battle::BattleOutcome;
use crate::cards::{Language, Rarity};

/// Outcome of one simulated battle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BattleRecord {
    pub language: Language,
    pub rarity: Rarity,
    pub difficulty: u32,
    pub outcome: BattleOutcome,
    pub xp: u32,
    pub triggered: bool,
}

/// Win/lose/draw tallies for a group of battles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OutcomeCounts {
    pub battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub triggers: u32,
    pub total_xp: u64,
}

impl OutcomeCounts {
    pub fn record(&mut self, record: &BattleRecord) {
        self.battles += 1;
        match record.outcome {
            BattleOutcome::Win => self.wins += 1,
            BattleOutcome::Lose => self.losses += 1,
            BattleOutcome::Draw => self.draws += 1,
        }
        if record.triggered {
            self.triggers += 1;
        }
        self.total_xp += record.xp as u64;
    }

    pub fn win_rate(&self) -> f64 {
        ratio(self.wins as f64, self.battles)
    }

    pub fn draw_rate(&self) -> f64 {
        ratio(self.draws as f64, self.battles)
    }

    pub fn trigger_rate(&self) -> f64 {
        ratio(self.triggers as f64, self.battles)
    }

    pub fn avg_xp(&self) -> f64 {
        ratio(self.total_xp as f64, self.battles)
    }
}

fn ratio(part: f64, battles: u32) -> f64 {
    if battles == 0 {
        0.0
    } else {
        part / battles as f64
    }
}

/// Aggregated results from a simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub overall: OutcomeCounts,
    pub by_language: BTreeMap<Language, OutcomeCounts>,
    pub by_rarity: BTreeMap<Rarity, OutcomeCounts>,
    pub by_difficulty: BTreeMap<u32, OutcomeCounts>,
    /// Triggered battles only, counted once per category the ability carries.
    pub by_category: BTreeMap<EffectCategory, OutcomeCounts>,
}

impl SimReport {
    pub fn from_records(records: &[BattleRecord]) -> Self {
        let mut overall = OutcomeCounts::default();
        let mut by_language: BTreeMap<Language, OutcomeCounts> = BTreeMap::new();
        let mut by_rarity: BTreeMap<Rarity, OutcomeCounts> = BTreeMap::new();
        let mut by_difficulty: BTreeMap<u32, OutcomeCounts> = BTreeMap::new();
        let mut by_category: BTreeMap<EffectCategory, OutcomeCounts> = BTreeMap::new();

        for record in records {
            overall.record(record);
            by_language.entry(record.language).or_default().record(record);
            by_rarity.entry(record.rarity).or_default().record(record);
            by_difficulty.entry(record.difficulty).or_default().record(record);
            if record.triggered {
                for category in ability_for(record.language).categories() {
                    by_category.entry(category).or_default().record(record);
                }
            }
        }

        Self {
            num_runs: records.len() as u32,
            overall,
            by_language,
            by_rarity,
            by_difficulty,
            by_category,
        }
    }

    /// Languages ordered from highest to lowest win rate.
    pub fn language_ranking(&self) -> Vec<(Language, OutcomeCounts)> {
        let mut ranked: Vec<_> = self.by_language.iter().map(|(l, c)| (*l, *c)).collect();
        ranked.sort_by(|a, b| b.1.win_rate().total_cmp(&a.1.win_rate()));
        ranked
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    BATTLE SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        let o = &self.overall;
        report.push_str(&format!("Battles: {}\n\n", self.num_runs));
        report.push_str("── OVERALL ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Win Rate:      {:>5.1}%\n", o.win_rate() * 100.0));
        report.push_str(&format!("  Draw Rate:     {:>5.1}%\n", o.draw_rate() * 100.0));
        report.push_str(&format!("  Trigger Rate:  {:>5.1}%\n", o.trigger_rate() * 100.0));
        report.push_str(&format!("  Avg XP:        {:>5.2}\n\n", o.avg_xp()));

        report.push_str("── BY LANGUAGE ──────────────────────────────────────────────────\n");
        report.push_str("  Language      Battles   Win%  Draw%  Trig%  AvgXP\n");
        for (language, c) in self.language_ranking() {
            report.push_str(&format!(
                "  {:<12} {:>8} {:>6.1} {:>6.1} {:>6.1} {:>6.2}\n",
                language.name(),
                c.battles,
                c.win_rate() * 100.0,
                c.draw_rate() * 100.0,
                c.trigger_rate() * 100.0,
                c.avg_xp()
            ));
        }
        report.push('\n');

        report.push_str("── BY RARITY ────────────────────────────────────────────────────\n");
        for (rarity, c) in &self.by_rarity {
            report.push_str(&format!(
                "  {:<10} {:>8} battles  {:>5.1}% won\n",
                rarity.name(),
                c.battles,
                c.win_rate() * 100.0
            ));
        }
        report.push('\n');

        report.push_str("── BY DIFFICULTY ────────────────────────────────────────────────\n");
        for (difficulty, c) in &self.by_difficulty {
            let pct = c.win_rate() * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  D{:<3} {:>5.1}% {}\n", difficulty, pct, bar));
        }

        if !self.by_category.is_empty() {
            report.push('\n');
            report.push_str("── BY EFFECT CATEGORY (triggered) ───────────────────────────────\n");
            for (category, c) in &self.by_category {
                report.push_str(&format!(
                    "  {:<16} {:>8} battles  {:>5.1}% won  {:>6.2} avg XP\n",
                    category.name(),
                    c.battles,
                    c.win_rate() * 100.0,
                    c.avg_xp()
                ));
            }
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
