use chrono::NaiveDate;
use rand::Rng;

use super::types::{PlayerProgress, UpgradeCurrency};
use crate::battle::{BattleOutcome, BattleResult};
use crate::cards::{Card, Dimension, NewCard};
use crate::core::constants::FREE_PULLS_PER_DAY;
use crate::equipment::{EquipmentEffect, EquipmentItem};
use crate::error::{GameError, Result};
use crate::gacha::generate_card;
use crate::upgrade::{apply_upgrade, can_upgrade, get_burn_materials, get_upgrade_cost};

impl PlayerProgress {
    /// Refill the daily allowances if `today` is a later UTC date than the
    /// last reset. Returns true when a reset happened.
    pub fn reset_daily_limits(&mut self, today: NaiveDate) -> bool {
        if today <= self.last_reset {
            return false;
        }
        self.free_pulls_remaining = FREE_PULLS_PER_DAY;
        self.daily_battles = 0;
        self.bonus_battles = 0;
        self.unlimited_battles = false;
        self.last_reset = today;
        tracing::info!(player = %self.id, %today, "daily limits reset");
        true
    }

    /// Spend a free pull and summon a card.
    pub fn pull_card(&mut self, rng: &mut impl Rng) -> Result<NewCard> {
        if self.free_pulls_remaining == 0 {
            return Err(GameError::NoFreePulls);
        }
        self.free_pulls_remaining -= 1;
        Ok(generate_card(&self.id, rng))
    }

    /// Count a finished battle and credit its XP.
    ///
    /// Battles past the daily allowance are marked as practice and credit
    /// nothing. Returns the XP actually credited.
    pub fn record_battle(&mut self, result: &mut BattleResult) -> u32 {
        self.daily_battles += 1;
        match result.result {
            BattleOutcome::Win => self.wins += 1,
            BattleOutcome::Lose => self.losses += 1,
            BattleOutcome::Draw => self.draws += 1,
        }

        let within_allowance = self
            .battle_allowance()
            .map_or(true, |allowance| self.daily_battles <= allowance);
        if !within_allowance {
            result.is_practice_mode = true;
            tracing::debug!(player = %self.id, battles = self.daily_battles, "practice battle, no xp");
            return 0;
        }

        self.xp += result.xp_earned as u64;
        result.xp_earned
    }

    /// Destroy a card for materials. Returns the materials gained.
    pub fn burn_card(&mut self, card: &Card) -> u32 {
        let gained = get_burn_materials(card.rarity);
        self.materials += gained;
        tracing::debug!(player = %self.id, card = %card.id, rarity = %card.rarity, gained, "card burned");
        gained
    }

    /// Pay for and apply one upgrade to `dimension`.
    pub fn upgrade_card(
        &mut self,
        card: &Card,
        dimension: Dimension,
        currency: UpgradeCurrency,
        rng: &mut impl Rng,
    ) -> Result<Card> {
        if card.is_maxed(dimension) {
            return Err(GameError::StatAtMax { dimension });
        }
        let cost = get_upgrade_cost(card.stat(dimension));

        match currency {
            UpgradeCurrency::Materials => {
                if !can_upgrade(card, dimension, self.materials, 0) {
                    return Err(GameError::InsufficientMaterials {
                        required: cost,
                        available: self.materials,
                    });
                }
                self.materials -= cost;
            }
            UpgradeCurrency::Xp => {
                if !can_upgrade(card, dimension, 0, self.xp) {
                    return Err(GameError::InsufficientXp {
                        required: cost,
                        available: self.xp,
                    });
                }
                self.xp -= cost as u64;
            }
        }

        Ok(apply_upgrade(card, dimension, rng))
    }

    /// Use up a consumable item.
    pub fn apply_consumable(&mut self, item: &EquipmentItem) -> Result<()> {
        match item.effect {
            EquipmentEffect::AddPulls { amount } => self.free_pulls_remaining += amount,
            EquipmentEffect::AddBattles { amount } => self.bonus_battles += amount,
            EquipmentEffect::UnlimitedBattles => self.unlimited_battles = true,
            _ => return Err(GameError::NotConsumable(item.id.clone())),
        }
        tracing::debug!(player = %self.id, item = %item.id, "consumable applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Language, Rarity, Stats};
    use crate::core::constants::{MAX_DAILY_BATTLES, MAX_STAT};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn card(rarity: Rarity, stats: Stats) -> Card {
        NewCard {
            player_id: "p1".to_string(),
            language: Language::Elixir,
            rarity,
            stats,
            nft_mint_address: None,
        }
        .mint()
    }

    #[test]
    fn test_reset_only_on_new_day() {
        let mut p = PlayerProgress::new("p1", day(1));
        p.free_pulls_remaining = 0;
        p.daily_battles = 7;
        assert!(!p.reset_daily_limits(day(1)));
        assert_eq!(p.free_pulls_remaining, 0);
        assert!(p.reset_daily_limits(day(2)));
        assert_eq!(p.free_pulls_remaining, FREE_PULLS_PER_DAY);
        assert_eq!(p.daily_battles, 0);
        assert_eq!(p.last_reset, day(2));
    }

    #[test]
    fn test_pull_exhaustion() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut p = PlayerProgress::new("p1", day(1));
        for _ in 0..FREE_PULLS_PER_DAY {
            let c = p.pull_card(&mut rng).unwrap();
            assert_eq!(c.player_id, "p1");
        }
        assert_eq!(p.pull_card(&mut rng), Err(GameError::NoFreePulls));
    }

    #[test]
    fn test_burn_adds_materials() {
        let mut p = PlayerProgress::new("p1", day(1));
        assert_eq!(p.burn_card(&card(Rarity::Legendary, Stats::uniform(5))), 25);
        assert_eq!(p.burn_card(&card(Rarity::Common, Stats::uniform(5))), 1);
        assert_eq!(p.materials, 26);
    }

    #[test]
    fn test_upgrade_spends_chosen_currency() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut p = PlayerProgress::new("p1", day(1));
        p.materials = 10;
        p.xp = 10;
        let c = card(Rarity::Common, Stats::uniform(20)); // cost 3

        let up = p
            .upgrade_card(&c, Dimension::Speed, UpgradeCurrency::Materials, &mut rng)
            .unwrap();
        assert!(up.stats.speed > 20);
        assert_eq!((p.materials, p.xp), (7, 10));

        p.upgrade_card(&c, Dimension::Speed, UpgradeCurrency::Xp, &mut rng)
            .unwrap();
        assert_eq!((p.materials, p.xp), (7, 7));
    }

    #[test]
    fn test_upgrade_errors() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut p = PlayerProgress::new("p1", day(1));
        let c = card(Rarity::Common, Stats::new(MAX_STAT, 50, 1, 1, 1));
        p.materials = 1_000;
        assert_eq!(
            p.upgrade_card(&c, Dimension::Speed, UpgradeCurrency::Materials, &mut rng),
            Err(GameError::StatAtMax {
                dimension: Dimension::Speed
            })
        );
        p.materials = 5;
        assert_eq!(
            p.upgrade_card(&c, Dimension::Security, UpgradeCurrency::Materials, &mut rng),
            Err(GameError::InsufficientMaterials {
                required: 6,
                available: 5
            })
        );
        assert_eq!(
            p.upgrade_card(&c, Dimension::Security, UpgradeCurrency::Xp, &mut rng),
            Err(GameError::InsufficientXp {
                required: 6,
                available: 0
            })
        );
        assert_eq!(p.materials, 5);
    }

    #[test]
    fn test_consumables() {
        let mut p = PlayerProgress::new("p1", day(1));
        p.apply_consumable(&EquipmentItem::new("a", "A", "", EquipmentEffect::AddPulls { amount: 3 }))
            .unwrap();
        assert_eq!(p.free_pulls_remaining, FREE_PULLS_PER_DAY + 3);
        p.apply_consumable(&EquipmentItem::new("b", "B", "", EquipmentEffect::AddBattles { amount: 5 }))
            .unwrap();
        assert_eq!(p.battles_remaining(), Some(MAX_DAILY_BATTLES + 5));
        p.apply_consumable(&EquipmentItem::new("c", "C", "", EquipmentEffect::UnlimitedBattles))
            .unwrap();
        assert!(p.unlimited_battles);

        let boost = EquipmentItem::new("x", "X", "", EquipmentEffect::XpBonus { percent: 10 });
        assert_eq!(
            p.apply_consumable(&boost),
            Err(GameError::NotConsumable("x".to_string()))
        );
    }
}
