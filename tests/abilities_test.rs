//! End-to-end ability tests: each battle is resolved with the trigger forced
//! on (and sometimes off) so the effect shows up in the recorded rounds.

use codecards::abilities::ability_for;
use codecards::battle::{Battle, BattleOutcome, RoundWinner};
use codecards::cards::{Card, Dimension, Language, NewCard, Rarity, Stats};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use Dimension::*;

fn card(language: Language, stats: Stats) -> Card {
    NewCard {
        player_id: "player-1".to_string(),
        language,
        rarity: Rarity::Common,
        stats,
        nft_mint_address: None,
    }
    .mint()
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

// =========================================================================
// Reporting
// =========================================================================

#[test]
fn test_forced_trigger_reports_own_ability() {
    let mut rng = rng();
    for language in Language::ALL {
        let c = card(language, Stats::uniform(10));
        let result = Battle::new(&c, Stats::uniform(10), [Speed, Security, Ecosystem])
            .force_trigger(true)
            .resolve(&mut rng);
        let report = result.ability_triggered.expect("trigger reported");
        assert_eq!(report.ability_name, ability_for(language).name);
        assert_eq!(report.description, ability_for(language).triggered_description);
    }
}

// =========================================================================
// Round-shaping abilities
// =========================================================================

#[test]
fn test_assembly_doubles_speed_when_ahead() {
    // Passive 10 -> 12 beats 11, then doubles
    let c = card(Language::Assembly, Stats::uniform(10));
    let ai = Stats::new(11, 10, 10, 10, 10);
    let result = Battle::new(&c, ai, [Speed, Security, Ecosystem])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].player_value, 24);
    assert_eq!(result.rounds[0].ai_value, 11);
    assert_eq!(result.rounds[0].winner, RoundWinner::Player);
}

#[test]
fn test_c_forgives_closest_loss() {
    let c = card(Language::C, Stats::uniform(10));
    let ai = Stats::new(10, 12, 20, 10, 5);
    let dims = [Security, Ecosystem, DevExp];

    let triggered = Battle::new(&c, ai, dims).force_trigger(true).resolve(&mut rng());
    assert_eq!(triggered.result, BattleOutcome::Draw);
    assert_eq!(triggered.rounds[0].winner, RoundWinner::Tie);
    assert_eq!(triggered.rounds[1].winner, RoundWinner::Ai);

    let quiet = Battle::new(&c, ai, dims).force_trigger(false).resolve(&mut rng());
    assert_eq!(quiet.result, BattleOutcome::Lose);
}

#[test]
fn test_rust_debuffs_round_after_security_win() {
    // Security 50 -> 57 with passive, beats 40
    let c = card(Language::Rust, Stats::new(10, 50, 10, 10, 10));
    let ai = Stats::new(10, 40, 10, 10, 10);
    let result = Battle::new(&c, ai, [Security, Speed, Ecosystem])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].winner, RoundWinner::Player);
    assert_eq!(result.rounds[1].ai_value, 9);
    assert_eq!(result.rounds[2].ai_value, 10);
    assert_eq!(result.result, BattleOutcome::Win);
}

#[test]
fn test_java_turns_ties_into_wins() {
    let c = card(Language::Java, Stats::uniform(10));
    let dims = [Speed, Security, DevExp];

    let triggered = Battle::new(&c, Stats::uniform(10), dims)
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(triggered.result, BattleOutcome::Win);
    assert!(triggered.rounds.iter().all(|r| r.winner == RoundWinner::Player));

    let quiet = Battle::new(&c, Stats::uniform(10), dims)
        .force_trigger(false)
        .resolve(&mut rng());
    assert_eq!(quiet.result, BattleOutcome::Draw);
}

#[test]
fn test_go_chains_after_scalability_win() {
    // Scalability 20 -> 23 with passive, beats 10
    let c = card(Language::Go, Stats::new(100, 100, 10, 20, 10));
    let result = Battle::new(&c, Stats::uniform(10), [Scalability, Speed, Security])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].winner, RoundWinner::Player);
    assert_eq!(result.rounds[1].player_value, 105);
    assert_eq!(result.rounds[2].player_value, 105);
}

#[test]
fn test_javascript_drags_lowest_stat_into_contest() {
    let c = card(Language::JavaScript, Stats::uniform(10));
    let ai = Stats::new(50, 60, 70, 80, 2);
    let result = Battle::new(&c, ai, [Speed, Security, Ecosystem])
        .force_trigger(true)
        .resolve(&mut rng());
    let twos = result.rounds.iter().filter(|r| r.ai_value == 2).count();
    assert_eq!(twos, 1);
    assert_eq!(result.ai_stats, ai);
}

#[test]
fn test_python_siphons_into_weakest_stat() {
    // DevExp 5 -> 6 with passive, then +10% of the opponent's 100
    let c = card(Language::Python, Stats::new(20, 20, 20, 20, 5));
    let ai = Stats::new(10, 10, 100, 10, 12);
    let result = Battle::new(&c, ai, [DevExp, Speed, Security])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].player_value, 16);
    assert_eq!(result.rounds[0].ai_value, 12);
    assert_eq!(result.rounds[0].winner, RoundWinner::Player);
}

// =========================================================================
// Combined effects
// =========================================================================

#[test]
fn test_cplusplus_boosts_strongest_and_debuffs_speed() {
    // Speed 10 -> 11 with passive, security 40 is strongest contested
    let c = card(Language::CPlusPlus, Stats::new(10, 40, 20, 10, 30));
    let ai = Stats::new(30, 45, 25, 10, 10);
    let dims = [Speed, Security, Ecosystem];

    let result = Battle::new(&c, ai, dims).force_trigger(true).resolve(&mut rng());
    assert_eq!((result.rounds[0].player_value, result.rounds[0].ai_value), (11, 27));
    assert_eq!((result.rounds[1].player_value, result.rounds[1].ai_value), (46, 45));
    assert_eq!(result.rounds[1].winner, RoundWinner::Player);
    assert_eq!((result.rounds[2].player_value, result.rounds[2].ai_value), (20, 25));
    assert_eq!(result.ai_stats, ai);

    let quiet = Battle::new(&c, ai, dims).force_trigger(false).resolve(&mut rng());
    assert_eq!((quiet.rounds[0].player_value, quiet.rounds[0].ai_value), (11, 30));
    assert_eq!(quiet.rounds[1].winner, RoundWinner::Ai);
}

#[test]
fn test_scala_boosts_scalability_then_carries_momentum() {
    // Scalability 100 -> 110 passive -> 121 boost
    let c = card(Language::Scala, Stats::new(40, 20, 10, 100, 10));
    let ai = Stats::new(41, 30, 10, 50, 10);
    let result = Battle::new(&c, ai, [Scalability, Speed, Security])
        .force_trigger(true)
        .resolve(&mut rng());

    assert_eq!(result.rounds[0].player_value, 121);
    assert_eq!(result.rounds[1].player_value, 42);
    assert_eq!(result.rounds[1].winner, RoundWinner::Player);
    assert_eq!(result.rounds[2].player_value, 21);
    assert_eq!(result.rounds[2].winner, RoundWinner::Ai);
    assert_eq!(result.result, BattleOutcome::Win);
}

// =========================================================================
// Round-start abilities
// =========================================================================

#[test]
fn test_round_boost_hits_only_its_round() {
    let c = card(Language::Cobol, Stats::uniform(50));
    let result = Battle::new(&c, Stats::uniform(55), [Speed, Ecosystem, DevExp])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].player_value, 50);
    assert_eq!(result.rounds[1].player_value, 50);
    assert_eq!(result.rounds[2].player_value, 60);
    assert_eq!(result.rounds[2].winner, RoundWinner::Player);

    let c = card(Language::Delphi, Stats::uniform(40));
    let result = Battle::new(&c, Stats::uniform(45), [Speed, Security, Ecosystem])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].player_value, 50);
    assert_eq!(result.rounds[0].winner, RoundWinner::Player);
    assert_eq!(result.rounds[1].player_value, 40);
}

#[test]
fn test_csharp_momentum_follows_won_rounds() {
    let c = card(Language::CSharp, Stats::uniform(50));
    let ai = Stats::new(40, 52, 10, 10, 60);
    let result = Battle::new(&c, ai, [Speed, Security, DevExp])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].player_value, 50);
    assert_eq!(result.rounds[1].player_value, 54);
    assert_eq!(result.rounds[1].winner, RoundWinner::Player);
    assert_eq!(result.rounds[2].player_value, 54);
    assert_eq!(result.rounds[2].winner, RoundWinner::Ai);
}

#[test]
fn test_elixir_comeback_follows_lost_round() {
    let c = card(Language::Elixir, Stats::uniform(40));
    let ai = Stats::new(50, 45, 30, 10, 10);
    let result = Battle::new(&c, ai, [Speed, Security, Ecosystem])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].winner, RoundWinner::Ai);
    assert_eq!(result.rounds[1].player_value, 46);
    assert_eq!(result.rounds[1].winner, RoundWinner::Player);
    assert_eq!(result.rounds[2].player_value, 40);
}

// =========================================================================
// Post-round abilities
// =========================================================================

#[test]
fn test_dart_replays_first_loss_only() {
    let c = card(Language::Dart, Stats::new(50, 50, 50, 10, 10));
    let ai = Stats::new(52, 60, 40, 10, 10);
    let dims = [Speed, Security, Ecosystem];

    let result = Battle::new(&c, ai, dims).force_trigger(true).resolve(&mut rng());
    assert_eq!(result.rounds[0].player_value, 55);
    assert_eq!(result.rounds[0].winner, RoundWinner::Player);
    assert_eq!(result.rounds[1].player_value, 50);
    assert_eq!(result.rounds[1].winner, RoundWinner::Ai);
    assert_eq!(result.result, BattleOutcome::Win);

    let quiet = Battle::new(&c, ai, dims).force_trigger(false).resolve(&mut rng());
    assert_eq!(quiet.result, BattleOutcome::Lose);
}

#[test]
fn test_erlang_ties_losses_within_margin() {
    // 5 short of 55 is inside 10%, 6 short of 56 is not
    let c = card(Language::Erlang, Stats::uniform(50));
    let ai = Stats::new(55, 56, 40, 10, 10);
    let dims = [Speed, Security, Ecosystem];

    let result = Battle::new(&c, ai, dims).force_trigger(true).resolve(&mut rng());
    assert_eq!(result.rounds[0].winner, RoundWinner::Tie);
    assert_eq!(result.rounds[1].winner, RoundWinner::Ai);
    assert_eq!((result.rounds[0].player_value, result.rounds[0].ai_value), (50, 55));
    assert_eq!(result.result, BattleOutcome::Draw);

    let quiet = Battle::new(&c, ai, dims).force_trigger(false).resolve(&mut rng());
    assert_eq!(quiet.result, BattleOutcome::Lose);
}

#[test]
fn test_kotlin_forgives_first_loss_not_closest() {
    let c = card(Language::Kotlin, Stats::uniform(10));
    let ai = Stats::new(20, 12, 5, 10, 10);
    let result = Battle::new(&c, ai, [Speed, Security, Ecosystem])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].winner, RoundWinner::Tie);
    assert_eq!(result.rounds[1].winner, RoundWinner::Ai);
    assert_eq!(result.result, BattleOutcome::Draw);
}

// =========================================================================
// Stat-moving abilities
// =========================================================================

#[test]
fn test_lua_steals_from_strongest_contested() {
    let c = card(Language::Lua, Stats::uniform(20));
    let ai = Stats::new(10, 100, 50, 999, 30);
    let result = Battle::new(&c, ai, [Security, Ecosystem, DevExp])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!((result.rounds[0].player_value, result.rounds[0].ai_value), (30, 90));
    assert_eq!(result.rounds[1].ai_value, 50);
    assert_eq!(result.ai_stats, ai);
}

#[test]
fn test_perl_scrambles_only_contested_values() {
    let c = card(Language::Perl, Stats::uniform(1));
    let ai = Stats::new(10, 20, 5, 5, 30);
    let result = Battle::new(&c, ai, [Speed, Security, DevExp])
        .force_trigger(true)
        .resolve(&mut rng());
    let mut contested: Vec<u32> = result.rounds.iter().map(|r| r.ai_value).collect();
    contested.sort_unstable();
    assert_eq!(contested, vec![10, 20, 30]);
    assert_eq!(result.ai_stats, ai);
}

#[test]
fn test_r_flattens_peak_to_contested_mean() {
    let c = card(Language::R, Stats::uniform(30));
    let ai = Stats::new(10, 20, 1, 1, 90);
    let result = Battle::new(&c, ai, [Speed, Security, DevExp])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.rounds[0].ai_value, 10);
    assert_eq!(result.rounds[1].ai_value, 20);
    assert_eq!(result.rounds[2].ai_value, 40);
}

#[test]
fn test_ruby_borrows_into_weakest_contested() {
    let c = card(Language::Ruby, Stats::new(10, 40, 40, 1, 1));
    let ai = Stats::new(30, 35, 35, 1, 1);
    let result = Battle::new(&c, ai, [Speed, Security, Ecosystem])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!((result.rounds[0].player_value, result.rounds[0].ai_value), (25, 30));
    assert_eq!(result.rounds[1].player_value, 40);
}

#[test]
fn test_haskell_trades_weakest_contested() {
    let c = card(Language::Haskell, Stats::new(5, 1, 30, 1, 30));
    let ai = Stats::new(40, 1, 10, 1, 10);
    let result = Battle::new(&c, ai, [Speed, Ecosystem, DevExp])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!((result.rounds[0].player_value, result.rounds[0].ai_value), (40, 5));
    assert_eq!(result.rounds[0].winner, RoundWinner::Player);
    assert_eq!(result.result, BattleOutcome::Win);
}

#[test]
fn test_matlab_boosts_every_contested_stat() {
    let c = card(Language::Matlab, Stats::uniform(50));
    let result = Battle::new(&c, Stats::uniform(52), [Speed, Security, DevExp])
        .force_trigger(true)
        .resolve(&mut rng());
    assert!(result.rounds.iter().all(|r| r.player_value == 55));
    assert_eq!(result.result, BattleOutcome::Win);
}

// =========================================================================
// Reward abilities
// =========================================================================

#[test]
fn test_solidity_doubles_win_xp() {
    let mut rng = rng();
    let c = card(Language::Solidity, Stats::uniform(50));
    for _ in 0..50 {
        let result = Battle::new(&c, Stats::uniform(1), [Speed, Security, Ecosystem])
            .force_trigger(true)
            .resolve(&mut rng);
        assert_eq!(result.result, BattleOutcome::Win);
        assert!((20..=28).contains(&result.xp_earned), "xp {}", result.xp_earned);
        assert_eq!(result.xp_earned % 2, 0);
    }
}

#[test]
fn test_sql_pays_consolation_on_loss() {
    let c = card(Language::Sql, Stats::uniform(1));
    let result = Battle::new(&c, Stats::uniform(100), [Speed, Security, Ecosystem])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.result, BattleOutcome::Lose);
    assert_eq!(result.xp_earned, 5);
}

#[test]
fn test_php_bonus_on_draw() {
    let c = card(Language::Php, Stats::uniform(10));
    let result = Battle::new(&c, Stats::uniform(10), [Speed, Security, DevExp])
        .force_trigger(true)
        .resolve(&mut rng());
    assert_eq!(result.result, BattleOutcome::Draw);
    assert_eq!(result.xp_earned, 8);
}
