// Stat bounds
pub const MAX_STAT: u32 = 1000;
pub const BASE_STAT_MIN: u32 = 1;
pub const BASE_STAT_MAX: u32 = 10;

// Gacha
pub const FREE_PULLS_PER_DAY: u32 = 3;
pub const STAT_JITTER_LOW: f64 = 0.8;
pub const STAT_JITTER_HIGH: f64 = 1.2;

// Upgrades
pub const UPGRADE_COST_STEP: u32 = 10; // +1 material per 10 points of current stat
pub const UPGRADE_INCREMENT_MIN: u32 = 1;
pub const UPGRADE_INCREMENT_MAX: u32 = 3;

// Battle setup
pub const BATTLE_DIMENSIONS_COUNT: usize = 3;
pub const AI_DIFFICULTY_SCALE: f64 = 1.5;
pub const AI_STAT_FLOOR: u32 = 1;
pub const MIN_DIFFICULTY: u32 = 1;
pub const MAX_DIFFICULTY: u32 = 10;

// Abilities
pub const ABILITY_TRIGGER_CHANCE: f64 = 0.30;
pub const MAX_TRIGGER_CHANCE: f64 = 0.95;

// Equipment
pub const MAX_OPPONENT_DAMPEN_PERCENT: u32 = 50;

// Scoring and rewards
pub const ROUND_WIN_POINTS: f64 = 1.0;
pub const ROUND_TIE_POINTS: f64 = 0.5;
pub const WIN_XP_BASE: u32 = 10;
pub const WIN_XP_SPREAD: u32 = 5; // win XP is WIN_XP_BASE + [0, WIN_XP_SPREAD)
pub const DRAW_XP: u32 = 3;
pub const LOSE_XP: u32 = 0;

// Daily allowances
pub const MAX_DAILY_BATTLES: u32 = 10;
pub const MIN_BATTLES_FOR_WINRATE: u32 = 10;
