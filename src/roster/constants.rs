//! Roster constants - every per-character number in one place
//!
//! Probabilities are compared against `uniform_float()`; whether a check
//! is `<=` or `<` is part of each character's rules, not of the constant.

// Shared
pub const BASE_HEALTH: i32 = 100;

// Kiana
pub const KIANA_DEFENSE: i32 = 11;
pub const KIANA_ATTACK: i32 = 24;
pub const KIANA_SPEED: i32 = 23;
pub const KIANA_CADENCE: u32 = 2;
/// `<=` check: self-stun after the spear throw
pub const KIANA_STUN_CHANCE: f32 = 0.35;
pub const KIANA_STUN_TURNS: u32 = 1;

// Mei
pub const MEI_DEFENSE: i32 = 12;
pub const MEI_ATTACK: i32 = 22;
pub const MEI_SPEED: i32 = 30;
pub const MEI_CADENCE: u32 = 2;
pub const MEI_BURST_HITS: u32 = 5;
pub const MEI_BURST_DAMAGE: i32 = 3;
/// `<=` check: silence the opponent after a basic attack
pub const MEI_SILENCE_CHANCE: f32 = 0.3;
pub const MEI_SILENCE_TURNS: u32 = 1;

// Bronya
pub const BRONYA_DEFENSE: i32 = 10;
pub const BRONYA_ATTACK: i32 = 21;
pub const BRONYA_SPEED: i32 = 20;
pub const BRONYA_CADENCE: u32 = 3;
pub const BRONYA_SPECIAL_MIN: i32 = 1;
pub const BRONYA_SPECIAL_MAX: i32 = 100;
/// `<` check: bonus volley after a basic attack
pub const BRONYA_VOLLEY_CHANCE: f32 = 0.25;
pub const BRONYA_VOLLEY_HITS: u32 = 4;
pub const BRONYA_VOLLEY_ATTACK: i32 = 12;

// Himeko
pub const HIMEKO_DEFENSE: i32 = 9;
pub const HIMEKO_ATTACK: i32 = 23;
pub const HIMEKO_SPEED: i32 = 12;
pub const HIMEKO_CADENCE: u32 = 2;
pub const HIMEKO_ATTACK_FACTOR: i32 = 2;
pub const HIMEKO_HIT_RATE_PENALTY: f32 = 0.35;
pub const HIMEKO_GROUP_MULTIPLIER: i32 = 2;

// Rita
pub const RITA_DEFENSE: i32 = 11;
pub const RITA_ATTACK: i32 = 26;
pub const RITA_SPEED: i32 = 17;
pub const RITA_CADENCE: u32 = 4;
pub const RITA_OPPONENT_HEAL: i32 = 4;
pub const RITA_CHARM_TURNS: u32 = 2;
/// Fraction of incoming damage Rita still takes once her charm has fired
pub const RITA_DAMAGE_TAKEN: f32 = 0.4;
/// `<` check: weaken the opponent's attack
pub const RITA_WEAKEN_CHANCE: f32 = 0.35;
pub const RITA_WEAKEN_SELF_PENALTY: i32 = 3;
pub const RITA_WEAKEN_OPPONENT_ATTACK: i32 = 4;

// Sakura & Kallen
pub const SAKURA_DEFENSE: i32 = 9;
pub const SAKURA_ATTACK: i32 = 20;
pub const SAKURA_SPEED: i32 = 18;
pub const SAKURA_CADENCE: u32 = 2;
/// `<=` check: heal at the start of the turn
pub const SAKURA_HEAL_CHANCE: f32 = 0.3;
pub const SAKURA_HEAL: i32 = 25;
pub const SAKURA_SPECIAL_DAMAGE: i32 = 25;

// Corvus
pub const CORVUS_DEFENSE: i32 = 14;
pub const CORVUS_ATTACK: i32 = 23;
pub const CORVUS_SPEED: i32 = 14;
pub const CORVUS_CADENCE: u32 = 3;
/// `<=` check: damage boost against anyone but Kiana
pub const CORVUS_BOOST_CHANCE: f32 = 0.25;
pub const CORVUS_BOOST_MULTIPLIER: f32 = 1.25;
pub const CORVUS_BURST_HITS: u32 = 7;
pub const CORVUS_BURST_ATTACK: i32 = 16;

// Theresa
pub const THERESA_DEFENSE: i32 = 12;
pub const THERESA_ATTACK: i32 = 19;
pub const THERESA_SPEED: i32 = 22;
pub const THERESA_CADENCE: u32 = 3;
pub const THERESA_BURST_HITS: u32 = 5;
pub const THERESA_BURST_ATTACK: i32 = 16;
/// `<=` check: shred the opponent's defense after a basic attack
pub const THERESA_SHRED_CHANCE: f32 = 0.3;
pub const THERESA_SHRED_DEFENSE: i32 = 5;

// Rozaliya & Liliya
pub const OLENYEVA_DEFENSE: i32 = 10;
pub const OLENYEVA_ATTACK: i32 = 18;
pub const OLENYEVA_SPEED: i32 = 10;
pub const OLENYEVA_REVIVALS: u32 = 1;
pub const OLENYEVA_REVIVE_HEALTH: i32 = 20;
/// `<=` check: big or small aftershock
pub const OLENYEVA_AFTERSHOCK_CHANCE: f32 = 0.5;
pub const OLENYEVA_AFTERSHOCK_BIG: i32 = 233;
pub const OLENYEVA_AFTERSHOCK_SMALL: i32 = 50;

// Seele
pub const SEELE_DEFENSE: i32 = 13;
pub const SEELE_ATTACK: i32 = 23;
pub const SEELE_SPEED: i32 = 26;
pub const SEELE_STANCE_DEFENSE: i32 = 5;
pub const SEELE_STANCE_ATTACK: i32 = 10;
pub const SEELE_HEAL_MIN: i32 = 1;
pub const SEELE_HEAL_MAX: i32 = 15;

// Durandal
pub const DURANDAL_DEFENSE: i32 = 10;
pub const DURANDAL_ATTACK: i32 = 19;
pub const DURANDAL_SPEED: i32 = 15;
pub const DURANDAL_ATTACK_GROWTH: i32 = 3;
/// `<` check: counter an incoming special
pub const DURANDAL_COUNTER_CHANCE: f32 = 0.16;
pub const DURANDAL_COUNTER_DAMAGE: i32 = 30;

// Fu Hua
pub const FU_HUA_DEFENSE: i32 = 15;
pub const FU_HUA_ATTACK: i32 = 17;
pub const FU_HUA_SPEED: i32 = 16;
pub const FU_HUA_CADENCE: u32 = 3;
pub const FU_HUA_SPECIAL_DAMAGE: i32 = 18;
pub const FU_HUA_HIT_RATE_PENALTY: f32 = 0.25;
