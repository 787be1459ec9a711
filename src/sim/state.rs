//! Encounter state: one map, its player, its boss and at most one battle

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::battle::{BattleSession, Verdict};
use super::boss::{Boss, BossArchetype};
use super::player::Player;
use super::rect::Rect;
use crate::map::MapSnapshot;

/// What the encounter is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    /// Free roaming; the boss floats nearby
    Exploring,
    /// Quiz battle on screen; the world is frozen
    InBattle,
    /// Boss defeated; waiting for the campaign to load the next map
    Cleared,
}

/// Where a finished battle sends the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    AdvanceMap,
    ResumeExploration,
}

impl EncounterOutcome {
    /// Route for a verdict; undecided battles have none
    pub fn from_verdict(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::Passed => Some(EncounterOutcome::AdvanceMap),
            Verdict::Failed => Some(EncounterOutcome::ResumeExploration),
            Verdict::Undecided => None,
        }
    }
}

/// Things that happened during a tick, for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BossActivated { archetype: BossArchetype },
    BattleStarted { archetype: BossArchetype },
    AnswerChecked { index: usize, correct: bool },
    BattleEnded { verdict: Verdict, correct: u32, total: usize },
    MapAdvanced { map_index: usize },
    CampaignCompleted,
}

/// Everything live on the current map
#[derive(Debug, Clone)]
pub struct Encounter {
    pub map_index: usize,
    /// Replaced wholesale on map change, never edited
    pub(crate) obstacles: Arc<[Rect]>,
    pub player: Player,
    pub boss: Boss,
    battle: Option<BattleSession>,
    pub phase: EncounterPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    /// Set when a battle finishes, cleared when read
    outcome: Option<EncounterOutcome>,
}

impl Encounter {
    /// Set up the player and boss from a loaded map
    pub fn new(map: &MapSnapshot) -> Self {
        let archetype = BossArchetype::from_index(map.index).unwrap_or(BossArchetype::SteelWard);
        Self {
            map_index: map.index,
            obstacles: Arc::clone(&map.obstacles),
            player: Player::new(map.player_spawn),
            boss: Boss::new(archetype, map.boss_spawn),
            battle: None,
            phase: EncounterPhase::Exploring,
            time_ticks: 0,
            events: Vec::new(),
            outcome: None,
        }
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn battle(&self) -> Option<&BattleSession> {
        self.battle.as_ref()
    }

    pub(crate) fn battle_mut(&mut self) -> Option<&mut BattleSession> {
        self.battle.as_mut()
    }

    pub fn in_battle(&self) -> bool {
        self.phase == EncounterPhase::InBattle
    }

    /// True while the player's box overlaps the boss's box
    pub fn player_near_boss(&self) -> bool {
        self.player.bounds().overlaps(&self.boss.bounds())
    }

    /// Open a fresh battle. Rejected unless exploring.
    pub(crate) fn begin_battle(&mut self) -> bool {
        if self.phase != EncounterPhase::Exploring || self.battle.is_some() {
            log::debug!("Ignoring battle trigger: encounter {:?}", self.phase);
            return false;
        }
        let archetype = self.boss.archetype;
        let mut session = BattleSession::for_archetype(archetype);
        if !session.start() {
            return false;
        }
        log::info!("Battle started against {}", self.boss.name());
        self.battle = Some(session);
        self.phase = EncounterPhase::InBattle;
        self.events.push(GameEvent::BattleStarted { archetype });
        true
    }

    /// Consume a completed battle and route its verdict
    pub(crate) fn end_battle(&mut self) -> Option<EncounterOutcome> {
        if !self.battle.as_ref().is_some_and(BattleSession::is_completed) {
            return None;
        }
        let session = self.battle.take()?;
        let verdict = session.verdict();
        let outcome = EncounterOutcome::from_verdict(verdict);

        self.events.push(GameEvent::BattleEnded {
            verdict,
            correct: session.correct_count(),
            total: session.total(),
        });
        self.phase = match outcome {
            Some(EncounterOutcome::AdvanceMap) => EncounterPhase::Cleared,
            _ => EncounterPhase::Exploring,
        };
        self.outcome = outcome;
        outcome
    }

    /// Read and clear the last battle outcome
    pub fn take_outcome(&mut self) -> Option<EncounterOutcome> {
        self.outcome.take()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
