//! Fixed timestep simulation tick
//!
//! Advances one encounter by one step. Within a tick the player moves and is
//! pushed out of obstacles before the boss proximity check runs.

use std::sync::Arc;

use super::state::{Encounter, EncounterPhase, GameEvent};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Horizontal axis in [-1, 1], +1 is right
    pub horizontal: f32,
    /// Vertical axis in [-1, 1], +1 is up
    pub vertical: f32,
    /// Battle trigger pressed this tick (space / tap)
    pub trigger_battle: bool,
    /// Answer choice selected this tick
    pub answer: Option<usize>,
    /// "Next question" / "Continue" pressed this tick
    pub advance: bool,
}

impl TickInput {
    /// True if any one-shot command is set
    pub fn has_commands(&self) -> bool {
        self.trigger_battle || self.answer.is_some() || self.advance
    }

    /// Drop one-shot commands, keep held axes
    pub fn clear_commands(&mut self) {
        self.trigger_battle = false;
        self.answer = None;
        self.advance = false;
    }
}

/// Advance the encounter by one fixed timestep
pub fn tick(enc: &mut Encounter, input: &TickInput, dt: f32) {
    enc.time_ticks += 1;

    match enc.phase {
        EncounterPhase::Exploring => {
            let obstacles = Arc::clone(&enc.obstacles);
            enc.player.step(dt, input.horizontal, input.vertical, &obstacles);

            if enc.boss.update(dt) {
                enc.events.push(GameEvent::BossActivated {
                    archetype: enc.boss.archetype,
                });
            }

            // Allowed while the boss is still spawning
            if input.trigger_battle {
                if enc.player_near_boss() {
                    enc.begin_battle();
                } else {
                    log::debug!("Ignoring battle trigger: boss out of reach");
                }
            }
        }

        EncounterPhase::InBattle => {
            if input.trigger_battle {
                log::debug!("Ignoring battle trigger: battle already running");
            }

            let mut checked = None;
            if let Some(battle) = enc.battle_mut() {
                if let Some(choice) = input.answer {
                    let index = battle.index();
                    if let Some(feedback) = battle.answer(choice) {
                        checked = Some(GameEvent::AnswerChecked {
                            index,
                            correct: feedback.is_correct(),
                        });
                    }
                }
                if input.advance {
                    battle.advance();
                }
                battle.update(dt);
            }
            if let Some(event) = checked {
                enc.events.push(event);
            }

            enc.end_battle();
        }

        EncounterPhase::Cleared => {}
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::SIM_DT;
    use crate::map::MapSnapshot;
    use crate::sim::battle::Verdict;
    use crate::sim::boss::BossArchetype;
    use crate::sim::rect::Rect;
    use crate::sim::state::EncounterOutcome;

    /// Player at (100, 100) standing inside the boss's box
    fn encounter_near_boss() -> Encounter {
        let map = MapSnapshot::new(
            0,
            Vec2::new(100.0, 100.0),
            Vec2::new(110.0, 90.0),
            Vec::new(),
        );
        Encounter::new(&map)
    }

    fn trigger() -> TickInput {
        TickInput {
            trigger_battle: true,
            ..Default::default()
        }
    }

    fn answer(choice: usize) -> TickInput {
        TickInput {
            answer: Some(choice),
            advance: true,
            ..Default::default()
        }
    }

    /// Answer every question, correct for `true`
    fn run_battle(enc: &mut Encounter, pattern: &[bool]) {
        for &right in pattern {
            let correct = enc.battle().unwrap().current_question().unwrap().correct_index();
            let choice = if right { correct } else { (correct + 1) % 4 };
            tick(enc, &answer(choice), SIM_DT);
        }
    }

    #[test]
    fn test_trigger_near_boss_starts_battle() {
        let mut enc = encounter_near_boss();
        assert!(enc.player_near_boss());
        tick(&mut enc, &trigger(), SIM_DT);
        assert_eq!(enc.phase, EncounterPhase::InBattle);
        assert_eq!(enc.battle().unwrap().index(), 0);
        assert!(enc.events.contains(&GameEvent::BattleStarted {
            archetype: BossArchetype::SteelWard
        }));
    }

    #[test]
    fn test_trigger_allowed_while_boss_spawning() {
        let mut enc = encounter_near_boss();
        tick(&mut enc, &trigger(), SIM_DT);
        assert!(enc.boss.is_spawning());
        assert!(enc.in_battle());
    }

    #[test]
    fn test_trigger_far_from_boss_ignored() {
        let map = MapSnapshot::new(0, Vec2::new(0.0, 0.0), Vec2::new(500.0, 500.0), Vec::new());
        let mut enc = Encounter::new(&map);
        tick(&mut enc, &trigger(), SIM_DT);
        assert_eq!(enc.phase, EncounterPhase::Exploring);
        assert!(enc.battle().is_none());
    }

    #[test]
    fn test_second_trigger_keeps_session() {
        let mut enc = encounter_near_boss();
        tick(&mut enc, &trigger(), SIM_DT);
        tick(&mut enc, &answer(0), SIM_DT);
        let before = enc.battle().unwrap().clone();

        tick(&mut enc, &trigger(), SIM_DT);
        let after = enc.battle().unwrap();
        assert_eq!(after.index(), before.index());
        assert_eq!(after.correct_count(), before.correct_count());
    }

    #[test]
    fn test_passed_battle_clears_map() {
        let mut enc = encounter_near_boss();
        tick(&mut enc, &trigger(), SIM_DT);
        run_battle(&mut enc, &[true, true, true, false, false]);

        assert_eq!(enc.phase, EncounterPhase::Cleared);
        assert!(enc.battle().is_none());
        assert_eq!(enc.take_outcome(), Some(EncounterOutcome::AdvanceMap));
        assert_eq!(enc.take_outcome(), None);
        assert!(enc.events.contains(&GameEvent::BattleEnded {
            verdict: Verdict::Passed,
            correct: 3,
            total: 5
        }));

        // Cleared encounters ignore further input
        let pos = enc.player.pos;
        tick(
            &mut enc,
            &TickInput {
                horizontal: 1.0,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(enc.player.pos, pos);
    }

    #[test]
    fn test_failed_battle_resumes_exploration() {
        let mut enc = encounter_near_boss();
        tick(&mut enc, &trigger(), SIM_DT);
        run_battle(&mut enc, &[true, true, false, false, false]);

        assert_eq!(enc.phase, EncounterPhase::Exploring);
        assert_eq!(enc.take_outcome(), Some(EncounterOutcome::ResumeExploration));
        assert_eq!(enc.boss.archetype, BossArchetype::SteelWard);

        // A new trigger opens a fresh session
        tick(&mut enc, &trigger(), SIM_DT);
        let battle = enc.battle().unwrap();
        assert_eq!(battle.index(), 0);
        assert_eq!(battle.correct_count(), 0);
    }

    #[test]
    fn test_answer_events_emitted() {
        let mut enc = encounter_near_boss();
        tick(&mut enc, &trigger(), SIM_DT);
        enc.drain_events();
        tick(&mut enc, &answer(0), SIM_DT);
        assert_eq!(
            enc.drain_events(),
            vec![GameEvent::AnswerChecked {
                index: 0,
                correct: true
            }]
        );
    }

    #[test]
    fn test_world_frozen_during_battle() {
        let mut enc = encounter_near_boss();
        tick(&mut enc, &trigger(), SIM_DT);
        let player = enc.player.pos;
        let boss = enc.boss.pos;
        let input = TickInput {
            horizontal: 1.0,
            vertical: 1.0,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut enc, &input, SIM_DT);
        }
        assert_eq!(enc.player.pos, player);
        assert_eq!(enc.boss.pos, boss);
    }

    #[test]
    fn test_trigger_sees_post_collision_position() {
        // The wall keeps the player out of the boss's box
        let wall = Rect::new(28.0, 0.0, 20.0, 400.0);
        let map = MapSnapshot::new(0, Vec2::new(0.0, 100.0), Vec2::new(30.0, 100.0), vec![wall]);
        let mut enc = Encounter::new(&map);
        let input = TickInput {
            horizontal: 1.0,
            trigger_battle: true,
            ..Default::default()
        };
        tick(&mut enc, &input, 0.1);
        assert_eq!(enc.player.pos, Vec2::new(0.0, 100.0));
        assert!(!enc.player_near_boss());
        assert_eq!(enc.phase, EncounterPhase::Exploring);
    }

    #[test]
    fn test_boss_activation_event() {
        let map = MapSnapshot::new(1, Vec2::ZERO, Vec2::new(300.0, 300.0), Vec::new());
        let mut enc = Encounter::new(&map);
        for _ in 0..91 {
            tick(&mut enc, &TickInput::default(), SIM_DT);
        }
        assert!(!enc.boss.is_spawning());
        let activations = enc
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BossActivated { .. }))
            .count();
        assert_eq!(activations, 1);
    }

    #[test]
    fn test_clear_commands_keeps_axes() {
        let mut input = TickInput {
            horizontal: -1.0,
            trigger_battle: true,
            answer: Some(2),
            advance: true,
            ..Default::default()
        };
        assert!(input.has_commands());
        input.clear_commands();
        assert!(!input.has_commands());
        assert_eq!(input.horizontal, -1.0);
    }
}
