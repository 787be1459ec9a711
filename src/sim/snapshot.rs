//! Read-only views of the encounter for the presentation layer
//!
//! Built fresh each frame; nothing here borrows simulation state.

use glam::Vec2;
use serde::Serialize;

use super::battle::{BattleState, Verdict};
use super::boss::BossPhase;
use super::player::Direction;
use super::rect::Rect;
use super::state::{Encounter, EncounterPhase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub direction: Direction,
    pub moving: bool,
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BossView {
    pub name: &'static str,
    pub description: &'static str,
    pub sprite: &'static str,
    pub pos: Vec2,
    pub size: Vec2,
    pub phase: BossPhase,
    pub spawn_progress: f32,
    pub scale: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleView {
    pub background: &'static str,
    pub state: BattleState,
    pub index: usize,
    pub total: usize,
    pub correct_count: u32,
    pub prompt: Option<String>,
    pub choices: Option<Vec<String>>,
    /// Feedback for the current question once answered
    pub feedback: Option<String>,
    pub verdict: Verdict,
    pub summary: Option<String>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub map_index: usize,
    pub phase: EncounterPhase,
    pub player: PlayerView,
    pub boss: BossView,
    pub battle: Option<BattleView>,
}

impl FrameSnapshot {
    pub fn capture(enc: &Encounter) -> Self {
        let player = &enc.player;
        let boss = &enc.boss;
        let info = boss.archetype.info();

        let battle = enc.battle().map(|b| {
            let question = b.current_question();
            BattleView {
                background: info.battle_background,
                state: b.state(),
                index: b.index(),
                total: b.total(),
                correct_count: b.correct_count(),
                prompt: question.map(|q| q.prompt().to_string()),
                choices: question.map(|q| q.choices().to_vec()),
                feedback: b.feedback().map(|f| f.message()),
                verdict: b.verdict(),
                summary: b.summary(),
            }
        });

        Self {
            map_index: enc.map_index,
            phase: enc.phase,
            player: PlayerView {
                pos: player.pos,
                size: player.size,
                direction: player.direction,
                moving: player.moving,
                bounds: player.bounds(),
            },
            boss: BossView {
                name: info.name,
                description: info.description,
                sprite: info.sprite,
                pos: boss.pos,
                size: boss.size,
                phase: boss.phase,
                spawn_progress: boss.spawn_progress(),
                scale: boss.spawn_scale(),
                alpha: boss.spawn_alpha(),
            },
            battle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::map::MapSnapshot;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_capture_exploring() {
        let map = MapSnapshot::new(3, Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0), Vec::new());
        let enc = Encounter::new(&map);
        let snap = FrameSnapshot::capture(&enc);
        assert_eq!(snap.map_index, 3);
        assert_eq!(snap.boss.name, "Glitchron");
        assert_eq!(snap.boss.phase, BossPhase::Spawning);
        assert_eq!(snap.player.direction, Direction::Down);
        assert!(snap.battle.is_none());
    }

    #[test]
    fn test_capture_battle_feedback() {
        let map = MapSnapshot::new(0, Vec2::new(100.0, 100.0), Vec2::new(110.0, 90.0), Vec::new());
        let mut enc = Encounter::new(&map);
        let trigger = TickInput {
            trigger_battle: true,
            ..Default::default()
        };
        tick(&mut enc, &trigger, SIM_DT);

        let view = FrameSnapshot::capture(&enc).battle.unwrap();
        assert_eq!(view.state, BattleState::InProgress);
        assert_eq!(view.choices.as_ref().map(Vec::len), Some(4));
        assert!(view.feedback.is_none());
        assert_eq!(view.background, "backgrounds/steelward_bg.png");

        let pick = TickInput {
            answer: Some(1),
            ..Default::default()
        };
        tick(&mut enc, &pick, SIM_DT);
        let view = FrameSnapshot::capture(&enc).battle.unwrap();
        assert_eq!(
            view.feedback.as_deref(),
            Some("Wrong! The correct answer is: To protect internal components")
        );
        assert_eq!(view.verdict, Verdict::Undecided);
    }
}
