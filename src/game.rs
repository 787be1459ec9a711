//! Frame-driven game session
//!
//! Owns the campaign and the live encounter. The presentation layer feeds
//! raw input through the `on_*` entry points and calls [`Game::update`] once
//! per frame; the simulation runs in fixed steps underneath.

use crate::campaign::{Campaign, Progress};
use crate::consts::*;
use crate::error::MapError;
use crate::map::{MapQuery, MapSnapshot};
use crate::settings::{PlayerProfile, Settings};
use crate::sim::{Encounter, EncounterOutcome, FrameSnapshot, GameEvent, TickInput, tick};

pub struct Game {
    provider: Box<dyn MapQuery>,
    profile: PlayerProfile,
    campaign: Campaign,
    encounter: Encounter,
    input: TickInput,
    accumulator: f32,
    /// Outcome whose map load failed; retried on the next update
    pending: Option<EncounterOutcome>,
    /// Events carried over from encounters that were replaced
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(provider: Box<dyn MapQuery>, settings: &Settings) -> Result<Self, MapError> {
        let campaign = Campaign::starting_at(settings.starting_map)?;
        let map = MapSnapshot::load(provider.as_ref(), campaign.current_map())?;
        log::info!(
            "Starting as {} ({}) on map {}",
            settings.profile.name(),
            settings.profile.avatar.as_str(),
            map.index
        );
        Ok(Self {
            provider,
            profile: settings.profile.clone(),
            campaign,
            encounter: Encounter::new(&map),
            input: TickInput::default(),
            accumulator: 0.0,
            pending: None,
            events: Vec::new(),
        })
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    /// Held movement axes, each clamped to [-1, 1]
    pub fn on_directional_input(&mut self, horizontal: f32, vertical: f32) {
        self.input.horizontal = horizontal.clamp(-1.0, 1.0);
        self.input.vertical = vertical.clamp(-1.0, 1.0);
    }

    pub fn on_battle_trigger_pressed(&mut self) {
        self.input.trigger_battle = true;
    }

    pub fn on_answer_selected(&mut self, choice: usize) {
        self.input.answer = Some(choice);
    }

    pub fn on_advance_pressed(&mut self) {
        self.input.advance = true;
    }

    /// Run as many fixed ticks as the frame time covers
    pub fn update(&mut self, frame_dt: f32) -> Result<(), MapError> {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        if let Some(outcome) = self.pending.take() {
            self.route(outcome)?;
        }

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.clone();
            tick(&mut self.encounter, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_commands();

            if let Some(outcome) = self.encounter.take_outcome() {
                self.route(outcome)?;
            }
        }
        Ok(())
    }

    fn route(&mut self, outcome: EncounterOutcome) -> Result<(), MapError> {
        match outcome {
            EncounterOutcome::ResumeExploration => {
                log::info!("Boss survived, back to exploring map {}", self.encounter.map_index);
            }
            EncounterOutcome::AdvanceMap => {
                // Load before committing so a failure leaves the campaign untouched
                let map = match self.campaign.next_map() {
                    Some(index) => match MapSnapshot::load(self.provider.as_ref(), index) {
                        Ok(map) => Some(map),
                        Err(e) => {
                            self.pending = Some(outcome);
                            return Err(e);
                        }
                    },
                    None => None,
                };

                match (self.campaign.advance(), map) {
                    (Progress::NextMap(index), Some(map)) => {
                        self.events.append(&mut self.encounter.drain_events());
                        self.encounter = Encounter::new(&map);
                        self.accumulator = 0.0;
                        self.events.push(GameEvent::MapAdvanced { map_index: index });
                    }
                    _ => {
                        self.encounter.events.push(GameEvent::CampaignCompleted);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.encounter)
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.events);
        events.append(&mut self.encounter.drain_events());
        events
    }
}
