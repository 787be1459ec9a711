//! TechXplorer entry point
//!
//! Headless run of the campaign: walks to each boss, answers the quiz and
//! logs what happens. Usage: `techxplorer [settings.json] [maps.json]`

#[cfg(not(target_arch = "wasm32"))]
use techxplorer::{
    Game, MapCatalog, Settings,
    consts::SIM_DT,
    sim::{EncounterPhase, GameEvent},
};

#[cfg(not(target_arch = "wasm32"))]
const BUILTIN_MAPS: &str = include_str!("../data/maps.json");

/// Frames allowed per map before giving up (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const FRAMES_PER_MAP: u32 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("TechXplorer (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = Settings::load_or_default(args.next().unwrap_or_else(|| "techxplorer.json".into()));
    let catalog = match args.next().map(std::path::PathBuf::from).or(settings.map_catalog.clone()) {
        Some(path) => MapCatalog::load(path)?,
        None => MapCatalog::from_json_str(BUILTIN_MAPS)?,
    };

    let mut game = Game::new(Box::new(catalog), &settings)?;
    let mut frames = 0;
    while !game.campaign().is_completed() {
        if frames >= FRAMES_PER_MAP {
            log::error!("Stuck on map {}", game.encounter().map_index);
            return Err("boss not reached".into());
        }
        drive(&mut game);
        game.update(SIM_DT)?;
        frames += 1;

        for event in game.drain_events() {
            if matches!(event, GameEvent::MapAdvanced { .. }) {
                frames = 0;
            }
            report(&game, &event);
        }
    }

    let campaign = game.campaign();
    println!(
        "{} defeated {} bosses. Campaign complete!",
        game.profile().name(),
        campaign.defeated_count()
    );
    Ok(())
}

/// Scripted player: steer toward the boss, then answer everything right
#[cfg(not(target_arch = "wasm32"))]
fn drive(game: &mut Game) {
    let enc = game.encounter();
    match enc.phase {
        EncounterPhase::Exploring => {
            if enc.player_near_boss() {
                game.on_directional_input(0.0, 0.0);
                game.on_battle_trigger_pressed();
                return;
            }
            let delta = enc.boss.bounds().center() - enc.player.bounds().center();
            let axis = |d: f32| if d.abs() > 2.0 { d.signum() } else { 0.0 };
            game.on_directional_input(axis(delta.x), axis(delta.y));
        }
        EncounterPhase::InBattle => {
            let Some(battle) = enc.battle() else {
                return;
            };
            if battle.feedback().is_some() {
                game.on_advance_pressed();
            } else if let Some(question) = battle.current_question() {
                let choice = question.correct_index();
                game.on_answer_selected(choice);
            }
        }
        EncounterPhase::Cleared => {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn report(game: &Game, event: &GameEvent) {
    match event {
        GameEvent::BossActivated { archetype } => {
            log::info!("{} has fully materialized", archetype.info().name);
        }
        GameEvent::BattleStarted { archetype } => {
            let info = archetype.info();
            println!("\n=== {} ===\n{}", info.name, info.description);
        }
        GameEvent::AnswerChecked { index, correct } => {
            let snap = game.snapshot();
            if let Some(battle) = snap.battle {
                let prompt = battle.prompt.unwrap_or_default();
                let feedback = battle.feedback.unwrap_or_default();
                println!("Q{}: {prompt}\n  {feedback}", index + 1);
            } else {
                println!("Q{}: {}", index + 1, if *correct { "correct" } else { "wrong" });
            }
        }
        GameEvent::BattleEnded {
            verdict,
            correct,
            total,
        } => {
            println!("Result: {verdict:?} ({correct}/{total})");
        }
        GameEvent::MapAdvanced { map_index } => {
            println!("\n--> Entering map {}", map_index + 1);
        }
        GameEvent::CampaignCompleted => {
            println!("\nAll bosses defeated!");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is driven by the host page on wasm
}
