//! Pillar Orbit entry point
//!
//! The window and renderer are provided by a host application. Natively this
//! binary plays a scripted session headlessly and logs what happens.
//!
//! Usage: `pillar-orbit [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use pillar_orbit::consts::SIM_DT;
    use pillar_orbit::renderer::{as_bytes, collect_instances};
    use pillar_orbit::sim::{GameState, tick};
    use pillar_orbit::Settings;

    env_logger::init();
    log::info!("Pillar Orbit (native) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    log::info!("{} ({}x{}), seed {}", settings.title, settings.width, settings.height, seed);
    log::info!(
        "Controls: Space boost, Tab switch pillar, O orbit, arrows nudge pillar, R reflect, P new pillar, click select pillar"
    );

    let mut state = GameState::new(seed, settings.arena(), settings.tuning.clone());

    const FRAMES: u32 = 1200;
    for frame in 0..FRAMES {
        let input = script::input_for(frame, &state);
        tick(&mut state, &input, SIM_DT);

        if frame % 120 == 0 {
            let player = &state.player;
            log::info!(
                "t={:>5.2}s pos=({:>6.1}, {:>6.1}) energy={:>5.1} mode={:?} score={} items={}",
                frame as f32 * SIM_DT,
                player.pos.x,
                player.pos.y,
                player.energy(),
                player.mode,
                state.score,
                state.items.len()
            );
        }
    }

    let instances = collect_instances(&state);
    log::info!(
        "Finished after {} ticks: score {}, {} draw instances ({} bytes)",
        state.time_ticks,
        state.score,
        instances.len(),
        as_bytes(&instances).len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page drives the simulation through the library
}

/// Scripted stand-in for keyboard and mouse input
#[cfg(not(target_arch = "wasm32"))]
mod script {
    use pillar_orbit::sim::{GameState, Nudge, TickInput};

    pub fn input_for(frame: u32, state: &GameState) -> TickInput {
        let mut input = TickInput::default();
        match frame % 300 {
            30 => input.toggle_speed = true,
            90 => input.toggle_speed = true,
            120 => input.toggle_orbit = true,
            200 => input.toggle_orbit = true,
            220 => input.reflect = true,
            250 => input.switch_pillar = true,
            270 => input.nudge = Some(Nudge::Up),
            _ => {}
        }
        if frame == 600 {
            input.spawn_pillar = true;
        }
        // Try to buy the first unselected pillar once there is score to spend
        if frame % 400 == 399 {
            input.click = state
                .items
                .iter()
                .find(|item| item.is_pillar() && !item.is_selected())
                .map(|item| item.pos.xy());
        }
        input
    }
}
