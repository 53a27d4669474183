//! Headless replay of a seeded swarm.
//!
//! Runs the physics without a window and prints every body's final state and
//! a fingerprint of the whole store, for comparing runs across physics changes.
//!
//! The pointer is held down at the center of the surface for the middle third
//! of the run and released otherwise.

use clap::Parser;
use logofield_core::{LogoBody, SwarmConfig};
use logofield_sim::{PointerEvent, SwarmState};

#[derive(Parser, Debug)]
#[command(name = "replay", about = "Replay a seeded logo swarm without a window")]
struct ReplayArgs {
    /// RNG seed for spawning and every tick
    #[arg(default_value_t = 42)]
    seed: u64,

    /// Number of ticks to run
    #[arg(default_value_t = 600)]
    ticks: u64,
}

fn main() {
    let args = ReplayArgs::parse();

    let config = SwarmConfig {
        seed: Some(args.seed),
        ..SwarmConfig::default()
    };
    let mut swarm = match SwarmState::mount(config) {
        Ok(swarm) => swarm,
        Err(e) => {
            eprintln!("replay: {e}");
            std::process::exit(1);
        }
    };

    let (press_at, release_at) = run(&mut swarm, args.ticks);
    eprintln!(
        "Replayed {} bodies for {} ticks (seed {}, pointer held {press_at}..{release_at})",
        swarm.bodies().len(),
        args.ticks,
        args.seed
    );

    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>8} {:>8} {:>6}",
        "id", "x", "y", "vx", "vy", "rot", "alpha"
    );
    for body in swarm.bodies() {
        println!(
            "{:<12} {:>8.2} {:>8.2} {:>8.3} {:>8.3} {:>8.3} {:>6.3}",
            body.id,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.rotation,
            body.opacity
        );
    }
    println!("fingerprint {:016x}", fingerprint(swarm.bodies()));
}

/// Tick `ticks` times with the pointer parked at the surface center, held
/// down for the middle third. Returns the press and release ticks.
fn run(swarm: &mut SwarmState, ticks: u64) -> (u64, u64) {
    let surface = swarm.surface_size();
    swarm.apply_pointer(&PointerEvent::Moved {
        display: surface / 2.0,
        display_size: surface,
    });

    let press_at = ticks / 3;
    let release_at = 2 * ticks / 3;
    for tick in 0..ticks {
        if tick == press_at {
            swarm.apply_pointer(&PointerEvent::Pressed);
        }
        if tick == release_at {
            swarm.apply_pointer(&PointerEvent::Released);
        }
        swarm.tick();
    }
    (press_at, release_at)
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the bit patterns of every body's dynamic state, so the
/// value is stable across toolchains and platforms.
fn fingerprint(bodies: &[LogoBody]) -> u64 {
    bodies
        .iter()
        .flat_map(|body| {
            [
                body.position.x,
                body.position.y,
                body.velocity.x,
                body.velocity.y,
                body.rotation,
                body.rotation_speed,
                body.opacity,
                body.target_opacity,
            ]
        })
        .flat_map(|value| value.to_bits().to_le_bytes())
        .fold(FNV_OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}
