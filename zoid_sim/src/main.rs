//! zoid_sim - Headless auto-resolve driver for Zoid battles
//!
//! Picks two Zoids from a roster, lets AI pilots fight one or more seeded
//! battles and prints the result.

mod simulation;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use simulation::BattleSeries;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use zoid_core::config::{load_roster, ConfigError};
use zoid_core::{
    default_roster, filter_for_terrain, select_opponent, AiPilot, BattleConstants, BattleError,
    BattleSetup, Combatant, Dice, Personality, RngDice, SilentNarrator, Terrain, TracingNarrator,
    ZoidTemplate,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TerrainArg {
    Land,
    Water,
    Air,
}

impl From<TerrainArg> for Terrain {
    fn from(arg: TerrainArg) -> Self {
        match arg {
            TerrainArg::Land => Terrain::Land,
            TerrainArg::Water => Terrain::Water,
            TerrainArg::Air => Terrain::Air,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PersonalityArg {
    Aggressive,
    Defensive,
}

impl From<PersonalityArg> for Personality {
    fn from(arg: PersonalityArg) -> Self {
        match arg {
            PersonalityArg::Aggressive => Personality::Aggressive,
            PersonalityArg::Defensive => Personality::Defensive,
        }
    }
}

/// Zoid battle simulator - AI vs AI auto-resolve
#[derive(Parser, Debug)]
#[command(name = "zoid_sim")]
#[command(about = "Run AI vs AI Zoid battles and report the results")]
struct Args {
    /// Roster JSON file (defaults to the bundled roster)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Battle constants TOML file (defaults to the built-in rules)
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Terrain to fight on
    #[arg(long, value_enum, default_value_t = TerrainArg::Land)]
    terrain: TerrainArg,

    /// Starting distance in meters
    #[arg(long, default_value_t = 1000.0)]
    distance: f64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of battles to run
    #[arg(long, short = 'n', default_value_t = 1)]
    battles: u32,

    /// Zoid for player 1 (random pick when omitted)
    #[arg(long)]
    one: Option<String>,

    /// Zoid for player 2 (AI selection when omitted)
    #[arg(long)]
    two: Option<String>,

    /// Personality of player 1's pilot (rolled when omitted)
    #[arg(long, value_enum)]
    one_personality: Option<PersonalityArg>,

    /// Personality of player 2's pilot (rolled when omitted)
    #[arg(long, value_enum)]
    two_personality: Option<PersonalityArg>,

    /// Turn limit per battle; reaching it is a draw
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Suppress battle narration
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Error, Debug)]
enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Battle(#[from] BattleError),
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No Zoid in the roster can fight on {0} terrain")]
    EmptyRoster(Terrain),
    #[error("Unknown Zoid for {terrain} terrain: {name}")]
    UnknownZoid { name: String, terrain: Terrain },
}

/// JSON output structure
#[derive(Serialize)]
struct Report<'a> {
    terrain: Terrain,
    distance: f64,
    personalities: [Personality; 2],
    series: &'a BattleSeries,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("zoid_sim=info,zoid_core=info")),
        )
        .with_target(false)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut dice = RngDice::seeded(seed);
    let terrain = Terrain::from(args.terrain);

    let rules = match &args.constants {
        Some(path) => BattleConstants::load(path)?,
        None => BattleConstants::default(),
    };
    let roster = match &args.roster {
        Some(path) => load_roster(path)?,
        None => default_roster(),
    };
    let available = filter_for_terrain(&roster, terrain);
    if available.is_empty() {
        return Err(SimError::EmptyRoster(terrain));
    }

    let one_pilot = match args.one_personality {
        Some(arg) => AiPilot::new(arg.into()),
        None => AiPilot::random(&mut dice),
    };
    let two_pilot = match args.two_personality {
        Some(arg) => AiPilot::new(arg.into()),
        None => AiPilot::random(&mut dice),
    };

    let one = match &args.one {
        Some(name) => find_zoid(&available, name, terrain)?,
        None => &available[dice.pick(available.len())],
    };
    let two = match &args.two {
        Some(name) => find_zoid(&available, name, terrain)?,
        None => select_opponent(&available, one.power_level, two_pilot.personality(), &mut dice)
            .ok_or(SimError::EmptyRoster(terrain))?,
    };
    tracing::info!(
        "{} (PL {}, {}) vs {} (PL {}, {})",
        one.name,
        one.power_level,
        one_pilot.personality(),
        two.name,
        two.power_level,
        two_pilot.personality()
    );

    let setup = BattleSetup::new(terrain, args.distance)
        .with_ai_mode(true)
        .with_max_turns(args.max_turns);
    let one = Combatant::from_template(one);
    let two = Combatant::from_template(two);
    let pilots = [one_pilot, two_pilot];

    let series = if args.quiet || args.json || args.battles > 1 {
        BattleSeries::run(one, two, pilots, &setup, &rules, args.battles, seed, &mut SilentNarrator)?
    } else {
        BattleSeries::run(one, two, pilots, &setup, &rules, args.battles, seed, &mut TracingNarrator)?
    };

    if args.json {
        let report = Report {
            terrain,
            distance: args.distance,
            personalities: [one_pilot.personality(), two_pilot.personality()],
            series: &series,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in series.summary_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

fn find_zoid<'a>(
    roster: &'a [ZoidTemplate],
    name: &str,
    terrain: Terrain,
) -> Result<&'a ZoidTemplate, SimError> {
    roster
        .iter()
        .find(|z| z.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SimError::UnknownZoid {
            name: name.to_string(),
            terrain,
        })
}
