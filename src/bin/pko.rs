//! PKO calculator
//!
//! Converts bounties to big blinds and prints the hands that meet the
//! required equity against an opponent range.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use pko_advisor::advisory::{clamp_threshold, parse_threshold};
use pko_advisor::{single_hand_equity, CalculatorConfig, Combo, Preset, Range};

#[derive(Parser)]
#[command(author, version, about = "PKO bounty calculator and range advisor", long_about = None)]
struct Cli {
    /// JSON config file; command line flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bounty value in big blinds and the equity needed to call
    Bounty(SpotArgs),

    /// Hands meeting a target equity against the opponent range
    Advise {
        #[command(flatten)]
        spot: SpotArgs,
        #[command(flatten)]
        opponent: OpponentArgs,
        /// Target equity in percent; defaults to the required equity
        #[arg(long, short)]
        threshold: Option<String>,
        /// Also write the report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Weighted equity of one hand against the opponent range
    Equity {
        /// Hand label such as AKo
        hand: String,
        #[command(flatten)]
        opponent: OpponentArgs,
    },

    /// Expand range notation and group it back
    Parse {
        /// Range notation such as "66+, ATs+, KQo"
        notation: String,
    },
}

#[derive(Args)]
struct SpotArgs {
    /// Starting stack in chips
    #[arg(long)]
    stack: Option<f64>,
    /// Starting bounty
    #[arg(long)]
    bounty: Option<f64>,
    /// Current big blind in chips
    #[arg(long)]
    bb: Option<f64>,
    /// Opponent's bounty
    #[arg(long)]
    opponent_bounty: Option<f64>,
    /// Pot before the call, in big blinds
    #[arg(long)]
    pot: Option<f64>,
    /// Call amount in big blinds
    #[arg(long)]
    call: Option<f64>,
}

#[derive(Args)]
struct OpponentArgs {
    /// Opponent preset: standard, tight, loose, push15, random
    #[arg(long, conflicts_with = "range")]
    preset: Option<Preset>,
    /// Custom opponent range notation
    #[arg(long)]
    range: Option<String>,
}

impl SpotArgs {
    fn apply(&self, config: &mut CalculatorConfig) {
        let overrides = [
            (self.stack, &mut config.tournament.starting_stack),
            (self.bounty, &mut config.tournament.starting_bounty),
            (self.bb, &mut config.spot.current_bb),
            (self.opponent_bounty, &mut config.spot.opponent_bounty),
            (self.pot, &mut config.spot.pot_bb),
            (self.call, &mut config.spot.call_bb),
        ];
        for (value, field) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
    }
}

impl OpponentArgs {
    fn apply(self, config: CalculatorConfig) -> CalculatorConfig {
        match (self.preset, self.range) {
            (Some(preset), _) => config.with_preset(preset),
            (None, Some(range)) => config.with_custom_range(range),
            (None, None) => config,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_file(path)?,
        None => CalculatorConfig::default(),
    };

    match cli.command {
        Command::Bounty(spot) => run_bounty(config, &spot),
        Command::Advise {
            spot,
            opponent,
            threshold,
            json,
        } => run_advise(config, &spot, opponent, threshold, json),
        Command::Equity { hand, opponent } => run_equity(opponent.apply(config), &hand),
        Command::Parse { notation } => {
            run_parse(&notation);
            Ok(())
        }
    }
}

fn run_bounty(mut config: CalculatorConfig, spot: &SpotArgs) -> Result<(), Box<dyn Error>> {
    spot.apply(&mut config);
    let inputs = config.bounty_inputs();
    let result = inputs.calculate()?;

    println!("=== PKO Bounty ===\n");
    println!("Bounty value:    {:.2} BB", result.bounty_value_bb);
    println!("Formula:         {}", inputs.bounty_formula(&result));
    println!("Required equity: {}", result.required_equity_text());
    println!("Equity formula:  {}", inputs.equity_formula(&result));
    Ok(())
}

fn run_advise(
    mut config: CalculatorConfig,
    spot: &SpotArgs,
    opponent: OpponentArgs,
    threshold: Option<String>,
    json: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    spot.apply(&mut config);
    let config = opponent.apply(config);

    let threshold = match (threshold, config.advisory.threshold) {
        (Some(input), _) => parse_threshold(&input),
        (None, Some(t)) => clamp_threshold(t),
        (None, None) => {
            let result = config.bounty_inputs().calculate()?;
            println!(
                "Bounty value {:.2} BB, required equity {}",
                result.bounty_value_bb,
                result.required_equity_text()
            );
            result.required_equity_percent()
        }
    };

    let start = Instant::now();
    let session = config.session();
    let report = session.render(threshold);
    log::debug!("rendered advisory in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    report.print_summary();

    if let Some(path) = json {
        report.save_json(&path)?;
        println!("Saved JSON: {}", path.display());
    }
    Ok(())
}

fn run_equity(config: CalculatorConfig, hand: &str) -> Result<(), Box<dyn Error>> {
    let hero: Combo = hand.parse()?;
    let session = config.session();
    let range = session.opponent_range();

    println!("Hand:           {}", hero);
    println!("Strength:       {:.2}%", single_hand_equity(hero));
    if range.is_empty() {
        println!("Opponent range: (any hand)");
    } else {
        println!(
            "Opponent range: {} ({} classes, {} combos)",
            session.notation(),
            range.len(),
            range.num_combos()
        );
    }
    println!("Equity:         {:.2}%", session.equity_vs_selected(hero));
    Ok(())
}

fn run_parse(notation: &str) {
    let range = Range::parse(notation);
    println!("{} classes, {} combos", range.len(), range.num_combos());
    println!("Hands:   {}", range.labels().join(" "));
    println!("Grouped: {}", range.to_notation());
}
