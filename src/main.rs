use std::{env, process::ExitCode, str::FromStr};

use vintrin::{
    error::validation_error,
    simd::verify::{cross_check, cross_check_all},
    IntrinError, Result, Tier,
};

const DEFAULT_ROUNDS: usize = 10_000;
const DEFAULT_SEED: u64 = 0x5EED;

const USAGE: &str = "usage: vintrin [--tier NAME] [--rounds N] [--seed S]";

#[derive(Debug)]
struct Options {
    tier: Option<Tier>,
    rounds: usize,
    seed: u64,
}

fn parse_number<T: FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = value.ok_or_else(|| validation_error(format!("{flag} needs a value")))?;
    value
        .parse()
        .map_err(|_| validation_error(format!("{flag}: `{value}` is not a valid number")))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options {
        tier: None,
        rounds: DEFAULT_ROUNDS,
        seed: DEFAULT_SEED,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tier" => {
                let name = args
                    .next()
                    .ok_or_else(|| validation_error("--tier needs a value"))?;
                options.tier = Some(name.parse()?);
            }
            "--rounds" => options.rounds = parse_number("--rounds", args.next())?,
            "--seed" => options.seed = parse_number("--seed", args.next())?,
            other => {
                return Err(validation_error(format!(
                    "unexpected argument `{other}`"
                )))
            }
        }
    }

    Ok(options)
}

fn run(options: &Options) -> Result<()> {
    let compiled: Vec<&str> = Tier::compiled().into_iter().map(Tier::name).collect();
    println!("Active tier: {}", Tier::ACTIVE);
    println!("Compiled tiers: {}", compiled.join(", "));
    println!("Rounds: {}, seed: {:#x}", options.rounds, options.seed);

    match options.tier {
        Some(tier) => {
            cross_check(tier, options.rounds, options.seed)?;
            println!("{tier}: ok");
        }
        None => {
            cross_check_all(options.rounds, options.seed)?;
            for tier in Tier::compiled() {
                println!("{tier}: ok");
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ IntrinError::Mismatch { .. }) => {
            eprintln!("FAILED: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}
