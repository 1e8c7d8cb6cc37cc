use super::catalog::{MAX_PAIRS, MIN_PAIRS};
use crate::error::AppError;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_FLIP_DELAY_MS: u64 = 800;
const MIN_FLIP_DELAY_MS: u64 = 100;
const MAX_FLIP_DELAY_MS: u64 = 5000;
pub const VICTORY_DELAY: Duration = Duration::from_millis(500);
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

#[derive(Clone, Debug, PartialEq)]
pub struct PairsConfig
{
    pub seed: Option<u64>,
    pub pairs: usize,
    pub flip_delay: Duration,
    pub victory_delay: Duration,
    pub toast_duration: Duration,
    pub log_path: Option<PathBuf>,
}

impl PairsConfig
{
    pub fn from_args(args: &[String]) -> Result<Self, AppError>
    {
        let mut config = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let (name, inline) = match arg.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (arg.as_str(), None),
            };
            match name {
                "--seed" => config.seed = Some(parse_seed(take_value(name, inline, &mut iter)?)?),
                "--pairs" => config.pairs = parse_pairs(take_value(name, inline, &mut iter)?)?,
                "--delay" => {
                    config.flip_delay = parse_delay(take_value(name, inline, &mut iter)?)?
                }
                "--log" => {
                    config.log_path = Some(PathBuf::from(take_value(name, inline, &mut iter)?))
                }
                _ => return Err(AppError::usage(format!("Unknown option '{arg}'"))),
            }
        }
        Ok(config)
    }
}

impl Default for PairsConfig
{
    fn default() -> Self
    {
        Self {
            seed: None,
            pairs: MAX_PAIRS,
            flip_delay: Duration::from_millis(DEFAULT_FLIP_DELAY_MS),
            victory_delay: VICTORY_DELAY,
            toast_duration: TOAST_DURATION,
            log_path: None,
        }
    }
}

fn take_value<'a>(
    name: &str,
    inline: Option<&'a str>,
    rest: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a str, AppError>
{
    match inline {
        Some(value) => Ok(value),
        None => rest
            .next()
            .map(String::as_str)
            .ok_or_else(|| AppError::usage(format!("Expected value after {name}"))),
    }
}

fn parse_seed(value: &str) -> Result<u64, AppError>
{
    value
        .parse::<u64>()
        .map_err(|_| AppError::usage("Seed must be a non-negative integer"))
}

fn parse_pairs(value: &str) -> Result<usize, AppError>
{
    let pairs = value
        .parse::<usize>()
        .map_err(|_| AppError::usage("Pairs must be a number"))?;
    if !(MIN_PAIRS..=MAX_PAIRS).contains(&pairs) {
        return Err(AppError::usage(format!(
            "Pairs must be between {MIN_PAIRS} and {MAX_PAIRS}"
        )));
    }
    Ok(pairs)
}

fn parse_delay(value: &str) -> Result<Duration, AppError>
{
    let millis = value
        .parse::<u64>()
        .map_err(|_| AppError::usage("Delay must be a number of milliseconds"))?;
    if !(MIN_FLIP_DELAY_MS..=MAX_FLIP_DELAY_MS).contains(&millis) {
        return Err(AppError::usage(format!(
            "Delay must be between {MIN_FLIP_DELAY_MS} and {MAX_FLIP_DELAY_MS} ms"
        )));
    }
    Ok(Duration::from_millis(millis))
}
