use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{ App, Arg, ArgMatches };

use crate::error::ConfigError;
use crate::generator::Generator;
use crate::report::Locale;

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Generated { generator: Generator, seed: Option<u64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Source,
    pub capacity: Option<f64>,
    pub locale: Locale,
    pub json: bool,
    pub color: bool,
    pub verbose: bool,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("knapsack")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Zino Onomiwo")
        .about("Compares exhaustive search with the greedy density heuristic on a 0/1 knapsack")
        .arg(Arg::with_name("items")
            .short("n")
            .long("items")
            .takes_value(true)
            .help("Number of generated items (exhaustive search doubles its work per item)")
        )
        .arg(Arg::with_name("seed")
            .short("s")
            .long("seed")
            .takes_value(true)
            .help("Seed for the item generator")
        )
        .arg(Arg::with_name("capacity")
            .short("c")
            .long("capacity")
            .takes_value(true)
            .help("Backpack capacity, defaults to half of the total item weight")
        )
        .arg(Arg::with_name("max-weight")
            .long("max-weight")
            .takes_value(true)
            .help("Largest generated weight")
        )
        .arg(Arg::with_name("max-value")
            .long("max-value")
            .takes_value(true)
            .help("Largest generated value")
        )
        .arg(Arg::with_name("input")
            .short("i")
            .long("input")
            .takes_value(true)
            .conflicts_with_all(&["items", "seed", "max-weight", "max-value"])
            .help("Read the catalog from a file instead of generating one")
        )
        .arg(Arg::with_name("locale")
            .short("l")
            .long("locale")
            .takes_value(true)
            .help("Report language: en or pl")
        )
        .arg(Arg::with_name("json")
            .long("json")
            .help("Print the comparison as JSON")
        )
        .arg(Arg::with_name("no-color")
            .long("no-color")
            .help("Disable coloured output")
        )
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Log solver progress at debug level")
        )
}

fn value_of<T: FromStr>(matches: &ArgMatches, option: &'static str) -> Result<Option<T>, ConfigError> {
    match matches.value_of(option) {
        Some(value) => value.parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { option, value: value.to_owned() }),
        None => Ok(None),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where I: IntoIterator<Item = T>, T: Into<OsString> + Clone {
        let matches = app().get_matches_from_safe(args)?;

        let source = match matches.value_of("input") {
            Some(path) => Source::File(PathBuf::from(path)),
            None => {
                let defaults = Generator::default();
                let generator = Generator {
                    item_count: value_of(&matches, "items")?.unwrap_or(defaults.item_count),
                    max_weight: value_of(&matches, "max-weight")?.unwrap_or(defaults.max_weight),
                    max_value: value_of(&matches, "max-value")?.unwrap_or(defaults.max_value),
                };
                Source::Generated { generator, seed: value_of(&matches, "seed")? }
            }
        };

        let capacity: Option<f64> = value_of(&matches, "capacity")?;
        if let Some(capacity) = capacity {
            if !(capacity >= 0.0) {
                return Err(ConfigError::Invalid { option: "capacity", value: capacity.to_string() });
            }
        }

        let locale = value_of::<Locale>(&matches, "locale")?.unwrap_or_default();

        Ok(Config {
            source,
            capacity,
            locale,
            json: matches.is_present("json"),
            color: !matches.is_present("no-color"),
            verbose: matches.is_present("verbose"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_args(vec!("knapsack")).unwrap();

        assert_eq!(Source::Generated { generator: Generator::default(), seed: None }, config.source);
        assert_eq!(None, config.capacity);
        assert_eq!(Locale::English, config.locale);
        assert!(config.color);
        assert!(!config.json);
    }

    #[test]
    fn generator_options() {
        let config = Config::from_args(vec!("knapsack", "-n", "12", "--seed", "99", "--max-weight", "10", "-l", "pl", "--no-color")).unwrap();

        let generator = Generator { item_count: 12, max_weight: 10, max_value: 29 };
        assert_eq!(Source::Generated { generator, seed: Some(99) }, config.source);
        assert_eq!(Locale::Polish, config.locale);
        assert!(!config.color);
    }

    #[test]
    fn input_file() {
        let config = Config::from_args(vec!("knapsack", "--input", "bench.txt", "--capacity", "12.5", "--json")).unwrap();

        assert_eq!(Source::File(PathBuf::from("bench.txt")), config.source);
        assert_eq!(Some(12.5), config.capacity);
        assert!(config.json);
    }

    #[test]
    fn input_conflicts_with_generator() {
        assert!(Config::from_args(vec!("knapsack", "--input", "a.txt", "-n", "3")).is_err());
    }

    #[test]
    fn rejects_bad_values() {
        match Config::from_args(vec!("knapsack", "-n", "many")) {
            Err(ConfigError::Invalid { option, .. }) => assert_eq!("items", option),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(Config::from_args(vec!("knapsack", "-c", "-3")).is_err());
        assert!(Config::from_args(vec!("knapsack", "-l", "fr")).is_err());
    }
}
