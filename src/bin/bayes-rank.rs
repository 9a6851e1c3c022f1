//! bayes-rank CLI — exact heredity inference and PageRank estimation
//!
//! Commands:
//!   bayes-rank heredity — posterior gene and trait probabilities for a family
//!   bayes-rank pagerank — sampled and iterated PageRank for a corpus of pages

use bayes_rank::config::Config;
use bayes_rank::heredity::{infer, Family, InheritanceModel};
use bayes_rank::pagerank::{iterate_pagerank, sample_pagerank, Corpus};
use bayes_rank::report::{heredity_text, to_json, PageRankReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::process;
use std::str::FromStr;

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn print_usage() {
    println!(
        r#"
bayes-rank — exact heredity inference and PageRank estimation

Usage: bayes-rank <command> <input> [options]

Commands:
  heredity <data.csv>     Gene and trait posteriors for every person in a family
  pagerank <corpus-dir>   PageRank of every .html page, sampled and iterated
  help                    Show this message

Options:
  --config <file>         JSON config overriding probability tables and PageRank parameters
  --json                  Print results as JSON
  --samples <n>           Monte Carlo steps for the sampler (pagerank)
  --damping <d>           Damping factor in [0, 1) (pagerank)
  --seed <s>              Seed the sampler for reproducible output (pagerank)

Examples:
  bayes-rank heredity data/family0.csv
  bayes-rank pagerank corpus0 --samples 100000 --seed 7
  RUST_LOG=debug bayes-rank heredity data/family1.csv --json
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "heredity" => cmd_heredity(&args[2..]),
        "pagerank" => cmd_pagerank(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[derive(Debug, Default)]
struct Options {
    input: Option<String>,
    config: Option<String>,
    json: bool,
    samples: Option<usize>,
    damping: Option<f64>,
    seed: Option<u64>,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "--json" => opts.json = true,
            "--config" => opts.config = Some(value("--config")?),
            "--samples" => opts.samples = Some(parse_value("--samples", &value("--samples")?)?),
            "--damping" => opts.damping = Some(parse_value("--damping", &value("--damping")?)?),
            "--seed" => opts.seed = Some(parse_value("--seed", &value("--seed")?)?),
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {}", flag)),
            positional => {
                if opts.input.replace(positional.to_string()).is_some() {
                    return Err(format!("Unexpected argument: {}", positional));
                }
            }
        }
    }
    Ok(opts)
}

fn parse_value<T: FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("{} got an invalid value '{}'", flag, raw))
}

fn load_config(opts: &Options) -> Result<Config, Box<dyn std::error::Error>> {
    match &opts.config {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}

fn cmd_heredity(args: &[String]) -> CliResult {
    let opts = parse_options(args)?;
    let input = opts
        .input
        .as_deref()
        .ok_or("Usage: bayes-rank heredity <data.csv> [--config FILE] [--json]")?;
    let config = load_config(&opts)?;

    let family = Family::load(input)?;
    let model = InheritanceModel::new(&config.heredity);
    let posteriors = infer(&family, &model);

    if opts.json {
        println!("{}", to_json(&posteriors)?);
    } else {
        print!("{}", heredity_text(&posteriors));
    }
    Ok(())
}

fn cmd_pagerank(args: &[String]) -> CliResult {
    let opts = parse_options(args)?;
    let input = opts
        .input
        .as_deref()
        .ok_or("Usage: bayes-rank pagerank <corpus-dir> [--samples N] [--damping D] [--seed S] [--json]")?;

    let mut config = load_config(&opts)?.pagerank;
    if let Some(samples) = opts.samples {
        config.samples = samples;
    }
    if let Some(damping) = opts.damping {
        config.damping = damping;
    }
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    config.validate()?;

    let corpus = Corpus::crawl(input)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sampled = sample_pagerank(&corpus, config.damping, config.samples, &mut rng)?;
    let iterated = iterate_pagerank(&corpus, config.damping, config.tolerance)?;
    let report = PageRankReport::new(config.damping, config.samples, sampled, iterated);

    if opts.json {
        println!("{}", to_json(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
