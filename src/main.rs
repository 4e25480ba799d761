// src/main.rs

use coprime::config::CoprimeConfig;
use coprime::coprime_base::base::{array_cb, array_cb_par};
use coprime::core::array::IntegerArray;
use coprime::core::pool::IntegerPool;
use coprime::factor::find::array_find_factors;
use coprime::factor::FactorTriple;
use coprime::integer_math::primality::is_probable_prime;
use env_logger::Env;
use log::{info, warn};
use num::BigInt;
use std::path::Path;
use std::str::FromStr;

fn main() {
    // Load configuration first (before logging is initialized)
    let config = CoprimeConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        CoprimeConfig::default()
    });

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <moduli-file>", args[0]);
        eprintln!("       {} <n1> <n2> [n3 ...]", args[0]);
        eprintln!("Example: {} 4295229443 4295491591", args[0]);
        std::process::exit(1);
    }

    // Initialize logging based on config (can be overridden by COPRIME_LOG_LEVEL env var)
    let log_level = std::env::var("COPRIME_LOG_LEVEL").unwrap_or_else(|_| config.log_level.clone());
    let env = Env::default()
        .filter_or("COPRIME_LOG_LEVEL", log_level)
        .write_style_or("COPRIME_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    if config.parallel {
        let threads = config.threads.unwrap_or_else(num_cpus::get);
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .expect("Failed to configure thread pool");
        info!(
            "Parallel coprime base enabled on {} threads (total cores: {})",
            threads,
            num_cpus::get()
        );
    }

    let moduli = read_moduli(&args[1..]);
    if moduli.is_empty() {
        eprintln!("No usable moduli in the input.");
        std::process::exit(1);
    }

    info!("================================================================================");
    info!("BATCH COPRIME FACTORING");
    info!("================================================================================");
    info!("Moduli: {}", moduli.len());
    info!("Parallel: {}", config.parallel);
    info!("Verify factorizations: {}", config.verify);
    info!("");

    let input = IntegerArray::from(moduli);
    let mut pool = IntegerPool::new();

    // Stage 1: natural coprime base of the whole batch.
    let mut base = IntegerArray::new();
    if config.parallel {
        array_cb_par(&mut pool, &mut base, &input);
    } else {
        array_cb(&mut pool, &mut base, &input);
    }
    info!("Coprime base has {} elements", base.len());

    // Stage 2: factor every modulus over the base.
    let mut triples: Vec<FactorTriple> = Vec::new();
    array_find_factors(&mut pool, &mut triples, &input, &base);

    if triples.is_empty() {
        info!("");
        info!("No modulus split over the base: no shared factors in this batch.");
    }
    for triple in &triples {
        if config.verify && !triple.is_consistent() {
            warn!("Rejecting inconsistent factorization: {}", triple);
            continue;
        }
        info!(
            "{} = {} ({}) * {} ({})",
            triple.original,
            triple.factor,
            describe(&triple.factor),
            triple.cofactor,
            describe(&triple.cofactor)
        );
    }

    info!("");
    info!("Exposed factors: {}", triples.len());
    pool.clear();
}

fn describe(value: &BigInt) -> &'static str {
    if is_probable_prime(value) {
        "prime"
    } else {
        "composite"
    }
}

/// Reads moduli either from a file (one decimal integer per line, `#`
/// starts a comment) or directly from the command line.
fn read_moduli(args: &[String]) -> Vec<BigInt> {
    if args.len() == 1 && Path::new(&args[0]).exists() {
        let content = match std::fs::read_to_string(&args[0]) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading '{}': {}", args[0], e);
                std::process::exit(1);
            }
        };
        content
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|line| !line.is_empty())
            .map(parse_modulus)
            .collect()
    } else {
        args.iter().map(|arg| parse_modulus(arg.trim())).collect()
    }
}

fn parse_modulus(text: &str) -> BigInt {
    match BigInt::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error parsing number '{}': {}", text, e);
            std::process::exit(1);
        }
    }
}
