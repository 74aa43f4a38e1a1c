// src/main.rs

use std::env;
use std::process;

use env_logger::Env;
use log::{error, info, warn};

use qsieve::config::SieveConfig;
use qsieve::core::cancellation_token::CancellationToken;
use qsieve::core::static_random::StaticRandom;
use qsieve::integer_math::primality::is_probable_prime;
use qsieve::{FactorizationError, QuadraticSieve};

// Exit codes
const INCORRECT_NUMBER_OF_ARGS: i32 = 1;
const N_TOO_SMALL: i32 = 2;
const MULT_TOO_SMALL: i32 = 3;
const NUM_PRIMES_TOO_SMALL: i32 = 4;
const FAILED_TO_FACTOR: i32 = 5;

fn print_usage(command: &str) {
    eprintln!("usage: {} <n> <mult> <num_primes>", command);
    eprintln!("  n, must be greater than 1");
    eprintln!("  mult, must be greater than 0");
    eprintln!("  num_primes, must be greater than 1");
}

fn main() {
    let config = SieveConfig::load().unwrap_or_else(|err| {
        eprintln!("config error: {}, using defaults", err);
        SieveConfig::default()
    });

    let env = Env::default().filter_or("QSIEVE_LOG", config.log_level.clone());
    env_logger::Builder::from_env(env).init();

    if let Some(threads) = config.threads {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            warn!("could not size the thread pool: {}", err);
        }
    } else {
        info!("using {} worker threads", num_cpus::get());
    }

    let args: Vec<String> = env::args().collect();
    let command = args[0].clone();
    if args.len() != 4 {
        print_usage(&command);
        process::exit(INCORRECT_NUMBER_OF_ARGS);
    }

    let n: u64 = match args[1].parse() {
        Ok(v) if v > 1 => v,
        _ => {
            print_usage(&command);
            process::exit(N_TOO_SMALL);
        }
    };
    let mult: u64 = match args[2].parse() {
        Ok(v) if v > 0 => v,
        _ => {
            print_usage(&command);
            process::exit(MULT_TOO_SMALL);
        }
    };
    let num_primes: u64 = match args[3].parse() {
        Ok(v) if v > 1 => v,
        _ => {
            print_usage(&command);
            process::exit(NUM_PRIMES_TOO_SMALL);
        }
    };

    // The companion generator's oracle: sieving a prime can only end in
    // window exhaustion, so refuse it up front.
    let mut rng = StaticRandom::new();
    if is_probable_prime(n, config.fermat_rounds, &mut rng) {
        error!("{} is probably prime, refusing to sieve", n);
        process::exit(FAILED_TO_FACTOR);
    }

    let cancel_token = CancellationToken::new();
    let handler_token = cancel_token.clone();
    if let Err(err) = ctrlc::set_handler(move || {
        warn!("cancellation requested");
        handler_token.cancel();
    }) {
        warn!("could not install the interrupt handler: {}", err);
    }

    let sieve = QuadraticSieve::with_config(n, mult, num_primes, config, cancel_token);
    let result = match sieve {
        Ok(mut sieve) => sieve.factor(),
        Err(err) => Err(err),
    };

    match result {
        Ok((p, q)) => {
            println!("{} = {} * {}", n, p, q);
        }
        Err(FactorizationError::Cancelled) => {
            error!("factorization of {} cancelled", n);
            process::exit(FAILED_TO_FACTOR);
        }
        Err(err) => {
            error!("failed to factor {}: {}", n, err);
            process::exit(FAILED_TO_FACTOR);
        }
    }
}
