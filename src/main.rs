//! Minimal CLI over the Prentice helpers. Commands are intentionally small
//! and auditable so operators can see exactly how credentials are derived,
//! stored, and checked.

use std::env;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use prentice_rs::arithmetic::add_numbers;
use prentice_rs::credential::kdf::{hash_password, verify_password};
use prentice_rs::credential::store::CredentialStore;
use prentice_rs::environment;
use prentice_rs::greeting::hello;
use prentice_rs::metrics;
use prentice_rs::sequence::{fibonacci, MAX_TERMS};
use prentice_rs::summary::summarize;

fn print_usage() {
    eprintln!("Commands:\n  greet <name>\n  add <a> <b>\n  fib <n>\n  summarize <item>...\n  hash-password <plaintext>\n  verify-password <plaintext> <base64-hash>\n  store-credential <path> <name> <plaintext>\n  check-credential <path> <name> <plaintext>\n  env <var>\n  metric-get <path> <name>\n  metric-set <path> <name> <value>");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "greet" => {
            if args.len() != 3 {
                return print_usage();
            }
            println!("{}", hello(&args[2]));
        }
        "add" => {
            if args.len() != 4 {
                return print_usage();
            }
            let (a, b) = match (args[2].parse::<i64>(), args[3].parse::<i64>()) {
                (Ok(a), Ok(b)) => (a, b),
                _ => return eprintln!("add expects two integers"),
            };
            println!("{}", add_numbers(a, b));
        }
        "fib" => {
            if args.len() != 3 {
                return print_usage();
            }
            let n: usize = match args[2].parse() {
                Ok(n) => n,
                Err(err) => return eprintln!("invalid term count: {err}"),
            };
            if n > MAX_TERMS {
                return eprintln!("at most {MAX_TERMS} terms fit in u64");
            }
            println!("{}", serde_json::to_string(&fibonacci(n)).unwrap());
        }
        "summarize" => {
            let summary = summarize(&args[2..]);
            println!("{}", serde_json::to_string_pretty(&summary).unwrap());
        }
        "hash-password" => {
            if args.len() != 3 {
                return print_usage();
            }
            match hash_password(&args[2]) {
                Ok(stored) => println!("{}", STANDARD_NO_PAD.encode(stored)),
                Err(err) => eprintln!("hashing failed: {err}"),
            }
        }
        "verify-password" => {
            if args.len() != 4 {
                return print_usage();
            }
            let stored = match STANDARD_NO_PAD.decode(args[3].as_bytes()) {
                Ok(stored) => stored,
                Err(err) => return eprintln!("invalid base64 hash: {err}"),
            };
            let matches = verify_password(&args[2], &stored);
            println!("{}", if matches { "match" } else { "no-match" });
        }
        "store-credential" => {
            if args.len() != 5 {
                return print_usage();
            }
            let store = CredentialStore::new(&args[2]);
            match store.append(&args[3], &args[4]) {
                Ok(()) => println!("stored credential for {}", args[3]),
                Err(err) => eprintln!("store failed: {err}"),
            }
        }
        "check-credential" => {
            if args.len() != 5 {
                return print_usage();
            }
            let store = CredentialStore::new(&args[2]);
            match store.check(&args[3], &args[4]) {
                Ok(matches) => println!("{}", if matches { "match" } else { "no-match" }),
                Err(err) => eprintln!("check failed: {err}"),
            }
        }
        "env" => {
            if args.len() != 3 {
                return print_usage();
            }
            match environment::lookup(&args[2]) {
                Some(value) => println!("{value}"),
                None => eprintln!("{} is not set", args[2]),
            }
        }
        "metric-get" => {
            if args.len() != 4 {
                return print_usage();
            }
            match metrics::fetch(Path::new(&args[2]), &args[3]) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => eprintln!("no metric named {}", args[3]),
                Err(err) => eprintln!("metrics read failed: {err}"),
            }
        }
        "metric-set" => {
            if args.len() != 5 {
                return print_usage();
            }
            let path = Path::new(&args[2]);
            let value: f64 = match args[4].parse() {
                Ok(value) => value,
                Err(err) => return eprintln!("invalid metric value: {err}"),
            };
            let mut all = match metrics::load(path) {
                Ok(all) => all,
                Err(err) => return eprintln!("metrics read failed: {err}"),
            };
            all.insert(args[3].clone(), value);
            match metrics::store(path, &all) {
                Ok(()) => println!("{} {}", args[3], value),
                Err(err) => eprintln!("metrics write failed: {err}"),
            }
        }
        _ => print_usage(),
    }
}
