use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use wordkit::core::{text, title};
use wordkit::utils::{logger, validation::Validate};
use wordkit::{CliConfig, Command, User};

fn main() -> Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wordkit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match &config.command {
        Command::Shuffle { text, count, seed } => {
            let outputs = run_shuffle(text, *count, *seed);
            if config.json {
                println!("{}", json!({ "input": text, "shuffled": outputs }));
            } else {
                for shuffled in &outputs {
                    println!("{}", shuffled);
                }
            }
        }
        Command::Palindrome { text: input } => {
            let result = text::is_palindrome(input);
            tracing::debug!("Palindrome check for {:?}: {}", input, result);
            if config.json {
                println!("{}", json!({ "input": input, "palindrome": result }));
            } else if result {
                println!("\"{}\" is a palindrome", input);
            } else {
                println!("\"{}\" is not a palindrome", input);
            }
        }
        Command::Title { base, page } => {
            let full_title = title::page_title(base, page.as_deref());
            if config.json {
                println!("{}", json!({ "title": full_title }));
            } else {
                println!("{}", full_title);
            }
        }
        Command::Email { name, email } => {
            let user = User::new(name.clone(), email.clone());
            let formatted = user.formatted_email();
            if config.json {
                println!("{}", json!({ "user": user, "formatted": formatted }));
            } else {
                match formatted {
                    Some(formatted) => println!("{}", formatted),
                    None => {
                        eprintln!("❌ Both --name and --email are required to format an email");
                        std::process::exit(1);
                    }
                }
            }
        }
    }

    Ok(())
}

fn run_shuffle(input: &str, count: usize, seed: Option<u64>) -> Vec<String> {
    match seed {
        Some(seed) => {
            tracing::debug!("Shuffling with seed {}", seed);
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count)
                .map(|_| text::shuffle_with(input, &mut rng))
                .collect()
        }
        None => (0..count).map(|_| text::shuffle(input)).collect(),
    }
}
