use clap::Parser;
use crawler_cli::cli::Cli;
use crawler_core::error::AppError;
use crawler_core::{forward, scrape};

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn run(cli: Cli) -> Result<(), AppError> {
    // A scrape failure is not fatal to the run; it reads as zero tasks.
    let tasks = match scrape::scrape_tasks(&cli.scrape_url) {
        Ok(tasks) => tasks,
        Err(err) => {
            eprintln!("Error scraping tasks: {}", err);
            Vec::new()
        }
    };

    if tasks.is_empty() {
        println!("No tasks scraped.");
        return Ok(());
    }

    println!("Scraped {} tasks. Sending to backend...", tasks.len());
    let outcome = forward::forward_tasks(&tasks, &cli.backend_url)?;

    for description in &outcome.delivered {
        println!("Task added: {}", description);
    }
    for failure in &outcome.failures {
        eprintln!(
            "Error adding task '{}': {}",
            failure.description, failure.error
        );
    }

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                let _ = err.print();
                return;
            }
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    let result = run(cli);
    println!("Crawler run completed.");

    if let Err(err) = result {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
