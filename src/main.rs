use chrono::Local;
use clap::Parser;
use taskroll::application::{init, ConfigService, RolloverService, StatsService};
use taskroll::cli::{format_stats_report, Cli, Commands};
use taskroll::error::TaskrollError;
use taskroll::infrastructure::{ConsoleNotifier, FileSystemRepository};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TaskrollError> {
    match cli.command {
        Some(Commands::Init { path, marker }) => init::init(&path, marker),
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("marker = {}", config.marker);
                println!("folders.daily = {}", config.folders.daily);
                println!("folders.weekly = {}", config.folders.weekly);
                println!("folders.monthly = {}", config.folders.monthly);
                println!("folders.annual = {}", config.folders.annual);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: taskroll config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: marker, folders.daily, folders.weekly, \
                    folders.monthly, folders.annual, created"
                );
                Ok(())
            }
        }
        Some(Commands::Roll { note }) => {
            let repo = FileSystemRepository::discover()?;
            let service = RolloverService::new(repo);
            let note = note.unwrap_or_else(today_daily_key);
            service.execute(&note, &ConsoleNotifier)?;
            Ok(())
        }
        Some(Commands::Stats { note }) => {
            let repo = FileSystemRepository::discover()?;
            let service = StatsService::new(repo);
            let note = note.unwrap_or_else(today_daily_key);
            let report = service.execute(&note)?;
            print!("{}", format_stats_report(&report));
            Ok(())
        }
        None => {
            println!("taskroll - Task rollover for periodic journal notes");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn today_daily_key() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
