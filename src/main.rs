mod cli;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use skillscan::finding::Severity;
use skillscan::{config, output, rules, scan};

fn main() {
    let cli = Cli::parse();

    if cli.list_rules {
        print_rules();
        return;
    }

    let Some(path) = cli.path else {
        eprintln!("Usage: skillscan [OPTIONS] <PATH>");
        eprintln!("Try 'skillscan --help' for more information.");
        std::process::exit(1);
    };

    if !path.exists() {
        eprintln!("Error: path does not exist: {}", path.display());
        std::process::exit(1);
    }

    let config = config::Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let report = scan::run_scan(&path, &config);
    let formatted = output::format_report(&report, &cli.format);

    if let Some(out_path) = cli.output {
        std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(1);
        });
        eprintln!("Report written to {}", out_path.display());
    } else {
        print!("{formatted}");
    }

    // Read failures are advisory; they never change the exit code.
    for err in &report.errors {
        eprintln!("Warning: could not scan {}: {}", err.path.display(), err.error);
    }

    std::process::exit(report.exit_code());
}

fn print_rules() {
    let rules = rules::all();
    println!("{}", "Rules".bold().underline());
    println!();

    let mut current_category = String::new();
    for rule in &rules {
        let category = rule.category.to_string();
        if category != current_category {
            if !current_category.is_empty() {
                println!();
            }
            println!("  {}", category.bold());
            current_category = category;
        }

        let severity = match rule.severity {
            Severity::Critical => "CRITICAL".red().bold().to_string(),
            Severity::High => "    HIGH".red().to_string(),
            Severity::Medium => "  MEDIUM".yellow().bold().to_string(),
            Severity::Low => "     LOW".yellow().to_string(),
            Severity::Info => "    INFO".blue().to_string(),
        };

        println!(
            "    [{severity}] {id:<28} {message}",
            id = rule.id,
            message = rule.message,
        );
    }

    println!();
    println!("  Total: {} rules", rules.len());
}
