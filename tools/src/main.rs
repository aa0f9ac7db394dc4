//! datagen-runner: CLI front end for fraudgen-core.
//!
//! Usage:
//!   datagen-runner --transactions 1000 --fraud-rate 0.05 --output data/input/transactions.csv
//!   datagen-runner -t 5000 -f 0.08 -o test.csv --no-timestamp --seed 42
//!   datagen-runner --validation-pack -o data/input/fraud_validation.csv

use anyhow::{Context, Result};
use fraudgen_core::{record::TransactionRecord, scenario, GenRng, TransactionGenerator};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

#[derive(serde::Serialize)]
struct DatasetSummary {
    record_count: usize,
    fraud_count: usize,
    total_amount: f64,
    average_amount: f64,
    min_amount: f64,
    max_amount: f64,
    unique_accounts: usize,
    unique_merchants: usize,
    unique_channels: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let transactions = parse_arg(&args, &["-t", "--transactions"], 1000usize);
    let fraud_rate = parse_arg(&args, &["-f", "--fraud-rate"], 0.05f64);
    let seed = parse_arg(&args, &["--seed"], unix_seconds());
    let no_timestamp = args.iter().any(|a| a == "--no-timestamp");
    let validation = args.iter().any(|a| a == "--validation-pack");
    let output = string_arg(&args, &["-o", "--output"])
        .unwrap_or_else(|| "data/input/transactions.csv".to_string());
    let stats_json = string_arg(&args, &["--stats-json"]);

    let output = if no_timestamp {
        PathBuf::from(output)
    } else {
        timestamped(Path::new(&output))
    };

    println!("fraud test-data generator");
    if validation {
        println!("  mode:         validation pack (fixed rule cases)");
    } else {
        println!("  transactions: {transactions}");
        println!("  fraud rate:   {:.1}%", fraud_rate * 100.0);
    }
    println!("  seed:         {seed}");
    println!("  output:       {}", output.display());
    println!();

    let records = if validation {
        let anchor = chrono::Utc::now().naive_utc();
        scenario::rule_validation_pack(anchor, &mut GenRng::new(seed))
    } else {
        TransactionGenerator::new(seed).generate(transactions, fraud_rate)?
    };

    write_csv(&records, &output)?;
    log::info!("wrote {} records to {}", records.len(), output.display());

    let summary = summarize(&records);
    print_summary(&summary);

    if let Some(path) = stats_json {
        std::fs::write(&path, serde_json::to_string_pretty(&summary)?)
            .with_context(|| format!("cannot write {path}"))?;
        println!("  stats json:     {path}");
    }

    Ok(())
}

fn write_csv(records: &[TransactionRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn summarize(records: &[TransactionRecord]) -> DatasetSummary {
    let total_amount: f64 = records.iter().map(|r| r.amount).sum();
    let min_amount = records
        .iter()
        .map(|r| r.amount)
        .fold(f64::INFINITY, f64::min);
    let max_amount = records.iter().map(|r| r.amount).fold(0.0, f64::max);

    let unique_accounts: HashSet<&str> =
        records.iter().map(|r| r.account_id.as_str()).collect();
    let unique_merchants: HashSet<&str> =
        records.iter().map(|r| r.merchant_name.as_str()).collect();
    let unique_channels: HashSet<&str> =
        records.iter().map(|r| r.channel.as_str()).collect();

    DatasetSummary {
        record_count: records.len(),
        fraud_count: records.iter().filter(|r| r.is_fraud()).count(),
        total_amount,
        average_amount: total_amount / records.len() as f64,
        min_amount,
        max_amount,
        unique_accounts: unique_accounts.len(),
        unique_merchants: unique_merchants.len(),
        unique_channels: unique_channels.len(),
    }
}

fn print_summary(s: &DatasetSummary) {
    println!("=== RUN SUMMARY ===");
    println!("  records:        {}", s.record_count);
    println!("  fraud records:  {}", s.fraud_count);
    println!("  total amount:   ${:.2}", s.total_amount);
    println!("  avg amount:     ${:.2}", s.average_amount);
    println!("  min amount:     ${:.2}", s.min_amount);
    println!("  max amount:     ${:.2}", s.max_amount);
    println!("  accounts:       {}", s.unique_accounts);
    println!("  merchants:      {}", s.unique_merchants);
    println!("  channels:       {}", s.unique_channels);
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flags: &[&str], default: T) -> T {
    args.windows(2)
        .find(|w| flags.contains(&w[0].as_str()))
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg(args: &[String], flags: &[&str]) -> Option<String> {
    args.windows(2)
        .find(|w| flags.contains(&w[0].as_str()))
        .map(|w| w[1].clone())
}

/// Rewrite `name.csv` to `name_YYYYmmdd_HHMMSS.csv` so repeated runs
/// never clobber each other.
fn timestamped(path: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transactions");
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => path.with_file_name(format!("{stem}_{stamp}.{ext}")),
        None => path.with_file_name(format!("{stem}_{stamp}")),
    }
}

fn unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
