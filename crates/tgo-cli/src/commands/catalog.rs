use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use tgo_catalog::{dataset_to_json, lint_units};
use tgo_core::Language;
use tgo_engine::EngineHandle;

use super::print_json;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List factor records, optionally for one category.
    List {
        #[arg(long)]
        category: Option<String>,
        /// Label language (en, th).
        #[arg(long, default_value = "en")]
        lang: Language,
        #[arg(long)]
        json: bool,
    },
    /// Check unit pairs and report tokens shared by several records.
    Verify,
    /// Write the loaded catalog as a JSON dataset.
    Export {
        /// Destination file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub fn run(engine: &EngineHandle, args: &CatalogArgs) -> Result<(), Box<dyn Error>> {
    match &args.command {
        CatalogCommand::List {
            category,
            lang,
            json,
        } => list(engine, category.as_deref(), *lang, *json),
        CatalogCommand::Verify => verify(engine),
        CatalogCommand::Export { out } => export(engine, out.as_ref()),
    }
}

fn list(
    engine: &EngineHandle,
    category: Option<&str>,
    lang: Language,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let snapshot = engine.snapshot();
    let hint = category.map(tgo_engine::Hint::category);
    let records: Vec<_> = snapshot
        .catalog()
        .records()
        .iter()
        .filter(|record| hint.as_ref().map_or(true, |hint| hint.matches(record)))
        .collect();
    if json {
        return print_json(&records);
    }
    let mut current = None;
    for record in records {
        let label = record.category_label(lang);
        if current != Some(label) {
            println!("{label} ({})", record.scope);
            current = Some(label);
        }
        println!(
            "  {:<30} {:>10} kg CO2e / {}",
            record.key,
            record.value,
            record.unit(lang)
        );
    }
    Ok(())
}

fn verify(engine: &EngineHandle) -> Result<(), Box<dyn Error>> {
    let snapshot = engine.snapshot();
    let catalog = snapshot.catalog();
    println!("{}", catalog.version());
    println!(
        "{} records in {} categories, {} lookup tokens",
        catalog.len(),
        catalog.categories().len(),
        snapshot.index().len()
    );

    let shared = snapshot.index().ambiguous_tokens();
    if !shared.is_empty() {
        println!("tokens that need a hint:");
        for (tier, token, count) in &shared {
            println!("  [{tier}] {token} ({count} records)");
        }
    }

    let mismatches = lint_units(catalog);
    for mismatch in &mismatches {
        println!(
            "unit mismatch: {} ({} / {})",
            mismatch.key, mismatch.unit_en, mismatch.unit_th
        );
    }
    if mismatches.is_empty() {
        println!("unit pairs ok");
        Ok(())
    } else {
        Err(format!("{} unit pair mismatches", mismatches.len()).into())
    }
}

fn export(engine: &EngineHandle, out: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let dataset = engine.snapshot().catalog().to_dataset();
    let json = dataset_to_json(&dataset)?;
    match out {
        Some(path) => {
            fs::write(path, json)?;
            println!("wrote {} records to {}", dataset.factors.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
