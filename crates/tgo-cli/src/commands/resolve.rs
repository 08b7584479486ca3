use std::error::Error;

use clap::Args;
use serde::Serialize;
use tgo_core::FactorRecord;
use tgo_engine::{Candidate, EngineHandle, Resolution, Tier};

use super::{print_candidates, print_json, HintArgs, Unresolved};

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Key, English or Thai name, or activity alias.
    pub token: String,
    #[command(flatten)]
    pub hint: HintArgs,
    /// Print the outcome as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
enum ResolveOutput<'a> {
    Found {
        matched_by: Tier,
        record: &'a FactorRecord,
    },
    NotFound {
        token: &'a str,
    },
    Ambiguous {
        token: &'a str,
        matched_by: Tier,
        candidates: Vec<Candidate>,
    },
}

pub fn run(engine: &EngineHandle, args: &ResolveArgs) -> Result<(), Box<dyn Error>> {
    let snapshot = engine.snapshot();
    let resolution = snapshot.resolve(&args.token, &args.hint.to_hint());
    let output = match &resolution {
        Resolution::Found { record, tier } => ResolveOutput::Found {
            matched_by: *tier,
            record: *record,
        },
        Resolution::NotFound => ResolveOutput::NotFound { token: &args.token },
        Resolution::Ambiguous { tier, candidates } => ResolveOutput::Ambiguous {
            token: &args.token,
            matched_by: *tier,
            candidates: candidates.iter().copied().map(Candidate::from).collect(),
        },
    };

    if args.json {
        print_json(&output)?;
    } else {
        match &output {
            ResolveOutput::Found { matched_by, record } => {
                println!("{} (matched by {matched_by})", record.key);
                println!("  name:     {}", record.name_en);
                if let Some(name_th) = &record.name_th {
                    println!("  name_th:  {name_th}");
                }
                println!("  category: {}", record.category);
                println!("  scope:    {}", record.scope);
                println!("  factor:   {} kg CO2e / {}", record.value, record.unit_en);
            }
            ResolveOutput::NotFound { .. } => {}
            ResolveOutput::Ambiguous { candidates, .. } => print_candidates(candidates),
        }
    }

    match output {
        ResolveOutput::Found { .. } => Ok(()),
        ResolveOutput::NotFound { token } => Err(Unresolved {
            token: token.to_string(),
            candidates: 0,
        }
        .into()),
        ResolveOutput::Ambiguous {
            token, candidates, ..
        } => Err(Unresolved {
            token: token.to_string(),
            candidates: candidates.len(),
        }
        .into()),
    }
}
