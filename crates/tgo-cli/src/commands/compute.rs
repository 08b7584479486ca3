use std::error::Error;

use clap::Args;
use tgo_core::Language;
use tgo_engine::{EngineConfig, EngineHandle, Estimate, EstimateRequest};

use super::{print_candidates, print_json, HintArgs, Unresolved};

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Key, English or Thai name, or activity alias.
    pub token: String,
    /// Activity amount in the factor's unit.
    pub amount: f64,
    #[command(flatten)]
    pub hint: HintArgs,
    /// Label language for the unit (en, th); defaults to the configured one.
    #[arg(long)]
    pub lang: Option<Language>,
    /// Print the estimate as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(
    engine: &EngineHandle,
    config: &EngineConfig,
    args: &ComputeArgs,
) -> Result<(), Box<dyn Error>> {
    let request =
        EstimateRequest::new(args.token.clone(), args.amount).with_hint(args.hint.to_hint());
    let estimate = engine.estimate(&request)?;
    if args.json {
        print_json(&estimate)?;
    }

    match estimate {
        Estimate::Computed(result) => {
            if !args.json {
                let language = args.lang.unwrap_or(config.language);
                let unit = match language {
                    Language::Th => result.unit_th.as_deref().unwrap_or(&result.unit),
                    Language::En => &result.unit,
                };
                let name = match language {
                    Language::Th => result.name_th.as_deref().unwrap_or(&result.name_en),
                    Language::En => &result.name_en,
                };
                println!(
                    "{} kg CO2e  ({} {unit} x {} | {name} [{}] {})",
                    result.co2_equivalent,
                    result.amount,
                    result.factor_value,
                    result.key,
                    result.scope
                );
            }
            Ok(())
        }
        Estimate::NotFound { token } => Err(Unresolved {
            token,
            candidates: 0,
        }
        .into()),
        Estimate::Ambiguous { token, candidates } => {
            if !args.json {
                print_candidates(&candidates);
            }
            Err(Unresolved {
                token,
                candidates: candidates.len(),
            }
            .into())
        }
    }
}
