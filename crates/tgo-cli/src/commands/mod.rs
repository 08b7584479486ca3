pub mod catalog;
pub mod compute;
pub mod resolve;
pub mod version;

use std::error::Error;
use std::fmt;

use clap::Args;
use serde::Serialize;
use tgo_core::Scope;
use tgo_engine::{Candidate, Hint};

/// Disambiguation options shared by `resolve` and `compute`.
#[derive(Args, Debug, Default)]
pub struct HintArgs {
    /// Category name, English or Thai.
    #[arg(long)]
    pub category: Option<String>,
    /// Scope (1, 2, SCOPE_1, ...).
    #[arg(long)]
    pub scope: Option<Scope>,
    /// Activity unit, English or Thai.
    #[arg(long)]
    pub unit: Option<String>,
}

impl HintArgs {
    pub fn to_hint(&self) -> Hint {
        Hint {
            category: self.category.clone(),
            scope: self.scope,
            unit: self.unit.clone(),
        }
    }
}

/// A lookup that did not produce a single record.
#[derive(Debug)]
pub struct Unresolved {
    pub token: String,
    pub candidates: usize,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.candidates == 0 {
            write!(f, "no emission factor matches '{}'", self.token)
        } else {
            write!(
                f,
                "'{}' matches {} factors; narrow it with --category, --scope or --unit",
                self.token, self.candidates
            )
        }
    }
}

impl Error for Unresolved {}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_candidates(candidates: &[Candidate]) {
    for candidate in candidates {
        println!(
            "  {:<30} {:<12} {:<8} {}",
            candidate.key,
            candidate.scope.to_string(),
            candidate.unit,
            candidate.category
        );
    }
}
