use std::error::Error;

use clap::Args;
use serde::Serialize;
use tgo_catalog::to_canonical_json_bytes;
use tgo_core::CatalogVersion;
use tgo_engine::EngineHandle;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit catalog provenance as canonical JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo<'a> {
    version: &'static str,
    catalog: &'a CatalogVersion,
    records: usize,
    generation: u64,
}

pub fn run(engine: &EngineHandle, args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    let snapshot = engine.snapshot();
    if !args.long {
        println!("tgo {} ({})", env!("CARGO_PKG_VERSION"), snapshot.version());
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        catalog: snapshot.version(),
        records: snapshot.catalog().len(),
        generation: snapshot.generation(),
    };
    let json = to_canonical_json_bytes(&info)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
