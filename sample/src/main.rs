// File-backed demo
//
// Writes a project record the way the first release saved it, reads it back,
// upgrades it to the current release and saves the upgraded record next to it.
//
// Run with: cargo run -p model_upgrade_sample -- --data-dir ./sample-data

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;
use model_upgrade::prelude::*;
use model_upgrade_sample::models::project::{ProjectVersion, Version1};
use model_upgrade_sample::{ProjectConverter, project_converter};

#[derive(Parser, Debug)]
#[command(about = "Upgrade a stored project record to the current release")]
struct Args {
    /// Directory the record files are written to
    #[arg(long, default_value = "sample-data")]
    data_dir: PathBuf,

    /// Id of the sample record
    #[arg(long, default_value = "TestV1")]
    uid: String,

    /// Name of the sample record
    #[arg(long, default_value = "Test1")]
    name: String,

    /// Match version tags exactly instead of ignoring case
    #[arg(long)]
    exact: bool,
}

fn write_record(path: &Path, record: &RecordEnvelope) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(record)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn read_record(path: &Path) -> anyhow::Result<RecordEnvelope> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(serde_json::from_str(&text)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let matching = if args.exact {
        NameMatching::Exact
    } else {
        NameMatching::CaseInsensitive
    };
    let converter = project_converter(ConverterConfig::builder().name_matching(matching).build())?;

    fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("creating {}", args.data_dir.display()))?;
    let v1_path = args.data_dir.join("project_v1.json");
    let v3_path = args.data_dir.join("project_v3.json");

    // Sample data, as an older release stored it.
    let stored = converter.envelope(&Version1 {
        uid: args.uid,
        name: args.name,
    })?;
    write_record(&v1_path, &stored)?;
    info!("Wrote {} record to {}", stored.version_tag, v1_path.display());

    let loaded = read_record(&v1_path)?;
    let v3 = converter.parse_record(&loaded)?;
    println!("Parsed {} as {:?}", loaded.version_tag, v3);

    let upgraded = converter.upgrade_record(&loaded)?;
    write_record(&v3_path, &upgraded)?;
    println!(
        "Upgraded {} -> {}, saved to {}",
        loaded.version_tag,
        upgraded.version_tag,
        v3_path.display()
    );

    let version = stored_version(&converter, &loaded)?;
    let path = converter.resolver().path(converter.head(), version)?;
    println!("Converters applied: {}", path.converters().join(" -> "));

    Ok(())
}

fn stored_version(
    converter: &ProjectConverter,
    record: &RecordEnvelope,
) -> anyhow::Result<ProjectVersion> {
    converter
        .registry()
        .resolve(&record.version_tag, converter.config().name_matching)
        .with_context(|| format!("unregistered version {}", record.version_tag))
}
