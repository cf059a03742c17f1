//! `shelfprice run` / `shelfprice validate` — config-driven repricing.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;

use shelfprice_reprice::config::CatalogsConfig;
use shelfprice_reprice::load::{load_inventory_csv, load_wholesale_csv};
use shelfprice_reprice::model::{RepriceMeta, RepriceSummary};
use shelfprice_reprice::{CatalogSet, ProductRecord, RepriceConfig, RepriceError};

use crate::exit_codes::{
    reprice_exit_code, EXIT_ERROR, EXIT_REPRICE_INPUT, EXIT_REPRICE_INVALID_CONFIG,
    EXIT_REPRICE_RUNTIME,
};
use crate::report;
use crate::CliError;

/// Fixed-width listings written next to the upload files.
pub const ORIGINAL_REPORT: &str = "original-products.txt";
pub const WHOLESALE_REPORT: &str = "wholesale-products.txt";
pub const UPDATED_REPORT: &str = "updated-products.txt";
pub const MISSING_REPORT: &str = "missing-products.txt";
pub const EXCLUDED_REPORT: &str = "excluded-products.txt";

const DEFAULT_OUT_DIR: &str = "out";

#[derive(Subcommand)]
pub enum RepriceCommands {
    /// Reprice the inventory catalog from a TOML config file
    #[command(after_help = "\
Examples:
  shelfprice run weekly.reprice.toml
  shelfprice run weekly.reprice.toml --out-dir ./upload
  shelfprice run weekly.reprice.toml --json
  shelfprice run weekly.reprice.toml --output result.json")]
    Run {
        /// Path to the .reprice.toml config file
        config: PathBuf,

        /// Directory for upload files and reports (overrides [output].dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Output JSON to stdout instead of human summary
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a reprice config without running
    #[command(after_help = "\
Examples:
  shelfprice validate weekly.reprice.toml")]
    Validate {
        /// Path to the .reprice.toml config file
        config: PathBuf,
    },
}

pub fn cmd_reprice(cmd: RepriceCommands) -> Result<(), CliError> {
    match cmd {
        RepriceCommands::Run { config, out_dir, json, output } => {
            cmd_run(config, out_dir, json, output)
        }
        RepriceCommands::Validate { config } => cmd_validate(config),
    }
}

fn reprice_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

impl From<RepriceError> for CliError {
    fn from(err: RepriceError) -> Self {
        let hint = match err {
            RepriceError::MissingColumn { .. } => {
                Some("column names are set under [catalogs.<name>.columns]".to_string())
            }
            _ => None,
        };
        CliError { code: reprice_exit_code(&err), message: err.to_string(), hint }
    }
}

/// JSON document emitted by `run --json` / `--output`.
#[derive(Serialize)]
struct RunDocument<'a> {
    meta: &'a RepriceMeta,
    summary: &'a RepriceSummary,
    updated: &'a [ProductRecord],
    missing: &'a [ProductRecord],
    excluded: &'a [ProductRecord],
}

fn load_config(config_path: &Path) -> Result<RepriceConfig, CliError> {
    let config_str = std::fs::read_to_string(config_path).map_err(|e| {
        reprice_err(EXIT_REPRICE_INPUT, format!("cannot read config {}: {e}", config_path.display()))
    })?;
    Ok(RepriceConfig::from_toml(&config_str)?)
}

fn catalogs_section(config: &RepriceConfig) -> Result<&CatalogsConfig, CliError> {
    config.catalogs.as_ref().ok_or_else(|| {
        reprice_err(EXIT_REPRICE_INVALID_CONFIG, "config has no [catalogs] section")
            .with_hint("add [catalogs.wholesale] and [catalogs.inventory] with a `file` each")
    })
}

fn read_catalog(base_dir: &Path, file: &str) -> Result<String, CliError> {
    let path = base_dir.join(file);
    std::fs::read_to_string(&path)
        .map_err(|e| reprice_err(EXIT_REPRICE_INPUT, format!("cannot read {}: {e}", path.display())))
}

/// Load all configured catalogs, resolving paths relative to `base_dir`.
fn load_catalogs(base_dir: &Path, catalogs: &CatalogsConfig) -> Result<CatalogSet, CliError> {
    let wholesale = load_wholesale_csv(
        "wholesale",
        &read_catalog(base_dir, &catalogs.wholesale.file)?,
        &catalogs.wholesale,
    )?;

    let discounts = match catalogs.discounts {
        Some(ref d) => load_wholesale_csv("discounts", &read_catalog(base_dir, &d.file)?, d)?,
        None => Vec::new(),
    };

    let inventory =
        load_inventory_csv(&read_catalog(base_dir, &catalogs.inventory.file)?, &catalogs.inventory)?;

    Ok(CatalogSet::new(wholesale, discounts, inventory))
}

fn write_file(path: &Path, result: std::io::Result<()>) -> Result<(), CliError> {
    result.map_err(|e| {
        reprice_err(EXIT_REPRICE_RUNTIME, format!("cannot write {}: {e}", path.display()))
    })
}

fn cmd_run(
    config_path: PathBuf,
    out_dir: Option<PathBuf>,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    let catalogs_config = catalogs_section(&config)?;

    // Resolve file paths relative to config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let out_dir = out_dir.unwrap_or_else(|| {
        base_dir.join(config.output.dir.as_deref().unwrap_or(DEFAULT_OUT_DIR))
    });
    std::fs::create_dir_all(&out_dir).map_err(|e| {
        reprice_err(EXIT_REPRICE_RUNTIME, format!("cannot create {}: {e}", out_dir.display()))
    })?;

    log::info!("loading catalogs relative to {}", base_dir.display());
    let mut catalogs = load_catalogs(base_dir, catalogs_config)?;

    // Pre-run listings: inventory as loaded, wholesale before discounts
    let path = out_dir.join(ORIGINAL_REPORT);
    write_file(&path, report::write_table(&path, &catalogs.inventory))?;
    let path = out_dir.join(WHOLESALE_REPORT);
    write_file(&path, report::write_table(&path, &catalogs.wholesale))?;

    let result = shelfprice_reprice::run(&config, &mut catalogs)?;

    write_file(&out_dir, report::write_upload_files(&out_dir, &catalogs.updated))?;
    for (name, products) in [
        (UPDATED_REPORT, &catalogs.updated),
        (MISSING_REPORT, &catalogs.missing),
        (EXCLUDED_REPORT, &catalogs.excluded),
    ] {
        let path = out_dir.join(name);
        write_file(&path, report::write_table(&path, products))?;
    }

    if json_output || output_file.is_some() {
        let doc = RunDocument {
            meta: &result.meta,
            summary: &result.summary,
            updated: &catalogs.updated,
            missing: &catalogs.missing,
            excluded: &catalogs.excluded,
        };
        let json_str = serde_json::to_string_pretty(&doc)
            .map_err(|e| reprice_err(EXIT_ERROR, format!("JSON serialization error: {e}")))?;

        if let Some(ref path) = output_file {
            write_file(path, std::fs::write(path, &json_str))?;
            eprintln!("wrote {}", path.display());
        }

        if json_output {
            println!("{json_str}");
        }
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "repriced {} of {} products: {} missing from wholesale, {} excluded ({} by keyword, {} by policy)",
        s.updated,
        s.inventory_total,
        s.missing,
        s.excluded,
        s.excluded_by_keyword,
        s.excluded_by_policy,
    );
    eprintln!("output written to {}", out_dir.display());

    Ok(())
}

fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    let catalogs = catalogs_section(&config)?;

    let policy_line = |label: &str, p: &shelfprice_reprice::PricingPolicy| {
        if p.enabled {
            format!(
                "{label}: x{} from {}, +{}/weight",
                p.multiplier, p.base_source, p.weight_surcharge
            )
        } else {
            format!("{label}: disabled")
        }
    };

    eprintln!("config ok: {}", config.name);
    eprintln!("  {}", policy_line("single-pack", &config.single_pack));
    eprintln!("  {}", policy_line("multi-pack", &config.multi_pack));
    eprintln!("  cents: .{:02}", config.round_up_cents);
    eprintln!(
        "  catalogs: wholesale={} discounts={} inventory={}",
        catalogs.wholesale.file,
        catalogs.discounts.as_ref().map(|d| d.file.as_str()).unwrap_or("-"),
        catalogs.inventory.file,
    );
    Ok(())
}
