use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use log::{error, info};

use cohort_builder::utils::io::write_matrix_tsv;
use cohort_builder::{DatasetBuilder, PipelineConfig, Result};

/// File names expected inside the data directory
const PATIENTS_FILE: &str = "patients.tsv";
const ADMISSIONS_FILE: &str = "admissions.tsv";
const TRAJECTORIES_FILE: &str = "trajectories.tsv";
const CONFIG_FILE: &str = "pipeline.json";

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| "data".to_string()));
    let out_dir = args.next().map_or_else(|| data_dir.clone(), PathBuf::from);

    match run(&data_dir, &out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Pipeline failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(data_dir: &Path, out_dir: &Path) -> Result<()> {
    let start = Instant::now();

    // An optional pipeline.json next to the extracts overrides the defaults
    let config_path = data_dir.join(CONFIG_FILE);
    let config = if config_path.exists() {
        info!("Using configuration from {}", config_path.display());
        PipelineConfig::from_json_file(&config_path)?
    } else {
        PipelineConfig::default()
    };
    info!("{config}");

    let dataset = DatasetBuilder::new()
        .with_config(config)
        .load_patients(&data_dir.join(PATIENTS_FILE))?
        .load_admissions(&data_dir.join(ADMISSIONS_FILE))?
        .load_trajectories(&data_dir.join(TRAJECTORIES_FILE))?
        .build()?;

    info!("{dataset}");

    std::fs::create_dir_all(out_dir)?;
    write_matrix_tsv(&dataset.split.train, &out_dir.join("train.tsv"))?;
    write_matrix_tsv(&dataset.split.test, &out_dir.join("test.tsv"))?;

    info!("Pipeline completed in {:?}", start.elapsed());

    Ok(())
}
