use spectral_history::{RunConfig, run};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let report = run(&RunConfig::default())?;

    println!(
        "Parsed {} out files in {:.8} seconds...\n",
        report.files,
        report.elapsed.as_secs_f64()
    );
    Ok(())
}
