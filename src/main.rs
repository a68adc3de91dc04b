use vowel_count::utils::logger;
use vowel_count::{CountConfig, CountDriver, LineReporter};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger();

    let config = CountConfig::default();
    tracing::debug!("Config: {:?}", config);

    let reporter = LineReporter::with_label(std::io::stdout().lock(), config.label.clone());
    let mut driver = CountDriver::new(reporter, config);

    let count = driver.run()?;
    tracing::info!("Counted {} vowels in {} characters", count.vowels, count.text_len);

    Ok(())
}
