use eframe::NativeOptions;
use edublink::EduApp;
use edublink::config::QuizConfig;
use edublink::data::read_catalog_embedded;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    log::info!("starting EduBlink");

    let config = QuizConfig::load();
    let catalog = read_catalog_embedded()?;
    log::info!(
        "catalog loaded: {} topics, quiz time limit {}s",
        catalog.topics().len(),
        config.time_limit_seconds
    );

    let app = EduApp::new(catalog, config);
    eframe::run_native(
        "EduBlink",
        NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}
