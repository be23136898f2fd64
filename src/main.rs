mod app;
mod models;
mod mvu;
mod ui;

use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match app::run()? {
        Some(record) => {
            info!(
                "picked {}/{}/{} {}:{}:{}",
                record.month, record.day, record.year, record.hour, record.minutes, record.seconds
            );
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        None => info!("window closed without a selection"),
    }

    Ok(())
}
