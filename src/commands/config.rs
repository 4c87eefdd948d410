use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::config::TimetableConfig;

pub fn run(config: &TimetableConfig, init: bool) -> Result<()> {
    let config_path = TimetableConfig::config_path()?;

    if init {
        if TimetableConfig::create_default_config(&config_path)? {
            println!("Created {}", config_path.display());
        } else {
            println!("{}", format!("{} already exists", config_path.display()).dimmed());
        }
    }

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Calendar:  {}", config.calendar_path().display());
    println!();
    println!("{}", "Effective configuration".bold());
    print!("{}", config.to_toml()?);

    Ok(())
}
