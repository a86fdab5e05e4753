use anyhow::{Context, Result};
use colored::Colorize;
use crew_core::persona::all_personas;

pub fn run(json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(all_personas())
            .context("Failed to serialize personas")?;
        println!("{}", out);
        return Ok(());
    }

    for persona in all_personas() {
        println!(
            "{} {}",
            persona.display_name.bright_magenta().bold(),
            format!("({})", persona.focus).bright_black()
        );
        println!("  {}", persona.title.bright_blue());
        println!("  {}", persona.mission);
        println!("  {}", persona.specialty.join(", ").green());
        println!();
    }

    Ok(())
}
