use std::io::Read;

use anyhow::{Context, Result, bail};
use crew_application::mission_endpoint::INVALID_IDEA_MESSAGE;
use crew_application::synthesize;

/// Prints the mission document for an idea given as arguments or on stdin.
pub fn run(words: &[String], pretty: bool) -> Result<()> {
    let idea = if words.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read idea from stdin")?;
        input
    } else {
        words.join(" ")
    };

    let document = match synthesize(&idea) {
        Ok(document) => document,
        Err(e) if e.is_invalid_input() => bail!(INVALID_IDEA_MESSAGE),
        Err(e) => return Err(e).context("Mission synthesis failed"),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
    .context("Failed to serialize mission document")?;
    println!("{}", json);

    Ok(())
}
