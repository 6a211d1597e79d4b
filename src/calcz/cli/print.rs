use calcz::api::{CmdMessage, MessageLevel};
use calcz::error::Result;
use calcz::model::{Calculation, OutputFormat};
use colored::Colorize;

/// Results go to stdout, one line per calculation.
pub(super) fn print_calculations(calcs: &[Calculation], format: OutputFormat) -> Result<()> {
    for line in render_calculations(calcs, format)? {
        println!("{}", line);
    }
    Ok(())
}

/// Messages go to stderr so stdout stays parseable.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

fn render_calculations(calcs: &[Calculation], format: OutputFormat) -> Result<Vec<String>> {
    calcs
        .iter()
        .map(|calc| match format {
            OutputFormat::Text => Ok(calc.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(calc)?),
        })
        .collect()
}
