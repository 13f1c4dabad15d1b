use anstyle::AnsiColor;
use anyhow::Context;
use anyhow::Result;
use clap::crate_authors;
use clap::crate_description;
use clap::crate_name;
use clap::crate_version;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use prismscpfe_lib::constants::style_from_fg;
use prismscpfe_lib::constants::ERROR_STYLE;
use prismscpfe_lib::constants::HELP_STYLE;
use prismscpfe_lib::constants::PRIMARY_STYLE;
use prismscpfe_lib::ctx;
use prismscpfe_lib::descriptors::extract_measurements;
use prismscpfe_lib::descriptors::PARAMETER_DESCRIPTORS;
use prismscpfe_lib::parameters::ParameterSet;

/// Util function for getting the style for the CLI
#[cfg(not(tarpaulin_include))]
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// Pretty print the version of prismscpfe.
#[cfg(not(tarpaulin_include))]
pub fn print_version(script: bool) {
    if script {
        println!("{} {}", crate_name!(), crate_version!());

        return;
    }

    println!(
        "{PRIMARY_STYLE}{}{PRIMARY_STYLE:#} at version {PRIMARY_STYLE}{}{PRIMARY_STYLE:#}",
        crate_name!(),
        crate_version!()
    );
    println!("{}", crate_description!());

    let authors = crate_authors!("\n");
    if !authors.is_empty() {
        println!("Authored by:\n{authors}");
    }
}

/// Util function: formatting a table for printing
///
/// input: Vec of rows, each row is a Vec of strings (columns)
///
/// output: String
pub fn format_table(data: Vec<Vec<String>>) -> String {
    if data.is_empty() {
        return String::new();
    }

    let mut max_widths = vec![0; data[0].len()];
    for row in &data {
        for (i, item) in row.iter().enumerate() {
            max_widths[i] = max_widths[i].max(item.len());
        }
    }

    let mut result = String::new();
    for row in data {
        let formatted_row: Vec<String> = row
            .into_iter()
            .enumerate()
            .map(|(i, item)| format!("{:width$}", item, width = max_widths[i]))
            .collect();

        if !result.is_empty() {
            result.push('\n');
        }

        result.push_str(formatted_row.join(" | ").trim_end());
    }

    result
}

/// One `key = value` line per flattened entry.
pub fn format_parameters(set: &ParameterSet) -> String {
    set.iter()
        .map(|(key, value)| format!("{key} = {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A table of the measurements that would be attached for `set`.
pub fn format_measurements(set: &ParameterSet) -> Result<String> {
    let mut rows = vec![vec![
        "label".to_string(),
        "type".to_string(),
        "value".to_string(),
    ]];

    for record in extract_measurements(PARAMETER_DESCRIPTORS, set)? {
        rows.push(vec![
            record.label,
            record.value.kind().to_string(),
            record.value.to_string(),
        ]);
    }

    Ok(format_table(rows))
}

/// Generates the progress bar used by the cli.
pub fn generate_progress_bar(len: u64, message: &'static str) -> Result<ProgressBar> {
    let prog_style = ProgressStyle::with_template(
        "{prefix}[{spinner:.green}] {bar:.green/blue} {pos}/{len} {msg}",
    )
    .with_context(ctx!("Failed to create the progress bar",;"",))?
    .progress_chars("##-");

    let bar = ProgressBar::new(len);
    bar.set_style(prog_style);
    bar.set_prefix(message);

    Ok(bar)
}

/// Ask the user a yes/no question
pub fn query_yes_no(question: &str) -> Result<bool> {
    let response = inquire::Confirm::new(&format!("{question} [y/n]: ")).prompt()?;
    Ok(response)
}

#[cfg(test)]
#[path = "tests/printing.rs"]
mod tests;
