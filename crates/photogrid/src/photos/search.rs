use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use photogrid_core::key::PageLocation;
use std::path::PathBuf;

use super::{run_pipeline, Document, HtmlFile, Layout, PipelineConfig, SearchOutput};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Search term. Read from the page URL's `search` parameter when omitted
    pub search: Option<String>,

    /// Location of the page, carrying the API key (e.g. "https://example.com/?key=MY_API_KEY")
    #[arg(long, env = "PHOTOGRID_PAGE_URL")]
    pub page_url: String,

    /// Which container the photos are rendered into
    #[arg(long, default_value = "photos")]
    pub layout: Layout,

    /// HTML file whose container is rewritten in place. Prints a new page when omitted
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// Pixabay API endpoint
    #[arg(long, env = "PIXABAY_API_BASE", default_value = super::PIXABAY_API_BASE)]
    pub api_base: String,

    /// HTML-escape image attributes instead of inserting them verbatim
    #[arg(long)]
    pub escape: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let location = PageLocation::parse(&options.page_url).map_err(|e| eyre!("{}", e))?;
    let config = PipelineConfig {
        api_base: options.api_base.clone(),
        layout: options.layout.into(),
        escape: options.escape,
    };
    let client = reqwest::Client::new();

    if global.verbose {
        eprintln!(
            "Searching for {:?} into {}...",
            options.search.as_deref().unwrap_or("(from page URL)"),
            config.layout.selector()
        );
    }

    match &options.page {
        Some(path) => {
            let mut target = HtmlFile::new(path);
            let output =
                run_pipeline(&client, &location, options.search.clone(), &mut target, &config)
                    .await?;

            if global.verbose {
                eprintln!("Updated {}", path.display());
            }

            if options.json {
                output_json(&output)?;
            } else {
                output_formatted(&output);
            }
        }
        None => {
            let mut target = Document::for_layout(config.layout);
            let result =
                run_pipeline(&client, &location, options.search.clone(), &mut target, &config)
                    .await;

            match result {
                Ok(output) if options.json => output_json(&output)?,
                Ok(_) => println!("{}", target.html()),
                Err(err) => {
                    // The error fragment is part of the page.
                    if matches!(err.downcast_ref::<Error>(), Some(Error::MissingKey)) {
                        println!("{}", target.html());
                    }
                    return Err(err);
                }
            }
        }
    }

    Ok(())
}

fn output_json(output: &SearchOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &SearchOutput) {
    println!(
        "\n{} {} {}\n",
        "Rendered".bright_cyan().bold(),
        output.images.len().to_string().bright_white().bold(),
        format!("photos for {:?}", output.search).bright_cyan().bold()
    );

    if output.images.is_empty() {
        println!("{}", "No photos matched.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["#", "Tags", "Page", "Image"]);
    for (idx, image) in output.images.iter().enumerate() {
        table.add_row(prettytable::row![idx + 1, image.alt, image.link, image.src]);
    }
    table.printstd();

    if let Some(total_hits) = output.total_hits {
        println!("\n{}: {}", "Available hits".green(), total_hits);
    }
    println!();
}
