mod fetch;
pub mod pipeline;
pub mod search;
pub mod target;

use crate::prelude::{eprintln, *};

pub use pipeline::{run_pipeline, PipelineConfig, SearchOutput};
pub use search::SearchOptions;
pub use target::{Document, HtmlFile};

pub use photogrid_core::search::PIXABAY_API_BASE;

#[derive(Debug, Clone, Copy, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Render into the `.photos` container (default)
    Photos,
    /// Render into the `.list` container
    List,
}

impl From<Layout> for photogrid_core::page::Layout {
    fn from(l: Layout) -> Self {
        match l {
            Layout::Photos => photogrid_core::page::Layout::Photos,
            Layout::List => photogrid_core::page::Layout::List,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(name = "photos")]
#[command(about = "Pixabay photo search operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Search Pixabay and render the results into a page container
    #[clap(name = "search")]
    Search(SearchOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Search(options) => {
            if global.verbose {
                eprintln!("Pixabay API Base: {}", options.api_base);
                eprintln!();
            }
            search::run(options, global).await
        }
    }
}
