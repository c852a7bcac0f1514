use anyhow::Context;
use clap::{Parser, ValueEnum};
use rsa_link::core::toc::{rebuild_mapping, TocSource, DEFAULT_FIXTURE, DEFAULT_OUTPUT, TOC_URL};
use rsa_link::utils::logger;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceKind {
    /// Fetch the table of contents from the archive
    Live,
    /// Read a saved copy of the table of contents
    Fixture,
}

#[derive(Parser)]
#[command(name = "rebuild-mapping")]
#[command(about = "Rebuild the chapter-to-folder mapping from the RSA table of contents")]
struct Args {
    #[arg(long, value_enum, default_value = "fixture")]
    source: SourceKind,

    /// Saved table of contents used with --source fixture
    #[arg(long, default_value = DEFAULT_FIXTURE)]
    fixture: PathBuf,

    /// Table of contents URL used with --source live
    #[arg(long, default_value = TOC_URL)]
    toc_url: String,

    /// Where to write the mapping JSON
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let source = match args.source {
        SourceKind::Live => TocSource::Live { url: args.toc_url },
        SourceKind::Fixture => TocSource::Fixture { path: args.fixture },
    };
    tracing::info!("🚀 Rebuilding mapping from {:?}", source);

    let payload = rebuild_mapping(&source, &args.out)
        .await
        .with_context(|| format!("failed to rebuild {}", args.out.display()))?;

    println!(
        "Wrote {}: {} direct entries, {} title ranges",
        args.out.display(),
        payload.chapter_to_title.len(),
        payload.title_ranges.len()
    );

    Ok(())
}
