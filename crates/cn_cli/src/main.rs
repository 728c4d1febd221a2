use anyhow::Result;
use clap::Parser;
use cn_core::ArticleCatalog;
use cn_query::{evaluate, ArticleView, FeedStats, QuerySpec, SortKey};
use cn_storage::MemoryCatalog;
use cn_web::AppState;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chronicle article feed tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Query the demo catalog and print the resulting feed
    Feed {
        /// Free-text search over titles and excerpts
        #[arg(long)]
        search: Option<String>,
        /// Category filter ("All" disables it)
        #[arg(long)]
        category: Option<String>,
        /// Sort order: latest, trending, most-liked or most-viewed
        #[arg(long, default_value = "latest")]
        sort: SortKey,
    },
    /// Print the admin roll-up figures for the demo catalog
    Stats,
    /// Serve the stub article API
    Serve {
        #[arg(long, default_value = "3000")]
        port: u16,
    },
}

fn render_feed(feed: &[cn_core::Article]) {
    println!("Found {} articles", feed.len());
    for article in feed {
        let view = ArticleView::from(article);
        println!();
        println!("[{}] {}", view.category, view.title);
        if !view.excerpt.is_empty() {
            println!("  {}", view.excerpt);
        }
        println!("  {} | {} views | {} likes", view.date, view.views, view.likes);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let catalog = MemoryCatalog::with_demo_articles();

    match cli.command {
        Commands::Feed {
            search,
            category,
            sort,
        } => {
            let mut spec = QuerySpec::new().with_sort(sort);
            if let Some(term) = search {
                spec = spec.with_search(term);
            }
            if let Some(category) = category {
                spec = spec.with_category(category);
            }

            let articles = catalog.all().await?;
            let feed = evaluate(&articles, &spec);
            if feed.is_empty() {
                println!("No articles found. Try adjusting your search or filters.");
            } else {
                render_feed(&feed);
            }
        }
        Commands::Stats => {
            let articles = catalog.all().await?;
            let stats = FeedStats::collect(&articles);
            println!("Total articles: {}", stats.total);
            println!("Published:      {}", stats.published);
            println!("Drafts:         {}", stats.drafts);
            println!("Total views:    {}", stats.total_views);
            println!("Total likes:    {}", stats.total_likes);
        }
        Commands::Serve { port } => {
            let state = AppState {
                catalog: Arc::new(catalog),
            };
            let app = cn_web::create_app(state);
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
            info!("📰 Article API listening on port {}", port);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
