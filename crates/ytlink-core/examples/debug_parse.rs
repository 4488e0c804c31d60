//! Debug script to inspect how URLs are interpreted
//!
//! Run with: RUST_LOG=ytlink_core=trace cargo run --example debug_parse -p ytlink-core -- <url>...

use tracing_subscriber::EnvFilter;
use ytlink_core::{IframeOptions, YoutubeUrl};

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ytlink_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = vec![
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&watch=1&list=PL1".to_string(),
            "https://youtu.be/dQw4w9WgXcQ?t=1h2m3s".to_string(),
            "https://vimeo.com/76979871".to_string(),
        ];
    }

    for input in &inputs {
        let url = YoutubeUrl::parse(input);
        println!("{}", input);
        println!("   Host: {:?}", url.hostname());
        println!("   Residual query: {:?}", url.residual_query());

        match url.validate() {
            Ok(id) => {
                println!("   ✓ ID: {}", id);
                println!("   Canonical: {}", url.canonical_url().unwrap_or_default());
                println!("   Embed: {}", url.embedding_url().unwrap_or_default());
                println!("   Short: {}", url.short_url().unwrap_or_default());
                println!("   Thumbnail: {}", url.thumbnail_url().unwrap_or_default());
                println!("   Start at: {}s", url.start_at_second().unwrap_or(0));
                println!(
                    "   Iframe:\n{}",
                    url.iframe(&IframeOptions::default()).unwrap_or_default()
                );
            }
            Err(e) => println!("   ✗ {}", e),
        }
        println!();
    }
}
