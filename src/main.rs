use anyhow::Result;
use clap::Parser;
use netease_playlist_exporter::ExportConfig;

#[derive(Parser, Debug)]
#[command(name = "netease-playlist-exporter", version)]
#[command(
    about = "Export NetEase Cloud Music playlists to CSV",
    long_about = "Reads ~/AppData/Local/NetEase/CloudMusic/Library/webdb.dat and writes \
                  one CSV per playlist plus an aggregate CSV into ./exported_playlists"
)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Per-playlist problems never change the exit status
    netease_playlist_exporter::run(ExportConfig::default_paths())?;

    Ok(())
}
