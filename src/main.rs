mod db;
mod models;
mod run;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<_> = std::env::args().collect();
    let mut db = db::Database::open(&data_file_path()?)?;

    match args.len() {
        1 => run::as_tui(&mut db),
        2.. => run::as_cli(&args, &mut db),
        _ => {
            eprintln!("Usage: outlay [command]");
            Ok(())
        }
    }
}

fn data_file_path() -> Result<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "outlay", "Outlay")
        .ok_or_else(|| anyhow::anyhow!("No usable data directory on this platform"))?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Could not create data directory {}", data_dir.display()))?;
    Ok(data_dir.join("outlay.db"))
}
