use std::path::PathBuf;

use anyhow::Context;
use barkeep_core::{DeskState, print_banner, setup_environment};

/// Usage:
///
/// ```text
/// barkeep                    # load profiles, print a summary
/// barkeep import <file>      # import a profile over the first profile
/// barkeep export             # print the first profile as JSON
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境 (dotenv, 配置, 日志)
    let config = setup_environment();
    print_banner();
    tracing::info!(data_dir = %config.data_dir.display(), "Barkeep starting");

    // 2. 加载 profile
    let mut desk = DeskState::initialize(config)
        .await
        .context("failed to load profiles")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("import") => {
            let path = args
                .get(1)
                .map(PathBuf::from)
                .context("usage: barkeep import <file.json>")?;
            let profile_id = desk.import_file(&path).await?;
            println!("Imported profile {profile_id}");
        }
        Some("export") => {
            let (file_name, contents) = desk.export_focused()?;
            eprintln!("{file_name}");
            println!("{contents}");
        }
        Some(other) => anyhow::bail!("unknown command: {other}"),
        None => print_summary(&desk),
    }

    Ok(())
}

fn print_summary(desk: &DeskState) {
    println!("Profiles: {}", desk.book.profiles().len());
    for profile in desk.book.profiles() {
        let marker = if desk.book.focused_id() == Some(profile.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {} ({} menu entries)", profile.name, profile.menu.len());
    }
}
