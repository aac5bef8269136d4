use anyhow::Context;
use clap::Parser;
use site_populate::core::{ConfigProvider, Storage};
use site_populate::utils::{logger, validation::Validate};
use site_populate::{
    Bootstrapper, CliConfig, DataLoader, DataSource, HostContract, HtmlDocument, LocalStorage,
    PopulateOutcome, SiteError, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting site-populate");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path).unwrap_or_else(|e| exit_with(&e));
            if let Err(e) = config.validate() {
                exit_with(&e);
            }
            Some(config)
        }
        None => None,
    };

    let page = match &file_config {
        Some(config) => populate(&cli, config).await?,
        None => populate(&cli, &cli).await?,
    };

    if cli.stdout {
        println!("{}", page.as_str());
        return Ok(());
    }

    let storage = LocalStorage::new(cli.output_path.clone());
    let file_name = cli.host_file_name();
    storage
        .write_file(&file_name, page.as_str().as_bytes())
        .await
        .with_context(|| format!("failed to write {}", storage.full_path(&file_name)))?;

    tracing::info!("📁 Output saved to: {}", storage.full_path(&file_name));
    println!("📁 Output saved to: {}", storage.full_path(&file_name));

    Ok(())
}

async fn populate<C: ConfigProvider>(cli: &CliConfig, config: &C) -> anyhow::Result<HtmlDocument> {
    let html = tokio::fs::read_to_string(&cli.host_page)
        .await
        .with_context(|| format!("failed to read host page {}", cli.host_page))?;
    let mut document = HtmlDocument::new(html);

    let host_dir = cli.host_dir();
    let source = DataSource::resolve(config.data_source(), host_dir.as_deref());
    let bootstrapper = Bootstrapper::new(DataLoader::new(source), HostContract::from_config(config));

    // 載入失敗或找不到頁面時，頁面保持原樣輸出
    match bootstrapper.populate(&mut document, &cli.location()).await {
        PopulateOutcome::Rendered(page) => tracing::debug!("Populated {:?} page", page),
        PopulateOutcome::Skipped(reason) => {
            tracing::info!("Host page left unpopulated: {}", reason)
        }
    }

    Ok(document)
}

fn exit_with(e: &SiteError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
