use std::path::PathBuf;

use cropsight::analysis::ClassifierChain;
use cropsight::config::Configuration;
use cropsight::error::AppError;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <image> [--pretty] [--config <file>]", program);
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let mut image_path: Option<PathBuf> = None;
    let mut pretty = false;
    let mut config_path: Option<PathBuf> = None;

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pretty" => pretty = true,
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| AppError::Usage("--config requires a path".to_string()))?;
                config_path = Some(PathBuf::from(value));
            }
            other => image_path = Some(PathBuf::from(other)),
        }
    }

    let image_path =
        image_path.ok_or_else(|| AppError::Usage("No image path given".to_string()))?;

    let configuration = Configuration::load(config_path.as_deref())?;
    let pretty = pretty || configuration.pretty_output;

    let bytes = std::fs::read(&image_path)?;
    let image = image::load_from_memory(&bytes).map_err(cropsight::AnalysisError::from)?;

    let chain = ClassifierChain::new(configuration.analyzer)?;
    let result = chain.classify(image).await?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    println!("{}", rendered);
    Ok(())
}
