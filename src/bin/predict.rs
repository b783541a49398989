// Command-line shelf life prediction
//
// Usage: cargo run --features cli --bin predict -- "Whole milk" --temperature 4 --humidity 60

use clap::Parser;
use shelf_life_predictor::report::{JsonFormatter, MarkdownFormatter};
use shelf_life_predictor::validation::{validate, RawNumber, RawPredictionInput};
use shelf_life_predictor::predict;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "predict", version, about = "Estimate remaining shelf life for a food item")]
struct Cli {
    /// Food name, e.g. "Milk", "Apple", "Chicken"
    food_name: String,
    #[arg(long, allow_hyphen_values = true, help = "Storage temperature in °C")]
    temperature: String,
    #[arg(long, allow_hyphen_values = true, help = "Relative humidity in % (0-100)")]
    humidity: String,
    #[arg(long, help = "frozen, refrigerated, room_temperature or unspecified")]
    storage: Option<String>,
    #[arg(long, help = "sealed, opened, loose or unspecified")]
    packaging: Option<String>,
    #[arg(long, help = "Stated expiry date (YYYY-MM-DD)")]
    expiry: Option<String>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
}

impl Cli {
    fn into_raw(self) -> RawPredictionInput {
        RawPredictionInput {
            food_name: self.food_name,
            temperature: Some(RawNumber::Text(self.temperature)),
            humidity: Some(RawNumber::Text(self.humidity)),
            storage: self.storage,
            packaging: self.packaging,
            expiry: self.expiry,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_life_predictor=warn,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let json = cli.json;
    let request = validate(&cli.into_raw())?;
    let prediction = predict(&request);

    if json {
        println!("{}", JsonFormatter::format(&prediction)?);
    } else {
        print!("{}", MarkdownFormatter::format(&prediction));
    }

    Ok(())
}
