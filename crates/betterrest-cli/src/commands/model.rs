use betterrest_core::{BedtimeEstimator, Config};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the active model weights
    Show {
        /// Print the weights as JSON
        #[arg(long)]
        json: bool,
    },
    /// Probe the model with the configured default inputs
    Check,
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        ModelAction::Show { json } => {
            let model = config.load_model()?;
            let weights = model.weights();
            if json {
                println!("{}", serde_json::to_string_pretty(&weights)?);
            } else {
                match &config.model.path {
                    Some(path) => println!("source: {}", path.display()),
                    None => println!("source: bundled"),
                }
                println!("intercept:       {}", weights.intercept);
                println!("wake:            {}", weights.wake);
                println!("estimated_sleep: {}", weights.estimated_sleep);
                println!("coffee:          {}", weights.coffee);
            }
        }
        ModelAction::Check => {
            let plan = config.plan()?;
            let estimator = BedtimeEstimator::new(config.load_model()?);
            match estimator.estimate_plan(&plan) {
                Ok(rec) => {
                    println!(
                        "ok: predicts {:.2}h of sleep for the configured defaults (bedtime {})",
                        rec.predicted_sleep_hours, rec.formatted
                    );
                }
                Err(err) => {
                    eprintln!("{}", err.user_message());
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
