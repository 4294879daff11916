use betterrest_core::{clock, BedtimeEstimator, CoffeeCount, Config, SleepAmount};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum BedtimeAction {
    /// Calculate the recommended bedtime
    Calculate {
        /// Wake time as "HH:MM" or "H:MM AM/PM" (default: configured value)
        #[arg(long)]
        wake: Option<String>,
        /// Desired sleep in hours, 4 to 12 in 0.25 steps
        #[arg(long)]
        sleep: Option<f64>,
        /// Daily coffee intake in cups, 1 to 20
        #[arg(long)]
        coffee: Option<u32>,
        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: BedtimeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BedtimeAction::Calculate {
            wake,
            sleep,
            coffee,
            json,
        } => {
            let config = Config::load_or_default();
            let mut plan = config.plan()?;
            if let Some(wake) = wake {
                plan.wake = clock::parse_clock(&wake)?;
            }
            if let Some(sleep) = sleep {
                plan.sleep_amount = SleepAmount::try_new(sleep)?;
            }
            if let Some(coffee) = coffee {
                plan.coffee = CoffeeCount::try_new(coffee)?;
            }

            let estimator = BedtimeEstimator::new(config.load_model()?);
            match estimator.estimate_plan(&plan) {
                Ok(rec) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&rec)?);
                    } else {
                        println!("Your ideal bedtime is {}", rec.formatted);
                    }
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
