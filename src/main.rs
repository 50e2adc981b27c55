use anyhow::Result;
use clap::Parser;
use snake3d::game::GameConfig;
use snake3d::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake3d")]
#[command(version, about = "Classic grid snake with a terminal front end")]
struct Cli {
    /// Half the playfield width in cells (the field spans -N..=N)
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(i32).range(2..))]
    half_width: i32,

    /// Movement tick period in milliseconds
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Never let food respawn on the snake's body
    #[arg(long)]
    fair_food: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let config = GameConfig {
        half_width: cli.half_width,
        tick_ms: cli.tick_ms,
        fair_food: cli.fair_food,
    };

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
