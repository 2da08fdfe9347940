use clap::Parser;
use cognicell_core::Cell;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Label for the cell
    #[arg(long, default_value = "1")]
    id: String,

    /// How many workout steps to run
    #[arg(short, long, default_value_t = 20)]
    steps: usize,

    /// Fixed stimulus fed during the workout
    #[arg(short, long, default_value_t = 0.8)]
    input: f32,

    /// Explicit curiosity in [0, 1]; omitted = random draw from [0.3, 0.9]
    #[arg(short, long)]
    curiosity: Option<f32>,

    /// RNG seed for a reproducible personality draw
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut cell = match args.curiosity {
        Some(curiosity) => Cell::new(&args.id, curiosity),
        None => Cell::with_random_curiosity(&args.id, &mut rng),
    };

    info!(
        "cell {} online, curiosity {:.2}",
        cell.identity(),
        cell.curiosity()
    );

    // Work it hard with the same stimulus over and over
    println!("working the cell hard...");
    for step in 0..args.steps {
        let feeling = cell.process_stimulus(args.input)?;
        println!(
            "  step {}: feels {:.3}, tired: {:.3}",
            step + 1,
            feeling,
            cell.fatigue()
        );
    }

    // Give it a break
    println!("\ngiving it a break...");
    cell.recover();
    println!("after rest: tired: {:.3}", cell.fatigue());

    // Probe novelty: a stimulus far from the workout input (Δ > 0.3)
    let probe = if args.input > 0.5 {
        args.input - 0.7
    } else {
        args.input + 0.7
    };
    println!("\nshowing it something new ({:.2})...", probe);
    let response = cell.process_stimulus(probe)?;
    println!("response to new thing: {:.3}", response);

    // Ask how it's doing
    let status = cell.snapshot();
    if args.json {
        println!("\n{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("\nhow it's doing:");
        println!("  identity: {}", status.identity);
        println!("  feeling:  {:.3}", status.activation);
        println!("  tired:    {:.3}", status.fatigue);
        println!("  curious:  {:.2}", status.curiosity);
        println!("  age:      {}", status.age);
        println!("  memories: {}", status.history_len);
        println!("  lately:   {:.3}", status.recent_average_output);
    }

    println!("\n{}", cell);
    Ok(())
}
