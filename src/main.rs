use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use range_iter::logging::{init_logging, LogLevel};
use range_iter::{
    parse_custom_values, CursorConfig, CursorId, CursorRegistry, Extensions, Mode, Value,
};

#[derive(Parser, Debug)]
#[command(name = "range-iter", about = "Drive a stateful range cursor the way a workflow host would")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Invoke one cursor for a number of ticks and print each output.
    Run {
        /// Lower range bound.
        #[arg(long, default_value_t = 0)]
        start: i64,
        /// Upper range bound.
        #[arg(long, default_value_t = 10)]
        end: i64,
        /// Step magnitude.
        #[arg(long, default_value_t = 1)]
        step: i64,
        /// Traversal mode: cycle, bounce or once.
        #[arg(long, default_value = "cycle")]
        mode: Mode,
        /// Comma-separated custom values (overrides the range and value list).
        #[arg(long, default_value = "")]
        custom_values: String,
        /// Explicit value list, comma-separated.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        value_list: Option<Vec<f64>>,
        /// Number of invocations.
        #[arg(long, default_value_t = 12)]
        ticks: usize,
        /// Ticks (1-based) on which to request a reset.
        #[arg(long, value_delimiter = ',')]
        reset_at: Vec<usize>,
    },
    /// Show how a custom-values string resolves.
    Parse {
        /// Comma-separated values, e.g. "1, 1.4, 2".
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LogLevel::from(cli.verbose));

    match cli.command {
        Commands::Run {
            start,
            end,
            step,
            mode,
            custom_values,
            value_list,
            ticks,
            reset_at,
        } => {
            let mut config = CursorConfig::range(start, end, step, mode)
                .with_custom_values(custom_values);
            if let Some(values) = value_list {
                config = config.with_value_list(values.into_iter().map(Value::from_f64).collect());
            }
            run_ticks(config, ticks, &reset_at)?
        }
        Commands::Parse { text } => run_parse(&text)?,
    }

    Ok(())
}

fn run_ticks(config: CursorConfig, ticks: usize, reset_at: &[usize]) -> Result<()> {
    let mut registry = CursorRegistry::new();
    let id = CursorId::new("cli");
    registry.create(id.clone())?;
    let extensions = Extensions::new();

    for tick in 1..=ticks {
        let call = config.clone().with_reset(reset_at.contains(&tick));
        let out = registry
            .advance(&id, &call, &extensions)
            .with_context(|| format!("advance failed on tick {}", tick))?;
        println!(
            "tick {}\tcurrent={}\tnext={}\tcompleted={}",
            tick, out.current, out.next, out.cycle_completed
        );
    }

    Ok(())
}

fn run_parse(text: &str) -> Result<()> {
    let values = parse_custom_values(text)
        .with_context(|| format!("failed to parse custom values '{}'", text))?;
    let rendered: Vec<String> = values.iter().map(Value::to_string).collect();
    println!("values=[{}]\tlen={}\tend={}", rendered.join(", "), values.len(), values.len() - 1);
    Ok(())
}
