use clap::{CommandFactory, Parser, Subcommand};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::Style;
use toktab_core::{
    api::{parse_model, parse_search, TokTabClient},
    format::{cost_tier, format_cost, format_tokens, CostTier},
    model::{ModelRecord, SearchResults},
};

// ── Palette ──────────────────────────────────────────────────────────

fn s_header() -> Style { Style::new().color256(252).bold() }  // bright gray, bold
fn s_dim() -> Style    { Style::new().color256(248) }         // light gray
fn s_tree() -> Style   { Style::new().color256(245) }         // mid gray
fn s_hint() -> Style   { Style::new().color256(243) }         // soft gray
fn s_ok() -> Style     { Style::new().color256(114) }         // green
fn s_warm() -> Style   { Style::new().color256(214) }         // amber
fn s_err() -> Style    { Style::new().color256(167) }         // red
fn s_bold() -> Style   { Style::new().bold() }

fn sep(width: usize) -> String {
    s_tree().apply_to("\u{2500}".repeat(width)).to_string()
}

fn tier_color(cost: Option<f64>) -> Color {
    match cost_tier(cost) {
        CostTier::Cheap    => Color::AnsiValue(114),
        CostTier::Moderate => Color::AnsiValue(214),
        CostTier::Premium  => Color::AnsiValue(167),
    }
}

// ── CLI Args ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "toktab",
    about = "LLM pricing data at your fingertips",
    version,
    after_help = "examples:\n  \
        toktab gpt-4o\n  \
        toktab claude-sonnet-4 --json\n  \
        toktab search claude\n  \
        toktab search \"gemini 3\"\n  \
        toktab search provider:anthropic --limit 5"
)]
struct Cli {
    /// Model slug to look up, e.g. gpt-4o
    slug: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Print the raw JSON payload instead of a table
    #[arg(long, short)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search models by name or provider (supports a provider: prefix).
    Search {
        query: String,
        /// Number of results (server caps at 50)
        #[arg(long, short, default_value_t = 20)]
        limit: u32,
        /// Print the raw JSON payload instead of a table
        #[arg(long, short)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {err:#}", s_err().apply_to("error:"));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = TokTabClient::from_env();

    match cli.command {
        Some(Commands::Search { query, limit, json }) => {
            cmd_search(&client, &query, limit, json || cli.json).await
        }
        None => match cli.slug {
            Some(slug) => cmd_model(&client, &slug, cli.json).await,
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

// ── Model lookup ─────────────────────────────────────────────────────

async fn cmd_model(client: &TokTabClient, slug: &str, json: bool) -> anyhow::Result<()> {
    let data = client.model(slug).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    let model = parse_model(&data)
        .ok_or_else(|| anyhow::anyhow!("malformed model record for '{slug}'"))?;
    print_model(&model);
    Ok(())
}

// ── Search ───────────────────────────────────────────────────────────

async fn cmd_search(
    client: &TokTabClient,
    query: &str,
    limit: u32,
    json: bool,
) -> anyhow::Result<()> {
    let data = client.search(query, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    print_search_results(&parse_search(&data));
    Ok(())
}

// ── Rendering ────────────────────────────────────────────────────────

fn header_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::AnsiValue(243))
}

fn price_row(table: &mut Table, label: &str, cost: Option<f64>) {
    table.add_row(vec![
        Cell::new(format!("  {label}")).fg(Color::AnsiValue(248)),
        Cell::new(format_cost(cost)).fg(tier_color(cost)),
    ]);
}

fn print_model(model: &ModelRecord) {
    println!();
    println!(
        "{}  {}",
        s_bold().apply_to(&model.name),
        s_dim().apply_to(model.provider.as_deref().unwrap_or("unknown")),
    );
    println!("{}", sep(64));

    println!();
    println!("{}", s_header().apply_to("pricing"));
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![header_cell("  Type"), header_cell("$ / 1M tokens")]);
    price_row(&mut table, "Input", model.input_cost_per_token);
    price_row(&mut table, "Output", model.output_cost_per_token);
    if model.cache_read_cost_per_token.is_some() {
        price_row(&mut table, "Cache read", model.cache_read_cost_per_token);
    }
    if model.cache_write_cost_per_token.is_some() {
        price_row(&mut table, "Cache write", model.cache_write_cost_per_token);
    }
    println!("{table}");

    let limits = [
        ("Max input", model.max_input_tokens),
        ("Max output", model.max_output_tokens),
        ("Max total", model.max_total_tokens),
    ];
    if limits.iter().any(|(_, tokens)| tokens.is_some()) {
        println!();
        println!("{}", s_header().apply_to("context window"));
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![header_cell("  Limit"), header_cell("Tokens")]);
        for (label, tokens) in limits {
            if tokens.is_some() {
                table.add_row(vec![
                    Cell::new(format!("  {label}")).fg(Color::AnsiValue(248)),
                    Cell::new(format_tokens(tokens)).fg(Color::AnsiValue(109)),
                ]);
            }
        }
        println!("{table}");
    }

    if !model.capabilities.is_empty() {
        println!();
        println!("{}", s_header().apply_to("capabilities"));
        let dot = s_tree().apply_to("\u{00b7}").to_string();
        let caps = model
            .capabilities
            .iter()
            .map(|c| format!("{} {}", s_ok().apply_to("\u{2713}"), c.label()))
            .collect::<Vec<_>>()
            .join(&format!(" {dot} "));
        println!("  {caps}");
    }

    println!();
}

fn print_search_results(results: &SearchResults) {
    if results.hits.is_empty() {
        println!(
            "{}",
            s_warm().apply_to(format!("no models found for '{}'", results.query))
        );
        return;
    }

    println!();
    println!(
        "{}",
        s_dim().apply_to(format!(
            "found {} model(s) for '{}'",
            results.count, results.query
        ))
    );
    println!();

    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("  Model"),
            header_cell("Provider"),
            header_cell("In $/1M"),
            header_cell("Out $/1M"),
        ]);

    for hit in &results.hits {
        table.add_row(vec![
            Cell::new(format!("  {}", hit.slug)).fg(Color::AnsiValue(109)),
            Cell::new(hit.provider.as_deref().unwrap_or("\u{2500}")).fg(Color::AnsiValue(248)),
            Cell::new(format_cost(hit.input_cost_per_token)).fg(tier_color(hit.input_cost_per_token)),
            Cell::new(format_cost(hit.output_cost_per_token)).fg(tier_color(hit.output_cost_per_token)),
        ]);
    }

    println!("{table}");
    println!();
    println!("{}", s_hint().apply_to("  toktab <slug> for details"));
    println!();
}
