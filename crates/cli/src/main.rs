use anyhow::{bail, Context, Result};
use catalog::{load_products, sample_products, Color, Product, Size};
use clap::{Parser, Subcommand};
use colored::Colorize;
use specification::{
    filter, AllOf, AnyOf, AndSpecification, ColorSpecification, ProductFilter, SizeSpecification,
    Specification, SpecificationExt,
};
use std::path::PathBuf;

type BoxedSpecification = Box<dyn Specification<Product> + Send + Sync>;

/// spec-filter - Composable product filtering
#[derive(Parser)]
#[command(name = "spec-filter")]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
struct Cli {
    /// JSON catalog file (defaults to the built-in Apple/Tree/House catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the legacy filters and the specification filters side by side
    Demo,

    /// Filter the catalog by color and/or size
    Filter {
        /// Color to match (red, green, blue)
        #[arg(long)]
        color: Option<Color>,

        /// Size to match (small, medium, large, yuge)
        #[arg(long)]
        size: Option<Size>,

        /// Match products satisfying any condition instead of all of them
        #[arg(long)]
        any: bool,

        /// Invert the combined condition
        #[arg(long)]
        negate: bool,

        /// Use the hard-coded ProductFilter methods
        #[arg(long, conflicts_with_all = ["any", "negate"])]
        legacy: bool,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List every product in the catalog
    List,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let products = match &cli.catalog {
        Some(path) => load_products(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => sample_products(),
    };
    tracing::info!("Loaded {} products", products.len());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Demo => handle_demo(&products)?,
        Commands::Filter {
            color,
            size,
            any,
            negate,
            legacy,
            json,
        } => {
            let matches = if legacy {
                legacy_matches(&products, color, size)?
            } else {
                let spec = build_specification(color, size, any, negate);
                let matches: Vec<&Product> = filter(&products, &spec).collect();
                if !json {
                    print_banner(&format!("Products matching {}", spec.describe()));
                }
                matches
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for product in &matches {
                    println!(" -{} is {} and {}", product.name(), product.color(), product.size());
                }
                println!("{} {} match(es)", "✓".green(), matches.len());
            }
        }
        Commands::List => {
            print_banner("Catalog");
            for product in &products {
                println!(" -{}", product);
            }
        }
    }

    Ok(())
}

/// Handle the 'demo' command
fn handle_demo(products: &[Product]) -> Result<()> {
    let pf = ProductFilter::new();

    print_banner("Green products (legacy)");
    print_matches(pf.filter_by_color(products, Color::Green), "green");

    print_banner("Large products (legacy)");
    print_matches(pf.filter_by_size(products, Size::Large), "large");

    let green = ColorSpecification::new(Color::Green);
    print_banner("Products with ColorSpecification green");
    print_matches(filter(products, &green), &green.describe());

    let small = SizeSpecification::new(Size::Small);
    print_banner("Products with SizeSpecification small");
    print_matches(filter(products, &small), &small.describe());

    // Reuses the two specifications built above
    let green_and_small = AndSpecification::try_new(Some(&green), Some(&small))?;
    print_banner("Products with AndSpecification of the existing green and small");
    print_matches(filter(products, &green_and_small), &green_and_small.describe());

    let blue_and_large = AndSpecification::new(
        ColorSpecification::new(Color::Blue),
        SizeSpecification::new(Size::Large),
    );
    print_banner("Products with AndSpecification of new blue and large");
    print_matches(filter(products, &blue_and_large), &blue_and_large.describe());

    Ok(())
}

/// Combine the requested conditions into one specification.
///
/// With no conditions, the "all" form matches everything and the "any"
/// form matches nothing.
fn build_specification(
    color: Option<Color>,
    size: Option<Size>,
    any: bool,
    negate: bool,
) -> BoxedSpecification {
    let combined: BoxedSpecification = if any {
        let mut spec = AnyOf::new();
        if let Some(color) = color {
            spec = spec.with(ColorSpecification::new(color));
        }
        if let Some(size) = size {
            spec = spec.with(SizeSpecification::new(size));
        }
        spec.boxed()
    } else {
        let mut spec = AllOf::new();
        if let Some(color) = color {
            spec = spec.with(ColorSpecification::new(color));
        }
        if let Some(size) = size {
            spec = spec.with(SizeSpecification::new(size));
        }
        spec.boxed()
    };

    if negate {
        combined.not().boxed()
    } else {
        combined
    }
}

/// Run the matching hard-coded ProductFilter method.
fn legacy_matches(
    products: &[Product],
    color: Option<Color>,
    size: Option<Size>,
) -> Result<Vec<&Product>> {
    let pf = ProductFilter::new();
    let matches = match (color, size) {
        (Some(color), None) => pf.filter_by_color(products, color).collect(),
        (None, Some(size)) => pf.filter_by_size(products, size).collect(),
        (Some(color), Some(size)) => pf.filter_by_size_and_color(products, size, color).collect(),
        (None, None) => bail!("--legacy needs --color, --size or both"),
    };
    Ok(matches)
}

/// Helper function to print a section header
fn print_banner(title: &str) {
    let rule = "*".repeat(title.len().max(36));
    println!();
    println!("{}", rule.blue());
    println!("{}", title.bold().blue());
    println!("{}", rule.blue());
}

fn print_matches<'a>(matches: impl Iterator<Item = &'a Product>, description: &str) {
    for product in matches {
        println!(" -{} is {}", product.name(), description);
    }
}
