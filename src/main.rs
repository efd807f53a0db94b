use clap::{Parser, Subcommand};
use pagesmith::generate::optional_url;
use pagesmith::palette::{HexColor, InvalidColor, PartialPalette};
use pagesmith::publish::{export_package, write_package};
use pagesmith::store::Store;
use pagesmith::types::{BrandConfig, MarketingCopy, TemplateId};
use pagesmith::{config, output, preview, server, templates};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Brand inputs for offline rendering. Copy is given verbatim; nothing is
/// generated.
#[derive(clap::Args, Clone)]
struct BrandArgs {
    /// Brand name shown in every template
    #[arg(long, default_value = "Acme")]
    brand_name: String,
    #[arg(long, default_value = "Launch your next idea faster")]
    headline: String,
    #[arg(long, default_value = "Everything you need to go from idea to customers in days.")]
    subheadline: String,
    /// Call-to-action label
    #[arg(long, default_value = "Get started")]
    cta: String,
    #[arg(long)]
    industry: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    logo_url: Option<String>,
    /// Call-to-action target; omitted = demo mode
    #[arg(long)]
    cta_url: Option<String>,
    #[arg(long, value_parser = parse_color)]
    primary: Option<HexColor>,
    #[arg(long, value_parser = parse_color)]
    secondary: Option<HexColor>,
    #[arg(long, value_parser = parse_color)]
    accent: Option<HexColor>,
}

fn parse_color(value: &str) -> Result<HexColor, InvalidColor> {
    HexColor::parse(value)
}

impl BrandArgs {
    /// URLs go through the same http/https check as API requests.
    fn into_brand(self, config: &config::AppConfig) -> anyhow::Result<BrandConfig> {
        let logo_url = optional_url("logo-url", self.logo_url.as_deref())?;
        let cta_url = optional_url("cta-url", self.cta_url.as_deref())?;
        let overrides = PartialPalette {
            primary: self.primary,
            secondary: self.secondary,
            accent: self.accent,
        };
        Ok(BrandConfig {
            brand_name: self.brand_name,
            logo_url,
            colors: config.colors.to_palette()?.overlay(&overrides),
            copy: MarketingCopy {
                headline: self.headline,
                subheadline: self.subheadline,
                cta: self.cta,
            },
            industry: self.industry,
            description: self.description,
            cta_url,
        })
    }
}

#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(about = "Brand-driven landing page generator")]
#[command(long_about = "\
Brand-driven landing page generator

A brand (name, industry, description, optional logo and colors) is merged
into one of seven fixed templates and rendered to a self-contained HTML page.
The HTTP server adds AI copywriting, persistence and publishing.

Templates:

  t1  Minimal SaaS           t5  iGaming Casino (game)
  t2  Bold Marketing         t6  Olavivo Casino Slots (game)
  t3  Lead Generation        t7  Bonanza Billion Slots (game)
  t4  Casino Gaming

Run 'pagesmith gen-config' to generate a documented pagesmith.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = "pagesmith.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API
    Serve,
    /// List the template catalogue
    Templates,
    /// Render one template offline into a directory
    Render {
        #[arg(long, short)]
        template: TemplateId,
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        #[command(flatten)]
        brand: BrandArgs,
    },
    /// Render every template offline, one directory each
    Preview {
        #[arg(long, default_value = "preview")]
        out: PathBuf,
        #[command(flatten)]
        brand: BrandArgs,
    },
    /// Write a stored site's static package
    Export {
        /// Site slug or id
        site: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a stock pagesmith.toml with all options documented
    GenConfig,
    /// Validate the config file without starting anything
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pagesmith=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            let config = config::load_config(&cli.config)?;
            server::run(&config).await?;
        }
        Command::Templates => {
            output::print_templates(templates::registry());
        }
        Command::Render {
            template,
            out,
            brand,
        } => {
            let config = config::load_config(&cli.config)?;
            let brand = brand.into_brand(&config)?;
            let files = preview::render_to_dir(template, &brand, &out)?;
            output::print_rendered(&[files]);
        }
        Command::Preview { out, brand } => {
            let config = config::load_config(&cli.config)?;
            let brand = brand.into_brand(&config)?;
            let files = preview::preview_all(&brand, &out)?;
            output::print_rendered(&files);
        }
        Command::Export { site, out } => {
            let config = config::load_config(&cli.config)?;
            let store = Store::open(Path::new(&config.database.path))?;
            let site = match Uuid::parse_str(&site) {
                Ok(id) => store.get_site(id)?,
                Err(_) => store.get_site_by_slug(&site)?,
            };
            let package = export_package(&site);
            let dir = out.unwrap_or_else(|| PathBuf::from(&site.slug));
            write_package(&package, &dir)?;
            output::print_export(&package, &dir);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::CheckConfig => {
            println!("==> Checking {}", cli.config.display());
            let config = config::load_config(&cli.config)?;
            output::print_config_summary(&config);
            println!("==> Config is valid");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand_from(args: &[&str]) -> anyhow::Result<BrandConfig> {
        let argv = ["pagesmith", "render", "--template", "t1"]
            .into_iter()
            .chain(args.iter().copied());
        match Cli::try_parse_from(argv)?.command {
            Command::Render { brand, .. } => brand.into_brand(&config::AppConfig::default()),
            _ => unreachable!("parsed a render command"),
        }
    }

    #[test]
    fn render_rejects_non_web_urls() {
        assert!(brand_from(&["--cta-url", "javascript:alert(1)"]).is_err());
        assert!(brand_from(&["--logo-url", "file:///etc/passwd"]).is_err());
        assert!(brand_from(&["--cta-url", "acme.test"]).is_err());
    }

    #[test]
    fn blank_urls_mean_demo_mode() {
        let brand = brand_from(&["--cta-url", "  ", "--logo-url", ""]).unwrap();
        assert_eq!(brand.cta_url, None);
        assert_eq!(brand.logo_url, None);
    }

    #[test]
    fn web_urls_pass_through() {
        let brand = brand_from(&["--cta-url", "https://acme.test/signup"]).unwrap();
        assert_eq!(brand.cta_url.as_deref(), Some("https://acme.test/signup"));
    }
}
