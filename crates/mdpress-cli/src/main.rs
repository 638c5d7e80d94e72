use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mdpress_config::{CONFIG_FILE, SiteConfig};
use mdpress_engine::{io, site};
use std::fs;
use std::path::{Path, PathBuf};

/// Static site generator for a constrained Markdown dialect.
#[derive(Parser)]
#[command(name = "mdpress", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate HTML pages into the output directory
    Build {
        /// Project root holding mdpress.toml and the site directories
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Explicit config file path, overriding <root>/mdpress.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Create a starter config, directories and template in the project root
    Init {
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

const STARTER_TEMPLATE: &str = "\
<!DOCTYPE html>
<html>
  <head>
    <title>{{ Title }}</title>
  </head>
  <body>
    <article>{{ Content }}</article>
  </body>
</html>
";

const STARTER_PAGE: &str = "\
# Welcome

This site is built with **mdpress**.
";

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Build { root, config } => build(&root, config.as_deref()),
        Command::Init { root } => init(&root),
    }
}

fn build(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(root, config_path)?;

    let content_dir = root.join(&config.content_dir);
    let static_dir = root.join(&config.static_dir);
    let template_path = root.join(&config.template_path);
    let output_dir = root.join(&config.output_dir);

    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;

    println!("Copying static files to {}...", output_dir.display());
    io::copy_dir(&static_dir, &output_dir)
        .with_context(|| format!("failed to copy static files from {}", static_dir.display()))?;

    site::generate_pages(&content_dir, &template, &output_dir)
        .with_context(|| format!("failed to generate pages from {}", content_dir.display()))?;

    println!("Site written to {}", output_dir.display());
    Ok(())
}

fn load_config(root: &Path, config_path: Option<&Path>) -> Result<SiteConfig> {
    match config_path {
        Some(path) => SiteConfig::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => Ok(SiteConfig::load(root)?.unwrap_or_default()),
    }
}

fn init(root: &Path) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("{} already exists, not overwriting", config_path.display());
    }

    let config = SiteConfig::default();
    config.save_to_path(&config_path)?;

    let content_dir = root.join(&config.content_dir);
    fs::create_dir_all(&content_dir)?;
    fs::create_dir_all(root.join(&config.static_dir))?;

    let template_path = root.join(&config.template_path);
    if !template_path.exists() {
        fs::write(&template_path, STARTER_TEMPLATE)?;
    }

    let index_path = content_dir.join("index.md");
    if !index_path.exists() {
        fs::write(&index_path, STARTER_PAGE)?;
    }

    println!("Initialized mdpress site at {}", root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_then_build_produces_a_site() {
        let root = TempDir::new().unwrap();

        init(root.path()).unwrap();
        build(root.path(), None).unwrap();

        let index = fs::read_to_string(root.path().join("public/index.html")).unwrap();
        assert!(index.contains("<title>Welcome</title>"));
        assert!(index.contains("<h1>Welcome</h1>"));
        assert!(index.contains("<b>mdpress</b>"));
    }

    #[test]
    fn init_refuses_to_overwrite_config() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE), "content_dir = \"pages\"\n").unwrap();

        assert!(init(root.path()).is_err());
    }

    #[test]
    fn build_fails_without_template() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("content")).unwrap();
        fs::create_dir_all(root.path().join("static")).unwrap();

        assert!(build(root.path(), None).is_err());
    }
}
