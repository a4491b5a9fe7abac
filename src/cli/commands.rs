use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use tracing::debug;

use crate::admin;
use crate::capabilities::{AllowAll, Capabilities, CapabilitySet};
use crate::dispatcher::{ScreenTable, Shell};
use crate::hot_reload::watch_manifest;
use crate::linter::{has_errors, lint_table, print_lint_issues, LintSeverity};
use crate::manifest::{load_manifest, Manifest};
use crate::nav::NavBar;
use crate::navigation::{normalize_root, MemoryHistory, Router, RouterConfig, RouterState};
use crate::runtime_config::RuntimeConfig;

/// Command-line interface for navrouter
///
/// Inspects and exercises route manifests: resolve paths, list routes,
/// render the nav bar for a set of capabilities, lint, and watch for changes.
#[derive(Parser)]
#[command(name = "navrouter")]
#[command(about = "Client-side route table tools", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the routes come from.
///
/// Unset flags fall back to `NAVR_MANIFEST` and `NAVR_ROOT` through
/// [`RuntimeConfig`].
#[derive(Args, Debug, Clone, Default)]
pub struct ManifestArgs {
    /// Route manifest (YAML, JSON or TOML). Defaults to the built-in admin console
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Override the manifest's root prefix
    #[arg(long)]
    pub root: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a path to its screen and parameters
    Resolve {
        #[command(flatten)]
        source: ManifestArgs,

        /// Path or URL to resolve, e.g. `doctors/42/profile` or `/admin/pathways`
        path: String,

        /// Print the router state as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List routes in registration order
    Routes {
        #[command(flatten)]
        source: ManifestArgs,
    },
    /// Render the nav bar visible to a set of capabilities
    Nav {
        #[command(flatten)]
        source: ManifestArgs,

        /// Granted capability (repeat or comma-separate). Defaults to NAVR_CAPABILITIES
        #[arg(short, long = "capability", value_delimiter = ',')]
        capabilities: Vec<String>,

        /// Grant every capability
        #[arg(long, default_value_t = false, conflicts_with = "capabilities")]
        all: bool,

        /// Current path, used to mark the active entry
        #[arg(long, default_value = "")]
        path: String,

        /// Print the nav bar as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Lint a route manifest
    ///
    /// Reports duplicate patterns, routes shadowed by earlier ones, and
    /// overlapping routes decided only by registration order.
    Lint {
        #[command(flatten)]
        source: ManifestArgs,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// Watch a manifest and report every reload
    Watch {
        /// Manifest to watch (required here, via flag or `NAVR_MANIFEST`)
        #[command(flatten)]
        source: ManifestArgs,

        /// Path to keep resolved across reloads
        #[arg(long, default_value = "")]
        path: String,
    },
}

impl ManifestArgs {
    /// Fill unset fields from `config`.
    pub fn or_config(self, config: &RuntimeConfig) -> Self {
        Self {
            manifest: self.manifest.or_else(|| config.manifest.clone()),
            root: self.root.or_else(|| config.root.clone()),
        }
    }

    /// Load the manifest, or the built-in admin console when none is given.
    pub fn load(&self) -> anyhow::Result<Manifest> {
        match &self.manifest {
            Some(path) => load_manifest(path),
            None => {
                debug!("No manifest given, using built-in admin console");
                Ok(admin::manifest())
            }
        }
    }

    fn root_for(&self, manifest: &Manifest) -> String {
        normalize_root(self.root.as_deref().unwrap_or(&manifest.root))
    }
}

/// Build a router over `manifest` with string screen ids, starting at `root`.
pub fn manifest_router(manifest: &Manifest, root: &str) -> anyhow::Result<Router<String>> {
    let table = manifest
        .build_table::<String>()
        .context("invalid route manifest")?;
    let root = normalize_root(root);
    Ok(Router::new(
        table,
        Arc::new(MemoryHistory::new(&root)),
        RouterConfig::with_root(&root),
    ))
}

/// Resolve `path` against the routes of `source`.
pub fn resolve(source: &ManifestArgs, path: &str) -> anyhow::Result<Arc<RouterState<String>>> {
    let manifest = source.load()?;
    let router = manifest_router(&manifest, &source.root_for(&manifest))?;
    Ok(router.navigate(path, Default::default()))
}

/// Mount a shell over `source` at `path` and return its nav bar and body text.
pub fn render_nav(
    source: &ManifestArgs,
    capabilities: &dyn Capabilities,
    path: &str,
) -> anyhow::Result<(NavBar<String>, String)> {
    let manifest = source.load()?;
    let router = manifest_router(&manifest, &source.root_for(&manifest))?;
    let menu = manifest.build_menu::<String>()?;

    let mut screens = ScreenTable::new();
    let names: HashSet<&str> = manifest.routes.iter().map(|r| r.screen.as_str()).collect();
    for name in names {
        let screen = name.to_string();
        screens.register(name.to_string(), move |_router: &Router<String>, params| {
            format!("<{}> {}", screen, params)
        });
    }

    router.navigate(path, Default::default());
    let mut shell = Shell::mount(router, screens, &menu, capabilities);
    let frame = shell.frame();
    shell.unmount();
    Ok((frame.nav.clone(), frame.body.to_string()))
}

fn print_state(state: &RouterState<String>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
        return Ok(());
    }
    println!("screen: {}", state.current);
    println!("path:   /{}", state.path);
    if !state.params.is_empty() {
        println!("params: {}", state.params);
    }
    if !state.query.is_empty() {
        println!("query:  {}", state.query);
    }
    Ok(())
}

fn print_nav(nav: &NavBar<String>, body: &str) {
    println!("{} ({})", nav.title, nav.brand_href);
    for link in &nav.left {
        let marker = if link.active { "*" } else { " " };
        println!("  [{}] {:<20} {}", marker, link.name, link.href);
    }
    println!("  ---");
    for link in &nav.right {
        println!("      {:<20} {}", link.name, link.href);
    }
    println!();
    println!("{}", body);
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The manifest cannot be read, parsed or built
/// - Lint finds errors and `--fail-on-error` is set
/// - The hot reload watcher cannot be started
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RuntimeConfig::from_env();

    match cli.command {
        Commands::Resolve { source, path, json } => {
            let state = resolve(&source.or_config(&config), &path)?;
            print_state(&state, json)
        }
        Commands::Routes { source } => {
            let source = source.or_config(&config);
            let manifest = source.load()?;
            let table = manifest.build_table::<String>()?;
            println!("root: {}", source.root_for(&manifest));
            table.dump_routes();
            Ok(())
        }
        Commands::Nav {
            source,
            capabilities,
            all,
            path,
            json,
        } => {
            let granted: Box<dyn Capabilities> = if all {
                Box::new(AllowAll)
            } else if capabilities.is_empty() {
                Box::new(config.capabilities.clone())
            } else {
                Box::new(capabilities.into_iter().collect::<CapabilitySet>())
            };
            let (mut nav, body) = render_nav(&source.or_config(&config), granted.as_ref(), &path)?;
            if let Some(title) = &config.title {
                nav.title = title.clone();
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&nav)?);
            } else {
                print_nav(&nav, &body);
            }
            Ok(())
        }
        Commands::Lint {
            source,
            fail_on_error,
            errors_only,
        } => {
            let manifest = source.or_config(&config).load()?;
            let table = manifest.build_table::<String>()?;
            let mut issues = lint_table(&table);
            if errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            if fail_on_error && has_errors(&issues) {
                bail!("route manifest has lint errors");
            }
            Ok(())
        }
        Commands::Watch { source, path } => watch(&source.or_config(&config), &path),
    }
}

fn watch(source: &ManifestArgs, path: &str) -> anyhow::Result<()> {
    let Some(manifest_path) = source.manifest.as_deref() else {
        bail!("watch needs a manifest: pass --manifest or set NAVR_MANIFEST");
    };
    let manifest = load_manifest(manifest_path)?;
    let router = manifest_router(&manifest, &source.root_for(&manifest))?;
    let state = router.navigate(path, Default::default());
    println!("watching {} ({} routes)", manifest_path.display(), manifest.routes.len());
    print_state(&state, false)?;

    let (tx, rx) = mpsc::channel();
    let _watcher = watch_manifest(manifest_path, router.clone(), move |manifest, state| {
        if tx.send((manifest.routes.len(), state.clone())).is_err() {
            debug!("Reload receiver gone");
        }
    })
    .with_context(|| format!("failed to watch {}", manifest_path.display()))?;

    for (routes, state) in rx {
        println!("reloaded: {} routes", routes);
        print_state(&state, false)?;
    }
    Ok(())
}

/// Parse the command line and execute it.
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}
