//! # PATHCTL CLI
//!
//! Command-line interface for the path-help resolver.
//!
//! Drives the library from a terminal: resolve a help endpoint offline, or
//! fetch a live help document and print the expanded field metadata. The
//! library itself owns no environment variables; session configuration
//! lives here.
//!
//! ## Usage
//!
//! ```bash
//! # Resolve the help URL and schema path key without touching the network
//! pathctl resolve role-ssh ssh
//!
//! # Fetch and expand the request schema for a mounted engine
//! pathctl props secret kv --addr https://127.0.0.1:8200 --token s.xxxx
//!
//! # Machine-readable output
//! pathctl props auth-config/ldap ldap --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use path_help::client::{HttpHelpTransport, Session};
use path_help::paths::{resolve_help_request, sanitize_path, HelpRequest, StaticCollectionLookup};
use path_help::PathHelp;
use tracing::debug;

/// Version string carrying the metadata exported by build.rs
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// Secrets backend path-help CLI
#[derive(Parser)]
#[command(name = "pathctl")]
#[command(
    about = "Resolve help endpoints and request schemas from a secrets backend",
    long_about = None,
    version,
    long_version = LONG_VERSION,
    after_help = "\
Examples:
  pathctl resolve role-ssh ssh
  pathctl resolve auth-config/ldap ldap
  pathctl props secret kv --addr https://127.0.0.1:8200 --token s.xxxx
  pathctl props role-ssh ssh --json
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend address (defaults to SECRETS_BACKEND_ADDR)
    #[arg(long, global = true)]
    addr: Option<String>,

    /// Client token (defaults to SECRETS_BACKEND_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the help URL and OpenAPI path key without fetching
    Resolve {
        /// Console resource type (e.g. role-ssh, secret, auth-config/ldap)
        #[arg(value_name = "RESOURCE_TYPE")]
        resource_type: String,

        /// Mount point of the engine or auth method
        #[arg(value_name = "MOUNT")]
        mount: String,
    },
    /// Fetch the help document and print the expanded field metadata
    Props {
        /// Console resource type (e.g. role-ssh, secret, auth-config/ldap)
        #[arg(value_name = "RESOURCE_TYPE")]
        resource_type: String,

        /// Mount point of the engine or auth method
        #[arg(value_name = "MOUNT")]
        mount: String,

        /// Print machine-readable JSON instead of the field table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure rustls crypto provider FIRST, before any other operations
    // Required for rustls 0.23+ when no default provider is set via features
    // We use ring as the crypto provider
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pathctl=info".into()),
        )
        .init();

    debug!(
        "Build info: timestamp={}, datetime={}, git_hash={}",
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_DATETIME"),
        env!("BUILD_GIT_HASH")
    );

    // Session settings may come from a local .env during development
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            resource_type,
            mount,
        } => resolve_command(&resource_type, &mount),
        Commands::Props {
            resource_type,
            mount,
            json,
        } => props_command(&resource_type, &mount, json, cli.addr, cli.token).await,
    }
}

/// Normalize a user-supplied mount path, rejecting inputs that sanitize away
fn normalized_mount(mount: &str) -> Result<String> {
    let mount = sanitize_path(mount);
    if mount.is_empty() {
        return Err(anyhow::anyhow!(
            "Mount path must not be empty after trimming whitespace and slashes"
        ));
    }
    Ok(mount)
}

/// Print the resolved endpoint details
fn print_resolution(resource_type: &str, mount: &str, request: &HelpRequest) {
    println!("Resource type: {resource_type}");
    println!("Mount: {mount}");
    println!("Collection: {}", request.collection);
    match request.wildcard {
        Some(wildcard) => println!("Wildcard: {{{wildcard}}}"),
        None => println!("Wildcard: (none)"),
    }
    println!("Help URL: {}", request.url);
    println!("Schema path key: {}", request.schema_path_key);
}

/// Resolve a help request offline and print it
fn resolve_command(resource_type: &str, mount: &str) -> Result<()> {
    let mount = normalized_mount(mount)?;

    let lookup = StaticCollectionLookup::new();
    let request = resolve_help_request(&lookup, resource_type, &mount)
        .with_context(|| format!("Failed to resolve help request for '{resource_type}'"))?;

    print_resolution(resource_type, &mount, &request);
    Ok(())
}

/// Fetch the help document for a resource type and print its field metadata
async fn props_command(
    resource_type: &str,
    mount: &str,
    json: bool,
    addr: Option<String>,
    token: Option<String>,
) -> Result<()> {
    let mount = normalized_mount(mount)?;

    let addr = addr
        .or_else(|| std::env::var("SECRETS_BACKEND_ADDR").ok())
        .context("Backend address is required. Set SECRETS_BACKEND_ADDR or pass --addr.")?;
    let token = token
        .or_else(|| std::env::var("SECRETS_BACKEND_TOKEN").ok())
        .context("Client token is required. Set SECRETS_BACKEND_TOKEN or pass --token.")?;

    let session = Session::new(addr, token).context("Invalid session configuration")?;
    let transport = HttpHelpTransport::new(session)?;
    let help = PathHelp::new(transport);

    let request = help
        .resolve(resource_type, &mount)
        .with_context(|| format!("Failed to resolve help request for '{resource_type}'"))?;

    if !json {
        println!("🔄 Fetching help document from '{}'...", request.url);
    }

    let fields = help
        .fetch_and_expand_schema(&request)
        .await
        .with_context(|| {
            format!("Failed to fetch request schema for '{resource_type}' on mount '{mount}'")
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    if fields.is_empty() {
        println!("⚠️  No editable fields available for '{resource_type}' on mount '{mount}'");
        return Ok(());
    }

    println!(
        "✅ {} field(s) for '{resource_type}' on mount '{mount}'",
        fields.len()
    );
    println!();
    println!(
        "{:<28} {:<18} {:<24} {}",
        "FIELD", "EDIT TYPE", "LABEL", "DETAILS"
    );
    println!("{}", "-".repeat(92));

    for (name, attr) in &fields {
        let mut details = Vec::new();
        if let Some(default) = &attr.default_value {
            details.push(format!("default={default}"));
        }
        if !attr.possible_values.is_empty() {
            let values: Vec<String> =
                attr.possible_values.iter().map(ToString::to_string).collect();
            details.push(format!("one of [{}]", values.join(", ")));
        }
        if attr.read_only {
            details.push("read-only".to_string());
        }
        if attr.deprecated {
            details.push("deprecated".to_string());
        }

        println!(
            "{:<28} {:<18} {:<24} {}",
            name,
            attr.edit_type,
            attr.label,
            details.join(", ")
        );
    }

    Ok(())
}
