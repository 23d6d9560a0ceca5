//! `halopsa` CLI entry-point.
//!
//! Available sub-commands:
//! - `resources` — list every resource and operation in the catalog.
//! - `describe`  — show one operation (method, endpoint, fields) as JSON.
//! - `run`       — execute an operation over a batch of items.
//! - `validate`  — check a node definition JSON file without sending anything.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::{default_registry, NodeDefinition, NodeExecutor, ReqwestTransport};
use halopsa::catalog;
use halopsa::params::DEFAULT_BINARY_PROPERTY;
use halopsa::request::build_request;
use halopsa::{HaloPsaCredentials, ItemParameters, CREDENTIAL_TYPE, NODE_TYPE};
use nodes::{BinaryData, InputItem, NodeParameters};

#[derive(Parser)]
#[command(name = "halopsa", about = "Halo PSA connector for the workflow engine", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every resource and its operations.
    Resources,
    /// Show the catalog entry of one operation.
    Describe { resource: String, operation: String },
    /// Run an operation and print one JSON record per item (NDJSON).
    Run(RunArgs),
    /// Validate a node definition JSON file.
    Validate {
        /// Path to the node definition JSON file.
        path: PathBuf,
    },
}

#[derive(Args)]
struct CredentialArgs {
    #[arg(long, env = "HALOPSA_BASE_URL")]
    base_url: String,
    #[arg(long, env = "HALOPSA_API_KEY", hide_env_values = true)]
    api_key: String,
    #[arg(long, env = "HALOPSA_CLIENT_ID")]
    client_id: String,
    #[arg(long, env = "HALOPSA_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,
    #[arg(long, env = "HALOPSA_TENANT")]
    tenant: Option<String>,
}

impl CredentialArgs {
    fn into_credentials(self) -> HaloPsaCredentials {
        let creds = HaloPsaCredentials::new(self.base_url, self.api_key, self.client_id, self.client_secret);
        match self.tenant {
            Some(tenant) => creds.with_tenant(tenant),
            None => creds,
        }
    }
}

#[derive(Args)]
struct RunArgs {
    /// Node definition JSON file; replaces the parameter flags below.
    #[arg(long, conflicts_with_all = ["resource", "operation"])]
    definition: Option<PathBuf>,
    #[arg(long, required_unless_present = "definition")]
    resource: Option<String>,
    #[arg(long, required_unless_present = "definition")]
    operation: Option<String>,
    /// Path parameter or other top-level parameter, e.g. `ticketId=7`.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    params: Vec<(String, Value)>,
    /// Simple field (body field or filter), e.g. `summary=Printer`.
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    fields: Vec<(String, Value)>,
    /// JSON request body.
    #[arg(long)]
    body: Option<String>,
    /// JSON object of query parameters.
    #[arg(long)]
    query: Option<String>,
    /// JSON file with the input items (an array, or a single object).
    #[arg(long)]
    items: Option<PathBuf>,
    /// File attached to every item as binary data.
    #[arg(long)]
    binary: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_BINARY_PROPERTY)]
    binary_property: String,
    #[arg(long, default_value = "application/octet-stream")]
    mime_type: String,
    /// Record failed items instead of aborting the run.
    #[arg(long)]
    continue_on_fail: bool,
    #[command(flatten)]
    credentials: CredentialArgs,
}

/// Parse `KEY=VALUE`; the value is read as JSON when it parses, else as a string.
fn parse_key_value(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read file {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn load_definition(path: &Path) -> anyhow::Result<NodeDefinition> {
    serde_json::from_value(read_json(path)?)
        .with_context(|| format!("invalid node definition in {}", path.display()))
}

/// Parameters assembled from the `run` flags.
fn flag_parameters(args: &RunArgs) -> Value {
    let mut params = Map::new();
    params.insert("resource".into(), args.resource.clone().unwrap_or_default().into());
    params.insert("operation".into(), args.operation.clone().unwrap_or_default().into());
    for (key, value) in &args.params {
        params.insert(key.clone(), value.clone());
    }
    if !args.fields.is_empty() {
        let fields: Map<String, Value> = args.fields.iter().cloned().collect();
        params.insert("simpleFields".into(), Value::Object(fields));
    }
    if let Some(body) = &args.body {
        params.insert("jsonRequestBody".into(), Value::String(body.clone()));
    }
    if let Some(query) = &args.query {
        params.insert("jsonParameters".into(), Value::Bool(true));
        params.insert("queryParameters".into(), Value::String(query.clone()));
    }
    params.insert("binaryPropertyName".into(), args.binary_property.clone().into());
    Value::Object(params)
}

fn load_items(args: &RunArgs) -> anyhow::Result<Vec<InputItem>> {
    let mut items = match &args.items {
        Some(path) => match read_json(path)? {
            Value::Array(values) => values.into_iter().map(InputItem::new).collect(),
            other => vec![InputItem::new(other)],
        },
        None => vec![InputItem::default()],
    };

    if let Some(path) = &args.binary {
        let data = fs::read(path).with_context(|| format!("cannot read file {}", path.display()))?;
        let mut binary = BinaryData::new(data, args.mime_type.clone());
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            binary = binary.with_file_name(name);
        }
        items = items
            .into_iter()
            .map(|item| item.with_binary(args.binary_property.clone(), binary.clone()))
            .collect();
    }
    Ok(items)
}

async fn run(args: RunArgs) -> anyhow::Result<()> {
    let definition = match &args.definition {
        Some(path) => {
            let def = load_definition(path)?;
            let enabled = def.continue_on_fail || args.continue_on_fail;
            def.continue_on_fail(enabled)
        }
        None => NodeDefinition::new("halopsa-cli", NODE_TYPE, NodeParameters::Shared(flag_parameters(&args)))
            .continue_on_fail(args.continue_on_fail),
    };
    let items = load_items(&args)?;
    let credentials = args.credentials.into_credentials().to_value()?;

    let transport = ReqwestTransport::new()?;
    let executor = NodeExecutor::new(default_registry(), Arc::new(transport))
        .with_credentials(CREDENTIAL_TYPE, credentials);

    let result = executor.run(&definition, items).await?;
    for item in &result.items {
        println!("{}", serde_json::to_string(item)?);
    }
    info!(
        execution_id = %result.execution_id,
        items = result.items.len(),
        failed = result.failed_items(),
        "run complete"
    );
    Ok(())
}

/// Check that every parameter set in `definition` resolves to a request.
/// Returns `"<METHOD> <endpoint>"` per parameter set.
fn validate(definition: &NodeDefinition) -> anyhow::Result<Vec<String>> {
    if definition.node_type != NODE_TYPE {
        bail!("unsupported node_type '{}'", definition.node_type);
    }
    let parameter_sets = match &definition.parameters {
        NodeParameters::Shared(value) => vec![value],
        NodeParameters::PerItem(values) => values.iter().collect(),
    };

    // Endpoint rendering only; nothing is sent.
    let credentials = HaloPsaCredentials::new("", "", "", "");
    let mut requests = Vec::with_capacity(parameter_sets.len());
    for (index, raw) in parameter_sets.into_iter().enumerate() {
        let params = ItemParameters::from_value(raw).with_context(|| format!("item {index}"))?;
        let entry = catalog::lookup(&params.resource, &params.operation)
            .with_context(|| format!("item {index}"))?;
        let request = build_request(entry, params, &credentials, &InputItem::default())
            .with_context(|| format!("item {index}"))?;
        requests.push(format!("{} {}", request.method, request.url));
    }
    Ok(requests)
}

fn print_resources() {
    for resource in catalog::resources() {
        println!("{} ({})", resource.value, resource.name);
        for op in resource.operations {
            println!("  {:<28} {:<6} {}", op.value, op.method.as_str(), op.endpoint);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resources => print_resources(),
        Command::Describe { resource, operation } => {
            let entry = catalog::lookup(&resource, &operation)?;
            println!("{}", serde_json::to_string_pretty(entry.operation)?);
        }
        Command::Run(args) => run(args).await?,
        Command::Validate { path } => {
            let definition = load_definition(&path)?;
            match validate(&definition) {
                Ok(requests) => {
                    println!("✅ Node '{}' is valid.", definition.id);
                    for (index, request) in requests.iter().enumerate() {
                        println!("  item {index}: {request}");
                    }
                }
                Err(e) => {
                    eprintln!("❌ Validation failed: {e:#}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
