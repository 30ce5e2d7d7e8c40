//! groupald — command-line front end for a groupald service.
//!
//! One subcommand per remote operation. The service URL and bearer token
//! come from a TOML config file, overridden by flags and `GROUPALD_*`
//! environment variables.

use anyhow::Context;
use clap::Parser;
use groupald_client::{Attrs, GroupaldClient, Mod, Mright};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "groupald", about = "Query and administer a groupald service")]
struct Cli {
    /// Base URL of the groupald service, e.g. "https://groupald.example.org".
    #[arg(long, env = "GROUPALD_URL")]
    url: Option<String>,

    /// Bearer token sent as trusted authentication on every request.
    #[arg(long, env = "GROUPALD_BEARER")]
    bearer: Option<String>,

    /// Request timeout in seconds. No timeout when unset.
    #[arg(long, env = "GROUPALD_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Path to a TOML configuration file. File settings are used as the
    /// base; flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Check whether an sgroup exists.
    Exists { id: String },
    /// Print the full document describing an sgroup.
    Get { id: String },
    /// Print the attributes of an sgroup.
    GetAttrs { id: String },
    /// Print the direct members of a group.
    DirectMembers { id: String },
    /// Print the rights attached directly to an sgroup.
    DirectRights { id: String },
    /// List the sgroups where a subject directly has the given mright.
    SearchSgroups {
        subject_dn: String,
        /// member, reader, updater or admin.
        mright: Mright,
    },
    /// Print the document describing a subject.
    GetSubject { subject_id: String },
    /// Create an sgroup.
    Create {
        id: String,
        /// Attributes as name=value pairs.
        #[arg(value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
    },
    /// Delete an sgroup.
    Delete { id: String },
    /// Replace attributes of an sgroup.
    ModifyAttrs {
        id: String,
        /// Attributes as name=value pairs.
        #[arg(value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
    },
    /// Add, delete or replace a member/right relation.
    ModifyMemberOrRight {
        id: String,
        /// member, reader, updater or admin.
        mright: Mright,
        /// add, delete or replace.
        r#mod: Mod,
        subject_dn: String,
    },
}

/// Settings resolvable from either the command line or the config file.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
struct Settings {
    url: Option<String>,
    bearer: Option<String>,
    timeout_secs: Option<u64>,
}

impl Settings {
    /// Command-line/env values win over config-file values.
    fn merge(self, file: Settings) -> Settings {
        Settings {
            url: self.url.or(file.url),
            bearer: self.bearer.or(file.bearer),
            timeout_secs: self.timeout_secs.or(file.timeout_secs),
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<Settings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parsing config file {}", path.display()))
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) => Ok((name.to_owned(), value.to_owned())),
        None => Err(format!("expected name=value, got {s:?}")),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let file_settings = match cli.config {
        Some(ref path) => load_config(path)?,
        None => Settings::default(),
    };
    let settings = Settings {
        url: cli.url.clone(),
        bearer: cli.bearer.clone(),
        timeout_secs: cli.timeout_secs,
    }
    .merge(file_settings);

    let url = settings
        .url
        .context("missing groupald URL (--url, GROUPALD_URL or config file)")?;
    let bearer = settings
        .bearer
        .context("missing bearer token (--bearer, GROUPALD_BEARER or config file)")?;
    tracing::debug!(%url, "using groupald service");

    let client = match settings.timeout_secs {
        Some(secs) => GroupaldClient::with_timeout(&url, &bearer, Duration::from_secs(secs)),
        None => GroupaldClient::new(&url, &bearer),
    };

    match cli.command {
        Command::Exists { id } => println!("{}", client.exists(&id)?),
        Command::Get { id } => print_json(&client.get(&id)?)?,
        Command::GetAttrs { id } => print_json(&client.get_attrs(&id)?)?,
        Command::DirectMembers { id } => print_json(&client.direct_members(&id)?)?,
        Command::DirectRights { id } => print_json(&client.direct_rights(&id)?)?,
        Command::SearchSgroups { subject_dn, mright } => {
            for id in client.search_raw_sgroups_using_a_subject(&subject_dn, mright)? {
                println!("{id}");
            }
        }
        Command::GetSubject { subject_id } => print_json(&client.get_subject(&subject_id)?)?,
        Command::Create { id, attrs } => client.create(&id, &to_attrs(attrs))?,
        Command::Delete { id } => client.delete(&id)?,
        Command::ModifyAttrs { id, attrs } => client.modify_attrs(&id, &to_attrs(attrs))?,
        Command::ModifyMemberOrRight {
            id,
            mright,
            r#mod,
            subject_dn,
        } => client.modify_member_or_right(&id, mright, r#mod, &subject_dn)?,
    }

    Ok(())
}

fn to_attrs(pairs: Vec<(String, String)>) -> Attrs {
    pairs.into_iter().collect()
}
