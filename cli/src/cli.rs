use {
  account_kit_primitives::{Deployments, U256},
  anyhow::Context,
  clap::{Parser, Subcommand},
  humantime::Duration,
  std::path::PathBuf,
};

/// Account Kit
///
/// Predicts the addresses of composite Safe accounts and checks whether
/// a deployed account is configured the way it is supposed to be.
#[derive(Debug, Parser)]
#[clap(name = "account-kit", version)]
pub struct CliOptions {
  /// JSON file overriding entries of the default deployment registry
  #[clap(long, global = true, value_name = "PATH")]
  deployments: Option<PathBuf>,

  #[clap(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print the addresses of an owner's account and its modules
  Predict {
    #[clap(long, value_name = "ADDRESS")]
    owner: String,

    /// Creation nonce, the shared account nonce when omitted
    #[clap(long, value_name = "U256")]
    nonce: Option<U256>,
  },

  /// Print the unsigned transactions that deploy an owner's account
  Create {
    #[clap(long, value_name = "ADDRESS")]
    owner: String,

    /// Creation nonce, the shared account nonce when omitted
    #[clap(long, value_name = "U256")]
    nonce: Option<U256>,
  },

  /// Print the integrity query for an account without sending it
  Calldata {
    #[clap(long, value_name = "ADDRESS")]
    account: String,
  },

  /// Run the integrity query for an account against a node
  Query {
    #[clap(long, value_name = "ADDRESS")]
    account: String,

    /// Minimum cooldown the delay module has to enforce
    #[clap(long, short, value_name = "DURATION")]
    cooldown: Duration,

    /// JSON-RPC endpoint of the node
    #[clap(long, value_name = "URL", default_value = "http://localhost:8545")]
    rpc: String,
  },
}

impl CliOptions {
  /// The default registry, with whatever the `--deployments` file sets
  /// layered on top.
  pub fn deployments(&self) -> anyhow::Result<Deployments> {
    let Some(path) = &self.deployments else {
      return Ok(Deployments::default());
    };

    let contents = std::fs::read_to_string(path)
      .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents)
      .with_context(|| format!("parsing {}", path.display()))
  }
}
