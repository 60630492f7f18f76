use {
  crate::cli::{CliOptions, Command},
  account_kit_client::RpcClient,
  account_kit_sdk as sdk,
  clap::Parser,
  serde::Serialize,
  serde_json::json,
  tracing::{info, subscriber::set_global_default},
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // stdout carries the JSON output, logs go to stderr
  set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(
        EnvFilter::try_from_default_env()
          .unwrap_or_else(|_| EnvFilter::new("info")),
      )
      .with_writer(std::io::stderr)
      .finish(),
  )?;

  let opts = CliOptions::parse();
  info!("account-kit options: {opts:?}");

  let deployments = opts.deployments()?;
  if deployments.bouncer_creation_code.is_empty() {
    info!(
      "no bouncer creation code configured, bouncer addresses are \
       placeholders"
    );
  }

  match opts.command {
    Command::Predict { owner, nonce } => {
      let predicted = sdk::predict_addresses(&deployments, &owner, nonce)?;
      print(&json!({
        "account": predicted.account,
        "delay": predicted.delay,
        "roles": predicted.roles,
        "bouncer": predicted.bouncer,
        "allowance": deployments.allowance_singleton,
      }))
    }

    Command::Create { owner, nonce } => {
      let account = sdk::predict_account_address(&deployments, &owner, nonce)?;
      let account = account.to_string();
      print(&json!({
        "account": sdk::populate_account_creation(&deployments, &owner, nonce)?,
        "delay": sdk::populate_delay_creation(&deployments, &account)?,
        "roles": sdk::populate_roles_creation(&deployments, &account)?,
        "bouncer": sdk::populate_bouncer_creation(&deployments, &account)?,
      }))
    }

    Command::Calldata { account } => {
      let account = account_kit_primitives::address::parse(&account)?;
      print(&sdk::IntegrityQuery::new(&deployments, account).request())
    }

    Command::Query {
      account,
      cooldown,
      rpc,
    } => {
      let client = RpcClient::new(rpc);
      let cooldown = std::time::Duration::from(cooldown).as_secs();
      info!("checking {account} against {}", client.url());

      let result =
        sdk::account_query(&deployments, &account, cooldown, |request| {
          client.eth_call(request)
        })
        .await?;

      info!("account {account}: {:?}", result.status);
      print(&result)
    }
  }
}

fn print(value: &impl Serialize) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
