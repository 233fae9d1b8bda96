use eyre::{bail, Context};
use log::info;
use paychangu::PayChangu;
use serde::Serialize;

const USAGE: &str = "usage: paychangu-cli <operators | banks <currency> | verify <tx_ref> | payout <charge_id> | bank-payout <charge_id>>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Operators,
    Banks(String),
    Verify(String),
    Payout(String),
    BankPayout(String),
}

impl Command {
    fn parse(args: &[String]) -> eyre::Result<Command> {
        let arg = |idx: usize| -> eyre::Result<String> {
            match args.get(idx) {
                Some(value) if !value.is_empty() => Ok(value.clone()),
                _ => bail!(USAGE),
            }
        };
        let command = match args.first().map(String::as_str) {
            Some("operators") => Command::Operators,
            Some("banks") => Command::Banks(arg(1)?),
            Some("verify") => Command::Verify(arg(1)?),
            Some("payout") => Command::Payout(arg(1)?),
            Some("bank-payout") => Command::BankPayout(arg(1)?),
            _ => bail!(USAGE),
        };
        Ok(command)
    }
}

fn print<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let command = Command::parse(&args)?;

    let env = env::Env::load().context("Failed to load configuration")?;
    let client = PayChangu::from_env(&env);
    info!("Running {:?}", command);

    match command {
        Command::Operators => print(&client.get_mobile_money_operators().await?),
        Command::Banks(currency) => print(&client.get_supported_banks(&currency).await?),
        Command::Verify(tx_ref) => print(&client.verify_payment(&tx_ref).await?),
        Command::Payout(charge_id) => {
            print(&client.get_mobile_money_payout_details(&charge_id).await?)
        }
        Command::BankPayout(charge_id) => {
            print(&client.get_bank_payout_details(&charge_id).await?)
        }
    }
}
