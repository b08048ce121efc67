//! `folio-relay` command line: run the relay, query it, or dump the window registry

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use folio_relay::{serve, ChatSession, RelayClient, RelayConfig};
use folio_windows::WindowRegistry;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("folio-relay")
        .version(folio_relay::VERSION)
        .about("Chat relay for the Folio desktop")
        .subcommand_required(true)
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the relay (reads GROQ_API_KEY and FOLIO_* from env or .env)")
                .arg(
                    Arg::new("bind")
                        .long("bind")
                        .value_name("ADDR")
                        .help("Listen address, overrides FOLIO_BIND"),
                ),
        )
        .subcommand(
            Command::new("ask")
                .about("Send one question to a running relay")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .default_value("http://127.0.0.1:3001")
                        .help("Relay base URL"),
                )
                .arg(
                    Arg::new("question")
                        .required(true)
                        .help("Question to ask"),
                ),
        )
        .subcommand(
            Command::new("windows")
                .about("Print the initial window registry as JSON"),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("json-logs"));

    match matches.subcommand() {
        Some(("serve", args)) => {
            let mut config = RelayConfig::from_env()?;
            if let Some(bind) = args.get_one::<String>("bind") {
                config.bind = bind
                    .parse()
                    .with_context(|| format!("invalid --bind {bind:?}"))?;
            }
            serve(config).await?;
        }
        Some(("ask", args)) => {
            let url = args
                .get_one::<String>("url")
                .context("missing --url")?;
            let question = args
                .get_one::<String>("question")
                .context("missing question")?;

            let client = RelayClient::new(url.as_str());
            let mut session = ChatSession::new();
            let reply = session.send(&client, question).await?;
            println!("{}", reply.content);
        }
        Some(("windows", _)) => {
            let registry = WindowRegistry::new();
            println!("{}", serde_json::to_string_pretty(&registry)?);
        }
        _ => unreachable!("subcommand_required"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn ask_defaults_url() {
        let matches = cli().get_matches_from(["folio-relay", "ask", "hi"]);
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "ask");
        assert_eq!(
            args.get_one::<String>("url").unwrap(),
            "http://127.0.0.1:3001"
        );
        assert_eq!(args.get_one::<String>("question").unwrap(), "hi");
    }

    #[test]
    fn json_logs_is_global() {
        let matches = cli().get_matches_from(["folio-relay", "windows", "--json-logs"]);
        assert!(matches.get_flag("json-logs"));
    }
}
