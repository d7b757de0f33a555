//! dialkit - place calls and compose SMS from the command line
//!
//! Hands `tel:`/`sms:` URLs to the desktop or prints the navigation target.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dialkit::config::{config_path, Config};
use dialkit::dispatcher::{build_target, DispatchOutcome, Dispatcher};
use dialkit::host::{self, HostKind};
use dialkit::i18n::Catalog;
use dialkit::{alert, Action, InputSession, PlatformFamily};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Host environment: native or web
    #[arg(long, global = true)]
    host: Option<HostKind>,

    /// Platform family for SMS bodies: default or ios
    #[arg(long, global = true)]
    platform: Option<PlatformFamily>,

    /// Alert language (es, en)
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Place a call
    Call {
        /// Phone number, any formatting
        number: String,
    },
    /// Compose an SMS
    Sms {
        /// Phone number, any formatting
        number: String,
        /// Optional message body
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Print the URL that would be dispatched, without dispatching
    Url {
        #[arg(value_enum)]
        action: UrlAction,
        number: String,
        #[arg(short, long, default_value = "")]
        message: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum UrlAction {
    Call,
    Sms,
}

impl From<UrlAction> for Action {
    fn from(action: UrlAction) -> Self {
        match action {
            UrlAction::Call => Action::Call,
            UrlAction::Sms => Action::Sms,
        }
    }
}

fn log_level(args: &Args, config: &Config) -> Level {
    if args.verbose {
        return Level::DEBUG;
    }
    config.log_level.parse().unwrap_or(Level::INFO)
}

fn build_dispatcher(config: &Config) -> Dispatcher {
    Dispatcher::new(
        host::create_opener(config),
        alert::create_presenter(&config.alerts),
        Catalog::load(&config.ui_language),
        config.platform,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Fallbacks are reported once logging is up
    let (mut config, config_source) = Config::load_with_source(&config_path())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(platform) = args.platform {
        config.platform = platform;
    }
    if let Some(ref lang) = args.lang {
        config.ui_language = lang.clone();
    }

    // Setup logging (stderr keeps stdout for URLs)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(&args, &config))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    config_source.warn_if_corrupt();

    debug!("📞 dialkit v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut session = InputSession::new(config.max_number_length);

    let outcome = match args.command {
        Cmd::Url {
            action,
            ref number,
            ref message,
        } => {
            session.set_phone_number(number);
            match build_target(
                action.into(),
                &session.sanitized_number(),
                message,
                config.platform,
            ) {
                Ok(target) => println!("{}", target.url()),
                Err(e) => eprintln!("{}", e),
            }
            return Ok(());
        }
        Cmd::Call { ref number } => {
            session.set_phone_number(number);
            session.call(&build_dispatcher(&config)).await
        }
        Cmd::Sms {
            ref number,
            ref message,
        } => {
            session.set_phone_number(number);
            session.set_message(message);
            session.sms(&build_dispatcher(&config)).await
        }
    };

    match outcome {
        DispatchOutcome::WebNavigated(target) => println!("{}", target.url()),
        DispatchOutcome::Opened(target) => info!("✅ Opened {}", target.url()),
        DispatchOutcome::Aborted(_) => {}
    }

    Ok(())
}
