//! Command-line front end for linkgate.
//!
//! # Usage
//!
//! ```bash
//! # Normalise a colour
//! linkgate color "#abc"
//!
//! # Resolve a link
//! linkgate link "/users/%s" --arg 42 --title "Profile" "View" " profile"
//!
//! # Evaluate a policy
//! TOKEN_SIGNING_SECRET=s3cret linkgate auth '{"any": ["token", false]}' --token abc --known abc
//!
//! # Hash a token for a token store
//! TOKEN_SIGNING_SECRET=s3cret linkgate hash-token abc
//! ```
//!
//! `auth` exits with 0 when access is granted, 1 when denied and 2 when the
//! policy could not be evaluated.

use std::process::ExitCode;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use colored::*;

use linkgate::auth::{AuthPolicy, MemoryTokenStore, TokenAuthenticator};
use linkgate::config::{self, Config};
use linkgate::model::Color;
use linkgate::view::{Context, LinkModel, StringLink, View, resolve};

#[derive(Parser)]
#[command(name = "linkgate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalise a hex web-colour
    Color {
        /// Colour in any accepted form (abc, #abcd, abcdef, #abcdef12, ...)
        value: String,
    },

    /// Resolve a link and show what a renderer would see
    Link {
        /// Link target; `%s` placeholders are filled from --arg
        url: String,

        /// Explicit title
        #[arg(short, long)]
        title: Option<String>,

        /// Relation attribute
        #[arg(short, long)]
        rel: Option<String>,

        /// Request path of the synthetic context
        #[arg(short, long, default_value = "/")]
        path: String,

        /// URL arguments
        #[arg(short, long = "arg")]
        args: Vec<String>,

        /// Content items, combined in order
        content: Vec<String>,
    },

    /// Evaluate an auth policy (JSON) against a synthetic request
    Auth {
        /// Policy document, e.g. '{"all": ["token", true]}'
        policy: String,

        /// Bearer token sent with the request
        #[arg(short, long)]
        token: Option<String>,

        /// Tokens the in-memory token store accepts
        #[arg(short, long)]
        known: Vec<String>,

        /// Request path of the synthetic context
        #[arg(short, long, default_value = "/")]
        path: String,
    },

    /// Print the HMAC hash of a token
    HashToken { token: String },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::load_from_env().context("Failed to load configuration")?;
    config::init_tracing(&config)?;
    config.print_summary();

    match cli.command {
        Commands::Color { value } => show_color(&value),
        Commands::Link {
            url,
            title,
            rel,
            path,
            args,
            content,
        } => show_link(url, title, rel, &path, &args, content),
        Commands::Auth {
            policy,
            token,
            known,
            path,
        } => evaluate_policy(&config, &policy, token, &known, path),
        Commands::HashToken { token } => {
            let auth = token_authenticator(&config, Arc::new(MemoryTokenStore::new()))?;
            println!("{}", auth.hash_token(&token));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show_color(value: &str) -> Result<ExitCode> {
    let color: Color = value.parse()?;
    let rgba = color.rgba();

    println!("  Canonical: {}", color.get().bright_green().bold());
    println!(
        "  RGBA:      {} {} {} {}",
        rgba.r.to_string().red(),
        rgba.g.to_string().green(),
        rgba.b.to_string().blue(),
        rgba.a.to_string().bright_black()
    );

    Ok(ExitCode::SUCCESS)
}

fn show_link(
    url: String,
    title: Option<String>,
    rel: Option<String>,
    path: &str,
    args: &[String],
    content: Vec<String>,
) -> Result<ExitCode> {
    let ctx = Context::new(path);
    let content: Vec<View> = content.into_iter().map(View::from).collect();

    let link: Rc<dyn LinkModel> = if title.is_some() || rel.is_some() {
        let mut link = StringLink::new(url);
        if !content.is_empty() {
            link = link.with_content(View::Views(content));
        }
        Rc::new(
            link.with_title(title.unwrap_or_default())
                .with_rel(rel.unwrap_or_default()),
        )
    } else {
        resolve(url, content)
    };

    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    println!("  URL:     {}", link.url(&ctx, &args).bright_cyan());
    println!("  Title:   {}", link.link_title(&ctx).bright_white());
    println!("  Content: {}", link.link_content(&ctx).to_string().bright_white());
    println!("  Rel:     {}", link.link_rel(&ctx).bright_black());

    Ok(ExitCode::SUCCESS)
}

fn evaluate_policy(
    config: &Config,
    policy: &str,
    token: Option<String>,
    known: &[String],
    path: String,
) -> Result<ExitCode> {
    let policy = AuthPolicy::from_json(policy)?;

    let mut ctx = Context::new(path);
    let store = Arc::new(MemoryTokenStore::new());
    let token_auth = config
        .token_signing_secret
        .as_ref()
        .map(|_| token_authenticator(config, store.clone()))
        .transpose()?;

    if let Some(ref auth) = token_auth {
        for known in known {
            store.insert(auth.hash_token(known));
        }
    }
    if let Some(token) = token {
        ctx.set_header("Authorization", format!("Bearer {token}"));
    }

    let auth = policy.build(token_auth.as_ref())?;

    match auth.authenticate(&ctx) {
        Ok(true) => {
            println!("{}", "ALLOW".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Ok(false) => {
            println!("{}", "DENY".red().bold());
            Ok(ExitCode::from(1))
        }
        Err(e) => {
            println!("{} {}", "ERROR".yellow().bold(), e);
            Ok(ExitCode::from(2))
        }
    }
}

fn token_authenticator(config: &Config, store: Arc<MemoryTokenStore>) -> Result<TokenAuthenticator> {
    let secret = config
        .token_signing_secret
        .clone()
        .context("TOKEN_SIGNING_SECRET must be set")?;

    let auth = TokenAuthenticator::new(store, secret);
    Ok(match config.token_cookie {
        Some(ref cookie) => auth.with_cookie(cookie.clone()),
        None => auth,
    })
}
