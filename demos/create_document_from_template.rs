//! Create a document from a template with one signer and one prefilled field.
//!
//! ```text
//! EVERSIGN_ACCESS_KEY=... EVERSIGN_BUSINESS_ID=... EVERSIGN_TEMPLATE_ID=... \
//! EVERSIGN_SIGNER_EMAIL=... EVERSIGN_FIELD_IDENTIFIER=... \
//!     cargo run --example create_document_from_template
//! ```

use anyhow::{Context, Result};
use eversign::{Client, Config, Field, Signer, Template};
use tracing_subscriber::EnvFilter;

fn env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{} must be set", name))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eversign=debug")))
        .init();

    let business_id: i64 = env("EVERSIGN_BUSINESS_ID")?
        .parse()
        .context("EVERSIGN_BUSINESS_ID must be a number")?;

    let mut client = Client::with_config(env("EVERSIGN_ACCESS_KEY")?, Config::from_env())?;
    client.set_selected_business_by_id(business_id);

    let mut template = Template::new(env("EVERSIGN_TEMPLATE_ID")?)
        .with_title("Form Test")
        .with_message("Test Message");

    // The signer fills the template's "Client" role
    template.append_signer(Signer::new("John Doe", env("EVERSIGN_SIGNER_EMAIL")?).with_role("Client"));
    template.append_field(Field::template_value(env("EVERSIGN_FIELD_IDENTIFIER")?, "value 1"));

    let document = client
        .create_document_from_template(&template)
        .context("failed to create document from template")?;

    println!("{}", document.document_hash.unwrap_or_default());
    Ok(())
}
