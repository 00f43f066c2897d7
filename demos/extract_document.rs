use std::io::{self, Read};

use roident::extract_identifiers;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let found = extract_identifiers(&text);
    if found.is_empty() {
        eprintln!("no identifiers found");
    }
    println!("{}", serde_json::to_string_pretty(&found)?);

    Ok(())
}
