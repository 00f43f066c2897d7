use std::io;

use roident::RomanianValidator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(kind), Some(value)) = (args.next(), args.next()) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: validate_identifier <CUI|IBAN|ONRC|CNP> <VALUE>",
        )
        .into());
    };

    let result = RomanianValidator::default().validate_named(&kind, &value)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    for issue in result.issues() {
        eprintln!("{}: {:?}", issue.field, issue.kind);
    }

    Ok(())
}
