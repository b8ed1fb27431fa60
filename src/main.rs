use clap::Parser;
use endpoint_client::utils::{logger, validation::Validate};
use endpoint_client::{CliConfig, EndpointClient, EndpointError};

fn run(config: &CliConfig) -> Result<String, EndpointError> {
    config.validate()?;

    let port = config.resolve_port()?;
    tracing::debug!("Using endpoint on port {}", port);

    let client = EndpointClient::new(port)?;
    config.command.execute(&client)
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {:?} failed: {}", config.command, e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
