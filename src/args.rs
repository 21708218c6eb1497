use clap::Parser;

/// Every flag falls back to the matching environment variable and then to the configuration files.
#[derive(Parser, Debug, Default)]
#[command(version, about = "Exports Hubitat device sensor readings as Prometheus metrics")]
pub struct Args {
    /// Address to listen on. Can also be specified via the LISTEN_ADDRESS environment variable.
    #[arg(long)]
    pub listen_address: Option<String>,

    /// Address of the Hubitat hub. Can also be specified via the HUBITAT_ADDRESS environment variable.
    #[arg(long)]
    pub hubitat_address: Option<String>,

    /// Access token for the Hubitat hub. Can also be specified via the HUBITAT_ACCESS_TOKEN environment variable.
    #[arg(long)]
    pub hubitat_access_token: Option<String>,

    /// Labels attached to every series, `with_name` or `without_name`. Can also be specified via the LABEL_SCHEMA
    /// environment variable.
    #[arg(long)]
    pub label_schema: Option<String>,

    /// Timeout for requests to the hub, e.g. `10s`. Can also be specified via the REQUEST_TIMEOUT environment variable.
    #[arg(long)]
    pub request_timeout: Option<String>,
}
