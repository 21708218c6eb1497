use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, HubitatClientError> {
    let client = Client::builder().timeout(config.request_timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum HubitatClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use std::time::Duration;

    #[tokio::test]
    async fn new_client_gives_up_on_a_hub_that_does_not_answer_in_time() -> Result<(), HubitatClientError> {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_chunked_body(|writer| {
                std::thread::sleep(Duration::from_millis(500));
                writer.write_all(b"[]")
            })
            .create_async()
            .await;

        let config = AppConfigBuilder::new().request_timeout(Duration::from_millis(50)).build();
        let client = new_client(&config)?;

        let result = client.get(format!("{}{}", server.url(), "/")).send().await;
        let result = match result {
            Ok(response) => response.bytes().await.map(|_| ()),
            Err(e) => Err(e),
        };

        assert!(result.is_err_and(|e| e.is_timeout()));

        Ok(())
    }
}
