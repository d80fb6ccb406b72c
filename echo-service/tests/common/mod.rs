use echo_service::config::EchoConfig;
use echo_service::startup::Application;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(EchoConfig::default()).await
    }

    pub async fn spawn_with(mut config: EchoConfig) -> Self {
        // Random port for testing
        config.common.port = 0;

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to answer
        let client = reqwest::Client::new();
        let ready_url = format!("{}/test", address);
        for _ in 0..50 {
            if client.get(&ready_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_echo_raw(&self, body: &'static str) -> reqwest::Response {
        self.client
            .post(format!("{}/echo", self.address))
            .header("content-type", "application/json")
            .header("origin", TEST_ORIGIN)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_echo_json(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/echo", self.address))
            .header("origin", TEST_ORIGIN)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
